//! Paths command implementation

use colored::Colorize;
use confstack_core::Resolver;
use confstack_fs::ConfigStore;
use serde::Serialize;

use crate::error::Result;

/// Machine-readable form of `confstack paths --json`.
#[derive(Debug, Serialize)]
struct PathsReport<'a> {
    namespace: &'a str,
    key_path: &'a [String],
    layers: Vec<LayerReport>,
}

#[derive(Debug, Serialize)]
struct LayerReport {
    layer: &'static str,
    path: String,
    /// The file that would be read, if any exists.
    file: Option<String>,
    format: Option<&'static str>,
}

/// Show the candidate files for `key` and which of them exist on disk.
pub fn run_paths(resolver: &Resolver, key: &str, json: bool) -> Result<()> {
    let paths = resolver.resolve_paths(key)?;
    let store = ConfigStore::new();

    let layers: Vec<LayerReport> = [
        ("default", Some(&paths.default_path)),
        ("override", paths.override_path.as_ref()),
        ("env", paths.env_path.as_ref()),
    ]
    .into_iter()
    .filter_map(|(layer, path)| path.map(|p| (layer, p)))
    .map(|(layer, path)| {
        let located = store.locate(path);
        LayerReport {
            layer,
            path: path.as_str().to_string(),
            file: located.as_ref().map(|(file, _)| file.as_str().to_string()),
            format: located.map(|(_, format)| format.id()),
        }
    })
    .collect();

    if json {
        let report = PathsReport {
            namespace: &paths.namespace,
            key_path: &paths.key_path,
            layers,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}:  {}", "Namespace".dimmed(), paths.namespace.cyan());
    println!("{}:   {}", "Key path".dimmed(), paths.key_path.join("."));
    println!();

    for layer in &layers {
        match (&layer.file, layer.format) {
            (Some(file), Some(format)) => println!(
                "  {} {:<9} {} ({})",
                "+".green(),
                layer.layer,
                file,
                format
            ),
            _ => println!(
                "  {} {:<9} {} {}",
                "-".dimmed(),
                layer.layer,
                layer.path,
                "(missing)".dimmed()
            ),
        }
    }

    Ok(())
}
