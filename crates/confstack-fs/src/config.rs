//! Format-agnostic configuration loading
//!
//! Config files are addressed without an extension (`config/app`), the way
//! a module loader resolves `require("config/app")`. [`ConfigStore`] probes
//! the supported extensions and parses the first match into a value tree.

use crate::{Error, NormalizedPath, Result, io};
use serde_json::Value;

/// A configuration object: the top level of a config file.
pub type ConfigObject = serde_json::Map<String, Value>;

/// Supported on-disk config formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// All formats in default probing order.
    pub const ALL: [ConfigFormat; 3] = [Self::Json, Self::Toml, Self::Yaml];

    /// File extensions recognised for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Json => &["json"],
            Self::Toml => &["toml"],
            Self::Yaml => &["yaml", "yml"],
        }
    }

    /// Detect the format from a file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Lowercase identifier, matching the primary extension.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        }
    }

    /// Human readable format name used in errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }
}

/// Format-agnostic configuration store.
///
/// Automatically detects format from file extension and handles
/// deserialization into [`serde_json::Value`] transparently.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    formats: Vec<ConfigFormat>,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self {
            formats: ConfigFormat::ALL.to_vec(),
        }
    }
}

impl ConfigStore {
    /// Create a new ConfigStore probing JSON, TOML, then YAML.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ConfigStore that only probes the given formats, in order.
    pub fn with_formats(formats: impl IntoIterator<Item = ConfigFormat>) -> Self {
        Self {
            formats: formats.into_iter().collect(),
        }
    }

    /// Find the file backing an extensionless config path.
    ///
    /// Probing order:
    /// 1. `base` itself, when it already carries a supported extension
    /// 2. `base.<ext>` for each format
    /// 3. `base/index.<ext>` for each format
    pub fn locate(&self, base: &NormalizedPath) -> Option<(NormalizedPath, ConfigFormat)> {
        if let Some(format) = base
            .extension()
            .and_then(ConfigFormat::from_extension)
            .filter(|f| self.formats.contains(f))
        {
            if base.is_file() {
                return Some((base.clone(), format));
            }
        }

        let index = base.join("index");
        [base, &index].into_iter().find_map(|stem| {
            self.formats.iter().find_map(|format| {
                format.extensions().iter().find_map(|ext| {
                    let candidate = stem.with_suffix(&format!(".{ext}"));
                    candidate.is_file().then_some((candidate, *format))
                })
            })
        })
    }

    /// Load the configuration object addressed by `base`.
    ///
    /// Fails with [`Error::NotFound`] when no candidate file exists.
    pub fn load(&self, base: &NormalizedPath) -> Result<ConfigObject> {
        let (path, format) = self.locate(base).ok_or_else(|| Error::NotFound {
            path: base.to_native(),
        })?;
        tracing::debug!(%path, format = format.name(), "Loading config file");
        self.load_file(&path, format)
    }

    /// Load a specific file in a known format.
    pub fn load_file(&self, path: &NormalizedPath, format: ConfigFormat) -> Result<ConfigObject> {
        let content = io::read_text(path)?;
        parse(&content, format, path)
    }
}

/// Parse config text into a top-level object.
///
/// Whitespace-only content is an empty object in every format.
pub fn parse(content: &str, format: ConfigFormat, path: &NormalizedPath) -> Result<ConfigObject> {
    if content.trim().is_empty() {
        return Ok(ConfigObject::new());
    }

    let parse_error = |message: String| Error::ConfigParse {
        path: path.to_native(),
        format: format.name().into(),
        message,
    };

    let value: Value = match format {
        ConfigFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        ConfigFormat::Toml => toml::from_str::<toml::Table>(content)
            .map(|table| toml_to_json(toml::Value::Table(table)))
            .map_err(|e| parse_error(e.to_string()))?,
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        }
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject {
            path: path.to_native(),
        }),
    }
}

/// Convert a TOML tree to JSON values.
///
/// Datetimes become their RFC 3339 text and non-finite floats become `null`.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}
