//! Resolution against the checked-in fixture tree
//!
//! `test-fixtures/configs` mixes JSON, TOML and YAML files across a default
//! directory, an override directory and a `plugins` namespace, so these
//! tests exercise the whole stack from format probing to key walking.

use confstack_core::{EnvMode, Error, NormalizedPath, Resolver};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn fixtures() -> NormalizedPath {
    NormalizedPath::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/configs")
}

/// Resolver over the fixture tree with a fixed environment mode.
fn fixture_resolver(env: Option<&str>) -> Resolver {
    let root = fixtures();
    let mut resolver = Resolver::builder(root.join("default"))
        .override_path(root.join("override"))
        .env_mode(EnvMode::Fixed(env.map(str::to_string)))
        .build();
    resolver
        .register_namespace(
            "plugins",
            root.join("plugins/default"),
            Some(root.join("plugins/override")),
        )
        .unwrap();
    resolver
}

#[test]
fn test_default_only_resolver_reads_json() {
    let root = fixtures();
    let resolver = Resolver::builder(root.join("default"))
        .env_mode(EnvMode::Fixed(None))
        .build();

    assert_eq!(resolver.get("app.port"), Some(json!(8080)));
    assert_eq!(resolver.get("app.log.level"), Some(json!("info")));
}

#[test]
fn test_toml_override_wins() {
    let resolver = fixture_resolver(None);

    assert_eq!(resolver.get("app.port"), Some(json!(9090)));
    assert_eq!(resolver.get("app.name"), Some(json!("fixture-app")));
}

#[test]
fn test_merge_is_shallow() {
    let resolver = fixture_resolver(None);

    // The override's `log` table replaces the default one wholesale.
    assert_eq!(resolver.get("app.log.level"), Some(json!("debug")));
    assert_eq!(resolver.get("app.log.file"), None);
}

#[test]
fn test_yaml_environment_overlay() {
    let resolver = fixture_resolver(Some("production"));

    assert_eq!(resolver.get("app.port"), Some(json!(443)));
    assert_eq!(resolver.get("app.debug"), Some(json!(true)));
    assert_eq!(resolver.get("app.log.level"), Some(json!("debug")));
}

#[test]
fn test_unknown_environment_adds_nothing() {
    let resolver = fixture_resolver(Some("qa"));

    assert_eq!(resolver.get("app.port"), Some(json!(9090)));
}

#[test]
fn test_falsy_fixture_values_fall_back() {
    let resolver = fixture_resolver(None);

    assert_eq!(resolver.get_or("app.debug", "fallback"), json!("fallback"));
    assert_eq!(resolver.get_or("app.retries", 3), json!(3));
    assert_eq!(resolver.get_or("app.banner", "hi"), json!("hi"));
}

#[test]
fn test_falsy_fixture_values_kept_when_opted_out() {
    let root = fixtures();
    let resolver = Resolver::builder(root.join("default"))
        .env_mode(EnvMode::Fixed(None))
        .falsy_as_absent(false)
        .build();

    assert_eq!(resolver.get_or("app.debug", true), json!(false));
    assert_eq!(resolver.get_or("app.retries", 3), json!(0));
    assert_eq!(resolver.get_or("app.banner", "hi"), json!(""));
}

#[test]
fn test_array_elements_by_index() {
    let resolver = fixture_resolver(None);

    assert_eq!(resolver.get("app.hosts.1"), Some(json!("beta")));
    assert_eq!(resolver.get("app.hosts.2"), None);
    assert_eq!(
        resolver.get("app.hosts"),
        Some(Value::Array(vec![json!("alpha"), json!("beta")]))
    );
}

#[test]
fn test_nested_directory_with_yml_and_json() {
    let resolver = fixture_resolver(None);

    assert_eq!(resolver.get("services/billing.queue.retries"), Some(json!(5)));
    assert_eq!(resolver.get("services/billing.currency"), Some(json!("USD")));
}

#[test]
fn test_index_file_in_directory() {
    let resolver = fixture_resolver(None);

    assert_eq!(resolver.get("feature.enabled"), Some(json!(true)));
    assert_eq!(resolver.get("feature.rollout"), Some(json!(25)));
}

#[test]
fn test_namespace_with_environment() {
    let resolver = fixture_resolver(Some("staging"));

    assert_eq!(resolver.get("plugins:cache.backend"), Some(json!("redis")));
    assert_eq!(resolver.get("plugins:cache.ttl"), Some(json!(5)));
}

#[test]
fn test_unusable_files_are_empty_layers() {
    let resolver = fixture_resolver(None);

    assert_eq!(resolver.get("empty.anything"), None);
    assert_eq!(resolver.get("broken.broken"), None);
    assert_eq!(resolver.get("list.0"), None);
    assert_eq!(resolver.get_or("broken.broken", "still works"), json!("still works"));
}

#[test]
fn test_unregistered_namespace() {
    let resolver = fixture_resolver(None);

    assert_eq!(resolver.get_or("ghost:app.port", 1), json!(1));
    assert!(matches!(
        resolver.try_get("ghost:app.port"),
        Err(Error::NamespaceNotRegistered { .. })
    ));
}

#[test]
fn test_whole_file_merged() {
    let resolver = fixture_resolver(Some("production"));

    let merged = resolver.merged("app").unwrap();
    assert_eq!(
        Value::Object(merged),
        json!({
            "name": "fixture-app",
            "port": 443,
            "debug": true,
            "retries": 0,
            "banner": "",
            "log": { "level": "debug" },
            "hosts": ["alpha", "beta"]
        })
    );
}

#[test]
fn test_files_loaded_once() {
    let resolver = fixture_resolver(None);

    resolver.get("app.port");
    let after_first = resolver.cached_files();
    resolver.get("app.name");
    resolver.get("app.log.level");

    assert_eq!(after_first, 2);
    assert_eq!(resolver.cached_files(), after_first);
}
