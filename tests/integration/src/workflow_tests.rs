//! Workflows that build config trees at runtime
//!
//! These cover behaviour that depends on the state of the filesystem over
//! the lifetime of a resolver, and on sharing one resolver between threads.

use confstack_core::{EnvMode, EnvOverlay, Resolver};
use confstack_test_utils::ConfigTree;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::thread;

fn resolver_for(tree: &ConfigTree, env: Option<&str>) -> Resolver {
    Resolver::builder(tree.path("default"))
        .override_path(tree.path("override"))
        .env_mode(EnvMode::Fixed(env.map(str::to_string)))
        .build()
}

#[test]
fn test_cached_values_survive_file_edits() {
    let tree = ConfigTree::new();
    tree.json("default/app", &json!({"port": 8080}));
    let resolver = resolver_for(&tree, None);

    assert_eq!(resolver.get("app.port"), Some(json!(8080)));

    tree.json("default/app", &json!({"port": 1}));
    assert_eq!(resolver.get("app.port"), Some(json!(8080)));

    // A fresh resolver sees the new contents.
    assert_eq!(resolver_for(&tree, None).get("app.port"), Some(json!(1)));
}

#[test]
fn test_missing_files_stay_missing_for_resolver_lifetime() {
    let tree = ConfigTree::new();
    tree.json("default/app", &json!({"port": 8080}));
    let resolver = resolver_for(&tree, None);

    assert_eq!(resolver.get("app.port"), Some(json!(8080)));

    tree.json("override/app", &json!({"port": 9090}));
    assert_eq!(resolver.get("app.port"), Some(json!(8080)));
}

#[test]
fn test_mixed_formats_layer_in_order() {
    let tree = ConfigTree::new();
    tree.file("default/db.yaml", "host: localhost\nport: 5432\npool: 4\n")
        .file("override/db.toml", "host = \"db.internal\"\n")
        .json("override/db.test", &json!({"pool": 1}));

    let resolver = resolver_for(&tree, Some("test"));

    assert_eq!(resolver.get("db.host"), Some(json!("db.internal")));
    assert_eq!(resolver.get("db.port"), Some(json!(5432)));
    assert_eq!(resolver.get("db.pool"), Some(json!(1)));
}

#[test]
fn test_env_overlay_fallback_policy() {
    let tree = ConfigTree::new();
    tree.json("default/app", &json!({"port": 8080}))
        .json("default/app.production", &json!({"port": 443}));

    let strict = Resolver::builder(tree.path("default"))
        .env_mode(EnvMode::Fixed(Some("production".into())))
        .build();
    let fallback = Resolver::builder(tree.path("default"))
        .env_mode(EnvMode::Fixed(Some("production".into())))
        .env_overlay(EnvOverlay::FallbackToDefaultPath)
        .build();

    assert_eq!(strict.get("app.port"), Some(json!(8080)));
    assert_eq!(fallback.get("app.port"), Some(json!(443)));
}

#[test]
fn test_resolver_shared_across_threads() {
    let tree = ConfigTree::new();
    for i in 0..8 {
        tree.json(&format!("default/svc{i}"), &json!({"id": i + 1}));
    }
    let resolver = Arc::new(resolver_for(&tree, None));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let resolver = Arc::clone(&resolver);
            thread::spawn(move || {
                (0..50)
                    .map(|_| resolver.get(&format!("svc{i}.id")))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let results = handle.join().unwrap();
        assert!(results.iter().all(|v| *v == Some(json!(i + 1))));
    }

    // default and override candidate for each file
    assert_eq!(resolver.cached_files(), 16);
}

#[test]
fn test_redefining_a_namespace() {
    let tree = ConfigTree::new();
    tree.json("a/conn", &json!({"host": "a"}))
        .json("b/conn", &json!({"host": "b"}));

    let mut resolver = resolver_for(&tree, None);
    resolver
        .register_namespace("db", tree.path("a"), None)
        .unwrap();
    assert!(resolver.register_namespace("db", tree.path("b"), None).is_err());
    assert_eq!(resolver.get("db:conn.host"), Some(json!("a")));

    resolver.override_namespace("db", tree.path("b"), None);
    assert_eq!(resolver.get("db:conn.host"), Some(json!("b")));
}
