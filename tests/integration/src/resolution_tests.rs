//! End-to-end resolution scenarios across the workspace crates.
//!
//! These exercise the complete flow: source discovery -> precedence
//! merge -> propagation and token derivation, over real files in a
//! temp tree and injected process state.

use props_core::{PropertyResolver, SourceKind, SourceLoader};
use props_test_utils::{FakeProcessState, PropertyTree};
use std::collections::HashMap;

/// A three-level project tree with property files at every level plus
/// home/user globals.
fn setup_tree() -> PropertyTree {
    let tree = PropertyTree::new();
    tree.write_properties("home/gradle.properties", &[("origin", "home"), ("h", "1")]);
    tree.write_properties(
        "home/.gradle/gradle.properties",
        &[("origin", "user"), ("u", "1")],
    );
    tree.write_properties(
        "ws/gradle.properties",
        &[("origin", "root"), ("a", "1"), ("shared", "root")],
    );
    tree.write_properties(
        "ws/lib/gradle.properties",
        &[("origin", "lib"), ("a", "2")],
    );
    tree.write_properties(
        "ws/lib/impl/gradle.properties",
        &[("origin", "impl")],
    );
    tree
}

#[test]
fn deep_tree_resolves_with_nearest_ancestor_winning() {
    let tree = setup_tree();
    let resolver =
        PropertyResolver::with_state(FakeProcessState::new()).with_home_dir(tree.home());

    let root = tree.node("ws");
    let lib = root.child(tree.dir("ws/lib"));
    let impl_node = lib.child(tree.dir("ws/lib/impl"));

    let resolved = resolver.resolve(&impl_node).unwrap();

    assert_eq!(resolved.get("origin"), Some("impl"));
    assert_eq!(resolved.get("a"), Some("2"));
    assert_eq!(resolved.get("shared"), Some("root"));
    assert_eq!(resolved.get("h"), Some("1"));
    assert_eq!(resolved.get("u"), Some("1"));
}

#[test]
fn full_precedence_chain_across_source_categories() {
    let tree = setup_tree();
    tree.write_properties("ws/gradle-ci.properties", &[("origin", "env-file")]);

    let state = FakeProcessState::new()
        .with_env_var("ORG_GRADLE_PROJECT_origin", "env-var")
        .with_system_property("org.gradle.project.origin", "sys-prop");
    let resolver = PropertyResolver::with_state(state)
        .with_home_dir(tree.home())
        .with_overrides(HashMap::from([(
            "origin".to_string(),
            "cli".to_string(),
        )]));

    let node = tree.node("ws").with_environment("ci");
    let resolved = resolver.resolve(&node).unwrap();

    // command line outranks sys-prop, env-var, env-file, and every file
    assert_eq!(resolved.get("origin"), Some("cli"));
}

#[test]
fn propagation_and_tokens_across_a_tree() {
    let tree = PropertyTree::new();
    tree.write_properties(
        "ws/gradle.properties",
        &[("systemProp.d", "5"), ("name", "demo")],
    );

    let resolver =
        PropertyResolver::with_state(FakeProcessState::new()).with_home_dir(tree.home());
    let node = tree.node("ws");
    let resolved = resolver.resolve(&node).unwrap();
    let tokens = resolver.filter_tokens(&node).unwrap();

    assert_eq!(resolved.get("systemProp.d"), Some("5"));
    assert_eq!(tokens.get("name").map(String::as_str), Some("demo"));
    assert!(!tokens.contains_key("systemProp.d"));
}

#[test]
fn loader_reports_every_source_kind_for_a_child_node() {
    let tree = setup_tree();
    let state = FakeProcessState::new();
    let overrides = HashMap::new();
    let home = tree.home();
    let loader = SourceLoader::new(Some(home.as_path()), &state, &overrides);

    let node = tree.node("ws").child(tree.dir("ws/lib"));
    let layers = loader.load(&node).unwrap();
    let kinds: Vec<SourceKind> = layers.iter().map(|l| l.kind()).collect();

    assert_eq!(
        kinds,
        vec![
            SourceKind::ParentFile,
            SourceKind::ParentEnvFile,
            SourceKind::HomeFile,
            SourceKind::UserFile,
            SourceKind::ProjectFile,
            SourceKind::ProjectEnvFile,
            SourceKind::EnvironmentVar,
            SourceKind::SystemProp,
            SourceKind::CommandLine,
        ]
    );
}

#[test]
fn repeated_resolution_of_an_unchanged_tree_is_identical() {
    let tree = setup_tree();
    let resolver =
        PropertyResolver::with_state(FakeProcessState::new()).with_home_dir(tree.home());
    let node = tree.node("ws").child(tree.dir("ws/lib"));

    let first = resolver.resolve(&node).unwrap();
    let second = resolver.resolve(&node).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn malformed_ancestor_file_surfaces_the_parse_error() {
    let tree = PropertyTree::new();
    tree.write_raw("ws/gradle.properties", "key-without-value\n");
    tree.write_properties("ws/app/gradle.properties", &[("a", "1")]);

    let resolver =
        PropertyResolver::with_state(FakeProcessState::new()).with_home_dir(tree.home());
    let node = tree.node("ws").child(tree.dir("ws/app"));

    let err = resolver.resolve(&node).unwrap_err();
    match err {
        props_core::Error::Fs(props_fs::Error::Parse { path, line, .. }) => {
            assert!(path.ends_with("ws/gradle.properties"));
            assert_eq!(line, 1);
        }
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn required_property_failure_is_not_absorbed() {
    let tree = PropertyTree::new();
    let resolver =
        PropertyResolver::with_state(FakeProcessState::new()).with_home_dir(tree.home());

    let resolved = resolver.resolve(&tree.node("ws")).unwrap();
    let err = resolved.require("missingKey").unwrap_err();

    assert!(matches!(
        err,
        props_core::Error::RequiredProperty { ref key } if key == "missingKey"
    ));
}
