//! Inventory query against real desktop-entry trees.

use super::common::{launchable, no_display, unnamed, DataTree};
use app_inventory::{
    query_installed_applications, query_installed_applications_with, LabelFailurePolicy,
    QueryOptions,
};

fn names(entries: &[app_inventory::InventoryEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

#[test]
fn test_user_application_is_listed() {
    let tree = DataTree::new();
    tree.user_app("com.foo", &launchable("Foo"));

    let entries = query_installed_applications(&tree.registry()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Foo");
    assert_eq!(entries[0].identifier, "com.foo");
}

#[test]
fn test_user_application_listed_even_without_display() {
    let tree = DataTree::new();
    tree.user_app("com.quiet", &no_display("Quiet"));

    let entries = query_installed_applications(&tree.registry()).unwrap();
    assert_eq!(names(&entries), vec!["Quiet"]);
}

#[test]
fn test_system_application_without_launcher_is_excluded() {
    let tree = DataTree::new();
    tree.system_app("com.sys.daemon", &no_display("Daemon"));

    let entries = query_installed_applications(&tree.registry()).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_system_application_with_launcher_is_listed() {
    let tree = DataTree::new();
    tree.system_app("com.sys.clock", &launchable("Clock"));

    let entries = query_installed_applications(&tree.registry()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Clock");
    assert_eq!(entries[0].identifier, "com.sys.clock");
}

#[test]
fn test_sorted_case_insensitively_across_roots() {
    let tree = DataTree::new();
    tree.user_app("fruit.banana", &launchable("banana"))
        .system_app("fruit.apple", &launchable("Apple"))
        .system_app("fruit.cherry", &launchable("Cherry"));

    let entries = query_installed_applications(&tree.registry()).unwrap();
    assert_eq!(names(&entries), vec!["Apple", "banana", "Cherry"]);
}

#[test]
fn test_user_entry_overrides_system_label() {
    let tree = DataTree::new();
    tree.user_app("org.editor", &launchable("My Editor"))
        .system_app("org.editor", &launchable("Editor"));

    let entries = query_installed_applications(&tree.registry()).unwrap();
    assert_eq!(names(&entries), vec!["My Editor"]);
}

#[test]
fn test_localized_names() {
    let tree = DataTree::new();
    tree.user_app(
        "org.files",
        "[Desktop Entry]\nType=Application\nName=Files\nName[de]=Dateien\nExec=files\n",
    );

    let entries = query_installed_applications(&tree.registry_with_locale("de_DE.UTF-8")).unwrap();
    assert_eq!(names(&entries), vec!["Dateien"]);

    let entries = query_installed_applications(&tree.registry_with_locale("fr_FR")).unwrap();
    assert_eq!(names(&entries), vec!["Files"]);
}

#[test]
fn test_malformed_entry_fails_whole_query() {
    let tree = DataTree::new();
    tree.user_app("com.good", &launchable("Good"))
        .system_app("com.bad", "this is not a desktop entry\n");

    let err = query_installed_applications(&tree.registry()).unwrap_err();
    assert!(!err.is_label_error());
}

#[test]
fn test_label_failure_policies() {
    let tree = DataTree::new();
    tree.user_app("com.named", &launchable("Named"))
        .user_app("com.mystery", &unnamed());
    let registry = tree.registry();

    let err = query_installed_applications(&registry).unwrap_err();
    assert!(err.is_label_error());

    let skip = QueryOptions::default().with_label_failure(LabelFailurePolicy::Skip);
    let entries = query_installed_applications_with(&registry, &skip).unwrap();
    assert_eq!(names(&entries), vec!["Named"]);

    let fallback = QueryOptions::default().with_label_failure(LabelFailurePolicy::UseIdentifier);
    let entries = query_installed_applications_with(&registry, &fallback).unwrap();
    assert_eq!(names(&entries), vec!["com.mystery", "Named"]);
}

#[test]
fn test_empty_tree_yields_empty_inventory() {
    let tree = DataTree::new();
    let entries = query_installed_applications(&tree.registry()).unwrap();
    assert!(entries.is_empty());
}
