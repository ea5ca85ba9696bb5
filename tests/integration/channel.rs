//! End-to-end method channel tests: registry -> channel -> wire JSON.

use std::sync::Arc;

use super::common::{launchable, no_display, DataTree};
use app_inventory::{
    app_list_channel, error_codes, method_names, AppInfo, InMemoryRegistry, MethodCall,
    MethodResult, QueryOptions, CHANNEL,
};
use serde_json::json;

fn channel_over(tree: &DataTree) -> Arc<app_inventory::MethodChannel> {
    Arc::new(app_list_channel(tree.registry(), QueryOptions::default()))
}

fn apps(result: MethodResult<serde_json::Value>) -> Vec<AppInfo> {
    match result {
        MethodResult::Success(value) => serde_json::from_value(value).unwrap(),
        other => panic!("expected success, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_installed_apps_over_desktop_entries() {
    let tree = DataTree::new();
    tree.user_app("com.foo", &launchable("Foo"))
        .system_app("com.sys.clock", &launchable("Clock"))
        .system_app("com.sys.daemon", &no_display("Daemon"));

    let result = channel_over(&tree)
        .dispatch(MethodCall::new(method_names::GET_INSTALLED_APPS))
        .await
        .unwrap();

    let apps = apps(result);
    assert_eq!(
        apps,
        vec![
            AppInfo {
                name: "Clock".into(),
                package_name: "com.sys.clock".into()
            },
            AppInfo {
                name: "Foo".into(),
                package_name: "com.foo".into()
            },
        ]
    );
}

#[tokio::test]
async fn test_success_wire_shape() {
    let tree = DataTree::new();
    tree.user_app("com.foo", &launchable("Foo"));

    let result = channel_over(&tree)
        .dispatch(MethodCall::new(method_names::GET_INSTALLED_APPS))
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({ "success": [{ "name": "Foo", "packageName": "com.foo" }] })
    );
}

#[tokio::test]
async fn test_registry_failure_is_an_error_not_a_partial_list() {
    let tree = DataTree::new();
    tree.user_app("com.good", &launchable("Good"))
        .system_app("com.bad", "garbage\n");

    let result = channel_over(&tree)
        .dispatch(MethodCall::new(method_names::GET_INSTALLED_APPS))
        .await
        .unwrap();

    match result {
        MethodResult::Error(err) => {
            assert_eq!(err.code, error_codes::APP_LIST_ERROR);
            assert_eq!(err.message, "Failed to get installed apps");
            assert!(err.detail.is_some());
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_method_is_not_implemented() {
    let channel = Arc::new(app_list_channel(
        InMemoryRegistry::new().with_app("com.foo", "Foo"),
        QueryOptions::default(),
    ));

    let result = channel
        .dispatch(MethodCall::new("doSomethingElse"))
        .await
        .unwrap();

    assert!(result.is_not_implemented());
    assert!(!result.is_error());
}

#[tokio::test]
async fn test_arguments_are_ignored() {
    let channel = Arc::new(app_list_channel(
        InMemoryRegistry::new().with_app("com.foo", "Foo"),
        QueryOptions::default(),
    ));

    let call = MethodCall::with_arguments(
        method_names::GET_INSTALLED_APPS,
        json!({ "includeSystemApps": false }),
    );
    let apps = apps(channel.dispatch(call).await.unwrap());
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].package_name, "com.foo");
}

#[tokio::test]
async fn test_concurrent_dispatches_agree() {
    let channel = Arc::new(app_list_channel(
        InMemoryRegistry::new()
            .with_app("b", "banana")
            .with_app("a", "Apple"),
        QueryOptions::default(),
    ));

    let first = tokio::spawn(
        channel
            .clone()
            .dispatch(MethodCall::new(method_names::GET_INSTALLED_APPS)),
    );
    let second = tokio::spawn(
        channel
            .clone()
            .dispatch(MethodCall::new(method_names::GET_INSTALLED_APPS)),
    );

    let first = apps(first.await.unwrap().unwrap());
    let second = apps(second.await.unwrap().unwrap());
    assert_eq!(first, second);
    assert_eq!(first[0].name, "Apple");
}

#[test]
fn test_channel_name() {
    let channel = app_list_channel(InMemoryRegistry::new(), QueryOptions::default());
    assert_eq!(channel.name(), CHANNEL);
    assert!(channel.has_method(method_names::GET_INSTALLED_APPS));
}
