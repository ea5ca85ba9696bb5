//! Properties of the inventory query over arbitrary registry contents.

use std::collections::HashSet;

use app_inventory_core::{
    query_installed_applications, query_installed_applications_with, InMemoryRegistry,
    LabelFailurePolicy, QueryOptions,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct App {
    label: String,
    is_system: bool,
    launchable: bool,
}

fn app_strategy() -> impl Strategy<Value = App> {
    ("[a-zA-Z][a-zA-Z ]{0,8}", any::<bool>(), any::<bool>()).prop_map(
        |(label, is_system, launchable)| App {
            label,
            is_system,
            launchable,
        },
    )
}

/// Identifiers are the index, which keeps them unique.
fn build_registry(apps: &[App]) -> InMemoryRegistry {
    apps.iter()
        .enumerate()
        .fold(InMemoryRegistry::new(), |registry, (i, app)| {
            let id = format!("app.{i}");
            if app.is_system {
                registry.with_system_app(id, app.label.clone(), app.launchable)
            } else {
                registry.with_app(id, app.label.clone())
            }
        })
}

fn visible(app: &App) -> bool {
    !app.is_system || app.launchable
}

proptest! {
    #[test]
    fn output_is_sound_and_complete(apps in prop::collection::vec(app_strategy(), 0..24)) {
        let registry = build_registry(&apps);
        let entries = query_installed_applications(&registry).unwrap();

        let expected: HashSet<String> = apps
            .iter()
            .enumerate()
            .filter(|(_, app)| visible(app))
            .map(|(i, _)| format!("app.{i}"))
            .collect();
        let ids: Vec<&str> = entries.iter().map(|e| e.identifier.as_str()).collect();
        let unique: HashSet<String> = ids.iter().map(|id| id.to_string()).collect();

        prop_assert_eq!(ids.len(), unique.len());
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn system_apps_without_launcher_never_appear(apps in prop::collection::vec(app_strategy(), 0..24)) {
        let registry = build_registry(&apps);
        let entries = query_installed_applications(&registry).unwrap();

        for entry in &entries {
            let index: usize = entry.identifier["app.".len()..].parse().unwrap();
            prop_assert!(visible(&apps[index]));
            prop_assert_eq!(&entry.name, &apps[index].label);
        }
    }

    #[test]
    fn output_is_sorted_case_insensitively(apps in prop::collection::vec(app_strategy(), 0..24)) {
        let registry = build_registry(&apps);
        let entries = query_installed_applications(&registry).unwrap();

        for pair in entries.windows(2) {
            prop_assert!(pair[0].name.to_lowercase() <= pair[1].name.to_lowercase());
        }
    }

    #[test]
    fn repeated_queries_agree(apps in prop::collection::vec(app_strategy(), 0..24)) {
        let registry = build_registry(&apps);
        let first = query_installed_applications(&registry).unwrap();
        let second = query_installed_applications(&registry).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn skip_policy_only_drops_unlabeled(
        apps in prop::collection::vec(app_strategy(), 0..16),
        broken in 0usize..4,
    ) {
        let registry = (0..broken).fold(build_registry(&apps), |registry, i| {
            registry.with_unlabeled_app(format!("broken.{i}"))
        });
        let options = QueryOptions::default().with_label_failure(LabelFailurePolicy::Skip);
        let entries = query_installed_applications_with(&registry, &options).unwrap();

        let expected = apps.iter().filter(|app| visible(app)).count();
        prop_assert_eq!(entries.len(), expected);
        prop_assert!(entries.iter().all(|e| !e.identifier.starts_with("broken.")));
    }
}
