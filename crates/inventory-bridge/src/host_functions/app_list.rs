//! App list host function handlers.
use super::error::sanitize_inventory_error;
use app_inventory_core::{query_installed_applications_with, ApplicationRegistry, QueryOptions};
use app_inventory_types::*;

/// List installed applications, sorted by case-insensitive name.
pub(crate) fn handle_get_installed_apps<R>(
    registry: &R,
    options: &QueryOptions,
) -> MethodResult<InstalledAppsResponse>
where
    R: ApplicationRegistry + ?Sized,
{
    match query_installed_applications_with(registry, options) {
        Ok(entries) => MethodResult::success(
            entries
                .into_iter()
                .map(|entry| AppInfo {
                    name: entry.name,
                    package_name: entry.identifier,
                })
                .collect(),
        ),
        Err(e) => MethodResult::Error(sanitize_inventory_error(&e)),
    }
}
