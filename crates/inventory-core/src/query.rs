//! The installed-application inventory query.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::config::{LabelFailurePolicy, QueryOptions};
use crate::error::Result;
use crate::registry::ApplicationRegistry;

/// One launchable installed application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Display label.
    pub name: String,
    /// Identifier of the record this entry was produced from.
    pub identifier: String,
}

/// List installed applications with default options.
///
/// See [`query_installed_applications_with`].
pub fn query_installed_applications<R>(registry: &R) -> Result<Vec<InventoryEntry>>
where
    R: ApplicationRegistry + ?Sized,
{
    query_installed_applications_with(registry, &QueryOptions::default())
}

/// List installed applications, sorted by case-insensitive name.
///
/// System applications without a launch entry are left out. Ties keep the
/// registry's enumeration order.
///
/// A failure enumerating the registry or looking up launchability fails the
/// whole query. A failure resolving one label is handled according to
/// `options.label_failure`.
#[instrument(skip_all, fields(label_failure = ?options.label_failure))]
pub fn query_installed_applications_with<R>(
    registry: &R,
    options: &QueryOptions,
) -> Result<Vec<InventoryEntry>>
where
    R: ApplicationRegistry + ?Sized,
{
    let records = registry.installed_applications()?;
    debug!(records = records.len(), "enumerated installed applications");

    let mut entries = Vec::with_capacity(records.len());
    for record in &records {
        if record.is_system && !registry.has_launch_entry(record)? {
            trace!(identifier = %record.identifier, "skipping system application without launch entry");
            continue;
        }

        let name = match registry.resolve_label(record) {
            Ok(label) => label,
            Err(err) => match options.label_failure {
                LabelFailurePolicy::Abort => return Err(err),
                LabelFailurePolicy::Skip => {
                    warn!(identifier = %record.identifier, error = %err, "skipping application with unresolvable label");
                    continue;
                }
                LabelFailurePolicy::UseIdentifier => {
                    warn!(identifier = %record.identifier, error = %err, "using identifier as label");
                    record.identifier.clone()
                }
            },
        };

        entries.push(InventoryEntry {
            name,
            identifier: record.identifier.clone(),
        });
    }

    // sort_by_cached_key is stable
    entries.sort_by_cached_key(|entry| entry.name.to_lowercase());
    debug!(entries = entries.len(), "inventory complete");
    Ok(entries)
}
