//! The platform application registry seam.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An installed application as reported by a registry.
///
/// Records are read-only snapshots. `metadata` carries whatever the registry
/// needs to later answer [`ApplicationRegistry::has_launch_entry`] and
/// [`ApplicationRegistry::resolve_label`] for this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    /// Unique, stable application identifier.
    pub identifier: String,
    /// Whether the application is provided by the system rather than the user.
    pub is_system: bool,
    /// Registry-specific attributes of the record.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl ApplicationRecord {
    pub fn new(identifier: impl Into<String>, is_system: bool) -> Self {
        Self {
            identifier: identifier.into(),
            is_system,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Source of installed-application records.
///
/// Every method is a blocking platform call. Implementations must report
/// identifiers that are unique within one `installed_applications` result.
pub trait ApplicationRegistry: Send + Sync {
    /// Enumerate every installed application.
    fn installed_applications(&self) -> Result<Vec<ApplicationRecord>>;

    /// Whether the application exposes a user-facing entry point.
    fn has_launch_entry(&self, record: &ApplicationRecord) -> Result<bool>;

    /// Resolve the human-readable label of the application.
    fn resolve_label(&self, record: &ApplicationRecord) -> Result<String>;
}

impl<R: ApplicationRegistry + ?Sized> ApplicationRegistry for Arc<R> {
    fn installed_applications(&self) -> Result<Vec<ApplicationRecord>> {
        (**self).installed_applications()
    }

    fn has_launch_entry(&self, record: &ApplicationRecord) -> Result<bool> {
        (**self).has_launch_entry(record)
    }

    fn resolve_label(&self, record: &ApplicationRecord) -> Result<String> {
        (**self).resolve_label(record)
    }
}

impl<R: ApplicationRegistry + ?Sized> ApplicationRegistry for Box<R> {
    fn installed_applications(&self) -> Result<Vec<ApplicationRecord>> {
        (**self).installed_applications()
    }

    fn has_launch_entry(&self, record: &ApplicationRecord) -> Result<bool> {
        (**self).has_launch_entry(record)
    }

    fn resolve_label(&self, record: &ApplicationRecord) -> Result<String> {
        (**self).resolve_label(record)
    }
}
