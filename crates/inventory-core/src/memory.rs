//! A fixed, in-process application registry.
//!
//! Useful when the host already knows its application set (or for tests).
//! Failures can be injected at each platform call.

use crate::error::{Error, Result};
use crate::registry::{ApplicationRecord, ApplicationRegistry};

#[derive(Debug, Clone)]
struct MemoryApp {
    identifier: String,
    label: Option<String>,
    is_system: bool,
    launchable: bool,
}

/// Registry backed by a list of applications held in memory.
///
/// Enumeration order is insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    apps: Vec<MemoryApp>,
    enumeration_failure: Option<String>,
    launch_failure: Option<String>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user-installed application.
    pub fn with_app(mut self, identifier: impl Into<String>, label: impl Into<String>) -> Self {
        self.apps.push(MemoryApp {
            identifier: identifier.into(),
            label: Some(label.into()),
            is_system: false,
            launchable: true,
        });
        self
    }

    /// Add a system application, with or without a launch entry.
    pub fn with_system_app(
        mut self,
        identifier: impl Into<String>,
        label: impl Into<String>,
        launchable: bool,
    ) -> Self {
        self.apps.push(MemoryApp {
            identifier: identifier.into(),
            label: Some(label.into()),
            is_system: true,
            launchable,
        });
        self
    }

    /// Add a user application whose label cannot be resolved.
    pub fn with_unlabeled_app(mut self, identifier: impl Into<String>) -> Self {
        self.apps.push(MemoryApp {
            identifier: identifier.into(),
            label: None,
            is_system: false,
            launchable: true,
        });
        self
    }

    /// Make enumeration fail with the given platform message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.enumeration_failure = Some(message.into());
        self
    }

    /// Make every launch-entry lookup fail with the given platform message.
    pub fn failing_launch_lookup(mut self, message: impl Into<String>) -> Self {
        self.launch_failure = Some(message.into());
        self
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    fn find(&self, identifier: &str) -> Option<&MemoryApp> {
        self.apps.iter().find(|app| app.identifier == identifier)
    }
}

impl ApplicationRegistry for InMemoryRegistry {
    fn installed_applications(&self) -> Result<Vec<ApplicationRecord>> {
        if let Some(message) = &self.enumeration_failure {
            return Err(Error::registry(message.clone()));
        }
        Ok(self
            .apps
            .iter()
            .map(|app| ApplicationRecord::new(app.identifier.clone(), app.is_system))
            .collect())
    }

    fn has_launch_entry(&self, record: &ApplicationRecord) -> Result<bool> {
        if let Some(message) = &self.launch_failure {
            return Err(Error::launch_info(&record.identifier, message.clone()));
        }
        Ok(self
            .find(&record.identifier)
            .is_some_and(|app| app.launchable))
    }

    fn resolve_label(&self, record: &ApplicationRecord) -> Result<String> {
        self.find(&record.identifier)
            .and_then(|app| app.label.clone())
            .ok_or_else(|| Error::label(&record.identifier, "no label"))
    }
}
