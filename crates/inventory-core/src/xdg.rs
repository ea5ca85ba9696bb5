//! Installed applications from freedesktop desktop entries.
//!
//! Scans `$XDG_DATA_HOME/applications` and each `$XDG_DATA_DIRS/applications`
//! in precedence order. The first directory defining a desktop-file id wins,
//! so user entries shadow system ones and identifiers are unique.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

use tracing::{debug, instrument, trace};
use walkdir::WalkDir;

use crate::config::{ApplicationRoot, RegistryConfig};
use crate::desktop_entry::DesktopEntry;
use crate::error::{Error, ErrorKind, Result};
use crate::registry::{ApplicationRecord, ApplicationRegistry};

const DESKTOP_EXTENSION: &str = "desktop";
const DESKTOP_SUFFIX: &str = ".desktop";

/// Application registry backed by `.desktop` files.
#[derive(Debug, Clone)]
pub struct DesktopEntryRegistry {
    config: RegistryConfig,
}

impl DesktopEntryRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        Self { config }
    }

    /// Registry configured from the XDG environment variables and locale.
    pub fn from_env() -> Self {
        Self::new(RegistryConfig::from_env())
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn scan_root(
        &self,
        root: &ApplicationRoot,
        seen: &mut HashSet<String>,
        records: &mut Vec<ApplicationRecord>,
    ) -> Result<()> {
        if !root.path.is_dir() {
            trace!(root = %root.path.display(), "application directory missing, skipping");
            return Ok(());
        }

        let walker = WalkDir::new(&root.path)
            .follow_links(true)
            .sort_by_file_name();
        for item in walker {
            let item = item.map_err(|e| {
                Error::with_source(
                    ErrorKind::Registry(format!("cannot scan {}", root.path.display())),
                    e,
                )
            })?;
            if !item.file_type().is_file() {
                continue;
            }
            let Some(id) = desktop_file_id(&root.path, item.path())? else {
                continue;
            };
            // A shadowed id is skipped even if the shadowing entry is hidden.
            if !seen.insert(id.clone()) {
                trace!(id = %id, path = %item.path().display(), "shadowed desktop entry");
                continue;
            }

            let contents = std::fs::read_to_string(item.path()).map_err(|e| {
                Error::with_source(
                    ErrorKind::Registry(format!("cannot read {}", item.path().display())),
                    e,
                )
            })?;
            let entry = DesktopEntry::parse(item.path(), &contents)?;
            if !entry.is_application() || entry.is_hidden() {
                trace!(id = %id, "not an installed application");
                continue;
            }

            let mut record = ApplicationRecord::new(id, root.is_system);
            record.metadata = entry.into_fields();
            records.push(record);
        }
        Ok(())
    }
}

impl ApplicationRegistry for DesktopEntryRegistry {
    #[instrument(skip(self))]
    fn installed_applications(&self) -> Result<Vec<ApplicationRecord>> {
        let mut seen = HashSet::new();
        let mut records = Vec::new();
        for root in self.config.application_roots() {
            self.scan_root(&root, &mut seen, &mut records)?;
        }
        debug!(records = records.len(), "scanned desktop entries");
        Ok(records)
    }

    fn has_launch_entry(&self, record: &ApplicationRecord) -> Result<bool> {
        Ok(DesktopEntry::from_fields(record.metadata.clone()).is_launchable())
    }

    fn resolve_label(&self, record: &ApplicationRecord) -> Result<String> {
        let entry = DesktopEntry::from_fields(record.metadata.clone());
        entry
            .get_localized("Name", self.config.locale.as_ref())
            .map(str::to_string)
            .ok_or_else(|| Error::label(&record.identifier, "desktop entry has no Name"))
    }
}

/// Desktop-file id of `path` relative to `root`: path separators become `-`
/// and the `.desktop` suffix is dropped. `None` for non-desktop files.
fn desktop_file_id(root: &Path, path: &Path) -> Result<Option<String>> {
    // Stray files under a root may have any name; only desktop files must be UTF-8
    if path.extension() != Some(OsStr::new(DESKTOP_EXTENSION)) {
        return Ok(None);
    }
    let relative = path
        .strip_prefix(root)
        .map_err(|_| Error::registry(format!("{} escapes {}", path.display(), root.display())))?;

    let mut parts = Vec::new();
    for component in relative.components() {
        let part = component.as_os_str().to_str().ok_or_else(|| {
            Error::registry(format!("non UTF-8 desktop file path {}", path.display()))
        })?;
        parts.push(part);
    }
    let joined = parts.join("-");
    Ok(joined
        .strip_suffix(DESKTOP_SUFFIX)
        .filter(|id| !id.is_empty())
        .map(str::to_string))
}
