use std::fs;
use std::path::{Path, PathBuf};

use app_inventory::{DesktopEntryRegistry, RegistryConfig};
use tempfile::TempDir;

/// A user data home plus one system data dir, both with an empty
/// `applications/` directory.
pub struct DataTree {
    _dir: TempDir,
    pub home: PathBuf,
    pub system: PathBuf,
}

impl DataTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let home = dir.path().join("home");
        let system = dir.path().join("system");
        fs::create_dir_all(home.join("applications")).expect("Failed to create home");
        fs::create_dir_all(system.join("applications")).expect("Failed to create system");
        Self {
            _dir: dir,
            home,
            system,
        }
    }

    /// Install a user application.
    pub fn user_app(&self, id: &str, contents: &str) -> &Self {
        write_entry(&self.home, id, contents);
        self
    }

    /// Install a system application.
    pub fn system_app(&self, id: &str, contents: &str) -> &Self {
        write_entry(&self.system, id, contents);
        self
    }

    pub fn registry(&self) -> DesktopEntryRegistry {
        self.registry_with_locale("C")
    }

    pub fn registry_with_locale(&self, locale: &str) -> DesktopEntryRegistry {
        DesktopEntryRegistry::new(
            RegistryConfig::builder()
                .with_data_home(&self.home)
                .with_data_dir(&self.system)
                .with_locale(locale)
                .build(),
        )
    }
}

fn write_entry(base: &Path, id: &str, contents: &str) {
    let path = base.join("applications").join(format!("{id}.desktop"));
    fs::write(path, contents).expect("Failed to write desktop entry");
}

/// A launchable application entry.
pub fn launchable(name: &str) -> String {
    format!("[Desktop Entry]\nType=Application\nName={name}\nExec={}\n", name.to_lowercase())
}

/// An application entry that is hidden from launchers.
pub fn no_display(name: &str) -> String {
    format!(
        "[Desktop Entry]\nType=Application\nName={name}\nExec={}\nNoDisplay=true\n",
        name.to_lowercase()
    )
}

/// An application entry without a `Name` key.
pub fn unnamed() -> String {
    "[Desktop Entry]\nType=Application\nExec=mystery\n".to_string()
}
