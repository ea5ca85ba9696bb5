//! # app-inventory-core
//!
//! Installed-application inventory query.
//!
//! Reads every installed application from an [`ApplicationRegistry`], drops
//! system components that have no user-facing launch entry, and returns
//! `(name, identifier)` pairs sorted by case-insensitive name.
//!
//! The query is synchronous and all-or-nothing: any platform failure fails
//! the whole call and no partial list is returned. This crate has no
//! dependency on how results are delivered; see `app-inventory-bridge` for
//! the method-channel boundary.
//!
//! ## Registries
//!
//! - [`DesktopEntryRegistry`] - freedesktop `.desktop` files (Linux desktops)
//! - [`InMemoryRegistry`] - a fixed list held by the host
//!
//! ## Example
//!
//! ```rust,no_run
//! use app_inventory_core::{query_installed_applications, DesktopEntryRegistry};
//!
//! let registry = DesktopEntryRegistry::from_env();
//! for entry in query_installed_applications(&registry)? {
//!     println!("{}\t{}", entry.name, entry.identifier);
//! }
//! # Ok::<(), app_inventory_core::Error>(())
//! ```

mod config;
mod desktop_entry;
mod error;
mod memory;
mod query;
mod registry;
mod xdg;

pub use config::{
    ApplicationRoot, LabelFailurePolicy, Locale, QueryOptions, RegistryConfig,
    RegistryConfigBuilder, APPLICATIONS_SUBDIR, DEFAULT_DATA_DIRS,
};
pub use desktop_entry::DesktopEntry;
pub use error::{Error, ErrorKind, Result};
pub use memory::InMemoryRegistry;
pub use query::{query_installed_applications, query_installed_applications_with, InventoryEntry};
pub use registry::{ApplicationRecord, ApplicationRegistry};
pub use xdg::DesktopEntryRegistry;
