//! # app-inventory
//!
//! Lists the applications installed on the host and exposes the list to
//! embedded scripting layers over a named method channel.
//!
//! ## Crates
//!
//! - **app-inventory-types** - Wire types: `MethodCall`, `MethodResult`, `AppInfo`, error codes
//! - **app-inventory-core** - The inventory query and application registries
//! - **app-inventory-bridge** - `MethodChannel` dispatch and the Extism WASM host
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use app_inventory::{app_list_channel, DesktopEntryRegistry, MethodCall, QueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let channel = Arc::new(app_list_channel(
//!         DesktopEntryRegistry::from_env(),
//!         QueryOptions::default(),
//!     ));
//!
//!     let result = channel.dispatch(MethodCall::new("getInstalledApps")).await?;
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "bridge")]
pub use app_inventory_bridge as bridge;
#[cfg(feature = "core")]
pub use app_inventory_core as inventory;
pub use app_inventory_types as types;

// Re-export commonly used types at the top level
pub use app_inventory_types::{
    error_codes, method_names, AppInfo, ChannelError, MethodCall, MethodResult, CHANNEL,
};

#[cfg(feature = "core")]
pub use app_inventory_core::{
    query_installed_applications, query_installed_applications_with, ApplicationRecord,
    ApplicationRegistry, DesktopEntryRegistry, InMemoryRegistry, InventoryEntry,
    LabelFailurePolicy, QueryOptions, RegistryConfig,
};

#[cfg(feature = "bridge")]
pub use app_inventory_bridge::{app_list_channel, register_app_list, AppListBridge, MethodChannel};
