//! # app-inventory-guest-sdk
//!
//! Guest SDK for WASM plugins that read the installed-application inventory
//! through the app-inventory bridge.
//!
//! This crate is compiled to `wasm32-unknown-unknown` and loaded by a host
//! running [`app-inventory-bridge`]. The query itself runs on the host; this
//! SDK wraps the single `app_list_invoke` host function import.
//!
//! ## Example Plugin
//!
//! ```rust,ignore
//! use app_inventory_guest_sdk::*;
//! use extism_pdk::*;
//!
//! #[plugin_fn]
//! pub fn run(_input: String) -> FnResult<Json<Vec<AppInfo>>> {
//!     Ok(Json(get_installed_apps()?))
//! }
//! ```

pub use app_inventory_types::*;
use extism_pdk::*;

#[host_fn]
extern "ExtismHost" {
    fn app_list_invoke(input: Vec<u8>) -> Vec<u8>;
}

/// List installed applications, sorted by case-insensitive name.
///
/// A host-side query failure is returned as an error carrying the
/// `APP_LIST_ERROR` code and the platform diagnostic.
pub fn get_installed_apps() -> Result<InstalledAppsResponse, Error> {
    match invoke_typed(&MethodCall::new(method_names::GET_INSTALLED_APPS))? {
        MethodResult::Success(apps) => Ok(apps),
        MethodResult::Error(e) => Err(Error::msg(e.to_string())),
        MethodResult::NotImplemented => Err(Error::msg(format!(
            "{} is not implemented by the host",
            method_names::GET_INSTALLED_APPS
        ))),
    }
}

/// Invoke any method on the host channel and return the raw outcome.
///
/// Unlike [`get_installed_apps`], an unknown method is reported as
/// [`MethodResult::NotImplemented`] rather than as an error.
pub fn invoke(
    method: &str,
    arguments: serde_json::Value,
) -> Result<MethodResult<serde_json::Value>, Error> {
    invoke_typed(&MethodCall::with_arguments(method, arguments))
}

// =============================================================================
// Internal helpers
// =============================================================================

fn invoke_typed<Resp>(call: &MethodCall) -> Result<MethodResult<Resp>, Error>
where
    Resp: serde::de::DeserializeOwned,
{
    let input = rmp_serde::to_vec_named(call)
        .map_err(|e| Error::msg(format!("serialize error: {e}")))?;
    let output = unsafe { app_list_invoke(input)? };
    rmp_serde::from_slice(&output).map_err(|e| Error::msg(format!("deserialize error: {e}")))
}
