//! # app-inventory-types
//!
//! Shared wire types for the app-list method channel.
//!
//! This crate defines the request/response types that cross the boundary
//! between the host (inventory-bridge) and a scripting guest
//! (inventory-guest-sdk). They are serialized as JSON for in-process
//! callers and as MessagePack at the WASM ABI.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Guest (inventory-guest-sdk)             │
//! │  Sends MethodCall { method, arguments }  │
//! └──────────────┬───────────────────────────┘
//!               │ serialized MethodCall / MethodResult
//!               ▼
//! ┌──────────────────────────────────────────┐
//! │  Host (inventory-bridge)                 │
//! │  Dispatches by method name, replies with │
//! │  success / error / not_implemented       │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//!
//! - **Pure data**: No I/O, no async, no platform-specific code
//! - **Serde only**: Just `serde` and `serde_json` dependencies
//! - **Compiles everywhere**: Native, wasm32-unknown-unknown, wasm32-wasi

use serde::{Deserialize, Serialize};

/// Name of the channel the app-list capability is registered under.
pub const CHANNEL: &str = "app_inventory/app_list";

// =============================================================================
// Channel Error
// =============================================================================

/// Error returned through the channel when a registered method fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelError {
    /// Machine-readable error code (e.g., "APP_LIST_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Platform-supplied diagnostic, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl std::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, " ({detail})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ChannelError {}

/// Outcome of a method call.
///
/// Serialized as JSON: `{"success": <data>}`, `{"error": <error>}` or
/// `"not_implemented"`. An unknown method is its own outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodResult<T> {
    Success(T),
    Error(ChannelError),
    NotImplemented,
}

impl<T> MethodResult<T> {
    pub fn success(value: T) -> Self {
        MethodResult::Success(value)
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        MethodResult::Error(ChannelError {
            code: code.into(),
            message: message.into(),
            detail: None,
        })
    }

    pub fn error_with_detail(
        code: impl Into<String>,
        message: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        MethodResult::Error(ChannelError {
            code: code.into(),
            message: message.into(),
            detail: Some(detail.into()),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, MethodResult::Error(_))
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MethodResult::NotImplemented)
    }

    /// Transform the success payload, leaving the other outcomes untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> MethodResult<U> {
        match self {
            MethodResult::Success(v) => MethodResult::Success(f(v)),
            MethodResult::Error(e) => MethodResult::Error(e),
            MethodResult::NotImplemented => MethodResult::NotImplemented,
        }
    }
}

// =============================================================================
// Method Call
// =============================================================================

/// A request addressed to one method of a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Method name (e.g., "getInstalledApps").
    pub method: String,
    /// Method arguments. `null` for methods that take none.
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl MethodCall {
    /// A call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: serde_json::Value::Null,
        }
    }

    pub fn with_arguments(method: impl Into<String>, arguments: serde_json::Value) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

// =============================================================================
// App List
// =============================================================================

/// One installed application as seen by the guest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    /// Display label.
    pub name: String,
    /// Unique application identifier.
    #[serde(rename = "packageName")]
    pub package_name: String,
}

/// Response payload of `getInstalledApps`.
pub type InstalledAppsResponse = Vec<AppInfo>;

// =============================================================================
// Names and codes (constants for the channel contract)
// =============================================================================

/// Method names understood by the app-list channel.
pub mod method_names {
    pub const GET_INSTALLED_APPS: &str = "getInstalledApps";
}

/// Host function names registered across the WASM boundary.
pub mod host_fn_names {
    pub const INVOKE: &str = "app_list_invoke";
}

/// Stable error codes returned in [`ChannelError::code`].
pub mod error_codes {
    /// The installed-application query failed.
    pub const APP_LIST_ERROR: &str = "APP_LIST_ERROR";
    /// The call payload could not be decoded.
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    /// The handler failed to encode its response.
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
}

/// Fixed human-readable message accompanying [`error_codes::APP_LIST_ERROR`].
pub const APP_LIST_ERROR_MESSAGE: &str = "Failed to get installed apps";
