//! # app-inventory-bridge
//!
//! Method-channel boundary for the installed-application inventory.
//!
//! This crate provides [`MethodChannel`], a named dispatch table from method
//! name to handler, the `getInstalledApps` handler built on
//! `app-inventory-core`, and [`AppListBridge`], which loads WASM guest
//! plugins via Extism and exposes the channel to them as a host function.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  WASM Guest (compiled with inventory-guest-sdk) │
//! │                                                 │
//! │  Calls one host function:                       │
//! │    app_list_invoke({method: "getInstalledApps"})│
//! └──────────────┬──────────────────────────────────┘
//!                │  Extism host function ABI (MessagePack over shared memory)
//!                ▼
//! ┌─────────────────────────────────────────────────┐
//! │  AppListBridge / MethodChannel (this crate)     │
//! │                                                 │
//! │  - Looks up the handler by method name          │
//! │  - Unknown method -> not_implemented            │
//! │  - Query failure  -> APP_LIST_ERROR             │
//! └──────────────┬──────────────────────────────────┘
//!                │  ApplicationRegistry trait
//!                ▼
//! ┌─────────────────────────────────────────────────┐
//! │  app-inventory-core                             │
//! │  (desktop entries, in-memory, or your own)      │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//!
//! The inventory query blocks. [`MethodChannel::dispatch`] and
//! [`AppListBridge::call`] run it on tokio's blocking pool, so both are safe
//! to await from async tasks. Each [`AppListBridge::call`] creates a fresh
//! plugin instance.
//!
//! ## Example
//!
//! ```rust,ignore
//! use app_inventory_bridge::{app_list_channel, AppListBridge};
//! use app_inventory_core::{DesktopEntryRegistry, QueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let channel = app_list_channel(DesktopEntryRegistry::from_env(), QueryOptions::default());
//!
//!     let wasm_bytes = std::fs::read("launcher_plugin.wasm")?;
//!     let bridge = AppListBridge::new(wasm_bytes, channel)?;
//!
//!     let result = bridge.call("run", b"").await?;
//!     println!("Guest returned: {}", String::from_utf8_lossy(&result));
//!     Ok(())
//! }
//! ```

mod channel;
mod error;
mod host_functions;
mod registration;

pub use channel::{MethodChannel, MethodHandler};
pub use error::{Error, Result};
pub use host_functions::sanitize_inventory_error;
pub use registration::{app_list_channel, register_app_list};

use std::sync::Arc;

use extism::{Manifest, Plugin, PluginBuilder, UserData, Wasm};
use tracing::instrument;

/// Shared state passed to host functions via `UserData<BridgeState>`.
pub(crate) struct BridgeState {
    pub(crate) channel: Arc<MethodChannel>,
}

/// Bridge between WASM guests and a method channel.
///
/// Create one `AppListBridge` per WASM module. The bridge is `Send + Sync`
/// and safe to share across tokio tasks.
pub struct AppListBridge {
    wasm_bytes: Arc<Vec<u8>>,
    channel: Arc<MethodChannel>,
    handle: tokio::runtime::Handle,
}

impl AppListBridge {
    /// Create a new bridge for the given WASM module and channel.
    ///
    /// Must be called from within a tokio runtime context.
    pub fn new(wasm_bytes: Vec<u8>, channel: MethodChannel) -> Result<Self> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| Error::Config(format!("no tokio runtime: {e}")))?;
        Self::with_handle(wasm_bytes, channel, handle)
    }

    /// Create a new bridge, providing a specific tokio runtime handle.
    ///
    /// Use this when constructing the bridge outside of a tokio context.
    pub fn with_handle(
        wasm_bytes: Vec<u8>,
        channel: MethodChannel,
        handle: tokio::runtime::Handle,
    ) -> Result<Self> {
        if wasm_bytes.is_empty() {
            return Err(Error::Config("empty WASM module".to_string()));
        }
        Ok(Self {
            wasm_bytes: Arc::new(wasm_bytes),
            channel: Arc::new(channel),
            handle,
        })
    }

    /// The channel exposed to guests.
    pub fn channel(&self) -> &Arc<MethodChannel> {
        &self.channel
    }

    /// Call an exported function in the WASM guest.
    ///
    /// Each call creates a fresh plugin instance on a blocking thread, with
    /// the channel's host function wired up.
    #[instrument(skip(self, input), fields(function = %function))]
    pub async fn call(
        &self,
        function: &str,
        input: impl AsRef<[u8]> + Send + 'static,
    ) -> Result<Vec<u8>> {
        let wasm_bytes = Arc::clone(&self.wasm_bytes);
        let channel = Arc::clone(&self.channel);
        let function = function.to_string();

        self.handle
            .spawn_blocking(move || {
                let state = BridgeState { channel };
                let mut plugin = create_plugin(&wasm_bytes, state)?;
                let result = plugin.call::<&[u8], &[u8]>(&function, input.as_ref())?;
                Ok(result.to_vec())
            })
            .await?
    }

    /// Call a guest function with a JSON input and decode its JSON output.
    pub async fn call_json<Req, Resp>(&self, function: &str, input: &Req) -> Result<Resp>
    where
        Req: serde::Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let input = serde_json::to_vec(input)?;
        let output = self.call(function, input).await?;
        Ok(serde_json::from_slice(&output)?)
    }
}

/// Create an Extism plugin with all host functions registered.
fn create_plugin(wasm_bytes: &[u8], state: BridgeState) -> Result<Plugin> {
    let manifest = Manifest::new([Wasm::data(wasm_bytes.to_vec())]);
    let user_data = UserData::new(state);

    let builder = PluginBuilder::new(manifest).with_wasi(true);
    let plugin = registration::register_all(builder, &user_data).build()?;
    Ok(plugin)
}
