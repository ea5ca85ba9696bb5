//! Channel and host function registration.
//!
//! `app_list_channel` ties the app-list handlers to method names;
//! `register_all` exposes a channel to WASM guests as Extism host functions.

use app_inventory_core::{ApplicationRegistry, QueryOptions};
use app_inventory_types::{host_fn_names, method_names, CHANNEL};
use extism::{PluginBuilder, UserData, ValType};

use crate::channel::MethodChannel;
use crate::host_functions;
use crate::BridgeState;

/// Build the standard app-list channel over `registry`.
pub fn app_list_channel<R>(registry: R, options: QueryOptions) -> MethodChannel
where
    R: ApplicationRegistry + 'static,
{
    let mut channel = MethodChannel::new(CHANNEL);
    register_app_list(&mut channel, registry, options);
    channel
}

/// Register the app-list methods on an existing channel.
pub fn register_app_list<R>(channel: &mut MethodChannel, registry: R, options: QueryOptions)
where
    R: ApplicationRegistry + 'static,
{
    channel.register_no_args(method_names::GET_INSTALLED_APPS, move || {
        host_functions::handle_get_installed_apps(&registry, &options)
    });
}

// =============================================================================
// Extism wiring
// =============================================================================

/// Read a MessagePack `MethodCall` from guest memory, dispatch it through
/// the channel, and write the MessagePack `MethodResult` back.
fn host_fn_invoke(
    plugin: &mut extism::CurrentPlugin,
    inputs: &[extism::Val],
    outputs: &mut [extism::Val],
    user_data: UserData<BridgeState>,
) -> std::result::Result<(), extism::Error> {
    let state_arc = user_data.get()?;
    let state = state_arc
        .lock()
        .map_err(|_| extism::Error::msg("bridge state lock poisoned"))?;

    let input_bytes: Vec<u8> = plugin.memory_get_val(&inputs[0])?;
    let output_bytes = state
        .channel
        .invoke_msgpack(&input_bytes)
        .map_err(|e| extism::Error::msg(format!("serialize response: {e}")))?;

    let mem_handle = plugin.memory_new(&output_bytes)?;
    outputs[0] = plugin.memory_to_val(mem_handle);
    Ok(())
}

/// Register all host functions.
pub(crate) fn register_all<'a>(
    builder: PluginBuilder<'a>,
    user_data: &UserData<BridgeState>,
) -> PluginBuilder<'a> {
    builder.with_function(
        host_fn_names::INVOKE,
        [ValType::I64],
        [ValType::I64],
        user_data.clone(),
        host_fn_invoke,
    )
}
