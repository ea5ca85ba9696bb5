//! Named method channel: a dispatch table from method name to handler.
//!
//! The channel is transport-agnostic. In-process callers use
//! [`MethodChannel::invoke`] or [`MethodChannel::dispatch`]; the WASM host
//! feeds it MessagePack through [`MethodChannel::invoke_msgpack`].

use std::collections::BTreeMap;
use std::sync::Arc;

use app_inventory_types::{error_codes, MethodCall, MethodResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::Result;

/// Handles one method of a channel.
pub trait MethodHandler: Send + Sync {
    fn handle(&self, arguments: &serde_json::Value) -> MethodResult<serde_json::Value>;
}

impl<F> MethodHandler for F
where
    F: Fn(&serde_json::Value) -> MethodResult<serde_json::Value> + Send + Sync,
{
    fn handle(&self, arguments: &serde_json::Value) -> MethodResult<serde_json::Value> {
        self(arguments)
    }
}

/// A named set of method handlers.
pub struct MethodChannel {
    name: String,
    handlers: BTreeMap<String, Box<dyn MethodHandler>>,
}

impl std::fmt::Debug for MethodChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MethodChannel")
            .field("name", &self.name)
            .field("methods", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl MethodChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a handler, replacing any previous handler for `method`.
    pub fn register(&mut self, method: impl Into<String>, handler: impl MethodHandler + 'static) {
        self.handlers.insert(method.into(), Box::new(handler));
    }

    /// Register a handler with typed arguments and response.
    ///
    /// Arguments that do not decode into `Req` produce an `INVALID_REQUEST`
    /// error without calling `handler`.
    pub fn register_typed<Req, Resp, F>(&mut self, method: impl Into<String>, handler: F)
    where
        Req: DeserializeOwned,
        Resp: Serialize,
        F: Fn(Req) -> MethodResult<Resp> + Send + Sync + 'static,
    {
        self.register(method, move |arguments: &serde_json::Value| {
            match serde_json::from_value::<Req>(arguments.clone()) {
                Ok(request) => encode_response(handler(request)),
                Err(e) => MethodResult::error(error_codes::INVALID_REQUEST, e.to_string()),
            }
        });
    }

    /// Register a handler that ignores its arguments.
    pub fn register_no_args<Resp, F>(&mut self, method: impl Into<String>, handler: F)
    where
        Resp: Serialize,
        F: Fn() -> MethodResult<Resp> + Send + Sync + 'static,
    {
        self.register(method, move |_: &serde_json::Value| encode_response(handler()));
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.handlers.contains_key(method)
    }

    /// Registered method names, sorted.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Run the handler for `call.method`.
    ///
    /// An unregistered method yields [`MethodResult::NotImplemented`].
    #[instrument(skip(self, call), fields(channel = %self.name, method = %call.method))]
    pub fn invoke(&self, call: &MethodCall) -> MethodResult<serde_json::Value> {
        match self.handlers.get(&call.method) {
            Some(handler) => {
                let result = handler.handle(&call.arguments);
                debug!(success = result.is_success(), "method call complete");
                result
            }
            None => {
                debug!("method not implemented");
                MethodResult::NotImplemented
            }
        }
    }

    /// Run [`invoke`](Self::invoke) on the blocking thread pool.
    ///
    /// Handlers block on platform calls; this keeps them off async worker
    /// threads.
    pub async fn dispatch(
        self: Arc<Self>,
        call: MethodCall,
    ) -> Result<MethodResult<serde_json::Value>> {
        let result = tokio::task::spawn_blocking(move || self.invoke(&call)).await?;
        Ok(result)
    }

    /// Decode a MessagePack [`MethodCall`], invoke it, and encode the result.
    ///
    /// An undecodable call is answered with an `INVALID_REQUEST` error rather
    /// than failing.
    pub fn invoke_msgpack(&self, input: &[u8]) -> Result<Vec<u8>> {
        let result = match rmp_serde::from_slice::<MethodCall>(input) {
            Ok(call) => self.invoke(&call),
            Err(e) => MethodResult::error(
                error_codes::INVALID_REQUEST,
                format!("deserialize method call: {e}"),
            ),
        };
        Ok(rmp_serde::to_vec_named(&result)?)
    }
}

fn encode_response<Resp: Serialize>(result: MethodResult<Resp>) -> MethodResult<serde_json::Value> {
    match result {
        MethodResult::Success(value) => match serde_json::to_value(value) {
            Ok(value) => MethodResult::Success(value),
            Err(e) => MethodResult::error(error_codes::SERIALIZATION_ERROR, e.to_string()),
        },
        MethodResult::Error(e) => MethodResult::Error(e),
        MethodResult::NotImplemented => MethodResult::NotImplemented,
    }
}
