//! Error types for the bridge crate.

/// Bridge-level errors (host-side only, never returned to a guest).
///
/// Inventory failures are not in here: they are reported to the caller as
/// a `MethodResult::Error`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from the Extism runtime.
    #[error("extism error: {0}")]
    Extism(#[from] extism::Error),

    /// Error serializing/deserializing JSON values.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error encoding MessagePack at the ABI boundary.
    #[error("encode error: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    /// Error from a tokio join handle.
    #[error("task join error: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
