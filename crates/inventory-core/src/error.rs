//! Error types for inventory-core.

use std::path::PathBuf;

/// Result type alias for inventory-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for inventory queries.
///
/// Any error aborts the query it occurred in; no partial inventory is
/// returned alongside it.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for a registry enumeration failure.
    pub fn registry(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Registry(message.into()))
    }

    /// Shorthand for a label resolution failure.
    pub fn label(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Label {
            identifier: identifier.into(),
            message: message.into(),
        })
    }

    /// Shorthand for a launchability lookup failure.
    pub fn launch_info(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LaunchInfo {
            identifier: identifier.into(),
            message: message.into(),
        })
    }

    /// Returns true if this error came from resolving a single record's label.
    pub fn is_label_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Label { .. })
    }

    /// Platform diagnostic suitable for returning to a caller.
    ///
    /// Includes the source chain, since the kind alone often only names the
    /// step that failed.
    pub fn detail(&self) -> String {
        match &self.source {
            Some(source) => format!("{}: {}", self.kind, source),
            None => self.kind.to_string(),
        }
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Enumerating the installed applications failed.
    #[error("registry query failed: {0}")]
    Registry(String),

    /// A desktop entry file could not be parsed.
    #[error("invalid desktop entry {}:{line}: {message}", path.display())]
    DesktopEntry {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// The display label of one application could not be resolved.
    #[error("failed to resolve label for {identifier}: {message}")]
    Label { identifier: String, message: String },

    /// Launchability of one application could not be determined.
    #[error("failed to look up launch entry for {identifier}: {message}")]
    LaunchInfo { identifier: String, message: String },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
