use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for Ignition generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Bundled asset path does not exist.
    #[error("Bundled asset not found: {0}")]
    AssetNotFound(String),

    /// Bundled asset tree could not be walked.
    #[error("Failed to read bundled asset '{path}': {reason}")]
    AssetRead { path: String, reason: String },

    /// Template source could not be parsed.
    #[error("Failed to parse template '{name}': {reason}")]
    TemplateSyntax { name: String, reason: String },

    /// Template failed during rendering (e.g. unknown parameter).
    #[error("Failed to render template '{name}': {reason}")]
    TemplateRender { name: String, reason: String },

    /// Manifest file or directory could not be read.
    #[error("Failed to read manifest '{}': {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Manifest file content is malformed or incomplete.
    #[error("Invalid manifest '{what}': {details}")]
    ManifestParse { what: String, details: String },

    /// Static network configuration is unusable.
    ///
    /// Callers should treat this as unrecoverable: continuing could leave the
    /// node unreachable after boot.
    #[error("Static network configuration error: {0}")]
    StaticNetwork(String),

    /// `nmstatectl` invocation failed.
    #[error("nmstatectl error running '{command}': {details}")]
    Nmstate { command: String, details: String },

    /// Final document could not be serialized.
    #[error("Failed to serialize Ignition config: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn manifest_parse<W: Into<String>, D: ToString>(what: W, details: D) -> Self {
        AppError::ManifestParse { what: what.into(), details: details.to_string() }
    }

    /// Whether the failure must stop the run outright instead of being handled.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(self, AppError::StaticNetwork(_))
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ManifestRead { source, .. } => source.kind(),
            AppError::AssetNotFound(_) => io::ErrorKind::NotFound,
            AppError::Configuration(_)
            | AppError::AssetRead { .. }
            | AppError::TemplateSyntax { .. }
            | AppError::TemplateRender { .. }
            | AppError::ManifestParse { .. }
            | AppError::StaticNetwork(_) => io::ErrorKind::InvalidInput,
            AppError::Nmstate { .. } | AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}
