use std::path::PathBuf;

/// Errors from loading or persisting a solution model.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No model is available at the given path.
    #[error("solution file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The external provider program could not be started.
    #[error("failed to start solution provider `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The external provider program ran but reported failure.
    #[error("solution provider `{program}` failed to {operation} {} (exit status {status:?}): {stderr}", .path.display())]
    Bridge {
        program: String,
        operation: &'static str,
        path: PathBuf,
        status: Option<i32>,
        stderr: String,
    },

    /// The model could not be encoded or decoded.
    #[error("malformed solution model for {}: {reason}", .path.display())]
    Serialization { path: PathBuf, reason: String },

    /// I/O error while talking to the provider.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
