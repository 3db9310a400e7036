//! Error types for text chunking

/// Error types for chunking operations
#[derive(thiserror::Error, Debug)]
pub enum ChunkingError {
    #[error("Invalid chunk size: {0} (must be a positive integer)")]
    InvalidChunkSize(i64),

    #[error("Unknown split strategy: {0:?} (expected characters, lines or delimiter)")]
    UnknownStrategy(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Chunk index out of range: {index} (have {len} chunks)")]
    ChunkIndexOutOfRange { index: usize, len: usize },

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkingError>;

/// Trait for converting errors of injected capabilities into chunking errors
pub trait IntoChunkingError<T> {
    fn into_chunking_error(self) -> Result<T>;
}

impl<T, E> IntoChunkingError<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn into_chunking_error(self) -> Result<T> {
        self.map_err(|e| ChunkingError::Clipboard(e.to_string()))
    }
}

impl ChunkingError {
    /// Create an invalid chunk size error
    pub fn invalid_chunk_size(size: i64) -> Self {
        Self::InvalidChunkSize(size)
    }

    /// Create an unknown strategy error
    pub fn unknown_strategy<S: Into<String>>(name: S) -> Self {
        Self::UnknownStrategy(name.into())
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a chunk index out of range error
    pub fn chunk_index_out_of_range(index: usize, len: usize) -> Self {
        Self::ChunkIndexOutOfRange { index, len }
    }

    /// Create a clipboard error
    pub fn clipboard<S: Into<String>>(msg: S) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Bad input: the caller must supply different parameters
            Self::InvalidChunkSize(_) | Self::UnknownStrategy(_) | Self::Configuration(_) => false,
            Self::ChunkIndexOutOfRange { .. } => false,
            // Clipboard access may fail transiently
            Self::Clipboard(_) => true,
        }
    }

    /// Get error category for logging/monitoring
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidChunkSize(_) => "invalid_chunk_size",
            Self::UnknownStrategy(_) => "unknown_strategy",
            Self::Configuration(_) => "configuration",
            Self::ChunkIndexOutOfRange { .. } => "chunk_index_out_of_range",
            Self::Clipboard(_) => "clipboard",
        }
    }
}
