//! Configuration for text chunking

use super::error::{ChunkingError, Result};
use super::types::SplitStrategy;
use serde::Deserialize;

/// Prefix of the environment variables read by [`ChunkingConfig::from_env`]
pub const ENV_PREFIX: &str = "CHUNK_";

/// Configuration for text chunking
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Maximum chunk size (characters, or lines for [`SplitStrategy::Lines`])
    pub max_size: usize,
    /// Strategy used to place chunk boundaries
    pub strategy: SplitStrategy,
    /// Boundary marker, only consulted by [`SplitStrategy::Delimiter`]
    pub delimiter: String,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_size: Self::DEFAULT_MAX_SIZE,
            strategy: SplitStrategy::default(),
            delimiter: Self::DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl ChunkingConfig {
    pub const DEFAULT_MAX_SIZE: usize = 2000;
    pub const DEFAULT_DELIMITER: &'static str = "---";

    /// Fixed-size chunks of `max_chars` characters
    pub fn characters(max_chars: usize) -> Self {
        Self {
            max_size: max_chars,
            strategy: SplitStrategy::Characters,
            ..Default::default()
        }
    }

    /// Chunks of at most `max_lines` lines
    pub fn lines(max_lines: usize) -> Self {
        Self {
            max_size: max_lines,
            strategy: SplitStrategy::Lines,
            ..Default::default()
        }
    }

    /// Delimiter-terminated parts packed into chunks of about `max_chars` characters
    pub fn delimiter(delimiter: impl Into<String>, max_chars: usize) -> Self {
        Self {
            max_size: max_chars,
            strategy: SplitStrategy::Delimiter,
            delimiter: delimiter.into(),
        }
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(ChunkingError::invalid_chunk_size(0));
        }
        Ok(())
    }

    /// Load configuration from `CHUNK_MAX_SIZE`, `CHUNK_STRATEGY` and `CHUNK_DELIMITER`
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self> {
        let config = envy::prefixed(ENV_PREFIX)
            .from_env::<ChunkingConfig>()
            .map_err(|e| {
                ChunkingError::configuration(format!("cannot read chunking config from env: {e}"))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Same as [`ChunkingConfig::from_env`] with explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::prefixed(ENV_PREFIX)
            .from_iter::<_, ChunkingConfig>(vars)
            .map_err(|e| {
                ChunkingError::configuration(format!("cannot read chunking config: {e}"))
            })?;
        config.validate()?;
        Ok(config)
    }
}
