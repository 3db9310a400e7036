//! Core data structures for text chunking

use super::error::ChunkingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strategy used to decide chunk boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SplitStrategy {
    /// Fixed number of characters per chunk
    #[default]
    Characters,
    /// Fixed number of lines per chunk
    Lines,
    /// Parts separated by a custom delimiter, packed up to a character limit
    Delimiter,
}

impl SplitStrategy {
    /// Every strategy, in display order
    pub const ALL: [SplitStrategy; 3] = [Self::Characters, Self::Lines, Self::Delimiter];

    /// Name used for parsing, display and serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            SplitStrategy::Characters => "characters",
            SplitStrategy::Lines => "lines",
            SplitStrategy::Delimiter => "delimiter",
        }
    }

    /// Unit the chunk size limit is measured in
    pub fn size_unit(&self) -> &'static str {
        match self {
            SplitStrategy::Lines => "lines",
            SplitStrategy::Characters | SplitStrategy::Delimiter => "characters",
        }
    }

    /// Check if this strategy consults the delimiter
    pub fn uses_delimiter(&self) -> bool {
        matches!(self, SplitStrategy::Delimiter)
    }

    /// Get a human-readable description of the strategy
    pub fn description(&self) -> &'static str {
        match self {
            SplitStrategy::Characters => "Characters",
            SplitStrategy::Lines => "Lines",
            SplitStrategy::Delimiter => "Custom Delimiter",
        }
    }
}

impl FromStr for SplitStrategy {
    type Err = ChunkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ChunkingError::unknown_strategy(s))
    }
}

impl TryFrom<String> for SplitStrategy {
    type Error = ChunkingError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl std::fmt::Display for SplitStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
