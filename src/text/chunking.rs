//! Plain text chunking by character count, line count or custom delimiter
//!
//! The chunker itself is a pure function over its inputs. [`SplitterSession`]
//! wraps it with the state a front end keeps between user actions.

pub mod chunker;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

// Re-export main public interfaces
pub use chunker::{Chunker, split_text};
pub use config::ChunkingConfig;
pub use error::{ChunkingError, IntoChunkingError, Result};
pub use session::{COPY_ALL_SEPARATOR, Clipboard, MemoryClipboard, SplitterSession};
pub use types::SplitStrategy;
