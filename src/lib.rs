pub mod text;
pub mod util;

pub use text::chunking::{
    Chunker, ChunkingConfig, ChunkingError, Clipboard, SplitStrategy, SplitterSession, split_text,
};
