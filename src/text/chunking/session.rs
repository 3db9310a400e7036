//! Front-end state around the chunker: current input, parameters, results and
//! the copy notification flag.
//!
//! The clipboard is injected through the [`Clipboard`] trait so the state can
//! be driven (and tested) without any UI toolkit.

use super::{
    chunker::split_text,
    config::ChunkingConfig,
    error::{ChunkingError, IntoChunkingError, Result},
    types::SplitStrategy,
};
use crate::text::char_count;
use itertools::Itertools;
use std::cell::RefCell;
use std::convert::Infallible;
use tracing::{debug, info, warn};

/// Separator placed between chunks by [`SplitterSession::joined_chunks`]
pub const COPY_ALL_SEPARATOR: &str = "\n\n------------------------------\n\n";

/// Platform clipboard capability
pub trait Clipboard {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Put `text` on the clipboard
    fn copy(&self, text: &str) -> std::result::Result<(), Self::Error>;
}

/// In-memory clipboard recording every copied text
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    copied: RefCell<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently copied text
    pub fn last(&self) -> Option<String> {
        self.copied.borrow().last().cloned()
    }

    /// All copied texts, oldest first
    pub fn history(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    type Error = Infallible;

    fn copy(&self, text: &str) -> std::result::Result<(), Self::Error> {
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// State owned by a splitter front end between user actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitterSession {
    text: String,
    // kept signed: this is what the user typed, validated on split
    chunk_size: i64,
    strategy: SplitStrategy,
    delimiter: String,
    chunks: Vec<String>,
    show_notification: bool,
}

impl Default for SplitterSession {
    fn default() -> Self {
        Self::with_config(&ChunkingConfig::default())
    }
}

impl SplitterSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session with parameters taken from `config`
    pub fn with_config(config: &ChunkingConfig) -> Self {
        Self {
            text: String::new(),
            chunk_size: i64::try_from(config.max_size).unwrap_or(i64::MAX),
            strategy: config.strategy,
            delimiter: config.delimiter.clone(),
            chunks: Vec::new(),
            show_notification: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Number of characters in the current input
    pub fn char_count(&self) -> usize {
        char_count(&self.text)
    }

    pub fn chunk_size(&self) -> i64 {
        self.chunk_size
    }

    pub fn set_chunk_size(&mut self, chunk_size: i64) {
        self.chunk_size = chunk_size;
    }

    /// Set the chunk size from raw form input.
    ///
    /// The leading integer of the input is used; input without one sets the
    /// size to 0, which the next [`split`](Self::split) rejects.
    pub fn set_chunk_size_input(&mut self, input: &str) {
        self.chunk_size = parse_leading_integer(input);
    }

    pub fn strategy(&self) -> SplitStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: SplitStrategy) {
        self.strategy = strategy;
    }

    /// Set the strategy by name; an unknown name leaves the current one in place
    pub fn set_strategy_input(&mut self, name: &str) -> Result<()> {
        self.strategy = name.parse()?;
        Ok(())
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) {
        self.delimiter = delimiter.into();
    }

    /// Chunks produced by the last [`split`](Self::split)
    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn show_notification(&self) -> bool {
        self.show_notification
    }

    /// Hide the "copied" notification
    pub fn dismiss_notification(&mut self) {
        self.show_notification = false;
    }

    /// Recompute the chunks from the current text and parameters.
    ///
    /// The previous result is always discarded, also when the parameters are
    /// rejected.
    pub fn split(&mut self) -> Result<&[String]> {
        self.chunks.clear();
        if self.text.is_empty() {
            return Ok(self.chunks.as_slice());
        }

        let max_size = usize::try_from(self.chunk_size)
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| ChunkingError::invalid_chunk_size(self.chunk_size))?;

        self.chunks = split_text(&self.text, max_size, self.strategy, &self.delimiter)?;
        info!(
            "Split {} characters into {} chunks by {}",
            self.char_count(),
            self.chunks.len(),
            self.strategy
        );
        Ok(self.chunks.as_slice())
    }

    /// Reset input, parameters and results to their defaults
    pub fn clear(&mut self) {
        debug!("Clearing splitter session");
        *self = Self::default();
    }

    /// Display label of the chunk at `index`
    pub fn chunk_label(index: usize) -> String {
        format!("Chunk {}", index + 1)
    }

    /// All chunks joined with [`COPY_ALL_SEPARATOR`]
    pub fn joined_chunks(&self) -> String {
        self.chunks.iter().join(COPY_ALL_SEPARATOR)
    }

    /// Copy a single chunk to the clipboard
    pub fn copy_chunk<C: Clipboard>(&mut self, index: usize, clipboard: &C) -> Result<()> {
        let chunk = self
            .chunks
            .get(index)
            .ok_or_else(|| ChunkingError::chunk_index_out_of_range(index, self.chunks.len()))?;
        let result = clipboard.copy(chunk).into_chunking_error();
        self.finish_copy(result)
    }

    /// Copy all chunks, separated by [`COPY_ALL_SEPARATOR`], to the clipboard
    pub fn copy_all<C: Clipboard>(&mut self, clipboard: &C) -> Result<()> {
        let result = clipboard.copy(&self.joined_chunks()).into_chunking_error();
        self.finish_copy(result)
    }

    fn finish_copy(&mut self, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                self.show_notification = true;
                Ok(())
            }
            Err(e) => {
                warn!("Failed to copy text: {}", e);
                Err(e)
            }
        }
    }
}

/// Leading (optionally signed) decimal integer of `input`, 0 if there is none.
fn parse_leading_integer(input: &str) -> i64 {
    let s = input.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let value = digits
        .chars()
        .map_while(|c| c.to_digit(10))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d))
        });
    if negative { -value } else { value }
}
