pub mod chunking;

/// Line separator used by the line-based splitting and by reassembly.
pub const LINE_SEPARATOR: char = '\n';

/// Length of `text` in characters (unicode scalar values, not bytes).
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Number of lines in `text` when split on `'\n'`.
///
/// A trailing newline counts as a trailing empty line, and the empty string
/// is a single (empty) line.
pub fn line_count(text: &str) -> usize {
    text.split(LINE_SEPARATOR).count()
}
