//! Chunker implementation for the character, line and delimiter strategies

use super::{
    config::ChunkingConfig,
    error::{ChunkingError, Result},
    types::SplitStrategy,
};
use crate::text::{LINE_SEPARATOR, char_count};
use tracing::debug;

/// Split `text` into chunks of at most `max_size` units with the given strategy.
///
/// `max_size` is measured in characters, or in lines for
/// [`SplitStrategy::Lines`]. A zero size is rejected before any work is done.
/// `delimiter` is only consulted by [`SplitStrategy::Delimiter`].
pub fn split_text(
    text: &str,
    max_size: usize,
    strategy: SplitStrategy,
    delimiter: &str,
) -> Result<Vec<String>> {
    let chunker = Chunker::new(ChunkingConfig {
        max_size,
        strategy,
        delimiter: delimiter.to_string(),
    })?;
    Ok(chunker.split(text))
}

/// Reusable text chunker holding a validated configuration
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkingConfig,
}

impl Chunker {
    /// Create a new chunker, validating the configuration
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get configuration reference
    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Split `text` into an ordered sequence of chunks.
    ///
    /// Empty input always yields no chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        debug!(
            "Splitting {} bytes by {} (max {} {})",
            text.len(),
            self.config.strategy,
            self.config.max_size,
            self.config.strategy.size_unit()
        );

        let chunks = match self.config.strategy {
            SplitStrategy::Characters => self.split_by_characters(text),
            SplitStrategy::Lines => self.split_by_lines(text),
            SplitStrategy::Delimiter => self.split_by_delimiter(text),
        };

        debug!("Created {} chunks", chunks.len());
        chunks
    }

    /// Consecutive runs of exactly `max_size` characters, the last one holding the remainder
    fn split_by_characters(&self, text: &str) -> Vec<String> {
        let max_chars = self.config.max_size;
        let mut chunks = Vec::with_capacity(char_count(text).div_ceil(max_chars));
        let mut start = 0;
        let mut count = 0;

        for (pos, _) in text.char_indices() {
            if count == max_chars {
                chunks.push(text[start..pos].to_string());
                start = pos;
                count = 0;
            }
            count += 1;
        }
        if start < text.len() {
            chunks.push(text[start..].to_string());
        }
        chunks
    }

    /// Groups of at most `max_size` lines, joined back with `'\n'`
    fn split_by_lines(&self, text: &str) -> Vec<String> {
        let max_lines = self.config.max_size;
        let mut chunks = Vec::new();
        let mut current: Vec<&str> = Vec::with_capacity(max_lines.min(1024));

        for line in text.split(LINE_SEPARATOR) {
            // a full buffer is flushed before the next line goes in
            if current.len() >= max_lines {
                chunks.push(current.join("\n"));
                current.clear();
            }
            current.push(line);
        }
        if !current.is_empty() {
            chunks.push(current.join("\n"));
        }
        chunks
    }

    /// Delimiter-terminated parts packed greedily up to `max_size` characters
    fn split_by_delimiter(&self, text: &str) -> Vec<String> {
        let delimiter = self.config.delimiter.as_str();
        if delimiter.is_empty() {
            debug!("Empty delimiter, nothing to split on");
            return Vec::new();
        }

        let max_chars = self.config.max_size;
        let delimiter_chars = char_count(delimiter);
        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_chars = 0;

        for part in text.split(delimiter) {
            // leading, trailing and adjacent delimiters leave blank parts behind
            if part.trim().is_empty() {
                continue;
            }

            let part_chars = char_count(part);
            if current_chars + part_chars + delimiter_chars > max_chars {
                if part_chars + delimiter_chars > max_chars {
                    debug!(
                        "Part of {} chars exceeds the {} char limit, keeping it whole",
                        part_chars, max_chars
                    );
                }
                if !current.is_empty() {
                    chunks.push(std::mem::take(&mut current));
                    current_chars = 0;
                }
            }
            current.push_str(part);
            current.push_str(delimiter);
            current_chars += part_chars + delimiter_chars;
        }
        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }
}

impl TryFrom<ChunkingConfig> for Chunker {
    type Error = ChunkingError;

    fn try_from(config: ChunkingConfig) -> Result<Self> {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::line_count;

    fn chars(text: &str, n: usize) -> Vec<String> {
        split_text(text, n, SplitStrategy::Characters, "").unwrap()
    }

    fn lines(text: &str, n: usize) -> Vec<String> {
        split_text(text, n, SplitStrategy::Lines, "").unwrap()
    }

    fn delimited(text: &str, delimiter: &str, n: usize) -> Vec<String> {
        split_text(text, n, SplitStrategy::Delimiter, delimiter).unwrap()
    }

    #[test]
    fn test_chunker_creation() {
        let chunker = Chunker::new(ChunkingConfig::lines(3)).unwrap();
        assert_eq!(chunker.config().strategy, SplitStrategy::Lines);
        assert_eq!(chunker.config().max_size, 3);

        let chunker: Chunker = ChunkingConfig::default().try_into().unwrap();
        assert_eq!(chunker.config(), &ChunkingConfig::default());
    }

    #[test]
    fn test_zero_size_is_rejected() {
        for strategy in SplitStrategy::ALL {
            let result = split_text("abc", 0, strategy, "---");
            assert!(matches!(result, Err(ChunkingError::InvalidChunkSize(0))));
        }
        assert!(Chunker::new(ChunkingConfig::characters(0)).is_err());
    }

    #[test]
    fn test_empty_text() {
        for strategy in SplitStrategy::ALL {
            for n in [1, 3, 2000] {
                assert!(split_text("", n, strategy, "---").unwrap().is_empty());
            }
        }
    }

    #[test]
    fn test_split_by_characters() {
        assert_eq!(chars("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(chars("abcdef", 3), vec!["abc", "def"]);
        assert_eq!(chars("abc", 1), vec!["a", "b", "c"]);
        // larger than the whole input
        assert_eq!(chars("abc", 2000), vec!["abc"]);
    }

    #[test]
    fn test_split_by_characters_counts_chars_not_bytes() {
        let chunks = chars("これはテストです。", 4);
        assert_eq!(chunks, vec!["これはテ", "ストです", "。"]);

        let chunks = chars("a😀b😀c", 2);
        assert_eq!(chunks, vec!["a😀", "b😀", "c"]);
    }

    #[test]
    fn test_split_by_characters_properties() {
        let text = "The quick brown fox jumps over the lazy dog.\nPack my box with five dozen liquor jugs.";
        let len = char_count(text);
        for n in 1..=len + 1 {
            let chunks = chars(text, n);
            assert_eq!(chunks.len(), len.div_ceil(n), "chunk count for n={n}");
            let (last, rest) = chunks.split_last().unwrap();
            assert!(rest.iter().all(|c| char_count(c) == n));
            assert!((1..=n).contains(&char_count(last)));
            assert_eq!(chunks.concat(), text);
        }
    }

    #[test]
    fn test_split_by_lines() {
        assert_eq!(
            lines("l1\nl2\nl3\nl4\nl5", 2),
            vec!["l1\nl2", "l3\nl4", "l5"]
        );
        assert_eq!(lines("l1\nl2\nl3", 3), vec!["l1\nl2\nl3"]);
        assert_eq!(lines("l1\nl2\nl3", 1), vec!["l1", "l2", "l3"]);
        assert_eq!(lines("single line", 5), vec!["single line"]);
    }

    #[test]
    fn test_split_by_lines_keeps_empty_lines() {
        // a trailing newline is a trailing empty line
        assert_eq!(lines("a\nb\n", 2), vec!["a\nb", ""]);
        assert_eq!(lines("a\nb\n", 3), vec!["a\nb\n"]);
        // a lone newline is two empty lines
        assert_eq!(lines("\n", 1), vec!["", ""]);
        assert_eq!(lines("\n", 2), vec!["\n"]);
        // leading and interior empty lines are content too
        assert_eq!(lines("\n\nabc", 2), vec!["\n", "abc"]);
        assert_eq!(lines("a\n\n\nb", 2), vec!["a\n", "\nb"]);
    }

    #[test]
    fn test_split_by_lines_properties() {
        let text = "fn main() {\n    println!(\"hi\");\n\n    let x = 1;\n}\n";
        for n in 1..=8 {
            let chunks = lines(text, n);
            assert!(chunks.iter().all(|c| line_count(c) <= n));
            assert_eq!(chunks.join("\n"), text);
            // re-splitting the reassembled text is stable
            assert_eq!(lines(&chunks.join("\n"), n), chunks);
        }
    }

    #[test]
    fn test_split_by_lines_keeps_carriage_returns() {
        let chunks = lines("a\r\nb\r\nc", 2);
        assert_eq!(chunks, vec!["a\r\nb\r", "c"]);
        assert_eq!(chunks.join("\n"), "a\r\nb\r\nc");
    }

    #[test]
    fn test_split_by_delimiter() {
        // "BBB---" does not fit after "AAA---" (6 + 3 + 3 > 10)
        assert_eq!(
            delimited("AAA---BBB---CCC", "---", 10),
            vec!["AAA---", "BBB---", "CCC---"]
        );
        assert_eq!(
            delimited("AAA---BBB---CCC", "---", 12),
            vec!["AAA---BBB---", "CCC---"]
        );
        assert_eq!(
            delimited("AAA---BBB---CCC", "---", 2000),
            vec!["AAA---BBB---CCC---"]
        );
    }

    #[test]
    fn test_split_by_delimiter_drops_blank_parts() {
        assert_eq!(
            delimited("---AAA------BBB---  \n---", "---", 100),
            vec!["AAA---BBB---"]
        );
        // whitespace around content is kept
        assert_eq!(delimited(" A ;B", ";", 100), vec![" A ;B;"]);
        assert!(delimited("--- --- \n\t---", "---", 100).is_empty());
    }

    #[test]
    fn test_split_by_delimiter_oversized_part() {
        // an oversized part gets a chunk of its own, never an empty chunk before it
        assert_eq!(
            delimited("ABCDEFGHIJ;x;y", ";", 5),
            vec!["ABCDEFGHIJ;", "x;y;"]
        );
        assert_eq!(
            delimited("x;ABCDEFGHIJ;y", ";", 5),
            vec!["x;", "ABCDEFGHIJ;", "y;"]
        );
    }

    #[test]
    fn test_split_by_delimiter_without_delimiter_in_text() {
        assert_eq!(delimited("no markers here", "---", 100), vec!["no markers here---"]);
    }

    #[test]
    fn test_split_by_empty_delimiter() {
        assert!(delimited("AAA---BBB", "", 10).is_empty());
    }

    #[test]
    fn test_split_by_delimiter_counts_chars() {
        // 3 + 1 + 3 + 1 = 8 characters even though the bytes are many more
        assert_eq!(delimited("あいう、えおか", "、", 8), vec!["あいう、えおか、"]);
        assert_eq!(
            delimited("あいう、えおか", "、", 7),
            vec!["あいう、", "えおか、"]
        );
    }

    #[test]
    fn test_split_by_delimiter_properties() {
        let text = "section one---section two is longer---three---\n---four";
        let parts: Vec<&str> = text
            .split("---")
            .filter(|p| !p.trim().is_empty())
            .collect();
        for n in 1..=60 {
            let chunks = delimited(text, "---", n);
            for chunk in &chunks {
                assert!(chunk.ends_with("---"));
                let chunk_parts: Vec<&str> =
                    chunk.split("---").filter(|p| !p.is_empty()).collect();
                assert!(char_count(chunk) <= n || chunk_parts.len() == 1);
            }
            // every part appears once, in order, terminated by the delimiter
            let expected: String = parts.iter().map(|p| format!("{p}---")).collect();
            assert_eq!(chunks.concat(), expected);
            // re-splitting the concatenation reproduces the chunks
            assert_eq!(delimited(&chunks.concat(), "---", n), chunks);
        }
    }

    #[test]
    fn test_chunker_is_reusable() {
        let chunker = Chunker::new(ChunkingConfig::characters(2)).unwrap();
        assert_eq!(chunker.split("abcd"), vec!["ab", "cd"]);
        assert_eq!(chunker.split("xyz"), vec!["xy", "z"]);
        assert!(chunker.split("").is_empty());
    }
}
