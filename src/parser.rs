//! Command line tokenizer
//!
//! Splits a completed line on whitespace into a bounded vector of
//! string views. Tokens past the vector capacity are counted but not
//! stored, so the dispatcher can report the overflow instead of
//! silently dropping arguments.

use heapless::Vec;

/// Token delimiters: space, tab, CR, LF, bell.
fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\u{7}')
}

/// A tokenized command line. `argv()[0]` is the command name.
#[derive(Debug)]
pub struct ParsedLine<'a, const N: usize> {
    argv: Vec<&'a str, N>,
    total: usize,
}

impl<'a, const N: usize> ParsedLine<'a, N> {
    /// Tokenize a line. Leading, trailing and repeated delimiters
    /// produce no empty tokens.
    pub fn parse(line: &'a str) -> Self {
        let mut argv = Vec::new();
        let mut total = 0;

        for token in line.split(is_delimiter).filter(|t| !t.is_empty()) {
            total += 1;
            let _ = argv.push(token);
        }

        Self { argv, total }
    }

    /// Stored tokens, command name first.
    pub fn argv(&self) -> &[&'a str] {
        &self.argv
    }

    /// The command name (first token), if any.
    pub fn command(&self) -> Option<&'a str> {
        self.argv.first().copied()
    }

    /// Total number of tokens on the line, including any that did not
    /// fit in the vector.
    pub fn token_count(&self) -> usize {
        self.total
    }

    /// Number of user arguments (tokens after the command name).
    pub fn user_args(&self) -> usize {
        self.total.saturating_sub(1)
    }

    /// Whether the line held more tokens than the vector stores.
    pub fn is_truncated(&self) -> bool {
        self.total > self.argv.len()
    }

    /// Whether the line was empty or delimiters-only.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
