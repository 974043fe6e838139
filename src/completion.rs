//! Tab completion against the command table
//!
//! Completes the first word of the in-progress line only. A single
//! match completes inline with a trailing space; multiple matches
//! extend to their longest common prefix, or ask the caller to list
//! the candidates when no further extension is unambiguous.

use crate::command::Command;
use crate::line_buffer::LineBuffer;

/// What a Tab press did to the line, and what the caller must echo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome<'c> {
    /// Nothing to complete; no feedback.
    None,
    /// Completion refused. Ring the bell.
    Reject,
    /// The line was extended. Echo `suffix`, plus one space when
    /// `completed` (the word now names exactly one command).
    Extended { suffix: &'c str, completed: bool },
    /// The word already equals the longest common prefix of several
    /// candidates. List the matching names.
    ListMatches,
}

/// Attempt completion of the current word, extending `line` in place.
///
/// Only the command name completes: a line that already contains a
/// space is refused outright, and an empty line is left alone.
pub fn complete<'c, const N: usize>(
    line: &mut LineBuffer<N>,
    commands: &'c [Command],
) -> TabOutcome<'c> {
    let word = line.as_str();
    if word.contains(' ') {
        return TabOutcome::Reject;
    }
    if word.is_empty() {
        return TabOutcome::None;
    }
    let word_len = word.len();

    // One scan: count matches, remember the first in table order as
    // the reference, and fold the common prefix length down as other
    // matches disagree. Order-independent since only equality extends.
    let mut reference: Option<&'c str> = None;
    let mut match_count = 0;
    let mut lcp_len = 0;

    for cmd in commands {
        if cmd.name.starts_with(word) {
            match_count += 1;
            match reference {
                None => {
                    reference = Some(cmd.name);
                    lcp_len = cmd.name.len();
                }
                Some(first) => lcp_len = lcp_len.min(common_prefix_len(first, cmd.name)),
            }
        }
    }

    let Some(reference) = reference else {
        return TabOutcome::Reject;
    };

    if match_count == 1 {
        // Unique match: complete the word and terminate it with a
        // space, if both fit.
        let suffix = &reference[word_len..];
        if line.remaining() > suffix.len() {
            let _ = line.push_str(suffix);
            let _ = line.push(b' ');
            TabOutcome::Extended {
                suffix,
                completed: true,
            }
        } else {
            TabOutcome::Reject
        }
    } else if lcp_len > word_len {
        // Ambiguous, but the candidates agree beyond the word: extend
        // up to the point of disagreement. No trailing space.
        let suffix = &reference[word_len..lcp_len];
        if line.remaining() >= suffix.len() {
            let _ = line.push_str(suffix);
            TabOutcome::Extended {
                suffix,
                completed: false,
            }
        } else {
            TabOutcome::Reject
        }
    } else {
        TabOutcome::ListMatches
    }
}

/// Length in bytes of the longest common prefix of two strings,
/// always on a char boundary of both.
fn common_prefix_len(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}
