//! Text Pagination
//!
//! Splits long descriptions into chunks that fit a chat message budget.
//! Lengths are counted in characters, not bytes, since that is what chat
//! platforms limit.
//!
//! Two policies exist:
//! - [`split_text`]: word-aware greedy packing, used for continuation embeds.
//! - [`hard_split`]: a raw two-part cut at a fixed character index, used for
//!   monster actions and feature text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{Result, SrdError};

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("Invalid word regex"));

/// Default chunk size for continuation embeds (spell descriptions).
pub const DEFAULT_CONTINUATION_LIMIT: usize = 2000;

/// Default threshold for the two-part hard split.
pub const DEFAULT_HARD_SPLIT_THRESHOLD: usize = 2048;

/// Split `text` into chunks of at most `max_len` characters on word boundaries.
///
/// Each chunk is a contiguous slice of `text` with its surrounding whitespace
/// trimmed, so line breaks inside a chunk survive. A single word longer than
/// `max_len` is emitted alone rather than cut.
///
/// # Errors
/// Returns [`SrdError::InvalidArgument`] when `max_len` is zero.
pub fn split_text(text: &str, max_len: usize) -> Result<Vec<String>> {
    if max_len == 0 {
        return Err(SrdError::InvalidArgument(
            "chunk length must be greater than zero".to_string(),
        ));
    }

    let mut chunks = Vec::new();
    // byte range of the open chunk, and its length in chars
    let mut open: Option<(usize, usize)> = None;
    let mut open_chars = 0usize;

    for word in WORD.find_iter(text) {
        let word_chars = word.as_str().chars().count();

        match open {
            None => {
                open = Some((word.start(), word.end()));
                open_chars = word_chars;
            }
            Some((start, end)) => {
                let gap_chars = text[end..word.start()].chars().count();
                if open_chars + gap_chars + word_chars > max_len {
                    chunks.push(text[start..end].to_string());
                    open = Some((word.start(), word.end()));
                    open_chars = word_chars;
                } else {
                    open = Some((start, word.end()));
                    open_chars += gap_chars + word_chars;
                }
            }
        }
    }

    if let Some((start, end)) = open {
        chunks.push(text[start..end].to_string());
    }

    Ok(chunks)
}

/// Cut `text` into at most two blocks at character index `threshold`.
///
/// Text shorter than `threshold` comes back as a single block. Anything else
/// yields exactly two blocks; the cut ignores word boundaries and nothing is
/// trimmed, so the blocks concatenate back to `text`. The second block is not
/// bounded by `threshold`.
///
/// # Errors
/// Returns [`SrdError::InvalidArgument`] when `threshold` is zero.
pub fn hard_split(text: &str, threshold: usize) -> Result<Vec<String>> {
    if threshold == 0 {
        return Err(SrdError::InvalidArgument(
            "split threshold must be greater than zero".to_string(),
        ));
    }

    match text.char_indices().nth(threshold) {
        Some((cut, _)) => Ok(vec![text[..cut].to_string(), text[cut..].to_string()]),
        None if text.chars().count() == threshold => Ok(vec![text.to_string(), String::new()]),
        None => Ok(vec![text.to_string()]),
    }
}
