//! Boundary snapping for section edges.
//!
//! Both searches are bounded: a snap costs at most
//! O(`sentence_search_limit`) character inspections, which keeps the whole
//! splitting loop near-linear in document length no matter how far away
//! the nearest true sentence boundary is.

use crate::config::SplitConfig;

/// Find the end of the section starting at `start`.
///
/// The nominal cut point is `start + max_section_length`. From there, scan
/// forward up to `sentence_search_limit` characters for a sentence
/// terminator, remembering the most recent word break seen on the way. If
/// the budget runs out without a terminator, fall back to that word break
/// so the cut at least keeps whole words intact. A cut that is still short
/// of the document end is advanced one position so the section includes
/// the character it stopped on.
pub(crate) fn snap_end(text: &[char], start: usize, config: &SplitConfig) -> usize {
    let length = text.len();
    let target = start + config.max_section_length;
    if target >= length {
        return length;
    }

    let mut end = target;
    let mut last_word = None;
    while end < length
        && end - target < config.sentence_search_limit
        && !config.is_sentence_ending(text[end])
    {
        if config.is_word_break(text[end]) {
            last_word = Some(end);
        }
        end += 1;
    }
    if end < length && !config.is_sentence_ending(text[end]) {
        if let Some(word) = last_word {
            end = word;
        }
    }

    if end < length {
        end + 1
    } else {
        end
    }
}

/// Trim the section's start so it does not begin mid-sentence.
///
/// Scans backward from `start`, bounded below by the document start and by
/// `end - max_section_length - 2 * sentence_search_limit`, stopping at a
/// sentence terminator and falling back to the most recent word break. A
/// start that stopped on a terminator (or word break) is advanced one
/// position past it, unless it is already at the document start.
pub(crate) fn snap_start(text: &[char], start: usize, end: usize, config: &SplitConfig) -> usize {
    let floor = end.saturating_sub(config.max_section_length + 2 * config.sentence_search_limit);

    let mut start = start;
    let mut last_word = None;
    while start > 0 && start > floor && !config.is_sentence_ending(text[start]) {
        if config.is_word_break(text[start]) {
            last_word = Some(start);
        }
        start -= 1;
    }
    if !config.is_sentence_ending(text[start]) {
        if let Some(word) = last_word {
            start = word;
        }
    }

    if start > 0 {
        start + 1
    } else {
        start
    }
}
