//! Title to path-segment processing
//!
//! Turns a free-text project title into a single directory name. Sanitizing
//! produces a lowercase, underscore-delimited segment; truncating bounds it to
//! a fixed number of words and characters.

use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{MAX_TITLE_CHARS, MAX_TITLE_WORDS};

static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\x{FEFF}\-.]+").expect("valid separator regex"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9_\-]").expect("valid disallowed regex"));
static UNDERSCORE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_+").expect("valid underscore regex"));

/// How a title is turned into a path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TitleOptions {
    pub(crate) sanitize: bool,
    pub(crate) truncate: bool,
}

/// Process a title into a path segment.
///
/// Returns an empty string when nothing usable is left; callers must treat
/// that as invalid input rather than as a segment.
pub(crate) fn process_title(title: &str, opts: TitleOptions) -> String {
    let mut processed = title.trim_matches(is_blank).to_string();

    if opts.sanitize {
        processed = sanitize(&processed);
    }

    if opts.truncate {
        if opts.sanitize {
            processed = truncate_words(&processed, MAX_TITLE_WORDS);
        }
        if processed.chars().count() > MAX_TITLE_CHARS {
            processed = processed.chars().take(MAX_TITLE_CHARS).collect();
            if opts.sanitize {
                processed.truncate(processed.trim_end_matches('_').len());
            }
        }
    }

    processed
}

// Unicode whitespace plus the byte-order mark
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Lowercase snake_case with everything outside `[a-z0-9_-]` removed
pub(crate) fn sanitize(title: &str) -> String {
    let lowered = title.to_lowercase();
    let separated = SEPARATOR_RUNS.replace_all(&lowered, "_");
    let stripped = DISALLOWED.replace_all(&separated, "");
    let collapsed = UNDERSCORE_RUNS.replace_all(&stripped, "_");
    collapsed.trim_matches('_').to_string()
}

fn truncate_words(segment: &str, max_words: usize) -> String {
    let words: Vec<&str> = segment.split('_').filter(|w| !w.is_empty()).collect();
    if words.len() <= max_words {
        return segment.to_string();
    }
    words[..max_words].join("_")
}
