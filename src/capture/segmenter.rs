//! Rule-based splitting of a dictated transcript into task titles.
//!
//! The phrase tables are an ordered contract: separators are applied one after
//! another across every segment produced so far, and reordering them changes
//! the output for transcripts that mix separators.

/// Separator phrases, in the order they are applied.
pub const SEPARATOR_PHRASES: [&str; 10] = [
    " and then ",
    " and ",
    " then ",
    " also ",
    " plus ",
    " & ",
    ", and then ",
    ", and ",
    ", then ",
    ", also ",
];

/// Leading filler phrases, checked in order; at most one is stripped.
pub const FILLER_PREFIXES: [&str; 6] = [
    "i need to ",
    "i have to ",
    "i should ",
    "need to ",
    "have to ",
    "should ",
];

const TRAILING_PUNCTUATION: [char; 5] = ['.', ',', ';', '!', '?'];

/// Splits `transcript` into cleaned task titles, in order of appearance.
///
/// Matching is case-insensitive; each title is lower-cased and then has its
/// first character capitalised. Blank input, or input made only of filler and
/// separator words, yields an empty list.
///
/// # Examples
///
/// ```
/// use jotter::capture::segment;
///
/// assert_eq!(segment("Buy milk and call mom"), vec!["Buy milk", "Call mom"]);
/// assert!(segment("   ").is_empty());
/// ```
#[must_use]
pub fn segment(transcript: &str) -> Vec<String> {
    let normalized = transcript.trim().to_lowercase();
    if normalized.is_empty() {
        return Vec::new();
    }

    split_on_separators(&normalized)
        .into_iter()
        .filter_map(clean_segment)
        .collect()
}

fn split_on_separators(text: &str) -> Vec<&str> {
    SEPARATOR_PHRASES
        .iter()
        .fold(vec![text], |segments, separator| {
            segments
                .into_iter()
                .flat_map(|segment| segment.split(*separator))
                .collect()
        })
}

fn clean_segment(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let without_filler = FILLER_PREFIXES
        .iter()
        .find_map(|prefix| trimmed.strip_prefix(prefix))
        .unwrap_or(trimmed);
    let body = without_filler.trim_end_matches(TRAILING_PUNCTUATION.as_slice());
    if is_only_connectives(body) {
        return None;
    }

    let title = capitalize_first(body);
    (title.chars().count() > 1).then_some(title)
}

/// Returns `true` for a segment made entirely of filler phrases and separator
/// words, such as the trailing "then" in "buy milk and then" or "also plus".
fn is_only_connectives(text: &str) -> bool {
    let mut rest = text;
    loop {
        rest = rest.trim_start_matches(|ch: char| ch.is_whitespace() || ch == ',');
        if rest.is_empty() {
            return true;
        }
        match connective_phrases().find_map(|phrase| strip_leading_word(rest, phrase)) {
            Some(remaining) => rest = remaining,
            None => return false,
        }
    }
}

fn connective_phrases() -> impl Iterator<Item = &'static str> {
    FILLER_PREFIXES
        .iter()
        .map(|prefix| prefix.trim_end())
        .chain(
            SEPARATOR_PHRASES
                .iter()
                .map(|separator| separator.trim_matches(|ch: char| ch == ' ' || ch == ',')),
        )
}

/// Strips `phrase` from the front of `text` when it ends on a word boundary.
fn strip_leading_word<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    text.strip_prefix(phrase).filter(|remaining| {
        remaining
            .chars()
            .next()
            .is_none_or(|ch| ch.is_whitespace() || ch == ',')
    })
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
