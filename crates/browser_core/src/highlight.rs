//! Client-side marking of search matches in rendered text.

/// A run of text that either matched the needle or did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub is_match: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
        }
    }

    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
        }
    }
}

/// Splits `text` into alternating match/non-match segments.
///
/// Matching is a literal, case-insensitive, leftmost scan that consumes each
/// match before continuing, so matches never overlap. Segments keep the
/// casing of `text`. An empty needle never matches. The result always holds
/// at least one segment.
pub fn highlight(text: &str, needle: &str) -> Vec<Segment> {
    if needle.is_empty() || text.is_empty() {
        return vec![Segment::plain(text)];
    }

    let needle: Vec<char> = needle.chars().collect();
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while cursor < text.len() {
        match match_end(text, cursor, &needle) {
            Some(end) => {
                if plain_start < cursor {
                    segments.push(Segment::plain(&text[plain_start..cursor]));
                }
                segments.push(Segment::matched(&text[cursor..end]));
                cursor = end;
                plain_start = end;
            }
            None => {
                cursor += text[cursor..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::plain(&text[plain_start..]));
    }
    segments
}

/// Byte offset just past a match of `needle` starting at `start`, if any.
fn match_end(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut chars = text[start..].char_indices();
    for &expected in needle {
        let (_, actual) = chars.next()?;
        if !eq_ignore_case(actual, expected) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(offset, _)| start + offset))
}

fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
