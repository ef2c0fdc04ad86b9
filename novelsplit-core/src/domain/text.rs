//! Character classification and whitespace helpers
//!
//! Novel text mixes CJK ideographs, full-width punctuation and the
//! ideographic space (U+3000). All length measurements in this crate are in
//! `char`s, never bytes, so a CJK character counts as one.

/// Sentence or clause punctuation that never appears in a real heading label
pub const HEADING_FORBIDDEN_PUNCTUATION: &[char] =
    &['，', '。', '！', '？', '；', '：', ',', '.', '!', '?', ';', ':'];

/// Characters that end a sentence for the quality gate
pub const SENTENCE_TERMINATORS: &[char] = &['。', '！', '？', '…', '!', '?', '.'];

/// Returns true for CJK ideographs and Japanese kana
#[inline]
pub fn is_cjk(ch: char) -> bool {
    matches!(ch as u32,
        0x4E00..=0x9FFF      // CJK Unified Ideographs
        | 0x3400..=0x4DBF    // Extension A
        | 0x20000..=0x2A6DF  // Extension B
        | 0xF900..=0xFAFF    // Compatibility Ideographs
        | 0x3007             // 〇
        | 0x3040..=0x30FF    // Hiragana / Katakana
    )
}

/// Returns true if the text contains at least one CJK character
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

/// Number of chars in the text
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Collapse every whitespace run (including U+3000 and newlines) into a
/// single ASCII space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }

    out
}

/// Remove every whitespace character
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// First `max_chars` chars of the text
pub fn clip_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Drop leading and trailing blank lines, keeping inner lines untouched
pub fn trim_blank_lines(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let first = lines.iter().position(|l| !l.trim().is_empty());
    let last = lines.iter().rposition(|l| !l.trim().is_empty());

    match (first, last) {
        (Some(first), Some(last)) => lines
            .get(first..=last)
            .map(|slice| slice.join("\n"))
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// Returns true if any forbidden heading punctuation occurs in the text
pub fn has_heading_punctuation(text: &str) -> bool {
    text.contains(HEADING_FORBIDDEN_PUNCTUATION)
}

/// Number of non-empty segments after splitting on sentence terminators
pub fn sentence_segments(text: &str) -> usize {
    text.split(SENTENCE_TERMINATORS)
        .filter(|segment| !segment.trim().is_empty())
        .count()
}

/// Returns true if the text holds nothing but ASCII digits and whitespace
pub fn is_digits_only(text: &str) -> bool {
    let mut saw_digit = false;
    for ch in text.chars() {
        if ch.is_ascii_digit() {
            saw_digit = true;
        } else if !ch.is_whitespace() {
            return false;
        }
    }
    saw_digit
}
