//! Script classification heuristics used to pick a normalization rule.

/// Share of ASCII characters a string must exceed to count as English.
pub const DEFAULT_ENGLISH_THRESHOLD: f64 = 0.9;

/// Check if a character is a CJK Unified Ideograph (U+4E00..U+9FFF).
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c as u32, 0x4E00..=0x9FFF)
}

/// True if the text contains at least one CJK ideograph.
pub fn is_chinese(text: &str) -> bool {
    text.chars().any(is_cjk_ideograph)
}

/// True if more than `threshold` of the characters are ASCII.
/// The empty string has no non-ASCII characters and counts as English.
pub fn is_english_with(text: &str, threshold: f64) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return true;
    }
    let ascii = text.chars().filter(|c| c.is_ascii()).count();
    ascii as f64 / total as f64 > threshold
}

/// `is_english_with` at the default threshold.
pub fn is_english(text: &str) -> bool {
    is_english_with(text, DEFAULT_ENGLISH_THRESHOLD)
}

/// Classification policy handed to the normalizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptPolicy {
    pub english_threshold: f64,
}

impl ScriptPolicy {
    pub fn new(english_threshold: f64) -> Self {
        Self { english_threshold }
    }

    pub fn is_english(&self, text: &str) -> bool {
        is_english_with(text, self.english_threshold)
    }

    pub fn is_chinese(&self, text: &str) -> bool {
        is_chinese(text)
    }
}

impl Default for ScriptPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ENGLISH_THRESHOLD)
    }
}
