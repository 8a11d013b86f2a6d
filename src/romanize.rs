//! Romanization of Chinese artist names.
//!
//! The normalizer only needs a list of display tokens per name; the
//! transliteration table behind it is pluggable through `Romanizer`.

use crate::error::Result;
use crate::script::is_cjk_ideograph;
use any_ascii::any_ascii_char;

/// Turns a name into space-joinable romanized tokens.
///
/// Backends that cannot handle a character may return `Error::Romanize`;
/// the batch then skips only that line.
pub trait Romanizer {
    /// One token per ideograph; runs of other non-space characters
    /// become one token each. Tokens are not yet capitalized.
    fn tokens(&self, text: &str) -> Result<Vec<String>>;

    /// Capitalized tokens joined by single spaces, e.g. `"Wu Yue Tian"`.
    fn romanize(&self, text: &str) -> Result<String> {
        let tokens = self.tokens(text)?;
        Ok(tokens
            .iter()
            .map(|t| capitalize(t))
            .collect::<Vec<_>>()
            .join(" "))
    }
}

/// Toneless pinyin from the `any_ascii` Han tables. Ideographs missing
/// from the tables are kept as their own token, so this never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyAsciiRomanizer;

impl Romanizer for AnyAsciiRomanizer {
    fn tokens(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = Vec::new();
        let mut run = String::new();

        for c in text.chars() {
            if is_cjk_ideograph(c) {
                flush(&mut run, &mut tokens);
                let syllable = any_ascii_char(c).trim();
                if syllable.is_empty() {
                    // No reading in the table: keep the ideograph itself
                    log::debug!("No romanization for '{}' in '{}'", c, text);
                    tokens.push(c.to_string());
                } else {
                    tokens.push(syllable.to_lowercase());
                }
            } else if c.is_whitespace() {
                flush(&mut run, &mut tokens);
            } else {
                run.push(c);
            }
        }
        flush(&mut run, &mut tokens);

        Ok(tokens)
    }
}

fn flush(run: &mut String, tokens: &mut Vec<String>) {
    if !run.is_empty() {
        tokens.push(std::mem::take(run));
    }
}

/// Upper-case the first character, lower-case the rest.
pub fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
