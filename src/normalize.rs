//! Artist name normalization for display.
//!
//! Rule order per artist token: known mapping, then English passthrough,
//! then Chinese with romanization appended, then unchanged. A name that
//! collides with a mapping key is never transliterated.

use crate::error::Result;
use crate::mapping::ArtistMapping;
use crate::romanize::{AnyAsciiRomanizer, Romanizer};
use crate::script::ScriptPolicy;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Separators between co-credited artists (after `/` is rewritten to `&`).
pub static ARTIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[&,]").unwrap());

/// Joiner between normalized co-credited artists.
pub const ARTIST_JOINER: &str = " & ";

pub struct ArtistNormalizer<'a, R = AnyAsciiRomanizer> {
    mapping: &'a ArtistMapping,
    policy: ScriptPolicy,
    romanizer: R,
}

impl<'a> ArtistNormalizer<'a, AnyAsciiRomanizer> {
    pub fn new(mapping: &'a ArtistMapping, policy: ScriptPolicy) -> Self {
        Self::with_romanizer(mapping, policy, AnyAsciiRomanizer)
    }
}

impl<'a, R: Romanizer> ArtistNormalizer<'a, R> {
    pub fn with_romanizer(mapping: &'a ArtistMapping, policy: ScriptPolicy, romanizer: R) -> Self {
        Self {
            mapping,
            policy,
            romanizer,
        }
    }

    /// Normalize a raw artist field, which may credit several artists.
    /// e.g., "周杰伦/Kevin" → "Jay Chou & JJ Lin"
    pub fn normalize(&self, artist: &str) -> Result<String> {
        let cleaned = prepare(artist);

        if !ARTIST_SEPARATOR.is_match(&cleaned) {
            return self.normalize_single(&cleaned);
        }

        let mut names = Vec::new();
        for token in ARTIST_SEPARATOR.split(&cleaned) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            names.push(self.normalize_single(token)?);
        }
        Ok(names.join(ARTIST_JOINER))
    }

    /// Normalize one artist token that contains no separators.
    pub fn normalize_single(&self, artist: &str) -> Result<String> {
        if let Some(display) = self.lookup(artist) {
            return Ok(display.to_string());
        }

        if self.policy.is_english(artist) {
            return Ok(artist.to_string());
        }

        if self.policy.is_chinese(artist) {
            let romanized = self.romanizer.romanize(artist)?;
            return Ok(format!("{} ({})", artist, romanized));
        }

        Ok(artist.to_string())
    }

    /// Exact match first, then the NFC form as key. The returned text of
    /// unmapped names is never recomposed.
    fn lookup(&self, artist: &str) -> Option<&'a str> {
        let mapping: &'a ArtistMapping = self.mapping;
        if let Some(display) = mapping.get(artist) {
            return Some(display);
        }
        let composed: String = artist.nfc().collect();
        if composed != artist {
            return mapping.get(&composed);
        }
        None
    }
}

/// Trim and rewrite `/` to `&`.
fn prepare(artist: &str) -> String {
    artist.trim().replace('/', "&")
}
