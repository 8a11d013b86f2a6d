//! Artist name mapping: exact source name to English display name.
//!
//! The built-in table is read-only. An `ArtistMapping` is built once at
//! startup (optionally extended from a JSON file) and handed to the
//! normalizer by reference.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::path::Path;

// ============================================================================
// BUILT-IN ARTIST NAMES
// ============================================================================

/// Chinese (and alias) artist names to their English stage names.
pub static BUILTIN_ARTIST_NAMES: Lazy<FxHashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = FxHashMap::default();

    m.insert("方大同", "Khalil Fong");
    m.insert("王力宏", "Leehom Wang");
    m.insert("林俊杰", "JJ Lin");
    m.insert("林忆莲", "Sandy Lam");
    m.insert("张惠妹", "A-mei");
    m.insert("陈奕迅", "Eason Chan");
    m.insert("陶喆", "David Tao");
    m.insert("汪苏泷", "Silence Wang");
    m.insert("王菲", "Faye Wong");
    m.insert("李宗盛", "Jonathan Lee");
    m.insert("张学友", "Jacky Cheung");
    m.insert("周杰伦", "Jay Chou");
    m.insert("周笔畅", "Bibi Zhou");
    m.insert("周传雄", "Steve Chou");
    m.insert("薛之谦", "Joker Xue");
    m.insert("孙燕姿", "Stefanie Sun");
    m.insert("莫文蔚", "Karen Mok");
    m.insert("邓紫棋", "G.E.M.");
    m.insert("蔡依林", "Jolin Tsai");
    m.insert("蔡健雅", "Tanya Chua");
    m.insert("萧敬腾", "Jam Hsiao");
    // Latin aliases and credited variants
    m.insert("Kevin", "JJ Lin");
    m.insert("G.E.M.邓紫棋", "G.E.M.");

    m
});

// ============================================================================
// MAPPING
// ============================================================================

#[derive(Clone, Debug, Default)]
pub struct ArtistMapping {
    names: FxHashMap<String, String>,
}

impl ArtistMapping {
    /// An empty table; every artist falls through to script rules.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        let names = BUILTIN_ARTIST_NAMES
            .iter()
            .map(|(&k, &v)| (k.to_string(), v.to_string()))
            .collect();
        Self { names }
    }

    /// Parse a JSON object of `"source": "Display"` pairs.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        let names: FxHashMap<String, String> =
            serde_json::from_str(json).map_err(|e| Error::Mapping {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;
        Ok(Self { names })
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::Mapping {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&json, path)
    }

    /// Merge `other` into this table; its entries win on conflict.
    pub fn extend(&mut self, other: ArtistMapping) {
        self.names.extend(other.names);
    }

    pub fn insert(&mut self, source: impl Into<String>, display: impl Into<String>) {
        self.names.insert(source.into(), display.into());
    }

    /// Exact-match lookup, no case folding.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.names.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
