//! Core data models for the song formatter.

use serde::Serialize;

// ============================================================================
// Song Models
// ============================================================================

/// One parsed input line. Both fields are trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongLine {
    pub title: String,
    pub artist: String,
}

impl SongLine {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Render as an output record with the artist already normalized.
    pub fn record(&self, normalized_artist: &str) -> String {
        format!("{} - {}", normalized_artist, self.title)
    }
}

/// Sorted output of one batch run plus its counters.
#[derive(Clone, Debug, Default)]
pub struct FormattedBatch {
    pub records: Vec<String>,
    pub stats: BatchStats,
}

impl FormattedBatch {
    /// Output file contents: records joined by `\n`, no trailing newline.
    pub fn to_text(&self) -> String {
        self.records.join("\n")
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Per-run line counters, serialized to JSON with `--stats`.
/// `lines_total == blank + malformed + failed + formatted`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    pub lines_total: usize,
    pub blank: usize,
    pub malformed: usize,
    pub failed: usize,
    pub formatted: usize,
}

impl BatchStats {
    pub fn skipped(&self) -> usize {
        self.blank + self.malformed + self.failed
    }
}
