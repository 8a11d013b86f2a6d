//! Line parser for `Title - Artist` input.

use crate::models::SongLine;

/// Literal separator between title and artist.
pub const SONG_SEPARATOR: &str = " - ";

/// Returns true for lines that are skipped without a diagnostic.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Parse one input line into a `SongLine`.
///
/// Splits on the first `" - "` only; anything after it, further separators
/// included, is the artist. Blank lines return `None` silently, lines
/// without the separator return `None` with a warning.
pub fn parse_song_line(line: &str) -> Option<SongLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.split_once(SONG_SEPARATOR) {
        Some((title, artist)) => Some(SongLine::new(title.trim(), artist.trim())),
        None => {
            log::warn!("Skipping malformed line: {}", line);
            None
        }
    }
}
