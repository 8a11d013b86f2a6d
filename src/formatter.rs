//! Batch formatter: `Title - Artist` lines in, sorted `Artist - Title` out.

use crate::error::Result;
use crate::mapping::ArtistMapping;
use crate::models::{BatchStats, FormattedBatch, SongLine};
use crate::normalize::ArtistNormalizer;
use crate::parse::{is_blank, parse_song_line};
use crate::romanize::{AnyAsciiRomanizer, Romanizer};
use crate::script::ScriptPolicy;

pub struct SongFormatter<'a, R = AnyAsciiRomanizer> {
    normalizer: ArtistNormalizer<'a, R>,
}

impl<'a> SongFormatter<'a, AnyAsciiRomanizer> {
    pub fn new(mapping: &'a ArtistMapping, policy: ScriptPolicy) -> Self {
        Self {
            normalizer: ArtistNormalizer::new(mapping, policy),
        }
    }
}

impl<'a, R: Romanizer> SongFormatter<'a, R> {
    pub fn with_normalizer(normalizer: ArtistNormalizer<'a, R>) -> Self {
        Self { normalizer }
    }

    /// Format one parsed song as `"{artist} - {title}"`.
    pub fn format_song(&self, song: &SongLine) -> Result<String> {
        let artist = self.normalizer.normalize(&song.artist)?;
        Ok(song.record(&artist))
    }

    /// Format every line of `input`, then sort by code point.
    ///
    /// Blank and malformed lines are skipped (an artist made only of
    /// separators counts as malformed); a line whose artist fails to
    /// normalize is logged and skipped. None of these abort the batch.
    pub fn format_text(&self, input: &str) -> FormattedBatch {
        let mut stats = BatchStats::default();
        let mut records = Vec::new();

        for line in input.lines() {
            stats.lines_total += 1;

            if is_blank(line) {
                stats.blank += 1;
                continue;
            }

            let Some(song) = parse_song_line(line) else {
                stats.malformed += 1;
                continue;
            };

            match self.normalizer.normalize(&song.artist) {
                // Artist field held only separators, e.g. "Song - &"
                Ok(artist) if artist.is_empty() => {
                    log::warn!("Skipping line with no artist: {}", line);
                    stats.malformed += 1;
                }
                Ok(artist) => {
                    let record = song.record(&artist);
                    log::debug!("{} -> {}", line.trim(), record);
                    records.push(record);
                    stats.formatted += 1;
                }
                Err(e) => {
                    log::error!("Error processing line: {}", line);
                    log::error!("Error details: {}", e);
                    stats.failed += 1;
                }
            }
        }

        // String ordering is bytewise UTF-8, which matches code-point order
        records.sort();

        FormattedBatch { records, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn format(input: &str) -> FormattedBatch {
        let mapping = ArtistMapping::builtin();
        SongFormatter::new(&mapping, ScriptPolicy::default()).format_text(input)
    }

    #[test]
    fn test_end_to_end_sorted() {
        let batch = format("晴天 - 周杰伦\nShape of You - Ed Sheeran");
        assert_eq!(
            batch.records,
            vec!["Ed Sheeran - Shape of You", "Jay Chou - 晴天"]
        );
        assert_eq!(batch.to_text(), "Ed Sheeran - Shape of You\nJay Chou - 晴天");
    }

    #[test]
    fn test_deterministic() {
        let input = "倔强 - 五月天\n晴天 - 周杰伦\nHello - Adele\n江南 - 林俊杰\n";
        assert_eq!(format(input).to_text(), format(input).to_text());
    }

    #[test]
    fn test_malformed_line_tolerance() {
        let input = "晴天 - 周杰伦\nthis line has no separator\nHello - Adele\n江南 - Kevin";
        let batch = format(input);
        assert_eq!(batch.records.len(), 3);
        assert!(batch.records.iter().all(|r| !r.contains("no separator")));
        assert_eq!(batch.stats.malformed, 1);
        assert_eq!(batch.stats.formatted, 3);
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let batch = format("\r\n  \r\n晴天 - 周杰伦\r\n\r\nHello - Adele\r\n");
        assert_eq!(batch.records, vec!["Adele - Hello", "Jay Chou - 晴天"]);
        assert_eq!(batch.stats.blank, 3);
        assert_eq!(batch.stats.lines_total, 5);
    }

    #[test]
    fn test_code_point_order() {
        // Upper-case Latin sorts before lower-case, which sorts before CJK
        let batch = format("x - 五月天\ny - adele\nz - Zedd");
        assert_eq!(
            batch.records,
            vec!["Zedd - z", "adele - y", "五月天 (Wu Yue Tian) - x"]
        );
    }

    #[test]
    fn test_empty_input() {
        let batch = format("");
        assert!(batch.records.is_empty());
        assert_eq!(batch.to_text(), "");
        assert_eq!(batch.stats, BatchStats::default());
    }

    #[test]
    fn test_separator_only_artist_is_malformed() {
        let batch = format("Song - &\nOther - /\nHello - Adele");
        assert_eq!(batch.records, vec!["Adele - Hello"]);
        assert_eq!(batch.stats.malformed, 2);
        assert!(batch.records.iter().all(|r| !r.starts_with(" - ")));
    }

    #[test]
    fn test_unromanizable_ideograph_keeps_line() {
        let batch = format("Song - \u{5C0F}\u{9FB3}");
        assert_eq!(batch.records, vec!["\u{5C0F}\u{9FB3} (Xiao \u{9FB3}) - Song"]);
        assert_eq!(batch.stats.failed, 0);
    }

    #[test]
    fn test_decomposed_and_compatibility_names_unchanged() {
        let batch = format("Halo - Beyonce\u{301} Knowles\nSong - \u{F900}");
        assert_eq!(
            batch.records,
            vec!["Beyonce\u{301} Knowles - Halo", "\u{F900} - Song"]
        );
    }

    struct Failing;

    impl Romanizer for Failing {
        fn tokens(&self, text: &str) -> Result<Vec<String>> {
            Err(Error::Romanize {
                text: text.to_string(),
                ch: '?',
            })
        }
    }

    #[test]
    fn test_failed_line_does_not_abort_batch() {
        let mapping = ArtistMapping::builtin();
        let normalizer =
            ArtistNormalizer::with_romanizer(&mapping, ScriptPolicy::default(), Failing);
        let batch = SongFormatter::with_normalizer(normalizer)
            .format_text("倔强 - 五月天\n晴天 - 周杰伦");
        assert_eq!(batch.records, vec!["Jay Chou - 晴天"]);
        assert_eq!(batch.stats.failed, 1);
        assert_eq!(batch.stats.skipped(), 1);
    }
}
