//! Line-oriented corpus parsing.
//!
//! Each logical record is one line, `"<Book> <chapter>:<verse> <text>"`.
//! Blank lines, header/footer lines and anything that does not have
//! that shape are dropped; a bad line never fails the whole load.

use crate::core::corpus::books::testament_of;
use crate::core::corpus::Corpus;
use crate::core::error::{Result, VerseError};
use crate::core::types::Verse;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::Arc;

static VERSE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<book>\S.*?)\s+(?P<chapter>\d+):(?P<verse>\d+)\s+(?P<text>\S.*?)\s*$")
        .expect("verse line pattern is valid")
});

/// Lines starting with any of these are front/back matter, not verses
const HEADER_PREFIXES: [&str; 5] = ["#", "***", "Project Gutenberg", "End of", "The King James"];

/// Counters from one parse, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub verses: usize,
    pub blank: usize,
    pub headers: usize,
    pub malformed: usize,
}

/// Parses raw corpus text into positioned verses
#[derive(Debug, Clone, Default)]
pub struct CorpusLoader;

impl CorpusLoader {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a corpus file.
    ///
    /// A file that cannot be read yields `CorpusUnavailable`; the load
    /// is not retried.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Corpus> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            VerseError::CorpusUnavailable(format!("{}: {e}", path.display()))
        })?;
        tracing::info!("Loading corpus from {:?}", path);
        Ok(self.parse(&raw))
    }

    /// Parse corpus text. Never fails; unusable lines are skipped.
    pub fn parse(&self, raw: &str) -> Corpus {
        let (verses, stats) = self.parse_with_stats(raw);
        tracing::info!(
            "Parsed {} verses ({} blank, {} header, {} malformed lines skipped)",
            stats.verses,
            stats.blank,
            stats.headers,
            stats.malformed
        );
        Corpus::from_verses(verses)
    }

    /// Parse and also report what was skipped
    pub fn parse_with_stats(&self, raw: &str) -> (Vec<Arc<Verse>>, LoadStats) {
        let mut stats = LoadStats::default();
        let mut verses = Vec::new();

        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        for line in raw.lines() {
            let line = line.trim();
            if line.is_empty() {
                stats.blank += 1;
                continue;
            }
            if HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) {
                stats.headers += 1;
                continue;
            }
            match parse_line(line, verses.len()) {
                Some(verse) => verses.push(Arc::new(verse)),
                None => {
                    tracing::debug!("Skipping malformed corpus line: {:?}", line);
                    stats.malformed += 1;
                }
            }
        }

        stats.verses = verses.len();
        (verses, stats)
    }
}

fn parse_line(line: &str, position: usize) -> Option<Verse> {
    let caps = VERSE_LINE.captures(line)?;
    let book = caps["book"].to_string();
    let chapter: u32 = caps["chapter"].parse().ok()?;
    let number: u32 = caps["verse"].parse().ok()?;
    let text = caps["text"].to_string();
    let reference = format!("{book} {chapter}:{number}");
    let testament = testament_of(&book);

    Some(Verse {
        book,
        chapter,
        number,
        text,
        reference,
        position,
        testament,
    })
}
