//! Output formatting for CLI commands
//!
//! Helpers for human-readable output. Colors follow the `colored`
//! crate's defaults, so NO_COLOR is respected.

use crate::core::types::{MatchBounds, VersePairing};

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for verse references
    pub fn reference(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for matched terms inside verse text
    pub fn term(s: &str) -> ColoredString {
        s.yellow().bold()
    }

    /// Style for term-pair labels
    pub fn term_pair(s: &str) -> ColoredString {
        s.magenta()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Merge overlapping match bounds into sorted, disjoint byte ranges
pub fn merge_bounds(matches: &[MatchBounds]) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = matches.iter().map(|m| (m.start, m.end)).collect();
    spans.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Render verse text with every match styled by `style`
pub fn highlight_with<F>(text: &str, matches: &[MatchBounds], style: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in merge_bounds(matches) {
        let (Some(before), Some(hit)) = (text.get(cursor..start), text.get(start..end)) else {
            continue;
        };
        out.push_str(before);
        out.push_str(&style(hit));
        cursor = end;
    }
    out.push_str(text.get(cursor..).unwrap_or_default());
    out
}

/// Render verse text with matches in the term color
pub fn highlight(text: &str, matches: &[MatchBounds]) -> String {
    highlight_with(text, matches, |s| colors::term(s).to_string())
}

/// "Genesis 1:1" or "Genesis 1:1 / Genesis 1:3"
pub fn pairing_references(pairing: &VersePairing) -> String {
    pairing
        .verses
        .iter()
        .map(|v| v.reference.as_str())
        .collect::<Vec<_>>()
        .join(" / ")
}

/// "same verse" or "3 verses apart"
pub fn describe_proximity(proximity: usize) -> String {
    match proximity {
        0 => "same verse".to_string(),
        1 => "adjacent".to_string(),
        n => format!("{n} verses apart"),
    }
}

/// Format duration into human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{mins:.0}m {remaining_secs:.1}s")
    } else if secs >= 1.0 {
        format!("{secs:.2}s")
    } else {
        let ms = secs * 1000.0;
        format!("{ms:.0}ms")
    }
}

/// Print a serializable value as pretty JSON
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
