//! Canonical book table used to derive a verse's testament.

use crate::core::types::Testament;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Old Testament book names as they appear in common KJV text files,
/// including the usual spelling variants.
static OLD_TESTAMENT: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Genesis",
        "Exodus",
        "Leviticus",
        "Numbers",
        "Deuteronomy",
        "Joshua",
        "Judges",
        "Ruth",
        "1 Samuel",
        "2 Samuel",
        "1 Kings",
        "2 Kings",
        "1 Chronicles",
        "2 Chronicles",
        "Ezra",
        "Nehemiah",
        "Esther",
        "Job",
        "Psalms",
        "Psalm",
        "Proverbs",
        "Ecclesiastes",
        "Song of Solomon",
        "Song of Songs",
        "Isaiah",
        "Jeremiah",
        "Lamentations",
        "Ezekiel",
        "Daniel",
        "Hosea",
        "Joel",
        "Amos",
        "Obadiah",
        "Jonah",
        "Micah",
        "Nahum",
        "Habakkuk",
        "Zephaniah",
        "Haggai",
        "Zechariah",
        "Malachi",
    ]
    .into_iter()
    .collect()
});

/// Testament of a book. Anything not in the Old Testament table is New.
pub fn testament_of(book: &str) -> Testament {
    if OLD_TESTAMENT.contains(book) {
        Testament::Old
    } else {
        Testament::New
    }
}
