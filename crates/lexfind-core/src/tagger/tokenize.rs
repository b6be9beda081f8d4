//! Word tokenization.
//!
//! A word is a maximal run of letters and digits. Inner apostrophes and
//! hyphens join runs (`don't`, `usb-c`); every other character, whitespace
//! and punctuation included, separates words and is dropped.

use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’-][\p{L}\p{N}]+)*").expect("word pattern must compile")
});

/// Lazily yield the words of `text`, in order.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    WORD.find_iter(text).map(|m| m.as_str())
}
