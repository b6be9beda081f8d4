//! Rule-based lexical classification and lemmatization.
//!
//! Both functions take a single word as produced by
//! [`words`](super::tokenize::words) and are independent of each other: the
//! local tagger runs them as two passes over the same word boundaries.

use super::lexicon::{self, UNINFLECTED};
use crate::types::LexicalCategory;

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish", "ical"];

/// Lower-case `word` and fold typographic apostrophes to `'`.
pub fn normalize(word: &str) -> String {
    word.to_lowercase().replace('’', "'")
}

/// Assign a lexical category to one word.
pub fn classify(word: &str) -> LexicalCategory {
    classify_normalized(&normalize(word))
}

fn classify_normalized(w: &str) -> LexicalCategory {
    if !w.is_empty() && w.chars().all(char::is_numeric) {
        return LexicalCategory::Number;
    }
    if let Some(category) = lexicon::word_class(w) {
        return category;
    }
    if let Some((_, category)) = lexicon::irregular(w) {
        return category;
    }
    if let Some(stem) = w.strip_suffix("'s") {
        return classify_normalized(stem);
    }
    if verb_base(w).is_some() {
        return LexicalCategory::Verb;
    }
    if adjective_base(w).is_some() {
        return LexicalCategory::Adjective;
    }
    if w.len() > 4 && w.ends_with("ly") {
        return LexicalCategory::Adverb;
    }
    if w.len() > 5 && ADJECTIVE_SUFFIXES.iter().any(|s| w.ends_with(s)) {
        return LexicalCategory::Adjective;
    }

    let has_digit = w.chars().any(|c| c.is_numeric());
    let has_letter = w.chars().any(|c| c.is_alphabetic());
    let has_vowel = w.chars().any(|c| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
    if (has_digit && has_letter) || !has_vowel {
        return LexicalCategory::Other;
    }
    LexicalCategory::Noun
}

/// Reduce one word to its lower-cased dictionary form.
pub fn lemmatize(word: &str) -> String {
    lemmatize_normalized(&normalize(word))
}

fn lemmatize_normalized(w: &str) -> String {
    if let Some((lemma, _)) = lexicon::irregular(w) {
        return lemma.to_string();
    }
    if lexicon::word_class(w).is_some() {
        return w.to_string();
    }
    if let Some(stem) = w.strip_suffix("'s") {
        return lemmatize_normalized(stem);
    }
    if let Some(base) = verb_base(w) {
        return base;
    }
    if let Some(base) = adjective_base(w) {
        return base;
    }
    noun_singular(w)
}

// ---------------------------------------------------------------------------
// Suffix rules
// ---------------------------------------------------------------------------

/// Base form of an inflected verb, if that base is a known verb.
fn verb_base(w: &str) -> Option<String> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(stem) = w.strip_suffix("ies") {
        candidates.push(format!("{stem}y"));
    } else if let Some(stem) = w.strip_suffix("ied") {
        candidates.push(format!("{stem}y"));
    } else if let Some(stem) = inflection_stem(w) {
        candidates.push(stem.to_string());
        candidates.push(format!("{stem}e"));
        if let Some(single) = undouble(stem) {
            candidates.push(single.to_string());
        }
    } else if let Some(stem) = w.strip_suffix("es") {
        candidates.push(stem.to_string());
        candidates.push(format!("{stem}e"));
    } else if let Some(stem) = w.strip_suffix('s') {
        candidates.push(stem.to_string());
    }
    candidates
        .into_iter()
        .find(|c| lexicon::is_known(c, LexicalCategory::Verb))
}

/// Stem of an `-ing` or `-ed` form. Short stems (`b`-ed, `r`-ing) are
/// rejected so `bed` and `ring` stay nouns.
fn inflection_stem(w: &str) -> Option<&str> {
    match w.strip_suffix("ing") {
        Some(stem) if stem.len() >= 2 => Some(stem),
        Some(_) => None,
        None => w.strip_suffix("ed").filter(|stem| stem.len() >= 3),
    }
}

/// Base form of a comparative or superlative, if that base is a known
/// adjective.
fn adjective_base(w: &str) -> Option<String> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(stem) = w.strip_suffix("iest").or_else(|| w.strip_suffix("ier")) {
        candidates.push(format!("{stem}y"));
    } else if let Some(stem) = w.strip_suffix("est").or_else(|| w.strip_suffix("er")) {
        candidates.push(stem.to_string());
        candidates.push(format!("{stem}e"));
        if let Some(single) = undouble(stem) {
            candidates.push(single.to_string());
        }
    }
    candidates
        .into_iter()
        .find(|c| lexicon::is_known(c, LexicalCategory::Adjective))
}

fn noun_singular(w: &str) -> String {
    if UNINFLECTED.contains(w) || w.len() <= 3 {
        return w.to_string();
    }
    if let Some(stem) = w.strip_suffix("ies") {
        if w.len() > 4 {
            return format!("{stem}y");
        }
    }
    for suffix in ["sses", "shes", "ches", "xes", "zzes"] {
        if w.ends_with(suffix) {
            return w[..w.len() - 2].to_string();
        }
    }
    if w.ends_with("ss") || w.ends_with("us") || w.ends_with("is") {
        return w.to_string();
    }
    match w.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => w.to_string(),
    }
}

/// `stem` minus a doubled final consonant (`runn` → `run`).
fn undouble(stem: &str) -> Option<&str> {
    let mut chars = stem.chars().rev();
    let last = chars.next()?;
    let prev = chars.next()?;
    if last == prev && last.is_ascii_alphabetic() && !matches!(last, 'a' | 'e' | 'i' | 'o' | 'u') {
        Some(&stem[..stem.len() - 1])
    } else {
        None
    }
}
