//! Core types for lexfind-core.
//!
//! This module defines the data structures shared across the pipeline: the
//! tagged [`Token`], its [`LexicalCategory`], the [`SearchTermSet`] built by
//! extraction, and the catalog [`Product`].

use std::collections::BTreeSet;

/// A word produced by a tagger, annotated with exactly one category and one
/// lemma.
///
/// Tokens are ephemeral: they are built per query and consumed immediately by
/// [`extract`](crate::extract::extract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text exactly as it appeared in the query.
    pub text: String,
    /// Coarse part-of-speech class.
    pub category: LexicalCategory,
    /// Dictionary base form. Equal to the surface form (lower-cased) when no
    /// reduction applies.
    pub lemma: String,
}

impl Token {
    /// Build a token, falling back to the lower-cased surface form when
    /// `lemma` is empty.
    pub fn new(text: impl Into<String>, category: LexicalCategory, lemma: impl Into<String>) -> Self {
        let text = text.into();
        let mut lemma = lemma.into();
        if lemma.trim().is_empty() {
            lemma = text.to_lowercase();
        }
        Self { text, category, lemma }
    }
}

/// Lexical category, normalised across the local and remote taggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LexicalCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Particle,
    Number,
    Interjection,
    Affix,
    /// Catch-all word class: unknown, foreign or code-like words.
    Other,
    /// The tagger produced no category for this word.
    Unclassified,
}

impl LexicalCategory {
    /// Whether words of this category contribute to a search-term set.
    pub fn is_meaningful(self) -> bool {
        matches!(
            self,
            LexicalCategory::Noun | LexicalCategory::Adjective | LexicalCategory::Other
        )
    }
}

impl std::fmt::Display for LexicalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexicalCategory::Noun => write!(f, "noun"),
            LexicalCategory::Verb => write!(f, "verb"),
            LexicalCategory::Adjective => write!(f, "adjective"),
            LexicalCategory::Adverb => write!(f, "adverb"),
            LexicalCategory::Pronoun => write!(f, "pronoun"),
            LexicalCategory::Determiner => write!(f, "determiner"),
            LexicalCategory::Preposition => write!(f, "preposition"),
            LexicalCategory::Conjunction => write!(f, "conjunction"),
            LexicalCategory::Particle => write!(f, "particle"),
            LexicalCategory::Number => write!(f, "number"),
            LexicalCategory::Interjection => write!(f, "interjection"),
            LexicalCategory::Affix => write!(f, "affix"),
            LexicalCategory::Other => write!(f, "other"),
            LexicalCategory::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// Deduplicated, lower-cased set of terms derived from one query.
///
/// Backed by a `BTreeSet` so iteration (and therefore logging and test
/// output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTermSet(BTreeSet<String>);

impl SearchTermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `term` lower-cased. Blank terms are ignored. Returns `true` if
    /// the set did not already contain the term.
    pub fn insert(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        self.0.insert(term.to_lowercase())
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(String::as_str)
    }

    /// True if any term is also in `keywords`.
    pub fn intersects(&self, keywords: &BTreeSet<String>) -> bool {
        // Walk the smaller side.
        if self.0.len() <= keywords.len() {
            self.0.iter().any(|t| keywords.contains(t))
        } else {
            keywords.iter().any(|k| self.0.contains(k))
        }
    }
}

impl<'a> FromIterator<&'a str> for SearchTermSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = SearchTermSet::new();
        for term in iter {
            set.insert(term);
        }
        set
    }
}

impl std::fmt::Display for SearchTermSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, term) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{term}")?;
        }
        write!(f, "}}")
    }
}

/// A catalog entry. Immutable after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub features: String,
    /// Lower-cased, never empty.
    pub keywords: BTreeSet<String>,
}
