//! Tagging: turns query text into [`Token`]s.
//!
//! Every backend implements [`Tagger`]; callers never know which one ran.
//! The local backend lives here. The remote syntax-analysis backend lives in
//! the `lexfind-remote` crate.

pub mod lemma;
pub mod lexicon;
pub mod tokenize;

use crate::error::TagError;
use crate::types::{LexicalCategory, Token};
use async_trait::async_trait;

/// A tagging backend.
///
/// `tag` resolves exactly once, either with the full token list or with a
/// terminal error. Punctuation and whitespace never appear as tokens.
#[async_trait]
pub trait Tagger: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    async fn tag(&self, text: &str) -> Result<Vec<Token>, TagError>;
}

// ---------------------------------------------------------------------------
// LocalTagger
// ---------------------------------------------------------------------------

/// On-device, rule-based English tagger.
///
/// Category and lemma are independent passes over the same word boundaries;
/// [`LocalTagger::tokens`] zips them. Never fails once constructed.
#[derive(Debug, Clone)]
pub struct LocalTagger {
    locale: String,
}

impl LocalTagger {
    /// Build a tagger for `locale` (e.g. `en-US`). Only English locales are
    /// supported; anything else is [`TagError::Unavailable`].
    pub fn new(locale: &str) -> Result<Self, TagError> {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        if language != "en" {
            return Err(TagError::Unavailable { locale: locale.to_string() });
        }
        Ok(Self { locale: locale.to_string() })
    }

    pub fn english() -> Self {
        Self { locale: "en-US".to_string() }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Lexical-class pass: each word with its category.
    pub fn lexical_classes<'a>(
        &self,
        text: &'a str,
    ) -> impl Iterator<Item = (&'a str, LexicalCategory)> + 'a {
        tokenize::words(text).map(|word| (word, lemma::classify(word)))
    }

    /// Lemma pass: each word with its lower-cased lemma.
    pub fn lemmas<'a>(&self, text: &'a str) -> impl Iterator<Item = (&'a str, String)> + 'a {
        tokenize::words(text).map(|word| (word, lemma::lemmatize(word)))
    }

    /// Lazily tag `text`. Calling this again on the same text yields the same
    /// sequence.
    pub fn tokens<'a>(&self, text: &'a str) -> impl Iterator<Item = Token> + 'a {
        self.lexical_classes(text)
            .zip(self.lemmas(text))
            .map(|((word, category), (_, lemma))| Token::new(word, category, lemma))
    }
}

impl Default for LocalTagger {
    fn default() -> Self {
        Self::english()
    }
}

#[async_trait]
impl Tagger for LocalTagger {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn tag(&self, text: &str) -> Result<Vec<Token>, TagError> {
        let tokens: Vec<Token> = self.tokens(text).collect();
        for token in &tokens {
            tracing::debug!(word = %token.text, category = %token.category, lemma = %token.lemma, "local tag");
        }
        Ok(tokens)
    }
}

/// Stand-in for a locale with no local tagger: every call is `Unavailable`.
#[derive(Debug, Clone)]
pub struct UnavailableTagger {
    locale: String,
}

impl UnavailableTagger {
    pub fn new(locale: impl Into<String>) -> Self {
        Self { locale: locale.into() }
    }
}

#[async_trait]
impl Tagger for UnavailableTagger {
    fn name(&self) -> &'static str {
        "unavailable"
    }

    async fn tag(&self, _text: &str) -> Result<Vec<Token>, TagError> {
        Err(TagError::Unavailable { locale: self.locale.clone() })
    }
}
