//! Test builders for products, catalogs and tokens.
//!
//! Designed for readability in assertions, not production use. They panic on
//! invalid input rather than returning `Result`.

use lexfind_core::{Catalog, LexicalCategory, Product, SearchTermSet, Token};
use std::collections::BTreeSet;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// ProductBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Product`] fixtures.
///
/// ```rust
/// let widget = ProductBuilder::new("Widget").keywords(&["blue", "widget"]).build();
/// ```
pub struct ProductBuilder {
    name: String,
    features: String,
    keywords: BTreeSet<String>,
}

impl ProductBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self { features: format!("A {name}"), name, keywords: BTreeSet::new() }
    }

    pub fn features(mut self, features: impl Into<String>) -> Self {
        self.features = features.into();
        self
    }

    pub fn keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords.extend(keywords.iter().map(|k| k.to_lowercase()));
        self
    }

    pub fn build(self) -> Product {
        assert!(!self.keywords.is_empty(), "product {:?} needs keywords", self.name);
        Product { name: self.name, features: self.features, keywords: self.keywords }
    }
}

// ---------------------------------------------------------------------------
// Catalog / term helpers
// ---------------------------------------------------------------------------

/// Build a catalog from products, preserving order.
pub fn catalog_of(products: Vec<Product>) -> Arc<Catalog> {
    Arc::new(Catalog::new(products))
}

/// Parse a catalog fixture, panicking on error.
pub fn catalog_from(json: &str) -> Arc<Catalog> {
    Arc::new(Catalog::from_json(json).expect("fixture catalog must parse"))
}

pub fn terms(words: &[&str]) -> SearchTermSet {
    words.iter().copied().collect()
}

/// Names of `products`, in order.
pub fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Token shorthands
// ---------------------------------------------------------------------------

pub fn noun(text: &str, lemma: &str) -> Token {
    Token::new(text, LexicalCategory::Noun, lemma)
}

pub fn adj(text: &str, lemma: &str) -> Token {
    Token::new(text, LexicalCategory::Adjective, lemma)
}

pub fn verb(text: &str, lemma: &str) -> Token {
    Token::new(text, LexicalCategory::Verb, lemma)
}

pub fn other(text: &str) -> Token {
    Token::new(text, LexicalCategory::Other, text)
}
