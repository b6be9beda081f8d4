//! lexfind-core: natural-language product search core.
//!
//! This crate holds the text-normalization pipeline and the catalog it runs
//! against, plus the shared types used by every other crate.
//!
//! # Architecture
//!
//! ```text
//! query ──► Tagger ──► extract ──► SearchTermSet ──► Catalog::matching ──► products
//!           (local | remote)
//! ```
//!
//! [`search::SearchMachine`] ties the stages together as a state machine;
//! the async service loop that drives it lives in `lexfind-app`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod search;
pub mod tagger;
pub mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, NetworkError, TagError};
pub use tagger::{LocalTagger, Tagger, UnavailableTagger};
pub use types::{LexicalCategory, Product, SearchTermSet, Token};
