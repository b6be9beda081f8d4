//! lexfind-remote: remote syntax-analysis tagging backend.
//!
//! [`RemoteTagger`] implements [`lexfind_core::Tagger`] by posting the query
//! to a `documents:analyzeSyntax` endpoint. Transport, status and decoding
//! failures surface as [`lexfind_core::NetworkError`].

pub mod client;
pub mod syntax;

pub use client::RemoteTagger;
