//! Wire types for the `documents:analyzeSyntax` endpoint.
//!
//! Request: `{"document":{"type":"PLAIN_TEXT","content":…},"encodingType":"UTF8"}`.
//! Response: `{"tokens":[{"text":{"content":…},"partOfSpeech":{"tag":…},"lemma":…}]}`.
//! Every response field is optional on the wire; absent values decode to
//! empty strings.

use lexfind_core::{LexicalCategory, Token};
use serde::{Deserialize, Serialize};

const DOCUMENT_TYPE: &str = "PLAIN_TEXT";
const ENCODING_TYPE: &str = "UTF8";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeSyntaxRequest<'a> {
    pub document: Document<'a>,
    pub encoding_type: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Document<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub content: &'a str,
}

impl<'a> AnalyzeSyntaxRequest<'a> {
    pub fn plain_text(content: &'a str) -> Self {
        Self {
            document: Document { kind: DOCUMENT_TYPE, content },
            encoding_type: ENCODING_TYPE,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeSyntaxResponse {
    #[serde(default)]
    pub tokens: Vec<WireToken>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireToken {
    #[serde(default)]
    pub text: TextSpan,
    #[serde(default)]
    pub part_of_speech: PartOfSpeech,
    #[serde(default)]
    pub lemma: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TextSpan {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PartOfSpeech {
    #[serde(default)]
    pub tag: String,
}

/// Map a part-of-speech tag string to a [`LexicalCategory`]. `None` for
/// punctuation, which never becomes a token.
pub fn category_for(tag: &str) -> Option<LexicalCategory> {
    let category = match tag {
        "NOUN" => LexicalCategory::Noun,
        "ADJ" => LexicalCategory::Adjective,
        "X" => LexicalCategory::Other,
        "VERB" => LexicalCategory::Verb,
        "ADV" => LexicalCategory::Adverb,
        "PRON" => LexicalCategory::Pronoun,
        "DET" => LexicalCategory::Determiner,
        "ADP" => LexicalCategory::Preposition,
        "CONJ" => LexicalCategory::Conjunction,
        "PRT" => LexicalCategory::Particle,
        "NUM" => LexicalCategory::Number,
        "AFFIX" => LexicalCategory::Affix,
        "PUNCT" => return None,
        _ => LexicalCategory::Unclassified,
    };
    Some(category)
}

impl AnalyzeSyntaxResponse {
    /// Convert to tokens, dropping punctuation and empty spans.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
            .into_iter()
            .filter(|t| !t.text.content.trim().is_empty())
            .filter_map(|t| {
                let category = category_for(&t.part_of_speech.tag)?;
                Some(Token::new(t.text.content, category, t.lemma))
            })
            .collect()
    }
}
