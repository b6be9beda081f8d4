//! Keyword extraction: reduces tagged tokens to a [`SearchTermSet`].
//!
//! The set is the lower-cased surface form of every meaningful token (noun,
//! adjective, other) plus the lemma of every token whose surface form matches
//! one of those words. Surface comparison is case-insensitive so that query
//! casing never changes the result.

use crate::types::{SearchTermSet, Token};
use std::collections::HashSet;

/// Build the search-term set for one query. Pure and idempotent; an empty
/// result is a legitimate outcome, not an error.
pub fn extract(tokens: &[Token]) -> SearchTermSet {
    let meaningful: HashSet<String> = tokens
        .iter()
        .filter(|t| t.category.is_meaningful())
        .map(|t| t.text.to_lowercase())
        .collect();

    let mut terms = SearchTermSet::new();
    for word in &meaningful {
        terms.insert(word);
    }

    for token in tokens {
        if meaningful.contains(&token.text.to_lowercase()) {
            terms.insert(&token.lemma);
        }
    }

    tracing::debug!(terms = %terms, "search terms extracted");
    terms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LexicalCategory::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn set(terms: &[&str]) -> SearchTermSet {
        terms.iter().copied().collect()
    }

    #[test]
    fn scenario_blue_widget() {
        let tokens = vec![
            Token::new("Show", Verb, "show"),
            Token::new("me", Pronoun, "me"),
            Token::new("a", Determiner, "a"),
            Token::new("blue", Adjective, "blue"),
            Token::new("widget", Noun, "widget"),
        ];
        assert_eq!(extract(&tokens), set(&["blue", "widget"]));
    }

    #[test]
    fn unions_surface_and_lemma() {
        let tokens = vec![
            Token::new("Widgets", Noun, "widget"),
            Token::new("cheaper", Adjective, "cheap"),
        ];
        assert_eq!(extract(&tokens), set(&["widgets", "widget", "cheaper", "cheap"]));
    }

    #[test]
    fn other_category_is_meaningful() {
        let tokens = vec![Token::new("xyz", Other, "xyz")];
        assert_eq!(extract(&tokens), set(&["xyz"]));
    }

    #[test]
    fn no_meaningful_tokens_is_empty() {
        let tokens = vec![
            Token::new("show", Verb, "show"),
            Token::new("me", Pronoun, "me"),
            Token::new("quickly", Adverb, "quickly"),
        ];
        assert!(extract(&tokens).is_empty());
        assert!(extract(&[]).is_empty());
    }

    #[test]
    fn lemma_of_matching_surface_in_any_category_is_included() {
        // The same surface word tagged twice: once meaningful, once not.
        let tokens = vec![
            Token::new("light", Adjective, "light"),
            Token::new("Lights", Noun, "light"),
            Token::new("lights", Verb, "lighten"),
        ];
        assert_eq!(extract(&tokens), set(&["light", "lights", "lighten"]));
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    fn category() -> impl Strategy<Value = crate::types::LexicalCategory> {
        prop_oneof![
            Just(Noun),
            Just(Adjective),
            Just(Other),
            Just(Verb),
            Just(Adverb),
            Just(Determiner),
            Just(Pronoun),
            Just(Unclassified),
        ]
    }

    fn token() -> impl Strategy<Value = Token> {
        ("[A-Za-z]{1,8}", category(), "[a-z]{0,8}")
            .prop_map(|(text, category, lemma)| Token::new(text, category, lemma))
    }

    proptest! {
        #[test]
        fn prop_terms_come_from_meaningful_tokens(tokens in prop::collection::vec(token(), 0..12)) {
            let meaningful: HashSet<String> = tokens
                .iter()
                .filter(|t| t.category.is_meaningful())
                .map(|t| t.text.to_lowercase())
                .collect();
            let allowed: HashSet<String> = tokens
                .iter()
                .filter(|t| meaningful.contains(&t.text.to_lowercase()))
                .flat_map(|t| [t.text.to_lowercase(), t.lemma.to_lowercase()])
                .collect();

            let terms = extract(&tokens);
            for term in terms.iter() {
                prop_assert!(allowed.contains(term), "{term} not derived from a meaningful token");
                prop_assert_eq!(term.to_lowercase(), term.to_string());
            }
            prop_assert_eq!(terms.is_empty(), meaningful.is_empty());
        }

        #[test]
        fn prop_extract_is_idempotent(tokens in prop::collection::vec(token(), 0..12)) {
            prop_assert_eq!(extract(&tokens), extract(&tokens));
        }
    }
}
