//! Static catalogs, queries and syntax-analysis response bodies shared across
//! harnesses.

/// The two-product catalog used by most scenarios.
pub const WIDGET_GADGET_JSON: &str = r#"[
    {"productName": "Widget", "productFeatures": "A blue widget", "keywords": ["blue", "widget"]},
    {"productName": "Gadget", "productFeatures": "A red gadget", "keywords": ["red", "gadget"]}
]"#;

/// A larger catalog where several products share keywords, for ordering.
pub const SHARED_KEYWORDS_JSON: &str = r#"[
    {"productName": "Red Mug",     "productFeatures": "Ceramic mug",      "keywords": ["red", "mug", "kitchen"]},
    {"productName": "Blue Mug",    "productFeatures": "Ceramic mug",      "keywords": ["blue", "mug", "kitchen"]},
    {"productName": "Red Scarf",   "productFeatures": "Wool scarf",       "keywords": ["red", "scarf", "wool"]},
    {"productName": "Toaster",     "productFeatures": "Two slot toaster", "keywords": ["toaster", "kitchen"]},
    {"productName": "Red Sneaker", "productFeatures": "Canvas sneaker",   "keywords": ["Red", "Sneaker"]}
]"#;

/// Queries with no noun, adjective or unknown word.
pub const NO_MEANINGFUL_TERMS: &[&str] = &["show me that", "I want it", "please", "?!"];

/// Successful `analyzeSyntax` body for "Show me blue widgets!".
pub const SYNTAX_BLUE_WIDGETS: &str = r#"{
    "sentences": [{"text": {"content": "Show me blue widgets!", "beginOffset": 0}}],
    "tokens": [
        {"text": {"content": "Show", "beginOffset": 0},     "partOfSpeech": {"tag": "VERB", "mood": "IMPERATIVE"}, "dependencyEdge": {"headTokenIndex": 0, "label": "ROOT"}, "lemma": "Show"},
        {"text": {"content": "me", "beginOffset": 5},       "partOfSpeech": {"tag": "PRON"},  "lemma": "I"},
        {"text": {"content": "blue", "beginOffset": 8},     "partOfSpeech": {"tag": "ADJ"},   "lemma": "blue"},
        {"text": {"content": "widgets", "beginOffset": 13}, "partOfSpeech": {"tag": "NOUN", "number": "PLURAL"}, "lemma": "widget"},
        {"text": {"content": "!", "beginOffset": 20},       "partOfSpeech": {"tag": "PUNCT"}, "lemma": "!"}
    ],
    "language": "en"
}"#;

/// Body with an unknown tag and an `X` token.
pub const SYNTAX_UNKNOWN_TAGS: &str = r#"{
    "tokens": [
        {"text": {"content": "zorp"},   "partOfSpeech": {"tag": "X"},       "lemma": "zorp"},
        {"text": {"content": "gadget"}, "partOfSpeech": {"tag": "MYSTERY"}, "lemma": "gadget"}
    ]
}"#;

pub const SYNTAX_NO_TOKENS: &str = r#"{"sentences": [], "language": "en"}"#;

pub const SYNTAX_MALFORMED: &str = r#"{"tokens": [ {"text": "#;

pub const SYNTAX_ERROR_BODY: &str = r#"{
    "error": {"code": 500, "message": "Internal error encountered.", "status": "INTERNAL"}
}"#;
