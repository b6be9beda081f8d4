//! Static English lexicon for the local tagger.
//!
//! Two compile-time maps: [`WORD_CLASS`] assigns a category to closed-class
//! words and a core of common open-class words; [`IRREGULAR`] maps irregular
//! inflections to their lemma and category. All keys are lower-case with a
//! straight apostrophe.

use crate::types::LexicalCategory::{self, *};

pub static WORD_CLASS: phf::Map<&'static str, LexicalCategory> = phf::phf_map! {
    // determiners
    "a" => Determiner, "an" => Determiner, "the" => Determiner, "this" => Determiner,
    "that" => Determiner, "these" => Determiner, "those" => Determiner, "some" => Determiner,
    "any" => Determiner, "each" => Determiner, "every" => Determiner, "no" => Determiner,
    "all" => Determiner, "both" => Determiner, "either" => Determiner, "neither" => Determiner,
    "another" => Determiner, "my" => Determiner, "your" => Determiner, "his" => Determiner,
    "her" => Determiner, "its" => Determiner, "our" => Determiner, "their" => Determiner,
    "much" => Determiner, "many" => Determiner, "more" => Determiner, "most" => Determiner,
    "few" => Determiner, "several" => Determiner,

    // pronouns
    "i" => Pronoun, "me" => Pronoun, "you" => Pronoun, "he" => Pronoun, "him" => Pronoun,
    "she" => Pronoun, "it" => Pronoun, "we" => Pronoun, "us" => Pronoun, "they" => Pronoun,
    "them" => Pronoun, "myself" => Pronoun, "yourself" => Pronoun, "itself" => Pronoun,
    "ourselves" => Pronoun, "themselves" => Pronoun, "mine" => Pronoun, "yours" => Pronoun,
    "ours" => Pronoun, "theirs" => Pronoun, "who" => Pronoun, "whom" => Pronoun,
    "what" => Pronoun, "which" => Pronoun, "whose" => Pronoun, "something" => Pronoun,
    "anything" => Pronoun, "everything" => Pronoun, "nothing" => Pronoun, "someone" => Pronoun,
    "anyone" => Pronoun, "everyone" => Pronoun, "one" => Pronoun,
    "i'm" => Pronoun, "i'd" => Pronoun, "i'll" => Pronoun, "i've" => Pronoun,
    "you're" => Pronoun, "it's" => Pronoun, "that's" => Pronoun, "we're" => Pronoun,
    "they're" => Pronoun,

    // prepositions
    "in" => Preposition, "on" => Preposition, "at" => Preposition, "by" => Preposition,
    "for" => Preposition, "with" => Preposition, "about" => Preposition, "against" => Preposition,
    "between" => Preposition, "into" => Preposition, "through" => Preposition,
    "during" => Preposition, "before" => Preposition, "after" => Preposition,
    "above" => Preposition, "below" => Preposition, "to" => Preposition, "from" => Preposition,
    "of" => Preposition, "off" => Preposition, "over" => Preposition, "under" => Preposition,
    "near" => Preposition, "without" => Preposition, "within" => Preposition,
    "along" => Preposition, "across" => Preposition, "behind" => Preposition,
    "beyond" => Preposition, "like" => Preposition, "than" => Preposition, "via" => Preposition,
    "per" => Preposition, "around" => Preposition,

    // conjunctions
    "and" => Conjunction, "or" => Conjunction, "but" => Conjunction, "nor" => Conjunction,
    "so" => Conjunction, "yet" => Conjunction, "because" => Conjunction,
    "although" => Conjunction, "though" => Conjunction, "while" => Conjunction,
    "if" => Conjunction, "unless" => Conjunction, "whether" => Conjunction,
    "since" => Conjunction,

    // particles
    "not" => Particle, "up" => Particle, "down" => Particle, "out" => Particle,

    // interjections
    "please" => Interjection, "hello" => Interjection, "hi" => Interjection,
    "hey" => Interjection, "oh" => Interjection, "wow" => Interjection,
    "thanks" => Interjection, "ok" => Interjection, "okay" => Interjection,
    "yes" => Interjection,

    // adverbs
    "very" => Adverb, "really" => Adverb, "also" => Adverb, "just" => Adverb,
    "only" => Adverb, "too" => Adverb, "quite" => Adverb, "now" => Adverb, "then" => Adverb,
    "here" => Adverb, "there" => Adverb, "where" => Adverb, "when" => Adverb, "why" => Adverb,
    "how" => Adverb, "again" => Adverb, "always" => Adverb, "never" => Adverb,
    "often" => Adverb, "soon" => Adverb, "maybe" => Adverb, "perhaps" => Adverb,
    "still" => Adverb, "even" => Adverb, "almost" => Adverb, "already" => Adverb,
    "sometimes" => Adverb, "today" => Adverb, "tonight" => Adverb,

    // numerals
    "two" => Number, "three" => Number, "four" => Number, "five" => Number, "six" => Number,
    "seven" => Number, "eight" => Number, "nine" => Number, "ten" => Number,
    "eleven" => Number, "twelve" => Number, "twenty" => Number, "hundred" => Number,
    "thousand" => Number, "dozen" => Number,

    // verbs (base forms; auxiliaries included)
    "be" => Verb, "am" => Verb, "have" => Verb, "do" => Verb, "can" => Verb, "could" => Verb,
    "will" => Verb, "would" => Verb, "shall" => Verb, "should" => Verb, "may" => Verb,
    "might" => Verb, "must" => Verb, "show" => Verb, "find" => Verb, "need" => Verb,
    "want" => Verb, "get" => Verb, "give" => Verb, "look" => Verb, "search" => Verb,
    "buy" => Verb, "make" => Verb, "take" => Verb, "see" => Verb, "tell" => Verb,
    "help" => Verb, "let" => Verb, "go" => Verb, "know" => Verb, "think" => Verb,
    "use" => Verb, "play" => Verb, "work" => Verb, "run" => Verb, "wear" => Verb,
    "eat" => Verb, "write" => Verb, "sell" => Verb, "keep" => Verb, "feel" => Verb,
    "bring" => Verb, "build" => Verb, "send" => Verb, "spend" => Verb, "pay" => Verb,
    "come" => Verb, "order" => Verb, "list" => Verb, "try" => Verb, "prefer" => Verb,
    "love" => Verb, "hate" => Verb, "wish" => Verb, "browse" => Verb, "shop" => Verb,
    "display" => Verb, "recommend" => Verb, "suggest" => Verb, "compare" => Verb,
    "don't" => Verb, "doesn't" => Verb, "didn't" => Verb, "can't" => Verb, "won't" => Verb,
    "isn't" => Verb, "aren't" => Verb, "wasn't" => Verb, "wouldn't" => Verb,

    // adjectives
    "red" => Adjective, "blue" => Adjective, "green" => Adjective, "black" => Adjective,
    "white" => Adjective, "yellow" => Adjective, "orange" => Adjective,
    "purple" => Adjective, "pink" => Adjective, "brown" => Adjective, "gray" => Adjective,
    "grey" => Adjective, "silver" => Adjective, "gold" => Adjective, "new" => Adjective,
    "old" => Adjective, "big" => Adjective, "small" => Adjective, "large" => Adjective,
    "little" => Adjective, "cheap" => Adjective, "fast" => Adjective, "slow" => Adjective,
    "good" => Adjective, "bad" => Adjective, "light" => Adjective, "dark" => Adjective,
    "heavy" => Adjective, "long" => Adjective, "short" => Adjective, "high" => Adjective,
    "low" => Adjective, "hot" => Adjective, "cold" => Adjective, "warm" => Adjective,
    "cool" => Adjective, "soft" => Adjective, "hard" => Adjective, "smart" => Adjective,
    "wireless" => Adjective, "waterproof" => Adjective, "portable" => Adjective,
    "digital" => Adjective, "electric" => Adjective, "quiet" => Adjective,
    "loud" => Adjective, "bright" => Adjective, "thin" => Adjective, "thick" => Adjective,
    "wide" => Adjective, "tiny" => Adjective, "huge" => Adjective, "nice" => Adjective,
    "great" => Adjective, "strong" => Adjective, "clean" => Adjective, "full" => Adjective,
    "empty" => Adjective, "cute" => Adjective, "pretty" => Adjective, "easy" => Adjective,
    "simple" => Adjective, "mini" => Adjective, "happy" => Adjective, "fancy" => Adjective,
    "durable" => Adjective, "premium" => Adjective, "classic" => Adjective,
    "modern" => Adjective, "vintage" => Adjective, "organic" => Adjective,
    "fresh" => Adjective, "sweet" => Adjective, "safe" => Adjective, "round" => Adjective,
    "square" => Adjective, "flat" => Adjective, "sharp" => Adjective, "tall" => Adjective,
};

/// Irregular inflections: surface form → (lemma, category).
pub static IRREGULAR: phf::Map<&'static str, (&'static str, LexicalCategory)> = phf::phf_map! {
    // nouns
    "men" => ("man", Noun), "women" => ("woman", Noun), "children" => ("child", Noun),
    "people" => ("person", Noun), "mice" => ("mouse", Noun), "feet" => ("foot", Noun),
    "teeth" => ("tooth", Noun), "geese" => ("goose", Noun), "knives" => ("knife", Noun),
    "wives" => ("wife", Noun), "lives" => ("life", Noun), "leaves" => ("leaf", Noun),
    "shelves" => ("shelf", Noun), "halves" => ("half", Noun), "wolves" => ("wolf", Noun),
    "loaves" => ("loaf", Noun), "scarves" => ("scarf", Noun), "indices" => ("index", Noun),
    "criteria" => ("criterion", Noun), "movies" => ("movie", Noun),
    "cookies" => ("cookie", Noun), "hoodies" => ("hoodie", Noun), "selfies" => ("selfie", Noun),
    "brownies" => ("brownie", Noun), "zombies" => ("zombie", Noun),
    // -ses plurals of singulars ending in a single s
    "buses" => ("bus", Noun), "lenses" => ("lens", Noun), "gases" => ("gas", Noun),
    "bonuses" => ("bonus", Noun), "campuses" => ("campus", Noun), "viruses" => ("virus", Noun),
    "statuses" => ("status", Noun), "canvases" => ("canvas", Noun), "atlases" => ("atlas", Noun),
    "irises" => ("iris", Noun), "choruses" => ("chorus", Noun), "octopuses" => ("octopus", Noun),

    // adjectives
    "better" => ("good", Adjective), "best" => ("good", Adjective),
    "worse" => ("bad", Adjective), "worst" => ("bad", Adjective),

    // verbs
    "is" => ("be", Verb), "are" => ("be", Verb), "was" => ("be", Verb), "were" => ("be", Verb),
    "been" => ("be", Verb), "being" => ("be", Verb), "has" => ("have", Verb),
    "had" => ("have", Verb), "does" => ("do", Verb), "did" => ("do", Verb),
    "done" => ("do", Verb), "went" => ("go", Verb), "gone" => ("go", Verb),
    "ran" => ("run", Verb), "got" => ("get", Verb), "made" => ("make", Verb),
    "took" => ("take", Verb), "taken" => ("take", Verb), "saw" => ("see", Verb),
    "seen" => ("see", Verb), "gave" => ("give", Verb), "given" => ("give", Verb),
    "bought" => ("buy", Verb), "found" => ("find", Verb), "thought" => ("think", Verb),
    "told" => ("tell", Verb), "knew" => ("know", Verb), "known" => ("know", Verb),
    "came" => ("come", Verb), "wore" => ("wear", Verb), "worn" => ("wear", Verb),
    "ate" => ("eat", Verb), "wrote" => ("write", Verb), "written" => ("write", Verb),
    "sold" => ("sell", Verb), "kept" => ("keep", Verb), "felt" => ("feel", Verb),
    "brought" => ("bring", Verb), "built" => ("build", Verb), "sent" => ("send", Verb),
    "spent" => ("spend", Verb), "paid" => ("pay", Verb),
};

/// Plural-looking nouns that are their own lemma.
pub static UNINFLECTED: phf::Set<&'static str> = phf::phf_set! {
    "news", "series", "species", "jeans", "pants", "shorts", "scissors", "trousers",
    "electronics", "physics", "mathematics", "headquarters", "means", "sports",
};

pub fn word_class(word: &str) -> Option<LexicalCategory> {
    WORD_CLASS.get(word).copied()
}

pub fn irregular(word: &str) -> Option<(&'static str, LexicalCategory)> {
    IRREGULAR.get(word).copied()
}

pub fn is_known(word: &str, category: LexicalCategory) -> bool {
    word_class(word) == Some(category)
}
