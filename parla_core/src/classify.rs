//! Intent classification over raw utterances.
//!
//! A fixed list of whole-word rules is checked in priority order against the
//! lower-cased utterance; the first match wins. The topic rule is the one
//! data-driven rule: it is built from the content store's alias table so the
//! classifier and the resolver always agree on which tokens name a topic.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use parla_content::ContentStore;

/// The coarse category assigned to a user utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Help,
    Vocabulary,
    Grammar,
    Practice,
    Topic,
    Question,
    General,
}

impl Intent {
    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Help => "help",
            Self::Vocabulary => "vocabulary",
            Self::Grammar => "grammar",
            Self::Practice => "practice",
            Self::Topic => "topic",
            Self::Question => "question",
            Self::General => "general",
        }
    }

    /// Parse from string (alternate method to avoid conflict with `FromStr`).
    #[must_use]
    pub fn from_str_lowercase(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "greeting" => Self::Greeting,
            "help" => Self::Help,
            "vocabulary" => Self::Vocabulary,
            "grammar" => Self::Grammar,
            "practice" => Self::Practice,
            "topic" => Self::Topic,
            "question" => Self::Question,
            _ => Self::General,
        }
    }
}

impl std::str::FromStr for Intent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_str_lowercase(s))
    }
}

// Rule vocabularies, in both supported languages. `ciao` is deliberately not
// a greeting cue: it lives in the vocabulary tables, so a bare "ciao" falls
// through to the translation path and comes back as a word card.
const GREETING_WORDS: &[&str] = &["hello", "hi", "buongiorno", "buonasera", "salve"];
const HELP_WORDS: &[&str] = &["help", "aiuto", "non capisco", "non so"];
const VOCABULARY_WORDS: &[&str] = &[
    "word",
    "parola",
    "vocabulary",
    "vocabolario",
    "translate",
    "tradurre",
];
const GRAMMAR_WORDS: &[&str] = &[
    "grammar",
    "grammatica",
    "verb",
    "verbo",
    "conjugation",
    "coniugazione",
];
const PRACTICE_WORDS: &[&str] = &["practice", "praticare", "exercise", "esercizio", "quiz"];
const QUESTION_WORDS: &[&str] = &[
    "how", "come", "what", "cosa", "che", "why", "perché", "when", "quando", "where", "dove",
];

/// Compile a whole-word alternation. Words are escaped, so the only way to
/// get `None` is an empty word list.
fn word_rule(words: &[&str]) -> Option<Regex> {
    if words.is_empty() {
        return None;
    }
    let alternation = words
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b({alternation})\b")).ok()
}

static GREETING_RULE: Lazy<Option<Regex>> = Lazy::new(|| word_rule(GREETING_WORDS));
static HELP_RULE: Lazy<Option<Regex>> = Lazy::new(|| word_rule(HELP_WORDS));
static VOCABULARY_RULE: Lazy<Option<Regex>> = Lazy::new(|| word_rule(VOCABULARY_WORDS));
static GRAMMAR_RULE: Lazy<Option<Regex>> = Lazy::new(|| word_rule(GRAMMAR_WORDS));
static PRACTICE_RULE: Lazy<Option<Regex>> = Lazy::new(|| word_rule(PRACTICE_WORDS));
static QUESTION_RULE: Lazy<Option<Regex>> = Lazy::new(|| word_rule(QUESTION_WORDS));

fn rule_matches(rule: &Lazy<Option<Regex>>, lower: &str) -> bool {
    rule.as_ref().is_some_and(|re| re.is_match(lower))
}

/// Ordered-rule intent classifier.
///
/// Greeting outranks help outranks vocabulary, and so on down to the
/// `general` fallback. The ordering is deliberate and observable: an
/// utterance matching several rules always resolves to the earliest one.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    topic_rule: Option<Regex>,
}

impl IntentClassifier {
    /// Build a classifier whose topic rule covers the store's alias table.
    #[must_use]
    pub fn from_store(store: &ContentStore) -> Self {
        Self {
            topic_rule: word_rule(&store.alias_words()),
        }
    }

    /// Classify one utterance. Pure: no side effects, no store access.
    #[must_use]
    pub fn classify(&self, utterance: &str) -> Intent {
        let lower = utterance.to_lowercase();

        if rule_matches(&GREETING_RULE, &lower) {
            return Intent::Greeting;
        }
        if rule_matches(&HELP_RULE, &lower) {
            return Intent::Help;
        }
        if rule_matches(&VOCABULARY_RULE, &lower) {
            return Intent::Vocabulary;
        }
        if rule_matches(&GRAMMAR_RULE, &lower) {
            return Intent::Grammar;
        }
        if rule_matches(&PRACTICE_RULE, &lower) {
            return Intent::Practice;
        }
        if self.topic_rule.as_ref().is_some_and(|re| re.is_match(&lower)) {
            return Intent::Topic;
        }
        if rule_matches(&QUESTION_RULE, &lower) {
            return Intent::Question;
        }

        Intent::General
    }

    /// First topic token in the utterance, per the same word-boundary rule
    /// the classifier uses. Present whenever `classify` returned
    /// [`Intent::Topic`].
    #[must_use]
    pub fn extract_topic(&self, utterance: &str) -> Option<String> {
        let lower = utterance.to_lowercase();
        self.topic_rule
            .as_ref()?
            .find(&lower)
            .map(|found| found.as_str().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn classifier() -> IntentClassifier {
        let store = ContentStore::load_default().expect("embedded tables should load");
        IntentClassifier::from_store(&store)
    }

    #[test]
    fn intent_string_round_trip() {
        assert_eq!(Intent::Greeting.as_str(), "greeting");
        assert_eq!(Intent::from_str_lowercase("greeting"), Intent::Greeting);
        assert_eq!(Intent::from_str_lowercase("nonsense"), Intent::General);
    }

    #[test]
    fn one_sample_per_rule() {
        let classifier = classifier();
        assert_eq!(classifier.classify("hello"), Intent::Greeting);
        assert_eq!(classifier.classify("aiuto"), Intent::Help);
        assert_eq!(classifier.classify("translate please"), Intent::Vocabulary);
        assert_eq!(classifier.classify("coniugazione"), Intent::Grammar);
        assert_eq!(classifier.classify("quiz time"), Intent::Practice);
        assert_eq!(classifier.classify("colori"), Intent::Topic);
        assert_eq!(classifier.classify("perché no"), Intent::Question);
        assert_eq!(classifier.classify("xyz123"), Intent::General);
    }

    #[test]
    fn greeting_outranks_every_later_rule() {
        let classifier = classifier();
        assert_eq!(classifier.classify("hello, help me"), Intent::Greeting);
        assert_eq!(
            classifier.classify("hi, what is the vocabulary for family"),
            Intent::Greeting
        );
    }

    #[test]
    fn rules_win_in_declaration_order() {
        let classifier = classifier();
        // help (2) beats vocabulary (3)
        assert_eq!(classifier.classify("help with a word"), Intent::Help);
        // vocabulary (3) beats grammar (4)
        assert_eq!(
            classifier.classify("translate the verb essere"),
            Intent::Vocabulary
        );
        // grammar (4) beats practice (5)
        assert_eq!(classifier.classify("grammar exercise"), Intent::Grammar);
        // practice (5) beats topic (6)
        assert_eq!(classifier.classify("practice colors"), Intent::Practice);
        // topic (6) beats question (7)
        assert_eq!(classifier.classify("what about family"), Intent::Topic);
    }

    #[test]
    fn matching_is_case_insensitive_and_whole_word() {
        let classifier = classifier();
        assert_eq!(classifier.classify("HELLO there"), Intent::Greeting);
        // "verbs" is not the whole word "verb"
        assert_eq!(classifier.classify("verbs"), Intent::General);
        // punctuation is a word boundary
        assert_eq!(classifier.classify("Buongiorno!"), Intent::Greeting);
    }

    #[test]
    fn ciao_is_not_a_greeting_cue() {
        // Reserved for the translation path: a bare "ciao" should come back
        // as a vocabulary card, not a canned greeting.
        assert_eq!(classifier().classify("ciao"), Intent::General);
    }

    #[test]
    fn empty_utterance_is_general() {
        assert_eq!(classifier().classify(""), Intent::General);
        assert_eq!(classifier().classify("   "), Intent::General);
    }

    #[test]
    fn topic_extraction_returns_first_alias() {
        let classifier = classifier();
        assert_eq!(
            classifier.extract_topic("famiglia e colori"),
            Some("famiglia".to_string())
        );
        assert_eq!(classifier.extract_topic("nothing here"), None);
    }
}
