//! The content store: loading, validation and lookups.
//!
//! Tables ship embedded in the binary (`load_default`) or are read from a
//! data directory (`load_from_dir`). Either way the store is validated once
//! at load time; after that it is immutable and lookups cannot fail in ways
//! that matter to a caller — a miss is an `Option::None`, never an error.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::types::{GrammarFamily, PhraseTemplate, Translation, VocabularyTopic};

const VOCABULARY_JSON: &str = include_str!("data/vocabulary.json");
const GRAMMAR_JSON: &str = include_str!("data/grammar.json");
const PHRASES_JSON: &str = include_str!("data/phrases.json");
const RESPONSES_JSON: &str = include_str!("data/responses.json");

/// Response-bank categories the composer can reach. Validation requires each
/// to be present and non-empty.
const REQUIRED_BANKS: &[&str] = &["greetings", "fallback"];

/// Errors raised while loading or validating the content tables.
///
/// Every variant is a startup-time configuration problem. Nothing here is
/// reachable from a user utterance once `validate` has passed.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {table} table: {source}")]
    Parse {
        table: &'static str,
        source: serde_json::Error,
    },

    #[error("duplicate topic id: {0}")]
    DuplicateTopic(String),

    #[error("topic {0} has no words")]
    EmptyTopic(String),

    #[error("alias {alias} points to unknown topic {topic}")]
    DanglingAlias { alias: String, topic: String },

    #[error("response bank category {0} is missing or empty")]
    EmptyResponseBank(String),

    #[error("phrase template table is empty")]
    NoPhraseTemplates,
}

/// A user-facing token that names a topic: English or Italian, singular or
/// plural spelling. Many aliases map onto one canonical topic id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicAlias {
    pub alias: String,
    pub topic: String,
}

impl TopicAlias {
    #[must_use]
    pub fn new(alias: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            topic: topic.into(),
        }
    }
}

/// Built-in alias table for the shipped topics.
#[must_use]
pub fn default_aliases() -> Vec<TopicAlias> {
    vec![
        TopicAlias::new("family", "family"),
        TopicAlias::new("famiglia", "family"),
        TopicAlias::new("colors", "colors"),
        TopicAlias::new("colori", "colors"),
        TopicAlias::new("numbers", "numbers"),
        TopicAlias::new("numeri", "numbers"),
        TopicAlias::new("greetings", "greetings"),
        TopicAlias::new("saluti", "greetings"),
    ]
}

#[derive(Deserialize)]
struct VocabularyFile {
    topics: Vec<VocabularyTopic>,
}

#[derive(Deserialize)]
struct GrammarFile {
    families: Vec<GrammarFamily>,
}

#[derive(Deserialize)]
struct PhraseFile {
    practice: Vec<PhraseTemplate>,
}

/// The four read-only tables plus the topic alias mapping.
#[derive(Debug, Clone)]
pub struct ContentStore {
    topics: Vec<VocabularyTopic>,
    aliases: Vec<TopicAlias>,
    grammar: Vec<GrammarFamily>,
    phrases: Vec<PhraseTemplate>,
    responses: HashMap<String, Vec<String>>,
}

impl ContentStore {
    /// Assemble a store from raw tables without validating it.
    ///
    /// Callers loading from data are expected to run [`Self::validate`]
    /// before handing the store to an engine.
    #[must_use]
    pub const fn new(
        topics: Vec<VocabularyTopic>,
        aliases: Vec<TopicAlias>,
        grammar: Vec<GrammarFamily>,
        phrases: Vec<PhraseTemplate>,
        responses: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            topics,
            aliases,
            grammar,
            phrases,
            responses,
        }
    }

    /// Load and validate the embedded tables.
    pub fn load_default() -> Result<Self, ContentError> {
        let store = Self::from_json(
            VOCABULARY_JSON,
            GRAMMAR_JSON,
            PHRASES_JSON,
            RESPONSES_JSON,
        )?;
        store.validate()?;
        info!(
            topics = store.topics.len(),
            families = store.grammar.len(),
            "loaded embedded content tables"
        );
        Ok(store)
    }

    /// Load and validate the tables from JSON files in `dir`.
    ///
    /// Expects `vocabulary.json`, `grammar.json`, `phrases.json` and
    /// `responses.json`, in the same shapes as the embedded defaults.
    pub fn load_from_dir(dir: &Path) -> Result<Self, ContentError> {
        let read = |name: &str| -> Result<String, ContentError> {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| ContentError::Io {
                path: path.display().to_string(),
                source,
            })
        };

        let store = Self::from_json(
            &read("vocabulary.json")?,
            &read("grammar.json")?,
            &read("phrases.json")?,
            &read("responses.json")?,
        )?;
        store.validate()?;
        info!(dir = %dir.display(), "loaded content tables from data directory");
        Ok(store)
    }

    fn from_json(
        vocabulary: &str,
        grammar: &str,
        phrases: &str,
        responses: &str,
    ) -> Result<Self, ContentError> {
        let vocabulary: VocabularyFile =
            serde_json::from_str(vocabulary).map_err(|source| ContentError::Parse {
                table: "vocabulary",
                source,
            })?;
        let grammar: GrammarFile =
            serde_json::from_str(grammar).map_err(|source| ContentError::Parse {
                table: "grammar",
                source,
            })?;
        let phrases: PhraseFile =
            serde_json::from_str(phrases).map_err(|source| ContentError::Parse {
                table: "phrases",
                source,
            })?;
        let responses: HashMap<String, Vec<String>> =
            serde_json::from_str(responses).map_err(|source| ContentError::Parse {
                table: "responses",
                source,
            })?;

        Ok(Self::new(
            vocabulary.topics,
            default_aliases(),
            grammar.families,
            phrases.practice,
            responses,
        ))
    }

    /// Check the startup invariants: unique, non-empty topics; no dangling
    /// aliases; required response banks present and non-empty; at least one
    /// phrase template.
    pub fn validate(&self) -> Result<(), ContentError> {
        for (index, topic) in self.topics.iter().enumerate() {
            if topic.words.is_empty() {
                return Err(ContentError::EmptyTopic(topic.id.clone()));
            }
            if self.topics[..index].iter().any(|t| t.id == topic.id) {
                return Err(ContentError::DuplicateTopic(topic.id.clone()));
            }
        }

        for alias in &self.aliases {
            if self.topic(&alias.topic).is_none() {
                return Err(ContentError::DanglingAlias {
                    alias: alias.alias.clone(),
                    topic: alias.topic.clone(),
                });
            }
        }

        for category in REQUIRED_BANKS {
            if self.responses(category).is_none_or(<[String]>::is_empty) {
                return Err(ContentError::EmptyResponseBank((*category).to_string()));
            }
        }

        if self.phrases.is_empty() {
            return Err(ContentError::NoPhraseTemplates);
        }

        Ok(())
    }

    /// All vocabulary topics, in table order.
    #[must_use]
    pub fn topics(&self) -> &[VocabularyTopic] {
        &self.topics
    }

    /// Look up a topic by its canonical id.
    #[must_use]
    pub fn topic(&self, id: &str) -> Option<&VocabularyTopic> {
        self.topics.iter().find(|topic| topic.id == id)
    }

    /// Resolve a user-facing token to a canonical topic id
    /// (case-insensitive).
    #[must_use]
    pub fn resolve_alias(&self, token: &str) -> Option<&str> {
        let token = token.to_lowercase();
        self.aliases
            .iter()
            .find(|alias| alias.alias.to_lowercase() == token)
            .map(|alias| alias.topic.as_str())
    }

    /// Every alias token, in table order. Feeds the classifier's topic rule.
    #[must_use]
    pub fn alias_words(&self) -> Vec<&str> {
        self.aliases.iter().map(|a| a.alias.as_str()).collect()
    }

    /// The canonical topic ids joined for guidance text, e.g.
    /// `family, colors, numbers, greetings`.
    #[must_use]
    pub fn topic_id_list(&self) -> String {
        self.topics
            .iter()
            .map(|topic| topic.id.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// First entry whose italian or english field equals `query`
    /// case-insensitively, with the owning topic's display label. Linear in
    /// total vocabulary size.
    #[must_use]
    pub fn find_word(&self, query: &str) -> Option<Translation> {
        let query = query.to_lowercase();
        for topic in &self.topics {
            for entry in &topic.words {
                if entry.italian.to_lowercase() == query || entry.english.to_lowercase() == query {
                    return Some(Translation::new(entry, &topic.category));
                }
            }
        }
        None
    }

    /// Look up a grammar family by name.
    #[must_use]
    pub fn grammar_family(&self, name: &str) -> Option<&GrammarFamily> {
        self.grammar.iter().find(|family| family.name == name)
    }

    /// A response-bank category, if configured.
    #[must_use]
    pub fn responses(&self, category: &str) -> Option<&[String]> {
        self.responses.get(category).map(Vec::as_slice)
    }

    /// The practice-question templates.
    #[must_use]
    pub fn phrase_templates(&self) -> &[PhraseTemplate] {
        &self.phrases
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AnswerField, VocabularyEntry};

    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn store() -> ContentStore {
        ContentStore::load_default().expect("embedded tables should load")
    }

    fn minimal_topic(id: &str) -> VocabularyTopic {
        VocabularyTopic {
            id: id.to_string(),
            category: id.to_uppercase(),
            words: vec![VocabularyEntry {
                italian: "ciao".to_string(),
                english: "hello".to_string(),
                pronunciation: "chow".to_string(),
                example: "Ciao!".to_string(),
            }],
        }
    }

    fn minimal_responses() -> HashMap<String, Vec<String>> {
        let mut responses = HashMap::new();
        responses.insert("greetings".to_string(), vec!["Ciao!".to_string()]);
        responses.insert("fallback".to_string(), vec!["Non ho capito.".to_string()]);
        responses
    }

    fn minimal_phrases() -> Vec<PhraseTemplate> {
        vec![PhraseTemplate {
            text: "Cosa significa \"{italian}\"?".to_string(),
            answer_field: AnswerField::English,
        }]
    }

    #[test]
    fn embedded_tables_pass_validation() {
        let store = store();
        assert_eq!(store.topics().len(), 4);
        assert_eq!(store.topic_id_list(), "family, colors, numbers, greetings");
    }

    #[test]
    fn find_word_is_case_insensitive() {
        let store = store();
        let lower = store.find_word("ciao");
        let upper = store.find_word("CIAO");
        assert_eq!(lower, upper);
        #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
        let translation = lower.expect("ciao should be in the greetings topic");
        assert_eq!(translation.english, "hello");
        assert_eq!(translation.category, "I Saluti");
    }

    #[test]
    fn find_word_matches_english_side() {
        let store = store();
        #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
        let translation = store.find_word("mother").expect("mother should resolve");
        assert_eq!(translation.italian, "madre");
    }

    #[test]
    fn alias_resolves_to_same_topic_as_canonical_id() {
        let store = store();
        let via_alias = store.resolve_alias("famiglia").and_then(|id| store.topic(id));
        let direct = store.topic("family");
        assert!(direct.is_some());
        assert_eq!(via_alias, direct);
    }

    #[test]
    fn unknown_alias_resolves_to_none() {
        let store = store();
        assert!(store.resolve_alias("weather").is_none());
    }

    #[test]
    fn validation_rejects_empty_topic() {
        let mut topic = minimal_topic("family");
        topic.words.clear();
        let store = ContentStore::new(
            vec![topic],
            vec![],
            vec![],
            minimal_phrases(),
            minimal_responses(),
        );
        assert!(matches!(
            store.validate(),
            Err(ContentError::EmptyTopic(id)) if id == "family"
        ));
    }

    #[test]
    fn validation_rejects_dangling_alias() {
        let store = ContentStore::new(
            vec![minimal_topic("family")],
            vec![TopicAlias::new("meteo", "weather")],
            vec![],
            minimal_phrases(),
            minimal_responses(),
        );
        assert!(matches!(
            store.validate(),
            Err(ContentError::DanglingAlias { topic, .. }) if topic == "weather"
        ));
    }

    #[test]
    fn validation_rejects_missing_fallback_bank() {
        let mut responses = minimal_responses();
        responses.remove("fallback");
        let store = ContentStore::new(
            vec![minimal_topic("family")],
            vec![],
            vec![],
            minimal_phrases(),
            responses,
        );
        assert!(matches!(
            store.validate(),
            Err(ContentError::EmptyResponseBank(category)) if category == "fallback"
        ));
    }

    #[test]
    fn validation_rejects_empty_phrase_table() {
        let store = ContentStore::new(
            vec![minimal_topic("family")],
            vec![],
            vec![],
            vec![],
            minimal_responses(),
        );
        assert!(matches!(
            store.validate(),
            Err(ContentError::NoPhraseTemplates)
        ));
    }

    #[test]
    fn validation_rejects_duplicate_topic_ids() {
        let store = ContentStore::new(
            vec![minimal_topic("family"), minimal_topic("family")],
            vec![],
            vec![],
            minimal_phrases(),
            minimal_responses(),
        );
        assert!(matches!(
            store.validate(),
            Err(ContentError::DuplicateTopic(id)) if id == "family"
        ));
    }

    #[test]
    fn grammar_families_are_loaded() {
        let store = store();
        #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
        let verbs = store.grammar_family("verbs").expect("verbs family");
        assert!(verbs.entries.iter().any(|entry| entry.name == "essere"));
        assert!(store.grammar_family("articles").is_some());
        assert!(store.grammar_family("adverbs").is_none());
    }
}
