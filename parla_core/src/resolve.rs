//! Per-intent content resolution.
//!
//! The resolver turns an intent plus the raw utterance into a [`Resolution`]:
//! either resolved content cloned out of the store, or an explicit
//! "nothing matched" signal. The signals are domain outcomes the composer
//! maps to guidance text — they are never errors.

use std::sync::Arc;

use parla_content::ContentStore;

use crate::practice::PracticeQuestion;

/// Outcome of resolving one utterance against the content tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Greeting and help turns need no lookup; the composer owns the text.
    Canned,
    /// A vocabulary topic, for both the `vocabulary` and `topic` intents.
    Topic(parla_content::VocabularyTopic),
    /// A token named a known alias, but the aliased topic is not in the
    /// store. Unreachable after load-time validation; kept as an explicit
    /// outcome rather than a panic.
    TopicUnknown,
    /// No token in the utterance named a topic.
    TopicUnspecified,
    /// A grammar family selected by keyword.
    Grammar(parla_content::GrammarFamily),
    /// Grammar was requested without naming verbs or articles.
    GrammarUnspecified,
    /// A sampled practice question.
    Practice(PracticeQuestion),
    /// A word from the utterance matched a vocabulary entry.
    Translation(parla_content::Translation),
    /// No token matched any entry.
    TranslationNotFound,
}

/// Searches the content store on behalf of the dialogue engine.
pub struct ContentResolver {
    store: Arc<ContentStore>,
}

impl ContentResolver {
    #[must_use]
    pub const fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    /// `vocabulary` intent: scan whitespace tokens for the first one naming
    /// a topic alias, then resolve it.
    #[must_use]
    pub fn resolve_vocabulary(&self, utterance: &str) -> Resolution {
        utterance
            .split_whitespace()
            .find_map(|token| self.store.resolve_alias(token))
            .map_or(Resolution::TopicUnspecified, |id| self.topic_by_id(id))
    }

    /// `topic` intent: the classifier already extracted the alias token;
    /// resolve it the same way `vocabulary` does.
    #[must_use]
    pub fn resolve_topic_token(&self, token: &str) -> Resolution {
        self.store
            .resolve_alias(token)
            .map_or(Resolution::TopicUnspecified, |id| self.topic_by_id(id))
    }

    /// `grammar` intent: substring probe for "verb" then "article", in that
    /// order.
    #[must_use]
    pub fn resolve_grammar(&self, utterance: &str) -> Resolution {
        let lower = utterance.to_lowercase();
        for (needle, family) in [("verb", "verbs"), ("article", "articles")] {
            if lower.contains(needle) {
                if let Some(found) = self.store.grammar_family(family) {
                    return Resolution::Grammar(found.clone());
                }
            }
        }
        Resolution::GrammarUnspecified
    }

    /// `question`/`general` intents: exact case-insensitive lookup of each
    /// token against every entry's italian and english fields, first hit
    /// wins.
    #[must_use]
    pub fn resolve_translation(&self, utterance: &str) -> Resolution {
        utterance
            .split_whitespace()
            .find_map(|token| self.store.find_word(token))
            .map_or(Resolution::TranslationNotFound, Resolution::Translation)
    }

    fn topic_by_id(&self, id: &str) -> Resolution {
        self.store
            .topic(id)
            .map_or(Resolution::TopicUnknown, |topic| {
                Resolution::Topic(topic.clone())
            })
    }
}
