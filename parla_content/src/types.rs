//! Table row types for the static learning content.

use serde::{Deserialize, Serialize};

/// A single vocabulary item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub italian: String,
    pub english: String,
    pub pronunciation: String,
    pub example: String,
}

/// A vocabulary grouping with a canonical id and a display label.
///
/// Invariants (checked by [`crate::ContentStore::validate`]): ids are unique
/// across the table and `words` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyTopic {
    /// Canonical topic id, e.g. `family` or `colors`.
    pub id: String,
    /// Display label, e.g. `La Famiglia`.
    pub category: String,
    pub words: Vec<VocabularyEntry>,
}

/// One inflected form of a verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conjugation {
    pub pronoun: String,
    pub form: String,
}

/// A named grammar construct: a verb with its conjugation table, an article
/// with usage examples, and so on. All detail fields are optional since not
/// every construct conjugates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conjugation: Option<Vec<Conjugation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
}

/// A named family of grammar entries (`verbs`, `articles`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarFamily {
    pub name: String,
    pub entries: Vec<GrammarEntry>,
}

/// Which field of a [`VocabularyEntry`] a practice question asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerField {
    Italian,
    English,
    Pronunciation,
}

impl AnswerField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Italian => "italian",
            Self::English => "english",
            Self::Pronunciation => "pronunciation",
        }
    }
}

/// A practice-question template.
///
/// `text` may contain `{italian}` and `{english}` placeholders that are
/// substituted with the sampled entry's fields; `answer_field` names the
/// entry field a grader should check the learner's reply against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseTemplate {
    pub text: String,
    pub answer_field: AnswerField,
}

impl PhraseTemplate {
    /// Render the template against a vocabulary entry.
    #[must_use]
    pub fn render(&self, entry: &VocabularyEntry) -> String {
        self.text
            .replace("{italian}", &entry.italian)
            .replace("{english}", &entry.english)
    }
}

/// Result of a word lookup: the matched entry plus the display label of the
/// topic that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub italian: String,
    pub english: String,
    pub pronunciation: String,
    pub example: String,
    pub category: String,
}

impl Translation {
    #[must_use]
    pub fn new(entry: &VocabularyEntry, category: &str) -> Self {
        Self {
            italian: entry.italian.clone(),
            english: entry.english.clone(),
            pronunciation: entry.pronunciation.clone(),
            example: entry.example.clone(),
            category: category.to_string(),
        }
    }
}
