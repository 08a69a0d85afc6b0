#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Scripted dialogue engine for the Italian-learning assistant.
//!
//! One utterance goes in, one [`DispatchResult`] comes out: the utterance is
//! classified into an intent, matching content is looked up in the static
//! tables, and a templated reply plus an optional typed payload is composed.
//!
//! # Key properties
//! - Classification is a pure function of the utterance text
//! - "Not found" lookups are outcomes, never errors
//! - The only mutation per turn is the history append on the owned context
//! - Randomness is injected and seedable for deterministic tests

use serde::{Deserialize, Serialize};

use parla_content::{GrammarFamily, Translation, VocabularyTopic};

pub mod classify;
pub mod compose;
pub mod context;
pub mod engine;
pub mod practice;
pub mod resolve;

pub use classify::{Intent, IntentClassifier};
pub use compose::ResponseComposer;
pub use context::{ConversationContext, HistoryEntry};
pub use engine::DialogueEngine;
pub use practice::PracticeQuestion;
pub use resolve::{ContentResolver, Resolution};

/// Structured payload attached to a reply, discriminated on the wire by
/// `type` with the variant body under `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Payload {
    Vocabulary(VocabularyTopic),
    Grammar(GrammarFamily),
    Practice(PracticeQuestion),
    Translation(Translation),
}

/// One processed utterance: reply text, optional payload, detected intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchResult {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<Payload>,
    pub intent: Intent,
}
