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

//! Static learning content for the dialogue engine.
//!
//! Four read-only tables, loaded once at startup and shared behind an `Arc`:
//! vocabulary topics, grammar families, phrase templates and the canned
//! response bank. All lookups are exact-match and case-insensitive; the
//! tables are small enough that every scan is linear.

mod store;
mod types;

pub use store::{ContentError, ContentStore, TopicAlias, default_aliases};
pub use types::{
    AnswerField, Conjugation, GrammarEntry, GrammarFamily, PhraseTemplate, Translation,
    VocabularyEntry, VocabularyTopic,
};
