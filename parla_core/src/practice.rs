//! Practice-question sampling.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use parla_content::{AnswerField, ContentStore, VocabularyEntry};

/// A generated practice question.
///
/// The sampled entry is returned whole as the answer key; `answer_field`
/// names the field the chosen template actually asks for, so a grader knows
/// what to compare the learner's reply against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeQuestion {
    pub question: String,
    pub answer: VocabularyEntry,
    pub category: String,
    pub answer_field: AnswerField,
}

/// Sample a question: uniform topic, uniform entry within it, uniform
/// template. Returns `None` only for a store that failed validation (no
/// topics or no templates).
#[must_use]
pub fn generate<R: Rng>(store: &ContentStore, rng: &mut R) -> Option<PracticeQuestion> {
    let topic = store.topics().choose(rng)?;
    let entry = topic.words.choose(rng)?;
    let template = store.phrase_templates().choose(rng)?;

    Some(PracticeQuestion {
        question: template.render(entry),
        answer: entry.clone(),
        category: topic.category.clone(),
        answer_field: template.answer_field,
    })
}
