//! Final response text and payload assembly.
//!
//! Canned categories draw uniformly from the response bank; resolved content
//! is rendered through fixed Italian templates; "not found" signals become
//! guidance text listing the topics the store actually knows.

use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::warn;

use parla_content::ContentStore;

use crate::Payload;
use crate::classify::Intent;
use crate::resolve::Resolution;

/// Reply to a `help` intent.
const HELP_TEXT: &str = "Posso aiutarti con:\n\
    • Vocabolario (scrivi \"vocabulary\" + argomento)\n\
    • Grammatica (scrivi \"grammar\" + argomento)\n\
    • Esercizi (scrivi \"practice\")\n\
    • Traduzioni (scrivi una parola in italiano o inglese)\n\
    \n\
    Esempio: \"vocabulary family\" o \"grammar verbs\"";

/// Menu shown when grammar is requested without a recognizable topic.
const GRAMMAR_MENU: &str = "Grammatica italiana - cosa vuoi sapere?\n\
    • Verbi (scrivi \"grammar verbs\")\n\
    • Articoli (scrivi \"grammar articles\")";

/// Builds the outgoing reply for one resolved turn.
pub struct ResponseComposer {
    store: Arc<ContentStore>,
}

impl ResponseComposer {
    #[must_use]
    pub const fn new(store: Arc<ContentStore>) -> Self {
        Self { store }
    }

    /// Compose the reply text and optional payload for one turn.
    pub fn compose<R: Rng>(
        &self,
        intent: Intent,
        resolution: Resolution,
        rng: &mut R,
    ) -> (String, Option<Payload>) {
        match resolution {
            Resolution::Canned => match intent {
                Intent::Help => (HELP_TEXT.to_string(), None),
                _ => (self.pick("greetings", rng), None),
            },
            Resolution::Topic(topic) => {
                let text = if intent == Intent::Topic {
                    format!("Parliamo di {}! Ecco alcune parole utili:", topic.category)
                } else {
                    format!("Ecco il vocabolario per {}:", topic.category)
                };
                (text, Some(Payload::Vocabulary(topic)))
            }
            Resolution::TopicUnknown => (
                format!(
                    "Non conosco questo argomento. Prova con: {}",
                    self.store.topic_id_list()
                ),
                None,
            ),
            Resolution::TopicUnspecified => (
                format!(
                    "Quale argomento vuoi studiare? Prova: {}",
                    self.store.topic_id_list()
                ),
                None,
            ),
            Resolution::Grammar(family) => {
                let text = match family.name.as_str() {
                    "verbs" => "Ecco i verbi più importanti in italiano:".to_string(),
                    "articles" => "Ecco gli articoli italiani:".to_string(),
                    other => format!("Ecco la grammatica per {other}:"),
                };
                (text, Some(Payload::Grammar(family)))
            }
            Resolution::GrammarUnspecified => (GRAMMAR_MENU.to_string(), None),
            Resolution::Practice(question) => {
                let text = format!("Pratichiamo! {}", question.question);
                (text, Some(Payload::Practice(question)))
            }
            Resolution::Translation(translation) => {
                let text = format!(
                    "{} = {}\nPronuncia: {}\nEsempio: {}",
                    translation.italian,
                    translation.english,
                    translation.pronunciation,
                    translation.example
                );
                (text, Some(Payload::Translation(translation)))
            }
            Resolution::TranslationNotFound => (self.pick("fallback", rng), None),
        }
    }

    /// Uniform-random pick from a response bank category. An empty category
    /// is a load-time invariant violation; degrade to an empty reply rather
    /// than panic if one slips past validation.
    fn pick<R: Rng>(&self, category: &str, rng: &mut R) -> String {
        self.store
            .responses(category)
            .and_then(|bank| bank.choose(rng))
            .cloned()
            .unwrap_or_else(|| {
                warn!(category, "response bank missing; store was not validated");
                String::new()
            })
    }
}
