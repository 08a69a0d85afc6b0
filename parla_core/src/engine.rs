//! The dialogue engine: one utterance in, one dispatch result out.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use parla_content::ContentStore;

use crate::DispatchResult;
use crate::classify::{Intent, IntentClassifier};
use crate::compose::ResponseComposer;
use crate::context::ConversationContext;
use crate::practice;
use crate::resolve::{ContentResolver, Resolution};

/// Orchestrates one conversation: classify, record, resolve, compose.
///
/// The engine owns its [`ConversationContext`] and its randomness source;
/// the content store is shared and read-only. One engine per conversation —
/// callers that multiplex sessions keep a map of engines and serialize
/// access per entry.
pub struct DialogueEngine<R: Rng = StdRng> {
    classifier: IntentClassifier,
    resolver: ContentResolver,
    composer: ResponseComposer,
    store: Arc<ContentStore>,
    context: ConversationContext,
    rng: R,
}

impl DialogueEngine<StdRng> {
    /// Build an engine with an entropy-seeded generator.
    #[must_use]
    pub fn new(store: Arc<ContentStore>) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }
}

impl<R: Rng> DialogueEngine<R> {
    /// Build an engine with an explicit randomness source. Tests seed this
    /// for deterministic response selection.
    #[must_use]
    pub fn with_rng(store: Arc<ContentStore>, rng: R) -> Self {
        Self {
            classifier: IntentClassifier::from_store(&store),
            resolver: ContentResolver::new(Arc::clone(&store)),
            composer: ResponseComposer::new(Arc::clone(&store)),
            store,
            context: ConversationContext::new(),
            rng,
        }
    }

    /// Process one utterance.
    ///
    /// The single side effect is the history append on the owned context;
    /// the content store is never written. Malformed input cannot fail:
    /// anything unrecognizable classifies as `general` and draws a fallback
    /// reply.
    pub fn process(&mut self, message: &str) -> DispatchResult {
        let intent = self.classifier.classify(message);
        self.context.record(message, intent);

        let resolution = match intent {
            Intent::Greeting | Intent::Help => Resolution::Canned,
            Intent::Vocabulary => self.resolver.resolve_vocabulary(message),
            Intent::Grammar => self.resolver.resolve_grammar(message),
            Intent::Practice => practice::generate(&self.store, &mut self.rng)
                .map_or(Resolution::TranslationNotFound, Resolution::Practice),
            Intent::Topic => self
                .classifier
                .extract_topic(message)
                .map_or(Resolution::TopicUnspecified, |token| {
                    self.resolver.resolve_topic_token(&token)
                }),
            Intent::Question | Intent::General => self.resolver.resolve_translation(message),
        };

        let (response, additional_data) = self.composer.compose(intent, resolution, &mut self.rng);
        debug!(intent = intent.as_str(), "dispatched utterance");

        DispatchResult {
            response,
            additional_data,
            intent,
        }
    }

    /// The conversation state accumulated so far.
    #[must_use]
    pub const fn context(&self) -> &ConversationContext {
        &self.context
    }
}
