//! Per-conversation mutable state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::Intent;

/// One processed utterance in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub message: String,
    pub intent: Intent,
    pub timestamp: DateTime<Utc>,
}

/// Accumulating state for a single conversation.
///
/// Owned by exactly one [`crate::DialogueEngine`]; the transport layer keeps
/// one engine per session, so histories cannot cross-contaminate.
/// `last_topic` and `learning_progress` are carried for future lesson
/// planning and are not written by the engine today.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationContext {
    pub last_topic: Option<String>,
    pub learning_progress: HashMap<String, serde_json::Value>,
    pub history: Vec<HistoryEntry>,
}

impl ConversationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one processed utterance. History is append-only and never
    /// pruned for the lifetime of the conversation.
    pub fn record(&mut self, message: &str, intent: Intent) {
        self.history.push(HistoryEntry {
            message: message.to_string(),
            intent,
            timestamp: Utc::now(),
        });
    }

    /// Number of utterances processed so far.
    #[must_use]
    pub const fn turn_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut context = ConversationContext::new();
        assert_eq!(context.turn_count(), 0);

        context.record("hello", Intent::Greeting);
        context.record("practice", Intent::Practice);

        assert_eq!(context.turn_count(), 2);
        assert_eq!(context.history[0].message, "hello");
        assert_eq!(context.history[0].intent, Intent::Greeting);
        assert_eq!(context.history[1].intent, Intent::Practice);
    }

    #[test]
    fn placeholders_start_empty() {
        let context = ConversationContext::new();
        assert!(context.last_topic.is_none());
        assert!(context.learning_progress.is_empty());
    }
}
