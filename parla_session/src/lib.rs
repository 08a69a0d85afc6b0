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

//! In-memory session map for the HTTP transport.
//!
//! Sessions live for the lifetime of the process — there is no persistence
//! by design. Each session owns its own [`DialogueEngine`], so conversation
//! histories cannot cross-contaminate, and all access goes through one
//! `RwLock`, which provides the single-writer-per-session serialization the
//! engine requires.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use parla_content::ContentStore;
use parla_core::{DialogueEngine, DispatchResult, Payload};

/// Who authored a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Bot,
}

/// One message in a session transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionMessage {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<Payload>,
}

/// A session's wire-visible state: id, creation time and full transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<SessionMessage>,
}

struct SessionEntry {
    session: Session,
    engine: DialogueEngine,
}

/// Process-lifetime session map. One dialogue engine per session.
pub struct SessionStore {
    content: Arc<ContentStore>,
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self {
            content,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Return the given session id if it exists, otherwise create a fresh
    /// session (with a new v7 id when none was supplied).
    pub async fn get_or_create(&self, id: Option<Uuid>) -> Uuid {
        let mut sessions = self.sessions.write().await;

        if let Some(id) = id {
            if sessions.contains_key(&id) {
                return id;
            }
        }

        let id = id.unwrap_or_else(Uuid::now_v7);
        sessions.insert(
            id,
            SessionEntry {
                session: Session {
                    id,
                    created_at: Utc::now(),
                    messages: Vec::new(),
                },
                engine: DialogueEngine::new(Arc::clone(&self.content)),
            },
        );
        info!(session = %id, "created session");
        id
    }

    /// Run one utterance through the session's engine and append both sides
    /// of the exchange to the transcript. Returns `None` for an unknown
    /// session id.
    pub async fn process_message(&self, id: Uuid, message: &str) -> Option<DispatchResult> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;

        let result = entry.engine.process(message);

        entry.session.messages.push(SessionMessage {
            kind: MessageKind::User,
            content: message.to_string(),
            timestamp: Utc::now(),
            additional_data: None,
        });
        entry.session.messages.push(SessionMessage {
            kind: MessageKind::Bot,
            content: result.response.clone(),
            timestamp: Utc::now(),
            additional_data: result.additional_data.clone(),
        });

        Some(result)
    }

    /// Snapshot a session's wire-visible state.
    pub async fn get(&self, id: Uuid) -> Option<Session> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|entry| entry.session.clone())
    }

    /// Ids of all live sessions.
    pub async fn list(&self) -> Vec<Uuid> {
        self.sessions.read().await.keys().copied().collect()
    }

    /// Drop a session. Returns whether it existed.
    pub async fn clear(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(session = %id, "cleared session");
        }
        removed
    }
}
