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

//! HTTP transport for the dialogue engine.
//!
//! Thin by design: one chat endpoint, one session snapshot endpoint and a
//! health probe. All dialogue decisions live in `parla_core`; the server
//! owns only session creation/retrieval and relays the dispatch result
//! unmodified.

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{AppState, router};

use std::sync::Arc;

use tracing::info;

use parla_config::ServerConfig;
use parla_session::SessionStore;

/// Bind and run the HTTP API until the task is cancelled.
pub async fn serve(config: &ServerConfig, sessions: Arc<SessionStore>) -> anyhow::Result<()> {
    let app = router(AppState { sessions }, config.frontend_url.as_deref());

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("chatbot listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
