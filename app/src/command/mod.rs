//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically from `main`.

use std::sync::Arc;

use parla_config::Config;
use parla_content::ContentStore;
use tracing::info;

mod chat;
mod init;
mod serve;
mod version;

pub use chat::{ChatInput, ChatStrategy};
pub use init::InitStrategy;
pub use serve::{ServeInput, ServeStrategy};
pub use version::VersionStrategy;

/// Load the content tables the way the config asks for: from a data
/// directory when one is set, otherwise the embedded defaults.
fn load_content(config: &Config) -> anyhow::Result<Arc<ContentStore>> {
    let store = match &config.content.data_dir {
        Some(dir) => {
            info!("Loading content tables from {}", dir.display());
            ContentStore::load_from_dir(dir)?
        }
        None => ContentStore::load_default()?,
    };
    Ok(Arc::new(store))
}

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type, so
/// parameter passing stays type-safe without boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
