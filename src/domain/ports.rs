use crate::domain::model::Game;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Source of live game snapshots.
#[async_trait]
pub trait GameFetcher: Send + Sync {
    async fn fetch(&self, api_key: &str) -> Result<Vec<Game>>;
}

/// SMS delivery. `None` must be a no-op.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: Option<&str>, sender: &str, receiver: &str) -> Result<()>;
}

/// Key-value lookup for credentials resolved at run time.
pub trait SecretStore: Send + Sync {
    /// Returns `Ok(None)` when this store does not hold `name`.
    fn lookup(&self, name: &str) -> Result<Option<String>>;
}
