#[cfg(feature = "cli")]
pub mod cli;
pub mod secrets;
pub mod toml_config;

use secrets::{EnvSecretStore, LayeredSecretStore};
use toml_config::JobConfig;

/// Secrets are looked up in the config's `[secrets]` table first, then in
/// the environment.
pub fn secret_store(config: &JobConfig) -> LayeredSecretStore {
    LayeredSecretStore::new()
        .with_store(config.secret_table())
        .with_store(EnvSecretStore)
}
