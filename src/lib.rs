pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, ReminderCli};

pub use config::secrets::{CloseGamesSecrets, ReminderSecrets};
pub use config::toml_config::JobConfig;
pub use crate::core::{
    closeness::{evaluate, evaluate_all, CloseGameRule},
    composer::compose_message,
    job::CloseGamesJob,
    reminder::ReminderJob,
};
pub use utils::error::{NbaAlertError, Result};
