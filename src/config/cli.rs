use crate::config::toml_config::JobConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

// Must agree with DEFAULT_INTERVAL_MINUTES.
const DEFAULT_INTERVAL_MINUTES_STR: &str = "15";

#[derive(Debug, Clone, Parser)]
#[command(name = "close-nba-games")]
#[command(about = "Texts you when a live NBA game is close in the fourth quarter")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Keep running and poll every N minutes (15 when given without a value)
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_INTERVAL_MINUTES_STR)]
    pub every_minutes: Option<u64>,

    /// Compose and log the message without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "send-reminder")]
#[command(about = "Sends a one-off reminder text")]
pub struct ReminderCli {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Loads the config file when one is given, otherwise the defaults.
pub fn load_config(path: Option<&PathBuf>) -> Result<JobConfig> {
    match path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            JobConfig::from_file(path)
        }
        None => Ok(JobConfig::default()),
    }
}

impl CliConfig {
    /// Applies command-line overrides on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut JobConfig) {
        if let Some(minutes) = self.every_minutes {
            config.schedule.interval_minutes = Some(minutes);
            tracing::info!("Polling interval overridden to {} minutes", minutes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schedule::DEFAULT_INTERVAL_MINUTES;

    #[test]
    fn test_every_minutes_defaults_to_fifteen() {
        let cli = CliConfig::parse_from(["close-nba-games", "--every-minutes"]);
        assert_eq!(cli.every_minutes, Some(DEFAULT_INTERVAL_MINUTES));

        let cli = CliConfig::parse_from(["close-nba-games", "--every-minutes", "5"]);
        assert_eq!(cli.every_minutes, Some(5));

        let cli = CliConfig::parse_from(["close-nba-games"]);
        assert_eq!(cli.every_minutes, None);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = CliConfig::parse_from(["close-nba-games", "--every-minutes", "30", "-v"]);
        let mut config = JobConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.schedule.interval_minutes, Some(30));
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let path = PathBuf::from("/definitely/not/here/close-nba-games.toml");
        assert!(load_config(Some(&path)).is_err());
        assert!(load_config(None).is_ok());
    }
}
