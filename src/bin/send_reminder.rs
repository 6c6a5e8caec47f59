use anyhow::Context;
use clap::Parser;
use close_nba_games::config::{cli::load_config, secret_store};
use close_nba_games::utils::{logger, validation::Validate};
use close_nba_games::{app, ReminderCli, ReminderSecrets};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = ReminderCli::parse();
    logger::init_from_env(cli.verbose);

    let config = load_config(cli.config.as_ref()).context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let secrets = ReminderSecrets::resolve(&secret_store(&config))
        .context("Failed to resolve reminder secrets")?;

    app::reminder_job(&config, secrets)?
        .run()
        .await
        .context("Failed to send reminder")?;

    tracing::info!("Reminder sent");
    Ok(())
}
