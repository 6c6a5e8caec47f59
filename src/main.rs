use clap::Parser;
use close_nba_games::config::{cli::load_config, secret_store};
use close_nba_games::core::schedule::{ctrl_c, run_every};
use close_nba_games::utils::{logger, validation::Validate};
use close_nba_games::{app, CliConfig, CloseGamesSecrets, NbaAlertError};

fn exit_with(e: &NbaAlertError) -> ! {
    tracing::error!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_from_env(cli.verbose);
    tracing::info!("Starting close-nba-games");
    tracing::debug!("CLI config: {:?}", cli);

    let mut config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    cli.apply_overrides(&mut config);

    if let Err(e) = config.validate() {
        exit_with(&e);
    }

    let secrets = match CloseGamesSecrets::resolve(&secret_store(&config)) {
        Ok(secrets) => secrets,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Resolved secrets: {:?}", secrets);

    let job = match app::close_games_job(&config, secrets) {
        Ok(job) => job.with_dry_run(cli.dry_run),
        Err(e) => exit_with(&e),
    };

    match config.interval() {
        Some(period) => {
            tracing::info!("Polling every {} minutes", period.as_secs() / 60);
            let job = &job;
            let runs = run_every(
                period,
                move || async move {
                    let report = job.run().await?;
                    tracing::info!(
                        "Checked {} games, {} close, notified={}",
                        report.games_checked,
                        report.close_games,
                        report.notified
                    );
                    Ok::<(), NbaAlertError>(())
                },
                ctrl_c(),
            )
            .await;
            tracing::info!("Stopped after {} runs", runs);
        }
        None => match job.run().await {
            Ok(report) => {
                tracing::info!(
                    "Checked {} games, {} close, notified={}",
                    report.games_checked,
                    report.close_games,
                    report.notified
                );
                if let Some(message) = report.message {
                    println!("{}", message);
                }
            }
            Err(e) => exit_with(&e),
        },
    }
}
