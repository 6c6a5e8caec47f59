use crate::config::secrets::CloseGamesSecrets;
use crate::core::closeness::{evaluate_all, CloseGameRule};
use crate::core::composer::compose_message;
use crate::domain::model::RunReport;
use crate::domain::ports::{GameFetcher, Notifier};
use crate::utils::error::Result;
use chrono::Utc;

/// Fetch → evaluate → compose → notify, once per call to [`CloseGamesJob::run`].
pub struct CloseGamesJob<F: GameFetcher, N: Notifier> {
    fetcher: F,
    notifier: N,
    secrets: CloseGamesSecrets,
    rule: CloseGameRule,
    dry_run: bool,
}

impl<F: GameFetcher, N: Notifier> CloseGamesJob<F, N> {
    pub fn new(fetcher: F, notifier: N, secrets: CloseGamesSecrets, rule: CloseGameRule) -> Self {
        Self {
            fetcher,
            notifier,
            secrets,
            rule,
            dry_run: false,
        }
    }

    /// Compose and log the message but never hand it to the notifier.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run(&self) -> Result<RunReport> {
        let started_at = Utc::now();
        tracing::info!("Checking live NBA games");

        let games = self.fetcher.fetch(&self.secrets.nba_api_key).await?;
        let games_checked = games.len();
        tracing::debug!("Fetched {} live games", games_checked);

        let evaluated = evaluate_all(games, &self.rule)?;
        let close_games = evaluated.iter().filter(|g| g.is_close).count();
        for game in &evaluated {
            tracing::debug!(
                "{} @ {} {}-{} period={} close={}",
                game.visitor_nick(),
                game.home_nick(),
                game.visitor_points,
                game.home_points,
                game.game.current_period,
                game.is_close
            );
        }

        let message = compose_message(&evaluated);
        let notified = match (&message, self.dry_run) {
            (None, _) => {
                tracing::info!("No close games among {} live games", games_checked);
                false
            }
            (Some(body), true) => {
                tracing::info!("Dry run, not sending: {}", body);
                false
            }
            (Some(body), false) => {
                tracing::info!("Sending alert for {} close games", close_games);
                self.notifier
                    .send(
                        Some(body.as_str()),
                        &self.secrets.sms.sender,
                        &self.secrets.receiver,
                    )
                    .await?;
                true
            }
        };

        let report = RunReport {
            started_at,
            games_checked,
            close_games,
            message,
            notified,
        };
        tracing::debug!("Run report: {}", serde_json::to_string(&report)?);

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secrets::SmsCredentials;
    use crate::core::closeness::tests::game;
    use crate::domain::model::Game;
    use crate::utils::error::NbaAlertError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct StaticFetcher {
        games: Vec<Game>,
        seen_keys: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl GameFetcher for StaticFetcher {
        async fn fetch(&self, api_key: &str) -> Result<Vec<Game>> {
            self.seen_keys.lock().await.push(api_key.to_string());
            Ok(self.games.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl GameFetcher for FailingFetcher {
        async fn fetch(&self, _api_key: &str) -> Result<Vec<Game>> {
            Err(NbaAlertError::UpstreamStatus { status: 500 })
        }
    }

    #[derive(Clone, Default)]
    struct RecordingNotifier {
        sent: Arc<Mutex<Vec<(String, String, String)>>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, message: Option<&str>, sender: &str, receiver: &str) -> Result<()> {
            if let Some(body) = message {
                self.sent
                    .lock()
                    .await
                    .push((body.to_string(), sender.to_string(), receiver.to_string()));
            }
            Ok(())
        }
    }

    fn secrets() -> CloseGamesSecrets {
        CloseGamesSecrets {
            nba_api_key: "key-123".to_string(),
            receiver: "+15550000002".to_string(),
            sms: SmsCredentials {
                account_sid: "AC123".to_string(),
                auth_token: "token".to_string(),
                sender: "+15550000001".to_string(),
            },
        }
    }

    fn job(games: Vec<Game>, notifier: RecordingNotifier) -> CloseGamesJob<StaticFetcher, RecordingNotifier> {
        let fetcher = StaticFetcher {
            games,
            seen_keys: Arc::new(Mutex::new(Vec::new())),
        };
        CloseGamesJob::new(fetcher, notifier, secrets(), CloseGameRule::default())
    }

    #[tokio::test]
    async fn test_sends_single_game_alert() {
        let notifier = RecordingNotifier::default();
        let job = job(
            vec![
                game("4/4", ("Celtics", "101"), ("Lakers", "100")),
                game("3/4", ("Heat", "90"), ("Knicks", "60")),
            ],
            notifier.clone(),
        );

        let report = job.run().await.unwrap();

        assert_eq!(report.games_checked, 2);
        assert_eq!(report.close_games, 1);
        assert!(report.notified);
        assert_eq!(job.fetcher.seen_keys.lock().await.as_slice(), ["key-123"]);

        let sent = notifier.sent.lock().await;
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0].0,
            "There is a close NBA game on right now between the Celtics and Lakers! Score: 101-100."
        );
        assert_eq!(sent[0].1, "+15550000001");
        assert_eq!(sent[0].2, "+15550000002");
    }

    #[tokio::test]
    async fn test_run_report_serializes_to_json() {
        let job = job(
            vec![game("4/4", ("Celtics", "101"), ("Lakers", "100"))],
            RecordingNotifier::default(),
        )
        .with_dry_run(true);

        let report = job.run().await.unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["games_checked"], 1);
        assert_eq!(value["close_games"], 1);
        assert_eq!(value["notified"], false);
        assert_eq!(
            value["message"],
            "There is a close NBA game on right now between the Celtics and Lakers! Score: 101-100."
        );
        assert!(value["started_at"].is_string());
    }

    #[tokio::test]
    async fn test_nothing_sent_without_close_games() {
        let notifier = RecordingNotifier::default();
        let job = job(
            vec![game("4/4", ("Celtics", "130"), ("Lakers", "100"))],
            notifier.clone(),
        );

        let report = job.run().await.unwrap();

        assert_eq!(report.message, None);
        assert!(!report.notified);
        assert!(notifier.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_composes_without_sending() {
        let notifier = RecordingNotifier::default();
        let job = job(
            vec![game("4/4", ("Celtics", "100"), ("Lakers", "100"))],
            notifier.clone(),
        )
        .with_dry_run(true);

        let report = job.run().await.unwrap();

        assert!(report.message.is_some());
        assert!(!report.notified);
        assert!(notifier.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_bad_score_aborts_before_notifying() {
        let notifier = RecordingNotifier::default();
        let job = job(
            vec![
                game("4/4", ("Celtics", "100"), ("Lakers", "100")),
                game("4/4", ("Heat", "n/a"), ("Knicks", "100")),
            ],
            notifier.clone(),
        );

        let err = job.run().await.unwrap_err();

        assert!(matches!(err, NbaAlertError::ScoreParseError { .. }));
        assert!(notifier.sent.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_is_terminal() {
        let notifier = RecordingNotifier::default();
        let job = CloseGamesJob::new(
            FailingFetcher,
            notifier.clone(),
            secrets(),
            CloseGameRule::default(),
        );

        let err = job.run().await.unwrap_err();

        assert!(matches!(err, NbaAlertError::UpstreamStatus { status: 500 }));
        assert!(notifier.sent.lock().await.is_empty());
    }
}
