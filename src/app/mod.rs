// App layer: wires the HTTP adapters into the jobs from configuration.

use crate::adapters::{http_client, nba_api::NbaApiFetcher, twilio::TwilioNotifier};
use crate::config::secrets::{CloseGamesSecrets, ReminderSecrets};
use crate::config::toml_config::JobConfig;
use crate::core::job::CloseGamesJob;
use crate::core::reminder::ReminderJob;
use crate::utils::error::Result;

pub type LiveCloseGamesJob = CloseGamesJob<NbaApiFetcher, TwilioNotifier>;

pub fn close_games_job(config: &JobConfig, secrets: CloseGamesSecrets) -> Result<LiveCloseGamesJob> {
    let client = http_client(config.request_timeout())?;
    let fetcher = NbaApiFetcher::new(
        client.clone(),
        config.nba_api.endpoint.clone(),
        config.nba_api.host.clone(),
    );
    let notifier = TwilioNotifier::new(client, config.twilio.base_url.clone(), &secrets.sms);

    Ok(CloseGamesJob::new(fetcher, notifier, secrets, config.rule()))
}

pub fn reminder_job(config: &JobConfig, secrets: ReminderSecrets) -> Result<ReminderJob<TwilioNotifier>> {
    let client = http_client(config.request_timeout())?;
    let notifier = TwilioNotifier::new(client, config.twilio.base_url.clone(), &secrets.sms);

    Ok(ReminderJob::new(notifier, secrets))
}
