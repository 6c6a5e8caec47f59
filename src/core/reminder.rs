use crate::config::secrets::ReminderSecrets;
use crate::domain::ports::Notifier;
use crate::utils::error::Result;

pub const REMINDER_BODY: &str = "Hello!";

/// Sends the fixed reminder text to the configured phone number.
pub struct ReminderJob<N: Notifier> {
    notifier: N,
    secrets: ReminderSecrets,
}

impl<N: Notifier> ReminderJob<N> {
    pub fn new(notifier: N, secrets: ReminderSecrets) -> Self {
        Self { notifier, secrets }
    }

    pub async fn run(&self) -> Result<()> {
        tracing::info!("Sending reminder to {}", self.secrets.receiver);
        self.notifier
            .send(
                Some(REMINDER_BODY),
                &self.secrets.sms.sender,
                &self.secrets.receiver,
            )
            .await
    }
}
