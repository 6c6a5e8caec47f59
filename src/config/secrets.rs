use crate::domain::ports::SecretStore;
use crate::utils::error::{NbaAlertError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_phone_number, Validate};
use std::collections::HashMap;
use std::fmt;

// Close-games job.
pub const NBA_API_KEY: &str = "NBA_API_KEY";
pub const NBA_API_PHONE_NUMBER: &str = "NBA_API_PHONE_NUMBER";
pub const NBA_API_TWILIO_ACCOUNT_SID: &str = "NBA_API_TWILIO_ACCOUNT_SID";
pub const NBA_API_TWILIO_AUTH_TOKEN: &str = "NBA_API_TWILIO_AUTH_TOKEN";
pub const NBA_API_TWILIO_PHONE_NUMBER: &str = "NBA_API_TWILIO_PHONE_NUMBER";

// Reminder.
pub const PHONE_NUMBER: &str = "PHONE_NUMBER";
pub const TWILIO_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
pub const TWILIO_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
pub const TWILIO_PHONE_NUMBER: &str = "TWILIO_PHONE_NUMBER";

/// Reads secrets from the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore;

impl SecretStore for EnvSecretStore {
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        Ok(std::env::var(name).ok())
    }
}

/// Secrets from the `[secrets]` table of the config file.
#[derive(Clone, Default)]
pub struct TableSecretStore {
    values: HashMap<String, String>,
}

impl TableSecretStore {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl fmt::Debug for TableSecretStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("TableSecretStore").field("keys", &keys).finish()
    }
}

fn is_unresolved_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.starts_with("${") && value.ends_with('}')
}

impl SecretStore for TableSecretStore {
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        // A `${VAR}` left over after substitution means VAR was never exported.
        Ok(self
            .values
            .get(name)
            .filter(|v| !is_unresolved_placeholder(v))
            .cloned())
    }
}

/// Asks each store in turn and returns the first hit.
#[derive(Default)]
pub struct LayeredSecretStore {
    stores: Vec<Box<dyn SecretStore>>,
}

impl LayeredSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store<S: SecretStore + 'static>(mut self, store: S) -> Self {
        self.stores.push(Box::new(store));
        self
    }
}

impl SecretStore for LayeredSecretStore {
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        for store in &self.stores {
            if let Some(value) = store.lookup(name)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}

/// Looks up `name` and fails with `MissingSecret` when it is absent or blank.
pub fn require(store: &dyn SecretStore, name: &str) -> Result<String> {
    match store.lookup(name)? {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(NbaAlertError::MissingSecret {
            name: name.to_string(),
        }),
    }
}

fn redact(value: &str) -> String {
    if value.chars().count() <= 4 {
        return "****".to_string();
    }
    format!("{}****", value.chars().take(2).collect::<String>())
}

#[derive(Clone)]
pub struct SmsCredentials {
    pub account_sid: String,
    pub auth_token: String,
    /// Twilio number the message is sent from.
    pub sender: String,
}

impl fmt::Debug for SmsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmsCredentials")
            .field("account_sid", &redact(&self.account_sid))
            .field("auth_token", &"****")
            .field("sender", &self.sender)
            .finish()
    }
}

#[derive(Clone)]
pub struct CloseGamesSecrets {
    pub nba_api_key: String,
    pub receiver: String,
    pub sms: SmsCredentials,
}

impl CloseGamesSecrets {
    pub fn resolve(store: &dyn SecretStore) -> Result<Self> {
        let secrets = Self {
            nba_api_key: require(store, NBA_API_KEY)?,
            receiver: require(store, NBA_API_PHONE_NUMBER)?,
            sms: SmsCredentials {
                account_sid: require(store, NBA_API_TWILIO_ACCOUNT_SID)?,
                auth_token: require(store, NBA_API_TWILIO_AUTH_TOKEN)?,
                sender: require(store, NBA_API_TWILIO_PHONE_NUMBER)?,
            },
        };
        secrets.validate()?;
        Ok(secrets)
    }
}

impl fmt::Debug for CloseGamesSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseGamesSecrets")
            .field("nba_api_key", &"****")
            .field("receiver", &self.receiver)
            .field("sms", &self.sms)
            .finish()
    }
}

impl Validate for CloseGamesSecrets {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string(NBA_API_KEY, &self.nba_api_key)?;
        validate_phone_number(NBA_API_PHONE_NUMBER, &self.receiver)?;
        validate_phone_number(NBA_API_TWILIO_PHONE_NUMBER, &self.sms.sender)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ReminderSecrets {
    pub receiver: String,
    pub sms: SmsCredentials,
}

impl ReminderSecrets {
    pub fn resolve(store: &dyn SecretStore) -> Result<Self> {
        let secrets = Self {
            receiver: require(store, PHONE_NUMBER)?,
            sms: SmsCredentials {
                account_sid: require(store, TWILIO_ACCOUNT_SID)?,
                auth_token: require(store, TWILIO_AUTH_TOKEN)?,
                sender: require(store, TWILIO_PHONE_NUMBER)?,
            },
        };
        secrets.validate()?;
        Ok(secrets)
    }
}

impl Validate for ReminderSecrets {
    fn validate(&self) -> Result<()> {
        validate_phone_number(PHONE_NUMBER, &self.receiver)?;
        validate_phone_number(TWILIO_PHONE_NUMBER, &self.sms.sender)?;
        Ok(())
    }
}
