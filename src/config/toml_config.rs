use crate::config::secrets::TableSecretStore;
use crate::core::closeness::{CloseGameRule, DEFAULT_CLOSE_MARGIN, DEFAULT_FINAL_PERIOD};
use crate::utils::error::{NbaAlertError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_NBA_ENDPOINT: &str = "https://api-nba-v1.p.rapidapi.com/games/live/";
pub const DEFAULT_NBA_HOST: &str = "api-nba-v1.p.rapidapi.com";
pub const DEFAULT_TWILIO_BASE_URL: &str = "https://api.twilio.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub nba_api: NbaApiConfig,
    pub twilio: TwilioConfig,
    pub closeness: ClosenessConfig,
    pub http: HttpConfig,
    pub schedule: ScheduleConfig,
    #[serde(skip_serializing)]
    pub secrets: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NbaApiConfig {
    pub endpoint: String,
    /// Sent as the `x-rapidapi-host` header.
    pub host: String,
}

impl Default for NbaApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_NBA_ENDPOINT.to_string(),
            host: DEFAULT_NBA_HOST.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwilioConfig {
    pub base_url: String,
}

impl Default for TwilioConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TWILIO_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosenessConfig {
    pub final_period: String,
    pub close_margin: u32,
}

impl Default for ClosenessConfig {
    fn default() -> Self {
        Self {
            final_period: DEFAULT_FINAL_PERIOD.to_string(),
            close_margin: DEFAULT_CLOSE_MARGIN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_seconds: 30 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Unset means a single run per invocation.
    pub interval_minutes: Option<u64>,
}

impl JobConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NbaAlertError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| NbaAlertError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NBA_API_KEY}); unknown variables are left as-is.
    ///
    /// Values are escaped for a TOML basic string (`"..."`), so references
    /// must sit inside double quotes, not literal `'...'` strings.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static env var pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => escape_basic_string(&value),
                Err(_) => format!("${{{}}}", var_name),
            }
        })
        .to_string()
    }

    pub fn rule(&self) -> CloseGameRule {
        CloseGameRule {
            final_period_marker: self.closeness.final_period.clone(),
            close_margin: self.closeness.close_margin,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_seconds)
    }

    /// `None` means a single run per invocation.
    pub fn interval(&self) -> Option<Duration> {
        self.schedule
            .interval_minutes
            .map(|minutes| Duration::from_secs(minutes * 60))
    }

    pub fn secret_table(&self) -> TableSecretStore {
        TableSecretStore::new(self.secrets.clone().unwrap_or_default())
    }
}

fn escape_basic_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c => escaped.push(c),
        }
    }
    escaped
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        validate_url("nba_api.endpoint", &self.nba_api.endpoint)?;
        validate_non_empty_string("nba_api.host", &self.nba_api.host)?;
        validate_url("twilio.base_url", &self.twilio.base_url)?;
        validate_non_empty_string("closeness.final_period", &self.closeness.final_period)?;
        validate_range("closeness.close_margin", self.closeness.close_margin, 1, 200)?;
        validate_range("http.timeout_seconds", self.http.timeout_seconds, 1, 300)?;
        if let Some(minutes) = self.schedule.interval_minutes {
            validate_range("schedule.interval_minutes", minutes, 1, 1440)?;
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}
