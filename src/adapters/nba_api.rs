use crate::domain::model::{Game, LiveGamesResponse};
use crate::domain::ports::GameFetcher;
use crate::utils::error::{NbaAlertError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// RapidAPI "API-NBA" live games endpoint.
#[derive(Debug, Clone)]
pub struct NbaApiFetcher {
    client: Client,
    endpoint: String,
    host: String,
}

impl NbaApiFetcher {
    pub fn new(client: Client, endpoint: String, host: String) -> Self {
        Self {
            client,
            endpoint,
            host,
        }
    }
}

#[async_trait]
impl GameFetcher for NbaApiFetcher {
    async fn fetch(&self, api_key: &str) -> Result<Vec<Game>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header("x-rapidapi-host", &self.host)
            .header("x-rapidapi-key", api_key)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            let err = NbaAlertError::UpstreamStatus {
                status: status.as_u16(),
            };
            tracing::error!("{}", err);
            return Err(err);
        }

        let body = response.text().await?;
        tracing::debug!("Live games payload: {}", body);
        let parsed: LiveGamesResponse = serde_json::from_str(&body)?;

        Ok(parsed.api.games)
    }
}
