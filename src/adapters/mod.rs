// Adapters layer: concrete implementations of the domain ports over HTTP.

pub mod nba_api;
pub mod twilio;

use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

/// Shared client setup; the timeout bounds how long a run can block.
pub fn http_client(timeout: Duration) -> Result<Client> {
    Ok(Client::builder().timeout(timeout).build()?)
}
