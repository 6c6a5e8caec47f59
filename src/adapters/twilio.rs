use crate::config::secrets::SmsCredentials;
use crate::domain::ports::Notifier;
use crate::utils::error::{NbaAlertError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Sends SMS through the Twilio Messages API.
#[derive(Debug, Clone)]
pub struct TwilioNotifier {
    client: Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
}

impl TwilioNotifier {
    pub fn new(client: Client, base_url: String, credentials: &SmsCredentials) -> Self {
        Self {
            client,
            base_url,
            account_sid: credentials.account_sid.clone(),
            auth_token: credentials.auth_token.clone(),
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url.trim_end_matches('/'),
            self.account_sid
        )
    }
}

#[async_trait]
impl Notifier for TwilioNotifier {
    async fn send(&self, message: Option<&str>, sender: &str, receiver: &str) -> Result<()> {
        let Some(body) = message else {
            tracing::debug!("No message to send");
            return Ok(());
        };

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[("From", sender), ("To", receiver), ("Body", body)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(NbaAlertError::NotificationError {
                status: status.as_u16(),
                body: text,
            });
        }

        tracing::info!("SMS sent to {}", receiver);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn notifier(server: &MockServer) -> TwilioNotifier {
        let credentials = SmsCredentials {
            account_sid: "AC123".to_string(),
            auth_token: "secret".to_string(),
            sender: "+15550000001".to_string(),
        };
        TwilioNotifier::new(
            crate::adapters::http_client(Duration::from_secs(5)).unwrap(),
            server.base_url(),
            &credentials,
        )
    }

    #[tokio::test]
    async fn test_none_makes_no_request() {
        let server = MockServer::start();
        let sms_mock = server.mock(|when, then| {
            when.method(POST);
            then.status(201);
        });

        notifier(&server)
            .send(None, "+15550000001", "+15550000002")
            .await
            .unwrap();

        assert_eq!(sms_mock.hits(), 0);
    }

    #[tokio::test]
    async fn test_posts_form_with_basic_auth() {
        let server = MockServer::start();
        let sms_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/2010-04-01/Accounts/AC123/Messages.json")
                .header("authorization", "Basic QUMxMjM6c2VjcmV0")
                .x_www_form_urlencoded_tuple("From", "+15550000001")
                .x_www_form_urlencoded_tuple("To", "+15550000002")
                .x_www_form_urlencoded_tuple("Body", "Hello!");
            then.status(201)
                .json_body(serde_json::json!({"sid": "SM1", "status": "queued"}));
        });

        notifier(&server)
            .send(Some("Hello!"), "+15550000001", "+15550000002")
            .await
            .unwrap();

        sms_mock.assert_hits(1);
    }

    #[tokio::test]
    async fn test_rejection_is_notification_error() {
        let server = MockServer::start();
        let sms_mock = server.mock(|when, then| {
            when.method(POST);
            then.status(400)
                .body(r#"{"code": 21211, "message": "Invalid 'To' Phone Number"}"#);
        });

        let err = notifier(&server)
            .send(Some("Hello!"), "+15550000001", "+15550000002")
            .await
            .unwrap_err();

        sms_mock.assert_hits(1);
        match err {
            NbaAlertError::NotificationError { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("21211"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
