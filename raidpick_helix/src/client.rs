use std::time::Duration;

use raidpick_config::Secret;
use raidpick_core::{Error, Result};
use reqwest::StatusCode;

use crate::{config::Config, data, OAuth};

/// A non-success response from Helix
#[derive(Debug, thiserror::Error)]
#[error("helix responded with {status}: {message}")]
pub struct HelixError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Clone)]
pub struct HelixClient {
    agent: reqwest::Client,
    client_id: String,
    bearer_token: Secret<String>,
    base: String,
    timeout: Duration,
}

impl std::fmt::Debug for HelixClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HelixClient")
            .field("client_id", &self.client_id)
            .field("bearer_token", &self.bearer_token)
            .field("base", &self.base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl HelixClient {
    pub fn new(config: &Config, oauth: &OAuth) -> anyhow::Result<Self> {
        let agent = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()?;

        Ok(Self {
            agent,
            client_id: oauth.get_client_id().to_string(),
            bearer_token: Secret::from(oauth.get_bearer_token()),
            base: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
        })
    }

    /// Builds a client from `config`, requesting an app token unless one was configured
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let oauth = match &config.bearer_token {
            Some(token) => {
                log::debug!("using the configured bearer token");
                OAuth::from_token(&config.client_id, token)
            }
            None => OAuth::create(&config.client_id, &config.client_secret).await?,
        };
        Self::new(config, &oauth)
    }

    /// Fetches `ep`, a 404 is `None`
    pub(crate) async fn get_response<'k, 'v, T>(
        &self,
        ep: &str,
        query: &[(&'k str, &'v str)],
    ) -> Result<Option<data::Data<T>>>
    where
        for<'de> T: ::serde::Deserialize<'de>,
    {
        let url = format!("{}/{}", self.base, ep);
        log::trace!("GET {url} {query:?}");

        let response = self
            .agent
            .get(&url)
            .query(query)
            .header("client-id", &*self.client_id)
            .bearer_auth(&*self.bearer_token)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(Error::transient)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            log::debug!("{ep} returned not found");
            return Ok(None);
        }

        let body = response.bytes().await.map_err(Error::transient)?;
        if !status.is_success() {
            let message = serde_json::from_slice::<data::ErrorBody>(&body)
                .map(|err| match err.message.is_empty() {
                    true => err.error,
                    false => err.message,
                })
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            return Err(Error::transient(HelixError { status, message }));
        }

        serde_json::from_slice(&body)
            .map(Some)
            .map_err(|err| Error::protocol(format!("{ep}: {err}")))
    }
}
