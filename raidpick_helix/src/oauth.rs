use raidpick_config::Secret;

use crate::data;

const TOKEN_URL: &str = "https://id.twitch.tv/oauth2/token";

/// Credentials attached to every Helix request
#[derive(Clone, Debug)]
pub struct OAuth {
    client_id: String,
    bearer_token: Secret<String>,
}

impl OAuth {
    /// Uses an existing token, it is never refreshed
    pub fn from_token(client_id: &str, bearer_token: &str) -> Self {
        Self {
            client_id: client_id.to_string(),
            bearer_token: Secret::from(bearer_token),
        }
    }

    /// Requests an app access token through the client credentials grant
    pub async fn create(client_id: &str, client_secret: &str) -> anyhow::Result<Self> {
        Self::create_with_ep(TOKEN_URL, client_id, client_secret).await
    }

    pub async fn create_with_ep(
        ep: &str,
        client_id: &str,
        client_secret: &str,
    ) -> anyhow::Result<Self> {
        log::debug!("requesting an app access token from {ep}");
        let query = &[
            ("client_id", client_id),
            ("client_secret", client_secret),
            ("grant_type", "client_credentials"),
        ];

        let response = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()?
            .post(ep)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        anyhow::ensure!(status.is_success(), "cannot get an access token: {status}");

        let data::Token { access_token } = response.json().await?;
        log::info!("got an app access token");

        Ok(Self {
            client_id: client_id.to_string(),
            bearer_token: Secret(access_token),
        })
    }

    pub fn get_client_id(&self) -> &str {
        &self.client_id
    }

    pub fn get_bearer_token(&self) -> &str {
        &self.bearer_token
    }
}
