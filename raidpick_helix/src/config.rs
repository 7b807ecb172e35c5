use std::time::Duration;

use raidpick_config::{load_from_env_with, LoadFromEnv, Secret};

pub const BASE_URL: &str = "https://api.twitch.tv/helix";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub client_id: String,
    pub client_secret: Secret<String>,
    /// Used as-is when set, otherwise an app token is requested
    pub bearer_token: Option<Secret<String>>,
    pub base_url: String,
    /// How long a single request may take before it is abandoned
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: Secret::default(),
            bearer_token: None,
            base_url: String::from(BASE_URL),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LoadFromEnv for Config {
    fn load_from_env() -> anyhow::Result<Self> {
        load_from_env_with(
            &[
                ("RAIDPICK_TWITCH_CLIENT_ID", |t, v| t.client_id = v),
                ("RAIDPICK_TWITCH_CLIENT_SECRET", |t, v| {
                    t.client_secret = Secret(v)
                }),
            ],
            &[
                ("RAIDPICK_TWITCH_BEARER_TOKEN", |t, v| {
                    t.bearer_token = Some(Secret(v))
                }),
                ("RAIDPICK_HELIX_BASE_URL", |t, v| {
                    t.base_url = v.trim_end_matches('/').to_string()
                }),
                ("RAIDPICK_HELIX_TIMEOUT_SECS", |t, v| match v.parse() {
                    Ok(secs) => t.request_timeout = Duration::from_secs(secs),
                    Err(err) => log::warn!(
                        "invalid RAIDPICK_HELIX_TIMEOUT_SECS '{v}' ({err}), using {:?}",
                        t.request_timeout
                    ),
                }),
            ],
        )
    }
}
