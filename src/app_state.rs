use reqwest::Client;

use crate::config::Config;
use crate::error::RelayError;

pub const USER_AGENT: &str = "merge-diff-relay";

pub struct AppState {
    pub client: Client,
    pub config: Config,
}

pub fn build_app_state(config: Config) -> Result<AppState, RelayError> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(config.http_timeout)
        .build()
        .map_err(|e| RelayError::Config(format!("failed to build HTTP client: {}", e)))?;

    Ok(AppState { client, config })
}
