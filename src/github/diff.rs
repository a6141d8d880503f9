use reqwest::header::ACCEPT;
use reqwest::Client;

use crate::error::RelayError;

pub const DIFF_MEDIA_TYPE: &str = "application/vnd.github.v3.diff";

/// Downloads the raw unified diff behind a pull request's `diff_url`.
pub async fn fetch_diff(
    client: &Client,
    diff_url: &str,
    token: Option<&str>,
) -> Result<String, RelayError> {
    let mut request = client.get(diff_url).header(ACCEPT, DIFF_MEDIA_TYPE);

    if let Some(token) = token {
        request = request.bearer_auth(token);
    }

    let response = request
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(RelayError::DiffFetch)?;

    response.text().await.map_err(RelayError::DiffFetch)
}
