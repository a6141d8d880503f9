use reqwest::Client;

use crate::error::RelayError;
use crate::relay::payload::MergePayload;

pub async fn forward_payload(
    client: &Client,
    url: &str,
    payload: &MergePayload,
) -> Result<(), RelayError> {
    client
        .post(url)
        .json(payload)
        .send()
        .await
        .and_then(|res| res.error_for_status())
        .map_err(RelayError::Forward)?;

    Ok(())
}
