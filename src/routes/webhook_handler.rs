use crate::app_state::AppState;
use crate::error::RelayError;
use crate::github::diff::fetch_diff;
use crate::github::models::{MergedPullRequestEvent, PullRequestEvent};
use crate::relay::extract::extract_added_lines;
use crate::relay::forward::forward_payload;
use crate::relay::payload::build_payload;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

pub const EVENT_HEADER: &str = "x-github-event";
pub const PROCESSED_MESSAGE: &str = "OK, processed merge event";
pub const IGNORED_MESSAGE: &str = "Not a merged pull_request event";

pub async fn webhook_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, RelayError> {
    let event_type = headers
        .get(EVENT_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if event_type != "pull_request" {
        debug!(event = event_type, "Ignoring non pull_request event");
        return Ok(ignored());
    }

    // 1. Decide whether this is a merge before requiring the full shape
    let event: PullRequestEvent = serde_json::from_slice(&body)?;

    if event.is_closed() && event.pull_request.is_none() {
        return Err(RelayError::Payload(
            "closed pull_request event without pull_request".to_string(),
        ));
    }

    if !event.is_merge() {
        debug!(
            action = event.action.as_deref().unwrap_or(""),
            "Ignoring pull_request event that is not a merge"
        );
        return Ok(ignored());
    }

    let event: MergedPullRequestEvent = serde_json::from_slice(&body)?;
    let pr = &event.pull_request;
    let merged_by = pr
        .merged_by
        .as_ref()
        .ok_or_else(|| RelayError::Payload("merged pull request without merged_by".to_string()))?;

    info!(
        "🔀 PR #{} merged into {}/{} by {}",
        pr.number, event.repository.owner.login, event.repository.name, merged_by.login
    );
    debug!(diff_url = %pr.diff_url, "Fetching diff");

    // 2. Fetch the diff and keep the added lines
    let diff = fetch_diff(
        &state.client,
        &pr.diff_url,
        state.config.github_token.as_deref(),
    )
    .await?;
    let added_lines = extract_added_lines(&diff);

    // 3. Build and (optionally) forward the payload
    let payload = build_payload(
        &event.repository.name,
        pr.number,
        &merged_by.login,
        added_lines,
    );

    match &state.config.forward_url {
        Some(url) => {
            forward_payload(&state.client, url, &payload).await?;
            info!(
                "📬 Forwarded {} added lines to {}",
                payload.added_lines.len(),
                url
            );
        }
        None => info!(
            "Extracted {} added lines, forwarding disabled",
            payload.added_lines.len()
        ),
    }

    Ok(Json(json!({ "message": PROCESSED_MESSAGE })))
}

fn ignored() -> Json<Value> {
    Json(json!({ "message": IGNORED_MESSAGE }))
}
