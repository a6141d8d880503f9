use serde::Serialize;

/// What gets sent downstream for every merged pull request.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MergePayload {
    pub repository: String,
    pub pull_request_number: u64,
    pub merged_by: String,
    pub added_lines: Vec<String>,
}

pub fn build_payload(
    repository: &str,
    pull_request_number: u64,
    merged_by: &str,
    added_lines: Vec<String>,
) -> MergePayload {
    MergePayload {
        repository: repository.to_string(),
        pull_request_number,
        merged_by: merged_by.to_string(),
        added_lines,
    }
}
