use serde::Deserialize;

/// Just enough of a `pull_request` delivery to tell whether it is a merge.
/// Every field is optional so that unrelated actions with sparse bodies are
/// still recognised as "not a merge".
#[derive(Deserialize, Debug)]
pub struct PullRequestEvent {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub pull_request: Option<MergeState>,
}

#[derive(Deserialize, Debug)]
pub struct MergeState {
    #[serde(default)]
    pub merged: Option<bool>,
}

impl PullRequestEvent {
    pub fn is_closed(&self) -> bool {
        self.action.as_deref() == Some("closed")
    }

    /// A PR that was closed by merging it. Closing without merging, or a
    /// merged flag on any other action, does not count.
    pub fn is_merge(&self) -> bool {
        self.is_closed()
            && self
                .pull_request
                .as_ref()
                .and_then(|pr| pr.merged)
                .unwrap_or(false)
    }
}

/// Body of a merged `pull_request` delivery, trimmed to the fields we read.
#[derive(Deserialize, Debug)]
pub struct MergedPullRequestEvent {
    pub pull_request: PullRequest,
    pub repository: Repository,
}

#[derive(Deserialize, Debug)]
pub struct PullRequest {
    pub number: u64,
    // null until the PR is merged
    pub merged_by: Option<User>,
    pub diff_url: String,
}

#[derive(Deserialize, Debug)]
pub struct Repository {
    pub name: String,
    pub owner: User,
}

#[derive(Deserialize, Debug)]
pub struct User {
    pub login: String,
}
