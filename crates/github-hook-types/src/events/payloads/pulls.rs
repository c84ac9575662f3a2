//! Pull request events and the pull request model shared with check payloads.

use serde::{Deserialize, Serialize};

use super::common::{ChangedFrom, Envelope, Label, Milestone, Repository, Team, Timestamp, User};

// ============================================================================
// Pull Request Model
// ============================================================================

/// A pull request.
///
/// Check and workflow payloads embed abbreviated pull requests that carry
/// only `id`, `number`, `url`, `head`, and `base`; the remaining fields then
/// take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequest {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub diff_url: String,
    pub patch_url: String,
    pub issue_url: String,
    pub number: u64,
    pub state: String,
    pub locked: bool,
    pub title: String,
    pub body: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub closed_at: Option<Timestamp>,
    pub merged_at: Option<Timestamp>,
    pub merge_commit_sha: Option<String>,
    pub assignee: Option<User>,
    pub assignees: Vec<User>,
    pub requested_reviewers: Vec<User>,
    pub requested_teams: Vec<Team>,
    pub labels: Vec<Label>,
    pub milestone: Option<Milestone>,
    pub draft: bool,
    pub user: User,
    pub base: PullRequestBranch,
    pub head: PullRequestBranch,
    pub author_association: String,
    pub merged: bool,
    pub mergeable: Option<bool>,
    pub rebaseable: Option<bool>,
    pub mergeable_state: String,
    pub merged_by: Option<User>,
    pub comments: u64,
    pub review_comments: u64,
    pub maintainer_can_modify: bool,
    pub commits: u64,
    pub additions: u64,
    pub deletions: u64,
    pub changed_files: u64,
}

/// One side (head or base) of a pull request.
///
/// `repo` is null when the head repository of a fork has been deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestBranch {
    pub label: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub sha: String,
    pub user: User,
    pub repo: Option<Repository>,
}

// ============================================================================
// Pull Request Events
// ============================================================================

/// Payload of the `pull_request` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub number: u64,
    pub pull_request: PullRequest,
    pub changes: Option<PullRequestChanges>,
}

/// Fields changed by an `edited` pull request action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestChanges {
    pub title: Option<ChangedFrom>,
    pub body: Option<ChangedFrom>,
    pub base: Option<BaseChange>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseChange {
    #[serde(rename = "ref")]
    pub git_ref: ChangedFrom,
    pub sha: ChangedFrom,
}

/// Payload of the `pull_request_review` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestReviewPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub review: Review,
    pub pull_request: PullRequest,
    pub changes: Option<BodyChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    pub id: u64,
    pub node_id: String,
    pub user: User,
    pub body: Option<String>,
    pub commit_id: String,
    pub html_url: String,
    pub pull_request_url: String,
    pub state: String,
    pub author_association: String,
    pub submitted_at: Option<Timestamp>,
}

/// Payload of the `pull_request_review_comment` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequestReviewCommentPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub comment: ReviewComment,
    pub pull_request: PullRequest,
    pub changes: Option<BodyChanges>,
}

/// A comment on a pull request diff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewComment {
    pub id: u64,
    pub node_id: String,
    pub path: String,
    pub position: Option<u64>,
    pub original_position: Option<u64>,
    pub commit_id: String,
    pub original_commit_id: String,
    pub user: User,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub html_url: String,
    pub pull_request_url: String,
    pub author_association: String,
    pub diff_hunk: String,
    pub pull_request_review_id: Option<u64>,
    pub in_reply_to_id: Option<u64>,
}

/// Changes reported when only a body can be edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyChanges {
    pub body: Option<ChangedFrom>,
}
