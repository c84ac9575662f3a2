//! Issue tracking events: issues, comments, labels, milestones, projects,
//! and discussions.

use serde::{Deserialize, Serialize};

use super::common::{App, ChangedFrom, Envelope, Label, Milestone, Timestamp, User};
use super::pulls::BodyChanges;

// ============================================================================
// Issues
// ============================================================================

/// An issue. Pull requests are also issues; for those `pull_request` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub repository_url: String,
    pub labels_url: String,
    pub comments_url: String,
    pub events_url: String,
    pub html_url: String,
    pub number: u64,
    pub state: String,
    pub title: String,
    pub body: Option<String>,
    pub user: User,
    pub labels: Vec<Label>,
    pub assignee: Option<User>,
    pub assignees: Vec<User>,
    pub milestone: Option<Milestone>,
    pub locked: bool,
    pub active_lock_reason: Option<String>,
    pub comments: u64,
    pub pull_request: Option<IssuePullRequestLinks>,
    pub closed_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author_association: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuePullRequestLinks {
    pub url: String,
    pub html_url: String,
    pub diff_url: String,
    pub patch_url: String,
}

/// Payload of the `issues` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuesPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub issue: Issue,
    pub changes: Option<IssueChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueChanges {
    pub title: Option<ChangedFrom>,
    pub body: Option<ChangedFrom>,
    pub labels: Option<ChangedFrom>,
    pub assignee: Option<ChangedFrom>,
}

/// Payload of the `issue_comment` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueCommentPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub issue: Issue,
    pub comment: IssueComment,
    pub changes: Option<BodyChanges>,
}

/// A comment on an issue or pull request conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueComment {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub body: String,
    pub user: User,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub issue_url: String,
    pub author_association: String,
    pub performed_via_github_app: Option<App>,
}

// ============================================================================
// Labels and Milestones
// ============================================================================

/// Payload of the `label` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub label: Label,
    pub changes: Option<LabelChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelChanges {
    pub name: Option<ChangedFrom>,
    pub color: Option<ChangedFrom>,
    pub description: Option<ChangedFrom>,
}

/// Payload of the `milestone` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestonePayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub milestone: Milestone,
    pub changes: Option<MilestoneChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneChanges {
    pub title: Option<ChangedFrom>,
    pub description: Option<ChangedFrom>,
    pub due_on: Option<ChangedFrom>,
}

// ============================================================================
// Classic Projects
// ============================================================================

/// Payload of the `project` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub project: Project,
    pub changes: Option<ProjectChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub body: Option<String>,
    pub number: u64,
    pub state: String,
    pub html_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub creator: User,
    pub columns_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectChanges {
    pub name: Option<ChangedFrom>,
    pub body: Option<ChangedFrom>,
}

/// Payload of the `project_card` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCardPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub project_card: ProjectCard,
    pub changes: Option<ProjectCardChanges>,
}

/// A card on a project board. Cards either hold a note or link to content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCard {
    pub id: u64,
    pub node_id: String,
    pub note: Option<String>,
    pub creator: User,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub project_url: String,
    pub column_url: String,
    pub content_url: Option<String>,
    pub project_id: u64,
    pub column_id: u64,
    pub archived: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectCardChanges {
    pub note: Option<ChangedFrom>,
}

/// Payload of the `project_column` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectColumnPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub project_column: ProjectColumn,
    pub changes: Option<ProjectColumnChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectColumn {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub project_url: String,
    pub cards_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectColumnChanges {
    pub name: Option<ChangedFrom>,
}

// ============================================================================
// Discussions
// ============================================================================

/// A repository discussion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discussion {
    pub id: u64,
    pub node_id: String,
    pub number: u64,
    pub title: String,
    pub user: User,
    pub state: String,
    pub locked: bool,
    pub comments: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author_association: String,
    pub active_lock_reason: Option<String>,
    pub body: Option<String>,
    pub timeline_url: String,
    pub repository_url: String,
    pub category: DiscussionCategory,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscussionCategory {
    pub id: u64,
    pub node_id: String,
    pub repository_id: u64,
    pub emoji: String,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub is_answerable: bool,
}

/// Payload of the `discussion` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscussionPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub discussion: Discussion,
}

/// Payload of the `discussion_comment` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscussionCommentPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub discussion: Discussion,
    pub comment: DiscussionComment,
}

/// A comment in a discussion. Replies carry the `parent_id` of their thread.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscussionComment {
    pub id: u64,
    pub node_id: String,
    pub discussion_id: u64,
    pub user: User,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author_association: String,
    pub body: String,
    pub html_url: String,
    pub parent_id: Option<u64>,
    pub child_comment_count: u64,
    pub repository_url: String,
}
