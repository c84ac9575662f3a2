//! Repository-level events: pushes, refs, stars, statuses, and hook metadata.

use serde::{Deserialize, Serialize};

use super::common::{ChangedFrom, Commit, Envelope, Hook, Repository, Timestamp, User};

// ============================================================================
// Hook Lifecycle
// ============================================================================

/// Payload of the `ping` event, sent when a webhook is created.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PingPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub zen: String,
    pub hook_id: u64,
    pub hook: Hook,
}

/// Payload of the `meta` event, sent when the webhook itself is deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub hook_id: u64,
    pub hook: Hook,
}

// ============================================================================
// Git Refs
// ============================================================================

/// Payload of the `push` event.
///
/// `commits` lists at most twenty commits, oldest first, in the order the
/// platform sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PushPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub before: String,
    pub after: String,
    pub created: bool,
    pub deleted: bool,
    pub forced: bool,
    pub base_ref: Option<String>,
    pub compare: String,
    pub commits: Vec<Commit>,
    pub head_commit: Option<Commit>,
    pub pusher: Pusher,
}

/// Git identity that performed a push.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pusher {
    pub name: String,
    pub email: Option<String>,
}

/// Payload of the `create` event (branch or tag created).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatePayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub ref_type: String,
    pub master_branch: String,
    pub description: Option<String>,
    pub pusher_type: String,
}

/// Payload of the `delete` event (branch or tag deleted).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeletePayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub ref_type: String,
    pub pusher_type: String,
}

/// Payload of the `commit_comment` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitCommentPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub comment: CommitComment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitComment {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub user: User,
    pub position: Option<u64>,
    pub line: Option<u64>,
    pub path: Option<String>,
    pub commit_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub body: String,
}

/// Payload of the `status` event (commit status changed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub id: u64,
    pub sha: String,
    pub name: String,
    pub target_url: Option<String>,
    pub context: String,
    pub description: Option<String>,
    pub state: String,
    pub commit_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub branches: Vec<StatusBranch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBranch {
    pub name: String,
    pub commit: BranchCommit,
    pub protected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BranchCommit {
    pub sha: String,
    pub url: String,
}

// ============================================================================
// Repository Lifecycle
// ============================================================================

/// Payload of the `repository` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub changes: Option<RepositoryChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryChanges {
    pub default_branch: Option<ChangedFrom>,
    pub description: Option<ChangedFrom>,
    pub homepage: Option<ChangedFrom>,
}

/// Payload of the `fork` event. `forkee` is the newly created fork.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForkPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub forkee: Repository,
}

/// Payload of the `public` event (repository made public).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
}

/// Payload of the `repository_dispatch` event.
///
/// `client_payload` is whatever the dispatching client sent and is kept as
/// raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryDispatchPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub branch: String,
    pub client_payload: serde_json::Value,
}

/// Payload of the `repository_import` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryImportPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub status: String,
}

/// Payload of the `deploy_key` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployKeyPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub key: DeployKey,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployKey {
    pub id: u64,
    pub key: String,
    pub url: String,
    pub title: String,
    pub created_at: Timestamp,
    pub verified: bool,
    pub read_only: bool,
}

// ============================================================================
// Stars and Watchers
// ============================================================================

/// Payload of the `star` event. `starred_at` is null when a star is removed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub starred_at: Option<Timestamp>,
}

/// Payload of the `watch` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
}

// ============================================================================
// Wiki and Pages
// ============================================================================

/// Payload of the `gollum` event (wiki pages changed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GollumPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub pages: Vec<WikiPage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WikiPage {
    pub page_name: String,
    pub title: String,
    pub summary: Option<String>,
    pub action: String,
    pub sha: String,
    pub html_url: String,
}

/// Payload of the `page_build` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBuildPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub id: u64,
    pub build: PageBuild,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBuild {
    pub url: String,
    pub status: String,
    pub error: PageBuildError,
    pub pusher: User,
    pub commit: String,
    pub duration: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageBuildError {
    pub message: Option<String>,
}

// ============================================================================
// Security
// ============================================================================

/// Payload of the `repository_vulnerability_alert` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryVulnerabilityAlertPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub alert: VulnerabilityAlert,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilityAlert {
    pub id: u64,
    pub affected_range: String,
    pub affected_package_name: String,
    pub external_reference: String,
    pub external_identifier: String,
    pub fixed_in: String,
    pub dismissed_at: Option<Timestamp>,
    pub dismissed_by: Option<User>,
    pub dismissed_reason: Option<String>,
    pub ghsa_id: String,
    pub cve_id: Option<String>,
}

/// Payload of the `security_advisory` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityAdvisoryPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub security_advisory: SecurityAdvisory,
}

/// A published security advisory.
///
/// `references` is kept as raw JSON because its shape has changed over time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityAdvisory {
    pub ghsa_id: String,
    pub cve_id: Option<String>,
    pub summary: String,
    pub description: String,
    pub severity: String,
    pub identifiers: Vec<AdvisoryIdentifier>,
    pub references: serde_json::Value,
    pub published_at: Timestamp,
    pub updated_at: Timestamp,
    pub withdrawn_at: Option<Timestamp>,
    pub vulnerabilities: Vec<AdvisoryVulnerability>,
    pub cvss: Cvss,
    pub cwes: Vec<Cwe>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryIdentifier {
    #[serde(rename = "type")]
    pub identifier_type: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryVulnerability {
    pub package: AdvisoryPackage,
    pub severity: String,
    pub vulnerable_version_range: String,
    pub first_patched_version: Option<PatchedVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryPackage {
    pub ecosystem: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchedVersion {
    pub identifier: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cvss {
    pub vector_string: Option<String>,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cwe {
    pub cwe_id: String,
    pub name: String,
}
