//! Continuous integration and delivery events: checks, deployments, and
//! Actions workflows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::common::{App, Commit, Envelope, Repository, Timestamp, User};
use super::pulls::PullRequest;

// ============================================================================
// Checks
// ============================================================================

/// Payload of the `check_run` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckRunPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub check_run: CheckRun,
}

/// A single check run. `conclusion` is null until the run completes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckRun {
    pub id: u64,
    pub node_id: String,
    pub head_sha: String,
    pub external_id: Option<String>,
    pub url: String,
    pub html_url: String,
    pub details_url: Option<String>,
    pub status: String,
    pub conclusion: Option<String>,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub output: CheckRunOutput,
    pub name: String,
    pub check_suite: CheckSuite,
    pub app: App,
    pub pull_requests: Vec<PullRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckRunOutput {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub text: Option<String>,
    pub annotations_count: u64,
    pub annotations_url: String,
}

/// Payload of the `check_suite` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSuitePayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub check_suite: CheckSuite,
}

/// A check suite groups the check runs of one app for one commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckSuite {
    pub id: u64,
    pub node_id: String,
    pub head_branch: Option<String>,
    pub head_sha: String,
    pub status: Option<String>,
    pub conclusion: Option<String>,
    pub url: String,
    pub before: Option<String>,
    pub after: Option<String>,
    pub pull_requests: Vec<PullRequest>,
    pub app: App,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ============================================================================
// Deployments
// ============================================================================

/// A deployment request.
///
/// `payload` is free-form data supplied by whoever created the deployment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deployment {
    pub url: String,
    pub id: u64,
    pub node_id: String,
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub task: String,
    pub payload: serde_json::Value,
    pub environment: String,
    pub description: Option<String>,
    pub creator: User,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub statuses_url: String,
    pub repository_url: String,
    pub transient_environment: bool,
    pub production_environment: bool,
}

/// Payload of the `deployment` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub deployment: Deployment,
}

/// Payload of the `deployment_status` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentStatusPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub deployment_status: DeploymentStatus,
    pub deployment: Deployment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentStatus {
    pub url: String,
    pub id: u64,
    pub node_id: String,
    pub state: String,
    pub creator: User,
    pub description: Option<String>,
    pub environment: String,
    pub target_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deployment_url: String,
    pub repository_url: String,
    pub log_url: Option<String>,
    pub environment_url: Option<String>,
}

// ============================================================================
// Actions Workflows
// ============================================================================

/// Payload of the `workflow_dispatch` event.
///
/// Inputs are keyed by name; ordering is by key so that serialized output is
/// stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowDispatchPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub inputs: Option<BTreeMap<String, serde_json::Value>>,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub workflow: String,
}

/// Payload of the `workflow_job` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowJobPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub workflow_job: WorkflowJob,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowJob {
    pub id: u64,
    pub run_id: u64,
    pub run_url: String,
    pub node_id: String,
    pub head_sha: String,
    pub url: String,
    pub status: String,
    pub conclusion: Option<String>,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub name: String,
    pub steps: Vec<WorkflowStep>,
    pub check_run_url: String,
    pub labels: Vec<String>,
    pub runner_id: Option<u64>,
    pub runner_name: Option<String>,
    pub runner_group_id: Option<u64>,
    pub runner_group_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowStep {
    pub name: String,
    pub status: String,
    pub conclusion: Option<String>,
    pub number: u64,
    pub started_at: Option<Timestamp>,
    pub completed_at: Option<Timestamp>,
}

/// Payload of the `workflow_run` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowRunPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub workflow_run: WorkflowRun,
}

/// A workflow run.
///
/// Unlike most payloads, the run carries its own `repository` and
/// `head_repository`; these are distinct from the envelope repository when
/// the run was triggered from a fork.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowRun {
    pub id: u64,
    pub node_id: String,
    pub name: Option<String>,
    pub head_branch: Option<String>,
    pub head_sha: String,
    pub path: String,
    pub run_number: u64,
    pub run_attempt: u64,
    pub event: String,
    pub status: Option<String>,
    pub conclusion: Option<String>,
    pub workflow_id: u64,
    pub check_suite_id: u64,
    pub check_suite_node_id: String,
    pub url: String,
    pub html_url: String,
    pub pull_requests: Vec<PullRequest>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub run_started_at: Option<Timestamp>,
    pub jobs_url: String,
    pub logs_url: String,
    pub check_suite_url: String,
    pub artifacts_url: String,
    pub cancel_url: String,
    pub rerun_url: String,
    pub previous_attempt_url: Option<String>,
    pub workflow_url: String,
    pub head_commit: Option<Commit>,
    pub repository: Repository,
    pub head_repository: Option<Repository>,
}
