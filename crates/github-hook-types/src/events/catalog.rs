//! The schema catalog: every event type the platform is known to send,
//! mapped to the payload shape it decodes into.
//!
//! The catalog is a single table expanded at compile time into
//! [`EventKind`], [`WebhookPayload`], and the name lookup. Adding an event
//! means adding one row; nothing is registered at runtime.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::payloads::*;

macro_rules! event_catalog {
    ($( $(#[$meta:meta])* $variant:ident => $name:literal, $payload:ty; )+) => {
        /// A catalogued event type.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum EventKind {
            $( $(#[$meta])* $variant, )+
        }

        impl EventKind {
            /// Every catalogued event type, in catalog order.
            pub const ALL: &'static [EventKind] = &[ $( EventKind::$variant, )+ ];

            /// Wire name as sent in the event-type header.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Look up an event type by wire name.
            ///
            /// Names are matched exactly; the platform always sends lowercase.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        /// Decoded payload of a delivery.
        ///
        /// One variant per [`EventKind`] plus [`WebhookPayload::Generic`] for
        /// events outside the catalog. Serializes as the bare payload object.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        #[serde(untagged)]
        pub enum WebhookPayload {
            $( $variant(Box<$payload>), )+
            /// Fallback for event types the catalog does not know.
            Generic(Box<GenericPayload>),
        }

        impl WebhookPayload {
            /// Decode `body` as the payload for `kind`, or as the generic
            /// payload when `kind` is `None`.
            pub fn decode(kind: Option<EventKind>, body: &[u8]) -> Result<Self, serde_json::Error> {
                match kind {
                    $( Some(EventKind::$variant) => {
                        serde_json::from_slice::<$payload>(body).map(|p| Self::$variant(Box::new(p)))
                    } )+
                    None => serde_json::from_slice::<GenericPayload>(body)
                        .map(|p| Self::Generic(Box::new(p))),
                }
            }

            /// Catalogued kind of this payload; `None` for the generic fallback.
            pub fn kind(&self) -> Option<EventKind> {
                match self {
                    $( Self::$variant(_) => Some(EventKind::$variant), )+
                    Self::Generic(_) => None,
                }
            }

            /// Fields shared by every payload.
            pub fn envelope(&self) -> &Envelope {
                match self {
                    $( Self::$variant(p) => &p.envelope, )+
                    Self::Generic(p) => &p.envelope,
                }
            }
        }
    };
}

event_catalog! {
    CheckRun => "check_run", CheckRunPayload;
    CheckSuite => "check_suite", CheckSuitePayload;
    CommitComment => "commit_comment", CommitCommentPayload;
    ContentReference => "content_reference", ContentReferencePayload;
    Create => "create", CreatePayload;
    Delete => "delete", DeletePayload;
    DeployKey => "deploy_key", DeployKeyPayload;
    Deployment => "deployment", DeploymentPayload;
    DeploymentStatus => "deployment_status", DeploymentStatusPayload;
    Discussion => "discussion", DiscussionPayload;
    DiscussionComment => "discussion_comment", DiscussionCommentPayload;
    Fork => "fork", ForkPayload;
    GitHubAppAuthorization => "github_app_authorization", GitHubAppAuthorizationPayload;
    Gollum => "gollum", GollumPayload;
    Installation => "installation", InstallationPayload;
    InstallationRepositories => "installation_repositories", InstallationRepositoriesPayload;
    IssueComment => "issue_comment", IssueCommentPayload;
    Issues => "issues", IssuesPayload;
    Label => "label", LabelPayload;
    MarketplacePurchase => "marketplace_purchase", MarketplacePurchasePayload;
    Member => "member", MemberPayload;
    Membership => "membership", MembershipPayload;
    Meta => "meta", MetaPayload;
    Milestone => "milestone", MilestonePayload;
    Organization => "organization", OrganizationPayload;
    OrgBlock => "org_block", OrgBlockPayload;
    Package => "package", PackagePayload;
    PageBuild => "page_build", PageBuildPayload;
    Ping => "ping", PingPayload;
    /// Classic project boards.
    Project => "project", ProjectPayload;
    ProjectCard => "project_card", ProjectCardPayload;
    ProjectColumn => "project_column", ProjectColumnPayload;
    Public => "public", PublicPayload;
    PullRequest => "pull_request", PullRequestPayload;
    PullRequestReview => "pull_request_review", PullRequestReviewPayload;
    PullRequestReviewComment => "pull_request_review_comment", PullRequestReviewCommentPayload;
    Push => "push", PushPayload;
    Release => "release", ReleasePayload;
    /// Superseded by `package` on current platform versions.
    RegistryPackage => "registry_package", RegistryPackagePayload;
    RepositoryDispatch => "repository_dispatch", RepositoryDispatchPayload;
    Repository => "repository", RepositoryPayload;
    RepositoryImport => "repository_import", RepositoryImportPayload;
    RepositoryVulnerabilityAlert => "repository_vulnerability_alert", RepositoryVulnerabilityAlertPayload;
    SecurityAdvisory => "security_advisory", SecurityAdvisoryPayload;
    Sponsorship => "sponsorship", SponsorshipPayload;
    Star => "star", StarPayload;
    Status => "status", StatusPayload;
    Team => "team", TeamPayload;
    TeamAdd => "team_add", TeamAddPayload;
    Watch => "watch", WatchPayload;
    WorkflowDispatch => "workflow_dispatch", WorkflowDispatchPayload;
    WorkflowJob => "workflow_job", WorkflowJobPayload;
    WorkflowRun => "workflow_run", WorkflowRunPayload;
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a name that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event type: {0}")]
pub struct UnknownEventKind(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
