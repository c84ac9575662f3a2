//! Shapes shared by many webhook payloads.
//!
//! Every struct defaults missing fields, so payloads that omit optional data
//! still decode. Fields the platform sends as `null` are `Option`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

// ============================================================================
// Timestamp
// ============================================================================

/// A platform timestamp.
///
/// Most payloads carry RFC 3339 strings, but the push event encodes some
/// repository dates as integer Unix seconds; both forms are accepted.
/// Serialization always produces RFC 3339 with any sub-second precision
/// preserved.
///
/// The default is the Unix epoch, which is what an absent non-nullable date
/// decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Wrap a UTC date-time.
    pub fn new(value: DateTime<Utc>) -> Self {
        Self(value)
    }

    /// Get the underlying date-time.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unwrap into the underlying date-time.
    pub fn into_inner(self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH)
    }
}

impl Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl TimestampVisitor {
    fn from_unix<E: de::Error>(seconds: i64) -> Result<Timestamp, E> {
        DateTime::<Utc>::from_timestamp(seconds, 0)
            .map(Timestamp)
            .ok_or_else(|| E::custom(format!("unix timestamp out of range: {}", seconds)))
    }
}

impl de::Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339 date-time string or integer unix seconds")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Timestamp, E> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| Timestamp(dt.with_timezone(&Utc)))
            .map_err(|e| E::custom(format!("invalid timestamp '{}': {}", value, e)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Timestamp, E> {
        Self::from_unix(value)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Timestamp, E> {
        let seconds = i64::try_from(value)
            .map_err(|_| E::custom(format!("unix timestamp out of range: {}", value)))?;
        Self::from_unix(seconds)
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// Fields common to (almost) every event payload.
///
/// Each typed payload embeds this by flattening, and the generic fallback
/// payload consists of little more than this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    /// Action that triggered the event, e.g. `opened`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// User that triggered the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<User>,

    /// Repository where the event occurred.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<Repository>,

    /// Organization owning the repository, for organization-owned repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,

    /// App installation that received the event, for app webhooks.
    ///
    /// Installation events carry the full installation in their own
    /// `installation` field instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation: Option<InstallationRef>,

    /// Enterprise account, for enterprise-level webhooks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enterprise: Option<Enterprise>,
}

/// Reference to the app installation that received an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallationRef {
    pub id: u64,
    pub node_id: String,
}

/// Enterprise account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Enterprise {
    pub id: u64,
    pub slug: String,
    pub name: String,
    pub node_id: String,
    pub html_url: String,
    pub description: Option<String>,
}

// ============================================================================
// Accounts
// ============================================================================

/// A user, bot, or organization account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub avatar_url: String,
    pub gravatar_id: Option<String>,
    pub url: String,
    pub html_url: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub site_admin: bool,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// An organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub login: String,
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub repos_url: String,
    pub events_url: String,
    pub hooks_url: String,
    pub issues_url: String,
    pub members_url: String,
    pub public_members_url: String,
    pub avatar_url: String,
    pub description: Option<String>,
}

/// A team within an organization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Team {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub privacy: String,
    pub url: String,
    pub html_url: String,
    pub members_url: String,
    pub repositories_url: String,
    pub permission: String,
}

/// A GitHub App.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct App {
    pub id: u64,
    pub node_id: String,
    pub slug: Option<String>,
    pub owner: Option<User>,
    pub name: String,
    pub description: Option<String>,
    pub external_url: String,
    pub html_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ============================================================================
// Repository
// ============================================================================

/// A repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub owner: User,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub url: String,
    pub git_url: String,
    pub ssh_url: String,
    pub clone_url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub size: u64,
    pub stargazers_count: u64,
    pub watchers_count: u64,
    pub forks_count: u64,
    pub open_issues_count: u64,
    pub default_branch: String,
    pub master_branch: Option<String>,
    pub archived: bool,
    pub disabled: bool,
    pub visibility: String,
    pub topics: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub pushed_at: Option<Timestamp>,
}

// ============================================================================
// Issue Tracking
// ============================================================================

/// A label on an issue or pull request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub name: String,
    pub color: String,
    pub default: bool,
    pub description: Option<String>,
}

/// A milestone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    pub id: u64,
    pub node_id: String,
    pub url: String,
    pub html_url: String,
    pub labels_url: String,
    pub number: u64,
    pub state: String,
    pub title: String,
    pub description: Option<String>,
    pub creator: Option<User>,
    pub open_issues: u64,
    pub closed_issues: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub closed_at: Option<Timestamp>,
    pub due_on: Option<Timestamp>,
}

/// Previous value of an edited field, as reported in `changes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangedFrom {
    pub from: serde_json::Value,
}

// ============================================================================
// Git Data
// ============================================================================

/// A commit as listed in push and workflow payloads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Commit {
    pub id: String,
    pub tree_id: String,
    pub distinct: bool,
    pub message: String,
    pub timestamp: Timestamp,
    pub url: String,
    pub author: CommitAuthor,
    pub committer: CommitAuthor,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
}

/// Author or committer of a commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitAuthor {
    pub name: String,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// A webhook definition, as carried by ping and meta events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hook {
    #[serde(rename = "type")]
    pub hook_type: String,
    pub id: u64,
    pub name: String,
    pub active: bool,
    pub events: Vec<String>,
    pub config: HookConfig,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
}

/// Delivery configuration of a webhook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookConfig {
    pub content_type: String,
    pub insecure_ssl: serde_json::Value,
    pub url: String,
}
