//! Organization, membership, and team events.

use serde::{Deserialize, Serialize};

use super::common::{ChangedFrom, Envelope, Team, User};

/// Payload of the `organization` event.
///
/// Which of `invitation` and `membership` is present depends on the action.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub invitation: Option<Invitation>,
    pub membership: Option<OrgMembership>,
    pub changes: Option<OrganizationChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invitation {
    pub id: u64,
    pub node_id: String,
    pub login: Option<String>,
    pub email: Option<String>,
    pub role: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgMembership {
    pub url: String,
    pub state: String,
    pub role: String,
    pub organization_url: String,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationChanges {
    pub default_repository_permission: Option<ChangedFrom>,
    pub members_can_create_repositories: Option<ChangedFrom>,
}

/// Payload of the `org_block` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrgBlockPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub blocked_user: User,
}

/// Payload of the `member` event (repository collaborator changed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub member: User,
    pub changes: Option<MemberChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberChanges {
    pub permission: Option<ChangedFrom>,
    pub role_name: Option<ChangedFrom>,
}

/// Payload of the `membership` event (team membership changed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MembershipPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub scope: String,
    pub member: User,
    pub team: Team,
}

/// Payload of the `team` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub team: Team,
    pub changes: Option<TeamChanges>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamChanges {
    pub description: Option<ChangedFrom>,
    pub name: Option<ChangedFrom>,
    pub privacy: Option<ChangedFrom>,
    pub repository: Option<TeamRepositoryChange>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRepositoryChange {
    pub permissions: TeamPermissionChange,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamPermissionChange {
    pub from: TeamPermissions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamPermissions {
    pub admin: bool,
    pub pull: bool,
    pub push: bool,
}

/// Payload of the `team_add` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamAddPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub team: Team,
}
