//! App lifecycle and account events: installations, authorizations,
//! marketplace purchases, sponsorships, and content references.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::common::{Envelope, Repository, Timestamp, User};

// ============================================================================
// Installations
// ============================================================================

/// A full app installation record.
///
/// Installation events carry this in place of the short reference found in
/// the [`Envelope`](super::common::Envelope) of other events, so
/// `envelope.installation` is `None` for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Installation {
    pub id: u64,
    pub node_id: String,
    pub app_id: u64,
    pub app_slug: String,
    pub target_id: u64,
    pub target_type: String,
    pub repository_selection: String,
    pub account: User,
    pub access_tokens_url: String,
    pub repositories_url: String,
    pub html_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub suspended_at: Option<Timestamp>,
    pub events: Vec<String>,
    /// Permission name to access level, e.g. `"issues": "write"`.
    pub permissions: BTreeMap<String, String>,
}

/// Payload of the `installation` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallationPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub installation: Installation,
    pub repositories: Vec<Repository>,
}

/// Payload of the `installation_repositories` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallationRepositoriesPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub installation: Installation,
    pub repositories_added: Vec<Repository>,
    pub repositories_removed: Vec<Repository>,
    pub repository_selection: String,
}

/// Payload of the `github_app_authorization` event. Only the envelope is sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubAppAuthorizationPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
}

/// Payload of the `content_reference` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentReferencePayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub content_reference: ContentReference,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentReference {
    pub id: u64,
    pub node_id: String,
    pub reference: String,
}

// ============================================================================
// Marketplace
// ============================================================================

/// Payload of the `marketplace_purchase` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplacePurchasePayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub effective_date: Option<Timestamp>,
    pub marketplace_purchase: MarketplacePurchase,
    pub previous_marketplace_purchase: Option<MarketplacePurchase>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplacePurchase {
    pub account: User,
    pub billing_cycle: String,
    pub next_billing_date: Option<Timestamp>,
    pub unit_count: u64,
    pub plan: MarketplacePlan,
    pub on_free_trial: bool,
    pub free_trial_ends_on: Option<Timestamp>,
    pub pending_change: Option<PendingPlanChange>,
}

/// A marketplace listing plan. Prices are in US cents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketplacePlan {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub monthly_price_in_cents: u64,
    pub yearly_price_in_cents: u64,
    pub price_model: String,
    pub has_free_trial: bool,
    pub unit_name: Option<String>,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendingPlanChange {
    pub plan: MarketplacePlan,
    pub unit_count: u64,
    pub effective_date: Option<Timestamp>,
}

// ============================================================================
// Sponsorships
// ============================================================================

/// Payload of the `sponsorship` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorshipPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub sponsorship: Sponsorship,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sponsorship {
    pub node_id: String,
    pub created_at: Timestamp,
    pub sponsor: User,
    pub sponsorable: User,
    pub privacy_level: String,
    pub tier: SponsorshipTier,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorshipTier {
    pub node_id: String,
    pub created_at: Timestamp,
    pub description: String,
    pub monthly_price_in_cents: u64,
    pub monthly_price_in_dollars: u64,
    pub name: String,
    pub is_one_time: bool,
    pub is_custom_amount: bool,
}
