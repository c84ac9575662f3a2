//! Package registry and release events.

use serde::{Deserialize, Serialize};

use super::common::{Envelope, Timestamp, User};

// ============================================================================
// Packages
// ============================================================================

/// Payload of the `package` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagePayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub package: Package,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub id: u64,
    pub name: String,
    pub package_type: String,
    pub html_url: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub owner: User,
    pub package_version: Option<PackageVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageVersion {
    pub id: u64,
    pub version: String,
    pub summary: String,
    pub body: serde_json::Value,
    pub body_html: String,
    pub html_url: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub package_files: Vec<PackageFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageFile {
    pub download_url: String,
    pub id: u64,
    pub name: String,
    pub sha256: Option<String>,
    pub sha1: Option<String>,
    pub md5: Option<String>,
    pub size: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload of the `registry_package` event.
///
/// The registry reports files and release metadata in per-ecosystem shapes,
/// so both are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryPackagePayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub registry_package: RegistryPackage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryPackage {
    pub id: u64,
    pub name: String,
    pub package_type: String,
    pub html_url: String,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
    pub owner: User,
    pub package_version: Option<RegistryPackageVersion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryPackageVersion {
    pub id: u64,
    pub version: String,
    pub summary: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub html_url: String,
    pub package_files: Vec<serde_json::Value>,
    #[serde(rename = "metadata")]
    pub release_metadata: serde_json::Value,
}

// ============================================================================
// Releases
// ============================================================================

/// Payload of the `release` event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleasePayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub release: Release,
}

/// A release. Drafts have no `published_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    pub id: u64,
    pub node_id: String,
    pub tag_name: String,
    pub target_commitish: String,
    pub name: Option<String>,
    pub draft: bool,
    pub author: User,
    pub prerelease: bool,
    pub created_at: Timestamp,
    pub published_at: Option<Timestamp>,
    pub assets_url: String,
    pub tarball_url: Option<String>,
    pub zipball_url: Option<String>,
    pub html_url: String,
    pub body: Option<String>,
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseAsset {
    pub url: String,
    pub browser_download_url: String,
    pub id: u64,
    pub node_id: String,
    pub name: String,
    pub label: Option<String>,
    pub state: String,
    pub content_type: String,
    pub size: u64,
    pub download_count: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub uploader: Option<User>,
}
