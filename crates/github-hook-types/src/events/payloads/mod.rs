//! Typed payloads for every catalogued event.
//!
//! Each payload embeds the shared [`Envelope`] and adds its event-specific
//! fields. Payloads are grouped by domain; everything is re-exported here.

pub mod apps;
pub mod checks;
pub mod common;
pub mod issues;
pub mod org;
pub mod packages;
pub mod pulls;
pub mod repository;

pub use apps::*;
pub use checks::*;
pub use common::*;
pub use issues::*;
pub use org::*;
pub use packages::*;
pub use pulls::*;
pub use repository::*;

use serde::{Deserialize, Serialize};

/// Payload of an event the catalog does not know.
///
/// The common envelope is decoded; every other top-level field is kept as
/// raw JSON in `extra` so nothing is lost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenericPayload {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
#[path = "payloads_tests.rs"]
mod tests;
