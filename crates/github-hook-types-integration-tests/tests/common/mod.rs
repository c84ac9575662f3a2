//! Common test utilities for github-hook-types integration tests
//!
//! This module provides:
//! - Independent HMAC signing (not the crate's own `sign` helper)
//! - Request builders for signed and unsigned deliveries
//! - A recording handler for asserting what reached the application

use async_trait::async_trait;
use bytes::Bytes;
use github_hook_types::{HandlerError, WebhookEvent, WebhookHandler};
use hmac::{Hmac, Mac};
use http::Request;
use http_body_util::Full;
use sha2::Sha256;
use std::sync::{Arc, Mutex};

pub const SECRET: &str = "integration-test-secret";

// ============================================================================
// Signing
// ============================================================================

/// Compute an `X-Hub-Signature-256` header value the way the platform does.
pub fn platform_signature(secret: &str, body: &[u8]) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(body);
    format!("sha256={}", hex::encode(mac.finalize().into_bytes()))
}

// ============================================================================
// Request Builders
// ============================================================================

/// Build a delivery request as the platform would send it.
pub fn signed_delivery(event_type: &str, body: &str) -> Request<Full<Bytes>> {
    let signature = platform_signature(SECRET, body.as_bytes());
    Request::post("/github/webhook")
        .header("Content-Type", "application/json")
        .header("User-Agent", "GitHub-Hookshot/044aadd")
        .header("X-GitHub-Event", event_type)
        .header("X-GitHub-Delivery", uuid::Uuid::new_v4().to_string())
        .header("X-Hub-Signature-256", signature)
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

/// Build a delivery request with no signature headers.
#[allow(dead_code)]
pub fn unsigned_delivery(event_type: &str, body: &str) -> Request<Full<Bytes>> {
    Request::post("/github/webhook")
        .header("X-GitHub-Event", event_type)
        .header("X-GitHub-Delivery", uuid::Uuid::new_v4().to_string())
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}

// ============================================================================
// Recording Handler
// ============================================================================

/// Handler that records events and optionally fails.
#[derive(Clone, Default)]
pub struct RecordingHandler {
    events: Arc<Mutex<Vec<WebhookEvent>>>,
    fail_with: Option<String>,
}

impl RecordingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn failing(message: &str) -> Self {
        Self {
            events: Arc::default(),
            fail_with: Some(message.to_string()),
        }
    }

    pub fn events(&self) -> Vec<WebhookEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

#[async_trait]
impl WebhookHandler for RecordingHandler {
    async fn handle_event(&self, event: WebhookEvent) -> Result<(), HandlerError> {
        self.events.lock().unwrap().push(event);
        match &self.fail_with {
            Some(message) => Err(message.clone().into()),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// A push of two commits, shaped like a real delivery.
pub fn push_body() -> String {
    serde_json::json!({
        "ref": "refs/heads/main",
        "before": "6113728f27ae82c7b1a177c8d03f9e96e0adf246",
        "after": "0000000000000000000000000000000000000001",
        "created": false,
        "deleted": false,
        "forced": false,
        "base_ref": null,
        "compare": "https://github.com/Codertocat/Hello-World/compare/6113728f27ae...000000000001",
        "commits": [
            {
                "id": "1111111111111111111111111111111111111111",
                "tree_id": "aaaa",
                "distinct": true,
                "message": "Add README",
                "timestamp": "2019-05-15T15:20:30-05:00",
                "url": "https://github.com/Codertocat/Hello-World/commit/1111",
                "author": {"name": "Codertocat", "email": "21031067+Codertocat@users.noreply.github.com", "username": "Codertocat"},
                "committer": {"name": "GitHub", "email": "noreply@github.com", "username": "web-flow"},
                "added": ["README.md"],
                "removed": [],
                "modified": []
            },
            {
                "id": "2222222222222222222222222222222222222222",
                "tree_id": "bbbb",
                "distinct": true,
                "message": "Fix typo",
                "timestamp": "2019-05-15T15:21:30-05:00",
                "url": "https://github.com/Codertocat/Hello-World/commit/2222",
                "author": {"name": "Codertocat", "email": null},
                "committer": {"name": "GitHub", "email": "noreply@github.com"},
                "added": [],
                "removed": [],
                "modified": ["README.md"]
            }
        ],
        "head_commit": null,
        "repository": {
            "id": 186853002,
            "node_id": "MDEwOlJlcG9zaXRvcnkxODY4NTMwMDI=",
            "name": "Hello-World",
            "full_name": "Codertocat/Hello-World",
            "private": false,
            "owner": {"name": "Codertocat", "login": "Codertocat", "id": 21031067, "type": "User", "site_admin": false},
            "created_at": 1557933565,
            "updated_at": "2019-05-15T15:20:41Z",
            "pushed_at": 1557933657,
            "default_branch": "main",
            "master_branch": "main",
            "topics": []
        },
        "pusher": {"name": "Codertocat", "email": "21031067+Codertocat@users.noreply.github.com"},
        "sender": {"login": "Codertocat", "id": 21031067, "type": "User", "site_admin": false}
    })
    .to_string()
}
