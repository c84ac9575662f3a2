//! Per-request delivery handling.
//!
//! [`DeliveryHandler`] takes one HTTP request through a linear state machine
//! and produces exactly one outcome:
//!
//! 1. **Read** the whole body once (optionally bounded in size)
//! 2. **Authenticate** the body bytes against the signature headers
//! 3. **Extract** the event-type and delivery-ID headers, both required here
//! 4. **Dispatch** the body into a typed [`WebhookEvent`]
//! 5. **Invoke** the application [`WebhookHandler`] with the event
//!
//! Authentication happens before any parsing, so unauthenticated input never
//! reaches the JSON decoder. Nothing is retried and no background work is
//! spawned; the handler runs to completion before the response is returned.
//!
//! # Examples
//!
//! ```rust
//! use bytes::Bytes;
//! use github_hook_types::webhook::receiver::{handler_fn, DeliveryHandler};
//! use http_body_util::Full;
//!
//! # async fn example() {
//! let handler = DeliveryHandler::new(
//!     "It's a Secret to Everybody",
//!     handler_fn(|event| {
//!         println!("{} {}", event.event_type, event.delivery_id);
//!         Ok(())
//!     }),
//! );
//!
//! let request = http::Request::post("/webhook")
//!     .header("X-GitHub-Event", "ping")
//!     .header("X-GitHub-Delivery", "72d3162e-cc78-11e3-81ab-4c9367dc0958")
//!     .body(Full::new(Bytes::from_static(b"{\"zen\":\"x\",\"hook_id\":1}")))
//!     .unwrap();
//!
//! // Unsigned, so rejected before the handler runs.
//! let response = handler.handle(request).await;
//! assert_eq!(response.status_code(), 401);
//! # }
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Request, Response, StatusCode};
use http_body::Body;
use http_body_util::{BodyExt, Limited};
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};

use crate::config::WebhookConfig;
use crate::error::{DeliveryError, ErrorCategory, HandlerError};
use crate::events::{DeliveryId, WebhookEvent};
use crate::webhook::dispatch::EventDispatcher;
use crate::webhook::headers::{self, header_value, DELIVERY_ID_HEADER, EVENT_TYPE_HEADER};
use crate::webhook::signature::{SignatureVerifier, WebhookSecret};

// ============================================================================
// Webhook Handler
// ============================================================================

/// Application logic invoked with each authenticated, decoded event.
///
/// # Examples
///
/// ```rust
/// use async_trait::async_trait;
/// use github_hook_types::error::HandlerError;
/// use github_hook_types::events::{WebhookEvent, WebhookPayload};
/// use github_hook_types::webhook::receiver::WebhookHandler;
///
/// struct PushLogger;
///
/// #[async_trait]
/// impl WebhookHandler for PushLogger {
///     async fn handle_event(&self, event: WebhookEvent) -> Result<(), HandlerError> {
///         if let WebhookPayload::Push(push) = &event.payload {
///             println!("{} commits to {}", push.commits.len(), push.git_ref);
///         }
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait WebhookHandler: Send + Sync {
    /// Handle one event.
    ///
    /// An error is reported to the platform as a server failure (500). It is
    /// not retried here; the platform's redelivery is the retry mechanism.
    async fn handle_event(&self, event: WebhookEvent) -> Result<(), HandlerError>;
}

#[async_trait]
impl<H> WebhookHandler for Arc<H>
where
    H: WebhookHandler + ?Sized,
{
    async fn handle_event(&self, event: WebhookEvent) -> Result<(), HandlerError> {
        (**self).handle_event(event).await
    }
}

/// Handler backed by a synchronous closure. Built by [`handler_fn`].
#[derive(Clone)]
pub struct HandlerFn<F> {
    f: F,
}

/// Wrap a synchronous closure as a [`WebhookHandler`].
pub fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: Fn(WebhookEvent) -> Result<(), HandlerError> + Send + Sync,
{
    HandlerFn { f }
}

#[async_trait]
impl<F> WebhookHandler for HandlerFn<F>
where
    F: Fn(WebhookEvent) -> Result<(), HandlerError> + Send + Sync,
{
    async fn handle_event(&self, event: WebhookEvent) -> Result<(), HandlerError> {
        (self.f)(event)
    }
}

// ============================================================================
// Webhook Response
// ============================================================================

/// Transport-level outcome of one delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookResponse {
    /// 200 OK - Event decoded and handled
    Ok { message: String, delivery_id: String },

    /// 401 Unauthorized - Missing or invalid signature
    Unauthorized { message: String },

    /// 400 Bad Request - Unreadable body, malformed signature, missing headers, invalid JSON
    BadRequest { message: String },

    /// 500 Internal Server Error - Handler failed
    InternalError { message: String },
}

impl WebhookResponse {
    /// Get the HTTP status code for this response.
    pub fn status_code(&self) -> u16 {
        self.status().as_u16()
    }

    /// Get the response message.
    pub fn message(&self) -> &str {
        match self {
            Self::Ok { message, .. } => message,
            Self::Unauthorized { message } => message,
            Self::BadRequest { message } => message,
            Self::InternalError { message } => message,
        }
    }

    /// Check if response indicates success.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// Convert into a plain-text HTTP response.
    pub fn into_http(self) -> Response<String> {
        let status = self.status();
        let body = match self {
            Self::Ok { message, .. }
            | Self::Unauthorized { message }
            | Self::BadRequest { message }
            | Self::InternalError { message } => message,
        };

        let mut response = Response::new(body);
        *response.status_mut() = status;
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        response
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Ok { .. } => StatusCode::OK,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<&DeliveryError> for WebhookResponse {
    fn from(error: &DeliveryError) -> Self {
        let message = error.public_message();
        match error.status_code() {
            401 => Self::Unauthorized { message },
            500 => Self::InternalError { message },
            _ => Self::BadRequest { message },
        }
    }
}

// ============================================================================
// Delivery Handler
// ============================================================================

/// Runs deliveries through verification, dispatch, and the application handler.
///
/// Holds only read-only state; share one instance (e.g. behind an `Arc`)
/// across all requests.
pub struct DeliveryHandler<H> {
    verifier: SignatureVerifier,
    dispatcher: EventDispatcher,
    handler: H,
    max_body_bytes: Option<usize>,
}

impl<H> DeliveryHandler<H> {
    /// Create a handler that verifies against `secret`.
    ///
    /// # Arguments
    ///
    /// * `secret` - Shared webhook secret; empty disables verification and
    ///   logs a warning
    /// * `handler` - Application logic invoked with each decoded event
    ///
    /// # Returns
    ///
    /// A handler with no body size limit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use github_hook_types::webhook::receiver::{handler_fn, DeliveryHandler};
    ///
    /// let delivery = DeliveryHandler::new("It's a Secret to Everybody", handler_fn(|_| Ok(())));
    ///
    /// assert!(delivery.verifier().is_enabled());
    /// assert_eq!(delivery.max_body_bytes(), None);
    /// ```
    pub fn new(secret: impl Into<WebhookSecret>, handler: H) -> Self {
        Self {
            verifier: SignatureVerifier::new(secret),
            dispatcher: EventDispatcher::new(),
            handler,
            max_body_bytes: None,
        }
    }

    /// Create a handler from loaded configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Secret and optional body size limit
    /// * `handler` - Application logic invoked with each decoded event
    ///
    /// # Examples
    ///
    /// ```rust
    /// use github_hook_types::webhook::receiver::{handler_fn, DeliveryHandler};
    /// use github_hook_types::WebhookConfig;
    ///
    /// let mut config = WebhookConfig::new("It's a Secret to Everybody");
    /// config.max_body_bytes = Some(25 * 1024 * 1024);
    ///
    /// let delivery = DeliveryHandler::from_config(&config, handler_fn(|_| Ok(())));
    ///
    /// assert_eq!(delivery.max_body_bytes(), Some(25 * 1024 * 1024));
    /// ```
    pub fn from_config(config: &WebhookConfig, handler: H) -> Self {
        let mut delivery = Self::new(config.secret.clone(), handler);
        delivery.max_body_bytes = config.max_body_bytes;
        delivery
    }

    /// Reject bodies larger than `limit` bytes before verification.
    ///
    /// Oversize bodies fail with [`DeliveryError::BodyRead`] (400) without
    /// being hashed or parsed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use github_hook_types::webhook::receiver::{handler_fn, DeliveryHandler};
    ///
    /// let delivery = DeliveryHandler::new("secret", handler_fn(|_| Ok(())))
    ///     .with_max_body_bytes(1024 * 1024);
    ///
    /// assert_eq!(delivery.max_body_bytes(), Some(1024 * 1024));
    /// ```
    pub fn with_max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = Some(limit);
        self
    }

    /// Get the configured body size limit, if any.
    pub fn max_body_bytes(&self) -> Option<usize> {
        self.max_body_bytes
    }

    /// Get the signature verifier.
    pub fn verifier(&self) -> &SignatureVerifier {
        &self.verifier
    }

    /// Get the application handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Read, authenticate, and decode a request without invoking the handler.
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::BodyRead`] if the body fails or exceeds the size limit
    /// - [`DeliveryError::Verification`] if the signature is missing, malformed, or wrong
    /// - [`DeliveryError::MissingHeader`] if the event-type or delivery-ID header is absent
    /// - [`DeliveryError::Dispatch`] if the body does not decode
    pub async fn process<B>(&self, request: Request<B>) -> Result<WebhookEvent, DeliveryError>
    where
        B: Body,
        B::Error: Into<HandlerError>,
    {
        let (parts, body) = request.into_parts();

        let body = self.read_body(body).await?;

        self.verifier.verify(&body, &parts.headers)?;

        let event_type =
            headers::event_type(&parts.headers).ok_or(DeliveryError::MissingHeader {
                header: EVENT_TYPE_HEADER,
            })?;
        let delivery_id =
            headers::delivery_id(&parts.headers).ok_or(DeliveryError::MissingHeader {
                header: DELIVERY_ID_HEADER,
            })?;

        let event = self
            .dispatcher
            .dispatch(&event_type, &delivery_id, &body)?;

        Ok(event)
    }

    async fn read_body<B>(&self, body: B) -> Result<Bytes, DeliveryError>
    where
        B: Body,
        B::Error: Into<HandlerError>,
    {
        let limit = self.max_body_bytes.unwrap_or(usize::MAX);

        let collected = Limited::new(body, limit)
            .collect()
            .await
            .map_err(|e| DeliveryError::BodyRead {
                message: e.to_string(),
            })?;

        Ok(collected.to_bytes())
    }
}

impl<H> DeliveryHandler<H>
where
    H: WebhookHandler,
{
    /// Run the full delivery state machine, including the application handler.
    ///
    /// Returns the delivery ID of the handled event.
    pub async fn deliver<B>(&self, request: Request<B>) -> Result<DeliveryId, DeliveryError>
    where
        B: Body,
        B::Error: Into<HandlerError>,
    {
        let event = self.process(request).await?;
        let delivery_id = event.delivery_id.clone();

        info!(
            event_type = %event.event_type,
            delivery_id = %delivery_id,
            action = event.action().unwrap_or(""),
            repository = event.repository_name().unwrap_or(""),
            "Webhook verified and decoded"
        );

        self.handler
            .handle_event(event)
            .await
            .map_err(DeliveryError::Handler)?;

        Ok(delivery_id)
    }

    /// Handle one request and map the outcome to a [`WebhookResponse`].
    ///
    /// Every terminal state is logged with the event type and delivery ID
    /// taken from the request headers.
    pub async fn handle<B>(&self, request: Request<B>) -> WebhookResponse
    where
        B: Body,
        B::Error: Into<HandlerError>,
    {
        let event_type = header_value(request.headers(), EVENT_TYPE_HEADER)
            .unwrap_or("")
            .to_string();
        let delivery_id = header_value(request.headers(), DELIVERY_ID_HEADER)
            .unwrap_or("")
            .to_string();

        let span = info_span!(
            "webhook_delivery",
            event_type = %event_type,
            delivery_id = %delivery_id
        );

        async move {
            match self.deliver(request).await {
                Ok(delivery_id) => {
                    info!("Webhook handled successfully");
                    WebhookResponse::Ok {
                        message: "Webhook processed".to_string(),
                        delivery_id: delivery_id.to_string(),
                    }
                }
                Err(e) => {
                    log_failure(&e);
                    WebhookResponse::from(&e)
                }
            }
        }
        .instrument(span)
        .await
    }
}

fn log_failure(error: &DeliveryError) {
    let status = error.status_code();
    let category = error.category();
    match category {
        ErrorCategory::Server => error!(
            error = %error,
            status,
            category = %category,
            "Webhook handler failed"
        ),
        ErrorCategory::Authentication => warn!(
            error = %error,
            status,
            category = %category,
            "Webhook rejected: authentication failed"
        ),
        ErrorCategory::Client => warn!(
            error = %error,
            status,
            category = %category,
            "Webhook rejected: invalid request"
        ),
    }
}

#[cfg(test)]
#[path = "receiver_tests.rs"]
mod tests;
