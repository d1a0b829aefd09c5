// crates/sensor-monitoring-client/src/transport.rs
// ============================================================================
// Module: API Transport
// Description: Shared HTTP call path with three-tier envelope normalization.
// Purpose: Turn one endpoint descriptor plus inputs into exactly one envelope.
// Dependencies: reqwest, serde, serde_json, tracing, url
// ============================================================================

//! ## Overview
//! [`ApiClient`] owns the HTTP client, the base URL, an isolated cookie jar,
//! and a request transcript. Every wrapper funnels through one call path:
//!
//! 1. The body parses as a JSON object: returned as sent, with any missing
//!    `code` or `status` taken from the HTTP status.
//! 2. The server answered but the body is not a JSON object: synthesized from
//!    the HTTP status and raw text (or the operation's fallback message).
//! 3. The request failed before a body was read: synthesized with code 500
//!    and `"<Operation> error: <cause>"`.
//!
//! No path returns an error; each call issues exactly one request and never
//! retries.
//!
//! Security posture: the session token is only ever placed in the `Cookie`
//! header; transcripts and logs redact password fields and never include
//! tokens.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use reqwest::Client;
use reqwest::Response;
use reqwest::cookie::Jar;
use reqwest::header::ACCEPT;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::COOKIE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::envelope::Envelope;
use crate::envelope::EnvelopeOrigin;
use crate::envelope::Paged;
use crate::envelope::RawEnvelope;
use crate::error::ClientError;
use crate::models::QueryPairs;
use crate::session::SessionToken;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// `Accept` header sent on every request.
pub const ACCEPT_ANY: &str = "application/json, text/plain, */*";

/// Placeholder written over secret fields in transcripts.
const REDACTED: &str = "<redacted>";

/// Object keys treated as secrets in transcripts.
const SECRET_KEYS: &[&str] = &["password", "firmware_password"];

// ============================================================================
// SECTION: Transcript
// ============================================================================

/// One recorded call, safe to write to artifacts.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptEntry {
    /// 1-based position within the client's transcript.
    pub sequence: u64,
    /// Operation name.
    pub operation: String,
    /// HTTP method.
    pub method: String,
    /// Path template.
    pub path: String,
    /// Query pairs sent.
    pub query: Vec<(String, String)>,
    /// Request body with secrets redacted.
    pub request: Option<Value>,
    /// Resulting envelope with secrets redacted.
    pub response: RawEnvelope,
    /// Normalization path that produced the envelope.
    pub origin: EnvelopeOrigin,
}

// ============================================================================
// SECTION: Call Inputs
// ============================================================================

/// Per-call inputs for one endpoint.
#[derive(Debug, Default)]
pub(crate) struct Call<'a> {
    /// Values for the endpoint's path placeholders.
    params: Vec<(&'a str, &'a str)>,
    /// Session token sent as the `token` cookie.
    token: Option<&'a SessionToken>,
    /// Serialized JSON body, or the serialization failure.
    body: Option<Result<Value, String>>,
    /// Query pairs, already filtered to supplied values.
    query: QueryPairs,
}

impl<'a> Call<'a> {
    /// Starts an unauthenticated call with no inputs.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Binds a path placeholder.
    pub(crate) fn param(mut self, name: &'a str, value: &'a str) -> Self {
        self.params.push((name, value));
        self
    }

    /// Attaches the session token cookie.
    pub(crate) fn token(mut self, token: &'a SessionToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Attaches a JSON body.
    pub(crate) fn body<B: Serialize>(mut self, body: &B) -> Self {
        self.body = Some(serde_json::to_value(body).map_err(|err| err.to_string()));
        self
    }

    /// Attaches query pairs.
    pub(crate) fn query(mut self, query: QueryPairs) -> Self {
        self.query = query;
        self
    }
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client for the sensor monitoring API.
///
/// # Invariants
/// - Each client has its own cookie jar; dropping the client discards it.
/// - Clones share the HTTP pool, jar, and transcript.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Reqwest client bound to this client's own cookie jar.
    http: Client,
    /// Backend base URL.
    base_url: Url,
    /// Every cookie any response set, by name, whatever its `Path` or `Domain`.
    received: Arc<Mutex<BTreeMap<String, String>>>,
    /// Recorded calls.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl ApiClient {
    /// Builds a client with a fresh cookie jar.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the base URL is invalid or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(&config.base_url).map_err(|err| ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: err.to_string(),
            })?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl {
                url: config.base_url.clone(),
                reason: "url cannot carry a path".to_string(),
            });
        }
        let http = Client::builder()
            .timeout(config.timeout)
            .cookie_provider(Arc::new(Jar::default()))
            .build()
            .map_err(|err| ClientError::Build(err.to_string()))?;
        Ok(Self {
            http,
            base_url,
            received: Arc::new(Mutex::new(BTreeMap::new())),
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the backend base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the latest value the backend set for the named cookie.
    ///
    /// Cookies scoped to a narrower path than the base URL are included.
    #[must_use]
    pub fn cookie(&self, name: &str) -> Option<String> {
        self.received.lock().ok()?.get(name).cloned()
    }

    /// Returns the session token cookie, if the backend set one.
    #[must_use]
    pub fn session_token(&self) -> Option<SessionToken> {
        self.cookie(TOKEN_COOKIE).map(SessionToken::new)
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Calls a single-record endpoint.
    pub(crate) async fn single<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        call: Call<'_>,
    ) -> Envelope<T> {
        let (raw, origin) = self.execute(endpoint, call).await;
        Envelope::from_raw(raw, origin)
    }

    /// Calls a list endpoint.
    pub(crate) async fn paged<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        call: Call<'_>,
    ) -> Paged<T> {
        let (raw, origin) = self.execute(endpoint, call).await;
        Paged::from_raw(raw, origin)
    }

    /// Performs one call and normalizes the outcome.
    async fn execute(&self, endpoint: &Endpoint, call: Call<'_>) -> (RawEnvelope, EnvelopeOrigin) {
        let (raw, origin) = match self.send(endpoint, &call).await {
            Ok(outcome) => outcome,
            Err(error) => (
                RawEnvelope::transport_failure(endpoint.operation, &error, endpoint.paged),
                EnvelopeOrigin::TransportFailure,
            ),
        };
        match origin {
            EnvelopeOrigin::Upstream => tracing::debug!(
                operation = endpoint.operation,
                method = %endpoint.method,
                path = endpoint.path,
                code = raw.code,
                status = raw.status,
                "api call completed"
            ),
            EnvelopeOrigin::MalformedBody | EnvelopeOrigin::TransportFailure => tracing::warn!(
                operation = endpoint.operation,
                method = %endpoint.method,
                path = endpoint.path,
                code = raw.code,
                origin = origin.as_str(),
                message = %raw.message,
                "api call normalized from failure"
            ),
        }
        self.record_transcript(endpoint, &call, &raw, origin);
        (raw, origin)
    }

    /// Sends the request and decodes the body.
    ///
    /// # Errors
    ///
    /// Returns the failure text when the request cannot be built, sent, or
    /// read.
    async fn send(
        &self,
        endpoint: &Endpoint,
        call: &Call<'_>,
    ) -> Result<(RawEnvelope, EnvelopeOrigin), String> {
        let mut url =
            endpoint.url(&self.base_url, &call.params).map_err(|err| err.to_string())?;
        if !call.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(call.query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        let headers = request_headers(endpoint, call.token)?;
        let mut request = self.http.request(endpoint.method.clone(), url).headers(headers);
        match &call.body {
            Some(Ok(body)) => request = request.json(body),
            Some(Err(err)) => return Err(format!("request body serialization failed: {err}")),
            None => {}
        }

        let response = request.send().await.map_err(|err| err.to_string())?;
        let status = response.status();
        self.remember_cookies(&response);
        let text = response.text().await.map_err(|err| err.to_string())?;
        let envelope = serde_json::from_str::<Value>(&text)
            .ok()
            .and_then(|body| RawEnvelope::from_body(body, status.as_u16(), status.is_success()));
        let outcome = match envelope {
            Some(raw) => (raw, EnvelopeOrigin::Upstream),
            None => (
                RawEnvelope::malformed(
                    status.as_u16(),
                    status.is_success(),
                    &text,
                    &endpoint.fallback_message(),
                    endpoint.paged,
                ),
                EnvelopeOrigin::MalformedBody,
            ),
        };
        Ok(outcome)
    }

    /// Records the cookies a response set; an empty value clears the name.
    fn remember_cookies(&self, response: &Response) {
        let Ok(mut received) = self.received.lock() else {
            return;
        };
        for cookie in response.cookies() {
            if cookie.value().is_empty() {
                received.remove(cookie.name());
            } else {
                received.insert(cookie.name().to_string(), cookie.value().to_string());
            }
        }
    }

    fn record_transcript(
        &self,
        endpoint: &Endpoint,
        call: &Call<'_>,
        raw: &RawEnvelope,
        origin: EnvelopeOrigin,
    ) {
        let Ok(mut guard) = self.transcript.lock() else {
            return;
        };
        let sequence = u64::try_from(guard.len()).unwrap_or(u64::MAX).saturating_add(1);
        let mut response = raw.clone();
        redact_secrets(&mut response.data);
        guard.push(TranscriptEntry {
            sequence,
            operation: endpoint.operation.to_string(),
            method: endpoint.method.to_string(),
            path: endpoint.path.to_string(),
            query: call
                .query
                .iter()
                .map(|(key, value)| ((*key).to_string(), value.clone()))
                .collect(),
            request: call.body.as_ref().and_then(|body| body.as_ref().ok()).map(|body| {
                let mut body = body.clone();
                redact_secrets(&mut body);
                body
            }),
            response,
            origin,
        });
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Builds the fixed header set for an endpoint.
///
/// # Errors
///
/// Returns an error when the token cannot be carried in a header.
fn request_headers(
    endpoint: &Endpoint,
    token: Option<&SessionToken>,
) -> Result<HeaderMap, String> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_ANY));
    if endpoint.is_write() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    }
    if let Some(token) = token {
        let cookie = HeaderValue::from_str(&format!("{TOKEN_COOKIE}={}", token.expose()))
            .map_err(|_| "invalid session token header".to_string())?;
        headers.insert(COOKIE, cookie);
    }
    Ok(headers)
}

/// Replaces password fields anywhere in a JSON value.
pub fn redact_secrets(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                if SECRET_KEYS.contains(&key.as_str()) {
                    *entry = Value::String(REDACTED.to_string());
                } else {
                    redact_secrets(entry);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_secrets),
        _ => {}
    }
}
