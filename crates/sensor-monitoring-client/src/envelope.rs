// crates/sensor-monitoring-client/src/envelope.rs
// ============================================================================
// Module: Response Envelope
// Description: Wire and typed forms of the backend response envelope.
// Purpose: Give every wrapper call one uniform, always-populated result shape.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The backend answers every call with `{code, status, message, data}`; list
//! endpoints add `page`, `count`, and `total`. [`RawEnvelope`] is that wire
//! shape. Any JSON object body is read into one leniently; the transport
//! synthesizes one when the body is not a JSON object or the request never
//! completed.
//!
//! [`Envelope`] and [`Paged`] are the typed views tests assert on. The payload
//! is classified by the server's `status` flag into a [`Payload`] instead of
//! probing for field presence.
//!
//! Invariants:
//! - `code`, `status`, and `message` are always populated.
//! - Pagination fields are `0` whenever the server omitted them or the
//!   envelope was synthesized.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Code reported for transport failures, whatever the underlying cause.
pub const TRANSPORT_FAILURE_CODE: u16 = 500;

/// Code reported when a call is skipped for lack of a session token.
pub const MISSING_SESSION_CODE: u16 = 401;

// ============================================================================
// SECTION: Wire Envelope
// ============================================================================

/// Envelope exactly as the backend sends it (or as the transport synthesized it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEnvelope {
    /// HTTP-like status code reported in the body.
    pub code: u16,
    /// Application-level success flag.
    pub status: bool,
    /// Human-readable message.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
    /// Endpoint-specific payload.
    #[serde(default)]
    pub data: Value,
    /// Current page for list endpoints.
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    /// Items on the current page for list endpoints.
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Total items for list endpoints.
    #[serde(default, deserialize_with = "lenient_count", skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl RawEnvelope {
    /// Builds the envelope for a body that parsed as a JSON object.
    ///
    /// `message` and `data` are kept as sent. A missing or unusable `code`
    /// falls back to the HTTP status and a missing `status` to the HTTP
    /// success flag. Pagination numbers may arrive as strings. Returns `None`
    /// for JSON that is not an object.
    #[must_use]
    pub fn from_body(body: Value, http_status: u16, ok: bool) -> Option<Self> {
        let Value::Object(mut fields) = body else {
            return None;
        };
        let code = fields
            .get("code")
            .and_then(count_value)
            .and_then(|code| u16::try_from(code).ok())
            .unwrap_or(http_status);
        let status = fields.get("status").and_then(flag_value).unwrap_or(ok);
        let message = match fields.remove("message") {
            Some(Value::String(message)) => message,
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        };
        Some(Self {
            code,
            status,
            message,
            data: fields.remove("data").unwrap_or(Value::Null),
            page: fields.get("page").and_then(count_value),
            count: fields.get("count").and_then(count_value),
            total: fields.get("total").and_then(count_value),
        })
    }

    /// Builds the envelope for a body that is not a JSON object.
    ///
    /// The raw text becomes the message; an empty body falls back to
    /// `fallback_message`.
    #[must_use]
    pub fn malformed(
        http_status: u16,
        ok: bool,
        text: &str,
        fallback_message: &str,
        paged: bool,
    ) -> Self {
        let message =
            if text.is_empty() { fallback_message.to_string() } else { text.to_string() };
        Self::synthesized(http_status, ok, message, paged)
    }

    /// Builds the envelope for a request that failed below HTTP.
    #[must_use]
    pub fn transport_failure(operation: &str, error: &str, paged: bool) -> Self {
        Self::synthesized(
            TRANSPORT_FAILURE_CODE,
            false,
            format!("{operation} error: {error}"),
            paged,
        )
    }

    /// Builds the envelope for a call that needed a session token nobody
    /// cached.
    #[must_use]
    pub fn missing_session(operation: &str, error: &str) -> Self {
        Self::synthesized(
            MISSING_SESSION_CODE,
            false,
            format!("{operation} error: {error}"),
            false,
        )
    }

    /// Returns the pagination block with absent fields zeroed.
    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page.unwrap_or(0),
            count: self.count.unwrap_or(0),
            total: self.total.unwrap_or(0),
        }
    }

    fn synthesized(code: u16, status: bool, message: String, paged: bool) -> Self {
        let zero = paged.then_some(0);
        Self {
            code,
            status,
            message,
            data: Value::Null,
            page: zero,
            count: zero,
            total: zero,
        }
    }
}

/// Decodes a JSON `null` string field as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decodes a pagination number sent either as a number or a numeric string.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.as_ref().and_then(count_value))
}

fn count_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn flag_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

// ============================================================================
// SECTION: Typed Envelope
// ============================================================================

/// Which normalization path produced an envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeOrigin {
    /// The backend returned a JSON object, passed through as sent.
    Upstream,
    /// The backend answered but the body was not a JSON object.
    MalformedBody,
    /// The request failed before a response was read.
    TransportFailure,
}

impl EnvelopeOrigin {
    /// Returns a stable label for logs and transcripts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upstream => "upstream",
            Self::MalformedBody => "malformed_body",
            Self::TransportFailure => "transport_failure",
        }
    }
}

/// Classified envelope payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// `status` was true and `data` decoded as the endpoint's record type.
    Data(T),
    /// `status` was false and `data` carried an error string.
    ErrorMessage(String),
    /// `data` was `null` or absent.
    Empty,
    /// Any other combination, kept verbatim.
    Unrecognized(Value),
}

impl<T: DeserializeOwned> Payload<T> {
    /// Classifies `data` using the envelope's `status` flag.
    #[must_use]
    pub fn classify(status: bool, data: &Value) -> Self {
        match (status, data) {
            (_, Value::Null) => Self::Empty,
            (false, Value::String(message)) => Self::ErrorMessage(message.clone()),
            (true, value) => serde_json::from_value(value.clone())
                .map_or_else(|_| Self::Unrecognized(value.clone()), Self::Data),
            (false, value) => Self::Unrecognized(value.clone()),
        }
    }
}

impl<T> Payload<T> {
    /// Returns the decoded record, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Data(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error string, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::ErrorMessage(message) => Some(message),
            _ => None,
        }
    }

    /// Returns true when the payload is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Typed envelope for single-record endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    /// HTTP-like status code from the body (or synthesized).
    pub code: u16,
    /// Application-level success flag.
    pub status: bool,
    /// Human-readable message.
    pub message: String,
    /// Classified payload.
    pub data: Payload<T>,
    /// Normalization path that produced this envelope.
    pub origin: EnvelopeOrigin,
    /// Wire form kept for artifacts and ad-hoc field checks.
    raw: RawEnvelope,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Builds the typed view of a wire envelope.
    #[must_use]
    pub fn from_raw(raw: RawEnvelope, origin: EnvelopeOrigin) -> Self {
        Self {
            code: raw.code,
            status: raw.status,
            message: raw.message.clone(),
            data: Payload::classify(raw.status, &raw.data),
            origin,
            raw,
        }
    }
}

impl<T> Envelope<T> {
    /// Returns the wire envelope.
    #[must_use]
    pub const fn raw(&self) -> &RawEnvelope {
        &self.raw
    }

    /// Returns the raw `data` value.
    #[must_use]
    pub const fn raw_data(&self) -> &Value {
        &self.raw.data
    }
}

// ============================================================================
// SECTION: Paged Envelope
// ============================================================================

/// Pagination block of a list envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page.
    pub page: u64,
    /// Items on the current page.
    pub count: u64,
    /// Total items across pages.
    pub total: u64,
}

/// Typed envelope for list endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Paged<T> {
    /// Envelope with the list payload.
    pub envelope: Envelope<Vec<T>>,
    /// Pagination block, zeroed when absent or synthesized.
    pub pagination: Pagination,
}

impl<T: DeserializeOwned> Paged<T> {
    /// Builds the typed view of a list wire envelope.
    #[must_use]
    pub fn from_raw(raw: RawEnvelope, origin: EnvelopeOrigin) -> Self {
        let pagination = raw.pagination();
        Self {
            envelope: Envelope::from_raw(raw, origin),
            pagination,
        }
    }
}

impl<T> Paged<T> {
    /// Returns the listed items, empty unless the payload decoded.
    #[must_use]
    pub fn items(&self) -> &[T] {
        self.envelope.data.data().map_or(&[][..], Vec::as_slice)
    }
}
