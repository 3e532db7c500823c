//! Failover fetch engine
//!
//! This module issues GET requests against the configured mirror list, one
//! mirror at a time and in priority order. A transport error or an HTTP error
//! status moves on to the next mirror with the same path and query
//! parameters; an empty payload or an error payload from an otherwise
//! healthy mirror ends the chain immediately, since it signals missing data
//! rather than a broken mirror.

use crate::endpoint::{RequestSpec, build_request};
use serde_json::Value;
use thiserror::Error;

/// Why a single attempt against one mirror did not produce a payload.
#[derive(Debug, Error)]
pub enum EndpointFailure {
    /// The request never produced an HTTP response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The mirror answered with an error status
    #[error("HTTP status {0}")]
    Status(u16),
}

/// Errors surfaced to callers of the fetch engine.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Every configured mirror failed with a transport error or an error
    /// status; carries the last attempt's failure
    #[error("all endpoints failed: {source}")]
    EndpointsExhausted {
        #[source]
        source: EndpointFailure,
    },

    /// A mirror answered successfully but returned no usable payload.
    /// Not retried: the data is missing upstream, not on this mirror only.
    #[error("No data returned")]
    EmptyPayload,

    /// A mirror answered successfully but the payload carried an error
    /// marker. Not retried for the same reason as an empty payload.
    #[error("{0}")]
    Application(String),

    /// The configured endpoint list was empty
    #[error("no endpoints configured")]
    NoEndpoints,
}

/// Outcome of a single attempt against a single mirror.
#[derive(Debug)]
enum AttemptOutcome {
    /// Parsed payload with no error marker
    Success(Value),
    /// Transport error or error status; the next mirror should be tried
    EndpointFailed(EndpointFailure),
    /// Successful response without a usable body
    EmptyPayload,
    /// Successful response whose body carries an error marker
    ApplicationError(String),
}

/// Sequential failover client over an ordered mirror list.
///
/// One request is in flight at a time; the mirror index only moves forward
/// within a call and the chain ends at the end of the list. The client keeps
/// no state between calls, so independent calls may run concurrently. No
/// timeout is enforced beyond the transport's own behavior.
pub(crate) struct FailoverClient {
    client: reqwest::blocking::Client,
    endpoints: Vec<String>,
}

impl FailoverClient {
    /// Creates a failover client over the given mirror list.
    ///
    /// The list order is the priority order and is fixed for the lifetime of
    /// the client.
    pub fn new(endpoints: Vec<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoints,
        }
    }

    /// Fetches a JSON payload for a relative resource path.
    ///
    /// Tries each mirror in order until one yields a payload. Transport
    /// errors and HTTP statuses of 400 or above advance to the next mirror
    /// with the same path and query parameters; empty payloads and payloads
    /// carrying an error marker are terminal regardless of remaining
    /// mirrors.
    ///
    /// # Arguments
    ///
    /// * `path` - Relative resource path, e.g. `shows/1`
    /// * `query` - Query parameters, forwarded unchanged to every attempt
    pub fn get_json(&self, path: &str, query: &[(String, String)]) -> Result<Value, FetchError> {
        for index in 0..self.endpoints.len() {
            let spec = build_request(&self.endpoints, index, path, query);
            tracing::debug!(url = %spec.url, "requesting");

            match self.attempt(&spec) {
                AttemptOutcome::Success(payload) => return Ok(payload),
                AttemptOutcome::EmptyPayload => return Err(FetchError::EmptyPayload),
                AttemptOutcome::ApplicationError(message) => {
                    return Err(FetchError::Application(message));
                }
                AttemptOutcome::EndpointFailed(cause) => {
                    if index + 1 < self.endpoints.len() {
                        tracing::warn!(
                            endpoint = %self.endpoints[index],
                            error = %cause,
                            "endpoint failed, trying next mirror"
                        );
                        continue;
                    }
                    return Err(FetchError::EndpointsExhausted { source: cause });
                }
            }
        }

        Err(FetchError::NoEndpoints)
    }

    /// Issues one GET request and classifies its outcome.
    fn attempt(&self, spec: &RequestSpec) -> AttemptOutcome {
        let mut request = self.client.get(&spec.url);
        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }
        for (name, value) in &spec.headers {
            request = request.header(*name, value);
        }

        let response = match request.send() {
            Ok(response) => response,
            Err(e) => return AttemptOutcome::EndpointFailed(EndpointFailure::Transport(e)),
        };

        let status = response.status();
        if status.as_u16() >= 400 {
            return AttemptOutcome::EndpointFailed(EndpointFailure::Status(status.as_u16()));
        }

        let body = match response.text() {
            Ok(body) => body,
            Err(e) => return AttemptOutcome::EndpointFailed(EndpointFailure::Transport(e)),
        };

        classify_payload(&body)
    }
}

/// Classifies a successful response body.
///
/// A body that is blank, not JSON, `null` or `{}` counts as missing data.
/// A JSON object carrying an error marker (a truthy `error` field or a
/// `status_message` field) counts as an application error with the marker's
/// message. Everything else is a success.
fn classify_payload(body: &str) -> AttemptOutcome {
    if body.trim().is_empty() {
        return AttemptOutcome::EmptyPayload;
    }

    let payload: Value = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(_) => return AttemptOutcome::EmptyPayload,
    };

    match &payload {
        Value::Null => return AttemptOutcome::EmptyPayload,
        Value::Object(fields) if fields.is_empty() => return AttemptOutcome::EmptyPayload,
        _ => {}
    }

    if let Some(message) = error_marker(&payload) {
        return AttemptOutcome::ApplicationError(message);
    }

    AttemptOutcome::Success(payload)
}

/// Returns the error message when the payload carries an error marker.
fn error_marker(payload: &Value) -> Option<String> {
    let fields = payload.as_object()?;

    let flagged = fields.get("error").is_some_and(is_truthy);
    let status_message = fields.get("status_message");
    if !flagged && status_message.is_none() {
        return None;
    }

    status_message
        .or_else(|| fields.get("error"))
        .map(render_message)
}

/// JavaScript-style truthiness, since the upstream error marker follows it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders a marker value as a plain message without JSON string quotes.
fn render_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
