//! Capability descriptor and joke call endpoints.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use jokes::{Descriptor, JokeResponse, JokeSelector, RandomSource};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
#[derive(Debug)]
pub struct AppState {
    pub selector: JokeSelector,
    pub descriptor: Descriptor,
    pub random: RandomSource,
}

impl AppState {
    /// Creates state for a selector, deriving the descriptor from its dataset.
    pub fn new(selector: JokeSelector, random: RandomSource) -> Self {
        let descriptor = Descriptor::for_dataset(selector.dataset());
        Self {
            selector,
            descriptor,
            random,
        }
    }
}

// -- Request types --

/// Body of `POST /mcp/call`. Unknown fields are ignored.
///
/// `category` accepts any JSON value: empty values (`null`, `false`, `0`,
/// `""`, `[]`, `{}`) mean "any category", a string names a category, and
/// anything else is an unknown category.
#[derive(Debug, Default, Deserialize)]
pub struct CallRequest {
    #[serde(default)]
    pub category: Option<Value>,
}

/// How the caller asked for a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestedCategory<'a> {
    Any,
    Named(&'a str),
    Unknown(String),
}

impl CallRequest {
    /// Parses a request body. It must be a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        let fields: serde_json::Map<String, Value> = serde_json::from_slice(body)?;
        serde_json::from_value(Value::Object(fields))
    }

    /// Interprets the `category` field.
    pub fn requested_category(&self) -> RequestedCategory<'_> {
        match &self.category {
            None | Some(Value::Null) | Some(Value::Bool(false)) => RequestedCategory::Any,
            Some(Value::String(s)) if s.is_empty() => RequestedCategory::Any,
            Some(Value::String(s)) => RequestedCategory::Named(s),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => RequestedCategory::Any,
            Some(Value::Array(a)) if a.is_empty() => RequestedCategory::Any,
            Some(Value::Object(o)) if o.is_empty() => RequestedCategory::Any,
            Some(other) => RequestedCategory::Unknown(other.to_string()),
        }
    }
}

/// Rejects bodies that declare a non-JSON content type. A missing header is
/// read as JSON.
fn check_content_type(headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return Ok(());
    };
    let content_type = value.to_str().unwrap_or_default();
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if mime == "application/json" || mime.ends_with("+json") {
        Ok(())
    } else {
        Err(ApiError::UnsupportedMediaType(content_type.to_string()))
    }
}

// -- Handlers --

/// GET /mcp/describe — return the capability descriptor.
pub async fn describe(State(state): State<Arc<AppState>>) -> Json<Descriptor> {
    Json(state.descriptor.clone())
}

/// POST /mcp/call — return a random joke, optionally from one category.
#[tracing::instrument(skip(state, headers, body))]
pub async fn call(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<JokeResponse>, ApiError> {
    check_content_type(&headers)?;
    let req = CallRequest::from_slice(&body)?;

    let category = match req.requested_category() {
        RequestedCategory::Any => None,
        RequestedCategory::Named(name) => Some(name),
        RequestedCategory::Unknown(raw) => {
            metrics::counter!("joke_requests_rejected_total").increment(1);
            return Err(state.selector.invalid_category(raw).into());
        }
    };

    let response = state
        .random
        .with_rng(|rng| state.selector.select(category, rng))
        .inspect_err(|_| {
            metrics::counter!("joke_requests_rejected_total").increment(1);
        })?;

    metrics::counter!("jokes_served_total", "category" => response.category.to_string())
        .increment(1);
    tracing::info!(category = %response.category, "joke served");

    Ok(Json(response))
}
