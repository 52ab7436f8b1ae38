//! In-process fake of the managed data store.
//!
//! Implements the subset of the store's REST interface the site uses:
//!
//! - `GET /rest/v1/{table}` with `select=*`, `order=<col>.<asc|desc>[,...]`, `limit=<n>`
//! - `POST /rest/v1/{table}` with a JSON array of rows, answered with `201 Created`
//!
//! Requests without the expected `apikey` header are refused with `401`, the same way
//! the real store refuses them. Every request is recorded for later assertions.

use std::{
    cmp::Ordering,
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::DateTime;
use serde_json::{json, Value};

/// A request received by the fake store.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    /// `GET` or `POST`
    pub method: &'static str,
    pub table: String,
    pub query: HashMap<String, String>,
    pub api_key: Option<String>,
    pub authorization: Option<String>,
    pub prefer: Option<String>,
    /// JSON body for inserts
    pub body: Option<Value>,
}

/// Canned failure returned for every request to one table.
#[derive(Debug, Clone)]
pub struct Failure {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct StoreState {
    pub api_key: String,
    pub tables: HashMap<String, Vec<Value>>,
    pub failures: HashMap<String, Failure>,
    pub requests: Vec<RecordedRequest>,
}

/// Shared handle to the fake store's state.
///
/// Cloned into the axum router; the test keeps another clone to inspect what the
/// code under test sent.
#[derive(Debug, Clone, Default)]
pub struct FakeStore {
    inner: Arc<Mutex<StoreState>>,
}

impl FakeStore {
    pub fn new(state: StoreState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/rest/v1/{table}", get(select).post(insert))
            .with_state(self.clone())
    }

    /// Locks the state. A panic in one handler must not hide the others' records.
    pub fn state(&self) -> MutexGuard<'_, StoreState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.state().tables.get(table).cloned().unwrap_or_default()
    }
}

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({
            "code": status.as_u16().to_string(),
            "details": null,
            "hint": null,
            "message": message,
        })),
    )
        .into_response()
}

/// Records the request and returns the canned error, if any, that should answer it.
fn admit(store: &FakeStore, request: RecordedRequest) -> Option<Response> {
    let mut state = store.state();
    let table = request.table.clone();
    let authorized = request.api_key.as_deref() == Some(state.api_key.as_str());
    state.requests.push(request);

    if !authorized {
        return Some(error_response(StatusCode::UNAUTHORIZED, "Invalid API key"));
    }

    state
        .failures
        .get(&table)
        .map(|failure| error_response(failure.status, &failure.message))
}

fn compare(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => compare_text(a, b),
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Compares timestamps by instant, since serialized fractional seconds vary in
/// length. Anything else compares as plain text.
fn compare_text(a: &str, b: &str) -> Ordering {
    match (
        DateTime::parse_from_rfc3339(a),
        DateTime::parse_from_rfc3339(b),
    ) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        _ => a.cmp(b),
    }
}

/// Sorts rows by an `order` parameter such as `display_order.asc,created_at.desc`.
///
/// The sort is stable, so rows with equal keys keep insertion order.
fn apply_order(rows: &mut [Value], order: &str) {
    let keys: Vec<(&str, bool)> = order
        .split(',')
        .filter_map(|key| {
            let (column, direction) = key.split_once('.')?;
            Some((column, direction.starts_with("desc")))
        })
        .collect();

    rows.sort_by(|a, b| {
        keys.iter()
            .map(|(column, descending)| {
                let ordering = compare(&a[*column], &b[*column]);
                if *descending {
                    ordering.reverse()
                } else {
                    ordering
                }
            })
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });
}

async fn select(
    State(store): State<FakeStore>,
    Path(table): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let request = RecordedRequest {
        method: "GET",
        table: table.clone(),
        query: query.clone(),
        api_key: header(&headers, "apikey"),
        authorization: header(&headers, "authorization"),
        prefer: header(&headers, "prefer"),
        body: None,
    };
    if let Some(response) = admit(&store, request) {
        return response;
    }

    let mut rows = store.rows(&table);
    if let Some(order) = query.get("order") {
        apply_order(&mut rows, order);
    }
    if let Some(limit) = query.get("limit").and_then(|l| l.parse::<usize>().ok()) {
        rows.truncate(limit);
    }

    Json(rows).into_response()
}

async fn insert(
    State(store): State<FakeStore>,
    Path(table): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let request = RecordedRequest {
        method: "POST",
        table: table.clone(),
        query,
        api_key: header(&headers, "apikey"),
        authorization: header(&headers, "authorization"),
        prefer: header(&headers, "prefer"),
        body: Some(body.clone()),
    };
    if let Some(response) = admit(&store, request) {
        return response;
    }

    let Value::Array(rows) = body else {
        return error_response(StatusCode::BAD_REQUEST, "Expected an array of rows");
    };

    store
        .state()
        .tables
        .entry(table)
        .or_default()
        .extend(rows);

    StatusCode::CREATED.into_response()
}
