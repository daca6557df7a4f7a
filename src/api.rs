//! Remote client for the todo backend.
//!
//! Wraps a collection-style REST resource: `GET/POST /todos` plus
//! `PATCH/DELETE /todos/{id}`. Each operation issues exactly one request
//! and returns the decoded JSON body. There is no retry, timeout, or
//! cancellation; failures propagate to the caller as [`ApiError`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::adapters::ReqwestHttpClient;
use crate::models::{NewTodo, TodoId, TodoItem, TodoPatch};
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Error type for todo API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure
    #[error("http error: {0}")]
    Http(#[from] HttpError),
    /// Server returned a non-2xx status
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    /// Response body could not be decoded
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client for the todo collection resource.
///
/// Holds the base URL and the HTTP transport; carries no other state, so
/// it can be shared behind an `Arc` and called from spawned tasks.
#[derive(Clone)]
pub struct TodoApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl TodoApiClient {
    /// Create a client against `base_url` using the production transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_http(base_url, Arc::new(ReqwestHttpClient::new()))
    }

    /// Create a client with a custom transport (used by tests).
    pub fn with_http(base_url: &str, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch every todo in the collection.
    pub async fn list(&self) -> Result<Vec<TodoItem>, ApiError> {
        let response = self.http.get(&self.collection_url(), &Headers::new()).await?;
        Self::decode(response)
    }

    /// Create a todo; the server assigns and returns the id.
    pub async fn create(&self, new_todo: &NewTodo) -> Result<TodoItem, ApiError> {
        let body = serde_json::to_string(new_todo)?;
        let response = self
            .http
            .post(&self.collection_url(), &body, &Self::json_headers())
            .await?;
        Self::decode(response)
    }

    /// Delete a todo, returning the server's acknowledgment body.
    pub async fn delete(&self, id: &TodoId) -> Result<serde_json::Value, ApiError> {
        let response = self.http.delete(&self.item_url(id), &Headers::new()).await?;
        Self::decode(response)
    }

    /// Set the completion flag; sends `{"completed": ...}` only.
    pub async fn set_completed(&self, id: &TodoId, completed: bool) -> Result<TodoItem, ApiError> {
        self.patch(id, &TodoPatch::completed(completed)).await
    }

    /// Set the inline-edit flag; sends `{"edit": ...}` only.
    pub async fn set_editing(&self, id: &TodoId, editing: bool) -> Result<TodoItem, ApiError> {
        self.patch(id, &TodoPatch::editing(editing)).await
    }

    /// Rename a todo; sends `{"title": ...}` only.
    pub async fn rename(&self, id: &TodoId, title: &str) -> Result<TodoItem, ApiError> {
        self.patch(id, &TodoPatch::title(title)).await
    }

    async fn patch(&self, id: &TodoId, patch: &TodoPatch) -> Result<TodoItem, ApiError> {
        let body = serde_json::to_string(patch)?;
        let response = self
            .http
            .patch(&self.item_url(id), &body, &Self::json_headers())
            .await?;
        Self::decode(response)
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: &TodoId) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }

    fn json_headers() -> Headers {
        Headers::from([(
            "Content-Type".to_string(),
            "application/json".to_string(),
        )])
    }

    fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                body: response.text().unwrap_or_default(),
            });
        }
        Ok(response.json()?)
    }
}

impl std::fmt::Debug for TodoApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
