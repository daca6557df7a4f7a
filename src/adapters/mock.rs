//! Mock HTTP client for testing.
//!
//! Provides a configurable mock that serves predefined responses and
//! records every request for verification, keyed by method + URL so the
//! collection endpoint can answer GET and POST differently.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST, PATCH, DELETE)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body, if the verb carries one
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return a transport error
    Error(HttpError),
}

/// Mock HTTP client that serves configured responses without a network.
///
/// Clones share the same response table and request log, so a clone can be
/// handed to the code under test while the original verifies traffic.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses keyed by "METHOD url"
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Fallback when no specific match exists
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock with no configured responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response for an exact method + URL pair.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(Self::key(method, url), response);
    }

    /// Configure a fallback response for unmatched requests.
    pub fn set_default_response(&self, response: MockResponse) {
        *self.default_response.lock().unwrap() = Some(response);
    }

    /// All requests seen so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests seen so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn key(method: &str, url: &str) -> String {
        format!("{} {}", method, url)
    }

    fn handle(
        &self,
        method: &str,
        url: &str,
        body: Option<&str>,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body: body.map(|b| b.to_string()),
        });

        let configured = self
            .responses
            .lock()
            .unwrap()
            .get(&Self::key(method, url))
            .cloned();
        let response = match configured {
            Some(r) => r,
            None => match self.default_response.lock().unwrap().clone() {
                Some(r) => r,
                None => {
                    return Err(HttpError::Other(format!(
                        "no mock response configured for {} {}",
                        method, url
                    )))
                }
            },
        };

        match response {
            MockResponse::Success(r) => Ok(r),
            MockResponse::Error(e) => Err(e),
        }
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("GET", url, None, headers)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("POST", url, Some(body), headers)
    }

    async fn patch(
        &self,
        url: &str,
        body: &str,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.handle("PATCH", url, Some(body), headers)
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.handle("DELETE", url, None, headers)
    }
}
