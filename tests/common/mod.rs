//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use taskdeck::adapters::MockHttpClient;
use taskdeck::api::TodoApiClient;
use taskdeck::app::App;
use taskdeck::models::{TodoId, TodoItem};

/// Base URL used with the mock transport.
pub const BASE_URL: &str = "http://localhost:3000";

/// Build a todo record the way the backend returns it.
pub fn todo(id: i64, title: &str, completed: bool) -> TodoItem {
    TodoItem {
        id: TodoId::Int(id),
        title: title.to_string(),
        completed,
        edit: false,
    }
}

/// An app wired to a recording mock transport.
pub fn mock_app() -> (App, MockHttpClient) {
    let mock = MockHttpClient::new();
    let api = Arc::new(TodoApiClient::with_http(BASE_URL, Arc::new(mock.clone())));
    (App::new(api), mock)
}
