//! Messages for async-to-UI communication.
//!
//! Spawned API tasks report back to the event loop through an unbounded
//! channel; the loop applies each message to the [`App`](super::App).

use crate::models::{TodoId, TodoItem};

/// Message delivered to the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// Initial load finished; becomes the entire state
    Loaded(Vec<TodoItem>),
    /// The server confirmed a create; prepend and clear the input
    Created(TodoItem),
    /// A create failed; surface the error dialog
    CreateFailed(String),
    /// The server confirmed a delete; filter the item out of state
    Deleted(TodoId),
    /// The store replaced its sequence; redraw on the next tick
    StateChanged,
}
