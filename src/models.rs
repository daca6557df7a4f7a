//! Domain types for the todo API.
//!
//! The backend assigns ids and may return them as JSON numbers or numeric
//! strings depending on how the record was stored. [`TodoId`] keeps the
//! wire form intact and compares loosely across both representations.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier, numeric or numeric-string on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Int(i64),
    Text(String),
}

impl TodoId {
    /// Numeric value of the id, parsing string forms.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TodoId::Int(n) => Some(*n),
            TodoId::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl PartialEq for TodoId {
    fn eq(&self, other: &Self) -> bool {
        match (self.as_i64(), other.as_i64()) {
            // Loose comparison: 7 and "7" are the same id
            (Some(a), Some(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for TodoId {}

impl Hash for TodoId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with the loose PartialEq above
        match self.as_i64() {
            Some(n) => n.hash(state),
            None => self.to_string().hash(state),
        }
    }
}

impl PartialOrd for TodoId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TodoId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_i64(), other.as_i64()) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Int(n) => write!(f, "{}", n),
            TodoId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for TodoId {
    fn from(n: i64) -> Self {
        TodoId::Int(n)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        TodoId::Text(s.to_string())
    }
}

/// A single todo record as returned by the backend.
///
/// `edit` is a UI-only flag; the backend echoes it but records created
/// elsewhere may lack it entirely, hence the serde default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub edit: bool,
}

/// Request payload for creating a new todo. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    pub completed: bool,
    pub edit: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            edit: false,
        }
    }
}

/// Partial-update payload. Only the fields that are set end up in the JSON
/// body, so a status toggle sends `{"completed": ...}` and nothing else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<bool>,
}

impl TodoPatch {
    /// Patch that flips the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    /// Patch that flips the inline-edit flag.
    pub fn editing(edit: bool) -> Self {
        Self {
            edit: Some(edit),
            ..Self::default()
        }
    }

    /// Patch that renames the todo.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
