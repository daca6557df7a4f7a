//! In-memory state container for the todo list.
//!
//! Holds the single source of truth the renderer reads from. Every
//! visible mutation goes through [`TodoStore::set_todos`], which replaces
//! the sequence wholesale and synchronously fires the registered change
//! callback. At most one subscriber exists at a time; registering a new
//! one replaces the old.

use crate::models::TodoItem;

type ChangeCallback = Box<dyn FnMut(&[TodoItem]) + Send>;

/// The todo list plus its single change subscriber.
///
/// Constructed explicitly by the application at startup and dropped on
/// exit; there is no global instance.
#[derive(Default)]
pub struct TodoStore {
    todos: Vec<TodoItem>,
    on_change: Option<ChangeCallback>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sequence, in mutation order (display order is the
    /// renderer's concern).
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Replace the sequence wholesale and notify the subscriber.
    ///
    /// The callback runs synchronously before this returns; with no
    /// subscriber registered the replacement is silent.
    pub fn set_todos(&mut self, todos: Vec<TodoItem>) {
        self.todos = todos;
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.todos);
        }
    }

    /// Register the change callback, replacing any existing one.
    pub fn subscribe(&mut self, callback: impl FnMut(&[TodoItem]) + Send + 'static) {
        self.on_change = Some(Box::new(callback));
    }
}

impl std::fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos)
            .field("subscribed", &self.on_change.is_some())
            .finish()
    }
}
