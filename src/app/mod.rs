//! Application state and coordination logic.
//!
//! [`App`] owns the state container, the API client handle, and the UI
//! state (input buffers, inline-edit drafts, the error dialog). Event
//! handlers mutate it; spawned API tasks report back through
//! [`AppMessage`].
//!
//! Consistency model: create, delete, and the initial load await server
//! confirmation before touching state (store-then-reflect). Completion
//! toggles, edit toggles, and renames mutate state synchronously and let
//! the server call run fire-and-forget; a late failure is logged, not
//! rolled back.

mod handlers;
mod messages;

pub use handlers::handle_key_event;
pub use messages::AppMessage;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::TodoApiClient;
use crate::models::{NewTodo, TodoId, TodoItem};
use crate::store::TodoStore;
use crate::ui::interaction::HitAreaRegistry;

/// Top-level application state.
pub struct App {
    /// The todo list and its change subscriber
    pub store: TodoStore,
    /// Shared API client handle for spawned tasks
    pub api: Arc<TodoApiClient>,
    /// New-todo input buffer
    pub input: String,
    /// Inline-edit draft per todo currently in edit mode
    pub drafts: HashMap<TodoId, String>,
    /// Which inline-edit input has keyboard focus, if any
    pub active_edit: Option<TodoId>,
    /// Blocking error dialog content (the alert), if shown
    pub alert: Option<String>,
    /// Clickable regions registered by the last render
    pub hit_areas: HitAreaRegistry,
    /// Redraw on the next loop iteration
    pub needs_redraw: bool,
    /// Exit the event loop
    pub should_quit: bool,
    /// Sender side of the async message channel
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver side; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl App {
    /// Create the application state around an API client.
    ///
    /// No tasks are spawned here; call [`App::bootstrap`] from inside the
    /// runtime to wire the subscriber and trigger the initial load.
    pub fn new(api: Arc<TodoApiClient>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            store: TodoStore::new(),
            api,
            input: String::new(),
            drafts: HashMap::new(),
            active_edit: None,
            alert: None,
            hit_areas: HitAreaRegistry::new(),
            needs_redraw: true,
            should_quit: false,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Wire the state-change subscriber and trigger the initial load.
    pub fn bootstrap(&mut self) {
        let tx = self.message_tx.clone();
        self.store.subscribe(move |_| {
            let _ = tx.send(AppMessage::StateChanged);
        });
        self.load_todos();
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Ask the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Fetch the whole collection and replace state with it on success.
    pub fn load_todos(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match api.list().await {
                Ok(todos) => {
                    let _ = tx.send(AppMessage::Loaded(todos));
                }
                Err(err) => {
                    tracing::warn!("initial load failed: {}", err);
                }
            }
        });
    }

    /// Submit the new-todo input.
    ///
    /// Blank (trim-empty) input is rejected before any network call. The
    /// input stays as-is until the server confirms; nothing stops a second
    /// submission while the first is in flight.
    pub fn submit_new_todo(&mut self) {
        let title = self.input.trim().to_string();
        if title.is_empty() {
            tracing::debug!("ignoring blank todo submission");
            return;
        }
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match api.create(&NewTodo::new(title)).await {
                Ok(todo) => {
                    let _ = tx.send(AppMessage::Created(todo));
                }
                Err(err) => {
                    let _ = tx.send(AppMessage::CreateFailed(err.to_string()));
                }
            }
        });
    }

    /// Delete a todo after server confirmation.
    pub fn delete_todo(&self, id: &TodoId) {
        let api = Arc::clone(&self.api);
        let tx = self.message_tx.clone();
        let id = id.clone();
        tokio::spawn(async move {
            match api.delete(&id).await {
                Ok(ack) => {
                    tracing::debug!("delete {} acknowledged: {}", id, ack);
                    let _ = tx.send(AppMessage::Deleted(id));
                }
                Err(err) => {
                    tracing::warn!("delete {} failed: {}", id, err);
                }
            }
        });
    }

    /// Flip a todo's completion flag locally and notify the server
    /// fire-and-forget.
    pub fn toggle_complete(&mut self, id: &TodoId) {
        let mut todos = self.store.todos().to_vec();
        if let Some(todo) = todos.iter_mut().find(|t| &t.id == id) {
            let completed = !todo.completed;
            todo.completed = completed;
            self.spawn_set_completed(id.clone(), completed);
        }
        self.store.set_todos(todos);
    }

    /// Flip a todo's inline-edit flag.
    ///
    /// Entering edit mode seeds the draft with the current title and takes
    /// keyboard focus. Leaving edit mode reads the draft, renames
    /// fire-and-forget, and applies the new title locally right away.
    pub fn toggle_edit(&mut self, id: &TodoId) {
        let mut todos = self.store.todos().to_vec();
        if let Some(todo) = todos.iter_mut().find(|t| &t.id == id) {
            let editing = !todo.edit;
            todo.edit = editing;
            self.spawn_set_editing(id.clone(), editing);
            if editing {
                self.drafts
                    .entry(id.clone())
                    .or_insert_with(|| todo.title.clone());
                self.active_edit = Some(id.clone());
            } else {
                let draft = self
                    .drafts
                    .remove(id)
                    .unwrap_or_else(|| todo.title.clone());
                self.spawn_rename(id.clone(), draft.clone());
                todo.title = draft;
                if self.active_edit.as_ref() == Some(id) {
                    self.active_edit = None;
                }
            }
        }
        self.store.set_todos(todos);
    }

    /// Dismiss the blocking error dialog.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.mark_dirty();
    }

    /// Apply a message delivered by the event loop.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::Loaded(todos) => {
                self.store.set_todos(todos);
            }
            AppMessage::Created(todo) => {
                let mut todos = Vec::with_capacity(self.store.todos().len() + 1);
                todos.push(todo);
                todos.extend(self.store.todos().iter().cloned());
                self.store.set_todos(todos);
                self.input.clear();
            }
            AppMessage::CreateFailed(err) => {
                self.alert = Some(format!("add new task failed: {}", err));
                self.mark_dirty();
            }
            AppMessage::Deleted(id) => {
                let todos = self
                    .store
                    .todos()
                    .iter()
                    .filter(|t| t.id != id)
                    .cloned()
                    .collect();
                self.store.set_todos(todos);
            }
            AppMessage::StateChanged => {
                self.mark_dirty();
            }
        }
    }

    fn spawn_set_completed(&self, id: TodoId, completed: bool) {
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            if let Err(err) = api.set_completed(&id, completed).await {
                tracing::warn!("set_completed({}, {}) failed: {}", id, completed, err);
            }
        });
    }

    fn spawn_set_editing(&self, id: TodoId, editing: bool) {
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            if let Err(err) = api.set_editing(&id, editing).await {
                tracing::warn!("set_editing({}, {}) failed: {}", id, editing, err);
            }
        });
    }

    fn spawn_rename(&self, id: TodoId, title: String) {
        let api = Arc::clone(&self.api);
        tokio::spawn(async move {
            if let Err(err) = api.rename(&id, &title).await {
                tracing::warn!("rename({}) failed: {}", id, err);
            }
        });
    }

    /// Current todos sorted for display: descending by id, newest first.
    pub fn sorted_todos(&self) -> Vec<TodoItem> {
        let mut todos = self.store.todos().to_vec();
        todos.sort_by(|a, b| b.id.cmp(&a.id));
        todos
    }
}
