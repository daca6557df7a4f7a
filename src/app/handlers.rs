//! Keyboard handling.
//!
//! Routing: while the error dialog is up it swallows everything except
//! its dismiss keys; otherwise keystrokes go to the focused inline-edit
//! draft when one is active, and to the new-todo input bar the rest of
//! the time.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;

/// Apply a key press to the application state.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Global keybinds, active even under the alert
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // The alert is modal: nothing else reacts until it is dismissed
    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return;
    }

    if let Some(id) = app.active_edit.clone() {
        match key.code {
            // Finishing the edit takes the same path as an [edit] click
            KeyCode::Enter => app.toggle_edit(&id),
            // Drop focus without leaving edit mode
            KeyCode::Esc => app.active_edit = None,
            KeyCode::Backspace => {
                if let Some(draft) = app.drafts.get_mut(&id) {
                    draft.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(draft) = app.drafts.get_mut(&id) {
                    draft.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit_new_todo(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::api::TodoApiClient;
    use crate::models::{TodoId, TodoItem};
    use std::sync::Arc;

    fn test_app() -> App {
        let api = Arc::new(TodoApiClient::with_http(
            "http://localhost:3000",
            Arc::new(MockHttpClient::new()),
        ));
        App::new(api)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_goes_to_the_input_bar() {
        let mut app = test_app();
        handle_key_event(&mut app, key(KeyCode::Char('g')));
        handle_key_event(&mut app, key(KeyCode::Char('y')));
        handle_key_event(&mut app, key(KeyCode::Char('m')));
        assert_eq!(app.input, "gym");

        handle_key_event(&mut app, key(KeyCode::Backspace));
        assert_eq!(app.input, "gy");
    }

    #[test]
    fn typing_goes_to_the_focused_draft_when_editing() {
        let mut app = test_app();
        app.drafts.insert(TodoId::Int(1), "work".to_string());
        app.active_edit = Some(TodoId::Int(1));

        handle_key_event(&mut app, key(KeyCode::Backspace));
        handle_key_event(&mut app, key(KeyCode::Char('m')));

        assert_eq!(app.drafts.get(&TodoId::Int(1)).map(String::as_str), Some("worm"));
        assert!(app.input.is_empty());
    }

    #[test]
    fn escape_drops_edit_focus_but_keeps_the_draft() {
        let mut app = test_app();
        app.drafts.insert(TodoId::Int(1), "work".to_string());
        app.active_edit = Some(TodoId::Int(1));

        handle_key_event(&mut app, key(KeyCode::Esc));

        assert!(app.active_edit.is_none());
        assert!(app.drafts.contains_key(&TodoId::Int(1)));
    }

    #[tokio::test]
    async fn enter_finishes_the_focused_edit() {
        let mut app = test_app();
        app.store.set_todos(vec![TodoItem {
            id: TodoId::Int(1),
            title: "work".to_string(),
            completed: false,
            edit: true,
        }]);
        app.drafts.insert(TodoId::Int(1), "gym".to_string());
        app.active_edit = Some(TodoId::Int(1));

        handle_key_event(&mut app, key(KeyCode::Enter));

        assert_eq!(app.store.todos()[0].title, "gym");
        assert!(!app.store.todos()[0].edit);
    }

    #[test]
    fn alert_swallows_keys_until_dismissed() {
        let mut app = test_app();
        app.alert = Some("add new task failed: boom".to_string());
        app.input = "kept".to_string();

        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.input, "kept");
        assert!(app.alert.is_some());

        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.alert.is_none());
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = test_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
