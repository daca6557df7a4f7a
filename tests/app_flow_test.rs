//! Coordinator flow tests over the mock transport.
//!
//! These drive the same paths the event loop does: handler call, message
//! from the spawned API task, message applied to the app.

mod common;

use common::{mock_app, todo, BASE_URL};
use bytes::Bytes;
use taskdeck::adapters::MockResponse;
use taskdeck::app::{handle_key_event, AppMessage};
use taskdeck::models::TodoId;
use taskdeck::traits::Response;
use taskdeck::ui::interaction::{handle_click_action, ClickAction};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[tokio::test]
async fn load_replaces_the_entire_state() {
    let (mut app, mock) = mock_app();
    mock.set_response(
        "GET",
        &format!("{}/todos", BASE_URL),
        MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"[{"id":1,"title":"work","completed":false,"edit":false}]"#),
        )),
    );

    app.bootstrap();
    let mut rx = app.message_rx.take().unwrap();

    let message = rx.recv().await.unwrap();
    assert!(matches!(message, AppMessage::Loaded(_)));
    app.handle_message(message);

    assert_eq!(app.store.todos().len(), 1);
    assert_eq!(app.store.todos()[0].title, "work");
}

#[tokio::test]
async fn create_prepends_after_server_confirmation_and_clears_the_input() {
    let (mut app, mock) = mock_app();
    app.store.set_todos(vec![todo(1, "work", false)]);
    mock.set_response(
        "POST",
        &format!("{}/todos", BASE_URL),
        MockResponse::Success(Response::new(
            201,
            Bytes::from(r#"{"id":2,"title":"gym","completed":false,"edit":false}"#),
        )),
    );
    let mut rx = app.message_rx.take().unwrap();

    app.input = "gym".to_string();
    app.submit_new_todo();

    // State is untouched until the confirmation arrives
    assert_eq!(app.store.todos().len(), 1);
    assert_eq!(app.input, "gym");

    let message = rx.recv().await.unwrap();
    assert!(matches!(message, AppMessage::Created(_)));
    app.handle_message(message);

    assert_eq!(app.store.todos().len(), 2);
    assert_eq!(app.store.todos()[0].title, "gym");
    assert!(app.input.is_empty());
}

#[tokio::test]
async fn failed_create_raises_the_alert_and_leaves_state_alone() {
    let (mut app, mock) = mock_app();
    app.store.set_todos(vec![todo(1, "work", false)]);
    mock.set_response(
        "POST",
        &format!("{}/todos", BASE_URL),
        MockResponse::Success(Response::new(500, Bytes::from("internal error"))),
    );
    let mut rx = app.message_rx.take().unwrap();

    app.input = "gym".to_string();
    app.submit_new_todo();

    let message = rx.recv().await.unwrap();
    assert!(matches!(message, AppMessage::CreateFailed(_)));
    app.handle_message(message);

    assert!(app
        .alert
        .as_deref()
        .unwrap()
        .starts_with("add new task failed:"));
    assert_eq!(app.store.todos().len(), 1);
    assert_eq!(app.input, "gym");
}

#[tokio::test]
async fn blank_input_submits_nothing() {
    let (mut app, mock) = mock_app();

    app.input = "   ".to_string();
    handle_key_event(&mut app, key(KeyCode::Enter));

    assert_eq!(mock.request_count(), 0);
    assert!(app.store.todos().is_empty());
    // The blank input is not cleared either; nothing happened
    assert_eq!(app.input, "   ");
}

#[tokio::test]
async fn delete_removes_exactly_the_loosely_matching_item() {
    let (mut app, mock) = mock_app();
    app.store
        .set_todos(vec![todo(7, "seven", false), todo(8, "eight", false)]);
    mock.set_response(
        "DELETE",
        &format!("{}/todos/7", BASE_URL),
        MockResponse::Success(Response::new(200, Bytes::from("{}"))),
    );
    let mut rx = app.message_rx.take().unwrap();

    // The id arrives in string form, as a rendered element id would
    app.delete_todo(&TodoId::from("7"));

    let message = rx.recv().await.unwrap();
    assert_eq!(message, AppMessage::Deleted(TodoId::from("7")));
    app.handle_message(message);

    assert_eq!(app.store.todos().len(), 1);
    assert_eq!(app.store.todos()[0].title, "eight");
}

#[tokio::test]
async fn edit_scenario_end_to_end() {
    // Load one pending todo, edit it through the click + key paths, and
    // verify the rename lands locally without waiting for the server.
    let (mut app, mock) = mock_app();
    mock.set_response(
        "GET",
        &format!("{}/todos", BASE_URL),
        MockResponse::Success(Response::new(
            200,
            Bytes::from(r#"[{"id":1,"title":"work","completed":false,"edit":false}]"#),
        )),
    );
    // Fire-and-forget PATCHes get a generic success
    mock.set_default_response(MockResponse::Success(Response::new(
        200,
        Bytes::from(r#"{"id":1,"title":"work","completed":false,"edit":false}"#),
    )));

    app.bootstrap();
    let mut rx = app.message_rx.take().unwrap();
    let loaded = rx.recv().await.unwrap();
    app.handle_message(loaded);

    // Click [edit]: the inline input appears pre-filled with "work"
    handle_click_action(&mut app, ClickAction::ToggleEdit(TodoId::Int(1)));
    assert!(app.store.todos()[0].edit);
    assert_eq!(
        app.drafts.get(&TodoId::Int(1)).map(String::as_str),
        Some("work")
    );

    // Retype the draft as "gym"
    for _ in 0..4 {
        handle_key_event(&mut app, key(KeyCode::Backspace));
    }
    for c in ['g', 'y', 'm'] {
        handle_key_event(&mut app, key(KeyCode::Char(c)));
    }

    // Click [edit] again: edit mode ends and the title updates immediately
    handle_click_action(&mut app, ClickAction::ToggleEdit(TodoId::Int(1)));

    let todos = app.store.todos();
    assert_eq!(todos[0].title, "gym");
    assert!(!todos[0].edit);
    assert!(app.drafts.is_empty());
}
