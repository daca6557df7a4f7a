//! UI rendering for taskdeck.
//!
//! Layout, top to bottom: header line, new-todo input bar, the two todo
//! panes (pending left, completed right), and a keybind footer. The error
//! dialog floats centered above everything when set.
//!
//! Rendering is full-replacement: every frame rebuilds the whole screen
//! from the current [`App`] state, and the hit-area registry is cleared
//! and repopulated in the same pass.

pub mod dialog;
pub mod input;
pub mod interaction;
pub mod theme;
pub mod todo_list;

use ratatui::{
    layout::{Constraint, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use theme::{COLOR_DIM, COLOR_HEADER};

/// Render one full frame from the current application state.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();

    let [header_area, input_area, lists_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let pending = app.store.todos().iter().filter(|t| !t.completed).count();
    let done = app.store.todos().len() - pending;
    let header = Line::from(vec![
        Span::styled(
            " TASKDECK ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} pending / {} done", pending, done),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), header_area);

    input::render_input_bar(frame, input_area, app);
    todo_list::render_todo_panes(frame, lists_area, app);

    let footer = Line::from(Span::styled(
        " enter: add   click title: toggle   [edit] [del]: item actions   ctrl-c: quit",
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(footer), footer_area);

    if let Some(message) = app.alert.clone() {
        let screen = frame.area();
        dialog::render_alert(frame, screen, app, &message);
    }
}
