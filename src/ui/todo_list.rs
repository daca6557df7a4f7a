//! Pending/completed todo panes.
//!
//! Both panes are rebuilt from scratch on every render: the todos are
//! sorted descending by id, partitioned by completion, and laid out one
//! row per item with its action buttons. Hit areas are registered for
//! every interactive span while the rows are built, so the click targets
//! always match what is on screen.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::models::TodoItem;
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{
    COLOR_BORDER, COLOR_BUTTON, COLOR_DIM, COLOR_DONE, COLOR_EDIT, COLOR_PENDING,
};

/// Shown in the pending pane when nothing is left to do.
pub const NO_PENDING_PLACEHOLDER: &str = "no pending tasks";

const EDIT_BUTTON: &str = "[edit]";
const DELETE_BUTTON: &str = "[del]";

/// Render both panes side by side.
pub fn render_todo_panes(frame: &mut Frame, area: Rect, app: &mut App) {
    let [pending_area, completed_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

    let sorted = app.sorted_todos();
    let (completed, pending): (Vec<TodoItem>, Vec<TodoItem>) =
        sorted.into_iter().partition(|t| t.completed);

    render_pane(frame, pending_area, app, " PENDING ", &pending, true);
    render_pane(frame, completed_area, app, " COMPLETED ", &completed, false);
}

fn render_pane(
    frame: &mut Frame,
    area: Rect,
    app: &mut App,
    title: &str,
    todos: &[TodoItem],
    is_pending_pane: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if todos.is_empty() {
        if is_pending_pane {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                NO_PENDING_PLACEHOLDER,
                Style::default()
                    .fg(COLOR_DIM)
                    .add_modifier(Modifier::ITALIC),
            )));
            frame.render_widget(placeholder, inner);
        }
        return;
    }

    let mut lines = Vec::with_capacity(todos.len());
    for (row, todo) in todos.iter().enumerate() {
        // Rows past the bottom of the pane are clipped, not scrolled
        if row as u16 >= inner.height {
            break;
        }
        let y = inner.y + row as u16;
        lines.push(build_row(app, todo, inner, y));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Build one item row and register its hit areas.
fn build_row<'a>(app: &mut App, todo: &TodoItem, inner: Rect, y: u16) -> Line<'a> {
    let mut spans = Vec::with_capacity(5);
    let mut x = inner.x;
    let right_edge = inner.x + inner.width;

    if todo.edit {
        // Inline edit input, pre-filled with the current draft
        let draft = app
            .drafts
            .get(&todo.id)
            .cloned()
            .unwrap_or_else(|| todo.title.clone());
        let focused = app.active_edit.as_ref() == Some(&todo.id);
        let mut style = Style::default()
            .fg(COLOR_EDIT)
            .add_modifier(Modifier::UNDERLINED);
        if focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        let width = (draft.width().max(1) as u16).min(right_edge.saturating_sub(x));
        if width > 0 {
            app.hit_areas.register(
                Rect::new(x, y, width, 1),
                ClickAction::FocusEditInput(todo.id.clone()),
            );
        }
        x = x.saturating_add(draft.width() as u16);
        spans.push(Span::styled(draft, style));
    } else {
        // Title span; clicking it toggles completion
        let style = if todo.completed {
            Style::default()
                .fg(COLOR_DONE)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(COLOR_PENDING)
        };
        let width = (todo.title.width() as u16).min(right_edge.saturating_sub(x));
        if width > 0 {
            app.hit_areas.register(
                Rect::new(x, y, width, 1),
                ClickAction::ToggleComplete(todo.id.clone()),
            );
        }
        x = x.saturating_add(todo.title.width() as u16);
        spans.push(Span::styled(todo.title.clone(), style));
    }

    spans.push(Span::raw("  "));
    x = x.saturating_add(2);

    let button_style = Style::default().fg(COLOR_BUTTON);

    if x < right_edge {
        let width = (EDIT_BUTTON.len() as u16).min(right_edge - x);
        app.hit_areas.register(
            Rect::new(x, y, width, 1),
            ClickAction::ToggleEdit(todo.id.clone()),
        );
    }
    x = x.saturating_add(EDIT_BUTTON.len() as u16);
    spans.push(Span::styled(EDIT_BUTTON, button_style));

    spans.push(Span::raw(" "));
    x = x.saturating_add(1);

    if x < right_edge {
        let width = (DELETE_BUTTON.len() as u16).min(right_edge - x);
        app.hit_areas.register(
            Rect::new(x, y, width, 1),
            ClickAction::Delete(todo.id.clone()),
        );
    }
    spans.push(Span::styled(DELETE_BUTTON, button_style));

    Line::from(spans)
}
