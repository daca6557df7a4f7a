//! New-todo input bar.

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

const PLACEHOLDER: &str = "what needs doing?";

/// Render the input bar and place the terminal cursor when it has focus.
pub fn render_input_bar(frame: &mut Frame, area: Rect, app: &mut App) {
    let focused = app.active_edit.is_none() && app.alert.is_none();

    let border_style = if focused {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER)
    };

    let content = if app.input.is_empty() {
        Line::from(Span::styled(PLACEHOLDER, Style::default().fg(COLOR_DIM)))
    } else {
        Line::from(Span::styled(
            app.input.clone(),
            Style::default().fg(COLOR_ACCENT),
        ))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(" NEW TASK ");

    frame.render_widget(Paragraph::new(content).block(block), area);

    if focused && area.width > 2 && area.height > 2 {
        let cursor_x = area.x + 1 + (app.input.width() as u16).min(area.width - 2);
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }

    app.hit_areas
        .register(area, ClickAction::FocusNewTodoInput);
}
