//! Blocking error dialog, centered over the rest of the screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::interaction::ClickAction;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_ERROR};

const DIALOG_HEIGHT: u16 = 5;
const MAX_WIDTH: u16 = 50;

/// Render the centered error dialog over everything else.
pub fn render_alert(frame: &mut Frame, screen: Rect, app: &mut App, message: &str) {
    let width = MAX_WIDTH.min(screen.width.saturating_sub(4)).max(10);
    let height = DIALOG_HEIGHT.min(screen.height);
    let area = Rect::new(
        screen.x + (screen.width.saturating_sub(width)) / 2,
        screen.y + (screen.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ERROR))
        .title(" ERROR ");

    let content = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(COLOR_ACCENT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press enter to dismiss",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )),
    ];

    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: true }).block(block),
        area,
    );

    app.hit_areas.register(area, ClickAction::DismissAlert);
}
