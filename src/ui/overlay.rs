//! Modal layers drawn on top of the page.
//!
//! Ratatui renders in call order, so these run last: first the busy overlay,
//! then the alert, which can only appear while idle.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
    Frame,
};

use super::helpers::{centered_rect, spinner_frame, wrap_text};
use super::theme::{
    COLOR_ACTIVE, COLOR_BORDER, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER, COLOR_NOTICE,
};

/// Text of the busy overlay.
pub const BUSY_TEXT: &str = "Analisando e-mail...";

/// Title of the alert dialog.
pub const ALERT_TITLE: &str = " Atenção ";

fn dialog_block(title: &str, border: ratatui::style::Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(COLOR_DIALOG_BG))
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
}

/// Blocking overlay with a spinner.
pub fn render_busy_overlay(frame: &mut Frame, area: Rect, tick_count: u64) {
    let dialog = centered_rect(area, 32, 5);
    frame.render_widget(Clear, dialog);

    let text = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame(tick_count)),
                Style::default().fg(COLOR_ACTIVE),
            ),
            Span::styled(BUSY_TEXT, Style::default().fg(COLOR_HEADER)),
        ]),
    ];
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(dialog_block("", COLOR_BORDER))
        .render(dialog, frame.buffer_mut());
}

/// Blocking alert; any key dismisses it.
pub fn render_alert(frame: &mut Frame, area: Rect, message: &str) {
    let width = 48.min(area.width.saturating_sub(4)).max(20);
    let body_lines = wrap_text(message, width.saturating_sub(4) as usize).len() as u16;
    let dialog = centered_rect(area, width, body_lines + 5);
    frame.render_widget(Clear, dialog);

    let text = vec![
        Line::default(),
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(COLOR_HEADER),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Pressione qualquer tecla",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(dialog_block(ALERT_TITLE, COLOR_NOTICE))
        .render(dialog, frame.buffer_mut());
}
