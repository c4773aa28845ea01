//! Compose form: mode tabs, the active input, and the submit button.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::app::App;
use crate::state::InputMode;

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};

/// Rows of the email text box, borders included.
pub const TEXT_BOX_HEIGHT: u16 = 12;

/// Rows of the path box, borders included.
const PATH_BOX_HEIGHT: u16 = 3;

/// Height of the compose section for the current mode.
pub fn compose_height(app: &App) -> u16 {
    // border + tabs + gap + ... + gap + submit + border
    let body = match app.form.mode() {
        InputMode::Text => TEXT_BOX_HEIGHT + 1,   // box + counter
        InputMode::File => PATH_BOX_HEIGHT + 2,   // box + filename + hint
    };
    2 + 1 + 1 + body + 1 + 1
}

/// Mode tabs, the selected one marked with `▶`.
pub fn mode_tabs_line(active: InputMode) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (idx, mode) in InputMode::ALL.iter().enumerate() {
        if *mode == active {
            spans.push(Span::styled(
                "▶ ",
                Style::default()
                    .fg(COLOR_ACTIVE)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                mode.label(),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled("  ", Style::default().fg(COLOR_DIM)));
            spans.push(Span::styled(mode.label(), Style::default().fg(COLOR_DIM)));
        }
        if idx + 1 < InputMode::ALL.len() {
            spans.push(Span::raw("    "));
        }
    }
    spans.push(Span::styled("   (Tab alterna)", Style::default().fg(COLOR_DIM)));
    Line::from(spans)
}

/// Submit button, with a spinner while busy.
pub fn submit_line(busy: bool, tick_count: u64) -> Line<'static> {
    if busy {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                format!("[ {} Analisando... ]", spinner_frame(tick_count)),
                Style::default().fg(COLOR_DIM),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                "[ Analisar e-mail ]",
                Style::default()
                    .fg(COLOR_HEADER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Ctrl+S", Style::default().fg(COLOR_DIM)),
        ])
    }
}

/// Render the compose section into `area` of `buf`.
pub fn render_compose(app: &App, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Analisar e-mail ",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.width < 4 || inner.height == 0 {
        return;
    }

    let mut y = inner.y;
    let line_width = inner.width;
    buf.set_line(inner.x, y, &mode_tabs_line(app.form.mode()), line_width);
    y += 2;

    match app.form.mode() {
        InputMode::Text => {
            let box_area = Rect::new(inner.x, y, inner.width, TEXT_BOX_HEIGHT);
            app.form
                .text
                .render_with_title(box_area, buf, " Texto do e-mail ", true);
            y += TEXT_BOX_HEIGHT;

            let counter = format!("{} caracteres ", app.form.char_counter_display());
            let counter_width = counter.chars().count() as u16;
            let x = inner.x + inner.width.saturating_sub(counter_width);
            buf.set_stringn(
                x,
                y,
                &counter,
                inner.width as usize,
                Style::default().fg(COLOR_DIM),
            );
            y += 1;
        }
        InputMode::File => {
            let box_area = Rect::new(inner.x, y, inner.width, PATH_BOX_HEIGHT);
            app.form
                .path_input
                .render_with_title(box_area, buf, " Caminho do arquivo ", true);
            y += PATH_BOX_HEIGHT;

            let file_style = if app.form.file().is_some() {
                Style::default().fg(COLOR_ACCENT)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            let file_line = Line::from(vec![
                Span::styled(" Arquivo: ", Style::default().fg(COLOR_DIM)),
                Span::styled(app.form.file_name_display().to_string(), file_style),
            ]);
            buf.set_line(inner.x, y, &file_line, line_width);
            y += 1;

            buf.set_stringn(
                inner.x,
                y,
                " Enter seleciona · arraste o arquivo para o terminal",
                inner.width as usize,
                Style::default().fg(COLOR_DIM),
            );
            y += 1;
        }
    }

    y += 1;
    if y < inner.y + inner.height {
        buf.set_line(
            inner.x,
            y,
            &submit_line(app.busy.submit_busy, app.tick_count),
            line_width,
        );
    }
}
