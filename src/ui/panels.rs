//! Result and error panels.
//!
//! Both are built as pre-wrapped lines so their height is known before
//! the page is laid out.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::app::COPIED_LABEL;
use crate::models::AnalysisResult;

use super::helpers::wrap_text;
use super::theme::{
    COLOR_ACCENT, COLOR_CONFIRM, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_SUCCESS,
};

/// Columns taken by borders and side padding.
const CHROME_WIDTH: u16 = 4;

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, text: &str, width: usize, style: Style) {
    lines.extend(
        wrap_text(text, width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, style))),
    );
}

/// Body lines of the result panel for a panel `width` columns wide.
pub fn result_lines(result: &AnalysisResult, copy_label: &str, width: u16) -> Vec<Line<'static>> {
    let text_width = width.saturating_sub(CHROME_WIDTH) as usize;
    let body = Style::default().fg(COLOR_ACCENT);
    let mut lines = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Categoria: ", Style::default().fg(COLOR_DIM)),
        Span::styled(
            result.category_text().to_string(),
            Style::default()
                .fg(COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    if let Some(confidence) = &result.confidence {
        lines.push(Line::from(vec![
            Span::styled("Confiança: ", Style::default().fg(COLOR_DIM)),
            Span::styled(confidence.clone(), body),
        ]));
    }

    lines.push(Line::default());
    lines.push(heading("Resposta sugerida"));
    push_wrapped(&mut lines, result.reply_text(), text_width, body);

    if !result.suggested_actions.is_empty() {
        lines.push(Line::default());
        lines.push(heading("Ações sugeridas"));
        for action in &result.suggested_actions {
            push_wrapped(&mut lines, &format!("• {}", action), text_width, body);
        }
    }

    if let Some(reasoning) = &result.reasoning {
        lines.push(Line::default());
        lines.push(heading("Justificativa"));
        push_wrapped(&mut lines, reasoning, text_width, body);
    }

    let provenance: Vec<String> = [
        result.method.as_ref().map(|m| format!("Método: {}", m)),
        result.generated_by.as_ref().map(|g| format!("Gerado por: {}", g)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !provenance.is_empty() {
        lines.push(Line::default());
        push_wrapped(
            &mut lines,
            &provenance.join(" · "),
            text_width,
            Style::default().fg(COLOR_DIM),
        );
    }

    lines.push(Line::default());
    let label_style = if copy_label == COPIED_LABEL {
        Style::default()
            .fg(COLOR_CONFIRM)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD)
    };
    lines.push(Line::from(vec![
        Span::styled(format!("[ {} ]", copy_label), label_style),
        Span::styled("  Ctrl+Y", Style::default().fg(COLOR_DIM)),
    ]));
    lines.push(Line::from(Span::styled(
        "Esc voltar ao formulário · Ctrl+L nova análise",
        Style::default().fg(COLOR_DIM),
    )));

    lines
}

/// Body lines of the error panel.
pub fn error_lines(message: &str, width: u16) -> Vec<Line<'static>> {
    let text_width = width.saturating_sub(CHROME_WIDTH) as usize;
    let mut lines = Vec::new();
    push_wrapped(
        &mut lines,
        message,
        text_width,
        Style::default().fg(COLOR_ERROR),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Esc fechar · Ctrl+S tentar novamente",
        Style::default().fg(COLOR_DIM),
    )));
    lines
}

/// Height of a panel holding `lines`, borders included.
pub fn panel_height(lines: &[Line]) -> u16 {
    u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2)
}

/// Draw a bordered panel with `lines` as its body.
pub fn render_panel(
    title: &str,
    border: ratatui::style::Color,
    lines: Vec<Line<'static>>,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        ))
        .padding(ratatui::widgets::Padding::horizontal(1));
    Paragraph::new(lines).block(block).render(area, buf);
}
