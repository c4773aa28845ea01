//! UI rendering for triagem
//!
//! The screen is a header, a scrollable page and a footer:
//! - Page: the compose form, then the result or error panel below it
//! - Footer: transient notice and key hints
//! - Overlays: busy spinner while submitting, alert dialog after a
//!   rejected submit
//!
//! The page is drawn into an off-screen buffer as tall as its content and
//! the visible window is copied into the frame at the current scroll
//! offset. Rendering also reports the section positions back to
//! [`PageScroll`](crate::domain::PageScroll) so scroll-into-view requests
//! can resolve.

mod compose;
mod helpers;
mod overlay;
mod panels;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER,
    COLOR_SUCCESS,
};

pub use helpers::{centered_rect, wrap_text, SPINNER_FRAMES};
pub use overlay::{ALERT_TITLE, BUSY_TEXT};

use std::time::Instant;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

use crate::app::App;
use crate::domain::SectionAnchors;
use compose::{compose_height, render_compose};
use overlay::{render_alert, render_busy_overlay};
use panels::{error_lines, panel_height, render_panel, result_lines};
use theme::COLOR_NOTICE;

/// Blank rows between page sections.
const SECTION_GAP: u16 = 1;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the whole UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, page, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    render_header(frame, header, app);
    render_page(frame, page, app);
    render_footer(frame, footer, app);

    if app.busy.overlay_visible {
        render_busy_overlay(frame, frame.area(), app.tick_count);
    }
    if let Some(message) = &app.alert {
        render_alert(frame, frame.area(), message);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(
            " triagem",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · classificação de e-mails", Style::default().fg(COLOR_DIM)),
        Span::styled(
            format!("   {}", app.config.base_url),
            Style::default().fg(COLOR_DIM),
        ),
    ]);
    frame.buffer_mut().set_line(area.x, area.y, &line, area.width);
}

/// Lay out the page document: total height and where each section starts.
fn layout_page(app: &App, width: u16) -> (u16, SectionAnchors, Option<Vec<Line<'static>>>) {
    let view = app.panels.view;
    let mut anchors = SectionAnchors::default();
    let mut height = 0u16;

    if view.compose_visible() {
        anchors.compose = Some(height);
        height = height.saturating_add(compose_height(app));
    }

    let panel = if view.result_visible() {
        app.panels.result.as_ref().map(|result| {
            result_lines(result, app.panels.copy_label(Instant::now()), width)
        })
    } else if view.error_visible() {
        app.panels
            .error_message
            .as_deref()
            .map(|message| error_lines(message, width))
    } else {
        None
    };

    if let Some(lines) = &panel {
        if height > 0 {
            height = height.saturating_add(SECTION_GAP);
        }
        if view.result_visible() {
            anchors.result = Some(height);
        } else {
            anchors.error = Some(height);
        }
        height = height.saturating_add(panel_height(lines));
    }

    (height, anchors, panel)
}

fn render_page(frame: &mut Frame, area: Rect, app: &mut App) {
    app.viewport_height = area.height;
    if area.width == 0 || area.height == 0 {
        return;
    }

    let width = area.width;
    let (doc_height, anchors, panel) = layout_page(app, width);
    app.scroll
        .set_layout(doc_height.saturating_sub(area.height), anchors);

    if doc_height == 0 {
        return;
    }

    let mut doc = Buffer::empty(Rect::new(0, 0, width, doc_height));
    if let Some(y) = anchors.compose {
        render_compose(app, Rect::new(0, y, width, compose_height(app)), &mut doc);
    }
    if let Some(lines) = panel {
        let rect_height = panel_height(&lines);
        if let Some(y) = anchors.result {
            render_panel(
                "Resultado da análise",
                COLOR_SUCCESS,
                lines,
                Rect::new(0, y, width, rect_height),
                &mut doc,
            );
        } else if let Some(y) = anchors.error {
            render_panel(
                "Erro",
                COLOR_ERROR,
                lines,
                Rect::new(0, y, width, rect_height),
                &mut doc,
            );
        }
    }

    blit(&doc, app.scroll.offset(), frame.buffer_mut(), area);
}

/// Copy rows `offset..offset + area.height` of `doc` into `area` of `out`.
fn blit(doc: &Buffer, offset: u16, out: &mut Buffer, area: Rect) {
    for row in 0..area.height {
        let doc_y = offset.saturating_add(row);
        if doc_y >= doc.area.height {
            break;
        }
        for col in 0..area.width.min(doc.area.width) {
            let src = doc.cell((col, doc_y)).cloned();
            if let (Some(src), Some(dst)) = (src, out.cell_mut((area.x + col, area.y + row))) {
                *dst = src;
            }
        }
    }
}

/// Key hints for the current state.
pub fn key_hints(app: &App) -> &'static str {
    if app.alert.is_some() {
        " qualquer tecla fecha o aviso"
    } else if app.is_submitting() {
        " aguardando o serviço... · Ctrl+C sair"
    } else if app.panels.view.result_visible() {
        " Ctrl+Y copiar · Esc voltar · Ctrl+L limpar · PgUp/PgDn rolar · Ctrl+C sair"
    } else {
        " Tab modo · Ctrl+S analisar · Ctrl+L limpar · PgUp/PgDn rolar · Ctrl+C sair"
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let buf = frame.buffer_mut();
    if let Some(notice) = &app.notice {
        buf.set_stringn(
            area.x,
            area.y,
            format!(" {}", notice.text),
            area.width as usize,
            Style::default().fg(COLOR_NOTICE),
        );
    }
    if area.height > 1 {
        buf.set_stringn(
            area.x,
            area.y + 1,
            key_hints(app),
            area.width as usize,
            Style::default().fg(COLOR_DIM),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryClipboard, MockHttpClient};
    use crate::app::{SubmissionState, COPIED_LABEL};
    use crate::config::AppConfig;
    use crate::domain::Section;
    use crate::models::AnalysisResult;
    use crate::state::InputMode;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        App::new(
            AppConfig::default(),
            Arc::new(MockHttpClient::new()),
            Arc::new(InMemoryClipboard::new()),
        )
    }

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_compose_text_mode() {
        let mut app = test_app();
        app.form.text.insert_str("Olá");
        let screen = draw(&mut app, 80, 30);
        assert!(screen.contains("▶ Colar texto"));
        assert!(screen.contains("Texto do e-mail"));
        assert!(screen.contains("3 caracteres"));
        assert!(screen.contains("Analisar e-mail"));
    }

    #[test]
    fn test_render_file_mode_placeholder() {
        let mut app = test_app();
        app.set_mode(InputMode::File);
        let screen = draw(&mut app, 80, 30);
        assert!(screen.contains("▶ Enviar arquivo"));
        assert!(screen.contains("Nenhum arquivo selecionado"));
        assert!(!screen.contains("caracteres"));
    }

    #[test]
    fn test_render_result_hides_compose() {
        let mut app = test_app();
        app.show_result(AnalysisResult {
            category: Some("Improdutivo".to_string()),
            suggested_reply: Some("Agradecemos a mensagem.".to_string()),
            ..Default::default()
        });
        let screen = draw(&mut app, 80, 30);
        assert!(screen.contains("Resultado da análise"));
        assert!(screen.contains("Categoria: Improdutivo"));
        assert!(screen.contains("Agradecemos a mensagem."));
        assert!(screen.contains("Copiar resposta"));
        assert!(!screen.contains("Texto do e-mail"));
    }

    #[test]
    fn test_render_copied_label() {
        let mut app = test_app();
        app.show_result(AnalysisResult::default());
        app.panels.copied_at = Some(Instant::now());
        let screen = draw(&mut app, 80, 30);
        assert!(screen.contains(COPIED_LABEL));
    }

    #[test]
    fn test_render_error_below_compose() {
        let mut app = test_app();
        app.show_error("Erro de conexão: recusada");
        let screen = draw(&mut app, 80, 40);
        assert!(screen.contains("Texto do e-mail"));
        assert!(screen.contains("Erro de conexão: recusada"));
    }

    #[test]
    fn test_render_resolves_scroll_into_view() {
        let mut app = test_app();
        app.show_error("falhou");
        assert_eq!(app.scroll.pending(), Some(Section::Error));

        // Viewport too short for compose + error
        draw(&mut app, 80, 12);
        assert_eq!(app.scroll.pending(), None);
        assert!(app.scroll.target() > 0);

        for _ in 0..60 {
            app.tick();
        }
        let screen = draw(&mut app, 80, 12);
        assert!(screen.contains("falhou"));
    }

    #[test]
    fn test_render_busy_overlay() {
        let mut app = test_app();
        app.submission = SubmissionState::Submitting;
        app.busy.engage();
        let screen = draw(&mut app, 80, 30);
        assert!(screen.contains(BUSY_TEXT));
        assert!(screen.contains("Analisando..."));
    }

    #[test]
    fn test_render_alert() {
        let mut app = test_app();
        app.alert = Some("Por favor, selecione um arquivo.".to_string());
        let screen = draw(&mut app, 80, 30);
        assert!(screen.contains("Atenção"));
        assert!(screen.contains("Por favor, selecione um arquivo."));
    }

    #[test]
    fn test_render_notice_in_footer() {
        let mut app = test_app();
        app.set_notice("Arquivo não encontrado: /x");
        let screen = draw(&mut app, 80, 30);
        assert!(screen.contains("Arquivo não encontrado: /x"));
    }

    #[test]
    fn test_render_tiny_terminal_does_not_panic() {
        let mut app = test_app();
        app.show_result(AnalysisResult::default());
        draw(&mut app, 10, 4);
        app.alert = Some("x".to_string());
        draw(&mut app, 3, 3);
    }

    #[test]
    fn test_key_hints_follow_state() {
        let mut app = test_app();
        assert!(key_hints(&app).contains("Ctrl+S"));
        app.show_result(AnalysisResult::default());
        assert!(key_hints(&app).contains("Ctrl+Y"));
    }
}
