//! Key, paste, tick and message handling for the App.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::state::InputMode;

use super::{App, AppMessage};

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::SubmissionFinished { outcome } => self.complete_submission(outcome),
        }
    }

    /// Advance animations and expire timed state.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub(crate) fn tick_at(&mut self, now: Instant) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.scroll.tick() {
            self.mark_dirty();
        }
        if self.panels.expire_copy_confirmation(now) {
            self.mark_dirty();
        }
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
            self.mark_dirty();
        }
        // Spinner frame
        if self.busy.overlay_visible && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    /// Handle a key press.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            self.quit();
            return;
        }

        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        if self.is_submitting() {
            debug!(code = ?key.code, "Key swallowed while submitting");
            return;
        }

        let compose_visible = self.panels.view.compose_visible();

        if ctrl {
            match key.code {
                // The form is hidden under the result panel
                KeyCode::Char('s' | 't' | 'f') if !compose_visible => {
                    debug!(code = ?key.code, "Form key ignored outside the form");
                }
                KeyCode::Char('s') => {
                    // Rejections are already surfaced by on_submit
                    let _ = self.on_submit();
                }
                KeyCode::Char('t') => self.set_mode(InputMode::Text),
                KeyCode::Char('f') => self.set_mode(InputMode::File),
                KeyCode::Char('y') => self.copy_response(),
                KeyCode::Char('b') => self.back_to_form(),
                KeyCode::Char('l') => self.clear_form(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.back_to_form(),
            KeyCode::Tab | KeyCode::BackTab => {
                if compose_visible {
                    self.toggle_mode();
                }
            }
            KeyCode::PageUp => self.scroll_pages(-1),
            KeyCode::PageDown => self.scroll_pages(1),
            _ if compose_visible => self.handle_editing_key(key),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        let mode = self.form.mode();
        if mode == InputMode::File && key.code == KeyCode::Enter {
            self.select_file();
            return;
        }

        let input = match mode {
            InputMode::Text => &mut self.form.text,
            InputMode::File => &mut self.form.path_input,
        };
        let handled = match key.code {
            KeyCode::Char(c) => {
                input.insert_char(c);
                true
            }
            KeyCode::Enter => {
                input.insert_newline();
                true
            }
            KeyCode::Backspace => {
                input.backspace();
                true
            }
            KeyCode::Delete => {
                input.delete_char();
                true
            }
            KeyCode::Left => {
                input.move_cursor_left();
                true
            }
            KeyCode::Right => {
                input.move_cursor_right();
                true
            }
            KeyCode::Up => {
                input.move_cursor_up();
                true
            }
            KeyCode::Down => {
                input.move_cursor_down();
                true
            }
            KeyCode::Home => {
                input.move_cursor_home();
                true
            }
            KeyCode::End => {
                input.move_cursor_end();
                true
            }
            _ => false,
        };
        if handled {
            self.mark_dirty();
        }
    }

    /// Handle bracketed paste.
    ///
    /// In file mode the pasted text replaces the path and is selected right
    /// away, which is what dropping a file on the terminal produces.
    pub fn handle_paste(&mut self, text: &str) {
        if self.alert.is_some() || self.is_submitting() || !self.panels.view.compose_visible() {
            return;
        }
        match self.form.mode() {
            InputMode::Text => {
                self.form.text.insert_str(text);
                self.mark_dirty();
            }
            InputMode::File => {
                self.form.path_input.set_content(text.trim().to_string());
                self.select_file();
            }
        }
    }
}
