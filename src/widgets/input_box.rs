use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

/// A text input widget with cursor handling and scrolling support.
///
/// Cursor positions are character indices, not byte offsets, so accented
/// text edits correctly. In multi-line mode `Enter` inserts a newline and
/// the view scrolls vertically to keep the cursor row visible; long lines
/// scroll horizontally in both modes.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// The text content of the input box
    content: String,
    /// Current cursor position (character index)
    cursor_position: usize,
    /// Whether newlines are accepted
    multiline: bool,
    /// Dim text shown while empty
    placeholder: Option<String>,
}

impl InputBox {
    /// Create a new empty single-line InputBox
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty InputBox that accepts newlines
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Set the dim text shown while the box is empty
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the current cursor position.
    ///
    /// Newlines are dropped in single-line mode; carriage returns always are.
    pub fn insert_char(&mut self, c: char) {
        if c == '\r' || (c == '\n' && !self.multiline) {
            return;
        }
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Insert pasted text at the cursor.
    ///
    /// CRLF is normalised to LF; single-line boxes turn newlines into spaces.
    pub fn insert_str(&mut self, text: &str) {
        let mut normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        if !self.multiline {
            normalized = normalized.replace('\n', " ");
        }
        let at = self.byte_index(self.cursor_position);
        self.content.insert_str(at, &normalized);
        self.cursor_position += normalized.chars().count();
    }

    /// Insert a line break (no-op in single-line mode)
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character at the current cursor position (like Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.char_count() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character before the cursor (like Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Move cursor one position to the left
    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor one position to the right
    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.char_count() {
            self.cursor_position += 1;
        }
    }

    /// Move cursor to the beginning of the current line
    pub fn move_cursor_home(&mut self) {
        let (_, col) = self.cursor_row_col();
        self.cursor_position -= col;
    }

    /// Move cursor to the end of the current line
    pub fn move_cursor_end(&mut self) {
        let (row, col) = self.cursor_row_col();
        let line_len = self.line_lengths()[row];
        self.cursor_position += line_len - col;
    }

    /// Move cursor to the previous line, keeping the column where possible
    pub fn move_cursor_up(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row > 0 {
            self.move_to(row - 1, col);
        }
    }

    /// Move cursor to the next line, keeping the column where possible
    pub fn move_cursor_down(&mut self) {
        let (row, col) = self.cursor_row_col();
        if row + 1 < self.line_lengths().len() {
            self.move_to(row + 1, col);
        }
    }

    fn move_to(&mut self, row: usize, col: usize) {
        let lengths = self.line_lengths();
        // Each preceding line contributes its characters plus the newline.
        let line_start: usize = lengths[..row].iter().map(|len| len + 1).sum();
        self.cursor_position = line_start + col.min(lengths[row]);
    }

    /// Length in characters of every line
    fn line_lengths(&self) -> Vec<usize> {
        self.content.split('\n').map(|line| line.chars().count()).collect()
    }

    /// Cursor position as (line, column), both in characters
    pub fn cursor_row_col(&self) -> (usize, usize) {
        let mut row = 0;
        let mut col = 0;
        for c in self.content.chars().take(self.cursor_position) {
            if c == '\n' {
                row += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (row, col)
    }

    /// Get the current text content
    pub fn get_content(&self) -> &str {
        &self.content
    }

    /// Get the current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Set the text content and move the cursor to the end
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.cursor_position = self.char_count();
    }

    /// Clear all content and reset cursor
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    /// Check if the input box is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of characters in the content
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Render the input box with the given title
    pub fn render_with_title(&self, area: Rect, buf: &mut Buffer, title: &str, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title.to_string());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.content.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                buf.set_stringn(
                    inner.x,
                    inner.y,
                    placeholder,
                    inner.width as usize,
                    Style::default().fg(Color::DarkGray),
                );
            }
            if !focused {
                return;
            }
        }

        let (cursor_row, cursor_col) = self.cursor_row_col();
        let height = inner.height as usize;
        let width = inner.width as usize;

        // Keep the cursor inside the visible window.
        let first_row = (cursor_row + 1).saturating_sub(height);
        let first_col = (cursor_col + 1).saturating_sub(width);

        let text_style = Style::default().fg(Color::White);
        for (screen_row, line) in self
            .content
            .split('\n')
            .skip(first_row)
            .take(height)
            .enumerate()
        {
            let y = inner.y + screen_row as u16;
            let mut x = inner.x;
            for c in line.chars().skip(first_col) {
                let w = c.width().unwrap_or(0) as u16;
                if x + w > inner.x + inner.width {
                    break;
                }
                buf.set_string(x, y, c.to_string(), text_style);
                x += w;
            }
        }

        if focused {
            let line = self.content.split('\n').nth(cursor_row).unwrap_or("");
            let offset: u16 = line
                .chars()
                .skip(first_col)
                .take(cursor_col - first_col)
                .map(|c| c.width().unwrap_or(0) as u16)
                .sum();
            let x = inner.x + offset;
            let y = inner.y + (cursor_row - first_row) as u16;
            if x < inner.x + inner.width && y < inner.y + inner.height {
                let cursor_char = line.chars().nth(cursor_col).unwrap_or(' ');
                let cursor_style = Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD);
                buf.set_string(x, y, cursor_char.to_string(), cursor_style);
            }
        }
    }
}
