use crate::util::unicode::{
    byte_offset_to_display_col, display_col_to_byte_offset, next_grapheme_boundary,
    prev_grapheme_boundary,
};

/// Multi-line text entry: the buffer a batch is submitted from
#[derive(Debug, Clone, Default)]
pub struct EntryState {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a grapheme boundary
    pub cursor: usize,
    /// First visible line
    pub scroll: usize,
    /// First visible display column
    pub hscroll: usize,
    /// Column to aim for when moving between lines of different width
    sticky_col: Option<usize>,
}

impl EntryState {
    pub fn clear(&mut self) {
        *self = EntryState::default();
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.sticky_col = None;
    }

    /// Insert pasted text, normalizing line endings
    pub fn insert_str(&mut self, text: &str) {
        let clean = text.replace("\r\n", "\n").replace('\r', "\n");
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
        self.sticky_col = None;
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
        self.sticky_col = None;
    }

    pub fn delete(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
        self.sticky_col = None;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
        self.sticky_col = None;
    }

    pub fn move_right(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
        self.sticky_col = None;
    }

    pub fn move_home(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.line_start(line);
        self.sticky_col = None;
    }

    pub fn move_end(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.line_start(line) + self.line(line).len();
        self.sticky_col = None;
    }

    pub fn move_up(&mut self) {
        let (line, _) = self.cursor_line_col();
        if line > 0 {
            self.move_to_line(line - 1);
        }
    }

    pub fn move_down(&mut self) {
        let (line, _) = self.cursor_line_col();
        if line + 1 < self.line_count() {
            self.move_to_line(line + 1);
        }
    }

    /// Put the cursor at a (line, display column), clamped to the text
    pub fn move_to(&mut self, line: usize, col: usize) {
        let line = line.min(self.line_count() - 1);
        self.cursor = self.line_start(line) + display_col_to_byte_offset(self.line(line), col);
        self.sticky_col = None;
    }

    pub fn line_count(&self) -> usize {
        self.buffer.split('\n').count()
    }

    /// (line index, display column) of the cursor
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.buffer[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (line, byte_offset_to_display_col(&before[line_start..], before.len() - line_start))
    }

    /// Keep the cursor line within a window of `height` lines
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        let (line, _) = self.cursor_line_col();
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }

    /// Keep the cursor column within a window of `width` columns
    pub fn scroll_to_cursor_col(&mut self, width: usize) {
        if width == 0 {
            return;
        }
        let (_, col) = self.cursor_line_col();
        if col < self.hscroll {
            self.hscroll = col;
        } else if col >= self.hscroll + width {
            self.hscroll = col + 1 - width;
        }
    }

    fn move_to_line(&mut self, target: usize) {
        let (_, col) = self.cursor_line_col();
        let col = *self.sticky_col.get_or_insert(col);
        let line = self.line(target);
        self.cursor = self.line_start(target) + display_col_to_byte_offset(line, col);
    }

    fn line(&self, index: usize) -> &str {
        self.buffer.split('\n').nth(index).unwrap_or("")
    }

    fn line_start(&self, index: usize) -> usize {
        self.buffer
            .split('\n')
            .take(index)
            .map(|l| l.len() + 1)
            .sum()
    }
}
