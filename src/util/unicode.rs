use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Terminal cells a tab occupies in the entry box
const TAB_WIDTH: usize = 4;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Cut `s` down to `max_cells`, ending in `…` when something was dropped.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let mut budget = max_cells - 1;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = grapheme_width(g);
        if w > budget {
            break;
        }
        budget -= w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Like `truncate_to_width`, but keeps the end of the string instead.
/// Right-aligned labels lose their text, never their number.
pub fn truncate_start_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let mut budget = max_cells - 1;
    let mut kept: Vec<&str> = Vec::new();
    for g in s.graphemes(true).rev() {
        let w = grapheme_width(g);
        if w > budget {
            break;
        }
        budget -= w;
        kept.push(g);
    }
    let mut out = String::from('\u{2026}');
    out.extend(kept.into_iter().rev());
    out
}

/// Byte offset of the grapheme after the one at `byte_offset`.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let rest = s.get(byte_offset..)?;
    let g = rest.graphemes(true).next()?;
    Some(byte_offset + g.len())
}

/// Byte offset of the grapheme before `byte_offset`.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let head = s.get(..byte_offset)?;
    let g = head.graphemes(true).next_back()?;
    Some(byte_offset - g.len())
}

/// Display column of `byte_offset` within a single line.
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

/// Byte offset nearest to `col` without splitting a grapheme.
pub fn display_col_to_byte_offset(s: &str, col: usize) -> usize {
    let mut used = 0;
    for (i, g) in s.grapheme_indices(true) {
        let w = grapheme_width(g);
        if used + w > col {
            return i;
        }
        used += w;
    }
    s.len()
}

fn grapheme_width(g: &str) -> usize {
    if g == "\t" {
        TAB_WIDTH
    } else {
        UnicodeWidthStr::width(g)
    }
}
