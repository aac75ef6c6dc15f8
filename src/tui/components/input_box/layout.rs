//! Visual row layout for the notes editor.
//!
//! Text is hard-wrapped at the display width (no word breaking) so that
//! every byte offset maps to exactly one (row, column) pair. That keeps
//! cursor placement and vertical movement simple and exact.

use unicode_width::UnicodeWidthChar;

/// One visual row: the byte range `[start, end)` of the buffer it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Row {
    pub start: usize,
    pub end: usize,
    /// True for the last row of a logical (newline-terminated) line.
    pub line_end: bool,
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Splits `text` into rows no wider than `width` columns.
/// Always returns at least one row.
pub(super) fn rows(text: &str, width: u16) -> Vec<Row> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut line_start = 0;

    for line in text.split('\n') {
        let mut row_start = line_start;
        let mut used = 0;
        for (offset, c) in line.char_indices() {
            let w = char_width(c);
            if used + w > width && used > 0 {
                rows.push(Row {
                    start: row_start,
                    end: line_start + offset,
                    line_end: false,
                });
                row_start = line_start + offset;
                used = 0;
            }
            used += w;
        }
        let line_stop = line_start + line.len();
        rows.push(Row {
            start: row_start,
            end: line_stop,
            line_end: true,
        });
        line_start = line_stop + 1;
    }

    rows
}

/// Row index and display column of byte offset `pos`.
pub(super) fn locate(text: &str, rows: &[Row], pos: usize) -> (usize, u16) {
    for (index, row) in rows.iter().enumerate() {
        let inside = pos >= row.start && (pos < row.end || (pos == row.end && row.line_end));
        if inside {
            let col: usize = text[row.start..pos].chars().map(char_width).sum();
            return (index, u16::try_from(col).unwrap_or(u16::MAX));
        }
    }
    let last = rows.len().saturating_sub(1);
    (last, 0)
}

/// Byte offset in `row` closest to display column `col` without passing it.
pub(super) fn offset_at(text: &str, row: Row, col: u16) -> usize {
    let mut used = 0usize;
    for (offset, c) in text[row.start..row.end].char_indices() {
        let w = char_width(c);
        if used + w > usize::from(col) {
            return row.start + offset;
        }
        used += w;
    }
    // A wrapped (non-final) row ends where the next row starts; stay on this row.
    if row.line_end || row.end == row.start {
        row.end
    } else {
        super::prev_char_boundary(text, row.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_one_row() {
        assert_eq!(rows("", 10), vec![Row { start: 0, end: 0, line_end: true }]);
    }

    #[test]
    fn test_hard_wrap_at_width() {
        let r = rows("abcdefghij", 4);
        assert_eq!(r.len(), 3);
        assert_eq!((r[0].start, r[0].end, r[0].line_end), (0, 4, false));
        assert_eq!((r[2].start, r[2].end, r[2].line_end), (8, 10, true));
    }

    #[test]
    fn test_newlines_start_new_rows() {
        let r = rows("ab\n\ncd", 10);
        assert_eq!(r.len(), 3);
        assert_eq!((r[1].start, r[1].end), (3, 3));
        assert_eq!((r[2].start, r[2].end), (4, 6));
    }

    #[test]
    fn test_trailing_newline_adds_empty_row() {
        assert_eq!(rows("ab\n", 10).len(), 2);
    }

    #[test]
    fn test_locate_end_of_wrapped_row_moves_to_next_row() {
        let text = "abcdefgh";
        let r = rows(text, 4);
        assert_eq!(locate(text, &r, 4), (1, 0));
        assert_eq!(locate(text, &r, 8), (1, 4));
    }

    #[test]
    fn test_locate_counts_display_width() {
        let text = "日本語";
        let r = rows(text, 10);
        assert_eq!(locate(text, &r, text.len()), (0, 6));
    }

    #[test]
    fn test_offset_at_clamps_to_row() {
        let text = "ab\nabcdef";
        let r = rows(text, 10);
        assert_eq!(offset_at(text, r[0], 5), 2);
        assert_eq!(offset_at(text, r[1], 3), 6);
    }
}
