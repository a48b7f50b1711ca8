//! Whole-line selection.
//!
//! A line's full range includes its line break and its trimmed range does
//! not, so a span selects a run of lines when it starts at a line start and
//! ends at the end of a line (before or after its break).

use text_size::{TextRange, TextSize};

use super::error::SelectionError;
use super::view::Selection;
use crate::base::Extent;

/// One line of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextLine {
    range: TextRange,
    range_including_break: TextRange,
}

impl TextLine {
    /// The line content, without its line break.
    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn range_including_break(&self) -> TextRange {
        self.range_including_break
    }

    /// `0`, `1` (`\n` or `\r`) or `2` (`\r\n`); `0` only for the last line.
    pub fn line_break_len(&self) -> TextSize {
        self.range_including_break.end() - self.range.end()
    }

    pub fn text<'t>(&self, text: &'t str) -> &'t str {
        &text[self.range]
    }
}

impl Extent for TextLine {
    fn full_range(&self) -> TextRange {
        self.range_including_break
    }

    fn trimmed_range(&self) -> TextRange {
        self.range
    }
}

/// The lines of a text. There is always at least one (possibly empty) line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLines {
    lines: Vec<TextLine>,
}

impl TextLines {
    pub fn new(text: &str) -> Result<Self, SelectionError> {
        if u32::try_from(text.len()).is_err() {
            return Err(SelectionError::TextTooLarge { len: text.len() });
        }

        let mut lines = Vec::new();
        let bytes = text.as_bytes();
        let mut start = 0;
        let mut i = 0;
        while i < bytes.len() {
            let break_len = match bytes[i] {
                b'\n' => 1,
                b'\r' if bytes.get(i + 1) == Some(&b'\n') => 2,
                b'\r' => 1,
                _ => {
                    i += 1;
                    continue;
                }
            };
            lines.push(line(start, i, i + break_len));
            i += break_len;
            start = i;
        }
        lines.push(line(start, bytes.len(), bytes.len()));

        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TextLine> {
        self.lines.get(index)
    }

    /// Index of the line containing `offset`. An offset inside a line break
    /// belongs to the line the break ends.
    pub fn line_index(&self, offset: TextSize) -> Option<usize> {
        let index = self
            .lines
            .partition_point(|line| line.range_including_break.end() <= offset);
        match self.lines.get(index) {
            Some(_) => Some(index),
            None => self
                .lines
                .last()
                .filter(|line| line.range_including_break.end() == offset)
                .map(|_| self.lines.len() - 1),
        }
    }

    /// Select the whole lines covered by `span`.
    pub fn select(&self, span: TextRange) -> Option<Selection<'_, TextLine>> {
        Selection::create(&self.lines, span)
    }
}

// Offsets were checked against u32::MAX in `TextLines::new`.
fn line(start: usize, end: usize, end_including_break: usize) -> TextLine {
    let offset = |value: usize| TextSize::from(value as u32);
    TextLine {
        range: TextRange::new(offset(start), offset(end)),
        range_including_break: TextRange::new(offset(start), offset(end_including_break)),
    }
}
