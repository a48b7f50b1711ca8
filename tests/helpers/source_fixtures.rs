//! Positioned items cut out of small source snippets.

use syster_select::base::{Extents, TextRange, TextSize};

pub fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

/// Range of the first occurrence of `needle` in `source`.
pub fn find(source: &str, needle: &str) -> TextRange {
    let start = source
        .find(needle)
        .unwrap_or_else(|| panic!("'{needle}' not found in {source:?}"));
    let start = TextSize::try_from(start).unwrap();
    TextRange::at(start, TextSize::of(needle))
}

/// Extents of a stretch of source: the full range as given, trimmed of
/// surrounding whitespace.
fn trimmed_item(source: &str, full: TextRange) -> Extents {
    let text = &source[full];
    let leading = text.len() - text.trim_start().len();
    let trailing = text.len() - text.trim_end().len();
    let start = full.start() + TextSize::try_from(leading).unwrap();
    let end = full.end() - TextSize::try_from(trailing).unwrap();
    Extents::new(full, TextRange::new(start, end.max(start)))
}

/// Split an argument list like `a, b , c` at its commas.
///
/// Each comma owns the whitespace after it; items own everything between
/// separators.
pub fn separated_list(source: &str) -> (Vec<Extents>, Vec<TextRange>) {
    let mut items = Vec::new();
    let mut separators = Vec::new();
    let mut item_start = 0usize;
    let bytes = source.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b',' {
            let mut end = i + 1;
            while end < bytes.len() && bytes[end] == b' ' {
                end += 1;
            }
            items.push(trimmed_item(source, offsets(item_start, i)));
            separators.push(offsets(i, end));
            item_start = end;
            i = end;
        } else {
            i += 1;
        }
    }
    if item_start < source.len() {
        items.push(trimmed_item(source, offsets(item_start, source.len())));
    }
    (items, separators)
}

/// One item per line, each owning its indentation and line break.
pub fn statements(source: &str) -> Vec<Extents> {
    let mut items = Vec::new();
    let mut start = 0;
    for line in source.split_inclusive('\n') {
        let end = start + line.len();
        items.push(trimmed_item(source, offsets(start, end)));
        start = end;
    }
    items
}

fn offsets(start: usize, end: usize) -> TextRange {
    TextRange::new(
        TextSize::try_from(start).unwrap(),
        TextSize::try_from(end).unwrap(),
    )
}
