#![allow(clippy::unwrap_used)]

use crate::helpers::source_fixtures::*;
use syster_select::base::{TextRange, TextSize};
use syster_select::selection::{Selection, SelectionResult, SeparatedItems, TextLines, resolve};

// =============================================================================
// ARGUMENT LISTS
// =============================================================================

#[test]
fn test_select_two_arguments_with_comma() {
    let source = "first, second, third";
    let (items, separators) = separated_list(source);
    let list = SeparatedItems::new(&items, &separators).unwrap();

    let span = TextRange::new(0.into(), find(source, "third").start());
    let selection = list.select(span).unwrap();

    assert_eq!(selection.count(), 2);
    assert_eq!(&source[selection.first().trimmed], "first");
    assert_eq!(&source[selection.last().trimmed], "second");
}

#[test]
fn test_select_single_argument_by_its_core() {
    let source = "first, second, third";
    let (items, separators) = separated_list(source);
    let list = SeparatedItems::new(&items, &separators).unwrap();

    let result = list.resolve(find(source, "second"));
    assert_eq!(result, SelectionResult::new(1, 1).unwrap());
}

#[test]
fn test_partial_argument_is_not_selected() {
    let source = "first, second, third";
    let (items, separators) = separated_list(source);
    let list = SeparatedItems::new(&items, &separators).unwrap();

    assert!(list.resolve(find(source, "econ")).is_empty());
    assert!(list.resolve(find(source, "rst, sec")).is_empty());
}

#[test]
fn test_padded_arguments() {
    let source = "  a  ,  b  ,  c  ";
    let (items, separators) = separated_list(source);
    assert_eq!(items.len(), 3);

    let list = SeparatedItems::new(&items, &separators).unwrap();
    // The padding before `b` belongs to the comma, so start at `b` itself.
    let span = TextRange::new(find(source, "b").start(), find(source, "c").end());
    assert_eq!(list.resolve(span), SelectionResult::new(1, 2).unwrap());
}

#[test]
fn test_trailing_comma_list() {
    let source = "x, y,";
    let (items, separators) = separated_list(source);
    let list = SeparatedItems::new(&items, &separators).unwrap();
    assert!(list.has_trailing_separator());

    // The trailing comma is not part of `y`.
    let span = TextRange::new(0.into(), find(source, "y").end());
    assert_eq!(list.resolve(span), SelectionResult::new(0, 1).unwrap());

    let span = TextRange::new(0.into(), TextSize::of(source));
    assert_eq!(list.resolve(span).to_signed(), (-1, -1));
}

// =============================================================================
// STATEMENTS
// =============================================================================

const BODY: &str = "    let a = 1;\n    let b = 2;\n    let c = 3;\n";

#[test]
fn test_select_statements_with_indentation() {
    let items = statements(BODY);
    assert_eq!(items.len(), 3);

    let span = TextRange::new(0.into(), items[2].full.start());
    let selection = Selection::create(&items, span).unwrap();
    assert_eq!((selection.first_index(), selection.last_index()), (0, 1));
}

#[test]
fn test_select_statement_cores() {
    let items = statements(BODY);
    let span = find(BODY, "let b = 2;\n    let c = 3;");
    let result = resolve(&items, span);
    assert_eq!(result.indices(), Some(1..=2));
}

#[test]
fn test_cursor_selection_is_empty() {
    let items = statements(BODY);
    let caret = find(BODY, "let b").start();
    assert!(resolve(&items, TextRange::empty(caret)).is_empty());
}

#[test]
fn test_statement_split_by_span() {
    let items = statements(BODY);
    assert!(resolve(&items, find(BODY, "a = 1;\n    let b")).is_empty());
    assert!(resolve(&items, find(BODY, "let b = 2")).is_empty());
}

// =============================================================================
// LINES
// =============================================================================

#[test]
fn test_line_selection_from_text() {
    let text = "alpha\r\nbeta\r\ngamma";
    let lines = TextLines::new(text).unwrap();

    let span = TextRange::new(find(text, "beta").start(), TextSize::of(text));
    let selection = lines.select(span).unwrap();
    let selected: Vec<&str> = selection.iter().map(|line| line.text(text)).collect();
    assert_eq!(selected, vec!["beta", "gamma"]);
}
