mod common;

use common::ColumnAligner;
use pretty_assertions::assert_eq;
use realign_core::{
    AlignCommand, Caret, LineEnding, LineProcessor, LogFacade, MemoryView, ProcessOptions,
    ProcessOutcome, SelectionMode, SelectionResolver, TextSelectionMode, ViewSelection,
};

#[test]
fn test_stream_selection_is_extended_to_line_start() {
    let mut view = MemoryView::new("foo bar");
    view.select_range(4..7, false).unwrap();
    assert_eq!(view.selected_text(), vec!["bar"]);

    let options = ProcessOptions::default();
    let selected = SelectionResolver::new(&options, &LogFacade)
        .resolve(&mut view, |_, _| false)
        .unwrap();

    assert_eq!(selected.lines, vec!["foo bar"]);
    assert!(selected.line_indices.is_empty());
    assert!(!selected.is_reversed);
    // The visible selection follows the extension.
    assert_eq!(view.selected_text(), vec!["foo bar"]);
    assert_eq!(view.mode(), TextSelectionMode::Stream);
}

#[test]
fn test_stream_transform_sees_whole_first_line() {
    let mut view = MemoryView::new("foo bar");
    view.select_range(4..7, false).unwrap();

    let mut seen = Vec::new();
    let processor = LineProcessor::new(ProcessOptions::default());
    processor
        .process_selection(&mut view, |_, _| false, |lines| {
            seen = lines.to_vec();
            lines.to_vec()
        })
        .unwrap();

    assert_eq!(seen, vec!["foo bar"]);
    assert_eq!(view.text(), "foo bar");
    assert_eq!(view.selected_text(), vec!["foo bar"]);
}

#[test]
fn test_stream_align_starting_mid_line() {
    let text = "int a = 1;\nint bcd = 22;\n";
    let mut view = MemoryView::new(text);
    view.select_range(4..24, false).unwrap();

    let processor = LineProcessor::new(ProcessOptions::default());
    let outcome = processor
        .run(&mut view, &ColumnAligner, AlignCommand::Align)
        .unwrap();

    assert_eq!(
        outcome,
        ProcessOutcome::Applied {
            mode: SelectionMode::Stream,
            line_count: 2,
            version: 1,
        }
    );
    assert_eq!(view.text(), "int a   = 1;\nint bcd = 22;\n");
    assert_eq!(
        view.selected_text(),
        vec!["int a   = 1;\nint bcd = 22;"]
    );
    assert!(!view.is_reversed());
    assert_eq!(view.position(), 26);
}

#[test]
fn test_reversed_stream_puts_caret_at_selection_start() {
    let mut view = MemoryView::new("int a = 1;\nint bcd = 22;\n");
    view.select_range(4..24, true).unwrap();
    assert_eq!(view.position(), 4);

    let processor = LineProcessor::new(ProcessOptions::default());
    processor
        .run(&mut view, &ColumnAligner, AlignCommand::Align)
        .unwrap();

    assert!(view.is_reversed());
    assert_eq!(view.selected_text(), vec!["int a   = 1;\nint bcd = 22;"]);
    assert_eq!(view.position(), 0);
}

#[test]
fn test_stream_including_trailing_newline() {
    let mut view = MemoryView::new("a = 1\nbb = 2\n");
    view.select_range(0..13, false).unwrap();

    let mut seen = Vec::new();
    let processor = LineProcessor::new(ProcessOptions::default());
    processor
        .process_selection(&mut view, |_, _| false, |lines| {
            seen = lines.to_vec();
            lines.to_vec()
        })
        .unwrap();
    assert_eq!(seen, vec!["a = 1", "bb = 2", ""]);

    processor
        .run(&mut view, &ColumnAligner, AlignCommand::Align)
        .unwrap();
    assert_eq!(view.text(), "a  = 1\nbb = 2\n");
}

#[test]
fn test_stream_preserves_crlf() {
    let mut view = MemoryView::new("a = 1\r\nbb = 2");
    view.select_range(0..13, false).unwrap();

    let processor = LineProcessor::new(ProcessOptions::default());
    processor
        .run(&mut view, &ColumnAligner, AlignCommand::Align)
        .unwrap();

    assert_eq!(view.text(), "a  = 1\r\nbb = 2");
}

#[test]
fn test_stream_keeps_mixed_line_endings() {
    let text = "a = 1\nbb = 2\r\ncc = 3";
    let mut view = MemoryView::new(text);
    view.select_range(0..20, false).unwrap();

    let processor = LineProcessor::new(ProcessOptions::default());
    processor
        .process_selection(&mut view, |_, _| false, |lines| lines.to_vec())
        .unwrap();
    assert_eq!(view.text(), text);

    processor
        .run(&mut view, &ColumnAligner, AlignCommand::Align)
        .unwrap();
    assert_eq!(view.text(), "a  = 1\nbb = 2\r\ncc = 3");
}

#[test]
fn test_configured_line_ending_overrides_detection() {
    let mut view = MemoryView::new("a = 1\r\nbb = 2");
    view.select_range(0..13, false).unwrap();

    let processor = LineProcessor::new(ProcessOptions::default().with_line_ending(LineEnding::Lf));
    processor
        .run(&mut view, &ColumnAligner, AlignCommand::Unalign)
        .unwrap();

    assert_eq!(view.text(), "a = 1\nbb = 2");
}

#[test]
fn test_realign_to_first_line() {
    let mut view = MemoryView::new("name    = 1\nx = 2\nlonger_name = 3");
    view.select_range(0..33, false).unwrap();

    let processor = LineProcessor::new(ProcessOptions::default());
    processor
        .run(&mut view, &ColumnAligner, AlignCommand::RealignToFirstLine)
        .unwrap();

    assert_eq!(view.text(), "name = 1\nx    = 2\nlonger_name = 3");
}
