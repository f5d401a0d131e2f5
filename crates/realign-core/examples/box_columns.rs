use realign_core::{LineProcessor, MemoryView, Position, ProcessOptions, ProcessOutcome};

fn main() {
    // Only the middle column is selected; the rest of each row is left alone.
    let mut view = MemoryView::new("let a: u8 = 1;\nlet bcd: u16 = 2;\nlet ef: u32 = 3;");
    view.select_box_positions(Position::new(0, 4), Position::new(2, 8))
        .unwrap();
    assert_eq!(view.selected_text(), vec!["a: u", "bcd:", "ef: "]);

    let processor = LineProcessor::new(ProcessOptions::default());
    let outcome = processor
        .process_selection(&mut view, |_, _| false, |rows| {
            rows.iter().map(|row| row.to_uppercase()).collect()
        })
        .unwrap();

    assert!(matches!(
        outcome,
        ProcessOutcome::Applied {
            line_count: 3,
            version: 3,
            ..
        }
    ));
    assert_eq!(
        view.text(),
        "let A: U8 = 1;\nlet BCD: u16 = 2;\nlet EF: u32 = 3;"
    );
    println!("{}", view.text());
}
