use realign_core::{
    BufferedLogger, Caret, LineProcessor, MemoryView, Position, ProcessOptions, TextBuffer,
};

fn pad_first_column(lines: &[String]) -> Vec<String> {
    let width = lines
        .iter()
        .filter_map(|line| line.split_once('='))
        .map(|(name, _)| name.trim_end().chars().count())
        .max()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| match line.split_once('=') {
            Some((name, value)) => format!("{:width$} ={}", name.trim_end(), value),
            None => line.clone(),
        })
        .collect()
}

fn main() {
    let text = "[server]\nhost = \"localhost\"\nport = 8080\nmax_connections = 64\n\n[client]";
    let mut view = MemoryView::new(text);

    // Only a caret: the block of `key = value` lines around it is inferred.
    view.set_caret_position(Position::new(2, 3)).unwrap();

    let processor = LineProcessor::with_logger(ProcessOptions::default(), BufferedLogger::new());
    processor
        .process_selection(
            &mut view,
            |line, candidate| line.contains('=') == candidate.contains('='),
            pad_first_column,
        )
        .unwrap();

    assert_eq!(
        view.text(),
        "[server]\nhost            = \"localhost\"\nport            = 8080\nmax_connections = 64\n\n[client]"
    );
    let caret = view.snapshot().position_of(view.position()).unwrap();
    assert_eq!(caret, Position::new(2, 3));

    for message in processor.logger().take() {
        println!("{message}");
    }
}
