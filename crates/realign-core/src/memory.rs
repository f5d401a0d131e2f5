//! An in-memory [`TextView`](crate::TextView) for tests, demos and benchmarks.
//!
//! [`MemoryView`] behaves the way the pipeline expects a hosting editor to behave:
//! - [`replace`](TextBuffer::replace) accepts spans from older generations by translating them,
//!   collapses the selection and leaves the caret after the inserted text;
//! - [`select`](ViewSelection::select) and [`select_box`](ViewSelection::select_box) change the
//!   selection without moving the caret;
//! - box selections are kept as an anchor/active pair and expanded into one span per row, each
//!   clamped to its row's length;
//! - edit history is bounded by [`MemoryView::set_history_limit`].

use crate::error::{HostError, SnapshotError};
use crate::host::{Caret, TextBuffer, TextSelectionMode, ViewSelection};
use crate::snapshot::{Position, Span, SnapshotSpan, TextSnapshot};
use std::ops::Range;

/// Generations of edit history a [`MemoryView`] keeps for translating older spans.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveSelection {
    mode: TextSelectionMode,
    anchor: Position,
    active: Position,
}

impl ActiveSelection {
    fn bounds(&self) -> (Position, Position) {
        (self.anchor.min(self.active), self.anchor.max(self.active))
    }
}

/// A single-caret view over an in-memory document.
#[derive(Debug, Clone)]
pub struct MemoryView {
    snapshot: TextSnapshot,
    selection: Option<ActiveSelection>,
    caret: usize,
    is_active: bool,
    read_only: bool,
    replacements_left: Option<usize>,
    history_limit: usize,
}

impl MemoryView {
    /// Create a view with the caret at the start of `text` and nothing selected.
    pub fn new(text: &str) -> Self {
        Self {
            snapshot: TextSnapshot::from_text(text),
            selection: None,
            caret: 0,
            is_active: true,
            read_only: false,
            replacements_left: None,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Current document text.
    pub fn text(&self) -> String {
        self.snapshot.text()
    }

    /// Text of each selected span, top to bottom.
    pub fn selected_text(&self) -> Vec<String> {
        self.selected_spans()
            .into_iter()
            .filter_map(|span| self.snapshot.text_of(span).ok())
            .collect()
    }

    /// Mark the selection as active or inactive.
    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// Make every replacement fail with [`HostError::ReadOnly`].
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    /// Allow `count` more replacements, then reject the rest with [`HostError::Rejected`].
    pub fn reject_replacements_after(&mut self, count: usize) {
        self.replacements_left = Some(count);
    }

    /// Keep at least `limit` generations of history. Spans older than that may fail to
    /// translate with [`SnapshotError::ForgottenGeneration`].
    pub fn set_history_limit(&mut self, limit: usize) {
        self.history_limit = limit;
        self.trim_history();
    }

    /// Place the caret, clearing the selection (a click).
    pub fn set_caret(&mut self, offset: usize) -> Result<(), HostError> {
        self.check_offset(offset)?;
        self.selection = None;
        self.caret = offset;
        Ok(())
    }

    /// Place the caret at a line/column position, clearing the selection.
    pub fn set_caret_position(&mut self, position: Position) -> Result<(), HostError> {
        let offset = self.snapshot.offset_of(position)?;
        self.set_caret(offset)
    }

    /// Stream-select `range` the way a user drag would: the caret ends on the active end, which
    /// is the start of the range when `is_reversed`.
    pub fn select_range(&mut self, range: Range<usize>, is_reversed: bool) -> Result<(), HostError> {
        let span = self
            .snapshot
            .span(range.start, range.end.saturating_sub(range.start));
        self.select(span, is_reversed)?;
        self.caret = if is_reversed { range.start } else { range.end };
        Ok(())
    }

    /// Box-select from `anchor` to `active` the way a user drag would, leaving the caret on
    /// `active`. Columns may lie past the end of their line; each row is clamped on its own.
    pub fn select_box_positions(
        &mut self,
        anchor: Position,
        active: Position,
    ) -> Result<(), HostError> {
        self.snapshot.line_at(anchor.line)?;
        let caret = self.snapshot.offset_of(active)?;
        self.selection = Some(ActiveSelection {
            mode: TextSelectionMode::Box,
            anchor,
            active,
        });
        self.caret = caret;
        Ok(())
    }

    // History is cut back to `history_limit` once it grows past twice that.
    fn trim_history(&mut self) {
        let version = self.snapshot.version();
        let tracked = version - self.snapshot.oldest_tracked();
        if tracked > (self.history_limit as u64).saturating_mul(2) {
            let keep_from = version.saturating_sub(self.history_limit as u64);
            self.snapshot = self.snapshot.forget_before(keep_from);
        }
    }

    fn check_offset(&self, offset: usize) -> Result<(), SnapshotError> {
        let len = self.snapshot.len_chars();
        if offset > len {
            return Err(SnapshotError::OffsetOutOfRange { offset, len });
        }
        Ok(())
    }

    fn set_selection(
        &mut self,
        mode: TextSelectionMode,
        span: SnapshotSpan,
        is_reversed: bool,
    ) -> Result<(), HostError> {
        let span = self.snapshot.translate(span)?;
        self.check_offset(span.end())?;

        let start = self.snapshot.position_of(span.start())?;
        let end = self.snapshot.position_of(span.end())?;
        let (anchor, active) = if is_reversed {
            (end, start)
        } else {
            (start, end)
        };
        self.selection = Some(ActiveSelection {
            mode,
            anchor,
            active,
        });
        Ok(())
    }

    fn stream_span(&self, selection: ActiveSelection) -> Result<SnapshotSpan, SnapshotError> {
        let (start, end) = selection.bounds();
        Ok(SnapshotSpan::new(
            self.snapshot.version(),
            Span::from_bounds(self.snapshot.offset_of(start)?, self.snapshot.offset_of(end)?),
        ))
    }

    fn box_rows(&self, selection: ActiveSelection) -> Result<Vec<SnapshotSpan>, SnapshotError> {
        let ActiveSelection { anchor, active, .. } = selection;

        let start_line = anchor.line.min(active.line);
        let end_line = anchor.line.max(active.line);
        let left = anchor.column.min(active.column);
        let right = anchor.column.max(active.column);

        let mut rows = Vec::with_capacity(end_line - start_line + 1);
        for line_number in start_line..=end_line {
            let line = self.snapshot.line_at(line_number)?;
            let start = line.start + left.min(line.len());
            let end = line.start + right.min(line.len());
            rows.push(SnapshotSpan::new(
                self.snapshot.version(),
                Span::from_bounds(start, end),
            ));
        }
        Ok(rows)
    }
}

impl TextBuffer for MemoryView {
    fn snapshot(&self) -> TextSnapshot {
        self.snapshot.clone()
    }

    fn replace(&mut self, span: SnapshotSpan, text: &str) -> Result<TextSnapshot, HostError> {
        if self.read_only {
            return Err(HostError::ReadOnly);
        }
        if let Some(left) = self.replacements_left {
            if left == 0 {
                return Err(HostError::Rejected("replacement limit reached".to_string()));
            }
            self.replacements_left = Some(left - 1);
        }

        let span = self.snapshot.translate(span)?;
        self.snapshot = self.snapshot.replace(span, text)?;
        self.trim_history();
        self.selection = None;
        self.caret = span.start() + text.chars().count();
        Ok(self.snapshot.clone())
    }
}

impl ViewSelection for MemoryView {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn is_empty(&self) -> bool {
        self.selected_spans().iter().all(SnapshotSpan::is_empty)
    }

    fn mode(&self) -> TextSelectionMode {
        self.selection
            .map_or(TextSelectionMode::Stream, |selection| selection.mode)
    }

    fn selected_spans(&self) -> Vec<SnapshotSpan> {
        let Some(selection) = self.selection else {
            return Vec::new();
        };

        match selection.mode {
            TextSelectionMode::Stream => self
                .stream_span(selection)
                .map(|span| vec![span])
                .unwrap_or_default(),
            TextSelectionMode::Box => self.box_rows(selection).unwrap_or_default(),
        }
    }

    fn is_reversed(&self) -> bool {
        self.selection
            .is_some_and(|selection| selection.anchor > selection.active)
    }

    fn select(&mut self, span: SnapshotSpan, is_reversed: bool) -> Result<(), HostError> {
        self.set_selection(TextSelectionMode::Stream, span, is_reversed)
    }

    fn select_box(&mut self, span: SnapshotSpan, is_reversed: bool) -> Result<(), HostError> {
        self.set_selection(TextSelectionMode::Box, span, is_reversed)
    }
}

impl Caret for MemoryView {
    fn position(&self) -> usize {
        self.caret
    }

    fn move_to(&mut self, offset: usize) -> Result<(), HostError> {
        self.check_offset(offset)?;
        self.caret = offset;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_rows_are_clamped_to_line_length() {
        let mut view = MemoryView::new("a\nbb\nccc");
        view.select_box_positions(Position::new(0, 0), Position::new(2, 3))
            .unwrap();

        assert_eq!(view.mode(), TextSelectionMode::Box);
        assert_eq!(view.selected_text(), vec!["a", "bb", "ccc"]);
        assert!(!view.is_reversed());
        assert_eq!(view.position(), 8);
    }

    #[test]
    fn test_replace_collapses_selection_and_moves_caret() {
        let mut view = MemoryView::new("hello world");
        view.select_range(0..5, true).unwrap();
        assert_eq!(view.position(), 0);

        let span = view.selected_spans()[0];
        view.replace(span, "howdy, ").unwrap();

        assert_eq!(view.text(), "howdy,  world");
        assert!(view.is_empty());
        assert_eq!(view.position(), 7);
    }

    #[test]
    fn test_select_does_not_move_caret() {
        let mut view = MemoryView::new("hello world");
        view.set_caret(3).unwrap();
        let span = view.snapshot().span(6, 5);
        view.select(span, true).unwrap();

        assert_eq!(view.position(), 3);
        assert!(view.is_reversed());
        assert_eq!(view.selected_text(), vec!["world"]);
    }

    #[test]
    fn test_replace_translates_older_spans() {
        let mut view = MemoryView::new("a\nbb\nccc");
        let v0 = view.snapshot();
        view.replace(v0.span(0, 1), "aaaa").unwrap();
        view.replace(v0.span(5, 3), "c").unwrap();
        assert_eq!(view.text(), "aaaa\nbb\nc");
    }

    #[test]
    fn test_history_is_trimmed_to_limit() {
        let mut view = MemoryView::new("abc");
        view.set_history_limit(2);
        let v0 = view.snapshot();

        for _ in 0..4 {
            let snapshot = view.snapshot();
            view.replace(snapshot.span(0, 0), "x").unwrap();
        }
        let v4 = view.snapshot();
        assert_eq!(v4.version(), 4);
        assert_eq!(v4.oldest_tracked(), 0);

        let snapshot = view.snapshot();
        view.replace(snapshot.span(0, 0), "x").unwrap();
        let v5 = view.snapshot();
        assert_eq!(v5.oldest_tracked(), 3);

        assert_eq!(
            v5.translate(v0.span(0, 1)),
            Err(SnapshotError::ForgottenGeneration {
                span_version: 0,
                oldest: 3
            })
        );
        let recent = v5.translate(v4.span(4, 3)).unwrap();
        assert_eq!(v5.text_of(recent).unwrap(), "abc");
    }

    #[test]
    fn test_long_editing_session_stays_bounded() {
        let mut view = MemoryView::new("");
        for _ in 0..50_000 {
            let snapshot = view.snapshot();
            view.replace(snapshot.span(0, 0), "").unwrap();
        }
        let snapshot = view.snapshot();
        assert_eq!(snapshot.version(), 50_000);
        let tracked = snapshot.version() - snapshot.oldest_tracked();
        assert!(tracked <= 2 * DEFAULT_HISTORY_LIMIT as u64);
    }

    #[test]
    fn test_replacement_limit() {
        let mut view = MemoryView::new("abc");
        view.reject_replacements_after(1);
        let snapshot = view.snapshot();
        view.replace(snapshot.span(0, 1), "x").unwrap();

        let snapshot = view.snapshot();
        assert!(matches!(
            view.replace(snapshot.span(1, 1), "y"),
            Err(HostError::Rejected(_))
        ));
        assert_eq!(view.text(), "xbc");
    }
}
