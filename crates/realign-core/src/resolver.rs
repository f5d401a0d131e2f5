//! Turning the view's selection into the lines to transform.

use crate::error::AlignError;
use crate::host::{TextSelectionMode, TextView};
use crate::logger::Logger;
use crate::matcher::find_block;
use crate::options::{EmptySelectionBehavior, ProcessOptions};
use crate::selection::SelectedLines;
use crate::snapshot::{Span, SnapshotSpan};
use crate::text::split_lines;

/// Classifies the active selection and extracts its lines.
pub struct SelectionResolver<'a, L: Logger + ?Sized> {
    options: &'a ProcessOptions,
    logger: &'a L,
}

impl<'a, L: Logger + ?Sized> SelectionResolver<'a, L> {
    /// Create a resolver.
    pub fn new(options: &'a ProcessOptions, logger: &'a L) -> Self {
        Self { options, logger }
    }

    /// Resolve the view's selection into lines.
    ///
    /// - No active selection: [`SelectedLines::empty`].
    /// - Box: each row's text verbatim.
    /// - Stream: the span is first extended back to the start of its first line, and the view's
    ///   selection is updated to match, so columns of all lines line up.
    /// - Empty: the block of lines matching the caret's line (see [`find_block`]), unless the
    ///   options say to ignore empty selections.
    pub fn resolve<V, F>(&self, view: &mut V, lines_match: F) -> Result<SelectedLines, AlignError>
    where
        V: TextView + ?Sized,
        F: Fn(&str, &str) -> bool,
    {
        if !view.is_active() {
            self.logger.debug("no active selection");
            return Ok(SelectedLines::empty());
        }

        if view.is_empty() {
            return match self.options.empty_selection {
                EmptySelectionBehavior::InferBlock => self.resolve_empty(view, lines_match),
                EmptySelectionBehavior::Ignore => {
                    self.logger.debug("empty selection ignored");
                    Ok(SelectedLines::empty())
                }
            };
        }

        match view.mode() {
            TextSelectionMode::Box => self.resolve_box(view),
            TextSelectionMode::Stream => self.resolve_stream(view),
        }
    }

    fn resolve_box<V: TextView + ?Sized>(&self, view: &V) -> Result<SelectedLines, AlignError> {
        let snapshot = view.snapshot();
        let lines = view
            .selected_spans()
            .into_iter()
            .map(|span| snapshot.text_of(snapshot.translate(span)?))
            .collect::<Result<Vec<_>, _>>()?;

        self.logger.debug(&format!("box selection: {} rows", lines.len()));
        Ok(SelectedLines::new(lines, view.is_reversed()))
    }

    fn resolve_stream<V: TextView + ?Sized>(
        &self,
        view: &mut V,
    ) -> Result<SelectedLines, AlignError> {
        let snapshot = view.snapshot();
        let is_reversed = view.is_reversed();

        // Stream selections carry exactly one span.
        let Some(&selected) = view.selected_spans().first() else {
            self.logger.debug("stream selection without spans");
            return Ok(SelectedLines::empty());
        };
        let mut span = snapshot.translate(selected)?;

        let first_line = snapshot.line_at(snapshot.line_number_at(span.start())?)?;
        if first_line.start != span.start() {
            span = SnapshotSpan::new(
                snapshot.version(),
                Span::from_bounds(first_line.start, span.end()),
            );
            view.select(span, is_reversed)?;
            self.logger.debug(&format!(
                "stream selection extended to line start: {}..{}",
                span.start(),
                span.end()
            ));
        }

        let text = snapshot.text_of(span)?;
        let lines = split_lines(&text).lines;
        self.logger.debug(&format!("stream selection: {} lines", lines.len()));
        Ok(SelectedLines::new(lines, is_reversed))
    }

    fn resolve_empty<V, F>(&self, view: &V, lines_match: F) -> Result<SelectedLines, AlignError>
    where
        V: TextView + ?Sized,
        F: Fn(&str, &str) -> bool,
    {
        let snapshot = view.snapshot();
        let caret_line = snapshot.line_number_at(view.position())?;
        let block = find_block(&snapshot, caret_line, lines_match)?;

        let mut selected = SelectedLines::empty();
        for line_number in block {
            let line = snapshot.line_at(line_number)?;
            selected.lines.push(line.text);
            selected.line_indices.push(line_number);
        }

        self.logger.debug(&format!(
            "empty selection: inferred block of {} lines around line {}",
            selected.len(),
            caret_line
        ));
        Ok(selected)
    }
}
