//! Writing transformed lines back and restoring the selection.

use crate::error::AlignError;
use crate::host::TextView;
use crate::logger::Logger;
use crate::options::ProcessOptions;
use crate::selection::{SelectedLines, Selection, SelectionMode};
use crate::snapshot::{Position, Span, SnapshotSpan, TextSnapshot};
use crate::text::{join_lines, split_lines};

/// Applies transformed lines to the view in the shape of the original selection.
pub struct EditApplier<'a, L: Logger + ?Sized> {
    options: &'a ProcessOptions,
    logger: &'a L,
}

impl<'a, L: Logger + ?Sized> EditApplier<'a, L> {
    /// Create an applier.
    pub fn new(options: &'a ProcessOptions, logger: &'a L) -> Self {
        Self { options, logger }
    }

    /// Replace the selected lines with `transformed` and restore the selection.
    ///
    /// `transformed` must have exactly as many lines as `selected`; otherwise
    /// [`AlignError::TransformLengthMismatch`] is returned before the buffer is touched.
    ///
    /// Returns the final generation of the buffer.
    pub fn apply<V: TextView + ?Sized>(
        &self,
        view: &mut V,
        selection: &Selection,
        selected: &SelectedLines,
        transformed: &[String],
    ) -> Result<TextSnapshot, AlignError> {
        if transformed.len() != selected.len() {
            return Err(AlignError::TransformLengthMismatch {
                expected: selected.len(),
                actual: transformed.len(),
            });
        }

        match selection.mode {
            SelectionMode::Box => self.apply_box(view, selection, transformed),
            SelectionMode::Stream => self.apply_stream(view, selection, transformed),
            SelectionMode::Empty => self.apply_block(view, selection, selected, transformed),
        }
    }

    /// Box rows are replaced strictly from the last row to the first.
    ///
    /// Replacing a row shifts every offset after it but none before it, so going bottom-up keeps
    /// each remaining row's span valid in the generation it is replaced in. Reordering this loop
    /// corrupts rows whose predecessors changed length.
    fn apply_box<V: TextView + ?Sized>(
        &self,
        view: &mut V,
        selection: &Selection,
        transformed: &[String],
    ) -> Result<TextSnapshot, AlignError> {
        if selection.spans.len() != transformed.len() {
            return Err(AlignError::SelectionShapeMismatch {
                spans: selection.spans.len(),
                lines: transformed.len(),
            });
        }

        let mut latest = view.snapshot();
        let mut updated: Vec<SnapshotSpan> = Vec::with_capacity(transformed.len());

        for (original, text) in selection.spans.iter().zip(transformed).rev() {
            let span = latest.translate(*original)?;
            latest = view.replace(span, text)?;
            updated.push(latest.span(span.start(), text.chars().count()));
        }

        // `updated` runs bottom-up: the last entry is the first row, already recorded against
        // the final generation; the first entry is the last row and must be carried forward.
        let (Some(&first_row), Some(&last_row)) = (updated.last(), updated.first()) else {
            return Ok(latest);
        };
        let first_row = latest.translate(first_row)?;
        let last_row = latest.translate(last_row)?;

        let extent = SnapshotSpan::new(
            latest.version(),
            Span::from_bounds(first_row.start(), last_row.end()),
        );
        view.select_box(extent, selection.is_reversed)?;

        // Replacing the first row left the caret at its end; put it on the active corner.
        let caret = if selection.is_reversed {
            extent.start()
        } else {
            extent.end()
        };
        view.move_to(caret)?;

        self.logger.debug(&format!(
            "box: replaced {} rows, generation {}",
            transformed.len(),
            latest.version()
        ));
        Ok(latest)
    }

    fn apply_stream<V: TextView + ?Sized>(
        &self,
        view: &mut V,
        selection: &Selection,
        transformed: &[String],
    ) -> Result<TextSnapshot, AlignError> {
        let Some(&original) = selection.spans.first() else {
            return Ok(view.snapshot());
        };

        let current = view.snapshot();
        let span = current.translate(original)?;
        let breaks = split_lines(&current.text_of(span)?).breaks;
        let text = join_lines(transformed, &breaks, self.options.line_ending);

        let updated = view.replace(span, &text)?;

        // Reselect the original selection, expanded or reduced to the extent of the new text.
        let reselected = updated.span(span.start(), text.chars().count());
        view.select(reselected, selection.is_reversed)?;

        // Replacing leaves the caret after the inserted text and reselecting does not move it.
        if selection.is_reversed {
            view.move_to(reselected.start())?;
        }

        self.logger.debug(&format!(
            "stream: replaced {} lines, generation {}",
            transformed.len(),
            updated.version()
        ));
        Ok(updated)
    }

    /// The caret comes back to the same line number and column, which is only approximate when
    /// the transform changes the number or order of lines.
    fn apply_block<V: TextView + ?Sized>(
        &self,
        view: &mut V,
        selection: &Selection,
        selected: &SelectedLines,
        transformed: &[String],
    ) -> Result<TextSnapshot, AlignError> {
        let (Some(&first), Some(&last)) =
            (selected.line_indices.first(), selected.line_indices.last())
        else {
            return Ok(view.snapshot());
        };

        let current = view.snapshot();
        let caret = current.position_of(selection.caret)?;

        let first_line = current.line_at(first)?;
        let last_line = current.line_at(last)?;
        let block = Span::from_bounds(first_line.start, last_line.end_including_line_break);
        let lines_text = current.text_of(SnapshotSpan::new(
            current.version(),
            Span::from_bounds(first_line.start, last_line.end),
        ))?;
        let breaks = split_lines(&lines_text).breaks;

        // The last line's terminator is part of the replaced span, so put it back.
        let terminator = current.text_of(SnapshotSpan::new(
            current.version(),
            Span::from_bounds(last_line.end, last_line.end_including_line_break),
        ))?;
        let mut text = join_lines(transformed, &breaks, self.options.line_ending);
        text.push_str(&terminator);

        let updated = view.replace(SnapshotSpan::new(current.version(), block), &text)?;

        let line = caret.line.min(updated.line_count().saturating_sub(1));
        let restored = updated.offset_of(Position::new(line, caret.column))?;
        view.move_to(restored)?;

        self.logger.debug(&format!(
            "block: replaced lines {}..={}, caret restored to {}:{}",
            first,
            last,
            line,
            restored - updated.line_at(line)?.start
        ));
        Ok(updated)
    }
}
