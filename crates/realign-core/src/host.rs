//! Capabilities consumed from the hosting editor.
//!
//! The core never touches concrete editor types. A host exposes its buffer, selection and caret
//! through these traits; anything implementing all three is a [`TextView`].

use crate::error::HostError;
use crate::snapshot::{SnapshotSpan, TextSnapshot};

/// Shape of a non-empty host selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSelectionMode {
    /// A single contiguous span, possibly spanning several lines.
    Stream,
    /// One span per visual row, aligned by column.
    Box,
}

/// The document buffer.
pub trait TextBuffer {
    /// The current generation of the document.
    fn snapshot(&self) -> TextSnapshot;

    /// Replace the text covered by `span` and return the resulting generation.
    ///
    /// Hosts may accept spans recorded against older generations by translating them, but must
    /// never reinterpret their offsets against the current generation as-is.
    fn replace(&mut self, span: SnapshotSpan, text: &str) -> Result<TextSnapshot, HostError>;
}

/// The view's selection.
pub trait ViewSelection {
    /// Whether a selection exists at all.
    fn is_active(&self) -> bool;

    /// Whether the selection covers no text (a bare caret).
    fn is_empty(&self) -> bool;

    /// Shape of the selection. Meaningless when [`is_empty`](Self::is_empty) is `true`.
    fn mode(&self) -> TextSelectionMode;

    /// Selected spans, top to bottom: one per row in box mode, exactly one in stream mode.
    fn selected_spans(&self) -> Vec<SnapshotSpan>;

    /// Whether the anchor lies after the active point (the selection was made upward or
    /// leftward).
    fn is_reversed(&self) -> bool;

    /// Replace the selection with a stream selection over `span`.
    fn select(&mut self, span: SnapshotSpan, is_reversed: bool) -> Result<(), HostError>;

    /// Replace the selection with a box whose corners are the start and end of `span`.
    fn select_box(&mut self, span: SnapshotSpan, is_reversed: bool) -> Result<(), HostError>;
}

/// The view's single logical caret.
pub trait Caret {
    /// Character offset of the caret in the current generation.
    fn position(&self) -> usize;

    /// Move the caret to a character offset in the current generation.
    fn move_to(&mut self, offset: usize) -> Result<(), HostError>;
}

/// A view exposing every capability the pipeline needs.
pub trait TextView: TextBuffer + ViewSelection + Caret {}

impl<T: TextBuffer + ViewSelection + Caret + ?Sized> TextView for T {}
