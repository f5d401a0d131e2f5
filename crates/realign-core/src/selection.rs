use crate::host::{TextSelectionMode, TextView};
use crate::snapshot::SnapshotSpan;

/// How the lines to process were selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// One span per visual row (columnar).
    Box,
    /// Exactly one contiguous span, possibly spanning several lines.
    Stream,
    /// A bare caret; the lines are inferred around it.
    Empty,
}

/// A copy of the view's selection, taken once per invocation.
///
/// Host selections change as soon as the buffer is edited, so the pipeline works from this copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Selection shape.
    pub mode: SelectionMode,
    /// Selected spans, top to bottom. Empty in [`SelectionMode::Empty`].
    pub spans: Vec<SnapshotSpan>,
    /// Whether the anchor lies after the caret.
    pub is_reversed: bool,
    /// Caret character offset at capture time.
    pub caret: usize,
}

impl Selection {
    /// Copy the view's current selection, or `None` if no selection is active.
    pub fn capture<V: TextView + ?Sized>(view: &V) -> Option<Self> {
        if !view.is_active() {
            return None;
        }

        let caret = view.position();
        if view.is_empty() {
            return Some(Self {
                mode: SelectionMode::Empty,
                spans: Vec::new(),
                is_reversed: false,
                caret,
            });
        }

        let mode = match view.mode() {
            TextSelectionMode::Box => SelectionMode::Box,
            TextSelectionMode::Stream => SelectionMode::Stream,
        };

        Some(Self {
            mode,
            spans: view.selected_spans(),
            is_reversed: view.is_reversed(),
            caret,
        })
    }
}

/// The lines a selection resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectedLines {
    /// Line texts, top to bottom, without line breaks.
    pub lines: Vec<String>,
    /// Source line numbers; only populated for an inferred block around a bare caret.
    pub line_indices: Vec<usize>,
    /// Whether the anchor of the originating selection lies after its caret.
    pub is_reversed: bool,
}

impl SelectedLines {
    /// The "nothing to do" value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Lines taken from an explicit (box or stream) selection.
    pub fn new(lines: Vec<String>, is_reversed: bool) -> Self {
        Self {
            lines,
            line_indices: Vec::new(),
            is_reversed,
        }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` for the "nothing to do" value.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
