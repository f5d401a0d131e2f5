//! Processing options.

use crate::line_ending::LineEnding;

/// What to do when the command runs with a bare caret and no selected text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySelectionBehavior {
    /// Infer a block of similar lines around the caret and process it.
    #[default]
    InferBlock,
    /// Do nothing; only box and stream selections are processed.
    Ignore,
}

/// Options for [`LineProcessor`](crate::LineProcessor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessOptions {
    /// Behavior for empty selections.
    pub empty_selection: EmptySelectionBehavior,
    /// Line break forced between transformed lines.
    ///
    /// `None` keeps the terminator each line had before the transform.
    pub line_ending: Option<LineEnding>,
}

impl ProcessOptions {
    /// Set the behavior for empty selections.
    pub fn with_empty_selection(mut self, behavior: EmptySelectionBehavior) -> Self {
        self.empty_selection = behavior;
        self
    }

    /// Always join transformed lines with `line_ending`.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = Some(line_ending);
        self
    }
}
