//! The single entry point: resolve, transform, apply.
//!
//! # Example
//!
//! ```rust
//! use realign_core::{LineProcessor, MemoryView, ProcessOptions, ProcessOutcome, SelectionMode};
//!
//! let mut view = MemoryView::new("x = 1\nlong_name = 2\n");
//! view.select_range(0..19, false).unwrap();
//!
//! let processor = LineProcessor::new(ProcessOptions::default());
//! let outcome = processor
//!     .process_selection(&mut view, |_, _| true, |lines| {
//!         lines.iter().map(|l| l.replace(" = ", "=")).collect()
//!     })
//!     .unwrap();
//!
//! assert_eq!(view.text(), "x=1\nlong_name=2\n");
//! assert!(matches!(outcome, ProcessOutcome::Applied { mode: SelectionMode::Stream, .. }));
//! ```

use crate::aligner::{AlignCommand, Aligner};
use crate::applier::EditApplier;
use crate::error::AlignError;
use crate::host::TextView;
use crate::logger::{LogFacade, Logger};
use crate::options::{EmptySelectionBehavior, ProcessOptions};
use crate::resolver::SelectionResolver;
use crate::selection::{Selection, SelectionMode};

/// Result of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// Nothing was selected; the buffer was not touched.
    Unchanged,
    /// The transformed lines were written back.
    Applied {
        /// Shape of the processed selection.
        mode: SelectionMode,
        /// Number of lines transformed.
        line_count: usize,
        /// Generation of the buffer after the edit.
        version: u64,
    },
}

/// Runs line transforms over a view's selection.
///
/// Each call is a run-to-completion pass `resolve → transform → apply`; nothing is kept between
/// calls. Calls must not be nested.
#[derive(Debug)]
pub struct LineProcessor<L: Logger = LogFacade> {
    options: ProcessOptions,
    logger: L,
}

impl LineProcessor<LogFacade> {
    /// Create a processor that logs through the [`log`] facade.
    pub fn new(options: ProcessOptions) -> Self {
        Self::with_logger(options, LogFacade)
    }
}

impl Default for LineProcessor<LogFacade> {
    fn default() -> Self {
        Self::new(ProcessOptions::default())
    }
}

impl<L: Logger> LineProcessor<L> {
    /// Create a processor with an injected logger.
    pub fn with_logger(options: ProcessOptions, logger: L) -> Self {
        Self { options, logger }
    }

    /// The injected logger.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Whether running a command on `view` could do anything.
    pub fn is_available<V: TextView + ?Sized>(&self, view: &V) -> bool {
        view.is_active()
            && (!view.is_empty()
                || self.options.empty_selection == EmptySelectionBehavior::InferBlock)
    }

    /// Resolve the selection, transform its lines and write them back.
    ///
    /// `lines_match` is only consulted for empty selections. `transform` must return as many
    /// lines as it receives.
    pub fn process_selection<V, M, T>(
        &self,
        view: &mut V,
        lines_match: M,
        transform: T,
    ) -> Result<ProcessOutcome, AlignError>
    where
        V: TextView + ?Sized,
        M: Fn(&str, &str) -> bool,
        T: FnOnce(&[String]) -> Vec<String>,
    {
        let resolver = SelectionResolver::new(&self.options, &self.logger);
        let selected = resolver.resolve(view, lines_match)?;
        if selected.is_empty() {
            return Ok(ProcessOutcome::Unchanged);
        }

        // Captured after resolving: a stream selection may have been extended.
        let Some(selection) = Selection::capture(view) else {
            return Ok(ProcessOutcome::Unchanged);
        };

        let transformed = transform(&selected.lines);

        let applier = EditApplier::new(&self.options, &self.logger);
        let snapshot = applier.apply(view, &selection, &selected, &transformed)?;

        Ok(ProcessOutcome::Applied {
            mode: selection.mode,
            line_count: transformed.len(),
            version: snapshot.version(),
        })
    }

    /// Run an alignment command over the view's selection.
    pub fn run<V, A>(
        &self,
        view: &mut V,
        aligner: &A,
        command: AlignCommand,
    ) -> Result<ProcessOutcome, AlignError>
    where
        V: TextView + ?Sized,
        A: Aligner + ?Sized,
    {
        self.logger.debug(command.display_name());
        self.process_selection(
            view,
            |line, candidate| aligner.lines_match(line, candidate),
            |lines| command.transform(aligner, lines),
        )
    }

    /// Run a command and report any failure to the logger.
    ///
    /// Edits committed before a failure stay in the buffer; the host's undo history is the way
    /// back. Returns `true` because the command was handled either way.
    pub fn execute<V, A>(&self, view: &mut V, aligner: &A, command: AlignCommand) -> bool
    where
        V: TextView + ?Sized,
        A: Aligner + ?Sized,
    {
        match self.run(view, aligner, command) {
            Ok(ProcessOutcome::Unchanged) => {
                self.logger.debug(&format!("{command}: nothing to do"));
            }
            Ok(ProcessOutcome::Applied {
                line_count,
                version,
                ..
            }) => {
                self.logger.debug(&format!(
                    "{command}: {line_count} lines updated, generation {version}"
                ));
            }
            Err(err) => {
                self.logger.debug(&format!(
                    "{command} failed at generation {}: {err}",
                    view.snapshot().version()
                ));
            }
        }
        true
    }
}
