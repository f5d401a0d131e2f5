#![warn(missing_docs)]
//! Realign Core - Selection-Driven Line Realignment Engine
//!
//! # Overview
//!
//! `realign-core` resolves an editor's current selection into an ordered list of lines, hands
//! them to a line transform (typically one of the [`Aligner`] commands), and writes the result
//! back while reproducing the shape of the original selection: its extent, its orientation and
//! the caret position.
//!
//! The engine is headless. It talks to the hosting editor only through the capability traits in
//! [`host`], and to the document only through immutable, versioned [`TextSnapshot`]s.
//!
//! # Selection Topologies
//!
//! - **Box**: one span per row. Rows are rewritten bottom-up and the box is reselected over the
//!   new text.
//! - **Stream**: one contiguous span, first extended back to the start of its first line so the
//!   columns of every line line up.
//! - **Empty**: a bare caret. The block of similar lines around the caret is inferred with
//!   [`Aligner::lines_match`], rewritten in one edit, and the caret returns to the same line and
//!   column.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  LineProcessor (resolve → transform → apply)│  ← Public API
//! ├──────────────────────┬──────────────────────┤
//! │  SelectionResolver   │  EditApplier         │  ← Selection logic
//! │  + block matcher     │                      │
//! ├──────────────────────┴──────────────────────┤
//! │  Host capabilities (buffer/selection/caret) │  ← Editor integration
//! ├─────────────────────────────────────────────┤
//! │  TextSnapshot generations (Rope-based)      │  ← Text storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use realign_core::{LineProcessor, MemoryView, Position, ProcessOptions};
//!
//! let mut view = MemoryView::new("let a = 1;\nlet bcd = 2;\n");
//! view.set_caret_position(Position::new(0, 3)).unwrap();
//!
//! // Every line shares the "let" prefix, so both lines form the inferred block.
//! let processor = LineProcessor::new(ProcessOptions::default());
//! processor
//!     .process_selection(
//!         &mut view,
//!         |line, candidate| line.split_whitespace().next() == candidate.split_whitespace().next(),
//!         |lines| lines.iter().map(|l| l.to_uppercase()).collect(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(view.text(), "LET A = 1;\nLET BCD = 2;\n");
//! ```
//!
//! # Module Description
//!
//! - [`snapshot`] - Immutable text generations, spans and span translation
//! - [`host`] - Buffer, selection and caret capabilities provided by the editor
//! - [`matcher`] - Block inference around a caret
//! - [`resolver`] - Selection classification and line extraction
//! - [`applier`] - Writing transformed lines back and restoring the selection
//! - [`pipeline`] - The [`LineProcessor`] entry point
//! - [`aligner`] - The [`Aligner`] collaborator and [`AlignCommand`]s
//! - [`options`] - Processing options
//! - [`logger`] - Injected diagnostic sinks
//! - [`error`] - Error types
//! - [`line_ending`] - Line ending detection and joining
//! - [`memory`] - An in-memory host for tests and demos

pub mod aligner;
pub mod applier;
pub mod error;
pub mod host;
pub mod line_ending;
pub mod logger;
pub mod matcher;
pub mod memory;
pub mod options;
pub mod pipeline;
pub mod resolver;
mod selection;
pub mod snapshot;
mod text;

pub use aligner::{AlignCommand, Aligner, UnknownCommand};
pub use applier::EditApplier;
pub use error::{AlignError, HostError, SnapshotError};
pub use host::{Caret, TextBuffer, TextSelectionMode, TextView, ViewSelection};
pub use line_ending::LineEnding;
pub use logger::{BufferedLogger, LogFacade, Logger};
pub use matcher::find_block;
pub use memory::MemoryView;
pub use options::{EmptySelectionBehavior, ProcessOptions};
pub use pipeline::{LineProcessor, ProcessOutcome};
pub use resolver::SelectionResolver;
pub use selection::{SelectedLines, Selection, SelectionMode};
pub use snapshot::{Position, SnapshotEdit, SnapshotLine, SnapshotSpan, Span, TextSnapshot};
