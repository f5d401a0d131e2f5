//! Error types.
//!
//! Empty or inactive selections are not errors: they resolve to an empty
//! [`SelectedLines`](crate::SelectedLines) and the pipeline exits without editing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced when reading or editing a [`TextSnapshot`](crate::TextSnapshot).
pub enum SnapshotError {
    #[error("offset {offset} is out of range (document has {len} chars)")]
    /// A character offset lies past the end of the document.
    OffsetOutOfRange {
        /// The offending character offset.
        offset: usize,
        /// Document length in characters.
        len: usize,
    },

    #[error("span {start}..{end} is out of range (document has {len} chars)")]
    /// A span extends past the end of the document.
    SpanOutOfRange {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
        /// Document length in characters.
        len: usize,
    },

    #[error("line {line} is out of range (document has {line_count} lines)")]
    /// A line number lies past the last line.
    LineOutOfRange {
        /// Zero-based line number.
        line: usize,
        /// Number of lines in the document.
        line_count: usize,
    },

    #[error("span belongs to generation {span_version}, snapshot is generation {snapshot_version}")]
    /// A span was used against a generation other than the one it was computed from.
    StaleSpan {
        /// Generation the span was computed against.
        span_version: u64,
        /// Generation of the snapshot it was used with.
        snapshot_version: u64,
    },

    #[error("generation {span_version} is newer than snapshot generation {snapshot_version}")]
    /// A span cannot be translated backwards to an older generation.
    UnknownGeneration {
        /// Generation the span was computed against.
        span_version: u64,
        /// Generation of the snapshot it was translated to.
        snapshot_version: u64,
    },

    #[error("generation {span_version} is older than the oldest tracked generation {oldest}")]
    /// The edits needed to translate a span were dropped from the snapshot's history.
    ForgottenGeneration {
        /// Generation the span was computed against.
        span_version: u64,
        /// Oldest generation the snapshot can still translate from.
        oldest: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures reported by the hosting editor's buffer, selection or caret.
pub enum HostError {
    #[error("buffer is read-only")]
    /// The buffer refused the edit because it is read-only.
    ReadOnly,

    #[error("edit rejected: {0}")]
    /// The host rejected the operation for a host-specific reason.
    Rejected(String),

    #[error(transparent)]
    /// A span or offset handed to the host was invalid.
    Snapshot(#[from] SnapshotError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors returned by the selection processing pipeline.
pub enum AlignError {
    #[error("transform returned {actual} lines for {expected} input lines")]
    /// The aligner broke its same-length contract.
    TransformLengthMismatch {
        /// Number of lines handed to the transform.
        expected: usize,
        /// Number of lines the transform returned.
        actual: usize,
    },

    #[error("box selection has {spans} rows but {lines} lines were resolved")]
    /// The box selection no longer matches the lines resolved from it.
    SelectionShapeMismatch {
        /// Number of box rows in the captured selection.
        spans: usize,
        /// Number of resolved lines.
        lines: usize,
    },

    #[error(transparent)]
    /// A snapshot read or edit failed.
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    /// The host failed to apply an edit or selection change.
    Host(#[from] HostError),
}
