//! Block inference for empty selections.
//!
//! With only a caret, the lines to process are the contiguous run of lines around the caret's
//! line that look like it. Every candidate is compared against the caret's line, never against
//! its neighbour, so a predicate that is not transitive cannot make the block drift.

use crate::error::SnapshotError;
use crate::snapshot::TextSnapshot;
use std::ops::RangeInclusive;

/// Find the block of lines similar to `line_number`.
///
/// Scans upward from the line above and downward from the line below while
/// `lines_match(initial, candidate)` holds, stopping at the first mismatch or at the document
/// edges. The result always contains `line_number` itself.
pub fn find_block<F>(
    snapshot: &TextSnapshot,
    line_number: usize,
    lines_match: F,
) -> Result<RangeInclusive<usize>, SnapshotError>
where
    F: Fn(&str, &str) -> bool,
{
    let initial = snapshot.line_at(line_number)?;

    let mut first = line_number;
    while first > 0 {
        let candidate = snapshot.line_at(first - 1)?;
        if !lines_match(&initial.text, &candidate.text) {
            break;
        }
        first -= 1;
    }

    let mut last = line_number;
    let line_count = snapshot.line_count();
    while last + 1 < line_count {
        let candidate = snapshot.line_at(last + 1)?;
        if !lines_match(&initial.text, &candidate.text) {
            break;
        }
        last += 1;
    }

    Ok(first..=last)
}
