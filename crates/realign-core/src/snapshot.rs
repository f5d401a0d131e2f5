//! Immutable, versioned text snapshots.
//!
//! A [`TextSnapshot`] is one generation of a document. It is never mutated: [`TextSnapshot::replace`]
//! returns the next generation and leaves the receiver untouched. Every snapshot remembers the
//! edits that produced it, so a [`SnapshotSpan`] recorded against an older generation of the same
//! lineage can be [translated](TextSnapshot::translate) forward instead of being reused blindly.
//!
//! All offsets are **character offsets** (Unicode scalar values). Lines are split on LF only; a CR
//! directly before an LF belongs to the line terminator.

use crate::error::SnapshotError;
use ropey::Rope;
use std::sync::Arc;

/// Position coordinates (line and column numbers), ordered by line, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Half-open character range `[start, start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Inclusive start character offset.
    pub start: usize,
    /// Length in characters.
    pub length: usize,
}

impl Span {
    /// Create a span from a start offset and a length.
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Create a span from inclusive start and exclusive end offsets.
    ///
    /// An `end` before `start` yields an empty span at `start`.
    pub fn from_bounds(start: usize, end: usize) -> Self {
        Self {
            start,
            length: end.saturating_sub(start),
        }
    }

    /// Exclusive end character offset.
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// Returns `true` if the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// A [`Span`] tagged with the snapshot generation it was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotSpan {
    /// Generation the span is valid for.
    pub version: u64,
    /// The character range.
    pub span: Span,
}

impl SnapshotSpan {
    /// Tag `span` with a snapshot generation.
    pub fn new(version: u64, span: Span) -> Self {
        Self { version, span }
    }

    /// Inclusive start character offset.
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Exclusive end character offset.
    pub fn end(&self) -> usize {
        self.span.end()
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.span.length
    }

    /// Returns `true` if the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}

/// One edit that turned a generation into the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotEdit {
    /// Start character offset in the generation the edit was applied to.
    pub start: usize,
    /// Number of characters removed.
    pub deleted_len: usize,
    /// Number of characters inserted.
    pub inserted_len: usize,
}

impl SnapshotEdit {
    /// Exclusive end of the deleted range in the pre-edit generation.
    pub fn end(&self) -> usize {
        self.start + self.deleted_len
    }

    // Span starts stay in front of text inserted at their position.
    fn map_start(&self, offset: usize) -> usize {
        if offset <= self.start {
            offset
        } else if offset >= self.end() {
            offset - self.deleted_len + self.inserted_len
        } else {
            self.start
        }
    }

    // Span ends grow over text inserted at their position.
    fn map_end(&self, offset: usize) -> usize {
        if offset < self.start {
            offset
        } else if offset >= self.end() {
            offset - self.deleted_len + self.inserted_len
        } else {
            self.start + self.inserted_len
        }
    }
}

#[derive(Debug)]
struct Generation {
    edit: SnapshotEdit,
    previous: Option<Arc<Generation>>,
}

// Unlink the chain iteratively; the default recursive drop overflows the stack on long
// histories.
impl Drop for Generation {
    fn drop(&mut self) {
        let mut previous = self.previous.take();
        while let Some(generation) = previous {
            previous = Arc::into_inner(generation).and_then(|mut g| g.previous.take());
        }
    }
}

/// A single line of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLine {
    /// Zero-based line number.
    pub line_number: usize,
    /// Character offset of the first character of the line.
    pub start: usize,
    /// Character offset just past the last character, excluding the line break.
    pub end: usize,
    /// Character offset just past the line break (equals `end` on the last line).
    pub end_including_line_break: usize,
    /// Line text without its line break.
    pub text: String,
}

impl SnapshotLine {
    /// Line length in characters, excluding the line break.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the line has no characters besides its line break.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An immutable generation of a document's text.
///
/// Cloning is cheap: the underlying rope shares its chunks between clones and generations.
#[derive(Debug, Clone)]
pub struct TextSnapshot {
    version: u64,
    rope: Rope,
    lineage: Option<Arc<Generation>>,
    oldest: u64,
}

impl TextSnapshot {
    /// Create generation 0 of a document.
    pub fn from_text(text: &str) -> Self {
        Self {
            version: 0,
            rope: Rope::from_str(text),
            lineage: None,
            oldest: 0,
        }
    }

    /// Generation number; incremented by every [`replace`](Self::replace).
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Total character count.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Complete text of this generation.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Number of lines (an empty document, or a trailing LF, counts as a line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the line with the given zero-based number.
    pub fn line_at(&self, line_number: usize) -> Result<SnapshotLine, SnapshotError> {
        let line_count = self.line_count();
        if line_number >= line_count {
            return Err(SnapshotError::LineOutOfRange {
                line: line_number,
                line_count,
            });
        }

        let start = self.rope.line_to_char(line_number);
        let end_including_line_break = self.rope.line_to_char(line_number + 1);
        let raw = self.rope.line(line_number).to_string();

        let text = match raw.strip_suffix('\n') {
            Some(rest) => rest.strip_suffix('\r').unwrap_or(rest).to_string(),
            None => raw,
        };
        let end = start + text.chars().count();

        Ok(SnapshotLine {
            line_number,
            start,
            end,
            end_including_line_break,
            text,
        })
    }

    /// Get the number of the line containing `offset`.
    ///
    /// `offset == len_chars()` is valid and maps to the last line.
    pub fn line_number_at(&self, offset: usize) -> Result<usize, SnapshotError> {
        self.check_offset(offset)?;
        Ok(self.rope.char_to_line(offset))
    }

    /// Convert a character offset to a line/column position.
    pub fn position_of(&self, offset: usize) -> Result<Position, SnapshotError> {
        let line = self.line_number_at(offset)?;
        let line_start = self.rope.line_to_char(line);
        Ok(Position::new(line, offset - line_start))
    }

    /// Convert a line/column position to a character offset.
    ///
    /// Columns past the end of the line are clamped to the line end.
    pub fn offset_of(&self, position: Position) -> Result<usize, SnapshotError> {
        let line = self.line_at(position.line)?;
        Ok(line.start + position.column.min(line.len()))
    }

    /// Create a span tagged with this generation.
    pub fn span(&self, start: usize, length: usize) -> SnapshotSpan {
        SnapshotSpan::new(self.version, Span::new(start, length))
    }

    /// Text covered by `span`, which must belong to this generation.
    pub fn text_of(&self, span: SnapshotSpan) -> Result<String, SnapshotError> {
        self.check_version(span)?;
        self.check_span(span.span)?;
        Ok(self.rope.slice(span.start()..span.end()).to_string())
    }

    /// Replace the text covered by `span` and return the next generation.
    ///
    /// `span` must belong to this generation; use [`translate`](Self::translate) first for spans
    /// recorded against an older one.
    pub fn replace(&self, span: SnapshotSpan, text: &str) -> Result<TextSnapshot, SnapshotError> {
        self.check_version(span)?;
        self.check_span(span.span)?;

        let mut rope = self.rope.clone();
        rope.remove(span.start()..span.end());
        rope.insert(span.start(), text);

        let edit = SnapshotEdit {
            start: span.start(),
            deleted_len: span.len(),
            inserted_len: text.chars().count(),
        };
        log::trace!(
            target: "realign::snapshot",
            "generation {} -> {}: {:?}",
            self.version,
            self.version + 1,
            edit
        );

        Ok(Self {
            version: self.version + 1,
            rope,
            lineage: Some(Arc::new(Generation {
                edit,
                previous: self.lineage.clone(),
            })),
            oldest: self.oldest,
        })
    }

    /// Map a span recorded against an older generation of this lineage onto this generation.
    ///
    /// Tracking is edge-inclusive: text inserted exactly at either edge of the span ends up
    /// inside the translated span's end, but never moves its start.
    pub fn translate(&self, span: SnapshotSpan) -> Result<SnapshotSpan, SnapshotError> {
        let mut start = span.start();
        let mut end = span.end();
        for edit in self.edits_since(span.version)? {
            start = edit.map_start(start);
            end = edit.map_end(end).max(start);
        }
        Ok(SnapshotSpan::new(self.version, Span::from_bounds(start, end)))
    }

    /// Oldest generation spans can still be translated from.
    pub fn oldest_tracked(&self) -> u64 {
        self.oldest
    }

    /// The same generation with its history cut off before `version`.
    ///
    /// Spans recorded against generations older than `version` can no longer be translated
    /// and fail with [`SnapshotError::ForgottenGeneration`]. `version` is clamped to the
    /// tracked range.
    pub fn forget_before(&self, version: u64) -> TextSnapshot {
        let oldest = version.clamp(self.oldest, self.version);

        let mut lineage = None;
        for edit in self.edits_since(oldest).unwrap_or_default() {
            lineage = Some(Arc::new(Generation {
                edit,
                previous: lineage,
            }));
        }

        Self {
            version: self.version,
            rope: self.rope.clone(),
            lineage,
            oldest,
        }
    }

    /// Edits applied since generation `version`, oldest first.
    pub fn edits_since(&self, version: u64) -> Result<Vec<SnapshotEdit>, SnapshotError> {
        if version > self.version {
            return Err(SnapshotError::UnknownGeneration {
                span_version: version,
                snapshot_version: self.version,
            });
        }
        if version < self.oldest {
            return Err(SnapshotError::ForgottenGeneration {
                span_version: version,
                oldest: self.oldest,
            });
        }

        let mut edits = Vec::with_capacity((self.version - version) as usize);
        let mut node = self.lineage.as_deref();
        let mut current = self.version;
        while current > version {
            let Some(generation) = node else {
                return Err(SnapshotError::UnknownGeneration {
                    span_version: version,
                    snapshot_version: self.version,
                });
            };
            edits.push(generation.edit);
            node = generation.previous.as_deref();
            current -= 1;
        }

        edits.reverse();
        Ok(edits)
    }

    fn check_version(&self, span: SnapshotSpan) -> Result<(), SnapshotError> {
        if span.version == self.version {
            Ok(())
        } else {
            Err(SnapshotError::StaleSpan {
                span_version: span.version,
                snapshot_version: self.version,
            })
        }
    }

    fn check_offset(&self, offset: usize) -> Result<(), SnapshotError> {
        let len = self.len_chars();
        if offset > len {
            return Err(SnapshotError::OffsetOutOfRange { offset, len });
        }
        Ok(())
    }

    fn check_span(&self, span: Span) -> Result<(), SnapshotError> {
        let len = self.len_chars();
        if span.end() > len {
            return Err(SnapshotError::SpanOutOfRange {
                start: span.start,
                end: span.end(),
                len,
            });
        }
        Ok(())
    }
}
