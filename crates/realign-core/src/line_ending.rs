//! Line ending helpers.
//!
//! Snapshot lines are split on LF (`'\n'`) only. A CR directly before an LF is part of the line
//! terminator. Every line keeps its own terminator, so text with mixed endings is written back
//! exactly as it was found.

/// A line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// Unix-style LF (`'\n'`).
    #[default]
    Lf,
    /// Windows-style CRLF (`"\r\n"`).
    Crlf,
}

impl LineEnding {
    /// Split the terminator off a segment that was followed by an LF.
    ///
    /// A trailing CR makes the terminator [`LineEnding::Crlf`] and is removed from the line.
    pub fn split_from(segment: &str) -> (&str, Self) {
        match segment.strip_suffix('\r') {
            Some(line) => (line, Self::Crlf),
            None => (segment, Self::Lf),
        }
    }

    /// The newline sequence as a string slice.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}
