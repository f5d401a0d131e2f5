//! The alignment collaborator and the commands built on it.
//!
//! How lines are tokenized and padded is up to the [`Aligner`] implementation. The pipeline only
//! relies on one contract: every transform returns exactly as many lines as it was given.

use std::fmt;
use std::str::FromStr;

/// Line transforms and the line-similarity predicate used to infer blocks.
pub trait Aligner {
    /// Align all lines.
    fn align_all(&self, lines: &[String]) -> Vec<String>;

    /// Align all lines, including extended tokens.
    fn align_all_extended(&self, lines: &[String]) -> Vec<String>;

    /// Remove existing alignment, then align again.
    fn realign_all(&self, lines: &[String]) -> Vec<String>;

    /// Remove existing alignment, then align again, including extended tokens.
    fn realign_all_extended(&self, lines: &[String]) -> Vec<String>;

    /// Realign every line to the column stops of the first line.
    fn realign_to_first_line(&self, lines: &[String]) -> Vec<String>;

    /// Realign every line to the column stops of the first line, including extended tokens.
    fn realign_to_first_line_extended(&self, lines: &[String]) -> Vec<String>;

    /// Remove alignment padding.
    fn unalign_all(&self, lines: &[String]) -> Vec<String>;

    /// Whether `candidate` looks like it belongs in the same block as `line`.
    ///
    /// Callers must not assume the predicate is symmetric or transitive.
    fn lines_match(&self, line: &str, candidate: &str) -> bool;
}

/// The user-facing alignment commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignCommand {
    /// [`Aligner::align_all`]
    Align,
    /// [`Aligner::align_all_extended`]
    AlignExtended,
    /// [`Aligner::realign_all`]
    Realign,
    /// [`Aligner::realign_all_extended`]
    RealignExtended,
    /// [`Aligner::realign_to_first_line`]
    RealignToFirstLine,
    /// [`Aligner::realign_to_first_line_extended`]
    RealignToFirstLineExtended,
    /// [`Aligner::unalign_all`]
    Unalign,
}

impl AlignCommand {
    /// Every command, in menu order.
    pub const ALL: [AlignCommand; 7] = [
        AlignCommand::Align,
        AlignCommand::AlignExtended,
        AlignCommand::Realign,
        AlignCommand::RealignExtended,
        AlignCommand::RealignToFirstLine,
        AlignCommand::RealignToFirstLineExtended,
        AlignCommand::Unalign,
    ];

    /// Name shown to users.
    pub fn display_name(self) -> &'static str {
        match self {
            AlignCommand::Align => "Align Selected Lines",
            AlignCommand::AlignExtended => "Align Selected Lines (Including Extended Tokens)",
            AlignCommand::Realign => "Realign Selected Lines",
            AlignCommand::RealignExtended => "Realign Selected Lines (Extended)",
            AlignCommand::RealignToFirstLine => "Realign Selected Lines to First Line",
            AlignCommand::RealignToFirstLineExtended => {
                "Realign Selected Lines to First Line (Including Extended Tokens)"
            }
            AlignCommand::Unalign => "Unalign Selected Lines",
        }
    }

    /// Stable identifier, suitable for keybinding or settings files.
    pub fn id(self) -> &'static str {
        match self {
            AlignCommand::Align => "align",
            AlignCommand::AlignExtended => "align-extended",
            AlignCommand::Realign => "realign",
            AlignCommand::RealignExtended => "realign-extended",
            AlignCommand::RealignToFirstLine => "realign-to-first-line",
            AlignCommand::RealignToFirstLineExtended => "realign-to-first-line-extended",
            AlignCommand::Unalign => "unalign",
        }
    }

    /// Run this command's transform.
    pub fn transform<A: Aligner + ?Sized>(self, aligner: &A, lines: &[String]) -> Vec<String> {
        match self {
            AlignCommand::Align => aligner.align_all(lines),
            AlignCommand::AlignExtended => aligner.align_all_extended(lines),
            AlignCommand::Realign => aligner.realign_all(lines),
            AlignCommand::RealignExtended => aligner.realign_all_extended(lines),
            AlignCommand::RealignToFirstLine => aligner.realign_to_first_line(lines),
            AlignCommand::RealignToFirstLineExtended => {
                aligner.realign_to_first_line_extended(lines)
            }
            AlignCommand::Unalign => aligner.unalign_all(lines),
        }
    }
}

impl fmt::Display for AlignCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when parsing an unknown command identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown alignment command '{0}'")]
pub struct UnknownCommand(
    /// The unrecognized identifier.
    pub String,
);

impl FromStr for AlignCommand {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlignCommand::ALL
            .into_iter()
            .find(|command| command.id() == s)
            .ok_or_else(|| UnknownCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagging;

    impl Tagging {
        fn tag(tag: &str, lines: &[String]) -> Vec<String> {
            lines.iter().map(|l| format!("{tag}:{l}")).collect()
        }
    }

    impl Aligner for Tagging {
        fn align_all(&self, lines: &[String]) -> Vec<String> {
            Self::tag("a", lines)
        }
        fn align_all_extended(&self, lines: &[String]) -> Vec<String> {
            Self::tag("ax", lines)
        }
        fn realign_all(&self, lines: &[String]) -> Vec<String> {
            Self::tag("r", lines)
        }
        fn realign_all_extended(&self, lines: &[String]) -> Vec<String> {
            Self::tag("rx", lines)
        }
        fn realign_to_first_line(&self, lines: &[String]) -> Vec<String> {
            Self::tag("rf", lines)
        }
        fn realign_to_first_line_extended(&self, lines: &[String]) -> Vec<String> {
            Self::tag("rfx", lines)
        }
        fn unalign_all(&self, lines: &[String]) -> Vec<String> {
            Self::tag("u", lines)
        }
        fn lines_match(&self, _line: &str, _candidate: &str) -> bool {
            true
        }
    }

    #[test]
    fn test_each_command_dispatches_to_its_transform() {
        let lines = vec!["x".to_string()];
        let tags: Vec<String> = AlignCommand::ALL
            .iter()
            .map(|command| command.transform(&Tagging, &lines).remove(0))
            .collect();

        assert_eq!(
            tags,
            vec!["a:x", "ax:x", "r:x", "rx:x", "rf:x", "rfx:x", "u:x"]
        );
    }

    #[test]
    fn test_ids_round_trip_through_from_str() {
        for command in AlignCommand::ALL {
            assert_eq!(command.id().parse::<AlignCommand>(), Ok(command));
        }
        assert_eq!(
            "sideways".parse::<AlignCommand>(),
            Err(UnknownCommand("sideways".to_string()))
        );
    }

    #[test]
    fn test_display_uses_display_name() {
        assert_eq!(AlignCommand::Unalign.to_string(), "Unalign Selected Lines");
    }
}
