#![allow(dead_code)]

use realign_core::Aligner;

/// Deterministic aligner: tokens are whitespace-separated words, columns are padded to the
/// widest token in that column, and lines "match" when they have the same number of tokens.
pub struct ColumnAligner;

fn tokens(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

fn layout(tokens: &[&str], widths: &[usize]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token);
        if i + 1 < tokens.len() {
            let width = widths.get(i).copied().unwrap_or(0);
            let pad = width.saturating_sub(token.chars().count());
            out.extend(std::iter::repeat_n(' ', pad));
        }
    }
    out
}

fn column_widths(rows: &[Vec<&str>]) -> Vec<usize> {
    let mut widths: Vec<usize> = Vec::new();
    for row in rows {
        for (i, token) in row.iter().enumerate() {
            let len = token.chars().count();
            if i == widths.len() {
                widths.push(len);
            } else {
                widths[i] = widths[i].max(len);
            }
        }
    }
    widths
}

impl ColumnAligner {
    fn align(lines: &[String]) -> Vec<String> {
        let rows: Vec<Vec<&str>> = lines.iter().map(|l| tokens(l)).collect();
        let widths = column_widths(&rows);
        rows.iter().map(|row| layout(row, &widths)).collect()
    }

    fn unalign(lines: &[String]) -> Vec<String> {
        lines.iter().map(|l| tokens(l).join(" ")).collect()
    }

    fn to_first_line(lines: &[String]) -> Vec<String> {
        let rows: Vec<Vec<&str>> = lines.iter().map(|l| tokens(l)).collect();
        let widths = column_widths(&rows[..rows.len().min(1)]);
        rows.iter().map(|row| layout(row, &widths)).collect()
    }
}

impl Aligner for ColumnAligner {
    fn align_all(&self, lines: &[String]) -> Vec<String> {
        Self::align(lines)
    }

    fn align_all_extended(&self, lines: &[String]) -> Vec<String> {
        Self::align(lines)
    }

    fn realign_all(&self, lines: &[String]) -> Vec<String> {
        Self::align(&Self::unalign(lines))
    }

    fn realign_all_extended(&self, lines: &[String]) -> Vec<String> {
        Self::align(&Self::unalign(lines))
    }

    fn realign_to_first_line(&self, lines: &[String]) -> Vec<String> {
        Self::to_first_line(lines)
    }

    fn realign_to_first_line_extended(&self, lines: &[String]) -> Vec<String> {
        Self::to_first_line(lines)
    }

    fn unalign_all(&self, lines: &[String]) -> Vec<String> {
        Self::unalign(lines)
    }

    fn lines_match(&self, line: &str, candidate: &str) -> bool {
        tokens(line).len() == tokens(candidate).len()
    }
}

/// Breaks the same-length contract by dropping the last line.
pub struct LossyAligner;

impl LossyAligner {
    fn drop_last(lines: &[String]) -> Vec<String> {
        lines[..lines.len().saturating_sub(1)].to_vec()
    }
}

impl Aligner for LossyAligner {
    fn align_all(&self, lines: &[String]) -> Vec<String> {
        Self::drop_last(lines)
    }

    fn align_all_extended(&self, lines: &[String]) -> Vec<String> {
        Self::drop_last(lines)
    }

    fn realign_all(&self, lines: &[String]) -> Vec<String> {
        Self::drop_last(lines)
    }

    fn realign_all_extended(&self, lines: &[String]) -> Vec<String> {
        Self::drop_last(lines)
    }

    fn realign_to_first_line(&self, lines: &[String]) -> Vec<String> {
        Self::drop_last(lines)
    }

    fn realign_to_first_line_extended(&self, lines: &[String]) -> Vec<String> {
        Self::drop_last(lines)
    }

    fn unalign_all(&self, lines: &[String]) -> Vec<String> {
        Self::drop_last(lines)
    }

    fn lines_match(&self, _line: &str, _candidate: &str) -> bool {
        true
    }
}
