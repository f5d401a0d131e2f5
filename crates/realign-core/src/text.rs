use crate::line_ending::LineEnding;

/// Lines of a selected region and the terminator that followed each line but the last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SplitLines {
    pub(crate) lines: Vec<String>,
    pub(crate) breaks: Vec<LineEnding>,
}

/// Split selected text into lines.
///
/// `str::split('\n')` preserves trailing empty segments, which matches typical editor line
/// semantics (N newlines => N+1 lines). A CR is only treated as part of a terminator when an LF
/// follows it, so a selection that ends between `'\r'` and `'\n'` keeps its dangling CR.
pub(crate) fn split_lines(text: &str) -> SplitLines {
    let mut split = SplitLines::default();
    let mut segments = text.split('\n').peekable();

    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            split.lines.push(segment.to_string());
            break;
        }
        let (line, ending) = LineEnding::split_from(segment);
        split.lines.push(line.to_string());
        split.breaks.push(ending);
    }

    split
}

/// Join lines back together.
///
/// Line `i` is followed by `breaks[i]`, or by `fixed` when a line ending is forced. Missing
/// breaks fall back to LF.
pub(crate) fn join_lines<S: AsRef<str>>(
    lines: &[S],
    breaks: &[LineEnding],
    fixed: Option<LineEnding>,
) -> String {
    let mut joined = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            let ending = fixed
                .or_else(|| breaks.get(i - 1).copied())
                .unwrap_or_default();
            joined.push_str(ending.as_str());
        }
        joined.push_str(line.as_ref());
    }
    joined
}
