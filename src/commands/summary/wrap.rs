use crate::util::PROGRAM_NAME;

const LITERAL_LINK_PREFIX: &str = "https://";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineClass {
    /// URL, invocation or indented line; emitted byte-for-byte.
    Literal,
    Blank,
    Prose,
}

fn classify_line(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.starts_with(LITERAL_LINK_PREFIX)
        || is_invocation(trimmed)
        || line.starts_with([' ', '\t'])
    {
        LineClass::Literal
    } else if trimmed.is_empty() {
        LineClass::Blank
    } else {
        LineClass::Prose
    }
}

fn is_invocation(trimmed: &str) -> bool {
    trimmed
        .strip_prefix(PROGRAM_NAME)
        .is_some_and(|rest| rest.starts_with(' '))
}

/// Reflows prose lines to `width` columns, one source line at a time.
///
/// Line breaks in the input are kept, including a trailing one. A `width` of
/// zero is treated as one.
pub(super) fn wrap(text: &str, width: usize) -> String {
    let width = width.max(1);
    text.split('\n')
        .map(|line| match classify_line(line) {
            LineClass::Literal => line.to_string(),
            LineClass::Blank => String::new(),
            LineClass::Prose => reflow(line, width),
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn reflow(line: &str, width: usize) -> String {
    let mut lines = Vec::<String>::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        if current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        current.push(' ');
        current.push_str(word);
        current_width += 1 + word_width;
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}
