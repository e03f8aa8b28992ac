/// Word separators for command lines.
pub const DELIMITERS: &str = " \t";

/// Splits `line` on any character of `delimiters`.
///
/// Runs of delimiters collapse, so no empty token is ever produced. With a
/// nonzero `max`, only the first `max` words are returned and the rest of the
/// line is dropped. Returns `None` when there is nothing to split: an empty or
/// all-delimiter line, or an empty delimiter set.
pub fn split(line: &str, delimiters: &str, max: usize) -> Option<Vec<String>> {
    if line.is_empty() || delimiters.is_empty() {
        return None;
    }

    let limit = if max == 0 { usize::MAX } else { max };
    let tokens: Vec<String> = line
        .split(|c: char| delimiters.contains(c))
        .filter(|word| !word.is_empty())
        .take(limit)
        .map(String::from)
        .collect();

    (!tokens.is_empty()).then_some(tokens)
}
