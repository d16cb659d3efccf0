//! Whitespace and punctuation normalization
//!
//! [`sanitize`] cleans one physical line of text; [`needs_space`] decides
//! whether a separating space belongs between two consecutive tokens when the
//! formatter joins heterogeneous values into prose.

/// Punctuation that never takes a preceding space.
const NO_SPACE_BEFORE: [char; 6] = [',', '.', '!', '?', ':', ';'];

/// Normalize one line of text.
///
/// Trims leading and trailing whitespace, collapses internal whitespace runs
/// to a single space, and removes spaces before sentence punctuation, after
/// `(` and before `)`. Pure and idempotent.
pub fn sanitize(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut pending_space = false;
    for ch in line.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            let after_open = out.ends_with('(');
            let before_punct = ch == ')' || NO_SPACE_BEFORE.contains(&ch);
            if !out.is_empty() && !after_open && !before_punct {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(ch);
    }
    out
}

/// Whether a single space belongs between two consecutive tokens.
///
/// Rules, evaluated in order: no space after a token ending in whitespace or
/// an opening bracket, no space before a token starting with a closing
/// bracket or `. , ; !`, no space after an empty token, otherwise one space.
pub fn needs_space(prev: &str, next: &str) -> bool {
    match prev.chars().last() {
        None => return false,
        Some(c) if c.is_whitespace() => return false,
        Some('(' | '[' | '{') => return false,
        Some(_) => {}
    }
    !matches!(
        next.chars().next(),
        Some(')' | ']' | '}' | '.' | ',' | ';' | '!')
    )
}
