//! Classification of a single input line.

use crate::graph::mapping::ExternalId;

/// What one trimmed input line contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Line<'a> {
    /// Blank line or comment.
    Ignored,
    /// `p <format> n m`; carries `n` when it is an unsigned integer.
    Problem(Option<usize>),
    /// `e u v`.
    Edge(&'a str, &'a str),
    /// Bare two-token line: an edge, or possibly an `n m` header.
    Pair(&'a str, &'a str),
    /// Anything else.
    Malformed,
}

impl<'a> Line<'a> {
    pub(super) fn classify(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('c') {
            return Line::Ignored;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["p", rest @ ..] => {
                let count = match rest {
                    [_, n, _, ..] if n.bytes().all(|b| b.is_ascii_digit()) => n.parse().ok(),
                    _ => None,
                };
                Line::Problem(count)
            }
            ["e", u, v, ..] => Line::Edge(*u, *v),
            ["e", ..] => Line::Malformed,
            [a, b] => Line::Pair(*a, *b),
            _ => Line::Malformed,
        }
    }
}

/// Parses an external vertex label.
pub(super) fn parse_id(token: &str) -> Option<ExternalId> {
    token.parse().ok()
}
