//! Normalization of raw Telesis text and iteration over its segments.
//!
//! Telesis documents wrap lines freely and use `\` as line-continuation
//! noise, so the sections are parsed from a flattened single-line stream.
//! [`normalize`] produces that stream; [`segments`] walks its `;`-separated
//! segments as word lists.

mod lexer;

use lexer::{Token, TokenIter, TokenKind};

/// Collapse a raw document into a single-line, single-spaced token stream.
///
/// Every `\` is dropped, line breaks count as whitespace, whitespace runs
/// shrink to one space and the ends are trimmed. Nothing else is touched, so
/// the `;`, `!` and `'` delimiters and the `$`-markers survive for the
/// section parsers.
pub(crate) fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '\\' {
            continue;
        }
        if c.is_whitespace() {
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Iterate the `;`-separated segments of a section as word lists.
///
/// Splitting happens at the token level, so a delimiter glued to a word
/// (`R1;FP!X`) still separates two segments. `n` delimiters yield `n + 1`
/// segments, blank ones included.
pub(crate) fn segments(input: &str) -> Segments<'_> {
    Segments {
        input,
        iter: TokenIter::new(input),
        done: false,
    }
}

pub(crate) struct Segments<'a> {
    input: &'a str,
    iter: TokenIter<'a>,
    done: bool,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut words = Vec::new();
        loop {
            match self.iter.next() {
                Some(Token {
                    kind: TokenKind::Word,
                    span,
                }) => words.push(&self.input[span]),
                Some(Token {
                    kind: TokenKind::Semi,
                    ..
                }) => return Some(words),
                None => {
                    self.done = true;
                    return Some(words);
                }
            }
        }
    }
}
