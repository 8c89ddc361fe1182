use logos::{Logos, SpannedIter};

pub(super) struct Token {
    pub(super) kind: TokenKind,
    pub(super) span: logos::Span,
}

pub(super) struct TokenIter<'a> {
    iter: SpannedIter<'a, LogosTokenKind>,
}

impl<'a> TokenIter<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self {
            iter: LogosTokenKind::lexer(input).spanned(),
        }
    }
}

impl<'a> Iterator for TokenIter<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        match self.iter.next() {
            Some((Ok(kind), span)) => {
                let kind = match kind {
                    LogosTokenKind::Semi => TokenKind::Semi,
                    LogosTokenKind::Word => TokenKind::Word,
                    LogosTokenKind::WS => unreachable!(),
                };
                Some(Token { kind, span })
            }
            // the word rule accepts every byte the other rules don't
            Some((Err(()), span)) => Some(Token {
                kind: TokenKind::Word,
                span,
            }),
            None => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum TokenKind {
    Semi,
    Word,
}

#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
enum LogosTokenKind {
    #[token(";")]
    Semi,
    #[regex(r"[^; \t\r\f\n]+")]
    Word,
    #[regex(r"[ \t\r\f\n]+", logos::skip)]
    WS,
}
