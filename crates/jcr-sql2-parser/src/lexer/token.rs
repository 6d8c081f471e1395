use std::fmt;

use crate::lexer::TokenKind;

/// One token of a JCR-SQL2 source: its kind, its verbatim text, and the
/// byte offset it starts at. The text is always a subslice of the source,
/// with no case folding applied.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub(crate) kind: TokenKind,
    pub(crate) data: &'a str,
    pub(crate) index: usize,
}

impl<'a> Token<'a> {
    pub(crate) fn new(kind: TokenKind, data: &'a str, index: usize) -> Self {
        Self { kind, data, index }
    }

    /// The token's kind.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The token's verbatim text.
    pub fn data(&self) -> &'a str {
        self.data
    }

    /// Byte offset of the token in the source.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.index;
        let end = self.index + self.data.len();

        match self.kind {
            TokenKind::Word | TokenKind::Bracketed | TokenKind::Quoted => {
                write!(f, "{}@{}:{} {:?}", self.kind.name(), start, end, self.data)
            }
            _ => write!(f, "{}@{}:{}", self.kind.name(), start, end),
        }
    }
}
