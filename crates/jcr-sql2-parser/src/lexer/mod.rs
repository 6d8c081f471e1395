mod cursor;
mod token;
mod token_kind;

use cursor::Cursor;

pub use token::Token;
pub use token_kind::TokenKind;

/// Splits a JCR-SQL2 source into tokens, lazily and without copying: every
/// token's text is a subslice of the input.
///
/// Quoted strings and bracketed names are single tokens including their
/// delimiters, so whitespace inside them survives verbatim. A quoted string
/// the input ends inside is still emitted (without its closing quote); the
/// parser reports it as unterminated.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// Scan past the matching `delimiter`, inclusive. No nesting.
    fn delimited(&mut self, delimiter: char) {
        while let Some(c) = self.cursor.bump() {
            if c == delimiter {
                break;
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        self.cursor.eat_while(|c| c.is_ascii_whitespace());
        if self.cursor.is_eof() {
            return None;
        }

        let index = self.cursor.offset();
        let first = self.cursor.bump()?;

        let kind = match first {
            '[' => {
                self.delimited(']');
                TokenKind::Bracketed
            }
            quote @ ('\'' | '"') => {
                self.delimited(quote);
                TokenKind::Quoted
            }
            '<' => {
                if self.cursor.eat_if('=') {
                    TokenKind::LtEq
                } else if self.cursor.eat_if('>') {
                    TokenKind::NotEq
                } else {
                    TokenKind::Lt
                }
            }
            '>' => {
                if self.cursor.eat_if('=') {
                    TokenKind::GtEq
                } else {
                    TokenKind::Gt
                }
            }
            '=' => TokenKind::Eq,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '*' => TokenKind::Star,
            '$' => TokenKind::Dollar,
            _ => {
                self.cursor.eat_while(is_word_char);
                TokenKind::Word
            }
        };

        Some(Token::new(kind, self.cursor.slice_from(index), index))
    }
}

fn is_word_char(c: char) -> bool {
    !c.is_ascii_whitespace() && !is_delimiter_char(c)
}

fn is_delimiter_char(c: char) -> bool {
    matches!(
        c,
        '[' | ']' | '\'' | '"' | ',' | '.' | '(' | ')' | '*' | '$' | '=' | '<' | '>'
    )
}
