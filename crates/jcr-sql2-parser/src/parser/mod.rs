pub(crate) mod grammar;
mod keyword;

pub(crate) use keyword::Keyword;

use std::collections::VecDeque;
use std::fmt;

use jcr_qom::QomFactory;
use jcr_qom::QueryObjectModelFactory;

use crate::lexer::Lexer;
use crate::lexer::Token;
use crate::lexer::TokenKind;
use crate::limit::LimitTracker;
use crate::Error;

const DEFAULT_RECURSION_LIMIT: usize = 128;

/// Parse JCR-SQL2 queries into a Query Object Model.
///
/// A parser is single-use: it binds to one input string and `parse`
/// consumes it. [`Parser::new`] builds the default `jcr_qom` nodes;
/// [`Parser::with_factory`] drives any other [`QueryObjectModelFactory`]
/// implementation over the same grammar.
///
/// ## Example
///
/// ```rust
/// use jcr_sql2_parser::Parser;
///
/// let parser = Parser::new("SELECT * FROM [nt:base] WHERE x = $minimum");
/// let query = parser.parse().unwrap();
///
/// assert_eq!(
///     query.to_string(),
///     "SELECT * FROM [nt:base] WHERE x=$minimum"
/// );
/// ```
pub struct Parser<'a, F = QomFactory> {
    source: &'a str,
    lexer: Lexer<'a>,
    /// Tokens already pulled from the lexer. The grammar looks at most
    /// three tokens ahead.
    buffer: VecDeque<Token<'a>>,
    factory: F,
    recursion_limit: LimitTracker,
}

impl<'a> Parser<'a, QomFactory> {
    /// Create a parser producing the default `jcr_qom` node types.
    pub fn new(input: &'a str) -> Self {
        Self::with_factory(input, QomFactory)
    }
}

impl<'a, F: QueryObjectModelFactory> Parser<'a, F> {
    /// Create a parser that builds its nodes through `factory`.
    pub fn with_factory(input: &'a str, factory: F) -> Self {
        Self {
            source: input,
            lexer: Lexer::new(input),
            buffer: VecDeque::new(),
            factory,
            recursion_limit: LimitTracker::new(DEFAULT_RECURSION_LIMIT),
        }
    }

    /// Configure the nesting depth at which parsing aborts.
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = LimitTracker::new(limit);
        self
    }

    /// Parse the input.
    ///
    /// See: JCR 2.0 specification, §6.7.1 Query
    ///
    /// The `SELECT`, `FROM`, `WHERE` and `ORDER BY` clauses may come in any
    /// order, each at most once. Parsing stops at the first unrecognized
    /// clause keyword; what was accumulated must by then include a source,
    /// otherwise the query is invalid.
    pub fn parse(mut self) -> Result<F::Query, Error> {
        let mut source = None;
        let mut constraint = None;
        let mut orderings = Vec::new();
        let mut columns = Vec::new();
        let mut seen_select = false;
        let mut seen_order = false;

        loop {
            let token = self.peek();
            if token.kind == TokenKind::Eof {
                break;
            }
            match self.keyword() {
                Some(Keyword::From) => {
                    if source.is_some() {
                        return Err(self.err("duplicate FROM clause", token));
                    }
                    self.pop();
                    source = Some(grammar::source::source(&mut self)?);
                }
                Some(Keyword::Select) => {
                    if seen_select {
                        return Err(self.err("duplicate SELECT clause", token));
                    }
                    seen_select = true;
                    self.pop();
                    columns = grammar::column::columns(&mut self)?;
                }
                Some(Keyword::Where) => {
                    if constraint.is_some() {
                        return Err(self.err("duplicate WHERE clause", token));
                    }
                    self.pop();
                    constraint = Some(grammar::constraint::constraint(&mut self)?);
                }
                Some(Keyword::Order) => {
                    if seen_order {
                        return Err(self.err("duplicate ORDER BY clause", token));
                    }
                    seen_order = true;
                    self.pop();
                    self.expect_keyword(Keyword::By)?;
                    orderings = grammar::ordering::orderings(&mut self)?;
                }
                _ => break,
            }
        }

        let Some(source) = source else {
            return Err(Error::InvalidQuery {
                query: self.source.to_string(),
            });
        };
        Ok(self.factory.query(source, constraint, orderings, columns))
    }

    /// Look at the next token without consuming it.
    pub(crate) fn peek(&mut self) -> Token<'a> {
        self.peek_n(0)
    }

    /// Look `n` tokens ahead without consuming; `0` is the next token.
    /// Past the end of input this is the EOF token.
    pub(crate) fn peek_n(&mut self, n: usize) -> Token<'a> {
        while self.buffer.len() <= n {
            match self.lexer.next() {
                Some(token) => self.buffer.push_back(token),
                None => break,
            }
        }
        match self.buffer.get(n) {
            Some(token) => *token,
            None => self.eof_token(),
        }
    }

    /// Consume and return the next token.
    pub(crate) fn pop(&mut self) -> Token<'a> {
        self.peek();
        match self.buffer.pop_front() {
            Some(token) => token,
            None => self.eof_token(),
        }
    }

    fn eof_token(&self) -> Token<'a> {
        Token::new(TokenKind::Eof, "", self.source.len())
    }

    /// Whether the next token has the given kind.
    pub(crate) fn at(&mut self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// The keyword the next token spells, if any.
    pub(crate) fn keyword(&mut self) -> Option<Keyword> {
        self.keyword_at(0)
    }

    /// The keyword `n` tokens ahead, if any.
    pub(crate) fn keyword_at(&mut self, n: usize) -> Option<Keyword> {
        let token = self.peek_n(n);
        if token.kind == TokenKind::Word {
            Keyword::from_token(token.data)
        } else {
            None
        }
    }

    /// Whether the next token spells the given keyword, in any case.
    pub(crate) fn at_keyword(&mut self, keyword: Keyword) -> bool {
        self.keyword() == Some(keyword)
    }

    /// Consume the next token if it has the given kind, or fail.
    pub(crate) fn expect(&mut self, kind: TokenKind, expected: &str) -> Result<Token<'a>, Error> {
        let token = self.peek();
        if token.kind == kind {
            Ok(self.pop())
        } else {
            Err(self.err(format!("expected {expected}"), token))
        }
    }

    /// Consume the next token if it spells the given keyword, or fail.
    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), Error> {
        let token = self.peek();
        if self.at_keyword(keyword) {
            self.pop();
            Ok(())
        } else {
            Err(self.err(format!("expected `{}`", keyword.as_str()), token))
        }
    }

    /// A syntax error at `token`, carrying the full source for diagnostics.
    pub(crate) fn err(&self, message: impl Into<String>, token: Token<'_>) -> Error {
        let found = if token.kind == TokenKind::Eof {
            String::from("EOF")
        } else {
            token.data.to_string()
        };
        Error::Syntax {
            message: message.into(),
            found,
            index: token.index,
            query: self.source.to_string(),
        }
    }

    pub(crate) fn factory(&self) -> &F {
        &self.factory
    }

    /// Enter one level of grammar recursion, failing once past the limit.
    pub(crate) fn enter_recursion(&mut self) -> Result<(), Error> {
        self.recursion_limit.consume();
        if self.recursion_limit.limited() {
            Err(Error::RecursionLimitExceeded {
                limit: self.recursion_limit.limit,
                index: self.peek().index,
            })
        } else {
            Ok(())
        }
    }

    /// Leave one level of grammar recursion.
    pub(crate) fn exit_recursion(&mut self) {
        self.recursion_limit.release();
    }
}

impl<F> fmt::Debug for Parser<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("source", &self.source)
            .field("buffer", &self.buffer)
            .field("recursion_limit", &self.recursion_limit)
            .finish_non_exhaustive()
    }
}
