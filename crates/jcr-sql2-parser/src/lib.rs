#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(future_incompatible, unreachable_pub, rust_2018_idioms)]

mod error;
mod lexer;
mod limit;
mod parser;
#[cfg(test)]
mod tests;

pub use crate::error::Error;
pub use crate::lexer::Lexer;
pub use crate::lexer::Token;
pub use crate::lexer::TokenKind;
pub use crate::limit::LimitTracker;
pub use crate::parser::Parser;

/// Parse a JCR-SQL2 query into the default Query Object Model.
///
/// ```rust
/// let query = jcr_sql2_parser::parse("SELECT * FROM [nt:base]").unwrap();
/// assert_eq!(query.to_string(), "SELECT * FROM [nt:base]");
/// ```
pub fn parse(input: &str) -> Result<jcr_qom::Query, Error> {
    Parser::new(input).parse()
}
