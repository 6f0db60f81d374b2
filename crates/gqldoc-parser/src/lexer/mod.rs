//! Zero-copy, stateless GraphQL lexer.
//!
//! [`lex()`] produces exactly one token starting at a caller-supplied byte
//! offset. There is no lexer object to keep around: the caller threads the
//! previous token's [`end`](crate::token::GraphQLToken::end) back in to get
//! the next one.
//!
//! ```rust
//! use gqldoc_parser::lex;
//! use gqldoc_parser::token::GraphQLTokenKind;
//!
//! let source = "{ name }";
//! let mut offset = 0;
//! let mut kinds = vec![];
//! loop {
//!     let token = lex(source, offset).unwrap();
//!     kinds.push(token.kind);
//!     if token.kind == GraphQLTokenKind::Eof {
//!         break;
//!     }
//!     offset = token.end;
//! }
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::BraceOpen,
//!     GraphQLTokenKind::Name,
//!     GraphQLTokenKind::BraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

mod block_string;
mod char_description;
mod scanner;
mod string_value;

#[cfg(test)]
mod tests;

pub(crate) use char_description::describe_char;

use crate::token::GraphQLToken;
use crate::GraphQLSyntaxError;
use scanner::Scanner;

/// Lexes the next significant token at or after byte `offset` of `source`.
///
/// Ignored characters (whitespace, line terminators, commas, and the byte
/// order mark) are skipped first. `#` comments are *not* ignored: each comment
/// line is returned as its own [`Comment`](crate::token::GraphQLTokenKind::Comment)
/// token so the parser can attach it.
///
/// Lexing at or past the end of `source` always returns an
/// [`Eof`](crate::token::GraphQLTokenKind::Eof) token positioned at
/// `source.len()`.
///
/// Sources are addressed with `u32` offsets, so `source` must be smaller
/// than 4 GiB.
pub fn lex(source: &str, offset: u32) -> Result<GraphQLToken<'_>, GraphQLSyntaxError> {
    Scanner::new(source, offset as usize).next_token()
}

/// Returns `true` if `byte` can start a GraphQL name (`[_A-Za-z]`).
pub(crate) fn is_name_start(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphabetic()
}

/// Returns `true` if `byte` can continue a GraphQL name (`[_0-9A-Za-z]`).
pub(crate) fn is_name_continue(byte: u8) -> bool {
    byte == b'_' || byte.is_ascii_alphanumeric()
}
