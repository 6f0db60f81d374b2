//! A GraphQL document lexer, parser and canonical printer.
//!
//! Source text is tokenized by [`lex()`], parsed into an [`ast::Document`]
//! by [`parse()`], and rendered back to canonical GraphQL by
//! [`print_document()`]. Parsed nodes borrow their text from the source
//! wherever possible and carry source locations and `#` comments only when
//! asked to (see [`IgnoreOptions`]).
//!
//! ```rust
//! use gqldoc_parser::parse_with_default_options;
//! use gqldoc_parser::print_document;
//!
//! let doc = parse_with_default_options("query   Q{me{name}}").unwrap();
//! assert_eq!(print_document(&doc), "query Q {\n  me {\n    name\n  }\n}\n");
//! ```

pub mod ast;
pub mod lexer;
mod location;
mod parse_options;
mod parser;
pub mod printer;
mod reserved_name_context;
mod source_position;
mod syntax_error;
mod syntax_error_kind;
pub mod token;

pub use lexer::lex;
pub use location::Location;
pub use parse_options::IgnoreOptions;
pub use parse_options::ParseOptions;
pub use parser::GraphQLParser;
pub use printer::print_document;
pub use printer::GraphQLPrinter;
pub use printer::PrintError;
pub use printer::PrintOptions;
pub use reserved_name_context::ReservedNameContext;
pub use smallvec::smallvec;
pub use smallvec::SmallVec;
pub use source_position::SourcePosition;
pub use syntax_error::GraphQLSyntaxError;
pub use syntax_error_kind::ExpectedTokens;
pub use syntax_error_kind::GraphQLSyntaxErrorKind;

/// Parses `source` into a [`Document`](ast::Document).
pub fn parse(
    source: &str,
    options: ParseOptions,
) -> Result<ast::Document<'_>, GraphQLSyntaxError> {
    GraphQLParser::new(source, options).parse_document()
}

/// Parses `source` retaining comments and locations, with the default depth
/// limit.
pub fn parse_with_default_options(
    source: &str,
) -> Result<ast::Document<'_>, GraphQLSyntaxError> {
    parse(source, ParseOptions::default())
}

#[cfg(test)]
mod tests;
