use crate::ReservedNameContext;
use smallvec::SmallVec;

/// What the parser was prepared to accept at the point of an
/// [`UnexpectedToken`](GraphQLSyntaxErrorKind::UnexpectedToken) error. Almost
/// always one or two entries.
pub type ExpectedTokens = SmallVec<[String; 2]>;

/// Categorizes syntax errors for programmatic handling.
///
/// Each variant contains the minimal data needed for programmatic decisions.
/// The full human-readable description lives in
/// [`GraphQLSyntaxError::message()`](crate::GraphQLSyntaxError::message).
///
/// The first five variants are raised by the lexer; the rest by the parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphQLSyntaxErrorKind {
    /// A control character outside of any string or comment, or a control
    /// character other than tab inside a string.
    ///
    /// ```text
    /// { a\u{0007} }
    ///    ^ invalid character
    /// ```
    #[error("invalid character")]
    InvalidCharacter,

    /// A character that cannot start any token (e.g. `?`, a lone `.`, or a
    /// non-ASCII letter outside of a string).
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// A malformed numeric literal: leading zeros, missing digits after `.`
    /// or an exponent marker, or a `.`/name character glued to a number.
    ///
    /// ```text
    /// { f(a: 012) }
    ///         ^ unexpected digit after 0
    /// ```
    #[error("invalid number")]
    InvalidNumber,

    /// An unknown escape sequence or a malformed `\uXXXX` escape.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// A string or block string with no closing quote(s).
    #[error("unterminated string")]
    UnterminatedString,

    /// The parser expected one of `expected` but found `found`.
    ///
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ expected `:`, found `String`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        /// What was expected (e.g. `` ["`:`"] `` or `["name"]`).
        expected: ExpectedTokens,
        /// Description of what was found.
        found: String,
    },

    /// A specific keyword (e.g. `on`, `scalar`) was required.
    #[error("expected keyword `{keyword}`")]
    ExpectedKeyword {
        keyword: String,
    },

    /// A top-level token that cannot begin any definition, or a description
    /// followed by something that cannot carry a description.
    #[error("unexpected definition")]
    UnexpectedDefinition,

    /// Nesting exceeded the configured maximum depth.
    #[error("maximum depth of {max_depth} exceeded")]
    MaxDepthExceeded {
        max_depth: u32,
    },

    /// An `extend` form with none of its optional parts present.
    ///
    /// ```text
    /// extend scalar Date
    /// ^^^^^^^^^^^^^^^^^^ scalar extension requires directives
    /// ```
    #[error("empty extension")]
    EmptyExtension,

    /// A bracketed list that requires at least one item was empty, e.g.
    /// `{ }` as a selection set or `()` as arguments.
    #[error("empty list")]
    EmptyList,

    /// A name that is reserved in its context.
    #[error("reserved {context}: `{name}`")]
    ReservedName {
        name: String,
        context: ReservedNameContext,
    },

    /// A directive definition location that is not one of the known
    /// executable or type-system locations.
    #[error("invalid directive location: `{location}`")]
    InvalidDirectiveLocation {
        location: String,
    },

    /// A `$variable` inside a constant value (default values and type-system
    /// directive arguments).
    #[error("variable in constant value")]
    VariableInConstContext,
}

impl GraphQLSyntaxErrorKind {
    /// Returns `true` for errors raised while tokenizing.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::InvalidCharacter
                | Self::UnexpectedCharacter
                | Self::InvalidNumber
                | Self::InvalidEscape
                | Self::UnterminatedString
        )
    }
}
