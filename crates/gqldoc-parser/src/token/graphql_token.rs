use crate::token::GraphQLTokenKind;
use crate::Location;
use std::borrow::Cow;

/// A GraphQL token: a kind, its byte span, and its payload text.
///
/// `value` borrows from the source text for everything except strings that
/// contained escape sequences and block strings, whose processed content has
/// to be materialized.
///
/// Invariant: `start <= end <= source.len()`. An [`Eof`](GraphQLTokenKind::Eof)
/// token has `start == end == source.len()`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind,

    /// The token's payload. See [`GraphQLTokenKind`] for what each kind
    /// carries.
    pub value: Cow<'src, str>,

    /// Byte offset of the first byte of the token (inclusive).
    pub start: u32,

    /// Byte offset one past the last byte of the token (exclusive). The next
    /// call to [`lex()`](crate::lex) starts here.
    pub end: u32,
}

impl<'src> GraphQLToken<'src> {
    /// Creates a token whose value borrows from the source.
    pub fn borrowed(
        kind: GraphQLTokenKind,
        value: &'src str,
        start: u32,
        end: u32,
    ) -> Self {
        Self {
            kind,
            value: Cow::Borrowed(value),
            start,
            end,
        }
    }

    /// Creates the terminal end-of-input token for a source of `len` bytes.
    pub fn eof(len: u32) -> Self {
        Self::borrowed(GraphQLTokenKind::Eof, "", len, len)
    }

    /// The byte range of this token.
    pub fn location(&self) -> Location {
        Location::new(self.start, self.end)
    }

    /// Returns `true` if this is a `Name` token spelling `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == GraphQLTokenKind::Name && self.value == keyword
    }

    /// Human-readable description used in "found ..." error messages.
    pub(crate) fn describe(&self) -> String {
        match self.kind {
            GraphQLTokenKind::Name
            | GraphQLTokenKind::Int
            | GraphQLTokenKind::Float => format!("`{}`", self.value),
            _ => self.kind.describe().to_string(),
        }
    }
}
