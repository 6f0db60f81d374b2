//! Recursive-descent parser producing a [`Document`].
//!
//! [`GraphQLParser`] pulls tokens from [`lex()`] one at a time, threading the
//! end offset of each token into the next call. Productions live in sibling
//! modules as further `impl GraphQLParser` blocks; this module holds the
//! parser state and the plumbing they share:
//!
//! - **comment groups**: the token-advance step gathers consecutive `#`
//!   comments into a pending group, which the next node production claims
//!   via [`take_comments()`](GraphQLParser::take_comments);
//! - **locations**: a node spans from its first token's start to the end of
//!   the last token consumed before it returned;
//! - **depth guard**: selection sets, list values, object values and list
//!   types count against [`ParseOptions::effective_max_depth()`].

mod executable;
mod extensions;
mod type_system;
mod types;
mod values;

use crate::ast::Comment;
use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Name;
use crate::lex;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::Location;
use crate::ParseOptions;
use smallvec::smallvec;

pub(crate) type ParseResult<T> = Result<T, GraphQLSyntaxError>;

/// Keywords that begin a type-system definition and may therefore follow a
/// description.
const DESCRIBABLE_KEYWORDS: &[&str] = &[
    "schema",
    "scalar",
    "type",
    "interface",
    "union",
    "enum",
    "input",
    "directive",
];

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for a single GraphQL document.
///
/// A parser is consumed by [`parse_document()`](Self::parse_document); create
/// one per source text.
///
/// ```
/// use gqldoc_parser::GraphQLParser;
/// use gqldoc_parser::ParseOptions;
///
/// let doc = GraphQLParser::new("{ me { name } }", ParseOptions::default())
///     .parse_document()
///     .unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub struct GraphQLParser<'src> {
    source: &'src str,
    options: ParseOptions,
    max_depth: u32,

    /// The current lookahead token. Never a comment.
    token: GraphQLToken<'src>,

    /// End offset of the most recently consumed token.
    prev_end: u32,

    depth: u32,

    /// The most recent comment group not yet claimed by a node.
    pending_comments: Option<Vec<Comment<'src>>>,

    unattached_comments: Vec<Vec<Comment<'src>>>,
}

impl<'src> GraphQLParser<'src> {
    pub fn new(source: &'src str, options: ParseOptions) -> Self {
        Self {
            source,
            options,
            max_depth: options.effective_max_depth(),
            token: GraphQLToken::eof(0),
            prev_end: 0,
            depth: 0,
            pending_comments: None,
            unattached_comments: Vec::new(),
        }
    }

    // =========================================================================
    // Document entry point
    // =========================================================================

    /// Parses the whole source as a document. The first error aborts the
    /// parse.
    pub fn parse_document(mut self) -> ParseResult<Document<'src>> {
        log::debug!(
            "parsing document ({} bytes, ignore={:?}, max_depth={})",
            self.source.len(),
            self.options.ignore,
            self.max_depth,
        );

        self.fill(0)?;

        let mut definitions = Vec::new();
        while self.token.kind != GraphQLTokenKind::Eof {
            definitions.push(self.parse_definition()?);
        }

        if let Some(group) = self.pending_comments.take() {
            log::trace!("flushing trailing comment group ({} lines)", group.len());
            self.unattached_comments.push(group);
        }

        let location = (!self.options.ignore.ignores_locations())
            .then(|| Location::new(0, self.source.len() as u32));

        log::debug!(
            "parsed {} definitions ({} unattached comment groups)",
            definitions.len(),
            self.unattached_comments.len(),
        );

        Ok(Document {
            definitions,
            unattached_comments: self.unattached_comments,
            location,
        })
    }

    /// Dispatches on the keyword that opens a definition. A leading
    /// description is looked past without being consumed, so the definition
    /// production itself can claim the description's comment group and
    /// location start.
    fn parse_definition(&mut self) -> ParseResult<Definition<'src>> {
        let described = self.peek_is_description();
        let keyword_token = if described {
            self.peek_past_description()?
        } else {
            self.token.clone()
        };

        match keyword_token.kind {
            GraphQLTokenKind::BraceOpen if !described => {
                Ok(Definition::OperationDefinition(self.parse_operation_definition()?))
            }
            GraphQLTokenKind::Name => {
                let keyword = keyword_token.value.as_ref();
                if described && !DESCRIBABLE_KEYWORDS.contains(&keyword) {
                    return Err(Self::description_not_allowed(&keyword_token));
                }
                match keyword {
                    "query" | "mutation" | "subscription" => Ok(
                        Definition::OperationDefinition(self.parse_operation_definition()?),
                    ),
                    "fragment" => {
                        Ok(Definition::FragmentDefinition(self.parse_fragment_definition()?))
                    }
                    "schema" => Ok(Definition::SchemaDefinition(self.parse_schema_definition()?)),
                    "scalar" | "type" | "interface" | "union" | "enum" | "input" => {
                        Ok(Definition::TypeDefinition(self.parse_type_definition(keyword)?))
                    }
                    "directive" => {
                        Ok(Definition::DirectiveDefinition(self.parse_directive_definition()?))
                    }
                    "extend" => self.parse_extension(),
                    _ => Err(Self::unexpected_definition(&keyword_token)),
                }
            }
            _ if described => Err(Self::description_not_allowed(&keyword_token)),
            _ => Err(Self::unexpected_definition(&keyword_token)),
        }
    }

    fn unexpected_definition(token: &GraphQLToken<'src>) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(
            format!(
                "Expected a definition (an operation, fragment, type-system definition, \
                 or extension), found {}",
                token.describe(),
            ),
            GraphQLSyntaxErrorKind::UnexpectedDefinition,
            token.start,
        )
    }

    fn description_not_allowed(token: &GraphQLToken<'src>) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(
            format!(
                "Expected a type-system definition after a description, found {}",
                token.describe(),
            ),
            GraphQLSyntaxErrorKind::UnexpectedDefinition,
            token.start,
        )
    }

    // =========================================================================
    // Token advancement and comment plumbing
    // =========================================================================

    /// Lexes from `offset` up to the next non-comment token and makes it the
    /// current token. Comments passed on the way form one group.
    fn fill(&mut self, mut offset: u32) -> ParseResult<()> {
        let keep_comments = !self.options.ignore.ignores_comments();
        let mut group: Vec<Comment<'src>> = Vec::new();

        loop {
            let token = lex(self.source, offset)?;
            if token.kind != GraphQLTokenKind::Comment {
                self.token = token;
                break;
            }
            offset = token.end;
            if keep_comments {
                group.push(Comment {
                    location: self.span(token.start, token.end),
                    text: token.value,
                });
            }
        }

        if !group.is_empty()
            && let Some(older) = self.pending_comments.replace(group)
        {
            log::trace!(
                "comment group at {:?} superseded before any node claimed it",
                older.first().and_then(|comment| comment.location),
            );
            self.unattached_comments.push(older);
        }
        Ok(())
    }

    /// Consumes the current token and returns it.
    fn consume_token(&mut self) -> ParseResult<GraphQLToken<'src>> {
        let end = self.token.end;
        let next_start = GraphQLToken::eof(end);
        let consumed = std::mem::replace(&mut self.token, next_start);
        self.prev_end = consumed.end;
        self.fill(end)?;
        Ok(consumed)
    }

    /// Claims the pending comment group for the node about to be parsed.
    fn take_comments(&mut self) -> Option<Vec<Comment<'src>>> {
        self.pending_comments.take()
    }

    /// The location of a node that started at `start` and whose last token
    /// has just been consumed.
    fn location_from(&self, start: u32) -> Option<Location> {
        self.span(start, self.prev_end)
    }

    fn span(&self, start: u32, end: u32) -> Option<Location> {
        (!self.options.ignore.ignores_locations()).then(|| Location::new(start, end))
    }

    // =========================================================================
    // Expectation helpers
    // =========================================================================

    fn unexpected(&self, expected: &str) -> GraphQLSyntaxError {
        let found = self.token.describe();
        GraphQLSyntaxError::new(
            format!("Expected {expected}, found {found}"),
            GraphQLSyntaxErrorKind::UnexpectedToken {
                expected: smallvec![expected.to_string()],
                found,
            },
            self.token.start,
        )
    }

    /// Consumes a token of `kind` or fails with `UnexpectedToken`.
    fn expect(&mut self, kind: GraphQLTokenKind) -> ParseResult<GraphQLToken<'src>> {
        if self.token.kind == kind {
            self.consume_token()
        } else {
            Err(self.unexpected(kind.describe()))
        }
    }

    /// Consumes the name `keyword` or fails with `ExpectedKeyword`.
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<GraphQLToken<'src>> {
        if self.token.is_keyword(keyword) {
            self.consume_token()
        } else {
            Err(GraphQLSyntaxError::new(
                format!("Expected `{keyword}`, found {}", self.token.describe()),
                GraphQLSyntaxErrorKind::ExpectedKeyword {
                    keyword: keyword.to_string(),
                },
                self.token.start,
            ))
        }
    }

    fn peek_is(&self, kind: GraphQLTokenKind) -> bool {
        self.token.kind == kind
    }

    fn peek_is_keyword(&self, keyword: &str) -> bool {
        self.token.is_keyword(keyword)
    }

    fn peek_is_description(&self) -> bool {
        matches!(
            self.token.kind,
            GraphQLTokenKind::String | GraphQLTokenKind::BlockString
        )
    }

    /// Returns the first non-comment token after the current (description)
    /// token without consuming anything.
    fn peek_past_description(&self) -> ParseResult<GraphQLToken<'src>> {
        let mut offset = self.token.end;
        loop {
            let token = lex(self.source, offset)?;
            if token.kind != GraphQLTokenKind::Comment {
                return Ok(token);
            }
            offset = token.end;
        }
    }

    /// Parses a [`Name`] node.
    fn parse_name(&mut self) -> ParseResult<Name<'src>> {
        let comments = self.take_comments();
        let token = self.expect(GraphQLTokenKind::Name)?;
        Ok(Name {
            value: token.value,
            location: self.span(token.start, token.end),
            comments,
        })
    }

    /// Parses `open item+ close`, rejecting an empty pair of brackets with
    /// `EmptyList`.
    fn parse_non_empty_list<T>(
        &mut self,
        open: GraphQLTokenKind,
        close: GraphQLTokenKind,
        item_description: &str,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Vec<T>> {
        self.expect(open)?;
        if self.peek_is(close) {
            return Err(GraphQLSyntaxError::new(
                format!(
                    "Expected at least one {item_description}, found {}",
                    close.describe(),
                ),
                GraphQLSyntaxErrorKind::EmptyList,
                self.token.start,
            ));
        }

        let mut items = Vec::new();
        while !self.peek_is(close) {
            items.push(parse_item(self)?);
        }
        self.consume_token()?;
        Ok(items)
    }

    // =========================================================================
    // Recursion depth guard
    // =========================================================================

    fn enter_recursion(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.max_depth {
            log::trace!(
                "nesting depth {} exceeds limit {} at byte {}",
                self.depth,
                self.max_depth,
                self.token.start,
            );
            return Err(GraphQLSyntaxError::new(
                format!(
                    "Document is nested too deeply (maximum depth is {})",
                    self.max_depth,
                ),
                GraphQLSyntaxErrorKind::MaxDepthExceeded {
                    max_depth: self.max_depth,
                },
                self.token.start,
            ));
        }
        Ok(())
    }

    fn exit_recursion(&mut self) {
        self.depth -= 1;
    }
}
