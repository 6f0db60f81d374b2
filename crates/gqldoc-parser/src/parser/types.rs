use crate::ast::Comment;
use crate::ast::ListType;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::Type;
use crate::parser::GraphQLParser;
use crate::parser::ParseResult;
use crate::token::GraphQLTokenKind;

impl<'src> GraphQLParser<'src> {
    // =========================================================================
    // Type annotations
    // =========================================================================

    /// `Name`, `[Type]`, or either followed by `!`.
    ///
    /// A non-null wrapper starts where its inner type starts, so it claims the
    /// comment group the inner type took.
    pub(super) fn parse_type(&mut self) -> ParseResult<Type<'src>> {
        let start = self.token.start;
        let mut inner = match self.token.kind {
            GraphQLTokenKind::Name => Type::Named(self.parse_named_type()?),
            GraphQLTokenKind::BracketOpen => {
                let comments = self.take_comments();
                Type::List(self.parse_list_type(comments)?)
            }
            _ => return Err(self.unexpected("a type")),
        };

        if !self.peek_is(GraphQLTokenKind::Bang) {
            return Ok(inner);
        }
        self.consume_token()?;

        let comments = match &mut inner {
            Type::Named(named) => named.comments.take(),
            Type::List(list) => list.comments.take(),
            Type::NonNull(non_null) => non_null.comments.take(),
        };
        Ok(Type::NonNull(NonNullType {
            of_type: Box::new(inner),
            location: self.location_from(start),
            comments,
        }))
    }

    pub(super) fn parse_named_type(&mut self) -> ParseResult<NamedType<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let name = self.parse_name()?;
        Ok(NamedType {
            name,
            location: self.location_from(start),
            comments,
        })
    }

    fn parse_list_type(
        &mut self,
        comments: Option<Vec<Comment<'src>>>,
    ) -> ParseResult<ListType<'src>> {
        self.enter_recursion()?;
        let result = self.parse_list_type_impl(comments);
        self.exit_recursion();
        result
    }

    fn parse_list_type_impl(
        &mut self,
        comments: Option<Vec<Comment<'src>>>,
    ) -> ParseResult<ListType<'src>> {
        let start = self.token.start;
        self.expect(GraphQLTokenKind::BracketOpen)?;
        let of_type = self.parse_type()?;
        self.expect(GraphQLTokenKind::BracketClose)?;
        Ok(ListType {
            of_type: Box::new(of_type),
            location: self.location_from(start),
            comments,
        })
    }
}
