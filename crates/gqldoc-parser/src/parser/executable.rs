use crate::ast::Alias;
use crate::ast::Argument;
use crate::ast::Arguments;
use crate::ast::Directive;
use crate::ast::Directives;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentName;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeCondition;
use crate::ast::VariableDefinition;
use crate::ast::VariablesDefinition;
use crate::parser::values::ConstContext;
use crate::parser::GraphQLParser;
use crate::parser::ParseResult;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::ReservedNameContext;

impl<'src> GraphQLParser<'src> {
    // =========================================================================
    // Operations
    // =========================================================================

    /// Either the `{ ... }` shorthand or
    /// `query|mutation|subscription Name? Variables? Directives? SelectionSet`.
    pub(super) fn parse_operation_definition(
        &mut self,
    ) -> ParseResult<OperationDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;

        if self.peek_is(GraphQLTokenKind::BraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variables: None,
                directives: None,
                selection_set,
                location: self.location_from(start),
                comments,
            });
        }

        let operation = self.parse_operation_type()?;
        let name = if self.peek_is(GraphQLTokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variables = if self.peek_is(GraphQLTokenKind::ParenOpen) {
            Some(self.parse_variables_definition()?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;

        Ok(OperationDefinition {
            operation,
            name,
            variables,
            directives,
            selection_set,
            location: self.location_from(start),
            comments,
        })
    }

    /// Consumes `query`, `mutation`, or `subscription`.
    pub(super) fn parse_operation_type(&mut self) -> ParseResult<OperationType> {
        let operation = if self.token.kind == GraphQLTokenKind::Name {
            OperationType::from_keyword(&self.token.value)
        } else {
            None
        };
        match operation {
            Some(operation) => {
                self.consume_token()?;
                Ok(operation)
            }
            None => Err(self.unexpected("`query`, `mutation`, or `subscription`")),
        }
    }

    fn parse_variables_definition(&mut self) -> ParseResult<VariablesDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let items = self.parse_non_empty_list(
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            "variable definition",
            Self::parse_variable_definition,
        )?;
        Ok(VariablesDefinition {
            items,
            location: self.location_from(start),
            comments,
        })
    }

    /// `$name: Type = default @directives`
    fn parse_variable_definition(&mut self) -> ParseResult<VariableDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type()?;
        let default_value = if self.peek_is(GraphQLTokenKind::Equals) {
            self.consume_token()?;
            Some(self.parse_value(ConstContext::VariableDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;

        Ok(VariableDefinition {
            variable,
            var_type,
            default_value,
            directives,
            location: self.location_from(start),
            comments,
        })
    }

    // =========================================================================
    // Selection sets
    // =========================================================================

    pub(super) fn parse_selection_set(&mut self) -> ParseResult<SelectionSet<'src>> {
        self.enter_recursion()?;
        let result = self.parse_selection_set_impl();
        self.exit_recursion();
        result
    }

    fn parse_selection_set_impl(&mut self) -> ParseResult<SelectionSet<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let selections = self.parse_non_empty_list(
            GraphQLTokenKind::BraceOpen,
            GraphQLTokenKind::BraceClose,
            "selection",
            Self::parse_selection,
        )?;
        Ok(SelectionSet {
            selections,
            location: self.location_from(start),
            comments,
        })
    }

    fn parse_selection(&mut self) -> ParseResult<Selection<'src>> {
        match self.token.kind {
            GraphQLTokenKind::Name => Ok(Selection::Field(self.parse_field()?)),
            GraphQLTokenKind::Spread => self.parse_fragment_selection(),
            _ => Err(self.unexpected("a field or `...`")),
        }
    }

    /// `alias: name(args) @directives { ... }`
    fn parse_field(&mut self) -> ParseResult<Field<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;

        let first_name = self.parse_name()?;
        let (alias, name) = if self.peek_is(GraphQLTokenKind::Colon) {
            self.consume_token()?;
            let alias = Alias {
                name: first_name,
                location: self.location_from(start),
                comments: None,
            };
            (Some(alias), self.parse_name()?)
        } else {
            (None, first_name)
        };

        let arguments = if self.peek_is(GraphQLTokenKind::ParenOpen) {
            Some(self.parse_arguments(ConstContext::AllowVariables)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = if self.peek_is(GraphQLTokenKind::BraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };

        Ok(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location: self.location_from(start),
            comments,
        })
    }

    /// `...Name @directives` or `... on Type @directives { ... }`. The
    /// selection's comment group is claimed before the `...`.
    fn parse_fragment_selection(&mut self) -> ParseResult<Selection<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        self.expect(GraphQLTokenKind::Spread)?;

        if self.peek_is(GraphQLTokenKind::Name) && !self.peek_is_keyword("on") {
            let fragment_name = self.parse_fragment_name()?;
            let directives = self.parse_directives(ConstContext::AllowVariables)?;
            return Ok(Selection::FragmentSpread(FragmentSpread {
                fragment_name,
                directives,
                location: self.location_from(start),
                comments,
            }));
        }

        let type_condition = if self.peek_is_keyword("on") {
            Some(self.parse_type_condition()?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(InlineFragment {
            type_condition,
            directives,
            selection_set,
            location: self.location_from(start),
            comments,
        }))
    }

    // =========================================================================
    // Arguments and directives
    // =========================================================================

    pub(super) fn parse_arguments(
        &mut self,
        context: ConstContext,
    ) -> ParseResult<Arguments<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let items = self.parse_non_empty_list(
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            "argument",
            |parser| parser.parse_argument(context),
        )?;
        Ok(Arguments {
            items,
            location: self.location_from(start),
            comments,
        })
    }

    fn parse_argument(&mut self, context: ConstContext) -> ParseResult<Argument<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(Argument {
            name,
            value,
            location: self.location_from(start),
            comments,
        })
    }

    /// Zero or more directives. The list node itself never claims a comment
    /// group; the first directive does.
    pub(super) fn parse_directives(
        &mut self,
        context: ConstContext,
    ) -> ParseResult<Option<Directives<'src>>> {
        if !self.peek_is(GraphQLTokenKind::At) {
            return Ok(None);
        }

        let start = self.token.start;
        let mut items = Vec::new();
        while self.peek_is(GraphQLTokenKind::At) {
            items.push(self.parse_directive(context)?);
        }
        Ok(Some(Directives {
            items,
            location: self.location_from(start),
            comments: None,
        }))
    }

    fn parse_directive(&mut self, context: ConstContext) -> ParseResult<Directive<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = if self.peek_is(GraphQLTokenKind::ParenOpen) {
            Some(self.parse_arguments(context)?)
        } else {
            None
        };
        Ok(Directive {
            name,
            arguments,
            location: self.location_from(start),
            comments,
        })
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// `fragment Name on Type @directives { ... }`
    pub(super) fn parse_fragment_definition(
        &mut self,
    ) -> ParseResult<FragmentDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        self.expect_keyword("fragment")?;
        let fragment_name = self.parse_fragment_name()?;
        let type_condition = self.parse_type_condition()?;
        let directives = self.parse_directives(ConstContext::AllowVariables)?;
        let selection_set = self.parse_selection_set()?;
        Ok(FragmentDefinition {
            fragment_name,
            type_condition,
            directives,
            selection_set,
            location: self.location_from(start),
            comments,
        })
    }

    /// A fragment's name, which may be any name except `on`.
    fn parse_fragment_name(&mut self) -> ParseResult<FragmentName<'src>> {
        if self.peek_is_keyword("on") {
            return Err(GraphQLSyntaxError::new(
                "Fragment names cannot be `on`",
                GraphQLSyntaxErrorKind::ReservedName {
                    name: "on".to_string(),
                    context: ReservedNameContext::FragmentName,
                },
                self.token.start,
            ));
        }
        let comments = self.take_comments();
        let start = self.token.start;
        let name = self.parse_name()?;
        Ok(FragmentName {
            name,
            location: self.location_from(start),
            comments,
        })
    }

    /// `on Type`
    fn parse_type_condition(&mut self) -> ParseResult<TypeCondition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        self.expect_keyword("on")?;
        let named_type = self.parse_named_type()?;
        Ok(TypeCondition {
            named_type,
            location: self.location_from(start),
            comments,
        })
    }
}
