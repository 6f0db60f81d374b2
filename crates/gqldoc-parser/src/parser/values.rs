use crate::ast::BooleanValue;
use crate::ast::Comment;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::Name;
use crate::ast::NullValue;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::Value;
use crate::ast::Variable;
use crate::parser::GraphQLParser;
use crate::parser::ParseResult;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;

/// Where a value appears, which decides whether `$variables` are allowed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ConstContext {
    /// Field and directive arguments inside operations and fragments.
    AllowVariables,
    /// `$var: Int = <here>`
    VariableDefaultValue,
    /// Directive arguments on variable definitions and in the type system.
    DirectiveArgument,
    /// Default values of argument and input field definitions.
    InputDefaultValue,
}

impl ConstContext {
    /// What is being parsed, for error messages. `None` when variables are
    /// allowed.
    fn description(&self) -> Option<&'static str> {
        match self {
            ConstContext::AllowVariables => None,
            ConstContext::VariableDefaultValue => Some("variable default values"),
            ConstContext::DirectiveArgument => Some("constant directive arguments"),
            ConstContext::InputDefaultValue => Some("input value default values"),
        }
    }
}

impl<'src> GraphQLParser<'src> {
    // =========================================================================
    // Values
    // =========================================================================

    pub(super) fn parse_value(&mut self, context: ConstContext) -> ParseResult<Value<'src>> {
        if self.peek_is(GraphQLTokenKind::Dollar) {
            if let Some(description) = context.description() {
                return Err(GraphQLSyntaxError::new(
                    format!("Variables are not allowed in {description}"),
                    GraphQLSyntaxErrorKind::VariableInConstContext,
                    self.token.start,
                ));
            }
            return Ok(Value::Variable(self.parse_variable()?));
        }

        let comments = self.take_comments();
        match self.token.kind {
            GraphQLTokenKind::Int => {
                let token = self.consume_token()?;
                let location = self.span(token.start, token.end);
                Ok(Value::Int(IntValue::new(token.value, location, comments)))
            }
            GraphQLTokenKind::Float => {
                let token = self.consume_token()?;
                let location = self.span(token.start, token.end);
                Ok(Value::Float(FloatValue::new(token.value, location, comments)))
            }
            GraphQLTokenKind::String | GraphQLTokenKind::BlockString => {
                let token = self.consume_token()?;
                Ok(Value::String(StringValue {
                    value: token.value,
                    block: token.kind == GraphQLTokenKind::BlockString,
                    location: self.span(token.start, token.end),
                    comments,
                }))
            }
            GraphQLTokenKind::Name => {
                let token = self.consume_token()?;
                let location = self.span(token.start, token.end);
                Ok(match token.value.as_ref() {
                    "true" | "false" => Value::Boolean(BooleanValue {
                        value: token.value == "true",
                        location,
                        comments,
                    }),
                    "null" => Value::Null(NullValue { location, comments }),
                    _ => Value::Enum(EnumValue {
                        name: Name {
                            value: token.value,
                            location,
                            comments: None,
                        },
                        location,
                        comments,
                    }),
                })
            }
            GraphQLTokenKind::BracketOpen => {
                Ok(Value::List(self.parse_list_value(comments, context)?))
            }
            GraphQLTokenKind::BraceOpen => {
                Ok(Value::Object(self.parse_object_value(comments, context)?))
            }
            _ => Err(self.unexpected("a value")),
        }
    }

    /// `$name`
    pub(super) fn parse_variable(&mut self) -> ParseResult<Variable<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        self.expect(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Variable {
            name,
            location: self.location_from(start),
            comments,
        })
    }

    fn parse_list_value(
        &mut self,
        comments: Option<Vec<Comment<'src>>>,
        context: ConstContext,
    ) -> ParseResult<ListValue<'src>> {
        self.enter_recursion()?;
        let result = self.parse_list_value_impl(comments, context);
        self.exit_recursion();
        result
    }

    fn parse_list_value_impl(
        &mut self,
        comments: Option<Vec<Comment<'src>>>,
        context: ConstContext,
    ) -> ParseResult<ListValue<'src>> {
        let start = self.token.start;
        self.expect(GraphQLTokenKind::BracketOpen)?;

        let mut values = Vec::new();
        while !self.peek_is(GraphQLTokenKind::BracketClose) {
            values.push(self.parse_value(context)?);
        }
        self.consume_token()?;

        Ok(ListValue {
            values,
            location: self.location_from(start),
            comments,
        })
    }

    fn parse_object_value(
        &mut self,
        comments: Option<Vec<Comment<'src>>>,
        context: ConstContext,
    ) -> ParseResult<ObjectValue<'src>> {
        self.enter_recursion()?;
        let result = self.parse_object_value_impl(comments, context);
        self.exit_recursion();
        result
    }

    fn parse_object_value_impl(
        &mut self,
        comments: Option<Vec<Comment<'src>>>,
        context: ConstContext,
    ) -> ParseResult<ObjectValue<'src>> {
        let start = self.token.start;
        self.expect(GraphQLTokenKind::BraceOpen)?;

        let mut fields = Vec::new();
        while !self.peek_is(GraphQLTokenKind::BraceClose) {
            fields.push(self.parse_object_field(context)?);
        }
        self.consume_token()?;

        Ok(ObjectValue {
            fields,
            location: self.location_from(start),
            comments,
        })
    }

    fn parse_object_field(&mut self, context: ConstContext) -> ParseResult<ObjectField<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value(context)?;
        Ok(ObjectField {
            name,
            value,
            location: self.location_from(start),
            comments,
        })
    }
}
