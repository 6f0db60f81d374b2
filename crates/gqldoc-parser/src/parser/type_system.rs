use crate::ast::ArgumentsDefinition;
use crate::ast::Description;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::DirectiveLocations;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValueDefinition;
use crate::ast::EnumValuesDefinition;
use crate::ast::FieldDefinition;
use crate::ast::FieldsDefinition;
use crate::ast::ImplementsInterfaces;
use crate::ast::InputFieldsDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;
use crate::ast::UnionMemberTypes;
use crate::ast::UnionTypeDefinition;
use crate::parser::values::ConstContext;
use crate::parser::GraphQLParser;
use crate::parser::ParseResult;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::ReservedNameContext;

impl<'src> GraphQLParser<'src> {
    // =========================================================================
    // Descriptions and schema definitions
    // =========================================================================

    /// An optional string or block string preceding a type-system element.
    /// Its comment group belongs to the element, which claims it first.
    fn parse_description(&mut self) -> ParseResult<Option<Description<'src>>> {
        if !self.peek_is_description() {
            return Ok(None);
        }
        let token = self.consume_token()?;
        Ok(Some(Description {
            value: token.value,
            block: token.kind == GraphQLTokenKind::BlockString,
            location: self.span(token.start, token.end),
            comments: None,
        }))
    }

    /// `"description" schema @directives { query: Query ... }`
    pub(super) fn parse_schema_definition(&mut self) -> ParseResult<SchemaDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("schema")?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        let operation_types = self.parse_root_operation_types()?;
        Ok(SchemaDefinition {
            description,
            directives,
            operation_types,
            location: self.location_from(start),
            comments,
        })
    }

    pub(super) fn parse_root_operation_types(
        &mut self,
    ) -> ParseResult<Vec<RootOperationTypeDefinition<'src>>> {
        self.parse_non_empty_list(
            GraphQLTokenKind::BraceOpen,
            GraphQLTokenKind::BraceClose,
            "root operation type",
            Self::parse_root_operation_type,
        )
    }

    /// `query: Query`
    fn parse_root_operation_type(&mut self) -> ParseResult<RootOperationTypeDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let operation = self.parse_operation_type()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let named_type = self.parse_named_type()?;
        Ok(RootOperationTypeDefinition {
            operation,
            named_type,
            location: self.location_from(start),
            comments,
        })
    }

    // =========================================================================
    // Type definitions
    // =========================================================================

    /// Parses the type definition introduced by `keyword`, which the caller
    /// found (possibly after a description) by lookahead.
    pub(super) fn parse_type_definition(
        &mut self,
        keyword: &str,
    ) -> ParseResult<TypeDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword(keyword)?;
        let name = self.parse_name()?;

        let definition = match keyword {
            "scalar" => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                TypeDefinition::Scalar(ScalarTypeDefinition {
                    description,
                    name,
                    directives,
                    location: self.location_from(start),
                    comments,
                })
            }
            "type" => {
                let interfaces = self.parse_optional_implements_interfaces()?;
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let fields = self.parse_optional_fields_definition()?;
                TypeDefinition::Object(ObjectTypeDefinition {
                    description,
                    name,
                    interfaces,
                    directives,
                    fields,
                    location: self.location_from(start),
                    comments,
                })
            }
            "interface" => {
                let interfaces = self.parse_optional_implements_interfaces()?;
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let fields = self.parse_optional_fields_definition()?;
                TypeDefinition::Interface(InterfaceTypeDefinition {
                    description,
                    name,
                    interfaces,
                    directives,
                    fields,
                    location: self.location_from(start),
                    comments,
                })
            }
            "union" => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let types = self.parse_optional_union_member_types()?;
                TypeDefinition::Union(UnionTypeDefinition {
                    description,
                    name,
                    directives,
                    types,
                    location: self.location_from(start),
                    comments,
                })
            }
            "enum" => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let values = self.parse_optional_enum_values_definition()?;
                TypeDefinition::Enum(EnumTypeDefinition {
                    description,
                    name,
                    directives,
                    values,
                    location: self.location_from(start),
                    comments,
                })
            }
            _ => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                let fields = self.parse_optional_input_fields_definition()?;
                TypeDefinition::InputObject(InputObjectTypeDefinition {
                    description,
                    name,
                    directives,
                    fields,
                    location: self.location_from(start),
                    comments,
                })
            }
        };
        Ok(definition)
    }

    /// `implements A & B`, with an optional leading `&`.
    pub(super) fn parse_optional_implements_interfaces(
        &mut self,
    ) -> ParseResult<Option<ImplementsInterfaces<'src>>> {
        if !self.peek_is_keyword("implements") {
            return Ok(None);
        }
        let comments = self.take_comments();
        let start = self.token.start;
        self.consume_token()?;

        if self.peek_is(GraphQLTokenKind::Ampersand) {
            self.consume_token()?;
        }
        let mut items = vec![self.parse_named_type()?];
        while self.peek_is(GraphQLTokenKind::Ampersand) {
            self.consume_token()?;
            items.push(self.parse_named_type()?);
        }

        Ok(Some(ImplementsInterfaces {
            items,
            location: self.location_from(start),
            comments,
        }))
    }

    /// `= A | B`, with an optional leading `|`.
    pub(super) fn parse_optional_union_member_types(
        &mut self,
    ) -> ParseResult<Option<UnionMemberTypes<'src>>> {
        if !self.peek_is(GraphQLTokenKind::Equals) {
            return Ok(None);
        }
        let comments = self.take_comments();
        let start = self.token.start;
        self.consume_token()?;

        if self.peek_is(GraphQLTokenKind::Pipe) {
            self.consume_token()?;
        }
        let mut items = vec![self.parse_named_type()?];
        while self.peek_is(GraphQLTokenKind::Pipe) {
            self.consume_token()?;
            items.push(self.parse_named_type()?);
        }

        Ok(Some(UnionMemberTypes {
            items,
            location: self.location_from(start),
            comments,
        }))
    }

    // =========================================================================
    // Fields and input values
    // =========================================================================

    pub(super) fn parse_optional_fields_definition(
        &mut self,
    ) -> ParseResult<Option<FieldsDefinition<'src>>> {
        if !self.peek_is(GraphQLTokenKind::BraceOpen) {
            return Ok(None);
        }
        let comments = self.take_comments();
        let start = self.token.start;
        let items = self.parse_non_empty_list(
            GraphQLTokenKind::BraceOpen,
            GraphQLTokenKind::BraceClose,
            "field definition",
            Self::parse_field_definition,
        )?;
        Ok(Some(FieldsDefinition {
            items,
            location: self.location_from(start),
            comments,
        }))
    }

    /// `"description" name(args): Type @directives`
    fn parse_field_definition(&mut self) -> ParseResult<FieldDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        let arguments = self.parse_optional_arguments_definition()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(FieldDefinition {
            description,
            name,
            arguments,
            field_type,
            directives,
            location: self.location_from(start),
            comments,
        })
    }

    fn parse_optional_arguments_definition(
        &mut self,
    ) -> ParseResult<Option<ArgumentsDefinition<'src>>> {
        if !self.peek_is(GraphQLTokenKind::ParenOpen) {
            return Ok(None);
        }
        let comments = self.take_comments();
        let start = self.token.start;
        let items = self.parse_non_empty_list(
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            "argument definition",
            Self::parse_input_value_definition,
        )?;
        Ok(Some(ArgumentsDefinition {
            items,
            location: self.location_from(start),
            comments,
        }))
    }

    pub(super) fn parse_optional_input_fields_definition(
        &mut self,
    ) -> ParseResult<Option<InputFieldsDefinition<'src>>> {
        if !self.peek_is(GraphQLTokenKind::BraceOpen) {
            return Ok(None);
        }
        let comments = self.take_comments();
        let start = self.token.start;
        let items = self.parse_non_empty_list(
            GraphQLTokenKind::BraceOpen,
            GraphQLTokenKind::BraceClose,
            "input field definition",
            Self::parse_input_value_definition,
        )?;
        Ok(Some(InputFieldsDefinition {
            items,
            location: self.location_from(start),
            comments,
        }))
    }

    /// `"description" name: Type = default @directives`, used for both
    /// arguments and input fields.
    fn parse_input_value_definition(&mut self) -> ParseResult<InputValueDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let description = self.parse_description()?;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value_type = self.parse_type()?;
        let default_value = if self.peek_is(GraphQLTokenKind::Equals) {
            self.consume_token()?;
            Some(self.parse_value(ConstContext::InputDefaultValue)?)
        } else {
            None
        };
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(InputValueDefinition {
            description,
            name,
            value_type,
            default_value,
            directives,
            location: self.location_from(start),
            comments,
        })
    }

    // =========================================================================
    // Enum values
    // =========================================================================

    pub(super) fn parse_optional_enum_values_definition(
        &mut self,
    ) -> ParseResult<Option<EnumValuesDefinition<'src>>> {
        if !self.peek_is(GraphQLTokenKind::BraceOpen) {
            return Ok(None);
        }
        let comments = self.take_comments();
        let start = self.token.start;
        let items = self.parse_non_empty_list(
            GraphQLTokenKind::BraceOpen,
            GraphQLTokenKind::BraceClose,
            "enum value definition",
            Self::parse_enum_value_definition,
        )?;
        Ok(Some(EnumValuesDefinition {
            items,
            location: self.location_from(start),
            comments,
        }))
    }

    fn parse_enum_value_definition(&mut self) -> ParseResult<EnumValueDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let description = self.parse_description()?;

        if self.peek_is_keyword("true")
            || self.peek_is_keyword("false")
            || self.peek_is_keyword("null")
        {
            let name = self.token.value.to_string();
            return Err(GraphQLSyntaxError::new(
                format!("Enum values cannot be named `{name}`"),
                GraphQLSyntaxErrorKind::ReservedName {
                    name,
                    context: ReservedNameContext::EnumValue,
                },
                self.token.start,
            ));
        }
        let name = self.parse_name()?;
        let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
        Ok(EnumValueDefinition {
            description,
            name,
            directives,
            location: self.location_from(start),
            comments,
        })
    }

    // =========================================================================
    // Directive definitions
    // =========================================================================

    /// `"description" directive @name(args) repeatable on A | B`
    pub(super) fn parse_directive_definition(
        &mut self,
    ) -> ParseResult<DirectiveDefinition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        let description = self.parse_description()?;
        self.expect_keyword("directive")?;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_optional_arguments_definition()?;
        let repeatable = self.peek_is_keyword("repeatable");
        if repeatable {
            self.consume_token()?;
        }
        let locations = self.parse_directive_locations()?;
        Ok(DirectiveDefinition {
            description,
            name,
            arguments,
            repeatable,
            locations,
            location: self.location_from(start),
            comments,
        })
    }

    fn parse_directive_locations(&mut self) -> ParseResult<DirectiveLocations<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        self.expect_keyword("on")?;

        // Optional leading |
        if self.peek_is(GraphQLTokenKind::Pipe) {
            self.consume_token()?;
        }
        let mut items = vec![self.parse_directive_location()?];
        while self.peek_is(GraphQLTokenKind::Pipe) {
            self.consume_token()?;
            items.push(self.parse_directive_location()?);
        }

        Ok(DirectiveLocations {
            items,
            location: self.location_from(start),
            comments,
        })
    }

    fn parse_directive_location(&mut self) -> ParseResult<DirectiveLocation> {
        if !self.peek_is(GraphQLTokenKind::Name) {
            return Err(self.unexpected("a directive location"));
        }
        if let Some(location) = DirectiveLocation::from_name(&self.token.value) {
            self.consume_token()?;
            return Ok(location);
        }

        let name = self.token.value.to_string();
        let mut message = format!("Unknown directive location `{name}`");
        if let Some(suggestion) = DirectiveLocation::suggest(&name) {
            message.push_str(&format!("; did you mean `{suggestion}`?"));
        }
        Err(GraphQLSyntaxError::new(
            message,
            GraphQLSyntaxErrorKind::InvalidDirectiveLocation { location: name },
            self.token.start,
        ))
    }
}
