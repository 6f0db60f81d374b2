use crate::ast::Definition;
use crate::ast::EnumTypeExtension;
use crate::ast::InputObjectTypeExtension;
use crate::ast::InterfaceTypeExtension;
use crate::ast::ObjectTypeExtension;
use crate::ast::ScalarTypeExtension;
use crate::ast::SchemaExtension;
use crate::ast::TypeExtension;
use crate::ast::UnionTypeExtension;
use crate::parser::values::ConstContext;
use crate::parser::GraphQLParser;
use crate::parser::ParseResult;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;

impl<'src> GraphQLParser<'src> {
    // =========================================================================
    // Extensions
    // =========================================================================

    /// `extend schema ...` or `extend <type keyword> Name ...`.
    pub(super) fn parse_extension(&mut self) -> ParseResult<Definition<'src>> {
        let comments = self.take_comments();
        let start = self.token.start;
        self.expect_keyword("extend")?;

        if self.peek_is_keyword("schema") {
            self.consume_token()?;
            let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
            let operation_types = if self.peek_is(GraphQLTokenKind::BraceOpen) {
                self.parse_root_operation_types()?
            } else {
                Vec::new()
            };
            if directives.is_none() && operation_types.is_empty() {
                return Err(self.empty_extension("schema", "directives or root operation types"));
            }
            return Ok(Definition::SchemaExtension(SchemaExtension {
                directives,
                operation_types,
                location: self.location_from(start),
                comments,
            }));
        }

        let keyword = match self.token.kind {
            GraphQLTokenKind::Name => match self.token.value.as_ref() {
                keyword @ ("scalar" | "type" | "interface" | "union" | "enum" | "input") => {
                    keyword.to_string()
                }
                _ => return Err(self.unexpected_extension_target()),
            },
            _ => return Err(self.unexpected_extension_target()),
        };
        self.consume_token()?;
        let name = self.parse_name()?;

        let extension = match keyword.as_str() {
            "scalar" => {
                let directives = self.parse_directives(ConstContext::DirectiveArgument)?;
                if directives.is_none() {
                    return Err(self.empty_extension("scalar", "directives"));
                }
                TypeExtension::Scalar(ScalarTypeExtension {
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
                if interfaces.is_none() && directives.is_none() && fields.is_none() {
                    return Err(self.empty_extension(
                        "object type",
                        "`implements`, directives, or fields",
                    ));
                }
                TypeExtension::Object(ObjectTypeExtension {
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
                if interfaces.is_none() && directives.is_none() && fields.is_none() {
                    return Err(self.empty_extension(
                        "interface",
                        "`implements`, directives, or fields",
                    ));
                }
                TypeExtension::Interface(InterfaceTypeExtension {
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
                if directives.is_none() && types.is_none() {
                    return Err(self.empty_extension("union", "directives or member types"));
                }
                TypeExtension::Union(UnionTypeExtension {
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
                if directives.is_none() && values.is_none() {
                    return Err(self.empty_extension("enum", "directives or values"));
                }
                TypeExtension::Enum(EnumTypeExtension {
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
                if directives.is_none() && fields.is_none() {
                    return Err(self.empty_extension("input object", "directives or fields"));
                }
                TypeExtension::InputObject(InputObjectTypeExtension {
                    name,
                    directives,
                    fields,
                    location: self.location_from(start),
                    comments,
                })
            }
        };
        Ok(Definition::TypeExtension(extension))
    }

    fn unexpected_extension_target(&self) -> GraphQLSyntaxError {
        self.unexpected(
            "`schema`, `scalar`, `type`, `interface`, `union`, `enum`, or `input` after `extend`",
        )
    }

    /// Reported at the token where the first optional part would have begun.
    fn empty_extension(&self, what: &str, parts: &str) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(
            format!(
                "Expected {parts} in {what} extension, found {}",
                self.token.describe(),
            ),
            GraphQLSyntaxErrorKind::EmptyExtension,
            self.token.start,
        )
    }
}
