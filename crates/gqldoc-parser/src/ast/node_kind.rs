/// The closed set of AST node kinds.
///
/// Besides one kind per grammar production, several kinds describe the
/// *list-level* syntax of a production (e.g. [`Arguments`](Self::Arguments)
/// for the parenthesized argument list as a whole). Those list nodes carry
/// their own location and comments, separate from their items.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeKind {
    // Document and shared building blocks
    Document,
    Comment,
    Name,
    Description,
    Directive,
    Directives,

    // Executable definitions
    OperationDefinition,
    VariablesDefinition,
    VariableDefinition,
    SelectionSet,
    Field,
    Alias,
    Arguments,
    Argument,
    FragmentSpread,
    FragmentName,
    InlineFragment,
    TypeCondition,
    FragmentDefinition,

    // Values
    Variable,
    IntValue,
    FloatValue,
    StringValue,
    BooleanValue,
    NullValue,
    EnumValue,
    ListValue,
    ObjectValue,
    ObjectField,

    // Type references
    NamedType,
    ListType,
    NonNullType,

    // Type system definitions
    SchemaDefinition,
    RootOperationTypeDefinition,
    ScalarTypeDefinition,
    ObjectTypeDefinition,
    ImplementsInterfaces,
    FieldsDefinition,
    FieldDefinition,
    ArgumentsDefinition,
    InputValueDefinition,
    InterfaceTypeDefinition,
    UnionTypeDefinition,
    UnionMemberTypes,
    EnumTypeDefinition,
    EnumValuesDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    InputFieldsDefinition,
    DirectiveDefinition,
    DirectiveLocations,

    // Type system extensions
    SchemaExtension,
    ScalarTypeExtension,
    ObjectTypeExtension,
    InterfaceTypeExtension,
    UnionTypeExtension,
    EnumTypeExtension,
    InputObjectTypeExtension,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [NodeKind; 58] = [
        Self::Document,
        Self::Comment,
        Self::Name,
        Self::Description,
        Self::Directive,
        Self::Directives,
        Self::OperationDefinition,
        Self::VariablesDefinition,
        Self::VariableDefinition,
        Self::SelectionSet,
        Self::Field,
        Self::Alias,
        Self::Arguments,
        Self::Argument,
        Self::FragmentSpread,
        Self::FragmentName,
        Self::InlineFragment,
        Self::TypeCondition,
        Self::FragmentDefinition,
        Self::Variable,
        Self::IntValue,
        Self::FloatValue,
        Self::StringValue,
        Self::BooleanValue,
        Self::NullValue,
        Self::EnumValue,
        Self::ListValue,
        Self::ObjectValue,
        Self::ObjectField,
        Self::NamedType,
        Self::ListType,
        Self::NonNullType,
        Self::SchemaDefinition,
        Self::RootOperationTypeDefinition,
        Self::ScalarTypeDefinition,
        Self::ObjectTypeDefinition,
        Self::ImplementsInterfaces,
        Self::FieldsDefinition,
        Self::FieldDefinition,
        Self::ArgumentsDefinition,
        Self::InputValueDefinition,
        Self::InterfaceTypeDefinition,
        Self::UnionTypeDefinition,
        Self::UnionMemberTypes,
        Self::EnumTypeDefinition,
        Self::EnumValuesDefinition,
        Self::EnumValueDefinition,
        Self::InputObjectTypeDefinition,
        Self::InputFieldsDefinition,
        Self::DirectiveDefinition,
        Self::DirectiveLocations,
        Self::SchemaExtension,
        Self::ScalarTypeExtension,
        Self::ObjectTypeExtension,
        Self::InterfaceTypeExtension,
        Self::UnionTypeExtension,
        Self::EnumTypeExtension,
        Self::InputObjectTypeExtension,
    ];

    /// Returns `true` for kinds that sit on their own line in canonical
    /// output. The printer only emits comments for these kinds.
    pub fn is_line_level(&self) -> bool {
        matches!(
            self,
            Self::OperationDefinition
                | Self::FragmentDefinition
                | Self::Field
                | Self::FragmentSpread
                | Self::InlineFragment
                | Self::VariableDefinition
                | Self::SchemaDefinition
                | Self::RootOperationTypeDefinition
                | Self::ScalarTypeDefinition
                | Self::ObjectTypeDefinition
                | Self::FieldDefinition
                | Self::InputValueDefinition
                | Self::InterfaceTypeDefinition
                | Self::UnionTypeDefinition
                | Self::EnumTypeDefinition
                | Self::EnumValueDefinition
                | Self::InputObjectTypeDefinition
                | Self::DirectiveDefinition
                | Self::SchemaExtension
                | Self::ScalarTypeExtension
                | Self::ObjectTypeExtension
                | Self::InterfaceTypeExtension
                | Self::UnionTypeExtension
                | Self::EnumTypeExtension
                | Self::InputObjectTypeExtension
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
