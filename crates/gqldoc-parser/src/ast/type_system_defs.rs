use crate::ast::ast_node::ast_node;
use crate::ast::ast_node::ast_node_enum;
use crate::ast::Comment;
use crate::ast::Description;
use crate::ast::DirectiveLocation;
use crate::ast::Directives;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::OperationType;
use crate::ast::Type;
use crate::ast::Value;
use crate::Location;

// =========================================================
// Schema definition
// =========================================================

/// `schema @directives { query: Query ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub directives: Option<Directives<'src>>,
    pub operation_types: Vec<RootOperationTypeDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(SchemaDefinition => SchemaDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    for operation_type in &node.operation_types {
        visit(operation_type);
    }
});

/// `query: Query` inside a schema definition or extension.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'src> {
    pub operation: OperationType,
    pub named_type: NamedType<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(RootOperationTypeDefinition => RootOperationTypeDefinition, |node, visit| {
    visit(&node.named_type);
});

// =========================================================
// Type definitions
// =========================================================

#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
}

impl<'src> TypeDefinition<'src> {
    pub fn name(&self) -> &Name<'src> {
        match self {
            Self::Scalar(def) => &def.name,
            Self::Object(def) => &def.name,
            Self::Interface(def) => &def.name,
            Self::Union(def) => &def.name,
            Self::Enum(def) => &def.name,
            Self::InputObject(def) => &def.name,
        }
    }

    pub fn description(&self) -> Option<&Description<'src>> {
        match self {
            Self::Scalar(def) => def.description.as_ref(),
            Self::Object(def) => def.description.as_ref(),
            Self::Interface(def) => def.description.as_ref(),
            Self::Union(def) => def.description.as_ref(),
            Self::Enum(def) => def.description.as_ref(),
            Self::InputObject(def) => def.description.as_ref(),
        }
    }
}

ast_node_enum!(TypeDefinition {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
});

/// `scalar Name @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(ScalarTypeDefinition => ScalarTypeDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    visit(&node.name);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
});

/// `type Name implements A & B @directives { fields }`.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<FieldsDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(ObjectTypeDefinition => ObjectTypeDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    visit(&node.name);
    if let Some(interfaces) = &node.interfaces {
        visit(interfaces);
    }
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    if let Some(fields) = &node.fields {
        visit(fields);
    }
});

/// `interface Name implements A & B @directives { fields }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<FieldsDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(InterfaceTypeDefinition => InterfaceTypeDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    visit(&node.name);
    if let Some(interfaces) = &node.interfaces {
        visit(interfaces);
    }
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    if let Some(fields) = &node.fields {
        visit(fields);
    }
});

/// `union Name @directives = A | B`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub types: Option<UnionMemberTypes<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(UnionTypeDefinition => UnionTypeDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    visit(&node.name);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    if let Some(types) = &node.types {
        visit(types);
    }
});

/// `enum Name @directives { VALUES }`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub values: Option<EnumValuesDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(EnumTypeDefinition => EnumTypeDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    visit(&node.name);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    if let Some(values) = &node.values {
        visit(values);
    }
});

/// `input Name @directives { fields }`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<InputFieldsDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(InputObjectTypeDefinition => InputObjectTypeDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    visit(&node.name);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    if let Some(fields) = &node.fields {
        visit(fields);
    }
});

// =========================================================
// Member lists
// =========================================================

/// `implements A & B`. The location covers the `implements` keyword.
#[derive(Clone, Debug, PartialEq)]
pub struct ImplementsInterfaces<'src> {
    pub items: Vec<NamedType<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(ImplementsInterfaces => ImplementsInterfaces, |node, visit| {
    for item in &node.items {
        visit(item);
    }
});

/// `= A | B` of a union. The location covers the `=`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionMemberTypes<'src> {
    pub items: Vec<NamedType<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(UnionMemberTypes => UnionMemberTypes, |node, visit| {
    for item in &node.items {
        visit(item);
    }
});

/// The braced field list of an object or interface.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldsDefinition<'src> {
    pub items: Vec<FieldDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(FieldsDefinition => FieldsDefinition, |node, visit| {
    for item in &node.items {
        visit(item);
    }
});

/// `name(args): Type @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub arguments: Option<ArgumentsDefinition<'src>>,
    pub field_type: Type<'src>,
    pub directives: Option<Directives<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(FieldDefinition => FieldDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    visit(&node.name);
    if let Some(arguments) = &node.arguments {
        visit(arguments);
    }
    visit(&node.field_type);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
});

/// The parenthesized argument definitions of a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentsDefinition<'src> {
    pub items: Vec<InputValueDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(ArgumentsDefinition => ArgumentsDefinition, |node, visit| {
    for item in &node.items {
        visit(item);
    }
});

/// The braced field list of an input object.
#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldsDefinition<'src> {
    pub items: Vec<InputValueDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(InputFieldsDefinition => InputFieldsDefinition, |node, visit| {
    for item in &node.items {
        visit(item);
    }
});

/// An argument or input field definition: `name: Type = default @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub value_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Option<Directives<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(InputValueDefinition => InputValueDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    visit(&node.name);
    visit(&node.value_type);
    if let Some(default_value) = &node.default_value {
        visit(default_value);
    }
    if let Some(directives) = &node.directives {
        visit(directives);
    }
});

/// The braced value list of an enum.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValuesDefinition<'src> {
    pub items: Vec<EnumValueDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(EnumValuesDefinition => EnumValuesDefinition, |node, visit| {
    for item in &node.items {
        visit(item);
    }
});

/// One value of an enum. The name is never `true`, `false`, or `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(EnumValueDefinition => EnumValueDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    visit(&node.name);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
});

// =========================================================
// Directive definitions
// =========================================================

/// `directive @name(args) repeatable on LOCATION | LOCATION`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<Description<'src>>,
    pub name: Name<'src>,
    pub arguments: Option<ArgumentsDefinition<'src>>,
    pub repeatable: bool,
    pub locations: DirectiveLocations<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(DirectiveDefinition => DirectiveDefinition, |node, visit| {
    if let Some(description) = &node.description {
        visit(description);
    }
    visit(&node.name);
    if let Some(arguments) = &node.arguments {
        visit(arguments);
    }
    visit(&node.locations);
});

/// `on A | B` of a directive definition. The location covers the `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveLocations<'src> {
    pub items: Vec<DirectiveLocation>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

impl DirectiveLocations<'_> {
    pub fn contains(&self, location: DirectiveLocation) -> bool {
        self.items.contains(&location)
    }
}

ast_node!(DirectiveLocations => DirectiveLocations);
