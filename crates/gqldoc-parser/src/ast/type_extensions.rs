//! `extend` forms.
//!
//! Each extension mirrors its definition minus the description, and has at
//! least one of its optional parts present; the parser rejects extensions
//! that add nothing.

use crate::ast::ast_node::ast_node;
use crate::ast::ast_node::ast_node_enum;
use crate::ast::Comment;
use crate::ast::Directives;
use crate::ast::EnumValuesDefinition;
use crate::ast::FieldsDefinition;
use crate::ast::ImplementsInterfaces;
use crate::ast::InputFieldsDefinition;
use crate::ast::Name;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::UnionMemberTypes;
use crate::Location;

/// `extend schema @directives { query: Query }`. `operation_types` is empty
/// when the braces were omitted.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaExtension<'src> {
    pub directives: Option<Directives<'src>>,
    pub operation_types: Vec<RootOperationTypeDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(SchemaExtension => SchemaExtension, |node, visit| {
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    for operation_type in &node.operation_types {
        visit(operation_type);
    }
});

#[derive(Clone, Debug, PartialEq)]
pub enum TypeExtension<'src> {
    Scalar(ScalarTypeExtension<'src>),
    Object(ObjectTypeExtension<'src>),
    Interface(InterfaceTypeExtension<'src>),
    Union(UnionTypeExtension<'src>),
    Enum(EnumTypeExtension<'src>),
    InputObject(InputObjectTypeExtension<'src>),
}

impl<'src> TypeExtension<'src> {
    pub fn name(&self) -> &Name<'src> {
        match self {
            Self::Scalar(ext) => &ext.name,
            Self::Object(ext) => &ext.name,
            Self::Interface(ext) => &ext.name,
            Self::Union(ext) => &ext.name,
            Self::Enum(ext) => &ext.name,
            Self::InputObject(ext) => &ext.name,
        }
    }
}

ast_node_enum!(TypeExtension {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
});

/// `extend scalar Name @directives`. Directives are required.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(ScalarTypeExtension => ScalarTypeExtension, |node, visit| {
    visit(&node.name);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
});

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeExtension<'src> {
    pub name: Name<'src>,
    pub interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<FieldsDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(ObjectTypeExtension => ObjectTypeExtension, |node, visit| {
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

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeExtension<'src> {
    pub name: Name<'src>,
    pub interfaces: Option<ImplementsInterfaces<'src>>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<FieldsDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(InterfaceTypeExtension => InterfaceTypeExtension, |node, visit| {
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

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub types: Option<UnionMemberTypes<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(UnionTypeExtension => UnionTypeExtension, |node, visit| {
    visit(&node.name);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    if let Some(types) = &node.types {
        visit(types);
    }
});

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub values: Option<EnumValuesDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(EnumTypeExtension => EnumTypeExtension, |node, visit| {
    visit(&node.name);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    if let Some(values) = &node.values {
        visit(values);
    }
});

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeExtension<'src> {
    pub name: Name<'src>,
    pub directives: Option<Directives<'src>>,
    pub fields: Option<InputFieldsDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(InputObjectTypeExtension => InputObjectTypeExtension, |node, visit| {
    visit(&node.name);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    if let Some(fields) = &node.fields {
        visit(fields);
    }
});
