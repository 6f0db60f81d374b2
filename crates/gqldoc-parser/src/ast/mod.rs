//! AST types for parsed GraphQL documents.
//!
//! Every node type is parameterized over a `'src` lifetime and borrows its
//! text from the source via [`Cow<'src, str>`](std::borrow::Cow). Only
//! strings that needed escape processing and block strings own their text.
//!
//! Each node carries two optional facets as plain fields:
//!
//! - `location: Option<Location>`: the node's byte range, present unless
//!   the document was parsed with
//!   [`IgnoreOptions::LOCATIONS`](crate::IgnoreOptions::LOCATIONS);
//! - `comments: Option<Vec<Comment>>`: the comment group directly preceding
//!   the node, present only when comments are retained and such a group
//!   existed. `Option<Vec<_>>` is a null pointer when absent, so nodes
//!   without comments never allocate for them.
//!
//! All nodes implement [`AstNode`], which exposes the facets together with
//! the node's [`NodeKind`] and a walk over its direct children.
//!
//! # Example
//!
//! ```rust
//! use gqldoc_parser::ast::Definition;
//! use gqldoc_parser::parse_with_default_options;
//!
//! let doc = parse_with_default_options("type Query { hello: String }").unwrap();
//! let Definition::TypeDefinition(def) = &doc.definitions[0] else {
//!     panic!("expected a type definition");
//! };
//! assert_eq!(def.name().as_str(), "Query");
//! ```

mod ast_node;
mod comment;
mod directive_location;
mod document;
mod executable_defs;
mod node_kind;
mod numeric;
mod shared_nodes;
mod type_annotations;
mod type_extensions;
mod type_system_defs;
mod values;

pub use ast_node::walk;
pub use ast_node::AstNode;
pub use comment::comment_group_text;
pub use comment::Comment;
pub use directive_location::DirectiveLocation;
pub use document::Definition;
pub use document::Document;
pub use executable_defs::Alias;
pub use executable_defs::Argument;
pub use executable_defs::Arguments;
pub use executable_defs::Field;
pub use executable_defs::FragmentDefinition;
pub use executable_defs::FragmentName;
pub use executable_defs::FragmentSpread;
pub use executable_defs::InlineFragment;
pub use executable_defs::OperationDefinition;
pub use executable_defs::OperationType;
pub use executable_defs::Selection;
pub use executable_defs::SelectionSet;
pub use executable_defs::TypeCondition;
pub use executable_defs::VariableDefinition;
pub use executable_defs::VariablesDefinition;
pub use node_kind::NodeKind;
pub use numeric::Decimal;
pub use numeric::FloatNumber;
pub use numeric::IntNumber;
pub use shared_nodes::Description;
pub use shared_nodes::Directive;
pub use shared_nodes::Directives;
pub use shared_nodes::Name;
pub use type_annotations::ListType;
pub use type_annotations::NamedType;
pub use type_annotations::NonNullType;
pub use type_annotations::Type;
pub use type_extensions::EnumTypeExtension;
pub use type_extensions::InputObjectTypeExtension;
pub use type_extensions::InterfaceTypeExtension;
pub use type_extensions::ObjectTypeExtension;
pub use type_extensions::ScalarTypeExtension;
pub use type_extensions::SchemaExtension;
pub use type_extensions::TypeExtension;
pub use type_extensions::UnionTypeExtension;
pub use type_system_defs::ArgumentsDefinition;
pub use type_system_defs::DirectiveDefinition;
pub use type_system_defs::DirectiveLocations;
pub use type_system_defs::EnumTypeDefinition;
pub use type_system_defs::EnumValueDefinition;
pub use type_system_defs::EnumValuesDefinition;
pub use type_system_defs::FieldDefinition;
pub use type_system_defs::FieldsDefinition;
pub use type_system_defs::ImplementsInterfaces;
pub use type_system_defs::InputFieldsDefinition;
pub use type_system_defs::InputObjectTypeDefinition;
pub use type_system_defs::InputValueDefinition;
pub use type_system_defs::InterfaceTypeDefinition;
pub use type_system_defs::ObjectTypeDefinition;
pub use type_system_defs::RootOperationTypeDefinition;
pub use type_system_defs::ScalarTypeDefinition;
pub use type_system_defs::SchemaDefinition;
pub use type_system_defs::TypeDefinition;
pub use type_system_defs::UnionMemberTypes;
pub use type_system_defs::UnionTypeDefinition;
pub use values::BooleanValue;
pub use values::EnumValue;
pub use values::FloatValue;
pub use values::IntValue;
pub use values::ListValue;
pub use values::NullValue;
pub use values::ObjectField;
pub use values::ObjectValue;
pub use values::StringValue;
pub use values::Value;
pub use values::Variable;
