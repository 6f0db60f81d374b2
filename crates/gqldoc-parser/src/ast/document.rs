use crate::ast::ast_node::ast_node_enum;
use crate::ast::AstNode;
use crate::ast::Comment;
use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::NodeKind;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::Location;
use indexmap::IndexMap;
use inherent::inherent;

/// The root of a parsed document.
///
/// A document owns all of its definitions plus the comment groups that did
/// not precede any node. Dropping the document releases everything,
/// including any comment text that had to be materialized.
#[derive(Clone, Debug, PartialEq)]
pub struct Document<'src> {
    pub definitions: Vec<Definition<'src>>,

    /// Comment groups that were followed by another comment group or by the
    /// end of input before any node could claim them, in source order.
    /// Always empty when comments are ignored.
    pub unattached_comments: Vec<Vec<Comment<'src>>>,

    /// `[0, source.len())`, or `None` when locations are ignored.
    pub location: Option<Location>,
}

impl<'src> Document<'src> {
    /// Indexes the document's fragment definitions by name, in source order.
    ///
    /// The index borrows from the document. If two fragments share a name,
    /// the later one wins (duplicate detection is validation, not parsing).
    pub fn fragments(&self) -> IndexMap<&str, &FragmentDefinition<'src>> {
        self.definitions
            .iter()
            .filter_map(|definition| match definition {
                Definition::FragmentDefinition(fragment) => {
                    Some((fragment.fragment_name.name.as_str(), fragment))
                }
                _ => None,
            })
            .collect()
    }

    /// Iterates over the operation definitions, in source order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'src>> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::OperationDefinition(operation) => Some(operation),
            _ => None,
        })
    }

    /// `true` if every definition is an operation or fragment.
    pub fn is_executable(&self) -> bool {
        self.definitions.iter().all(Definition::is_executable)
    }
}

#[inherent]
impl<'src> AstNode<'src> for Document<'src> {
    pub fn kind(&self) -> NodeKind {
        NodeKind::Document
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// Always `None`: a comment group at the top of a document belongs to
    /// the first definition. See
    /// [`unattached_comments`](Document::unattached_comments).
    pub fn comments(&self) -> Option<&[Comment<'src>]> {
        None
    }

    pub fn visit_children(&self, visitor: &mut dyn FnMut(&dyn AstNode<'src>)) {
        for definition in &self.definitions {
            visitor(definition);
        }
    }
}

/// A top-level definition.
#[derive(Clone, Debug, PartialEq)]
pub enum Definition<'src> {
    OperationDefinition(OperationDefinition<'src>),
    FragmentDefinition(FragmentDefinition<'src>),
    SchemaDefinition(SchemaDefinition<'src>),
    SchemaExtension(SchemaExtension<'src>),
    TypeDefinition(TypeDefinition<'src>),
    TypeExtension(TypeExtension<'src>),
    DirectiveDefinition(DirectiveDefinition<'src>),
}

impl Definition<'_> {
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::OperationDefinition(_) | Self::FragmentDefinition(_))
    }
}

ast_node_enum!(Definition {
    OperationDefinition,
    FragmentDefinition,
    SchemaDefinition,
    SchemaExtension,
    TypeDefinition,
    TypeExtension,
    DirectiveDefinition,
});
