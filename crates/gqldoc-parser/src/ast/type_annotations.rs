use crate::ast::ast_node::ast_node;
use crate::ast::ast_node::ast_node_enum;
use crate::ast::Comment;
use crate::ast::Name;
use crate::Location;

/// A type reference: `Name`, `[Type]`, or `Type!`.
#[derive(Clone, Debug, PartialEq)]
pub enum Type<'src> {
    Named(NamedType<'src>),
    List(ListType<'src>),
    NonNull(NonNullType<'src>),
}

impl<'src> Type<'src> {
    /// The named type at the core of this reference (`String` in
    /// `[String!]!`).
    pub fn innermost_name(&self) -> &Name<'src> {
        match self {
            Self::Named(named) => &named.name,
            Self::List(list) => list.of_type.innermost_name(),
            Self::NonNull(non_null) => non_null.of_type.innermost_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}

ast_node_enum!(Type { Named, List, NonNull });

/// A reference to a named type.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType<'src> {
    pub name: Name<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(NamedType => NamedType, |node, visit| {
    visit(&node.name);
});

/// `[of_type]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListType<'src> {
    pub of_type: Box<Type<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(ListType => ListType, |node, visit| {
    visit(&*node.of_type);
});

/// `of_type!`.
///
/// `of_type` is never itself a `NonNull`. The wrapper is the outer node, so
/// it takes over the comments that preceded the wrapped type.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType<'src> {
    pub of_type: Box<Type<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(NonNullType => NonNullType, |node, visit| {
    visit(&*node.of_type);
});
