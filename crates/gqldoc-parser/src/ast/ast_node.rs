use crate::ast::Comment;
use crate::ast::NodeKind;
use crate::Location;

/// The read contract shared by every AST node.
///
/// All node types implement this trait via `#[inherent] impl AstNode`, so
/// each method is also callable as an inherent method without importing the
/// trait. The trait itself serves generic consumers such as the printer and
/// tree walkers, which work on `&dyn AstNode`.
///
/// The sum types ([`Definition`](crate::ast::Definition),
/// [`Selection`](crate::ast::Selection), [`Value`](crate::ast::Value),
/// [`Type`](crate::ast::Type), ...) implement the trait transparently by
/// delegating to the variant they hold.
pub trait AstNode<'src> {
    /// The kind tag of this node.
    fn kind(&self) -> NodeKind;

    /// The byte range this node covers, or `None` when the document was
    /// parsed with [`IgnoreOptions::LOCATIONS`](crate::IgnoreOptions::LOCATIONS).
    fn location(&self) -> Option<Location>;

    /// The comment group that directly preceded this node, or `None` when
    /// there was none or comments were ignored.
    fn comments(&self) -> Option<&[Comment<'src>]>;

    /// Calls `visitor` with each direct child node, in source order.
    ///
    /// Comments are metadata, not children, and are never visited.
    fn visit_children(&self, visitor: &mut dyn FnMut(&dyn AstNode<'src>));
}

/// Implements [`AstNode`] for a node struct carrying `location` and
/// `comments` fields.
///
/// ```ignore
/// ast_node!(Argument => Argument, |node, visit| {
///     visit(&node.name);
///     visit(&node.value);
/// });
/// ```
macro_rules! ast_node {
    ($ty:ident => $kind:ident) => {
        $crate::ast::ast_node::ast_node!($ty => $kind, |_node, _visit| {});
    };
    ($ty:ident => $kind:ident, |$node:ident, $visit:ident| $body:block) => {
        #[inherent::inherent]
        impl<'src> $crate::ast::AstNode<'src> for $ty<'src> {
            pub fn kind(&self) -> $crate::ast::NodeKind {
                $crate::ast::NodeKind::$kind
            }

            pub fn location(&self) -> Option<$crate::Location> {
                self.location
            }

            pub fn comments(&self) -> Option<&[$crate::ast::Comment<'src>]> {
                self.comments.as_deref()
            }

            pub fn visit_children(
                &self,
                visitor: &mut dyn FnMut(&dyn $crate::ast::AstNode<'src>),
            ) {
                let $node = self;
                let $visit = visitor;
                $body
            }
        }
    };
}

/// Implements [`AstNode`] for a sum type by delegating to its variants.
macro_rules! ast_node_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        #[inherent::inherent]
        impl<'src> $crate::ast::AstNode<'src> for $ty<'src> {
            pub fn kind(&self) -> $crate::ast::NodeKind {
                match self {
                    $(Self::$variant(node) => node.kind(),)+
                }
            }

            pub fn location(&self) -> Option<$crate::Location> {
                match self {
                    $(Self::$variant(node) => node.location(),)+
                }
            }

            pub fn comments(&self) -> Option<&[$crate::ast::Comment<'src>]> {
                match self {
                    $(Self::$variant(node) => node.comments(),)+
                }
            }

            pub fn visit_children(
                &self,
                visitor: &mut dyn FnMut(&dyn $crate::ast::AstNode<'src>),
            ) {
                match self {
                    $(Self::$variant(node) => node.visit_children(visitor),)+
                }
            }
        }
    };
}

pub(crate) use ast_node;
pub(crate) use ast_node_enum;

/// Walks `node` and all of its descendants depth-first in source order,
/// calling `visitor` on each (pre-order).
pub fn walk<'src>(node: &dyn AstNode<'src>, visitor: &mut dyn FnMut(&dyn AstNode<'src>)) {
    visitor(node);
    node.visit_children(&mut |child| walk(child, visitor));
}
