use crate::ast::ast_node::ast_node;
use crate::ast::Arguments;
use crate::ast::Comment;
use crate::Location;
use std::borrow::Cow;

// =========================================================
// Names and descriptions
// =========================================================

/// A GraphQL name (`/[_A-Za-z][_0-9A-Za-z]*/`), borrowed from the source.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Name<'src> {
    pub value: Cow<'src, str>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

impl Name<'_> {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

ast_node!(Name => Name);

/// A description string preceding a type-system definition.
///
/// `value` is the processed string content: escapes resolved for `"..."`,
/// dedented for `"""..."""`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Description<'src> {
    pub value: Cow<'src, str>,
    /// `true` when written as a block string.
    pub block: bool,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(Description => Description);

// =========================================================
// Directives
// =========================================================

/// A directive application such as `@include(if: $flag)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive<'src> {
    pub name: Name<'src>,
    pub arguments: Option<Arguments<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(Directive => Directive, |node, visit| {
    visit(&node.name);
    if let Some(arguments) = &node.arguments {
        visit(arguments);
    }
});

/// A run of one or more directive applications.
///
/// Directive lists have no delimiters of their own, so a `Directives` node
/// never carries comments; a comment in front of any directive belongs to
/// that [`Directive`]. Its location spans from the first `@` to the end of
/// the last directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Directives<'src> {
    pub items: Vec<Directive<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

impl<'src> Directives<'src> {
    pub fn iter(&self) -> std::slice::Iter<'_, Directive<'src>> {
        self.items.iter()
    }

    /// Returns the first directive named `name`.
    pub fn find(&self, name: &str) -> Option<&Directive<'src>> {
        self.items.iter().find(|directive| directive.name.value == name)
    }
}

ast_node!(Directives => Directives, |node, visit| {
    for directive in &node.items {
        visit(directive);
    }
});
