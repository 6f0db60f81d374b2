use crate::ast::ast_node::ast_node;
use crate::ast::ast_node::ast_node_enum;
use crate::ast::Comment;
use crate::ast::Directives;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::Location;

// =========================================================
// Operations
// =========================================================

/// The kind of a root operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(Self::Query),
            "mutation" => Some(Self::Mutation),
            "subscription" => Some(Self::Subscription),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operation definition.
///
/// The shorthand form `{ ... }` parses as an anonymous `query` with no
/// variables or directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub operation: OperationType,
    pub name: Option<Name<'src>>,
    pub variables: Option<VariablesDefinition<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(OperationDefinition => OperationDefinition, |node, visit| {
    if let Some(name) = &node.name {
        visit(name);
    }
    if let Some(variables) = &node.variables {
        visit(variables);
    }
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    visit(&node.selection_set);
});

/// The parenthesized variable definition list of an operation.
#[derive(Clone, Debug, PartialEq)]
pub struct VariablesDefinition<'src> {
    pub items: Vec<VariableDefinition<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(VariablesDefinition => VariablesDefinition, |node, visit| {
    for item in &node.items {
        visit(item);
    }
});

/// `$name: Type = default @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    pub variable: Variable<'src>,
    pub var_type: Type<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Option<Directives<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(VariableDefinition => VariableDefinition, |node, visit| {
    visit(&node.variable);
    visit(&node.var_type);
    if let Some(default_value) = &node.default_value {
        visit(default_value);
    }
    if let Some(directives) = &node.directives {
        visit(directives);
    }
});

// =========================================================
// Selections
// =========================================================

/// A braced, non-empty list of selections.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet<'src> {
    pub selections: Vec<Selection<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(SelectionSet => SelectionSet, |node, visit| {
    for selection in &node.selections {
        visit(selection);
    }
});

#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

ast_node_enum!(Selection { Field, FragmentSpread, InlineFragment });

/// A field selection: `alias: name(args) @directives { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<Alias<'src>>,
    pub name: Name<'src>,
    pub arguments: Option<Arguments<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: Option<SelectionSet<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

impl<'src> Field<'src> {
    /// The key this field appears under in a response: the alias if
    /// present, else the field name.
    pub fn response_key(&self) -> &Name<'src> {
        self.alias.as_ref().map_or(&self.name, |alias| &alias.name)
    }
}

ast_node!(Field => Field, |node, visit| {
    if let Some(alias) = &node.alias {
        visit(alias);
    }
    visit(&node.name);
    if let Some(arguments) = &node.arguments {
        visit(arguments);
    }
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    if let Some(selection_set) = &node.selection_set {
        visit(selection_set);
    }
});

/// `alias:` in front of a field name. The location covers the colon.
#[derive(Clone, Debug, PartialEq)]
pub struct Alias<'src> {
    pub name: Name<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(Alias => Alias, |node, visit| {
    visit(&node.name);
});

/// The parenthesized, non-empty argument list of a field or directive.
#[derive(Clone, Debug, PartialEq)]
pub struct Arguments<'src> {
    pub items: Vec<Argument<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

impl<'src> Arguments<'src> {
    /// Returns the value of the argument named `name`.
    pub fn get(&self, name: &str) -> Option<&Value<'src>> {
        self.items
            .iter()
            .find(|argument| argument.name.value == name)
            .map(|argument| &argument.value)
    }
}

ast_node!(Arguments => Arguments, |node, visit| {
    for item in &node.items {
        visit(item);
    }
});

/// `name: value`.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(Argument => Argument, |node, visit| {
    visit(&node.name);
    visit(&node.value);
});

// =========================================================
// Fragments
// =========================================================

/// `...FragmentName @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub fragment_name: FragmentName<'src>,
    pub directives: Option<Directives<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(FragmentSpread => FragmentSpread, |node, visit| {
    visit(&node.fragment_name);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
});

/// The name of a fragment. Never `on`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentName<'src> {
    pub name: Name<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(FragmentName => FragmentName, |node, visit| {
    visit(&node.name);
});

/// `... on Type @directives { ... }`; the type condition is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<TypeCondition<'src>>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(InlineFragment => InlineFragment, |node, visit| {
    if let Some(type_condition) = &node.type_condition {
        visit(type_condition);
    }
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    visit(&node.selection_set);
});

/// `on Type`. The location covers the `on` keyword.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeCondition<'src> {
    pub named_type: NamedType<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(TypeCondition => TypeCondition, |node, visit| {
    visit(&node.named_type);
});

/// `fragment Name on Type @directives { ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub fragment_name: FragmentName<'src>,
    pub type_condition: TypeCondition<'src>,
    pub directives: Option<Directives<'src>>,
    pub selection_set: SelectionSet<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(FragmentDefinition => FragmentDefinition, |node, visit| {
    visit(&node.fragment_name);
    visit(&node.type_condition);
    if let Some(directives) = &node.directives {
        visit(directives);
    }
    visit(&node.selection_set);
});
