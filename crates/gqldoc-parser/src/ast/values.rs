use crate::ast::ast_node::ast_node;
use crate::ast::ast_node::ast_node_enum;
use crate::ast::Comment;
use crate::ast::FloatNumber;
use crate::ast::IntNumber;
use crate::ast::Name;
use crate::Location;
use std::borrow::Cow;
use std::sync::OnceLock;

// =========================================================
// Value enum
// =========================================================

/// A GraphQL input value.
///
/// Whether variables may appear is decided by the parser: constant contexts
/// (default values and type-system directive arguments) reject them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Variable(Variable<'src>),
    Int(IntValue<'src>),
    Float(FloatValue<'src>),
    String(StringValue<'src>),
    Boolean(BooleanValue<'src>),
    Null(NullValue<'src>),
    Enum(EnumValue<'src>),
    List(ListValue<'src>),
    Object(ObjectValue<'src>),
}

impl Value<'_> {
    /// Returns `true` if this value contains no variables at any depth.
    pub fn is_const(&self) -> bool {
        match self {
            Self::Variable(_) => false,
            Self::List(list) => list.values.iter().all(Value::is_const),
            Self::Object(object) => object.fields.iter().all(|field| field.value.is_const()),
            Self::Int(_)
            | Self::Float(_)
            | Self::String(_)
            | Self::Boolean(_)
            | Self::Null(_)
            | Self::Enum(_) => true,
        }
    }
}

ast_node_enum!(Value {
    Variable,
    Int,
    Float,
    String,
    Boolean,
    Null,
    Enum,
    List,
    Object,
});

// =========================================================
// Variables
// =========================================================

/// A variable reference: `$name`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable<'src> {
    pub name: Name<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(Variable => Variable, |node, visit| {
    visit(&node.name);
});

// =========================================================
// Scalar values
// =========================================================

/// An Int literal.
///
/// The literal text is kept as written; [`number()`](Self::number) resolves
/// it to the narrowest exact representation on first access and caches the
/// result.
#[derive(Clone, Debug)]
pub struct IntValue<'src> {
    pub raw: Cow<'src, str>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
    number: OnceLock<IntNumber>,
}

impl<'src> IntValue<'src> {
    pub fn new(
        raw: impl Into<Cow<'src, str>>,
        location: Option<Location>,
        comments: Option<Vec<Comment<'src>>>,
    ) -> Self {
        Self {
            raw: raw.into(),
            location,
            comments,
            number: OnceLock::new(),
        }
    }

    pub fn number(&self) -> &IntNumber {
        self.number.get_or_init(|| IntNumber::parse(&self.raw))
    }
}

impl PartialEq for IntValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
            && self.location == other.location
            && self.comments == other.comments
    }
}

ast_node!(IntValue => IntValue);

/// A Float literal. See [`IntValue`] for the caching scheme.
#[derive(Clone, Debug)]
pub struct FloatValue<'src> {
    pub raw: Cow<'src, str>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
    number: OnceLock<FloatNumber>,
}

impl<'src> FloatValue<'src> {
    pub fn new(
        raw: impl Into<Cow<'src, str>>,
        location: Option<Location>,
        comments: Option<Vec<Comment<'src>>>,
    ) -> Self {
        Self {
            raw: raw.into(),
            location,
            comments,
            number: OnceLock::new(),
        }
    }

    pub fn number(&self) -> &FloatNumber {
        self.number.get_or_init(|| FloatNumber::parse(&self.raw))
    }
}

impl PartialEq for FloatValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
            && self.location == other.location
            && self.comments == other.comments
    }
}

ast_node!(FloatValue => FloatValue);

/// A string literal, quoted or block.
///
/// `value` is the processed content. It borrows from the source unless
/// escapes had to be resolved or the block string was dedented.
#[derive(Clone, Debug, PartialEq)]
pub struct StringValue<'src> {
    pub value: Cow<'src, str>,
    /// `true` when written as a block string.
    pub block: bool,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(StringValue => StringValue);

/// `true` or `false`.
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanValue<'src> {
    pub value: bool,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(BooleanValue => BooleanValue);

/// `null`.
#[derive(Clone, Debug, PartialEq)]
pub struct NullValue<'src> {
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(NullValue => NullValue);

/// An enum value: any name other than `true`, `false`, or `null` in value
/// position.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValue<'src> {
    pub name: Name<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(EnumValue => EnumValue, |node, visit| {
    visit(&node.name);
});

// =========================================================
// Composite values
// =========================================================

/// A list value: `[1, 2, 3]`. May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue<'src> {
    pub values: Vec<Value<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(ListValue => ListValue, |node, visit| {
    for value in &node.values {
        visit(value);
    }
});

/// An object value: `{ lat: 1.5, lng: 2.0 }`. May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue<'src> {
    pub fields: Vec<ObjectField<'src>>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

impl<'src> ObjectValue<'src> {
    /// Returns the value of the first field named `name`.
    pub fn get(&self, name: &str) -> Option<&Value<'src>> {
        self.fields
            .iter()
            .find(|field| field.name.value == name)
            .map(|field| &field.value)
    }
}

ast_node!(ObjectValue => ObjectValue, |node, visit| {
    for field in &node.fields {
        visit(field);
    }
});

/// One `name: value` entry of an [`ObjectValue`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField<'src> {
    pub name: Name<'src>,
    pub value: Value<'src>,
    pub location: Option<Location>,
    pub comments: Option<Vec<Comment<'src>>>,
}

ast_node!(ObjectField => ObjectField, |node, visit| {
    visit(&node.name);
    visit(&node.value);
});
