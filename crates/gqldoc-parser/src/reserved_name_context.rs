/// Contexts where a syntactically valid name is reserved.
///
/// Used by [`GraphQLSyntaxErrorKind::ReservedName`](crate::GraphQLSyntaxErrorKind::ReservedName)
/// to record which production rejected the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedNameContext {
    /// Fragment names cannot be `on`; in `fragment on on User { ... }` the
    /// first `on` would be indistinguishable from a type condition.
    FragmentName,

    /// Enum value definitions cannot be `true`, `false`, or `null`, which
    /// would be ambiguous with the boolean and null literals.
    EnumValue,
}

impl std::fmt::Display for ReservedNameContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FragmentName => f.write_str("fragment name"),
            Self::EnumValue => f.write_str("enum value"),
        }
    }
}
