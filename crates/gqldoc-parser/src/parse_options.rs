use std::ops::BitOr;
use std::ops::BitOrAssign;

/// Selects which optional metadata the parser drops.
///
/// Flags combine with `|`:
///
/// ```
/// use gqldoc_parser::IgnoreOptions;
///
/// let both = IgnoreOptions::COMMENTS | IgnoreOptions::LOCATIONS;
/// assert_eq!(both, IgnoreOptions::ALL);
/// assert!(both.ignores_comments());
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct IgnoreOptions(u8);

impl IgnoreOptions {
    /// Retain both comments and locations.
    pub const NONE: Self = Self(0);
    /// Drop `#` comments. Nodes report no comments and the document has no
    /// unattached comment groups.
    pub const COMMENTS: Self = Self(1);
    /// Drop source locations. Every node reports `None` for its location.
    pub const LOCATIONS: Self = Self(1 << 1);
    /// Drop both comments and locations.
    pub const ALL: Self = Self(Self::COMMENTS.0 | Self::LOCATIONS.0);

    /// Returns `true` if every flag in `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn ignores_comments(self) -> bool {
        self.contains(Self::COMMENTS)
    }

    pub fn ignores_locations(self) -> bool {
        self.contains(Self::LOCATIONS)
    }
}

impl BitOr for IgnoreOptions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for IgnoreOptions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Configuration for a single [`parse()`](crate::parse) call.
///
/// The default retains comments and locations and limits nesting to
/// [`ParseOptions::DEFAULT_MAX_DEPTH`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    /// Metadata to drop while building the AST.
    pub ignore: IgnoreOptions,

    /// Maximum nesting depth of selection sets, list values, object values,
    /// and list types combined. `None` means
    /// [`DEFAULT_MAX_DEPTH`](Self::DEFAULT_MAX_DEPTH); values below 1 are
    /// treated as 1.
    pub max_depth: Option<u32>,
}

impl ParseOptions {
    /// Default recursion ceiling. Deep enough for any realistic document
    /// while keeping the parser's stack usage bounded even in debug builds.
    pub const DEFAULT_MAX_DEPTH: u32 = 128;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore(mut self, ignore: IgnoreOptions) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// The effective depth ceiling.
    pub fn effective_max_depth(&self) -> u32 {
        self.max_depth.unwrap_or(Self::DEFAULT_MAX_DEPTH).max(1)
    }
}
