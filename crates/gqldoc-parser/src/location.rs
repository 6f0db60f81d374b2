/// Compact byte-offset span of an AST node or token. 8 bytes.
///
/// Represents a half-open interval `[start, end)` of byte offsets into the
/// source text. Both offsets are 0-based.
///
/// `u32` offsets support documents up to 4 GiB, which is far beyond any
/// GraphQL document seen in practice.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Location {
    /// Byte offset of the first byte of the node (inclusive).
    pub start: u32,
    /// Byte offset one past the last byte of the node (exclusive).
    pub end: u32,
}

impl Location {
    /// Creates a new `Location` from start (inclusive) and end (exclusive)
    /// byte offsets.
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "inverted location {start}..{end}");
        Self { start, end }
    }

    /// Returns the length of this location in bytes.
    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` if this location has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slices the text this location covers out of `source`.
    ///
    /// Returns `None` when the location does not fit `source` (e.g. the
    /// location came from a different document).
    pub fn slice<'src>(&self, source: &'src str) -> Option<&'src str> {
        source.get(self.start as usize..self.end as usize)
    }
}
