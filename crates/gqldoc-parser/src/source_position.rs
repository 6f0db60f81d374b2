/// Line/column information for a byte offset, computed on demand.
///
/// Nothing in the lexer or parser tracks lines while scanning; a
/// `SourcePosition` is only materialized when a diagnostic is actually
/// inspected, by scanning the source for line terminators up to the offset.
///
/// # Indexing Convention
///
/// **All position values are 0-based:**
/// - `line`: 0 = first line of the document
/// - `col_utf8`: character count within the current line
/// - `col_utf16`: UTF-16 code unit offset within the current line
/// - `byte_offset`: byte offset within the whole document
///
/// `\r\n`, `\r`, and `\n` each terminate exactly one line.
///
/// For ASCII text both columns are equal. For characters outside the Basic
/// Multilingual Plane (e.g. emoji) `col_utf8` advances by 1 and `col_utf16`
/// by 2.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcePosition {
    line: usize,
    col_utf8: usize,
    col_utf16: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Computes the position of `byte_offset` within `source`.
    ///
    /// Offsets past the end of `source` are clamped to `source.len()`.
    pub fn from_offset(source: &str, byte_offset: usize) -> Self {
        let byte_offset = byte_offset.min(source.len());
        let prefix = &source.as_bytes()[..byte_offset];

        let mut line = 0;
        let mut line_start = 0;
        let mut iter = memchr::memchr2_iter(b'\n', b'\r', prefix).peekable();
        while let Some(idx) = iter.next() {
            if prefix[idx] == b'\r' && prefix.get(idx + 1) == Some(&b'\n') {
                // `\r\n` counts once; skip the `\n` half.
                iter.next();
                line_start = idx + 2;
            } else {
                line_start = idx + 1;
            }
            line += 1;
        }

        let line_text = String::from_utf8_lossy(&prefix[line_start..]);
        let col_utf8 = line_text.chars().count();
        let col_utf16 = line_text.chars().map(char::len_utf16).sum();

        Self {
            line,
            col_utf8,
            col_utf16,
            byte_offset,
        }
    }

    /// Returns the 0-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 0-based character count within the current line.
    pub fn col_utf8(&self) -> usize {
        self.col_utf8
    }

    /// Returns the 0-based UTF-16 code unit offset within the current line.
    ///
    /// For LSP compatibility, prefer this over [`col_utf8`](Self::col_utf8).
    pub fn col_utf16(&self) -> usize {
        self.col_utf16
    }

    /// Returns the 0-based byte offset from document start.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}
