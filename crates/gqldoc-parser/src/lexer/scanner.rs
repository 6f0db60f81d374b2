use crate::lexer::describe_char;
use crate::lexer::is_name_continue;
use crate::lexer::is_name_start;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;

const BOM: &[u8] = "\u{FEFF}".as_bytes();

/// Single-token cursor over a source string.
///
/// A `Scanner` lives for exactly one [`lex()`](crate::lex) call. All scanning
/// is byte-oriented: every character that matters to the grammar is ASCII,
/// and UTF-8 continuation bytes are always `>= 0x80`, so multi-byte
/// characters inside strings and comments can be stepped over one byte at a
/// time without ever landing on a false match.
pub(super) struct Scanner<'src> {
    pub(super) source: &'src str,
    pub(super) bytes: &'src [u8],
    pub(super) pos: usize,
}

impl<'src> Scanner<'src> {
    pub(super) fn new(source: &'src str, offset: usize) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: offset.min(source.len()),
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    pub(super) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub(super) fn remaining(&self) -> &'src [u8] {
        &self.bytes[self.pos..]
    }

    /// Describes the character at byte `pos` for error messages, or
    /// "end of input" when `pos` is past the end.
    pub(super) fn describe_at(&self, pos: usize) -> String {
        match self.source.get(pos..).and_then(|rest| rest.chars().next()) {
            Some(ch) => describe_char(ch),
            None => "end of input".to_string(),
        }
    }

    pub(super) fn error(
        &self,
        message: impl Into<String>,
        kind: GraphQLSyntaxErrorKind,
        pos: usize,
    ) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(message, kind, pos as u32)
    }

    fn borrowed_token(&self, kind: GraphQLTokenKind, start: usize) -> GraphQLToken<'src> {
        GraphQLToken::borrowed(
            kind,
            &self.source[start..self.pos],
            start as u32,
            self.pos as u32,
        )
    }

    // =========================================================================
    // Lexer main dispatch
    // =========================================================================

    pub(super) fn next_token(mut self) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        self.skip_ignored();
        let start = self.pos;

        let Some(byte) = self.peek() else {
            return Ok(GraphQLToken::eof(self.source.len() as u32));
        };

        let kind = match byte {
            b'!' => GraphQLTokenKind::Bang,
            b'$' => GraphQLTokenKind::Dollar,
            b'&' => GraphQLTokenKind::Ampersand,
            b'(' => GraphQLTokenKind::ParenOpen,
            b')' => GraphQLTokenKind::ParenClose,
            b':' => GraphQLTokenKind::Colon,
            b'=' => GraphQLTokenKind::Equals,
            b'@' => GraphQLTokenKind::At,
            b'[' => GraphQLTokenKind::BracketOpen,
            b']' => GraphQLTokenKind::BracketClose,
            b'{' => GraphQLTokenKind::BraceOpen,
            b'|' => GraphQLTokenKind::Pipe,
            b'}' => GraphQLTokenKind::BraceClose,

            b'.' => return self.lex_spread(start),
            b'#' => return Ok(self.lex_comment(start)),
            b'"' => return self.lex_string(start),
            b if is_name_start(b) => return Ok(self.lex_name(start)),
            b'-' | b'0'..=b'9' => return self.lex_number(start),

            _ => return Err(self.invalid_character(start)),
        };

        self.pos += 1;
        Ok(self.borrowed_token(kind, start))
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips whitespace, line terminators, commas, and byte order marks.
    fn skip_ignored(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' | b',' => self.pos += 1,
                0xEF if self.remaining().starts_with(BOM) => self.pos += BOM.len(),
                _ => break,
            }
        }
    }

    // =========================================================================
    // Comments
    // =========================================================================

    /// Lexes one `#` comment line. The value excludes the `#` and the line
    /// terminator.
    fn lex_comment(&mut self, start: usize) -> GraphQLToken<'src> {
        let content_start = start + 1;
        let content_end = memchr::memchr2(b'\n', b'\r', &self.bytes[content_start..])
            .map_or(self.bytes.len(), |idx| content_start + idx);
        self.pos = content_end;

        GraphQLToken::borrowed(
            GraphQLTokenKind::Comment,
            &self.source[content_start..content_end],
            start as u32,
            content_end as u32,
        )
    }

    // =========================================================================
    // Spread
    // =========================================================================

    fn lex_spread(&mut self, start: usize) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        if self.remaining().starts_with(b"...") {
            self.pos += 3;
            return Ok(self.borrowed_token(GraphQLTokenKind::Spread, start));
        }

        let message = if self.remaining().starts_with(b"..") {
            "Unexpected `..` (use `...` for the spread operator)"
        } else {
            "Unexpected `.`"
        };
        Err(self.error(message, GraphQLSyntaxErrorKind::UnexpectedCharacter, start))
    }

    // =========================================================================
    // Names
    // =========================================================================

    /// Lexes a name matching `/[_A-Za-z][_0-9A-Za-z]*/`.
    ///
    /// Keywords (including `true`, `false`, and `null`) are ordinary names at
    /// this level.
    fn lex_name(&mut self, start: usize) -> GraphQLToken<'src> {
        self.pos += 1;
        while self.peek().is_some_and(is_name_continue) {
            self.pos += 1;
        }
        self.borrowed_token(GraphQLTokenKind::Name, start)
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// A `.` or name-start character directly after the literal is an error,
    /// so `1.2.3` and `123abc` never lex as two tokens.
    fn lex_number(&mut self, start: usize) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let mut is_float = false;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                if self.peek().is_some_and(|b| b.is_ascii_digit()) {
                    return Err(self.error(
                        format!(
                            "Invalid number: unexpected digit after 0: {}",
                            self.describe_at(self.pos),
                        ),
                        GraphQLSyntaxErrorKind::InvalidNumber,
                        self.pos,
                    ));
                }
            }
            Some(b'1'..=b'9') => self.skip_digits(),
            _ => return Err(self.expected_digit()),
        }

        if self.peek() == Some(b'.') {
            is_float = true;
            self.pos += 1;
            self.expect_digits()?;
        }

        if let Some(b'e' | b'E') = self.peek() {
            is_float = true;
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            self.expect_digits()?;
        }

        if let Some(byte) = self.peek()
            && (byte == b'.' || is_name_start(byte))
        {
            return Err(self.error(
                format!(
                    "Invalid number: unexpected {} after numeric literal `{}`",
                    self.describe_at(self.pos),
                    &self.source[start..self.pos],
                ),
                GraphQLSyntaxErrorKind::InvalidNumber,
                self.pos,
            ));
        }

        let kind = if is_float {
            GraphQLTokenKind::Float
        } else {
            GraphQLTokenKind::Int
        };
        Ok(self.borrowed_token(kind, start))
    }

    fn skip_digits(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn expect_digits(&mut self) -> Result<(), GraphQLSyntaxError> {
        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(self.expected_digit());
        }
        self.skip_digits();
        Ok(())
    }

    fn expected_digit(&self) -> GraphQLSyntaxError {
        self.error(
            format!(
                "Invalid number: expected digit, found {}",
                self.describe_at(self.pos),
            ),
            GraphQLSyntaxErrorKind::InvalidNumber,
            self.pos,
        )
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self, start: usize) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        if self.remaining().starts_with(b"\"\"\"") {
            self.lex_block_string(start)
        } else {
            self.lex_string_value(start)
        }
    }

    // =========================================================================
    // Invalid characters
    // =========================================================================

    /// Builds the error for a character that cannot start any token.
    ///
    /// Control characters get [`InvalidCharacter`](GraphQLSyntaxErrorKind::InvalidCharacter);
    /// everything else (including an offset that does not fall on a character
    /// boundary) gets [`UnexpectedCharacter`](GraphQLSyntaxErrorKind::UnexpectedCharacter).
    fn invalid_character(&self, start: usize) -> GraphQLSyntaxError {
        let ch = self.source.get(start..).and_then(|rest| rest.chars().next());
        match ch {
            Some(ch) if ch < ' ' || ch == '\u{7F}' => self.error(
                format!("Invalid character {}", describe_char(ch)),
                GraphQLSyntaxErrorKind::InvalidCharacter,
                start,
            ),
            Some(ch) => self.error(
                format!("Unexpected character {}", describe_char(ch)),
                GraphQLSyntaxErrorKind::UnexpectedCharacter,
                start,
            ),
            None => self.error(
                "Unexpected byte inside a multi-byte character",
                GraphQLSyntaxErrorKind::UnexpectedCharacter,
                start,
            ),
        }
    }
}
