use crate::lexer::scanner::Scanner;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use std::borrow::Cow;

impl<'src> Scanner<'src> {
    /// Lexes a single-line `"..."` string.
    ///
    /// The token value is the unescaped content. When the literal contains no
    /// escape sequences the value borrows the source; the first escape
    /// switches to an owned buffer that collects the remaining content.
    pub(super) fn lex_string_value(
        &mut self,
        start: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let source = self.source;
        self.pos = start + 1;
        let content_start = self.pos;
        let mut chunk_start = content_start;
        let mut owned: Option<String> = None;

        let value = loop {
            let Some(byte) = self.peek() else {
                return Err(self.unterminated_string(start));
            };
            match byte {
                b'"' => {
                    let content_end = self.pos;
                    self.pos += 1;
                    break match owned {
                        None => Cow::Borrowed(&source[content_start..content_end]),
                        Some(mut buf) => {
                            buf.push_str(&source[chunk_start..content_end]);
                            Cow::Owned(buf)
                        }
                    };
                }
                b'\n' | b'\r' => return Err(self.unterminated_string(start)),
                b'\\' => {
                    let capacity = self.pos - content_start + 16;
                    let buf = owned.get_or_insert_with(|| String::with_capacity(capacity));
                    buf.push_str(&source[chunk_start..self.pos]);
                    let ch = self.read_escape()?;
                    buf.push(ch);
                    chunk_start = self.pos;
                }
                b if b < 0x20 && b != b'\t' => {
                    return Err(self.error(
                        format!("Invalid character {} in string", self.describe_at(self.pos)),
                        GraphQLSyntaxErrorKind::InvalidCharacter,
                        self.pos,
                    ));
                }
                _ => self.pos += 1,
            }
        };

        Ok(GraphQLToken {
            kind: GraphQLTokenKind::String,
            value,
            start: start as u32,
            end: self.pos as u32,
        })
    }

    fn unterminated_string(&self, start: usize) -> GraphQLSyntaxError {
        self.error(
            format!(
                "Unterminated string starting at byte offset {start}: found {}",
                self.describe_at(self.pos),
            ),
            GraphQLSyntaxErrorKind::UnterminatedString,
            self.pos,
        )
    }

    /// Reads one escape sequence starting at the `\` under the cursor and
    /// returns the character it denotes.
    fn read_escape(&mut self) -> Result<char, GraphQLSyntaxError> {
        let escape_start = self.pos;
        let Some(&escaped) = self.bytes.get(escape_start + 1) else {
            self.pos = self.bytes.len();
            return Err(self.unterminated_string(escape_start));
        };
        self.pos += 2;

        let ch = match escaped {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{0008}',
            b'f' => '\u{000C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => return self.read_unicode_escape(escape_start),
            _ => {
                return Err(self.error(
                    format!(
                        "Invalid escape sequence: `\\` followed by {}",
                        self.describe_at(escape_start + 1),
                    ),
                    GraphQLSyntaxErrorKind::InvalidEscape,
                    escape_start,
                ));
            }
        };
        Ok(ch)
    }

    /// Reads the four hex digits of a `\uXXXX` escape (the `\u` is already
    /// consumed).
    ///
    /// A leading surrogate must be immediately followed by a `\uXXXX` trailing
    /// surrogate; the pair combines into one scalar value. Lone surrogates of
    /// either kind are rejected.
    fn read_unicode_escape(&mut self, escape_start: usize) -> Result<char, GraphQLSyntaxError> {
        let lead = self.read_hex4(escape_start)?;

        match lead {
            0xD800..=0xDBFF => {
                if self.remaining().starts_with(b"\\u") {
                    let trail_start = self.pos;
                    self.pos += 2;
                    let trail = self.read_hex4(trail_start)?;
                    if (0xDC00..=0xDFFF).contains(&trail) {
                        let scalar = 0x10000 + ((lead - 0xD800) << 10) + (trail - 0xDC00);
                        if let Some(ch) = char::from_u32(scalar) {
                            return Ok(ch);
                        }
                    }
                }
                Err(self.lone_surrogate(escape_start, lead))
            }
            0xDC00..=0xDFFF => Err(self.lone_surrogate(escape_start, lead)),
            _ => char::from_u32(lead).ok_or_else(|| self.lone_surrogate(escape_start, lead)),
        }
    }

    fn read_hex4(&mut self, escape_start: usize) -> Result<u32, GraphQLSyntaxError> {
        let digits = self
            .source
            .get(self.pos..self.pos + 4)
            .filter(|digits| digits.bytes().all(|b| b.is_ascii_hexdigit()));

        let Some(digits) = digits else {
            let shown: String = self.source[self.pos..]
                .chars()
                .take(4)
                .take_while(|ch| !matches!(ch, '"' | '\n' | '\r'))
                .collect();
            return Err(self.error(
                format!("Invalid Unicode escape sequence `\\u{shown}`: expected 4 hex digits"),
                GraphQLSyntaxErrorKind::InvalidEscape,
                escape_start,
            ));
        };

        self.pos += 4;
        u32::from_str_radix(digits, 16).map_err(|_| {
            self.error(
                format!("Invalid Unicode escape sequence `\\u{digits}`"),
                GraphQLSyntaxErrorKind::InvalidEscape,
                escape_start,
            )
        })
    }

    fn lone_surrogate(&self, escape_start: usize, code: u32) -> GraphQLSyntaxError {
        self.error(
            format!("Invalid Unicode escape sequence `\\u{code:04X}`: unpaired surrogate"),
            GraphQLSyntaxErrorKind::InvalidEscape,
            escape_start,
        )
    }
}
