use crate::lexer::scanner::Scanner;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use std::borrow::Cow;

impl<'src> Scanner<'src> {
    /// Lexes a `"""..."""` block string.
    ///
    /// `\"""` inside the literal stands for `"""`; no other escapes exist.
    /// The token value is the content after [`block_string_value()`].
    pub(super) fn lex_block_string(
        &mut self,
        start: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLSyntaxError> {
        let source = self.source;
        self.pos = start + 3;
        let mut raw = String::new();
        let mut chunk_start = self.pos;

        loop {
            let rest = self.remaining();
            let Some(&byte) = rest.first() else {
                return Err(self.error(
                    format!("Unterminated block string starting at byte offset {start}"),
                    GraphQLSyntaxErrorKind::UnterminatedString,
                    self.pos,
                ));
            };

            if rest.starts_with(b"\"\"\"") {
                raw.push_str(&source[chunk_start..self.pos]);
                self.pos += 3;
                break;
            }
            if rest.starts_with(b"\\\"\"\"") {
                raw.push_str(&source[chunk_start..self.pos]);
                raw.push_str("\"\"\"");
                self.pos += 4;
                chunk_start = self.pos;
                continue;
            }
            if byte < 0x20 && !matches!(byte, b'\t' | b'\n' | b'\r') {
                return Err(self.error(
                    format!("Invalid character {} in block string", self.describe_at(self.pos)),
                    GraphQLSyntaxErrorKind::InvalidCharacter,
                    self.pos,
                ));
            }
            self.pos += 1;
        }

        Ok(GraphQLToken {
            kind: GraphQLTokenKind::BlockString,
            value: Cow::Owned(block_string_value(&raw)),
            start: start as u32,
            end: self.pos as u32,
        })
    }
}

/// Computes the value of a block string from its raw content (escapes
/// already resolved, delimiters removed).
///
/// 1. Line terminators (`\r\n`, `\r`, `\n`) split lines and are rejoined
///    with `\n`.
/// 2. The common indent is the smallest leading run of spaces/tabs over all
///    lines but the first, ignoring whitespace-only lines.
/// 3. That indent is removed from every line but the first.
/// 4. Leading and trailing whitespace-only lines are dropped.
pub(crate) fn block_string_value(raw: &str) -> String {
    let lines: Vec<&str> = split_lines(raw).collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter(|line| !is_blank(line))
        .map(|line| leading_whitespace(line))
        .min()
        .unwrap_or(0);

    let Some(first) = lines.iter().position(|line| !is_blank(line)) else {
        return String::new();
    };
    let last = lines
        .iter()
        .rposition(|line| !is_blank(line))
        .unwrap_or(first);

    let mut value = String::with_capacity(raw.len());
    for (idx, line) in lines.iter().enumerate().take(last + 1).skip(first) {
        if idx > first {
            value.push('\n');
        }
        if idx == 0 {
            value.push_str(line);
        } else {
            // The first `common_indent` bytes of any line are ASCII
            // whitespace, so this never splits a character.
            value.push_str(line.get(common_indent.min(line.len())..).unwrap_or(""));
        }
    }
    value
}

/// Splits on `\r\n`, `\r`, and `\n`. Unlike [`str::lines`], a lone `\r`
/// terminates a line and a trailing terminator yields a final empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match memchr::memchr2(b'\n', b'\r', current.as_bytes()) {
            Some(idx) => {
                let terminator_len = if current[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[idx + terminator_len..]);
                Some(&current[..idx])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

fn is_blank(line: &str) -> bool {
    line.bytes().all(|b| b == b' ' || b == b'\t')
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b' ' || b == b'\t').count()
}
