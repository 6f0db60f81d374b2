use crate::GraphQLSyntaxErrorKind;
use crate::SourcePosition;

/// A fatal lexer or parser error.
///
/// Parsing stops at the first error, so a `GraphQLSyntaxError` always
/// describes exactly one problem. It records the byte offset at which the
/// lexer/parser state stood when the problem was detected; line and column
/// are derived from that offset only when asked for (see
/// [`line_column()`](Self::line_column)), so an error that is never
/// inspected costs nothing beyond its message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (at byte offset {position})")]
pub struct GraphQLSyntaxError {
    /// Human-readable description.
    ///
    /// Examples: "Expected `:`, found `String`", "Unterminated string."
    message: String,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLSyntaxErrorKind,

    /// Byte offset into the source text where the error was detected.
    position: u32,
}

impl GraphQLSyntaxError {
    /// Creates a new syntax error.
    pub fn new(
        message: impl Into<String>,
        kind: GraphQLSyntaxErrorKind,
        position: u32,
    ) -> Self {
        Self {
            message: message.into(),
            kind,
            position,
        }
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLSyntaxErrorKind {
        &self.kind
    }

    /// Returns the byte offset where the error was detected.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Computes the full [`SourcePosition`] of this error within `source`.
    ///
    /// `source` must be the text that produced the error.
    pub fn source_position(&self, source: &str) -> SourcePosition {
        SourcePosition::from_offset(source, self.position as usize)
    }

    /// Computes the 1-based `(line, column)` of this error within `source`.
    ///
    /// The column counts characters, not bytes.
    pub fn line_column(&self, source: &str) -> (u32, u32) {
        let pos = self.source_position(source);
        (pos.line() as u32 + 1, pos.col_utf8() as u32 + 1)
    }

    /// Formats this error as a single-line summary.
    ///
    /// ```text
    /// schema.graphql:5:12: error: Expected `:`, found `String`
    /// ```
    pub fn format_oneline(&self, source: &str, file_name: Option<&str>) -> String {
        let (line, column) = self.line_column(source);
        let file_name = file_name.unwrap_or("<input>");
        format!("{file_name}:{line}:{column}: error: {}", self.message)
    }

    /// Formats this error as a diagnostic with a source snippet.
    ///
    /// ```text
    /// error: Expected `:`, found `String`
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^
    /// ```
    pub fn format_detailed(&self, source: &str, file_name: Option<&str>) -> String {
        let pos = self.source_position(source);
        let display_line = pos.line() + 1;
        let file_name = file_name.unwrap_or("<input>");

        let mut output = String::new();
        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!(
            "  --> {file_name}:{display_line}:{}\n",
            pos.col_utf8() + 1,
        ));

        // `lines()` would merge a lone `\r` into the line; split on all three
        // terminators so snippet lines agree with `SourcePosition`.
        let line_content = source
            .split("\r\n")
            .flat_map(|chunk| chunk.split(['\n', '\r']))
            .nth(pos.line());
        if let Some(line_content) = line_content {
            let width = display_line.to_string().len().max(2);
            output.push_str(&format!("{:>width$} |\n", ""));
            output.push_str(&format!("{display_line:>width$} | {line_content}\n"));
            output.push_str(&format!(
                "{:>width$} | {:>padding$}^\n",
                "",
                "",
                padding = pos.col_utf8(),
            ));
        }

        output
    }
}
