use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqldoc_parser::token::GraphQLToken;
use gqldoc_parser::token::GraphQLTokenKind;
use gqldoc_parser::SourcePosition;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Show 1-based line:column positions instead of byte spans.",
        long,
    )]
    line_columns: bool,

    #[arg(
        help="Path to the GraphQL file to tokenize.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match output_utils::read_source(&self.file_path) {
            Ok(source) => source,
            Err(e) => return CommandResult::from_error(e),
        };
        let file_name = self.file_path.display().to_string();
        match dump_tokens(&source, self.line_columns) {
            Ok(dump) => CommandResult::stdout(format_args!("{}", dump.trim_end_matches('\n'))),
            Err(e) => CommandResult::stderr(format_args!(
                "{}",
                e.format_detailed(&source, Some(&file_name)),
            )),
        }
    }
}

/// One line per token through `Eof`: kind, span and (for tokens that carry
/// text) the debug-quoted value.
fn dump_tokens(
    source: &str,
    line_columns: bool,
) -> Result<String, gqldoc_parser::GraphQLSyntaxError> {
    let mut dump = String::new();
    let mut offset = 0;
    let mut count = 0;
    loop {
        let token = gqldoc_parser::lex(source, offset)?;
        write_token(&mut dump, source, &token, line_columns);
        count += 1;
        if token.kind == GraphQLTokenKind::Eof {
            break;
        }
        offset = token.end;
    }
    log::debug!("Lexed {count} tokens.");
    Ok(dump)
}

fn write_token(dump: &mut String, source: &str, token: &GraphQLToken<'_>, line_columns: bool) {
    let span = if line_columns {
        let start = SourcePosition::from_offset(source, token.start as usize);
        let end = SourcePosition::from_offset(source, token.end as usize);
        format!(
            "{}:{}-{}:{}",
            start.line() + 1,
            start.col_utf8() + 1,
            end.line() + 1,
            end.col_utf8() + 1,
        )
    } else {
        format!("{}..{}", token.start, token.end)
    };
    let kind = format!("{:?}", token.kind);

    // Writing into a String cannot fail.
    let _ = if token.kind.is_punctuator() || token.kind == GraphQLTokenKind::Eof {
        writeln!(dump, "{kind:<12} {span}")
    } else {
        writeln!(dump, "{kind:<12} {span:<10} {:?}", token.value)
    };
}

#[cfg(test)]
mod tests {
    use super::dump_tokens;
    use gqldoc_parser::GraphQLSyntaxErrorKind;

    #[test]
    fn dumps_every_token_through_eof() {
        let dump = dump_tokens("{ a(x: 1.5) } # hi", false).unwrap();
        let lines: Vec<&str> = dump.lines().map(str::trim_end).collect();
        assert_eq!(
            lines,
            vec![
                "BraceOpen    0..1",
                "Name         2..3       \"a\"",
                "ParenOpen    3..4",
                "Name         4..5       \"x\"",
                "Colon        5..6",
                "Float        7..10      \"1.5\"",
                "ParenClose   10..11",
                "BraceClose   12..13",
                "Comment      14..18     \" hi\"",
                "Eof          18..18",
            ],
        );
    }

    #[test]
    fn line_columns_replace_byte_spans() {
        let dump = dump_tokens("a\n  bc", true).unwrap();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[0], "Name         1:1-1:2    \"a\"");
        assert_eq!(lines[1], "Name         2:3-2:5    \"bc\"");
        assert_eq!(lines[2], "Eof          2:5-2:5");
    }

    #[test]
    fn lexical_errors_stop_the_dump() {
        let err = dump_tokens("a ? b", false).unwrap_err();
        assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::UnexpectedCharacter);
        assert_eq!(err.position(), 2);
    }
}
