use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use gqldoc_parser::GraphQLPrinter;
use gqldoc_parser::IgnoreOptions;
use gqldoc_parser::ParseOptions;
use gqldoc_parser::PrintOptions;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Keep `#` comments in the printed output.",
        long,
    )]
    comments: bool,

    #[arg(
        help="Parse without recording source locations. Comment groups that \
             precede no node are then printed after the last definition.",
        long,
    )]
    ignore_locations: bool,

    #[arg(
        default_value_t=2,
        help="Spaces per nesting level.",
        long,
    )]
    indent: usize,

    #[arg(
        help="Maximum nesting depth of selection sets, lists and input \
             objects before a document is rejected.",
        long,
    )]
    max_depth: Option<u32>,

    #[arg(
        help="Path to the GraphQL file to print.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match output_utils::read_source(&self.file_path) {
            Ok(source) => source,
            Err(e) => return CommandResult::from_error(e),
        };
        let file_name = self.file_path.display().to_string();
        match self.render(&source, &file_name) {
            Ok(Ok(printed)) => CommandResult::stdout(format_args!(
                "{}",
                printed.trim_end_matches('\n'),
            )),
            Ok(Err(diagnostic)) => CommandResult::stderr(format_args!("{diagnostic}")),
            Err(e) => CommandResult::from_error(e),
        }
    }
}

impl PrintCmd {
    fn parse_options(&self) -> ParseOptions {
        let mut ignore = IgnoreOptions::NONE;
        if !self.comments {
            ignore |= IgnoreOptions::COMMENTS;
        }
        if self.ignore_locations {
            ignore |= IgnoreOptions::LOCATIONS;
        }

        let options = ParseOptions::new().with_ignore(ignore);
        match self.max_depth {
            Some(max_depth) => options.with_max_depth(max_depth),
            None => options,
        }
    }

    /// Parses and prints `source`. A syntax error comes back as the inner
    /// `Err`, already rendered as a diagnostic.
    fn render(&self, source: &str, file_name: &str) -> anyhow::Result<Result<String, String>> {
        let document = match gqldoc_parser::parse(source, self.parse_options()) {
            Ok(document) => document,
            Err(e) => return Ok(Err(e.format_detailed(source, Some(file_name)))),
        };
        log::debug!(
            "Printing {} definitions from {file_name}.",
            document.definitions.len(),
        );

        let printer = GraphQLPrinter::new(
            PrintOptions::new()
                .with_indent(self.indent)
                .with_comments(self.comments),
        );
        let printed = printer
            .print(&document)
            .with_context(|| format!("Failed to print {file_name}"))?;
        Ok(Ok(printed))
    }
}

#[cfg(test)]
mod tests {
    use super::PrintCmd;
    use std::path::PathBuf;

    fn cmd(comments: bool, ignore_locations: bool) -> PrintCmd {
        PrintCmd {
            comments,
            ignore_locations,
            indent: 2,
            max_depth: None,
            file_path: PathBuf::from("doc.graphql"),
        }
    }

    const SOURCE: &str = "# leading\nquery Q{me{name}}\n# trailing\n";

    #[test]
    fn comments_are_dropped_by_default() {
        let printed = cmd(false, false).render(SOURCE, "doc.graphql").unwrap().unwrap();
        assert_eq!(printed, "query Q {\n  me {\n    name\n  }\n}\n");
    }

    #[test]
    fn comments_flag_keeps_attached_and_trailing_groups() {
        let printed = cmd(true, false).render(SOURCE, "doc.graphql").unwrap().unwrap();
        assert!(printed.starts_with("# leading\nquery Q {"), "{printed}");
        assert!(printed.trim_end().ends_with("# trailing"), "{printed}");
    }

    #[test]
    fn syntax_errors_render_as_diagnostics() {
        let diagnostic = cmd(false, false)
            .render("query {", "doc.graphql")
            .unwrap()
            .unwrap_err();
        assert!(diagnostic.starts_with("error: "), "{diagnostic}");
        assert!(diagnostic.contains("--> doc.graphql:1:8"), "{diagnostic}");
    }

    #[test]
    fn max_depth_is_forwarded_to_the_parser() {
        let mut shallow = cmd(false, true);
        shallow.max_depth = Some(1);
        assert!(shallow.render("{ a { b } }", "doc.graphql").unwrap().is_err());
        assert!(cmd(false, true).render("{ a { b } }", "doc.graphql").unwrap().is_ok());
    }
}
