use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqldoc_parser::ParseOptions;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Maximum nesting depth of selection sets, lists and input \
             objects before a document is rejected.",
        long,
    )]
    max_depth: Option<u32>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What parsing one file produced.
#[derive(Debug)]
enum FileReport {
    Parsed {
        definitions: usize,
        operations: usize,
        fragments: usize,
    },
    Failed(String),
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut diagnostics: Vec<String> = vec![];
        let (file_paths, num_skipped) = self.find_graphql_files(&mut diagnostics);

        log::debug!(
            "Found {} GraphQL files to be checked.",
            file_paths.len(),
        );

        let mut options = ParseOptions::new();
        if let Some(max_depth) = self.max_depth {
            options = options.with_max_depth(max_depth);
        }

        // Files parse independently, so each one gets its own blocking task.
        // Reports are collected in discovery order to keep output stable.
        let handles: Vec<_> = file_paths
            .iter()
            .cloned()
            .map(|path| tokio::task::spawn_blocking(move || check_file(&path, options)))
            .collect();

        let mut num_definitions = 0;
        let mut num_operations = 0;
        let mut num_fragments = 0;
        for (path, handle) in file_paths.iter().zip(handles) {
            match handle.await {
                Ok(Ok(FileReport::Parsed { definitions, operations, fragments })) => {
                    log::debug!("{path:#?} parsed with {definitions} definitions.");
                    num_definitions += definitions;
                    num_operations += operations;
                    num_fragments += fragments;
                },
                Ok(Ok(FileReport::Failed(diagnostic))) => diagnostics.push(diagnostic),
                Ok(Err(e)) => diagnostics.push(format!("error: {e:#}")),
                Err(e) => diagnostics.push(format!(
                    "error: Checking {} panicked: {e}",
                    path.display(),
                )),
            }
        }

        if file_paths.is_empty() && diagnostics.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No GraphQL files found (extensions: {}).",
                output_utils::RED_X,
                self.graphql_file_exts.join(", "),
            ));
        }

        let summary = format!(
            concat!(
                "  * Analyzed {}.\n",
                "  * Skipped {}.\n",
                "  * Parsed {}, {} and {}.",
            ),
            output_utils::plural(file_paths.len(), "file"),
            output_utils::plural(num_skipped, "non-graphql file"),
            output_utils::plural(num_definitions, "definition"),
            output_utils::plural(num_operations, "operation"),
            output_utils::plural(num_fragments, "fragment"),
        );

        if diagnostics.is_empty() {
            CommandResult::stdout(format_args!(
                "{} All GraphQL parsed successfully:\n{summary}",
                output_utils::GREEN_CHECK,
            ))
        } else {
            CommandResult::failure(
                format!(
                    "{} Found {}:\n{summary}",
                    output_utils::RED_X,
                    output_utils::plural(diagnostics.len(), "error"),
                ),
                diagnostics.join("\n"),
            )
        }
    }
}

impl CheckCmd {
    /// Collects the GraphQL files at or under each argument path, returning
    /// them with the number of files skipped for their extension.
    fn find_graphql_files(&self, diagnostics: &mut Vec<String>) -> (Vec<PathBuf>, usize) {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        diagnostics.push(format!("error: {e}"));
                        continue
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue
                }

                let has_graphql_ext = entry_path
                    .extension()
                    .is_some_and(|ext| graphql_file_exts.contains(&*ext.to_string_lossy()));
                if has_graphql_ext {
                    log::trace!("Found file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    log::trace!("Skipping file with a non-GraphQL extension: {entry_path:#?}.");
                    num_skipped += 1;
                }
            }
        }

        // A single explicit file argument is checked even when its extension
        // is not one of `--graphql-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                self.graphql_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped = num_skipped.saturating_sub(1);
            file_paths.push(first_arg_path.clone());
        }

        (file_paths, num_skipped)
    }
}

fn check_file(path: &Path, options: ParseOptions) -> anyhow::Result<FileReport> {
    let source = output_utils::read_source(path)?;
    let file_name = path.display().to_string();
    Ok(match gqldoc_parser::parse(&source, options) {
        Ok(document) => FileReport::Parsed {
            definitions: document.definitions.len(),
            operations: document.operations().count(),
            fragments: document.fragments().len(),
        },
        Err(e) => FileReport::Failed(e.format_detailed(&source, Some(&file_name))),
    })
}

#[cfg(test)]
mod tests {
    use super::check_file;
    use super::CheckCmd;
    use super::FileReport;
    use gqldoc_parser::ParseOptions;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gqldoc-check-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn valid_file_reports_definition_counts() {
        let path = temp_file(
            "valid.graphql",
            "query Q { ...F } fragment F on Query { me } type Query { me: ID }",
        );
        match check_file(&path, ParseOptions::new()).unwrap() {
            FileReport::Parsed { definitions, operations, fragments } => {
                assert_eq!((definitions, operations, fragments), (3, 1, 1));
            },
            FileReport::Failed(diagnostic) => panic!("unexpected failure: {diagnostic}"),
        }
    }

    #[test]
    fn invalid_file_reports_a_snippet_naming_the_file() {
        let path = temp_file("invalid.graphql", "type User {\n  userName String\n}\n");
        match check_file(&path, ParseOptions::new()).unwrap() {
            FileReport::Failed(diagnostic) => {
                assert!(diagnostic.starts_with("error: Expected `:`"), "{diagnostic}");
                assert!(diagnostic.contains("invalid.graphql:2:12"), "{diagnostic}");
            },
            FileReport::Parsed { .. } => panic!("expected a syntax error"),
        }
    }

    fn check_cmd(paths: Vec<PathBuf>) -> CheckCmd {
        CheckCmd {
            graphql_file_exts: vec!["graphql".to_string(), ".gql".to_string()],
            max_depth: None,
            file_or_dir_paths: paths,
        }
    }

    #[test]
    fn discovery_filters_by_extension_and_counts_skipped_files() {
        let schema = temp_file("discover/schema.graphql", "scalar Date");
        let query = temp_file("discover/nested/query.gql", "{ me }");
        temp_file("discover/notes.txt", "not graphql");
        let dir = schema.parent().unwrap().to_path_buf();

        let mut diagnostics = vec![];
        let (paths, num_skipped) = check_cmd(vec![dir]).find_graphql_files(&mut diagnostics);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(paths, vec![query, schema]);
        assert_eq!(num_skipped, 1);
    }

    #[test]
    fn single_explicit_file_is_checked_regardless_of_extension() {
        let path = temp_file("explicit.txt", "type Query { me: ID }");

        let mut diagnostics = vec![];
        let (paths, num_skipped) =
            check_cmd(vec![path.clone()]).find_graphql_files(&mut diagnostics);
        assert_eq!(paths, vec![path]);
        assert_eq!(num_skipped, 0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("gqldoc-check-does-not-exist.graphql");
        let err = check_file(&path, ParseOptions::new()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read GraphQL file"));
    }
}
