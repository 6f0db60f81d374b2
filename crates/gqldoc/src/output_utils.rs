use anyhow::Context;
use std::path::Path;

pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// Reads a GraphQL source file as UTF-8.
pub(crate) fn read_source(path: &Path) -> anyhow::Result<String> {
    log::debug!("Reading {path:#?}...");
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read GraphQL file {}", path.display()))
}

/// `1 file`, `2 files`.
pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::plural;

    #[test]
    fn plural_only_pluralizes_counts_other_than_one() {
        assert_eq!(plural(0, "file"), "0 files");
        assert_eq!(plural(1, "file"), "1 file");
        assert_eq!(plural(7, "error"), "7 errors");
    }
}
