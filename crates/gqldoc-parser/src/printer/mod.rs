//! Canonical GraphQL rendering of a parsed [`Document`].
//!
//! Output uses one definition per block separated by blank lines, one
//! selection or member definition per line, and single spaces everywhere
//! else. Parsing the output yields the same document, ignoring locations and
//! comments.

mod graphql_printer;
mod print_error;
mod print_options;

pub use graphql_printer::GraphQLPrinter;
pub use print_error::PrintError;
pub use print_options::PrintOptions;

use crate::ast::Document;

/// Renders `document` with [`PrintOptions::default()`].
pub fn print_document(document: &Document<'_>) -> String {
    // Without a cancellation flag printing cannot fail.
    GraphQLPrinter::new(PrintOptions::default())
        .print(document)
        .unwrap_or_default()
}
