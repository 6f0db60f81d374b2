/// Why [`GraphQLPrinter::print()`](crate::GraphQLPrinter::print) produced no
/// output.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PrintError {
    /// The cancellation flag was raised while printing.
    #[error("printing was cancelled")]
    Cancelled,
}
