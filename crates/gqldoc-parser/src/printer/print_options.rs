/// Layout settings for [`GraphQLPrinter`](crate::GraphQLPrinter).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrintOptions {
    /// Spaces per nesting level.
    pub indent: usize,

    /// Emit retained `#` comments: the groups attached to line-level nodes
    /// (definitions, selections, field/argument/input/enum value
    /// definitions, root operation types, variable definitions) and the
    /// document's unattached groups. Comments on other nodes are dropped.
    pub print_comments: bool,
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_comments(mut self, print_comments: bool) -> Self {
        self.print_comments = print_comments;
        self
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            print_comments: false,
        }
    }
}
