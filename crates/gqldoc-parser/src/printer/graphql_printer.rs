use crate::ast::Arguments;
use crate::ast::AstNode;
use crate::ast::Comment;
use crate::ast::Definition;
use crate::ast::Description;
use crate::ast::DirectiveDefinition;
use crate::ast::Directives;
use crate::ast::Document;
use crate::ast::EnumValueDefinition;
use crate::ast::EnumValuesDefinition;
use crate::ast::FieldDefinition;
use crate::ast::FieldsDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::ImplementsInterfaces;
use crate::ast::InputFieldsDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaExtension;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::Type;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::UnionMemberTypes;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::ast::VariablesDefinition;
use crate::printer::PrintError;
use crate::printer::PrintOptions;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

type PrintResult = Result<(), PrintError>;

/// Renders documents as canonical GraphQL text.
///
/// A printer may carry a cancellation flag. It is polled before every
/// line-level node, so a long print stops promptly once the flag is raised
/// from another thread.
///
/// ```
/// use gqldoc_parser::parse_with_default_options;
/// use gqldoc_parser::GraphQLPrinter;
/// use gqldoc_parser::PrintOptions;
///
/// let doc = parse_with_default_options("# hi\n{a}").unwrap();
/// let printer = GraphQLPrinter::new(PrintOptions::new().with_comments(true));
/// assert_eq!(printer.print(&doc).unwrap(), "# hi\n{\n  a\n}\n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphQLPrinter {
    options: PrintOptions,
    cancel: Option<Arc<AtomicBool>>,
}

impl GraphQLPrinter {
    pub fn new(options: PrintOptions) -> Self {
        Self {
            options,
            cancel: None,
        }
    }

    /// Makes [`print()`](Self::print) fail with [`PrintError::Cancelled`]
    /// once `flag` is set.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    pub fn print(&self, document: &Document<'_>) -> Result<String, PrintError> {
        let mut state = PrintState {
            out: String::new(),
            indent_level: 0,
            options: &self.options,
            cancel: self.cancel.as_deref(),
        };
        state.document(document)?;
        log::debug!(
            "printed {} definitions ({} bytes)",
            document.definitions.len(),
            state.out.len(),
        );
        Ok(state.out)
    }
}

struct PrintState<'p> {
    out: String,
    indent_level: usize,
    options: &'p PrintOptions,
    cancel: Option<&'p AtomicBool>,
}

impl PrintState<'_> {
    // =========================================================================
    // Layout primitives
    // =========================================================================

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Starts a new line at the current indentation.
    fn newline(&mut self) {
        self.out.push('\n');
        let width = self.indent_level * self.options.indent;
        self.out.extend(std::iter::repeat_n(' ', width));
    }

    /// Polls the cancellation flag, then emits the node's comment group if
    /// comments are printed and the node starts its own line.
    fn enter_line_node<'src>(&mut self, node: &dyn AstNode<'src>) -> PrintResult {
        if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
            log::debug!("printing cancelled at {}", node.kind());
            return Err(PrintError::Cancelled);
        }
        if self.options.print_comments
            && node.kind().is_line_level()
            && let Some(comments) = node.comments()
        {
            for comment in comments {
                self.comment_line(comment);
                self.newline();
            }
        }
        Ok(())
    }

    fn comment_line(&mut self, comment: &Comment<'_>) {
        self.out.push('#');
        self.push(&comment.text);
    }

    fn has_printable_comments(&self, comments: &Option<Vec<Comment<'_>>>) -> bool {
        self.options.print_comments && comments.is_some()
    }

    /// `{`, one item per line, `}`.
    fn braced<T>(
        &mut self,
        items: &[T],
        mut print_item: impl FnMut(&mut Self, &T) -> PrintResult,
    ) -> PrintResult {
        self.out.push('{');
        self.indent_level += 1;
        for item in items {
            self.newline();
            print_item(self, item)?;
        }
        self.indent_level -= 1;
        self.newline();
        self.out.push('}');
        Ok(())
    }

    // =========================================================================
    // Document
    // =========================================================================

    fn document(&mut self, document: &Document<'_>) -> PrintResult {
        let print_comments = self.options.print_comments;
        let mut unattached = document
            .unattached_comments
            .iter()
            .filter(|_| print_comments)
            .peekable();
        let mut first_block = true;

        for definition in &document.definitions {
            // Unattached groups go before the first definition that starts
            // after them. Without locations they all trail the document.
            while let Some(group) = unattached.peek() {
                let group_start = group.first().and_then(|comment| comment.location);
                let precedes = match (group_start, definition.location()) {
                    (Some(group_start), Some(def_location)) => {
                        group_start.start < def_location.start
                    }
                    _ => false,
                };
                if !precedes {
                    break;
                }
                self.block_separator(&mut first_block);
                self.comment_group(group);
                unattached.next();
            }

            self.block_separator(&mut first_block);
            self.definition(definition)?;
        }

        for group in unattached {
            self.block_separator(&mut first_block);
            self.comment_group(group);
        }

        if !first_block {
            self.out.push('\n');
        }
        Ok(())
    }

    fn block_separator(&mut self, first_block: &mut bool) {
        if !*first_block {
            self.push("\n\n");
        }
        *first_block = false;
    }

    fn comment_group(&mut self, group: &[Comment<'_>]) {
        for (index, comment) in group.iter().enumerate() {
            if index > 0 {
                self.newline();
            }
            self.comment_line(comment);
        }
    }

    fn definition(&mut self, definition: &Definition<'_>) -> PrintResult {
        match definition {
            Definition::OperationDefinition(operation) => self.operation_definition(operation),
            Definition::FragmentDefinition(fragment) => self.fragment_definition(fragment),
            Definition::SchemaDefinition(schema) => self.schema_definition(schema),
            Definition::SchemaExtension(extension) => self.schema_extension(extension),
            Definition::TypeDefinition(definition) => self.type_definition(definition),
            Definition::TypeExtension(extension) => self.type_extension(extension),
            Definition::DirectiveDefinition(directive) => self.directive_definition(directive),
        }
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    fn operation_definition(&mut self, operation: &OperationDefinition<'_>) -> PrintResult {
        self.enter_line_node(operation)?;

        let shorthand = operation.operation == OperationType::Query
            && operation.name.is_none()
            && operation.variables.is_none()
            && operation.directives.is_none();
        if !shorthand {
            self.push(operation.operation.as_str());
            match &operation.name {
                Some(name) => {
                    self.out.push(' ');
                    self.push(name.as_str());
                }
                None if operation.variables.is_some() => self.out.push(' '),
                None => {}
            }
            if let Some(variables) = &operation.variables {
                self.variables_definition(variables)?;
            }
            self.directives(&operation.directives);
            self.out.push(' ');
        }
        self.selection_set(&operation.selection_set)
    }

    fn variables_definition(&mut self, variables: &VariablesDefinition<'_>) -> PrintResult {
        let multiline = variables
            .items
            .iter()
            .any(|variable| self.has_printable_comments(&variable.comments));

        self.out.push('(');
        if multiline {
            self.indent_level += 1;
            for variable in &variables.items {
                self.newline();
                self.variable_definition(variable)?;
            }
            self.indent_level -= 1;
            self.newline();
        } else {
            for (index, variable) in variables.items.iter().enumerate() {
                if index > 0 {
                    self.push(", ");
                }
                self.variable_definition(variable)?;
            }
        }
        self.out.push(')');
        Ok(())
    }

    fn variable_definition(&mut self, variable: &VariableDefinition<'_>) -> PrintResult {
        self.enter_line_node(variable)?;
        self.out.push('$');
        self.push(variable.variable.name.as_str());
        self.push(": ");
        self.type_annotation(&variable.var_type);
        if let Some(default_value) = &variable.default_value {
            self.push(" = ");
            self.value(default_value);
        }
        self.directives(&variable.directives);
        Ok(())
    }

    fn selection_set(&mut self, selection_set: &SelectionSet<'_>) -> PrintResult {
        self.braced(&selection_set.selections, Self::selection)
    }

    fn selection(&mut self, selection: &Selection<'_>) -> PrintResult {
        self.enter_line_node(selection)?;
        match selection {
            Selection::Field(field) => {
                if let Some(alias) = &field.alias {
                    self.push(alias.name.as_str());
                    self.push(": ");
                }
                self.push(field.name.as_str());
                if let Some(arguments) = &field.arguments {
                    self.arguments(arguments);
                }
                self.directives(&field.directives);
                if let Some(selection_set) = &field.selection_set {
                    self.out.push(' ');
                    self.selection_set(selection_set)?;
                }
            }
            Selection::FragmentSpread(spread) => {
                self.push("...");
                self.push(spread.fragment_name.name.as_str());
                self.directives(&spread.directives);
            }
            Selection::InlineFragment(inline) => {
                self.push("...");
                if let Some(type_condition) = &inline.type_condition {
                    self.push(" on ");
                    self.push(type_condition.named_type.name.as_str());
                }
                self.directives(&inline.directives);
                self.out.push(' ');
                self.selection_set(&inline.selection_set)?;
            }
        }
        Ok(())
    }

    fn fragment_definition(&mut self, fragment: &FragmentDefinition<'_>) -> PrintResult {
        self.enter_line_node(fragment)?;
        self.push("fragment ");
        self.push(fragment.fragment_name.name.as_str());
        self.push(" on ");
        self.push(fragment.type_condition.named_type.name.as_str());
        self.directives(&fragment.directives);
        self.out.push(' ');
        self.selection_set(&fragment.selection_set)
    }

    // =========================================================================
    // Arguments, directives, values, types
    // =========================================================================

    fn arguments(&mut self, arguments: &Arguments<'_>) {
        self.out.push('(');
        for (index, argument) in arguments.items.iter().enumerate() {
            if index > 0 {
                self.push(", ");
            }
            self.push(argument.name.as_str());
            self.push(": ");
            self.value(&argument.value);
        }
        self.out.push(')');
    }

    /// Each directive preceded by a space.
    fn directives(&mut self, directives: &Option<Directives<'_>>) {
        let Some(directives) = directives else {
            return;
        };
        for directive in directives.iter() {
            self.push(" @");
            self.push(directive.name.as_str());
            if let Some(arguments) = &directive.arguments {
                self.arguments(arguments);
            }
        }
    }

    fn value(&mut self, value: &Value<'_>) {
        match value {
            Value::Variable(variable) => {
                self.out.push('$');
                self.push(variable.name.as_str());
            }
            Value::Int(int) => self.push(&int.raw),
            Value::Float(float) => self.push(&float.raw),
            Value::String(string) if string.block => self.block_string(&string.value),
            Value::String(string) => self.quoted_string(&string.value),
            Value::Boolean(boolean) => self.push(if boolean.value { "true" } else { "false" }),
            Value::Null(_) => self.push("null"),
            Value::Enum(enum_value) => self.push(enum_value.name.as_str()),
            Value::List(list) => {
                self.out.push('[');
                for (index, item) in list.values.iter().enumerate() {
                    if index > 0 {
                        self.push(", ");
                    }
                    self.value(item);
                }
                self.out.push(']');
            }
            Value::Object(object) => {
                self.out.push('{');
                for (index, field) in object.fields.iter().enumerate() {
                    if index > 0 {
                        self.push(", ");
                    }
                    self.push(field.name.as_str());
                    self.push(": ");
                    self.value(&field.value);
                }
                self.out.push('}');
            }
        }
    }

    fn type_annotation(&mut self, type_annotation: &Type<'_>) {
        match type_annotation {
            Type::Named(named) => self.push(named.name.as_str()),
            Type::List(list) => {
                self.out.push('[');
                self.type_annotation(&list.of_type);
                self.out.push(']');
            }
            Type::NonNull(non_null) => {
                self.type_annotation(&non_null.of_type);
                self.out.push('!');
            }
        }
    }

    fn quoted_string(&mut self, value: &str) {
        self.out.push('"');
        for ch in value.chars() {
            match ch {
                '"' => self.push("\\\""),
                '\\' => self.push("\\\\"),
                '\n' => self.push("\\n"),
                '\r' => self.push("\\r"),
                '\t' => self.push("\\t"),
                '\u{8}' => self.push("\\b"),
                '\u{c}' => self.push("\\f"),
                ch if ch < ' ' || ch == '\u{7f}' => {
                    self.push(&format!("\\u{:04X}", ch as u32));
                }
                ch => self.out.push(ch),
            }
        }
        self.out.push('"');
    }

    /// Emits `value` so that re-lexing and dedenting reproduces it exactly.
    ///
    /// The usual form puts the content on its own lines at the current
    /// indentation; dedent strips that indentation again. A lone line that
    /// starts with whitespace would lose it that way, so it stays on the
    /// opening line, which dedent never touches.
    fn block_string(&mut self, value: &str) {
        let escaped = value.replace("\"\"\"", "\\\"\"\"");
        let lone_indented_line = !escaped.contains('\n')
            && escaped.starts_with([' ', '\t']);

        self.push("\"\"\"");
        if lone_indented_line {
            self.push(&escaped);
        } else {
            for line in escaped.split('\n') {
                if line.is_empty() {
                    self.out.push('\n');
                } else {
                    self.newline();
                    self.push(line);
                }
            }
        }
        self.newline();
        self.push("\"\"\"");
    }

    fn description(&mut self, description: Option<&Description<'_>>) {
        let Some(description) = description else {
            return;
        };
        if description.block {
            self.block_string(&description.value);
        } else {
            self.quoted_string(&description.value);
        }
        self.newline();
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    fn schema_definition(&mut self, schema: &SchemaDefinition<'_>) -> PrintResult {
        self.enter_line_node(schema)?;
        self.description(schema.description.as_ref());
        self.push("schema");
        self.directives(&schema.directives);
        self.out.push(' ');
        self.braced(&schema.operation_types, Self::root_operation_type)
    }

    fn root_operation_type(
        &mut self,
        operation_type: &RootOperationTypeDefinition<'_>,
    ) -> PrintResult {
        self.enter_line_node(operation_type)?;
        self.push(operation_type.operation.as_str());
        self.push(": ");
        self.push(operation_type.named_type.name.as_str());
        Ok(())
    }

    fn type_definition(&mut self, definition: &TypeDefinition<'_>) -> PrintResult {
        self.enter_line_node(definition)?;
        self.description(definition.description());
        match definition {
            TypeDefinition::Scalar(scalar) => {
                self.push("scalar ");
                self.push(scalar.name.as_str());
                self.directives(&scalar.directives);
            }
            TypeDefinition::Object(object) => {
                self.push("type ");
                self.push(object.name.as_str());
                self.implements_interfaces(&object.interfaces);
                self.directives(&object.directives);
                self.fields_definition(&object.fields)?;
            }
            TypeDefinition::Interface(interface) => {
                self.push("interface ");
                self.push(interface.name.as_str());
                self.implements_interfaces(&interface.interfaces);
                self.directives(&interface.directives);
                self.fields_definition(&interface.fields)?;
            }
            TypeDefinition::Union(union) => {
                self.push("union ");
                self.push(union.name.as_str());
                self.directives(&union.directives);
                self.union_member_types(&union.types);
            }
            TypeDefinition::Enum(enum_definition) => {
                self.push("enum ");
                self.push(enum_definition.name.as_str());
                self.directives(&enum_definition.directives);
                self.enum_values_definition(&enum_definition.values)?;
            }
            TypeDefinition::InputObject(input) => {
                self.push("input ");
                self.push(input.name.as_str());
                self.directives(&input.directives);
                self.input_fields_definition(&input.fields)?;
            }
        }
        Ok(())
    }

    fn implements_interfaces(&mut self, interfaces: &Option<ImplementsInterfaces<'_>>) {
        let Some(interfaces) = interfaces else {
            return;
        };
        self.push(" implements ");
        for (index, named) in interfaces.items.iter().enumerate() {
            if index > 0 {
                self.push(" & ");
            }
            self.push(named.name.as_str());
        }
    }

    fn union_member_types(&mut self, types: &Option<UnionMemberTypes<'_>>) {
        let Some(types) = types else {
            return;
        };
        self.push(" = ");
        for (index, named) in types.items.iter().enumerate() {
            if index > 0 {
                self.push(" | ");
            }
            self.push(named.name.as_str());
        }
    }

    fn fields_definition(&mut self, fields: &Option<FieldsDefinition<'_>>) -> PrintResult {
        let Some(fields) = fields else {
            return Ok(());
        };
        self.out.push(' ');
        self.braced(&fields.items, Self::field_definition)
    }

    fn field_definition(&mut self, field: &FieldDefinition<'_>) -> PrintResult {
        self.enter_line_node(field)?;
        self.description(field.description.as_ref());
        self.push(field.name.as_str());
        if let Some(arguments) = &field.arguments {
            self.arguments_definition(&arguments.items)?;
        }
        self.push(": ");
        self.type_annotation(&field.field_type);
        self.directives(&field.directives);
        Ok(())
    }

    /// Inline `(a: Int, b: Int)` unless an argument has a description or
    /// printable comments, which need lines of their own.
    fn arguments_definition(&mut self, items: &[InputValueDefinition<'_>]) -> PrintResult {
        let multiline = items.iter().any(|item| {
            item.description.is_some() || self.has_printable_comments(&item.comments)
        });

        self.out.push('(');
        if multiline {
            self.indent_level += 1;
            for item in items {
                self.newline();
                self.input_value_definition(item)?;
            }
            self.indent_level -= 1;
            self.newline();
        } else {
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    self.push(", ");
                }
                self.input_value_definition(item)?;
            }
        }
        self.out.push(')');
        Ok(())
    }

    fn input_fields_definition(
        &mut self,
        fields: &Option<InputFieldsDefinition<'_>>,
    ) -> PrintResult {
        let Some(fields) = fields else {
            return Ok(());
        };
        self.out.push(' ');
        self.braced(&fields.items, Self::input_value_definition)
    }

    fn input_value_definition(&mut self, input: &InputValueDefinition<'_>) -> PrintResult {
        self.enter_line_node(input)?;
        self.description(input.description.as_ref());
        self.push(input.name.as_str());
        self.push(": ");
        self.type_annotation(&input.value_type);
        if let Some(default_value) = &input.default_value {
            self.push(" = ");
            self.value(default_value);
        }
        self.directives(&input.directives);
        Ok(())
    }

    fn enum_values_definition(
        &mut self,
        values: &Option<EnumValuesDefinition<'_>>,
    ) -> PrintResult {
        let Some(values) = values else {
            return Ok(());
        };
        self.out.push(' ');
        self.braced(&values.items, Self::enum_value_definition)
    }

    fn enum_value_definition(&mut self, value: &EnumValueDefinition<'_>) -> PrintResult {
        self.enter_line_node(value)?;
        self.description(value.description.as_ref());
        self.push(value.name.as_str());
        self.directives(&value.directives);
        Ok(())
    }

    fn directive_definition(&mut self, directive: &DirectiveDefinition<'_>) -> PrintResult {
        self.enter_line_node(directive)?;
        self.description(directive.description.as_ref());
        self.push("directive @");
        self.push(directive.name.as_str());
        if let Some(arguments) = &directive.arguments {
            self.arguments_definition(&arguments.items)?;
        }
        if directive.repeatable {
            self.push(" repeatable");
        }
        self.push(" on ");
        for (index, location) in directive.locations.items.iter().enumerate() {
            if index > 0 {
                self.push(" | ");
            }
            self.push(location.as_str());
        }
        Ok(())
    }

    // =========================================================================
    // Extensions
    // =========================================================================

    fn schema_extension(&mut self, extension: &SchemaExtension<'_>) -> PrintResult {
        self.enter_line_node(extension)?;
        self.push("extend schema");
        self.directives(&extension.directives);
        if !extension.operation_types.is_empty() {
            self.out.push(' ');
            self.braced(&extension.operation_types, Self::root_operation_type)?;
        }
        Ok(())
    }

    fn type_extension(&mut self, extension: &TypeExtension<'_>) -> PrintResult {
        self.enter_line_node(extension)?;
        self.push("extend ");
        match extension {
            TypeExtension::Scalar(scalar) => {
                self.push("scalar ");
                self.push(scalar.name.as_str());
                self.directives(&scalar.directives);
            }
            TypeExtension::Object(object) => {
                self.push("type ");
                self.push(object.name.as_str());
                self.implements_interfaces(&object.interfaces);
                self.directives(&object.directives);
                self.fields_definition(&object.fields)?;
            }
            TypeExtension::Interface(interface) => {
                self.push("interface ");
                self.push(interface.name.as_str());
                self.implements_interfaces(&interface.interfaces);
                self.directives(&interface.directives);
                self.fields_definition(&interface.fields)?;
            }
            TypeExtension::Union(union) => {
                self.push("union ");
                self.push(union.name.as_str());
                self.directives(&union.directives);
                self.union_member_types(&union.types);
            }
            TypeExtension::Enum(enum_extension) => {
                self.push("enum ");
                self.push(enum_extension.name.as_str());
                self.directives(&enum_extension.directives);
                self.enum_values_definition(&enum_extension.values)?;
            }
            TypeExtension::InputObject(input) => {
                self.push("input ");
                self.push(input.name.as_str());
                self.directives(&input.directives);
                self.input_fields_definition(&input.fields)?;
            }
        }
        Ok(())
    }
}
