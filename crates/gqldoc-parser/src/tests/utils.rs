//! Shared helpers for parser tests.

use crate::ast::Definition;
use crate::ast::Document;
use crate::ast::Field;
use crate::ast::OperationDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeDefinition;
use crate::ast::TypeExtension;
use crate::ast::Value;
use crate::parse;
use crate::GraphQLSyntaxError;
use crate::IgnoreOptions;
use crate::ParseOptions;

/// Parses with comments and locations retained, panicking on error.
pub(super) fn parse_ok(source: &str) -> Document<'_> {
    parse(source, ParseOptions::default())
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"))
}

/// Parses with the given ignore flags, panicking on error.
pub(super) fn parse_ignoring(source: &str, ignore: IgnoreOptions) -> Document<'_> {
    parse(source, ParseOptions::default().with_ignore(ignore))
        .unwrap_or_else(|err| panic!("failed to parse {source:?}: {err}"))
}

/// Parses expecting failure.
pub(super) fn parse_err(source: &str) -> GraphQLSyntaxError {
    match parse(source, ParseOptions::default()) {
        Ok(doc) => panic!("expected {source:?} to fail, got {doc:?}"),
        Err(err) => err,
    }
}

pub(super) fn only_definition<'a, 'src>(doc: &'a Document<'src>) -> &'a Definition<'src> {
    assert_eq!(doc.definitions.len(), 1, "expected exactly one definition");
    &doc.definitions[0]
}

pub(super) fn only_operation<'a, 'src>(
    doc: &'a Document<'src>,
) -> &'a OperationDefinition<'src> {
    match only_definition(doc) {
        Definition::OperationDefinition(operation) => operation,
        other => panic!("expected an operation, got {other:?}"),
    }
}

pub(super) fn only_type_definition<'a, 'src>(
    doc: &'a Document<'src>,
) -> &'a TypeDefinition<'src> {
    match only_definition(doc) {
        Definition::TypeDefinition(definition) => definition,
        other => panic!("expected a type definition, got {other:?}"),
    }
}

pub(super) fn only_type_extension<'a, 'src>(
    doc: &'a Document<'src>,
) -> &'a TypeExtension<'src> {
    match only_definition(doc) {
        Definition::TypeExtension(extension) => extension,
        other => panic!("expected a type extension, got {other:?}"),
    }
}

pub(super) fn first_field<'a, 'src>(selection_set: &'a SelectionSet<'src>) -> &'a Field<'src> {
    match &selection_set.selections[0] {
        Selection::Field(field) => field,
        other => panic!("expected a field, got {other:?}"),
    }
}

/// The value of the first argument of the first field of `{ field(arg: VALUE) }`.
pub(super) fn first_arg_value<'a, 'src>(doc: &'a Document<'src>) -> &'a Value<'src> {
    let field = first_field(&only_operation(doc).selection_set);
    let arguments = field.arguments.as_ref().expect("field has no arguments");
    &arguments.items[0].value
}
