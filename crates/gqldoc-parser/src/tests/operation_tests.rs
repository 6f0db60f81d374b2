//! Tests for operation definitions and their variable definitions.

use crate::ast::OperationType;
use crate::ast::Type;
use crate::ast::Value;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::GraphQLSyntaxErrorKind;

#[test]
fn shorthand_query_has_no_name_variables_or_directives() {
    let doc = parse_ok("{ a }");
    let operation = only_operation(&doc);
    assert_eq!(operation.operation, OperationType::Query);
    assert!(operation.name.is_none());
    assert!(operation.variables.is_none());
    assert!(operation.directives.is_none());
    assert_eq!(operation.selection_set.selections.len(), 1);
}

#[test]
fn operation_types_are_recognized() {
    for (source, expected) in [
        ("query { a }", OperationType::Query),
        ("mutation { a }", OperationType::Mutation),
        ("subscription { a }", OperationType::Subscription),
    ] {
        let doc = parse_ok(source);
        assert_eq!(only_operation(&doc).operation, expected, "{source}");
    }
}

#[test]
fn named_operation_with_directives() {
    let doc = parse_ok("query Hero @live @cached(ttl: 5) { hero }");
    let operation = only_operation(&doc);
    assert_eq!(operation.name.as_ref().map(|n| n.as_str()), Some("Hero"));
    let directives = operation.directives.as_ref().unwrap();
    assert_eq!(directives.items.len(), 2);
    assert!(directives.find("cached").is_some());
    assert!(directives.find("missing").is_none());
}

#[test]
fn anonymous_operation_with_variables() {
    let doc = parse_ok("query ($id: ID!) { node(id: $id) { id } }");
    let operation = only_operation(&doc);
    assert!(operation.name.is_none());
    assert_eq!(operation.variables.as_ref().unwrap().items.len(), 1);
}

// =============================================================================
// Variable definitions
// =============================================================================

#[test]
fn variable_definitions_with_types_defaults_and_directives() {
    let doc = parse_ok(
        "query Q($a: Int = 1, $b: [String!]! @deprecated, $c: Input = {x: [1, 2]}) { f }",
    );
    let variables = &only_operation(&doc).variables.as_ref().unwrap().items;
    assert_eq!(variables.len(), 3);

    assert_eq!(variables[0].variable.name.as_str(), "a");
    assert!(matches!(variables[0].var_type, Type::Named(_)));
    assert!(matches!(&variables[0].default_value, Some(Value::Int(int)) if int.raw == "1"));

    assert_eq!(variables[1].var_type.innermost_name().as_str(), "String");
    assert!(variables[1].var_type.is_non_null());
    assert!(variables[1].directives.is_some());
    assert!(variables[1].default_value.is_none());

    assert!(matches!(&variables[2].default_value, Some(Value::Object(_))));
}

#[test]
fn empty_variable_list_is_rejected() {
    let err = parse_err("query Q() { a }");
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::EmptyList);
    assert_eq!(err.position(), 8);
    assert_eq!(err.message(), "Expected at least one variable definition, found `)`");
}

#[test]
fn variable_in_default_value_is_rejected() {
    let err = parse_err("query Q($a: Int = $b) { f }");
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::VariableInConstContext);
    assert_eq!(err.position(), 18);
    assert_eq!(err.message(), "Variables are not allowed in variable default values");
}

#[test]
fn variable_nested_in_default_value_is_rejected() {
    let err = parse_err("query Q($a: [Int] = [1, $b]) { f }");
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::VariableInConstContext);
    assert_eq!(err.position(), 24);
}

#[test]
fn variable_in_variable_directive_is_rejected() {
    let err = parse_err("query Q($a: Int @d(x: $b)) { f }");
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::VariableInConstContext);
    assert_eq!(err.message(), "Variables are not allowed in constant directive arguments");
}

#[test]
fn variable_definition_requires_a_type() {
    let err = parse_err("query Q($a) { f }");
    assert_eq!(err.position(), 10);
    assert!(matches!(
        err.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { expected, found }
            if expected[0] == "`:`" && found == "`)`"
    ));
}

#[test]
fn operation_requires_a_selection_set() {
    let err = parse_err("query Q");
    assert_eq!(err.position(), 7);
    assert!(matches!(
        err.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { found, .. } if found == "end of input"
    ));
}

#[test]
fn variables_are_allowed_in_operation_directives() {
    let doc = parse_ok("query Q($on: Boolean) @include(if: $on) { f }");
    let directive = &only_operation(&doc).directives.as_ref().unwrap().items[0];
    let value = directive.arguments.as_ref().unwrap().get("if").unwrap();
    assert!(matches!(value, Value::Variable(variable) if variable.name.as_str() == "on"));
}
