//! Tests for selection sets, fields, fragments, and arguments.

use crate::ast::Definition;
use crate::ast::Selection;
use crate::ast::Value;
use crate::tests::utils::first_field;
use crate::tests::utils::only_definition;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::GraphQLSyntaxErrorKind;
use crate::ReservedNameContext;

// =============================================================================
// Fields
// =============================================================================

#[test]
fn nested_fields() {
    let doc = parse_ok("{ a { b { c } } d }");
    let selection_set = &only_operation(&doc).selection_set;
    assert_eq!(selection_set.selections.len(), 2);
    let a = first_field(selection_set);
    let b = first_field(a.selection_set.as_ref().unwrap());
    let c = first_field(b.selection_set.as_ref().unwrap());
    assert_eq!(c.name.as_str(), "c");
    assert!(c.selection_set.is_none());
}

#[test]
fn aliased_field() {
    let doc = parse_ok("{ smallPic: profilePic(size: 64) }");
    let field = first_field(&only_operation(&doc).selection_set);
    assert_eq!(field.alias.as_ref().map(|a| a.name.as_str()), Some("smallPic"));
    assert_eq!(field.name.as_str(), "profilePic");
    assert_eq!(field.response_key().as_str(), "smallPic");
}

#[test]
fn response_key_without_alias_is_the_name() {
    let doc = parse_ok("{ me }");
    assert_eq!(first_field(&only_operation(&doc).selection_set).response_key().as_str(), "me");
}

#[test]
fn field_with_arguments_and_directives() {
    let doc = parse_ok("{ user(id: 4, active: true) @include(if: $x) { name } }");
    let field = first_field(&only_operation(&doc).selection_set);
    let arguments = field.arguments.as_ref().unwrap();
    assert_eq!(arguments.items.len(), 2);
    assert!(matches!(arguments.get("id"), Some(Value::Int(int)) if int.raw == "4"));
    assert!(matches!(arguments.get("active"), Some(Value::Boolean(b)) if b.value));
    assert!(arguments.get("missing").is_none());
    assert_eq!(field.directives.as_ref().unwrap().items[0].name.as_str(), "include");
}

#[test]
fn keywords_are_valid_field_names() {
    let doc = parse_ok("{ query mutation fragment on type null true }");
    let names: Vec<&str> = only_operation(&doc)
        .selection_set
        .selections
        .iter()
        .map(|selection| match selection {
            Selection::Field(field) => field.name.as_str(),
            other => panic!("unexpected {other:?}"),
        })
        .collect();
    assert_eq!(names, ["query", "mutation", "fragment", "on", "type", "null", "true"]);
}

#[test]
fn empty_selection_set_is_rejected() {
    let err = parse_err("{ a { } }");
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::EmptyList);
    assert_eq!(err.position(), 6);
    assert_eq!(err.message(), "Expected at least one selection, found `}`");
}

#[test]
fn empty_arguments_are_rejected() {
    let err = parse_err("{ a() }");
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::EmptyList);
    assert_eq!(err.position(), 4);
}

#[test]
fn unclosed_selection_set_reports_end_of_input() {
    let err = parse_err("{ a { b }");
    assert_eq!(err.position(), 9);
    assert!(matches!(
        err.kind(),
        GraphQLSyntaxErrorKind::UnexpectedToken { found, .. } if found == "end of input"
    ));
}

#[test]
fn punctuator_in_selection_set_is_rejected() {
    let err = parse_err("{ a : }");
    assert_eq!(err.position(), 6);
    let err = parse_err("{ ! }");
    assert_eq!(err.message(), "Expected a field or `...`, found `!`");
}

// =============================================================================
// Fragments
// =============================================================================

#[test]
fn fragment_spread_with_directives() {
    let doc = parse_ok("{ ...Friends @skip(if: true) }");
    let Selection::FragmentSpread(spread) = &only_operation(&doc).selection_set.selections[0]
    else {
        panic!("expected a fragment spread");
    };
    assert_eq!(spread.fragment_name.name.as_str(), "Friends");
    assert!(spread.directives.is_some());
}

#[test]
fn inline_fragment_with_type_condition() {
    let doc = parse_ok("{ ... on User { name } }");
    let Selection::InlineFragment(inline) = &only_operation(&doc).selection_set.selections[0]
    else {
        panic!("expected an inline fragment");
    };
    let condition = inline.type_condition.as_ref().unwrap();
    assert_eq!(condition.named_type.name.as_str(), "User");
}

#[test]
fn inline_fragment_without_type_condition() {
    let doc = parse_ok("{ ... @include(if: true) { name } ... { id } }");
    let selections = &only_operation(&doc).selection_set.selections;
    for selection in selections {
        let Selection::InlineFragment(inline) = selection else {
            panic!("expected an inline fragment");
        };
        assert!(inline.type_condition.is_none());
    }
    let Selection::InlineFragment(first) = &selections[0] else { unreachable!() };
    assert!(first.directives.is_some());
}

#[test]
fn fragment_definition() {
    let doc = parse_ok("fragment UserFields on User @d { id name }");
    let Definition::FragmentDefinition(fragment) = only_definition(&doc) else {
        panic!("expected a fragment definition");
    };
    assert_eq!(fragment.fragment_name.name.as_str(), "UserFields");
    assert_eq!(fragment.type_condition.named_type.name.as_str(), "User");
    assert!(fragment.directives.is_some());
    assert_eq!(fragment.selection_set.selections.len(), 2);
}

#[test]
fn fragment_named_on_is_rejected() {
    let err = parse_err("fragment on on User { id }");
    assert_eq!(err.position(), 9);
    assert_eq!(err.message(), "Fragment names cannot be `on`");
    assert_eq!(
        err.kind(),
        &GraphQLSyntaxErrorKind::ReservedName {
            name: "on".to_string(),
            context: ReservedNameContext::FragmentName,
        },
    );
}

#[test]
fn fragment_definition_requires_type_condition() {
    let err = parse_err("fragment F { id }");
    assert_eq!(err.position(), 11);
    assert_eq!(
        err.kind(),
        &GraphQLSyntaxErrorKind::ExpectedKeyword { keyword: "on".to_string() },
    );
    assert_eq!(err.message(), "Expected `on`, found `{`");
}

#[test]
fn spread_requires_name_or_selection_set() {
    let err = parse_err("{ ... }");
    assert_eq!(err.position(), 6);
    assert!(matches!(err.kind(), GraphQLSyntaxErrorKind::UnexpectedToken { .. }));
}
