//! Tests for type references.

use crate::ast::Type;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::Location;

fn variable_type(source: &str) -> Type<'_> {
    let doc = parse_ok(source);
    only_operation(&doc).variables.as_ref().unwrap().items[0].var_type.clone()
}

#[test]
fn named_type() {
    let var_type = variable_type("query ($a: Int) { f }");
    let Type::Named(named) = &var_type else {
        panic!("expected a named type");
    };
    assert_eq!(named.name.as_str(), "Int");
    assert!(!var_type.is_non_null());
}

#[test]
fn non_null_list_of_non_null() {
    let var_type = variable_type("query ($a: [String!]!) { f }");
    let Type::NonNull(outer) = &var_type else {
        panic!("expected a non-null type");
    };
    let Type::List(list) = &*outer.of_type else {
        panic!("expected a list type");
    };
    let Type::NonNull(inner) = &*list.of_type else {
        panic!("expected a non-null item type");
    };
    assert!(matches!(&*inner.of_type, Type::Named(named) if named.name.as_str() == "String"));
    assert_eq!(var_type.innermost_name().as_str(), "String");
}

#[test]
fn nested_lists() {
    let var_type = variable_type("query ($a: [[Int]]) { f }");
    let Type::List(outer) = &var_type else {
        panic!("expected a list");
    };
    assert!(matches!(&*outer.of_type, Type::List(_)));
}

#[test]
fn non_null_spans_its_inner_type_and_bang() {
    // query ($a: Int!) { f }
    //            ^11 ^15
    let var_type = variable_type("query ($a: Int!) { f }");
    assert_eq!(var_type.location(), Some(Location::new(11, 15)));
    let Type::NonNull(non_null) = &var_type else {
        panic!("expected a non-null type");
    };
    assert_eq!(non_null.of_type.location(), Some(Location::new(11, 14)));
}

#[test]
fn double_bang_is_rejected() {
    let err = parse_err("query ($a: Int!!) { f }");
    assert_eq!(err.position(), 15);
}

#[test]
fn unclosed_list_type_is_rejected() {
    let err = parse_err("query ($a: [Int) { f }");
    assert_eq!(err.position(), 15);
    assert_eq!(err.message(), "Expected `]`, found `)`");
}

#[test]
fn missing_type_is_rejected() {
    let err = parse_err("query ($a: ) { f }");
    assert_eq!(err.message(), "Expected a type, found `)`");
}
