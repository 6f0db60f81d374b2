//! Tests for schema and type extensions.

use crate::ast::Definition;
use crate::ast::TypeExtension;
use crate::tests::utils::only_definition;
use crate::tests::utils::only_type_extension;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::GraphQLSyntaxErrorKind;

#[test]
fn schema_extension_with_directives_only() {
    let doc = parse_ok("extend schema @link(url: \"x\")");
    let Definition::SchemaExtension(extension) = only_definition(&doc) else {
        panic!("expected a schema extension");
    };
    assert!(extension.directives.is_some());
    assert!(extension.operation_types.is_empty());
}

#[test]
fn schema_extension_with_operation_types() {
    let doc = parse_ok("extend schema { subscription: Sub }");
    let Definition::SchemaExtension(extension) = only_definition(&doc) else {
        panic!("expected a schema extension");
    };
    assert!(extension.directives.is_none());
    assert_eq!(extension.operation_types.len(), 1);
}

#[test]
fn every_type_extension_kind() {
    let cases = [
        ("extend scalar S @d", "S"),
        ("extend type T implements I", "T"),
        ("extend type T @d", "T"),
        ("extend type T { f: Int }", "T"),
        ("extend interface I implements J { f: Int }", "I"),
        ("extend union U = A | B", "U"),
        ("extend union U @d", "U"),
        ("extend enum E { X }", "E"),
        ("extend input In { f: Int }", "In"),
        ("extend input In @d", "In"),
    ];
    for (source, name) in cases {
        let doc = parse_ok(source);
        assert_eq!(only_type_extension(&doc).name().as_str(), name, "{source}");
    }
}

#[test]
fn object_extension_keeps_all_parts() {
    let doc = parse_ok("extend type T implements I @d { f: Int }");
    let TypeExtension::Object(object) = only_type_extension(&doc) else {
        panic!("expected an object extension");
    };
    assert!(object.interfaces.is_some());
    assert!(object.directives.is_some());
    assert_eq!(object.fields.as_ref().unwrap().items.len(), 1);
}

#[test]
fn empty_extensions_are_rejected() {
    let cases = [
        ("extend schema", 13, "Expected directives or root operation types in schema extension, found end of input"),
        ("extend scalar S", 15, "Expected directives in scalar extension, found end of input"),
        ("extend type T", 13, "Expected `implements`, directives, or fields in object type extension, found end of input"),
        ("extend interface I", 18, "Expected `implements`, directives, or fields in interface extension, found end of input"),
        ("extend union U", 14, "Expected directives or member types in union extension, found end of input"),
        ("extend enum E", 13, "Expected directives or values in enum extension, found end of input"),
        ("extend input In", 15, "Expected directives or fields in input object extension, found end of input"),
    ];
    for (source, position, message) in cases {
        let err = parse_err(source);
        assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::EmptyExtension, "{source}");
        assert_eq!(err.position(), position, "{source}");
        assert_eq!(err.message(), message, "{source}");
    }
}

#[test]
fn empty_extension_reports_the_following_token() {
    let err = parse_err("extend type T\ntype U");
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::EmptyExtension);
    assert_eq!(err.position(), 14);
    assert!(err.message().ends_with("found `type`"));
}

#[test]
fn unknown_extension_target_is_rejected() {
    let err = parse_err("extend query Q { a }");
    assert_eq!(err.position(), 7);
    assert!(matches!(err.kind(), GraphQLSyntaxErrorKind::UnexpectedToken { found, .. } if found == "`query`"));
}

#[test]
fn extension_with_empty_body_is_rejected() {
    let err = parse_err("extend type T {}");
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::EmptyList);
    assert_eq!(err.position(), 15);
}
