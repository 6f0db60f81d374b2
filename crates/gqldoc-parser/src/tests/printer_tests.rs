//! Tests for canonical printing.

use crate::parse;
use crate::print_document;
use crate::tests::utils::parse_ignoring;
use crate::tests::utils::parse_ok;
use crate::GraphQLPrinter;
use crate::IgnoreOptions;
use crate::ParseOptions;
use crate::PrintError;
use crate::PrintOptions;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

fn print(source: &str) -> String {
    print_document(&parse_ok(source))
}

fn print_with_comments(source: &str) -> String {
    GraphQLPrinter::new(PrintOptions::new().with_comments(true))
        .print(&parse_ok(source))
        .unwrap()
}

// =============================================================================
// Executable documents
// =============================================================================

#[test]
fn empty_document_prints_nothing() {
    assert_eq!(print(""), "");
    assert_eq!(print("# only a comment"), "");
}

#[test]
fn shorthand_query() {
    assert_eq!(print("{a{b}}"), "{\n  a {\n    b\n  }\n}\n");
}

#[test]
fn full_operation() {
    let source = r#"query Q($a: Int = 1, $b: [String!]!) @d {
        alias: f(x: $a, y: [1, 2], z: {k: "v"}) @include(if: true) {
            ...F
            ... on T { g }
            ... @skip(if: false) { h }
        }
    }"#;
    let expected = r#"query Q($a: Int = 1, $b: [String!]!) @d {
  alias: f(x: $a, y: [1, 2], z: {k: "v"}) @include(if: true) {
    ...F
    ... on T {
      g
    }
    ... @skip(if: false) {
      h
    }
  }
}
"#;
    assert_eq!(print(source), expected);
}

#[test]
fn anonymous_operations_keep_their_keyword_when_needed() {
    assert_eq!(print("query ($a: Int) { f }"), "query ($a: Int) {\n  f\n}\n");
    assert_eq!(print("mutation { f }"), "mutation {\n  f\n}\n");
    assert_eq!(print("query @live { f }"), "query @live {\n  f\n}\n");
    assert_eq!(print("query { f }"), "{\n  f\n}\n");
}

#[test]
fn definitions_are_separated_by_blank_lines() {
    assert_eq!(
        print("{ a } fragment F on T { b }"),
        "{\n  a\n}\n\nfragment F on T {\n  b\n}\n",
    );
}

#[test]
fn custom_indent() {
    let printer = GraphQLPrinter::new(PrintOptions::new().with_indent(4));
    assert_eq!(printer.options().indent, 4);
    assert_eq!(
        printer.print(&parse_ok("{ a { b } }")).unwrap(),
        "{\n    a {\n        b\n    }\n}\n",
    );
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn quoted_strings_are_escaped() {
    let source = r#"{ f(a: "q\"b\\s\n\t\u0001é") }"#;
    assert_eq!(print(source), "{\n  f(a: \"q\\\"b\\\\s\\n\\t\\u0001é\")\n}\n");
}

#[test]
fn block_strings_print_on_their_own_lines() {
    let source = "{ f(a: \"\"\"\n    line one\n      line two\n  \"\"\") }";
    assert_eq!(
        print(source),
        "{\n  f(a: \"\"\"\n  line one\n    line two\n  \"\"\")\n}\n",
    );
}

#[test]
fn lone_indented_block_string_stays_on_the_opening_line() {
    let source = "{ f(a: \"\"\"  indented\"\"\") }";
    let printed = print(source);
    assert_eq!(printed, "{\n  f(a: \"\"\"  indented\n  \"\"\")\n}\n");
    let reparsed = parse_ignoring(&printed, IgnoreOptions::ALL);
    assert_eq!(reparsed, parse_ignoring(source, IgnoreOptions::ALL));
}

#[test]
fn block_string_triple_quotes_are_escaped() {
    let source = r#"{ f(a: """a \""" b""") }"#;
    assert_eq!(print(source), "{\n  f(a: \"\"\"\n  a \\\"\"\" b\n  \"\"\")\n}\n");
}

// =============================================================================
// Type-system documents
// =============================================================================

#[test]
fn type_system_definitions() {
    let source = r#"
        schema @s { query: Query mutation: Mutation }
        """
        Desc
        """
        type T implements A & B @d {
          "field" f(a: Int = 1, b: String): [T!]!
          g("described" x: Int): Int
        }
        interface A { id: ID }
        union U @d = | A | B
        enum E { "v" A @d B }
        input In { a: Int = 1 @d }
        scalar S
        directive @d(a: Int) repeatable on | FIELD | OBJECT
    "#;
    let expected = r#"schema @s {
  query: Query
  mutation: Mutation
}

"""
Desc
"""
type T implements A & B @d {
  "field"
  f(a: Int = 1, b: String): [T!]!
  g(
    "described"
    x: Int
  ): Int
}

interface A {
  id: ID
}

union U @d = A | B

enum E {
  "v"
  A @d
  B
}

input In {
  a: Int = 1 @d
}

scalar S

directive @d(a: Int) repeatable on FIELD | OBJECT
"#;
    assert_eq!(print(source), expected);
}

#[test]
fn extensions() {
    let source = "extend schema @t extend schema { subscription: S } \
                  extend scalar S @e extend type T implements K @e { g: Int } \
                  extend interface I @e extend union U = C extend enum E { C } \
                  extend input In { b: Int }";
    let expected = "extend schema @t\n\n\
                    extend schema {\n  subscription: S\n}\n\n\
                    extend scalar S @e\n\n\
                    extend type T implements K @e {\n  g: Int\n}\n\n\
                    extend interface I @e\n\n\
                    extend union U = C\n\n\
                    extend enum E {\n  C\n}\n\n\
                    extend input In {\n  b: Int\n}\n";
    assert_eq!(print(source), expected);
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn comments_are_dropped_by_default() {
    assert_eq!(print("# top\n{ # inner\n a }"), "{\n  a\n}\n");
}

#[test]
fn line_level_comments_are_printed() {
    let source = "# top\nquery Q {\n  # on a\n  a\n}\n# trailing\n";
    assert_eq!(
        print_with_comments(source),
        "# top\nquery Q {\n  # on a\n  a\n}\n\n# trailing\n",
    );
}

#[test]
fn commented_variables_go_multiline() {
    let source = "query Q(\n# the id\n$id: ID, $n: Int) { a }";
    assert_eq!(
        print_with_comments(source),
        "query Q(\n  # the id\n  $id: ID\n  $n: Int\n) {\n  a\n}\n",
    );
    // Without comment output the list stays inline.
    assert_eq!(print(source), "query Q($id: ID, $n: Int) {\n  a\n}\n");
}

#[test]
fn comments_on_value_nodes_are_not_printed() {
    assert_eq!(print_with_comments("{ f(a: # gone\n 1) }"), "{\n  f(a: 1)\n}\n");
}

#[test]
fn unattached_groups_are_interleaved_by_location() {
    let source = "{ a # one\n}\n# two\n{ b }";
    assert_eq!(
        print_with_comments(source),
        "{\n  a\n}\n\n# one\n\n# two\n{\n  b\n}\n",
    );
}

#[test]
fn unattached_groups_trail_without_locations() {
    let source = "{ a # one\n}\n# two\n{ b }";
    let doc = parse(source, ParseOptions::new().with_ignore(IgnoreOptions::LOCATIONS)).unwrap();
    let printed = GraphQLPrinter::new(PrintOptions::new().with_comments(true))
        .print(&doc)
        .unwrap();
    assert_eq!(printed, "{\n  a\n}\n\n# two\n{\n  b\n}\n\n# one\n");
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn raised_flag_cancels_printing() {
    let flag = Arc::new(AtomicBool::new(true));
    let printer = GraphQLPrinter::new(PrintOptions::default()).with_cancellation(flag);
    let result = printer.print(&parse_ok("{ a }"));
    assert_eq!(result, Err(PrintError::Cancelled));
    assert_eq!(PrintError::Cancelled.to_string(), "printing was cancelled");
}

#[test]
fn lowered_flag_does_not_interfere() {
    let flag = Arc::new(AtomicBool::new(false));
    let printer = GraphQLPrinter::new(PrintOptions::default()).with_cancellation(flag);
    assert_eq!(printer.print(&parse_ok("{ a }")).unwrap(), "{\n  a\n}\n");
}

#[test]
fn empty_document_is_not_cancelled() {
    let flag = Arc::new(AtomicBool::new(true));
    let printer = GraphQLPrinter::new(PrintOptions::default()).with_cancellation(flag);
    assert_eq!(printer.print(&parse_ok("")).unwrap(), "");
}
