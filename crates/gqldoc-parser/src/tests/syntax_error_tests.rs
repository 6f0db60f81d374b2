//! Tests for rendering syntax errors against their source.

use crate::tests::utils::parse_err;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;

const SCHEMA: &str = "type User {\n  id: ID!\n  userName String\n}\n";

#[test]
fn line_column_is_one_based() {
    let err = parse_err(SCHEMA);
    // `String` on the third line, after two spaces and `userName `.
    assert_eq!(err.line_column(SCHEMA), (3, 12));
    assert_eq!(err.message(), "Expected `:`, found `String`");
}

#[test]
fn format_oneline_uses_file_name() {
    let err = parse_err(SCHEMA);
    assert_eq!(
        err.format_oneline(SCHEMA, Some("schema.graphql")),
        "schema.graphql:3:12: error: Expected `:`, found `String`",
    );
    assert_eq!(
        err.format_oneline(SCHEMA, None),
        "<input>:3:12: error: Expected `:`, found `String`",
    );
}

#[test]
fn format_detailed_shows_a_snippet() {
    let err = parse_err(SCHEMA);
    let expected = "\
error: Expected `:`, found `String`
  --> schema.graphql:3:12
   |
 3 |   userName String
   |            ^
";
    assert_eq!(err.format_detailed(SCHEMA, Some("schema.graphql")), expected);
}

#[test]
fn format_detailed_at_end_of_input() {
    let source = "{ a";
    let err = parse_err(source);
    let expected = "\
error: Expected a field or `...`, found end of input
  --> <input>:1:4
   |
 1 | { a
   |    ^
";
    assert_eq!(err.format_detailed(source, None), expected);
}

#[test]
fn columns_count_characters_not_bytes() {
    let source = "{ f(a: \"é😀\") ? }";
    let err = parse_err(source);
    assert_eq!(err.position(), 17);
    assert_eq!(err.line_column(source), (1, 14));
}

#[test]
fn crlf_and_cr_each_end_one_line() {
    let source = "{\r\n  a\r  b\n  ?\n}";
    let err = parse_err(source);
    assert_eq!(err.line_column(source), (4, 3));
    assert!(err.format_detailed(source, None).contains(" 4 |   ?\n"));
}

#[test]
fn snippet_gutter_widens_for_long_documents() {
    let mut source = "{\n".to_string();
    for _ in 0..120 {
        source.push_str("  a\n");
    }
    source.push_str("  ?\n}");
    let err = parse_err(&source);
    let detailed = err.format_detailed(&source, None);
    assert!(detailed.contains("\n    |\n"), "{detailed}");
    assert!(detailed.contains("\n122 |   ?\n"), "{detailed}");
}

#[test]
fn errors_can_be_built_directly() {
    let err = GraphQLSyntaxError::new("boom", GraphQLSyntaxErrorKind::EmptyList, 2);
    assert_eq!(err.message(), "boom");
    assert_eq!(err.position(), 2);
    assert_eq!(err.source_position("ab\ncd").col_utf8(), 2);
}
