use super::lex_one;
use crate::lex;
use crate::lexer::block_string::block_string_value;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxErrorKind;

#[test]
fn dedents_common_indentation() {
    let token = lex_one("\"\"\"\n  Hello,\n    World!\n\n  \"\"\"");
    assert_eq!(token.kind, GraphQLTokenKind::BlockString);
    assert_eq!(token.value, "Hello,\n  World!");
}

#[test]
fn first_line_is_never_dedented() {
    assert_eq!(block_string_value("  first\n    second\n    third"), "  first\nsecond\nthird");
}

#[test]
fn blank_lines_do_not_count_toward_indentation() {
    assert_eq!(block_string_value("\n    a\n\n  \n    b\n"), "a\n\n\nb");
}

#[test]
fn leading_and_trailing_blank_lines_are_removed() {
    assert_eq!(block_string_value("\n\n   \n  text\n \t \n\n"), "text");
}

#[test]
fn line_terminators_are_normalized() {
    assert_eq!(block_string_value("a\r\nb\rc\nd"), "a\nb\nc\nd");
}

#[test]
fn tabs_count_as_indentation() {
    assert_eq!(block_string_value("\n\t\ta\n\t\t\tb"), "a\n\tb");
}

#[test]
fn all_blank_content_is_empty() {
    assert_eq!(block_string_value("   \n \n"), "");
    assert_eq!(lex_one("\"\"\"\"\"\"").value, "");
}

#[test]
fn escaped_triple_quote_is_literal() {
    let token = lex_one(r#""""say \""" please""""#);
    assert_eq!(token.value, r#"say """ please"#);
}

#[test]
fn other_backslashes_are_literal() {
    let token = lex_one(r#""""C:\path\n""""#);
    assert_eq!(token.value, r"C:\path\n");
}

#[test]
fn quotes_short_of_three_do_not_close() {
    let token = lex_one(r#"""" a "" b """"#);
    assert_eq!(token.value, r#" a "" b "#);
}

#[test]
fn unterminated_block_string() {
    let err = lex("\"\"\"abc\n", 0).unwrap_err();
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::UnterminatedString);
}

#[test]
fn control_characters_are_rejected() {
    let err = lex("\"\"\"a\u{0}b\"\"\"", 0).unwrap_err();
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::InvalidCharacter);
    assert_eq!(err.position(), 4);
}

#[test]
fn spans_cover_the_delimiters() {
    let token = lex_one("  \"\"\"x\"\"\" ");
    assert_eq!((token.start, token.end), (2, 9));
}
