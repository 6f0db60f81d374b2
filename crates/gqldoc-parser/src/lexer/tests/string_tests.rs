use super::lex_one;
use crate::lex;
use crate::token::GraphQLTokenKind;
use crate::GraphQLSyntaxErrorKind;
use std::borrow::Cow;

#[test]
fn simple_string_borrows_its_content() {
    let token = lex_one(r#""hello world""#);
    assert_eq!(token.kind, GraphQLTokenKind::String);
    assert!(matches!(token.value, Cow::Borrowed("hello world")));
    assert_eq!((token.start, token.end), (0, 13));
}

#[test]
fn empty_string() {
    let token = lex_one("\"\"");
    assert_eq!(token.kind, GraphQLTokenKind::String);
    assert_eq!(token.value, "");
}

#[test]
fn escapes_are_decoded_into_an_owned_value() {
    let token = lex_one(r#""a\"b\\c\/d\b\f\n\r\te""#);
    assert!(matches!(token.value, Cow::Owned(_)));
    assert_eq!(token.value, "a\"b\\c/d\u{8}\u{c}\n\r\te");
}

#[test]
fn unicode_escapes() {
    assert_eq!(lex_one(r#""\u00e9\u0041""#).value, "éA");
}

#[test]
fn surrogate_pair_escapes_combine() {
    assert_eq!(lex_one(r#""\uD83D\uDE00""#).value, "\u{1F600}");
}

#[test]
fn lone_surrogates_are_invalid() {
    for source in [r#""\uD83D""#, r#""\uDE00""#, r#""\uD83Dx""#] {
        let err = lex(source, 0).unwrap_err();
        assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::InvalidEscape, "source: {source}");
    }
}

#[test]
fn short_unicode_escape_is_invalid() {
    let err = lex(r#""\u12""#, 0).unwrap_err();
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::InvalidEscape);
}

#[test]
fn unknown_escape_is_reported_at_the_backslash() {
    let err = lex(r#""ab\qc""#, 0).unwrap_err();
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::InvalidEscape);
    assert_eq!(err.position(), 3);
}

#[test]
fn newline_terminates_a_string_early() {
    let err = lex("\"abc\ndef\"", 0).unwrap_err();
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::UnterminatedString);
    assert_eq!(err.position(), 4);
}

#[test]
fn end_of_input_inside_a_string() {
    let err = lex("\"abc", 0).unwrap_err();
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::UnterminatedString);
    assert_eq!(err.position(), 4);
}

#[test]
fn tab_is_allowed_but_other_control_characters_are_not() {
    assert_eq!(lex_one("\"a\tb\"").value, "a\tb");

    let err = lex("\"a\u{1}b\"", 0).unwrap_err();
    assert_eq!(err.kind(), &GraphQLSyntaxErrorKind::InvalidCharacter);
    assert_eq!(err.position(), 2);
}

#[test]
fn non_ascii_content_is_kept_verbatim() {
    assert_eq!(lex_one("\"日本語 ✓\"").value, "日本語 ✓");
}
