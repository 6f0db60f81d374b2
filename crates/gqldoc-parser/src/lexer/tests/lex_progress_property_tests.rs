use crate::lex;
use crate::token::GraphQLTokenKind;
use proptest::prelude::*;

/// Fragments that combine into mostly-valid token streams, plus a few
/// characters that exercise the error paths.
fn source_strategy() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just("{".to_string()),
        Just("}".to_string()),
        Just("...".to_string()),
        Just("..".to_string()),
        Just("$".to_string()),
        Just("# note\n".to_string()),
        Just("\"\"\"block\n  text\"\"\"".to_string()),
        Just("\"a\\u00e9\"".to_string()),
        Just("\"open".to_string()),
        Just(",".to_string()),
        Just("\r\n".to_string()),
        "[a-zA-Z_][a-zA-Z0-9_]{0,6}",
        "-?[0-9]{1,4}(\\.[0-9]{1,3})?([eE][+-]?[0-9]{1,2})?",
        "[ \\t\\n]{1,3}",
        any::<char>().prop_map(|ch| ch.to_string()),
    ];
    prop::collection::vec(fragment, 0..24).prop_map(|parts| parts.concat())
}

proptest! {
    /// Lexing from each previous end always moves forward and ends in
    /// `Eof`, unless it stops at an error inside the source.
    #[test]
    fn repeated_lexing_makes_progress(source in source_strategy()) {
        let len = source.len() as u32;
        let mut offset = 0;
        loop {
            match lex(&source, offset) {
                Ok(token) => {
                    prop_assert!(token.start >= offset);
                    prop_assert!(token.start <= token.end);
                    prop_assert!(token.end <= len);
                    if token.kind == GraphQLTokenKind::Eof {
                        prop_assert_eq!(token.start, len);
                        prop_assert_eq!(token.end, len);
                        break;
                    }
                    prop_assert!(token.end > offset, "no progress at offset {}", offset);
                    offset = token.end;
                }
                Err(err) => {
                    prop_assert!(err.position() >= offset);
                    prop_assert!(err.position() <= len);
                    break;
                }
            }
        }
    }

    /// `Eof` is terminal: lexing at or past the end yields it again.
    #[test]
    fn eof_is_terminal(source in source_strategy(), extra in 0u32..8) {
        let len = source.len() as u32;
        let token = lex(&source, len + extra).unwrap();
        prop_assert_eq!(token.kind, GraphQLTokenKind::Eof);
        prop_assert_eq!(token.start, len);
    }
}
