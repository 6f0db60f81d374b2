mod block_string_tests;
mod lex_progress_property_tests;
mod string_tests;

use crate::lex;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;

/// Lexes all of `source`, including the final `Eof` token.
pub(super) fn lex_all(source: &str) -> Vec<GraphQLToken<'_>> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    loop {
        let token = lex(source, offset)
            .unwrap_or_else(|err| panic!("unexpected lex error in {source:?}: {err}"));
        offset = token.end;
        let done = token.kind == GraphQLTokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

pub(super) fn kinds(source: &str) -> Vec<GraphQLTokenKind> {
    lex_all(source).into_iter().map(|token| token.kind).collect()
}

/// Lexes the first token of `source`.
pub(super) fn lex_one(source: &str) -> GraphQLToken<'_> {
    lex(source, 0).unwrap_or_else(|err| panic!("unexpected lex error in {source:?}: {err}"))
}
