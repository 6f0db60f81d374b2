/// The kind of a GraphQL token.
///
/// Payload text lives in [`GraphQLToken::value`](crate::token::GraphQLToken::value)
/// rather than in the kind, so kinds are `Copy` and cheap to compare in the
/// parser's lookahead checks.
///
/// | kind          | `value` carries                                        |
/// |---------------|--------------------------------------------------------|
/// | punctuators   | the punctuator text                                    |
/// | `Name`        | the name                                               |
/// | `Int`/`Float` | the literal text, including any leading `-`            |
/// | `String`      | the unescaped content (borrowed when nothing escaped)  |
/// | `BlockString` | the dedented content                                   |
/// | `Comment`     | the text after `#`, excluding the line terminator      |
/// | `Eof`         | nothing                                                |
///
/// `true`, `false`, and `null` lex as `Name`; the parser gives them meaning
/// in value positions only.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenKind {
    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `&`
    Ampersand,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Spread,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `{`
    BraceOpen,
    /// `|`
    Pipe,
    /// `}`
    BraceClose,

    // =========================================================================
    // Literals
    // =========================================================================
    Name,
    Int,
    Float,
    String,
    BlockString,

    // =========================================================================
    // Trivia and end of input
    // =========================================================================
    /// A single `#` comment line. Consecutive comment lines are separate
    /// tokens.
    Comment,
    /// End of input. Terminal: lexing at or past the end of the source
    /// always yields `Eof`.
    Eof,
}

impl GraphQLTokenKind {
    /// Returns the punctuator text if this kind is a punctuator.
    pub fn as_punctuator_str(&self) -> Option<&'static str> {
        match self {
            Self::Bang => Some("!"),
            Self::Dollar => Some("$"),
            Self::Ampersand => Some("&"),
            Self::ParenOpen => Some("("),
            Self::ParenClose => Some(")"),
            Self::Spread => Some("..."),
            Self::Colon => Some(":"),
            Self::Equals => Some("="),
            Self::At => Some("@"),
            Self::BracketOpen => Some("["),
            Self::BracketClose => Some("]"),
            Self::BraceOpen => Some("{"),
            Self::Pipe => Some("|"),
            Self::BraceClose => Some("}"),

            Self::Name
            | Self::Int
            | Self::Float
            | Self::String
            | Self::BlockString
            | Self::Comment
            | Self::Eof => None,
        }
    }

    /// Returns `true` if this kind is a punctuator.
    pub fn is_punctuator(&self) -> bool {
        self.as_punctuator_str().is_some()
    }

    /// Short human-readable description for error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Bang => "`!`",
            Self::Dollar => "`$`",
            Self::Ampersand => "`&`",
            Self::ParenOpen => "`(`",
            Self::ParenClose => "`)`",
            Self::Spread => "`...`",
            Self::Colon => "`:`",
            Self::Equals => "`=`",
            Self::At => "`@`",
            Self::BracketOpen => "`[`",
            Self::BracketClose => "`]`",
            Self::BraceOpen => "`{`",
            Self::Pipe => "`|`",
            Self::BraceClose => "`}`",
            Self::Name => "name",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::BlockString => "block string",
            Self::Comment => "comment",
            Self::Eof => "end of input",
        }
    }
}
