use std::fmt;

/// The lexical class of a [`GraphQLToken`](crate::token::GraphQLToken).
///
/// Every word lexes as [`Keyword::Ident`]; reserved words such as `type` or
/// `query` are told apart later by
/// [`IdentKeyword`](crate::token::IdentKeyword), since most of them are also
/// valid field and argument names.
///
/// `Display` prints the uppercase name used in diagnostics
/// (`unexpected token - got: RBRACE ...`).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Keyword {
    /// A character that starts no GraphQL token.
    #[default]
    Undefined,
    Eof,
    Comment,
    Ident,
    Integer,
    Float,
    String,
    BlockString,
    Colon,
    Bang,
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBrack,
    RBrack,
    And,
    Pipe,
    Equals,
    At,
    Dollar,
    Spread,
    Dot,
    Sub,
}

impl Keyword {
    /// The uppercase diagnostic name of this keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Undefined => "UNDEFINED",
            Keyword::Eof => "EOF",
            Keyword::Comment => "COMMENT",
            Keyword::Ident => "IDENT",
            Keyword::Integer => "INTEGER",
            Keyword::Float => "FLOAT",
            Keyword::String => "STRING",
            Keyword::BlockString => "BLOCKSTRING",
            Keyword::Colon => "COLON",
            Keyword::Bang => "BANG",
            Keyword::LParen => "LPAREN",
            Keyword::RParen => "RPAREN",
            Keyword::LBrace => "LBRACE",
            Keyword::RBrace => "RBRACE",
            Keyword::LBrack => "LBRACK",
            Keyword::RBrack => "RBRACK",
            Keyword::And => "AND",
            Keyword::Pipe => "PIPE",
            Keyword::Equals => "EQUALS",
            Keyword::At => "AT",
            Keyword::Dollar => "DOLLAR",
            Keyword::Spread => "SPREAD",
            Keyword::Dot => "DOT",
            Keyword::Sub => "SUB",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
