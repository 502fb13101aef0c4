use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("int", TokenKind::Int);
        map.insert("str", TokenKind::Str);
        map.insert("bool", TokenKind::Bool);
        map.insert("double", TokenKind::Double);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("function", TokenKind::Function);
        map.insert("return", TokenKind::Return);
        map.insert("include", TokenKind::Include);
        map
    };

    /// Two-character operator spellings. Checked before the
    /// single-character forms, consuming one character of lookahead
    /// on a match.
    pub static ref COMPOUND_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("++", TokenKind::Increment);
        map.insert("--", TokenKind::Decrement);
        map.insert("+=", TokenKind::CompoundAdd);
        map.insert("-=", TokenKind::CompoundSubtract);
        map.insert("*=", TokenKind::CompoundMultiply);
        map.insert("/=", TokenKind::CompoundDivide);
        map.insert("%=", TokenKind::CompoundMod);
        map.insert("<=", TokenKind::LessEqual);
        map.insert(">=", TokenKind::GreaterEqual);
        map.insert("==", TokenKind::Equal);
        map.insert("!=", TokenKind::NotEqual);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map
    };

    /// Fallback kinds for operator characters whose lookahead did not
    /// complete a two-character spelling.
    pub static ref OPERATOR_LOOKUP: HashMap<char, TokenKind> = {
        let mut map = HashMap::new();
        map.insert('+', TokenKind::Add);
        map.insert('-', TokenKind::Subtract);
        map.insert('*', TokenKind::Multiply);
        map.insert('/', TokenKind::Divide);
        map.insert('%', TokenKind::Mod);
        map.insert('<', TokenKind::Less);
        map.insert('>', TokenKind::Greater);
        map.insert('=', TokenKind::Assign);
        map.insert('!', TokenKind::Not);
        map.insert('&', TokenKind::BitwiseAnd);
        map.insert('|', TokenKind::BitwiseOr);
        map.insert('^', TokenKind::BitwiseXor);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,

    Add,               // +
    Subtract,          // -
    Multiply,          // *
    Divide,            // /
    Mod,               // %
    Negate,            // - before a digit
    Not,               // !

    Less,              // <
    LessEqual,         // <=
    Greater,           // >
    GreaterEqual,      // >=
    Equal,             // ==
    NotEqual,          // !=
    Assign,            // =

    And,               // &&
    Or,                // ||
    BitwiseAnd,        // &
    BitwiseOr,         // |
    BitwiseXor,        // ^

    Increment,         // ++
    Decrement,         // --
    CompoundAdd,       // +=
    CompoundSubtract,  // -=
    CompoundMultiply,  // *=
    CompoundDivide,    // /=
    CompoundMod,       // %=

    // Reserved
    Function,
    Return,
    If,
    Else,
    While,
    Int,
    Str,
    Bool,
    Double,
    True,
    False,
    Include,

    OpenParen,         // (
    CloseParen,        // )
    OpenCurly,         // {
    CloseCurly,        // }
    OpenBracket,       // [
    CloseBracket,      // ]
    Semicolon,         // ;
    Colon,             // :
    Comma,             // ,

    Identifier,
    IntegerLiteral,
    DoubleLiteral,
    StringLiteral,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified, positioned unit of lexical meaning. `value` holds the
/// captured lexeme for keyword/identifier/literal tokens and is empty
/// for fixed-spelling tokens. Immutable once constructed; no validation
/// is performed here, contract correctness is the lexer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: String, line: usize, column: usize) -> Self {
        Token {
            kind,
            value,
            line,
            column,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier
            | TokenKind::IntegerLiteral
            | TokenKind::DoubleLiteral
            | TokenKind::StringLiteral => write!(f, "{} ({})", self.kind, self.value),
            _ => write!(f, "{} ()", self.kind),
        }
    }
}
