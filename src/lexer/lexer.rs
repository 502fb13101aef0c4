use crate::errors::errors::LexError;

use super::tokens::{Token, TokenKind, COMPOUND_LOOKUP, OPERATOR_LOOKUP, RESERVED_LOOKUP};

/// Hand-rolled scanner over an in-memory source string.
///
/// One instance is created per source text; successive scan calls
/// mutate the cursor and line/column counters in place, so an instance
/// is not meant to be shared between callers. The cursor rests on the
/// final character of the token most recently produced.
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Moves the cursor forward one position and returns the character
    /// now under it, or '\0' once the cursor has moved past the end of
    /// the input. Every advance also counts one column.
    fn next_char(&mut self) -> char {
        self.pos += 1;
        self.column += 1;
        match self.chars.get(self.pos) {
            Some(&chr) => chr,
            None => '\0',
        }
    }

    /// Undoes one advance after a maximal-run scan has overshot by a
    /// single character of lookahead.
    fn back(&mut self) {
        self.pos -= 1;
        self.column -= 1;
    }

    /// The character one past the cursor, or '\0' past the end.
    fn peek_next(&self) -> char {
        self.chars.get(self.pos + 1).copied().unwrap_or('\0')
    }

    fn make(&self, kind: TokenKind, value: String) -> Token {
        Token::new(kind, value, self.line, self.column)
    }

    fn at_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Scans one token starting at the cursor.
    ///
    /// Blanks, newlines and `//`-comments are discarded on the way; the
    /// end of the input yields the `Eof` sentinel, and so does any
    /// character no rule recognises (the stream is silently truncated
    /// at that point). The only failure is a string literal whose
    /// closing quote never arrives.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            if self.at_eof() {
                return Ok(self.make(TokenKind::Eof, String::new()));
            }

            let chr = self.chars[self.pos];

            if is_blank(chr) {
                self.next_char();
                continue;
            }

            if is_newline(chr) {
                self.pos += 1;
                self.line += 1;
                // column numbering restarts at 0 on a fresh line, not 1
                self.column = 0;
                continue;
            }

            // keywords and identifiers: a run of letters/underscores,
            // then any trailing digits
            if is_alpha(chr) {
                let start = self.pos;

                loop {
                    if !is_alpha(self.next_char()) {
                        self.back();
                        break;
                    }
                }

                loop {
                    if !is_digit(self.next_char()) {
                        self.back();
                        break;
                    }
                }

                let value: String = self.chars[start..=self.pos].iter().collect();
                let kind = RESERVED_LOOKUP
                    .get(value.as_str())
                    .copied()
                    .unwrap_or(TokenKind::Identifier);
                return Ok(self.make(kind, value));
            }

            // integer and double literals; a '-' before a digit is a
            // negate operator, with the digits left for the next scan
            if is_digit(chr) || (chr == '-' && is_digit(self.peek_next())) {
                if chr == '-' {
                    return Ok(self.make(TokenKind::Negate, String::new()));
                }

                let start = self.pos;
                let mut is_double = false;

                loop {
                    if !is_digit(self.next_char()) {
                        self.back();
                        break;
                    }
                }

                // digits after a decimal point
                if self.peek_next() == '.' {
                    self.next_char();

                    loop {
                        if !is_digit(self.next_char()) {
                            self.back();
                            break;
                        }
                        is_double = true;
                    }
                }

                let value: String = self.chars[start..=self.pos].iter().collect();
                let kind = if is_double {
                    TokenKind::DoubleLiteral
                } else {
                    TokenKind::IntegerLiteral
                };
                return Ok(self.make(kind, value));
            }

            // string literals: no escape sequences, so scan to the next
            // quote; running past the end of the input is a failure
            if is_quote(chr) {
                let (line, column) = (self.line, self.column);
                self.next_char();
                let start = self.pos;

                loop {
                    if is_quote(self.next_char()) {
                        self.back();
                        break;
                    }
                    if self.at_eof() {
                        return Err(LexError::UnterminatedStringLiteral { line, column });
                    }
                }

                let value: String = self.chars[start..=self.pos].iter().collect();
                self.next_char();
                return Ok(self.make(TokenKind::StringLiteral, value));
            }

            // single line comments run to a newline or the end of input
            // and produce no token
            if chr == '/' && self.peek_next() == '/' {
                self.next_char();

                loop {
                    let chr = self.next_char();

                    if is_newline(chr) {
                        self.line += 1;
                        self.column = 0;
                        break;
                    }
                    if self.at_eof() {
                        break;
                    }
                }

                continue;
            }

            match chr {
                '(' => return Ok(self.make(TokenKind::OpenParen, String::new())),
                ')' => return Ok(self.make(TokenKind::CloseParen, String::new())),
                '[' => return Ok(self.make(TokenKind::OpenBracket, String::new())),
                ']' => return Ok(self.make(TokenKind::CloseBracket, String::new())),
                '{' => return Ok(self.make(TokenKind::OpenCurly, String::new())),
                '}' => return Ok(self.make(TokenKind::CloseCurly, String::new())),
                ':' => return Ok(self.make(TokenKind::Colon, String::new())),
                ',' => return Ok(self.make(TokenKind::Comma, String::new())),
                ';' => return Ok(self.make(TokenKind::Semicolon, String::new())),
                _ => {}
            }

            // operators: the two-character spellings win over the
            // single-character forms, consuming the lookahead character
            if is_operator(chr) {
                let mut spelling = String::with_capacity(2);
                spelling.push(chr);
                spelling.push(self.peek_next());

                if let Some(&kind) = COMPOUND_LOOKUP.get(spelling.as_str()) {
                    self.next_char();
                    return Ok(self.make(kind, String::new()));
                }
                if let Some(&kind) = OPERATOR_LOOKUP.get(&chr) {
                    return Ok(self.make(kind, String::new()));
                }
            }

            // didn't match any of the token classes
            break;
        }

        Ok(self.make(TokenKind::Eof, String::new()))
    }

    /// Drains the remaining input into an ordered token sequence ending
    /// in the `Eof` sentinel.
    ///
    /// Each scan leaves the cursor on the final character of the token
    /// it produced, so one extra advance steps past it before the next
    /// scan.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);

            if done {
                break;
            }
            self.next_char();
        }

        Ok(tokens)
    }
}

/// Horizontal tab, vertical tab, form feed, space, and non-breaking
/// space are discarded between tokens.
fn is_blank(chr: char) -> bool {
    matches!(chr, '\t' | '\u{0B}' | '\u{0C}' | ' ' | '\u{A0}')
}

fn is_newline(chr: char) -> bool {
    chr == '\n' || chr == '\r'
}

fn is_quote(chr: char) -> bool {
    chr == '"'
}

/// Letters and underscore, for keywords and identifiers.
fn is_alpha(chr: char) -> bool {
    chr.is_ascii_alphabetic() || chr == '_'
}

fn is_digit(chr: char) -> bool {
    chr.is_ascii_digit()
}

/// Characters that can start an operator.
fn is_operator(chr: char) -> bool {
    matches!(
        chr,
        '*' | '/' | '+' | '-' | '%' | '!' | '=' | '|' | '&' | '^' | '>' | '<'
    )
}
