use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    Use,
    Create,
    Drop,
    Alter,
    Insert,
    Update,
    Delete,
    Select,
    Join,
    Database,
    Table,
    Add,
    Column,
    Into,
    Values,
    From,
    Where,
    Set,
    And,
    Or,
    On,
    Like,

    // Literals
    String(String),
    Word(String),

    // Operators
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    Assign,

    // Punctuation
    Comma,
    Semicolon,
    LParen,
    RParen,
    Star,

    // Special
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Use => "USE",
            TokenKind::Create => "CREATE",
            TokenKind::Drop => "DROP",
            TokenKind::Alter => "ALTER",
            TokenKind::Insert => "INSERT",
            TokenKind::Update => "UPDATE",
            TokenKind::Delete => "DELETE",
            TokenKind::Select => "SELECT",
            TokenKind::Join => "JOIN",
            TokenKind::Database => "DATABASE",
            TokenKind::Table => "TABLE",
            TokenKind::Add => "ADD",
            TokenKind::Column => "COLUMN",
            TokenKind::Into => "INTO",
            TokenKind::Values => "VALUES",
            TokenKind::From => "FROM",
            TokenKind::Where => "WHERE",
            TokenKind::Set => "SET",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::On => "ON",
            TokenKind::Like => "LIKE",
            TokenKind::String(s) => return write!(f, "'{}'", s),
            TokenKind::Word(w) => return write!(f, "{}", w),
            TokenKind::Eq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::GtEq => ">=",
            TokenKind::LtEq => "<=",
            TokenKind::Assign => "=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Star => "*",
            TokenKind::Eof => "end of input",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Self {
        Self { kind, position }
    }
}

impl TokenKind {
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Use
                | TokenKind::Create
                | TokenKind::Drop
                | TokenKind::Alter
                | TokenKind::Insert
                | TokenKind::Update
                | TokenKind::Delete
                | TokenKind::Select
                | TokenKind::Join
                | TokenKind::Database
                | TokenKind::Table
                | TokenKind::Add
                | TokenKind::Column
                | TokenKind::Into
                | TokenKind::Values
                | TokenKind::From
                | TokenKind::Where
                | TokenKind::Set
                | TokenKind::And
                | TokenKind::Or
                | TokenKind::On
                | TokenKind::Like
        )
    }
}

/// Characters that end a bare word. Anything else (digits, dots, slashes,
/// signs...) is kept inside the word so untyped values such as `65.1` or
/// `-3` survive tokenization intact.
pub(crate) fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, '(' | ')' | ',' | ';' | '=' | '<' | '>' | '!' | '\'' | '"' | '*')
}

pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            position: 0,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, String> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, String> {
        self.skip_whitespace();

        let position = self.position;

        match self.peek() {
            None => Ok(Token::new(TokenKind::Eof, position)),
            Some(c) => match c {
                ',' => {
                    self.advance();
                    Ok(Token::new(TokenKind::Comma, position))
                }
                ';' => {
                    self.advance();
                    Ok(Token::new(TokenKind::Semicolon, position))
                }
                '(' => {
                    self.advance();
                    Ok(Token::new(TokenKind::LParen, position))
                }
                ')' => {
                    self.advance();
                    Ok(Token::new(TokenKind::RParen, position))
                }
                '*' => {
                    self.advance();
                    Ok(Token::new(TokenKind::Star, position))
                }
                '=' => {
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        Ok(Token::new(TokenKind::Eq, position))
                    } else {
                        Ok(Token::new(TokenKind::Assign, position))
                    }
                }
                '<' => {
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        Ok(Token::new(TokenKind::LtEq, position))
                    } else {
                        Ok(Token::new(TokenKind::Lt, position))
                    }
                }
                '>' => {
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        Ok(Token::new(TokenKind::GtEq, position))
                    } else {
                        Ok(Token::new(TokenKind::Gt, position))
                    }
                }
                '!' => {
                    self.advance();
                    if self.peek() == Some('=') {
                        self.advance();
                        Ok(Token::new(TokenKind::NotEq, position))
                    } else {
                        // a lone `!` is plain text, as in `Hi!`
                        Ok(Token::new(TokenKind::Word("!".to_string()), position))
                    }
                }
                '\'' | '"' => self.read_string(c),
                _ => Ok(self.read_word_or_keyword()),
            },
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c.is_some() {
            self.position += 1;
        }
        c
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_string(&mut self, quote: char) -> Result<Token, String> {
        let position = self.position;
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                None => return Err(format!("Unterminated string literal at position {}", position)),
                Some(c) if c == quote => {
                    // A doubled quote is an escaped quote
                    if self.peek() == Some(quote) {
                        value.push(quote);
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(c) => value.push(c),
            }
        }

        Ok(Token::new(TokenKind::String(value), position))
    }

    fn read_word_or_keyword(&mut self) -> Token {
        let position = self.position;
        let mut value = String::new();

        while let Some(c) = self.peek() {
            if is_word_boundary(c) {
                break;
            }
            value.push(c);
            self.advance();
        }

        let kind = match value.to_uppercase().as_str() {
            "USE" => TokenKind::Use,
            "CREATE" => TokenKind::Create,
            "DROP" => TokenKind::Drop,
            "ALTER" => TokenKind::Alter,
            "INSERT" => TokenKind::Insert,
            "UPDATE" => TokenKind::Update,
            "DELETE" => TokenKind::Delete,
            "SELECT" => TokenKind::Select,
            "JOIN" => TokenKind::Join,
            "DATABASE" => TokenKind::Database,
            "TABLE" => TokenKind::Table,
            "ADD" => TokenKind::Add,
            "COLUMN" => TokenKind::Column,
            "INTO" => TokenKind::Into,
            "VALUES" => TokenKind::Values,
            "FROM" => TokenKind::From,
            "WHERE" => TokenKind::Where,
            "SET" => TokenKind::Set,
            "AND" => TokenKind::And,
            "OR" => TokenKind::Or,
            "ON" => TokenKind::On,
            "LIKE" => TokenKind::Like,
            _ => TokenKind::Word(value),
        };

        Token::new(kind, position)
    }
}

/// Splits a script into complete statements, each keeping its trailing `;`.
///
/// Terminators inside quoted strings do not split. Text after the last
/// terminator is returned as the remainder so a line-oriented front end can
/// keep buffering it.
pub fn split_statements(input: &str) -> (Vec<&str>, &str) {
    let mut statements = Vec::new();
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in input.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '\'' | '"' => quote = Some(c),
                ';' => {
                    let statement = input[start..=i].trim();
                    if statement != ";" {
                        statements.push(statement);
                    }
                    start = i + 1;
                }
                _ => {}
            },
        }
    }

    (statements, &input[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_simple_select() {
        let tokens = kinds("SELECT * FROM users;");

        assert_eq!(tokens[0], TokenKind::Select);
        assert_eq!(tokens[1], TokenKind::Star);
        assert_eq!(tokens[2], TokenKind::From);
        assert!(matches!(tokens[3], TokenKind::Word(ref s) if s == "users"));
        assert_eq!(tokens[4], TokenKind::Semicolon);
        assert_eq!(tokens[5], TokenKind::Eof);
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let tokens = kinds("select * from t where a like 'x'");

        assert_eq!(tokens[0], TokenKind::Select);
        assert_eq!(tokens[2], TokenKind::From);
        assert_eq!(tokens[4], TokenKind::Where);
        assert_eq!(tokens[6], TokenKind::Like);
    }

    #[test]
    fn test_string_literals() {
        let tokens = kinds("'hello world' \"double\" 'it''s'");

        assert!(matches!(tokens[0], TokenKind::String(ref s) if s == "hello world"));
        assert!(matches!(tokens[1], TokenKind::String(ref s) if s == "double"));
        assert!(matches!(tokens[2], TokenKind::String(ref s) if s == "it's"));
    }

    #[test]
    fn test_quoted_special_characters() {
        let tokens = kinds("VALUES ('%.{$abc}abc', 65.1, TRUE)");

        assert!(matches!(tokens[2], TokenKind::String(ref s) if s == "%.{$abc}abc"));
        assert!(matches!(tokens[4], TokenKind::Word(ref s) if s == "65.1"));
        assert!(matches!(tokens[6], TokenKind::Word(ref s) if s == "TRUE"));
    }

    #[test]
    fn test_operators() {
        let tokens = kinds("== != < > <= >= =");

        assert_eq!(tokens[0], TokenKind::Eq);
        assert_eq!(tokens[1], TokenKind::NotEq);
        assert_eq!(tokens[2], TokenKind::Lt);
        assert_eq!(tokens[3], TokenKind::Gt);
        assert_eq!(tokens[4], TokenKind::LtEq);
        assert_eq!(tokens[5], TokenKind::GtEq);
        assert_eq!(tokens[6], TokenKind::Assign);
    }

    #[test]
    fn test_operators_without_spaces() {
        let tokens = kinds("mark>35 AND name=='Bob'");

        assert!(matches!(tokens[0], TokenKind::Word(ref s) if s == "mark"));
        assert_eq!(tokens[1], TokenKind::Gt);
        assert!(matches!(tokens[2], TokenKind::Word(ref s) if s == "35"));
        assert_eq!(tokens[3], TokenKind::And);
        assert_eq!(tokens[5], TokenKind::Eq);
    }

    #[test]
    fn test_unterminated_string() {
        assert!(Lexer::new("SELECT 'oops").tokenize().is_err());
    }

    #[test]
    fn test_lone_bang_is_text() {
        let tokens = kinds("Hi! a != b");

        assert!(matches!(tokens[0], TokenKind::Word(ref s) if s == "Hi"));
        assert!(matches!(tokens[1], TokenKind::Word(ref s) if s == "!"));
        assert_eq!(tokens[3], TokenKind::NotEq);
    }

    #[test]
    fn test_is_keyword() {
        assert!(TokenKind::From.is_keyword());
        assert!(TokenKind::On.is_keyword());
        assert!(!TokenKind::Word("from".to_string()).is_keyword());
        assert!(!TokenKind::Star.is_keyword());
    }

    #[test]
    fn test_split_statements() {
        let (statements, rest) = split_statements("USE db; INSERT INTO t VALUES ('a;b'); SELECT");

        assert_eq!(statements, vec!["USE db;", "INSERT INTO t VALUES ('a;b');"]);
        assert_eq!(rest.trim(), "SELECT");
    }

    #[test]
    fn test_split_statements_skips_empty() {
        let (statements, rest) = split_statements(";; USE db;");

        assert_eq!(statements, vec!["USE db;"]);
        assert!(rest.is_empty());
    }
}
