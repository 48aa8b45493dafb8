use super::ast::*;
use super::lexer::{is_word_boundary, Lexer, Token, TokenKind};
use super::literal::sanitize_literal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Unexpected token: expected {expected}, found {found} at position {position}")]
    UnexpectedToken {
        expected: String,
        found: TokenKind,
        position: usize,
    },
    #[error("Unexpected end of input")]
    UnexpectedEof,
    #[error("Lexer error: {0}")]
    LexerError(String),
    #[error("Empty statement")]
    EmptyStatement,
    #[error("Unsupported command: {0}")]
    UnknownCommand(String),
    #[error("Missing ';' at end of statement")]
    MissingTerminator,
    #[error("Invalid condition at position {0}: expected <column> <operator> <value>")]
    InvalidCondition(usize),
    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),
    #[error("Mixed AND/OR within one condition group is not supported")]
    MixedConnectives,
    #[error("DELETE requires a WHERE clause")]
    MissingWhere,
}

pub struct Parser {
    source: Vec<char>,
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(input: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize().map_err(ParseError::LexerError)?;
        Ok(Self {
            source: input.chars().collect(),
            tokens,
            position: 0,
        })
    }

    /// Parses exactly one `;`-terminated statement.
    pub fn parse(&mut self) -> Result<Statement, ParseError> {
        if self.check(&TokenKind::Eof) {
            return Err(ParseError::EmptyStatement);
        }

        let statement = self.parse_statement()?;
        self.expect_terminator()?;
        Ok(statement)
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek_kind().cloned() {
            Some(TokenKind::Use) => self.parse_use(),
            Some(TokenKind::Create) => self.parse_create(),
            Some(TokenKind::Drop) => self.parse_drop(),
            Some(TokenKind::Alter) => self.parse_alter(),
            Some(TokenKind::Insert) => self.parse_insert(),
            Some(TokenKind::Select) => self.parse_select(),
            Some(TokenKind::Update) => self.parse_update(),
            Some(TokenKind::Delete) => self.parse_delete(),
            Some(TokenKind::Join) => self.parse_join(),
            Some(kind) => Err(ParseError::UnknownCommand(kind.to_string())),
            None => Err(ParseError::UnexpectedEof),
        }
    }

    fn parse_use(&mut self) -> Result<Statement, ParseError> {
        self.advance(); // consume USE
        let database = self.parse_name()?;
        Ok(Statement::Use { database })
    }

    fn parse_create(&mut self) -> Result<Statement, ParseError> {
        self.advance(); // consume CREATE

        match self.peek_kind() {
            Some(TokenKind::Database) => {
                self.advance();
                let name = self.parse_name()?;
                Ok(Statement::CreateDatabase { name })
            }
            Some(TokenKind::Table) => {
                self.advance();
                let name = self.parse_name()?;
                let columns = if self.check(&TokenKind::LParen) {
                    self.advance();
                    let columns = if self.check(&TokenKind::RParen) {
                        Vec::new()
                    } else {
                        self.parse_name_list()?
                    };
                    self.expect(TokenKind::RParen)?;
                    columns
                } else {
                    Vec::new()
                };
                Ok(Statement::CreateTable { name, columns })
            }
            _ => Err(self.unexpected_token("DATABASE or TABLE")),
        }
    }

    fn parse_drop(&mut self) -> Result<Statement, ParseError> {
        self.advance(); // consume DROP

        match self.peek_kind() {
            Some(TokenKind::Database) => {
                self.advance();
                let name = self.parse_name()?;
                Ok(Statement::DropDatabase { name })
            }
            Some(TokenKind::Table) => {
                self.advance();
                let name = self.parse_name()?;
                Ok(Statement::DropTable { name })
            }
            _ => Err(self.unexpected_token("DATABASE or TABLE")),
        }
    }

    fn parse_alter(&mut self) -> Result<Statement, ParseError> {
        self.advance(); // consume ALTER
        self.expect(TokenKind::Table)?;
        let table = self.parse_name()?;

        let add = match self.peek_kind() {
            Some(TokenKind::Add) => true,
            Some(TokenKind::Drop) => false,
            _ => return Err(self.unexpected_token("ADD or DROP")),
        };
        self.advance();

        // COLUMN is optional, and may itself be the column name
        if self.check(&TokenKind::Column) && !Self::ends_comparison(self.peek_next_kind()) {
            self.advance();
        }
        let column = self.parse_name()?;

        let action = if add {
            AlterAction::AddColumn(column)
        } else {
            AlterAction::DropColumn(column)
        };
        Ok(Statement::AlterTable { table, action })
    }

    fn parse_insert(&mut self) -> Result<Statement, ParseError> {
        self.advance(); // consume INSERT
        self.expect(TokenKind::Into)?;
        let table = self.parse_name()?;
        self.expect(TokenKind::Values)?;
        self.expect(TokenKind::LParen)?;

        let mut values = Vec::new();
        loop {
            values.push(self.parse_value()?);

            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        self.expect(TokenKind::RParen)?;
        Ok(Statement::Insert { table, values })
    }

    fn parse_select(&mut self) -> Result<Statement, ParseError> {
        self.advance(); // consume SELECT

        let projection = if self.check(&TokenKind::Star) {
            self.advance();
            Projection::AllColumns
        } else {
            Projection::Columns(self.parse_name_list()?)
        };

        self.expect(TokenKind::From)?;
        let table = self.parse_name()?;
        let condition = self.parse_optional_where()?;

        Ok(Statement::Select {
            table,
            projection,
            condition,
        })
    }

    fn parse_update(&mut self) -> Result<Statement, ParseError> {
        self.advance(); // consume UPDATE
        let table = self.parse_name()?;
        self.expect(TokenKind::Set)?;

        let mut assignments = Vec::new();
        loop {
            let column = self.parse_name()?;
            self.expect(TokenKind::Assign)?;
            let value = sanitize_literal(&self.parse_value()?);
            assignments.push(Assignment::new(column, value));

            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        let condition = self.parse_optional_where()?;
        Ok(Statement::Update {
            table,
            assignments,
            condition,
        })
    }

    fn parse_delete(&mut self) -> Result<Statement, ParseError> {
        self.advance(); // consume DELETE

        // FROM is optional
        if self.check(&TokenKind::From) {
            self.advance();
        }
        let table = self.parse_name()?;

        if !self.check(&TokenKind::Where) {
            return Err(ParseError::MissingWhere);
        }
        self.advance();
        let condition = self.parse_condition()?;

        Ok(Statement::Delete { table, condition })
    }

    fn parse_join(&mut self) -> Result<Statement, ParseError> {
        self.advance(); // consume JOIN
        let left = self.parse_name()?;
        self.expect(TokenKind::And)?;
        let right = self.parse_name()?;
        self.expect(TokenKind::On)?;
        let left_column = self.parse_name()?;
        self.expect(TokenKind::And)?;
        let right_column = self.parse_name()?;

        Ok(Statement::Join {
            left,
            right,
            left_column,
            right_column,
        })
    }

    fn parse_optional_where(&mut self) -> Result<Option<Condition>, ParseError> {
        if self.check(&TokenKind::Where) {
            self.advance();
            Ok(Some(self.parse_condition()?))
        } else {
            Ok(None)
        }
    }

    /// A run of terms joined by a single connective. Mixing AND and OR at the
    /// same nesting depth is rejected; parentheses open a new group.
    fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        let first = self.parse_condition_term()?;
        let mut rest = Vec::new();
        let mut connective: Option<Connective> = None;

        loop {
            let next = match self.peek_kind() {
                Some(TokenKind::And) => Connective::And,
                Some(TokenKind::Or) => Connective::Or,
                _ => break,
            };
            if connective.is_some_and(|c| c != next) {
                return Err(ParseError::MixedConnectives);
            }
            connective = Some(next);
            self.advance();
            rest.push(self.parse_condition_term()?);
        }

        let Some(connective) = connective else {
            return Ok(first);
        };

        let mut terms = Vec::with_capacity(rest.len() + 1);
        terms.push(first);
        terms.extend(rest);

        Ok(match connective {
            Connective::And => Condition::And(terms),
            Connective::Or => Condition::Or(terms),
        })
    }

    fn parse_condition_term(&mut self) -> Result<Condition, ParseError> {
        if self.check(&TokenKind::LParen) {
            self.advance();
            let condition = self.parse_condition()?;
            self.expect(TokenKind::RParen)?;
            Ok(condition)
        } else {
            self.parse_comparison().map(Condition::Compare)
        }
    }

    /// `<column> <operator> <value>`, exactly three tokens.
    fn parse_comparison(&mut self) -> Result<Comparison, ParseError> {
        let start = self.current_position();

        if !self.at_name() {
            return Err(ParseError::InvalidCondition(start));
        }
        let column = self.parse_name()?;

        let op = match self.peek_kind().cloned() {
            Some(TokenKind::Eq) => CompareOp::Eq,
            Some(TokenKind::NotEq) => CompareOp::NotEq,
            Some(TokenKind::Gt) => CompareOp::Gt,
            Some(TokenKind::Lt) => CompareOp::Lt,
            Some(TokenKind::Like) => CompareOp::Like,
            Some(kind @ (TokenKind::GtEq | TokenKind::LtEq | TokenKind::Assign)) => {
                return Err(ParseError::UnsupportedOperator(kind.to_string()));
            }
            // A word followed by a value is an operator we do not know; a word
            // followed by nothing means the operator is missing altogether.
            Some(TokenKind::Word(word)) if !self.next_ends_comparison() => {
                return Err(ParseError::UnsupportedOperator(word));
            }
            _ => return Err(ParseError::InvalidCondition(start)),
        };
        self.advance();

        if !self.at_value() {
            return Err(ParseError::InvalidCondition(start));
        }
        let value = sanitize_literal(&self.parse_value()?);

        if !self.at_comparison_end() {
            return Err(ParseError::InvalidCondition(start));
        }

        Ok(Comparison::new(column, op, value))
    }

    fn at_comparison_end(&self) -> bool {
        Self::ends_comparison(self.peek_kind())
    }

    fn next_ends_comparison(&self) -> bool {
        Self::ends_comparison(self.peek_next_kind())
    }

    fn ends_comparison(kind: Option<&TokenKind>) -> bool {
        matches!(
            kind,
            None | Some(TokenKind::And)
                | Some(TokenKind::Or)
                | Some(TokenKind::RParen)
                | Some(TokenKind::Semicolon)
                | Some(TokenKind::Eof)
        )
    }

    fn parse_name_list(&mut self) -> Result<Vec<String>, ParseError> {
        let mut names = Vec::new();

        loop {
            names.push(self.parse_name()?);

            if self.check(&TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }

        Ok(names)
    }

    /// A word, or a keyword used as a name (`from`), in its source spelling.
    fn parse_name(&mut self) -> Result<String, ParseError> {
        match self.peek_kind().cloned() {
            Some(TokenKind::Word(name)) => {
                self.advance();
                Ok(name)
            }
            Some(kind) if kind.is_keyword() => {
                let name = self
                    .source_from(self.current_position())
                    .take_while(|c| !is_word_boundary(*c))
                    .collect();
                self.advance();
                Ok(name)
            }
            _ => Err(self.unexpected_token("name")),
        }
    }

    /// A quoted string, or a bare value taken verbatim from the source up to
    /// whitespace, `,`, `)`, `;` or a quote. A bare value may span several
    /// tokens (`Hi!`, `x*y`, `on`); all of them are consumed.
    fn parse_value(&mut self) -> Result<String, ParseError> {
        if let Some(TokenKind::String(value)) = self.peek_kind().cloned() {
            self.advance();
            return Ok(value);
        }
        if !self.at_value() {
            return Err(self.unexpected_token("value"));
        }

        let start = self.current_position();
        let value: String = self
            .source_from(start)
            .take_while(|c| !ends_bare_value(*c))
            .collect();
        let end = start + value.chars().count();
        while !self.check(&TokenKind::Eof) && self.current_position() < end {
            self.advance();
        }
        Ok(value)
    }

    fn at_name(&self) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Word(_)))
            || self.peek_kind().is_some_and(TokenKind::is_keyword)
    }

    fn at_value(&self) -> bool {
        !matches!(
            self.peek_kind(),
            None | Some(TokenKind::Comma)
                | Some(TokenKind::LParen)
                | Some(TokenKind::RParen)
                | Some(TokenKind::Semicolon)
                | Some(TokenKind::Eof)
        )
    }

    fn source_from(&self, position: usize) -> impl Iterator<Item = char> + '_ {
        self.source.iter().skip(position).copied()
    }

    fn expect_terminator(&mut self) -> Result<(), ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Semicolon) => {
                self.advance();
                if self.check(&TokenKind::Eof) {
                    Ok(())
                } else {
                    Err(self.unexpected_token("end of statement"))
                }
            }
            Some(TokenKind::Eof) | None => Err(ParseError::MissingTerminator),
            _ => Err(self.unexpected_token("';'")),
        }
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.position).map(|t| &t.kind)
    }

    fn peek_next_kind(&self) -> Option<&TokenKind> {
        self.tokens.get(self.position + 1).map(|t| &t.kind)
    }

    fn current_position(&self) -> usize {
        self.tokens
            .get(self.position)
            .map(|t| t.position)
            .unwrap_or_default()
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn expect(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.check(&expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected_token(&expected.to_string()))
        }
    }

    fn unexpected_token(&self, expected: &str) -> ParseError {
        match self.tokens.get(self.position) {
            Some(token) if token.kind != TokenKind::Eof => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.kind.clone(),
                position: token.position,
            },
            _ => ParseError::UnexpectedEof,
        }
    }
}

fn ends_bare_value(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ')' | ';' | '\'' | '"')
}

/// Parses a single statement.
pub fn parse_statement(input: &str) -> Result<Statement, ParseError> {
    Parser::new(input)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn where_of(sql: &str) -> Condition {
        match parse_statement(sql).unwrap() {
            Statement::Select { condition, .. } => condition.unwrap(),
            other => panic!("expected SELECT, got {:?}", other),
        }
    }

    #[test]
    fn test_use_and_create_database() {
        assert_eq!(
            parse_statement("USE Marks;").unwrap(),
            Statement::Use {
                database: "Marks".to_string()
            }
        );
        assert_eq!(
            parse_statement("create database school;").unwrap(),
            Statement::CreateDatabase {
                name: "school".to_string()
            }
        );
    }

    #[test]
    fn test_create_table_with_columns() {
        let stmt = parse_statement("CREATE TABLE marks (name, mark, pass);").unwrap();

        assert_eq!(
            stmt,
            Statement::CreateTable {
                name: "marks".to_string(),
                columns: vec!["name".to_string(), "mark".to_string(), "pass".to_string()],
            }
        );
    }

    #[test]
    fn test_create_table_without_columns() {
        let stmt = parse_statement("CREATE TABLE empty;").unwrap();

        assert_eq!(
            stmt,
            Statement::CreateTable {
                name: "empty".to_string(),
                columns: vec![],
            }
        );
    }

    #[test]
    fn test_create_unknown_kind() {
        let err = parse_statement("CREATE INDEX foo;").unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    }

    #[test]
    fn test_drop_statements() {
        assert!(matches!(
            parse_statement("DROP TABLE marks;").unwrap(),
            Statement::DropTable { .. }
        ));
        assert!(matches!(
            parse_statement("DROP DATABASE school;").unwrap(),
            Statement::DropDatabase { .. }
        ));
        assert!(parse_statement("DROP VIEW v;").is_err());
    }

    #[test]
    fn test_alter_with_and_without_column_keyword() {
        assert_eq!(
            parse_statement("ALTER TABLE marks ADD COLUMN age;").unwrap(),
            Statement::AlterTable {
                table: "marks".to_string(),
                action: AlterAction::AddColumn("age".to_string()),
            }
        );
        assert_eq!(
            parse_statement("ALTER TABLE marks DROP pass;").unwrap(),
            Statement::AlterTable {
                table: "marks".to_string(),
                action: AlterAction::DropColumn("pass".to_string()),
            }
        );
    }

    #[test]
    fn test_insert_values() {
        let stmt = parse_statement("INSERT INTO marks VALUES ('Simon', 65.1, TRUE);").unwrap();

        assert_eq!(
            stmt,
            Statement::Insert {
                table: "marks".to_string(),
                values: vec!["Simon".to_string(), "65.1".to_string(), "TRUE".to_string()],
            }
        );
    }

    #[test]
    fn test_bare_values_are_taken_verbatim() {
        let stmt = parse_statement("INSERT INTO t VALUES (on, Hi!, a*b, x=y, from);").unwrap();

        assert_eq!(
            stmt,
            Statement::Insert {
                table: "t".to_string(),
                values: vec![
                    "on".to_string(),
                    "Hi!".to_string(),
                    "a*b".to_string(),
                    "x=y".to_string(),
                    "from".to_string(),
                ],
            }
        );
    }

    #[test]
    fn test_keyword_values_in_conditions_and_assignments() {
        assert_eq!(
            where_of("SELECT * FROM t WHERE status == on;"),
            Condition::Compare(Comparison::new("status", CompareOp::Eq, "on"))
        );
        assert_eq!(
            where_of("SELECT * FROM t WHERE (note LIKE x*y) AND (a == Hi!);"),
            Condition::And(vec![
                Condition::Compare(Comparison::new("note", CompareOp::Like, "xy")),
                Condition::Compare(Comparison::new("a", CompareOp::Eq, "Hi")),
            ])
        );

        match parse_statement("UPDATE t SET note = from WHERE id == 1;").unwrap() {
            Statement::Update { assignments, .. } => {
                assert_eq!(assignments, vec![Assignment::new("note", "from")])
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_keywords_as_column_names() {
        assert_eq!(
            parse_statement("CREATE TABLE u (name, from);").unwrap(),
            Statement::CreateTable {
                name: "u".to_string(),
                columns: vec!["name".to_string(), "from".to_string()],
            }
        );
        assert_eq!(
            where_of("SELECT from FROM u WHERE from == x;"),
            Condition::Compare(Comparison::new("from", CompareOp::Eq, "x"))
        );
        assert_eq!(
            parse_statement("ALTER TABLE u DROP column;").unwrap(),
            Statement::AlterTable {
                table: "u".to_string(),
                action: AlterAction::DropColumn("column".to_string()),
            }
        );
    }

    #[test]
    fn test_insert_requires_values() {
        assert!(parse_statement("INSERT INTO marks VALUES ();").is_err());
        assert!(parse_statement("INSERT INTO marks ('a');").is_err());
    }

    #[test]
    fn test_select_projection() {
        match parse_statement("SELECT name, mark FROM marks;").unwrap() {
            Statement::Select {
                projection: Projection::Columns(cols),
                condition: None,
                ..
            } => assert_eq!(cols, vec!["name", "mark"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_single_condition() {
        let cond = where_of("SELECT * FROM marks WHERE name == 'Simon';");

        assert_eq!(
            cond,
            Condition::Compare(Comparison::new("name", CompareOp::Eq, "Simon"))
        );
    }

    #[test]
    fn test_condition_literal_is_sanitized() {
        let cond = where_of("SELECT * FROM marks WHERE mark > 35.5;");

        assert_eq!(
            cond,
            Condition::Compare(Comparison::new("mark", CompareOp::Gt, "355"))
        );
    }

    #[test]
    fn test_parenthesized_and() {
        let cond = where_of("SELECT * FROM marks WHERE (pass == FALSE) AND (mark > 35);");

        assert_eq!(
            cond,
            Condition::And(vec![
                Condition::Compare(Comparison::new("pass", CompareOp::Eq, "FALSE")),
                Condition::Compare(Comparison::new("mark", CompareOp::Gt, "35")),
            ])
        );
    }

    #[test]
    fn test_redundant_parentheses() {
        let cond = where_of("SELECT * FROM person WHERE ((age > 26) OR (city == 'LosAngeles'));");

        assert!(matches!(cond, Condition::Or(ref parts) if parts.len() == 2));
    }

    #[test]
    fn test_nested_groups_may_differ() {
        let cond = where_of("SELECT * FROM t WHERE (a == 1 AND b == 2) OR c == 3;");

        match cond {
            Condition::Or(parts) => {
                assert!(matches!(parts[0], Condition::And(_)));
                assert!(matches!(parts[1], Condition::Compare(_)));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_mixed_connectives_rejected() {
        let err = parse_statement("SELECT * FROM t WHERE a == 1 AND b == 2 OR c == 3;").unwrap_err();
        assert_eq!(err, ParseError::MixedConnectives);
    }

    #[test]
    fn test_unsupported_operator() {
        let err = parse_statement("SELECT * FROM t WHERE a >= 1;").unwrap_err();
        assert_eq!(err, ParseError::UnsupportedOperator(">=".to_string()));

        let err = parse_statement("SELECT * FROM t WHERE a BETWEEN 1;").unwrap_err();
        assert_eq!(err, ParseError::UnsupportedOperator("BETWEEN".to_string()));
    }

    #[test]
    fn test_wrong_token_count() {
        assert!(matches!(
            parse_statement("SELECT * FROM t WHERE a ==;").unwrap_err(),
            ParseError::InvalidCondition(_)
        ));
        assert!(matches!(
            parse_statement("SELECT * FROM t WHERE a == 1 2;").unwrap_err(),
            ParseError::InvalidCondition(_)
        ));
        assert!(matches!(
            parse_statement("SELECT * FROM t WHERE a 1;").unwrap_err(),
            ParseError::InvalidCondition(_)
        ));
    }

    #[test]
    fn test_update_assignments() {
        let stmt = parse_statement("UPDATE marks SET mark = 38, pass = 'TRUE' WHERE name == 'Chris';")
            .unwrap();

        match stmt {
            Statement::Update {
                assignments,
                condition,
                ..
            } => {
                assert_eq!(
                    assignments,
                    vec![Assignment::new("mark", "38"), Assignment::new("pass", "TRUE")]
                );
                assert!(condition.is_some());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_delete_requires_where() {
        assert_eq!(
            parse_statement("DELETE FROM marks;").unwrap_err(),
            ParseError::MissingWhere
        );
        assert!(parse_statement("DELETE marks WHERE mark < 40;").is_ok());
    }

    #[test]
    fn test_join() {
        let stmt = parse_statement("JOIN coursework AND marks ON submission AND id;").unwrap();

        assert_eq!(
            stmt,
            Statement::Join {
                left: "coursework".to_string(),
                right: "marks".to_string(),
                left_column: "submission".to_string(),
                right_column: "id".to_string(),
            }
        );
    }

    #[test]
    fn test_terminator_required() {
        assert_eq!(
            parse_statement("SELECT * FROM marks").unwrap_err(),
            ParseError::MissingTerminator
        );
        assert!(parse_statement("USE a; USE b;").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse_statement("TRUNCATE marks;").unwrap_err(),
            ParseError::UnknownCommand("TRUNCATE".to_string())
        );
        assert_eq!(parse_statement("   ").unwrap_err(), ParseError::EmptyStatement);
    }
}
