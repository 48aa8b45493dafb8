pub mod lexer;
pub mod ast;
pub mod parser;
pub mod literal;
pub mod evaluator;
pub mod executor;
pub mod join;

pub use lexer::{split_statements, Lexer, Token, TokenKind};
pub use ast::*;
pub use parser::{parse_statement, ParseError, Parser};
pub use evaluator::Predicate;
pub use executor::{Executor, Output, Response, Session};
pub use join::join_tables;
