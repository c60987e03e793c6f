use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use std::fmt;

/// Parser error type
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser for the restricted statement grammar.
///
/// A script is a flat sequence of statements; a statement is either a
/// variable declaration initialized to a literal list (the "create" shape)
/// or a call to one of the recognized operation functions. Calls to names
/// outside the vocabulary parse fine and emit nothing.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse the entire script into a flat, source-ordered operation list.
    ///
    /// Empty or comment-only input yields an empty list, meaning "nothing to
    /// visualize" — not an error.
    pub fn parse_operations(&mut self) -> Result<Vec<Operation>, ParseError> {
        let mut operations = Vec::new();

        while !self.is_at_end() {
            if let Some(op) = self.parse_statement()? {
                operations.push(op);
            }
        }

        Ok(operations)
    }

    /// Parse one statement. Returns `None` for statements that are valid but
    /// contribute no operation (unknown calls, scalar declarations, stray
    /// semicolons).
    fn parse_statement(&mut self) -> Result<Option<Operation>, ParseError> {
        match self.peek_token() {
            Token::Let(_) | Token::Const(_) | Token::Var(_) => self.parse_declaration(),
            Token::Ident(_, _) => self.parse_call(),
            Token::Semicolon(_) => {
                self.advance();
                Ok(None)
            }
            other => Err(ParseError {
                message: format!(
                    "Expected a declaration or operation call, found {}",
                    other
                ),
                location: self.current_location(),
            }),
        }
    }

    /// Parse a declaration: `let name = [1, 2, 3];`
    ///
    /// A literal-list initializer is the single "create" shape the grammar
    /// recognizes. A bare number initializer is tolerated but emits nothing
    /// (scalars have no visualization).
    fn parse_declaration(&mut self) -> Result<Option<Operation>, ParseError> {
        self.advance(); // consume 'let' / 'const' / 'var'

        self.expect_identifier()?;
        self.expect_token(
            &Token::Eq(self.current_location()),
            "Expected '=' after variable name",
        )?;

        let op = match self.peek_token() {
            Token::LBracket(_) => {
                let values = self.parse_number_list()?;
                Some(Operation::new(OpKind::Create, vec![Arg::List(values)]))
            }
            Token::NumberLiteral(_, _) | Token::Minus(_) => {
                self.parse_number()?;
                None
            }
            other => {
                return Err(ParseError {
                    message: format!("Expected a literal list initializer, found {}", other),
                    location: self.current_location(),
                });
            }
        };

        // Trailing semicolons are optional throughout
        self.match_token(&Token::Semicolon(self.current_location()));

        Ok(op)
    }

    /// Parse a call statement: `insertAt(1, 99);`
    fn parse_call(&mut self) -> Result<Option<Operation>, ParseError> {
        let name = self.expect_identifier()?;

        self.expect_token(
            &Token::LParen(self.current_location()),
            "Expected '(' after function name",
        )?;

        let args = self.parse_argument_list()?;

        self.expect_token(
            &Token::RParen(self.current_location()),
            "Expected ')' after arguments",
        )?;
        self.match_token(&Token::Semicolon(self.current_location()));

        // Names outside the vocabulary are dropped, not rejected
        Ok(call_kind(&name).map(|kind| Operation::new(kind, args)))
    }

    /// Parse argument list: (arg, arg, ...)
    fn parse_argument_list(&mut self) -> Result<Vec<Arg>, ParseError> {
        let mut args = Vec::new();

        if self.check(&Token::RParen(self.current_location())) {
            return Ok(args);
        }

        loop {
            args.push(self.parse_argument()?);

            if !self.match_token(&Token::Comma(self.current_location())) {
                break;
            }
        }

        Ok(args)
    }

    /// Parse a single argument: a number, a list literal, or a non-literal
    /// placeholder. Identifiers at argument position are captured as
    /// [`Arg::Missing`] — only literals carry values, by design.
    fn parse_argument(&mut self) -> Result<Arg, ParseError> {
        match self.peek_token() {
            Token::NumberLiteral(_, _) | Token::Minus(_) => Ok(Arg::Num(self.parse_number()?)),
            Token::LBracket(_) => Ok(Arg::List(self.parse_number_list()?)),
            Token::Ident(_, _) => {
                self.advance();
                Ok(Arg::Missing)
            }
            other => Err(ParseError {
                message: format!("Expected a literal argument, found {}", other),
                location: self.current_location(),
            }),
        }
    }

    /// Parse a number literal with an optional leading minus.
    fn parse_number(&mut self) -> Result<i64, ParseError> {
        let negative = self.match_token(&Token::Minus(self.current_location()));

        if let Token::NumberLiteral(n, _) = self.peek_token() {
            self.advance();
            Ok(if negative { -n } else { n })
        } else {
            Err(ParseError {
                message: format!("Expected a number, found {}", self.peek()),
                location: self.current_location(),
            })
        }
    }

    /// Parse a list literal: `[1, 2, 3]` (possibly empty)
    fn parse_number_list(&mut self) -> Result<Vec<i64>, ParseError> {
        self.expect_token(&Token::LBracket(self.current_location()), "Expected '['")?;

        let mut values = Vec::new();

        if !self.check(&Token::RBracket(self.current_location())) {
            loop {
                values.push(self.parse_number()?);

                if !self.match_token(&Token::Comma(self.current_location())) {
                    break;
                }
            }
        }

        self.expect_token(
            &Token::RBracket(self.current_location()),
            "Expected ']' after list elements",
        )?;

        Ok(values)
    }

    // ===== Helper methods =====

    fn match_token(&mut self, token: &Token) -> bool {
        if std::mem::discriminant(&self.peek_token()) == std::mem::discriminant(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.peek_token()) == std::mem::discriminant(token)
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek_token(), Token::Eof(_))
    }

    fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn peek_token(&self) -> Token {
        self.tokens[self.position].clone()
    }

    fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    fn expect_token(&mut self, token: &Token, message: &str) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            Ok(name)
        } else {
            Err(ParseError {
                message: format!("Expected identifier, found {}", self.peek()),
                location: self.current_location(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<Vec<Operation>, ParseError> {
        Parser::new(source)?.parse_operations()
    }

    #[test]
    fn test_create_declaration() {
        let ops = parse("let arr = [5, 2, 8];").unwrap();

        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].kind, OpKind::Create);
        assert_eq!(ops[0].args, vec![Arg::List(vec![5, 2, 8])]);
    }

    #[test]
    fn test_call_mapping() {
        let ops = parse("insertAt(1, 99)\ndeleteAt(0)\nbubbleSort()").unwrap();

        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].kind, OpKind::Insert);
        assert_eq!(ops[0].args, vec![Arg::Num(1), Arg::Num(99)]);
        assert_eq!(ops[1].kind, OpKind::Delete);
        assert_eq!(ops[2].kind, OpKind::BubbleSort);
        assert!(ops[2].args.is_empty());
    }

    #[test]
    fn test_linked_list_calls() {
        let ops = parse("createLinkedList([1, 2, 3]); insertNode(0, 7); reverse();").unwrap();

        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].kind, OpKind::Create);
        assert_eq!(ops[0].values(), vec![1, 2, 3]);
        assert_eq!(ops[1].kind, OpKind::Insert);
        assert_eq!(ops[2].kind, OpKind::Reverse);
    }

    #[test]
    fn test_unknown_call_skipped() {
        let ops = parse("console(1); swap(0, 1); helperFn();").unwrap();

        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].kind, OpKind::Swap);
    }

    #[test]
    fn test_non_literal_argument_is_missing() {
        let ops = parse("insertAt(idx, 42)").unwrap();

        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].args, vec![Arg::Missing, Arg::Num(42)]);
        assert_eq!(ops[0].num(0), None);
        assert_eq!(ops[0].num(1), Some(42));
    }

    #[test]
    fn test_scalar_declaration_emits_nothing() {
        let ops = parse("let x = 5;\nswap(0, 1);").unwrap();

        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].kind, OpKind::Swap);
    }

    #[test]
    fn test_negative_numbers() {
        let ops = parse("let arr = [-3, 4]; updateAt(0, -10);").unwrap();

        assert_eq!(ops[0].args, vec![Arg::List(vec![-3, 4])]);
        assert_eq!(ops[1].args, vec![Arg::Num(0), Arg::Num(-10)]);
    }

    #[test]
    fn test_empty_source() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \n\t ").unwrap().is_empty());
        assert!(parse("// placeholder comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_syntax_error_carries_line() {
        let err = parse("swap(0, 1)\ninsertAt(2,").unwrap_err();

        assert_eq!(err.location.line, 2);
        assert!(err.message.contains("Expected"));
    }

    #[test]
    fn test_unclosed_paren_is_error() {
        assert!(parse("bubbleSort(").is_err());
    }

    #[test]
    fn test_declaration_without_initializer_is_error() {
        let err = parse("let arr = ;").unwrap_err();

        assert_eq!(err.location.line, 1);
    }
}
