// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use strum::AsRefStr;

use crate::{
    AssignStatement, BiOperator, Comparison, Expression, Keyword, PrintStatement, Punctuator, ReadStatement,
    Statement, Token, TokenKind, TypeSpecifier, VariableStatement,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Recursive-descent parser over the tokens of a single chunk.
///
/// The parser only builds trees; it never looks at the variable store.
#[derive(Clone)]
pub struct Parser<'tokens> {
    tokens: &'tokens [Token],
    cursor: usize,
    end_of_input_token: Token,
}

impl<'tokens> Parser<'tokens> {
    pub fn new(tokens: &'tokens [Token]) -> Self {
        let tokens = match tokens.iter().position(|token| token.kind == TokenKind::EndOfInput) {
            Some(end) => &tokens[..end],
            None => tokens,
        };

        let end_column = tokens.last()
            .map(|token| token.column + token.kind.to_string().chars().count())
            .unwrap_or_default();

        Self {
            tokens,
            cursor: 0,
            end_of_input_token: Token::end_of_input(end_column),
        }
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Parses an expression that must span all remaining tokens.
    pub fn parse_expression_fully(&mut self) -> ParseResult<Expression> {
        if self.is_at_end() {
            return Err(ParseError::EmptyExpression);
        }

        let expression = self.parse_expression()?;

        if !self.is_at_end() {
            return Err(ParseError::UnexpectedTrailingToken { token: self.peek_token().clone() });
        }

        Ok(expression)
    }

    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_logical_or_expression()
    }

    fn parse_logical_or_expression(&mut self) -> ParseResult<Expression> {
        self.parse_bi_expression(Self::parse_logical_and_expression, &[
            (Punctuator::LogicalOr, BiOperator::LogicalOr),
        ])
    }

    fn parse_logical_and_expression(&mut self) -> ParseResult<Expression> {
        self.parse_bi_expression(Self::parse_equality_expression, &[
            (Punctuator::LogicalAnd, BiOperator::LogicalAnd),
        ])
    }

    fn parse_equality_expression(&mut self) -> ParseResult<Expression> {
        self.parse_bi_expression(Self::parse_relational_expression, &[
            (Punctuator::Equals, BiOperator::Comparison(Comparison::Equality)),
            (Punctuator::NotEquals, BiOperator::Comparison(Comparison::Inequality)),
        ])
    }

    fn parse_relational_expression(&mut self) -> ParseResult<Expression> {
        self.parse_bi_expression(Self::parse_additive_expression, &[
            (Punctuator::LessThan, BiOperator::Comparison(Comparison::LessThan)),
            (Punctuator::LessThanOrEqual, BiOperator::Comparison(Comparison::LessThanOrEqual)),
            (Punctuator::GreaterThan, BiOperator::Comparison(Comparison::GreaterThan)),
            (Punctuator::GreaterThanOrEqual, BiOperator::Comparison(Comparison::GreaterThanOrEqual)),
        ])
    }

    fn parse_additive_expression(&mut self) -> ParseResult<Expression> {
        self.parse_bi_expression(Self::parse_unary_expression, &[
            (Punctuator::PlusSign, BiOperator::Add),
        ])
    }

    fn parse_bi_expression<F>(&mut self, mut operand: F, operators: &[(Punctuator, BiOperator)]) -> ParseResult<Expression>
            where F: FnMut(&mut Self) -> ParseResult<Expression> {
        let mut expr = operand(self)?;

        loop {
            let Some(punctuator) = self.peek_token().punctuator() else {
                break;
            };

            let Some((_, operator)) = operators.iter().find(|(p, _)| *p == punctuator).copied() else {
                break;
            };

            self.cursor += 1;

            let rhs = operand(self)?;
            expr = Expression::bi(operator, expr, rhs);
        }

        Ok(expr)
    }

    fn parse_unary_expression(&mut self) -> ParseResult<Expression> {
        if self.peek_punctuator() == Some(Punctuator::Not) {
            self.cursor += 1;
            let operand = self.parse_unary_expression()?;
            return Ok(Expression::not(operand));
        }

        self.parse_primary_expression()
    }

    fn parse_primary_expression(&mut self) -> ParseResult<Expression> {
        let token = self.consume_token();

        match token.kind {
            TokenKind::Integer(literal) => Ok(Expression::IntegerLiteral(literal)),
            TokenKind::Float(literal) => Ok(Expression::FloatLiteral(literal)),
            TokenKind::StringLiteral(literal) => Ok(Expression::StringLiteral(literal)),
            TokenKind::Identifier(name) => Ok(Expression::Reference(name)),

            TokenKind::Punctuator(Punctuator::LeftParenthesis) => {
                let expression = self.parse_expression()?;
                self.expect_punctuator(Punctuator::RightParenthesis, "parenthesized expression")?;
                Ok(expression)
            }

            _ => Err(ParseError::UnknownStartOfExpression { token }),
        }
    }

    /// Parses one non-control statement spanning the whole chunk. The
    /// terminating `;` is optional.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let first_token = self.peek_token().clone();

        let statement = match &first_token.kind {
            TokenKind::Keyword(Keyword::Print) => {
                self.cursor += 1;
                self.parse_print_statement()?
            }

            TokenKind::Keyword(Keyword::Read) => {
                self.cursor += 1;
                self.parse_read_statement()?
            }

            TokenKind::Keyword(Keyword::Timeexec) => {
                self.cursor += 1;
                self.expect_punctuator(Punctuator::LeftParenthesis, "timeexec")?;
                self.expect_punctuator(Punctuator::RightParenthesis, "timeexec(")?;
                Statement::TimeExec
            }

            TokenKind::Keyword(keyword) => match keyword.as_type_specifier() {
                Some(type_specifier) => {
                    self.cursor += 1;
                    self.parse_variable_statement(type_specifier)?
                }
                None => return Err(ParseError::CommandNotFound { token: first_token.clone() }),
            },

            TokenKind::Identifier(..) => self.parse_assign_statement()?,

            _ => return Err(ParseError::CommandNotFound { token: first_token.clone() }),
        };

        if self.peek_punctuator() == Some(Punctuator::Semicolon) {
            self.cursor += 1;
        }

        if !self.is_at_end() {
            return Err(ParseError::UnexpectedTrailingToken { token: self.peek_token().clone() });
        }

        Ok(statement)
    }

    fn parse_print_statement(&mut self) -> ParseResult<Statement> {
        self.expect_punctuator(Punctuator::LeftParenthesis, "print")?;

        let token = self.consume_token();
        let content = match token.kind {
            TokenKind::StringLiteral(content) => content,
            _ => return Err(ParseError::PrintExpectedStringLiteral { token }),
        };

        self.expect_punctuator(Punctuator::RightParenthesis, "print argument")?;
        Ok(Statement::Print(PrintStatement { content }))
    }

    fn parse_read_statement(&mut self) -> ParseResult<Statement> {
        self.expect_punctuator(Punctuator::LeftParenthesis, "read")?;
        let name = self.consume_identifier("read(")?;
        self.expect_punctuator(Punctuator::RightParenthesis, "read argument")?;
        Ok(Statement::Read(ReadStatement { name }))
    }

    fn parse_variable_statement(&mut self, type_specifier: TypeSpecifier) -> ParseResult<Statement> {
        let mut declarations = Vec::new();

        loop {
            let context = if declarations.is_empty() { "type" } else { "','" };
            let name = self.consume_identifier(context)?;

            let initializer = if self.peek_punctuator() == Some(Punctuator::Assignment) {
                self.cursor += 1;
                Some(self.parse_expression()?)
            } else if type_specifier == TypeSpecifier::Auto {
                return Err(ParseError::AutoRequiresInitializer { name });
            } else {
                None
            };

            declarations.push(Statement::Variable(VariableStatement {
                type_specifier,
                name,
                initializer,
            }));

            if self.peek_punctuator() != Some(Punctuator::Comma) {
                break;
            }

            self.cursor += 1;
        }

        if declarations.len() == 1 {
            return Ok(declarations.remove(0));
        }

        Ok(Statement::Block(declarations))
    }

    fn parse_assign_statement(&mut self) -> ParseResult<Statement> {
        let name = self.consume_identifier("start of statement")?;

        let token = self.consume_token();
        if !token.is_punctuator(Punctuator::Assignment) {
            return Err(ParseError::ExpectedAssignment { token });
        }

        let expression = self.parse_expression()?;
        Ok(Statement::Assignment(AssignStatement { name, expression }))
    }

    fn consume_identifier(&mut self, context: &'static str) -> ParseResult<String> {
        let token = self.consume_token();
        match token.kind {
            TokenKind::Identifier(name) => Ok(name),
            _ => Err(ParseError::ExpectedIdentifier { token, context }),
        }
    }

    fn expect_punctuator(&mut self, expected: Punctuator, context: &'static str) -> ParseResult<()> {
        let token = self.consume_token();

        if !token.is_punctuator(expected) {
            return Err(ParseError::ExpectedPunctuator { token, expected, context });
        }

        Ok(())
    }

    fn peek_token(&self) -> &Token {
        self.tokens.get(self.cursor).unwrap_or(&self.end_of_input_token)
    }

    fn peek_punctuator(&self) -> Option<Punctuator> {
        self.peek_token().punctuator()
    }

    fn consume_token(&mut self) -> Token {
        let token = self.peek_token().clone();
        if !self.is_at_end() {
            self.cursor += 1;
        }
        token
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error, AsRefStr)]
pub enum ParseError {
    #[error("auto requires an initializer for `{name}`")]
    AutoRequiresInitializer { name: String },

    #[error("command not found: {token}")]
    CommandNotFound { token: Token },

    #[error("empty expression")]
    EmptyExpression,

    #[error("expected '=' after identifier, got {token}")]
    ExpectedAssignment { token: Token },

    #[error("expected variable name after {context}, got {token}")]
    ExpectedIdentifier { token: Token, context: &'static str },

    #[error("expected '{expected}' after {context}, got {token}")]
    ExpectedPunctuator { token: Token, expected: Punctuator, context: &'static str },

    #[error("print currently accepts only string literals, got {token}")]
    PrintExpectedStringLiteral { token: Token },

    #[error("expected literal or identifier, got {token}")]
    UnknownStartOfExpression { token: Token },

    #[error("unexpected {token} after end of statement")]
    UnexpectedTrailingToken { token: Token },
}

impl ParseError {
    #[must_use]
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}
