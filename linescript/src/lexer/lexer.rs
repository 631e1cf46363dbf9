// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use crate::{Keyword, Punctuator, Token, TokenKind};

/// Turns one physical line at a time into tokens. The only state carried
/// between lines is whether a `/* ... */` comment is still open.
#[derive(Debug, Default)]
pub struct Lexer {
    in_block_comment: bool,
}

impl Lexer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn is_inside_block_comment(&self) -> bool {
        self.in_block_comment
    }

    /// Tokenizes `line`. The result always ends with [`TokenKind::EndOfInput`].
    pub fn tokenize(&mut self, line: &str) -> Vec<Token> {
        let mut scanner = LineScanner::new(line);
        let mut tokens = Vec::new();

        loop {
            scanner.skip_whitespace();

            if self.in_block_comment {
                if !scanner.skip_until_comment_end() {
                    break;
                }

                self.in_block_comment = false;
                continue;
            }

            let Some(ch) = scanner.peek_char() else {
                break;
            };

            if ch == '/' {
                match scanner.peek_second_char() {
                    Some('/') => break,
                    Some('*') => {
                        scanner.consume_char();
                        scanner.consume_char();
                        self.in_block_comment = true;
                        continue;
                    }
                    _ => (),
                }
            }

            tokens.push(scanner.next_token());
        }

        tokens.push(Token::end_of_input(scanner.cursor));
        tokens
    }
}

struct LineScanner {
    chars: Vec<char>,
    cursor: usize,
}

impl LineScanner {
    fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            cursor: 0,
        }
    }

    fn next_token(&mut self) -> Token {
        let begin = self.cursor;

        let kind = match self.chars[self.cursor] {
            '"' => self.consume_string(),
            'a'..='z' | 'A'..='Z' | '_' => self.consume_identifier_or_keyword(),
            '0'..='9' => self.consume_number(),

            '(' => self.consume_single_char_token(Punctuator::LeftParenthesis),
            ')' => self.consume_single_char_token(Punctuator::RightParenthesis),
            '{' => self.consume_single_char_token(Punctuator::LeftCurlyBracket),
            '}' => self.consume_single_char_token(Punctuator::RightCurlyBracket),
            ';' => self.consume_single_char_token(Punctuator::Semicolon),
            ',' => self.consume_single_char_token(Punctuator::Comma),
            '+' => self.consume_single_char_token(Punctuator::PlusSign),
            '=' => self.consume_assign_or_normal_token(Punctuator::Assignment, Punctuator::Equals),
            '!' => self.consume_assign_or_normal_token(Punctuator::Not, Punctuator::NotEquals),
            '<' => self.consume_assign_or_normal_token(Punctuator::LessThan, Punctuator::LessThanOrEqual),
            '>' => self.consume_assign_or_normal_token(Punctuator::GreaterThan, Punctuator::GreaterThanOrEqual),
            '&' => self.consume_double_char_token(Punctuator::LogicalAnd),
            '|' => self.consume_double_char_token(Punctuator::LogicalOr),

            unknown => {
                self.consume_char();
                TokenKind::IllegalCharacter(unknown)
            }
        };

        Token {
            kind,
            column: begin,
        }
    }

    fn consume_single_char_token(&mut self, punctuator: Punctuator) -> TokenKind {
        self.consume_char();
        TokenKind::Punctuator(punctuator)
    }

    fn consume_assign_or_normal_token(&mut self, normal: Punctuator, assign: Punctuator) -> TokenKind {
        self.consume_char();

        if self.peek_char() == Some('=') {
            self.consume_char();
            TokenKind::Punctuator(assign)
        } else {
            TokenKind::Punctuator(normal)
        }
    }

    /// `&&` and `||` only exist doubled; a lone `&` or `|` is illegal.
    fn consume_double_char_token(&mut self, double: Punctuator) -> TokenKind {
        let ch = self.chars[self.cursor];
        self.consume_char();

        if self.peek_char() == Some(ch) {
            self.consume_char();
            TokenKind::Punctuator(double)
        } else {
            TokenKind::IllegalCharacter(ch)
        }
    }

    fn consume_string(&mut self) -> TokenKind {
        self.consume_char();

        let begin = self.cursor;
        while self.peek_char().is_some_and(|c| c != '"') {
            self.consume_char();
        }

        let literal: String = self.chars[begin..self.cursor].iter().collect();

        // An unterminated string simply runs to the end of the line.
        if self.peek_char() == Some('"') {
            self.consume_char();
        }

        TokenKind::StringLiteral(literal)
    }

    fn consume_number(&mut self) -> TokenKind {
        let begin = self.cursor;
        self.consume_digits();

        let is_float = self.peek_char() == Some('.')
            && self.peek_second_char().is_some_and(|c| c.is_ascii_digit());

        if is_float {
            self.consume_char();
            self.consume_digits();
        }

        let number: String = self.chars[begin..self.cursor].iter().collect();

        if is_float {
            TokenKind::Float(number)
        } else {
            TokenKind::Integer(number)
        }
    }

    fn consume_digits(&mut self) {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.consume_char();
        }
    }

    fn consume_identifier_or_keyword(&mut self) -> TokenKind {
        let begin = self.cursor;

        while self.peek_char().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
            self.consume_char();
        }

        let ident: String = self.chars[begin..self.cursor].iter().collect();

        match Keyword::parse(&ident) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(ident),
        }
    }

    /// Returns `true` when the closing `*/` was found on this line.
    fn skip_until_comment_end(&mut self) -> bool {
        while let Some(ch) = self.peek_char() {
            self.consume_char();

            if ch == '*' && self.peek_char() == Some('/') {
                self.consume_char();
                return true;
            }
        }

        false
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.consume_char();
        }
    }

    fn consume_char(&mut self) {
        self.cursor += 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.chars.get(self.cursor).copied()
    }

    fn peek_second_char(&self) -> Option<char> {
        self.chars.get(self.cursor + 1).copied()
    }
}
