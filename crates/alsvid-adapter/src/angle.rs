//! Closed-grammar arithmetic parser for rotation-angle expressions.
//!
//! The wire format allows angles like `"pi/2"` or `"3*pi/4"`. The grammar
//! is deliberately minimal: numeric literals, the constant `pi` (also
//! accepted as `π`), unary minus, `+ - * /`, and parentheses. Anything
//! outside it — identifiers, exponent operators, trailing tokens — is
//! rejected with [`AdapterError::AngleParse`] rather than being handed to
//! any general-purpose evaluator.

use logos::Logos;
use std::f64::consts::PI;

use crate::error::{AdapterError, AdapterResult};

/// Tokens of the angle grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum Token {
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[token("pi")]
    #[token("π")]
    Pi,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(v) => write!(f, "{v}"),
            Token::Pi => write!(f, "pi"),
            Token::Plus => write!(f, "+"),
            Token::Minus => write!(f, "-"),
            Token::Star => write!(f, "*"),
            Token::Slash => write!(f, "/"),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}

/// Parse an angle expression to a finite `f64`.
pub fn parse_angle(source: &str) -> AdapterResult<f64> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span.start)),
            Err(()) => {
                return Err(AdapterError::AngleParse {
                    position: span.start,
                    message: format!("invalid token '{}'", &source[span]),
                });
            }
        }
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        len: source.len(),
    };
    let value = parser.parse_expression(0)?;
    if let Some(&(token, position)) = parser.peek() {
        return Err(AdapterError::AngleParse {
            position,
            message: format!("unexpected trailing token '{token}'"),
        });
    }
    if !value.is_finite() {
        return Err(AdapterError::AngleParse {
            position: 0,
            message: "expression does not evaluate to a finite number".into(),
        });
    }
    Ok(value)
}

struct Parser {
    tokens: Vec<(Token, usize)>,
    pos: usize,
    /// Source length, reported as the position of an unexpected end.
    len: usize,
}

impl Parser {
    fn peek(&self) -> Option<&(Token, usize)> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<(Token, usize)> {
        let token = self.tokens.get(self.pos).copied();
        self.pos += 1;
        token
    }

    /// Precedence climbing over the two binary levels (`+ -` then `* /`).
    fn parse_expression(&mut self, min_prec: u8) -> AdapterResult<f64> {
        let mut left = self.parse_unary()?;

        while let Some(&(token, _)) = self.peek() {
            let (prec, op): (u8, fn(f64, f64) -> f64) = match token {
                Token::Plus => (1, |a, b| a + b),
                Token::Minus => (1, |a, b| a - b),
                Token::Star => (2, |a, b| a * b),
                Token::Slash => (2, |a, b| a / b),
                _ => break,
            };
            if prec < min_prec {
                break;
            }
            self.advance();
            let right = self.parse_expression(prec + 1)?;
            left = op(left, right);
        }

        Ok(left)
    }

    fn parse_unary(&mut self) -> AdapterResult<f64> {
        if matches!(self.peek(), Some((Token::Minus, _))) {
            self.advance();
            return Ok(-self.parse_unary()?);
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> AdapterResult<f64> {
        match self.advance() {
            Some((Token::Number(value), _)) => Ok(value),
            Some((Token::Pi, _)) => Ok(PI),
            Some((Token::LParen, position)) => {
                let value = self.parse_expression(0)?;
                match self.advance() {
                    Some((Token::RParen, _)) => Ok(value),
                    _ => Err(AdapterError::AngleParse {
                        position,
                        message: "unclosed parenthesis".into(),
                    }),
                }
            }
            Some((token, position)) => Err(AdapterError::AngleParse {
                position,
                message: format!("expected a number, 'pi', or '(', found '{token}'"),
            }),
            None => Err(AdapterError::AngleParse {
                position: self.len,
                message: "unexpected end of expression".into(),
            }),
        }
    }
}
