//! Lexer for the query language.
//!
//! Splits a query expression into [`Token`]s, each tagged with the character
//! offset it starts at so that parse errors can point into the expression.

use std::fmt;

use crate::error::ParseError;

/// Token types of the query language.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A bare word, possibly containing wildcards
    Term(String),
    /// A double-quoted phrase
    Quoted(String),

    /// `AND` or `&&`
    And,
    /// `OR` or `||`
    Or,
    /// `NOT` or a leading `!`
    Not,
    /// A leading `-` (exclusion)
    Minus,

    /// `~` with an optional edit distance or slop
    Tilde(Option<u32>),
    /// `^` with an optional boost value
    Caret(Option<f32>),

    /// Left parenthesis (grouping)
    LeftParen,
    /// Right parenthesis (grouping)
    RightParen,

    /// End of input
    Eof,
}

impl Token {
    /// `true` if the token can begin an operand.
    pub fn starts_operand(&self) -> bool {
        matches!(
            self,
            Token::Term(_) | Token::Quoted(_) | Token::LeftParen | Token::Not | Token::Minus
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Term(term) => write!(f, "term '{term}'"),
            Token::Quoted(phrase) => write!(f, "phrase \"{phrase}\""),
            Token::And => write!(f, "AND"),
            Token::Or => write!(f, "OR"),
            Token::Not => write!(f, "NOT"),
            Token::Minus => write!(f, "'-'"),
            Token::Tilde(_) => write!(f, "'~'"),
            Token::Caret(_) => write!(f, "'^'"),
            Token::LeftParen => write!(f, "'('"),
            Token::RightParen => write!(f, "')'"),
            Token::Eof => write!(f, "end of query"),
        }
    }
}

/// A token and the character offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Lexer for tokenizing query strings
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given input string
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Tokenize the whole input. The last token is always [`Token::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let spanned = self.next_token()?;
            let done = spanned.token == Token::Eof;
            tokens.push(spanned);
            if done {
                return Ok(tokens);
            }
        }
    }

    /// Get the next token from the input
    pub fn next_token(&mut self) -> Result<Spanned, ParseError> {
        self.skip_whitespace();
        let start = self.position;

        let Some(ch) = self.current_char() else {
            return Ok(Spanned {
                token: Token::Eof,
                position: start,
            });
        };

        let token = match ch {
            '(' => {
                self.advance();
                Token::LeftParen
            }
            ')' => {
                self.advance();
                Token::RightParen
            }
            '"' => {
                self.advance();
                self.read_quoted_string(start)?
            }
            '~' => {
                self.advance();
                Token::Tilde(self.read_unsigned_int(start)?)
            }
            '^' => {
                self.advance();
                Token::Caret(self.read_float(start)?)
            }
            '[' | ']' | '{' | '}' => {
                return Err(ParseError::new(start, format!("reserved character '{ch}'")));
            }
            '&' if self.peek() == Some('&') => {
                self.position += 2;
                Token::And
            }
            '|' if self.peek() == Some('|') => {
                self.position += 2;
                Token::Or
            }
            '-' if self.operand_follows() => {
                self.advance();
                Token::Minus
            }
            '!' if self.operand_follows() => {
                self.advance();
                Token::Not
            }
            _ => self.read_term(),
        };

        Ok(Spanned {
            token,
            position: start,
        })
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position + 1).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// A prefix operator only applies when an operand starts right after it.
    fn operand_follows(&self) -> bool {
        self.peek()
            .is_some_and(|next| next == '(' || next == '"' || Self::is_term_char(next))
    }

    fn is_term_char(ch: char) -> bool {
        !ch.is_whitespace() && !matches!(ch, '(' | ')' | '"' | '~' | '^' | '[' | ']' | '{' | '}')
    }

    fn read_term(&mut self) -> Token {
        let mut term = String::new();

        while let Some(ch) = self.current_char() {
            if !Self::is_term_char(ch) {
                break;
            }
            term.push(ch);
            self.advance();
        }

        // Check for keywords (case-insensitive)
        match term.to_uppercase().as_str() {
            "AND" => Token::And,
            "OR" => Token::Or,
            "NOT" => Token::Not,
            _ => Token::Term(term),
        }
    }

    fn read_quoted_string(&mut self, start: usize) -> Result<Token, ParseError> {
        let mut s = String::new();

        while let Some(ch) = self.current_char() {
            self.advance();
            match ch {
                '"' => return Ok(Token::Quoted(s)),
                '\\' => {
                    if let Some(escaped) = self.current_char() {
                        if !matches!(escaped, '"' | '\\') {
                            s.push('\\');
                        }
                        s.push(escaped);
                        self.advance();
                    }
                }
                _ => s.push(ch),
            }
        }

        Err(ParseError::new(start, "unterminated quoted phrase"))
    }

    fn read_digits(&mut self) -> String {
        let mut digits = String::new();
        while let Some(ch) = self.current_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.advance();
        }
        digits
    }

    /// Digits after `~`. No digits is `None`; digits that overflow are an
    /// error.
    fn read_unsigned_int(&mut self, start: usize) -> Result<Option<u32>, ParseError> {
        let digits = self.read_digits();
        if digits.is_empty() {
            return Ok(None);
        }
        digits
            .parse()
            .map(Some)
            .map_err(|_| ParseError::new(start, format!("invalid value '{digits}' after '~'")))
    }

    fn read_float(&mut self, start: usize) -> Result<Option<f32>, ParseError> {
        let mut number = self.read_digits();
        if self.current_char() == Some('.') && self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            number.push('.');
            number.push_str(&self.read_digits());
        }
        if number.is_empty() {
            return Ok(None);
        }
        match number.parse::<f32>() {
            Ok(value) if value.is_finite() => Ok(Some(value)),
            _ => Err(ParseError::new(start, format!("invalid boost '{number}' after '^'"))),
        }
    }
}
