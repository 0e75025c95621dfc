use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

use tracing::{debug, trace};

use crate::config::{LexerConfig, is_separator};
use crate::error::{LexError, Quote};

const COMMENT: char = '#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Comment,
}

/// A single token produced by [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    fn word(value: String) -> Self {
        Token {
            kind: TokenKind::Word,
            value,
        }
    }

    fn comment(value: String) -> Self {
        Token {
            kind: TokenKind::Comment,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unquoted,
    InSingleQuote,
    InDoubleQuote,
}

/// Streams tokens, comments included, out of a command line.
///
/// Each call to `next` scans exactly one token. Once the input is exhausted
/// or an error has been returned the iterator only yields `None`.
pub struct Tokenizer<'a> {
    chars: Peekable<CharIndices<'a>>,
    config: LexerConfig,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str, config: LexerConfig) -> Self {
        Tokenizer {
            chars: input.char_indices().peekable(),
            config,
            finished: false,
        }
    }

    fn scan(&mut self) -> Result<Option<Token>, LexError> {
        let mut state = State::Unquoted;
        let mut value = String::new();
        // Set by any quote or escape, so `""` still yields an empty word.
        let mut started = false;
        let mut quote_offset = 0;

        loop {
            let next = self.chars.next();
            match state {
                State::Unquoted => match next {
                    None => return Ok(started.then(|| Token::word(value))),
                    Some((_, c)) if is_separator(c) => {
                        if started {
                            return Ok(Some(Token::word(value)));
                        }
                    }
                    Some((_, COMMENT)) if self.config.comments && !started => {
                        return Ok(Some(self.scan_comment()));
                    }
                    Some((offset, '\'')) => {
                        started = true;
                        quote_offset = offset;
                        state = State::InSingleQuote;
                    }
                    Some((offset, '"')) => {
                        started = true;
                        quote_offset = offset;
                        state = State::InDoubleQuote;
                    }
                    Some((offset, '\\')) => {
                        started = true;
                        match self.chars.next() {
                            Some((_, c)) => value.push(c),
                            None => return Err(LexError::DanglingEscape { offset }),
                        }
                    }
                    Some((_, c)) => {
                        started = true;
                        value.push(c);
                    }
                },
                State::InSingleQuote => match next {
                    None => {
                        return Err(LexError::UnterminatedQuote {
                            quote: Quote::Single,
                            offset: quote_offset,
                        });
                    }
                    Some((_, '\'')) => state = State::Unquoted,
                    Some((_, c)) => value.push(c),
                },
                State::InDoubleQuote => match next {
                    None => {
                        return Err(LexError::UnterminatedQuote {
                            quote: Quote::Double,
                            offset: quote_offset,
                        });
                    }
                    Some((_, '"')) => state = State::Unquoted,
                    Some((offset, '\\')) => self.double_quote_escape(offset, &mut value)?,
                    Some((_, c)) => value.push(c),
                },
            }
        }
    }

    /// Handles a backslash seen inside double quotes. The character after it
    /// is only consumed here when it is escapable.
    fn double_quote_escape(&mut self, offset: usize, value: &mut String) -> Result<(), LexError> {
        let escapes = self.config.double_quote_escapes;
        match self.chars.peek() {
            None => Err(LexError::DanglingEscape { offset }),
            Some(&(_, '\n')) if escapes.line_continuation() => {
                self.chars.next();
                Ok(())
            }
            Some(&(_, c)) if escapes.escapes(c) => {
                value.push(c);
                self.chars.next();
                Ok(())
            }
            Some(_) => {
                value.push('\\');
                Ok(())
            }
        }
    }

    fn scan_comment(&mut self) -> Token {
        let mut value = String::new();
        for (_, c) in self.chars.by_ref() {
            if c == '\n' {
                break;
            }
            value.push(c);
        }
        Token::comment(value)
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.scan() {
            Ok(Some(token)) => {
                trace!(kind = ?token.kind, value = %token.value, "scanned token");
                Some(Ok(token))
            }
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                debug!(%err, "scan failed");
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

/// Streams the words of a command line, skipping comments.
pub struct Lexer<'a> {
    tokens: Tokenizer<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, config: LexerConfig) -> Self {
        Lexer {
            tokens: Tokenizer::new(input, config),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<String, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.find_map(|token| match token {
            Ok(Token {
                kind: TokenKind::Word,
                value,
            }) => Some(Ok(value)),
            Ok(_) => None,
            Err(err) => Some(Err(err)),
        })
    }
}

impl FusedIterator for Lexer<'_> {}

/// Splits an input string into a vector of arguments.
///
/// - Single quotes (`'...'`): contents are literal.
/// - Double quotes (`"..."`): contents are literal except `\"` and `\\`.
/// - Unquoted text: split on whitespace; a backslash makes the next
///   character literal.
///
/// # Example
/// ```
/// let args = shell_lexer::tokenize("echo 'hello world'").unwrap();
/// assert_eq!(args, vec!["echo", "hello world"]);
/// ```
pub fn tokenize(input: &str) -> Result<Vec<String>, LexError> {
    tokenize_with(input, LexerConfig::default())
}

/// Like [`tokenize`], with explicit options.
pub fn tokenize_with(input: &str, config: LexerConfig) -> Result<Vec<String>, LexError> {
    Lexer::new(input, config).collect()
}
