//! Shell-style command line splitting.
//!
//! Turns a raw command string into argv-like words, honoring single quotes,
//! double quotes and backslash escapes. No expansion of any kind is done.

pub mod config;
pub mod error;
pub mod lexer;
pub mod quote;

pub use config::{DoubleQuoteEscapes, LexerConfig};
pub use error::{LexError, Quote};
pub use lexer::{Lexer, Token, TokenKind, Tokenizer, tokenize, tokenize_with};
pub use quote::{join, quote};
