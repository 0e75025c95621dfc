use std::fmt;

/// The kind of quote left open at the end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quote {
    Single,
    Double,
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::Single => f.write_str("single"),
            Quote::Double => f.write_str("double"),
        }
    }
}

/// Errors produced while splitting a command line.
///
/// Offsets are byte offsets into the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    #[error("unterminated {quote} quote starting at byte {offset}")]
    UnterminatedQuote { quote: Quote, offset: usize },
    #[error("dangling escape at byte {offset}")]
    DanglingEscape { offset: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = LexError::UnterminatedQuote {
            quote: Quote::Double,
            offset: 5,
        };
        assert_eq!(err.to_string(), "unterminated double quote starting at byte 5");
        assert_eq!(
            LexError::DanglingEscape { offset: 10 }.to_string(),
            "dangling escape at byte 10"
        );
    }
}
