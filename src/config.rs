/// Which characters a backslash may escape inside double quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoubleQuoteEscapes {
    /// Only `"` and `\`.
    #[default]
    Minimal,
    /// `"`, `\`, `$` and `` ` ``. A backslash-newline pair is removed.
    Posix,
}

impl DoubleQuoteEscapes {
    /// Returns true if `\c` inside double quotes yields a literal `c`.
    pub fn escapes(self, c: char) -> bool {
        match self {
            DoubleQuoteEscapes::Minimal => matches!(c, '"' | '\\'),
            DoubleQuoteEscapes::Posix => matches!(c, '"' | '\\' | '$' | '`'),
        }
    }

    pub(crate) fn line_continuation(self) -> bool {
        self == DoubleQuoteEscapes::Posix
    }
}

/// Options for a single scan.
///
/// A config is passed to every call rather than stored globally, so two
/// scans with different options never interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LexerConfig {
    /// Treat `#` at the start of a token as a comment running to end of line.
    pub comments: bool,
    pub double_quote_escapes: DoubleQuoteEscapes,
}

impl LexerConfig {
    pub fn with_comments(mut self, comments: bool) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_double_quote_escapes(mut self, escapes: DoubleQuoteEscapes) -> Self {
        self.double_quote_escapes = escapes;
        self
    }
}

/// Unquoted characters that separate tokens.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LexerConfig::default();
        assert!(!config.comments);
        assert_eq!(config.double_quote_escapes, DoubleQuoteEscapes::Minimal);
    }

    #[test]
    fn test_builder() {
        let config = LexerConfig::default()
            .with_comments(true)
            .with_double_quote_escapes(DoubleQuoteEscapes::Posix);
        assert!(config.comments);
        assert_eq!(config.double_quote_escapes, DoubleQuoteEscapes::Posix);
    }

    #[test]
    fn test_escape_sets() {
        for c in ['"', '\\'] {
            assert!(DoubleQuoteEscapes::Minimal.escapes(c));
            assert!(DoubleQuoteEscapes::Posix.escapes(c));
        }
        for c in ['$', '`'] {
            assert!(!DoubleQuoteEscapes::Minimal.escapes(c));
            assert!(DoubleQuoteEscapes::Posix.escapes(c));
        }
        assert!(!DoubleQuoteEscapes::Posix.escapes('n'));
        assert!(!DoubleQuoteEscapes::Posix.escapes(' '));
    }

    #[test]
    fn test_separators() {
        assert!(is_separator(' '));
        assert!(is_separator('\t'));
        assert!(is_separator('\n'));
        assert!(!is_separator('a'));
        assert!(!is_separator('\u{a0}'));
    }
}
