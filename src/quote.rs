use std::borrow::Cow;

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-' | '_')
}

/// Quotes a word so that [`tokenize`](crate::tokenize) reads it back unchanged.
///
/// Words made only of safe characters are returned as-is. Anything else is
/// wrapped in single quotes, with embedded single quotes written as `'"'"'`.
pub fn quote(word: &str) -> Cow<'_, str> {
    if word.is_empty() {
        return Cow::Borrowed("''");
    }
    if word.chars().all(is_safe) {
        return Cow::Borrowed(word);
    }

    let mut quoted = String::with_capacity(word.len() + 2);
    quoted.push('\'');
    for c in word.chars() {
        if c == '\'' {
            quoted.push_str(r#"'"'"'"#);
        } else {
            quoted.push(c);
        }
    }
    quoted.push('\'');
    Cow::Owned(quoted)
}

/// Quotes each word and joins them with single spaces.
pub fn join<I, S>(words: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|word| quote(word.as_ref()).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_safe_words_are_borrowed() {
        assert!(matches!(quote("ls"), Cow::Borrowed("ls")));
        assert_eq!(quote("--out=/tmp/a.txt"), "--out=/tmp/a.txt");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote(""), "''");
        assert_eq!(quote("hello world"), "'hello world'");
        assert_eq!(quote("it's"), r#"'it'"'"'s'"#);
        assert_eq!(quote("$HOME"), "'$HOME'");
        assert_eq!(quote("#tag"), "'#tag'");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(["echo", "hello world", ""]), "echo 'hello world' ''");
        assert_eq!(join(Vec::<String>::new()), "");
    }

    #[test]
    fn test_join_then_tokenize_is_identity() {
        let words = vec![
            "cmd",
            "arg one",
            "",
            "it's",
            r#"say "hi""#,
            r"back\slash",
            "tab\there",
            "new\nline",
            "ünï cødé",
            "'",
            "\"",
            "\\",
        ];
        assert_eq!(tokenize(&join(&words)).unwrap(), words);
    }
}
