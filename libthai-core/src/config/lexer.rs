use logos::Logos;

fn unquote(raw: &str) -> String {
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(ch);
        }
    }
    out
}

#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\f]+")]
pub enum ConfToken {
    // Comments (skipped)
    #[regex(r"[#;][^\n]*", logos::skip)]
    Comment,

    #[token("\n")]
    Newline,

    #[token("=")]
    Equals,

    // [Group] headers
    #[regex(r"\[[^\]\n]*\]", |lex| {
        let s = lex.slice();
        s[1..s.len()-1].trim().to_string()
    })]
    Section(String),

    #[regex(r#""([^"\\\n]|\\.)*""#, |lex| unquote(lex.slice()))]
    Quoted(String),

    // Keys and bare values; values may contain inner spaces ("Basic check")
    #[regex(r#"[^=\s#;\[\]"][^=\n]*"#, |lex| lex.slice().trim_end().to_string())]
    Word(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_line() {
        let mut lex = ConfToken::lexer("KeyboardMap=KETMANEE\n");

        assert_eq!(lex.next(), Some(Ok(ConfToken::Word("KeyboardMap".to_string()))));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Equals)));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Word("KETMANEE".to_string()))));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Newline)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_value_with_spaces_and_comments() {
        let input = "# libthai\n[General]\nStrictness = Basic check  \n";
        let mut lex = ConfToken::lexer(input);

        assert_eq!(lex.next(), Some(Ok(ConfToken::Newline)));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Section("General".to_string()))));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Newline)));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Word("Strictness".to_string()))));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Equals)));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Word("Basic check".to_string()))));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Newline)));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn test_quoted_value() {
        let mut lex = ConfToken::lexer(r#"Strictness="Basic check""#);

        assert_eq!(lex.next(), Some(Ok(ConfToken::Word("Strictness".to_string()))));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Equals)));
        assert_eq!(lex.next(), Some(Ok(ConfToken::Quoted("Basic check".to_string()))));
        assert_eq!(lex.next(), None);
    }
}
