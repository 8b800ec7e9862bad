//! Splits a template into literal text and `{...}` placeholder spans.

use crate::error::BuildError;

/// A placeholder span, borrowed from the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Text including the braces
    pub raw: &'a str,
    /// Text between the braces
    pub inner: &'a str,
    /// Byte offset of the opening brace
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Placeholder(Span<'a>),
}

/// Tokenize in one left-to-right pass.
///
/// A `}` with no open placeholder is literal text. An unclosed `{` or a `{`
/// inside an open placeholder is a [`BuildError::MalformedTemplate`].
pub fn tokenize(template: &str) -> Result<Vec<Token<'_>>, BuildError> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut open: Option<usize> = None;

    // Braces are ASCII, so byte offsets always fall on char boundaries
    for (i, b) in template.bytes().enumerate() {
        match (b, open) {
            (b'{', None) => {
                if literal_start < i {
                    tokens.push(Token::Literal(&template[literal_start..i]));
                }
                open = Some(i);
            }
            (b'{', Some(_)) => {
                return Err(BuildError::MalformedTemplate {
                    offset: i,
                    reason: "nested `{` inside a placeholder",
                });
            }
            (b'}', Some(start)) => {
                tokens.push(Token::Placeholder(Span {
                    raw: &template[start..=i],
                    inner: &template[start + 1..i],
                    offset: start,
                }));
                open = None;
                literal_start = i + 1;
            }
            _ => {}
        }
    }

    if let Some(start) = open {
        return Err(BuildError::MalformedTemplate {
            offset: start,
            reason: "unclosed `{`",
        });
    }
    if literal_start < template.len() {
        tokens.push(Token::Literal(&template[literal_start..]));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder_inners<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens
            .iter()
            .filter_map(|t| match t {
                Token::Placeholder(span) => Some(span.inner),
                Token::Literal(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_literals_and_placeholders() {
        let tokens = tokenize("('{guid}',{int:min:1|max:2})").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], Token::Literal("('"));
        assert_eq!(
            tokens[1],
            Token::Placeholder(Span {
                raw: "{guid}",
                inner: "guid",
                offset: 2
            })
        );
        assert_eq!(tokens[2], Token::Literal("',"));
        assert_eq!(tokens[4], Token::Literal(")"));
        assert_eq!(placeholder_inners(&tokens), vec!["guid", "int:min:1|max:2"]);
    }

    #[test]
    fn test_adjacent_placeholders() {
        let tokens = tokenize("{guid}{now}").unwrap();
        assert_eq!(placeholder_inners(&tokens), vec!["guid", "now"]);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_empty_template() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(
            tokenize("NULL,-3").unwrap(),
            vec![Token::Literal("NULL,-3")]
        );
    }

    #[test]
    fn test_stray_close_brace_is_literal() {
        let tokens = tokenize("a}b{guid}").unwrap();
        assert_eq!(tokens[0], Token::Literal("a}b"));
        assert_eq!(placeholder_inners(&tokens), vec!["guid"]);
    }

    #[test]
    fn test_unclosed_brace() {
        assert_eq!(
            tokenize("abc{guid"),
            Err(BuildError::MalformedTemplate {
                offset: 3,
                reason: "unclosed `{`"
            })
        );
    }

    #[test]
    fn test_nested_brace() {
        assert!(matches!(
            tokenize("{int:{min}}"),
            Err(BuildError::MalformedTemplate { offset: 5, .. })
        ));
    }

    #[test]
    fn test_multibyte_literals() {
        let tokens = tokenize("ñ{guid}ü").unwrap();
        assert_eq!(tokens[0], Token::Literal("ñ"));
        assert_eq!(tokens[2], Token::Literal("ü"));
    }
}
