//! Tokenizer and recursive-descent parser for the nested key-value format
//!
//! The format is the quoted, brace-delimited text SteamCMD uses both for
//! `app_info_print` output and for on-disk app manifests:
//!
//! ```text
//! "AppState"
//! {
//!     "appid"     "730"
//!     "UserConfig"
//!     {
//!         "language"  "english"
//!     }
//! }
//! ```
//!
//! The top level is an implicit mapping (no enclosing braces). `//` starts
//! a line comment. Bare unquoted tokens are a parse error.

use crate::error::{Error, Result};
use crate::node::{Mapping, Node};

/// Parse key-value text into its root mapping.
///
/// On any malformed input this returns a positioned [`Error`] and no
/// tree; there is no partial-success mode. Duplicate keys within one
/// mapping are resolved last-write-wins (see [`Mapping::insert`]).
pub fn parse(input: &str) -> Result<Mapping> {
    let mut lexer = Lexer::new(input);
    let root = parse_mapping_body(&mut lexer, true)?;
    Ok(root)
}

/// Parse the `(key value)*` body of a mapping.
///
/// At the top level the body runs to end of input; nested bodies run to
/// the matching `}`.
fn parse_mapping_body(lexer: &mut Lexer<'_>, top_level: bool) -> Result<Mapping> {
    let mut mapping = Mapping::new();
    loop {
        let token = match lexer.next_token()? {
            Some(token) => token,
            None if top_level => return Ok(mapping),
            None => {
                return Err(Error::UnexpectedEof {
                    line: lexer.line,
                    offset: lexer.pos,
                });
            }
        };

        let key = match token.kind {
            TokenKind::Quoted(key) => key,
            TokenKind::Close if !top_level => return Ok(mapping),
            TokenKind::Close => {
                return Err(Error::UnexpectedClose {
                    line: token.line,
                    offset: token.offset,
                });
            }
            TokenKind::Open => {
                return Err(Error::ExpectedKey {
                    line: token.line,
                    offset: token.offset,
                });
            }
        };

        let value = match lexer.next_token()? {
            Some(token) => match token.kind {
                TokenKind::Quoted(text) => Node::Scalar(text),
                TokenKind::Open => Node::Mapping(parse_mapping_body(lexer, false)?),
                TokenKind::Close => {
                    return Err(Error::ExpectedValue {
                        key,
                        line: token.line,
                        offset: token.offset,
                    });
                }
            },
            None => {
                return Err(Error::ExpectedValue {
                    key,
                    line: lexer.line,
                    offset: lexer.pos,
                });
            }
        };

        mapping.insert(key, value);
    }
}

#[derive(Debug)]
enum TokenKind {
    Quoted(String),
    Open,
    Close,
}

#[derive(Debug)]
struct Token {
    kind: TokenKind,
    line: usize,
    offset: usize,
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0, line: 1 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Next token, skipping whitespace and `//` comments.
    fn next_token(&mut self) -> Result<Option<Token>> {
        loop {
            let (offset, line) = (self.pos, self.line);
            let ch = match self.peek() {
                Some(ch) => ch,
                None => return Ok(None),
            };

            if ch.is_whitespace() {
                self.bump();
                continue;
            }
            if self.src[self.pos..].starts_with("//") {
                while let Some(ch) = self.peek() {
                    if ch == '\n' {
                        break;
                    }
                    self.bump();
                }
                continue;
            }

            return match ch {
                '{' => {
                    self.bump();
                    Ok(Some(Token {
                        kind: TokenKind::Open,
                        line,
                        offset,
                    }))
                }
                '}' => {
                    self.bump();
                    Ok(Some(Token {
                        kind: TokenKind::Close,
                        line,
                        offset,
                    }))
                }
                '"' => {
                    let text = self.quoted_string(offset, line)?;
                    Ok(Some(Token {
                        kind: TokenKind::Quoted(text),
                        line,
                        offset,
                    }))
                }
                other => Err(Error::UnexpectedCharacter {
                    found: other,
                    line,
                    offset,
                }),
            };
        }
    }

    /// Read a quoted string; the opening quote is at `offset`.
    ///
    /// Recognized escapes are `\"`, `\\`, `\n`, `\t`; any other escaped
    /// character is kept as itself. An unescaped newline inside a string
    /// is treated as unterminated, which keeps the reported position on
    /// the offending line.
    fn quoted_string(&mut self, offset: usize, line: usize) -> Result<String> {
        self.bump(); // opening quote
        let mut text = String::new();
        loop {
            match self.bump() {
                None | Some('\n') => {
                    return Err(Error::UnterminatedString { line, offset });
                }
                Some('"') => return Ok(text),
                Some('\\') => match self.bump() {
                    None => return Err(Error::UnterminatedString { line, offset }),
                    Some('n') => text.push('\n'),
                    Some('t') => text.push('\t'),
                    Some(other) => text.push(other),
                },
                Some(other) => text.push(other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_flat_pairs() {
        let root = parse("\"appid\" \"730\"\n\"name\" \"CS:GO\"\n").unwrap();
        assert_eq!(root.get_scalar("appid"), Some("730"));
        assert_eq!(root.get_scalar("name"), Some("CS:GO"));
    }

    #[test]
    fn test_parse_nested_mapping() {
        let text = r#"
"730"
{
    "common"
    {
        "name" "Counter-Strike: Global Offensive"
    }
    "ufs"
    {
        "quota" "0"
    }
}
"#;
        let root = parse(text).unwrap();
        let app = root.get("730").unwrap();
        assert_eq!(
            app.walk(&["common", "name"]).and_then(Node::as_scalar),
            Some("Counter-Strike: Global Offensive")
        );
        assert!(app.get("ufs").is_some());
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let text = "// header comment\n\"key\" \"value\" // trailing\n\n";
        let root = parse(text).unwrap();
        assert_eq!(root.get_scalar("key"), Some("value"));
    }

    #[test]
    fn test_escaped_quote_inside_value() {
        let root = parse(r#""key" "a \"quoted\" word""#).unwrap();
        assert_eq!(root.get_scalar("key"), Some("a \"quoted\" word"));
    }

    #[test]
    fn test_unterminated_string_positions() {
        let err = parse("\"key\" \"value\n").unwrap_err();
        assert_eq!(
            err,
            Error::UnterminatedString { line: 1, offset: 6 }
        );
    }

    #[test]
    fn test_unbalanced_open_brace() {
        let err = parse("\"key\"\n{\n\"a\" \"b\"\n").unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { .. }));
    }

    #[test]
    fn test_unbalanced_close_brace() {
        let err = parse("\"a\" \"b\"\n}\n").unwrap_err();
        assert_eq!(err, Error::UnexpectedClose { line: 2, offset: 8 });
    }

    #[test]
    fn test_bare_token_rejected() {
        let err = parse("key \"value\"").unwrap_err();
        assert_eq!(
            err,
            Error::UnexpectedCharacter {
                found: 'k',
                line: 1,
                offset: 0
            }
        );
    }

    #[test]
    fn test_key_without_value() {
        let err = parse("\"lonely\"").unwrap_err();
        assert!(matches!(err, Error::ExpectedValue { ref key, .. } if key == "lonely"));
    }

    #[test]
    fn test_brace_where_key_expected() {
        let err = parse("{ \"a\" \"b\" }").unwrap_err();
        assert_eq!(err, Error::ExpectedKey { line: 1, offset: 0 });
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let root = parse("\"k\" \"one\"\n\"k\" \"two\"\n").unwrap();
        assert_eq!(root.len(), 1);
        assert_eq!(root.get_scalar("k"), Some("two"));
    }

    #[rstest]
    #[case::unterminated_quote("\"key\" \"val")]
    #[case::escape_at_eof("\"key\" \"val\\")]
    #[case::open_without_close("\"key\"\n{")]
    #[case::close_without_open("}")]
    #[case::nested_unbalanced("\"a\"\n{\n\"b\"\n{\n}\n")]
    #[case::bare_word_value("\"key\" value")]
    #[case::trailing_key("\"a\" \"b\" \"dangling\"")]
    fn test_malformed_inputs_error(#[case] input: &str) {
        assert!(parse(input).is_err());
    }
}
