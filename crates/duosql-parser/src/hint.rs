//! Optimizer hint mini-grammar.
//!
//! A hint comment body is a whitespace- or comma-separated list of items:
//!
//! ```text
//! hints := item*
//! item  := NAME [ '(' arg* ')' ]
//! arg   := word | number | 'string' | '(' arg* ')'
//! ```
//!
//! Words may carry a query-block suffix (`t1@sel$1`) or be a bare query
//! block name (`@sel$1`). Hint names are upper-cased; arguments are kept as
//! written. A malformed body is rejected as a whole so the caller can drop
//! the hint section with a single warning.

use duosql_ast::{Hint, HintArg, Span};
use duosql_error::{Position, SqlError};

/// Deepest argument-list nesting accepted inside one hint.
const MAX_ARG_NESTING: usize = 32;

/// Parse a hint comment body (the text between `/*+` and `*/`).
///
/// `origin` is the source position of the first byte of `body`; it is used
/// for spans and for the warning position.
///
/// # Errors
///
/// Returns [`SqlError::HintWarning`] at the first malformed item.
pub fn parse_hints(body: &str, origin: Position) -> Result<Vec<Hint>, SqlError> {
    let mut parser = HintParser {
        src: body.as_bytes(),
        pos: 0,
        origin,
    };
    let mut hints = Vec::new();
    loop {
        parser.skip_separators();
        if parser.at_end() {
            break;
        }
        hints.push(parser.item()?);
    }
    tracing::trace!(target: "duosql.hint", count = hints.len(), "parsed hint section");
    Ok(hints)
}

struct HintParser<'a> {
    src: &'a [u8],
    pos: usize,
    origin: Position,
}

impl HintParser<'_> {
    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn skip_separators(&mut self) {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_whitespace() || c == b',')
        {
            self.pos += 1;
        }
    }

    fn text(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.src[start..self.pos]).into_owned()
    }

    fn offset(&self, at: usize) -> u32 {
        self.origin
            .offset
            .saturating_add(u32::try_from(at).unwrap_or(u32::MAX))
    }

    fn span(&self, start: usize) -> Span {
        Span::new(self.offset(start), self.offset(self.pos))
    }

    /// Line and column of byte `at`, counting newlines inside the body.
    fn position(&self, at: usize) -> Position {
        let before = &self.src[..at.min(self.src.len())];
        let newlines = memchr::memchr_iter(b'\n', before).count();
        let col = match memchr::memrchr(b'\n', before) {
            Some(nl) => at - nl,
            None => self.origin.column as usize + at,
        };
        Position::new(
            self.origin.line + u32::try_from(newlines).unwrap_or(0),
            u32::try_from(col).unwrap_or(u32::MAX),
            self.offset(at),
        )
    }

    fn error(&self, message: impl Into<String>) -> SqlError {
        let len = u32::from(!self.at_end());
        SqlError::hint(self.position(self.pos), len, message)
    }

    fn item(&mut self) -> Result<Hint, SqlError> {
        let start = self.pos;
        if !self
            .peek()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == b'_')
        {
            return Err(self.error(format!(
                "expected hint name, found '{}'",
                char::from(self.peek().unwrap_or(b' '))
            )));
        }
        self.word();
        let name = self.text(start).to_ascii_uppercase();

        while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
            self.pos += 1;
        }
        let mut args = Vec::new();
        if self.peek() == Some(b'(') {
            self.pos += 1;
            args = self.args(&name, 1)?;
        }
        Ok(Hint {
            name,
            args,
            span: self.span(start),
        })
    }

    /// Arguments up to and including the closing `)`.
    fn args(&mut self, hint: &str, depth: usize) -> Result<Vec<HintArg>, SqlError> {
        if depth > MAX_ARG_NESTING {
            return Err(self.error(format!("arguments of hint {hint} nested too deeply")));
        }
        let mut args = Vec::new();
        loop {
            self.skip_separators();
            match self.peek() {
                None => return Err(self.error(format!("missing ')' in hint {hint}"))),
                Some(b')') => {
                    self.pos += 1;
                    return Ok(args);
                }
                Some(b'(') => {
                    self.pos += 1;
                    args.push(HintArg::List(self.args(hint, depth + 1)?));
                }
                Some(b'\'') => args.push(HintArg::String(self.string(hint)?)),
                Some(c) if c.is_ascii_digit() => {
                    let start = self.pos;
                    self.word();
                    args.push(HintArg::Number(self.text(start)));
                }
                Some(b'=') => {
                    self.pos += 1;
                    args.push(HintArg::Ident("=".to_owned()));
                }
                Some(c) if is_word_char(c) => {
                    let start = self.pos;
                    self.word();
                    args.push(HintArg::Ident(self.text(start)));
                }
                Some(c) => {
                    return Err(self.error(format!(
                        "unexpected '{}' in hint {hint}",
                        char::from(c)
                    )))
                }
            }
        }
    }

    fn word(&mut self) {
        while self.peek().is_some_and(is_word_char) {
            self.pos += 1;
        }
    }

    fn string(&mut self, hint: &str) -> Result<String, SqlError> {
        self.pos += 1;
        let mut value = String::new();
        loop {
            let rest = &self.src[self.pos..];
            let Some(n) = memchr::memchr(b'\'', rest) else {
                return Err(self.error(format!("unterminated string in hint {hint}")));
            };
            value.push_str(&String::from_utf8_lossy(&rest[..n]));
            self.pos += n + 1;
            if self.peek() == Some(b'\'') {
                value.push('\'');
                self.pos += 1;
            } else {
                return Ok(value);
            }
        }
    }
}

fn is_word_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'_' | b'$' | b'#' | b'.' | b'@') || c >= 0x80
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(body: &str) -> Vec<Hint> {
        parse_hints(body, Position::new(1, 10, 9)).unwrap()
    }

    #[test]
    fn test_simple_hints() {
        let h = hints(" full(t) PARALLEL(4) no_rewrite ");
        let names: Vec<_> = h.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["FULL", "PARALLEL", "NO_REWRITE"]);
        assert_eq!(h[0].args, vec![HintArg::Ident("t".to_owned())]);
        assert_eq!(h[1].args, vec![HintArg::Number("4".to_owned())]);
        assert!(h[2].args.is_empty());
        // ` full(t)` starts one byte into the body at offset 9.
        assert_eq!(h[0].span, Span::new(10, 17));
    }

    #[test]
    fn test_query_block_and_nested_args() {
        let h = hints("LEADING(@sel$1 (t1 t2), t3) INDEX(t1@sel$1 idx_a)");
        assert_eq!(
            h[0].args,
            vec![
                HintArg::Ident("@sel$1".to_owned()),
                HintArg::List(vec![
                    HintArg::Ident("t1".to_owned()),
                    HintArg::Ident("t2".to_owned()),
                ]),
                HintArg::Ident("t3".to_owned()),
            ]
        );
        assert_eq!(h[1].args[0], HintArg::Ident("t1@sel$1".to_owned()));
    }

    #[test]
    fn test_string_args() {
        let h = hints("QB_NAME('it''s')");
        assert_eq!(h[0].args, vec![HintArg::String("it's".to_owned())]);
    }

    #[test]
    fn test_display_round_trip() {
        let h = hints("leading((t1 t2) t3)  full(t)");
        let printed: Vec<String> = h.iter().map(ToString::to_string).collect();
        assert_eq!(printed, ["LEADING((t1 t2) t3)", "FULL(t)"]);
        let again = hints(&printed.join(" "));
        let names: Vec<_> = again.iter().map(|h| (&h.name, &h.args)).collect();
        let first: Vec<_> = h.iter().map(|h| (&h.name, &h.args)).collect();
        assert_eq!(names, first);
    }

    #[test]
    fn test_malformed_hints_warn() {
        for body in ["FULL(t", "FULL(t ?)", "(x)", "Q('open)"] {
            let err = parse_hints(body, Position::new(1, 1, 0)).unwrap_err();
            assert!(matches!(err, SqlError::HintWarning { .. }), "{body}");
        }
    }

    #[test]
    fn test_warning_position_tracks_lines() {
        let err = parse_hints("FULL(t)\n  ?", Position::new(3, 12, 40)).unwrap_err();
        let pos = err.position().unwrap();
        assert_eq!(pos.line, 4);
        assert_eq!(pos.column, 3);
        assert_eq!(pos.offset, 50);
    }

    #[test]
    fn test_deep_nesting_is_rejected() {
        let body = format!("X{}{}", "(".repeat(100), ")".repeat(100));
        let err = parse_hints(&body, Position::new(1, 1, 0)).unwrap_err();
        assert!(err.message().contains("nested too deeply"));
    }

    #[test]
    fn test_empty_body() {
        assert!(hints("   ").is_empty());
    }
}
