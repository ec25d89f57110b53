//! SQL lexer.
//!
//! Converts SQL text into tokens for one dialect. Uses memchr for the scans
//! that dominate real workloads (string bodies, quoted identifiers, comment
//! ends) and tracks line/column for diagnostics. Lexical problems become
//! [`TokenKind::Error`] tokens internally; the strict entry points turn the
//! first one into a [`SqlError::Lex`], the lossy one keeps them in-band so
//! the parser can recover at the next `;`.

use duosql_ast::Span;
use duosql_error::{Position, SqlError};
use memchr::{memchr, memchr2};

use crate::dialect::{Dialect, ParserConfig};
use crate::token::{Keyword, Token, TokenKind};

/// SQL lexer that produces a stream of tokens from source text.
pub struct Lexer<'a> {
    src: &'a [u8],
    pos: usize,
    line: u32,
    col: u32,
    dialect: Dialect,
    double_quote_ident: bool,
    /// Set once EOF or an error has been yielded by the iterator.
    done: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer with the dialect's default quoting rules.
    #[must_use]
    pub fn new(source: &'a str, dialect: Dialect) -> Self {
        Self::with_config(source, &ParserConfig::new(dialect))
    }

    #[must_use]
    pub fn with_config(source: &'a str, config: &ParserConfig) -> Self {
        Self {
            src: source.as_bytes(),
            pos: 0,
            line: 1,
            col: 1,
            dialect: config.dialect,
            double_quote_ident: config.double_quote_is_ident(),
            done: false,
        }
    }

    /// Tokenize the whole input, failing on the first lexical error.
    ///
    /// The returned vector always ends with an [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns [`SqlError::Lex`] for unterminated literals or comments,
    /// malformed numbers and unexpected characters.
    pub fn tokenize(source: &str, dialect: Dialect) -> Result<Vec<Token>, SqlError> {
        Lexer::new(source, dialect).collect()
    }

    /// Tokenize the whole input, keeping lexical errors as
    /// [`TokenKind::Error`] tokens. Never fails.
    #[must_use]
    pub fn tokenize_lossy(source: &str, dialect: Dialect) -> Vec<Token> {
        Self::tokenize_lossy_with(source, &ParserConfig::new(dialect))
    }

    #[must_use]
    pub fn tokenize_lossy_with(source: &str, config: &ParserConfig) -> Vec<Token> {
        let mut lexer = Lexer::with_config(source, config);
        let mut tokens = Vec::new();
        loop {
            let tok = lexer.next_token();
            if let TokenKind::Error(ref msg) = tok.kind {
                tracing::debug!(
                    target: "duosql.lexer",
                    line = tok.line,
                    col = tok.col,
                    "lexical error: {msg}"
                );
            }
            let is_eof = tok.kind == TokenKind::Eof;
            tokens.push(tok);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Produce the next token. Errors are returned in-band.
    pub fn next_token(&mut self) -> Token {
        match self.skip_trivia() {
            Some(err) => err,
            None => self.lex_significant(),
        }
    }

    fn lex_significant(&mut self) -> Token {
        let start = self.pos;
        let start_line = self.line;
        let start_col = self.col;

        let Some(ch) = self.peek() else {
            return self.finish(TokenKind::Eof, start, start_line, start_col);
        };

        let kind = match ch {
            b'\'' => self.lex_string(b'\''),
            b'"' if self.double_quote_ident => self.lex_quoted_ident(b'"'),
            b'"' => self.lex_string(b'"'),
            b'`' => self.lex_quoted_ident(b'`'),

            b'X' | b'x' if self.peek_at(1) == Some(b'\'') => self.lex_hex_string(),
            b'N' | b'n' if self.peek_at(1) == Some(b'\'') => {
                self.advance();
                match self.lex_string(b'\'') {
                    TokenKind::String(s) => TokenKind::NationalString(s),
                    other => other,
                }
            }
            b'Q' | b'q' if self.dialect == Dialect::Oracle && self.peek_at(1) == Some(b'\'') => {
                self.lex_q_quote()
            }

            b'0' if matches!(self.peek_at(1), Some(b'x' | b'X')) => self.lex_hex_number(),
            b'0'..=b'9' => self.lex_number(),
            b'.' if self.peek_at(1).is_some_and(|c| c.is_ascii_digit())
                && !self.prev_is_ident_char() =>
            {
                self.lex_number()
            }

            c if is_ident_start(c) => self.lex_identifier(),

            b'?' => self.single(TokenKind::Question),
            b':' => self.lex_colon(),
            b'@' => self.lex_at(),

            b'/' if self.peek_at(1) == Some(b'*') => self.lex_hint(),

            b'+' => self.single(TokenKind::Plus),
            b'*' => self.single(TokenKind::Star),
            b'/' => self.single(TokenKind::Slash),
            b'%' => self.single(TokenKind::Percent),
            b'^' => self.single(TokenKind::Caret),
            b'~' => self.single(TokenKind::Tilde),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),
            b'(' => self.single(TokenKind::LeftParen),
            b')' => self.single(TokenKind::RightParen),
            b'.' => self.single(TokenKind::Dot),

            b'-' => self.lex_minus(),
            b'<' => self.lex_lt(),
            b'>' => self.lex_gt(),
            b'=' => self.pair(b'>', TokenKind::FatArrow, TokenKind::Eq),
            b'!' => self.pair(b'=', TokenKind::Ne, TokenKind::Bang),
            b'|' => self.pair(b'|', TokenKind::DoublePipe, TokenKind::Pipe),
            b'&' => self.pair(b'&', TokenKind::DoubleAmpersand, TokenKind::Ampersand),

            other => {
                self.advance();
                TokenKind::Error(format!("unexpected character '{}'", char::from(other)))
            }
        };

        self.finish(kind, start, start_line, start_col)
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    fn finish(&self, kind: TokenKind, start: usize, line: u32, col: u32) -> Token {
        Token {
            kind,
            lexeme: String::from_utf8_lossy(&self.src[start..self.pos]).into_owned(),
            span: Span::new(offset(start), offset(self.pos)),
            line,
            col,
        }
    }

    fn advance(&mut self) {
        if let Some(&ch) = self.src.get(self.pos) {
            self.pos += 1;
            if ch == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    fn advance_to_end(&mut self) {
        let rest = self.src.len() - self.pos;
        self.advance_by(rest);
    }

    fn peek(&self) -> Option<u8> {
        self.src.get(self.pos).copied()
    }

    fn peek_at(&self, n: usize) -> Option<u8> {
        self.src.get(self.pos + n).copied()
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// Two-byte operator when the second byte matches, else the one-byte one.
    fn pair(&mut self, second: u8, double: TokenKind, one: TokenKind) -> TokenKind {
        self.advance();
        if self.peek() == Some(second) {
            self.advance();
            double
        } else {
            one
        }
    }

    fn prev_is_ident_char(&self) -> bool {
        self.pos > 0 && {
            let prev = self.src[self.pos - 1];
            is_ident_char(prev, self.dialect) || prev == b'`' || prev == b'"'
        }
    }

    fn text(&self, start: usize, end: usize) -> String {
        String::from_utf8_lossy(&self.src[start..end]).into_owned()
    }

    /// Skip whitespace and comments. Stops in front of a `/*+` hint. An
    /// unterminated block comment comes back as an error token.
    fn skip_trivia(&mut self) -> Option<Token> {
        loop {
            while self.peek().is_some_and(|c| c.is_ascii_whitespace()) {
                self.advance();
            }
            match (self.peek(), self.peek_at(1)) {
                (Some(b'-'), Some(b'-')) if self.dash_comment_starts() => self.skip_line(),
                (Some(b'#'), _) if self.dialect == Dialect::MySql => self.skip_line(),
                (Some(b'/'), Some(b'*')) => {
                    if self.peek_at(2) == Some(b'+') {
                        return None;
                    }
                    let (start, line, col) = (self.pos, self.line, self.col);
                    if self.skip_block_comment().is_none() {
                        let kind = TokenKind::Error("unterminated comment".to_owned());
                        return Some(self.finish(kind, start, line, col));
                    }
                }
                _ => return None,
            }
        }
    }

    /// MySQL requires whitespace (or end of input) after `--`.
    fn dash_comment_starts(&self) -> bool {
        match self.dialect {
            Dialect::Oracle => true,
            Dialect::MySql => self
                .peek_at(2)
                .map_or(true, |c| c.is_ascii_whitespace() || c.is_ascii_control()),
        }
    }

    fn skip_line(&mut self) {
        match memchr(b'\n', &self.src[self.pos..]) {
            Some(n) => self.advance_by(n + 1),
            None => self.advance_to_end(),
        }
    }

    /// Skip a possibly nested `/* ... */`. Returns the body range, or `None`
    /// when the comment never closes (the input is consumed).
    fn skip_block_comment(&mut self) -> Option<(usize, usize)> {
        self.advance_by(2);
        let body_start = self.pos;
        let mut depth = 1u32;
        loop {
            let Some(n) = memchr2(b'*', b'/', &self.src[self.pos..]) else {
                self.advance_to_end();
                return None;
            };
            self.advance_by(n);
            match (self.peek(), self.peek_at(1)) {
                (Some(b'*'), Some(b'/')) => {
                    depth -= 1;
                    let body_end = self.pos;
                    self.advance_by(2);
                    if depth == 0 {
                        return Some((body_start, body_end));
                    }
                }
                (Some(b'/'), Some(b'*')) => {
                    depth += 1;
                    self.advance_by(2);
                }
                _ => self.advance(),
            }
        }
    }

    // -----------------------------------------------------------------------
    // Literal tokenizers
    // -----------------------------------------------------------------------

    /// Quoted string. Quote doubling works in both dialects; backslash
    /// escapes only in MySQL.
    fn lex_string(&mut self, quote: u8) -> TokenKind {
        self.advance();
        let escapes = self.dialect == Dialect::MySql;
        let mut value = Vec::new();
        loop {
            let rest = &self.src[self.pos..];
            let found = if escapes {
                memchr2(quote, b'\\', rest)
            } else {
                memchr(quote, rest)
            };
            let Some(n) = found else {
                self.advance_to_end();
                return TokenKind::Error("unterminated string literal".to_owned());
            };
            value.extend_from_slice(&rest[..n]);
            self.advance_by(n);
            if self.peek() == Some(b'\\') {
                self.advance();
                let Some(esc) = self.peek() else {
                    return TokenKind::Error("unterminated string literal".to_owned());
                };
                self.advance();
                match esc {
                    b'n' => value.push(b'\n'),
                    b't' => value.push(b'\t'),
                    b'r' => value.push(b'\r'),
                    b'0' => value.push(0),
                    b'b' => value.push(0x08),
                    b'Z' => value.push(0x1a),
                    b'%' | b'_' => value.extend_from_slice(&[b'\\', esc]),
                    other => value.push(other),
                }
                continue;
            }
            self.advance();
            if self.peek() == Some(quote) {
                value.push(quote);
                self.advance();
            } else {
                return TokenKind::String(String::from_utf8_lossy(&value).into_owned());
            }
        }
    }

    /// Backtick or double-quoted identifier with doubled-quote escapes.
    fn lex_quoted_ident(&mut self, quote: u8) -> TokenKind {
        self.advance();
        let mut value = String::new();
        loop {
            let rest = &self.src[self.pos..];
            let Some(n) = memchr(quote, rest) else {
                self.advance_to_end();
                return TokenKind::Error("unterminated quoted identifier".to_owned());
            };
            value.push_str(&String::from_utf8_lossy(&rest[..n]));
            self.advance_by(n + 1);
            if self.peek() == Some(quote) {
                value.push(char::from(quote));
                self.advance();
            } else if value.is_empty() {
                return TokenKind::Error("empty quoted identifier".to_owned());
            } else {
                return TokenKind::QuotedId(value);
            }
        }
    }

    /// Oracle alternative quoting: `q'[...]'`, `q'{...}'`, `q'!...!'`.
    fn lex_q_quote(&mut self) -> TokenKind {
        self.advance_by(2);
        let Some(open) = self.peek() else {
            return TokenKind::Error("unterminated string literal".to_owned());
        };
        if open.is_ascii_whitespace() {
            return TokenKind::Error("invalid q-quote delimiter".to_owned());
        }
        let close = match open {
            b'[' => b']',
            b'{' => b'}',
            b'(' => b')',
            b'<' => b'>',
            other => other,
        };
        self.advance();
        let body_start = self.pos;
        loop {
            let Some(n) = memchr(close, &self.src[self.pos..]) else {
                self.advance_to_end();
                return TokenKind::Error("unterminated string literal".to_owned());
            };
            self.advance_by(n + 1);
            if self.peek() == Some(b'\'') {
                let body = self.text(body_start, self.pos - 1);
                self.advance();
                return TokenKind::String(body);
            }
        }
    }

    /// `X'CAFE'`: an even number of hex digits.
    fn lex_hex_string(&mut self) -> TokenKind {
        self.advance_by(2);
        let Some(n) = memchr(b'\'', &self.src[self.pos..]) else {
            self.advance_to_end();
            return TokenKind::Error("unterminated hex literal".to_owned());
        };
        let digits = self.src[self.pos..self.pos + n].to_vec();
        self.advance_by(n + 1);
        if digits.len() % 2 != 0 {
            return TokenKind::Error("hex literal has an odd number of digits".to_owned());
        }
        decode_hex(&digits).map_or_else(
            || TokenKind::Error("malformed hex literal".to_owned()),
            TokenKind::HexString,
        )
    }

    /// `0xCAFE`. An odd digit count is padded with a leading zero.
    fn lex_hex_number(&mut self) -> TokenKind {
        self.advance_by(2);
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
            self.advance();
        }
        let trailing_junk = self.peek().is_some_and(|c| is_ident_char(c, self.dialect));
        if self.pos == start || trailing_junk {
            while self.peek().is_some_and(|c| is_ident_char(c, self.dialect)) {
                self.advance();
            }
            return TokenKind::Error("malformed hex literal".to_owned());
        }
        let mut digits = Vec::with_capacity(self.pos - start + 1);
        if (self.pos - start) % 2 != 0 {
            digits.push(b'0');
        }
        digits.extend_from_slice(&self.src[start..self.pos]);
        decode_hex(&digits).map_or_else(
            || TokenKind::Error("malformed hex literal".to_owned()),
            TokenKind::HexString,
        )
    }

    /// Integer, decimal or scientific literal.
    fn lex_number(&mut self) -> TokenKind {
        let start = self.pos;
        let mut exact_int = true;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some(b'.') {
            let next = self.peek_at(1);
            let leading_dot = start == self.pos;
            if next.is_some_and(|c| c.is_ascii_digit())
                || (!leading_dot && !next.is_some_and(|c| is_ident_char(c, self.dialect)))
            {
                exact_int = false;
                self.advance();
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            exact_int = false;
            self.advance();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.advance();
            }
            if !self.peek().is_some_and(|c| c.is_ascii_digit()) {
                return TokenKind::Error("malformed exponent in numeric literal".to_owned());
            }
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = self.text(start, self.pos);
        if exact_int {
            if let Ok(v) = text.parse::<i64>() {
                return TokenKind::Integer(v);
            }
        }
        TokenKind::Decimal(text)
    }

    /// Identifier or keyword. Words the dialect does not know stay
    /// identifiers.
    fn lex_identifier(&mut self) -> TokenKind {
        let start = self.pos;
        self.advance();
        while self.peek().is_some_and(|c| is_ident_char(c, self.dialect)) {
            self.advance();
        }
        let text = self.text(start, self.pos);
        match Keyword::lookup(&text) {
            Some(kw) if self.dialect.recognizes(kw) => TokenKind::Keyword(kw),
            _ => TokenKind::Id(text),
        }
    }

    /// `:name`, `:1`, `:=` or a bare `:`.
    fn lex_colon(&mut self) -> TokenKind {
        self.advance();
        match self.peek() {
            Some(b'=') => self.single(TokenKind::Assign),
            Some(c) if is_ident_char(c, self.dialect) => {
                let start = self.pos;
                while self.peek().is_some_and(|c| is_ident_char(c, self.dialect)) {
                    self.advance();
                }
                TokenKind::BindParam(self.text(start, self.pos))
            }
            _ => TokenKind::Colon,
        }
    }

    /// MySQL variables; `@` alone (or anywhere in Oracle) is the at-sign.
    fn lex_at(&mut self) -> TokenKind {
        self.advance();
        if self.dialect == Dialect::Oracle {
            return TokenKind::At;
        }
        match self.peek() {
            Some(b'@') => {
                self.advance();
                let start = self.pos;
                while self
                    .peek()
                    .is_some_and(|c| is_ident_char(c, self.dialect) || c == b'.')
                {
                    self.advance();
                }
                if self.pos == start {
                    return TokenKind::Error("missing system variable name after '@@'".to_owned());
                }
                TokenKind::SystemVar(self.text(start, self.pos))
            }
            Some(q @ (b'\'' | b'"')) => match self.lex_string(q) {
                TokenKind::String(name) => TokenKind::UserVar(name),
                other => other,
            },
            Some(b'`') => match self.lex_quoted_ident(b'`') {
                TokenKind::QuotedId(name) => TokenKind::UserVar(name),
                other => other,
            },
            Some(c) if is_ident_char(c, self.dialect) || c == b'.' => {
                let start = self.pos;
                while self
                    .peek()
                    .is_some_and(|c| is_ident_char(c, self.dialect) || c == b'.')
                {
                    self.advance();
                }
                TokenKind::UserVar(self.text(start, self.pos))
            }
            _ => TokenKind::At,
        }
    }

    // -----------------------------------------------------------------------
    // Multi-character operator tokenizers
    // -----------------------------------------------------------------------

    /// `-`, `->`, `->>`.
    fn lex_minus(&mut self) -> TokenKind {
        self.advance();
        if self.peek() != Some(b'>') {
            return TokenKind::Minus;
        }
        self.advance();
        if self.peek() == Some(b'>') {
            self.advance();
            TokenKind::DoubleArrow
        } else {
            TokenKind::Arrow
        }
    }

    /// `<`, `<=`, `<=>`, `<>`, `<<`.
    fn lex_lt(&mut self) -> TokenKind {
        self.advance();
        match self.peek() {
            Some(b'=') => {
                self.advance();
                if self.peek() == Some(b'>') {
                    self.single(TokenKind::NullSafeEq)
                } else {
                    TokenKind::Le
                }
            }
            Some(b'>') => self.single(TokenKind::LtGt),
            Some(b'<') => self.single(TokenKind::ShiftLeft),
            _ => TokenKind::Lt,
        }
    }

    /// `>`, `>=`, `>>`.
    fn lex_gt(&mut self) -> TokenKind {
        self.advance();
        match self.peek() {
            Some(b'=') => self.single(TokenKind::Ge),
            Some(b'>') => self.single(TokenKind::ShiftRight),
            _ => TokenKind::Gt,
        }
    }

    /// Body of a `/*+ ... */` hint comment.
    fn lex_hint(&mut self) -> TokenKind {
        match self.skip_block_comment() {
            Some((body_start, body_end)) => TokenKind::Hint(self.text(body_start + 1, body_end)),
            None => TokenKind::Error("unterminated hint comment".to_owned()),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, SqlError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let tok = self.next_token();
        match tok.kind {
            TokenKind::Eof => {
                self.done = true;
                Some(Ok(tok))
            }
            TokenKind::Error(ref msg) => {
                self.done = true;
                tracing::debug!(
                    target: "duosql.lexer",
                    line = tok.line,
                    col = tok.col,
                    "lexical error: {msg}"
                );
                Some(Err(lex_error(&tok)))
            }
            _ => Some(Ok(tok)),
        }
    }
}

/// Convert an in-band error token into a [`SqlError::Lex`].
#[must_use]
pub fn lex_error(tok: &Token) -> SqlError {
    let message = match &tok.kind {
        TokenKind::Error(msg) => msg.clone(),
        other => format!("unexpected {}", other.describe()),
    };
    SqlError::lex(
        Position::new(tok.line, tok.col, tok.span.start),
        tok.span.len(),
        message,
    )
}

fn offset(pos: usize) -> u32 {
    u32::try_from(pos).unwrap_or(u32::MAX)
}

fn is_ident_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c >= 0x80
}

fn is_ident_char(c: u8, dialect: Dialect) -> bool {
    c.is_ascii_alphanumeric()
        || c == b'_'
        || c == b'$'
        || c >= 0x80
        || (c == b'#' && dialect == Dialect::Oracle)
}

fn decode_hex(digits: &[u8]) -> Option<Vec<u8>> {
    fn nibble(c: u8) -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    }
    digits
        .chunks(2)
        .map(|pair| Some(nibble(pair[0])? << 4 | nibble(*pair.get(1)?)?))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str, dialect: Dialect) -> Vec<TokenKind> {
        Lexer::tokenize(src, dialect)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn mysql(src: &str) -> Vec<TokenKind> {
        kinds(src, Dialect::MySql)
    }

    fn oracle(src: &str) -> Vec<TokenKind> {
        kinds(src, Dialect::Oracle)
    }

    fn lex_err(src: &str, dialect: Dialect) -> SqlError {
        Lexer::tokenize(src, dialect).unwrap_err()
    }

    #[test]
    fn test_lex_numbers() {
        assert_eq!(
            mysql("42 3.14 .5 1e10 1.5E-3 7."),
            vec![
                TokenKind::Integer(42),
                TokenKind::Decimal("3.14".to_owned()),
                TokenKind::Decimal(".5".to_owned()),
                TokenKind::Decimal("1e10".to_owned()),
                TokenKind::Decimal("1.5E-3".to_owned()),
                TokenKind::Decimal("7.".to_owned()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_integer_overflow_becomes_decimal() {
        assert_eq!(
            mysql("99999999999999999999")[0],
            TokenKind::Decimal("99999999999999999999".to_owned())
        );
    }

    #[test]
    fn test_lex_bad_exponent() {
        let err = lex_err("SELECT 1e+", Dialect::MySql);
        assert!(matches!(err, SqlError::Lex { .. }));
        assert!(err.message().contains("exponent"));
    }

    #[test]
    fn test_lex_hex_literals() {
        assert_eq!(
            mysql("X'CAFE' 0xFF 0xABC"),
            vec![
                TokenKind::HexString(vec![0xCA, 0xFE]),
                TokenKind::HexString(vec![0xFF]),
                TokenKind::HexString(vec![0x0A, 0xBC]),
                TokenKind::Eof,
            ]
        );
        assert!(matches!(lex_err("X'CAF'", Dialect::MySql), SqlError::Lex { .. }));
        assert!(matches!(lex_err("0x", Dialect::MySql), SqlError::Lex { .. }));
        assert!(matches!(lex_err("X'GG'", Dialect::MySql), SqlError::Lex { .. }));
    }

    #[test]
    fn test_lex_strings_and_doubling() {
        assert_eq!(
            oracle("'it''s' N'héllo'"),
            vec![
                TokenKind::String("it's".to_owned()),
                TokenKind::NationalString("héllo".to_owned()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_mysql_backslash_escapes() {
        assert_eq!(
            mysql(r"'a\nb\'c\%\_\q'")[0],
            TokenKind::String("a\nb'c\\%\\_q".to_owned())
        );
        // Oracle keeps backslashes verbatim.
        assert_eq!(oracle(r"'a\n'")[0], TokenKind::String(r"a\n".to_owned()));
    }

    #[test]
    fn test_lex_oracle_q_quote() {
        assert_eq!(
            oracle("q'[it's]' Q'!a'b!'"),
            vec![
                TokenKind::String("it's".to_owned()),
                TokenKind::String("a'b".to_owned()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_double_quotes_depend_on_dialect() {
        assert_eq!(mysql("\"x\"")[0], TokenKind::String("x".to_owned()));
        assert_eq!(oracle("\"x\"")[0], TokenKind::QuotedId("x".to_owned()));
        let config = ParserConfig::default().with_ansi_quotes(true);
        let toks = Lexer::tokenize_lossy_with("\"x\"", &config);
        assert_eq!(toks[0].kind, TokenKind::QuotedId("x".to_owned()));
    }

    #[test]
    fn test_lex_backtick_identifier() {
        assert_eq!(mysql("`a``b`")[0], TokenKind::QuotedId("a`b".to_owned()));
        assert_eq!(oracle("`t`")[0], TokenKind::QuotedId("t".to_owned()));
    }

    #[test]
    fn test_lex_unterminated_tokens() {
        for src in ["'abc", "`abc", "/* never closed", "/*+ FULL(t)"] {
            let err = lex_err(src, Dialect::MySql);
            assert!(matches!(err, SqlError::Lex { .. }), "{src}");
        }
        assert!(lex_err("'abc", Dialect::MySql)
            .message()
            .contains("unterminated string"));
    }

    #[test]
    fn test_lex_keywords_per_dialect() {
        assert_eq!(oracle("level")[0], TokenKind::Keyword(Keyword::Level));
        assert_eq!(mysql("level")[0], TokenKind::Id("level".to_owned()));
        assert_eq!(mysql("LIMIT")[0], TokenKind::Keyword(Keyword::Limit));
        assert_eq!(oracle("limit")[0], TokenKind::Id("limit".to_owned()));
        assert_eq!(mysql("select")[0], TokenKind::Keyword(Keyword::Select));
    }

    #[test]
    fn test_lex_identifier_characters() {
        assert_eq!(oracle("emp#1")[0], TokenKind::Id("emp#1".to_owned()));
        assert_eq!(mysql("a$b")[0], TokenKind::Id("a$b".to_owned()));
        assert_eq!(mysql("名字")[0], TokenKind::Id("名字".to_owned()));
    }

    #[test]
    fn test_lex_operators() {
        assert_eq!(
            mysql("<=> != <> <= >= << >> || && := -> ->> => ! ~ ^"),
            vec![
                TokenKind::NullSafeEq,
                TokenKind::Ne,
                TokenKind::LtGt,
                TokenKind::Le,
                TokenKind::Ge,
                TokenKind::ShiftLeft,
                TokenKind::ShiftRight,
                TokenKind::DoublePipe,
                TokenKind::DoubleAmpersand,
                TokenKind::Assign,
                TokenKind::Arrow,
                TokenKind::DoubleArrow,
                TokenKind::FatArrow,
                TokenKind::Bang,
                TokenKind::Tilde,
                TokenKind::Caret,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_parameters_and_variables() {
        assert_eq!(
            mysql("? :name :1 @v @'a b' @@global.max_connections"),
            vec![
                TokenKind::Question,
                TokenKind::BindParam("name".to_owned()),
                TokenKind::BindParam("1".to_owned()),
                TokenKind::UserVar("v".to_owned()),
                TokenKind::UserVar("a b".to_owned()),
                TokenKind::SystemVar("global.max_connections".to_owned()),
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            oracle("emp@remote"),
            vec![
                TokenKind::Id("emp".to_owned()),
                TokenKind::At,
                TokenKind::Id("remote".to_owned()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_comments() {
        assert_eq!(
            mysql("SELECT -- note\n1 # tail\n/* a /* nested */ b */ 2"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Integer(1),
                TokenKind::Integer(2),
                TokenKind::Eof,
            ]
        );
        // MySQL needs whitespace after `--`.
        assert_eq!(
            mysql("1--1"),
            vec![
                TokenKind::Integer(1),
                TokenKind::Minus,
                TokenKind::Minus,
                TokenKind::Integer(1),
                TokenKind::Eof,
            ]
        );
        assert_eq!(oracle("1--1"), vec![TokenKind::Integer(1), TokenKind::Eof]);
    }

    #[test]
    fn test_lex_hint_token() {
        let toks = Lexer::tokenize("SELECT /*+ FULL(t) */ 1", Dialect::Oracle).unwrap();
        assert_eq!(toks[1].kind, TokenKind::Hint(" FULL(t) ".to_owned()));
        assert_eq!(toks[1].lexeme, "/*+ FULL(t) */");
        assert_eq!(toks[2].kind, TokenKind::Integer(1));
    }

    #[test]
    fn test_lex_dot_after_identifier_is_not_a_number() {
        assert_eq!(
            mysql("t.5"),
            vec![
                TokenKind::Id("t".to_owned()),
                TokenKind::Dot,
                TokenKind::Integer(5),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_lex_positions() {
        let toks = Lexer::tokenize("SELECT\n  a,\n  b", Dialect::MySql).unwrap();
        assert_eq!((toks[0].line, toks[0].col), (1, 1));
        assert_eq!((toks[1].line, toks[1].col), (2, 3));
        assert_eq!(toks[1].span, Span::new(9, 10));
        assert_eq!((toks[2].line, toks[2].col), (2, 4));
        assert_eq!((toks[3].line, toks[3].col), (3, 3));
        assert_eq!(toks[1].lexeme, "a");
    }

    #[test]
    fn test_lex_error_position() {
        let err = lex_err("SELECT\n  'oops", Dialect::MySql);
        assert_eq!(err.position(), Some(Position::new(2, 3, 9)));
    }

    #[test]
    fn test_lossy_keeps_error_tokens_and_continues() {
        let toks = Lexer::tokenize_lossy("SELECT 1; SELECT \u{7} ; SELECT 2", Dialect::MySql);
        assert!(toks.iter().any(|t| matches!(t.kind, TokenKind::Error(_))));
        assert_eq!(toks.last().map(|t| &t.kind), Some(&TokenKind::Eof));
        let ints = toks
            .iter()
            .filter(|t| matches!(t.kind, TokenKind::Integer(_)))
            .count();
        assert_eq!(ints, 2);
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let items: Vec<_> = Lexer::new("a \u{7} b", Dialect::MySql).collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn test_tokens_outlive_the_source() {
        let tokens = {
            let owned = String::from("SELECT a FROM t");
            Lexer::tokenize(&owned, Dialect::MySql).unwrap()
        };
        assert_eq!(tokens.len(), 5);
        let lossy = {
            let owned = String::from("SELECT $");
            Lexer::tokenize_lossy_with(&owned, &ParserConfig::new(Dialect::MySql))
        };
        assert!(matches!(lossy[1].kind, TokenKind::Error(_)));
    }
}
