//! The ECMAScript/TypeScript scanner.
//!
//! Converts source text into a stream of tokens that the parser pulls one at
//! a time. All offsets are byte offsets into the source. For every token the
//! scanner records two starts: `full_start`, the position before any leading
//! trivia, and `token_start`, the position of the token's first character.

use crate::char_codes::*;
use arrowhead_ast::syntax_kind::SyntaxKind;
use arrowhead_ast::types::TokenFlags;
use arrowhead_core::text::{TextPos, TextSpan};
use arrowhead_diagnostics::{messages, Diagnostic, DiagnosticCollection, DiagnosticMessage};

/// Saved scanner state for lookahead and speculative parsing.
///
/// Tokens are re-derived from the source on demand, so the position fields
/// plus the current token fully describe the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerState {
    pos: usize,
    full_start: usize,
    token_start: usize,
    token: SyntaxKind,
    token_flags: TokenFlags,
}

/// The scanner converts source text into tokens.
pub struct Scanner<'a> {
    /// The source text being scanned.
    text: &'a str,
    bytes: &'a [u8],
    /// Current position (end of the current token).
    pos: usize,
    /// Start of the current token including leading trivia.
    full_start: usize,
    /// Start of the current token (after leading trivia).
    token_start: usize,
    /// The current token kind.
    token: SyntaxKind,
    /// Token flags for the current token.
    token_flags: TokenFlags,
    /// Diagnostics reported since the last `take_diagnostics`.
    diagnostics: DiagnosticCollection,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source text.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            full_start: 0,
            token_start: 0,
            token: SyntaxKind::Unknown,
            token_flags: TokenFlags::NONE,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Skip a shebang line at the very beginning of the file (e.g., `#!/usr/bin/env node`).
    /// Call this before the first `scan()` call.
    pub fn skip_shebang(&mut self) {
        if self.pos == 0 && self.bytes.starts_with(b"#!") {
            self.pos = 2;
            self.skip_to_line_end();
        }
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.text
    }

    /// Look ahead: save state, call f, restore state and return the result.
    pub fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = self.state();
        let diagnostics_len = self.diagnostics.len();
        let result = f(self);
        self.set_state(saved);
        self.diagnostics.truncate(diagnostics_len);
        result
    }

    /// Try scanning: save state, call f, restore state if the result is None.
    pub fn try_scan<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let saved = self.state();
        let diagnostics_len = self.diagnostics.len();
        let result = f(self);
        if result.is_none() {
            self.set_state(saved);
            self.diagnostics.truncate(diagnostics_len);
        }
        result
    }

    /// Get the current token kind.
    #[inline]
    pub fn token(&self) -> SyntaxKind {
        self.token
    }

    /// The raw source text of the current token.
    #[inline]
    pub fn token_text(&self) -> &'a str {
        &self.text[self.token_start..self.pos]
    }

    /// The current token's value: string and template literals lose their
    /// delimiters, every other token is its raw text. Escapes are not cooked.
    pub fn token_value(&self) -> &'a str {
        let raw = self.token_text();
        let unterminated = self.token_flags.contains(TokenFlags::UNTERMINATED);
        let (head, tail) = match self.token {
            SyntaxKind::StringLiteral | SyntaxKind::NoSubstitutionTemplateLiteral => (1, 1),
            SyntaxKind::TemplateHead => (1, 2),
            SyntaxKind::TemplateMiddle => (1, 2),
            SyntaxKind::TemplateTail => (1, 1),
            _ => return raw,
        };
        let tail = if unterminated { 0 } else { tail };
        if raw.len() < head + tail {
            return "";
        }
        &raw[head..raw.len() - tail]
    }

    /// Start of the current token (after trivia).
    #[inline]
    pub fn token_start(&self) -> TextPos {
        self.token_start as TextPos
    }

    /// End of the current token.
    #[inline]
    pub fn token_end(&self) -> TextPos {
        self.pos as TextPos
    }

    /// Start of the current token including its leading trivia.
    #[inline]
    pub fn full_start(&self) -> TextPos {
        self.full_start as TextPos
    }

    #[inline]
    pub fn token_flags(&self) -> TokenFlags {
        self.token_flags
    }

    /// Whether the current token was preceded by a line break.
    #[inline]
    pub fn has_preceding_line_break(&self) -> bool {
        self.token_flags.contains(TokenFlags::PRECEDING_LINE_BREAK)
    }

    pub fn diagnostics(&self) -> &DiagnosticCollection {
        &self.diagnostics
    }

    /// Take the accumulated diagnostics, leaving an empty collection.
    pub fn take_diagnostics(&mut self) -> DiagnosticCollection {
        std::mem::take(&mut self.diagnostics)
    }

    /// Save the full scanner state.
    #[inline]
    pub fn state(&self) -> ScannerState {
        ScannerState {
            pos: self.pos,
            full_start: self.full_start,
            token_start: self.token_start,
            token: self.token,
            token_flags: self.token_flags,
        }
    }

    /// Restore a state previously returned by [`Scanner::state`].
    #[inline]
    pub fn set_state(&mut self, state: ScannerState) {
        self.pos = state.pos;
        self.full_start = state.full_start;
        self.token_start = state.token_start;
        self.token = state.token;
        self.token_flags = state.token_flags;
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Decode the character at the current position.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    /// Advance past one whole character.
    #[inline]
    fn advance_char(&mut self) {
        self.pos += self.current_char().map_or(1, char::len_utf8);
    }

    #[inline]
    fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    #[inline]
    fn advance(&mut self, len: usize, kind: SyntaxKind) -> SyntaxKind {
        self.pos += len;
        kind
    }

    fn error(&mut self, message: &DiagnosticMessage, start: usize, end: usize) {
        self.diagnostics.add(Diagnostic::new(
            TextSpan::from_bounds(start as TextPos, end as TextPos),
            message,
        ));
    }

    /// U+2028 and U+2029 are encoded as `E2 80 A8` and `E2 80 A9`.
    #[inline]
    fn is_unicode_line_break_at(&self, at: usize) -> bool {
        self.bytes.get(at) == Some(&0xE2)
            && self.bytes.get(at + 1) == Some(&0x80)
            && matches!(self.bytes.get(at + 2).copied(), Some(0xA8 | 0xA9))
    }

    fn contains_line_break(bytes: &[u8]) -> bool {
        memchr::memchr2(b'\n', b'\r', bytes).is_some()
            || memchr::memmem::find(bytes, "\u{2028}".as_bytes()).is_some()
            || memchr::memmem::find(bytes, "\u{2029}".as_bytes()).is_some()
    }

    /// Move to the next line terminator (or the end of input).
    fn skip_to_line_end(&mut self) {
        let mut from = self.pos;
        loop {
            match memchr::memchr3(b'\n', b'\r', 0xE2, &self.bytes[from..]) {
                Some(i) => {
                    let at = from + i;
                    if self.bytes[at] == 0xE2 && !self.is_unicode_line_break_at(at) {
                        from = at + 1;
                        continue;
                    }
                    self.pos = at;
                    return;
                }
                None => {
                    self.pos = self.bytes.len();
                    return;
                }
            }
        }
    }

    fn skip_multi_line_comment(&mut self) {
        let body_start = self.pos + 2;
        match memchr::memmem::find(&self.bytes[body_start..], b"*/") {
            Some(i) => {
                if Self::contains_line_break(&self.bytes[body_start..body_start + i]) {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                }
                self.pos = body_start + i + 2;
            }
            None => {
                if Self::contains_line_break(&self.bytes[body_start..]) {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                }
                self.pos = self.bytes.len();
                self.error(&messages::ASTERISK_SLASH_EXPECTED, self.pos, self.pos);
            }
        }
    }

    /// Skip whitespace and comments (trivia), setting token_flags for line breaks.
    fn skip_trivia(&mut self) {
        while let Some(b) = self.byte_at(0) {
            match b {
                b'\n' | b'\r' => {
                    self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                    self.pos += 1;
                }
                b' ' | b'\t' | 0x0B | 0x0C => {
                    self.pos += 1;
                }
                b'/' => match self.byte_at(1) {
                    Some(b'/') => {
                        self.pos += 2;
                        self.skip_to_line_end();
                    }
                    Some(b'*') => self.skip_multi_line_comment(),
                    _ => return,
                },
                b'<' | b'>' | b'=' | b'|' if self.is_conflict_marker_trivia() => {
                    self.skip_conflict_marker();
                }
                _ if !b.is_ascii() => match self.current_char() {
                    Some(ch) if is_line_break(ch) => {
                        self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
                        self.pos += ch.len_utf8();
                    }
                    Some(ch) if is_white_space_single_line(ch) => {
                        self.pos += ch.len_utf8();
                    }
                    _ => return,
                },
                _ => return,
            }
        }
    }

    /// Scan the next token with `/` read as a division operator.
    pub fn scan(&mut self) -> SyntaxKind {
        self.full_start = self.pos;
        self.token_flags = TokenFlags::NONE;

        self.skip_trivia();
        self.token_start = self.pos;

        let Some(b) = self.byte_at(0) else {
            self.token = SyntaxKind::EndOfFileToken;
            return self.token;
        };

        self.token = match b {
            b'(' => self.advance(1, SyntaxKind::OpenParenToken),
            b')' => self.advance(1, SyntaxKind::CloseParenToken),
            b'{' => self.advance(1, SyntaxKind::OpenBraceToken),
            b'}' => self.advance(1, SyntaxKind::CloseBraceToken),
            b'[' => self.advance(1, SyntaxKind::OpenBracketToken),
            b']' => self.advance(1, SyntaxKind::CloseBracketToken),
            b';' => self.advance(1, SyntaxKind::SemicolonToken),
            b',' => self.advance(1, SyntaxKind::CommaToken),
            b'~' => self.advance(1, SyntaxKind::TildeToken),
            b'@' => self.advance(1, SyntaxKind::AtToken),
            b':' => self.advance(1, SyntaxKind::ColonToken),
            b'#' => self.scan_private_identifier(),

            b'.' => self.scan_dot(),
            b'?' => self.scan_question(),
            b'<' => self.scan_less_than(),
            b'>' => self.advance(1, SyntaxKind::GreaterThanToken),
            b'=' => self.scan_equals(),
            b'!' => self.scan_exclamation(),
            b'+' => self.scan_plus(),
            b'-' => self.scan_minus(),
            b'*' => self.scan_asterisk(),
            b'/' => self.scan_slash(),
            b'%' => self.scan_compound(SyntaxKind::PercentToken, SyntaxKind::PercentEqualsToken),
            b'&' => self.scan_ampersand(),
            b'|' => self.scan_bar(),
            b'^' => self.scan_compound(SyntaxKind::CaretToken, SyntaxKind::CaretEqualsToken),

            b'\'' | b'"' => self.scan_string_literal(b),
            b'`' => self.scan_template(true),

            b'0'..=b'9' => self.scan_number(),

            b'\\' if self.unicode_escape_len().is_some() => self.scan_identifier(),
            _ if b.is_ascii() && is_identifier_start(b as char) => self.scan_identifier(),
            _ => match self.current_char() {
                Some(ch) if is_identifier_start(ch) => self.scan_identifier(),
                _ => self.scan_invalid_character(),
            },
        };

        self.token
    }

    /// Scan the next token, reading a leading `/` or `/=` as the start of a
    /// regular expression literal.
    pub fn scan_allowing_regex(&mut self) -> SyntaxKind {
        match self.scan() {
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => self.rescan_slash_token(),
            token => token,
        }
    }

    fn scan_invalid_character(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.advance_char();
        self.error(&messages::INVALID_CHARACTER, start, self.pos);
        SyntaxKind::Unknown
    }

    // ========================================================================
    // Punctuation
    // ========================================================================

    /// `op` or `op=`.
    fn scan_compound(&mut self, single: SyntaxKind, with_equals: SyntaxKind) -> SyntaxKind {
        if self.byte_at(1) == Some(b'=') {
            self.advance(2, with_equals)
        } else {
            self.advance(1, single)
        }
    }

    fn scan_dot(&mut self) -> SyntaxKind {
        if self.byte_at(1) == Some(b'.') && self.byte_at(2) == Some(b'.') {
            self.advance(3, SyntaxKind::DotDotDotToken)
        } else if self.byte_at(1).is_some_and(is_digit) {
            self.scan_number()
        } else {
            self.advance(1, SyntaxKind::DotToken)
        }
    }

    fn scan_question(&mut self) -> SyntaxKind {
        match self.byte_at(1) {
            Some(b'?') if self.byte_at(2) == Some(b'=') => {
                self.advance(3, SyntaxKind::QuestionQuestionEqualsToken)
            }
            Some(b'?') => self.advance(2, SyntaxKind::QuestionQuestionToken),
            // `a?.5:b` is a conditional, not an optional chain.
            Some(b'.') if !self.byte_at(2).is_some_and(is_digit) => {
                self.advance(2, SyntaxKind::QuestionDotToken)
            }
            _ => self.advance(1, SyntaxKind::QuestionToken),
        }
    }

    fn scan_less_than(&mut self) -> SyntaxKind {
        match self.byte_at(1) {
            Some(b'<') if self.byte_at(2) == Some(b'=') => {
                self.advance(3, SyntaxKind::LessThanLessThanEqualsToken)
            }
            Some(b'<') => self.advance(2, SyntaxKind::LessThanLessThanToken),
            Some(b'=') => self.advance(2, SyntaxKind::LessThanEqualsToken),
            _ => self.advance(1, SyntaxKind::LessThanToken),
        }
    }

    fn scan_equals(&mut self) -> SyntaxKind {
        match self.byte_at(1) {
            Some(b'=') if self.byte_at(2) == Some(b'=') => {
                self.advance(3, SyntaxKind::EqualsEqualsEqualsToken)
            }
            Some(b'=') => self.advance(2, SyntaxKind::EqualsEqualsToken),
            Some(b'>') => self.advance(2, SyntaxKind::EqualsGreaterThanToken),
            _ => self.advance(1, SyntaxKind::EqualsToken),
        }
    }

    fn scan_exclamation(&mut self) -> SyntaxKind {
        match self.byte_at(1) {
            Some(b'=') if self.byte_at(2) == Some(b'=') => {
                self.advance(3, SyntaxKind::ExclamationEqualsEqualsToken)
            }
            Some(b'=') => self.advance(2, SyntaxKind::ExclamationEqualsToken),
            _ => self.advance(1, SyntaxKind::ExclamationToken),
        }
    }

    fn scan_plus(&mut self) -> SyntaxKind {
        match self.byte_at(1) {
            Some(b'+') => self.advance(2, SyntaxKind::PlusPlusToken),
            Some(b'=') => self.advance(2, SyntaxKind::PlusEqualsToken),
            _ => self.advance(1, SyntaxKind::PlusToken),
        }
    }

    fn scan_minus(&mut self) -> SyntaxKind {
        match self.byte_at(1) {
            Some(b'-') => self.advance(2, SyntaxKind::MinusMinusToken),
            Some(b'=') => self.advance(2, SyntaxKind::MinusEqualsToken),
            _ => self.advance(1, SyntaxKind::MinusToken),
        }
    }

    fn scan_asterisk(&mut self) -> SyntaxKind {
        match self.byte_at(1) {
            Some(b'*') if self.byte_at(2) == Some(b'=') => {
                self.advance(3, SyntaxKind::AsteriskAsteriskEqualsToken)
            }
            Some(b'*') => self.advance(2, SyntaxKind::AsteriskAsteriskToken),
            Some(b'=') => self.advance(2, SyntaxKind::AsteriskEqualsToken),
            _ => self.advance(1, SyntaxKind::AsteriskToken),
        }
    }

    fn scan_slash(&mut self) -> SyntaxKind {
        // Comments were consumed as trivia; this is division until the
        // parser asks for a regular expression.
        self.scan_compound(SyntaxKind::SlashToken, SyntaxKind::SlashEqualsToken)
    }

    fn scan_ampersand(&mut self) -> SyntaxKind {
        match self.byte_at(1) {
            Some(b'&') if self.byte_at(2) == Some(b'=') => {
                self.advance(3, SyntaxKind::AmpersandAmpersandEqualsToken)
            }
            Some(b'&') => self.advance(2, SyntaxKind::AmpersandAmpersandToken),
            Some(b'=') => self.advance(2, SyntaxKind::AmpersandEqualsToken),
            _ => self.advance(1, SyntaxKind::AmpersandToken),
        }
    }

    fn scan_bar(&mut self) -> SyntaxKind {
        match self.byte_at(1) {
            Some(b'|') if self.byte_at(2) == Some(b'=') => {
                self.advance(3, SyntaxKind::BarBarEqualsToken)
            }
            Some(b'|') => self.advance(2, SyntaxKind::BarBarToken),
            Some(b'=') => self.advance(2, SyntaxKind::BarEqualsToken),
            _ => self.advance(1, SyntaxKind::BarToken),
        }
    }

    // ========================================================================
    // Strings and templates
    // ========================================================================

    /// Step over the character following a backslash; `\r\n` counts as one
    /// line continuation.
    fn skip_escaped_char(&mut self) {
        if self.byte_at(0) == Some(b'\r') && self.byte_at(1) == Some(b'\n') {
            self.pos += 2;
        } else if !self.is_eof() {
            self.advance_char();
        }
    }

    fn scan_string_literal(&mut self, quote: u8) -> SyntaxKind {
        if quote == b'\'' {
            self.token_flags |= TokenFlags::SINGLE_QUOTE;
        }
        self.pos += 1;
        loop {
            match self.byte_at(0) {
                None | Some(b'\n' | b'\r') => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(&messages::UNTERMINATED_STRING_LITERAL, self.pos, self.pos);
                    break;
                }
                Some(b) if b == quote => {
                    self.pos += 1;
                    break;
                }
                Some(b'\\') => {
                    self.pos += 1;
                    self.skip_escaped_char();
                }
                Some(_) => self.pos += 1,
            }
        }
        SyntaxKind::StringLiteral
    }

    /// Scan template text after a backtick (`head == true`) or after the `}`
    /// closing a substitution.
    fn scan_template(&mut self, head: bool) -> SyntaxKind {
        self.pos += 1;
        loop {
            match self.byte_at(0) {
                None => {
                    self.token_flags |= TokenFlags::UNTERMINATED;
                    self.error(&messages::UNTERMINATED_TEMPLATE_LITERAL, self.pos, self.pos);
                    return if head {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                Some(b'`') => {
                    self.pos += 1;
                    return if head {
                        SyntaxKind::NoSubstitutionTemplateLiteral
                    } else {
                        SyntaxKind::TemplateTail
                    };
                }
                Some(b'$') if self.byte_at(1) == Some(b'{') => {
                    self.pos += 2;
                    return if head {
                        SyntaxKind::TemplateHead
                    } else {
                        SyntaxKind::TemplateMiddle
                    };
                }
                Some(b'\\') => {
                    self.pos += 1;
                    self.skip_escaped_char();
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Rescan the current `}` token as the continuation of a template
    /// literal: `TemplateMiddle` or `TemplateTail`.
    pub fn rescan_template_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::CloseBraceToken {
            return self.token;
        }
        self.pos = self.token_start;
        self.token = self.scan_template(false);
        self.token
    }

    /// Rescan the current `/` or `/=` token as a regular expression literal.
    pub fn rescan_slash_token(&mut self) -> SyntaxKind {
        if !matches!(self.token, SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken) {
            return self.token;
        }
        self.pos = self.token_start + 1;
        let mut in_character_class = false;

        loop {
            let Some(b) = self.byte_at(0) else {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error(
                    &messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
                    self.token_start,
                    self.pos,
                );
                break;
            };
            if b == b'\n' || b == b'\r' || self.is_unicode_line_break_at(self.pos) {
                self.token_flags |= TokenFlags::UNTERMINATED;
                self.error(
                    &messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL,
                    self.token_start,
                    self.pos,
                );
                break;
            }
            match b {
                b'\\' => {
                    self.pos += 1;
                    if !matches!(self.byte_at(0), None | Some(b'\n' | b'\r')) {
                        self.advance_char();
                    }
                    continue;
                }
                b'[' => in_character_class = true,
                b']' => in_character_class = false,
                b'/' if !in_character_class => {
                    self.pos += 1;
                    // Flags
                    self.scan_identifier_parts();
                    break;
                }
                _ => {}
            }
            self.pos += 1;
        }

        self.token = SyntaxKind::RegularExpressionLiteral;
        self.token
    }

    /// Rescan `>` as `>=`, `>>`, `>>=`, `>>>`, or `>>>=`.
    ///
    /// The scanner always produces a single `>` so that nested type argument
    /// lists close one at a time; binary-operator parsing asks for the longer
    /// forms.
    pub fn rescan_greater_than_token(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::GreaterThanToken {
            return self.token;
        }
        self.token = match (self.byte_at(0), self.byte_at(1), self.byte_at(2)) {
            (Some(b'>'), Some(b'>'), Some(b'=')) => {
                self.advance(3, SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken)
            }
            (Some(b'>'), Some(b'>'), _) => {
                self.advance(2, SyntaxKind::GreaterThanGreaterThanGreaterThanToken)
            }
            (Some(b'>'), Some(b'='), _) => {
                self.advance(2, SyntaxKind::GreaterThanGreaterThanEqualsToken)
            }
            (Some(b'>'), _, _) => self.advance(1, SyntaxKind::GreaterThanGreaterThanToken),
            (Some(b'='), _, _) => self.advance(1, SyntaxKind::GreaterThanEqualsToken),
            _ => SyntaxKind::GreaterThanToken,
        };
        self.token
    }

    // ========================================================================
    // Numbers
    // ========================================================================

    fn scan_number(&mut self) -> SyntaxKind {
        let start = self.pos;

        if self.byte_at(0) == Some(b'0') {
            match self.byte_at(1) {
                Some(b'x' | b'X') => {
                    return self.scan_radix_number(TokenFlags::HEX_SPECIFIER, is_hex_digit)
                }
                Some(b'b' | b'B') => {
                    return self.scan_radix_number(TokenFlags::BINARY_SPECIFIER, is_binary_digit)
                }
                Some(b'o' | b'O') => {
                    return self.scan_radix_number(TokenFlags::OCTAL_SPECIFIER, is_octal_digit)
                }
                _ => {}
            }
        }

        let mut is_integer = true;
        if self.byte_at(0) != Some(b'.') {
            self.scan_digits(is_digit);
            // Legacy octal: `017`.
            let digits = &self.bytes[start..self.pos];
            if digits.len() > 1 && digits[0] == b'0' && digits.iter().all(|&d| is_octal_digit(d)) {
                self.token_flags |= TokenFlags::OCTAL;
                return SyntaxKind::NumericLiteral;
            }
        }

        if self.byte_at(0) == Some(b'.') {
            is_integer = false;
            self.pos += 1;
            self.scan_digits(is_digit);
        }

        if matches!(self.byte_at(0), Some(b'e' | b'E')) {
            let sign = usize::from(matches!(self.byte_at(1), Some(b'+' | b'-')));
            if self.byte_at(1 + sign).is_some_and(is_digit) {
                is_integer = false;
                self.token_flags |= TokenFlags::SCIENTIFIC;
                self.pos += 1 + sign;
                self.scan_digits(is_digit);
            }
        }

        if is_integer && self.byte_at(0) == Some(b'n') {
            self.pos += 1;
            return SyntaxKind::BigIntLiteral;
        }

        SyntaxKind::NumericLiteral
    }

    fn scan_radix_number(&mut self, specifier: TokenFlags, is_radix_digit: fn(u8) -> bool) -> SyntaxKind {
        self.pos += 2; // skip 0x / 0b / 0o
        self.token_flags |= specifier;
        self.scan_digits(is_radix_digit);
        if self.byte_at(0) == Some(b'n') {
            self.pos += 1;
            return SyntaxKind::BigIntLiteral;
        }
        SyntaxKind::NumericLiteral
    }

    fn scan_digits(&mut self, is_radix_digit: fn(u8) -> bool) {
        while let Some(b) = self.byte_at(0) {
            if b == b'_' {
                self.token_flags |= TokenFlags::CONTAINS_SEPARATOR;
            } else if !is_radix_digit(b) {
                break;
            }
            self.pos += 1;
        }
    }

    // ========================================================================
    // Identifiers
    // ========================================================================

    /// Length of the `\uXXXX` or `\u{X...}` escape at the current position.
    fn unicode_escape_len(&self) -> Option<usize> {
        if self.byte_at(0) != Some(b'\\') || self.byte_at(1) != Some(b'u') {
            return None;
        }
        if self.byte_at(2) == Some(b'{') {
            let mut len = 3;
            while self.byte_at(len).is_some_and(is_hex_digit) {
                len += 1;
            }
            (len > 3 && self.byte_at(len) == Some(b'}')).then_some(len + 1)
        } else {
            (2..6).all(|i| self.byte_at(i).is_some_and(is_hex_digit)).then_some(6)
        }
    }

    fn scan_identifier_parts(&mut self) {
        while let Some(b) = self.byte_at(0) {
            if b.is_ascii() {
                if is_identifier_part(b as char) {
                    self.pos += 1;
                } else if let Some(len) = self.unicode_escape_len() {
                    self.token_flags |= TokenFlags::UNICODE_ESCAPE;
                    if self.byte_at(2) == Some(b'{') {
                        self.token_flags |= TokenFlags::EXTENDED_UNICODE_ESCAPE;
                    }
                    self.pos += len;
                } else {
                    break;
                }
            } else {
                match self.current_char() {
                    Some(ch) if is_identifier_part(ch) => self.pos += ch.len_utf8(),
                    _ => break,
                }
            }
        }
    }

    fn scan_identifier(&mut self) -> SyntaxKind {
        let start = self.pos;
        self.scan_identifier_parts();
        // An escaped keyword is never the keyword.
        if self.token_flags.contains(TokenFlags::UNICODE_ESCAPE) {
            return SyntaxKind::Identifier;
        }
        SyntaxKind::from_keyword(&self.text[start..self.pos]).unwrap_or(SyntaxKind::Identifier)
    }

    fn scan_private_identifier(&mut self) -> SyntaxKind {
        let starts_name = match self.bytes.get(self.pos + 1) {
            Some(&b) if b.is_ascii() => {
                is_identifier_start(b as char) || (b == b'\\' && self.byte_at(2) == Some(b'u'))
            }
            Some(_) => self.text[self.pos + 1..]
                .chars()
                .next()
                .is_some_and(is_identifier_start),
            None => false,
        };
        if !starts_name {
            return self.scan_invalid_character();
        }
        self.pos += 1;
        self.scan_identifier_parts();
        SyntaxKind::PrivateIdentifier
    }

    // ========================================================================
    // JSX
    // ========================================================================

    /// Extend the current identifier or keyword with `-name` segments, as
    /// in `data-id` or `aria-label`.
    pub fn scan_jsx_identifier(&mut self) -> SyntaxKind {
        if self.token != SyntaxKind::Identifier && !self.token.is_keyword() {
            return self.token;
        }
        let before = self.pos;
        while self.byte_at(0) == Some(b'-') {
            self.pos += 1;
            self.scan_identifier_parts();
        }
        if self.pos != before {
            self.token = SyntaxKind::Identifier;
        }
        self.token
    }

    /// Scan the next token inside JSX children: text, `{`, `<` or `</`.
    pub fn scan_jsx_token(&mut self) -> SyntaxKind {
        self.full_start = self.pos;
        self.token_start = self.pos;
        self.token_flags = TokenFlags::NONE;

        self.token = match self.byte_at(0) {
            None => SyntaxKind::EndOfFileToken,
            Some(b'<') if self.byte_at(1) == Some(b'/') => {
                self.advance(2, SyntaxKind::LessThanSlashToken)
            }
            Some(b'<') => self.advance(1, SyntaxKind::LessThanToken),
            Some(b'{') => self.advance(1, SyntaxKind::OpenBraceToken),
            Some(_) => {
                let rest = &self.bytes[self.pos..];
                let len = memchr::memchr2(b'{', b'<', rest).unwrap_or(rest.len());
                if Self::contains_line_break(&rest[..len]) {
                    self.token_flags |= TokenFlags::PRECEDING_JSX_TEXT_LINE_BREAK;
                }
                self.advance(len, SyntaxKind::JsxText)
            }
        };
        self.token
    }

    /// Scan a JSX attribute value: a quoted string without escapes, or any
    /// ordinary token.
    pub fn scan_jsx_attribute_value(&mut self) -> SyntaxKind {
        let full_start = self.pos;
        self.token_flags = TokenFlags::NONE;
        self.skip_trivia();

        match self.byte_at(0) {
            Some(quote @ (b'"' | b'\'')) => {
                self.full_start = full_start;
                self.token_start = self.pos;
                if quote == b'\'' {
                    self.token_flags |= TokenFlags::SINGLE_QUOTE;
                }
                let body = self.pos + 1;
                match memchr::memchr(quote, &self.bytes[body..]) {
                    Some(i) => self.pos = body + i + 1,
                    None => {
                        self.pos = self.bytes.len();
                        self.token_flags |= TokenFlags::UNTERMINATED;
                        self.error(&messages::UNTERMINATED_STRING_LITERAL, self.pos, self.pos);
                    }
                }
                self.token = SyntaxKind::StringLiteral;
                self.token
            }
            _ => {
                self.pos = full_start;
                self.scan()
            }
        }
    }

    // ========================================================================
    // Conflict markers
    // ========================================================================

    /// Check for conflict markers (<<<<<<<, =======, >>>>>>>, |||||||) at
    /// the start of a line.
    fn is_conflict_marker_trivia(&self) -> bool {
        let Some(ch) = self.byte_at(0) else {
            return false;
        };
        if self.pos + 7 > self.bytes.len() {
            return false;
        }
        if !(1..7).all(|i| self.byte_at(i) == Some(ch)) {
            return false;
        }
        self.pos == 0 || matches!(self.bytes[self.pos - 1], b'\n' | b'\r')
    }

    fn skip_conflict_marker(&mut self) {
        self.skip_to_line_end();
        self.token_flags |= TokenFlags::PRECEDING_LINE_BREAK;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<SyntaxKind> {
        let mut scanner = Scanner::new(text);
        let mut out = Vec::new();
        loop {
            let kind = scanner.scan();
            if kind == SyntaxKind::EndOfFileToken {
                return out;
            }
            out.push(kind);
        }
    }

    #[test]
    fn test_scan_simple_tokens() {
        assert_eq!(
            kinds("( ) { } [ ] ; , : @"),
            vec![
                SyntaxKind::OpenParenToken,
                SyntaxKind::CloseParenToken,
                SyntaxKind::OpenBraceToken,
                SyntaxKind::CloseBraceToken,
                SyntaxKind::OpenBracketToken,
                SyntaxKind::CloseBracketToken,
                SyntaxKind::SemicolonToken,
                SyntaxKind::CommaToken,
                SyntaxKind::ColonToken,
                SyntaxKind::AtToken,
            ]
        );
    }

    #[test]
    fn test_scan_operators() {
        let mut scanner = Scanner::new("+ ++ += - -- -= * ** *= / /= % %= === !== == != =>");
        assert_eq!(scanner.scan(), SyntaxKind::PlusToken);
        assert_eq!(scanner.scan(), SyntaxKind::PlusPlusToken);
        assert_eq!(scanner.scan(), SyntaxKind::PlusEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::MinusToken);
        assert_eq!(scanner.scan(), SyntaxKind::MinusMinusToken);
        assert_eq!(scanner.scan(), SyntaxKind::MinusEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::AsteriskToken);
        assert_eq!(scanner.scan(), SyntaxKind::AsteriskAsteriskToken);
        assert_eq!(scanner.scan(), SyntaxKind::AsteriskEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
        assert_eq!(scanner.scan(), SyntaxKind::SlashEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::PercentToken);
        assert_eq!(scanner.scan(), SyntaxKind::PercentEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::EqualsEqualsEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::ExclamationEqualsEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::EqualsEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::ExclamationEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::EqualsGreaterThanToken);
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_scan_identifier_and_keyword() {
        let mut scanner = Scanner::new("let x = 42;");
        assert_eq!(scanner.scan(), SyntaxKind::LetKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_text(), "x");
        assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert_eq!(scanner.token_text(), "42");
        assert_eq!(scanner.scan(), SyntaxKind::SemicolonToken);
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_scan_positions() {
        let mut scanner = Scanner::new("a  /* c */ bc");
        scanner.scan();
        assert_eq!((scanner.full_start(), scanner.token_start(), scanner.token_end()), (0, 0, 1));
        scanner.scan();
        assert_eq!(scanner.full_start(), 1);
        assert_eq!(scanner.token_start(), 11);
        assert_eq!(scanner.token_end(), 13);
        assert!(!scanner.has_preceding_line_break());
    }

    #[test]
    fn test_scan_unicode_identifier() {
        let mut scanner = Scanner::new("café = \u{2028}ünï");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_text(), "café");
        assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_text(), "ünï");
        assert!(scanner.has_preceding_line_break());
    }

    #[test]
    fn test_scan_escaped_keyword_is_identifier() {
        let mut scanner = Scanner::new(r"\u0069f i\u{66}");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert!(scanner.token_flags().contains(TokenFlags::UNICODE_ESCAPE));
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert!(scanner.token_flags().contains(TokenFlags::EXTENDED_UNICODE_ESCAPE));
    }

    #[test]
    fn test_scan_private_identifier() {
        let mut scanner = Scanner::new("#count # ");
        assert_eq!(scanner.scan(), SyntaxKind::PrivateIdentifier);
        assert_eq!(scanner.token_text(), "#count");
        assert_eq!(scanner.scan(), SyntaxKind::Unknown);
        let diagnostics = scanner.take_diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.diagnostics()[0].is(&messages::INVALID_CHARACTER));
    }

    #[test]
    fn test_scan_string_literal() {
        let mut scanner = Scanner::new(r#""hello" 'wo\'rld'"#);
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_value(), "hello");
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_value(), r"wo\'rld");
        assert!(scanner.token_flags().contains(TokenFlags::SINGLE_QUOTE));
    }

    #[test]
    fn test_scan_unterminated_string() {
        let mut scanner = Scanner::new("'abc\nx");
        assert_eq!(scanner.scan(), SyntaxKind::StringLiteral);
        assert!(scanner.token_flags().contains(TokenFlags::UNTERMINATED));
        assert_eq!(scanner.token_value(), "abc");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert!(scanner.take_diagnostics().diagnostics()[0].is(&messages::UNTERMINATED_STRING_LITERAL));
    }

    #[test]
    fn test_scan_template_literal() {
        let mut scanner = Scanner::new("`hello`");
        assert_eq!(scanner.scan(), SyntaxKind::NoSubstitutionTemplateLiteral);
        assert_eq!(scanner.token_value(), "hello");
    }

    #[test]
    fn test_scan_template_spans() {
        let mut scanner = Scanner::new("`a${x}b${y}c`");
        assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
        assert_eq!(scanner.token_value(), "a");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.rescan_template_token(), SyntaxKind::TemplateMiddle);
        assert_eq!(scanner.token_text(), "}b${");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.rescan_template_token(), SyntaxKind::TemplateTail);
        assert_eq!(scanner.token_value(), "c");
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_scan_number_formats() {
        let mut scanner = Scanner::new("42 3.14 .5 1e10 0xff 0b1010 0o777 1_000 017");
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert_eq!(scanner.token_text(), "42");
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert_eq!(scanner.token_text(), "3.14");
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert_eq!(scanner.token_text(), ".5");
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert!(scanner.token_flags().contains(TokenFlags::SCIENTIFIC));
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert!(scanner.token_flags().contains(TokenFlags::HEX_SPECIFIER));
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert!(scanner.token_flags().contains(TokenFlags::BINARY_SPECIFIER));
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert!(scanner.token_flags().contains(TokenFlags::OCTAL_SPECIFIER));
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert!(scanner.token_flags().contains(TokenFlags::CONTAINS_SEPARATOR));
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
        assert!(scanner.token_flags().contains(TokenFlags::OCTAL));
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_scan_bigint() {
        let mut scanner = Scanner::new("42n 0xFFn 1.5");
        assert_eq!(scanner.scan(), SyntaxKind::BigIntLiteral);
        assert_eq!(scanner.token_text(), "42n");
        assert_eq!(scanner.scan(), SyntaxKind::BigIntLiteral);
        assert_eq!(scanner.token_text(), "0xFFn");
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    }

    #[test]
    fn test_scan_comments() {
        let mut scanner = Scanner::new("// comment\nlet /* block */ x /* multi\nline */ y");
        assert_eq!(scanner.scan(), SyntaxKind::LetKeyword);
        assert!(scanner.has_preceding_line_break());
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert!(!scanner.has_preceding_line_break());
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert!(scanner.has_preceding_line_break());
    }

    #[test]
    fn test_scan_unterminated_comment() {
        let mut scanner = Scanner::new("a /* never closed");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
        assert!(scanner.take_diagnostics().diagnostics()[0].is(&messages::ASTERISK_SLASH_EXPECTED));
    }

    #[test]
    fn test_scan_regex_mode() {
        let mut scanner = Scanner::new("/ab[/]c/gi / 2");
        assert_eq!(scanner.scan_allowing_regex(), SyntaxKind::RegularExpressionLiteral);
        assert_eq!(scanner.token_text(), "/ab[/]c/gi");
        assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    }

    #[test]
    fn test_scan_unterminated_regex() {
        let mut scanner = Scanner::new("/abc\n");
        assert_eq!(scanner.scan_allowing_regex(), SyntaxKind::RegularExpressionLiteral);
        assert!(scanner.token_flags().contains(TokenFlags::UNTERMINATED));
        assert!(scanner
            .take_diagnostics()
            .diagnostics()[0]
            .is(&messages::UNTERMINATED_REGULAR_EXPRESSION_LITERAL));
    }

    #[test]
    fn test_rescan_greater_than() {
        let mut scanner = Scanner::new(">>>= >> >=");
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(
            scanner.rescan_greater_than_token(),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken
        );
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(scanner.rescan_greater_than_token(), SyntaxKind::GreaterThanGreaterThanToken);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(scanner.rescan_greater_than_token(), SyntaxKind::GreaterThanEqualsToken);
    }

    #[test]
    fn test_scan_dot_variations() {
        let mut scanner = Scanner::new(". ... ?. a?.5:b");
        assert_eq!(scanner.scan(), SyntaxKind::DotToken);
        assert_eq!(scanner.scan(), SyntaxKind::DotDotDotToken);
        assert_eq!(scanner.scan(), SyntaxKind::QuestionDotToken);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::QuestionToken);
        assert_eq!(scanner.scan(), SyntaxKind::NumericLiteral);
    }

    #[test]
    fn test_scan_logical_assignment() {
        let mut scanner = Scanner::new("??= ||= &&= ??");
        assert_eq!(scanner.scan(), SyntaxKind::QuestionQuestionEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::BarBarEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::AmpersandAmpersandEqualsToken);
        assert_eq!(scanner.scan(), SyntaxKind::QuestionQuestionToken);
    }

    #[test]
    fn test_shebang() {
        let mut scanner = Scanner::new("#!/usr/bin/env node\nlet x = 1;");
        scanner.skip_shebang();
        assert_eq!(scanner.scan(), SyntaxKind::LetKeyword);
        assert!(scanner.has_preceding_line_break());
    }

    #[test]
    fn test_conflict_marker_is_trivia() {
        let mut scanner = Scanner::new("a\n<<<<<<< HEAD\nb");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_text(), "b");
    }

    #[test]
    fn test_scan_jsx_text() {
        let mut scanner = Scanner::new("<a>Hello World{x}</a>");
        assert_eq!(scanner.scan(), SyntaxKind::LessThanToken);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::GreaterThanToken);
        assert_eq!(scanner.scan_jsx_token(), SyntaxKind::JsxText);
        assert_eq!(scanner.token_text(), "Hello World");
        assert_eq!(scanner.scan_jsx_token(), SyntaxKind::OpenBraceToken);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
        assert_eq!(scanner.scan_jsx_token(), SyntaxKind::LessThanSlashToken);
    }

    #[test]
    fn test_scan_jsx_identifier_and_attribute() {
        let mut scanner = Scanner::new("data-id='x\ny' class");
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
        assert_eq!(scanner.scan_jsx_identifier(), SyntaxKind::Identifier);
        assert_eq!(scanner.token_text(), "data-id");
        assert_eq!(scanner.scan(), SyntaxKind::EqualsToken);
        assert_eq!(scanner.scan_jsx_attribute_value(), SyntaxKind::StringLiteral);
        assert_eq!(scanner.token_text(), "'x\ny'");
        assert_eq!(scanner.scan(), SyntaxKind::ClassKeyword);
        assert_eq!(scanner.scan_jsx_identifier(), SyntaxKind::ClassKeyword);
    }

    #[test]
    fn test_look_ahead() {
        let mut scanner = Scanner::new("let x = 1;");
        scanner.scan(); // let
        let next = scanner.look_ahead(|s| s.scan());
        assert_eq!(next, SyntaxKind::Identifier);
        assert_eq!(scanner.token(), SyntaxKind::LetKeyword);
        assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    }

    #[test]
    fn test_try_scan_rewinds_diagnostics() {
        let mut scanner = Scanner::new("a 'open");
        scanner.scan();
        let result: Option<()> = scanner.try_scan(|s| {
            s.scan();
            None
        });
        assert!(result.is_none());
        assert!(scanner.diagnostics().is_empty());
        assert_eq!(scanner.token(), SyntaxKind::Identifier);
    }

    #[test]
    fn test_state_round_trip() {
        let mut scanner = Scanner::new("a + b");
        scanner.scan();
        let saved = scanner.state();
        scanner.scan();
        scanner.scan();
        scanner.set_state(saved);
        assert_eq!(scanner.token_text(), "a");
        assert_eq!(scanner.scan(), SyntaxKind::PlusToken);
    }
}
