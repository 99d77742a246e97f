//! The parser state machine.
//!
//! [`Parser`] owns the scanner, the diagnostic sink and the recursion depth
//! counter. Every parse routine is a method on it; the grammar is split over
//! the sibling modules (`statements`, `expressions`, `cover`, `types`,
//! `declarations`, `jsx`) which each add an `impl` block.
//!
//! Node positions come from [`Mark`]: a routine takes a mark at the first
//! token of its node and calls [`Parser::finish`] once the last token has been
//! consumed. A node starts at its first token (leading trivia excluded) and
//! ends where its last token ends.

use arrowhead_ast::node::*;
use arrowhead_ast::syntax_kind::SyntaxKind;
use arrowhead_ast::types::*;
use arrowhead_ast::NodeFactory;
use arrowhead_core::text::{TextPos, TextSpan};
use arrowhead_diagnostics::messages;
use arrowhead_diagnostics::{Diagnostic, DiagnosticCollection, DiagnosticMessage};
use arrowhead_options::ParseOptions;
use arrowhead_scanner::{Scanner, ScannerState};
use bumpalo::Bump;
use tracing::{debug, trace};

use crate::context::Context;

/// Maximum nesting depth of guarded parse routines. Past this depth the
/// parser reports one diagnostic and skips to the end of input instead of
/// overflowing the stack.
pub const MAX_NESTING_DEPTH: u32 = 500;

/// Minimum stack space left before a guarded routine runs (100KB red zone).
const STACK_RED_ZONE: usize = 100 * 1024;

/// Stack segment allocated when the red zone is reached (1MB).
const STACK_GROWTH: usize = 1024 * 1024;

/// The outcome of a parse: a complete tree plus every diagnostic in source
/// order of discovery.
#[derive(Debug)]
pub struct ParseResult<'a> {
    pub root: &'a SourceBody<'a>,
    pub diagnostics: DiagnosticCollection,
}

impl ParseResult<'_> {
    /// Whether any error-category diagnostic was reported. Warnings alone
    /// leave this false.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}

/// Start of a node under construction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    pub(crate) pos: TextPos,
    diagnostics_len: usize,
}

/// A saved parser position for speculative parsing.
#[derive(Clone, Copy)]
pub(crate) struct Checkpoint {
    scanner: ScannerState,
    diagnostics_len: usize,
    depth_exceeded: bool,
}

/// A single-pass recursive descent parser over one source text.
pub struct Parser<'a> {
    pub(crate) factory: NodeFactory<'a>,
    pub(crate) scanner: Scanner<'a>,
    pub(crate) options: ParseOptions,
    pub(crate) diagnostics: DiagnosticCollection,
    depth: u32,
    depth_exceeded: bool,
}

impl<'a> Parser<'a> {
    /// Create a parser over `source`, allocating nodes in `arena`.
    pub fn new(arena: &'a Bump, source: &'a str, options: ParseOptions) -> Self {
        Self {
            factory: NodeFactory::new(arena),
            scanner: Scanner::new(source),
            options,
            diagnostics: DiagnosticCollection::new(),
            depth: 0,
            depth_exceeded: false,
        }
    }

    /// Parse the whole source text.
    pub fn parse(mut self) -> ParseResult<'a> {
        let ctx = Context::from_options(&self.options);
        debug!(
            len = self.scanner.source().len(),
            module = ctx.is_module(),
            strict = ctx.is_strict(),
            jsx = ctx.contains(Context::JSX),
            "parse start"
        );

        self.scanner.skip_shebang();
        self.next_token_with(Context::ALLOW_REGEXP);

        let (kind, statements) = if ctx.is_module() {
            (SyntaxKind::ModuleBody, self.parse_module_body(ctx))
        } else {
            (SyntaxKind::ScriptBody, self.parse_script_body(ctx))
        };
        self.flush_scanner_diagnostics();

        let end = self.scanner.source().len() as TextPos;
        let mut data = NodeData::new(kind, 0, end);
        if !self.diagnostics.is_empty() {
            data = data.with_flags(NodeFlags::HAS_ERRORS);
        }
        let root = self.factory.alloc(self.factory.create_source_body(data, statements));

        debug!(
            statements = root.statements.len(),
            diagnostics = self.diagnostics.len(),
            "parse finished"
        );
        ParseResult {
            root,
            diagnostics: self.diagnostics,
        }
    }

    // ========================================================================
    // Token management
    // ========================================================================

    /// The kind of the current token.
    #[inline]
    pub(crate) fn token(&self) -> SyntaxKind {
        self.scanner.token()
    }

    /// Start of the current token, after its leading trivia.
    #[inline]
    pub(crate) fn token_start(&self) -> TextPos {
        self.scanner.token_start()
    }

    /// Source text of the current token.
    #[inline]
    pub(crate) fn token_text(&self) -> &'a str {
        self.scanner.token_text()
    }

    /// Span of the current token, for diagnostics.
    #[inline]
    pub(crate) fn token_span(&self) -> TextSpan {
        TextSpan::from_bounds(self.scanner.token_start(), self.scanner.token_end())
    }

    /// Whether a line terminator occurs between the previous token and the
    /// current one.
    #[inline]
    pub(crate) fn has_preceding_line_break(&self) -> bool {
        self.scanner.has_preceding_line_break()
    }

    /// Move scanner diagnostics for the token being consumed into the sink,
    /// so they count against the node that consumes it.
    pub(crate) fn flush_scanner_diagnostics(&mut self) {
        if !self.scanner.diagnostics().is_empty() {
            let pending = self.scanner.take_diagnostics();
            self.diagnostics.extend(pending);
        }
    }

    /// Consume the current token and scan the next one; `/` scans as a
    /// division operator and is rescanned where an expression may start.
    pub(crate) fn next_token(&mut self) -> SyntaxKind {
        self.flush_scanner_diagnostics();
        self.scanner.scan()
    }

    /// Like [`Parser::next_token`], but scans a regular expression literal
    /// when `ctx` allows one.
    pub(crate) fn next_token_with(&mut self, ctx: Context) -> SyntaxKind {
        self.flush_scanner_diagnostics();
        if ctx.contains(Context::ALLOW_REGEXP) {
            self.scanner.scan_allowing_regex()
        } else {
            self.scanner.scan()
        }
    }

    /// Consume the current token if it is `kind`, otherwise report
    /// `'kind' expected` without consuming.
    pub(crate) fn parse_expected(&mut self, kind: SyntaxKind) -> bool {
        if self.token() == kind {
            self.next_token();
            true
        } else {
            self.error_expected(kind);
            false
        }
    }

    /// Consume the current token if it is `kind`.
    pub(crate) fn parse_optional(&mut self, kind: SyntaxKind) -> bool {
        if self.token() == kind {
            self.next_token();
            true
        } else {
            false
        }
    }

    /// Whether automatic semicolon insertion applies at the current token.
    pub(crate) fn can_parse_semicolon(&self) -> bool {
        match self.token() {
            SyntaxKind::SemicolonToken | SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken => true,
            _ => self.has_preceding_line_break(),
        }
    }

    /// Consume a `;`, or report `';' expected` where automatic semicolon
    /// insertion does not apply.
    pub(crate) fn parse_semicolon(&mut self) {
        if self.token() == SyntaxKind::SemicolonToken {
            self.next_token();
        } else if !self.can_parse_semicolon() {
            self.error_expected(SyntaxKind::SemicolonToken);
        }
    }

    // ========================================================================
    // Node positions
    // ========================================================================

    /// Mark the start of a node at the current token.
    #[inline]
    pub(crate) fn mark(&self) -> Mark {
        Mark {
            pos: self.scanner.token_start(),
            diagnostics_len: self.diagnostics.len(),
        }
    }

    /// Header for a node that started at `mark` and ends with the last
    /// consumed token. Stamps `HAS_ERRORS` if any diagnostic was appended
    /// since the mark was taken.
    pub(crate) fn finish(&self, mark: Mark, kind: SyntaxKind) -> NodeData {
        let end = self.scanner.full_start().max(mark.pos);
        let data = NodeData::new(kind, mark.pos, end);
        if self.diagnostics.len() > mark.diagnostics_len {
            data.with_flags(NodeFlags::HAS_ERRORS)
        } else {
            data
        }
    }

    /// A zero-width header at the current token, used for missing nodes.
    pub(crate) fn missing_data(&self, kind: SyntaxKind) -> NodeData {
        let pos = self.token_start();
        NodeData::new(kind, pos, pos).with_flags(NodeFlags::HAS_ERRORS)
    }

    /// An empty identifier standing in for one that was expected.
    pub(crate) fn missing_identifier(&self) -> Identifier<'a> {
        self.factory
            .create_identifier(self.missing_data(SyntaxKind::Identifier), "", None)
    }

    pub(crate) fn missing_expression(&self) -> Expression<'a> {
        Expression::Identifier(self.missing_identifier())
    }

    pub(crate) fn missing_statement(&self) -> Statement<'a> {
        self.factory
            .create_empty_statement(self.missing_data(SyntaxKind::EmptyStatement))
    }

    // ========================================================================
    // Speculation
    // ========================================================================

    /// Save the scanner position and diagnostic count.
    pub(crate) fn checkpoint(&mut self) -> Checkpoint {
        self.flush_scanner_diagnostics();
        Checkpoint {
            scanner: self.scanner.state(),
            diagnostics_len: self.diagnostics.len(),
            depth_exceeded: self.depth_exceeded,
        }
    }

    /// Restore a checkpoint, dropping every diagnostic reported since.
    pub(crate) fn rewind(&mut self, checkpoint: Checkpoint) {
        self.scanner.set_state(checkpoint.scanner);
        let _ = self.scanner.take_diagnostics();
        self.diagnostics.truncate(checkpoint.diagnostics_len);
        self.depth_exceeded = checkpoint.depth_exceeded;
    }

    /// Run `f` and always restore the parser afterwards.
    pub(crate) fn look_ahead<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let checkpoint = self.checkpoint();
        let result = f(self);
        self.rewind(checkpoint);
        result
    }

    /// Run `f` and keep its progress only if it returns `Some`.
    pub(crate) fn try_parse<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.checkpoint();
        let result = f(self);
        if result.is_none() {
            trace!(pos = self.token_start(), "speculative parse rolled back");
            self.rewind(checkpoint);
        }
        result
    }

    /// `look_ahead` for the common "what is the next token" question.
    pub(crate) fn next_token_is(&mut self, predicate: impl FnOnce(&Self) -> bool) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            predicate(p)
        })
    }

    // ========================================================================
    // Depth guard
    // ========================================================================

    /// Run a recursive parse routine one level deeper.
    ///
    /// Returns `None` once [`MAX_NESTING_DEPTH`] is reached: the first time
    /// this happens a diagnostic is reported, and the rest of the input is
    /// skipped so every enclosing routine unwinds quickly. Below the limit the
    /// routine runs on a freshly allocated stack segment whenever less than
    /// [`STACK_RED_ZONE`] remains, so the limit holds on any thread.
    pub(crate) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> Option<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            if !self.depth_exceeded {
                self.depth_exceeded = true;
                debug!(pos = self.token_start(), depth = self.depth, "nesting depth exceeded");
                self.diagnostics.add(Diagnostic::new(
                    self.token_span(),
                    &messages::MAXIMUM_NESTING_DEPTH_EXCEEDED,
                ));
            }
            while self.token() != SyntaxKind::EndOfFileToken {
                self.next_token();
            }
            return None;
        }
        self.depth += 1;
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || f(self));
        self.depth -= 1;
        Some(result)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Report at `span`. A second error starting at the same position as the
    /// previous one is dropped.
    pub(crate) fn error_at(&mut self, span: TextSpan, message: &DiagnosticMessage) {
        self.push_diagnostic(Diagnostic::new(span, message));
    }

    /// Report at the current token.
    pub(crate) fn error_at_token(&mut self, message: &DiagnosticMessage) {
        self.error_at(self.token_span(), message);
    }

    /// Report a message whose template takes one argument.
    pub(crate) fn error_with_argument_at(
        &mut self,
        span: TextSpan,
        message: &DiagnosticMessage,
        argument: &str,
    ) {
        self.push_diagnostic(Diagnostic::with_argument(span, message, argument));
    }

    /// `'<kind>' expected` at the current token.
    pub(crate) fn error_expected(&mut self, kind: SyntaxKind) {
        let text = kind.token_text().unwrap_or("token");
        self.error_with_argument_at(self.token_span(), &messages::_0_EXPECTED, text);
    }

    fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        if let Some(last) = self.diagnostics.last() {
            if last.span.start == diagnostic.span.start {
                return;
            }
        }
        self.diagnostics.add(diagnostic);
    }

    // ========================================================================
    // Identifiers and literals
    // ========================================================================

    /// Whether the current token can be used as an identifier reference or
    /// binding in this context.
    pub(crate) fn is_identifier(&self, ctx: Context) -> bool {
        match self.token() {
            SyntaxKind::YieldKeyword if ctx.contains(Context::YIELD) => false,
            SyntaxKind::AwaitKeyword if ctx.contains(Context::AWAIT) => false,
            token => token.is_identifier_like(),
        }
    }

    /// Parse an identifier. A reserved word is reported and left in place;
    /// a zero-width missing identifier is returned instead.
    pub(crate) fn parse_identifier(&mut self, ctx: Context) -> Identifier<'a> {
        if self.is_identifier(ctx) {
            return self.parse_identifier_token();
        }
        let token = self.token();
        if token.is_reserved_word()
            || matches!(token, SyntaxKind::YieldKeyword | SyntaxKind::AwaitKeyword)
        {
            let text = self.token_text();
            self.error_with_argument_at(
                self.token_span(),
                &messages::IDENTIFIER_EXPECTED_0_IS_A_RESERVED_WORD,
                text,
            );
        } else {
            self.error_at_token(&messages::IDENTIFIER_EXPECTED);
        }
        self.missing_identifier()
    }

    /// Parse any identifier name, keywords included (property names after
    /// `.`, import/export specifiers, labels of `new.target`).
    pub(crate) fn parse_identifier_name(&mut self) -> Identifier<'a> {
        let token = self.token();
        if token == SyntaxKind::Identifier || token.is_keyword() {
            self.parse_identifier_token()
        } else {
            self.error_at_token(&messages::IDENTIFIER_EXPECTED);
            self.missing_identifier()
        }
    }

    /// Consume the current token as an identifier node. Keywords keep their
    /// kind in `original_keyword_kind`.
    pub(crate) fn parse_identifier_token(&mut self) -> Identifier<'a> {
        let mark = self.mark();
        let token = self.token();
        let text = self.token_text();
        let (kind, original_keyword_kind) = match token {
            SyntaxKind::Identifier => (SyntaxKind::Identifier, None),
            SyntaxKind::PrivateIdentifier => (SyntaxKind::PrivateIdentifier, None),
            keyword => (SyntaxKind::Identifier, Some(keyword)),
        };
        self.next_token();
        self.factory
            .create_identifier(self.finish(mark, kind), text, original_keyword_kind)
    }

    /// Consume the current literal token.
    pub(crate) fn parse_literal(&mut self) -> Literal<'a> {
        let mark = self.mark();
        let kind = self.token();
        let text = self.token_text();
        let flags = self.scanner.token_flags() - TokenFlags::PRECEDING_LINE_BREAK;
        self.next_token();
        self.factory.create_literal(self.finish(mark, kind), text, flags)
    }

    /// Source text covered by `data`.
    pub(crate) fn text_of(&self, data: &NodeData) -> &'a str {
        let source = self.scanner.source();
        source
            .get(data.range.pos as usize..data.range.end as usize)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser<'a>(arena: &'a Bump, source: &'a str) -> Parser<'a> {
        let mut parser = Parser::new(arena, source, ParseOptions::script());
        parser.next_token_with(Context::ALLOW_REGEXP);
        parser
    }

    #[test]
    fn test_mark_and_finish_exclude_leading_trivia() {
        let arena = Bump::new();
        let mut p = parser(&arena, "   foo bar");
        let mark = p.mark();
        p.next_token();
        let data = p.finish(mark, SyntaxKind::Identifier);
        assert_eq!(data.range.pos, 3);
        assert_eq!(data.range.end, 6);
        assert!(!data.has_errors());
    }

    #[test]
    fn test_finish_without_tokens_is_zero_width() {
        let arena = Bump::new();
        let p = parser(&arena, "a  b");
        let mark = p.mark();
        let data = p.finish(mark, SyntaxKind::Identifier);
        assert_eq!(data.range.pos, data.range.end);
    }

    #[test]
    fn test_try_parse_rolls_back_tokens_and_diagnostics() {
        let arena = Bump::new();
        let mut p = parser(&arena, "a b c");
        let result: Option<()> = p.try_parse(|p| {
            p.next_token();
            p.error_at_token(&messages::UNEXPECTED_TOKEN);
            None
        });
        assert!(result.is_none());
        assert_eq!(p.token_text(), "a");
        assert!(p.diagnostics.is_empty());

        let kept = p.try_parse(|p| {
            p.next_token();
            Some(p.token_text())
        });
        assert_eq!(kept, Some("b"));
        assert_eq!(p.token_text(), "b");
    }

    #[test]
    fn test_look_ahead_never_consumes() {
        let arena = Bump::new();
        let mut p = parser(&arena, "x => y");
        assert!(p.next_token_is(|p| p.token() == SyntaxKind::EqualsGreaterThanToken));
        assert_eq!(p.token(), SyntaxKind::Identifier);
    }

    #[test]
    fn test_same_position_errors_are_deduplicated() {
        let arena = Bump::new();
        let mut p = parser(&arena, "x");
        p.error_expected(SyntaxKind::SemicolonToken);
        p.error_expected(SyntaxKind::CloseParenToken);
        assert_eq!(p.diagnostics.len(), 1);
    }

    #[test]
    fn test_scanner_diagnostics_flagged_on_consuming_node() {
        let arena = Bump::new();
        let mut p = parser(&arena, "'open");
        let outer = p.mark();
        let literal = p.parse_literal();
        assert!(literal.data.has_errors());
        assert!(p.finish(outer, SyntaxKind::ExpressionStatement).has_errors());
    }

    #[test]
    fn test_reserved_word_is_not_consumed_as_identifier() {
        let arena = Bump::new();
        let mut p = parser(&arena, "if");
        let id = p.parse_identifier(Context::NONE);
        assert!(id.is_missing());
        assert_eq!(p.token(), SyntaxKind::IfKeyword);
        assert!(p.diagnostics.diagnostics()[0].is(&messages::IDENTIFIER_EXPECTED_0_IS_A_RESERVED_WORD));
    }
}
