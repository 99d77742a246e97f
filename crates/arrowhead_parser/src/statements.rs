//! Statement dispatch.
//!
//! Three entry points mirror the three grammatical positions a statement can
//! occupy: module items (top level of a module), statement-list items
//! (anywhere a declaration may appear) and single statements (loop bodies,
//! `if` branches, labeled bodies). Each one handles what only it may see and
//! delegates the rest to the next.

use arrowhead_ast::node::*;
use arrowhead_ast::syntax_kind::SyntaxKind;
use arrowhead_ast::types::*;
use arrowhead_diagnostics::messages;
use tracing::trace;

use crate::context::Context;
use crate::declarations::DeclarationStart;
use crate::parser::{Mark, Parser};

/// Where a single statement is being parsed. Function declarations are
/// accepted in `IfBranch` and `LabeledBody` under sloppy web-compatible
/// semantics and rejected everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatementPosition {
    Normal,
    IfBranch,
    LabeledBody,
}

type ItemParser<'a> = fn(&mut Parser<'a>, Context) -> Statement<'a>;

fn is_close_brace(token: SyntaxKind) -> bool {
    token == SyntaxKind::CloseBraceToken
}

fn is_clause_end(token: SyntaxKind) -> bool {
    matches!(
        token,
        SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword | SyntaxKind::CloseBraceToken
    )
}

fn is_use_strict(text: &str) -> bool {
    text.len() == 12 && text.get(1..11) == Some("use strict")
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Statement lists
    // ========================================================================

    pub(crate) fn parse_script_body(&mut self, ctx: Context) -> NodeList<'a, Statement<'a>> {
        self.parse_statement_list(ctx, true, |_| false, Self::parse_statement_list_item)
    }

    pub(crate) fn parse_module_body(&mut self, ctx: Context) -> NodeList<'a, Statement<'a>> {
        self.parse_statement_list(ctx, true, |_| false, Self::parse_module_item)
    }

    /// Statements of a function body, directive prologue included.
    pub(crate) fn parse_function_body_statements(&mut self, ctx: Context) -> NodeList<'a, Statement<'a>> {
        self.parse_statement_list(ctx, true, is_close_brace, Self::parse_statement_list_item)
    }

    /// Parse items until `is_list_end` or end of input. Tokens that cannot
    /// start a statement are reported and skipped one at a time.
    fn parse_statement_list(
        &mut self,
        ctx: Context,
        directives: bool,
        is_list_end: fn(SyntaxKind) -> bool,
        parse_item: ItemParser<'a>,
    ) -> NodeList<'a, Statement<'a>> {
        let mut ctx = ctx;
        let mut in_prologue = directives;
        let mut statements = Vec::new();

        loop {
            let token = self.token();
            if token == SyntaxKind::EndOfFileToken || is_list_end(token) {
                break;
            }
            if !token.can_start_statement() {
                let message = if token == SyntaxKind::PrivateIdentifier {
                    &messages::PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES
                } else {
                    &messages::DECLARATION_OR_STATEMENT_EXPECTED
                };
                self.error_at_token(message);
                self.next_token_with(ctx.with(Context::ALLOW_REGEXP));
                continue;
            }

            let start = self.token_start();
            let statement = match self.nested(|p| parse_item(p, ctx)) {
                Some(statement) => statement,
                None => self.missing_statement(),
            };
            if in_prologue {
                in_prologue = self.directive_prologue_entry(&statement, &mut ctx);
            }
            statements.push(statement);

            if self.token_start() == start && self.token() != SyntaxKind::EndOfFileToken {
                self.next_token_with(ctx.with(Context::ALLOW_REGEXP));
            }
        }

        self.factory.alloc_list(statements)
    }

    /// Handle one statement of a directive prologue. Returns whether the
    /// prologue continues past it.
    fn directive_prologue_entry(&mut self, statement: &Statement<'a>, ctx: &mut Context) -> bool {
        let Statement::ExpressionStatement(statement) = statement else {
            return false;
        };
        let Expression::Literal(literal) = statement.expression else {
            return false;
        };
        if literal.data.kind != SyntaxKind::StringLiteral {
            return false;
        }
        if is_use_strict(literal.text) {
            if ctx.is_module() {
                self.error_at(literal.data.range.to_span(), &messages::UNNECESSARY_USE_STRICT);
            } else {
                trace!(pos = literal.data.range.pos, "use strict directive");
                *ctx = ctx.with(Context::STRICT);
            }
        }
        true
    }

    // ========================================================================
    // Module items and statement-list items
    // ========================================================================

    pub(crate) fn parse_module_item(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        match self.token() {
            SyntaxKind::ImportKeyword if self.next_token_starts_import_declaration() => {
                self.parse_import_declaration(ctx, DeclarationStart::new(mark))
            }
            SyntaxKind::ExportKeyword => self.parse_export_declaration(ctx, DeclarationStart::new(mark)),
            _ => self.parse_statement_list_item(ctx),
        }
    }

    pub(crate) fn parse_statement_list_item(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        self.parse_declaration_item(ctx, DeclarationStart::new(mark))
    }

    /// Dispatch a statement-list item whose prefix (`declare`, `abstract`,
    /// `export`) has already been consumed into `start`.
    pub(crate) fn parse_declaration_item(&mut self, ctx: Context, start: DeclarationStart) -> Statement<'a> {
        trace!(pos = self.token_start(), token = ?self.token(), "statement list item");
        match self.token() {
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(ctx, start),
            SyntaxKind::AsyncKeyword if self.next_token_is_function_on_same_line() => {
                self.parse_function_declaration(ctx, start)
            }
            SyntaxKind::AtToken | SyntaxKind::ClassKeyword => self.parse_class_declaration(ctx, start),
            SyntaxKind::ConstKeyword => {
                if self.next_token_is(|p| p.token() == SyntaxKind::EnumKeyword) {
                    self.next_token();
                    self.next_token();
                    self.parse_enum_declaration(ctx, start.with_flags(NodeFlags::CONST))
                } else {
                    let keyword = self.mark();
                    self.next_token();
                    self.parse_variable_statement(ctx, start, keyword, NodeFlags::CONST)
                }
            }
            SyntaxKind::LetKeyword => {
                let keyword = self.mark();
                if self.try_parse(|p| p.next_token_starts_lexical_binding(ctx)).is_some() {
                    self.parse_variable_statement(ctx, start, keyword, NodeFlags::LET)
                } else {
                    self.parse_statement(ctx, StatementPosition::Normal)
                }
            }
            SyntaxKind::VarKeyword => {
                let keyword = self.mark();
                self.next_token();
                self.parse_variable_statement(ctx, start, keyword, NodeFlags::NONE)
            }
            SyntaxKind::InterfaceKeyword | SyntaxKind::EnumKeyword | SyntaxKind::TypeKeyword => {
                let keyword = self.token();
                if self.try_parse(|p| p.next_token_is_identifier_on_same_line()).is_some() {
                    match keyword {
                        SyntaxKind::InterfaceKeyword => self.parse_interface_declaration(ctx, start),
                        SyntaxKind::EnumKeyword => self.parse_enum_declaration(ctx, start),
                        _ => self.parse_type_alias_declaration(ctx, start),
                    }
                } else {
                    self.parse_statement(ctx, StatementPosition::Normal)
                }
            }
            SyntaxKind::AbstractKeyword => {
                let keyword = self.token_span();
                if self.try_parse(|p| p.next_token_follows_declare_or_abstract()).is_some() {
                    let start = start.with_flags(NodeFlags::ABSTRACT).with_modifiers(ModifierFlags::ABSTRACT);
                    if self.token() == SyntaxKind::ClassKeyword {
                        self.parse_class_declaration(ctx, start)
                    } else {
                        self.error_at(
                            keyword,
                            &messages::ABSTRACT_MODIFIER_CAN_ONLY_APPEAR_ON_A_CLASS_METHOD_OR_PROPERTY_DECLARATION,
                        );
                        self.parse_declaration_item(ctx, start)
                    }
                } else {
                    self.parse_statement(ctx, StatementPosition::Normal)
                }
            }
            SyntaxKind::DeclareKeyword => {
                if self.try_parse(|p| p.next_token_follows_declare_or_abstract()).is_some() {
                    self.parse_declaration_item(ctx, start.with_flags(NodeFlags::DECLARED | NodeFlags::AMBIENT))
                } else {
                    self.parse_statement(ctx, StatementPosition::Normal)
                }
            }
            // Module items at the top of a module body never reach this
            // point; anywhere else import and export are misplaced.
            SyntaxKind::ImportKeyword if self.next_token_starts_import_declaration() => {
                self.error_at_token(&messages::THE_IMPORT_KEYWORD_CAN_ONLY_BE_USED_WITH_THE_MODULE_GOAL);
                self.parse_import_declaration(ctx, start)
            }
            SyntaxKind::ExportKeyword => {
                self.error_at_token(&messages::THE_EXPORT_KEYWORD_CAN_ONLY_BE_USED_WITH_THE_MODULE_GOAL);
                self.parse_export_declaration(ctx, start)
            }
            _ => self.parse_statement(ctx, StatementPosition::Normal),
        }
    }

    fn next_token_starts_import_declaration(&mut self) -> bool {
        self.next_token_is(|p| !p.token().is_member_or_call_start())
    }

    pub(crate) fn next_token_is_function_on_same_line(&mut self) -> bool {
        self.next_token_is(|p| p.token() == SyntaxKind::FunctionKeyword && !p.has_preceding_line_break())
    }

    /// Speculation body: consumes the current keyword when the next token is
    /// an identifier on the same line.
    fn next_token_is_identifier_on_same_line(&mut self) -> Option<()> {
        self.next_token();
        (self.token().is_identifier_like() && !self.has_preceding_line_break()).then_some(())
    }

    fn next_token_follows_declare_or_abstract(&mut self) -> Option<()> {
        self.next_token();
        (self.token().can_follow_declare_or_abstract() && !self.has_preceding_line_break()).then_some(())
    }

    /// Speculation body: consumes `let` when it starts a lexical binding.
    fn next_token_starts_lexical_binding(&mut self, ctx: Context) -> Option<()> {
        self.next_token();
        let token = self.token();
        if (token == SyntaxKind::YieldKeyword && ctx.contains(Context::YIELD))
            || (token == SyntaxKind::AwaitKeyword && ctx.contains(Context::AWAIT))
        {
            return None;
        }
        token.is_identifier_or_pattern_start().then_some(())
    }

    // ========================================================================
    // Single statements
    // ========================================================================

    pub(crate) fn parse_statement(&mut self, ctx: Context, position: StatementPosition) -> Statement<'a> {
        match self.nested(|p| p.parse_statement_inner(ctx, position)) {
            Some(statement) => statement,
            None => self.missing_statement(),
        }
    }

    fn parse_statement_inner(&mut self, ctx: Context, position: StatementPosition) -> Statement<'a> {
        let mark = self.mark();
        match self.token() {
            SyntaxKind::OpenBraceToken => Statement::Block(self.parse_block(ctx)),
            SyntaxKind::SemicolonToken => {
                self.next_token();
                self.factory
                    .create_empty_statement(self.finish(mark, SyntaxKind::EmptyStatement))
            }
            SyntaxKind::VarKeyword => {
                self.next_token();
                self.parse_variable_statement(ctx, DeclarationStart::new(mark), mark, NodeFlags::NONE)
            }
            SyntaxKind::IfKeyword => self.parse_if_statement(ctx),
            SyntaxKind::DoKeyword => self.parse_do_statement(ctx),
            SyntaxKind::WhileKeyword => self.parse_while_statement(ctx),
            SyntaxKind::ForKeyword => self.parse_for_statement(ctx),
            SyntaxKind::ContinueKeyword | SyntaxKind::BreakKeyword => self.parse_break_or_continue(ctx),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(ctx),
            SyntaxKind::WithKeyword => self.parse_with_statement(ctx),
            SyntaxKind::SwitchKeyword => self.parse_switch_statement(ctx),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(ctx),
            SyntaxKind::TryKeyword | SyntaxKind::CatchKeyword | SyntaxKind::FinallyKeyword => {
                self.parse_try_statement(ctx)
            }
            SyntaxKind::DebuggerKeyword => {
                self.next_token();
                self.parse_semicolon();
                self.factory
                    .create_debugger_statement(self.finish(mark, SyntaxKind::DebuggerStatement))
            }
            SyntaxKind::FunctionKeyword => self.parse_function_in_statement_position(ctx, position),
            SyntaxKind::AsyncKeyword if self.next_token_is_function_on_same_line() => {
                self.parse_function_in_statement_position(ctx, position)
            }
            SyntaxKind::ClassKeyword => {
                self.error_at_token(&messages::CLASS_DECLARATION_CANNOT_APPEAR_IN_SINGLE_STATEMENT_CONTEXT);
                self.parse_class_declaration(ctx, DeclarationStart::new(mark))
            }
            SyntaxKind::EnumKeyword => {
                if self.try_parse(|p| p.next_token_is_identifier_on_same_line()).is_some() {
                    self.parse_enum_declaration(ctx, DeclarationStart::new(mark))
                } else {
                    self.parse_expression_or_labeled_statement(ctx)
                }
            }
            _ => self.parse_expression_or_labeled_statement(ctx),
        }
    }

    fn parse_function_in_statement_position(
        &mut self,
        ctx: Context,
        position: StatementPosition,
    ) -> Statement<'a> {
        let mark = self.mark();
        let annex_b = !ctx.is_strict() && !ctx.contains(Context::DISABLE_WEB_COMPAT);
        if !(annex_b && position != StatementPosition::Normal) {
            let message = if ctx.is_strict() {
                &messages::IN_STRICT_MODE_CODE_FUNCTIONS_CAN_ONLY_BE_DECLARED_AT_TOP_LEVEL_OR_INSIDE_A_BLOCK
            } else if ctx.contains(Context::DISABLE_WEB_COMPAT) {
                &messages::WITHOUT_WEB_COMPATIBILITY_FUNCTIONS_CAN_NOT_BE_DECLARED_AS_THE_BODY_OF_A_STATEMENT
            } else {
                &messages::IN_NON_STRICT_MODE_CODE_FUNCTIONS_CAN_ONLY_BE_DECLARED_AT_TOP_LEVEL_INSIDE_A_BLOCK_OR_AS_THE_BODY_OF_AN_IF_STATEMENT
            };
            self.error_at_token(message);
        }
        self.parse_function_declaration(ctx, DeclarationStart::new(mark))
    }

    pub(crate) fn parse_block(&mut self, ctx: Context) -> Block<'a> {
        let mark = self.mark();
        let statements = if self.parse_expected(SyntaxKind::OpenBraceToken) {
            let statements =
                self.parse_statement_list(ctx, false, is_close_brace, Self::parse_statement_list_item);
            self.parse_expected(SyntaxKind::CloseBraceToken);
            statements
        } else {
            &[]
        };
        self.factory.create_block(self.finish(mark, SyntaxKind::Block), statements)
    }

    /// A function body: a block whose leading string statements form a
    /// directive prologue.
    pub(crate) fn parse_function_block(&mut self, ctx: Context) -> Block<'a> {
        let mark = self.mark();
        let statements = if self.parse_expected(SyntaxKind::OpenBraceToken) {
            let statements = self.parse_function_body_statements(ctx);
            self.parse_expected(SyntaxKind::CloseBraceToken);
            statements
        } else {
            &[]
        };
        self.factory.create_block(self.finish(mark, SyntaxKind::Block), statements)
    }

    fn parse_parenthesized_condition(&mut self, ctx: Context) -> &'a Expression<'a> {
        self.parse_expected(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression(ctx.without(Context::DISALLOW_IN));
        self.parse_expected(SyntaxKind::CloseParenToken);
        self.factory.alloc(expression)
    }

    fn parse_embedded_statement(&mut self, ctx: Context, position: StatementPosition) -> &'a Statement<'a> {
        let statement = self.parse_statement(ctx, position);
        self.factory.alloc(statement)
    }

    fn parse_if_statement(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        self.next_token();
        let expression = self.parse_parenthesized_condition(ctx);
        let then_statement = self.parse_embedded_statement(ctx, StatementPosition::IfBranch);
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            Some(self.parse_embedded_statement(ctx, StatementPosition::IfBranch))
        } else {
            None
        };
        self.factory.create_if(
            self.finish(mark, SyntaxKind::IfStatement),
            expression,
            then_statement,
            else_statement,
        )
    }

    fn parse_do_statement(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        self.next_token();
        let statement = self.parse_embedded_statement(ctx, StatementPosition::Normal);
        self.parse_expected(SyntaxKind::WhileKeyword);
        let expression = self.parse_parenthesized_condition(ctx);
        // `do ; while (x) y` inserts a semicolon after `)` even on one line.
        self.parse_optional(SyntaxKind::SemicolonToken);
        self.factory
            .create_do(self.finish(mark, SyntaxKind::DoStatement), statement, expression)
    }

    fn parse_while_statement(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        self.next_token();
        let expression = self.parse_parenthesized_condition(ctx);
        let statement = self.parse_embedded_statement(ctx, StatementPosition::Normal);
        self.factory
            .create_while(self.finish(mark, SyntaxKind::WhileStatement), expression, statement)
    }

    fn parse_for_statement(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        self.next_token();
        let is_await = self.parse_optional(SyntaxKind::AwaitKeyword);
        self.parse_expected(SyntaxKind::OpenParenToken);

        let init_ctx = ctx.with(Context::DISALLOW_IN);
        let initializer = match self.token() {
            SyntaxKind::SemicolonToken => None,
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => {
                let keyword = self.mark();
                let flags = if self.token() == SyntaxKind::ConstKeyword {
                    NodeFlags::CONST
                } else {
                    NodeFlags::NONE
                };
                self.next_token();
                Some(ForInitializer::VariableDeclarationList(
                    self.parse_variable_declaration_list(init_ctx, keyword, flags),
                ))
            }
            SyntaxKind::LetKeyword => {
                let keyword = self.mark();
                if self.try_parse(|p| p.next_token_starts_lexical_binding(ctx)).is_some() {
                    Some(ForInitializer::VariableDeclarationList(
                        self.parse_variable_declaration_list(init_ctx, keyword, NodeFlags::LET),
                    ))
                } else {
                    let expression = self.parse_expression(init_ctx);
                    Some(ForInitializer::Expression(self.factory.alloc(expression)))
                }
            }
            _ => {
                let expression = self.parse_expression(init_ctx);
                Some(ForInitializer::Expression(self.factory.alloc(expression)))
            }
        };

        if let Some(initializer) = initializer {
            let token = self.token();
            if matches!(token, SyntaxKind::InKeyword | SyntaxKind::OfKeyword) {
                self.next_token();
                let body_ctx = ctx.without(Context::DISALLOW_IN);
                let expression = if token == SyntaxKind::OfKeyword {
                    self.parse_assignment_expression(body_ctx)
                } else {
                    self.parse_expression(body_ctx)
                };
                let expression = self.factory.alloc(expression);
                self.parse_expected(SyntaxKind::CloseParenToken);
                let statement = self.parse_embedded_statement(ctx, StatementPosition::Normal);
                let kind = if token == SyntaxKind::OfKeyword {
                    SyntaxKind::ForOfStatement
                } else {
                    SyntaxKind::ForInStatement
                };
                return self.factory.create_for_in_or_of(
                    self.finish(mark, kind),
                    is_await,
                    initializer,
                    expression,
                    statement,
                );
            }
            return self.parse_for_statement_rest(ctx, mark, Some(initializer));
        }
        self.parse_for_statement_rest(ctx, mark, None)
    }

    fn parse_for_statement_rest(
        &mut self,
        ctx: Context,
        mark: Mark,
        initializer: Option<ForInitializer<'a>>,
    ) -> Statement<'a> {
        let ctx = ctx.without(Context::DISALLOW_IN);
        self.parse_expected(SyntaxKind::SemicolonToken);
        let condition = if matches!(
            self.token(),
            SyntaxKind::SemicolonToken | SyntaxKind::CloseParenToken
        ) {
            None
        } else {
            let condition = self.parse_expression(ctx);
            Some(self.factory.alloc(condition))
        };
        self.parse_expected(SyntaxKind::SemicolonToken);
        let incrementor = if self.token() == SyntaxKind::CloseParenToken {
            None
        } else {
            let incrementor = self.parse_expression(ctx);
            Some(self.factory.alloc(incrementor))
        };
        self.parse_expected(SyntaxKind::CloseParenToken);
        let statement = self.parse_embedded_statement(ctx, StatementPosition::Normal);
        self.factory.create_for(
            self.finish(mark, SyntaxKind::ForStatement),
            initializer,
            condition,
            incrementor,
            statement,
        )
    }

    fn parse_break_or_continue(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        let kind = if self.token() == SyntaxKind::ContinueKeyword {
            SyntaxKind::ContinueStatement
        } else {
            SyntaxKind::BreakStatement
        };
        self.next_token();
        let label = if !self.has_preceding_line_break() && self.is_identifier(ctx) {
            Some(self.parse_identifier(ctx))
        } else {
            None
        };
        self.parse_semicolon();
        self.factory
            .create_break_or_continue(self.finish(mark, kind), label)
    }

    fn parse_return_statement(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        if !ctx.contains(Context::RETURN) {
            self.error_at_token(&messages::A_RETURN_STATEMENT_CAN_ONLY_BE_USED_WITHIN_A_FUNCTION_BODY);
        }
        self.next_token();
        let expression = if self.can_parse_semicolon() {
            None
        } else {
            let expression = self.parse_expression(ctx.without(Context::DISALLOW_IN));
            Some(self.factory.alloc(expression))
        };
        self.parse_semicolon();
        self.factory
            .create_return(self.finish(mark, SyntaxKind::ReturnStatement), expression)
    }

    fn parse_with_statement(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        if ctx.is_strict() {
            self.error_at_token(&messages::WITH_STATEMENTS_ARE_NOT_ALLOWED_IN_STRICT_MODE);
        }
        self.next_token();
        let expression = self.parse_parenthesized_condition(ctx);
        let statement = self.parse_embedded_statement(ctx, StatementPosition::Normal);
        self.factory
            .create_with(self.finish(mark, SyntaxKind::WithStatement), expression, statement)
    }

    fn parse_switch_statement(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        self.next_token();
        let expression = self.parse_parenthesized_condition(ctx);
        let mut clauses = Vec::new();
        if self.parse_expected(SyntaxKind::OpenBraceToken) {
            while !matches!(
                self.token(),
                SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
            ) {
                match self.token() {
                    SyntaxKind::CaseKeyword | SyntaxKind::DefaultKeyword => {
                        clauses.push(self.parse_case_or_default_clause(ctx));
                    }
                    _ => {
                        self.error_at_token(&messages::CASE_OR_DEFAULT_EXPECTED);
                        self.next_token_with(ctx.with(Context::ALLOW_REGEXP));
                    }
                }
            }
            self.parse_expected(SyntaxKind::CloseBraceToken);
        }
        self.factory.create_switch(
            self.finish(mark, SyntaxKind::SwitchStatement),
            expression,
            self.factory.alloc_list(clauses),
        )
    }

    fn parse_case_or_default_clause(&mut self, ctx: Context) -> CaseOrDefaultClause<'a> {
        let mark = self.mark();
        let (kind, expression) = if self.parse_optional(SyntaxKind::CaseKeyword) {
            let expression = self.parse_expression(ctx.without(Context::DISALLOW_IN));
            (SyntaxKind::CaseClause, Some(self.factory.alloc(expression)))
        } else {
            self.next_token();
            (SyntaxKind::DefaultClause, None)
        };
        self.parse_expected(SyntaxKind::ColonToken);
        let statements =
            self.parse_statement_list(ctx, false, is_clause_end, Self::parse_statement_list_item);
        self.factory
            .create_case_or_default_clause(self.finish(mark, kind), expression, statements)
    }

    fn parse_throw_statement(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        self.next_token();
        let expression = if self.has_preceding_line_break() {
            self.error_at_token(&messages::LINE_BREAK_NOT_PERMITTED_HERE);
            self.missing_expression()
        } else {
            self.parse_expression(ctx.without(Context::DISALLOW_IN))
        };
        let expression = self.factory.alloc(expression);
        self.parse_semicolon();
        self.factory
            .create_throw(self.finish(mark, SyntaxKind::ThrowStatement), expression)
    }

    /// Also entered on a stray `catch` or `finally`, which reports the
    /// missing `try` and recovers the rest of the statement.
    fn parse_try_statement(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        self.parse_expected(SyntaxKind::TryKeyword);
        let factory = self.factory;
        let try_block = factory.alloc(self.parse_block(ctx));

        let catch_clause = if self.token() == SyntaxKind::CatchKeyword {
            let catch_mark = self.mark();
            self.next_token();
            let variable_declaration = if self.parse_optional(SyntaxKind::OpenParenToken) {
                let declaration = self.parse_variable_declaration(ctx.without(Context::DISALLOW_IN));
                self.parse_expected(SyntaxKind::CloseParenToken);
                Some(self.factory.alloc(declaration))
            } else {
                None
            };
            let block = factory.alloc(self.parse_block(ctx));
            Some(self.factory.alloc(self.factory.create_catch_clause(
                self.finish(catch_mark, SyntaxKind::CatchClause),
                variable_declaration,
                block,
            )))
        } else {
            None
        };

        let finally_block = if self.parse_optional(SyntaxKind::FinallyKeyword) {
            Some(factory.alloc(self.parse_block(ctx)))
        } else {
            None
        };
        if catch_clause.is_none() && finally_block.is_none() {
            self.error_expected(SyntaxKind::CatchKeyword);
        }

        self.factory.create_try(
            self.finish(mark, SyntaxKind::TryStatement),
            try_block,
            catch_clause,
            finally_block,
        )
    }

    fn parse_expression_or_labeled_statement(&mut self, ctx: Context) -> Statement<'a> {
        let mark = self.mark();
        let starts_with_identifier = self.is_identifier(ctx);
        let expression = self.parse_expression(ctx);

        if starts_with_identifier && self.token() == SyntaxKind::ColonToken {
            if let Expression::Identifier(label) = expression {
                self.next_token();
                let statement = self.parse_embedded_statement(ctx, StatementPosition::LabeledBody);
                return self.factory.create_labeled(
                    self.finish(mark, SyntaxKind::LabeledStatement),
                    label,
                    statement,
                );
            }
        }

        if matches!(expression, Expression::Identifier(_))
            && !self.has_preceding_line_break()
            && self.token().is_identifier_like()
        {
            self.error_at_token(&messages::UNEXPECTED_KEYWORD_OR_IDENTIFIER);
        }
        let expression = self.factory.alloc(expression);
        self.parse_semicolon();
        self.factory.create_expression_statement(
            self.finish(mark, SyntaxKind::ExpressionStatement),
            expression,
        )
    }

    // ========================================================================
    // Variable statements
    // ========================================================================

    /// `var`, `let` or `const` statement; the keyword (at `keyword`) has
    /// already been consumed.
    pub(crate) fn parse_variable_statement(
        &mut self,
        ctx: Context,
        start: DeclarationStart,
        keyword: Mark,
        list_flags: NodeFlags,
    ) -> Statement<'a> {
        let declaration_list = self.parse_variable_declaration_list(ctx, keyword, list_flags);
        self.parse_semicolon();
        let kind = if list_flags.intersects(NodeFlags::BLOCK_SCOPED) {
            SyntaxKind::LexicalDeclaration
        } else {
            SyntaxKind::VariableStatement
        };
        self.factory
            .create_variable_statement(start.finish(self, kind), declaration_list)
    }

    pub(crate) fn parse_variable_declaration_list(
        &mut self,
        ctx: Context,
        keyword: Mark,
        flags: NodeFlags,
    ) -> &'a VariableDeclarationList<'a> {
        let mut declarations = Vec::new();
        loop {
            declarations.push(self.parse_variable_declaration(ctx));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.factory.create_variable_declaration_list(
            self.finish(keyword, SyntaxKind::VariableDeclarationList).with_flags(flags),
            self.factory.alloc_list(declarations),
        )
    }

    pub(crate) fn parse_variable_declaration(&mut self, ctx: Context) -> VariableDeclaration<'a> {
        let mark = self.mark();
        let name = self.parse_binding_name(ctx);
        let definite = matches!(name, Expression::Identifier(_))
            && !self.has_preceding_line_break()
            && self.parse_optional(SyntaxKind::ExclamationToken);
        let name = self.factory.alloc(name);
        let type_annotation = self.parse_type_annotation(ctx);
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            let initializer = self.parse_assignment_expression(ctx);
            Some(self.factory.alloc(initializer))
        } else {
            None
        };
        self.factory.create_variable_declaration(
            self.finish(mark, SyntaxKind::VariableDeclaration),
            name,
            definite,
            type_annotation,
            initializer,
        )
    }
}
