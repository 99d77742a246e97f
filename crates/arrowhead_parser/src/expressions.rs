//! Expressions, from the comma operator down to primary expressions.
//!
//! Binary operators are parsed by precedence climbing. A `(` in primary
//! position goes through the cover grammar; when it resolves to arrow
//! parameters the [`Expression::ArrowParameters`] value travels back up to
//! [`Parser::parse_assignment_expression`], which attaches the body.

use arrowhead_ast::node::*;
use arrowhead_ast::syntax_kind::SyntaxKind;
use arrowhead_ast::types::*;
use arrowhead_core::text::TextSpan;
use arrowhead_diagnostics::messages;

use crate::context::Context;
use crate::cover::CoverResult;
use crate::declarations::MethodHead;
use crate::parser::{Mark, Parser};
use crate::precedence::{get_binary_operator_precedence, OperatorPrecedence};

/// Whether `expression` may appear on the left of `=`.
fn is_left_hand_side(expression: &Expression<'_>) -> bool {
    !matches!(
        expression,
        Expression::PrefixUnary(_)
            | Expression::PostfixUnary(_)
            | Expression::Binary(_)
            | Expression::Assignment(_)
            | Expression::Conditional(_)
            | Expression::Yield(_)
            | Expression::Await(_)
            | Expression::As(_)
            | Expression::Satisfies(_)
            | Expression::ArrowFunction(_)
            | Expression::ArrowParameters(_)
    )
}

fn is_prefix_operator(token: SyntaxKind) -> bool {
    matches!(
        token,
        SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
    )
}

impl<'a> Parser<'a> {
    /// `AssignmentExpression ( , AssignmentExpression )*`
    pub(crate) fn parse_expression(&mut self, ctx: Context) -> Expression<'a> {
        let mark = self.mark();
        let mut expression = self.parse_assignment_expression(ctx);
        while self.parse_optional(SyntaxKind::CommaToken) {
            let right = self.parse_assignment_expression(ctx);
            let factory = self.factory;
            expression = factory.create_binary(
                self.finish(mark, SyntaxKind::BinaryExpression),
                factory.alloc(expression),
                SyntaxKind::CommaToken,
                factory.alloc(right),
            );
        }
        expression
    }

    pub(crate) fn parse_assignment_expression(&mut self, ctx: Context) -> Expression<'a> {
        match self.nested(|p| p.parse_assignment_expression_worker(ctx)) {
            Some(expression) => expression,
            None => self.missing_expression(),
        }
    }

    fn parse_assignment_expression_worker(&mut self, ctx: Context) -> Expression<'a> {
        if self.token() == SyntaxKind::YieldKeyword && ctx.contains(Context::YIELD) {
            return self.parse_yield_expression(ctx);
        }

        let mark = self.mark();
        if self.token() == SyntaxKind::LessThanToken && self.may_start_generic_arrow(ctx) {
            if let Some(parameters) = self.try_parse(|p| p.parse_generic_arrow_head(ctx)) {
                return self.parse_arrow_function(ctx, mark, false, parameters);
            }
        }

        if self.is_async_simple_arrow_head(ctx) {
            self.next_token();
            let parameter = self.parse_identifier(ctx.with(Context::AWAIT));
            let parameters = self.simple_arrow_parameters(parameter);
            return self.parse_arrow_function(ctx, mark, true, parameters);
        }

        let left = self.parse_binary_expression(ctx, OperatorPrecedence::LOWEST);
        self.parse_assignment_rest(ctx, mark, left)
    }

    /// Finish an assignment-level expression whose leftmost binary operand
    /// (`left`, started at `mark`) has been parsed.
    pub(crate) fn parse_assignment_rest(&mut self, ctx: Context, mark: Mark, left: Expression<'a>) -> Expression<'a> {
        let left = match left {
            Expression::Identifier(identifier) if self.token() == SyntaxKind::EqualsGreaterThanToken => {
                let parameters = self.simple_arrow_parameters(identifier);
                return self.parse_arrow_function(ctx, mark, false, parameters);
            }
            Expression::ArrowParameters(parameters) => {
                return self.parse_arrow_function(ctx, mark, false, parameters);
            }
            left => left,
        };

        let operator = self.token();
        if operator.is_assignment_operator() && is_left_hand_side(&left) {
            self.next_token();
            let right = self.parse_assignment_expression(ctx);
            let factory = self.factory;
            return factory.create_assignment(
                self.finish(mark, SyntaxKind::AssignmentExpression),
                factory.alloc(left),
                operator,
                factory.alloc(right),
            );
        }

        if operator == SyntaxKind::QuestionToken {
            return self.parse_conditional_rest(ctx, mark, left);
        }
        left
    }

    /// `? whenTrue : whenFalse`, at the `?`.
    pub(crate) fn parse_conditional_rest(&mut self, ctx: Context, mark: Mark, condition: Expression<'a>) -> Expression<'a> {
        self.next_token();
        let when_true = self.parse_assignment_expression(ctx.with(Context::IN_CONDITIONAL).without(Context::DISALLOW_IN));
        let when_false = if self.parse_expected(SyntaxKind::ColonToken) {
            self.parse_assignment_expression(ctx)
        } else {
            self.missing_expression()
        };
        let factory = self.factory;
        factory.create_conditional(
            self.finish(mark, SyntaxKind::ConditionalExpression),
            factory.alloc(condition),
            factory.alloc(when_true),
            factory.alloc(when_false),
        )
    }

    // ========================================================================
    // Arrow functions
    // ========================================================================

    /// A TSX file only reads `<T,>` and `<T extends U>` as type parameters.
    fn may_start_generic_arrow(&mut self, ctx: Context) -> bool {
        if !ctx.contains(Context::JSX) {
            return true;
        }
        self.look_ahead(|p| {
            p.next_token();
            if !p.token().is_identifier_like() {
                return false;
            }
            p.next_token();
            matches!(
                p.token(),
                SyntaxKind::CommaToken | SyntaxKind::ExtendsKeyword
            )
        })
    }

    fn parse_generic_arrow_head(&mut self, ctx: Context) -> Option<ArrowParameters<'a>> {
        let mark = self.mark();
        let type_parameters = self.parse_type_parameter_list(ctx);
        if self.token() != SyntaxKind::OpenParenToken {
            return None;
        }
        match self.parse_cover_list(ctx, mark, Some(type_parameters)) {
            CoverResult::Arrow(parameters) => Some(parameters),
            CoverResult::Arguments(_) => None,
        }
    }

    /// `async x =>`: `async`, an identifier on the same line, then `=>`.
    pub(crate) fn is_async_simple_arrow_head(&mut self, ctx: Context) -> bool {
        self.token() == SyntaxKind::AsyncKeyword
            && self.look_ahead(|p| {
                p.next_token();
                if p.has_preceding_line_break() || !p.is_identifier(ctx.with(Context::AWAIT)) {
                    return false;
                }
                p.next_token();
                p.token() == SyntaxKind::EqualsGreaterThanToken
            })
    }

    /// The parameters of `x => ...`: one identifier element.
    pub(crate) fn simple_arrow_parameters(&self, parameter: Identifier<'a>) -> ArrowParameters<'a> {
        let range = parameter.data.range;
        let data = NodeData::new(SyntaxKind::ArrowParameters, range.pos, range.end)
            .with_flags(parameter.data.flags & NodeFlags::HAS_ERRORS);
        let factory = self.factory;
        let elements = factory.alloc_list(vec![CoverElement::Expression(Expression::Identifier(parameter))]);
        factory.create_arrow_parameters(data, None, elements, None, false)
    }

    /// `=> body` after resolved arrow parameters that started at `mark`.
    pub(crate) fn parse_arrow_function(
        &mut self,
        ctx: Context,
        mark: Mark,
        is_async: bool,
        parameters: ArrowParameters<'a>,
    ) -> Expression<'a> {
        if self.token() == SyntaxKind::EqualsGreaterThanToken && self.has_preceding_line_break() {
            self.error_at_token(&messages::LINE_TERMINATOR_NOT_PERMITTED_BEFORE_ARROW);
        }
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken);

        let factory = self.factory;
        let body = if self.token() == SyntaxKind::OpenBraceToken {
            let block = self.parse_function_block(ctx.for_function_body(is_async, false));
            ArrowFunctionBody::Block(factory.alloc(block))
        } else {
            let mut body_ctx = ctx.without(Context::YIELD | Context::AWAIT);
            if is_async {
                body_ctx |= Context::AWAIT;
            }
            let expression = self.parse_assignment_expression(body_ctx);
            ArrowFunctionBody::Expression(factory.alloc(expression))
        };
        factory.create_arrow_function(
            self.finish(mark, SyntaxKind::ArrowFunction),
            is_async,
            factory.alloc(parameters),
            body,
        )
    }

    // ========================================================================
    // Binary and unary
    // ========================================================================

    /// Operators binding tighter than `precedence`; `**` is right
    /// associative.
    pub(crate) fn parse_binary_expression(&mut self, ctx: Context, precedence: OperatorPrecedence) -> Expression<'a> {
        let mark = self.mark();
        let mut left = self.parse_unary_expression(ctx);
        loop {
            self.scanner.rescan_greater_than_token();
            let operator = self.token();
            let operator_precedence = get_binary_operator_precedence(operator);
            let binds = if operator == SyntaxKind::AsteriskAsteriskToken {
                operator_precedence >= precedence
            } else {
                operator_precedence > precedence
            };
            if !operator_precedence.is_binary() || !binds {
                break;
            }
            if operator == SyntaxKind::InKeyword && ctx.contains(Context::DISALLOW_IN) {
                break;
            }

            let factory = self.factory;
            if matches!(operator, SyntaxKind::AsKeyword | SyntaxKind::SatisfiesKeyword) {
                if self.has_preceding_line_break() {
                    break;
                }
                self.next_token();
                let type_node = if operator == SyntaxKind::AsKeyword && self.token() == SyntaxKind::ConstKeyword {
                    self.parse_const_assertion_type()
                } else {
                    self.parse_type(ctx)
                };
                let kind = if operator == SyntaxKind::AsKeyword {
                    SyntaxKind::AsExpression
                } else {
                    SyntaxKind::SatisfiesExpression
                };
                left = factory.create_type_assertion(
                    self.finish(mark, kind),
                    factory.alloc(left),
                    factory.alloc(type_node),
                );
                continue;
            }

            self.next_token();
            let right = self.parse_binary_expression(ctx, operator_precedence);
            left = factory.create_binary(
                self.finish(mark, SyntaxKind::BinaryExpression),
                factory.alloc(left),
                operator,
                factory.alloc(right),
            );
        }
        left
    }

    /// `const` in `x as const`, kept as a type reference named `const`.
    fn parse_const_assertion_type(&mut self) -> TypeNode<'a> {
        let mark = self.mark();
        let name = self.parse_identifier_token();
        self.factory.create_type_reference(
            self.finish(mark, SyntaxKind::TypeReference),
            EntityName::Identifier(name),
            None,
        )
    }

    pub(crate) fn parse_unary_expression(&mut self, ctx: Context) -> Expression<'a> {
        match self.nested(|p| p.parse_unary_expression_worker(ctx)) {
            Some(expression) => expression,
            None => self.missing_expression(),
        }
    }

    fn parse_unary_expression_worker(&mut self, ctx: Context) -> Expression<'a> {
        let mark = self.mark();
        let operator = self.token();
        if is_prefix_operator(operator) {
            self.next_token();
            let operand = self.parse_unary_expression(ctx);
            let factory = self.factory;
            return factory.create_prefix_unary(
                self.finish(mark, SyntaxKind::PrefixUnaryExpression),
                operator,
                factory.alloc(operand),
            );
        }
        if operator == SyntaxKind::AwaitKeyword && ctx.contains(Context::AWAIT) {
            self.next_token();
            let operand = self.parse_unary_expression(ctx);
            let factory = self.factory;
            return factory.create_await(self.finish(mark, SyntaxKind::AwaitExpression), factory.alloc(operand));
        }

        let expression = self.parse_left_hand_side_expression(ctx);
        let operator = self.token();
        if matches!(operator, SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken)
            && !self.has_preceding_line_break()
        {
            self.next_token();
            let factory = self.factory;
            return factory.create_postfix_unary(
                self.finish(mark, SyntaxKind::PostfixUnaryExpression),
                factory.alloc(expression),
                operator,
            );
        }
        expression
    }

    // ========================================================================
    // Left-hand-side expressions
    // ========================================================================

    pub(crate) fn parse_left_hand_side_expression(&mut self, ctx: Context) -> Expression<'a> {
        let mark = self.mark();
        let expression = if self.token() == SyntaxKind::NewKeyword {
            self.parse_new_expression(ctx)
        } else {
            self.parse_primary_expression(ctx)
        };
        self.parse_member_and_call_rest(ctx, mark, expression, true)
    }

    fn parse_new_expression(&mut self, ctx: Context) -> Expression<'a> {
        match self.nested(|p| p.parse_new_expression_worker(ctx)) {
            Some(expression) => expression,
            None => self.missing_expression(),
        }
    }

    fn parse_new_expression_worker(&mut self, ctx: Context) -> Expression<'a> {
        let mark = self.mark();
        self.parse_expected(SyntaxKind::NewKeyword);
        if self.parse_optional(SyntaxKind::DotToken) {
            let name = self.parse_identifier_name();
            return self.factory.create_meta_property(
                self.finish(mark, SyntaxKind::MetaProperty),
                SyntaxKind::NewKeyword,
                name,
            );
        }

        let callee_mark = self.mark();
        let callee = if self.token() == SyntaxKind::NewKeyword {
            self.parse_new_expression(ctx)
        } else {
            self.parse_primary_expression(ctx)
        };
        let callee = self.parse_member_and_call_rest(ctx, callee_mark, callee, false);
        let type_arguments = self.parse_type_arguments_in_expression(ctx);
        let arguments = if self.token() == SyntaxKind::OpenParenToken {
            Some(self.parse_argument_list(ctx))
        } else {
            None
        };
        let factory = self.factory;
        factory.create_new(
            self.finish(mark, SyntaxKind::NewExpression),
            factory.alloc(callee),
            type_arguments,
            arguments,
        )
    }

    /// Property accesses, element accesses, calls, tagged templates and
    /// non-null assertions after `expression`. Calls are left to the caller
    /// when `allow_calls` is false (the callee of `new`).
    pub(crate) fn parse_member_and_call_rest(
        &mut self,
        ctx: Context,
        mark: Mark,
        mut expression: Expression<'a>,
        allow_calls: bool,
    ) -> Expression<'a> {
        if matches!(expression, Expression::ArrowParameters(_) | Expression::ArrowFunction(_)) {
            return expression;
        }
        let inner_ctx = ctx.without(Context::DISALLOW_IN | Context::IN_CONDITIONAL | Context::DECORATOR);
        loop {
            let factory = self.factory;
            match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let name = self.parse_member_name(ctx);
                    expression = factory.create_property_access(
                        self.finish(mark, SyntaxKind::PropertyAccessExpression),
                        factory.alloc(expression),
                        false,
                        name,
                    );
                }
                SyntaxKind::QuestionDotToken if allow_calls => {
                    self.next_token();
                    expression = match self.token() {
                        SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                            let type_arguments = self.parse_type_arguments_in_expression(ctx);
                            let arguments = self.parse_argument_list(ctx);
                            factory.create_call(
                                self.finish(mark, SyntaxKind::CallExpression).with_flags(NodeFlags::OPTIONAL_CHAIN),
                                factory.alloc(expression),
                                true,
                                type_arguments,
                                arguments,
                            )
                        }
                        SyntaxKind::OpenBracketToken => {
                            let argument = self.parse_element_access_argument(inner_ctx);
                            factory.create_element_access(
                                self.finish(mark, SyntaxKind::ElementAccessExpression)
                                    .with_flags(NodeFlags::OPTIONAL_CHAIN),
                                factory.alloc(expression),
                                true,
                                argument,
                            )
                        }
                        _ => {
                            let name = self.parse_member_name(ctx);
                            factory.create_property_access(
                                self.finish(mark, SyntaxKind::PropertyAccessExpression)
                                    .with_flags(NodeFlags::OPTIONAL_CHAIN),
                                factory.alloc(expression),
                                true,
                                name,
                            )
                        }
                    };
                }
                SyntaxKind::OpenBracketToken if !ctx.contains(Context::DECORATOR) => {
                    let argument = self.parse_element_access_argument(inner_ctx);
                    expression = factory.create_element_access(
                        self.finish(mark, SyntaxKind::ElementAccessExpression),
                        factory.alloc(expression),
                        false,
                        argument,
                    );
                }
                SyntaxKind::ExclamationToken if !self.has_preceding_line_break() => {
                    self.next_token();
                    expression = factory.create_non_null(
                        self.finish(mark, SyntaxKind::NonNullExpression),
                        factory.alloc(expression),
                    );
                }
                SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                    let template = self.parse_template_literal(inner_ctx);
                    expression = factory.create_tagged_template(
                        self.finish(mark, SyntaxKind::TaggedTemplateExpression),
                        factory.alloc(expression),
                        None,
                        factory.alloc(template),
                    );
                }
                SyntaxKind::OpenParenToken if allow_calls => {
                    let arguments = self.parse_argument_list(ctx);
                    expression = factory.create_call(
                        self.finish(mark, SyntaxKind::CallExpression),
                        factory.alloc(expression),
                        false,
                        None,
                        arguments,
                    );
                }
                SyntaxKind::LessThanToken if allow_calls => {
                    let Some(type_arguments) = self.parse_type_arguments_in_expression(ctx) else {
                        break;
                    };
                    expression = if self.token() == SyntaxKind::OpenParenToken {
                        let arguments = self.parse_argument_list(ctx);
                        factory.create_call(
                            self.finish(mark, SyntaxKind::CallExpression),
                            factory.alloc(expression),
                            false,
                            Some(type_arguments),
                            arguments,
                        )
                    } else {
                        let template = self.parse_template_literal(inner_ctx);
                        factory.create_tagged_template(
                            self.finish(mark, SyntaxKind::TaggedTemplateExpression),
                            factory.alloc(expression),
                            Some(type_arguments),
                            factory.alloc(template),
                        )
                    };
                }
                _ => break,
            }
        }
        expression
    }

    /// The name after `.` or `?.`: any identifier name, or `#private`.
    fn parse_member_name(&mut self, ctx: Context) -> Identifier<'a> {
        if self.token() == SyntaxKind::PrivateIdentifier {
            if !ctx.contains(Context::IN_CLASS) {
                self.error_at_token(&messages::PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES);
            }
            return self.parse_identifier_token();
        }
        self.parse_identifier_name()
    }

    /// `[ expression ]` of an element access, at the `[`.
    fn parse_element_access_argument(&mut self, ctx: Context) -> &'a Expression<'a> {
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let argument = if self.token() == SyntaxKind::CloseBracketToken {
            self.error_at_token(&messages::AN_ELEMENT_ACCESS_EXPRESSION_SHOULD_TAKE_AN_ARGUMENT);
            self.missing_expression()
        } else {
            self.parse_expression(ctx)
        };
        self.parse_expected(SyntaxKind::CloseBracketToken);
        self.factory.alloc(argument)
    }

    /// `( arguments )` of a call or `new`.
    pub(crate) fn parse_argument_list(&mut self, ctx: Context) -> &'a ArgumentList<'a> {
        let mark = self.mark();
        let element_ctx = ctx.without(Context::DISALLOW_IN | Context::IN_CONDITIONAL | Context::DECORATOR);
        let mut elements = Vec::new();
        let mut trailing_comma = false;

        self.parse_expected(SyntaxKind::OpenParenToken);
        while !matches!(
            self.token(),
            SyntaxKind::CloseParenToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            if self.token() == SyntaxKind::DotDotDotToken {
                let spread = self.parse_spread_element(element_ctx);
                elements.push(CoverElement::Expression(Expression::Spread(spread)));
            } else if self.token().can_start_expression() {
                elements.push(CoverElement::Expression(self.parse_assignment_expression(element_ctx)));
            } else {
                self.error_at_token(&messages::ARGUMENT_EXPRESSION_EXPECTED);
                break;
            }

            if self.token() == SyntaxKind::CloseParenToken {
                break;
            }
            if self.parse_optional(SyntaxKind::CommaToken) {
                trailing_comma = self.token() == SyntaxKind::CloseParenToken;
                continue;
            }
            self.error_expected(SyntaxKind::CommaToken);
            if self.token_start() == start {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseParenToken);

        let factory = self.factory;
        factory.create_argument_list(
            self.finish(mark, SyntaxKind::ArgumentList),
            factory.alloc_list(elements),
            trailing_comma,
        )
    }

    /// `... expression`, at the `...`.
    pub(crate) fn parse_spread_element(&mut self, ctx: Context) -> SpreadElement<'a> {
        let mark = self.mark();
        self.parse_expected(SyntaxKind::DotDotDotToken);
        let expression = self.parse_assignment_expression(ctx);
        let factory = self.factory;
        factory.create_spread_element(self.finish(mark, SyntaxKind::SpreadElement), factory.alloc(expression))
    }

    // ========================================================================
    // Primary expressions
    // ========================================================================

    fn parse_primary_expression(&mut self, ctx: Context) -> Expression<'a> {
        let mark = self.mark();
        let token = self.token();
        match token {
            SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword => {
                self.next_token();
                self.factory.create_keyword_expression(self.finish(mark, token))
            }
            SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::RegularExpressionLiteral => Expression::Literal(self.parse_literal()),
            SyntaxKind::SlashToken | SyntaxKind::SlashEqualsToken => {
                self.scanner.rescan_slash_token();
                Expression::Literal(self.parse_literal())
            }
            SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead => {
                self.parse_template_literal(ctx.without(Context::DISALLOW_IN | Context::IN_CONDITIONAL))
            }
            SyntaxKind::OpenParenToken => self.parse_parenthesized_or_arrow_head(ctx),
            SyntaxKind::OpenBracketToken => self.parse_array_literal(ctx),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(ctx),
            SyntaxKind::FunctionKeyword => self.parse_function_expression(ctx),
            SyntaxKind::AsyncKeyword if self.next_token_is_function_on_same_line() => {
                self.parse_function_expression(ctx)
            }
            SyntaxKind::AsyncKeyword
                if self.next_token_is(|p| {
                    p.token() == SyntaxKind::OpenParenToken && !p.has_preceding_line_break()
                }) =>
            {
                self.parse_async_call_or_arrow(ctx)
            }
            SyntaxKind::ClassKeyword | SyntaxKind::AtToken => self.parse_class_expression(ctx),
            SyntaxKind::NewKeyword => self.parse_new_expression(ctx),
            SyntaxKind::ImportKeyword => self.parse_import_expression_head(),
            SyntaxKind::LessThanToken if ctx.contains(Context::JSX) => {
                self.parse_jsx_element_or_fragment(ctx, true)
            }
            SyntaxKind::PrivateIdentifier => {
                if !ctx.contains(Context::IN_CLASS) {
                    self.error_at_token(&messages::PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES);
                }
                Expression::PrivateIdentifier(self.parse_identifier_token())
            }
            _ if self.is_identifier(ctx) => Expression::Identifier(self.parse_identifier_token()),
            _ if token.is_reserved_word() => Expression::Identifier(self.parse_identifier(ctx)),
            _ => {
                self.error_at_token(&messages::EXPRESSION_EXPECTED);
                self.missing_expression()
            }
        }
    }

    /// `import.meta`, or the callee of `import(...)`.
    fn parse_import_expression_head(&mut self) -> Expression<'a> {
        let mark = self.mark();
        let keyword = self.parse_identifier_token();
        if self.parse_optional(SyntaxKind::DotToken) {
            let name = self.parse_identifier_name();
            return self.factory.create_meta_property(
                self.finish(mark, SyntaxKind::MetaProperty),
                SyntaxKind::ImportKeyword,
                name,
            );
        }
        if self.token() != SyntaxKind::OpenParenToken {
            self.error_expected(SyntaxKind::OpenParenToken);
        }
        Expression::Identifier(keyword)
    }

    fn parse_parenthesized_or_arrow_head(&mut self, ctx: Context) -> Expression<'a> {
        match self.parse_cover_call_expression_and_async_arrow_head(ctx, false) {
            CoverResult::Arrow(parameters) => Expression::ArrowParameters(parameters),
            CoverResult::Arguments(arguments) => self.parenthesized_from_arguments(arguments),
        }
    }

    /// Reinterpret a cover list that did not become arrow parameters as a
    /// parenthesized expression. Elements join with the comma operator.
    fn parenthesized_from_arguments(&mut self, arguments: &'a ArgumentList<'a>) -> Expression<'a> {
        let range = arguments.data.range;
        let close_paren = TextSpan::from_bounds(range.end.saturating_sub(1), range.end);
        let errors_before = self.diagnostics.len();

        if arguments.trailing_comma {
            self.error_at(close_paren, &messages::TRAILING_COMMA_NOT_ALLOWED);
        }
        let has_parameter_syntax = arguments.elements.iter().any(|element| {
            matches!(
                element,
                CoverElement::Parameter(_) | CoverElement::Expression(Expression::Spread(_))
            )
        });
        if has_parameter_syntax {
            self.error_with_argument_at(self.token_span(), &messages::_0_EXPECTED, "=>");
        }

        let factory = self.factory;
        let mut inner: Option<&'a Expression<'a>> = None;
        for element in arguments.elements {
            let expression = match element {
                CoverElement::Expression(expression) => expression,
                CoverElement::Parameter(parameter) => parameter.binding,
            };
            inner = Some(match inner {
                None => expression,
                Some(left) => {
                    let data = NodeData::new(
                        SyntaxKind::BinaryExpression,
                        left.data().range.pos,
                        expression.data().range.end,
                    );
                    factory.alloc(factory.create_binary(data, left, SyntaxKind::CommaToken, expression))
                }
            });
        }
        let inner = match inner {
            Some(inner) => inner,
            None => {
                self.error_at(close_paren, &messages::EXPRESSION_EXPECTED);
                factory.alloc(self.missing_expression())
            }
        };

        let mut data = NodeData::new(SyntaxKind::ParenthesizedExpression, range.pos, range.end)
            .with_flags(arguments.data.flags & NodeFlags::HAS_ERRORS);
        if self.diagnostics.len() > errors_before {
            data = data.with_flags(NodeFlags::HAS_ERRORS);
        }
        factory.create_parenthesized(data, inner)
    }

    /// `async ( ... )`: an async arrow head or a call of a function named
    /// `async`, decided by the cover grammar.
    fn parse_async_call_or_arrow(&mut self, ctx: Context) -> Expression<'a> {
        let mark = self.mark();
        let callee = self.parse_identifier_token();
        match self.parse_cover_call_expression_and_async_arrow_head(ctx, true) {
            CoverResult::Arrow(parameters) => self.parse_arrow_function(ctx, mark, true, parameters),
            CoverResult::Arguments(arguments) => {
                let factory = self.factory;
                factory.create_call(
                    self.finish(mark, SyntaxKind::CallExpression),
                    factory.alloc(Expression::Identifier(callee)),
                    false,
                    None,
                    arguments,
                )
            }
        }
    }

    // ========================================================================
    // Templates and literals
    // ========================================================================

    pub(crate) fn parse_template_literal(&mut self, ctx: Context) -> Expression<'a> {
        if self.token() == SyntaxKind::NoSubstitutionTemplateLiteral {
            return Expression::Literal(self.parse_literal());
        }
        let mark = self.mark();
        let head = self.parse_literal();
        let mut spans = Vec::new();
        loop {
            let span_mark = self.mark();
            let expression = self.parse_expression(ctx);
            let literal = if self.token() == SyntaxKind::CloseBraceToken {
                self.scanner.rescan_template_token();
                self.parse_literal()
            } else {
                self.error_expected(SyntaxKind::CloseBraceToken);
                self.factory
                    .create_literal(self.missing_data(SyntaxKind::TemplateTail), "", TokenFlags::NONE)
            };
            let is_tail = literal.data.kind != SyntaxKind::TemplateMiddle;
            let factory = self.factory;
            spans.push(factory.create_template_span(
                self.finish(span_mark, SyntaxKind::TemplateSpan),
                factory.alloc(expression),
                literal,
            ));
            if is_tail {
                break;
            }
        }
        let factory = self.factory;
        factory.create_template_expression(
            self.finish(mark, SyntaxKind::TemplateExpression),
            head,
            factory.alloc_list(spans),
        )
    }

    /// An array literal, also used for array binding patterns.
    pub(crate) fn parse_array_literal(&mut self, ctx: Context) -> Expression<'a> {
        let mark = self.mark();
        let element_ctx = ctx.without(Context::DISALLOW_IN | Context::IN_CONDITIONAL);
        let mut elements = Vec::new();
        let mut trailing_comma = false;

        self.parse_expected(SyntaxKind::OpenBracketToken);
        while !matches!(
            self.token(),
            SyntaxKind::CloseBracketToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            if self.token() == SyntaxKind::CommaToken {
                elements.push(
                    self.factory
                        .create_omitted_expression(NodeData::new(SyntaxKind::OmittedExpression, start, start)),
                );
                self.next_token();
                continue;
            }
            if self.token() == SyntaxKind::DotDotDotToken {
                elements.push(Expression::Spread(self.parse_spread_element(element_ctx)));
            } else {
                elements.push(self.parse_assignment_expression(element_ctx));
            }

            if self.token() == SyntaxKind::CloseBracketToken {
                break;
            }
            if self.parse_optional(SyntaxKind::CommaToken) {
                trailing_comma = self.token() == SyntaxKind::CloseBracketToken;
                continue;
            }
            self.error_expected(SyntaxKind::CommaToken);
            if self.token_start() == start {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken);

        let factory = self.factory;
        factory.create_array_literal(
            self.finish(mark, SyntaxKind::ArrayLiteralExpression),
            factory.alloc_list(elements),
            trailing_comma,
        )
    }

    /// An object literal, also used for object binding patterns.
    pub(crate) fn parse_object_literal(&mut self, ctx: Context) -> Expression<'a> {
        let mark = self.mark();
        let member_ctx = ctx.without(Context::DISALLOW_IN | Context::IN_CONDITIONAL);
        let mut properties = Vec::new();

        self.parse_expected(SyntaxKind::OpenBraceToken);
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            match self.nested(|p| p.parse_object_literal_element(member_ctx)) {
                Some(property) => properties.push(property),
                None => break,
            }
            if self.token() == SyntaxKind::CloseBraceToken {
                break;
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                self.error_expected(SyntaxKind::CommaToken);
                if self.token_start() == start {
                    break;
                }
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);

        let factory = self.factory;
        factory.create_object_literal(
            self.finish(mark, SyntaxKind::ObjectLiteralExpression),
            factory.alloc_list(properties),
        )
    }

    fn parse_object_literal_element(&mut self, ctx: Context) -> ObjectLiteralElement<'a> {
        let mark = self.mark();
        if self.token() == SyntaxKind::DotDotDotToken {
            return ObjectLiteralElement::Spread(self.parse_spread_element(ctx));
        }

        let is_async = self.parse_async_method_keyword();
        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken);
        let accessor = self.parse_accessor_keyword();
        let can_be_shorthand = !is_async && !is_generator && accessor.is_none() && self.is_identifier(ctx);
        let name = self.parse_property_name(ctx);

        if is_async
            || is_generator
            || accessor.is_some()
            || matches!(
                self.token(),
                SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
            )
        {
            let head = MethodHead {
                mark,
                kind: accessor.unwrap_or(SyntaxKind::MethodDefinition),
                decorators: &[],
                modifiers: ModifierFlags::NONE,
                name,
                optional: false,
                is_async,
                is_generator,
            };
            return ObjectLiteralElement::Method(self.parse_method_rest(ctx, head, true));
        }

        let factory = self.factory;
        let name = match name {
            PropertyName::Identifier(identifier) if can_be_shorthand && self.token() != SyntaxKind::ColonToken => {
                let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                    Some(factory.alloc(self.parse_assignment_expression(ctx)))
                } else {
                    None
                };
                return factory.create_shorthand_property_assignment(
                    self.finish(mark, SyntaxKind::ShorthandPropertyAssignment),
                    identifier,
                    initializer,
                );
            }
            name => name,
        };

        self.parse_expected(SyntaxKind::ColonToken);
        let initializer = self.parse_assignment_expression(ctx);
        factory.create_property_assignment(
            self.finish(mark, SyntaxKind::PropertyAssignment),
            name,
            factory.alloc(initializer),
        )
    }

    fn parse_yield_expression(&mut self, ctx: Context) -> Expression<'a> {
        let mark = self.mark();
        self.next_token();
        let factory = self.factory;
        if !self.has_preceding_line_break()
            && (self.token() == SyntaxKind::AsteriskToken || self.token().can_start_expression())
        {
            let delegate = self.parse_optional(SyntaxKind::AsteriskToken);
            let operand = self.parse_assignment_expression(ctx);
            factory.create_yield(
                self.finish(mark, SyntaxKind::YieldExpression),
                delegate,
                Some(factory.alloc(operand)),
            )
        } else {
            factory.create_yield(self.finish(mark, SyntaxKind::YieldExpression), false, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_operators() {
        assert!(is_prefix_operator(SyntaxKind::TypeOfKeyword));
        assert!(is_prefix_operator(SyntaxKind::PlusPlusToken));
        assert!(!is_prefix_operator(SyntaxKind::AwaitKeyword));
        assert!(!is_prefix_operator(SyntaxKind::AsteriskToken));
    }
}
