//! Cover grammar for parenthesized lists.
//!
//! `(a, b)` may be call arguments, a parenthesized expression or the
//! parameters of an arrow function, and the deciding token only appears
//! after the closing parenthesis. The list is parsed once into
//! [`CoverElement`]s while a [`Tristate`] tracks how arrow-like it looks;
//! once the `)` is consumed the same element slice is wrapped either as
//! [`ArrowParameters`] or as an [`ArgumentList`]. Nothing inside the list is
//! parsed twice.

use arrowhead_ast::node::*;
use arrowhead_ast::syntax_kind::SyntaxKind;
use arrowhead_ast::types::*;
use arrowhead_diagnostics::messages;
use tracing::trace;

use crate::context::Context;
use crate::parser::{Mark, Parser};
use crate::precedence::OperatorPrecedence;

/// How sure the parser is that a cover list is an arrow parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tristate {
    False,
    True,
    Unknown,
}

impl Tristate {
    fn is_truthy(self) -> bool {
        self != Tristate::False
    }
}

/// The resolved wrapper of a cover list.
#[derive(Debug)]
pub(crate) enum CoverResult<'a> {
    Arrow(ArrowParameters<'a>),
    Arguments(&'a ArgumentList<'a>),
}

/// An identifier or a literal that may be reinterpreted as a binding
/// pattern.
fn is_binding_shaped(expression: &Expression<'_>) -> bool {
    matches!(
        expression,
        Expression::Identifier(_) | Expression::ArrayLiteral(_) | Expression::ObjectLiteral(_)
    )
}

impl<'a> Parser<'a> {
    /// Parse `( ... )` at the current `(`, optionally preceded by an already
    /// consumed `async`.
    ///
    /// After `async` an argument list is the argument list of a call, so an
    /// element that only a parameter can have (a type annotation, an
    /// optional marker, an access modifier) means the `=>` is missing.
    pub(crate) fn parse_cover_call_expression_and_async_arrow_head(
        &mut self,
        ctx: Context,
        is_async_head: bool,
    ) -> CoverResult<'a> {
        let mark = self.mark();
        trace!(pos = mark.pos, is_async_head, "cover list");
        let result = self.parse_cover_list(ctx, mark, None);
        if let CoverResult::Arguments(arguments) = &result {
            let has_parameter = arguments
                .elements
                .iter()
                .any(|element| matches!(element, CoverElement::Parameter(_)));
            if is_async_head && has_parameter {
                self.error_with_argument_at(self.token_span(), &messages::_0_EXPECTED, "=>");
            }
        }
        result
    }

    /// The list itself. `mark` is the start of the wrapper: the `(`, or the
    /// `<` of leading type parameters.
    pub(crate) fn parse_cover_list(
        &mut self,
        ctx: Context,
        mark: Mark,
        type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    ) -> CoverResult<'a> {
        let element_ctx = ctx.without(Context::DISALLOW_IN | Context::IN_CONDITIONAL | Context::DECORATOR);
        let mut elements: Vec<CoverElement<'a>> = Vec::new();
        let mut state = Tristate::True;
        let mut trailing_comma = false;

        self.parse_expected(SyntaxKind::OpenParenToken);
        while !matches!(
            self.token(),
            SyntaxKind::CloseParenToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            if !self.token().can_start_cover_element() {
                self.error_at_token(&messages::ARGUMENT_EXPRESSION_EXPECTED);
                break;
            }
            let Some((element, element_state)) = self.nested(|p| p.parse_cover_element(element_ctx)) else {
                break;
            };
            elements.push(element);
            state = element_state;

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
        let elements = factory.alloc_list(elements);

        if state.is_truthy() && self.token() == SyntaxKind::ColonToken && self.is_arrow_return_type(ctx, state) {
            self.next_token();
            let return_type = self.parse_type_or_type_predicate(ctx);
            let return_type = factory.alloc(return_type);
            trace!(pos = mark.pos, elements = elements.len(), "cover list is arrow parameters with return type");
            return CoverResult::Arrow(factory.create_arrow_parameters(
                self.finish(mark, SyntaxKind::ArrowParameters),
                type_parameters,
                elements,
                Some(return_type),
                trailing_comma,
            ));
        }
        if state.is_truthy() && self.token() == SyntaxKind::EqualsGreaterThanToken {
            trace!(pos = mark.pos, elements = elements.len(), "cover list is arrow parameters");
            return CoverResult::Arrow(factory.create_arrow_parameters(
                self.finish(mark, SyntaxKind::ArrowParameters),
                type_parameters,
                elements,
                None,
                trailing_comma,
            ));
        }

        trace!(pos = mark.pos, elements = elements.len(), "cover list is an argument list");
        CoverResult::Arguments(factory.create_argument_list(
            self.finish(mark, SyntaxKind::ArgumentList),
            elements,
            trailing_comma,
        ))
    }

    /// At a `:` after the list. When the list is inside the true branch of
    /// a conditional, the `:` may belong to the conditional instead; it is a
    /// return type only if the whole arrow function can be parsed and is
    /// followed by the conditional's own `:`. A list that never committed
    /// must at least be followed by `=>` after the type.
    fn is_arrow_return_type(&mut self, ctx: Context, state: Tristate) -> bool {
        if ctx.contains(Context::IN_CONDITIONAL) {
            return self.look_ahead(|p| {
                p.next_token();
                p.parse_type_or_type_predicate(ctx);
                if !p.parse_optional(SyntaxKind::EqualsGreaterThanToken) {
                    return false;
                }
                p.parse_assignment_expression(ctx.without(Context::IN_CONDITIONAL));
                p.token() == SyntaxKind::ColonToken
            });
        }
        if state == Tristate::Unknown {
            return self.look_ahead(|p| {
                p.next_token();
                p.parse_type_or_type_predicate(ctx);
                p.token() == SyntaxKind::EqualsGreaterThanToken
            });
        }
        true
    }

    fn parse_cover_element(&mut self, ctx: Context) -> (CoverElement<'a>, Tristate) {
        let mark = self.mark();
        let token = self.token();

        if token == SyntaxKind::CommaToken {
            self.error_at_token(&messages::ARGUMENT_EXPRESSION_EXPECTED);
            let element = self.factory.create_omitted_expression(self.missing_data(SyntaxKind::OmittedExpression));
            return (CoverElement::Expression(element), Tristate::False);
        }

        if token.is_access_modifier()
            && self.next_token_is(|p| !p.has_preceding_line_break() && p.token().is_identifier_or_pattern_start())
        {
            let modifiers = self.parse_parameter_modifiers();
            let binding = self.parse_binding_name(ctx);
            let optional = self.parse_optional(SyntaxKind::QuestionToken);
            let binding = self.factory.alloc(binding);
            let parameter = self.parse_parameter_tail(ctx, mark, &[], modifiers, false, optional, binding);
            return (CoverElement::Parameter(parameter), Tristate::True);
        }

        if token == SyntaxKind::DotDotDotToken {
            return self.parse_cover_rest_element(ctx, mark);
        }

        if (token == SyntaxKind::YieldKeyword && ctx.contains(Context::YIELD))
            || token == SyntaxKind::LessThanToken && !ctx.contains(Context::JSX)
            || self.is_async_simple_arrow_head(ctx)
        {
            let expression = self.parse_assignment_expression(ctx);
            return (CoverElement::Expression(expression), Tristate::False);
        }

        let expression = self.parse_binary_expression(ctx, OperatorPrecedence::LOWEST);
        if is_binding_shaped(&expression) {
            return self.resolve_binding_element(ctx, mark, None, expression);
        }
        let expression = self.parse_assignment_rest(ctx, mark, expression);
        (CoverElement::Expression(expression), Tristate::False)
    }

    /// `...x`: a rest parameter or a spread argument.
    fn parse_cover_rest_element(&mut self, ctx: Context, mark: Mark) -> (CoverElement<'a>, Tristate) {
        self.next_token();
        let operand = self.mark();
        let expression = self.parse_binary_expression(ctx, OperatorPrecedence::LOWEST);
        if is_binding_shaped(&expression) {
            return self.resolve_binding_element(ctx, mark, Some(operand), expression);
        }
        let expression = self.parse_assignment_rest(ctx, operand, expression);
        (self.spread_element(mark, expression), Tristate::False)
    }

    /// Decide what an identifier or pattern element is from the token after
    /// it. `mark` is the start of the element, including any `...`; `rest`
    /// holds the start of the operand after `...`.
    fn resolve_binding_element(
        &mut self,
        ctx: Context,
        mark: Mark,
        rest: Option<Mark>,
        binding: Expression<'a>,
    ) -> (CoverElement<'a>, Tristate) {
        let factory = self.factory;
        let operand = rest.unwrap_or(mark);
        let is_rest = rest.is_some();
        match self.token() {
            SyntaxKind::QuestionToken => {
                let binding = factory.alloc(binding);
                let after = self.look_ahead(|p| {
                    p.next_token();
                    p.token()
                });
                let maybe_conditional = !matches!(
                    after,
                    SyntaxKind::ColonToken
                        | SyntaxKind::CommaToken
                        | SyntaxKind::CloseParenToken
                        | SyntaxKind::EqualsToken
                ) && after.can_start_expression();
                if maybe_conditional {
                    if let Some(conditional) = self.try_parse(|p| p.parse_cover_conditional(ctx, operand, binding)) {
                        return (self.argument_element(mark, is_rest, conditional), Tristate::False);
                    }
                }
                self.next_token();
                let parameter = self.parse_parameter_tail(ctx, mark, &[], ModifierFlags::NONE, is_rest, true, binding);
                (CoverElement::Parameter(parameter), Tristate::True)
            }
            SyntaxKind::ColonToken => {
                let binding = factory.alloc(binding);
                let parameter = self.parse_parameter_tail(ctx, mark, &[], ModifierFlags::NONE, is_rest, false, binding);
                (CoverElement::Parameter(parameter), Tristate::True)
            }
            SyntaxKind::EqualsToken if is_rest => {
                let binding = factory.alloc(binding);
                let parameter = self.parse_parameter_tail(ctx, mark, &[], ModifierFlags::NONE, true, false, binding);
                (CoverElement::Parameter(parameter), Tristate::True)
            }
            SyntaxKind::EqualsToken => {
                let assignment = self.parse_assignment_rest(ctx, mark, binding);
                (CoverElement::Expression(assignment), Tristate::Unknown)
            }
            // Compound assignment never binds a parameter.
            token if token.is_assignment_operator() => {
                let assignment = self.parse_assignment_rest(ctx, operand, binding);
                (self.argument_element(mark, is_rest, assignment), Tristate::False)
            }
            SyntaxKind::EqualsGreaterThanToken if !is_rest => {
                let arrow = self.parse_assignment_rest(ctx, mark, binding);
                (CoverElement::Expression(arrow), Tristate::False)
            }
            SyntaxKind::CloseParenToken
                if is_rest
                    && self.next_token_is(|p| p.token() == SyntaxKind::EqualsGreaterThanToken) =>
            {
                let binding = factory.alloc(binding);
                let parameter = factory.create_formal_parameter(
                    self.finish(mark, SyntaxKind::FormalParameter),
                    &[],
                    true,
                    binding,
                    false,
                    None,
                    None,
                );
                (CoverElement::Parameter(parameter), Tristate::True)
            }
            _ if is_rest => (self.spread_element(mark, binding), Tristate::Unknown),
            _ => (CoverElement::Expression(binding), Tristate::Unknown),
        }
    }

    /// An element that can only be an argument, spread when it followed
    /// `...`.
    fn argument_element(&self, mark: Mark, spread: bool, expression: Expression<'a>) -> CoverElement<'a> {
        if spread {
            self.spread_element(mark, expression)
        } else {
            CoverElement::Expression(expression)
        }
    }

    /// `? whenTrue : whenFalse` after a binding-shaped condition. Fails
    /// without a `:`, leaving the `?` to mark an optional parameter.
    fn parse_cover_conditional(
        &mut self,
        ctx: Context,
        mark: Mark,
        condition: &'a Expression<'a>,
    ) -> Option<Expression<'a>> {
        self.parse_expected(SyntaxKind::QuestionToken);
        let when_true = self.parse_assignment_expression(ctx.with(Context::IN_CONDITIONAL));
        if !self.parse_optional(SyntaxKind::ColonToken) {
            return None;
        }
        let when_false = self.parse_assignment_expression(ctx);
        let factory = self.factory;
        Some(factory.create_conditional(
            self.finish(mark, SyntaxKind::ConditionalExpression),
            condition,
            factory.alloc(when_true),
            factory.alloc(when_false),
        ))
    }

    fn spread_element(&self, mark: Mark, expression: Expression<'a>) -> CoverElement<'a> {
        let factory = self.factory;
        let spread = factory.create_spread_element(self.finish(mark, SyntaxKind::SpreadElement), factory.alloc(expression));
        CoverElement::Expression(Expression::Spread(spread))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrowhead_options::ParseOptions;
    use bumpalo::Bump;

    fn cover<'a>(arena: &'a Bump, source: &'a str) -> (CoverResult<'a>, Parser<'a>) {
        let options = ParseOptions::script();
        let mut parser = Parser::new(arena, source, options);
        parser.next_token_with(Context::ALLOW_REGEXP);
        let ctx = Context::from_options(&options);
        let result = parser.parse_cover_call_expression_and_async_arrow_head(ctx, false);
        (result, parser)
    }

    fn arrow<'a>(result: CoverResult<'a>) -> ArrowParameters<'a> {
        match result {
            CoverResult::Arrow(parameters) => parameters,
            CoverResult::Arguments(arguments) => panic!("expected arrow parameters, got {arguments:?}"),
        }
    }

    fn arguments<'a>(result: CoverResult<'a>) -> &'a ArgumentList<'a> {
        match result {
            CoverResult::Arguments(arguments) => arguments,
            CoverResult::Arrow(parameters) => panic!("expected an argument list, got {parameters:?}"),
        }
    }

    #[test]
    fn test_two_identifiers_then_arrow() {
        let arena = Bump::new();
        let (result, parser) = cover(&arena, "(a, b) => a");
        let parameters = arrow(result);
        assert_eq!(parameters.elements.len(), 2);
        assert!(parameters.return_type.is_none());
        assert!(!parameters.trailing_comma);
        assert!(parameters
            .elements
            .iter()
            .all(|e| matches!(e, CoverElement::Expression(Expression::Identifier(_)))));
        assert_eq!(parser.token(), SyntaxKind::EqualsGreaterThanToken);
    }

    #[test]
    fn test_two_identifiers_without_arrow() {
        let arena = Bump::new();
        let (result, parser) = cover(&arena, "(a, b);");
        let list = arguments(result);
        assert_eq!(list.elements.len(), 2);
        assert!(!list.trailing_comma);
        assert_eq!(parser.token(), SyntaxKind::SemicolonToken);
        assert!(parser.diagnostics.is_empty());
    }

    #[test]
    fn test_optional_typed_parameter() {
        let arena = Bump::new();
        let (result, _) = cover(&arena, "(a?: number) => a");
        let parameters = arrow(result);
        let [CoverElement::Parameter(parameter)] = parameters.elements else {
            panic!("expected a single formal parameter");
        };
        assert!(parameter.optional);
        assert!(!parameter.rest);
        assert!(matches!(parameter.type_annotation, Some(TypeNode::Keyword(data)) if data.kind == SyntaxKind::NumberKeyword));
    }

    #[test]
    fn test_conditional_argument() {
        let arena = Bump::new();
        let (result, parser) = cover(&arena, "(a ? b : c)");
        let list = arguments(result);
        assert!(matches!(list.elements, [CoverElement::Expression(Expression::Conditional(_))]));
        assert!(parser.diagnostics.is_empty());
    }

    #[test]
    fn test_rest_parameter() {
        let arena = Bump::new();
        let (result, _) = cover(&arena, "(...rest) => rest");
        let parameters = arrow(result);
        let [CoverElement::Parameter(parameter)] = parameters.elements else {
            panic!("expected a single rest parameter");
        };
        assert!(parameter.rest);
        assert_eq!(parameter.data.range.pos, 1);
    }

    #[test]
    fn test_trailing_comma_either_way() {
        let arena = Bump::new();
        let (result, _) = cover(&arena, "(a,) => a");
        let parameters = arrow(result);
        assert_eq!(parameters.elements.len(), 1);
        assert!(parameters.trailing_comma);

        let (result, _) = cover(&arena, "(a,);");
        let list = arguments(result);
        assert_eq!(list.elements.len(), 1);
        assert!(list.trailing_comma);
    }

    #[test]
    fn test_missing_comma_is_reported_and_recovered() {
        let arena = Bump::new();
        let (result, parser) = cover(&arena, "(a b)");
        let list = arguments(result);
        assert_eq!(list.elements.len(), 2);
        assert!(list.data.has_errors());
        let diagnostics = parser.diagnostics.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is(&messages::_0_EXPECTED));
        assert_eq!(parser.token(), SyntaxKind::EndOfFileToken);
    }

    #[test]
    fn test_optional_parameter_with_default() {
        let arena = Bump::new();
        let (result, _) = cover(&arena, "(a? = 1) => a");
        let parameters = arrow(result);
        let [CoverElement::Parameter(parameter)] = parameters.elements else {
            panic!("expected a single formal parameter");
        };
        assert!(parameter.optional);
        assert!(parameter.initializer.is_some());
    }

    #[test]
    fn test_default_value_stays_ambiguous() {
        let arena = Bump::new();
        let (result, _) = cover(&arena, "(a = 1)");
        let list = arguments(result);
        assert!(matches!(list.elements, [CoverElement::Expression(Expression::Assignment(_))]));

        let (result, _) = cover(&arena, "(a = 1) => a");
        let parameters = arrow(result);
        assert!(matches!(parameters.elements, [CoverElement::Expression(Expression::Assignment(_))]));
    }

    #[test]
    fn test_return_type_annotation() {
        let arena = Bump::new();
        let (result, parser) = cover(&arena, "(a: string): string => a");
        let parameters = arrow(result);
        assert!(parameters.return_type.is_some());
        assert_eq!(parser.token(), SyntaxKind::EqualsGreaterThanToken);
    }

    #[test]
    fn test_colon_without_arrow_is_not_a_return_type() {
        let arena = Bump::new();
        let (result, parser) = cover(&arena, "(a): b");
        arguments(result);
        assert_eq!(parser.token(), SyntaxKind::ColonToken);
    }

    #[test]
    fn test_access_modifier_commits_to_parameter() {
        let arena = Bump::new();
        let (result, _) = cover(&arena, "(public a)");
        let parameters_state = match result {
            CoverResult::Arguments(list) => list.elements,
            CoverResult::Arrow(parameters) => parameters.elements,
        };
        let [CoverElement::Parameter(parameter)] = parameters_state else {
            panic!("expected a parameter property");
        };
        assert!(parameter.data.modifier_flags.contains(ModifierFlags::PUBLIC));
    }

    #[test]
    fn test_nested_arrow_element_owns_its_body() {
        let arena = Bump::new();
        let (result, _) = cover(&arena, "(x => x, y)");
        let list = arguments(result);
        assert!(matches!(
            list.elements,
            [CoverElement::Expression(Expression::ArrowFunction(_)), CoverElement::Expression(Expression::Identifier(_))]
        ));
    }

    #[test]
    fn test_spread_argument() {
        let arena = Bump::new();
        let (result, _) = cover(&arena, "(...items, last)");
        let list = arguments(result);
        assert!(matches!(list.elements[0], CoverElement::Expression(Expression::Spread(_))));
    }
}
