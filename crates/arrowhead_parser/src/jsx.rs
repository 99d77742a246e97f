//! JSX elements, fragments, attributes and children.
//!
//! Children are scanned with [`Scanner::scan_jsx_token`] so that text runs
//! come back as a single `JsxText` token; tag names and attributes use the
//! ordinary scanner. After the `>` that closes an element the next token is
//! scanned as a child token when the element is itself a child, and as an
//! ordinary token when it ends an expression.
//!
//! [`Scanner::scan_jsx_token`]: arrowhead_scanner::Scanner::scan_jsx_token

use arrowhead_ast::node::*;
use arrowhead_ast::syntax_kind::SyntaxKind;
use arrowhead_ast::types::TokenFlags;
use arrowhead_diagnostics::messages;

use crate::context::Context;
use crate::parser::Parser;

fn tag_name_data(tag_name: &JsxTagName<'_>) -> NodeData {
    match tag_name {
        JsxTagName::Identifier(identifier) => identifier.data,
        JsxTagName::Namespaced(name) => name.data,
        JsxTagName::PropertyAccess(access) => access.data,
    }
}

impl<'a> Parser<'a> {
    /// Parse `<tag ...>...</tag>`, `<tag ... />` or `<>...</>` at the `<`.
    /// `in_expression_context` is false for an element nested as a child.
    pub(crate) fn parse_jsx_element_or_fragment(&mut self, ctx: Context, in_expression_context: bool) -> Expression<'a> {
        match self.nested(|p| p.parse_jsx_element_worker(ctx, in_expression_context)) {
            Some(element) => element,
            None => self.missing_expression(),
        }
    }

    fn parse_jsx_element_worker(&mut self, ctx: Context, in_expression_context: bool) -> Expression<'a> {
        let ctx = ctx.without(Context::DISALLOW_IN | Context::IN_CONDITIONAL);
        let mark = self.mark();
        self.parse_expected(SyntaxKind::LessThanToken);

        if self.token() == SyntaxKind::GreaterThanToken {
            self.next_jsx_child_token();
            let children = self.parse_jsx_children(ctx);
            self.parse_jsx_fragment_closing(in_expression_context);
            return self
                .factory
                .create_jsx_fragment(self.finish(mark, SyntaxKind::JsxFragment), children);
        }

        let tag_name = self.parse_jsx_tag_name();
        let type_arguments = if self.token() == SyntaxKind::LessThanToken {
            Some(self.parse_type_arguments(ctx))
        } else {
            None
        };
        let attributes = self.parse_jsx_attributes(ctx);
        let factory = self.factory;

        if self.token() == SyntaxKind::SlashToken {
            self.next_token();
            self.close_jsx_tag(in_expression_context);
            let element = factory.create_jsx_opening_element(
                self.finish(mark, SyntaxKind::JsxSelfClosingElement),
                tag_name,
                type_arguments,
                attributes,
            );
            return Expression::JsxSelfClosingElement(element);
        }

        self.close_jsx_tag(false);
        let opening_data = self.finish(mark, SyntaxKind::JsxOpeningElement);
        let children = self.parse_jsx_children(ctx);
        let closing = self.parse_jsx_closing_element(&tag_name, in_expression_context);
        let opening = factory.create_jsx_opening_element(opening_data, tag_name, type_arguments, attributes);
        factory.create_jsx_element(
            self.finish(mark, SyntaxKind::JsxElement),
            factory.alloc(opening),
            children,
            closing,
        )
    }

    /// Consume the current token and scan the next one inside children.
    fn next_jsx_child_token(&mut self) -> SyntaxKind {
        self.flush_scanner_diagnostics();
        self.scanner.scan_jsx_token()
    }

    /// Consume the `>` that ends a tag.
    fn close_jsx_tag(&mut self, in_expression_context: bool) {
        if self.token() != SyntaxKind::GreaterThanToken {
            self.error_expected(SyntaxKind::GreaterThanToken);
            return;
        }
        if in_expression_context {
            self.next_token();
        } else {
            self.next_jsx_child_token();
        }
    }

    /// `div`, `data-grid`, `svg:path` or `Foo.Bar.Baz`.
    fn parse_jsx_tag_name(&mut self) -> JsxTagName<'a> {
        let mark = self.mark();
        self.scanner.scan_jsx_identifier();
        let token = self.token();
        if token != SyntaxKind::Identifier && !token.is_keyword() {
            self.error_at_token(&messages::IDENTIFIER_EXPECTED);
            return JsxTagName::Identifier(self.missing_identifier());
        }
        let name = self.parse_identifier_token();

        let factory = self.factory;
        if self.parse_optional(SyntaxKind::ColonToken) {
            self.scanner.scan_jsx_identifier();
            let local = self.parse_identifier_name();
            return factory.create_jsx_namespaced_name(self.finish(mark, SyntaxKind::JsxNamespacedName), name, local);
        }

        let mut tag_name = JsxTagName::Identifier(name);
        while self.parse_optional(SyntaxKind::DotToken) {
            let member = self.parse_identifier_name();
            tag_name = factory.create_jsx_tag_name_property_access(
                self.finish(mark, SyntaxKind::JsxTagNamePropertyAccess),
                tag_name,
                member,
            );
        }
        tag_name
    }

    fn parse_jsx_attributes(&mut self, ctx: Context) -> &'a JsxAttributesList<'a> {
        let mark = self.mark();
        let mut attributes = Vec::new();
        while !matches!(
            self.token(),
            SyntaxKind::GreaterThanToken | SyntaxKind::SlashToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            if self.token() == SyntaxKind::OpenBraceToken {
                attributes.push(self.parse_jsx_spread_attribute(ctx));
            } else if self.token() == SyntaxKind::Identifier || self.token().is_keyword() {
                attributes.push(self.parse_jsx_attribute(ctx));
            } else {
                self.error_at_token(&messages::IDENTIFIER_EXPECTED);
                break;
            }
            if self.token_start() == start {
                break;
            }
        }
        let factory = self.factory;
        factory.create_jsx_attributes_list(
            self.finish(mark, SyntaxKind::JsxAttributesList),
            factory.alloc_list(attributes),
        )
    }

    /// `{...props}`
    fn parse_jsx_spread_attribute(&mut self, ctx: Context) -> JsxAttributeLike<'a> {
        let mark = self.mark();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        self.parse_expected(SyntaxKind::DotDotDotToken);
        let expression = self.parse_expression(ctx);
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let factory = self.factory;
        factory.create_jsx_spread_attribute(
            self.finish(mark, SyntaxKind::JsxSpreadAttribute),
            factory.alloc(expression),
        )
    }

    /// `name`, `name="text"`, `name={expression}` or `name=<element />`.
    fn parse_jsx_attribute(&mut self, ctx: Context) -> JsxAttributeLike<'a> {
        let mark = self.mark();
        let factory = self.factory;
        self.scanner.scan_jsx_identifier();
        let identifier = self.parse_identifier_token();
        let name = if self.parse_optional(SyntaxKind::ColonToken) {
            self.scanner.scan_jsx_identifier();
            let local = self.parse_identifier_name();
            factory.create_jsx_namespaced_name(self.finish(mark, SyntaxKind::JsxNamespacedName), identifier, local)
        } else {
            JsxTagName::Identifier(identifier)
        };

        let initializer = if self.token() == SyntaxKind::EqualsToken {
            self.flush_scanner_diagnostics();
            match self.scanner.scan_jsx_attribute_value() {
                SyntaxKind::StringLiteral => Some(JsxAttributeValue::StringLiteral(self.parse_literal())),
                SyntaxKind::OpenBraceToken => {
                    let expression = self.parse_jsx_expression(ctx, false);
                    Some(JsxAttributeValue::Expression(factory.alloc(expression)))
                }
                SyntaxKind::LessThanToken => {
                    let element = self.parse_jsx_element_or_fragment(ctx, true);
                    Some(JsxAttributeValue::Element(factory.alloc(element)))
                }
                _ => {
                    self.error_at_token(&messages::EXPRESSION_EXPECTED);
                    None
                }
            }
        } else {
            None
        };

        factory.create_jsx_attribute(self.finish(mark, SyntaxKind::JsxAttribute), name, initializer)
    }

    /// `{expression}` as an attribute value or a child; `{}` and
    /// `{/* comment */}` have no expression.
    fn parse_jsx_expression(&mut self, ctx: Context, in_children: bool) -> JsxExpression<'a> {
        let mark = self.mark();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let dot_dot_dot = in_children && self.parse_optional(SyntaxKind::DotDotDotToken);
        let expression = if self.token() == SyntaxKind::CloseBraceToken {
            None
        } else {
            let expression = self.parse_expression(ctx);
            Some(self.factory.alloc(expression))
        };

        if !in_children {
            self.parse_expected(SyntaxKind::CloseBraceToken);
        } else if self.token() == SyntaxKind::CloseBraceToken {
            self.next_jsx_child_token();
        } else {
            self.error_expected(SyntaxKind::CloseBraceToken);
        }
        self.factory
            .create_jsx_expression(self.finish(mark, SyntaxKind::JsxExpression), dot_dot_dot, expression)
    }

    /// Children up to `</` or the end of input.
    fn parse_jsx_children(&mut self, ctx: Context) -> &'a JsxChildrenList<'a> {
        let mark = self.mark();
        let mut children = Vec::new();
        loop {
            match self.token() {
                SyntaxKind::JsxText => {
                    let text_mark = self.mark();
                    let text = self.token_text();
                    let only_trivia = text.trim().is_empty()
                        && self
                            .scanner
                            .token_flags()
                            .contains(TokenFlags::PRECEDING_JSX_TEXT_LINE_BREAK);
                    self.next_jsx_child_token();
                    children.push(self.factory.create_jsx_text(
                        self.finish(text_mark, SyntaxKind::JsxText),
                        text,
                        only_trivia,
                    ));
                }
                SyntaxKind::OpenBraceToken => {
                    children.push(JsxChild::Expression(self.parse_jsx_expression(ctx, true)));
                }
                SyntaxKind::LessThanToken => {
                    children.push(JsxChild::Element(self.parse_jsx_element_or_fragment(ctx, false)));
                }
                SyntaxKind::LessThanSlashToken | SyntaxKind::EndOfFileToken => break,
                // Left over after a missing `}`.
                _ => {
                    self.next_jsx_child_token();
                }
            }
        }
        let factory = self.factory;
        factory.create_jsx_children_list(
            self.finish(mark, SyntaxKind::JsxChildrenList),
            factory.alloc_list(children),
        )
    }

    /// `</tag>` matching `opening`.
    fn parse_jsx_closing_element(
        &mut self,
        opening: &JsxTagName<'a>,
        in_expression_context: bool,
    ) -> &'a JsxClosingElement<'a> {
        let mark = self.mark();
        if self.token() != SyntaxKind::LessThanSlashToken {
            let opening_data = tag_name_data(opening);
            let tag_text = self.text_of(&opening_data);
            self.error_with_argument_at(
                opening_data.range.to_span(),
                &messages::JSX_ELEMENT_0_HAS_NO_CORRESPONDING_CLOSING_TAG,
                tag_text,
            );
            let missing = JsxTagName::Identifier(self.missing_identifier());
            return self
                .factory
                .create_jsx_closing_element(self.missing_data(SyntaxKind::JsxClosingElement), missing);
        }

        self.next_token();
        let tag_name = self.parse_jsx_tag_name();
        if !tag_name.same_as(opening) {
            let opening_text = self.text_of(&tag_name_data(opening));
            self.error_with_argument_at(
                tag_name_data(&tag_name).range.to_span(),
                &messages::EXPECTED_CORRESPONDING_JSX_CLOSING_TAG_FOR_0,
                opening_text,
            );
        }
        self.close_jsx_tag(in_expression_context);
        self.factory
            .create_jsx_closing_element(self.finish(mark, SyntaxKind::JsxClosingElement), tag_name)
    }

    /// `</>` after the children of a fragment.
    fn parse_jsx_fragment_closing(&mut self, in_expression_context: bool) {
        if self.token() != SyntaxKind::LessThanSlashToken {
            self.error_with_argument_at(self.token_span(), &messages::_0_EXPECTED, "</>");
            return;
        }
        self.next_token();
        if self.token() != SyntaxKind::GreaterThanToken {
            self.error_with_argument_at(self.token_span(), &messages::_0_EXPECTED, "</>");
            if self.token() == SyntaxKind::Identifier || self.token().is_keyword() {
                self.parse_jsx_tag_name();
            }
        }
        self.close_jsx_tag(in_expression_context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrowhead_options::ParseOptions;
    use bumpalo::Bump;

    fn parse_jsx<'a>(arena: &'a Bump, source: &'a str) -> (&'a Expression<'a>, crate::ParseResult<'a>) {
        let result = crate::parse(arena, source, &ParseOptions::module().with_jsx(true));
        let Some(Statement::ExpressionStatement(statement)) = result.root.statements.first() else {
            panic!("expected an expression statement in {source:?}");
        };
        (statement.expression, result)
    }

    #[test]
    fn test_element_with_text_and_expression_children() {
        let arena = Bump::new();
        let (expression, result) = parse_jsx(&arena, "<div class=\"a\">hi {name}</div>;");
        assert!(!result.has_errors(), "{:?}", result.diagnostics);
        let Expression::JsxElement(element) = expression else {
            panic!("expected a JSX element, got {expression:?}");
        };
        assert_eq!(element.opening_element.attributes.attributes.len(), 1);
        assert!(matches!(
            element.children.children,
            [JsxChild::Text(text), JsxChild::Expression(_)] if text.text == "hi "
        ));
        assert_eq!(element.data.range.pos, 0);
        assert_eq!(element.data.range.end, 30);
    }

    #[test]
    fn test_self_closing_with_dashed_and_spread_attributes() {
        let arena = Bump::new();
        let (expression, result) = parse_jsx(&arena, "<Foo.Bar data-id={1} {...rest} />;");
        assert!(!result.has_errors(), "{:?}", result.diagnostics);
        let Expression::JsxSelfClosingElement(element) = expression else {
            panic!("expected a self-closing element, got {expression:?}");
        };
        assert!(matches!(element.tag_name, JsxTagName::PropertyAccess(_)));
        let [JsxAttributeLike::Attribute(attribute), JsxAttributeLike::Spread(_)] = element.attributes.attributes else {
            panic!("unexpected attributes {:?}", element.attributes.attributes);
        };
        assert!(matches!(&attribute.name, JsxTagName::Identifier(id) if id.text == "data-id"));
    }

    #[test]
    fn test_fragment_and_whitespace_only_text() {
        let arena = Bump::new();
        let (expression, result) = parse_jsx(&arena, "<>\n  <a />\n</>;");
        assert!(!result.has_errors(), "{:?}", result.diagnostics);
        let Expression::JsxFragment(fragment) = expression else {
            panic!("expected a fragment, got {expression:?}");
        };
        let children = fragment.children.children;
        assert_eq!(children.len(), 3);
        assert!(matches!(children[0], JsxChild::Text(text) if text.contains_only_trivia_whitespace));
        assert!(matches!(children[1], JsxChild::Element(Expression::JsxSelfClosingElement(_))));
    }

    #[test]
    fn test_mismatched_closing_tag() {
        let arena = Bump::new();
        let (_, result) = parse_jsx(&arena, "<a></b>;");
        let diagnostics = result.diagnostics.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].is(&messages::EXPECTED_CORRESPONDING_JSX_CLOSING_TAG_FOR_0));
    }

    #[test]
    fn test_unclosed_element() {
        let arena = Bump::new();
        let (expression, result) = parse_jsx(&arena, "<a>text");
        assert!(matches!(expression, Expression::JsxElement(element) if element.data.has_errors()));
        assert!(result.diagnostics.diagnostics()[0].is(&messages::JSX_ELEMENT_0_HAS_NO_CORRESPONDING_CLOSING_TAG));
    }
}
