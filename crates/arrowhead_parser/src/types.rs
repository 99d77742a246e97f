//! Type annotations: type nodes, type parameters and arguments, and the
//! members of type literals and interfaces.

use arrowhead_ast::node::*;
use arrowhead_ast::syntax_kind::SyntaxKind;
use arrowhead_ast::types::*;
use arrowhead_diagnostics::messages;

use crate::context::Context;
use crate::declarations::is_property_name_start;
use crate::parser::{Mark, Parser};

fn is_type_member_start(token: SyntaxKind) -> bool {
    matches!(token, SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken) || is_property_name_start(token)
}

fn is_literal_type_start(token: SyntaxKind) -> bool {
    matches!(
        token,
        SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
    )
}

impl<'a> Parser<'a> {
    /// A zero-width type reference standing in for a missing type.
    fn missing_type(&self) -> TypeNode<'a> {
        self.factory.create_type_reference(
            self.missing_data(SyntaxKind::TypeReference),
            EntityName::Identifier(self.missing_identifier()),
            None,
        )
    }

    pub(crate) fn parse_type(&mut self, ctx: Context) -> TypeNode<'a> {
        match self.nested(|p| p.parse_type_worker(ctx)) {
            Some(type_node) => type_node,
            None => self.missing_type(),
        }
    }

    fn parse_type_worker(&mut self, ctx: Context) -> TypeNode<'a> {
        if self.is_start_of_function_or_constructor_type() {
            return self.parse_function_or_constructor_type(ctx);
        }
        let mark = self.mark();
        let check_type = self.parse_union_type(ctx);
        if !ctx.contains(Context::ALLOW_CONDITIONAL_TYPES)
            || self.token() != SyntaxKind::ExtendsKeyword
            || self.has_preceding_line_break()
        {
            return check_type;
        }

        self.next_token();
        let extends_type = self.parse_type(ctx.without(Context::ALLOW_CONDITIONAL_TYPES));
        self.parse_expected(SyntaxKind::QuestionToken);
        let branch_ctx = ctx.with(Context::ALLOW_CONDITIONAL_TYPES);
        let true_type = self.parse_type(branch_ctx);
        self.parse_expected(SyntaxKind::ColonToken);
        let false_type = self.parse_type(branch_ctx);
        let factory = self.factory;
        factory.create_conditional_type(
            self.finish(mark, SyntaxKind::ConditionalType),
            factory.alloc(check_type),
            factory.alloc(extends_type),
            factory.alloc(true_type),
            factory.alloc(false_type),
        )
    }

    fn is_start_of_function_or_constructor_type(&mut self) -> bool {
        match self.token() {
            SyntaxKind::LessThanToken | SyntaxKind::NewKeyword => true,
            SyntaxKind::OpenParenToken => self.look_ahead(|p| p.is_unambiguously_start_of_function_type()),
            _ => false,
        }
    }

    /// After `(`: a parameter list followed by `=>`, not a parenthesized type.
    fn is_unambiguously_start_of_function_type(&mut self) -> bool {
        self.next_token();
        if matches!(
            self.token(),
            SyntaxKind::CloseParenToken | SyntaxKind::DotDotDotToken
        ) {
            return true;
        }
        if self.skip_parameter_start() {
            if matches!(
                self.token(),
                SyntaxKind::ColonToken
                    | SyntaxKind::CommaToken
                    | SyntaxKind::QuestionToken
                    | SyntaxKind::EqualsToken
            ) {
                return true;
            }
            if self.token() == SyntaxKind::CloseParenToken {
                self.next_token();
                return self.token() == SyntaxKind::EqualsGreaterThanToken;
            }
        }
        false
    }

    fn skip_parameter_start(&mut self) -> bool {
        while self.token().is_access_modifier() {
            self.next_token();
        }
        let token = self.token();
        if token.is_identifier_like() || token == SyntaxKind::ThisKeyword {
            self.next_token();
            return true;
        }
        if matches!(token, SyntaxKind::OpenBracketToken | SyntaxKind::OpenBraceToken) {
            let before = self.diagnostics.len();
            self.parse_binding_name(Context::NONE);
            return self.diagnostics.len() == before;
        }
        false
    }

    fn parse_function_or_constructor_type(&mut self, ctx: Context) -> TypeNode<'a> {
        let mark = self.mark();
        let is_constructor = self.parse_optional(SyntaxKind::NewKeyword);
        let type_parameters = self.parse_optional_type_parameters(ctx);
        let parameters = self.parse_formal_parameter_list(ctx);
        let return_type = if self.parse_expected(SyntaxKind::EqualsGreaterThanToken) {
            let return_type = self.parse_type_or_type_predicate(ctx);
            Some(self.factory.alloc(return_type))
        } else {
            None
        };
        let kind = if is_constructor {
            SyntaxKind::ConstructorType
        } else {
            SyntaxKind::FunctionType
        };
        let signature = self.factory.create_signature(
            self.finish(mark, kind),
            type_parameters,
            parameters,
            return_type,
        );
        if is_constructor {
            TypeNode::ConstructorType(signature)
        } else {
            TypeNode::FunctionType(signature)
        }
    }

    fn parse_union_type(&mut self, ctx: Context) -> TypeNode<'a> {
        self.parse_union_or_intersection_type(ctx, SyntaxKind::BarToken, SyntaxKind::UnionType)
    }

    fn parse_union_or_intersection_type(
        &mut self,
        ctx: Context,
        operator: SyntaxKind,
        kind: SyntaxKind,
    ) -> TypeNode<'a> {
        let mark = self.mark();
        self.parse_optional(operator);
        let first = self.parse_union_or_intersection_member(ctx, operator);
        if self.token() != operator {
            return first;
        }

        let mut types = vec![first];
        while self.parse_optional(operator) {
            types.push(self.parse_union_or_intersection_member(ctx, operator));
        }
        let factory = self.factory;
        factory.create_union_or_intersection_type(self.finish(mark, kind), factory.alloc_list(types))
    }

    fn parse_union_or_intersection_member(&mut self, ctx: Context, operator: SyntaxKind) -> TypeNode<'a> {
        if operator == SyntaxKind::BarToken {
            self.parse_union_or_intersection_type(ctx, SyntaxKind::AmpersandToken, SyntaxKind::IntersectionType)
        } else if self.is_start_of_function_or_constructor_type() {
            self.parse_function_or_constructor_type(ctx)
        } else {
            self.parse_type_operator_or_higher(ctx)
        }
    }

    fn parse_type_operator_or_higher(&mut self, ctx: Context) -> TypeNode<'a> {
        match self.nested(|p| p.parse_type_operator_worker(ctx)) {
            Some(type_node) => type_node,
            None => self.missing_type(),
        }
    }

    fn parse_type_operator_worker(&mut self, ctx: Context) -> TypeNode<'a> {
        let mark = self.mark();
        match self.token() {
            operator @ (SyntaxKind::KeyOfKeyword | SyntaxKind::UniqueKeyword | SyntaxKind::ReadonlyKeyword) => {
                self.next_token();
                let operand = self.parse_type_operator_or_higher(ctx);
                let factory = self.factory;
                factory.create_type_operator(
                    self.finish(mark, SyntaxKind::TypeOperator),
                    operator,
                    factory.alloc(operand),
                )
            }
            SyntaxKind::InferKeyword => {
                self.next_token();
                let parameter_mark = self.mark();
                let name = self.parse_identifier(ctx);
                let constraint = self.try_parse(|p| {
                    if !p.parse_optional(SyntaxKind::ExtendsKeyword) {
                        return None;
                    }
                    let constraint = p.parse_type(ctx.without(Context::ALLOW_CONDITIONAL_TYPES));
                    if !ctx.contains(Context::ALLOW_CONDITIONAL_TYPES) && p.token() == SyntaxKind::QuestionToken {
                        return None;
                    }
                    Some(constraint)
                });
                let factory = self.factory;
                let type_parameter = factory.create_type_parameter(
                    self.finish(parameter_mark, SyntaxKind::TypeParameter),
                    name,
                    constraint.map(|constraint| factory.alloc(constraint)),
                    None,
                );
                factory.create_infer_type(self.finish(mark, SyntaxKind::InferType), factory.alloc(type_parameter))
            }
            _ => self.parse_postfix_type(ctx),
        }
    }

    fn parse_postfix_type(&mut self, ctx: Context) -> TypeNode<'a> {
        let mark = self.mark();
        let mut type_node = self.parse_non_array_type(ctx);
        while self.token() == SyntaxKind::OpenBracketToken && !self.has_preceding_line_break() {
            self.next_token();
            let factory = self.factory;
            if self.parse_optional(SyntaxKind::CloseBracketToken) {
                type_node = factory.create_array_type(self.finish(mark, SyntaxKind::ArrayType), factory.alloc(type_node));
            } else {
                let index_type = self.parse_type(ctx.with(Context::ALLOW_CONDITIONAL_TYPES));
                self.parse_expected(SyntaxKind::CloseBracketToken);
                type_node = factory.create_indexed_access_type(
                    self.finish(mark, SyntaxKind::IndexedAccessType),
                    factory.alloc(type_node),
                    factory.alloc(index_type),
                );
            }
        }
        type_node
    }

    fn parse_non_array_type(&mut self, ctx: Context) -> TypeNode<'a> {
        let mark = self.mark();
        let token = self.token();
        match token {
            _ if token.is_keyword_type()
                && !self.next_token_is(|p| p.token() == SyntaxKind::DotToken) =>
            {
                self.next_token();
                self.factory.create_keyword_type(self.finish(mark, token))
            }
            SyntaxKind::ThisKeyword => {
                self.next_token();
                self.factory.create_this_type(self.finish(mark, SyntaxKind::ThisType))
            }
            SyntaxKind::TypeOfKeyword => {
                self.next_token();
                let name = self.parse_entity_name(ctx);
                self.factory.create_type_query(self.finish(mark, SyntaxKind::TypeQuery), name)
            }
            _ if is_literal_type_start(token) => {
                let literal = if matches!(token, SyntaxKind::TrueKeyword | SyntaxKind::FalseKeyword) {
                    self.next_token();
                    self.factory.create_keyword_expression(self.finish(mark, token))
                } else {
                    Expression::Literal(self.parse_literal())
                };
                let factory = self.factory;
                factory.create_literal_type(self.finish(mark, SyntaxKind::LiteralType), factory.alloc(literal))
            }
            SyntaxKind::MinusToken
                if self.next_token_is(|p| {
                    matches!(p.token(), SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral)
                }) =>
            {
                self.next_token();
                let operand = Expression::Literal(self.parse_literal());
                let factory = self.factory;
                let negated = factory.create_prefix_unary(
                    self.finish(mark, SyntaxKind::PrefixUnaryExpression),
                    SyntaxKind::MinusToken,
                    factory.alloc(operand),
                );
                factory.create_literal_type(self.finish(mark, SyntaxKind::LiteralType), factory.alloc(negated))
            }
            SyntaxKind::OpenBraceToken => {
                let members = self.parse_type_members(ctx);
                self.factory.create_type_literal(self.finish(mark, SyntaxKind::TypeLiteral), members)
            }
            SyntaxKind::OpenBracketToken => self.parse_tuple_type(ctx),
            SyntaxKind::OpenParenToken => {
                self.next_token();
                let inner = self.parse_type(ctx.with(Context::ALLOW_CONDITIONAL_TYPES));
                self.parse_expected(SyntaxKind::CloseParenToken);
                let factory = self.factory;
                factory.create_wrapped_type(self.finish(mark, SyntaxKind::ParenthesizedType), factory.alloc(inner))
            }
            _ if token.is_identifier_like() => self.parse_type_reference(ctx),
            _ => {
                self.error_at_token(&messages::TYPE_EXPECTED);
                self.missing_type()
            }
        }
    }

    fn parse_tuple_type(&mut self, ctx: Context) -> TypeNode<'a> {
        let mark = self.mark();
        let element_ctx = ctx.with(Context::ALLOW_CONDITIONAL_TYPES);
        let mut elements = Vec::new();
        self.parse_expected(SyntaxKind::OpenBracketToken);
        while !matches!(
            self.token(),
            SyntaxKind::CloseBracketToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            elements.push(self.parse_tuple_element(element_ctx));
            if self.token() == SyntaxKind::CloseBracketToken {
                break;
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                self.error_expected(SyntaxKind::CommaToken);
                if self.token_start() == start {
                    break;
                }
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken);
        let factory = self.factory;
        factory.create_tuple_type(self.finish(mark, SyntaxKind::TupleType), factory.alloc_list(elements))
    }

    /// `T`, `T?`, `...T` or a labeled form of these; labels are dropped.
    fn parse_tuple_element(&mut self, ctx: Context) -> TypeNode<'a> {
        let mark = self.mark();
        let rest = self.parse_optional(SyntaxKind::DotDotDotToken);
        let mut optional = false;
        let labeled = self.token().is_identifier_like()
            && self.look_ahead(|p| {
                p.next_token();
                p.parse_optional(SyntaxKind::QuestionToken);
                p.token() == SyntaxKind::ColonToken
            });
        if labeled {
            self.next_token();
            optional = self.parse_optional(SyntaxKind::QuestionToken);
            self.parse_expected(SyntaxKind::ColonToken);
        }
        let element = self.parse_type(ctx);
        if !labeled && self.token() == SyntaxKind::QuestionToken {
            self.next_token();
            optional = true;
        }
        let factory = self.factory;
        let element = if optional {
            factory.create_wrapped_type(self.finish(mark, SyntaxKind::OptionalType), factory.alloc(element))
        } else {
            element
        };
        if rest {
            factory.create_wrapped_type(self.finish(mark, SyntaxKind::RestType), factory.alloc(element))
        } else {
            element
        }
    }

    /// `a` or `a.b.c`.
    fn parse_entity_name(&mut self, ctx: Context) -> EntityName<'a> {
        let mark = self.mark();
        let first = if self.token().is_identifier_like() {
            self.parse_identifier_token()
        } else {
            self.parse_identifier(ctx)
        };
        let mut name = EntityName::Identifier(first);
        while self.parse_optional(SyntaxKind::DotToken) {
            let right = self.parse_identifier_name();
            name = self
                .factory
                .create_qualified_name(self.finish(mark, SyntaxKind::QualifiedName), name, right);
        }
        name
    }

    pub(crate) fn parse_type_reference(&mut self, ctx: Context) -> TypeNode<'a> {
        let mark = self.mark();
        let name = self.parse_entity_name(ctx);
        let type_arguments = if self.token() == SyntaxKind::LessThanToken && !self.has_preceding_line_break() {
            Some(self.parse_type_arguments(ctx))
        } else {
            None
        };
        self.factory
            .create_type_reference(self.finish(mark, SyntaxKind::TypeReference), name, type_arguments)
    }

    /// `A, B<C>` after `extends` or `implements`.
    pub(crate) fn parse_heritage_type_list(&mut self, ctx: Context) -> NodeList<'a, TypeNode<'a>> {
        let mut types = vec![self.parse_type_reference(ctx)];
        while self.parse_optional(SyntaxKind::CommaToken) {
            types.push(self.parse_type_reference(ctx));
        }
        self.factory.alloc_list(types)
    }

    // ========================================================================
    // Type arguments and parameters
    // ========================================================================

    pub(crate) fn parse_type_arguments(&mut self, ctx: Context) -> NodeList<'a, TypeNode<'a>> {
        let argument_ctx = ctx.with(Context::ALLOW_CONDITIONAL_TYPES);
        let mut arguments = Vec::new();
        self.parse_expected(SyntaxKind::LessThanToken);
        while !matches!(
            self.token(),
            SyntaxKind::GreaterThanToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            arguments.push(self.parse_type(argument_ctx));
            if self.token() == SyntaxKind::GreaterThanToken {
                break;
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                self.error_expected(SyntaxKind::CommaToken);
                if self.token_start() == start {
                    break;
                }
            }
        }
        self.parse_expected(SyntaxKind::GreaterThanToken);
        self.factory.alloc_list(arguments)
    }

    /// Type arguments of a call or tagged template (`f<T>(x)`). Taken only
    /// when they parse cleanly and a `(` or template follows; otherwise
    /// nothing is consumed and `<` stays a relational operator.
    pub(crate) fn parse_type_arguments_in_expression(&mut self, ctx: Context) -> Option<NodeList<'a, TypeNode<'a>>> {
        if self.token() != SyntaxKind::LessThanToken {
            return None;
        }
        self.try_parse(|p| {
            let before = p.diagnostics.len();
            let arguments = p.parse_type_arguments(ctx);
            let follows = matches!(
                p.token(),
                SyntaxKind::OpenParenToken
                    | SyntaxKind::NoSubstitutionTemplateLiteral
                    | SyntaxKind::TemplateHead
            );
            (follows && p.diagnostics.len() == before).then_some(arguments)
        })
    }

    pub(crate) fn parse_optional_type_parameters(&mut self, ctx: Context) -> Option<NodeList<'a, TypeParameter<'a>>> {
        if self.token() == SyntaxKind::LessThanToken {
            Some(self.parse_type_parameter_list(ctx))
        } else {
            None
        }
    }

    pub(crate) fn parse_type_parameter_list(&mut self, ctx: Context) -> NodeList<'a, TypeParameter<'a>> {
        let type_ctx = ctx.with(Context::ALLOW_CONDITIONAL_TYPES);
        let mut parameters = Vec::new();
        self.parse_expected(SyntaxKind::LessThanToken);
        while !matches!(
            self.token(),
            SyntaxKind::GreaterThanToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            let mark = self.mark();
            if self.token() == SyntaxKind::ConstKeyword {
                self.next_token();
            }
            let name = self.parse_identifier(ctx);
            let factory = self.factory;
            let constraint = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
                Some(factory.alloc(self.parse_type(type_ctx)))
            } else {
                None
            };
            let default = if self.parse_optional(SyntaxKind::EqualsToken) {
                Some(factory.alloc(self.parse_type(type_ctx)))
            } else {
                None
            };
            parameters.push(factory.create_type_parameter(
                self.finish(mark, SyntaxKind::TypeParameter),
                name,
                constraint,
                default,
            ));
            if self.token() == SyntaxKind::GreaterThanToken {
                break;
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                self.error_expected(SyntaxKind::CommaToken);
                if self.token_start() == start {
                    break;
                }
            }
        }
        self.parse_expected(SyntaxKind::GreaterThanToken);
        self.factory.alloc_list(parameters)
    }

    // ========================================================================
    // Annotations
    // ========================================================================

    /// `: Type` if present.
    pub(crate) fn parse_type_annotation(&mut self, ctx: Context) -> Option<&'a TypeNode<'a>> {
        if self.parse_optional(SyntaxKind::ColonToken) {
            let factory = self.factory;
            Some(factory.alloc(self.parse_type(ctx)))
        } else {
            None
        }
    }

    /// `: Type` after a parameter list, where type predicates are allowed.
    pub(crate) fn parse_return_type(&mut self, ctx: Context) -> Option<&'a TypeNode<'a>> {
        if self.parse_optional(SyntaxKind::ColonToken) {
            let factory = self.factory;
            Some(factory.alloc(self.parse_type_or_type_predicate(ctx)))
        } else {
            None
        }
    }

    /// A type, or `x is T`, `asserts x`, `asserts x is T`.
    pub(crate) fn parse_type_or_type_predicate(&mut self, ctx: Context) -> TypeNode<'a> {
        let mark = self.mark();
        let asserts = self.token() == SyntaxKind::AssertsKeyword
            && self.next_token_is(|p| {
                !p.has_preceding_line_break()
                    && (p.token().is_identifier_like() || p.token() == SyntaxKind::ThisKeyword)
            });
        if asserts {
            self.next_token();
            let parameter_name = self.parse_identifier_token();
            let factory = self.factory;
            let type_node = if self.parse_optional(SyntaxKind::IsKeyword) {
                Some(factory.alloc(self.parse_type(ctx)))
            } else {
                None
            };
            return factory.create_type_predicate(
                self.finish(mark, SyntaxKind::TypePredicate),
                true,
                parameter_name,
                type_node,
            );
        }

        let token = self.token();
        if (token.is_identifier_like() || token == SyntaxKind::ThisKeyword)
            && self.next_token_is(|p| p.token() == SyntaxKind::IsKeyword && !p.has_preceding_line_break())
        {
            let parameter_name = self.parse_identifier_token();
            self.next_token();
            let factory = self.factory;
            let type_node = factory.alloc(self.parse_type(ctx));
            return factory.create_type_predicate(
                self.finish(mark, SyntaxKind::TypePredicate),
                false,
                parameter_name,
                Some(type_node),
            );
        }
        self.parse_type(ctx)
    }

    // ========================================================================
    // Type members
    // ========================================================================

    /// `{ member; member, ... }` of a type literal or interface.
    pub(crate) fn parse_type_members(&mut self, ctx: Context) -> NodeList<'a, TypeElement<'a>> {
        let mut members = Vec::new();
        if !self.parse_expected(SyntaxKind::OpenBraceToken) {
            return &[];
        }
        let member_ctx = ctx.with(Context::ALLOW_CONDITIONAL_TYPES);
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            if !is_type_member_start(self.token()) {
                self.error_at_token(&messages::PROPERTY_OR_SIGNATURE_EXPECTED);
                self.next_token();
                continue;
            }
            match self.nested(|p| p.parse_type_member(member_ctx)) {
                Some(member) => members.push(member),
                None => break,
            }
            if !self.parse_optional(SyntaxKind::CommaToken) {
                self.parse_semicolon();
            }
            if self.token_start() == start {
                self.next_token();
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.factory.alloc_list(members)
    }

    fn parse_type_member(&mut self, ctx: Context) -> TypeElement<'a> {
        let mark = self.mark();
        match self.token() {
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken => {
                return TypeElement::CallSignature(self.parse_signature_member(ctx, mark, SyntaxKind::CallSignature));
            }
            SyntaxKind::NewKeyword
                if self.next_token_is(|p| {
                    matches!(p.token(), SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken)
                }) =>
            {
                self.next_token();
                return TypeElement::ConstructSignature(self.parse_signature_member(
                    ctx,
                    mark,
                    SyntaxKind::ConstructSignature,
                ));
            }
            _ => {}
        }

        let modifiers = if self.token() == SyntaxKind::ReadonlyKeyword
            && self.next_token_is(|p| !p.has_preceding_line_break() && is_property_name_start(p.token()))
        {
            self.next_token();
            ModifierFlags::READONLY
        } else {
            ModifierFlags::NONE
        };

        if self.token() == SyntaxKind::OpenBracketToken && self.is_index_signature() {
            return TypeElement::IndexSignature(self.parse_index_signature(ctx, mark, modifiers));
        }

        let name = self.parse_property_name(ctx);
        let optional = self.parse_optional(SyntaxKind::QuestionToken);
        if matches!(
            self.token(),
            SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
        ) {
            let type_parameters = self.parse_optional_type_parameters(ctx);
            let parameters = self.parse_formal_parameter_list(ctx);
            let return_type = self.parse_return_type(ctx);
            return self.factory.create_method_signature(
                self.finish(mark, SyntaxKind::MethodSignature).with_modifiers(modifiers),
                name,
                optional,
                type_parameters,
                parameters,
                return_type,
            );
        }
        let type_annotation = self.parse_type_annotation(ctx);
        self.factory.create_property_signature(
            self.finish(mark, SyntaxKind::PropertySignature).with_modifiers(modifiers),
            name,
            optional,
            type_annotation,
        )
    }

    fn parse_signature_member(&mut self, ctx: Context, mark: Mark, kind: SyntaxKind) -> SignatureNode<'a> {
        let type_parameters = self.parse_optional_type_parameters(ctx);
        let parameters = self.parse_formal_parameter_list(ctx);
        let return_type = self.parse_return_type(ctx);
        self.factory
            .create_signature(self.finish(mark, kind), type_parameters, parameters, return_type)
    }

    /// Whether the `[` at the current token opens `[key: K]` rather than a
    /// computed property name.
    pub(crate) fn is_index_signature(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            if matches!(
                p.token(),
                SyntaxKind::DotDotDotToken | SyntaxKind::CloseBracketToken
            ) {
                return true;
            }
            if p.token().is_access_modifier() {
                p.next_token();
            }
            if !p.token().is_identifier_like() {
                return false;
            }
            p.next_token();
            matches!(p.token(), SyntaxKind::ColonToken | SyntaxKind::CommaToken)
                || (p.token() == SyntaxKind::QuestionToken && {
                    p.next_token();
                    matches!(
                        p.token(),
                        SyntaxKind::ColonToken | SyntaxKind::CommaToken | SyntaxKind::CloseBracketToken
                    )
                })
        })
    }

    /// `[key: K]: T`, starting at `[`.
    pub(crate) fn parse_index_signature(
        &mut self,
        ctx: Context,
        mark: Mark,
        modifiers: ModifierFlags,
    ) -> IndexSignatureNode<'a> {
        let list_mark = self.mark();
        let mut parameters = Vec::new();
        self.parse_expected(SyntaxKind::OpenBracketToken);
        while !matches!(
            self.token(),
            SyntaxKind::CloseBracketToken | SyntaxKind::EndOfFileToken
        ) {
            let parameter_mark = self.mark();
            let parameter_modifiers = self.parse_parameter_modifiers();
            let name = Expression::Identifier(self.parse_identifier(ctx));
            let binding = self.factory.alloc(name);
            parameters.push(self.parse_parameter_tail(
                ctx,
                parameter_mark,
                &[],
                parameter_modifiers,
                false,
                false,
                binding,
            ));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken);
        let factory = self.factory;
        let parameter_list = factory.create_formal_parameter_list(
            self.finish(list_mark, SyntaxKind::FormalParameterList),
            factory.alloc_list(parameters),
            false,
        );
        let type_annotation = self.parse_type_annotation(ctx);
        factory.create_index_signature(
            self.finish(mark, SyntaxKind::IndexSignature).with_modifiers(modifiers),
            parameter_list,
            type_annotation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_member_start() {
        assert!(is_type_member_start(SyntaxKind::OpenParenToken));
        assert!(is_type_member_start(SyntaxKind::Identifier));
        assert!(is_type_member_start(SyntaxKind::ReadonlyKeyword));
        assert!(!is_type_member_start(SyntaxKind::CloseBraceToken));
        assert!(!is_type_member_start(SyntaxKind::EqualsToken));
    }

    #[test]
    fn test_literal_type_start() {
        assert!(is_literal_type_start(SyntaxKind::StringLiteral));
        assert!(is_literal_type_start(SyntaxKind::TrueKeyword));
        assert!(!is_literal_type_start(SyntaxKind::NullKeyword));
    }
}
