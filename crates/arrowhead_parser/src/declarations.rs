//! Declarations: functions, classes and their members, parameter lists,
//! interfaces, type aliases, enums, imports and exports.

use arrowhead_ast::node::*;
use arrowhead_ast::syntax_kind::SyntaxKind;
use arrowhead_ast::types::*;
use arrowhead_diagnostics::messages;

use crate::context::Context;
use crate::parser::{Mark, Parser};

/// Where a declaration starts plus the flags its prefix contributed
/// (`declare`, `abstract`, `export`, `export default`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct DeclarationStart {
    mark: Mark,
    flags: NodeFlags,
    modifiers: ModifierFlags,
}

impl DeclarationStart {
    pub(crate) fn new(mark: Mark) -> Self {
        Self {
            mark,
            flags: NodeFlags::NONE,
            modifiers: ModifierFlags::NONE,
        }
    }

    #[must_use]
    pub(crate) fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags |= flags;
        self
    }

    #[must_use]
    pub(crate) fn with_modifiers(mut self, modifiers: ModifierFlags) -> Self {
        self.modifiers |= modifiers;
        self
    }

    pub(crate) fn is_default_export(&self) -> bool {
        self.modifiers.contains(ModifierFlags::DEFAULT)
    }

    pub(crate) fn finish(self, parser: &Parser<'_>, kind: SyntaxKind) -> NodeData {
        parser
            .finish(self.mark, kind)
            .with_flags(self.flags)
            .with_modifiers(self.modifiers)
    }
}

/// Everything a method has seen before its parameter list.
pub(crate) struct MethodHead<'a> {
    pub(crate) mark: Mark,
    pub(crate) kind: SyntaxKind,
    pub(crate) decorators: NodeList<'a, Decorator<'a>>,
    pub(crate) modifiers: ModifierFlags,
    pub(crate) name: PropertyName<'a>,
    pub(crate) optional: bool,
    pub(crate) is_async: bool,
    pub(crate) is_generator: bool,
}

/// Tokens that can start a property name in an object literal, class body
/// or type literal.
pub(crate) fn is_property_name_start(token: SyntaxKind) -> bool {
    matches!(
        token,
        SyntaxKind::Identifier
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::StringLiteral
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::OpenBracketToken
    ) || token.is_keyword()
}

fn is_class_modifier(token: SyntaxKind) -> bool {
    matches!(
        token,
        SyntaxKind::PublicKeyword
            | SyntaxKind::PrivateKeyword
            | SyntaxKind::ProtectedKeyword
            | SyntaxKind::StaticKeyword
            | SyntaxKind::ReadonlyKeyword
            | SyntaxKind::AbstractKeyword
            | SyntaxKind::OverrideKeyword
            | SyntaxKind::DeclareKeyword
            | SyntaxKind::AccessorKeyword
    )
}

fn is_constructor_name(name: &PropertyName<'_>) -> bool {
    match name {
        PropertyName::Identifier(id) => id.text == "constructor",
        PropertyName::StringLiteral(literal) => literal.text.get(1..literal.text.len().saturating_sub(1)) == Some("constructor"),
        _ => false,
    }
}

impl<'a> Parser<'a> {
    // ========================================================================
    // Functions
    // ========================================================================

    pub(crate) fn parse_function_declaration(&mut self, ctx: Context, start: DeclarationStart) -> Statement<'a> {
        let is_async = self.parse_optional(SyntaxKind::AsyncKeyword);
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken);
        let name = if start.is_default_export() && !self.is_identifier(ctx) {
            None
        } else {
            Some(self.parse_identifier(ctx))
        };
        let function = self.parse_function_rest(
            ctx,
            start,
            SyntaxKind::FunctionDeclaration,
            name,
            is_async,
            is_generator,
            false,
        );
        Statement::FunctionDeclaration(function)
    }

    pub(crate) fn parse_function_expression(&mut self, ctx: Context) -> Expression<'a> {
        let start = DeclarationStart::new(self.mark());
        let is_async = self.parse_optional(SyntaxKind::AsyncKeyword);
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken);
        let name_ctx = ctx.for_function_body(is_async, is_generator);
        let name = if self.is_identifier(name_ctx) {
            Some(self.parse_identifier(name_ctx))
        } else {
            None
        };
        Expression::FunctionExpression(self.parse_function_rest(
            ctx,
            start,
            SyntaxKind::FunctionExpression,
            name,
            is_async,
            is_generator,
            true,
        ))
    }

    #[allow(clippy::too_many_arguments)]
    fn parse_function_rest(
        &mut self,
        ctx: Context,
        start: DeclarationStart,
        kind: SyntaxKind,
        name: Option<Identifier<'a>>,
        is_async: bool,
        is_generator: bool,
        body_required: bool,
    ) -> Function<'a> {
        let body_ctx = ctx.for_function_body(is_async, is_generator);
        let type_parameters = self.parse_optional_type_parameters(ctx);
        let parameters = self.parse_formal_parameter_list(body_ctx.without(Context::RETURN));
        let return_type = self.parse_return_type(ctx);
        let body = self.parse_function_body(body_ctx, body_required);
        self.factory.create_function(
            start.finish(self, kind),
            name,
            is_async,
            is_generator,
            type_parameters,
            parameters,
            return_type,
            body,
        )
    }

    /// A `{ ... }` body. Without one, declarations end at a semicolon
    /// (overloads and ambient declarations) and expressions report it.
    fn parse_function_body(&mut self, ctx: Context, body_required: bool) -> Option<&'a Block<'a>> {
        if self.token() == SyntaxKind::OpenBraceToken {
            let block = self.parse_function_block(ctx);
            Some(self.factory.alloc(block))
        } else if body_required {
            self.error_expected(SyntaxKind::OpenBraceToken);
            None
        } else {
            self.parse_semicolon();
            None
        }
    }

    pub(crate) fn parse_method_rest(
        &mut self,
        ctx: Context,
        head: MethodHead<'a>,
        body_required: bool,
    ) -> MethodDefinition<'a> {
        let body_ctx = ctx.for_function_body(head.is_async, head.is_generator);
        let type_parameters = self.parse_optional_type_parameters(ctx);
        let parameters = self.parse_formal_parameter_list(body_ctx.without(Context::RETURN));
        let return_type = self.parse_return_type(ctx);
        let body = self.parse_function_body(body_ctx, body_required);
        self.factory.create_method_definition(
            self.finish(head.mark, head.kind).with_modifiers(head.modifiers),
            head.decorators,
            head.name,
            head.optional,
            head.is_async,
            head.is_generator,
            type_parameters,
            parameters,
            return_type,
            body,
        )
    }

    // ========================================================================
    // Parameters and bindings
    // ========================================================================

    fn is_parameter_start(&self) -> bool {
        let token = self.token();
        token.is_identifier_or_pattern_start()
            || token.is_access_modifier()
            || matches!(
                token,
                SyntaxKind::DotDotDotToken | SyntaxKind::AtToken | SyntaxKind::ThisKeyword
            )
    }

    /// `( parameters )` of a function, method or signature.
    pub(crate) fn parse_formal_parameter_list(&mut self, ctx: Context) -> &'a FormalParameterList<'a> {
        let mark = self.mark();
        let mut parameters: Vec<FormalParameter<'a>> = Vec::new();
        let mut trailing_comma = false;

        if self.parse_expected(SyntaxKind::OpenParenToken) {
            while !matches!(
                self.token(),
                SyntaxKind::CloseParenToken | SyntaxKind::EndOfFileToken
            ) {
                let start = self.token_start();
                if !self.is_parameter_start() {
                    self.error_at_token(&messages::PARAMETER_DECLARATION_EXPECTED);
                    break;
                }
                if let Some(previous) = parameters.last() {
                    if previous.rest {
                        self.error_at(
                            previous.data.range.to_span(),
                            &messages::A_REST_PARAMETER_MUST_BE_LAST_IN_A_PARAMETER_LIST,
                        );
                    }
                }
                parameters.push(self.parse_formal_parameter(ctx));

                if self.token() == SyntaxKind::CloseParenToken {
                    break;
                }
                let comma = self.token_span();
                if self.parse_optional(SyntaxKind::CommaToken) {
                    if self.token() == SyntaxKind::CloseParenToken {
                        trailing_comma = true;
                        if parameters.last().is_some_and(|parameter| parameter.rest) {
                            self.error_at(
                                comma,
                                &messages::A_REST_PARAMETER_OR_BINDING_PATTERN_MAY_NOT_HAVE_A_TRAILING_COMMA,
                            );
                        }
                    }
                    continue;
                }
                self.error_expected(SyntaxKind::CommaToken);
                if self.token_start() == start {
                    break;
                }
            }
            self.parse_expected(SyntaxKind::CloseParenToken);
        }

        self.factory.create_formal_parameter_list(
            self.finish(mark, SyntaxKind::FormalParameterList),
            self.factory.alloc_list(parameters),
            trailing_comma,
        )
    }

    fn parse_formal_parameter(&mut self, ctx: Context) -> FormalParameter<'a> {
        let mark = self.mark();
        let decorators = self.parse_decorators(ctx);
        let modifiers = self.parse_parameter_modifiers();
        let rest = self.parse_optional(SyntaxKind::DotDotDotToken);
        let binding = if self.token() == SyntaxKind::ThisKeyword {
            Expression::Identifier(self.parse_identifier_token())
        } else {
            self.parse_binding_name(ctx)
        };
        let optional = self.parse_optional(SyntaxKind::QuestionToken);
        let binding = self.factory.alloc(binding);
        self.parse_parameter_tail(ctx, mark, decorators, modifiers, rest, optional, binding)
    }

    /// Accessibility and `readonly` in front of a constructor parameter.
    pub(crate) fn parse_parameter_modifiers(&mut self) -> ModifierFlags {
        let mut modifiers = ModifierFlags::NONE;
        while self.token().is_access_modifier()
            && self.next_token_is(|p| {
                !p.has_preceding_line_break() && p.token().is_identifier_or_pattern_start()
            })
        {
            modifiers |= ModifierFlags::from_modifier_kind(self.token());
            self.next_token();
        }
        modifiers
    }

    /// The part of a parameter after its binding: `: Type` and `= default`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn parse_parameter_tail(
        &mut self,
        ctx: Context,
        mark: Mark,
        decorators: NodeList<'a, Decorator<'a>>,
        modifiers: ModifierFlags,
        rest: bool,
        optional: bool,
        binding: &'a Expression<'a>,
    ) -> FormalParameter<'a> {
        let type_annotation = self.parse_type_annotation(ctx);
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            let initializer = self.parse_assignment_expression(ctx.without(Context::DISALLOW_IN));
            Some(self.factory.alloc(initializer))
        } else {
            None
        };
        self.factory.create_formal_parameter(
            self.finish(mark, SyntaxKind::FormalParameter).with_modifiers(modifiers),
            decorators,
            rest,
            binding,
            optional,
            type_annotation,
            initializer,
        )
    }

    /// An identifier, or an array or object pattern in literal form.
    pub(crate) fn parse_binding_name(&mut self, ctx: Context) -> Expression<'a> {
        match self.token() {
            SyntaxKind::OpenBracketToken => self.parse_array_literal(ctx),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(ctx),
            _ => Expression::Identifier(self.parse_identifier(ctx)),
        }
    }

    // ========================================================================
    // Property names
    // ========================================================================

    pub(crate) fn parse_property_name(&mut self, ctx: Context) -> PropertyName<'a> {
        match self.token() {
            SyntaxKind::StringLiteral => PropertyName::StringLiteral(self.parse_literal()),
            SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral => {
                PropertyName::NumericLiteral(self.parse_literal())
            }
            SyntaxKind::PrivateIdentifier => {
                if !ctx.contains(Context::IN_CLASS) {
                    self.error_at_token(&messages::PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES);
                }
                PropertyName::PrivateIdentifier(self.parse_identifier_token())
            }
            SyntaxKind::OpenBracketToken => {
                let mark = self.mark();
                self.next_token();
                let expression = self.parse_assignment_expression(
                    ctx.without(Context::DISALLOW_IN | Context::IN_CONDITIONAL),
                );
                let expression = self.factory.alloc(expression);
                self.parse_expected(SyntaxKind::CloseBracketToken);
                self.factory.create_computed_property_name(
                    self.finish(mark, SyntaxKind::ComputedPropertyName),
                    expression,
                )
            }
            _ => PropertyName::Identifier(self.parse_identifier_name()),
        }
    }

    /// Consume `get` or `set` when it introduces an accessor.
    pub(crate) fn parse_accessor_keyword(&mut self) -> Option<SyntaxKind> {
        let kind = match self.token() {
            SyntaxKind::GetKeyword => SyntaxKind::GetAccessor,
            SyntaxKind::SetKeyword => SyntaxKind::SetAccessor,
            _ => return None,
        };
        if self.next_token_is(|p| !p.has_preceding_line_break() && is_property_name_start(p.token())) {
            self.next_token();
            Some(kind)
        } else {
            None
        }
    }

    /// Consume `async` when it introduces an async method.
    pub(crate) fn parse_async_method_keyword(&mut self) -> bool {
        self.token() == SyntaxKind::AsyncKeyword
            && self.next_token_is(|p| {
                !p.has_preceding_line_break()
                    && (is_property_name_start(p.token()) || p.token() == SyntaxKind::AsteriskToken)
            })
            && self.parse_optional(SyntaxKind::AsyncKeyword)
    }

    // ========================================================================
    // Classes
    // ========================================================================

    pub(crate) fn parse_class_declaration(&mut self, ctx: Context, start: DeclarationStart) -> Statement<'a> {
        Statement::ClassDeclaration(self.parse_class(ctx, start, SyntaxKind::ClassDeclaration))
    }

    pub(crate) fn parse_class_expression(&mut self, ctx: Context) -> Expression<'a> {
        let start = DeclarationStart::new(self.mark());
        Expression::ClassExpression(self.parse_class(ctx, start, SyntaxKind::ClassExpression))
    }

    fn parse_class(&mut self, ctx: Context, start: DeclarationStart, kind: SyntaxKind) -> Class<'a> {
        let decorators = self.parse_decorators(ctx);
        self.parse_expected(SyntaxKind::ClassKeyword);
        let ctx = ctx.with(Context::STRICT);

        let name = if self.is_identifier(ctx) && self.token() != SyntaxKind::ImplementsKeyword {
            Some(self.parse_identifier(ctx))
        } else {
            if kind == SyntaxKind::ClassDeclaration && !start.is_default_export() {
                self.error_at_token(&messages::IDENTIFIER_EXPECTED);
            }
            None
        };
        let type_parameters = self.parse_optional_type_parameters(ctx);

        let extends_clause = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            let expression = self.parse_left_hand_side_expression(ctx);
            if self.token() == SyntaxKind::LessThanToken {
                // Heritage type arguments are validated but not kept.
                self.parse_type_arguments(ctx);
            }
            Some(self.factory.alloc(expression))
        } else {
            None
        };
        let implements_clause = if self.parse_optional(SyntaxKind::ImplementsKeyword) {
            self.parse_heritage_type_list(ctx)
        } else {
            &[]
        };

        let members = self.parse_class_members(ctx.with(Context::IN_CLASS));
        self.factory.create_class(
            start.finish(self, kind),
            decorators,
            name,
            type_parameters,
            extends_clause,
            implements_clause,
            members,
        )
    }

    pub(crate) fn parse_decorators(&mut self, ctx: Context) -> NodeList<'a, Decorator<'a>> {
        let mut decorators = Vec::new();
        while self.token() == SyntaxKind::AtToken {
            let mark = self.mark();
            self.next_token();
            let expression = self.parse_left_hand_side_expression(ctx.with(Context::DECORATOR));
            let expression = self.factory.alloc(expression);
            decorators.push(
                self.factory
                    .create_decorator(self.finish(mark, SyntaxKind::Decorator), expression),
            );
        }
        self.factory.alloc_list(decorators)
    }

    fn parse_class_members(&mut self, ctx: Context) -> NodeList<'a, ClassElement<'a>> {
        let mut members = Vec::new();
        if !self.parse_expected(SyntaxKind::OpenBraceToken) {
            return &[];
        }
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            if self.token() == SyntaxKind::SemicolonToken {
                let mark = self.mark();
                self.next_token();
                members.push(
                    self.factory
                        .create_semicolon_class_element(self.finish(mark, SyntaxKind::SemicolonClassElement)),
                );
                continue;
            }
            match self.nested(|p| p.parse_class_element(ctx)) {
                Some(Some(member)) => members.push(member),
                Some(None) => {
                    self.error_at_token(&messages::UNEXPECTED_TOKEN_CLASS_MEMBER_EXPECTED);
                    self.next_token();
                }
                None => break,
            }
            if self.token_start() == start && self.token() != SyntaxKind::EndOfFileToken {
                self.next_token();
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);
        self.factory.alloc_list(members)
    }

    fn parse_class_modifiers(&mut self) -> ModifierFlags {
        let mut modifiers = ModifierFlags::NONE;
        loop {
            let token = self.token();
            if !is_class_modifier(token) {
                break;
            }
            let follows = self.next_token_is(|p| {
                let next = p.token();
                (token == SyntaxKind::StaticKeyword || !p.has_preceding_line_break())
                    && (is_property_name_start(next)
                        || matches!(next, SyntaxKind::AsteriskToken | SyntaxKind::DotDotDotToken))
            });
            if !follows {
                break;
            }
            modifiers |= ModifierFlags::from_modifier_kind(token);
            self.next_token();
        }
        modifiers
    }

    /// Returns `None` when nothing at the current token can start a member.
    fn parse_class_element(&mut self, ctx: Context) -> Option<ClassElement<'a>> {
        let mark = self.mark();
        let decorators = self.parse_decorators(ctx);

        if self.token() == SyntaxKind::StaticKeyword
            && self.next_token_is(|p| p.token() == SyntaxKind::OpenBraceToken)
        {
            self.next_token();
            let body = self.parse_block(ctx.for_function_body(false, false).without(Context::RETURN));
            let body = self.factory.alloc(body);
            return Some(
                self.factory
                    .create_class_static_block(self.finish(mark, SyntaxKind::ClassStaticBlock), body),
            );
        }

        let modifiers = self.parse_class_modifiers();
        if self.token() == SyntaxKind::OpenBracketToken && self.is_index_signature() {
            let signature = self.parse_index_signature(ctx, mark, modifiers);
            self.parse_semicolon();
            return Some(ClassElement::IndexSignature(signature));
        }

        let is_async = self.parse_async_method_keyword();
        let is_generator = self.parse_optional(SyntaxKind::AsteriskToken);
        let accessor = self.parse_accessor_keyword();
        if !is_property_name_start(self.token())
            && decorators.is_empty()
            && modifiers.is_empty()
            && !is_async
            && !is_generator
            && accessor.is_none()
        {
            return None;
        }

        let name = self.parse_property_name(ctx);
        let optional = self.parse_optional(SyntaxKind::QuestionToken);
        if accessor.is_some()
            || is_async
            || is_generator
            || matches!(
                self.token(),
                SyntaxKind::OpenParenToken | SyntaxKind::LessThanToken
            )
        {
            let kind = accessor.unwrap_or(if is_constructor_name(&name) {
                SyntaxKind::Constructor
            } else {
                SyntaxKind::MethodDefinition
            });
            let head = MethodHead {
                mark,
                kind,
                decorators,
                modifiers,
                name,
                optional,
                is_async,
                is_generator,
            };
            return Some(ClassElement::Method(self.parse_method_rest(ctx, head, false)));
        }

        let definite = !optional && self.parse_optional(SyntaxKind::ExclamationToken);
        let type_annotation = self.parse_type_annotation(ctx);
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            let initializer =
                self.parse_assignment_expression(ctx.for_function_body(false, false).without(Context::RETURN));
            Some(self.factory.alloc(initializer))
        } else {
            None
        };
        self.parse_semicolon();
        Some(self.factory.create_property_definition(
            self.finish(mark, SyntaxKind::PropertyDefinition).with_modifiers(modifiers),
            decorators,
            name,
            optional,
            definite,
            type_annotation,
            initializer,
        ))
    }

    // ========================================================================
    // Interfaces, type aliases and enums
    // ========================================================================

    /// `interface Name<T> extends A, B { ... }`; the keyword is consumed.
    pub(crate) fn parse_interface_declaration(&mut self, ctx: Context, start: DeclarationStart) -> Statement<'a> {
        let name = self.parse_identifier(ctx);
        let type_parameters = self.parse_optional_type_parameters(ctx);
        let extends_clause = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            self.parse_heritage_type_list(ctx)
        } else {
            &[]
        };
        let members = self.parse_type_members(ctx);
        self.factory.create_interface_declaration(
            start.finish(self, SyntaxKind::InterfaceDeclaration),
            name,
            type_parameters,
            extends_clause,
            members,
        )
    }

    /// `type Name<T> = Type;`; the keyword is consumed.
    pub(crate) fn parse_type_alias_declaration(&mut self, ctx: Context, start: DeclarationStart) -> Statement<'a> {
        let name = self.parse_identifier(ctx);
        let type_parameters = self.parse_optional_type_parameters(ctx);
        self.parse_expected(SyntaxKind::EqualsToken);
        let type_node = self.parse_type(ctx);
        let type_node = self.factory.alloc(type_node);
        self.parse_semicolon();
        self.factory.create_type_alias_declaration(
            start.finish(self, SyntaxKind::TypeAliasDeclaration),
            name,
            type_parameters,
            type_node,
        )
    }

    /// `enum Name { A, B = 1 }`; `enum` (and `const`) are consumed.
    pub(crate) fn parse_enum_declaration(&mut self, ctx: Context, start: DeclarationStart) -> Statement<'a> {
        let name = self.parse_identifier(ctx);
        let mut members = Vec::new();
        if self.parse_expected(SyntaxKind::OpenBraceToken) {
            while !matches!(
                self.token(),
                SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
            ) {
                if !is_property_name_start(self.token()) {
                    self.error_at_token(&messages::ENUM_MEMBER_EXPECTED);
                    break;
                }
                let mark = self.mark();
                let member_name = self.parse_property_name(ctx);
                let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
                    let initializer = self.parse_assignment_expression(ctx.without(Context::DISALLOW_IN));
                    Some(self.factory.alloc(initializer))
                } else {
                    None
                };
                members.push(self.factory.create_enum_member(
                    self.finish(mark, SyntaxKind::EnumMember),
                    member_name,
                    initializer,
                ));
                if self.token() == SyntaxKind::CloseBraceToken {
                    break;
                }
                if !self.parse_optional(SyntaxKind::CommaToken) {
                    self.error_expected(SyntaxKind::CommaToken);
                    break;
                }
            }
            self.parse_expected(SyntaxKind::CloseBraceToken);
        }
        self.factory.create_enum_declaration(
            start.finish(self, SyntaxKind::EnumDeclaration),
            name,
            self.factory.alloc_list(members),
        )
    }

    // ========================================================================
    // Imports and exports
    // ========================================================================

    pub(crate) fn parse_import_declaration(&mut self, ctx: Context, start: DeclarationStart) -> Statement<'a> {
        self.parse_expected(SyntaxKind::ImportKeyword);

        let import_clause = if self.token() == SyntaxKind::StringLiteral {
            None
        } else {
            let mark = self.mark();
            let is_type_only = self.token() == SyntaxKind::TypeKeyword
                && self.next_token_is(|p| {
                    let next = p.token();
                    (next.is_identifier_like() && next != SyntaxKind::FromKeyword)
                        || matches!(next, SyntaxKind::OpenBraceToken | SyntaxKind::AsteriskToken)
                })
                && self.parse_optional(SyntaxKind::TypeKeyword);

            let name = if self.is_identifier(ctx) {
                Some(self.parse_identifier(ctx))
            } else {
                None
            };
            let named_bindings = if name.is_none() || self.parse_optional(SyntaxKind::CommaToken) {
                match self.token() {
                    SyntaxKind::AsteriskToken => {
                        let binding_mark = self.mark();
                        self.next_token();
                        self.parse_expected(SyntaxKind::AsKeyword);
                        let alias = self.parse_identifier(ctx);
                        Some(self.factory.create_namespace_binding(
                            self.finish(binding_mark, SyntaxKind::NamespaceImport),
                            Some(alias),
                        ))
                    }
                    SyntaxKind::OpenBraceToken => Some(self.parse_named_specifiers(
                        SyntaxKind::NamedImports,
                        SyntaxKind::ImportSpecifier,
                    )),
                    _ => {
                        if name.is_none() {
                            self.error_at_token(&messages::IDENTIFIER_EXPECTED);
                        }
                        None
                    }
                }
            } else {
                None
            };
            if self.token() == SyntaxKind::FromKeyword {
                self.next_token();
            } else {
                self.error_expected(SyntaxKind::FromKeyword);
            }
            Some(self.factory.alloc(self.factory.create_import_clause(
                self.finish(mark, SyntaxKind::ImportClause),
                is_type_only,
                name,
                named_bindings,
            )))
        };

        let module_specifier = self.parse_module_specifier();
        self.parse_semicolon();
        self.factory.create_import_declaration(
            start.finish(self, SyntaxKind::ImportDeclaration),
            import_clause,
            module_specifier,
        )
    }

    fn parse_module_specifier(&mut self) -> &'a Expression<'a> {
        let specifier = if self.token() == SyntaxKind::StringLiteral {
            Expression::Literal(self.parse_literal())
        } else {
            self.error_at_token(&messages::STRING_LITERAL_EXPECTED);
            self.missing_expression()
        };
        self.factory.alloc(specifier)
    }

    /// `{ a, b as c, type d }` in an import or export.
    fn parse_named_specifiers(&mut self, list_kind: SyntaxKind, specifier_kind: SyntaxKind) -> NamedBindings<'a> {
        let mark = self.mark();
        let mut elements = Vec::new();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        while !matches!(
            self.token(),
            SyntaxKind::CloseBraceToken | SyntaxKind::EndOfFileToken
        ) {
            let start = self.token_start();
            let specifier_mark = self.mark();
            let is_type_only = self.token() == SyntaxKind::TypeKeyword
                && self.next_token_is(|p| {
                    let next = p.token();
                    (next == SyntaxKind::Identifier || next.is_keyword()) && next != SyntaxKind::AsKeyword
                })
                && self.parse_optional(SyntaxKind::TypeKeyword);
            let first = self.parse_identifier_name();
            let (property_name, name) = if self.parse_optional(SyntaxKind::AsKeyword) {
                (Some(first), self.parse_identifier_name())
            } else {
                (None, first)
            };
            elements.push(self.factory.create_specifier(
                self.finish(specifier_mark, specifier_kind),
                is_type_only,
                property_name,
                name,
            ));
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
        self.factory
            .create_named_specifiers(self.finish(mark, list_kind), self.factory.alloc_list(elements))
    }

    pub(crate) fn parse_export_declaration(&mut self, ctx: Context, start: DeclarationStart) -> Statement<'a> {
        self.parse_expected(SyntaxKind::ExportKeyword);
        let start = start.with_modifiers(ModifierFlags::EXPORT);

        match self.token() {
            SyntaxKind::DefaultKeyword => {
                self.next_token();
                let inner = DeclarationStart::new(self.mark())
                    .with_modifiers(ModifierFlags::EXPORT | ModifierFlags::DEFAULT);
                let declaration = match self.token() {
                    SyntaxKind::FunctionKeyword => Some(self.parse_function_declaration(ctx, inner)),
                    SyntaxKind::AsyncKeyword if self.next_token_is_function_on_same_line() => {
                        Some(self.parse_function_declaration(ctx, inner))
                    }
                    SyntaxKind::ClassKeyword | SyntaxKind::AtToken => {
                        Some(self.parse_class_declaration(ctx, inner))
                    }
                    SyntaxKind::AbstractKeyword
                        if self.next_token_is(|p| p.token() == SyntaxKind::ClassKeyword) =>
                    {
                        self.next_token();
                        Some(self.parse_class_declaration(
                            ctx,
                            inner
                                .with_flags(NodeFlags::ABSTRACT)
                                .with_modifiers(ModifierFlags::ABSTRACT),
                        ))
                    }
                    _ => None,
                };
                if let Some(declaration) = declaration {
                    let declaration = self.factory.alloc(declaration);
                    return self.factory.create_export_declaration(
                        start.with_modifiers(ModifierFlags::DEFAULT).finish(self, SyntaxKind::ExportDeclaration),
                        false,
                        None,
                        None,
                        Some(declaration),
                    );
                }
                let expression = self.parse_assignment_expression(ctx);
                let expression = self.factory.alloc(expression);
                self.parse_semicolon();
                self.factory.create_export_assignment(
                    start.finish(self, SyntaxKind::ExportAssignment),
                    false,
                    expression,
                )
            }
            SyntaxKind::EqualsToken => {
                self.next_token();
                let expression = self.parse_assignment_expression(ctx);
                let expression = self.factory.alloc(expression);
                self.parse_semicolon();
                self.factory.create_export_assignment(
                    start.finish(self, SyntaxKind::ExportAssignment),
                    true,
                    expression,
                )
            }
            SyntaxKind::AsteriskToken => {
                let binding_mark = self.mark();
                self.next_token();
                let alias = if self.parse_optional(SyntaxKind::AsKeyword) {
                    Some(self.parse_identifier_name())
                } else {
                    None
                };
                let export_clause = self.factory.create_namespace_binding(
                    self.finish(binding_mark, SyntaxKind::NamespaceExport),
                    alias,
                );
                if self.token() == SyntaxKind::FromKeyword {
                    self.next_token();
                } else {
                    self.error_expected(SyntaxKind::FromKeyword);
                }
                let module_specifier = self.parse_module_specifier();
                self.parse_semicolon();
                self.factory.create_export_declaration(
                    start.finish(self, SyntaxKind::ExportDeclaration),
                    false,
                    Some(export_clause),
                    Some(module_specifier),
                    None,
                )
            }
            SyntaxKind::OpenBraceToken => self.parse_export_named(start, false),
            SyntaxKind::TypeKeyword if self.next_token_is(|p| p.token() == SyntaxKind::OpenBraceToken) => {
                self.next_token();
                self.parse_export_named(start, true)
            }
            _ => {
                let declaration = self.parse_declaration_item(ctx, DeclarationStart::new(self.mark()).with_modifiers(ModifierFlags::EXPORT));
                let declaration = self.factory.alloc(declaration);
                self.factory.create_export_declaration(
                    start.finish(self, SyntaxKind::ExportDeclaration),
                    false,
                    None,
                    None,
                    Some(declaration),
                )
            }
        }
    }

    fn parse_export_named(&mut self, start: DeclarationStart, is_type_only: bool) -> Statement<'a> {
        let export_clause = self.parse_named_specifiers(SyntaxKind::NamedExports, SyntaxKind::ExportSpecifier);
        let module_specifier = if self.parse_optional(SyntaxKind::FromKeyword) {
            Some(self.parse_module_specifier())
        } else {
            None
        };
        self.parse_semicolon();
        self.factory.create_export_declaration(
            start.finish(self, SyntaxKind::ExportDeclaration),
            is_type_only,
            Some(export_clause),
            module_specifier,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_name_start_accepts_keywords() {
        assert!(is_property_name_start(SyntaxKind::Identifier));
        assert!(is_property_name_start(SyntaxKind::DefaultKeyword));
        assert!(is_property_name_start(SyntaxKind::OpenBracketToken));
        assert!(is_property_name_start(SyntaxKind::PrivateIdentifier));
        assert!(!is_property_name_start(SyntaxKind::OpenParenToken));
        assert!(!is_property_name_start(SyntaxKind::CommaToken));
    }

    #[test]
    fn test_class_modifiers() {
        assert!(is_class_modifier(SyntaxKind::StaticKeyword));
        assert!(is_class_modifier(SyntaxKind::AccessorKeyword));
        assert!(!is_class_modifier(SyntaxKind::AsyncKeyword));
        assert!(!is_class_modifier(SyntaxKind::ExportKeyword));
    }
}
