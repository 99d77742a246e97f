//! Node construction.
//!
//! [`NodeFactory`] owns the arena handle and exposes one constructor per
//! node shape. Constructors take an already-positioned [`NodeData`] header
//! plus the parsed children, and stamp `transform_flags` as the union of the
//! node's intrinsic feature bits and the transform flags of every structural
//! child. A node is never touched again after its constructor returns.

use bumpalo::Bump;

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::{ModifierFlags, NodeFlags, TokenFlags, TransformFlags};
use crate::visitor::Visit;

/// Union of the transform flags of a node's structural children.
pub fn subtree_transform_flags<'a>(node: &dyn Visit<'a>) -> TransformFlags {
    let mut flags = TransformFlags::NONE;
    node.for_each_child(&mut |child| flags |= child.data().transform_flags);
    flags
}

/// Stamp `intrinsic` plus the children's flags onto a freshly built node.
macro_rules! finish {
    ($node:ident, $intrinsic:expr) => {{
        let children = subtree_transform_flags(&$node);
        $node.data.transform_flags |= $intrinsic | children;
    }};
}

fn ts_if(condition: bool) -> TransformFlags {
    if condition {
        TransformFlags::CONTAINS_TYPESCRIPT
    } else {
        TransformFlags::NONE
    }
}

/// Declarations marked `declare` or `abstract` only exist in TypeScript.
fn ambient_flags(data: &NodeData) -> TransformFlags {
    ts_if(
        data.flags
            .intersects(NodeFlags::DECLARED | NodeFlags::AMBIENT | NodeFlags::ABSTRACT)
            || data.modifier_flags.intersects(ModifierFlags::TYPE_SCRIPT_MODIFIER),
    )
}

fn function_like_flags(is_async: bool, is_generator: bool, has_body: bool) -> TransformFlags {
    let mut flags = ts_if(!has_body);
    if is_async {
        flags |= TransformFlags::CONTAINS_ES2017;
    }
    if is_generator {
        flags |= TransformFlags::CONTAINS_ES2015 | TransformFlags::CONTAINS_GENERATOR;
    }
    if is_async && is_generator {
        flags |= TransformFlags::CONTAINS_ES2018;
    }
    flags
}

#[derive(Clone, Copy)]
pub struct NodeFactory<'a> {
    arena: &'a Bump,
}

impl<'a> NodeFactory<'a> {
    pub fn new(arena: &'a Bump) -> Self {
        Self { arena }
    }

    #[inline]
    pub fn arena(&self) -> &'a Bump {
        self.arena
    }

    #[inline]
    pub fn alloc<T>(&self, node: T) -> &'a T {
        self.arena.alloc(node)
    }

    /// Move a list of nodes into the arena.
    pub fn alloc_list<T>(&self, nodes: Vec<T>) -> NodeList<'a, T> {
        if nodes.is_empty() {
            return &[];
        }
        self.arena.alloc_slice_fill_iter(nodes)
    }

    // ========================================================================
    // Roots, names and literals
    // ========================================================================

    pub fn create_source_body(
        &self,
        data: NodeData,
        statements: NodeList<'a, Statement<'a>>,
    ) -> SourceBody<'a> {
        let mut node = SourceBody { data, statements };
        finish!(node, TransformFlags::NONE);
        node
    }

    pub fn create_identifier(
        &self,
        data: NodeData,
        text: &'a str,
        original_keyword_kind: Option<SyntaxKind>,
    ) -> Identifier<'a> {
        Identifier {
            data,
            text,
            original_keyword_kind,
        }
    }

    pub fn create_literal(&self, data: NodeData, text: &'a str, token_flags: TokenFlags) -> Literal<'a> {
        let intrinsic = match data.kind {
            SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::TemplateMiddle
            | SyntaxKind::TemplateTail => TransformFlags::CONTAINS_ES2015,
            SyntaxKind::BigIntLiteral => TransformFlags::CONTAINS_ES2020,
            SyntaxKind::NumericLiteral
                if token_flags
                    .intersects(TokenFlags::BINARY_SPECIFIER | TokenFlags::OCTAL_SPECIFIER) =>
            {
                TransformFlags::CONTAINS_ES2015
            }
            _ => TransformFlags::NONE,
        };
        Literal {
            data: data.with_transform_flags(intrinsic),
            text,
            token_flags,
        }
    }

    pub fn create_qualified_name(
        &self,
        data: NodeData,
        left: EntityName<'a>,
        right: Identifier<'a>,
    ) -> EntityName<'a> {
        let mut node = QualifiedName { data, left, right };
        finish!(node, TransformFlags::NONE);
        EntityName::QualifiedName(self.alloc(node))
    }

    pub fn create_computed_property_name(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
    ) -> PropertyName<'a> {
        let mut node = ComputedPropertyName { data, expression };
        finish!(node, TransformFlags::CONTAINS_ES2015);
        PropertyName::Computed(self.alloc(node))
    }

    // ========================================================================
    // Parameters and the cover grammar
    // ========================================================================

    pub fn create_type_parameter(
        &self,
        data: NodeData,
        name: Identifier<'a>,
        constraint: OptionalNode<'a, TypeNode<'a>>,
        default: OptionalNode<'a, TypeNode<'a>>,
    ) -> TypeParameter<'a> {
        let mut node = TypeParameter {
            data,
            name,
            constraint,
            default,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        node
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_formal_parameter(
        &self,
        data: NodeData,
        decorators: NodeList<'a, Decorator<'a>>,
        rest: bool,
        binding: &'a Expression<'a>,
        optional: bool,
        type_annotation: OptionalNode<'a, TypeNode<'a>>,
        initializer: OptionalNode<'a, Expression<'a>>,
    ) -> FormalParameter<'a> {
        let mut intrinsic = ts_if(
            optional
                || data
                    .modifier_flags
                    .intersects(ModifierFlags::PARAMETER_PROPERTY_MODIFIER),
        );
        if rest || initializer.is_some() || !matches!(binding, Expression::Identifier(_)) {
            intrinsic |= TransformFlags::CONTAINS_ES2015;
        }
        let mut node = FormalParameter {
            data,
            decorators,
            rest,
            binding,
            optional,
            type_annotation,
            initializer,
        };
        finish!(node, intrinsic);
        node
    }

    pub fn create_formal_parameter_list(
        &self,
        data: NodeData,
        parameters: NodeList<'a, FormalParameter<'a>>,
        trailing_comma: bool,
    ) -> &'a FormalParameterList<'a> {
        let mut node = FormalParameterList {
            data,
            parameters,
            trailing_comma,
        };
        finish!(node, TransformFlags::NONE);
        self.alloc(node)
    }

    pub fn create_arrow_parameters(
        &self,
        data: NodeData,
        type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
        elements: NodeList<'a, CoverElement<'a>>,
        return_type: OptionalNode<'a, TypeNode<'a>>,
        trailing_comma: bool,
    ) -> ArrowParameters<'a> {
        let mut node = ArrowParameters {
            data,
            type_parameters,
            elements,
            return_type,
            trailing_comma,
        };
        finish!(node, TransformFlags::NONE);
        node
    }

    pub fn create_argument_list(
        &self,
        data: NodeData,
        elements: NodeList<'a, CoverElement<'a>>,
        trailing_comma: bool,
    ) -> &'a ArgumentList<'a> {
        let mut node = ArgumentList {
            data,
            elements,
            trailing_comma,
        };
        finish!(node, TransformFlags::NONE);
        self.alloc(node)
    }

    pub fn create_decorator(&self, data: NodeData, expression: &'a Expression<'a>) -> Decorator<'a> {
        let mut node = Decorator { data, expression };
        finish!(
            node,
            TransformFlags::CONTAINS_DECORATORS | TransformFlags::CONTAINS_TYPESCRIPT
        );
        node
    }

    // ========================================================================
    // Types
    // ========================================================================

    pub fn create_keyword_type(&self, data: NodeData) -> TypeNode<'a> {
        TypeNode::Keyword(data.with_transform_flags(TransformFlags::CONTAINS_TYPESCRIPT))
    }

    pub fn create_this_type(&self, data: NodeData) -> TypeNode<'a> {
        TypeNode::ThisType(data.with_transform_flags(TransformFlags::CONTAINS_TYPESCRIPT))
    }

    pub fn create_type_reference(
        &self,
        data: NodeData,
        type_name: EntityName<'a>,
        type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    ) -> TypeNode<'a> {
        let mut node = TypeReferenceNode {
            data,
            type_name,
            type_arguments,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::TypeReference(node)
    }

    /// A function type, constructor type, call signature or construct
    /// signature; the caller wraps it according to `data.kind`.
    pub fn create_signature(
        &self,
        data: NodeData,
        type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
        parameters: &'a FormalParameterList<'a>,
        return_type: OptionalNode<'a, TypeNode<'a>>,
    ) -> SignatureNode<'a> {
        let mut node = SignatureNode {
            data,
            type_parameters,
            parameters,
            return_type,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        node
    }

    pub fn create_type_query(&self, data: NodeData, expr_name: EntityName<'a>) -> TypeNode<'a> {
        let mut node = TypeQueryNode { data, expr_name };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::TypeQuery(node)
    }

    pub fn create_type_literal(
        &self,
        data: NodeData,
        members: NodeList<'a, TypeElement<'a>>,
    ) -> TypeNode<'a> {
        let mut node = TypeLiteralNode { data, members };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::TypeLiteral(node)
    }

    pub fn create_array_type(&self, data: NodeData, element_type: &'a TypeNode<'a>) -> TypeNode<'a> {
        let mut node = ArrayTypeNode { data, element_type };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::ArrayType(node)
    }

    pub fn create_tuple_type(
        &self,
        data: NodeData,
        elements: NodeList<'a, TypeNode<'a>>,
    ) -> TypeNode<'a> {
        let mut node = TupleTypeNode { data, elements };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::TupleType(node)
    }

    /// Optional, rest and parenthesized types, chosen by `data.kind`.
    pub fn create_wrapped_type(&self, data: NodeData, type_node: &'a TypeNode<'a>) -> TypeNode<'a> {
        let mut node = WrappedTypeNode { data, type_node };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        match data.kind {
            SyntaxKind::OptionalType => TypeNode::OptionalType(node),
            SyntaxKind::RestType => TypeNode::RestType(node),
            _ => TypeNode::ParenthesizedType(node),
        }
    }

    /// Union and intersection types, chosen by `data.kind`.
    pub fn create_union_or_intersection_type(
        &self,
        data: NodeData,
        types: NodeList<'a, TypeNode<'a>>,
    ) -> TypeNode<'a> {
        let mut node = UnionOrIntersectionTypeNode { data, types };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        if data.kind == SyntaxKind::IntersectionType {
            TypeNode::IntersectionType(node)
        } else {
            TypeNode::UnionType(node)
        }
    }

    pub fn create_conditional_type(
        &self,
        data: NodeData,
        check_type: &'a TypeNode<'a>,
        extends_type: &'a TypeNode<'a>,
        true_type: &'a TypeNode<'a>,
        false_type: &'a TypeNode<'a>,
    ) -> TypeNode<'a> {
        let mut node = ConditionalTypeNode {
            data,
            check_type,
            extends_type,
            true_type,
            false_type,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::ConditionalType(node)
    }

    pub fn create_infer_type(
        &self,
        data: NodeData,
        type_parameter: &'a TypeParameter<'a>,
    ) -> TypeNode<'a> {
        let mut node = InferTypeNode {
            data,
            type_parameter,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::InferType(node)
    }

    pub fn create_type_operator(
        &self,
        data: NodeData,
        operator: SyntaxKind,
        type_node: &'a TypeNode<'a>,
    ) -> TypeNode<'a> {
        let mut node = TypeOperatorNode {
            data,
            operator,
            type_node,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::TypeOperator(node)
    }

    pub fn create_indexed_access_type(
        &self,
        data: NodeData,
        object_type: &'a TypeNode<'a>,
        index_type: &'a TypeNode<'a>,
    ) -> TypeNode<'a> {
        let mut node = IndexedAccessTypeNode {
            data,
            object_type,
            index_type,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::IndexedAccessType(node)
    }

    pub fn create_literal_type(&self, data: NodeData, literal: &'a Expression<'a>) -> TypeNode<'a> {
        let mut node = LiteralTypeNode { data, literal };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::LiteralType(node)
    }

    pub fn create_type_predicate(
        &self,
        data: NodeData,
        asserts: bool,
        parameter_name: Identifier<'a>,
        type_node: OptionalNode<'a, TypeNode<'a>>,
    ) -> TypeNode<'a> {
        let mut node = TypePredicateNode {
            data,
            asserts,
            parameter_name,
            type_node,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeNode::TypePredicate(node)
    }

    pub fn create_property_signature(
        &self,
        data: NodeData,
        name: PropertyName<'a>,
        optional: bool,
        type_annotation: OptionalNode<'a, TypeNode<'a>>,
    ) -> TypeElement<'a> {
        let mut node = PropertySignatureNode {
            data,
            name,
            optional,
            type_annotation,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeElement::PropertySignature(node)
    }

    pub fn create_method_signature(
        &self,
        data: NodeData,
        name: PropertyName<'a>,
        optional: bool,
        type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
        parameters: &'a FormalParameterList<'a>,
        return_type: OptionalNode<'a, TypeNode<'a>>,
    ) -> TypeElement<'a> {
        let mut node = MethodSignatureNode {
            data,
            name,
            optional,
            type_parameters,
            parameters,
            return_type,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        TypeElement::MethodSignature(node)
    }

    pub fn create_index_signature(
        &self,
        data: NodeData,
        parameters: &'a FormalParameterList<'a>,
        type_annotation: OptionalNode<'a, TypeNode<'a>>,
    ) -> IndexSignatureNode<'a> {
        let mut node = IndexSignatureNode {
            data,
            parameters,
            type_annotation,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        node
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    /// `this`, `super`, `null`, `true` or `false`, chosen by `data.kind`.
    pub fn create_keyword_expression(&self, data: NodeData) -> Expression<'a> {
        match data.kind {
            SyntaxKind::ThisKeyword => Expression::ThisKeyword(
                data.with_transform_flags(TransformFlags::CONTAINS_LEXICAL_THIS),
            ),
            SyntaxKind::SuperKeyword => {
                Expression::SuperKeyword(data.with_transform_flags(TransformFlags::CONTAINS_ES2015))
            }
            SyntaxKind::NullKeyword => Expression::NullKeyword(data),
            SyntaxKind::TrueKeyword => Expression::TrueKeyword(data),
            _ => Expression::FalseKeyword(data),
        }
    }

    pub fn create_omitted_expression(&self, data: NodeData) -> Expression<'a> {
        Expression::OmittedExpression(data)
    }

    pub fn create_template_expression(
        &self,
        data: NodeData,
        head: Literal<'a>,
        template_spans: NodeList<'a, TemplateSpan<'a>>,
    ) -> Expression<'a> {
        let mut node = TemplateExpression {
            data,
            head,
            template_spans,
        };
        finish!(node, TransformFlags::CONTAINS_ES2015);
        Expression::TemplateExpression(node)
    }

    pub fn create_template_span(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
        literal: Literal<'a>,
    ) -> TemplateSpan<'a> {
        let mut node = TemplateSpan {
            data,
            expression,
            literal,
        };
        finish!(node, TransformFlags::NONE);
        node
    }

    pub fn create_array_literal(
        &self,
        data: NodeData,
        elements: NodeList<'a, Expression<'a>>,
        trailing_comma: bool,
    ) -> Expression<'a> {
        let mut node = ArrayLiteralExpression {
            data,
            elements,
            trailing_comma,
        };
        finish!(node, TransformFlags::NONE);
        Expression::ArrayLiteral(node)
    }

    pub fn create_object_literal(
        &self,
        data: NodeData,
        properties: NodeList<'a, ObjectLiteralElement<'a>>,
    ) -> Expression<'a> {
        let mut intrinsic = TransformFlags::NONE;
        for property in properties {
            match property {
                ObjectLiteralElement::Spread(_) => intrinsic |= TransformFlags::CONTAINS_ES2018,
                ObjectLiteralElement::ShorthandPropertyAssignment(_)
                | ObjectLiteralElement::Method(_) => intrinsic |= TransformFlags::CONTAINS_ES2015,
                ObjectLiteralElement::PropertyAssignment(_) => {}
            }
        }
        let mut node = ObjectLiteralExpression { data, properties };
        finish!(node, intrinsic);
        Expression::ObjectLiteral(node)
    }

    pub fn create_property_assignment(
        &self,
        data: NodeData,
        name: PropertyName<'a>,
        initializer: &'a Expression<'a>,
    ) -> ObjectLiteralElement<'a> {
        let mut node = PropertyAssignment {
            data,
            name,
            initializer,
        };
        finish!(node, TransformFlags::NONE);
        ObjectLiteralElement::PropertyAssignment(node)
    }

    pub fn create_shorthand_property_assignment(
        &self,
        data: NodeData,
        name: Identifier<'a>,
        object_assignment_initializer: OptionalNode<'a, Expression<'a>>,
    ) -> ObjectLiteralElement<'a> {
        let mut node = ShorthandPropertyAssignment {
            data,
            name,
            object_assignment_initializer,
        };
        finish!(node, TransformFlags::CONTAINS_ES2015);
        ObjectLiteralElement::ShorthandPropertyAssignment(node)
    }

    pub fn create_spread_element(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
    ) -> SpreadElement<'a> {
        let mut node = SpreadElement { data, expression };
        finish!(node, TransformFlags::CONTAINS_ES2015);
        node
    }

    pub fn create_property_access(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
        question_dot: bool,
        name: Identifier<'a>,
    ) -> Expression<'a> {
        let mut node = PropertyAccessExpression {
            data,
            expression,
            question_dot,
            name,
        };
        finish!(node, optional_chain_flags(question_dot));
        Expression::PropertyAccess(node)
    }

    pub fn create_element_access(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
        question_dot: bool,
        argument_expression: &'a Expression<'a>,
    ) -> Expression<'a> {
        let mut node = ElementAccessExpression {
            data,
            expression,
            question_dot,
            argument_expression,
        };
        finish!(node, optional_chain_flags(question_dot));
        Expression::ElementAccess(node)
    }

    pub fn create_call(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
        question_dot: bool,
        type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
        arguments: &'a ArgumentList<'a>,
    ) -> Expression<'a> {
        let mut node = CallExpression {
            data,
            expression,
            question_dot,
            type_arguments,
            arguments,
        };
        finish!(node, optional_chain_flags(question_dot));
        Expression::Call(node)
    }

    pub fn create_new(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
        type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
        arguments: OptionalNode<'a, ArgumentList<'a>>,
    ) -> Expression<'a> {
        let mut node = NewExpression {
            data,
            expression,
            type_arguments,
            arguments,
        };
        finish!(node, TransformFlags::NONE);
        Expression::New(node)
    }

    pub fn create_tagged_template(
        &self,
        data: NodeData,
        tag: &'a Expression<'a>,
        type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
        template: &'a Expression<'a>,
    ) -> Expression<'a> {
        let mut node = TaggedTemplateExpression {
            data,
            tag,
            type_arguments,
            template,
        };
        finish!(node, TransformFlags::CONTAINS_ES2015);
        Expression::TaggedTemplate(node)
    }

    pub fn create_parenthesized(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
    ) -> Expression<'a> {
        let mut node = ParenthesizedExpression { data, expression };
        finish!(node, TransformFlags::NONE);
        Expression::Parenthesized(node)
    }

    /// A function declaration or expression; the caller wraps it.
    #[allow(clippy::too_many_arguments)]
    pub fn create_function(
        &self,
        data: NodeData,
        name: Option<Identifier<'a>>,
        is_async: bool,
        is_generator: bool,
        type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
        parameters: &'a FormalParameterList<'a>,
        return_type: OptionalNode<'a, TypeNode<'a>>,
        body: OptionalNode<'a, Block<'a>>,
    ) -> Function<'a> {
        let intrinsic =
            function_like_flags(is_async, is_generator, body.is_some()) | ambient_flags(&data);
        let mut node = Function {
            data,
            name,
            is_async,
            is_generator,
            type_parameters,
            parameters,
            return_type,
            body,
        };
        finish!(node, intrinsic);
        node
    }

    pub fn create_arrow_function(
        &self,
        data: NodeData,
        is_async: bool,
        parameters: &'a ArrowParameters<'a>,
        body: ArrowFunctionBody<'a>,
    ) -> Expression<'a> {
        let mut intrinsic = TransformFlags::CONTAINS_ES2015;
        if is_async {
            intrinsic |= TransformFlags::CONTAINS_ES2017;
        }
        let mut node = ArrowFunction {
            data,
            is_async,
            parameters,
            body,
        };
        finish!(node, intrinsic);
        Expression::ArrowFunction(node)
    }

    pub fn create_prefix_unary(
        &self,
        data: NodeData,
        operator: SyntaxKind,
        operand: &'a Expression<'a>,
    ) -> Expression<'a> {
        let mut node = PrefixUnaryExpression {
            data,
            operator,
            operand,
        };
        finish!(node, TransformFlags::NONE);
        Expression::PrefixUnary(node)
    }

    pub fn create_postfix_unary(
        &self,
        data: NodeData,
        operand: &'a Expression<'a>,
        operator: SyntaxKind,
    ) -> Expression<'a> {
        let mut node = PostfixUnaryExpression {
            data,
            operand,
            operator,
        };
        finish!(node, TransformFlags::NONE);
        Expression::PostfixUnary(node)
    }

    pub fn create_binary(
        &self,
        data: NodeData,
        left: &'a Expression<'a>,
        operator: SyntaxKind,
        right: &'a Expression<'a>,
    ) -> Expression<'a> {
        let intrinsic = match operator {
            SyntaxKind::AsteriskAsteriskToken => TransformFlags::CONTAINS_ES2016,
            SyntaxKind::QuestionQuestionToken => TransformFlags::CONTAINS_ES2020,
            _ => TransformFlags::NONE,
        };
        let mut node = BinaryExpression {
            data,
            left,
            operator,
            right,
        };
        finish!(node, intrinsic);
        Expression::Binary(node)
    }

    pub fn create_assignment(
        &self,
        data: NodeData,
        left: &'a Expression<'a>,
        operator: SyntaxKind,
        right: &'a Expression<'a>,
    ) -> Expression<'a> {
        let mut intrinsic = match operator {
            SyntaxKind::AsteriskAsteriskEqualsToken => TransformFlags::CONTAINS_ES2016,
            kind if kind.is_logical_assignment() => TransformFlags::CONTAINS_ES2021,
            _ => TransformFlags::NONE,
        };
        if matches!(left, Expression::ArrayLiteral(_) | Expression::ObjectLiteral(_)) {
            intrinsic |= TransformFlags::CONTAINS_ES2015;
        }
        let mut node = AssignmentExpression {
            data,
            left,
            operator,
            right,
        };
        finish!(node, intrinsic);
        Expression::Assignment(node)
    }

    pub fn create_conditional(
        &self,
        data: NodeData,
        condition: &'a Expression<'a>,
        when_true: &'a Expression<'a>,
        when_false: &'a Expression<'a>,
    ) -> Expression<'a> {
        let mut node = ConditionalExpression {
            data,
            condition,
            when_true,
            when_false,
        };
        finish!(node, TransformFlags::NONE);
        Expression::Conditional(node)
    }

    pub fn create_yield(
        &self,
        data: NodeData,
        delegate: bool,
        expression: OptionalNode<'a, Expression<'a>>,
    ) -> Expression<'a> {
        let mut node = YieldExpression {
            data,
            delegate,
            expression,
        };
        finish!(
            node,
            TransformFlags::CONTAINS_ES2015 | TransformFlags::CONTAINS_YIELD
        );
        Expression::Yield(node)
    }

    pub fn create_await(&self, data: NodeData, expression: &'a Expression<'a>) -> Expression<'a> {
        let mut node = AwaitExpression { data, expression };
        finish!(
            node,
            TransformFlags::CONTAINS_ES2017 | TransformFlags::CONTAINS_AWAIT
        );
        Expression::Await(node)
    }

    /// `as` and `satisfies` expressions, chosen by `data.kind`.
    pub fn create_type_assertion(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
        type_node: &'a TypeNode<'a>,
    ) -> Expression<'a> {
        let mut node = TypeAssertionExpression {
            data,
            expression,
            type_node,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        if data.kind == SyntaxKind::SatisfiesExpression {
            Expression::Satisfies(node)
        } else {
            Expression::As(node)
        }
    }

    pub fn create_non_null(&self, data: NodeData, expression: &'a Expression<'a>) -> Expression<'a> {
        let mut node = NonNullExpression { data, expression };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        Expression::NonNull(node)
    }

    pub fn create_meta_property(
        &self,
        data: NodeData,
        keyword_token: SyntaxKind,
        name: Identifier<'a>,
    ) -> Expression<'a> {
        let intrinsic = if keyword_token == SyntaxKind::ImportKeyword {
            TransformFlags::CONTAINS_ES2020
        } else {
            TransformFlags::CONTAINS_ES2015
        };
        let mut node = MetaPropertyExpression {
            data,
            keyword_token,
            name,
        };
        finish!(node, intrinsic);
        Expression::MetaProperty(node)
    }

    // ========================================================================
    // Classes
    // ========================================================================

    /// A class declaration or expression; the caller wraps it.
    #[allow(clippy::too_many_arguments)]
    pub fn create_class(
        &self,
        data: NodeData,
        decorators: NodeList<'a, Decorator<'a>>,
        name: Option<Identifier<'a>>,
        type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
        extends_clause: OptionalNode<'a, Expression<'a>>,
        implements_clause: NodeList<'a, TypeNode<'a>>,
        members: NodeList<'a, ClassElement<'a>>,
    ) -> Class<'a> {
        let intrinsic = TransformFlags::CONTAINS_ES2015 | ambient_flags(&data);
        let mut node = Class {
            data,
            decorators,
            name,
            type_parameters,
            extends_clause,
            implements_clause,
            members,
        };
        finish!(node, intrinsic);
        node
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_property_definition(
        &self,
        data: NodeData,
        decorators: NodeList<'a, Decorator<'a>>,
        name: PropertyName<'a>,
        optional: bool,
        definite: bool,
        type_annotation: OptionalNode<'a, TypeNode<'a>>,
        initializer: OptionalNode<'a, Expression<'a>>,
    ) -> ClassElement<'a> {
        let intrinsic = ts_if(optional || definite) | ambient_flags(&data);
        let mut node = PropertyDefinition {
            data,
            decorators,
            name,
            optional,
            definite,
            type_annotation,
            initializer,
        };
        finish!(node, intrinsic);
        ClassElement::Property(node)
    }

    /// A method, accessor or constructor (by `data.kind`); the caller wraps
    /// it as a class element or an object literal member.
    #[allow(clippy::too_many_arguments)]
    pub fn create_method_definition(
        &self,
        data: NodeData,
        decorators: NodeList<'a, Decorator<'a>>,
        name: PropertyName<'a>,
        optional: bool,
        is_async: bool,
        is_generator: bool,
        type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
        parameters: &'a FormalParameterList<'a>,
        return_type: OptionalNode<'a, TypeNode<'a>>,
        body: OptionalNode<'a, Block<'a>>,
    ) -> MethodDefinition<'a> {
        let intrinsic = TransformFlags::CONTAINS_ES2015
            | function_like_flags(is_async, is_generator, body.is_some())
            | ts_if(optional)
            | ambient_flags(&data);
        let mut node = MethodDefinition {
            data,
            decorators,
            name,
            optional,
            is_async,
            is_generator,
            type_parameters,
            parameters,
            return_type,
            body,
        };
        finish!(node, intrinsic);
        node
    }

    pub fn create_class_static_block(&self, data: NodeData, body: &'a Block<'a>) -> ClassElement<'a> {
        let mut node = ClassStaticBlock { data, body };
        finish!(node, TransformFlags::NONE);
        ClassElement::StaticBlock(node)
    }

    pub fn create_semicolon_class_element(&self, data: NodeData) -> ClassElement<'a> {
        ClassElement::SemicolonClassElement(data)
    }

    // ========================================================================
    // Statements
    // ========================================================================

    pub fn create_block(&self, data: NodeData, statements: NodeList<'a, Statement<'a>>) -> Block<'a> {
        let mut node = Block { data, statements };
        finish!(node, TransformFlags::NONE);
        node
    }

    pub fn create_empty_statement(&self, data: NodeData) -> Statement<'a> {
        Statement::EmptyStatement(data)
    }

    pub fn create_debugger_statement(&self, data: NodeData) -> Statement<'a> {
        Statement::DebuggerStatement(data)
    }

    pub fn create_variable_declaration_list(
        &self,
        data: NodeData,
        declarations: NodeList<'a, VariableDeclaration<'a>>,
    ) -> &'a VariableDeclarationList<'a> {
        let intrinsic = if data.flags.intersects(NodeFlags::BLOCK_SCOPED) {
            TransformFlags::CONTAINS_ES2015
        } else {
            TransformFlags::NONE
        };
        let mut node = VariableDeclarationList { data, declarations };
        finish!(node, intrinsic);
        self.alloc(node)
    }

    pub fn create_variable_declaration(
        &self,
        data: NodeData,
        name: &'a Expression<'a>,
        definite: bool,
        type_annotation: OptionalNode<'a, TypeNode<'a>>,
        initializer: OptionalNode<'a, Expression<'a>>,
    ) -> VariableDeclaration<'a> {
        let mut intrinsic = ts_if(definite);
        if !matches!(name, Expression::Identifier(_)) {
            intrinsic |= TransformFlags::CONTAINS_ES2015;
        }
        let mut node = VariableDeclaration {
            data,
            name,
            definite,
            type_annotation,
            initializer,
        };
        finish!(node, intrinsic);
        node
    }

    /// `var` statements and lexical declarations, chosen by `data.kind`.
    pub fn create_variable_statement(
        &self,
        data: NodeData,
        declaration_list: &'a VariableDeclarationList<'a>,
    ) -> Statement<'a> {
        let intrinsic = ambient_flags(&data);
        let mut node = VariableStatement {
            data,
            declaration_list,
        };
        finish!(node, intrinsic);
        if data.kind == SyntaxKind::LexicalDeclaration {
            Statement::LexicalDeclaration(node)
        } else {
            Statement::VariableStatement(node)
        }
    }

    pub fn create_expression_statement(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
    ) -> Statement<'a> {
        let mut node = ExpressionStatement { data, expression };
        finish!(node, TransformFlags::NONE);
        Statement::ExpressionStatement(node)
    }

    pub fn create_if(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
        then_statement: &'a Statement<'a>,
        else_statement: OptionalNode<'a, Statement<'a>>,
    ) -> Statement<'a> {
        let mut node = IfStatement {
            data,
            expression,
            then_statement,
            else_statement,
        };
        finish!(node, TransformFlags::NONE);
        Statement::IfStatement(node)
    }

    pub fn create_do(
        &self,
        data: NodeData,
        statement: &'a Statement<'a>,
        expression: &'a Expression<'a>,
    ) -> Statement<'a> {
        let mut node = DoStatement {
            data,
            statement,
            expression,
        };
        finish!(node, TransformFlags::NONE);
        Statement::DoStatement(node)
    }

    pub fn create_while(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
        statement: &'a Statement<'a>,
    ) -> Statement<'a> {
        let mut node = WhileStatement {
            data,
            expression,
            statement,
        };
        finish!(node, TransformFlags::NONE);
        Statement::WhileStatement(node)
    }

    pub fn create_for(
        &self,
        data: NodeData,
        initializer: Option<ForInitializer<'a>>,
        condition: OptionalNode<'a, Expression<'a>>,
        incrementor: OptionalNode<'a, Expression<'a>>,
        statement: &'a Statement<'a>,
    ) -> Statement<'a> {
        let mut node = ForStatement {
            data,
            initializer,
            condition,
            incrementor,
            statement,
        };
        finish!(node, TransformFlags::NONE);
        Statement::ForStatement(node)
    }

    /// `for-in` and `for-of` statements, chosen by `data.kind`.
    pub fn create_for_in_or_of(
        &self,
        data: NodeData,
        is_await: bool,
        initializer: ForInitializer<'a>,
        expression: &'a Expression<'a>,
        statement: &'a Statement<'a>,
    ) -> Statement<'a> {
        let is_of = data.kind == SyntaxKind::ForOfStatement;
        let mut intrinsic = TransformFlags::NONE;
        if is_of {
            intrinsic |= TransformFlags::CONTAINS_ES2015;
        }
        if is_await {
            intrinsic |= TransformFlags::CONTAINS_ES2018 | TransformFlags::CONTAINS_AWAIT;
        }
        let mut node = ForInOrOfStatement {
            data,
            is_await,
            initializer,
            expression,
            statement,
        };
        finish!(node, intrinsic);
        if is_of {
            Statement::ForOfStatement(node)
        } else {
            Statement::ForInStatement(node)
        }
    }

    /// `break` and `continue` statements, chosen by `data.kind`.
    pub fn create_break_or_continue(
        &self,
        data: NodeData,
        label: Option<Identifier<'a>>,
    ) -> Statement<'a> {
        let node = BreakOrContinueStatement { data, label };
        if data.kind == SyntaxKind::ContinueStatement {
            Statement::ContinueStatement(node)
        } else {
            Statement::BreakStatement(node)
        }
    }

    pub fn create_return(
        &self,
        data: NodeData,
        expression: OptionalNode<'a, Expression<'a>>,
    ) -> Statement<'a> {
        let mut node = ReturnStatement { data, expression };
        finish!(node, TransformFlags::NONE);
        Statement::ReturnStatement(node)
    }

    pub fn create_with(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
        statement: &'a Statement<'a>,
    ) -> Statement<'a> {
        let mut node = WithStatement {
            data,
            expression,
            statement,
        };
        finish!(node, TransformFlags::NONE);
        Statement::WithStatement(node)
    }

    pub fn create_switch(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
        clauses: NodeList<'a, CaseOrDefaultClause<'a>>,
    ) -> Statement<'a> {
        let mut node = SwitchStatement {
            data,
            expression,
            clauses,
        };
        finish!(node, TransformFlags::NONE);
        Statement::SwitchStatement(node)
    }

    pub fn create_case_or_default_clause(
        &self,
        data: NodeData,
        expression: OptionalNode<'a, Expression<'a>>,
        statements: NodeList<'a, Statement<'a>>,
    ) -> CaseOrDefaultClause<'a> {
        let mut node = CaseOrDefaultClause {
            data,
            expression,
            statements,
        };
        finish!(node, TransformFlags::NONE);
        node
    }

    pub fn create_labeled(
        &self,
        data: NodeData,
        label: Identifier<'a>,
        statement: &'a Statement<'a>,
    ) -> Statement<'a> {
        let mut node = LabeledStatement {
            data,
            label,
            statement,
        };
        finish!(node, TransformFlags::NONE);
        Statement::LabeledStatement(node)
    }

    pub fn create_throw(&self, data: NodeData, expression: &'a Expression<'a>) -> Statement<'a> {
        let mut node = ThrowStatement { data, expression };
        finish!(node, TransformFlags::NONE);
        Statement::ThrowStatement(node)
    }

    pub fn create_try(
        &self,
        data: NodeData,
        try_block: &'a Block<'a>,
        catch_clause: OptionalNode<'a, CatchClause<'a>>,
        finally_block: OptionalNode<'a, Block<'a>>,
    ) -> Statement<'a> {
        let mut node = TryStatement {
            data,
            try_block,
            catch_clause,
            finally_block,
        };
        finish!(node, TransformFlags::NONE);
        Statement::TryStatement(node)
    }

    pub fn create_catch_clause(
        &self,
        data: NodeData,
        variable_declaration: OptionalNode<'a, VariableDeclaration<'a>>,
        block: &'a Block<'a>,
    ) -> CatchClause<'a> {
        let mut node = CatchClause {
            data,
            variable_declaration,
            block,
        };
        finish!(node, TransformFlags::NONE);
        node
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    pub fn create_interface_declaration(
        &self,
        data: NodeData,
        name: Identifier<'a>,
        type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
        extends_clause: NodeList<'a, TypeNode<'a>>,
        members: NodeList<'a, TypeElement<'a>>,
    ) -> Statement<'a> {
        let mut node = InterfaceDeclaration {
            data,
            name,
            type_parameters,
            extends_clause,
            members,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        Statement::InterfaceDeclaration(node)
    }

    pub fn create_type_alias_declaration(
        &self,
        data: NodeData,
        name: Identifier<'a>,
        type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
        type_node: &'a TypeNode<'a>,
    ) -> Statement<'a> {
        let mut node = TypeAliasDeclaration {
            data,
            name,
            type_parameters,
            type_node,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        Statement::TypeAliasDeclaration(node)
    }

    pub fn create_enum_declaration(
        &self,
        data: NodeData,
        name: Identifier<'a>,
        members: NodeList<'a, EnumMember<'a>>,
    ) -> Statement<'a> {
        let mut node = EnumDeclaration {
            data,
            name,
            members,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        Statement::EnumDeclaration(node)
    }

    pub fn create_enum_member(
        &self,
        data: NodeData,
        name: PropertyName<'a>,
        initializer: OptionalNode<'a, Expression<'a>>,
    ) -> EnumMember<'a> {
        let mut node = EnumMember {
            data,
            name,
            initializer,
        };
        finish!(node, TransformFlags::CONTAINS_TYPESCRIPT);
        node
    }

    pub fn create_import_declaration(
        &self,
        data: NodeData,
        import_clause: OptionalNode<'a, ImportClause<'a>>,
        module_specifier: &'a Expression<'a>,
    ) -> Statement<'a> {
        let mut node = ImportDeclaration {
            data,
            import_clause,
            module_specifier,
        };
        finish!(node, TransformFlags::NONE);
        Statement::ImportDeclaration(node)
    }

    pub fn create_import_clause(
        &self,
        data: NodeData,
        is_type_only: bool,
        name: Option<Identifier<'a>>,
        named_bindings: Option<NamedBindings<'a>>,
    ) -> ImportClause<'a> {
        let mut node = ImportClause {
            data,
            is_type_only,
            name,
            named_bindings,
        };
        finish!(node, ts_if(is_type_only));
        node
    }

    pub fn create_namespace_binding(
        &self,
        data: NodeData,
        name: Option<Identifier<'a>>,
    ) -> NamedBindings<'a> {
        let mut node = NamespaceBinding { data, name };
        finish!(node, TransformFlags::NONE);
        NamedBindings::Namespace(node)
    }

    pub fn create_named_specifiers(
        &self,
        data: NodeData,
        elements: NodeList<'a, Specifier<'a>>,
    ) -> NamedBindings<'a> {
        let mut node = NamedSpecifiers { data, elements };
        finish!(node, TransformFlags::NONE);
        NamedBindings::Named(node)
    }

    pub fn create_specifier(
        &self,
        data: NodeData,
        is_type_only: bool,
        property_name: Option<Identifier<'a>>,
        name: Identifier<'a>,
    ) -> Specifier<'a> {
        let mut node = Specifier {
            data,
            is_type_only,
            property_name,
            name,
        };
        finish!(node, ts_if(is_type_only));
        node
    }

    pub fn create_export_declaration(
        &self,
        data: NodeData,
        is_type_only: bool,
        export_clause: Option<NamedBindings<'a>>,
        module_specifier: OptionalNode<'a, Expression<'a>>,
        declaration: OptionalNode<'a, Statement<'a>>,
    ) -> Statement<'a> {
        let mut node = ExportDeclaration {
            data,
            is_type_only,
            export_clause,
            module_specifier,
            declaration,
        };
        finish!(node, ts_if(is_type_only));
        Statement::ExportDeclaration(node)
    }

    pub fn create_export_assignment(
        &self,
        data: NodeData,
        is_export_equals: bool,
        expression: &'a Expression<'a>,
    ) -> Statement<'a> {
        let mut node = ExportAssignment {
            data,
            is_export_equals,
            expression,
        };
        finish!(node, ts_if(is_export_equals));
        Statement::ExportAssignment(node)
    }

    // ========================================================================
    // JSX
    // ========================================================================

    pub fn create_jsx_element(
        &self,
        data: NodeData,
        opening_element: &'a JsxOpeningElement<'a>,
        children: &'a JsxChildrenList<'a>,
        closing_element: &'a JsxClosingElement<'a>,
    ) -> Expression<'a> {
        let mut node = JsxElement {
            data,
            opening_element,
            children,
            closing_element,
        };
        finish!(node, TransformFlags::NONE);
        Expression::JsxElement(node)
    }

    /// An opening or self-closing element header, chosen by `data.kind`.
    pub fn create_jsx_opening_element(
        &self,
        data: NodeData,
        tag_name: JsxTagName<'a>,
        type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
        attributes: &'a JsxAttributesList<'a>,
    ) -> JsxOpeningElement<'a> {
        let mut node = JsxOpeningElement {
            data,
            tag_name,
            type_arguments,
            attributes,
        };
        finish!(node, TransformFlags::NONE);
        node
    }

    pub fn create_jsx_closing_element(
        &self,
        data: NodeData,
        tag_name: JsxTagName<'a>,
    ) -> &'a JsxClosingElement<'a> {
        let mut node = JsxClosingElement { data, tag_name };
        finish!(node, TransformFlags::NONE);
        self.alloc(node)
    }

    pub fn create_jsx_fragment(
        &self,
        data: NodeData,
        children: &'a JsxChildrenList<'a>,
    ) -> Expression<'a> {
        let mut node = JsxFragment { data, children };
        finish!(node, TransformFlags::CONTAINS_JSX);
        Expression::JsxFragment(node)
    }

    pub fn create_jsx_attributes_list(
        &self,
        data: NodeData,
        attributes: NodeList<'a, JsxAttributeLike<'a>>,
    ) -> &'a JsxAttributesList<'a> {
        let mut node = JsxAttributesList { data, attributes };
        finish!(node, TransformFlags::CONTAINS_JSX);
        self.alloc(node)
    }

    pub fn create_jsx_attribute(
        &self,
        data: NodeData,
        name: JsxTagName<'a>,
        initializer: Option<JsxAttributeValue<'a>>,
    ) -> JsxAttributeLike<'a> {
        let mut node = JsxAttribute {
            data,
            name,
            initializer,
        };
        finish!(node, TransformFlags::NONE);
        JsxAttributeLike::Attribute(node)
    }

    pub fn create_jsx_spread_attribute(
        &self,
        data: NodeData,
        expression: &'a Expression<'a>,
    ) -> JsxAttributeLike<'a> {
        let mut node = JsxSpreadAttribute { data, expression };
        finish!(node, TransformFlags::NONE);
        JsxAttributeLike::Spread(node)
    }

    pub fn create_jsx_expression(
        &self,
        data: NodeData,
        dot_dot_dot: bool,
        expression: OptionalNode<'a, Expression<'a>>,
    ) -> JsxExpression<'a> {
        let mut node = JsxExpression {
            data,
            dot_dot_dot,
            expression,
        };
        finish!(node, TransformFlags::NONE);
        node
    }

    pub fn create_jsx_children_list(
        &self,
        data: NodeData,
        children: NodeList<'a, JsxChild<'a>>,
    ) -> &'a JsxChildrenList<'a> {
        let mut node = JsxChildrenList { data, children };
        finish!(node, TransformFlags::NONE);
        self.alloc(node)
    }

    pub fn create_jsx_text(
        &self,
        data: NodeData,
        text: &'a str,
        contains_only_trivia_whitespace: bool,
    ) -> JsxChild<'a> {
        JsxChild::Text(JsxText {
            data,
            text,
            contains_only_trivia_whitespace,
        })
    }

    pub fn create_jsx_namespaced_name(
        &self,
        data: NodeData,
        namespace: Identifier<'a>,
        name: Identifier<'a>,
    ) -> JsxTagName<'a> {
        let mut node = JsxNamespacedName {
            data,
            namespace,
            name,
        };
        finish!(node, TransformFlags::NONE);
        JsxTagName::Namespaced(self.alloc(node))
    }

    pub fn create_jsx_tag_name_property_access(
        &self,
        data: NodeData,
        expression: JsxTagName<'a>,
        name: Identifier<'a>,
    ) -> JsxTagName<'a> {
        let mut node = JsxTagNamePropertyAccess {
            data,
            expression,
            name,
        };
        finish!(node, TransformFlags::NONE);
        JsxTagName::PropertyAccess(self.alloc(node))
    }
}

fn optional_chain_flags(question_dot: bool) -> TransformFlags {
    if question_dot {
        TransformFlags::CONTAINS_ES2020
    } else {
        TransformFlags::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident<'a>(factory: &NodeFactory<'a>, text: &'a str, pos: u32) -> Identifier<'a> {
        factory.create_identifier(
            NodeData::new(SyntaxKind::Identifier, pos, pos + text.len() as u32),
            text,
            None,
        )
    }

    #[test]
    fn test_binary_propagates_children() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let left = factory.alloc(factory.create_await(
            NodeData::new(SyntaxKind::AwaitExpression, 0, 7),
            factory.alloc(Expression::Identifier(ident(&factory, "a", 6))),
        ));
        let right = factory.alloc(Expression::Identifier(ident(&factory, "b", 11)));
        let binary = factory.create_binary(
            NodeData::new(SyntaxKind::BinaryExpression, 0, 12),
            left,
            SyntaxKind::AsteriskAsteriskToken,
            right,
        );

        let flags = binary.transform_flags();
        assert!(flags.contains(TransformFlags::CONTAINS_ES2016));
        assert!(flags.contains(TransformFlags::CONTAINS_AWAIT));
        assert!(flags.contains(TransformFlags::CONTAINS_ES2017));
        assert!(!flags.contains(TransformFlags::CONTAINS_TYPESCRIPT));
    }

    #[test]
    fn test_typed_parameter_is_typescript() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let binding = factory.alloc(Expression::Identifier(ident(&factory, "a", 1)));
        let number = factory.alloc(factory.create_keyword_type(NodeData::new(
            SyntaxKind::NumberKeyword,
            4,
            11,
        )));
        let param = factory.create_formal_parameter(
            NodeData::new(SyntaxKind::FormalParameter, 1, 11),
            &[],
            false,
            binding,
            true,
            Some(number),
            None,
        );
        assert!(param
            .data
            .transform_flags
            .contains(TransformFlags::CONTAINS_TYPESCRIPT));
        assert!(!param
            .data
            .transform_flags
            .contains(TransformFlags::CONTAINS_ES2015));
    }

    #[test]
    fn test_rest_parameter_is_es2015() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let binding = factory.alloc(Expression::Identifier(ident(&factory, "rest", 4)));
        let param = factory.create_formal_parameter(
            NodeData::new(SyntaxKind::FormalParameter, 1, 8),
            &[],
            true,
            binding,
            false,
            None,
            None,
        );
        assert_eq!(param.data.transform_flags, TransformFlags::CONTAINS_ES2015);
    }

    #[test]
    fn test_jsx_attributes_list_is_intrinsic() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let attributes =
            factory.create_jsx_attributes_list(NodeData::new(SyntaxKind::JsxAttributesList, 2, 2), &[]);
        assert_eq!(attributes.data.transform_flags, TransformFlags::CONTAINS_JSX);

        let opening = factory.create_jsx_opening_element(
            NodeData::new(SyntaxKind::JsxSelfClosingElement, 0, 5),
            JsxTagName::Identifier(ident(&factory, "a", 1)),
            None,
            attributes,
        );
        assert!(opening
            .data
            .transform_flags
            .contains(TransformFlags::CONTAINS_JSX));
    }

    #[test]
    fn test_lexical_declaration_list_is_es2015() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let var_list = factory.create_variable_declaration_list(
            NodeData::new(SyntaxKind::VariableDeclarationList, 0, 5),
            &[],
        );
        assert_eq!(var_list.data.transform_flags, TransformFlags::NONE);

        let let_list = factory.create_variable_declaration_list(
            NodeData::new(SyntaxKind::VariableDeclarationList, 0, 5).with_flags(NodeFlags::LET),
            &[],
        );
        assert!(let_list
            .data
            .transform_flags
            .contains(TransformFlags::CONTAINS_ES2015));
    }

    #[test]
    fn test_alloc_list_empty() {
        let arena = Bump::new();
        let factory = NodeFactory::new(&arena);
        let list: NodeList<'_, Statement<'_>> = factory.alloc_list(Vec::new());
        assert!(list.is_empty());
        let ids = factory.alloc_list(vec![ident(&factory, "x", 0), ident(&factory, "y", 2)]);
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[1].text, "y");
    }
}
