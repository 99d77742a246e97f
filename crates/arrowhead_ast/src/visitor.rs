//! Generic child enumeration over the syntax tree.
//!
//! [`Visit`] is implemented by every node type. `for_each_child` yields the
//! structural children of a node in source order, which is all that span
//! checks, transform-flag checks and node statistics need.

use crate::node::*;

/// A syntax node whose header and children can be inspected generically.
pub trait Visit<'a> {
    /// The common node header.
    fn data(&self) -> &NodeData;

    /// Call `f` on every structural child, in source order.
    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>));

    /// Number of nodes in this subtree, including this one.
    fn count_nodes(&self) -> usize {
        let mut count = 1;
        self.for_each_child(&mut |child| count += child.count_nodes());
        count
    }
}

fn visit_list<'a, T: Visit<'a>>(list: &[T], f: &mut dyn FnMut(&dyn Visit<'a>)) {
    for item in list {
        f(item);
    }
}

fn visit_opt<'a, T: Visit<'a>>(node: Option<&T>, f: &mut dyn FnMut(&dyn Visit<'a>)) {
    if let Some(node) = node {
        f(node);
    }
}

fn visit_opt_list<'a, T: Visit<'a>>(list: Option<&[T]>, f: &mut dyn FnMut(&dyn Visit<'a>)) {
    if let Some(list) = list {
        visit_list(list, f);
    }
}

// ============================================================================
// Leaves
// ============================================================================

impl<'a> Visit<'a> for NodeData {
    fn data(&self) -> &NodeData {
        self
    }

    fn for_each_child(&self, _f: &mut dyn FnMut(&dyn Visit<'a>)) {}
}

impl<'a> Visit<'a> for Identifier<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, _f: &mut dyn FnMut(&dyn Visit<'a>)) {}
}

impl<'a> Visit<'a> for Literal<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, _f: &mut dyn FnMut(&dyn Visit<'a>)) {}
}

impl<'a> Visit<'a> for JsxText<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, _f: &mut dyn FnMut(&dyn Visit<'a>)) {}
}

// ============================================================================
// Sum types
// ============================================================================

impl<'a> Visit<'a> for Statement<'a> {
    fn data(&self) -> &NodeData {
        Statement::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            Statement::VariableStatement(n) | Statement::LexicalDeclaration(n) => {
                n.for_each_child(f)
            }
            Statement::FunctionDeclaration(n) => n.for_each_child(f),
            Statement::ClassDeclaration(n) => n.for_each_child(f),
            Statement::InterfaceDeclaration(n) => n.for_each_child(f),
            Statement::TypeAliasDeclaration(n) => n.for_each_child(f),
            Statement::EnumDeclaration(n) => n.for_each_child(f),
            Statement::ImportDeclaration(n) => n.for_each_child(f),
            Statement::ExportDeclaration(n) => n.for_each_child(f),
            Statement::ExportAssignment(n) => n.for_each_child(f),
            Statement::Block(n) => n.for_each_child(f),
            Statement::EmptyStatement(_) | Statement::DebuggerStatement(_) => {}
            Statement::ExpressionStatement(n) => n.for_each_child(f),
            Statement::IfStatement(n) => n.for_each_child(f),
            Statement::DoStatement(n) => n.for_each_child(f),
            Statement::WhileStatement(n) => n.for_each_child(f),
            Statement::ForStatement(n) => n.for_each_child(f),
            Statement::ForInStatement(n) | Statement::ForOfStatement(n) => n.for_each_child(f),
            Statement::ContinueStatement(n) | Statement::BreakStatement(n) => {
                n.for_each_child(f)
            }
            Statement::ReturnStatement(n) => n.for_each_child(f),
            Statement::WithStatement(n) => n.for_each_child(f),
            Statement::SwitchStatement(n) => n.for_each_child(f),
            Statement::LabeledStatement(n) => n.for_each_child(f),
            Statement::ThrowStatement(n) => n.for_each_child(f),
            Statement::TryStatement(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for Expression<'a> {
    fn data(&self) -> &NodeData {
        Expression::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            Expression::Identifier(_)
            | Expression::PrivateIdentifier(_)
            | Expression::Literal(_)
            | Expression::OmittedExpression(_)
            | Expression::ThisKeyword(_)
            | Expression::SuperKeyword(_)
            | Expression::NullKeyword(_)
            | Expression::TrueKeyword(_)
            | Expression::FalseKeyword(_) => {}
            Expression::TemplateExpression(n) => n.for_each_child(f),
            Expression::ArrayLiteral(n) => n.for_each_child(f),
            Expression::ObjectLiteral(n) => n.for_each_child(f),
            Expression::PropertyAccess(n) => n.for_each_child(f),
            Expression::ElementAccess(n) => n.for_each_child(f),
            Expression::Call(n) => n.for_each_child(f),
            Expression::New(n) => n.for_each_child(f),
            Expression::TaggedTemplate(n) => n.for_each_child(f),
            Expression::Parenthesized(n) => n.for_each_child(f),
            Expression::FunctionExpression(n) => n.for_each_child(f),
            Expression::ArrowFunction(n) => n.for_each_child(f),
            Expression::ArrowParameters(n) => n.for_each_child(f),
            Expression::PrefixUnary(n) => n.for_each_child(f),
            Expression::PostfixUnary(n) => n.for_each_child(f),
            Expression::Binary(n) => n.for_each_child(f),
            Expression::Assignment(n) => n.for_each_child(f),
            Expression::Conditional(n) => n.for_each_child(f),
            Expression::Yield(n) => n.for_each_child(f),
            Expression::Await(n) => n.for_each_child(f),
            Expression::Spread(n) => n.for_each_child(f),
            Expression::ClassExpression(n) => n.for_each_child(f),
            Expression::As(n) | Expression::Satisfies(n) => n.for_each_child(f),
            Expression::NonNull(n) => n.for_each_child(f),
            Expression::MetaProperty(n) => n.for_each_child(f),
            Expression::JsxElement(n) => n.for_each_child(f),
            Expression::JsxSelfClosingElement(n) => n.for_each_child(f),
            Expression::JsxFragment(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for TypeNode<'a> {
    fn data(&self) -> &NodeData {
        TypeNode::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            TypeNode::Keyword(_) | TypeNode::ThisType(_) => {}
            TypeNode::TypeReference(n) => n.for_each_child(f),
            TypeNode::FunctionType(n) | TypeNode::ConstructorType(n) => n.for_each_child(f),
            TypeNode::TypeQuery(n) => n.for_each_child(f),
            TypeNode::TypeLiteral(n) => n.for_each_child(f),
            TypeNode::ArrayType(n) => n.for_each_child(f),
            TypeNode::TupleType(n) => n.for_each_child(f),
            TypeNode::OptionalType(n) | TypeNode::RestType(n) | TypeNode::ParenthesizedType(n) => {
                n.for_each_child(f)
            }
            TypeNode::UnionType(n) | TypeNode::IntersectionType(n) => n.for_each_child(f),
            TypeNode::ConditionalType(n) => n.for_each_child(f),
            TypeNode::InferType(n) => n.for_each_child(f),
            TypeNode::TypeOperator(n) => n.for_each_child(f),
            TypeNode::IndexedAccessType(n) => n.for_each_child(f),
            TypeNode::LiteralType(n) => n.for_each_child(f),
            TypeNode::TypePredicate(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for TypeElement<'a> {
    fn data(&self) -> &NodeData {
        TypeElement::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            TypeElement::PropertySignature(n) => n.for_each_child(f),
            TypeElement::MethodSignature(n) => n.for_each_child(f),
            TypeElement::CallSignature(n) | TypeElement::ConstructSignature(n) => {
                n.for_each_child(f)
            }
            TypeElement::IndexSignature(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for ClassElement<'a> {
    fn data(&self) -> &NodeData {
        ClassElement::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            ClassElement::Property(n) => n.for_each_child(f),
            ClassElement::Method(n) => n.for_each_child(f),
            ClassElement::IndexSignature(n) => n.for_each_child(f),
            ClassElement::SemicolonClassElement(_) => {}
            ClassElement::StaticBlock(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for ObjectLiteralElement<'a> {
    fn data(&self) -> &NodeData {
        ObjectLiteralElement::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            ObjectLiteralElement::PropertyAssignment(n) => n.for_each_child(f),
            ObjectLiteralElement::ShorthandPropertyAssignment(n) => n.for_each_child(f),
            ObjectLiteralElement::Spread(n) => n.for_each_child(f),
            ObjectLiteralElement::Method(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for CoverElement<'a> {
    fn data(&self) -> &NodeData {
        CoverElement::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            CoverElement::Expression(n) => n.for_each_child(f),
            CoverElement::Parameter(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for PropertyName<'a> {
    fn data(&self) -> &NodeData {
        PropertyName::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        if let PropertyName::Computed(n) = self {
            f(n.expression);
        }
    }
}

impl<'a> Visit<'a> for EntityName<'a> {
    fn data(&self) -> &NodeData {
        EntityName::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        if let EntityName::QualifiedName(n) = self {
            n.for_each_child(f);
        }
    }
}

impl<'a> Visit<'a> for JsxTagName<'a> {
    fn data(&self) -> &NodeData {
        JsxTagName::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            JsxTagName::Identifier(_) => {}
            JsxTagName::Namespaced(n) => n.for_each_child(f),
            JsxTagName::PropertyAccess(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for JsxAttributeLike<'a> {
    fn data(&self) -> &NodeData {
        JsxAttributeLike::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            JsxAttributeLike::Attribute(n) => n.for_each_child(f),
            JsxAttributeLike::Spread(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for JsxAttributeValue<'a> {
    fn data(&self) -> &NodeData {
        JsxAttributeValue::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            JsxAttributeValue::StringLiteral(_) => {}
            JsxAttributeValue::Expression(n) => n.for_each_child(f),
            JsxAttributeValue::Element(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for JsxChild<'a> {
    fn data(&self) -> &NodeData {
        JsxChild::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            JsxChild::Text(_) => {}
            JsxChild::Expression(n) => n.for_each_child(f),
            JsxChild::Element(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for ForInitializer<'a> {
    fn data(&self) -> &NodeData {
        ForInitializer::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            ForInitializer::VariableDeclarationList(n) => n.for_each_child(f),
            ForInitializer::Expression(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for NamedBindings<'a> {
    fn data(&self) -> &NodeData {
        NamedBindings::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            NamedBindings::Namespace(n) => n.for_each_child(f),
            NamedBindings::Named(n) => n.for_each_child(f),
        }
    }
}

impl<'a> Visit<'a> for ArrowFunctionBody<'a> {
    fn data(&self) -> &NodeData {
        ArrowFunctionBody::data(self)
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        match self {
            ArrowFunctionBody::Block(n) => n.for_each_child(f),
            ArrowFunctionBody::Expression(n) => n.for_each_child(f),
        }
    }
}

// ============================================================================
// Roots, parameters and names
// ============================================================================

impl<'a> Visit<'a> for SourceBody<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.statements, f);
    }
}

impl<'a> Visit<'a> for QualifiedName<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.left);
        f(&self.right);
    }
}

impl<'a> Visit<'a> for ComputedPropertyName<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
    }
}

impl<'a> Visit<'a> for TypeParameter<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
        visit_opt(self.constraint, f);
        visit_opt(self.default, f);
    }
}

impl<'a> Visit<'a> for FormalParameter<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.decorators, f);
        f(self.binding);
        visit_opt(self.type_annotation, f);
        visit_opt(self.initializer, f);
    }
}

impl<'a> Visit<'a> for FormalParameterList<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.parameters, f);
    }
}

impl<'a> Visit<'a> for ArrowParameters<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt_list(self.type_parameters, f);
        visit_list(self.elements, f);
        visit_opt(self.return_type, f);
    }
}

impl<'a> Visit<'a> for ArgumentList<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.elements, f);
    }
}

impl<'a> Visit<'a> for Decorator<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
    }
}

// ============================================================================
// Types
// ============================================================================

impl<'a> Visit<'a> for TypeReferenceNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.type_name);
        visit_opt_list(self.type_arguments, f);
    }
}

impl<'a> Visit<'a> for SignatureNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt_list(self.type_parameters, f);
        f(self.parameters);
        visit_opt(self.return_type, f);
    }
}

impl<'a> Visit<'a> for TypeQueryNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.expr_name);
    }
}

impl<'a> Visit<'a> for TypeLiteralNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.members, f);
    }
}

impl<'a> Visit<'a> for ArrayTypeNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.element_type);
    }
}

impl<'a> Visit<'a> for TupleTypeNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.elements, f);
    }
}

impl<'a> Visit<'a> for WrappedTypeNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.type_node);
    }
}

impl<'a> Visit<'a> for UnionOrIntersectionTypeNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.types, f);
    }
}

impl<'a> Visit<'a> for ConditionalTypeNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.check_type);
        f(self.extends_type);
        f(self.true_type);
        f(self.false_type);
    }
}

impl<'a> Visit<'a> for InferTypeNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.type_parameter);
    }
}

impl<'a> Visit<'a> for TypeOperatorNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.type_node);
    }
}

impl<'a> Visit<'a> for IndexedAccessTypeNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.object_type);
        f(self.index_type);
    }
}

impl<'a> Visit<'a> for LiteralTypeNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.literal);
    }
}

impl<'a> Visit<'a> for TypePredicateNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.parameter_name);
        visit_opt(self.type_node, f);
    }
}

impl<'a> Visit<'a> for PropertySignatureNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
        visit_opt(self.type_annotation, f);
    }
}

impl<'a> Visit<'a> for MethodSignatureNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
        visit_opt_list(self.type_parameters, f);
        f(self.parameters);
        visit_opt(self.return_type, f);
    }
}

impl<'a> Visit<'a> for IndexSignatureNode<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.parameters);
        visit_opt(self.type_annotation, f);
    }
}

// ============================================================================
// Expressions
// ============================================================================

impl<'a> Visit<'a> for TemplateExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.head);
        visit_list(self.template_spans, f);
    }
}

impl<'a> Visit<'a> for TemplateSpan<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
        f(&self.literal);
    }
}

impl<'a> Visit<'a> for ArrayLiteralExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.elements, f);
    }
}

impl<'a> Visit<'a> for ObjectLiteralExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.properties, f);
    }
}

impl<'a> Visit<'a> for PropertyAssignment<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
        f(self.initializer);
    }
}

impl<'a> Visit<'a> for ShorthandPropertyAssignment<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
        visit_opt(self.object_assignment_initializer, f);
    }
}

impl<'a> Visit<'a> for PropertyAccessExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
        f(&self.name);
    }
}

impl<'a> Visit<'a> for ElementAccessExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
        f(self.argument_expression);
    }
}

impl<'a> Visit<'a> for CallExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
        visit_opt_list(self.type_arguments, f);
        f(self.arguments);
    }
}

impl<'a> Visit<'a> for NewExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
        visit_opt_list(self.type_arguments, f);
        visit_opt(self.arguments, f);
    }
}

impl<'a> Visit<'a> for TaggedTemplateExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.tag);
        visit_opt_list(self.type_arguments, f);
        f(self.template);
    }
}

impl<'a> Visit<'a> for ParenthesizedExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
    }
}

impl<'a> Visit<'a> for Function<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.name.as_ref(), f);
        visit_opt_list(self.type_parameters, f);
        f(self.parameters);
        visit_opt(self.return_type, f);
        visit_opt(self.body, f);
    }
}

impl<'a> Visit<'a> for ArrowFunction<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.parameters);
        f(&self.body);
    }
}

impl<'a> Visit<'a> for PrefixUnaryExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.operand);
    }
}

impl<'a> Visit<'a> for PostfixUnaryExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.operand);
    }
}

impl<'a> Visit<'a> for BinaryExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.left);
        f(self.right);
    }
}

impl<'a> Visit<'a> for AssignmentExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.left);
        f(self.right);
    }
}

impl<'a> Visit<'a> for ConditionalExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.condition);
        f(self.when_true);
        f(self.when_false);
    }
}

impl<'a> Visit<'a> for YieldExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.expression, f);
    }
}

impl<'a> Visit<'a> for AwaitExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
    }
}

impl<'a> Visit<'a> for SpreadElement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
    }
}

impl<'a> Visit<'a> for TypeAssertionExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
        f(self.type_node);
    }
}

impl<'a> Visit<'a> for NonNullExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
    }
}

impl<'a> Visit<'a> for MetaPropertyExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
    }
}

// ============================================================================
// Classes
// ============================================================================

impl<'a> Visit<'a> for Class<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.decorators, f);
        visit_opt(self.name.as_ref(), f);
        visit_opt_list(self.type_parameters, f);
        visit_opt(self.extends_clause, f);
        visit_list(self.implements_clause, f);
        visit_list(self.members, f);
    }
}

impl<'a> Visit<'a> for PropertyDefinition<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.decorators, f);
        f(&self.name);
        visit_opt(self.type_annotation, f);
        visit_opt(self.initializer, f);
    }
}

impl<'a> Visit<'a> for MethodDefinition<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.decorators, f);
        f(&self.name);
        visit_opt_list(self.type_parameters, f);
        f(self.parameters);
        visit_opt(self.return_type, f);
        visit_opt(self.body, f);
    }
}

impl<'a> Visit<'a> for ClassStaticBlock<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.body);
    }
}

// ============================================================================
// Statements
// ============================================================================

impl<'a> Visit<'a> for Block<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.statements, f);
    }
}

impl<'a> Visit<'a> for VariableStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.declaration_list);
    }
}

impl<'a> Visit<'a> for VariableDeclarationList<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.declarations, f);
    }
}

impl<'a> Visit<'a> for VariableDeclaration<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.name);
        visit_opt(self.type_annotation, f);
        visit_opt(self.initializer, f);
    }
}

impl<'a> Visit<'a> for ExpressionStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
    }
}

impl<'a> Visit<'a> for IfStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
        f(self.then_statement);
        visit_opt(self.else_statement, f);
    }
}

impl<'a> Visit<'a> for DoStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.statement);
        f(self.expression);
    }
}

impl<'a> Visit<'a> for WhileStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
        f(self.statement);
    }
}

impl<'a> Visit<'a> for ForStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.initializer.as_ref(), f);
        visit_opt(self.condition, f);
        visit_opt(self.incrementor, f);
        f(self.statement);
    }
}

impl<'a> Visit<'a> for ForInOrOfStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.initializer);
        f(self.expression);
        f(self.statement);
    }
}

impl<'a> Visit<'a> for BreakOrContinueStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.label.as_ref(), f);
    }
}

impl<'a> Visit<'a> for ReturnStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.expression, f);
    }
}

impl<'a> Visit<'a> for WithStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
        f(self.statement);
    }
}

impl<'a> Visit<'a> for SwitchStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
        visit_list(self.clauses, f);
    }
}

impl<'a> Visit<'a> for CaseOrDefaultClause<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.expression, f);
        visit_list(self.statements, f);
    }
}

impl<'a> Visit<'a> for LabeledStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.label);
        f(self.statement);
    }
}

impl<'a> Visit<'a> for ThrowStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
    }
}

impl<'a> Visit<'a> for TryStatement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.try_block);
        visit_opt(self.catch_clause, f);
        visit_opt(self.finally_block, f);
    }
}

impl<'a> Visit<'a> for CatchClause<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.variable_declaration, f);
        f(self.block);
    }
}

// ============================================================================
// Declarations
// ============================================================================

impl<'a> Visit<'a> for InterfaceDeclaration<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
        visit_opt_list(self.type_parameters, f);
        visit_list(self.extends_clause, f);
        visit_list(self.members, f);
    }
}

impl<'a> Visit<'a> for TypeAliasDeclaration<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
        visit_opt_list(self.type_parameters, f);
        f(self.type_node);
    }
}

impl<'a> Visit<'a> for EnumDeclaration<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
        visit_list(self.members, f);
    }
}

impl<'a> Visit<'a> for EnumMember<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
        visit_opt(self.initializer, f);
    }
}

impl<'a> Visit<'a> for ImportDeclaration<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.import_clause, f);
        f(self.module_specifier);
    }
}

impl<'a> Visit<'a> for ImportClause<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.name.as_ref(), f);
        visit_opt(self.named_bindings.as_ref(), f);
    }
}

impl<'a> Visit<'a> for NamespaceBinding<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.name.as_ref(), f);
    }
}

impl<'a> Visit<'a> for NamedSpecifiers<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.elements, f);
    }
}

impl<'a> Visit<'a> for Specifier<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.property_name.as_ref(), f);
        f(&self.name);
    }
}

impl<'a> Visit<'a> for ExportDeclaration<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.export_clause.as_ref(), f);
        visit_opt(self.module_specifier, f);
        visit_opt(self.declaration, f);
    }
}

impl<'a> Visit<'a> for ExportAssignment<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
    }
}

// ============================================================================
// JSX
// ============================================================================

impl<'a> Visit<'a> for JsxElement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.opening_element);
        f(self.children);
        f(self.closing_element);
    }
}

impl<'a> Visit<'a> for JsxOpeningElement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.tag_name);
        visit_opt_list(self.type_arguments, f);
        f(self.attributes);
    }
}

impl<'a> Visit<'a> for JsxClosingElement<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.tag_name);
    }
}

impl<'a> Visit<'a> for JsxFragment<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.children);
    }
}

impl<'a> Visit<'a> for JsxAttributesList<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.attributes, f);
    }
}

impl<'a> Visit<'a> for JsxNamespacedName<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.namespace);
        f(&self.name);
    }
}

impl<'a> Visit<'a> for JsxTagNamePropertyAccess<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.expression);
        f(&self.name);
    }
}

impl<'a> Visit<'a> for JsxAttribute<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(&self.name);
        visit_opt(self.initializer.as_ref(), f);
    }
}

impl<'a> Visit<'a> for JsxSpreadAttribute<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        f(self.expression);
    }
}

impl<'a> Visit<'a> for JsxExpression<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_opt(self.expression, f);
    }
}

impl<'a> Visit<'a> for JsxChildrenList<'a> {
    fn data(&self) -> &NodeData {
        &self.data
    }

    fn for_each_child(&self, f: &mut dyn FnMut(&dyn Visit<'a>)) {
        visit_list(self.children, f);
    }
}
