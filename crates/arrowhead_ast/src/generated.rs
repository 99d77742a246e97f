//! Header accessors for the AST sum types.
//!
//! Every sum type exposes `data()` plus the `kind()`, `pos()`, `end()`,
//! `range()`, `flags()` and `transform_flags()` shorthands derived from it.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::{NodeFlags, TransformFlags};
use arrowhead_core::text::TextRange;

macro_rules! header_shorthands {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<'a> $ty<'a> {
                #[inline]
                pub fn kind(&self) -> SyntaxKind {
                    self.data().kind
                }

                #[inline]
                pub fn pos(&self) -> u32 {
                    self.data().range.pos
                }

                #[inline]
                pub fn end(&self) -> u32 {
                    self.data().range.end
                }

                #[inline]
                pub fn range(&self) -> TextRange {
                    self.data().range
                }

                #[inline]
                pub fn flags(&self) -> NodeFlags {
                    self.data().flags
                }

                #[inline]
                pub fn transform_flags(&self) -> TransformFlags {
                    self.data().transform_flags
                }
            }
        )*
    };
}

header_shorthands!(
    Statement,
    Expression,
    TypeNode,
    TypeElement,
    ClassElement,
    ObjectLiteralElement,
    CoverElement,
    PropertyName,
    EntityName,
    JsxTagName,
    JsxAttributeLike,
    JsxAttributeValue,
    JsxChild,
    ForInitializer,
    NamedBindings,
    ArrowFunctionBody,
);

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::VariableStatement(n) => &n.data,
            Statement::LexicalDeclaration(n) => &n.data,
            Statement::FunctionDeclaration(n) => &n.data,
            Statement::ClassDeclaration(n) => &n.data,
            Statement::InterfaceDeclaration(n) => &n.data,
            Statement::TypeAliasDeclaration(n) => &n.data,
            Statement::EnumDeclaration(n) => &n.data,
            Statement::ImportDeclaration(n) => &n.data,
            Statement::ExportDeclaration(n) => &n.data,
            Statement::ExportAssignment(n) => &n.data,
            Statement::Block(n) => &n.data,
            Statement::EmptyStatement(d) => d,
            Statement::ExpressionStatement(n) => &n.data,
            Statement::IfStatement(n) => &n.data,
            Statement::DoStatement(n) => &n.data,
            Statement::WhileStatement(n) => &n.data,
            Statement::ForStatement(n) => &n.data,
            Statement::ForInStatement(n) => &n.data,
            Statement::ForOfStatement(n) => &n.data,
            Statement::ContinueStatement(n) => &n.data,
            Statement::BreakStatement(n) => &n.data,
            Statement::ReturnStatement(n) => &n.data,
            Statement::WithStatement(n) => &n.data,
            Statement::SwitchStatement(n) => &n.data,
            Statement::LabeledStatement(n) => &n.data,
            Statement::ThrowStatement(n) => &n.data,
            Statement::TryStatement(n) => &n.data,
            Statement::DebuggerStatement(d) => d,
        }
    }
}

impl<'a> Expression<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Expression::Identifier(n) => &n.data,
            Expression::PrivateIdentifier(n) => &n.data,
            Expression::Literal(n) => &n.data,
            Expression::TemplateExpression(n) => &n.data,
            Expression::ArrayLiteral(n) => &n.data,
            Expression::ObjectLiteral(n) => &n.data,
            Expression::PropertyAccess(n) => &n.data,
            Expression::ElementAccess(n) => &n.data,
            Expression::Call(n) => &n.data,
            Expression::New(n) => &n.data,
            Expression::TaggedTemplate(n) => &n.data,
            Expression::Parenthesized(n) => &n.data,
            Expression::FunctionExpression(n) => &n.data,
            Expression::ArrowFunction(n) => &n.data,
            Expression::ArrowParameters(n) => &n.data,
            Expression::PrefixUnary(n) => &n.data,
            Expression::PostfixUnary(n) => &n.data,
            Expression::Binary(n) => &n.data,
            Expression::Assignment(n) => &n.data,
            Expression::Conditional(n) => &n.data,
            Expression::Yield(n) => &n.data,
            Expression::Await(n) => &n.data,
            Expression::Spread(n) => &n.data,
            Expression::ClassExpression(n) => &n.data,
            Expression::OmittedExpression(d) => d,
            Expression::As(n) => &n.data,
            Expression::Satisfies(n) => &n.data,
            Expression::NonNull(n) => &n.data,
            Expression::MetaProperty(n) => &n.data,
            Expression::JsxElement(n) => &n.data,
            Expression::JsxSelfClosingElement(n) => &n.data,
            Expression::JsxFragment(n) => &n.data,
            Expression::ThisKeyword(d) => d,
            Expression::SuperKeyword(d) => d,
            Expression::NullKeyword(d) => d,
            Expression::TrueKeyword(d) => d,
            Expression::FalseKeyword(d) => d,
        }
    }

    /// Identifiers, and array/object literals that may cover a binding
    /// pattern.
    pub fn is_identifier_or_pattern(&self) -> bool {
        matches!(
            self,
            Expression::Identifier(_) | Expression::ArrayLiteral(_) | Expression::ObjectLiteral(_)
        )
    }

    pub fn as_identifier(&self) -> Option<&Identifier<'a>> {
        match self {
            Expression::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

impl<'a> TypeNode<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeNode::Keyword(d) => d,
            TypeNode::TypeReference(n) => &n.data,
            TypeNode::FunctionType(n) => &n.data,
            TypeNode::ConstructorType(n) => &n.data,
            TypeNode::TypeQuery(n) => &n.data,
            TypeNode::TypeLiteral(n) => &n.data,
            TypeNode::ArrayType(n) => &n.data,
            TypeNode::TupleType(n) => &n.data,
            TypeNode::OptionalType(n) => &n.data,
            TypeNode::RestType(n) => &n.data,
            TypeNode::UnionType(n) => &n.data,
            TypeNode::IntersectionType(n) => &n.data,
            TypeNode::ConditionalType(n) => &n.data,
            TypeNode::InferType(n) => &n.data,
            TypeNode::ParenthesizedType(n) => &n.data,
            TypeNode::ThisType(d) => d,
            TypeNode::TypeOperator(n) => &n.data,
            TypeNode::IndexedAccessType(n) => &n.data,
            TypeNode::LiteralType(n) => &n.data,
            TypeNode::TypePredicate(n) => &n.data,
        }
    }
}

impl<'a> TypeElement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            TypeElement::PropertySignature(n) => &n.data,
            TypeElement::MethodSignature(n) => &n.data,
            TypeElement::CallSignature(n) => &n.data,
            TypeElement::ConstructSignature(n) => &n.data,
            TypeElement::IndexSignature(n) => &n.data,
        }
    }
}

impl<'a> ClassElement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            ClassElement::Property(n) => &n.data,
            ClassElement::Method(n) => &n.data,
            ClassElement::IndexSignature(n) => &n.data,
            ClassElement::SemicolonClassElement(d) => d,
            ClassElement::StaticBlock(n) => &n.data,
        }
    }
}

impl<'a> ObjectLiteralElement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            ObjectLiteralElement::PropertyAssignment(n) => &n.data,
            ObjectLiteralElement::ShorthandPropertyAssignment(n) => &n.data,
            ObjectLiteralElement::Spread(n) => &n.data,
            ObjectLiteralElement::Method(n) => &n.data,
        }
    }
}

impl<'a> CoverElement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            CoverElement::Expression(n) => n.data(),
            CoverElement::Parameter(n) => &n.data,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression<'a>> {
        match self {
            CoverElement::Expression(e) => Some(e),
            CoverElement::Parameter(_) => None,
        }
    }

    pub fn as_parameter(&self) -> Option<&FormalParameter<'a>> {
        match self {
            CoverElement::Parameter(p) => Some(p),
            CoverElement::Expression(_) => None,
        }
    }
}

impl<'a> PropertyName<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            PropertyName::Identifier(n) => &n.data,
            PropertyName::PrivateIdentifier(n) => &n.data,
            PropertyName::StringLiteral(n) => &n.data,
            PropertyName::NumericLiteral(n) => &n.data,
            PropertyName::Computed(n) => &n.data,
        }
    }

    /// The literal name, when the name is not computed.
    pub fn text(&self) -> Option<&'a str> {
        match self {
            PropertyName::Identifier(n) | PropertyName::PrivateIdentifier(n) => Some(n.text),
            PropertyName::StringLiteral(n) | PropertyName::NumericLiteral(n) => Some(n.text),
            PropertyName::Computed(_) => None,
        }
    }
}

impl<'a> EntityName<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            EntityName::Identifier(n) => &n.data,
            EntityName::QualifiedName(n) => &n.data,
        }
    }
}

impl<'a> JsxTagName<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            JsxTagName::Identifier(n) => &n.data,
            JsxTagName::Namespaced(n) => &n.data,
            JsxTagName::PropertyAccess(n) => &n.data,
        }
    }
}

impl<'a> JsxAttributeLike<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            JsxAttributeLike::Attribute(n) => &n.data,
            JsxAttributeLike::Spread(n) => &n.data,
        }
    }
}

impl<'a> JsxAttributeValue<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            JsxAttributeValue::StringLiteral(n) => &n.data,
            JsxAttributeValue::Expression(n) => &n.data,
            JsxAttributeValue::Element(n) => n.data(),
        }
    }
}

impl<'a> JsxChild<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            JsxChild::Text(n) => &n.data,
            JsxChild::Expression(n) => &n.data,
            JsxChild::Element(n) => n.data(),
        }
    }
}

impl<'a> ForInitializer<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            ForInitializer::VariableDeclarationList(n) => &n.data,
            ForInitializer::Expression(n) => n.data(),
        }
    }
}

impl<'a> NamedBindings<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            NamedBindings::Namespace(n) => &n.data,
            NamedBindings::Named(n) => &n.data,
        }
    }
}

impl<'a> ArrowFunctionBody<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            ArrowFunctionBody::Block(n) => &n.data,
            ArrowFunctionBody::Expression(n) => n.data(),
        }
    }
}
