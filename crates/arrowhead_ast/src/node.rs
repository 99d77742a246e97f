//! AST node definitions.
//!
//! Every node embeds a [`NodeData`] header and references its children via
//! arena-allocated references. Identifier and literal text borrows directly
//! from the source, so the tree lives exactly as long as the arena and the
//! source text.

use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use arrowhead_core::text::TextRange;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeData {
    /// The kind of this node.
    pub kind: SyntaxKind,
    /// Source position range.
    pub range: TextRange,
    /// Node flags.
    pub flags: NodeFlags,
    /// Syntax features present in this subtree.
    pub transform_flags: TransformFlags,
    /// Modifier flags (for declarations and parameter properties).
    pub modifier_flags: ModifierFlags,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
            flags: NodeFlags::NONE,
            transform_flags: TransformFlags::NONE,
            modifier_flags: ModifierFlags::NONE,
        }
    }

    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_modifiers(mut self, modifier_flags: ModifierFlags) -> Self {
        self.modifier_flags |= modifier_flags;
        self
    }

    pub fn with_transform_flags(mut self, transform_flags: TransformFlags) -> Self {
        self.transform_flags |= transform_flags;
        self
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.flags.contains(NodeFlags::HAS_ERRORS)
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

// ============================================================================
// Source Body
// ============================================================================

/// The root of a parse: `ScriptBody` or `ModuleBody`, depending on the goal.
#[derive(Debug)]
pub struct SourceBody<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

impl SourceBody<'_> {
    pub fn is_module(&self) -> bool {
        self.data.kind == SyntaxKind::ModuleBody
    }
}

// ============================================================================
// Token
// ============================================================================

/// A simple token with kind and range.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub data: NodeData,
}

impl Token {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            data: NodeData::new(kind, pos, end),
        }
    }
}

// ============================================================================
// Identifier and Literals
// ============================================================================

/// An identifier or private identifier (`#name`).
#[derive(Debug, Clone, Copy)]
pub struct Identifier<'a> {
    pub data: NodeData,
    pub text: &'a str,
    /// Original keyword kind if this identifier was spelled as a keyword.
    pub original_keyword_kind: Option<SyntaxKind>,
}

impl Identifier<'_> {
    /// A zero-width identifier produced in place of a missing one.
    pub fn is_missing(&self) -> bool {
        self.text.is_empty()
    }
}

/// A string, numeric, bigint, regular expression or template literal.
///
/// `text` is the raw source text of the token; the kind is in `data.kind`.
#[derive(Debug, Clone, Copy)]
pub struct Literal<'a> {
    pub data: NodeData,
    pub text: &'a str,
    pub token_flags: TokenFlags,
}

// ============================================================================
// Names
// ============================================================================

#[derive(Debug)]
pub enum EntityName<'a> {
    Identifier(Identifier<'a>),
    QualifiedName(&'a QualifiedName<'a>),
}

#[derive(Debug)]
pub struct QualifiedName<'a> {
    pub data: NodeData,
    pub left: EntityName<'a>,
    pub right: Identifier<'a>,
}

#[derive(Debug)]
pub struct ComputedPropertyName<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub enum PropertyName<'a> {
    Identifier(Identifier<'a>),
    PrivateIdentifier(Identifier<'a>),
    StringLiteral(Literal<'a>),
    NumericLiteral(Literal<'a>),
    Computed(&'a ComputedPropertyName<'a>),
}

// ============================================================================
// Parameters and the cover grammar
// ============================================================================

#[derive(Debug)]
pub struct TypeParameter<'a> {
    pub data: NodeData,
    pub name: Identifier<'a>,
    pub constraint: OptionalNode<'a, TypeNode<'a>>,
    pub default: OptionalNode<'a, TypeNode<'a>>,
}

/// A formal parameter.
///
/// The binding is an identifier, array literal or object literal expression;
/// patterns share their shape with the literals they cover.
#[derive(Debug)]
pub struct FormalParameter<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub rest: bool,
    pub binding: &'a Expression<'a>,
    pub optional: bool,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct FormalParameterList<'a> {
    pub data: NodeData,
    pub parameters: NodeList<'a, FormalParameter<'a>>,
    pub trailing_comma: bool,
}

/// One element of a parenthesized list whose interpretation (call arguments
/// or arrow parameters) is decided only after the closing parenthesis.
#[derive(Debug)]
pub enum CoverElement<'a> {
    Expression(Expression<'a>),
    Parameter(FormalParameter<'a>),
}

/// A parenthesized element list resolved as the head of an arrow function.
#[derive(Debug)]
pub struct ArrowParameters<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub elements: NodeList<'a, CoverElement<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub trailing_comma: bool,
}

/// A parenthesized element list resolved as call arguments.
#[derive(Debug)]
pub struct ArgumentList<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, CoverElement<'a>>,
    pub trailing_comma: bool,
}

#[derive(Debug)]
pub struct Decorator<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

// ============================================================================
// Type Nodes
// ============================================================================

#[derive(Debug)]
pub enum TypeNode<'a> {
    /// `any`, `string`, `void`, `null`, ... The keyword is `data.kind`.
    Keyword(NodeData),
    TypeReference(TypeReferenceNode<'a>),
    FunctionType(SignatureNode<'a>),
    ConstructorType(SignatureNode<'a>),
    TypeQuery(TypeQueryNode<'a>),
    TypeLiteral(TypeLiteralNode<'a>),
    ArrayType(ArrayTypeNode<'a>),
    TupleType(TupleTypeNode<'a>),
    OptionalType(WrappedTypeNode<'a>),
    RestType(WrappedTypeNode<'a>),
    UnionType(UnionOrIntersectionTypeNode<'a>),
    IntersectionType(UnionOrIntersectionTypeNode<'a>),
    ConditionalType(ConditionalTypeNode<'a>),
    InferType(InferTypeNode<'a>),
    ParenthesizedType(WrappedTypeNode<'a>),
    ThisType(NodeData),
    TypeOperator(TypeOperatorNode<'a>),
    IndexedAccessType(IndexedAccessTypeNode<'a>),
    LiteralType(LiteralTypeNode<'a>),
    TypePredicate(TypePredicateNode<'a>),
}

#[derive(Debug)]
pub struct TypeReferenceNode<'a> {
    pub data: NodeData,
    pub type_name: EntityName<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

/// Function types, constructor types, and call/construct signatures.
#[derive(Debug)]
pub struct SignatureNode<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub parameters: &'a FormalParameterList<'a>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct TypeQueryNode<'a> {
    pub data: NodeData,
    pub expr_name: EntityName<'a>,
}

#[derive(Debug)]
pub struct TypeLiteralNode<'a> {
    pub data: NodeData,
    pub members: NodeList<'a, TypeElement<'a>>,
}

#[derive(Debug)]
pub struct ArrayTypeNode<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TupleTypeNode<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, TypeNode<'a>>,
}

/// Optional, rest and parenthesized types: a single wrapped type.
#[derive(Debug)]
pub struct WrappedTypeNode<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct UnionOrIntersectionTypeNode<'a> {
    pub data: NodeData,
    pub types: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct ConditionalTypeNode<'a> {
    pub data: NodeData,
    pub check_type: &'a TypeNode<'a>,
    pub extends_type: &'a TypeNode<'a>,
    pub true_type: &'a TypeNode<'a>,
    pub false_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct InferTypeNode<'a> {
    pub data: NodeData,
    pub type_parameter: &'a TypeParameter<'a>,
}

#[derive(Debug)]
pub struct TypeOperatorNode<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind, // KeyOfKeyword, UniqueKeyword, ReadonlyKeyword
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct IndexedAccessTypeNode<'a> {
    pub data: NodeData,
    pub object_type: &'a TypeNode<'a>,
    pub index_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct LiteralTypeNode<'a> {
    pub data: NodeData,
    pub literal: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct TypePredicateNode<'a> {
    pub data: NodeData,
    pub asserts: bool,
    /// The parameter name, or `this`.
    pub parameter_name: Identifier<'a>,
    pub type_node: OptionalNode<'a, TypeNode<'a>>,
}

// ============================================================================
// Type Elements (Interface/Object type members)
// ============================================================================

#[derive(Debug)]
pub enum TypeElement<'a> {
    PropertySignature(PropertySignatureNode<'a>),
    MethodSignature(MethodSignatureNode<'a>),
    CallSignature(SignatureNode<'a>),
    ConstructSignature(SignatureNode<'a>),
    IndexSignature(IndexSignatureNode<'a>),
}

#[derive(Debug)]
pub struct PropertySignatureNode<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub optional: bool,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct MethodSignatureNode<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub optional: bool,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub parameters: &'a FormalParameterList<'a>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct IndexSignatureNode<'a> {
    pub data: NodeData,
    pub parameters: &'a FormalParameterList<'a>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Identifier(Identifier<'a>),
    PrivateIdentifier(Identifier<'a>),
    Literal(Literal<'a>),
    TemplateExpression(TemplateExpression<'a>),
    ArrayLiteral(ArrayLiteralExpression<'a>),
    ObjectLiteral(ObjectLiteralExpression<'a>),
    PropertyAccess(PropertyAccessExpression<'a>),
    ElementAccess(ElementAccessExpression<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    TaggedTemplate(TaggedTemplateExpression<'a>),
    Parenthesized(ParenthesizedExpression<'a>),
    FunctionExpression(Function<'a>),
    ArrowFunction(ArrowFunction<'a>),
    /// A parenthesized head that the cover grammar resolved as arrow
    /// parameters; only lives until the enclosing assignment expression
    /// attaches the body.
    ArrowParameters(ArrowParameters<'a>),
    PrefixUnary(PrefixUnaryExpression<'a>),
    PostfixUnary(PostfixUnaryExpression<'a>),
    Binary(BinaryExpression<'a>),
    Assignment(AssignmentExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    Yield(YieldExpression<'a>),
    Await(AwaitExpression<'a>),
    Spread(SpreadElement<'a>),
    ClassExpression(Class<'a>),
    OmittedExpression(NodeData),
    As(TypeAssertionExpression<'a>),
    Satisfies(TypeAssertionExpression<'a>),
    NonNull(NonNullExpression<'a>),
    MetaProperty(MetaPropertyExpression<'a>),
    JsxElement(JsxElement<'a>),
    JsxSelfClosingElement(JsxSelfClosingElement<'a>),
    JsxFragment(JsxFragment<'a>),
    // Keyword expressions
    ThisKeyword(NodeData),
    SuperKeyword(NodeData),
    NullKeyword(NodeData),
    TrueKeyword(NodeData),
    FalseKeyword(NodeData),
}

#[derive(Debug)]
pub struct TemplateExpression<'a> {
    pub data: NodeData,
    pub head: Literal<'a>,
    pub template_spans: NodeList<'a, TemplateSpan<'a>>,
}

#[derive(Debug)]
pub struct TemplateSpan<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    /// TemplateMiddle or TemplateTail.
    pub literal: Literal<'a>,
}

#[derive(Debug)]
pub struct ArrayLiteralExpression<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Expression<'a>>,
    pub trailing_comma: bool,
}

#[derive(Debug)]
pub struct ObjectLiteralExpression<'a> {
    pub data: NodeData,
    pub properties: NodeList<'a, ObjectLiteralElement<'a>>,
}

#[derive(Debug)]
pub enum ObjectLiteralElement<'a> {
    PropertyAssignment(PropertyAssignment<'a>),
    ShorthandPropertyAssignment(ShorthandPropertyAssignment<'a>),
    Spread(SpreadElement<'a>),
    Method(MethodDefinition<'a>),
}

#[derive(Debug)]
pub struct PropertyAssignment<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub initializer: &'a Expression<'a>,
}

/// `{ a }`, or `{ a = 1 }` when the literal covers a binding pattern.
#[derive(Debug)]
pub struct ShorthandPropertyAssignment<'a> {
    pub data: NodeData,
    pub name: Identifier<'a>,
    pub object_assignment_initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct PropertyAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot: bool,
    /// Identifier or private identifier.
    pub name: Identifier<'a>,
}

#[derive(Debug)]
pub struct ElementAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot: bool,
    pub argument_expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct CallExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot: bool,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub arguments: &'a ArgumentList<'a>,
}

#[derive(Debug)]
pub struct NewExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub arguments: OptionalNode<'a, ArgumentList<'a>>,
}

#[derive(Debug)]
pub struct TaggedTemplateExpression<'a> {
    pub data: NodeData,
    pub tag: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub template: &'a Expression<'a>, // NoSubstitutionTemplateLiteral or TemplateExpression
}

#[derive(Debug)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// Function declarations and function expressions.
#[derive(Debug)]
pub struct Function<'a> {
    pub data: NodeData,
    pub name: Option<Identifier<'a>>,
    pub is_async: bool,
    pub is_generator: bool,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub parameters: &'a FormalParameterList<'a>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    /// Absent for overload signatures and ambient declarations.
    pub body: OptionalNode<'a, Block<'a>>,
}

#[derive(Debug)]
pub struct ArrowFunction<'a> {
    pub data: NodeData,
    pub is_async: bool,
    pub parameters: &'a ArrowParameters<'a>,
    pub body: ArrowFunctionBody<'a>,
}

#[derive(Debug)]
pub enum ArrowFunctionBody<'a> {
    Block(&'a Block<'a>),
    Expression(&'a Expression<'a>),
}

/// Prefix operators, including `delete`, `typeof` and `void`.
#[derive(Debug)]
pub struct PrefixUnaryExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PostfixUnaryExpression<'a> {
    pub data: NodeData,
    pub operand: &'a Expression<'a>,
    pub operator: SyntaxKind,
}

/// A binary operation, including the comma operator.
#[derive(Debug)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator: SyntaxKind,
    pub right: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct AssignmentExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator: SyntaxKind,
    pub right: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ConditionalExpression<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub when_true: &'a Expression<'a>,
    pub when_false: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct YieldExpression<'a> {
    pub data: NodeData,
    pub delegate: bool,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct AwaitExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct SpreadElement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// `expr as T` and `expr satisfies T`.
#[derive(Debug)]
pub struct TypeAssertionExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct NonNullExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct MetaPropertyExpression<'a> {
    pub data: NodeData,
    pub keyword_token: SyntaxKind, // NewKeyword or ImportKeyword
    pub name: Identifier<'a>,
}

// ============================================================================
// Classes
// ============================================================================

/// Class declarations and class expressions.
#[derive(Debug)]
pub struct Class<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub name: Option<Identifier<'a>>,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub extends_clause: OptionalNode<'a, Expression<'a>>,
    pub implements_clause: NodeList<'a, TypeNode<'a>>,
    pub members: NodeList<'a, ClassElement<'a>>,
}

#[derive(Debug)]
pub enum ClassElement<'a> {
    Property(PropertyDefinition<'a>),
    /// Methods, accessors and constructors; see `data.kind`.
    Method(MethodDefinition<'a>),
    IndexSignature(IndexSignatureNode<'a>),
    SemicolonClassElement(NodeData),
    StaticBlock(ClassStaticBlock<'a>),
}

#[derive(Debug)]
pub struct PropertyDefinition<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub name: PropertyName<'a>,
    pub optional: bool,
    pub definite: bool,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

/// A method, accessor or constructor (`data.kind` is `MethodDefinition`,
/// `GetAccessor`, `SetAccessor` or `Constructor`).
#[derive(Debug)]
pub struct MethodDefinition<'a> {
    pub data: NodeData,
    pub decorators: NodeList<'a, Decorator<'a>>,
    pub name: PropertyName<'a>,
    pub optional: bool,
    pub is_async: bool,
    pub is_generator: bool,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub parameters: &'a FormalParameterList<'a>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: OptionalNode<'a, Block<'a>>,
}

#[derive(Debug)]
pub struct ClassStaticBlock<'a> {
    pub data: NodeData,
    pub body: &'a Block<'a>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    VariableStatement(VariableStatement<'a>),
    /// `let` and `const` declarations.
    LexicalDeclaration(VariableStatement<'a>),
    FunctionDeclaration(Function<'a>),
    ClassDeclaration(Class<'a>),
    InterfaceDeclaration(InterfaceDeclaration<'a>),
    TypeAliasDeclaration(TypeAliasDeclaration<'a>),
    EnumDeclaration(EnumDeclaration<'a>),
    ImportDeclaration(ImportDeclaration<'a>),
    ExportDeclaration(ExportDeclaration<'a>),
    ExportAssignment(ExportAssignment<'a>),
    Block(Block<'a>),
    EmptyStatement(NodeData),
    ExpressionStatement(ExpressionStatement<'a>),
    IfStatement(IfStatement<'a>),
    DoStatement(DoStatement<'a>),
    WhileStatement(WhileStatement<'a>),
    ForStatement(ForStatement<'a>),
    ForInStatement(ForInOrOfStatement<'a>),
    ForOfStatement(ForInOrOfStatement<'a>),
    ContinueStatement(BreakOrContinueStatement<'a>),
    BreakStatement(BreakOrContinueStatement<'a>),
    ReturnStatement(ReturnStatement<'a>),
    WithStatement(WithStatement<'a>),
    SwitchStatement(SwitchStatement<'a>),
    LabeledStatement(LabeledStatement<'a>),
    ThrowStatement(ThrowStatement<'a>),
    TryStatement(TryStatement<'a>),
    DebuggerStatement(NodeData),
}

#[derive(Debug)]
pub struct Block<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct VariableStatement<'a> {
    pub data: NodeData,
    pub declaration_list: &'a VariableDeclarationList<'a>,
}

/// Declarations sharing one `var`, `let` or `const` keyword; the keyword is
/// recorded as `NodeFlags::LET` or `NodeFlags::CONST`.
#[derive(Debug)]
pub struct VariableDeclarationList<'a> {
    pub data: NodeData,
    pub declarations: NodeList<'a, VariableDeclaration<'a>>,
}

#[derive(Debug)]
pub struct VariableDeclaration<'a> {
    pub data: NodeData,
    /// Identifier, or an array/object literal standing for a pattern.
    pub name: &'a Expression<'a>,
    pub definite: bool,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct IfStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub then_statement: &'a Statement<'a>,
    pub else_statement: OptionalNode<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct DoStatement<'a> {
    pub data: NodeData,
    pub statement: &'a Statement<'a>,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct WhileStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ForStatement<'a> {
    pub data: NodeData,
    pub initializer: Option<ForInitializer<'a>>,
    pub condition: OptionalNode<'a, Expression<'a>>,
    pub incrementor: OptionalNode<'a, Expression<'a>>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub enum ForInitializer<'a> {
    VariableDeclarationList(&'a VariableDeclarationList<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug)]
pub struct ForInOrOfStatement<'a> {
    pub data: NodeData,
    /// `for await (... of ...)`.
    pub is_await: bool,
    pub initializer: ForInitializer<'a>,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct BreakOrContinueStatement<'a> {
    pub data: NodeData,
    pub label: Option<Identifier<'a>>,
}

#[derive(Debug)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct WithStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct SwitchStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub clauses: NodeList<'a, CaseOrDefaultClause<'a>>,
}

/// A `case` clause (with an expression) or the `default` clause.
#[derive(Debug)]
pub struct CaseOrDefaultClause<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct LabeledStatement<'a> {
    pub data: NodeData,
    pub label: Identifier<'a>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ThrowStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct TryStatement<'a> {
    pub data: NodeData,
    pub try_block: &'a Block<'a>,
    pub catch_clause: OptionalNode<'a, CatchClause<'a>>,
    pub finally_block: OptionalNode<'a, Block<'a>>,
}

#[derive(Debug)]
pub struct CatchClause<'a> {
    pub data: NodeData,
    pub variable_declaration: OptionalNode<'a, VariableDeclaration<'a>>,
    pub block: &'a Block<'a>,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug)]
pub struct InterfaceDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier<'a>,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub extends_clause: NodeList<'a, TypeNode<'a>>,
    pub members: NodeList<'a, TypeElement<'a>>,
}

#[derive(Debug)]
pub struct TypeAliasDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier<'a>,
    pub type_parameters: Option<NodeList<'a, TypeParameter<'a>>>,
    pub type_node: &'a TypeNode<'a>,
}

/// `enum` and `const enum` (the latter flagged `NodeFlags::CONST`).
#[derive(Debug)]
pub struct EnumDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier<'a>,
    pub members: NodeList<'a, EnumMember<'a>>,
}

#[derive(Debug)]
pub struct EnumMember<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

// ============================================================================
// Import/Export
// ============================================================================

#[derive(Debug)]
pub struct ImportDeclaration<'a> {
    pub data: NodeData,
    pub import_clause: OptionalNode<'a, ImportClause<'a>>,
    pub module_specifier: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ImportClause<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub name: Option<Identifier<'a>>,
    pub named_bindings: Option<NamedBindings<'a>>,
}

/// `* as ns` or `{ a, b as c }`, shared by imports and exports.
#[derive(Debug)]
pub enum NamedBindings<'a> {
    Namespace(NamespaceBinding<'a>),
    Named(NamedSpecifiers<'a>),
}

#[derive(Debug)]
pub struct NamespaceBinding<'a> {
    pub data: NodeData,
    /// Absent only for a bare `export *`.
    pub name: Option<Identifier<'a>>,
}

#[derive(Debug)]
pub struct NamedSpecifiers<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Specifier<'a>>,
}

/// An import or export specifier: `name` or `property_name as name`.
#[derive(Debug)]
pub struct Specifier<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub property_name: Option<Identifier<'a>>,
    pub name: Identifier<'a>,
}

/// `export { ... } [from "m"]`, `export * [as ns] from "m"`, or an exported
/// declaration (`export function f() {}`).
#[derive(Debug)]
pub struct ExportDeclaration<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub export_clause: Option<NamedBindings<'a>>,
    pub module_specifier: OptionalNode<'a, Expression<'a>>,
    pub declaration: OptionalNode<'a, Statement<'a>>,
}

/// `export default <expression>` and `export = <expression>`.
#[derive(Debug)]
pub struct ExportAssignment<'a> {
    pub data: NodeData,
    pub is_export_equals: bool,
    pub expression: &'a Expression<'a>,
}

// ============================================================================
// JSX
// ============================================================================

#[derive(Debug)]
pub struct JsxElement<'a> {
    pub data: NodeData,
    pub opening_element: &'a JsxOpeningElement<'a>,
    pub children: &'a JsxChildrenList<'a>,
    pub closing_element: &'a JsxClosingElement<'a>,
}

/// `<Tag attr />`; also the shape of an opening element.
#[derive(Debug)]
pub struct JsxOpeningElement<'a> {
    pub data: NodeData,
    pub tag_name: JsxTagName<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub attributes: &'a JsxAttributesList<'a>,
}

pub type JsxSelfClosingElement<'a> = JsxOpeningElement<'a>;

#[derive(Debug)]
pub struct JsxClosingElement<'a> {
    pub data: NodeData,
    pub tag_name: JsxTagName<'a>,
}

#[derive(Debug)]
pub struct JsxFragment<'a> {
    pub data: NodeData,
    pub children: &'a JsxChildrenList<'a>,
}

#[derive(Debug)]
pub enum JsxTagName<'a> {
    /// An identifier, possibly containing dashes, or `this`.
    Identifier(Identifier<'a>),
    Namespaced(&'a JsxNamespacedName<'a>),
    PropertyAccess(&'a JsxTagNamePropertyAccess<'a>),
}

impl JsxTagName<'_> {
    /// Whether two tag names are spelled the same way.
    pub fn same_as(&self, other: &JsxTagName<'_>) -> bool {
        match (self, other) {
            (JsxTagName::Identifier(a), JsxTagName::Identifier(b)) => a.text == b.text,
            (JsxTagName::Namespaced(a), JsxTagName::Namespaced(b)) => {
                a.namespace.text == b.namespace.text && a.name.text == b.name.text
            }
            (JsxTagName::PropertyAccess(a), JsxTagName::PropertyAccess(b)) => {
                a.name.text == b.name.text && a.expression.same_as(&b.expression)
            }
            _ => false,
        }
    }
}

#[derive(Debug)]
pub struct JsxNamespacedName<'a> {
    pub data: NodeData,
    pub namespace: Identifier<'a>,
    pub name: Identifier<'a>,
}

#[derive(Debug)]
pub struct JsxTagNamePropertyAccess<'a> {
    pub data: NodeData,
    pub expression: JsxTagName<'a>,
    pub name: Identifier<'a>,
}

#[derive(Debug)]
pub struct JsxAttributesList<'a> {
    pub data: NodeData,
    pub attributes: NodeList<'a, JsxAttributeLike<'a>>,
}

#[derive(Debug)]
pub enum JsxAttributeLike<'a> {
    Attribute(JsxAttribute<'a>),
    Spread(JsxSpreadAttribute<'a>),
}

#[derive(Debug)]
pub struct JsxAttribute<'a> {
    pub data: NodeData,
    /// Identifier or namespaced name.
    pub name: JsxTagName<'a>,
    pub initializer: Option<JsxAttributeValue<'a>>,
}

#[derive(Debug)]
pub enum JsxAttributeValue<'a> {
    StringLiteral(Literal<'a>),
    Expression(&'a JsxExpression<'a>),
    Element(&'a Expression<'a>),
}

#[derive(Debug)]
pub struct JsxSpreadAttribute<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// `{expr}` inside JSX; `{}` has no expression.
#[derive(Debug)]
pub struct JsxExpression<'a> {
    pub data: NodeData,
    pub dot_dot_dot: bool,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct JsxChildrenList<'a> {
    pub data: NodeData,
    pub children: NodeList<'a, JsxChild<'a>>,
}

#[derive(Debug)]
pub enum JsxChild<'a> {
    Text(JsxText<'a>),
    Expression(JsxExpression<'a>),
    /// A nested element, self-closing element or fragment.
    Element(Expression<'a>),
}

#[derive(Debug, Clone, Copy)]
pub struct JsxText<'a> {
    pub data: NodeData,
    pub text: &'a str,
    pub contains_only_trivia_whitespace: bool,
}
