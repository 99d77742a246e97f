//! Cover grammar integration tests.
//!
//! A parenthesized list is parsed once and resolved afterwards as arrow
//! parameters, call arguments or a parenthesized expression. These tests
//! drive the resolution through the public `parse` entry point.

use arrowhead_ast::{ArrowFunctionBody, CoverElement, Expression, Statement, SyntaxKind};
use arrowhead_diagnostics::{messages, Diagnostic};
use arrowhead_options::ParseOptions;
use arrowhead_parser::{parse, ParseResult};
use bumpalo::Bump;

fn parse_script<'a>(arena: &'a Bump, source: &'a str) -> ParseResult<'a> {
    parse(arena, source, &ParseOptions::script())
}

fn only_expression<'a>(result: &ParseResult<'a>) -> &'a Expression<'a> {
    match result.root.statements.first() {
        Some(Statement::ExpressionStatement(statement)) => statement.expression,
        Some(other) => panic!("expected an expression statement, got {:?}", other.kind()),
        None => panic!("no statements"),
    }
}

fn codes(result: &ParseResult<'_>) -> Vec<u32> {
    result.diagnostics.diagnostics().iter().map(|d| d.code).collect()
}

fn find<'r>(result: &'r ParseResult<'_>, code: u32) -> Option<&'r Diagnostic> {
    result.diagnostics.diagnostics().iter().find(|d| d.code == code)
}

// ============================================================================
// Arrow heads
// ============================================================================

#[test]
fn test_arrow_with_two_parameters() {
    let arena = Bump::new();
    let result = parse_script(&arena, "(a, b) => a + b;");
    assert!(result.diagnostics.is_empty());
    let Expression::ArrowFunction(arrow) = only_expression(&result) else {
        panic!("expected an arrow function");
    };
    assert!(!arrow.is_async);
    assert_eq!(arrow.parameters.elements.len(), 2);
    assert!(matches!(arrow.body, ArrowFunctionBody::Expression(Expression::Binary(_))));
    assert_eq!(arrow.data.range.pos, 0);
}

#[test]
fn test_arrow_with_patterns_and_defaults() {
    let arena = Bump::new();
    let result = parse_script(&arena, "({ a = 1 }, [b, , c], d = 2, ...rest) => { return a; };");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let Expression::ArrowFunction(arrow) = only_expression(&result) else {
        panic!("expected an arrow function");
    };
    assert_eq!(arrow.parameters.elements.len(), 4);
    assert!(matches!(arrow.body, ArrowFunctionBody::Block(_)));
    assert!(matches!(
        arrow.parameters.elements[3],
        CoverElement::Parameter(ref parameter) if parameter.rest
    ));
}

#[test]
fn test_arrow_with_typed_and_optional_parameters() {
    let arena = Bump::new();
    let result = parse_script(&arena, "(x?: number, y: string = ''): void => {};");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let Expression::ArrowFunction(arrow) = only_expression(&result) else {
        panic!("expected an arrow function");
    };
    assert!(arrow.parameters.return_type.is_some());
    let CoverElement::Parameter(first) = &arrow.parameters.elements[0] else {
        panic!("expected a parameter");
    };
    assert!(first.optional);
    assert!(first.type_annotation.is_some());
}

#[test]
fn test_empty_arrow_head() {
    let arena = Bump::new();
    let result = parse_script(&arena, "() => 0;");
    assert!(result.diagnostics.is_empty());
    let Expression::ArrowFunction(arrow) = only_expression(&result) else {
        panic!("expected an arrow function");
    };
    assert!(arrow.parameters.elements.is_empty());
}

#[test]
fn test_generic_arrow_head() {
    let arena = Bump::new();
    let result = parse_script(&arena, "<T>(x: T) => x;");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let Expression::ArrowFunction(arrow) = only_expression(&result) else {
        panic!("expected an arrow function");
    };
    assert!(arrow.parameters.type_parameters.is_some());
}

#[test]
fn test_curried_arrows() {
    let arena = Bump::new();
    let result = parse_script(&arena, "(a) => (b) => (c) => a + b + c;");
    assert!(result.diagnostics.is_empty());
    let Expression::ArrowFunction(outer) = only_expression(&result) else {
        panic!("expected an arrow function");
    };
    let ArrowFunctionBody::Expression(Expression::ArrowFunction(middle)) = outer.body else {
        panic!("expected a nested arrow");
    };
    assert!(matches!(middle.body, ArrowFunctionBody::Expression(Expression::ArrowFunction(_))));
}

#[test]
fn test_line_break_before_arrow_is_reported() {
    let arena = Bump::new();
    let result = parse_script(&arena, "(a, b)\n=> a;");
    assert!(find(&result, messages::LINE_TERMINATOR_NOT_PERMITTED_BEFORE_ARROW.code).is_some());
}

// ============================================================================
// async heads
// ============================================================================

#[test]
fn test_async_arrow() {
    let arena = Bump::new();
    let result = parse_script(&arena, "async (a, b) => a;");
    assert!(result.diagnostics.is_empty());
    let Expression::ArrowFunction(arrow) = only_expression(&result) else {
        panic!("expected an arrow function");
    };
    assert!(arrow.is_async);
    assert_eq!(arrow.parameters.elements.len(), 2);
}

#[test]
fn test_call_of_function_named_async() {
    let arena = Bump::new();
    let result = parse_script(&arena, "async (a, b);");
    assert!(result.diagnostics.is_empty());
    let Expression::Call(call) = only_expression(&result) else {
        panic!("expected a call");
    };
    assert!(matches!(call.expression, Expression::Identifier(callee) if callee.text == "async"));
    assert_eq!(call.arguments.elements.len(), 2);
}

#[test]
fn test_async_simple_arrow() {
    let arena = Bump::new();
    let result = parse_script(&arena, "async x => x;");
    assert!(result.diagnostics.is_empty());
    assert!(matches!(only_expression(&result), Expression::ArrowFunction(arrow) if arrow.is_async));
}

#[test]
fn test_async_as_plain_identifier() {
    let arena = Bump::new();
    let result = parse_script(&arena, "async = 1;");
    assert!(result.diagnostics.is_empty());
    assert!(matches!(only_expression(&result), Expression::Assignment(_)));
}

#[test]
fn test_async_call_with_compound_assignment() {
    let arena = Bump::new();
    let result = parse_script(&arena, "async(a ||= b, c -= 1);");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let Expression::Call(call) = only_expression(&result) else {
        panic!("expected a call");
    };
    let operators: Vec<SyntaxKind> = call
        .arguments
        .elements
        .iter()
        .map(|element| match element {
            CoverElement::Expression(Expression::Assignment(assignment)) => assignment.operator,
            other => panic!("expected an assignment argument, got {:?}", other),
        })
        .collect();
    assert_eq!(operators, vec![SyntaxKind::BarBarEqualsToken, SyntaxKind::MinusEqualsToken]);
}

#[test]
fn test_async_call_with_spread_conditional() {
    let arena = Bump::new();
    let result = parse_script(&arena, "async(...a ? b : c);");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let Expression::Call(call) = only_expression(&result) else {
        panic!("expected a call");
    };
    let [CoverElement::Expression(Expression::Spread(spread))] = call.arguments.elements else {
        panic!("expected a single spread argument");
    };
    assert_eq!((spread.data.range.pos, spread.data.range.end), (6, 18));
    let Expression::Conditional(conditional) = spread.expression else {
        panic!("expected a conditional behind the spread");
    };
    assert_eq!(conditional.data.range.pos, 9);
}

#[test]
fn test_optional_rest_parameter_still_parses() {
    let arena = Bump::new();
    let result = parse_script(&arena, "async(...a?) => a;");
    let Expression::ArrowFunction(arrow) = only_expression(&result) else {
        panic!("expected an arrow function");
    };
    assert!(matches!(
        arrow.parameters.elements[0],
        CoverElement::Parameter(ref parameter) if parameter.rest && parameter.optional
    ));
}

#[test]
fn test_async_call_with_parameter_syntax() {
    let arena = Bump::new();
    let result = parse_script(&arena, "async(a: string);");
    let diagnostics = result.diagnostics.diagnostics();
    assert_eq!(diagnostics.len(), 1, "{:?}", diagnostics);
    assert!(diagnostics[0].is(&messages::_0_EXPECTED));
    assert_eq!(diagnostics[0].argument.as_deref(), Some("=>"));
    assert_eq!(diagnostics[0].span.start, 16);
    let Expression::Call(call) = only_expression(&result) else {
        panic!("expected a call");
    };
    assert!(call.data.has_errors());
}

// ============================================================================
// Parenthesized expressions
// ============================================================================

#[test]
fn test_parenthesized_sequence() {
    let arena = Bump::new();
    let result = parse_script(&arena, "(a, b);");
    assert!(result.diagnostics.is_empty());
    let Expression::Parenthesized(parenthesized) = only_expression(&result) else {
        panic!("expected a parenthesized expression");
    };
    let Expression::Binary(sequence) = parenthesized.expression else {
        panic!("expected a comma expression");
    };
    assert_eq!(sequence.operator, SyntaxKind::CommaToken);
}

#[test]
fn test_parenthesized_compound_assignment() {
    let arena = Bump::new();
    let result = parse_script(&arena, "x = (a += 1);");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let Expression::Assignment(outer) = only_expression(&result) else {
        panic!("expected an assignment");
    };
    let Expression::Parenthesized(parenthesized) = outer.right else {
        panic!("expected a parenthesized right-hand side");
    };
    assert!(matches!(parenthesized.expression, Expression::Assignment(inner)
        if inner.operator == SyntaxKind::PlusEqualsToken));
}

#[test]
fn test_compound_assignment_in_sequence() {
    let arena = Bump::new();
    let result = parse_script(&arena, "(a ||= b, c ??= d);");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let Expression::Parenthesized(parenthesized) = only_expression(&result) else {
        panic!("expected a parenthesized expression");
    };
    let Expression::Binary(sequence) = parenthesized.expression else {
        panic!("expected a comma expression");
    };
    assert!(matches!(sequence.left, Expression::Assignment(left) if left.operator == SyntaxKind::BarBarEqualsToken));
    assert!(matches!(sequence.right, Expression::Assignment(right)
        if right.operator == SyntaxKind::QuestionQuestionEqualsToken));
}

#[test]
fn test_case_label_with_parenthesized_test() {
    let arena = Bump::new();
    let result = parse_script(&arena, "switch (x) { case (a): b; }");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let Some(Statement::SwitchStatement(switch)) = result.root.statements.first() else {
        panic!("expected a switch statement");
    };
    assert_eq!(switch.clauses.len(), 1);
    let clause = &switch.clauses[0];
    assert!(matches!(clause.expression, Some(Expression::Parenthesized(_))));
    assert_eq!(clause.statements.len(), 1);
}

#[test]
fn test_parenthesized_call_target() {
    let arena = Bump::new();
    let result = parse_script(&arena, "(f)(1)(2);");
    assert!(result.diagnostics.is_empty());
    let Expression::Call(outer) = only_expression(&result) else {
        panic!("expected a call");
    };
    assert!(matches!(outer.expression, Expression::Call(inner)
        if matches!(inner.expression, Expression::Parenthesized(_))));
}

#[test]
fn test_parenthesized_trailing_comma() {
    let arena = Bump::new();
    let result = parse_script(&arena, "(a, b,);");
    assert_eq!(codes(&result), vec![messages::TRAILING_COMMA_NOT_ALLOWED.code]);
    assert!(matches!(only_expression(&result), Expression::Parenthesized(_)));
}

#[test]
fn test_empty_parentheses_without_arrow() {
    let arena = Bump::new();
    let result = parse_script(&arena, "();");
    assert!(find(&result, messages::EXPRESSION_EXPECTED.code).is_some());
}

#[test]
fn test_rest_without_arrow() {
    let arena = Bump::new();
    let result = parse_script(&arena, "(...a);");
    let diagnostic = find(&result, messages::_0_EXPECTED.code).expect("missing '=>' expected");
    assert_eq!(diagnostic.argument.as_deref(), Some("=>"));
}

#[test]
fn test_type_annotation_without_arrow() {
    let arena = Bump::new();
    let result = parse_script(&arena, "(a: number);");
    let diagnostic = find(&result, messages::_0_EXPECTED.code).expect("missing '=>' expected");
    assert_eq!(diagnostic.argument.as_deref(), Some("=>"));
}

// ============================================================================
// Conditional ambiguity
// ============================================================================

#[test]
fn test_parenthesized_when_true_branch() {
    let arena = Bump::new();
    let result = parse_script(&arena, "a ? (b) : c => d;");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let Expression::Conditional(conditional) = only_expression(&result) else {
        panic!("expected a conditional");
    };
    assert!(matches!(conditional.when_true, Expression::Parenthesized(_)));
    assert!(matches!(conditional.when_false, Expression::ArrowFunction(_)));
}

#[test]
fn test_arrow_with_return_type_in_when_true_branch() {
    let arena = Bump::new();
    let result = parse_script(&arena, "a ? (b): c => d : e;");
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let Expression::Conditional(conditional) = only_expression(&result) else {
        panic!("expected a conditional");
    };
    let Expression::ArrowFunction(arrow) = conditional.when_true else {
        panic!("expected an arrow in the true branch");
    };
    assert!(arrow.parameters.return_type.is_some());
    assert!(matches!(conditional.when_false, Expression::Identifier(_)));
}

#[test]
fn test_conditional_inside_call_arguments() {
    let arena = Bump::new();
    let result = parse_script(&arena, "f(a ? b : c, d);");
    assert!(result.diagnostics.is_empty());
    let Expression::Call(call) = only_expression(&result) else {
        panic!("expected a call");
    };
    assert!(matches!(
        call.arguments.elements[0],
        CoverElement::Expression(Expression::Conditional(_))
    ));
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_same_input_same_tree() {
    let source = "x = async (a, { b = 1 }, ...c) => (d, e) => [a, b, c, d, e];";
    let first_arena = Bump::new();
    let second_arena = Bump::new();
    let first = parse_script(&first_arena, source);
    let second = parse_script(&second_arena, source);
    assert_eq!(format!("{:?}", first.root), format!("{:?}", second.root));
    assert_eq!(first.diagnostics.diagnostics(), second.diagnostics.diagnostics());
}
