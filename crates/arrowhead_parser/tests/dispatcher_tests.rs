//! Statement dispatch tests.
//!
//! Covers the contextual keywords that may start either a declaration or an
//! expression statement, goal-dependent import/export handling, function
//! declarations in single-statement positions and directive prologues.

use arrowhead_ast::{ModifierFlags, NodeFlags, Statement, SyntaxKind};
use arrowhead_diagnostics::{messages, DiagnosticMessage};
use arrowhead_options::ParseOptions;
use arrowhead_parser::{parse, ParseResult};
use bumpalo::Bump;

fn parse_with<'a>(arena: &'a Bump, source: &'a str, options: ParseOptions) -> ParseResult<'a> {
    parse(arena, source, &options)
}

/// Helper: the kinds of the top-level statements of a clean script.
fn statement_kinds(source: &str) -> Vec<SyntaxKind> {
    let arena = Bump::new();
    let result = parse_with(&arena, source, ParseOptions::script());
    assert!(
        result.diagnostics.is_empty(),
        "source: {}\ndiagnostics: {:?}",
        source,
        result.diagnostics.diagnostics()
    );
    result.root.statements.iter().map(Statement::kind).collect()
}

fn reports(source: &str, options: ParseOptions, message: &DiagnosticMessage) -> bool {
    let arena = Bump::new();
    let result = parse_with(&arena, source, options);
    result.diagnostics.diagnostics().iter().any(|d| d.is(message))
}

// ============================================================================
// let
// ============================================================================

#[test]
fn test_let_declaration() {
    assert_eq!(statement_kinds("let x = 1;"), vec![SyntaxKind::LexicalDeclaration]);
    assert_eq!(statement_kinds("let [a, b] = c;"), vec![SyntaxKind::LexicalDeclaration]);
    assert_eq!(statement_kinds("let { a } = c;"), vec![SyntaxKind::LexicalDeclaration]);
}

#[test]
fn test_let_binding_on_next_line() {
    assert_eq!(statement_kinds("let\nx = 1;"), vec![SyntaxKind::LexicalDeclaration]);
}

#[test]
fn test_let_as_identifier() {
    assert_eq!(statement_kinds("let = 1;"), vec![SyntaxKind::ExpressionStatement]);
    assert_eq!(statement_kinds("let.x = 1;"), vec![SyntaxKind::ExpressionStatement]);
    assert_eq!(statement_kinds("let(1);"), vec![SyntaxKind::ExpressionStatement]);
}

#[test]
fn test_let_in_for_initializer() {
    let arena = Bump::new();
    let result = parse_with(&arena, "for (let i = 0; i < 1; i++);", ParseOptions::script());
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.root.statements[0].kind(), SyntaxKind::ForStatement);
}

// ============================================================================
// async
// ============================================================================

#[test]
fn test_async_function_declaration() {
    let arena = Bump::new();
    let result = parse_with(&arena, "async function f() { await g(); }", ParseOptions::script());
    assert!(result.diagnostics.is_empty());
    assert!(matches!(&result.root.statements[0], Statement::FunctionDeclaration(f) if f.is_async));
}

#[test]
fn test_async_followed_by_line_break() {
    assert_eq!(
        statement_kinds("async\nfunction f() {}"),
        vec![SyntaxKind::ExpressionStatement, SyntaxKind::FunctionDeclaration]
    );
}

// ============================================================================
// declare, abstract and TypeScript declarations
// ============================================================================

#[test]
fn test_declare_prefix() {
    let arena = Bump::new();
    let result = parse_with(&arena, "declare const x: number;", ParseOptions::script());
    assert!(result.diagnostics.is_empty());
    let statement = &result.root.statements[0];
    assert_eq!(statement.kind(), SyntaxKind::LexicalDeclaration);
    assert!(statement.flags().contains(NodeFlags::DECLARED | NodeFlags::AMBIENT));
}

#[test]
fn test_declare_as_identifier() {
    assert_eq!(statement_kinds("declare = 1;"), vec![SyntaxKind::ExpressionStatement]);
    assert_eq!(
        statement_kinds("declare\nclass C {}"),
        vec![SyntaxKind::ExpressionStatement, SyntaxKind::ClassDeclaration]
    );
}

#[test]
fn test_abstract_class() {
    let arena = Bump::new();
    let result = parse_with(&arena, "abstract class A { abstract m(): void; }", ParseOptions::script());
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    let statement = &result.root.statements[0];
    assert_eq!(statement.kind(), SyntaxKind::ClassDeclaration);
    assert!(statement.flags().contains(NodeFlags::ABSTRACT));
    assert!(statement.data().modifier_flags.contains(ModifierFlags::ABSTRACT));
}

#[test]
fn test_abstract_on_non_class() {
    assert!(reports(
        "abstract function f() {}",
        ParseOptions::script(),
        &messages::ABSTRACT_MODIFIER_CAN_ONLY_APPEAR_ON_A_CLASS_METHOD_OR_PROPERTY_DECLARATION,
    ));
}

#[test]
fn test_contextual_declaration_keywords() {
    assert_eq!(
        statement_kinds("interface I {}\ntype T = I;\nenum E { A }"),
        vec![
            SyntaxKind::InterfaceDeclaration,
            SyntaxKind::TypeAliasDeclaration,
            SyntaxKind::EnumDeclaration,
        ]
    );
}

#[test]
fn test_contextual_keywords_as_identifiers() {
    assert_eq!(
        statement_kinds("type = 1;\ninterface;\nabstract;"),
        vec![
            SyntaxKind::ExpressionStatement,
            SyntaxKind::ExpressionStatement,
            SyntaxKind::ExpressionStatement,
        ]
    );
}

// ============================================================================
// Goal symbol
// ============================================================================

#[test]
fn test_import_in_script_goal() {
    let arena = Bump::new();
    let result = parse_with(&arena, "import x from 'y';", ParseOptions::script());
    assert!(result.diagnostics.diagnostics()[0].is(&messages::THE_IMPORT_KEYWORD_CAN_ONLY_BE_USED_WITH_THE_MODULE_GOAL));
    assert_eq!(result.root.statements[0].kind(), SyntaxKind::ImportDeclaration);
}

#[test]
fn test_export_in_script_goal() {
    assert!(reports(
        "export const a = 1;",
        ParseOptions::script(),
        &messages::THE_EXPORT_KEYWORD_CAN_ONLY_BE_USED_WITH_THE_MODULE_GOAL,
    ));
    assert!(!reports(
        "export const a = 1;",
        ParseOptions::module(),
        &messages::THE_EXPORT_KEYWORD_CAN_ONLY_BE_USED_WITH_THE_MODULE_GOAL,
    ));
}

#[test]
fn test_nested_import_and_export_in_module() {
    let arena = Bump::new();
    let result = parse_with(&arena, "{ import x from 'y'; }", ParseOptions::module());
    let diagnostics = result.diagnostics.diagnostics();
    assert_eq!(diagnostics.len(), 1, "{:?}", diagnostics);
    assert!(diagnostics[0].is(&messages::THE_IMPORT_KEYWORD_CAN_ONLY_BE_USED_WITH_THE_MODULE_GOAL));
    assert_eq!(diagnostics[0].span.start, 2);
    assert!(result.root.statements[0].flags().contains(NodeFlags::HAS_ERRORS));

    assert!(reports(
        "function f() { export const a = 1; }",
        ParseOptions::module(),
        &messages::THE_EXPORT_KEYWORD_CAN_ONLY_BE_USED_WITH_THE_MODULE_GOAL,
    ));
    assert!(reports(
        "if (a) { import 'm'; }",
        ParseOptions::module(),
        &messages::THE_IMPORT_KEYWORD_CAN_ONLY_BE_USED_WITH_THE_MODULE_GOAL,
    ));
}

#[test]
fn test_top_level_module_items_stay_clean() {
    let arena = Bump::new();
    let result = parse_with(&arena, "import x from 'y';\nexport { x };\n{ x; }", ParseOptions::module());
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
}

#[test]
fn test_import_meta_and_call_in_module() {
    let arena = Bump::new();
    let result = parse_with(&arena, "import.meta.url;\nimport('x');", ParseOptions::module());
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());
    assert_eq!(result.root.statements.len(), 2);
    assert!(result
        .root
        .statements
        .iter()
        .all(|statement| statement.kind() == SyntaxKind::ExpressionStatement));
}

// ============================================================================
// Function declarations in statement positions
// ============================================================================

#[test]
fn test_function_in_if_sloppy_web_compat() {
    let arena = Bump::new();
    let result = parse_with(&arena, "if (a) function f() {}", ParseOptions::script());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_function_in_labeled_statement_sloppy() {
    let arena = Bump::new();
    let result = parse_with(&arena, "l: function f() {}", ParseOptions::script());
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_function_in_if_strict() {
    assert!(reports(
        "'use strict'; if (a) function f() {}",
        ParseOptions::script(),
        &messages::IN_STRICT_MODE_CODE_FUNCTIONS_CAN_ONLY_BE_DECLARED_AT_TOP_LEVEL_OR_INSIDE_A_BLOCK,
    ));
    assert!(reports(
        "if (a) function f() {}",
        ParseOptions::script().with_implied_strict(true),
        &messages::IN_STRICT_MODE_CODE_FUNCTIONS_CAN_ONLY_BE_DECLARED_AT_TOP_LEVEL_OR_INSIDE_A_BLOCK,
    ));
}

#[test]
fn test_function_in_if_without_web_compat() {
    assert!(reports(
        "if (a) function f() {}",
        ParseOptions::script().with_web_compat(false),
        &messages::WITHOUT_WEB_COMPATIBILITY_FUNCTIONS_CAN_NOT_BE_DECLARED_AS_THE_BODY_OF_A_STATEMENT,
    ));
}

#[test]
fn test_function_in_loop_body() {
    assert!(reports(
        "while (a) function f() {}",
        ParseOptions::script(),
        &messages::IN_NON_STRICT_MODE_CODE_FUNCTIONS_CAN_ONLY_BE_DECLARED_AT_TOP_LEVEL_INSIDE_A_BLOCK_OR_AS_THE_BODY_OF_AN_IF_STATEMENT,
    ));
}

#[test]
fn test_class_in_single_statement_position() {
    assert!(reports(
        "if (a) class C {}",
        ParseOptions::script(),
        &messages::CLASS_DECLARATION_CANNOT_APPEAR_IN_SINGLE_STATEMENT_CONTEXT,
    ));
}

// ============================================================================
// Directive prologues
// ============================================================================

#[test]
fn test_use_strict_directive() {
    assert!(reports(
        "'use strict'; with (a) {}",
        ParseOptions::script(),
        &messages::WITH_STATEMENTS_ARE_NOT_ALLOWED_IN_STRICT_MODE,
    ));
    assert!(!reports(
        "with (a) {}",
        ParseOptions::script(),
        &messages::WITH_STATEMENTS_ARE_NOT_ALLOWED_IN_STRICT_MODE,
    ));
}

#[test]
fn test_use_strict_after_prologue_is_ignored() {
    assert!(!reports(
        "a(); 'use strict'; with (a) {}",
        ParseOptions::script(),
        &messages::WITH_STATEMENTS_ARE_NOT_ALLOWED_IN_STRICT_MODE,
    ));
}

#[test]
fn test_use_strict_in_function_body() {
    assert!(reports(
        "function f() { 'use strict'; with (a) {} }",
        ParseOptions::script(),
        &messages::WITH_STATEMENTS_ARE_NOT_ALLOWED_IN_STRICT_MODE,
    ));
    assert!(!reports(
        "function f() { 'use strict'; } with (a) {}",
        ParseOptions::script(),
        &messages::WITH_STATEMENTS_ARE_NOT_ALLOWED_IN_STRICT_MODE,
    ));
}

#[test]
fn test_use_strict_in_module() {
    let arena = Bump::new();
    let result = parse_with(&arena, "'use strict';", ParseOptions::module());
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.diagnostics.diagnostics()[0].is(&messages::UNNECESSARY_USE_STRICT));
    assert!(!result.has_errors());
}

#[test]
fn test_module_code_is_strict() {
    assert!(reports(
        "with (a) {}",
        ParseOptions::module(),
        &messages::WITH_STATEMENTS_ARE_NOT_ALLOWED_IN_STRICT_MODE,
    ));
}

// ============================================================================
// Automatic semicolon insertion
// ============================================================================

#[test]
fn test_asi_before_closing_brace_and_eof() {
    assert_eq!(
        statement_kinds("{ a }\nb"),
        vec![SyntaxKind::Block, SyntaxKind::ExpressionStatement]
    );
}

#[test]
fn test_asi_restricted_return() {
    let arena = Bump::new();
    let result = parse_with(&arena, "function f() { return\n1; }", ParseOptions::script());
    assert!(result.diagnostics.is_empty());
    let Statement::FunctionDeclaration(function) = &result.root.statements[0] else {
        panic!("expected a function");
    };
    let body = function.body.expect("function body");
    assert_eq!(body.statements.len(), 2);
    assert!(matches!(&body.statements[0], Statement::ReturnStatement(r) if r.expression.is_none()));
}

#[test]
fn test_missing_semicolon_on_same_line() {
    assert!(reports("a b", ParseOptions::script(), &messages::UNEXPECTED_KEYWORD_OR_IDENTIFIER));
}

#[test]
fn test_throw_requires_expression_on_same_line() {
    assert!(reports("throw\nx;", ParseOptions::script(), &messages::LINE_BREAK_NOT_PERMITTED_HERE));
}
