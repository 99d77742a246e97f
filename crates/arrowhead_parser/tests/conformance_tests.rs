//! Conformance suite for the arrowhead parser.
//!
//! Runs a catalogue of ECMAScript, TypeScript and JSX snippets through the
//! parser and reports a pass rate per category. Valid snippets pass when they
//! produce no diagnostics; invalid snippets pass when they produce at least
//! one error. No snippet may panic.

use arrowhead_options::ParseOptions;
use arrowhead_parser::parse;
use bumpalo::Bump;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expectation {
    Valid,
    Invalid,
}

/// Test result for a single conformance case.
#[derive(Debug, Clone)]
struct TestResult {
    name: String,
    category: String,
    expectation: Expectation,
    passed: bool,
    panic_message: Option<String>,
    first_diagnostic: Option<String>,
}

/// Run a single conformance case.
fn run_test(name: &str, category: &str, source: &str, options: ParseOptions, expectation: Expectation) -> TestResult {
    let outcome = std::panic::catch_unwind(|| {
        let arena = Bump::new();
        let result = parse(&arena, source, &options);
        (
            result.has_errors(),
            result.diagnostics.diagnostics().first().map(|d| d.to_string()),
        )
    });

    match outcome {
        Ok((has_errors, first_diagnostic)) => TestResult {
            name: name.to_string(),
            category: category.to_string(),
            expectation,
            passed: has_errors == (expectation == Expectation::Invalid),
            panic_message: None,
            first_diagnostic,
        },
        Err(e) => {
            let msg = if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "Unknown panic".to_string()
            };
            TestResult {
                name: name.to_string(),
                category: category.to_string(),
                expectation,
                passed: false,
                panic_message: Some(msg),
                first_diagnostic: None,
            }
        }
    }
}

/// Conformance suite runner.
struct ConformanceTestSuite {
    tests: Vec<TestResult>,
}

impl ConformanceTestSuite {
    fn new() -> Self {
        Self { tests: Vec::new() }
    }

    fn valid(&mut self, name: &str, category: &str, source: &str) {
        self.valid_with(name, category, source, ParseOptions::script());
    }

    fn valid_with(&mut self, name: &str, category: &str, source: &str, options: ParseOptions) {
        self.tests
            .push(run_test(name, category, source, options, Expectation::Valid));
    }

    fn invalid(&mut self, name: &str, category: &str, source: &str) {
        self.invalid_with(name, category, source, ParseOptions::script());
    }

    fn invalid_with(&mut self, name: &str, category: &str, source: &str, options: ParseOptions) {
        self.tests
            .push(run_test(name, category, source, options, Expectation::Invalid));
    }

    fn print_summary(&self) {
        let total = self.tests.len();
        let passed = self.tests.iter().filter(|t| t.passed).count();
        let pass_rate = if total > 0 {
            (passed as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        println!("\n=== Parser Conformance Summary ===");
        println!("Total tests: {}", total);
        println!("Passed: {}", passed);
        println!("Failed: {}", total - passed);
        println!("Pass rate: {:.2}%", pass_rate);

        let mut categories: std::collections::BTreeMap<&str, (usize, usize)> =
            std::collections::BTreeMap::new();
        for test in &self.tests {
            let entry = categories.entry(test.category.as_str()).or_insert((0, 0));
            if test.passed {
                entry.0 += 1;
            }
            entry.1 += 1;
        }

        println!("\n--- Results by Category ---");
        for (category, (passed_count, total_count)) in categories {
            println!(
                "  {}: {}/{} ({:.2}%)",
                category,
                passed_count,
                total_count,
                (passed_count as f64 / total_count as f64) * 100.0
            );
        }

        let failures: Vec<_> = self.tests.iter().filter(|t| !t.passed).collect();
        if !failures.is_empty() {
            println!("\n--- Failed Tests ---");
            for failure in failures.iter().take(10) {
                let detail = failure
                    .panic_message
                    .as_deref()
                    .or(failure.first_diagnostic.as_deref())
                    .unwrap_or("no diagnostics");
                println!(
                    "  [{}] {} ({:?}): {}",
                    failure.category, failure.name, failure.expectation, detail
                );
            }
            if failures.len() > 10 {
                println!("  ... and {} more failures", failures.len() - 10);
            }
        }
    }
}

// ============================================================================
// Test Cases
// ============================================================================

#[test]
fn test_parser_conformance() {
    let mut suite = ConformanceTestSuite::new();

    // ========================================================================
    // Category: declarations
    // ========================================================================
    suite.valid("var_declaration", "declarations", "var x: number = 42;");
    suite.valid("let_destructuring", "declarations", "let { a, b: [c = 1, ...d] } = obj;");
    suite.valid("const_typed_array", "declarations", "const arr: number[] = [1, 2, 3];");
    suite.valid("function_defaults", "declarations", "function f(a, b = a, ...c) { return [a, b, c]; }");
    suite.valid("generator", "declarations", "function* g() { yield* other(); }");
    suite.valid(
        "class_members",
        "declarations",
        "class A extends B { static #count = 0; constructor() { super(); } static { A.#count++; } }",
    );
    suite.valid("class_accessors", "declarations", "class A { get x() { return 1; } set x(v) {} }");

    // ========================================================================
    // Category: expressions
    // ========================================================================
    suite.valid("nullish_and_logical", "expressions", "a ?? (b || c) && d;");
    suite.valid("logical_assignment", "expressions", "a ||= b; c &&= d; e ??= f;");
    suite.valid("exponent_unary_operand", "expressions", "(-a) ** 2;");
    suite.valid("tagged_template", "expressions", "tag`a${b}c`;");
    suite.valid("optional_call", "expressions", "a?.(b)?.[c];");
    suite.valid("new_target", "expressions", "function F() { return new.target; }");
    suite.valid("regex_after_paren", "expressions", "if (/a/.test(s)) {}");
    suite.valid("division_after_identifier", "expressions", "a = b / c / d;");
    suite.valid("in_inside_for_parens", "expressions", "for (var i = (a in b); i;) break;");
    suite.valid("comma_sequence", "expressions", "a, b, c;");

    // ========================================================================
    // Category: arrows
    // ========================================================================
    suite.valid("arrow_simple", "arrows", "x => x * 2;");
    suite.valid("arrow_parenthesized", "arrows", "(a, b) => a + b;");
    suite.valid("arrow_patterns", "arrows", "({ a }, [b]) => a + b;");
    suite.valid("arrow_rest", "arrows", "(...args) => args;");
    suite.valid("arrow_typed", "arrows", "(a: number, b?: string): void => {};");
    suite.valid("arrow_async", "arrows", "async (a) => await a;");
    suite.valid("arrow_async_simple", "arrows", "async a => a;");
    suite.valid("arrow_generic", "arrows", "<T,>(a: T): T => a;");
    suite.valid("arrow_in_arguments", "arrows", "list.map((x, i) => x + i);");
    suite.valid("arrow_in_conditional", "arrows", "a ? (b) : (c) => d;");
    suite.valid("async_call", "arrows", "async(a, b);");
    suite.invalid("rest_not_last", "arrows", "(...a, b) => a;");
    suite.invalid("paren_rest_without_arrow", "arrows", "(...a);");
    suite.invalid("paren_trailing_comma", "arrows", "(a,);");

    // ========================================================================
    // Category: types
    // ========================================================================
    suite.valid("interface", "types", "interface P { name: string; age?: number; greet(): void; }");
    suite.valid("generic_interface", "types", "interface Box<T extends object = {}> { value: T; }");
    suite.valid("union_intersection", "types", "type U = (A & B) | C | 'lit' | 42;");
    suite.valid("function_type", "types", "type F = (a: number, ...rest: string[]) => void;");
    suite.valid("constructor_type", "types", "type C = new () => object;");
    suite.valid("tuple_type", "types", "type T = [string, number?, ...boolean[]];");
    suite.valid("conditional_infer", "types", "type E<T> = T extends Array<infer U> ? U : never;");
    suite.valid("indexed_access_keyof", "types", "type K = keyof T; type V = T[K];");
    suite.valid("type_query", "types", "type Q = typeof value;");
    suite.valid("type_predicate", "types", "function isS(x: unknown): x is string { return true; }");
    suite.valid("satisfies", "types", "const c = { a: 1 } satisfies Record<string, number>;");
    suite.valid("non_null", "types", "a!.b!;");
    suite.valid("enum", "types", "enum Color { Red, Green = 'g', Blue = 4 }");
    suite.valid("declare_function", "types", "declare function f(a: string): number;");

    // ========================================================================
    // Category: statements
    // ========================================================================
    suite.valid("labeled_continue", "statements", "a: while (x) { continue a; }");
    suite.valid("switch", "statements", "switch (x) { case 1: case 2: y(); break; default: z(); }");
    suite.valid("try_optional_catch_binding", "statements", "try { a(); } catch { b(); }");
    suite.valid("for_await", "statements", "async function f() { for await (const x of y) {} }");
    suite.valid("do_while_asi", "statements", "do x(); while (y) z();");
    suite.invalid("try_without_handler", "statements", "try {}");
    suite.invalid("unterminated_block", "statements", "{ a();");
    suite.invalid("stray_close_paren", "statements", ");");

    // ========================================================================
    // Category: modules
    // ========================================================================
    let module = ParseOptions::module();
    suite.valid_with("import_default_named", "modules", "import a, { b, c as d } from 'm';", module);
    suite.valid_with("import_namespace", "modules", "import * as ns from 'm';", module);
    suite.valid_with("import_side_effect", "modules", "import 'm';", module);
    suite.valid_with("import_type", "modules", "import type { T } from 'm';", module);
    suite.valid_with("export_star_as", "modules", "export * as ns from 'm';", module);
    suite.valid_with("export_default_expression", "modules", "export default a + b;", module);
    suite.valid_with("export_default_class", "modules", "export default class {}", module);
    suite.valid_with("top_level_await", "modules", "await load();", module);
    suite.invalid("import_in_script", "modules", "import a from 'm';");

    // ========================================================================
    // Category: jsx
    // ========================================================================
    let jsx = ParseOptions::module().with_jsx(true);
    suite.valid_with("jsx_element", "jsx", "const a = <div className=\"x\">hi {name}</div>;", jsx);
    suite.valid_with("jsx_self_closing", "jsx", "const a = <Foo.Bar baz={1} {...rest} />;", jsx);
    suite.valid_with("jsx_namespaced", "jsx", "const a = <svg:rect xlink:href=\"#a\" />;", jsx);
    suite.valid_with("jsx_fragment", "jsx", "const a = <><b /><i /></>;", jsx);
    suite.valid_with("jsx_nested_arrow", "jsx", "const a = <ul>{xs.map(x => <li>{x}</li>)}</ul>;", jsx);
    suite.valid_with("tsx_generic_arrow", "jsx", "const f = <T,>(x: T) => x;", jsx);
    suite.invalid_with("jsx_mismatched", "jsx", "const a = <a></b>;", jsx);
    suite.invalid_with("jsx_unclosed", "jsx", "const a = <a>text", jsx);

    suite.print_summary();

    let panics: Vec<_> = suite
        .tests
        .iter()
        .filter(|t| t.panic_message.is_some())
        .map(|t| t.name.as_str())
        .collect();
    assert!(panics.is_empty(), "parser panicked on: {:?}", panics);

    let passed = suite.tests.iter().filter(|t| t.passed).count();
    assert!(
        passed > 0,
        "Expected at least some tests to pass, but all failed"
    );
}
