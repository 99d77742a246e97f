//! Property-based tests for the parser.
//!
//! Generated programs are checked for:
//! 1. Clean parses: well-formed input yields no diagnostics
//! 2. Span soundness: every child range lies inside its parent range
//! 3. Transform flags: a parent's flags include all of its children's flags
//! 4. Determinism: parsing the same text twice yields the same tree
//! 5. Cover reuse: arrow parameters keep the exact source ranges of the
//!    elements parsed before the arrow was seen
//!
//! Cover lists include compound assignments and spread conditionals, which
//! only an argument list can hold.
//!
//! Random token soup is also fed in to check that recovery never panics and
//! never produces an inverted or out-of-bounds range.

use arrowhead_ast::{Expression, Statement, Visit};
use arrowhead_diagnostics::messages;
use arrowhead_options::ParseOptions;
use arrowhead_parser::{parse, ParseResult};
use bumpalo::Bump;
use proptest::prelude::*;

// -- Code Generation Strategies --

fn identifier_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "foo", "bar", "item", "value", "$x", "_y"])
        .prop_map(str::to_string)
}

fn binary_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "+", "-", "*", "/", "%", "**", "&&", "||", "??", "<=", ">=", "===", "!==", "|", "&", "<<",
        "instanceof", "in",
    ])
}

fn assignment_operator_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "=", "+=", "-=", "*=", "/=", "%=", "**=", "<<=", ">>=", "&=", "|=", "^=", "&&=", "||=", "??=",
    ])
}

fn leaf_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        (0u32..1000).prop_map(|n| n.to_string()),
        Just("'s'".to_string()),
        Just("true".to_string()),
        Just("null".to_string()),
        Just("this".to_string()),
    ]
}

/// One parameter of an arrow head, rendered exactly as it appears in source.
fn parameter_strategy(expression: BoxedStrategy<String>) -> impl Strategy<Value = String> {
    prop_oneof![
        identifier_strategy(),
        (identifier_strategy(), expression).prop_map(|(name, value)| format!("{} = {}", name, value)),
        (identifier_strategy(), identifier_strategy()).prop_map(|(a, b)| format!("[{}, {}]", a, b)),
        identifier_strategy().prop_map(|name| format!("{{ {} }}", name)),
        identifier_strategy().prop_map(|name| format!("{}: number", name)),
    ]
}

fn parameter_list_strategy(expression: BoxedStrategy<String>) -> impl Strategy<Value = Vec<String>> {
    (
        prop::collection::vec(parameter_strategy(expression), 0..4),
        prop::option::of(identifier_strategy()),
    )
        .prop_map(|(mut parameters, rest)| {
            if let Some(rest) = rest {
                parameters.push(format!("...{}", rest));
            }
            parameters
        })
}

/// An arrow body. Object literal bodies are parenthesized so they are not
/// read as blocks.
fn arrow_body(body: String) -> String {
    if body.starts_with('{') {
        format!("({})", body)
    } else {
        body
    }
}

fn expression_strategy() -> impl Strategy<Value = String> {
    leaf_strategy().prop_recursive(4, 48, 4, |inner| {
        let boxed = inner.clone().boxed();
        prop_oneof![
            (inner.clone(), binary_operator_strategy(), inner.clone())
                .prop_map(|(left, op, right)| format!("({} {} {})", left, op, right)),
            (identifier_strategy(), prop::collection::vec(inner.clone(), 0..3))
                .prop_map(|(callee, args)| format!("{}({})", callee, args.join(", "))),
            (parameter_list_strategy(boxed.clone()), inner.clone(), any::<bool>()).prop_map(
                |(parameters, body, is_async)| {
                    format!(
                        "({}({}) => {})",
                        if is_async { "async " } else { "" },
                        parameters.join(", "),
                        arrow_body(body)
                    )
                }
            ),
            (identifier_strategy(), parameter_list_strategy(boxed), inner.clone()).prop_map(
                |(callee, parameters, body)| {
                    format!("{}(({}) => {})", callee, parameters.join(", "), arrow_body(body))
                }
            ),
            prop::collection::vec(inner.clone(), 1..4).prop_map(|items| format!("({})", items.join(", "))),
            prop_oneof![
                (inner.clone(), inner.clone(), inner.clone())
                    .prop_map(|(c, t, f)| format!("({} ? {} : {})", c, t, f)),
                (identifier_strategy(), assignment_operator_strategy(), inner.clone())
                    .prop_map(|(target, op, value)| format!("({} {} {})", target, op, value)),
                (
                    identifier_strategy(),
                    assignment_operator_strategy(),
                    inner.clone(),
                    identifier_strategy(),
                    inner.clone(),
                    inner.clone(),
                )
                    .prop_map(|(target, op, value, c, t, f)| {
                        format!("async({} {} {}, ...{} ? {} : {})", target, op, value, c, t, f)
                    }),
            ],
            prop::collection::vec(inner.clone(), 0..3).prop_map(|items| format!("[{}]", items.join(", "))),
            (identifier_strategy(), inner.clone()).prop_map(|(key, value)| format!("{{ {}: {} }}", key, value)),
            (inner.clone(), identifier_strategy()).prop_map(|(object, name)| format!("({}).{}", object, name)),
            (inner.clone(), inner).prop_map(|(head, middle)| format!("`a${{{}}}b${{{}}}c`", head, middle)),
        ]
    })
}

fn program_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (identifier_strategy(), expression_strategy())
            .prop_map(|(target, value)| format!("{} = {};", target, value)),
        1..5,
    )
    .prop_map(|statements| statements.join("\n"))
}

fn token_soup_strategy() -> impl Strategy<Value = String> {
    const TOKENS: &[&str] = &[
        "(", ")", "[", "]", "{", "}", ",", ";", ":", "?", "?.", ".", "...", "=>", "=", "+", "<", ">", "/",
        "a", "b", "1", "'s'", "`t`", "async", "await", "yield", "function", "class", "let", "const",
        "new", "if", "else", "return", "type", "interface", "enum", "export", "import", "declare",
        "abstract", "public", "as", "\n",
    ];
    prop::collection::vec(prop::sample::select(TOKENS.to_vec()), 0..48).prop_map(|tokens| tokens.join(" "))
}

// -- Tree Checks --

/// Collect every child range that escapes its parent, or is inverted.
fn span_violations<'a>(node: &dyn Visit<'a>, violations: &mut Vec<String>) {
    let range = node.data().range;
    if range.pos > range.end {
        violations.push(format!("{:?} has inverted range {:?}", node.data().kind, range));
    }
    node.for_each_child(&mut |child| {
        let child_range = child.data().range;
        if !range.contains_range(&child_range) {
            violations.push(format!(
                "{:?} {:?} escapes {:?} {:?}",
                child.data().kind,
                child_range,
                node.data().kind,
                range
            ));
        }
        span_violations(child, violations);
    });
}

/// Collect every child whose transform flags are not included in its
/// parent's.
fn transform_flag_violations<'a>(node: &dyn Visit<'a>, violations: &mut Vec<String>) {
    let flags = node.data().transform_flags;
    node.for_each_child(&mut |child| {
        if !flags.contains(child.data().transform_flags) {
            violations.push(format!(
                "{:?} {:?} not included in {:?} {:?}",
                child.data().kind,
                child.data().transform_flags,
                node.data().kind,
                flags
            ));
        }
        transform_flag_violations(child, violations);
    });
}

/// Assert that every range lies within the source text and is not inverted.
fn assert_ranges_in_bounds<'a>(node: &dyn Visit<'a>, len: u32) {
    let range = node.data().range;
    assert!(range.pos <= range.end, "{:?} inverted {:?}", node.data().kind, range);
    assert!(range.end <= len, "{:?} {:?} past end {}", node.data().kind, range, len);
    node.for_each_child(&mut |child| assert_ranges_in_bounds(child, len));
}

fn parse_script<'a>(arena: &'a Bump, source: &'a str) -> ParseResult<'a> {
    parse(arena, source, &ParseOptions::script())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_programs_parse_cleanly(source in program_strategy()) {
        let arena = Bump::new();
        let result = parse_script(&arena, &source);
        prop_assert!(
            result.diagnostics.is_empty(),
            "source: {}\ndiagnostics: {:?}",
            source,
            result.diagnostics.diagnostics()
        );
    }

    #[test]
    fn spans_nest_inside_parents(source in program_strategy()) {
        let arena = Bump::new();
        let result = parse_script(&arena, &source);
        prop_assert_eq!(result.root.data.range.end as usize, source.len());
        let mut violations = Vec::new();
        span_violations(result.root, &mut violations);
        prop_assert!(violations.is_empty(), "source: {}\n{:#?}", source, violations);
    }

    #[test]
    fn transform_flags_propagate_upwards(source in program_strategy()) {
        let arena = Bump::new();
        let result = parse_script(&arena, &source);
        let mut violations = Vec::new();
        transform_flag_violations(result.root, &mut violations);
        prop_assert!(violations.is_empty(), "source: {}\n{:#?}", source, violations);
    }

    #[test]
    fn parsing_is_deterministic(source in program_strategy()) {
        let first_arena = Bump::new();
        let second_arena = Bump::new();
        let first = parse_script(&first_arena, &source);
        let second = parse_script(&second_arena, &source);
        prop_assert_eq!(format!("{:?}", first.root), format!("{:?}", second.root));
        prop_assert_eq!(first.diagnostics.diagnostics(), second.diagnostics.diagnostics());
    }

    #[test]
    fn arrow_parameters_keep_their_source_ranges(
        parameters in parameter_list_strategy(leaf_strategy().boxed()),
    ) {
        let source = format!("({}) => 0;", parameters.join(", "));
        let arena = Bump::new();
        let result = parse_script(&arena, &source);
        prop_assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics.diagnostics());

        let Some(Statement::ExpressionStatement(statement)) = result.root.statements.first() else {
            return Err(TestCaseError::fail("expected an expression statement"));
        };
        let Expression::ArrowFunction(arrow) = statement.expression else {
            return Err(TestCaseError::fail("expected an arrow function"));
        };
        prop_assert_eq!(arrow.parameters.elements.len(), parameters.len());
        for (element, text) in arrow.parameters.elements.iter().zip(&parameters) {
            let range = element.range();
            prop_assert_eq!(&source[range.pos as usize..range.end as usize], text.as_str());
        }
    }

    #[test]
    fn token_soup_never_breaks_ranges(source in token_soup_strategy()) {
        let arena = Bump::new();
        let result = parse_script(&arena, &source);
        prop_assert_eq!(result.root.data.range.end as usize, source.len());
        assert_ranges_in_bounds(result.root, source.len() as u32);
    }
}

// -- Nesting Depth --

/// Run `f` on a thread spawned with the default stack size.
fn on_default_thread(f: impl FnOnce() + Send + 'static) {
    std::thread::spawn(f).join().expect("test thread panicked");
}

fn count_depth_errors(source: &str) -> usize {
    let arena = Bump::new();
    let result = parse_script(&arena, source);
    result
        .diagnostics
        .diagnostics()
        .iter()
        .filter(|d| d.is(&messages::MAXIMUM_NESTING_DEPTH_EXCEEDED))
        .count()
}

#[test]
fn test_deep_parentheses_report_depth_once() {
    on_default_thread(|| {
        let source = format!("x = {}a{};", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(count_depth_errors(&source), 1);
    });
}

#[test]
fn test_deep_arrays_and_blocks_report_depth_once() {
    on_default_thread(|| {
        let arrays = format!("x = {}{};", "[".repeat(5_000), "]".repeat(5_000));
        assert_eq!(count_depth_errors(&arrays), 1);
        let blocks = format!("{}{}", "{".repeat(5_000), "}".repeat(5_000));
        assert_eq!(count_depth_errors(&blocks), 1);
    });
}

#[test]
fn test_depth_limit_holds_at_every_nesting_shape() {
    on_default_thread(|| {
        for depth in [150, 200, 499, 501, 1_000] {
            let parens = format!("x = {}a{};", "(".repeat(depth), ")".repeat(depth));
            assert!(count_depth_errors(&parens) <= 1, "parens at depth {}", depth);
            let arrows = format!("x = {}a{};", "(a) => (".repeat(depth), ")".repeat(depth));
            assert!(count_depth_errors(&arrows) <= 1, "arrows at depth {}", depth);
            let unary = format!("x = {}a;", "!".repeat(depth * 4));
            assert!(count_depth_errors(&unary) <= 1, "unary at depth {}", depth);
        }
    });
}

#[test]
fn test_deep_nesting_on_the_test_thread() {
    let source = format!("x = {}a{};", "(".repeat(2_000), ")".repeat(2_000));
    assert_eq!(count_depth_errors(&source), 1);
}

#[test]
fn test_moderate_nesting_is_accepted() {
    on_default_thread(|| {
        let source = format!("x = {}a{};", "(".repeat(50), ")".repeat(50));
        let arena = Bump::new();
        let result = parse_script(&arena, &source);
        assert!(result.diagnostics.is_empty());
    });
}
