//! arrowhead_diagnostics: Diagnostic messages and the append-only sink.
//!
//! A diagnostic is identified by its message *kind* (the `code` of a
//! [`DiagnosticMessage`]), a source span, and an optional substitution
//! argument such as the expected token text. The sink never removes an
//! entry except through [`DiagnosticCollection::truncate`], which the parser
//! uses to roll back a failed speculative parse.

use arrowhead_core::text::TextSpan;
use std::fmt;

/// Diagnostic category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
            DiagnosticCategory::Suggestion => write!(f, "suggestion"),
            DiagnosticCategory::Message => write!(f, "message"),
        }
    }
}

/// A diagnostic message template with a code and category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosticMessage {
    /// The diagnostic code; this is the enumerated kind callers match on.
    pub code: u32,
    pub category: DiagnosticCategory,
    /// The message template. May contain a `{0}` placeholder.
    pub message: &'static str,
}

/// A realized diagnostic with location and resolved message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: TextSpan,
    pub code: u32,
    pub category: DiagnosticCategory,
    /// The substitution argument, if the template takes one.
    pub argument: Option<String>,
    pub message_text: String,
}

impl Diagnostic {
    pub fn new(span: TextSpan, message: &DiagnosticMessage) -> Self {
        Self {
            span,
            code: message.code,
            category: message.category,
            argument: None,
            message_text: message.message.to_string(),
        }
    }

    pub fn with_argument(span: TextSpan, message: &DiagnosticMessage, argument: &str) -> Self {
        Self {
            span,
            code: message.code,
            category: message.category,
            argument: Some(argument.to_string()),
            message_text: format_message(message.message, &[argument]),
        }
    }

    /// Whether this diagnostic is of the given kind.
    #[inline]
    pub fn is(&self, message: &DiagnosticMessage) -> bool {
        self.code == message.code
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}): {} AH{}: {}",
            self.span.start, self.category, self.code, self.message_text
        )
    }
}

/// Format a message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// The diagnostics sink accumulated during one parse.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Drop every diagnostic recorded after the first `len`.
    pub fn truncate(&mut self, len: usize) {
        self.diagnostics.truncate(len);
    }

    /// The last recorded diagnostic, if any.
    pub fn last(&self) -> Option<&Diagnostic> {
        self.diagnostics.last()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($code:expr, Error, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Error, message: $msg }
        };
        ($code:expr, Warning, $msg:expr) => {
            DiagnosticMessage { code: $code, category: DiagnosticCategory::Warning, message: $msg }
        };
    }

    // ========================================================================
    // Scanner errors (1000-1099)
    // ========================================================================
    pub const UNTERMINATED_STRING_LITERAL: DiagnosticMessage = diag!(1002, Error, "Unterminated string literal.");
    pub const IDENTIFIER_EXPECTED: DiagnosticMessage = diag!(1003, Error, "Identifier expected.");
    pub const _0_EXPECTED: DiagnosticMessage = diag!(1005, Error, "'{0}' expected.");
    pub const TRAILING_COMMA_NOT_ALLOWED: DiagnosticMessage = diag!(1009, Error, "Trailing comma not allowed.");
    pub const ASTERISK_SLASH_EXPECTED: DiagnosticMessage = diag!(1010, Error, "'*/' expected.");
    pub const AN_ELEMENT_ACCESS_EXPRESSION_SHOULD_TAKE_AN_ARGUMENT: DiagnosticMessage =
        diag!(1011, Error, "An element access expression should take an argument.");
    pub const UNEXPECTED_TOKEN: DiagnosticMessage = diag!(1012, Error, "Unexpected token.");
    pub const A_REST_PARAMETER_OR_BINDING_PATTERN_MAY_NOT_HAVE_A_TRAILING_COMMA: DiagnosticMessage =
        diag!(1013, Error, "A rest parameter or binding pattern may not have a trailing comma.");
    pub const A_REST_PARAMETER_MUST_BE_LAST_IN_A_PARAMETER_LIST: DiagnosticMessage =
        diag!(1014, Error, "A rest parameter must be last in a parameter list.");
    pub const UNEXPECTED_TOKEN_CLASS_MEMBER_EXPECTED: DiagnosticMessage =
        diag!(1068, Error, "Unexpected token. A constructor, method, accessor, or property was expected.");

    // ========================================================================
    // Parser errors (1100-1499)
    // ========================================================================
    pub const WITH_STATEMENTS_ARE_NOT_ALLOWED_IN_STRICT_MODE: DiagnosticMessage =
        diag!(1101, Error, "'with' statements are not allowed in strict mode.");
    pub const A_RETURN_STATEMENT_CAN_ONLY_BE_USED_WITHIN_A_FUNCTION_BODY: DiagnosticMessage =
        diag!(1108, Error, "A 'return' statement can only be used within a function body.");
    pub const EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1109, Error, "Expression expected.");
    pub const TYPE_EXPECTED: DiagnosticMessage = diag!(1110, Error, "Type expected.");
    pub const INVALID_CHARACTER: DiagnosticMessage = diag!(1127, Error, "Invalid character.");
    pub const DECLARATION_OR_STATEMENT_EXPECTED: DiagnosticMessage =
        diag!(1128, Error, "Declaration or statement expected.");
    pub const CASE_OR_DEFAULT_EXPECTED: DiagnosticMessage = diag!(1130, Error, "'case' or 'default' expected.");
    pub const PROPERTY_OR_SIGNATURE_EXPECTED: DiagnosticMessage = diag!(1131, Error, "Property or signature expected.");
    pub const ENUM_MEMBER_EXPECTED: DiagnosticMessage = diag!(1132, Error, "Enum member expected.");
    pub const ARGUMENT_EXPRESSION_EXPECTED: DiagnosticMessage = diag!(1135, Error, "Argument expression expected.");
    pub const PARAMETER_DECLARATION_EXPECTED: DiagnosticMessage = diag!(1138, Error, "Parameter declaration expected.");
    pub const STRING_LITERAL_EXPECTED: DiagnosticMessage = diag!(1141, Error, "String literal expected.");
    pub const LINE_BREAK_NOT_PERMITTED_HERE: DiagnosticMessage = diag!(1142, Error, "Line break not permitted here.");
    pub const UNTERMINATED_TEMPLATE_LITERAL: DiagnosticMessage = diag!(1160, Error, "Unterminated template literal.");
    pub const UNTERMINATED_REGULAR_EXPRESSION_LITERAL: DiagnosticMessage =
        diag!(1161, Error, "Unterminated regular expression literal.");
    pub const LINE_TERMINATOR_NOT_PERMITTED_BEFORE_ARROW: DiagnosticMessage =
        diag!(1200, Error, "Line terminator not permitted before arrow.");
    pub const ABSTRACT_MODIFIER_CAN_ONLY_APPEAR_ON_A_CLASS_METHOD_OR_PROPERTY_DECLARATION: DiagnosticMessage =
        diag!(1242, Error, "'abstract' modifier can only appear on a class, method, or property declaration.");
    pub const IN_STRICT_MODE_CODE_FUNCTIONS_CAN_ONLY_BE_DECLARED_AT_TOP_LEVEL_OR_INSIDE_A_BLOCK: DiagnosticMessage =
        diag!(1250, Error, "In strict mode code, functions can only be declared at top level or inside a block.");
    pub const WITHOUT_WEB_COMPATIBILITY_FUNCTIONS_CAN_NOT_BE_DECLARED_AS_THE_BODY_OF_A_STATEMENT: DiagnosticMessage =
        diag!(1251, Error, "Without web compatibility enabled, functions can not be declared at top level, inside a block, or as the body of an if statement.");
    pub const IN_NON_STRICT_MODE_CODE_FUNCTIONS_CAN_ONLY_BE_DECLARED_AT_TOP_LEVEL_INSIDE_A_BLOCK_OR_AS_THE_BODY_OF_AN_IF_STATEMENT: DiagnosticMessage =
        diag!(1252, Error, "In non-strict mode code, functions can only be declared at top level, inside a block, or as the body of an if statement.");
    pub const IDENTIFIER_EXPECTED_0_IS_A_RESERVED_WORD: DiagnosticMessage =
        diag!(1359, Error, "Identifier expected. '{0}' is a reserved word that cannot be used here.");
    pub const UNEXPECTED_KEYWORD_OR_IDENTIFIER: DiagnosticMessage = diag!(1434, Error, "Unexpected keyword or identifier.");

    // ========================================================================
    // Goal and context errors (1470-1499)
    // ========================================================================
    pub const THE_IMPORT_KEYWORD_CAN_ONLY_BE_USED_WITH_THE_MODULE_GOAL: DiagnosticMessage =
        diag!(1471, Error, "The 'import' keyword can only be used with the module goal.");
    pub const THE_EXPORT_KEYWORD_CAN_ONLY_BE_USED_WITH_THE_MODULE_GOAL: DiagnosticMessage =
        diag!(1472, Error, "The 'export' keyword can only be used with the module goal.");
    pub const CLASS_DECLARATION_CANNOT_APPEAR_IN_SINGLE_STATEMENT_CONTEXT: DiagnosticMessage =
        diag!(1473, Error, "Class declaration cannot appear in single-statement context.");
    pub const MAXIMUM_NESTING_DEPTH_EXCEEDED: DiagnosticMessage =
        diag!(1474, Error, "Maximum nesting depth exceeded.");

    // ========================================================================
    // JSX errors (17000-17099)
    // ========================================================================
    pub const JSX_ELEMENT_0_HAS_NO_CORRESPONDING_CLOSING_TAG: DiagnosticMessage =
        diag!(17008, Error, "JSX element '{0}' has no corresponding closing tag.");
    pub const EXPECTED_CORRESPONDING_JSX_CLOSING_TAG_FOR_0: DiagnosticMessage =
        diag!(17002, Error, "Expected corresponding JSX closing tag for '{0}'.");

    // ========================================================================
    // Class errors (18000-18099)
    // ========================================================================
    pub const PRIVATE_IDENTIFIERS_ARE_NOT_ALLOWED_OUTSIDE_CLASS_BODIES: DiagnosticMessage =
        diag!(18016, Error, "Private identifiers are not allowed outside class bodies.");

    // ========================================================================
    // Suggestions
    // ========================================================================
    pub const UNNECESSARY_USE_STRICT: DiagnosticMessage =
        diag!(90001, Warning, "'use strict' is unnecessary inside of modules.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message_substitutes_argument() {
        let d = Diagnostic::with_argument(TextSpan::new(3, 1), &messages::_0_EXPECTED, ",");
        assert_eq!(d.message_text, "',' expected.");
        assert_eq!(d.argument.as_deref(), Some(","));
        assert!(d.is(&messages::_0_EXPECTED));
        assert!(d.is_error());
    }

    #[test]
    fn test_truncate_rolls_back_to_mark() {
        let mut sink = DiagnosticCollection::new();
        sink.add(Diagnostic::new(TextSpan::empty(0), &messages::EXPRESSION_EXPECTED));
        let mark = sink.len();
        sink.add(Diagnostic::new(TextSpan::empty(4), &messages::TYPE_EXPECTED));
        sink.add(Diagnostic::new(TextSpan::empty(8), &messages::UNEXPECTED_TOKEN));
        sink.truncate(mark);
        assert_eq!(sink.len(), 1);
        assert!(sink.diagnostics()[0].is(&messages::EXPRESSION_EXPECTED));
    }

    #[test]
    fn test_display_includes_code_and_position() {
        let d = Diagnostic::new(TextSpan::new(12, 2), &messages::DECLARATION_OR_STATEMENT_EXPECTED);
        assert_eq!(d.to_string(), "(12): error AH1128: Declaration or statement expected.");
    }

    #[test]
    fn test_has_errors_ignores_warnings() {
        let mut sink = DiagnosticCollection::new();
        sink.add(Diagnostic::new(TextSpan::empty(0), &messages::UNNECESSARY_USE_STRICT));
        assert!(!sink.has_errors());
        sink.add(Diagnostic::new(TextSpan::empty(0), &messages::UNEXPECTED_TOKEN));
        assert!(sink.has_errors());
    }
}
