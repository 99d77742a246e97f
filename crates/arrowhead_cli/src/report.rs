//! Rendering of parse results: miette reports for terminals and a serde
//! model for `--format json`.

use std::fmt;
use std::time::Duration;

use arrowhead_ast::{SourceBody, Visit};
use arrowhead_core::LineMap;
use arrowhead_diagnostics::{Diagnostic, DiagnosticCategory};
use arrowhead_options::Goal;
use miette::{LabeledSpan, NamedSource, Severity, SourceCode, SourceSpan};
use serde::Serialize;

// ============================================================================
// Terminal output
// ============================================================================

/// A parser diagnostic bound to its file so miette can render the source
/// snippet around it.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SourceDiagnostic {
    code: u32,
    category: DiagnosticCategory,
    message: String,
    span: SourceSpan,
    source_code: NamedSource<String>,
}

impl SourceDiagnostic {
    pub fn new(file: &str, source: &str, diagnostic: &Diagnostic) -> Self {
        let start = (diagnostic.span.start as usize).min(source.len());
        let length = (diagnostic.span.length as usize).min(source.len() - start);
        Self {
            code: diagnostic.code,
            category: diagnostic.category,
            message: diagnostic.message_text.clone(),
            span: SourceSpan::from((start, length)),
            source_code: NamedSource::new(file, source.to_string()),
        }
    }
}

impl miette::Diagnostic for SourceDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("AH{}", self.code)))
    }

    fn severity(&self) -> Option<Severity> {
        Some(match self.category {
            DiagnosticCategory::Error => Severity::Error,
            DiagnosticCategory::Warning => Severity::Warning,
            DiagnosticCategory::Suggestion | DiagnosticCategory::Message => Severity::Advice,
        })
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(&self.source_code)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        Some(Box::new(std::iter::once(LabeledSpan::new_with_span(
            None,
            self.span,
        ))))
    }
}

// ============================================================================
// Statistics
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStats {
    pub statements: usize,
    pub nodes: usize,
    pub transform_flags: String,
    pub elapsed_micros: u64,
}

impl ParseStats {
    pub fn collect(root: &SourceBody<'_>, elapsed: Duration) -> Self {
        Self {
            statements: root.statements.len(),
            nodes: root.count_nodes(),
            transform_flags: format!("{:?}", root.data.transform_flags),
            elapsed_micros: elapsed.as_micros().try_into().unwrap_or(u64::MAX),
        }
    }
}

impl fmt::Display for ParseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} statements, {} nodes, {}, parsed in {}us",
            self.statements, self.nodes, self.transform_flags, self.elapsed_micros
        )
    }
}

// ============================================================================
// JSON output
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonDiagnostic {
    pub code: u32,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub argument: Option<String>,
    pub start: u32,
    pub length: u32,
    /// 1-based.
    pub line: u32,
    /// 1-based, in bytes.
    pub column: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub file: String,
    pub goal: Goal,
    pub diagnostics: Vec<JsonDiagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ParseStats>,
}

impl FileReport {
    pub fn new(file: String, goal: Goal, source: &str, diagnostics: &[Diagnostic], stats: Option<ParseStats>) -> Self {
        let line_map = LineMap::new(source);
        let diagnostics = diagnostics
            .iter()
            .map(|diagnostic| {
                let position = line_map.line_and_column_of(diagnostic.span.start);
                JsonDiagnostic {
                    code: diagnostic.code,
                    category: diagnostic.category.to_string(),
                    message: diagnostic.message_text.clone(),
                    argument: diagnostic.argument.clone(),
                    start: diagnostic.span.start,
                    length: diagnostic.span.length,
                    line: position.line + 1,
                    column: position.character + 1,
                }
            })
            .collect();
        Self {
            file,
            goal,
            diagnostics,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrowhead_core::TextSpan;
    use arrowhead_diagnostics::messages;

    #[test]
    fn test_json_positions_are_one_based() {
        let source = "let a;\nlet = ;";
        let diagnostic = Diagnostic::new(TextSpan::new(13, 1), &messages::EXPRESSION_EXPECTED);
        let report = FileReport::new("a.js".to_string(), Goal::Script, source, &[diagnostic], None);
        let json = &report.diagnostics[0];
        assert_eq!(json.line, 2);
        assert_eq!(json.column, 7);
        assert_eq!(json.category, "error");
    }

    #[test]
    fn test_json_report_shape() {
        let report = FileReport::new("a.js".to_string(), Goal::Module, "", &[], None);
        let value = serde_json::to_value(&report).expect("serialize");
        assert_eq!(value["goal"], "module");
        assert!(value["diagnostics"].as_array().is_some_and(|d| d.is_empty()));
        assert!(value.get("stats").is_none());
    }

    #[test]
    fn test_source_diagnostic_clamps_span() {
        let diagnostic = Diagnostic::new(TextSpan::new(10, 5), &messages::EXPRESSION_EXPECTED);
        let rendered = SourceDiagnostic::new("a.js", "abc", &diagnostic);
        assert_eq!(rendered.span, SourceSpan::from((3, 0)));
        assert_eq!(rendered.to_string(), "Expression expected.");
    }
}
