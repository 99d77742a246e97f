use std::path::PathBuf;

use arrowhead_options::OptionsError;

/// Failures of the command-line driver itself. Syntax errors in the input
/// are reported as diagnostics, not through this type.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CliError {
    #[error("failed to read `{path}`")]
    #[diagnostic(code(arrowhead::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(code(arrowhead::config), help("options files use camelCase keys: goal, webCompat, impliedStrict, jsx"))]
    Options(#[from] OptionsError),

    #[error("failed to serialize the JSON report")]
    #[diagnostic(code(arrowhead::json))]
    Json(#[source] serde_json::Error),
}
