//! arrowhead_options: parse configuration.
//!
//! [`ParseOptions`] selects the goal symbol and the few switches that change
//! how source text is parsed. It can be built in code or loaded from a JSON
//! document whose keys are camelCase:
//!
//! ```json
//! { "goal": "module", "webCompat": false, "impliedStrict": true, "jsx": true }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Errors raised while loading parse options.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("failed to read options file `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown goal `{0}`, expected `script` or `module`")]
    UnknownGoal(String),
}

/// The top-level grammar goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    #[default]
    Script,
    Module,
}

impl FromStr for Goal {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "script" => Ok(Goal::Script),
            "module" => Ok(Goal::Module),
            _ => Err(OptionsError::UnknownGoal(s.to_string())),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Script => write!(f, "script"),
            Goal::Module => write!(f, "module"),
        }
    }
}

/// Options for one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    pub goal: Goal,
    /// Annex B web-compatibility semantics.
    pub web_compat: bool,
    /// Parse as if the source began with a `"use strict"` directive.
    pub implied_strict: bool,
    /// Recognise JSX elements in expression position.
    pub jsx: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            goal: Goal::Script,
            web_compat: true,
            implied_strict: false,
            jsx: false,
        }
    }
}

impl ParseOptions {
    pub fn script() -> Self {
        Self::default()
    }

    pub fn module() -> Self {
        Self {
            goal: Goal::Module,
            ..Self::default()
        }
    }

    pub fn with_jsx(mut self, jsx: bool) -> Self {
        self.jsx = jsx;
        self
    }

    pub fn with_web_compat(mut self, web_compat: bool) -> Self {
        self.web_compat = web_compat;
        self
    }

    pub fn with_implied_strict(mut self, implied_strict: bool) -> Self {
        self.implied_strict = implied_strict;
        self
    }

    #[inline]
    pub fn is_module(&self) -> bool {
        self.goal == Goal::Module
    }

    /// Parse options from a JSON document. Missing keys take their defaults.
    pub fn from_json(content: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load options from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert_eq!(options.goal, Goal::Script);
        assert!(options.web_compat);
        assert!(!options.implied_strict);
        assert!(!options.jsx);
    }

    #[test]
    fn test_from_json_camel_case() {
        let options =
            ParseOptions::from_json(r#"{"goal":"module","webCompat":false,"impliedStrict":true}"#)
                .unwrap();
        assert!(options.is_module());
        assert!(!options.web_compat);
        assert!(options.implied_strict);
        assert!(!options.jsx);
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        assert_eq!(ParseOptions::from_json("{}").unwrap(), ParseOptions::default());
    }

    #[test]
    fn test_from_json_rejects_bad_goal() {
        let err = ParseOptions::from_json(r#"{"goal":"commonjs"}"#).unwrap_err();
        assert!(matches!(err, OptionsError::Json(_)));
    }

    #[test]
    fn test_goal_from_str() {
        assert_eq!("module".parse::<Goal>().unwrap(), Goal::Module);
        assert_eq!("Script".parse::<Goal>().unwrap(), Goal::Script);
        let err = "amd".parse::<Goal>().unwrap_err();
        assert_eq!(err.to_string(), "unknown goal `amd`, expected `script` or `module`");
    }

    #[test]
    fn test_missing_file() {
        let err = ParseOptions::from_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, OptionsError::Io { .. }));
    }

    #[test]
    fn test_builders() {
        let options = ParseOptions::module().with_jsx(true).with_web_compat(false);
        assert_eq!(options.goal.to_string(), "module");
        assert!(options.jsx);
        assert!(!options.web_compat);
    }
}
