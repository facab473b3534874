// Turns a raw script failure into the short block shown in the console.
//
// The rules are a pattern match against one runtime's traceback layout
// (Pyodide-style `File "<exec>", line N` headers), not a parser. Marker
// strings and line offsets live in `NormalizeConfig` so they can be tuned
// without touching the control flow below.
//
// QuickJS traces (`at f (<exec>:1:14)`) never carry the `line N` anchor, so
// with the default config they always take the generic tail branch; the
// `Line <N>` block only appears for Pyodide-format tracebacks.

use crate::engine::RawFailure;
use crate::error::RuntimeError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

pub const UNKNOWN_ERROR: &str = "Unknown Error";

/// Internal frames and links that never help the user.
pub const DEFAULT_NOISE_MARKERS: &[&str] = &[
    "_pyodide",
    "eval(self.code",
    "eval_code_async",
    "CodeRunner",
    "self.ast = next",
    "new_error",
    "https://",
];

#[allow(clippy::expect_used)] // Literal pattern
static LINE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"line (\d+)").expect("valid line-number pattern"));

#[allow(clippy::expect_used)] // Literal pattern
static EXEC_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"File "<exec>",?"#).expect("valid exec-file pattern"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    /// A line containing any of these substrings is dropped.
    pub noise_markers: Vec<String>,
    /// Substring that marks the header line of a syntax-error block.
    pub anchor: String,
    /// Lines shown after the anchor, and lines kept for generic errors.
    pub context_lines: usize,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            noise_markers: DEFAULT_NOISE_MARKERS
                .iter()
                .map(|m| (*m).to_string())
                .collect(),
            anchor: "line".to_string(),
            context_lines: 3,
        }
    }
}

impl NormalizeConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or has unknown fields
    pub fn from_json(json: &str) -> Result<Self, RuntimeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self, RuntimeError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            RuntimeError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedFailure {
    /// `Line <N>` followed by the lines after the anchor (source line,
    /// pointer line, error type).
    Syntax {
        line_number: String,
        context: Vec<String>,
    },
    /// Tail of the trace with the exec-file boilerplate stripped.
    Generic(String),
    /// The failure carried no text at all.
    Unknown,
}

impl NormalizedFailure {
    pub fn render(&self) -> String {
        match self {
            NormalizedFailure::Syntax {
                line_number,
                context,
            } => {
                let mut block = format!("Line {line_number}");
                for line in context {
                    block.push('\n');
                    block.push_str(line);
                }
                block
            }
            NormalizedFailure::Generic(text) => text.clone(),
            NormalizedFailure::Unknown => UNKNOWN_ERROR.to_string(),
        }
    }
}

impl fmt::Display for NormalizedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    pub fn normalize(&self, failure: &RawFailure) -> NormalizedFailure {
        match failure.diagnostic() {
            Some(text) => self.normalize_text(text),
            None => NormalizedFailure::Unknown,
        }
    }

    pub fn normalize_text(&self, text: &str) -> NormalizedFailure {
        let lines: Vec<&str> = text
            .trim()
            .split('\n')
            .filter(|line| !self.is_noise(line))
            .collect();

        let context = self.config.context_lines;
        let anchor = lines
            .iter()
            .position(|line| line.contains(self.config.anchor.as_str()));

        // A blank line where the error type should be means this is not a
        // syntax-error block.
        let syntax_anchor = anchor.filter(|&a| {
            a.checked_add(context)
                .and_then(|last| lines.get(last))
                .is_some_and(|l| !l.is_empty())
        });
        if let Some(anchor) = syntax_anchor {
            let line_number = LINE_NUMBER
                .captures(lines[anchor])
                .and_then(|caps| caps.get(1))
                .map_or("?", |m| m.as_str())
                .to_string();
            let following = lines[anchor + 1..=anchor + context]
                .iter()
                .map(|l| (*l).to_string())
                .collect();
            return NormalizedFailure::Syntax {
                line_number,
                context: following,
            };
        }

        let tail = &lines[lines.len().saturating_sub(context)..];
        let joined = tail.join("\n");
        let stripped = EXEC_FILE.replace(&joined, "");
        let cleaned = LINE_NUMBER.replace(stripped.trim(), "Line ${1}");
        NormalizedFailure::Generic(cleaned.into_owned())
    }

    fn is_noise(&self, line: &str) -> bool {
        self.config
            .noise_markers
            .iter()
            .any(|marker| line.contains(marker.as_str()))
    }
}
