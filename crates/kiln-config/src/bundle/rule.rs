use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bundle::step::ProcessingStep;

/// File family a rule is responsible for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleFamily {
    Css,
    Less,
    Sass,
    Images,
    Js,
    Jsx,
}

impl RuleFamily {
    /// Every family, in the order the resolver emits rules.
    pub const ALL: [RuleFamily; 6] = [
        RuleFamily::Css,
        RuleFamily::Less,
        RuleFamily::Sass,
        RuleFamily::Images,
        RuleFamily::Js,
        RuleFamily::Jsx,
    ];

    /// Regex over the file name selecting this family.
    pub fn test_pattern(self) -> &'static str {
        match self {
            RuleFamily::Css => r"\.css$",
            RuleFamily::Less => r"\.less$",
            RuleFamily::Sass => r"\.s[ac]ss$",
            RuleFamily::Images => r"\.(png|jpg|svg|gif)$",
            RuleFamily::Js => r"\.js$",
            RuleFamily::Jsx => r"\.jsx$",
        }
    }

    /// Style-sheet families share the extract + css-loader prefix.
    pub fn is_stylesheet(self) -> bool {
        matches!(self, RuleFamily::Css | RuleFamily::Less | RuleFamily::Sass)
    }

    pub fn is_script(self) -> bool {
        matches!(self, RuleFamily::Js | RuleFamily::Jsx)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RuleFamily::Css => "css",
            RuleFamily::Less => "less",
            RuleFamily::Sass => "sass",
            RuleFamily::Images => "images",
            RuleFamily::Js => "js",
            RuleFamily::Jsx => "jsx",
        }
    }
}

impl fmt::Display for RuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a file pattern to an ordered loader chain.
///
/// Order matters: for style sheets the host applies the chain right to left,
/// so the preprocessor (last) runs first and the extractor (first) runs last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingRule {
    pub family: RuleFamily,

    /// Regex matched against the module path
    pub test: String,

    /// Regex of paths to skip even when `test` matches
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    pub steps: Vec<ProcessingStep>,
}

impl ProcessingRule {
    pub fn new(family: RuleFamily, steps: Vec<ProcessingStep>) -> Self {
        Self {
            family,
            test: family.test_pattern().to_string(),
            exclude: None,
            steps,
        }
    }

    pub fn excluding(mut self, pattern: impl Into<String>) -> Self {
        self.exclude = Some(pattern.into());
        self
    }

    /// Loader specifiers in chain order.
    pub fn loader_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(ProcessingStep::loader_name).collect()
    }
}
