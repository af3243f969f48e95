use std::path::Path;

use regex::Regex;

use crate::bundle::rule::ProcessingRule;
use crate::error::{ConfigError, Result};

/// Compiled form of a rule list, answering "which rule handles this file".
///
/// # Example
///
/// ```
/// use kiln_config::{resolve, Mode, RuleFamily, RuleMatcher};
///
/// let config = resolve(Mode::Development);
/// let matcher = RuleMatcher::new(&config.rules).unwrap();
///
/// let rule = matcher.find("src/styles/app.scss").unwrap();
/// assert_eq!(rule.family, RuleFamily::Sass);
/// assert!(matcher.find("node_modules/react/index.js").is_none());
/// ```
#[derive(Debug)]
pub struct RuleMatcher<'a> {
    compiled: Vec<CompiledRule<'a>>,
}

#[derive(Debug)]
struct CompiledRule<'a> {
    rule: &'a ProcessingRule,
    test: Regex,
    exclude: Option<Regex>,
}

impl<'a> RuleMatcher<'a> {
    pub fn new(rules: &'a [ProcessingRule]) -> Result<Self> {
        let compiled = rules
            .iter()
            .map(|rule| {
                Ok(CompiledRule {
                    rule,
                    test: compile(&rule.test)?,
                    exclude: rule.exclude.as_deref().map(compile).transpose()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { compiled })
    }

    /// First rule matching `path`, like the host's own rule lookup.
    pub fn find(&self, path: impl AsRef<Path>) -> Option<&'a ProcessingRule> {
        let normalized = path.as_ref().to_string_lossy().replace('\\', "/");

        let found = self
            .compiled
            .iter()
            .find(|c| {
                c.test.is_match(&normalized)
                    && !c.exclude.as_ref().is_some_and(|ex| ex.is_match(&normalized))
            })
            .map(|c| c.rule);

        tracing::trace!(path = %normalized, family = ?found.map(|r| r.family), "rule lookup");
        found
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}
