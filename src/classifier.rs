use super::db;
use super::error::{Error, Result};
use super::rules::builtin_rules;
use super::types::{Browser, Rule};
use aho_corasick::AhoCorasick;
use rayon::prelude::*;
use std::path::Path;

/// Compiled, ordered rule table.
///
/// All tokens of all rules go into one Aho-Corasick automaton; a lookup scans
/// the User-Agent once and keeps the lowest-index rule among the hits, which
/// gives the same answer as testing the rules one by one in order.
pub struct Classifier {
    automaton: AhoCorasick,
    /// Maps automaton pattern id → rule index.
    pattern_to_rule: Vec<usize>,
    rules: Vec<Rule>,
}

impl Classifier {
    /// Compile the built-in table. Agrees with [`crate::classify`] on every input.
    pub fn builtin() -> Result<Self> {
        Self::from_rules(builtin_rules())
    }

    /// Compile an ordered rule list, highest priority first.
    pub fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Result<Self> {
        let rules: Vec<Rule> = rules.into_iter().collect();

        let mut patterns: Vec<&str> = Vec::new();
        let mut pattern_to_rule: Vec<usize> = Vec::new();
        for (idx, rule) in rules.iter().enumerate() {
            for token in &rule.tokens {
                // An empty needle would match every input.
                if token.is_empty() {
                    return Err(Error::EmptyToken {
                        browser: rule.browser,
                    });
                }
                patterns.push(token.as_ref());
                pattern_to_rule.push(idx);
            }
        }

        let automaton = AhoCorasick::new(&patterns)?;

        tracing::debug!(
            rules = rules.len(),
            tokens = patterns.len(),
            "compiled browser rule table"
        );

        Ok(Self {
            automaton,
            pattern_to_rule,
            rules,
        })
    }

    /// Load a rule table from YAML text (`label: [token, ...]`, in priority order).
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let map: db::RuleMap = serde_yaml::from_str(yaml)?;
        Self::from_rule_map(map)
    }

    /// Load a rule table from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let map: db::RuleMap = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded browser rule table");
        Self::from_rule_map(map)
    }

    fn from_rule_map(map: db::RuleMap) -> Result<Self> {
        let rules = map
            .into_iter()
            .map(|(label, tokens)| {
                // `unknown` is the fallback, never a rule.
                let browser = Browser::from_str(&label)
                    .filter(Browser::is_known)
                    .ok_or(Error::UnknownBrowser(label))?;
                Ok(Rule::new(browser, tokens))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rules(rules)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify one User-Agent string; `Browser::Unknown` when no rule matches.
    pub fn classify(&self, ua: &str) -> Browser {
        let mut best = usize::MAX;
        for m in self.automaton.find_overlapping_iter(ua) {
            let idx = self.pattern_to_rule[m.pattern().as_usize()];
            if idx < best {
                best = idx;
                if best == 0 {
                    break;
                }
            }
        }

        let browser = self
            .rules
            .get(best)
            .map(|r| r.browser)
            .unwrap_or(Browser::Unknown);
        tracing::trace!(%browser, ua, "classified user agent");
        browser
    }

    /// Classify many User-Agents in parallel; output order matches input order.
    pub fn classify_batch<S>(&self, uas: &[S]) -> Vec<Browser>
    where
        S: AsRef<str> + Sync,
    {
        uas.par_iter().map(|ua| self.classify(ua.as_ref())).collect()
    }
}
