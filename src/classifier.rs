use super::db;
use super::error::{Error, Result};
use super::matcher::RuleMatcher;
use super::style::select_background;
use super::types::*;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

static SHARED: OnceLock<AgentClassifier> = OnceLock::new();

/// Classify an agent string with the built-in browser rules.
///
/// Total over all inputs: anything no rule claims, including the empty
/// string, is `AgentCategory::Other`.
pub fn classify(agent: &str) -> AgentCategory {
    AgentClassifier::shared().classify(agent)
}

/// Maps free-form agent strings to an [`AgentCategory`] using an ordered,
/// first-match-wins rule list.
pub struct AgentClassifier {
    matcher: RuleMatcher,
}

impl AgentClassifier {
    /// Build a classifier from the rules embedded in the crate
    /// (`rules/browsers.yml`).
    pub fn new() -> Self {
        Self::from_yaml_str(db::BUILTIN_RULES).expect("built-in rules are valid")
    }

    /// Process-wide classifier over the built-in rules, built on first use.
    pub fn shared() -> &'static AgentClassifier {
        SHARED.get_or_init(Self::new)
    }

    /// Load an ordered rule file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rules: db::RuleList = load_yaml(path)?;
        tracing::debug!(path = %path.display(), "loaded agent rules");
        Self::from_rules(rules)
    }

    /// Parse an ordered rule set from YAML text.
    ///
    /// Each top-level key names a category; its value lists the markers that
    /// claim it (`contains`, any of) and the markers that veto it
    /// (`excludes`, none of).
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let rules: db::RuleList = serde_yaml::from_str(yaml)?;
        Self::from_rules(rules)
    }

    /// Validate rules in file order. A category may own one rule only;
    /// aliases (`Other`/`Otro`, any letter case) count as the same category.
    fn from_rules(rules: db::RuleList) -> Result<Self> {
        let mut seen: HashSet<AgentCategory> = HashSet::new();
        let items = rules
            .0
            .into_iter()
            .map(|(name, entry)| {
                let category = AgentCategory::from_str(&name)
                    .ok_or_else(|| Error::UnknownCategory(name.clone()))?;
                if !seen.insert(category) {
                    return Err(Error::DuplicateRule(name));
                }
                if entry.contains.is_empty() {
                    return Err(Error::EmptyRule(name));
                }
                if entry.contains.iter().chain(&entry.excludes).any(|m| m.is_empty()) {
                    return Err(Error::EmptyMarker(name));
                }
                Ok((category, entry.contains, entry.excludes))
            })
            .collect::<Result<Vec<_>>>()?;

        let matcher = RuleMatcher::build(items)?;
        tracing::debug!(
            rules = matcher.rule_count(),
            markers = matcher.marker_count(),
            "compiled agent classifier"
        );
        Ok(Self { matcher })
    }

    /// Classify a single agent string.
    pub fn classify(&self, agent: &str) -> AgentCategory {
        let category = self.matcher.match_first(agent).unwrap_or(AgentCategory::Other);
        tracing::trace!(agent, %category, "classified agent");
        category
    }

    /// Classify and pick the matching background in one step.
    pub fn detect(&self, agent: &str) -> Classification {
        let category = self.classify(agent);
        Classification {
            category,
            background: select_background(category),
        }
    }

    /// Classify many agent strings in parallel. Output order follows input order.
    pub fn classify_batch<S>(&self, agents: &[S]) -> Vec<AgentCategory>
    where
        S: AsRef<str> + Sync,
    {
        agents
            .par_iter()
            .map(|agent| self.classify(agent.as_ref()))
            .collect()
    }

    /// Number of rules loaded, in priority order.
    pub fn rule_count(&self) -> usize {
        self.matcher.rule_count()
    }
}

impl Default for AgentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_other() {
        assert_eq!(classify(""), AgentCategory::Other);
    }

    #[test]
    fn chrome() {
        assert_eq!(classify("Mozilla/5.0 Chrome/100.0"), AgentCategory::Chrome);
    }

    #[test]
    fn firefox() {
        assert_eq!(classify("Mozilla/5.0 Firefox/100.0"), AgentCategory::Firefox);
    }

    #[test]
    fn edge_wins_over_chrome() {
        assert_eq!(
            classify("Mozilla/5.0 Chrome/100.0 Edg/100.0"),
            AgentCategory::Edge
        );
    }

    #[test]
    fn unknown_agent_is_other() {
        assert_eq!(classify("SomeOtherAgent/1.0"), AgentCategory::Other);
    }

    #[test]
    fn firefox_checked_before_edge() {
        assert_eq!(classify("Firefox/100.0 Edg/100.0"), AgentCategory::Firefox);
    }

    #[test]
    fn repeated_calls_agree() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64) Chrome/120.0 Safari/537.36";
        assert_eq!(classify(ua), classify(ua));
    }

    #[test]
    fn builtin_rule_count() {
        assert_eq!(AgentClassifier::new().rule_count(), 3);
    }

    #[test]
    fn detect_pairs_category_and_background() {
        let c = AgentClassifier::default().detect("Mozilla/5.0 Chrome/100.0");
        assert!(c.is_chrome());
        assert_eq!(c.background(), Color::LightBlue);

        let c = AgentClassifier::default().detect("curl/8.0");
        assert_eq!(c.category(), AgentCategory::Other);
        assert_eq!(c.background(), Color::LightGreen);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = AgentClassifier::from_yaml_str("Safari:\n  contains: [Safari]\n")
            .err()
            .unwrap();
        assert!(matches!(err, Error::UnknownCategory(ref n) if n == "Safari"));
    }

    #[test]
    fn rule_without_markers_is_rejected() {
        let err = AgentClassifier::from_yaml_str("Edge:\n  excludes: [Chrome]\n")
            .err()
            .unwrap();
        assert!(matches!(err, Error::EmptyRule(_)));
    }

    #[test]
    fn repeated_category_is_rejected() {
        let yaml = "Edge:\n  contains: [Edg]\n\
                    Firefox:\n  contains: [Firefox]\n\
                    Edge:\n  contains: [Xyz]\n";
        let err = AgentClassifier::from_yaml_str(yaml).err().unwrap();
        assert!(matches!(err, Error::DuplicateRule(ref n) if n == "Edge"));
    }

    #[test]
    fn category_aliases_count_as_repeats() {
        let yaml = "Other:\n  contains: [Safari]\nOtro:\n  contains: [Opera]\n";
        let err = AgentClassifier::from_yaml_str(yaml).err().unwrap();
        assert!(matches!(err, Error::DuplicateRule(ref n) if n == "Otro"));

        let yaml = "Chrome:\n  contains: [Chrome]\nchrome:\n  contains: [CriOS]\n";
        let err = AgentClassifier::from_yaml_str(yaml).err().unwrap();
        assert!(matches!(err, Error::DuplicateRule(ref n) if n == "chrome"));
    }

    #[test]
    fn empty_marker_is_rejected() {
        let err = AgentClassifier::from_yaml_str("Edge:\n  contains: [\"\"]\n")
            .err()
            .unwrap();
        assert!(matches!(err, Error::EmptyMarker(_)));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        let err = AgentClassifier::from_yaml_str("Chrome: [").err().unwrap();
        assert!(matches!(err, Error::YAML(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AgentClassifier::from_file("does/not/exist.yml").err().unwrap();
        assert!(matches!(err, Error::IO(_)));
    }
}
