use aho_corasick::AhoCorasick;
use indexmap::IndexSet;

use crate::error::Result;
use crate::types::AgentCategory;

/// One rule with its markers resolved to automaton pattern ids.
struct CompiledRule {
    category: AgentCategory,
    contains: Vec<usize>,
    excludes: Vec<usize>,
}

impl CompiledRule {
    fn matches(&self, present: &[bool]) -> bool {
        self.contains.iter().any(|&id| present[id])
            && !self.excludes.iter().any(|&id| present[id])
    }
}

/// Ordered rule list backed by a single Aho-Corasick automaton.
///
/// Every marker referenced by any rule is interned once, so one overlapping
/// scan of the agent string tells us which markers are present. Rules are
/// then checked in their original order and the first hit wins.
pub(crate) struct RuleMatcher {
    automaton: AhoCorasick,
    marker_count: usize,
    rules: Vec<CompiledRule>,
}

impl RuleMatcher {
    /// Build from `(category, contains, excludes)` triples, in priority order.
    pub fn build(
        items: impl IntoIterator<Item = (AgentCategory, Vec<String>, Vec<String>)>,
    ) -> Result<Self> {
        let mut markers: IndexSet<String> = IndexSet::new();
        let mut intern = |list: Vec<String>| -> Vec<usize> {
            list.into_iter().map(|m| markers.insert_full(m).0).collect()
        };

        let rules: Vec<CompiledRule> = items
            .into_iter()
            .map(|(category, contains, excludes)| CompiledRule {
                category,
                contains: intern(contains),
                excludes: intern(excludes),
            })
            .collect();

        let automaton = AhoCorasick::new(markers.iter())?;

        Ok(Self {
            automaton,
            marker_count: markers.len(),
            rules,
        })
    }

    /// Category of the first matching rule, if any.
    pub fn match_first(&self, agent: &str) -> Option<AgentCategory> {
        let mut present = vec![false; self.marker_count];
        for m in self.automaton.find_overlapping_iter(agent) {
            present[m.pattern().as_usize()] = true;
        }
        self.rules
            .iter()
            .find(|rule| rule.matches(&present))
            .map(|rule| rule.category)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn marker_count(&self) -> usize {
        self.marker_count
    }
}
