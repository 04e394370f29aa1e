use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Browser rules  (rules/browsers.yml)
//
// Format: top-level mapping  category_name → RuleEntry
// ---------------------------------------------------------------------------

/// Rule set compiled into the crate.
pub(crate) const BUILTIN_RULES: &str = include_str!("../rules/browsers.yml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RuleEntry {
    /// Any of these markers must occur in the agent string.
    #[serde(default)]
    pub contains: Vec<String>,
    /// None of these markers may occur in the agent string.
    #[serde(default)]
    pub excludes: Vec<String>,
}

/// Raw deserialization target for a rules file.
///
/// Keeps every `(key, entry)` pair in file order, repeats included, so that
/// duplicate categories reach validation instead of being merged away.
#[derive(Debug, Default)]
pub(crate) struct RuleList(pub Vec<(String, RuleEntry)>);

impl<'de> Deserialize<'de> for RuleList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RuleListVisitor;

        impl<'de> Visitor<'de> for RuleListVisitor {
            type Value = RuleList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a mapping of category name to rule")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RuleList, A::Error> {
                let mut rules = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, entry)) = map.next_entry::<String, RuleEntry>()? {
                    rules.push((name, entry));
                }
                Ok(RuleList(rules))
            }
        }

        deserializer.deserialize_map(RuleListVisitor)
    }
}
