use indexmap::IndexMap;

// ---------------------------------------------------------------------------
// Rule tables  (rules/*.yml)
//
// Format: top-level mapping  browser_label → [token, ...]
// ---------------------------------------------------------------------------

/// Raw deserialization target for a rule table file.
/// Uses IndexMap to preserve YAML insertion order (first-match-wins).
pub(crate) type RuleMap = IndexMap<String, Vec<String>>;
