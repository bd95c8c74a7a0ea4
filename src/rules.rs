use super::types::{Browser, Rule};

/// Built-in rule table, highest priority first.
///
/// Real User-Agents carry several vendor tokens at once: Chrome sends
/// `Safari`, Edge sends `Chrome` and `Safari`, legacy Opera sends `Chrome`.
/// The more specific families must therefore come before the generic ones.
pub(crate) const BUILTIN_RULES: &[(Browser, &[&str])] = &[
    (Browser::Opera, &["Opera", "Opr", "OPR"]),
    (Browser::Edge, &["Edg"]),
    (Browser::Chrome, &["Chrome"]),
    (Browser::Safari, &["Safari"]),
    (Browser::Firefox, &["Firefox"]),
];

/// Classify a User-Agent string against the built-in table.
///
/// Total over all inputs: anything no rule recognises is `Browser::Unknown`.
pub fn classify(ua: &str) -> Browser {
    BUILTIN_RULES
        .iter()
        .find(|(_, tokens)| tokens.iter().any(|t| ua.contains(t)))
        .map(|&(browser, _)| browser)
        .unwrap_or(Browser::Unknown)
}

/// The built-in table as owned [`Rule`]s, in priority order.
pub fn builtin_rules() -> Vec<Rule> {
    BUILTIN_RULES
        .iter()
        .map(|&(browser, tokens)| Rule::new(browser, tokens.iter().copied()))
        .collect()
}
