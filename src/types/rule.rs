use super::Browser;
use std::borrow::Cow;

/// One entry of an ordered rule table: the rule matches when the User-Agent
/// contains any of `tokens` (case-sensitive substring test).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub browser: Browser,
    pub tokens: Vec<Cow<'static, str>>,
}

impl Rule {
    pub fn new<I, T>(browser: Browser, tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Cow<'static, str>>,
    {
        Self {
            browser,
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn matches(&self, ua: &str) -> bool {
        self.tokens.iter().any(|t| ua.contains(t.as_ref()))
    }
}
