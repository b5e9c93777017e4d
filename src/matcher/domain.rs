use crate::matcher::{normalize, Specificity};

const WILDCARD_PREFIX: &str = "*.";

/// A rule pattern reduced to the suffix it matches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPattern {
    base: String,
    wildcard: bool,
}

impl DomainPattern {
    /// Never fails: anything that is not `*.` prefixed is taken as an exact
    /// pattern and compared literally after normalization.
    pub fn parse(pattern: &str) -> Self {
        let (wildcard, base) = match pattern.strip_prefix(WILDCARD_PREFIX) {
            Some(base) => (true, base),
            None => (false, pattern),
        };
        Self {
            base: normalize(base),
            wildcard,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// `host` must already be normalized. Matches the base itself or any
    /// name ending in `.` + base.
    pub fn matches(&self, host: &str) -> bool {
        match host.strip_suffix(self.base.as_str()) {
            Some("") => true,
            Some(rest) => rest.ends_with('.'),
            None => false,
        }
    }

    pub fn specificity(&self) -> Specificity {
        Specificity {
            base_len: self.base.len(),
            exact: !self.wildcard,
        }
    }
}
