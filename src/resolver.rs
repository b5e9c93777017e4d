use crate::configuration::DomainRule;
use crate::matcher::{normalize, DomainPattern, Specificity};
use std::borrow::Borrow;

/// Resolve `host` to the target cluster of the most specific matching rule.
///
/// The longest matching base wins; an exact pattern beats a wildcard with the
/// same base. Rules that tie on both keep their input order and the first one
/// is returned, although callers should not rely on that. `None` means no rule
/// matched.
pub fn resolve<'a>(host: &str, rules: &'a [DomainRule]) -> Option<&'a str> {
    let host = normalize(host);
    select(&host, rules.iter().map(candidate))
}

fn candidate(rule: &DomainRule) -> (DomainPattern, &str) {
    (
        DomainPattern::parse(&rule.domain),
        rule.target_cluster.as_str(),
    )
}

/// Single pass over `candidates` keeping the best scoring match. `host` must
/// already be normalized.
pub(crate) fn select<I, P, T>(host: &str, candidates: I) -> Option<T>
where
    I: IntoIterator<Item = (P, T)>,
    P: Borrow<DomainPattern>,
{
    let mut best: Option<(Specificity, T)> = None;
    for (pattern, value) in candidates {
        let pattern = pattern.borrow();
        if !pattern.matches(host) {
            continue;
        }
        let score = pattern.specificity();
        if best.as_ref().is_none_or(|(top, _)| score > *top) {
            best = Some((score, value));
        }
    }
    best.map(|(_, value)| value)
}
