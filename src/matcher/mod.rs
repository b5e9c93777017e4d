mod domain;

pub use domain::DomainPattern;

/// Canonical form of a host name or rule base: lower case with a single
/// trailing root dot removed.
pub fn normalize(host: &str) -> String {
    host.strip_suffix('.').unwrap_or(host).to_lowercase()
}

/// Ranking of a matching pattern. Fields compare in declaration order, so a
/// longer base always outranks a shorter one and exactness only breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    pub base_len: usize,
    pub exact: bool,
}
