use anyhow::{anyhow, Result};
use config::Config;

use serde::Deserialize;
use std::path::PathBuf;

/// A domain pattern routed to a backend cluster. Patterns are either exact
/// (`example.com`) or wildcard (`*.example.com`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct DomainRule {
    pub domain: String,
    pub target_cluster: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Configuration {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Cluster used when no rule matches. Without it unmatched hosts get no route.
    #[serde(default)]
    pub default_cluster: Option<String>,
    /// Upper bound on memoized routing decisions, 0 disables the cache.
    #[serde(default = "default_cache_size")]
    pub cache_size: usize,
    #[serde(default)]
    pub rules: Vec<DomainRule>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_cache_size() -> usize {
    10000
}

impl Configuration {
    pub fn parse(path: PathBuf) -> Result<Self> {
        let conf = Config::builder()
            .add_source(config::File::from(path))
            .build()?;
        conf.try_deserialize().map_err(|e| e.into())
    }
}

impl DomainRule {
    pub fn new(domain: impl Into<String>, target_cluster: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            target_cluster: target_cluster.into(),
        }
    }
}

impl TryFrom<&str> for DomainRule {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        let mut parts = s
            .split(',')
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .map(String::from);

        let domain = parts.next().ok_or(anyhow!("missing rule domain"))?;
        let target_cluster = parts
            .next()
            .ok_or(anyhow!("missing target cluster for {}", domain))?;
        if parts.next().is_some() {
            return Err(anyhow!("unexpected fields in rule: {}", s));
        }
        Ok(DomainRule {
            domain,
            target_cluster,
        })
    }
}

impl TryFrom<String> for DomainRule {
    type Error = anyhow::Error;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

#[cfg(test)]
mod test {
    use crate::configuration::{Configuration, DomainRule};
    use std::path::PathBuf;

    #[test]
    fn test_parse() {
        let conf = Configuration::parse(PathBuf::from("tests/config/config.yaml"));
        assert!(conf.is_ok(), "{:?}", conf);

        let conf = conf.unwrap();
        assert_eq!(conf.log_level, "debug");
        assert_eq!(conf.default_cluster, Some("cluster-default".to_string()));
        assert_eq!(conf.cache_size, 512);
        assert_eq!(
            conf.rules,
            vec![
                DomainRule::new("example.com", "cluster-exact"),
                DomainRule::new("*.example.com", "cluster-wild"),
                DomainRule::new("*.sub.example.com", "cluster-sub"),
                DomainRule::new("Internal.Example.org.", "cluster-internal"),
            ]
        );
    }

    #[test]
    fn test_parse_missing_file() {
        let conf = Configuration::parse(PathBuf::from("tests/config/missing.yaml"));
        assert!(conf.is_err());
    }

    #[test]
    fn test_parse_defaults() {
        let conf = Configuration::parse(PathBuf::from("tests/config/minimal.yaml")).unwrap();
        assert_eq!(conf.log_level, "info");
        assert_eq!(conf.default_cluster, None);
        assert_eq!(conf.cache_size, 10000);
        assert_eq!(
            conf.rules,
            vec![DomainRule::new("example.com", "cluster-a")]
        );
    }

    #[test]
    fn test_parse_rule() {
        let cases = vec![
            (
                "example.com,cluster-a",
                Ok(DomainRule::new("example.com", "cluster-a")),
            ),
            (
                " *.example.com , cluster-b ",
                Ok(DomainRule::new("*.example.com", "cluster-b")),
            ),
            (
                "Example.COM.,cluster-c",
                Ok(DomainRule::new("Example.COM.", "cluster-c")),
            ),
            ("example.com", Err(())),
            ("example.com,", Err(())),
            ("", Err(())),
            ("example.com,cluster-a,extra", Err(())),
        ];

        for (input, expect) in cases {
            let rule = DomainRule::try_from(input);
            match expect {
                Ok(expected) => assert_eq!(rule.unwrap(), expected, "input: {:?}", input),
                Err(()) => assert!(rule.is_err(), "input: {:?}", input),
            }
        }
    }
}
