use crate::configuration::{Configuration, DomainRule};
use crate::matcher::{normalize, DomainPattern};
use crate::resolver::select;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct Router {
    matchers: Arc<Vec<(DomainPattern, String)>>,
    default_cluster: Option<String>,
    cache: Arc<RwLock<HashMap<String, Option<usize>>>>,
    cache_size: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub cluster: String,
    /// Set when no rule matched and the default cluster was used.
    pub fallback: bool,
}

impl TryFrom<Configuration> for Router {
    type Error = anyhow::Error;

    fn try_from(conf: Configuration) -> std::result::Result<Self, Self::Error> {
        Ok(Self::new(
            &conf.rules,
            conf.default_cluster,
            conf.cache_size,
        ))
    }
}

impl Router {
    pub fn new(rules: &[DomainRule], default_cluster: Option<String>, cache_size: usize) -> Self {
        let matchers = rules
            .iter()
            .map(|rule| {
                (
                    DomainPattern::parse(&rule.domain),
                    rule.target_cluster.clone(),
                )
            })
            .collect();
        Self {
            matchers: Arc::new(matchers),
            default_cluster,
            cache: Arc::new(RwLock::new(HashMap::new())),
            cache_size,
        }
    }

    pub async fn route(&self, host: &str) -> Option<Route> {
        let host = normalize(host);
        let cached = self.cache.read().await.get(&host).copied();
        let index = match cached {
            Some(index) => index,
            None => {
                let index = self.find(&host);
                self.remember(&host, index).await;
                index
            }
        };

        match index.and_then(|i| self.matchers.get(i)) {
            Some((pattern, cluster)) => {
                debug!("host {} matched {} -> {}", host, pattern.base(), cluster);
                Some(Route {
                    cluster: cluster.clone(),
                    fallback: false,
                })
            }
            None => match &self.default_cluster {
                Some(cluster) => {
                    debug!("host {} unmatched, using default {}", host, cluster);
                    Some(Route {
                        cluster: cluster.clone(),
                        fallback: true,
                    })
                }
                None => {
                    debug!("no route found for {}", host);
                    None
                }
            },
        }
    }

    fn find(&self, host: &str) -> Option<usize> {
        select(
            host,
            self.matchers
                .iter()
                .enumerate()
                .map(|(idx, (pattern, _))| (pattern, idx)),
        )
    }

    async fn remember(&self, host: &str, index: Option<usize>) {
        let mut cache = self.cache.write().await;
        if cache.len() < self.cache_size {
            cache.insert(host.to_owned(), index);
        }
    }
}
