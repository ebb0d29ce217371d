use crate::filter::ConfigFilter;
use crate::provider::Provider;

use log::{error, info};

/// Pulls every provider in turn and concatenates their lines.
pub struct ConfigAggregator {
    providers: Vec<Box<dyn Provider>>,
    upstream_proxy: String,
}

impl ConfigAggregator {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            upstream_proxy: String::new(),
        }
    }

    pub fn add_provider<P: Provider + 'static>(&mut self, provider: P) {
        self.providers.push(Box::new(provider));
    }

    pub fn set_proxy(&mut self, proxy: String) {
        self.upstream_proxy = proxy;
    }

    /// Fetch all providers sequentially, in the order they were added.
    ///
    /// A provider that fails contributes no lines; the rest still run.
    pub async fn collect(&mut self, filter: &ConfigFilter) -> Vec<String> {
        let total = self.providers.len();
        let mut configs = Vec::new();

        for (i, provider) in self.providers.iter_mut().enumerate() {
            if !self.upstream_proxy.is_empty() {
                provider.set_proxy(self.upstream_proxy.clone());
            }

            info!("[{}/{}] fetching {}", i + 1, total, provider.name());
            match provider.list().await {
                Ok(lines) => {
                    info!("{} found configs {}", provider.name(), lines.len());
                    configs.extend(lines);
                }
                Err(e) => {
                    error!("cannot load configs from {} err:{:#}", provider.name(), e);
                }
            }
        }

        filter.apply(configs)
    }
}

impl Default for ConfigAggregator {
    fn default() -> Self {
        Self::new()
    }
}
