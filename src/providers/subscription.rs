use super::new_client;
use crate::decode::{decode_base64, split_lines};
use crate::provider::Provider;
use crate::source::{Encoding, Source};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

/// A public subscription list served over HTTP.
pub struct Subscription {
    source: Source,
    proxy: String,
    timeout: Option<Duration>,
}

impl Subscription {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            proxy: String::new(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    async fn fetch(&self) -> Result<String> {
        let client = new_client(
            if self.proxy.is_empty() { None } else { Some(self.proxy.as_str()) },
            self.timeout,
        )?;

        let resp = client.get(&self.source.url).send().await?;
        if resp.status() != StatusCode::OK {
            return Err(anyhow!("unexpected status {}", resp.status()));
        }

        Ok(resp.text().await?)
    }

    async fn load_internal(&self) -> Result<Vec<String>> {
        let body = self.fetch().await?;

        let text = match self.source.encoding {
            Encoding::Raw => body,
            Encoding::Base64 => decode_base64(&body).context("cannot decode payload")?,
        };

        Ok(split_lines(&text))
    }
}

#[async_trait]
impl Provider for Subscription {
    async fn list(&mut self) -> Result<Vec<String>> {
        self.load_internal().await
    }

    fn name(&self) -> &str {
        &self.source.url
    }

    fn set_proxy(&mut self, proxy: String) {
        self.proxy = proxy;
    }
}
