use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};
use serde_json::Value;

use super::utils::{build_url, make_request};
use crate::{config::ClientConfig, errors::Result};

/// Performs one GET against the exchange rate API and returns the decoded
/// JSON body.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn make_request(&self, path: &str, query: &[(&str, String)]) -> Result<Value>;
}

#[derive(Clone, Debug)]
pub struct RequestBuilder {
    client: Client,
    config: ClientConfig,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(Client::new(), ClientConfig::default())
    }
}

impl RequestBuilder {
    pub fn new(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder().timeout(*config.timeout()).build()?;
        Ok(Self::new(client, config))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full request URL, including the access key when one is configured.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut params = query.to_vec();
        if let Some(access_key) = self.config.access_key() {
            params.push(("access_key", access_key.clone()));
        }

        build_url(self.config.base_url(), path, &params)
    }
}

#[async_trait]
impl RateSource for RequestBuilder {
    async fn make_request(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        debug!("GET {} {:?}", path, query);
        let url = self.url(path, query)?;
        make_request(&self.client, url).await
    }
}
