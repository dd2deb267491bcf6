//! [`HttpClient`] implementation on top of [`reqwest`].

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::runtime::Handle;
use url::Url;

use super::{HttpClient, HttpClientResult, HttpResponse};
use crate::feed::Completion;

/// Settings for the underlying [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Whole-request timeout, connect through body.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

/// Issues GET requests on a tokio runtime and reports each outcome through
/// the completion.
///
/// Cheap to share: one instance can back any number of loaders.
pub struct ReqwestHttpClient {
    client: Client,
    runtime: Handle,
}

impl ReqwestHttpClient {
    pub fn new(client: Client, runtime: Handle) -> Self {
        Self { client, runtime }
    }

    /// Build a client from `config`, bound to the current tokio runtime.
    ///
    /// Fails when called outside a runtime or when reqwest rejects the
    /// configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("building HTTP client")?;
        let runtime = Handle::try_current().context("no tokio runtime available")?;
        Ok(Self::new(client, runtime))
    }
}

/// One plain GET.  Request and body-read failures are transport failures;
/// any status is surfaced as-is for the mapper to judge.
async fn fetch(client: &Client, url: Url) -> HttpClientResult {
    let response = client.get(url).send().await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?;
    Ok(HttpResponse {
        status,
        body: body.to_vec(),
    })
}

impl HttpClient for ReqwestHttpClient {
    fn get(&self, url: &Url, completion: Completion<HttpClientResult>) {
        let client = self.client.clone();
        let url = url.clone();
        self.runtime.spawn(async move {
            completion(fetch(&client, url).await);
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
