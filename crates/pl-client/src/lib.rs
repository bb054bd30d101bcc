//! Client for the upstream paginated people API.
//!
//! The upstream returns pages of contact records with cursor metadata;
//! [`PeopleClient`] walks `next_page` until the listing is exhausted. The
//! client is constructed once at startup and injected wherever a
//! [`PeopleSource`] is needed.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use pl_core::{ApiConfig, PeoplePage, Person, PlError, Result};

/// Anything that can produce the full contact list. The server depends on
/// this seam so handlers can be tested against a canned source.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    async fn list_people(&self) -> Result<Vec<Person>>;
}

/// HTTP client for the upstream people API.
pub struct PeopleClient {
    http: Client,
    base_url: String,
    api_key: String,
    per_page: u32,
}

impl PeopleClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("peoplelens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PlError::Http(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            per_page: config.per_page,
        })
    }

    /// Fetch a single page of the people listing.
    pub async fn fetch_page(&self, per_page: u32, page: u32) -> Result<PeoplePage> {
        let response = self
            .http
            .get(&self.base_url)
            .bearer_auth(&self.api_key)
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .await
            .map_err(|e| PlError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(PlError::Upstream {
                status: status.as_u16(),
            });
        }
        response
            .json::<PeoplePage>()
            .await
            .map_err(|e| PlError::Http(e.to_string()))
    }
}

#[async_trait]
impl PeopleSource for PeopleClient {
    /// Follow `metadata.paging.next_page` until the upstream stops handing
    /// out pages, flattening every page's records. The page size echoed by
    /// the server takes over from the configured one.
    async fn list_people(&self) -> Result<Vec<Person>> {
        let mut people = Vec::new();
        let mut per_page = self.per_page;
        let mut next_page = Some(0u32);

        while let Some(page) = next_page {
            let resp = self.fetch_page(per_page, page).await?;
            let Some(data) = resp.data else { break };
            debug!(page, count = data.len(), "fetched people page");
            people.extend(data);
            if let Some(pp) = resp.metadata.paging.per_page {
                per_page = pp;
            }
            next_page = resp.metadata.paging.next_page;
        }
        info!(total = people.len(), "listed people from upstream");
        Ok(people)
    }
}
