use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;
use url::Url;

use crate::{configuration::SearchSettings, domain::search_query::SearchQuery};

// Unreserved characters and `/` stay literal, everything else is %XX (space is %20, not +)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

pub struct SearchClient {
    client: Client,
    endpoint: Url,
}

impl SearchClient {
    pub fn new(settings: &SearchSettings) -> anyhow::Result<Self> {
        let endpoint = Url::parse(&settings.endpoint)?;

        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.clone());
        if let Some(secs) = settings.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(SearchClient {
            client: builder.build()?,
            endpoint,
        })
    }

    /// Endpoint with the built query percent-encoded into `q`.
    pub fn search_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.endpoint.clone();
        let q = utf8_percent_encode(&query.build(), QUERY_VALUE).to_string();
        url.set_query(Some(&format!("q={}", q)));
        url
    }

    /// Performs the one GET for `query` and returns the body text whatever the status.
    pub async fn fetch(&self, query: &SearchQuery) -> Result<String, RequestError> {
        let url = self.search_url(query);
        log::debug!("Searching: {}", url);

        let res = self.client.get(url).send().await.map_err(|e| {
            log::error!("No response from reqwest, error: {:?}", e);
            e
        })?;

        let status = res.status();
        match status.is_success() {
            true => log::info!("Search responded with status {}", status),
            false => log::warn!("Search responded with status {}, scanning body anyway", status),
        }

        let body = res.text().await.map_err(|e| {
            log::error!("Failed to read text from response. Error: {:?}", e);
            e
        })?;

        Ok(body)
    }
}
