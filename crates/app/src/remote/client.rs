//! HTTP implementation of [`MenuSource`].

use async_trait::async_trait;
use tracing::{debug, instrument};
use url::Url;

use little_lemon_core::MenuItem;

use super::types::MenuDocument;
use super::{MenuSource, MenuSourceError};

/// Fetches the menu from a JSON endpoint over HTTP.
#[derive(Clone)]
pub struct HttpMenuSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpMenuSource {
    /// Create a source for the given endpoint.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }
}

#[async_trait]
impl MenuSource for HttpMenuSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_menu(&self) -> Result<Vec<MenuItem>, MenuSourceError> {
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(MenuSourceError::Status {
                status: status.as_u16(),
            });
        }

        // Read as text: the endpoint labels its JSON as text/plain
        let body = response.text().await?;
        debug!(bytes = body.len(), "Menu response received");

        let document: MenuDocument = serde_json::from_str(&body)?;
        Ok(document.into_items())
    }
}
