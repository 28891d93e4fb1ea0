//! Career API access
//!
//! Two boundaries with the remote service: the item collection behind the
//! suggestion list, and the by-name detail lookup behind the cards. Both
//! swallow their failures here, logging them, so UI code only ever sees a
//! plain list or a [`DetailOutcome`].

mod items;
pub mod worker;

use std::future::Future;

use reqwest::Client;

use crate::config::ApiConfig;
use crate::detail::{DetailOutcome, parse_detail};
use crate::error::SourceError;

pub use items::{filter_suggestions, parse_items};

/// Produces suggestion labels for a query
pub trait SuggestionSource {
    /// Ordered labels matching `query`; empty on any failure
    fn search(&self, query: &str) -> impl Future<Output = Vec<String>> + Send;
}

/// Looks up the detail record for a chosen label
pub trait DetailSource {
    fn fetch_detail(&self, name: &str) -> impl Future<Output = DetailOutcome> + Send;
}

/// HTTP client for the career API
#[derive(Debug, Clone)]
pub struct CareerApi {
    client: Client,
    items_url: String,
    detail_url: String,
    max_suggestions: usize,
}

impl CareerApi {
    pub fn new(api: &ApiConfig, max_suggestions: usize) -> Self {
        Self {
            client: Client::new(),
            items_url: api.items_url(),
            detail_url: api.detail_url(),
            max_suggestions,
        }
    }

    /// Full URL of the detail lookup for `name`
    pub fn detail_request_url(&self, name: &str) -> String {
        format!("{}?name={}", self.detail_url, urlencoding::encode(name))
    }

    async fn get_text(&self, url: &str) -> Result<String, SourceError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                code: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }
        Ok(response.text().await?)
    }

    async fn fetch_item_names(&self) -> Result<Vec<String>, SourceError> {
        let body = self.get_text(&self.items_url).await?;
        parse_items(&body)
    }
}

impl SuggestionSource for CareerApi {
    async fn search(&self, query: &str) -> Vec<String> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        match self.fetch_item_names().await {
            Ok(names) => filter_suggestions(names, query, self.max_suggestions),
            Err(e) => {
                log::error!("Suggestion fetch failed: {}", e);
                Vec::new()
            }
        }
    }
}

impl DetailSource for CareerApi {
    async fn fetch_detail(&self, name: &str) -> DetailOutcome {
        let url = self.detail_request_url(name);
        match self.get_text(&url).await {
            Ok(body) => {
                let outcome = parse_detail(&body);
                match &outcome {
                    DetailOutcome::NotFound { message } => {
                        log::info!("No detail record for {:?}: {}", name, message)
                    }
                    DetailOutcome::Failed(e) => {
                        log::warn!("Unusable detail response for {:?}: {}", name, e)
                    }
                    DetailOutcome::Found(_) => {}
                }
                outcome
            }
            Err(e) => DetailOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod source_tests;
