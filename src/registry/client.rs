// src/registry/client.rs

//! HTTP client for registry fetches.
//!
//! Thin wrapper around a blocking reqwest client. Single fetches are
//! try-once (the sync workflow reports failures instead of retrying);
//! batch fetches fan out in parallel and settle all requests, collecting
//! per-name failures alongside the successes.

use super::{index_url, item_url, RegistryIndex, RegistryItem};
use crate::config::{Framework, Style};
use crate::error::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

/// Timeout for registry HTTP requests
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Result of a batch fetch: successes plus the failures that were isolated
/// from them. A failed name never aborts the batch.
#[derive(Debug)]
pub struct FetchOutcome {
    pub items: Vec<RegistryItem>,
    pub failures: Vec<(String, Error)>,
}

/// Registry HTTP client
pub struct RegistryClient {
    client: Client,
    base_url: String,
}

impl RegistryClient {
    /// Create a client against the configured registry base URL
    pub fn new() -> Result<Self> {
        Self::with_base_url(super::base_url())
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::FetchError(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the registry index listing
    pub fn fetch_index(&self) -> Result<RegistryIndex> {
        let url = index_url(&self.base_url);
        info!("Fetching registry index from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::FetchError(format!("failed to fetch {url}: {e}")))?;
        if !response.status().is_success() {
            return Err(Error::FetchError(format!(
                "HTTP {} from {url}",
                response.status()
            )));
        }

        response
            .json()
            .map_err(|e| Error::SchemaError(format!("failed to parse index from {url}: {e}")))
    }

    /// Fetch one component payload and validate it.
    ///
    /// A 404 maps to `NotFoundError` so callers can distinguish "no such
    /// component" from transport failures.
    pub fn fetch_component(
        &self,
        name: &str,
        framework: Framework,
        style: Style,
    ) -> Result<RegistryItem> {
        let url = item_url(&self.base_url, framework, style, name);
        debug!("Fetching component from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| Error::FetchError(format!("failed to fetch {url}: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFoundError(name.to_string()));
        }
        if !response.status().is_success() {
            return Err(Error::FetchError(format!(
                "HTTP {} from {url}",
                response.status()
            )));
        }

        let item: RegistryItem = response
            .json()
            .map_err(|e| Error::SchemaError(format!("failed to parse {url}: {e}")))?;
        item.validate(name, framework, style)?;
        Ok(item)
    }

    /// Fetch a batch of components in parallel.
    ///
    /// Settle-all: every name is attempted, failures are collected, and the
    /// returned items keep the input order of their names.
    pub fn fetch_components(
        &self,
        names: &[String],
        framework: Framework,
        style: Style,
    ) -> FetchOutcome {
        let pb = ProgressBar::new(names.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg} ({pos}/{len}) [{bar:40.green/dim}] {percent}%")
                .expect("Invalid progress bar template")
                .progress_chars("##-"),
        );
        pb.set_message("Fetching components");

        let results: Vec<(String, Result<RegistryItem>)> = names
            .par_iter()
            .map(|name| {
                let result = self.fetch_component(name, framework, style);
                pb.inc(1);
                (name.clone(), result)
            })
            .collect();
        pb.finish_and_clear();

        let mut outcome = FetchOutcome {
            items: Vec::new(),
            failures: Vec::new(),
        };
        for (name, result) in results {
            match result {
                Ok(item) => outcome.items.push(item),
                Err(e) => outcome.failures.push((name, e)),
            }
        }
        outcome
    }

    /// Whether a component exists in the registry.
    ///
    /// Any failure, including transport errors, reads as absent.
    pub fn component_exists(&self, name: &str, framework: Framework, style: Style) -> bool {
        self.fetch_component(name, framework, style).is_ok()
    }
}

impl super::ComponentSource for RegistryClient {
    fn fetch(&self, name: &str, framework: Framework, style: Style) -> Result<RegistryItem> {
        self.fetch_component(name, framework, style)
    }
}
