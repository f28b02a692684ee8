//! HTTP client for the Halo Infinite statistics API.
//!
//! This module provides the [`HaloRequester`] struct for requesting the
//! statistics of a player from the Halo statistics server.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use mockall::automock;
use reqwest::{Client, Url};

use crate::halo::{FetchError, response_structs::StatsResponse};

/// HTTP client for requesting data from the Halo statistics server.
///
/// # Examples
///
/// ```no_run
/// let requester = HaloRequester::new("https://haloinfinite.benpetrillo.dev", None)?;
/// let stats = requester.get_stats("Ben Petrillo").await?;
/// println!("Stats: {:?}", stats);
/// ```
pub struct HaloRequester {
    /// Halo statistics server base url
    url: Url,
    /// HTTP client
    client: Client,
}

/// Trait for making requests to the Halo statistics server.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
#[async_trait]
pub trait Requester: Send + Sync {
    /// Fetches the general statistics of a player.
    async fn get_stats(&self, player: &str) -> Result<StatsResponse, FetchError>;
}

impl HaloRequester {
    /// Create a new [HaloRequester].
    ///
    /// # Arguments
    ///
    /// * `url` - The base URL of the Halo statistics server.
    /// * `timeout` - Optional request timeout. The transport default applies when `None`.
    ///
    /// # Errors
    ///
    /// Fails if the url is not an absolute base url or if the HTTP client cannot
    /// be built.
    pub fn new(url: &str, timeout: Option<Duration>) -> Result<Self, anyhow::Error> {
        let url = Url::parse(url)?;
        if url.cannot_be_a_base() {
            return Err(anyhow::anyhow!("{} cannot be used as a base url", url));
        }

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(HaloRequester {
            url,
            client: builder.build()?,
        })
    }

    /// Builds `{url}/v3/stats/{player}`, the player being encoded as a single path segment.
    fn get_stats_url(&self, player: &str) -> Result<Url, FetchError> {
        let mut url = self.url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl)?
            .pop_if_empty()
            .extend(["v3", "stats", player]);
        Ok(url)
    }
}

#[async_trait]
impl Requester for HaloRequester {
    /// Request `/v3/stats/{player}` to get the statistics of a player.
    ///
    /// This api call returns a json object wrapping the player statistics:
    /// ```json
    /// {
    ///   "data": {
    ///     "general": {
    ///       "username": "Ben Petrillo", "kdRatio": 1.12, ...,
    ///       "specifics": { "kills": 1000, ... },
    ///       "shots": { "shotAccuracy": 48.9, ... }
    ///     }
    ///   }
    /// }
    /// ```
    /// This method transforms this json into a [`StatsResponse`].
    ///
    /// # Errors
    ///
    /// * [`FetchError::Transport`] - the server could not be reached
    /// * [`FetchError::Status`] - the server answered with a non-2xx status
    /// * [`FetchError::Decode`] - the body does not match [`StatsResponse`]
    async fn get_stats(&self, player: &str) -> Result<StatsResponse, FetchError> {
        let url = self.get_stats_url(player)?;
        info!("request stats of {}", player);
        debug!("request {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            debug!("response from {} -> {}", url, status);
            return Err(FetchError::Status(status));
        }

        let stats: StatsResponse = response.json().await.map_err(FetchError::Decode)?;

        debug!("response from {} -> {:?}", url, stats);

        Ok(stats)
    }
}
