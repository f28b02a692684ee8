//! Halo Infinite statistics API client.
//!
//! This module provides the HTTP integration with the Halo Infinite statistics
//! service, fetching a player's general statistics on demand.
//!
//! # Modules
//!
//! - `requester` - HTTP client for the `/v3/stats/{player}` endpoint
//! - `response_structs` - Data structures for the JSON responses
//!
//! # Examples
//!
//! ```no_run
//! use halostat::halo::{HaloRequester, Requester};
//!
//! # async fn example() -> Result<(), anyhow::Error> {
//! let requester = HaloRequester::new("https://haloinfinite.benpetrillo.dev", None)?;
//! let stats = requester.get_stats("Ben Petrillo").await?;
//! println!("K/D: {}", stats.data.general.kd_ratio);
//! # Ok(())
//! # }
//! ```

mod requester;
mod response_structs;

use std::{error, fmt};

pub use crate::halo::requester::{HaloRequester, Requester};
#[cfg(test)]
pub use crate::halo::requester::MockRequester;
pub use crate::halo::response_structs::{StatValue, StatsResponse};

/// Errors that can occur while fetching statistics from the Halo API.
///
/// Every variant keeps the original cause so it can be logged. None of them is
/// shown to the end user, who only sees a generic message naming the player.
#[derive(Debug)]
pub enum FetchError {
    /// The player name could not be turned into a request URL.
    InvalidUrl,
    /// The request could not be sent or no response was received.
    Transport(reqwest::Error),
    /// The server answered with a non-success status code.
    Status(reqwest::StatusCode),
    /// The response body does not match the expected statistics shape.
    Decode(reqwest::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::InvalidUrl => write!(f, "invalid stats url"),
            FetchError::Transport(e) => write!(f, "request failed: {}", e),
            FetchError::Status(status) => write!(f, "unexpected status {}", status),
            FetchError::Decode(e) => write!(f, "malformed stats body: {}", e),
        }
    }
}

impl error::Error for FetchError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            FetchError::Transport(e) | FetchError::Decode(e) => Some(e),
            FetchError::InvalidUrl | FetchError::Status(_) => None,
        }
    }
}
