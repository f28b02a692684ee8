//! Stats command handler.
//!
//! Fetches the statistics of a player from the Halo API and formats them as an
//! embed. Any fetch failure degrades to a plain-text message naming the player.

use log::{debug, warn};

use crate::{
    commands::{Reply, embed::format_stats, text_response::format_fetch_error},
    halo::Requester,
};

/// Fetches the statistics of `player` and builds the reply.
///
/// One request is issued per call, the response is never cached.
pub async fn handle_stats<R: Requester + ?Sized>(requester: &R, player: &str) -> Reply {
    debug!("handling stats command for {}", player);

    match requester.get_stats(player).await {
        Ok(stats) => Reply::Embed(format_stats(player, &stats)),
        Err(e) => {
            warn!("failed to fetch stats of {}: {}", player, e);
            Reply::Text(format_fetch_error(player))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::halo::{FetchError, MockRequester, StatsResponse};
    use serde_json::json;

    fn create_test_stats() -> StatsResponse {
        serde_json::from_value(json!({
            "data": {"general": {
                "username": "Ben", "kdRatio": 1.5,
                "specifics": {"kills": 10}, "shots": {"shotsFired": 100}
            }}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_handle_stats_success() {
        let mut mock_requester = MockRequester::new();
        mock_requester
            .expect_get_stats()
            .with(mockall::predicate::eq("Ben"))
            .times(1)
            .returning(|_| Ok(create_test_stats()));

        let reply = handle_stats(&mock_requester, "Ben").await;
        assert_eq!(
            reply,
            Reply::Embed(format_stats("Ben", &create_test_stats()))
        );
    }

    #[tokio::test]
    async fn test_handle_stats_failure() {
        let mut mock_requester = MockRequester::new();
        mock_requester
            .expect_get_stats()
            .times(1)
            .returning(|_| Err(FetchError::Status(reqwest::StatusCode::NOT_FOUND)));

        let reply = handle_stats(&mock_requester, "X").await;
        assert_eq!(
            reply,
            Reply::Text("Unable to fetch statistics for X.".to_string())
        );
    }
}
