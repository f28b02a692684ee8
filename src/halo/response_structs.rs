//! Response structures for the Halo statistics endpoint.
//!
//! The endpoint wraps the statistics in a `data.general` envelope. The envelope
//! and its `specifics`/`shots` groups are required; leaf values are kept as raw
//! JSON scalars since they are only ever displayed.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Body of `/v3/stats/{player}`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StatsResponse {
    /// Response payload.
    pub data: StatsData,
}

/// Payload of a statistics response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StatsData {
    /// Career statistics across all playlists.
    pub general: GeneralStats,
}

/// General statistics of a player.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneralStats {
    /// Gamertag as known by the service.
    #[serde(default)]
    pub username: StatValue,
    #[serde(default)]
    pub kd_ratio: StatValue,
    #[serde(default)]
    pub win_percentage: StatValue,
    #[serde(default, rename = "averageKDA")]
    pub average_kda: StatValue,
    #[serde(default)]
    pub average_damage: StatValue,
    /// Detailed combat and match counters.
    pub specifics: SpecificStats,
    /// Shooting statistics.
    pub shots: ShotStats,
}

/// Combat and match counters of a player.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecificStats {
    pub kills: StatValue,
    pub assists: StatValue,
    pub deaths: StatValue,
    pub headshots: StatValue,
    pub damage_dealt: StatValue,
    pub damage_taken: StatValue,
    pub betrayals: StatValue,
    pub suicides: StatValue,
    pub score: StatValue,
    pub matches_won: StatValue,
    pub matches_lost: StatValue,
    pub matches_not_finished: StatValue,
}

/// Shooting statistics of a player.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ShotStats {
    pub shot_accuracy: StatValue,
    pub shots_fired: StatValue,
    pub shots_hit: StatValue,
    pub headshot_accuracy: StatValue,
    pub headshot_hits: StatValue,
}

/// A single statistic as sent by the server.
///
/// The value is not validated: strings are displayed verbatim, numbers and
/// booleans in their JSON form, and a missing or `null` value as `N/A`.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct StatValue(pub Value);

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.0 {
            Value::Null => write!(f, "N/A"),
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

impl From<Value> for StatValue {
    fn from(value: Value) -> Self {
        StatValue(value)
    }
}
