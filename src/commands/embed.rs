//! Embed formatting of player statistics.
//!
//! This module turns a [`StatsResponse`] into a [`DisplayDocument`], the
//! platform-independent description of the embed sent back to the invoker.

use crate::halo::{StatValue, StatsResponse};

/// Color of an embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedColor {
    Grey,
}

impl EmbedColor {
    /// RGB value of the color.
    pub fn rgb(&self) -> u32 {
        match self {
            EmbedColor::Grey => 0x95A5A6,
        }
    }
}

/// A named block of text inside a [`DisplayDocument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section title
    pub name: String,
    /// Multi-line section text
    pub body: String,
}

/// Structured rich-text message: a title, a color and ordered sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDocument {
    pub title: String,
    pub color: EmbedColor,
    pub sections: Vec<Section>,
}

/// Formats the statistics of a player as a [`DisplayDocument`].
///
/// The document always has four sections, in this order: `General Statistics`,
/// `Specifics`, `Matches` and `Shots`. Each line of a section reads
/// `• Label: **value**`.
///
/// # Arguments
///
/// * `player` - The player identifier as typed by the invoker, used in the title
/// * `stats` - The statistics returned by the Halo API
///
/// # Examples
///
/// ```no_run
/// # use halostat::commands::embed::format_stats;
/// let document = format_stats("Ben", &stats);
/// assert_eq!(document.title, "Statistics | Ben");
/// assert_eq!(document.sections.len(), 4);
/// ```
pub fn format_stats(player: &str, stats: &StatsResponse) -> DisplayDocument {
    let general = &stats.data.general;
    let specifics = &general.specifics;
    let shots = &general.shots;

    DisplayDocument {
        title: format!("Statistics | {}", player),
        color: EmbedColor::Grey,
        sections: vec![
            format_section(
                "General Statistics",
                &[
                    ("Username", &general.username),
                    ("Kill-Death Ratio", &general.kd_ratio),
                    ("Win Percentage", &general.win_percentage),
                    ("Average KDA", &general.average_kda),
                    ("Average Damage", &general.average_damage),
                ],
            ),
            format_section(
                "Specifics",
                &[
                    ("Kills", &specifics.kills),
                    ("Assists", &specifics.assists),
                    ("Deaths", &specifics.deaths),
                    ("Headshots", &specifics.headshots),
                    ("Damage Dealt", &specifics.damage_dealt),
                    ("Damage Taken", &specifics.damage_taken),
                    ("Betrayals", &specifics.betrayals),
                    ("Suicides", &specifics.suicides),
                    ("Score", &specifics.score),
                ],
            ),
            format_section(
                "Matches",
                &[
                    ("Matches Won", &specifics.matches_won),
                    ("Matches Lost", &specifics.matches_lost),
                    ("Matches Unfinished", &specifics.matches_not_finished),
                ],
            ),
            format_section(
                "Shots",
                &[
                    ("Shot Accuracy", &shots.shot_accuracy),
                    ("Shots Fired", &shots.shots_fired),
                    ("Shots Hit", &shots.shots_hit),
                    ("Headshot Accuracy", &shots.headshot_accuracy),
                    ("Headshot Hits", &shots.headshot_hits),
                ],
            ),
        ],
    }
}

fn format_section(name: &str, lines: &[(&str, &StatValue)]) -> Section {
    let body = lines
        .iter()
        .map(|(label, value)| format!("• {}: **{}**", label, value))
        .collect::<Vec<String>>()
        .join("\n");

    Section {
        name: name.to_owned(),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_stats() -> StatsResponse {
        serde_json::from_value(json!({
            "data": {
                "general": {
                    "username": "Ben Petrillo",
                    "kdRatio": 1.12,
                    "winPercentage": 53.4,
                    "averageKDA": 4.2,
                    "averageDamage": 3120,
                    "specifics": {
                        "kills": 1001, "assists": 402, "deaths": 903,
                        "headshots": 354, "damageDealt": 250005,
                        "damageTaken": 240006, "betrayals": 7, "suicides": 8,
                        "score": 500009, "matchesWon": 120, "matchesLost": 111,
                        "matchesNotFinished": 12
                    },
                    "shots": {
                        "shotAccuracy": 48.9, "shotsFired": 90013,
                        "shotsHit": 44014, "headshotAccuracy": 35.5,
                        "headshotHits": 315
                    }
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_format_stats_title_and_color() {
        let document = format_stats("Ben", &create_test_stats());
        assert_eq!(document.title, "Statistics | Ben");
        assert_eq!(document.color, EmbedColor::Grey);
        assert_eq!(document.color.rgb(), 0x95A5A6);
    }

    #[test]
    fn test_format_stats_sections() {
        let document = format_stats("Ben", &create_test_stats());

        let names: Vec<&str> = document.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["General Statistics", "Specifics", "Matches", "Shots"]
        );

        assert_eq!(
            document.sections[0].body,
            "• Username: **Ben Petrillo**\n\
             • Kill-Death Ratio: **1.12**\n\
             • Win Percentage: **53.4**\n\
             • Average KDA: **4.2**\n\
             • Average Damage: **3120**"
        );
        assert_eq!(
            document.sections[1].body,
            "• Kills: **1001**\n\
             • Assists: **402**\n\
             • Deaths: **903**\n\
             • Headshots: **354**\n\
             • Damage Dealt: **250005**\n\
             • Damage Taken: **240006**\n\
             • Betrayals: **7**\n\
             • Suicides: **8**\n\
             • Score: **500009**"
        );
        assert_eq!(
            document.sections[2].body,
            "• Matches Won: **120**\n\
             • Matches Lost: **111**\n\
             • Matches Unfinished: **12**"
        );
        assert_eq!(
            document.sections[3].body,
            "• Shot Accuracy: **48.9**\n\
             • Shots Fired: **90013**\n\
             • Shots Hit: **44014**\n\
             • Headshot Accuracy: **35.5**\n\
             • Headshot Hits: **315**"
        );
    }

    #[test]
    fn test_format_stats_every_value_appears_once() {
        let document = format_stats("Ben", &create_test_stats());
        let text = document
            .sections
            .iter()
            .map(|s| s.body.clone())
            .collect::<Vec<String>>()
            .join("\n");

        for value in [
            "Ben Petrillo", "1.12", "53.4", "4.2", "3120", "1001", "402", "903", "354",
            "250005", "240006", "7", "8", "500009", "120", "111", "12", "48.9", "90013",
            "44014", "35.5", "315",
        ] {
            assert_eq!(
                text.matches(&format!("**{}**", value)).count(),
                1,
                "{} should appear once",
                value
            );
        }
        assert_eq!(text.lines().count(), 22);
    }

    #[test]
    fn test_format_stats_missing_values() {
        let stats: StatsResponse = serde_json::from_value(json!({
            "data": {"general": {"username": "Ben", "specifics": {}, "shots": {}}}
        }))
        .unwrap();

        let document = format_stats("Ben", &stats);
        assert_eq!(document.sections.len(), 4);
        assert!(document.sections[0].body.contains("• Kill-Death Ratio: **N/A**"));
        assert!(document.sections[3].body.contains("• Headshot Hits: **N/A**"));
    }

    #[test]
    fn test_format_stats_is_deterministic() {
        let stats = create_test_stats();
        assert_eq!(format_stats("Ben", &stats), format_stats("Ben", &stats));
    }
}
