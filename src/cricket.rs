use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::config::CricketConfig;

/// One innings line of a match's scorecard.
#[derive(Debug, Clone, Deserialize)]
pub struct InningsScore {
    pub inning: String,
    #[serde(rename = "r")]
    pub runs: u32,
    #[serde(rename = "w")]
    pub wickets: u32,
    #[serde(rename = "o")]
    pub overs: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    // Parsed but not consulted yet; see summary::team_label.
    #[allow(dead_code)]
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "team-1", default)]
    pub team_1: Vec<TeamEntry>,
    #[serde(rename = "team-2", default)]
    pub team_2: Vec<TeamEntry>,
    #[serde(rename = "matchType", default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub score: Vec<InningsScore>,
}

#[derive(Debug, Deserialize)]
struct ScoresResponse {
    #[serde(default)]
    data: Vec<MatchRecord>,
}

pub struct CricketClient {
    client: reqwest::Client,
    config: CricketConfig,
}

impl CricketClient {
    pub fn new(config: CricketConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            config,
        }
    }

    /// Fetch the current match list. A missing or empty `data` array is an
    /// empty vec, not an error.
    pub async fn fetch_matches(&self) -> Result<Vec<MatchRecord>> {
        debug!("Fetching match list from {}", self.config.base_url);

        let response = self
            .client
            .get(&self.config.base_url)
            // The upstream expects the trailing empty `offset` parameter.
            .query(&[("apikey", self.config.api_key.as_str()), ("offset", "")])
            .send()
            .await
            .context("Failed to send request to cricket API")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            anyhow::bail!("Cricket API error ({}): {}", status, error_body);
        }

        let scores: ScoresResponse = response
            .json()
            .await
            .context("Failed to parse cricket API response")?;

        Ok(scores.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_data_key_parses_as_empty() {
        let parsed: ScoresResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
        assert!(parsed.data.is_empty());
    }

    #[test]
    fn test_match_record_parses_hyphenated_team_keys() {
        let parsed: MatchRecord = serde_json::from_str(
            r#"{"status":"Live","team-1":[{"name":"India"}],"team-2":[{"name":"Australia"}],
                "matchType":"odi","score":[{"inning":"India","r":250,"w":5,"o":40.0}]}"#,
        )
        .unwrap();

        assert_eq!(parsed.status.as_deref(), Some("Live"));
        assert_eq!(parsed.team_1[0].name.as_deref(), Some("India"));
        assert_eq!(parsed.team_2[0].name.as_deref(), Some("Australia"));
        assert_eq!(parsed.match_type.as_deref(), Some("odi"));
        assert_eq!(parsed.score[0].runs, 250);
        assert_eq!(parsed.score[0].wickets, 5);
    }

    #[test]
    fn test_record_without_teams_or_score_still_parses() {
        let parsed: MatchRecord =
            serde_json::from_str(r#"{"status":"Match not started"}"#).unwrap();

        assert!(parsed.team_1.is_empty());
        assert!(parsed.team_2.is_empty());
        assert!(parsed.score.is_empty());
        assert_eq!(parsed.match_type, None);
    }

    #[test]
    fn test_score_entry_missing_runs_fails_to_parse() {
        let result: Result<InningsScore, _> =
            serde_json::from_str(r#"{"inning":"India","w":5,"o":40.0}"#);
        assert!(result.is_err());
    }
}
