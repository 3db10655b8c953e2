use chrono::{DateTime, Local};

use crate::cricket::{InningsScore, MatchRecord, TeamEntry};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// First match whose status text mentions "live", in upstream list order.
pub fn find_live(matches: &[MatchRecord]) -> Option<&MatchRecord> {
    matches.iter().find(|m| {
        m.status
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains("live"))
    })
}

/// Display label for one team slot.
///
/// The feed's team lists have an unconfirmed shape (the endpoint path and the
/// payload it returns disagree upstream), so the label keeps the placeholder
/// instead of reading a name out of the list.
/// TODO: use the first entry's `name` once the upstream contract is confirmed.
fn team_label(_team: &[TeamEntry], placeholder: &str) -> String {
    placeholder.to_string()
}

/// Render the scorecard as `<inning>: <runs>/<wickets> (<overs> ov)` segments
/// joined with " | ". An empty scorecard renders as "No score yet".
pub fn format_scores(scores: &[InningsScore]) -> String {
    if scores.is_empty() {
        return "No score yet".to_string();
    }

    scores
        .iter()
        .map(|s| format!("{}: {}/{} ({} ov)", s.inning, s.runs, s.wickets, s.overs))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Summary block for the first live match, or None when nothing is live.
pub fn live_summary(matches: &[MatchRecord], now: DateTime<Local>) -> Option<String> {
    let record = find_live(matches)?;

    let team1 = team_label(&record.team_1, "Team1");
    let team2 = team_label(&record.team_2, "Team2");
    let match_type = record
        .match_type
        .as_deref()
        .unwrap_or("Unknown Type")
        .to_uppercase();
    let status = record.status.as_deref().unwrap_or("Status not available");
    let scores = format_scores(&record.score);

    Some(format!(
        "**{} vs {}**\nType: {}\nScores: {}\nStatus: {}\nTime: {}",
        team1,
        team2,
        match_type,
        scores,
        status,
        now.format(TIMESTAMP_FORMAT)
    ))
}

pub fn fallback_message(now: DateTime<Local>) -> String {
    format!(
        "No live matches at the moment. Checked at {}.",
        now.format(TIMESTAMP_FORMAT)
    )
}
