//! Game status report rendering
//!
//! The report is the only thing the agent sees of the game, so the layout is
//! fixed: banner, `# Game Details`, status-specific lines, an optional
//! `# Conversation Summary` for running games, closing banner.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{
    GAME_DETAILS_HEADING, NATIVE_SYMBOL, REPORT_FOOTER, REPORT_HEADER, SUMMARY_HEADING,
};
use crate::types::{ContractSnapshot, GameStatus};

static STATUS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Status: (.+)$").expect("valid status line regex"));

/// Render the provider text for `snapshot`.
///
/// `summary` is only used while the game is active.
#[must_use]
pub fn render_report(snapshot: &ContractSnapshot, summary: &str) -> String {
    let status = snapshot.status();

    let mut result = format!("{REPORT_HEADER}\n{GAME_DETAILS_HEADING}\n");
    match status {
        GameStatus::Abandoned => {
            result.push_str(&format!(
                "\nStatus: {}\nPrize Pool: {} {NATIVE_SYMBOL}\nLast Player: {}",
                status.label(),
                snapshot.prize_pool,
                snapshot.last_player_address
            ));
        }
        GameStatus::Ended => {
            result.push_str(&format!(
                "\nStatus: {}\nWinner: {}\nPrize Pool: {} {NATIVE_SYMBOL}",
                status.label(),
                snapshot.winner_address,
                snapshot.prize_pool
            ));
        }
        GameStatus::Active => {
            result.push_str(&format!(
                "\nStatus: {}\nPrize Pool: {} {NATIVE_SYMBOL}\nCurrent Fee: {} {NATIVE_SYMBOL}\n\n{SUMMARY_HEADING}\n{summary}",
                status.label(),
                snapshot.prize_pool,
                snapshot.current_fee
            ));
        }
    }
    result.push('\n');
    result.push_str(REPORT_FOOTER);

    result
}

/// Sections recovered from a rendered report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReport {
    pub status: GameStatus,
    pub summary: Option<String>,
}

/// Parse a report produced by [`render_report`].
///
/// Returns `None` when a banner, the details heading or the status line is
/// missing.
#[must_use]
pub fn parse_report(text: &str) -> Option<ParsedReport> {
    let body = text
        .strip_prefix(REPORT_HEADER)?
        .strip_prefix('\n')?
        .strip_suffix(REPORT_FOOTER)?
        .strip_suffix('\n')?;
    let body = body.strip_prefix(GAME_DETAILS_HEADING)?;

    let (details, summary) = match body.split_once(&format!("\n{SUMMARY_HEADING}\n")) {
        Some((details, summary)) => (details, Some(summary.to_string())),
        None => (body, None),
    };

    let label = STATUS_LINE.captures(details)?.get(1)?.as_str();
    let status = GameStatus::from_label(label)?;

    Some(ParsedReport { status, summary })
}
