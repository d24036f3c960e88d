//! Report rendering
//!
//! Turns generated records into the text printed on stdout: a pretty JSON
//! array framed by banner lines. Nothing here writes anywhere; the CLI
//! decides where the text goes.

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::token::TokenRecord;

pub const SEPARATOR: &str = "=============================================";
pub const RUN_LABEL: &str = "  Executing Mock Token Data Generator: tokenmock";
pub const DATA_HEADER: &str = "--- Generated Mock Token Data (JSON) ---";
pub const COMPLETE_LABEL: &str = "  Generation complete.";

/// Serialize records as a JSON array with 2-space indentation
pub fn render(records: &[TokenRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Opening banner, stamped with `started_at` in ctime layout
pub fn opening_banner(started_at: &DateTime<Local>) -> String {
    format!(
        "{SEPARATOR}\n{RUN_LABEL}\n  Timestamp: {}\n{SEPARATOR}",
        format_ctime(started_at)
    )
}

pub fn closing_banner() -> String {
    format!("{SEPARATOR}\n{COMPLETE_LABEL}\n{SEPARATOR}")
}

/// Full framed report: banner, header, JSON array, closing banner
pub fn render_report(records: &[TokenRecord], started_at: &DateTime<Local>) -> Result<String> {
    let json = render(records)?;
    Ok(format!(
        "{}\n\n{DATA_HEADER}\n\n{json}\n\n{}\n",
        opening_banner(started_at),
        closing_banner()
    ))
}

/// Pull the JSON payload back out of a framed report
///
/// Returns the text between the data header and the next blank line.
pub fn extract_payload(report: &str) -> Option<String> {
    let mut lines = report.lines().skip_while(|line| *line != DATA_HEADER);
    lines.next()?;

    let payload: Vec<&str> = lines
        .skip_while(|line| line.trim().is_empty())
        .take_while(|line| !line.trim().is_empty())
        .collect();

    if payload.is_empty() {
        None
    } else {
        Some(payload.join("\n"))
    }
}

// e.g. "Fri Oct 16 09:05:01 2026"
fn format_ctime(at: &DateTime<Local>) -> String {
    at.format("%a %b %e %H:%M:%S %Y").to_string()
}
