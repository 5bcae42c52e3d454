//! Display formatting for counts, dates, durations and text excerpts.

use crate::sentiment::SentimentBucket;
use chrono::{DateTime, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("Invalid regex")
});

/// Compact count: `999`, `1.0K`, `1.5M`.
pub fn format_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// `2023-03-15T10:00:00Z` -> `March 15, 2023`. Unparseable input is returned as-is.
pub fn format_date(timestamp: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%SZ") {
        return dt.format("%B %d, %Y").to_string();
    }
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => dt.format("%B %d, %Y").to_string(),
        Err(_) => timestamp.to_string(),
    }
}

/// ISO-8601 `PT#H#M#S` -> `HH:MM:SS` (with hours) or `MM:SS`.
///
/// Input without a `PT` designator yields `00:00`.
pub fn format_duration(duration: &str) -> String {
    let Some(caps) = ISO_DURATION.captures(duration) else {
        return "00:00".to_string();
    };

    let part = |i: usize| -> u64 {
        caps.get(i)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0)
    };
    let (minutes, seconds) = (part(2), part(3));

    if caps.get(1).is_some() {
        format!("{:02}:{:02}:{:02}", part(1), minutes, seconds)
    } else {
        format!("{:02}:{:02}", minutes, seconds)
    }
}

/// Cut to `max` characters, appending `...` only when something was cut.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Single-line truncated excerpt.
pub fn excerpt(text: &str, max: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&flat, max)
}

/// `Positive (0.40)`.
pub fn format_polarity(polarity: f64) -> String {
    format!("{} ({:.2})", SentimentBucket::from_polarity(polarity), polarity)
}

/// Readable name of a topic category URL, e.g. `.../wiki/Video_game_culture`.
pub fn topic_name(url: &str) -> String {
    url.rsplit('/').next().unwrap_or(url).replace('_', " ")
}

pub fn percent(part: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part as f64 / total as f64 * 100.0)
}
