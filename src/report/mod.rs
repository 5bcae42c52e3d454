//! Human-readable reports synthesized from fetched metadata.
//!
//! Everything in here is pure formatting over already-fetched data.

mod channel;
mod comments;
mod competitor;
mod format;
mod trends;
mod video;

pub use channel::{channel_report, ChannelAnalysis, ChannelMetric};
pub use comments::comments_report;
pub use competitor::competitor_report;
pub use format::{
    excerpt, format_date, format_duration, format_number, format_polarity, percent, topic_name,
    truncate,
};
pub use trends::{keywords_report, search_report, trend_report};
pub use video::video_report;

use std::fmt;

const TITLE_RULE: usize = 70;
const SECTION_RULE: usize = 30;
const KEY_WIDTH: usize = 16;

/// Ordered display lines. Built once with [`ReportBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

pub struct ReportBuilder {
    lines: Vec<String>,
}

impl ReportBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            lines: vec![String::new(), title.to_string(), "=".repeat(TITLE_RULE)],
        }
    }

    pub fn section(mut self, name: &str) -> Self {
        self.lines.push(String::new());
        self.lines.push(name.to_string());
        self.lines.push("─".repeat(SECTION_RULE));
        self
    }

    /// Aligned `Key: value` line.
    pub fn kv(mut self, key: &str, value: impl fmt::Display) -> Self {
        let key = format!("{}:", key);
        self.lines.push(format!("{:<width$} {}", key, value, width = KEY_WIDTH));
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn item(mut self, text: impl fmt::Display) -> Self {
        self.lines.push(format!("• {}", text));
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    pub fn build(self) -> Report {
        Report { lines: self.lines }
    }
}

/// Up to `n` items with the highest key, ties in input order.
pub fn select_top<T, F>(items: &[T], n: usize, key: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| key(b).total_cmp(&key(a)));
    ranked.truncate(n);
    ranked
}

/// Up to `n` items with the lowest key, ties in input order.
pub fn select_bottom<T, F>(items: &[T], n: usize, key: F) -> Vec<&T>
where
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| key(a).total_cmp(&key(b)));
    ranked.truncate(n);
    ranked
}
