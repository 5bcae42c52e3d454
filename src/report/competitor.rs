//! Competitor channel report.

use super::format::{format_date, format_number, truncate};
use super::{select_top, Report, ReportBuilder};
use crate::youtube::{ChannelSnapshot, VideoSnapshot};

const DESCRIPTION_LIMIT: usize = 200;
const MOST_VIEWED: usize = 3;

pub fn competitor_report(channel: &ChannelSnapshot, videos: &[VideoSnapshot]) -> Report {
    let subscribers = channel
        .subscriber_count
        .map(format_number)
        .unwrap_or_else(|| "Hidden".to_string());

    let mut report = ReportBuilder::new("COMPETITOR ANALYSIS")
        .section("CHANNEL")
        .kv("Channel", &channel.title)
        .kv("Subscribers", subscribers)
        .kv("Total Videos", format_number(channel.video_count))
        .kv("Total Views", format_number(channel.view_count))
        .kv("Avg Views/Video", format_number(channel.average_views()))
        .kv("URL", channel.url())
        .blank()
        .line("Description:")
        .line(truncate(&channel.description, DESCRIPTION_LIMIT));

    if videos.is_empty() {
        return report.blank().line("No recent uploads found").build();
    }

    report = report.section("RECENT VIDEOS");
    for video in videos {
        let views = video
            .view_count
            .map(|v| format!("{} views", format_number(v)))
            .unwrap_or_else(|| "views hidden".to_string());
        report = report
            .item(&video.title)
            .line(format!("  Published: {} | {}", format_date(&video.published_at), views));
    }

    let with_views: Vec<&VideoSnapshot> = videos.iter().filter(|v| v.view_count.is_some()).collect();
    if !with_views.is_empty() {
        report = report.section("MOST VIEWED");
        let ranked = select_top(&with_views, MOST_VIEWED, |v| v.view_count.unwrap_or(0) as f64);
        for (i, video) in ranked.into_iter().enumerate() {
            report = report.line(format!(
                "{}. {} ({} views)",
                i + 1,
                video.title,
                format_number(video.view_count.unwrap_or(0))
            ));
        }

        let total: u64 = with_views.iter().filter_map(|v| v.view_count).sum();
        report = report.blank().kv(
            "Avg Recent Views",
            format_number(total / with_views.len() as u64),
        );
    }

    report.build()
}
