//! Video performance report.

use super::format::{format_date, format_duration, format_number, truncate};
use super::{Report, ReportBuilder};
use crate::youtube::VideoSnapshot;

const DESCRIPTION_LIMIT: usize = 200;
const TAG_LIMIT: usize = 10;

pub fn video_report(video: &VideoSnapshot) -> Report {
    let count = |c: Option<u64>| c.map(format_number).unwrap_or_else(|| "N/A".to_string());
    let duration = video
        .duration
        .as_deref()
        .map(format_duration)
        .unwrap_or_else(|| "Unknown".to_string());

    let mut report = ReportBuilder::new("VIDEO PERFORMANCE ANALYSIS")
        .blank()
        .kv("Title", &video.title)
        .kv("Channel", &video.channel_title)
        .kv("Published", format_date(&video.published_at))
        .kv("Duration", duration)
        .kv("URL", video.url())
        .section("PERFORMANCE METRICS");

    report = if video.has_statistics() {
        report
            .kv("Views", count(video.view_count))
            .kv("Likes", count(video.like_count))
            .kv("Comments", count(video.comment_count))
    } else {
        report.line("Statistics not available")
    };

    if let (Some(views), Some(likes)) = (video.view_count, video.like_count) {
        if views > 0 {
            report = report.kv(
                "Like Rate",
                format!("{:.2}%", likes as f64 / views as f64 * 100.0),
            );
        }
    }

    report = report.section("DESCRIPTION").line(if video.description.trim().is_empty() {
        "No description available".to_string()
    } else {
        truncate(&video.description, DESCRIPTION_LIMIT)
    });

    if !video.tags.is_empty() {
        let tags: Vec<&str> = video.tags.iter().take(TAG_LIMIT).map(String::as_str).collect();
        report = report.section("TAGS").line(tags.join(", "));
    }

    report.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> VideoSnapshot {
        VideoSnapshot {
            id: "dQw4w9WgXcQ".to_string(),
            title: "Never Gonna Give You Up".to_string(),
            channel_title: "Rick Astley".to_string(),
            published_at: "2009-10-25T06:57:33Z".to_string(),
            duration: Some("PT3M33S".to_string()),
            view_count: Some(1_500_000_000),
            like_count: Some(15_000_000),
            comment_count: Some(999),
            description: "Official video".to_string(),
            tags: (1..=12).map(|i| format!("tag{}", i)).collect(),
        }
    }

    #[test]
    fn test_video_report() {
        let report = video_report(&video());

        assert!(report.contains("Published:       October 25, 2009"));
        assert!(report.contains("Duration:        03:33"));
        assert!(report.contains("Views:           1500.0M"));
        assert!(report.contains("Likes:           15.0M"));
        assert!(report.contains("Comments:        999"));
        assert!(report.contains("Like Rate:       1.00%"));
        assert!(report.contains("Official video"));
        assert!(!report.contains("Official video..."));
        assert!(report.contains("tag10"));
        assert!(!report.contains("tag11"));
    }

    #[test]
    fn test_withheld_statistics() {
        let mut video = video();
        video.view_count = None;
        video.like_count = None;
        video.comment_count = None;
        video.duration = None;
        video.tags.clear();

        let report = video_report(&video);
        assert!(report.contains("Statistics not available"));
        assert!(report.contains("Duration:        Unknown"));
        assert!(!report.contains("Like Rate"));
        assert!(!report.contains("TAGS"));
    }
}
