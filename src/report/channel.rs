//! Channel analysis report.

use super::format::{excerpt, format_date, format_number, topic_name, truncate};
use super::{ReportBuilder, Report};
use crate::youtube::{ChannelSnapshot, PlaylistSummary, VideoSnapshot};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DESCRIPTION_LIMIT: usize = 300;
const EXCERPT_LIMIT: usize = 100;

/// Which part of a channel the report focuses on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelMetric {
    Statistics,
    #[default]
    Videos,
    Playlists,
}

impl FromStr for ChannelMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "statistics" | "stats" => Ok(ChannelMetric::Statistics),
            "videos" => Ok(ChannelMetric::Videos),
            "playlists" => Ok(ChannelMetric::Playlists),
            _ => Err(format!(
                "Unknown metric: {}. Use statistics, videos, or playlists.",
                s
            )),
        }
    }
}

impl fmt::Display for ChannelMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelMetric::Statistics => write!(f, "statistics"),
            ChannelMetric::Videos => write!(f, "videos"),
            ChannelMetric::Playlists => write!(f, "playlists"),
        }
    }
}

/// Everything fetched for one channel report.
#[derive(Debug, Clone)]
pub struct ChannelAnalysis {
    pub channel: ChannelSnapshot,
    pub metric: ChannelMetric,
    /// Newest first. Only filled for [`ChannelMetric::Videos`].
    pub recent_videos: Vec<VideoSnapshot>,
    pub playlists: Vec<PlaylistSummary>,
}

fn or_unspecified(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("Not specified")
}

fn count_or_na(count: Option<u64>) -> String {
    count.map(format_number).unwrap_or_else(|| "N/A".to_string())
}

pub fn channel_report(analysis: &ChannelAnalysis) -> Report {
    let channel = &analysis.channel;

    let subscribers = channel
        .subscriber_count
        .map(format_number)
        .unwrap_or_else(|| "Hidden".to_string());

    let description = if channel.description.trim().is_empty() {
        "No description available".to_string()
    } else {
        truncate(&channel.description, DESCRIPTION_LIMIT)
    };

    let mut report = ReportBuilder::new("YOUTUBE CHANNEL ANALYSIS REPORT")
        .section("CHANNEL OVERVIEW")
        .kv("Channel Name", &channel.title)
        .kv("Created", format_date(&channel.published_at))
        .kv("Country", or_unspecified(channel.country.as_deref()))
        .kv("Language", or_unspecified(channel.language.as_deref()))
        .kv("Channel URL", channel.url())
        .section("PERFORMANCE METRICS")
        .kv("Subscribers", subscribers)
        .kv("Total Videos", format_number(channel.video_count))
        .kv("Total Views", format_number(channel.view_count))
        .kv("Avg Views/Video", format_number(channel.average_views()))
        .section("CHANNEL DESCRIPTION")
        .line(description)
        .section("CHANNEL TOPICS");

    if channel.topic_categories.is_empty() {
        report = report.line("No topic categories available");
    }
    for topic in &channel.topic_categories {
        report = report.item(topic_name(topic));
    }

    if analysis.metric == ChannelMetric::Videos && !analysis.recent_videos.is_empty() {
        report = report.section("RECENT VIDEOS");
        for (i, video) in analysis.recent_videos.iter().enumerate() {
            report = report
                .blank()
                .line(format!("{}. {}", i + 1, video.title))
                .line(format!("   Published: {}", format_date(&video.published_at)));

            report = if video.has_statistics() {
                report
                    .line(format!("   Views: {}", count_or_na(video.view_count)))
                    .line(format!("   Likes: {}", count_or_na(video.like_count)))
                    .line(format!("   Comments: {}", count_or_na(video.comment_count)))
            } else {
                report.line("   Statistics not available")
            };

            report = report
                .line(format!(
                    "   Description: {}",
                    excerpt(&video.description, EXCERPT_LIMIT)
                ))
                .line(format!("   Watch: {}", video.url()));
        }
    }

    if !analysis.playlists.is_empty() {
        if analysis.metric == ChannelMetric::Playlists {
            report = report.section("PLAYLISTS");
            for (i, playlist) in analysis.playlists.iter().enumerate() {
                report = report
                    .blank()
                    .line(format!("{}. {}", i + 1, playlist.title))
                    .line(format!(
                        "   Description: {}",
                        excerpt(&playlist.description, EXCERPT_LIMIT)
                    ))
                    .line(format!("   Videos: {}", playlist.item_count))
                    .line(format!("   URL: {}", playlist.url()));
            }
        } else {
            report = report.section("FEATURED PLAYLISTS");
            for playlist in &analysis.playlists {
                report = report
                    .item(&playlist.title)
                    .line(format!("  Videos: {}", playlist.item_count));
            }
        }
    }

    if !channel.social_links.is_empty() {
        report = report.section("SOCIAL LINKS");
        for link in &channel.social_links {
            report = report.item(link);
        }
    }

    report.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ChannelSnapshot {
        ChannelSnapshot {
            id: "UCbmCqH_WOUviDUsV83qloZQ".to_string(),
            title: "Agency Labs".to_string(),
            description: "x".repeat(400),
            published_at: "2019-06-01T12:00:00Z".to_string(),
            subscriber_count: Some(15_300),
            video_count: 120,
            view_count: 2_400_000,
            country: Some("US".to_string()),
            language: None,
            topic_categories: vec!["https://en.wikipedia.org/wiki/Artificial_intelligence".into()],
            social_links: vec![],
            uploads_playlist: None,
        }
    }

    fn video(id: &str, views: Option<u64>) -> VideoSnapshot {
        VideoSnapshot {
            id: id.to_string(),
            title: format!("Video {}", id),
            channel_title: "Agency Labs".to_string(),
            published_at: "2024-03-15T10:00:00Z".to_string(),
            duration: None,
            view_count: views,
            like_count: views.map(|v| v / 10),
            comment_count: None,
            description: "About\nthis video".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_metric_parsing() {
        assert_eq!("statistics".parse::<ChannelMetric>().unwrap(), ChannelMetric::Statistics);
        assert_eq!("Videos".parse::<ChannelMetric>().unwrap(), ChannelMetric::Videos);
        assert!("subscribers".parse::<ChannelMetric>().is_err());
        assert_eq!(ChannelMetric::default(), ChannelMetric::Videos);
        assert_eq!(ChannelMetric::Playlists.to_string(), "playlists");
    }

    #[test]
    fn test_statistics_report() {
        let report = channel_report(&ChannelAnalysis {
            channel: snapshot(),
            metric: ChannelMetric::Statistics,
            recent_videos: vec![],
            playlists: vec![],
        });

        assert!(report.contains("Created:         June 01, 2019"));
        assert!(report.contains("Subscribers:     15.3K"));
        assert!(report.contains("Avg Views/Video: 20.0K"));
        assert!(report.contains("Language:        Not specified"));
        assert!(report.contains(&format!("{}...", "x".repeat(300))));
        assert!(report.contains("• Artificial intelligence"));
        assert!(!report.contains("RECENT VIDEOS"));
        assert!(!report.contains("SOCIAL LINKS"));
    }

    #[test]
    fn test_videos_report_keeps_order_and_marks_missing_stats() {
        let report = channel_report(&ChannelAnalysis {
            channel: snapshot(),
            metric: ChannelMetric::Videos,
            recent_videos: vec![video("vid00000001", Some(1_500)), video("vid00000002", None)],
            playlists: vec![],
        });

        let text = report.render();
        let first = text.find("1. Video vid00000001").unwrap();
        let second = text.find("2. Video vid00000002").unwrap();
        assert!(first < second);
        assert!(report.contains("   Views: 1.5K"));
        assert!(report.contains("   Comments: N/A"));
        assert!(report.contains("   Statistics not available"));
        assert!(report.contains("   Description: About this video"));
    }

    #[test]
    fn test_hidden_subscribers() {
        let mut channel = snapshot();
        channel.subscriber_count = None;
        let report = channel_report(&ChannelAnalysis {
            channel,
            metric: ChannelMetric::Statistics,
            recent_videos: vec![],
            playlists: vec![],
        });
        assert!(report.contains("Subscribers:     Hidden"));
    }

    #[test]
    fn test_playlists_report() {
        let playlists = vec![PlaylistSummary {
            id: "PL1".to_string(),
            title: "Tutorials".to_string(),
            description: "Step by step".to_string(),
            item_count: 12,
        }];

        let detailed = channel_report(&ChannelAnalysis {
            channel: snapshot(),
            metric: ChannelMetric::Playlists,
            recent_videos: vec![],
            playlists: playlists.clone(),
        });
        assert!(detailed.contains("1. Tutorials"));
        assert!(detailed.contains("   URL: https://youtube.com/playlist?list=PL1"));

        let featured = channel_report(&ChannelAnalysis {
            channel: snapshot(),
            metric: ChannelMetric::Statistics,
            recent_videos: vec![],
            playlists,
        });
        assert!(featured.contains("FEATURED PLAYLISTS"));
        assert!(featured.contains("  Videos: 12"));
    }
}
