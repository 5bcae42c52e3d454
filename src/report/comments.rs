//! Comment sentiment report.

use super::format::{excerpt, format_date, format_number, format_polarity, percent};
use super::{Report, ReportBuilder};
use crate::sentiment::SentimentSummary;
use crate::youtube::{CommentRecord, VideoSnapshot};

const EXCERPT_LIMIT: usize = 100;

fn push_comments(mut report: ReportBuilder, comments: &[CommentRecord]) -> ReportBuilder {
    for comment in comments {
        report = report
            .line(format!("  • {}", excerpt(&comment.text, EXCERPT_LIMIT)))
            .line(format!(
                "    {} | {} likes | {}",
                comment.author,
                comment.like_count,
                format_polarity(comment.polarity)
            ));
    }
    report
}

pub fn comments_report(video: &VideoSnapshot, summary: &SentimentSummary) -> Report {
    let views = video
        .view_count
        .map(format_number)
        .unwrap_or_else(|| "N/A".to_string());

    let report = ReportBuilder::new("COMMENT SENTIMENT ANALYSIS")
        .section("VIDEO DETAILS")
        .kv("Title", &video.title)
        .kv("Channel", &video.channel_title)
        .kv("Published", format_date(&video.published_at))
        .kv("Views", views);

    let Some(mean) = summary.mean else {
        let note = match video.comment_count {
            Some(n) if n > 0 => format!(
                "Video reports {} comments but none could be retrieved",
                format_number(n)
            ),
            _ => "No comments found for this video".to_string(),
        };
        return report.blank().line(note).build();
    };

    let total = summary.total();

    let mut report = report
        .section("SENTIMENT SUMMARY")
        .kv("Overall", format_polarity(mean))
        .kv("Analyzed", format!("{} comments", total))
        .section("TOP COMMENTS BY SENTIMENT")
        .blank()
        .line("Most Positive Comments:");
    report = push_comments(report, &summary.top_positive);
    report = report.blank().line("Most Critical Comments:");
    report = push_comments(report, &summary.top_negative);

    report
        .section("SENTIMENT DISTRIBUTION")
        .kv(
            "Positive",
            format!("{} ({})", summary.positive, percent(summary.positive, total)),
        )
        .kv(
            "Neutral",
            format!("{} ({})", summary.neutral, percent(summary.neutral, total)),
        )
        .kv(
            "Negative",
            format!("{} ({})", summary.negative, percent(summary.negative, total)),
        )
        .build()
}
