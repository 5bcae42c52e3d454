//! Trend and keyword reports built from web search results.

use super::format::{excerpt, truncate};
use super::{select_top, Report, ReportBuilder};
use crate::trends::SearchResponse;

const SOURCE_LIMIT: usize = 5;
const EXCERPT_LIMIT: usize = 160;
const ANSWER_LIMIT: usize = 600;

/// Search-backed trend report for one topic. `period` is e.g. `October 2026`.
pub fn trend_report(keyword: &str, period: &str, search: &SearchResponse) -> Report {
    let mut report = ReportBuilder::new("TREND ANALYSIS REPORT")
        .blank()
        .kv("Topic", keyword)
        .kv("Period", period)
        .kv("Sources", search.results.len());

    report = report.section("SUMMARY");
    report = match search.answer.as_deref().filter(|a| !a.trim().is_empty()) {
        Some(answer) => report.line(truncate(answer.trim(), ANSWER_LIMIT)),
        None => report.line("No summary available"),
    };

    if search.results.is_empty() {
        return report
            .blank()
            .line(format!("No recent coverage found for {}", keyword))
            .build();
    }

    report = report.section("TOP SOURCES");
    let ranked = select_top(&search.results, SOURCE_LIMIT, |hit| hit.score);
    for (i, hit) in ranked.into_iter().enumerate() {
        let title = if hit.title.is_empty() { &hit.url } else { &hit.title };
        report = report
            .blank()
            .line(format!("{}. {}", i + 1, title))
            .line(format!("   {}", excerpt(&hit.content, EXCERPT_LIMIT)))
            .line(format!("   {}", hit.url));
    }

    report
        .section("RECOMMENDATIONS")
        .line(format!("1. Cover what the sources above say about {}", keyword))
        .line("2. Publish while coverage is recent")
        .line("3. Emphasize practical applications and tutorials")
        .build()
}

/// Ranked list of raw search hits.
pub fn search_report(query: &str, search: &SearchResponse) -> Report {
    let mut report = ReportBuilder::new("WEB SEARCH RESULTS")
        .blank()
        .kv("Query", query)
        .kv("Results", search.results.len());

    if let Some(answer) = search.answer.as_deref().filter(|a| !a.trim().is_empty()) {
        report = report.section("ANSWER").line(answer.trim());
    }

    if !search.results.is_empty() {
        report = report.section("RESULTS");
    }
    for (i, hit) in select_top(&search.results, search.results.len(), |hit| hit.score)
        .into_iter()
        .enumerate()
    {
        report = report
            .blank()
            .line(format!("{}. {}", i + 1, hit.title))
            .line(format!("   {}", hit.url))
            .line(format!("   {}", excerpt(&hit.content, EXCERPT_LIMIT)));
    }

    report.build()
}

/// Normalized keyword list with a suggested research query for each.
pub fn keywords_report(keywords: &[String], period: &str) -> Report {
    let mut report = ReportBuilder::new("KEYWORD ANALYSIS");

    if keywords.is_empty() {
        return report.blank().line("No keywords given").build();
    }

    report = report
        .blank()
        .kv("Keywords", keywords.join(", "))
        .kv("Count", keywords.len())
        .section("SUGGESTED RESEARCH");
    for keyword in keywords {
        report = report.item(format!("{}: \"{} trends {}\"", keyword, keyword, period));
    }

    report.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trends::SearchHit;

    fn hit(title: &str, score: f64) -> SearchHit {
        SearchHit {
            title: title.to_string(),
            url: format!("https://wired.com/{}", title.to_lowercase()),
            content: format!("{} coverage\nwith details", title),
            score,
        }
    }

    #[test]
    fn test_trend_report_ranks_sources() {
        let search = SearchResponse {
            query: "ai agents".to_string(),
            answer: Some("Agents are growing fast.".to_string()),
            results: vec![hit("Low", 0.2), hit("High", 0.9), hit("Mid", 0.5)],
        };
        let report = trend_report("AI agents", "October 2026", &search);

        assert!(report.contains("Topic:           AI agents"));
        assert!(report.contains("Period:          October 2026"));
        assert!(report.contains("Agents are growing fast."));
        assert!(report.contains("1. High"));
        assert!(report.contains("2. Mid"));
        assert!(report.contains("3. Low"));
        assert!(report.contains("   High coverage with details"));
    }

    #[test]
    fn test_trend_report_without_results() {
        let report = trend_report("quantum", "October 2026", &SearchResponse::default());
        assert!(report.contains("No summary available"));
        assert!(report.contains("No recent coverage found for quantum"));
        assert!(!report.contains("TOP SOURCES"));
    }

    #[test]
    fn test_search_report() {
        let search = SearchResponse {
            query: "ai".to_string(),
            answer: None,
            results: vec![hit("Low", 0.2), hit("High", 0.9)],
        };
        let report = search_report("ai", &search);
        assert!(report.contains("Results:         2"));
        assert!(report.contains("1. High"));
        assert!(report.contains("   https://wired.com/low"));
        assert!(!report.contains("ANSWER"));
    }

    #[test]
    fn test_keywords_report() {
        let keywords = vec!["AI".to_string(), "Robotics".to_string()];
        let report = keywords_report(&keywords, "October 2026");
        assert!(report.contains("Keywords:        AI, Robotics"));
        assert!(report.contains("Count:           2"));
        assert!(report.contains("• AI: \"AI trends October 2026\""));

        assert!(keywords_report(&[], "October 2026").contains("No keywords given"));
    }
}
