//! Comment sentiment scoring and summarization.

mod lexicon;

pub use lexicon::LexiconAnalyzer;

use crate::youtube::CommentRecord;
use serde::Serialize;

/// Polarity above this is positive.
pub const POSITIVE_THRESHOLD: f64 = 0.3;
/// Polarity below this is negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.3;
/// Number of extremal comments kept per side.
pub const TOP_K: usize = 3;

/// Lexical sentiment of a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Sentiment {
    /// -1.0 (negative) to 1.0 (positive).
    pub polarity: f64,
    /// 0.0 (factual) to 1.0 (opinionated).
    pub subjectivity: f64,
}

/// Trait for text sentiment models.
pub trait SentimentAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Sentiment;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentBucket {
    Positive,
    Neutral,
    Negative,
}

impl SentimentBucket {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > POSITIVE_THRESHOLD {
            SentimentBucket::Positive
        } else if polarity < NEGATIVE_THRESHOLD {
            SentimentBucket::Negative
        } else {
            SentimentBucket::Neutral
        }
    }
}

impl std::fmt::Display for SentimentBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentBucket::Positive => write!(f, "Positive"),
            SentimentBucket::Neutral => write!(f, "Neutral"),
            SentimentBucket::Negative => write!(f, "Negative"),
        }
    }
}

/// Aggregate sentiment over a set of comments.
#[derive(Debug, Clone, Serialize)]
pub struct SentimentSummary {
    /// Mean polarity; `None` when no comments were scored.
    pub mean: Option<f64>,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
    pub top_positive: Vec<CommentRecord>,
    pub top_negative: Vec<CommentRecord>,
}

impl SentimentSummary {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn overall(&self) -> Option<SentimentBucket> {
        self.mean.map(SentimentBucket::from_polarity)
    }
}

/// Summarize already-scored comments.
///
/// Ties in the top lists keep the original fetch order.
pub fn summarize(comments: &[CommentRecord]) -> SentimentSummary {
    let mean = if comments.is_empty() {
        None
    } else {
        Some(comments.iter().map(|c| c.polarity).sum::<f64>() / comments.len() as f64)
    };

    let mut positive = 0;
    let mut neutral = 0;
    let mut negative = 0;
    for comment in comments {
        match SentimentBucket::from_polarity(comment.polarity) {
            SentimentBucket::Positive => positive += 1,
            SentimentBucket::Neutral => neutral += 1,
            SentimentBucket::Negative => negative += 1,
        }
    }

    let top_positive = crate::report::select_top(comments, TOP_K, |c| c.polarity)
        .into_iter()
        .cloned()
        .collect();
    let top_negative = crate::report::select_bottom(comments, TOP_K, |c| c.polarity)
        .into_iter()
        .cloned()
        .collect();

    SentimentSummary {
        mean,
        positive,
        neutral,
        negative,
        top_positive,
        top_negative,
    }
}
