//! Lexicon-based sentiment model.
//!
//! Each known adjective/verb contributes a (polarity, subjectivity) assessment.
//! Intensifiers scale the next assessment, negations flip it by
//! [`NEGATION_FACTOR`], and the text's score is the mean over all assessments.

use super::{Sentiment, SentimentAnalyzer};
use std::collections::HashMap;

const NEGATION_FACTOR: f64 = -0.5;

// (word, polarity, subjectivity)
const LEXICON: &[(&str, f64, f64)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("wonderful", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovely", 0.5, 0.75),
    ("beautiful", 0.85, 1.0),
    ("nice", 0.6, 1.0),
    ("helpful", 0.5, 0.5),
    ("interesting", 0.5, 0.5),
    ("useful", 0.3, 0.0),
    ("clear", 0.1, 0.38),
    ("perfect", 1.0, 1.0),
    ("brilliant", 0.9, 1.0),
    ("incredible", 0.9, 0.9),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("cool", 0.35, 0.65),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("thanks", 0.2, 0.2),
    ("informative", 0.5, 0.5),
    ("insightful", 0.6, 0.7),
    ("impressive", 1.0, 1.0),
    ("enjoyed", 0.4, 0.5),
    ("enjoy", 0.4, 0.5),
    ("favorite", 0.5, 1.0),
    ("easy", 0.43, 0.83),
    ("superb", 1.0, 1.0),
    ("genius", 0.8, 0.9),
    ("solid", 0.3, 0.4),
    ("bad", -0.7, 0.67),
    ("terrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("worse", -0.4, 0.6),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("boring", -1.0, 1.0),
    ("stupid", -0.8, 1.0),
    ("dumb", -0.375, 0.5),
    ("useless", -0.5, 0.0),
    ("wrong", -0.5, 0.9),
    ("poor", -0.4, 0.6),
    ("annoying", -0.8, 0.9),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("confusing", -0.3, 0.7),
    ("misleading", -0.5, 0.6),
    ("sad", -0.5, 1.0),
    ("ugly", -0.7, 1.0),
    ("fake", -0.5, 1.0),
    ("clickbait", -0.6, 0.8),
    ("slow", -0.3, 0.39),
    ("hard", -0.29, 0.54),
    ("difficult", -0.5, 1.0),
    ("trash", -0.8, 0.8),
    ("garbage", -0.8, 0.8),
    ("lame", -0.5, 1.0),
    ("cringe", -0.6, 0.9),
    ("broken", -0.4, 0.4),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.3),
    ("super", 1.3),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("highly", 1.3),
    ("truly", 1.3),
    ("quite", 1.1),
    ("too", 1.2),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "neither", "nor", "hardly", "without", "cannot",
];

const EMOTICONS: &[(&str, f64, f64)] = &[
    (":)", 0.5, 1.0),
    (":-)", 0.5, 1.0),
    (":D", 1.0, 1.0),
    ("<3", 0.5, 1.0),
    ("😊", 0.5, 1.0),
    ("😍", 0.8, 1.0),
    ("❤", 0.5, 1.0),
    ("👍", 0.5, 0.5),
    (":(", -0.75, 1.0),
    (":-(", -0.75, 1.0),
    ("😢", -0.5, 1.0),
    ("😠", -0.8, 1.0),
    ("😡", -0.8, 1.0),
    ("👎", -0.5, 0.5),
];

/// English word-list sentiment analyzer.
pub struct LexiconAnalyzer {
    words: HashMap<&'static str, (f64, f64)>,
    intensifiers: HashMap<&'static str, f64>,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self {
            words: LEXICON.iter().map(|&(w, p, s)| (w, (p, s))).collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    fn is_negation(word: &str) -> bool {
        NEGATIONS.contains(&word) || word.ends_with("n't")
    }

    fn score_sentence(&self, sentence: &str, assessments: &mut Vec<(f64, f64)>) {
        let mut intensity = 1.0;
        let mut negated = false;
        // Typographic apostrophes, as in "isn’t".
        let sentence = sentence.replace(['\u{2018}', '\u{2019}'], "'");

        for raw in sentence.split(|c: char| !(c.is_alphanumeric() || c == '\'')) {
            let word = raw.trim_matches('\'').to_lowercase();
            if word.is_empty() {
                continue;
            }

            if Self::is_negation(&word) {
                negated = true;
                continue;
            }

            if let Some(factor) = self.intensifiers.get(word.as_str()) {
                intensity *= factor;
                continue;
            }

            if let Some(&(polarity, subjectivity)) = self.words.get(word.as_str()) {
                let mut polarity = polarity * intensity;
                if negated {
                    polarity *= NEGATION_FACTOR;
                }
                assessments.push((
                    polarity.clamp(-1.0, 1.0),
                    (subjectivity * intensity).min(1.0),
                ));
                intensity = 1.0;
                negated = false;
            }
        }
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn analyze(&self, text: &str) -> Sentiment {
        let mut assessments = Vec::new();

        for &(emoticon, polarity, subjectivity) in EMOTICONS {
            for _ in text.matches(emoticon) {
                assessments.push((polarity, subjectivity));
            }
        }

        for sentence in text.split(['.', '!', '?', ';', '\n']) {
            self.score_sentence(sentence, &mut assessments);
        }

        if assessments.is_empty() {
            return Sentiment::default();
        }

        let n = assessments.len() as f64;
        let polarity = assessments.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = assessments.iter().map(|(_, s)| s).sum::<f64>() / n;

        Sentiment {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}
