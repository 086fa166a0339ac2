//! Narrow seams to services the scoring engine treats as black boxes:
//! word tokenization, keyword extraction, and sentiment. The defaults are
//! deterministic heuristics so the service is self-contained; a host with a
//! real NLP pipeline can swap its own implementations in.

use serde::Serialize;
use std::collections::HashSet;

/// Supplies the word count used by the resume-length check.
pub trait WordTokenizer: Send + Sync {
    fn word_count(&self, text: &str) -> usize;
}

/// Supplies candidate keywords; the engine only consumes how many there are.
pub trait KeywordExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Polarity in [-1, 1], subjectivity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl Sentiment {
    /// Two-decimal rounding applied before the value reaches the wire.
    pub fn rounded(self) -> Self {
        Self {
            polarity: (self.polarity * 100.0).round() / 100.0,
            subjectivity: (self.subjectivity * 100.0).round() / 100.0,
        }
    }
}

pub trait SentimentAnalyzer: Send + Sync {
    fn sentiment(&self, text: &str) -> Sentiment;
}

/// Whitespace tokenization, sufficient for a length heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl WordTokenizer for WhitespaceTokenizer {
    fn word_count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}

const STOPWORDS: &[&str] = &[
    "about", "after", "also", "been", "before", "being", "between", "both", "each", "from",
    "have", "having", "into", "more", "most", "other", "over", "same", "some", "such", "than",
    "that", "their", "them", "then", "there", "these", "they", "this", "through", "under",
    "until", "very", "were", "what", "when", "where", "which", "while", "will", "with", "would",
    "your",
];

const KEYWORD_CAP: usize = 20;

/// Keyword candidates: lowercase alphabetic tokens longer than three
/// characters, stopword-filtered, first occurrence wins, capped at twenty.
/// Ordering is deterministic so repeated analyses serialize identically.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicKeywordExtractor;

impl KeywordExtractor for HeuristicKeywordExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut keywords = Vec::new();

        for token in text.split(|c: char| !c.is_alphanumeric() && c != '-') {
            let word = token.trim_matches('-').to_lowercase();
            if word.len() <= 3 || word.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            if STOPWORDS.contains(&word.as_str()) {
                continue;
            }
            if seen.insert(word.clone()) {
                keywords.push(word);
                if keywords.len() == KEYWORD_CAP {
                    break;
                }
            }
        }

        keywords
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "accomplished", "achieved", "award", "best", "dedicated", "efficient", "excellent",
    "expert", "improved", "innovative", "outstanding", "passionate", "proficient", "skilled",
    "strong", "successful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "failed", "fired", "lack", "limited", "poor", "problem", "terminated", "unable",
    "weak",
];

/// Lexicon-based sentiment stand-in for the external NLP service.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentimentAnalyzer;

impl SentimentAnalyzer for LexiconSentimentAnalyzer {
    fn sentiment(&self, text: &str) -> Sentiment {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered.split_whitespace().collect();
        if words.is_empty() {
            return Sentiment {
                polarity: 0.0,
                subjectivity: 0.0,
            };
        }

        let positive = words
            .iter()
            .filter(|word| POSITIVE_WORDS.contains(*word))
            .count() as f64;
        let negative = words
            .iter()
            .filter(|word| NEGATIVE_WORDS.contains(*word))
            .count() as f64;
        let opinionated = positive + negative;

        let polarity = if opinionated == 0.0 {
            0.0
        } else {
            ((positive - negative) / opinionated).clamp(-1.0, 1.0)
        };
        let subjectivity = (opinionated / words.len() as f64).clamp(0.0, 1.0);

        Sentiment {
            polarity,
            subjectivity,
        }
    }
}
