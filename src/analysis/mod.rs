//! Resume scoring engine: segmentation, per-section rubrics, weighted
//! aggregation, and industry-profile comparison. Everything here is a pure
//! function of its inputs; the only shared state is the static vocabulary
//! and profile tables.

mod aggregate;
pub mod industry;
pub mod report;
pub mod scorers;
pub mod segmenter;
pub mod vocabulary;

pub use industry::{IndustryReport, UnknownIndustry};
pub use report::{AnalysisReport, SectionBreakdown, SectionReport};
pub use segmenter::{segment, SectionKind, SectionMap};

use crate::collaborators::{
    HeuristicKeywordExtractor, KeywordExtractor, LexiconSentimentAnalyzer, Sentiment,
    SentimentAnalyzer, WhitespaceTokenizer, WordTokenizer,
};
use aggregate::GlobalSignals;

/// Stateless analyzer applying the scoring rubric to extracted resume text.
/// Collaborator seams are injectable; the defaults are self-contained
/// heuristics.
pub struct ResumeAnalyzer {
    tokenizer: Box<dyn WordTokenizer>,
    keywords: Box<dyn KeywordExtractor>,
    sentiment: Box<dyn SentimentAnalyzer>,
}

impl Default for ResumeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeAnalyzer {
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WhitespaceTokenizer),
            keywords: Box::new(HeuristicKeywordExtractor),
            sentiment: Box::new(LexiconSentimentAnalyzer),
        }
    }

    pub fn with_collaborators(
        tokenizer: Box<dyn WordTokenizer>,
        keywords: Box<dyn KeywordExtractor>,
        sentiment: Box<dyn SentimentAnalyzer>,
    ) -> Self {
        Self {
            tokenizer,
            keywords,
            sentiment,
        }
    }

    /// Structural analysis: segment, score each section, aggregate.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let sections = segment(text);
        let signals = GlobalSignals {
            word_count: self.tokenizer.word_count(text),
            keyword_count: self.keywords.extract(text).len(),
        };
        aggregate::aggregate(text, &sections, signals)
    }

    /// Industry comparison, independent of the structural analysis.
    pub fn analyze_for_industry(
        &self,
        text: &str,
        industry_key: &str,
    ) -> Result<IndustryReport, UnknownIndustry> {
        industry::compare(text, industry_key)
    }

    /// Document sentiment, rounded to two decimals for the response.
    pub fn sentiment(&self, text: &str) -> Sentiment {
        self.sentiment.sentiment(text).rounded()
    }
}
