//! Typed report records. Field names mirror the JSON consumed by the
//! existing frontend, so serde renames are deliberately absent.

use serde::Serialize;

/// Outcome for a single resume section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionReport {
    pub exists: bool,
    pub score: u8,
    pub feedback: Vec<String>,
}

impl SectionReport {
    pub fn missing(feedback: &str) -> Self {
        Self {
            exists: false,
            score: 0,
            feedback: vec![feedback.to_string()],
        }
    }

    pub fn scored(score: u8, feedback: Vec<String>) -> Self {
        Self {
            exists: true,
            score,
            feedback,
        }
    }
}

/// Per-section breakdown in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionBreakdown {
    pub education: SectionReport,
    pub experience: SectionReport,
    pub skills: SectionReport,
    pub projects: SectionReport,
}

/// Root output of a structural analysis, fully built before it is returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub overall_score: u8,
    pub sections: SectionBreakdown,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub word_count: usize,
}
