use super::clamp_score;
use crate::analysis::vocabulary::{any_match, DEGREE_KEYWORDS, INSTITUTION_KEYWORDS};
use regex::Regex;
use std::sync::LazyLock;

static GRADUATION_YEAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(19|20)\d{2}").unwrap());
static GPA_OR_HONORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"gpa|grade point average|cum laude|honors|distinction").unwrap());

/// Education rubric: degree type, graduation year, institution, GPA/honors.
pub(crate) fn score(section_text: &str) -> (u8, Vec<String>) {
    let lowered = section_text.to_lowercase();
    let mut score: i32 = 100;
    let mut feedback = Vec::new();

    if !any_match(DEGREE_KEYWORDS, &lowered) {
        score -= 20;
        feedback.push("No clear mention of degree type".to_string());
    }

    if !GRADUATION_YEAR.is_match(section_text) {
        score -= 15;
        feedback.push("No graduation dates mentioned".to_string());
    }

    if !any_match(INSTITUTION_KEYWORDS, &lowered) {
        score -= 15;
        feedback.push("No clear mention of educational institutions".to_string());
    }

    // Informational only, never a penalty.
    if !GPA_OR_HONORS.is_match(&lowered) {
        feedback.push("Consider adding GPA or academic honors if they're strong".to_string());
    }

    let score = clamp_score(score);
    if score >= 80 {
        feedback.push("Education section is well-structured".to_string());
    }

    (score, feedback)
}
