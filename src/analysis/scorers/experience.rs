use super::clamp_score;
use crate::analysis::vocabulary::{any_match, JOB_TITLE_KEYWORDS};
use regex::Regex;
use std::sync::LazyLock;

static COMPANY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"inc|llc|ltd|corporation|corp|company").unwrap());
static EMPLOYMENT_DATES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(19|20)\d{2}|present|current|now").unwrap());
static BULLET_GLYPHS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"•|\*|\-").unwrap());
static IMPACT_METRICS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+%|\d+ percent|increased|decreased|improved|reduced|led|managed|created")
        .unwrap()
});

/// Experience rubric: employers, titles, date ranges, bullets, metrics.
pub(crate) fn score(section_text: &str) -> (u8, Vec<String>) {
    let lowered = section_text.to_lowercase();
    let mut score: i32 = 100;
    let mut feedback = Vec::new();

    if !COMPANY_SUFFIX.is_match(&lowered) {
        score -= 10;
        feedback.push("Company names may not be clearly mentioned".to_string());
    }

    if !any_match(JOB_TITLE_KEYWORDS, &lowered) {
        score -= 15;
        feedback.push("Job titles are not clearly stated".to_string());
    }

    if EMPLOYMENT_DATES.find_iter(&lowered).count() < 2 {
        score -= 15;
        feedback.push("Employment dates may be missing or incomplete".to_string());
    }

    if BULLET_GLYPHS.find_iter(section_text).count() < 3 {
        score -= 10;
        feedback.push("Consider using bullet points to highlight achievements".to_string());
    }

    if IMPACT_METRICS.find_iter(&lowered).count() < 3 {
        score -= 15;
        feedback.push("Add more quantifiable achievements with metrics".to_string());
    } else {
        score += 10;
        feedback.push("Good use of quantifiable metrics".to_string());
    }

    let score = clamp_score(score);
    if score >= 80 {
        feedback.push("Experience section effectively highlights your work history".to_string());
    }

    (score, feedback)
}

#[cfg(test)]
mod tests {
    use super::score;

    const STRONG: &str = "EXPERIENCE\n\
        Software Engineer, Acme Inc, 2019 - present\n\
        • Increased throughput by 40%\n\
        • Reduced costs by 15%\n\
        • Led a team of five and managed releases\n";

    #[test]
    fn metric_rich_history_earns_the_bonus() {
        let (value, feedback) = score(STRONG);
        assert_eq!(value, 100);
        assert!(feedback.contains(&"Good use of quantifiable metrics".to_string()));
        assert!(feedback
            .iter()
            .any(|line| line.contains("effectively highlights")));
    }

    #[test]
    fn sparse_history_accumulates_penalties() {
        let (value, feedback) = score("Worked at a startup doing various things");
        // No company suffix, title, dates, bullets, or metrics.
        assert_eq!(value, 100 - 10 - 15 - 15 - 10 - 15);
        assert_eq!(feedback.len(), 5);
    }

    #[test]
    fn single_date_is_treated_as_incomplete() {
        let (_, feedback) = score("Developer at Example Corp, 2021");
        assert!(feedback
            .iter()
            .any(|line| line.contains("Employment dates may be missing")));
    }
}
