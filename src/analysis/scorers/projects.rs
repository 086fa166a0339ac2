use super::clamp_score;
use regex::Regex;
use std::sync::LazyLock;

// Start-of-line capitalized text, consumed up to the line break. Matches are
// non-overlapping, so back-to-back title lines may undercount; accepted
// heuristic behavior.
static TITLE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\n)[A-Z][^\n]+(?:\n|$)").unwrap());
static TECH_STACK_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(tech stack|tools used|using|with|built on|developed in|utilizing) [^.]*")
        .unwrap()
});
static IMPACT_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"resulted in|improved|increased|decreased|reduced|enhanced").unwrap()
});

/// Projects rubric: titled entries, tech stack mentions, depth, and impact.
pub(crate) fn score(section_text: &str) -> (u8, Vec<String>) {
    let lowered = section_text.to_lowercase();
    let mut score: i32 = 100;
    let mut feedback = Vec::new();

    // Title detection runs on the raw text; lowering would erase the signal.
    if TITLE_LINE.find_iter(section_text).count() < 2 {
        score -= 15;
        feedback.push("Include more projects to showcase your abilities".to_string());
    }

    if !TECH_STACK_PHRASE.is_match(&lowered) {
        score -= 15;
        feedback.push("Mention technologies used in each project".to_string());
    }

    if section_text.split('\n').count() < 5 {
        score -= 10;
        feedback.push("Add more detailed descriptions of your projects".to_string());
    }

    if !IMPACT_PHRASE.is_match(&lowered) {
        score -= 10;
        feedback.push("Describe the impact or results of your projects".to_string());
    }

    let score = clamp_score(score);
    if score >= 80 {
        feedback.push("Project section effectively demonstrates your practical skills".to_string());
    }

    (score, feedback)
}

#[cfg(test)]
mod tests {
    use super::score;

    const DETAILED: &str = "PROJECTS\n\
        Weather Dashboard\n\
        A dashboard built with React and a Rust backend.\n\
        Improved forecast load times for daily users.\n\
        Inventory Tracker\n\
        A warehouse tool developed in Python.\n\
        Reduced stock-out incidents across two sites.\n";

    #[test]
    fn detailed_projects_score_highly() {
        let (value, feedback) = score(DETAILED);
        assert!(value >= 80);
        assert!(feedback
            .iter()
            .any(|line| line.contains("effectively demonstrates")));
    }

    #[test]
    fn single_untitled_blurb_is_penalized_on_every_rule() {
        let (value, feedback) = score("a small script i wrote once");
        assert_eq!(value, 100 - 15 - 15 - 10 - 10);
        assert_eq!(feedback.len(), 4);
    }

    #[test]
    fn missing_tech_stack_phrase_is_flagged() {
        let (_, feedback) = score("PROJECTS\nSolo Project\nIt exists.\n");
        assert!(feedback
            .iter()
            .any(|line| line.contains("Mention technologies used")));
    }
}
