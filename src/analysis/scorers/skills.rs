use super::clamp_score;
use crate::analysis::vocabulary::{count_matches, SOFT_SKILLS, TECH_SKILLS};
use regex::Regex;
use std::sync::LazyLock;

// Commas, bullets, pipes, or backslashes count as list organization.
static LIST_SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,•|\\]").unwrap());

/// Skills rubric: breadth of technical and soft skills plus list structure.
pub(crate) fn score(section_text: &str) -> (u8, Vec<String>) {
    let lowered = section_text.to_lowercase();
    let mut score: i32 = 100;
    let mut feedback = Vec::new();

    let tech_count = count_matches(TECH_SKILLS, &lowered);
    let soft_count = count_matches(SOFT_SKILLS, &lowered);

    if tech_count < 5 {
        score -= 15;
        feedback.push("Add more technical skills relevant to your field".to_string());
    }

    if soft_count < 3 {
        score -= 10;
        feedback.push("Include some soft skills to show your workplace effectiveness".to_string());
    }

    if !LIST_SEPARATORS.is_match(&lowered) {
        score -= 10;
        feedback
            .push("Organize your skills better (e.g., using categories or separators)".to_string());
    }

    if tech_count >= 8 && soft_count >= 5 {
        score += 10;
        feedback.push("Excellent variety of skills listed".to_string());
    }

    (clamp_score(score), feedback)
}

#[cfg(test)]
mod tests {
    use super::score;

    #[test]
    fn broad_skill_list_earns_the_variety_bonus_but_stays_clamped() {
        let (value, feedback) = score(
            "SKILLS\nPython, Java, JavaScript, React, SQL, AWS, Docker, Git, Kubernetes\n\
             Communication, Leadership, Teamwork, Collaboration, Adaptability, Creativity",
        );
        assert_eq!(value, 100);
        assert!(feedback.contains(&"Excellent variety of skills listed".to_string()));
    }

    #[test]
    fn thin_unstructured_list_takes_all_three_penalties() {
        let (value, feedback) = score("SKILLS\nExcel and typing");
        assert_eq!(value, 100 - 15 - 10 - 10);
        assert_eq!(feedback.len(), 3);
    }

    #[test]
    fn adding_a_matched_skill_never_lowers_the_score() {
        let base = "SKILLS\nPython, Java, SQL, AWS";
        let extended = "SKILLS\nPython, Java, SQL, AWS, Docker";
        let (before, _) = score(base);
        let (after, _) = score(extended);
        assert!(after >= before);
    }
}
