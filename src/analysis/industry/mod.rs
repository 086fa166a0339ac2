//! Industry-profile comparison. Partitions each profile vocabulary into
//! found/missing by case-insensitive substring search over the full document,
//! then scores the partitions against fixed targets.

mod profiles;

pub use profiles::{find as find_profile, IndustryProfile, PROFILES};

use serde::Serialize;

const VERB_TARGET: usize = 10;
const ACHIEVEMENT_TARGET: usize = 5;
const SUGGESTION_THRESHOLD: u8 = 80;
const MISSING_SKILLS_CAP: usize = 7;
const RECOMMENDED_VERBS_CAP: usize = 7;

/// Requested industry key is absent from the static profile table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Industry '{0}' not supported")]
pub struct UnknownIndustry(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillsAnalysis {
    pub score: u8,
    pub found_skills: Vec<String>,
    pub missing_important_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionsAnalysis {
    pub score: u8,
    pub found_sections: Vec<String>,
    pub missing_sections: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbsAnalysis {
    pub score: u8,
    pub found_verbs: Vec<String>,
    pub recommended_verbs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementsAnalysis {
    pub score: u8,
    pub achievement_phrases_found: Vec<String>,
}

/// Profile-driven report, independent of the structural analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryReport {
    pub industry: String,
    pub overall_score: u8,
    pub skills_analysis: SkillsAnalysis,
    pub sections_analysis: SectionsAnalysis,
    pub verbs_analysis: VerbsAnalysis,
    pub achievements_analysis: AchievementsAnalysis,
    pub suggestions: Vec<String>,
}

/// Splits a vocabulary into (found, missing) by substring presence. The two
/// halves always partition the input exactly.
fn partition(vocabulary: &[&str], lowered_text: &str) -> (Vec<String>, Vec<String>) {
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for entry in vocabulary {
        if lowered_text.contains(&entry.to_lowercase()) {
            found.push(entry.to_string());
        } else {
            missing.push(entry.to_string());
        }
    }
    (found, missing)
}

fn ratio_score(found: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let score = (found as f64 / total as f64 * 100.0).round();
    score.min(100.0) as u8
}

/// Compares resume text against the named industry profile.
pub fn compare(text: &str, industry_key: &str) -> Result<IndustryReport, UnknownIndustry> {
    let profile =
        find_profile(industry_key).ok_or_else(|| UnknownIndustry(industry_key.to_string()))?;
    let lowered = text.to_lowercase();

    let (found_skills, missing_skills) = partition(profile.required_skills, &lowered);
    let skills_score = ratio_score(found_skills.len(), profile.required_skills.len());

    let (found_sections, missing_sections) = partition(profile.recommended_sections, &lowered);
    let sections_score = ratio_score(found_sections.len(), profile.recommended_sections.len());

    let (found_verbs, _) = partition(profile.action_verbs, &lowered);
    let verbs_score = ratio_score(found_verbs.len(), VERB_TARGET);

    let (found_achievements, _) = partition(profile.achievements_keywords, &lowered);
    let achievements_score = ratio_score(found_achievements.len(), ACHIEVEMENT_TARGET);

    let overall_score = (f64::from(skills_score) * 0.4
        + f64::from(sections_score) * 0.2
        + f64::from(verbs_score) * 0.2
        + f64::from(achievements_score) * 0.2)
        .round() as u8;

    let mut suggestions = Vec::new();

    if skills_score < SUGGESTION_THRESHOLD {
        let top_missing: Vec<&str> = missing_skills
            .iter()
            .take(5)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Add more skills to your resume. Consider including: {}",
            top_missing.join(", ")
        ));
    }

    if sections_score < SUGGESTION_THRESHOLD {
        let top_missing: Vec<&str> = missing_sections
            .iter()
            .take(3)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Include these important sections: {}",
            top_missing.join(", ")
        ));
    }

    if verbs_score < SUGGESTION_THRESHOLD {
        let top_verbs: Vec<&str> = profile
            .action_verbs
            .iter()
            .take(5)
            .filter(|verb| !found_verbs.iter().any(|found| found == *verb))
            .copied()
            .collect();
        suggestions.push(format!(
            "Use stronger action verbs like: {}",
            top_verbs.join(", ")
        ));
    }

    if achievements_score < SUGGESTION_THRESHOLD {
        suggestions
            .push("Focus more on quantifiable achievements relevant to your industry".to_string());
    }

    let recommended_verbs = profile
        .action_verbs
        .iter()
        .take(RECOMMENDED_VERBS_CAP)
        .filter(|verb| !found_verbs.iter().any(|found| found == *verb))
        .map(|verb| verb.to_string())
        .collect();

    Ok(IndustryReport {
        industry: industry_key.to_string(),
        overall_score,
        skills_analysis: SkillsAnalysis {
            score: skills_score,
            found_skills,
            missing_important_skills: missing_skills
                .into_iter()
                .take(MISSING_SKILLS_CAP)
                .collect(),
        },
        sections_analysis: SectionsAnalysis {
            score: sections_score,
            found_sections,
            missing_sections,
        },
        verbs_analysis: VerbsAnalysis {
            score: verbs_score,
            found_verbs,
            recommended_verbs,
        },
        achievements_analysis: AchievementsAnalysis {
            score: achievements_score,
            achievement_phrases_found: found_achievements,
        },
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SE_TEXT: &str = "TECHNICAL SKILLS\nPython, JavaScript, React, SQL, AWS, Docker, Git\n\
        PROJECTS\nDeployed and optimized a service, improved latency and performance.\n\
        EXPERIENCE\nDeveloped, implemented, designed, built, tested and automated pipelines.\n\
        EDUCATION\nBSc 2020\n";

    #[test]
    fn unknown_industry_is_an_error_value() {
        let err = compare("any text", "underwater_basketweaving").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Industry 'underwater_basketweaving' not supported"
        );
    }

    #[test]
    fn found_and_missing_partition_the_profile_exactly() {
        let report = compare(SE_TEXT, "software_engineer").expect("known industry");
        let profile = find_profile("software_engineer").unwrap();

        let skills = &report.skills_analysis;
        assert_eq!(
            skills.found_skills.len()
                + (profile.required_skills.len() - skills.found_skills.len()),
            profile.required_skills.len()
        );
        for skill in &skills.found_skills {
            assert!(!skills.missing_important_skills.contains(skill));
        }

        let sections = &report.sections_analysis;
        assert_eq!(
            sections.found_sections.len() + sections.missing_sections.len(),
            profile.recommended_sections.len()
        );
    }

    #[test]
    fn verb_score_normalizes_against_a_target_of_ten() {
        let report = compare(SE_TEXT, "software_engineer").expect("known industry");
        let found = report.verbs_analysis.found_verbs.len();
        let expected = ((found as f64 / 10.0) * 100.0).round().min(100.0) as u8;
        assert_eq!(report.verbs_analysis.score, expected);
    }

    #[test]
    fn empty_text_misses_everything() {
        let report = compare("", "finance").expect("known industry");
        assert_eq!(report.overall_score, 0);
        assert!(report.skills_analysis.found_skills.is_empty());
        assert_eq!(report.skills_analysis.missing_important_skills.len(), 7);
        assert_eq!(report.suggestions.len(), 4);
    }

    #[test]
    fn scores_never_exceed_one_hundred() {
        let everything = PROFILES
            .iter()
            .flat_map(|profile| {
                profile
                    .required_skills
                    .iter()
                    .chain(profile.recommended_sections)
                    .chain(profile.action_verbs)
                    .chain(profile.achievements_keywords)
            })
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        for profile in PROFILES {
            let report = compare(&everything, profile.key).expect("known industry");
            assert_eq!(report.skills_analysis.score, 100);
            assert_eq!(report.verbs_analysis.score, 100);
            assert_eq!(report.achievements_analysis.score, 100);
            assert!(report.overall_score <= 100);
        }
    }
}
