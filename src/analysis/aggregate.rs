//! Weighted aggregation of section scores plus whole-document signals.

use super::report::{AnalysisReport, SectionBreakdown, SectionReport};
use super::scorers::score_section;
use super::segmenter::{SectionKind, SectionMap};
use super::vocabulary::{count_matches, ACTION_VERBS};

const ACTION_VERB_TARGET_SCORE: usize = 70;
const MIN_KEYWORDS: usize = 10;
const MIN_WORDS: usize = 300;
const MAX_WORDS: usize = 700;

/// Whole-document inputs produced by the collaborator seams.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GlobalSignals {
    pub word_count: usize,
    pub keyword_count: usize,
}

const fn weight(kind: SectionKind) -> u32 {
    match kind {
        SectionKind::Education => 20,
        SectionKind::Experience => 35,
        SectionKind::Skills => 25,
        SectionKind::Projects => 20,
    }
}

const fn missing_feedback(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Education => "Education section is missing",
        SectionKind::Experience => "Experience section is missing",
        SectionKind::Skills => "Skills section is missing",
        SectionKind::Projects => "Projects section is missing or not clearly defined",
    }
}

const fn missing_suggestion(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Education => {
            "Add an Education section with your degrees, institutions, and graduation dates"
        }
        SectionKind::Experience => {
            "Add a Work Experience section with your job titles, employers, and achievements"
        }
        SectionKind::Skills => "Add a Skills section highlighting your technical and soft skills",
        SectionKind::Projects => {
            "Consider adding a Projects section to showcase your practical skills"
        }
    }
}

/// Combines section rubrics and global signals into the final report.
pub(crate) fn aggregate(text: &str, sections: &SectionMap, signals: GlobalSignals) -> AnalysisReport {
    let mut total_score = 0.0_f64;
    let mut suggestions = Vec::new();
    let mut strengths = Vec::new();
    let mut reports: Vec<SectionReport> = Vec::with_capacity(4);

    for kind in SectionKind::ordered() {
        let section_text = sections.get(kind);
        if section_text.is_empty() {
            suggestions.push(missing_suggestion(kind).to_string());
            reports.push(SectionReport::missing(missing_feedback(kind)));
            continue;
        }

        let (score, feedback) = score_section(kind, section_text);
        total_score += f64::from(score) * f64::from(weight(kind)) / 100.0;
        reports.push(SectionReport::scored(score, feedback));
    }

    let mut reports = reports.into_iter();
    let breakdown = SectionBreakdown {
        education: reports.next().expect("education report"),
        experience: reports.next().expect("experience report"),
        skills: reports.next().expect("skills report"),
        projects: reports.next().expect("projects report"),
    };

    let verb_score = action_verb_score(text);
    if verb_score < ACTION_VERB_TARGET_SCORE {
        suggestions.push("Use more strong action verbs to describe your achievements".to_string());
    } else {
        strengths.push("Good use of action verbs".to_string());
    }

    if signals.keyword_count < MIN_KEYWORDS {
        suggestions
            .push("Include more industry-specific keywords to pass ATS screening".to_string());
    } else {
        strengths.push("Good use of industry keywords".to_string());
    }

    if signals.word_count < MIN_WORDS {
        suggestions.push(
            "Your resume seems too short. Consider adding more details about your experience and skills"
                .to_string(),
        );
    } else if signals.word_count > MAX_WORDS {
        suggestions.push("Your resume may be too lengthy. Try to make it more concise".to_string());
    } else {
        strengths.push("Resume has an appropriate length".to_string());
    }

    AnalysisReport {
        overall_score: total_score.round() as u8,
        sections: breakdown,
        suggestions,
        strengths,
        word_count: signals.word_count,
    }
}

/// Five points per distinct action verb present, capped at 100.
fn action_verb_score(text: &str) -> usize {
    let lowered = text.to_lowercase();
    (count_matches(ACTION_VERBS, &lowered) * 5).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::segmenter::segment;

    fn signals(word_count: usize, keyword_count: usize) -> GlobalSignals {
        GlobalSignals {
            word_count,
            keyword_count,
        }
    }

    #[test]
    fn empty_text_yields_zero_score_and_four_missing_suggestions() {
        let report = aggregate("", &segment(""), signals(0, 0));

        assert_eq!(report.overall_score, 0);
        assert!(!report.sections.education.exists);
        assert!(!report.sections.experience.exists);
        assert!(!report.sections.skills.exists);
        assert!(!report.sections.projects.exists);
        assert_eq!(
            report
                .suggestions
                .iter()
                .filter(|line| line.contains("section"))
                .count(),
            4
        );
        assert_eq!(report.word_count, 0);
    }

    #[test]
    fn weights_sum_the_section_scores() {
        let text = "EDUCATION\nBachelor of Science, MIT University, 2020, GPA 3.9\n";
        let sections = segment(text);
        let report = aggregate(text, &sections, signals(100, 0));

        assert!(report.sections.education.exists);
        assert_eq!(report.sections.education.score, 100);
        // Only education (20%) contributes.
        assert_eq!(report.overall_score, 20);
    }

    #[test]
    fn global_checks_append_strengths_when_satisfied() {
        let verbs = "achieved improved trained maintained managed created resolved \
             volunteered influenced increased decreased researched authored developed";
        let report = aggregate(verbs, &segment(verbs), signals(400, 15));

        assert!(report
            .strengths
            .contains(&"Good use of action verbs".to_string()));
        assert!(report
            .strengths
            .contains(&"Good use of industry keywords".to_string()));
        assert!(report
            .strengths
            .contains(&"Resume has an appropriate length".to_string()));
    }

    #[test]
    fn overlong_resume_is_flagged() {
        let report = aggregate("", &segment(""), signals(900, 0));
        assert!(report
            .suggestions
            .iter()
            .any(|line| line.contains("too lengthy")));
    }
}
