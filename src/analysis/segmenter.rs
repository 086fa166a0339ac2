//! Heading-based section segmentation.
//!
//! Each section is located independently: find the first heading synonym,
//! then capture up to the first subsequent occurrence of any sibling
//! section's heading token. A resume with nonstandard headings simply yields
//! empty sections; that degraded result is the documented behavior, and
//! overlapping captures from irregular heading order are left as-is.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Education,
    Experience,
    Skills,
    Projects,
}

impl SectionKind {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Education,
            Self::Experience,
            Self::Skills,
            Self::Projects,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
        }
    }
}

/// Captured text per section, empty string when the heading was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    pub education: String,
    pub experience: String,
    pub skills: String,
    pub projects: String,
}

impl SectionMap {
    pub fn get(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Education => &self.education,
            SectionKind::Experience => &self.experience,
            SectionKind::Skills => &self.skills,
            SectionKind::Projects => &self.projects,
        }
    }
}

static EDUCATION_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EDUCATION|ACADEMIC BACKGROUND").unwrap());
static EXPERIENCE_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EXPERIENCE|WORK EXPERIENCE|EMPLOYMENT").unwrap());
static SKILLS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)SKILLS|TECHNICAL SKILLS|EXPERTISE").unwrap());
static PROJECTS_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PROJECTS|PERSONAL PROJECTS").unwrap());

static EDUCATION_STOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EXPERIENCE|SKILLS|PROJECTS").unwrap());
static EXPERIENCE_STOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EDUCATION|SKILLS|PROJECTS").unwrap());
static SKILLS_STOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EDUCATION|EXPERIENCE|PROJECTS").unwrap());
static PROJECTS_STOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)EDUCATION|EXPERIENCE|SKILLS").unwrap());

/// Splits raw resume text into the four canonical sections.
pub fn segment(text: &str) -> SectionMap {
    SectionMap {
        education: capture(text, &EDUCATION_HEADING, &EDUCATION_STOP),
        experience: capture(text, &EXPERIENCE_HEADING, &EXPERIENCE_STOP),
        skills: capture(text, &SKILLS_HEADING, &SKILLS_STOP),
        projects: capture(text, &PROJECTS_HEADING, &PROJECTS_STOP),
    }
}

/// First heading occurrence wins; the capture ends at the first sibling
/// heading token after it, or end of text.
fn capture(text: &str, heading: &Regex, stop: &Regex) -> String {
    let Some(found) = heading.find(text) else {
        return String::new();
    };

    let tail = &text[found.end()..];
    let end = stop
        .find(tail)
        .map(|boundary| found.end() + boundary.start())
        .unwrap_or(text.len());

    text[found.start()..end].to_string()
}
