//! Per-section rubric scorers. Each scorer is a pure function from section
//! text to a clamped 0-100 score plus ordered feedback lines; the feedback
//! wording and order are part of the frontend contract.

mod education;
mod experience;
mod projects;
mod skills;

use super::segmenter::SectionKind;

/// Runs the rubric for one section kind against its captured text.
pub fn score_section(kind: SectionKind, section_text: &str) -> (u8, Vec<String>) {
    match kind {
        SectionKind::Education => education::score(section_text),
        SectionKind::Experience => experience::score(section_text),
        SectionKind::Skills => skills::score(section_text),
        SectionKind::Projects => projects::score(section_text),
    }
}

pub(crate) fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}
