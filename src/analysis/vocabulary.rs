//! Static scoring vocabularies. Loaded into the binary as `'static` data so
//! every request reads the same tables without re-parsing or locking.
//!
//! The literal word lists are a compatibility surface with the existing
//! frontend; extend them, but do not reorder or reword existing entries.

/// Degree names and regional abbreviations recognized in education sections.
pub const DEGREE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "diploma",
    "certificate",
    "degree",
    "btech",
    "b.tech",
    "b.e",
    "be",
    "beng",
    "b.eng",
    "mtech",
    "m.tech",
    "m.e",
    "me",
    "meng",
    "m.eng",
    "bca",
    "mca",
    "bsc",
    "b.sc",
    "msc",
    "m.sc",
    "bcom",
    "b.com",
    "mcom",
    "m.com",
    "bba",
    "mba",
    "pgdm",
    "pgdbm",
    "ba",
    "b.a",
    "ma",
    "m.a",
    "llb",
    "ll.m",
    "llm",
    "mbbs",
    "bds",
    "b.pharm",
    "m.pharm",
    "bpt",
    "bams",
    "bhms",
    "b.ed",
    "bed",
    "m.ed",
    "med",
    "associate",
    "undergraduate",
    "postgraduate",
    "high school",
    "hsc",
    "ssc",
    "10th",
    "12th",
];

pub const INSTITUTION_KEYWORDS: &[&str] = &["university", "college", "institute", "school"];

pub const JOB_TITLE_KEYWORDS: &[&str] = &[
    "manager",
    "developer",
    "engineer",
    "analyst",
    "assistant",
    "director",
    "coordinator",
    "specialist",
];

pub const TECH_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "html",
    "css",
    "react",
    "angular",
    "node",
    "sql",
    "database",
    "aws",
    "azure",
    "cloud",
    "docker",
    "kubernetes",
    "git",
    "agile",
    "scrum",
    "machine learning",
    "ai",
    "c++",
    "c",
];

pub const SOFT_SKILLS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "critical thinking",
    "time management",
    "project management",
    "collaboration",
    "adaptability",
    "creativity",
];

/// Verbs counted for the whole-document action-verb density check.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "improved",
    "trained",
    "maintained",
    "managed",
    "created",
    "resolved",
    "volunteered",
    "influenced",
    "increased",
    "decreased",
    "researched",
    "authored",
    "developed",
    "launched",
    "designed",
    "implemented",
    "established",
    "coordinated",
    "generated",
    "delivered",
    "produced",
    "performed",
    "directed",
    "organized",
    "supervised",
];

/// Counts how many vocabulary entries occur as case-insensitive substrings.
pub fn count_matches(vocabulary: &[&str], lowercased_text: &str) -> usize {
    vocabulary
        .iter()
        .filter(|entry| lowercased_text.contains(&entry.to_lowercase()))
        .count()
}

pub fn any_match(vocabulary: &[&str], lowercased_text: &str) -> bool {
    vocabulary
        .iter()
        .any(|entry| lowercased_text.contains(&entry.to_lowercase()))
}
