//! Static industry profile table, loaded into the binary once and shared
//! read-only across requests. Vocabulary entries are a compatibility surface
//! with the existing frontend and must stay verbatim.

/// Expectations for one profession.
#[derive(Debug, Clone, Copy)]
pub struct IndustryProfile {
    pub key: &'static str,
    pub required_skills: &'static [&'static str],
    pub recommended_sections: &'static [&'static str],
    pub action_verbs: &'static [&'static str],
    pub achievements_keywords: &'static [&'static str],
}

pub const PROFILES: &[IndustryProfile] = &[
    IndustryProfile {
        key: "software_engineer",
        required_skills: &[
            "python",
            "java",
            "javascript",
            "c++",
            "ruby",
            "go",
            "rust",
            "react",
            "angular",
            "vue",
            "django",
            "flask",
            "spring",
            "node",
            "database",
            "sql",
            "nosql",
            "mongodb",
            "postgresql",
            "mysql",
            "aws",
            "azure",
            "gcp",
            "cloud",
            "docker",
            "kubernetes",
            "git",
            "ci/cd",
            "testing",
            "algorithms",
            "data structures",
        ],
        recommended_sections: &[
            "technical skills",
            "projects",
            "experience",
            "education",
            "github",
            "open source contributions",
            "certifications",
        ],
        action_verbs: &[
            "developed",
            "implemented",
            "architected",
            "designed",
            "built",
            "optimized",
            "debugged",
            "refactored",
            "deployed",
            "maintained",
            "tested",
            "automated",
            "integrated",
            "solved",
            "improved",
        ],
        achievements_keywords: &[
            "hackathon",
            "coding",
            "competition",
            "ideathon",
            "optimization",
            "deployment",
            "refactoring",
            "scalability",
            "automation",
            "integration",
            "debugging",
            "performance",
            "contribution",
            "latency",
            "efficiency",
            "innovation",
        ],
    },
    IndustryProfile {
        key: "data_scientist",
        required_skills: &[
            "python",
            "r",
            "sql",
            "pandas",
            "numpy",
            "scikit-learn",
            "tensorflow",
            "pytorch",
            "machine learning",
            "data analysis",
            "data visualization",
            "statistics",
            "big data",
            "hadoop",
            "spark",
            "data mining",
            "nlp",
            "computer vision",
            "deep learning",
            "tableau",
            "power bi",
            "a/b testing",
            "experiment design",
            "feature engineering",
        ],
        recommended_sections: &[
            "technical skills",
            "projects",
            "experience",
            "education",
            "publications",
            "research",
            "certifications",
        ],
        action_verbs: &[
            "analyzed",
            "modeled",
            "predicted",
            "improved",
            "developed",
            "implemented",
            "researched",
            "visualized",
            "extracted",
            "processed",
            "trained",
            "evaluated",
            "optimized",
            "designed",
            "deployed",
        ],
        achievements_keywords: &[
            "hackathon",
            "coding",
            "competition",
            "ideathon",
            "optimization",
            "deployment",
            "refactoring",
            "scalability",
            "automation",
            "integration",
            "debugging",
            "performance",
            "contribution",
            "latency",
            "efficiency",
            "innovation",
            "accuracy",
            "insights",
            "prediction",
            "analysis",
            "visualization",
        ],
    },
    IndustryProfile {
        key: "marketing",
        required_skills: &[
            "social media",
            "content marketing",
            "seo",
            "sem",
            "email marketing",
            "google analytics",
            "copywriting",
            "market research",
            "brand management",
            "campaign management",
            "adobe creative suite",
            "canva",
            "hubspot",
            "mailchimp",
            "facebook ads",
            "google ads",
            "marketing strategy",
            "analytics",
            "customer acquisition",
            "a/b testing",
        ],
        recommended_sections: &[
            "skills",
            "experience",
            "education",
            "campaigns",
            "portfolio",
            "certifications",
            "achievements",
        ],
        action_verbs: &[
            "launched",
            "created",
            "managed",
            "designed",
            "generated",
            "implemented",
            "developed",
            "increased",
            "grew",
            "coordinated",
            "executed",
            "optimized",
            "analyzed",
            "strategized",
            "produced",
        ],
        achievements_keywords: &[
            "conversion",
            "traffic",
            "engagement",
            "growth",
            "reach",
            "branding",
            "roi",
            "campaign",
            "strategy",
            "leads",
            "acquisition",
            "retention",
            "optimization",
            "content",
            "promotion",
        ],
    },
    IndustryProfile {
        key: "finance",
        required_skills: &[
            "financial analysis",
            "excel",
            "financial modeling",
            "accounting",
            "budgeting",
            "forecasting",
            "bloomberg",
            "capital markets",
            "valuation",
            "financial reporting",
            "risk management",
            "investment",
            "portfolio management",
            "quickbooks",
            "sap",
            "cfa",
            "financial statements",
            "taxes",
            "regulations",
        ],
        recommended_sections: &[
            "skills",
            "experience",
            "education",
            "certifications",
            "achievements",
            "financial expertise",
            "licenses",
        ],
        action_verbs: &[
            "analyzed",
            "managed",
            "increased",
            "reduced",
            "improved",
            "developed",
            "forecasted",
            "budgeted",
            "reconciled",
            "audited",
            "allocated",
            "assessed",
            "calculated",
            "evaluated",
            "streamlined",
        ],
        achievements_keywords: &[
            "profit",
            "costs",
            "savings",
            "forecast",
            "budgeting",
            "modeling",
            "valuation",
            "compliance",
            "accuracy",
            "investment",
            "reporting",
            "auditing",
            "efficiency",
            "risk",
            "regulation",
        ],
    },
];

pub fn find(key: &str) -> Option<&'static IndustryProfile> {
    PROFILES.iter().find(|profile| profile.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_four_reference_profiles_are_present() {
        let keys: Vec<&str> = PROFILES.iter().map(|profile| profile.key).collect();
        assert_eq!(
            keys,
            ["software_engineer", "data_scientist", "marketing", "finance"]
        );
    }

    #[test]
    fn lookup_misses_return_none() {
        assert!(find("unknown_field").is_none());
        assert!(find("software_engineer").is_some());
    }
}
