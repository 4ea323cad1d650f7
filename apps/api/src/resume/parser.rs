//! Field extraction from cleaned résumé text.
//!
//! Skills come from a fixed vocabulary matched case-insensitively on token
//! boundaries. Education and experience are the lines under their section
//! headers, up to the next known header.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

const SKILL_VOCABULARY: &[&str] = &[
    // languages
    "python", "java", "c", "c++", "c#", "javascript", "typescript", "go", "rust", "php", "ruby",
    "swift", "kotlin", "r", "matlab",
    // ML / data
    "machine learning", "deep learning", "artificial intelligence", "nlp", "computer vision",
    "data science", "data analysis", "feature engineering", "model training", "model evaluation",
    "tensorflow", "pytorch", "keras", "scikit-learn", "xgboost", "lightgbm", "opencv", "nltk",
    "spacy", "hugging face", "transformers",
    "numpy", "pandas", "matplotlib", "seaborn", "plotly", "power bi", "tableau", "excel",
    // databases
    "sql", "mysql", "postgresql", "sqlite", "mongodb", "redis", "oracle", "firebase",
    // web
    "html", "css", "react", "angular", "vue", "node.js", "express.js", "django", "flask",
    "fastapi", "rest api", "graphql",
    // tooling / cloud
    "git", "github", "gitlab", "docker", "kubernetes", "aws", "azure", "google cloud", "ci/cd",
    "linux", "bash", "powershell",
    // fundamentals
    "data structures", "algorithms", "object oriented programming", "operating systems",
    "computer networks", "database management systems", "software engineering", "system design",
];

const SECTION_HEADERS: &[&str] = &[
    "education", "academic background", "academics", "qualifications",
    "experience", "work experience", "professional experience", "employment", "internship",
    "internships",
    "skills", "technical skills", "skill set",
    "projects", "project experience",
    "certifications", "achievements",
    "research", "publications",
    "summary", "profile", "objective",
    "interests", "hobbies",
];

const EDUCATION_HEADERS: &[&str] = &["education", "academic background", "academics", "qualifications"];

const EXPERIENCE_HEADERS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "employment",
    "internship",
    "internships",
];

/// Structured fields pulled out of a résumé.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedResume {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
}

pub fn parse_resume(text: &str) -> ParsedResume {
    ParsedResume {
        email: extract_email(text),
        phone: extract_phone(text),
        skills: extract_skills(text),
        education: extract_section(text, EDUCATION_HEADERS),
        experience: extract_section(text, EXPERIENCE_HEADERS),
    }
}

pub fn extract_email(text: &str) -> Option<String> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
                .expect("email pattern is valid")
        })
        .find(text)
        .map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE
        .get_or_init(|| {
            Regex::new(r"(?:\+?\d{1,3}[\s-]?)?\d{10}").expect("phone pattern is valid")
        })
        .find(text)
        .map(|m| m.as_str().to_string())
}

/// Vocabulary skills present in `text`, in vocabulary order, lower-cased.
pub fn extract_skills(text: &str) -> Vec<String> {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        SKILL_VOCABULARY
            .iter()
            .map(|skill| {
                // `+` and `#` count as token characters so "c" does not match inside "c++".
                let pattern = format!(
                    r"(?:^|[^a-z0-9+#]){}(?:$|[^a-z0-9+#])",
                    regex::escape(skill)
                );
                let regex = Regex::new(&pattern).expect("escaped skill pattern is valid");
                (*skill, regex)
            })
            .collect()
    });

    let lowered = text.to_lowercase();
    patterns
        .iter()
        .filter(|(_, regex)| regex.is_match(&lowered))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

/// Text after `header` when `line` opens with it as whole words, ignoring case.
fn strip_header<'a>(line: &'a str, header: &str) -> Option<&'a str> {
    let mut rest = line.trim_start_matches(|c: char| !c.is_alphanumeric());
    for word in header.split(' ') {
        rest = rest.trim_start();
        let head = rest.get(..word.len())?;
        if !head.eq_ignore_ascii_case(word) {
            return None;
        }
        rest = &rest[word.len()..];
        if rest.starts_with(|c: char| c.is_alphanumeric()) {
            return None;
        }
    }
    Some(rest.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '-' | '|' | ',')))
}

/// Inline content of `line` if it opens with any of `headers`. Longest header wins.
fn match_header<'a>(line: &'a str, headers: &[&str]) -> Option<&'a str> {
    headers
        .iter()
        .filter_map(|header| strip_header(line, header))
        .min_by_key(|rest| rest.len())
}

/// Lines following the first `targets` header, stopping at any other known header.
///
/// A header may carry content on the same line ("Education: B.Tech, 2021");
/// that remainder is kept as the first content line.
fn extract_section(text: &str, targets: &[&str]) -> Vec<String> {
    let mut content = Vec::new();
    let mut capturing = false;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(inline) = match_header(line, targets) {
            capturing = true;
            if !inline.is_empty() {
                content.push(inline.to_string());
            }
            continue;
        }
        if !capturing {
            continue;
        }
        if match_header(line, SECTION_HEADERS).is_some() {
            break;
        }
        content.push(line.to_string());
    }

    content
}
