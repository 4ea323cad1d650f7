//! Gap Planner — learning plan for the required skills a user is missing.
//!
//! Unlike the scorer, comparison here is case-insensitive: both sides are
//! lower-cased before the set difference.

use std::cmp::Reverse;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::engine::catalog::CareerDefinition;

/// Guidance used when the career has no learning path for a skill.
pub const FALLBACK_FOCUS: &str = "Structured learning required";

/// Skills classified `Low`. Extend here; lower-case entries only.
const LOW_DIFFICULTY_SKILLS: &[&str] = &["communication", "general knowledge"];

/// Skills classified `Medium`. Anything in neither table is `High`.
const MEDIUM_DIFFICULTY_SKILLS: &[&str] = &["python", "statistics", "analysis"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Low,
    Medium,
    High,
}

impl Difficulty {
    pub fn estimated_timeline(self) -> &'static str {
        match self {
            Difficulty::Low => "1-2 months",
            Difficulty::Medium => "2-3 months",
            Difficulty::High => "3-4 months",
        }
    }
}

/// One missing skill with what to study and how long it should take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapPlanItem {
    pub skill: String,
    pub recommended_focus: String,
    pub difficulty: Difficulty,
    pub estimated_timeline: String,
}

/// Static lookup, not derived from any skill metadata.
pub fn classify_difficulty(skill: &str) -> Difficulty {
    let skill = skill.to_lowercase();
    if LOW_DIFFICULTY_SKILLS.contains(&skill.as_str()) {
        Difficulty::Low
    } else if MEDIUM_DIFFICULTY_SKILLS.contains(&skill.as_str()) {
        Difficulty::Medium
    } else {
        Difficulty::High
    }
}

/// Builds the plan for `required_skills − user_skills` (lower-cased).
///
/// Items come out High first, then Medium, then Low. The sort is stable, so
/// items of equal difficulty keep the career's skill order.
pub fn plan<'a, I>(user_skills: I, career: &CareerDefinition) -> Vec<GapPlanItem>
where
    I: IntoIterator<Item = &'a String>,
{
    let known: HashSet<String> = user_skills.into_iter().map(|s| s.to_lowercase()).collect();
    let mut emitted = HashSet::new();

    let mut items: Vec<GapPlanItem> = career
        .required_skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| !known.contains(s))
        .filter(|s| emitted.insert(s.clone()))
        .map(|skill| {
            let difficulty = classify_difficulty(&skill);
            GapPlanItem {
                recommended_focus: career
                    .learning_path(&skill)
                    .unwrap_or(FALLBACK_FOCUS)
                    .to_string(),
                estimated_timeline: difficulty.estimated_timeline().to_string(),
                difficulty,
                skill,
            }
        })
        .collect();

    items.sort_by_key(|item| Reverse(item.difficulty));
    items
}
