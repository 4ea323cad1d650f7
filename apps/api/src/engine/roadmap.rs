//! Roadmap Synthesizer — turns a gap plan into a four-phase, twelve-month timeline.
//!
//! Every missing skill appears in each of phases 1–3 (fundamentals, projects,
//! specialization); skills are not partitioned across phases. Phase 4 is
//! fixed.

use serde::{Deserialize, Serialize};

use crate::engine::gap_plan::GapPlanItem;

const CLOSING_PHASE: [&str; 3] = [
    "Build a portfolio showcasing your projects",
    "Apply for internships or entry-level roles",
    "Network with professionals in the field",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roadmap {
    #[serde(rename = "Phase 1 (0-3 Months)")]
    pub fundamentals: Vec<String>,
    #[serde(rename = "Phase 2 (3-6 Months)")]
    pub projects: Vec<String>,
    #[serde(rename = "Phase 3 (6-9 Months)")]
    pub specialization: Vec<String>,
    #[serde(rename = "Phase 4 (9-12 Months)")]
    pub launch: Vec<String>,
}

pub fn synthesize(plan: &[GapPlanItem]) -> Roadmap {
    let launch = CLOSING_PHASE.iter().map(|s| s.to_string()).collect();

    if plan.is_empty() {
        return Roadmap {
            fundamentals: vec!["Strengthen your existing fundamentals".to_string()],
            projects: vec!["Build real-world projects with your current skills".to_string()],
            specialization: vec!["Specialize in an advanced area of the field".to_string()],
            launch,
        };
    }

    Roadmap {
        fundamentals: plan
            .iter()
            .map(|item| format!("Learn fundamentals of {}", item.skill))
            .collect(),
        projects: plan
            .iter()
            .map(|item| format!("Build practical projects using {}", item.skill))
            .collect(),
        specialization: plan
            .iter()
            .map(|item| format!("Advanced specialization in {}", item.skill))
            .collect(),
        launch,
    }
}
