//! Match Scorer — weighted five-factor score for one (user, career) pair.
//!
//! Components and their ranges:
//! - skill overlap            × 35          → [0, 35]
//! - interest overlap         × 20          → [0, 20]
//! - growth or stability      × 2.5         → [0, 25]
//! - market demand            × 2           → [0, 20]
//! - risk alignment  10 − |risk − anchor|   → [−8, 10]
//!
//! Risk alignment is a signed penalty and the total is never clamped, so the
//! total spans [−8, 100] for an in-range catalog.
//!
//! Matching is case-sensitive and set-based.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::engine::catalog::CareerDefinition;
use crate::engine::profile::{CareerMode, UserProfile};

pub const SKILL_WEIGHT: f64 = 35.0;
pub const INTEREST_WEIGHT: f64 = 20.0;
pub const MODE_MULTIPLIER: f64 = 2.5;
pub const MARKET_MULTIPLIER: f64 = 2.0;
pub const RISK_CEILING: f64 = 10.0;

/// Explainable score. Each component is rounded to 2 dp; `total` is the
/// unrounded component sum, rounded to 2 dp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_score: f64,
    pub interest_score: f64,
    pub growth_or_stability_score: f64,
    pub market_score: f64,
    pub risk_alignment_score: f64,
    pub total: f64,
}

pub fn score(user: &UserProfile, career: &CareerDefinition) -> ScoreBreakdown {
    let skill = overlap_ratio(user.skills(), &career.required_skills) * SKILL_WEIGHT;
    let interest = overlap_ratio(user.interests(), &career.related_interests) * INTEREST_WEIGHT;

    let mode_raw = match user.career_mode() {
        CareerMode::Growth => career.growth_score,
        CareerMode::Stability => career.stability_score,
    };
    let mode = mode_raw * MODE_MULTIPLIER;

    let market = career.market_demand * MARKET_MULTIPLIER;

    let risk = RISK_CEILING - (career.risk_level - user.risk_preference().anchor()).abs();

    ScoreBreakdown {
        skill_score: round2(skill),
        interest_score: round2(interest),
        growth_or_stability_score: round2(mode),
        market_score: round2(market),
        risk_alignment_score: round2(risk),
        total: round2(skill + interest + mode + market + risk),
    }
}

/// Required skills the user already has, in catalog order.
pub fn matched_skills(user: &UserProfile, career: &CareerDefinition) -> Vec<String> {
    career
        .required_skills
        .iter()
        .filter(|s| user.skills().contains(*s))
        .cloned()
        .collect()
}

// `wanted` is non-empty and duplicate-free: the catalog enforces both on load.
fn overlap_ratio(have: &BTreeSet<String>, wanted: &[String]) -> f64 {
    let hits = wanted.iter().filter(|w| have.contains(*w)).count();
    hits as f64 / wanted.len() as f64
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::tests::career;
    use crate::engine::profile::RiskPreference;

    fn ml_engineer() -> CareerDefinition {
        let mut c = career(
            "Machine Learning Engineer",
            &["python", "math", "machine learning"],
            &["ai", "technology", "research"],
        );
        c.growth_score = 9.0;
        c.stability_score = 7.0;
        c.market_demand = 9.0;
        c.risk_level = 6.0;
        c
    }

    fn user(skills: &[&str], interests: &[&str], mode: CareerMode, risk: RiskPreference) -> UserProfile {
        UserProfile::new(skills.iter().copied(), interests.iter().copied(), mode, risk)
    }

    #[test]
    fn test_full_skill_match_example() {
        let u = user(
            &["python", "math", "machine learning"],
            &["ai", "technology"],
            CareerMode::Growth,
            RiskPreference::High,
        );
        let s = score(&u, &ml_engineer());
        assert_eq!(s.skill_score, 35.0);
        assert_eq!(s.interest_score, 13.33);
        assert_eq!(s.growth_or_stability_score, 22.5);
        assert_eq!(s.market_score, 18.0);
        assert_eq!(s.risk_alignment_score, 8.0);
        // 35 + 13.333.. + 22.5 + 18 + 8
        assert_eq!(s.total, 96.83);
    }

    #[test]
    fn test_stability_mode_uses_stability_score() {
        let u = user(&[], &[], CareerMode::Stability, RiskPreference::Medium);
        let s = score(&u, &ml_engineer());
        assert_eq!(s.growth_or_stability_score, 17.5);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let u = user(&["Python", "MATH"], &["AI"], CareerMode::Growth, RiskPreference::Low);
        let s = score(&u, &ml_engineer());
        assert_eq!(s.skill_score, 0.0);
        assert_eq!(s.interest_score, 0.0);
    }

    #[test]
    fn test_risk_alignment_goes_negative_for_extreme_mismatch() {
        let mut c = ml_engineer();
        c.risk_level = 10.0;
        let u = user(&[], &[], CareerMode::Growth, RiskPreference::Low);
        let s = score(&u, &c);
        assert_eq!(s.risk_alignment_score, 2.0);

        c.risk_level = 0.0;
        let u = user(&[], &[], CareerMode::Growth, RiskPreference::High);
        assert_eq!(score(&u, &c).risk_alignment_score, 2.0);

        // Out-of-range risk levels are caught by the catalog, but the formula itself is unclamped.
        c.risk_level = 20.0;
        let u = user(&[], &[], CareerMode::Growth, RiskPreference::Low);
        assert_eq!(score(&u, &c).risk_alignment_score, -8.0);
    }

    #[test]
    fn test_components_stay_within_bounds() {
        let catalog = crate::engine::catalog::CareerCatalog::builtin().unwrap();
        let modes = [CareerMode::Growth, CareerMode::Stability];
        let risks = [RiskPreference::Low, RiskPreference::Medium, RiskPreference::High];
        let u_skills = ["python", "communication", "seo", "linux"];

        for career in catalog.all() {
            for mode in modes {
                for risk in risks {
                    let s = score(&user(&u_skills, &["business"], mode, risk), career);
                    assert!((0.0..=35.0).contains(&s.skill_score));
                    assert!((0.0..=20.0).contains(&s.interest_score));
                    assert!((0.0..=25.0).contains(&s.growth_or_stability_score));
                    assert!((0.0..=20.0).contains(&s.market_score));
                    assert!(s.risk_alignment_score <= 10.0);
                    assert!(s.total <= 100.0);
                }
            }
        }
    }

    #[test]
    fn test_total_rounds_unrounded_sum() {
        let mut c = career("Thirds", &["a", "b", "c"], &["x", "y", "z"]);
        c.growth_score = 0.0;
        c.market_demand = 0.0;
        c.risk_level = 2.0;
        let u = user(&["a"], &["x"], CareerMode::Growth, RiskPreference::Low);
        let s = score(&u, &c);
        assert_eq!(s.skill_score, 11.67);
        assert_eq!(s.interest_score, 6.67);
        // 11.666.. + 6.666.. + 10 = 28.333.., not 11.67 + 6.67 + 10 = 28.34
        assert_eq!(s.total, 28.33);
    }

    #[test]
    fn test_matched_skills_keep_catalog_order() {
        let u = user(
            &["machine learning", "python"],
            &[],
            CareerMode::Growth,
            RiskPreference::Low,
        );
        assert_eq!(matched_skills(&u, &ml_engineer()), vec!["python", "machine learning"]);
    }
}
