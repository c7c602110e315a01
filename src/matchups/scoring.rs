//! Matchup priority scoring.
//!
//! A pure step function of matchup size with additive tier, cluster, and
//! rivalry alignment. Larger matchups are strongly preferred: a school
//! pair meeting in many shared divisions can be clustered onto one
//! court-night. Same-school pairs score negative infinity; the
//! constraint validator guards the same case independently.

use crate::config::ScoringWeights;
use crate::models::{GameRequest, School};

/// Computes a matchup's placement priority.
///
/// `smaller_slate` is the team count of whichever school fields fewer
/// teams; a matchup reaching that count covers the smaller school's full
/// slate and takes the top step. `at_meeting_cap` flags that at least one
/// requested pair already sits at the season meeting cap.
///
/// Higher scores are placed earlier.
pub fn matchup_score(
    school_a: &School,
    school_b: &School,
    games: &[GameRequest],
    smaller_slate: usize,
    at_meeting_cap: bool,
    weights: &ScoringWeights,
) -> f64 {
    if school_a.name == school_b.name {
        return f64::NEG_INFINITY;
    }

    let n = games.len();
    let mut score = if smaller_slate > 0 && n >= smaller_slate {
        weights.full_slate_base + n as f64 * weights.full_slate_per_game
    } else if n >= weights.large_threshold {
        weights.large_base + n as f64 * weights.large_per_game
    } else {
        weights.small_base + n as f64 * weights.small_per_game
    };

    if school_a.same_tier(school_b) {
        score += weights.same_tier_bonus;
    }
    if school_a.same_cluster(school_b) {
        score += weights.same_cluster_bonus;
    }
    if school_a.is_rival(&school_b.name) || school_b.is_rival(&school_a.name) {
        score += weights.rivalry_bonus;
    }
    if at_meeting_cap {
        score -= weights.meeting_cap_penalty;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Division;

    fn requests(n: usize) -> Vec<GameRequest> {
        (0..n)
            .map(|i| {
                GameRequest::new(
                    format!("A{i}"),
                    format!("B{i}"),
                    Division::ALL[i % Division::ALL.len()],
                )
            })
            .collect()
    }

    fn w() -> ScoringWeights {
        ScoringWeights::default()
    }

    #[test]
    fn test_same_school_is_negative_infinity() {
        let s = School::new("Faith");
        let score = matchup_score(&s, &s.clone(), &requests(4), 4, false, &w());
        assert_eq!(score, f64::NEG_INFINITY);
    }

    #[test]
    fn test_full_slate_step() {
        let a = School::new("A");
        let b = School::new("B");
        // 4 games, smaller school fields 4 teams → full slate
        let score = matchup_score(&a, &b, &requests(4), 4, false, &w());
        assert!((score - 1040.0).abs() < 1e-10);
    }

    #[test]
    fn test_large_step() {
        let a = School::new("A");
        let b = School::new("B");
        // 3 games against a 5-team slate → middle step
        let score = matchup_score(&a, &b, &requests(3), 5, false, &w());
        assert!((score - 530.0).abs() < 1e-10);
    }

    #[test]
    fn test_small_step() {
        let a = School::new("A");
        let b = School::new("B");
        let score = matchup_score(&a, &b, &requests(2), 5, false, &w());
        assert!((score - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_alignment_bonuses_are_additive() {
        let a = School::new("A").with_tier("A").with_cluster("North");
        let b = School::new("B")
            .with_tier("A")
            .with_cluster("North")
            .with_rival("A");
        let plain = matchup_score(&School::new("A"), &School::new("B"), &requests(2), 5, false, &w());
        let aligned = matchup_score(&a, &b, &requests(2), 5, false, &w());
        assert!((aligned - plain - 125.0).abs() < 1e-10); // 50 + 50 + 25
    }

    #[test]
    fn test_meeting_cap_penalty() {
        let a = School::new("A");
        let b = School::new("B");
        let free = matchup_score(&a, &b, &requests(3), 5, false, &w());
        let capped = matchup_score(&a, &b, &requests(3), 5, true, &w());
        assert!((free - capped - 200.0).abs() < 1e-10);
    }

    #[test]
    fn test_full_slate_outranks_large() {
        let a = School::new("A");
        let b = School::new("B");
        let full = matchup_score(&a, &b, &requests(2), 2, false, &w());
        let large = matchup_score(&a, &b, &requests(5), 8, false, &w());
        assert!(full > large);
    }
}
