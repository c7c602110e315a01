//! School model.
//!
//! Schools own teams and (optionally) a home facility. Tier and cluster
//! labels drive the soft matchup preferences: tiers group schools by
//! competitive strength, clusters by geography.

use serde::{Deserialize, Serialize};

/// A school fielding one or more teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    /// Unique school name.
    pub name: String,
    /// Competitive-strength grouping (optional).
    pub tier: Option<String>,
    /// Geographic grouping (optional).
    pub cluster: Option<String>,
    /// Preferred opponents; scoring awards a bonus for rival pairs.
    pub rivals: Vec<String>,
    /// Excluded opponents; no matchup is generated against these schools.
    pub do_not_play: Vec<String>,
    /// Name of the facility this school owns, if any.
    pub home_facility: Option<String>,
}

impl School {
    /// Creates a new school.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tier: None,
            cluster: None,
            rivals: Vec::new(),
            do_not_play: Vec::new(),
            home_facility: None,
        }
    }

    /// Sets the competitive tier.
    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tier = Some(tier.into());
        self
    }

    /// Sets the geographic cluster.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Adds a rival school.
    pub fn with_rival(mut self, rival: impl Into<String>) -> Self {
        self.rivals.push(rival.into());
        self
    }

    /// Adds a do-not-play exclusion.
    pub fn with_do_not_play(mut self, school: impl Into<String>) -> Self {
        self.do_not_play.push(school.into());
        self
    }

    /// Sets the owned home facility.
    pub fn with_home_facility(mut self, facility: impl Into<String>) -> Self {
        self.home_facility = Some(facility.into());
        self
    }

    /// Whether the named school is a rival.
    pub fn is_rival(&self, other: &str) -> bool {
        self.rivals.iter().any(|r| r == other)
    }

    /// Whether the named school is on the do-not-play list.
    pub fn refuses_to_play(&self, other: &str) -> bool {
        self.do_not_play.iter().any(|s| s == other)
    }

    /// Whether both schools carry a tier and the tiers match.
    pub fn same_tier(&self, other: &School) -> bool {
        match (&self.tier, &other.tier) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Whether both schools carry a cluster and the clusters match.
    pub fn same_cluster(&self, other: &School) -> bool {
        match (&self.cluster, &other.cluster) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_school_builder() {
        let s = School::new("Faith")
            .with_tier("A")
            .with_cluster("North")
            .with_rival("Legacy")
            .with_do_not_play("Somerset")
            .with_home_facility("Faith Gym");

        assert_eq!(s.name, "Faith");
        assert_eq!(s.tier.as_deref(), Some("A"));
        assert_eq!(s.cluster.as_deref(), Some("North"));
        assert!(s.is_rival("Legacy"));
        assert!(!s.is_rival("Somerset"));
        assert!(s.refuses_to_play("Somerset"));
        assert!(!s.refuses_to_play("Legacy"));
        assert_eq!(s.home_facility.as_deref(), Some("Faith Gym"));
    }

    #[test]
    fn test_tier_and_cluster_matching() {
        let a = School::new("A").with_tier("A").with_cluster("North");
        let b = School::new("B").with_tier("A").with_cluster("South");
        let c = School::new("C"); // no tier, no cluster

        assert!(a.same_tier(&b));
        assert!(!a.same_cluster(&b));
        // Missing labels never match, even against other missing labels
        assert!(!a.same_tier(&c));
        assert!(!c.same_tier(&c.clone()));
    }
}
