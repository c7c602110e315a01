//! Team model.
//!
//! Teams are the schedulable units: each belongs to exactly one school,
//! plays in exactly one division, and has a named coach. The school is
//! referenced by name (denormalized for query convenience).

use serde::{Deserialize, Serialize};

use super::{Division, School};

/// A team entered in the season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier.
    pub id: String,
    /// Owning school name.
    pub school: String,
    /// The division this team plays in.
    pub division: Division,
    /// Coach name. One coach may run teams at different schools, and a
    /// coach's teams may never play at the same date and time.
    pub coach: String,
    /// Cluster override; falls back to the school's cluster when `None`.
    pub cluster: Option<String>,
}

impl Team {
    /// Creates a new team.
    pub fn new(id: impl Into<String>, school: impl Into<String>, division: Division) -> Self {
        Self {
            id: id.into(),
            school: school.into(),
            division,
            coach: String::new(),
            cluster: None,
        }
    }

    /// Sets the coach name.
    pub fn with_coach(mut self, coach: impl Into<String>) -> Self {
        self.coach = coach.into();
        self
    }

    /// Sets a cluster override.
    pub fn with_cluster(mut self, cluster: impl Into<String>) -> Self {
        self.cluster = Some(cluster.into());
        self
    }

    /// Effective cluster: the team override, else the school's cluster.
    pub fn effective_cluster<'a>(&'a self, school: &'a School) -> Option<&'a str> {
        self.cluster
            .as_deref()
            .or(school.cluster.as_deref())
    }
}
