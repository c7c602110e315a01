//! Facility model.
//!
//! A facility is a gym with one or more courts. Reduced-rim facilities
//! are configured for the youngest recreational division and host no
//! other games. The owner back-reference drives the home-team rule.

use serde::{Deserialize, Serialize};

/// A gym with one or more courts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Unique facility name.
    pub name: String,
    /// Number of courts (1-based court numbers).
    pub courts: u8,
    /// Whether the rims are lowered for the youngest recreational tier.
    pub reduced_rims: bool,
    /// Owning school, if any. Games here always have that school at home.
    pub owner: Option<String>,
}

impl Facility {
    /// Creates a new facility.
    pub fn new(name: impl Into<String>, courts: u8) -> Self {
        Self {
            name: name.into(),
            courts,
            reduced_rims: false,
            owner: None,
        }
    }

    /// Marks the facility as reduced-rim.
    pub fn with_reduced_rims(mut self) -> Self {
        self.reduced_rims = true;
        self
    }

    /// Sets the owning school.
    pub fn with_owner(mut self, school: impl Into<String>) -> Self {
        self.owner = Some(school.into());
        self
    }

    /// Court numbers at this facility (1..=courts).
    pub fn court_numbers(&self) -> std::ops::RangeInclusive<u8> {
        1..=self.courts
    }

    /// Whether the named school owns this facility.
    pub fn is_owned_by(&self, school: &str) -> bool {
        self.owner.as_deref() == Some(school)
    }
}
