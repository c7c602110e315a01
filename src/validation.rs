//! Input validation for a scheduling run.
//!
//! Checks the structural integrity of teams, schools, and facilities
//! before matchup generation. Detects:
//! - Duplicate IDs and names
//! - Dangling school and facility references
//! - Facilities with no courts
//!
//! All problems are collected and reported together rather than failing
//! on the first one.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Facility, School, Team};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A structural problem in the scheduling input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Two teams share the same ID.
    #[error("duplicate team ID: {0}")]
    DuplicateTeamId(String),
    /// Two schools share the same name.
    #[error("duplicate school name: {0}")]
    DuplicateSchool(String),
    /// Two facilities share the same name.
    #[error("duplicate facility name: {0}")]
    DuplicateFacility(String),
    /// A team belongs to a school that doesn't exist.
    #[error("team '{team}' references unknown school '{school}'")]
    UnknownTeamSchool { team: String, school: String },
    /// A school's home facility doesn't exist.
    #[error("school '{school}' references unknown home facility '{facility}'")]
    UnknownHomeFacility { school: String, facility: String },
    /// A school's rival or do-not-play entry doesn't exist.
    #[error("school '{school}' lists unknown school '{other}'")]
    UnknownSchoolReference { school: String, other: String },
    /// A facility's owner doesn't exist.
    #[error("facility '{facility}' owned by unknown school '{school}'")]
    UnknownFacilityOwner { facility: String, school: String },
    /// A facility has no courts to play on.
    #[error("facility '{0}' has zero courts")]
    NoCourts(String),
}

/// Validates the entities of a scheduling run.
///
/// Checks:
/// 1. No duplicate team IDs, school names, or facility names
/// 2. Every team's school exists
/// 3. Every home facility, facility owner, rival, and do-not-play
///    reference resolves
/// 4. Every facility has at least one court
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    teams: &[Team],
    schools: &[School],
    facilities: &[Facility],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut school_names = HashSet::new();
    for school in schools {
        if !school_names.insert(school.name.as_str()) {
            errors.push(ValidationError::DuplicateSchool(school.name.clone()));
        }
    }

    let mut facility_names = HashSet::new();
    for facility in facilities {
        if !facility_names.insert(facility.name.as_str()) {
            errors.push(ValidationError::DuplicateFacility(facility.name.clone()));
        }
        if facility.courts == 0 {
            errors.push(ValidationError::NoCourts(facility.name.clone()));
        }
        if let Some(owner) = &facility.owner {
            if !school_names.contains(owner.as_str()) {
                errors.push(ValidationError::UnknownFacilityOwner {
                    facility: facility.name.clone(),
                    school: owner.clone(),
                });
            }
        }
    }

    let mut team_ids = HashSet::new();
    for team in teams {
        if !team_ids.insert(team.id.as_str()) {
            errors.push(ValidationError::DuplicateTeamId(team.id.clone()));
        }
        if !school_names.contains(team.school.as_str()) {
            errors.push(ValidationError::UnknownTeamSchool {
                team: team.id.clone(),
                school: team.school.clone(),
            });
        }
    }

    for school in schools {
        if let Some(home) = &school.home_facility {
            if !facility_names.contains(home.as_str()) {
                errors.push(ValidationError::UnknownHomeFacility {
                    school: school.name.clone(),
                    facility: home.clone(),
                });
            }
        }
        for other in school.rivals.iter().chain(&school.do_not_play) {
            if !school_names.contains(other.as_str()) {
                errors.push(ValidationError::UnknownSchoolReference {
                    school: school.name.clone(),
                    other: other.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Division;

    fn sample_schools() -> Vec<School> {
        vec![
            School::new("Ashford").with_home_facility("Ashford Gym"),
            School::new("Briar"),
        ]
    }

    fn sample_facilities() -> Vec<Facility> {
        vec![Facility::new("Ashford Gym", 2).with_owner("Ashford")]
    }

    fn sample_teams() -> Vec<Team> {
        vec![
            Team::new("A-MS", "Ashford", Division::MsComp),
            Team::new("B-MS", "Briar", Division::MsComp),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&sample_teams(), &sample_schools(), &sample_facilities()).is_ok());
    }

    #[test]
    fn test_duplicate_team_id() {
        let teams = vec![
            Team::new("A-MS", "Ashford", Division::MsComp),
            Team::new("A-MS", "Ashford", Division::BoysJv),
        ];
        let errors = validate_input(&teams, &sample_schools(), &sample_facilities()).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateTeamId("A-MS".into())));
    }

    #[test]
    fn test_duplicate_school_and_facility() {
        let schools = vec![School::new("Ashford"), School::new("Ashford")];
        let facilities = vec![Facility::new("Gym", 1), Facility::new("Gym", 1)];
        let errors = validate_input(&[], &schools, &facilities).unwrap_err();
        assert!(errors.contains(&ValidationError::DuplicateSchool("Ashford".into())));
        assert!(errors.contains(&ValidationError::DuplicateFacility("Gym".into())));
    }

    #[test]
    fn test_unknown_team_school() {
        let teams = vec![Team::new("X-MS", "Nowhere", Division::MsComp)];
        let errors = validate_input(&teams, &sample_schools(), &sample_facilities()).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::UnknownTeamSchool { .. }
        ));
    }

    #[test]
    fn test_unknown_home_facility() {
        let schools = vec![School::new("Ashford").with_home_facility("Missing Gym")];
        let errors = validate_input(&[], &schools, &[]).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::UnknownHomeFacility { .. }
        ));
    }

    #[test]
    fn test_unknown_facility_owner_and_zero_courts() {
        let facilities = vec![Facility::new("Orphan Gym", 0).with_owner("Ghost")];
        let errors = validate_input(&[], &sample_schools(), &facilities).unwrap_err();
        assert!(errors.contains(&ValidationError::NoCourts("Orphan Gym".into())));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnknownFacilityOwner { .. })));
    }

    #[test]
    fn test_unknown_do_not_play_reference() {
        let schools = vec![School::new("Ashford").with_do_not_play("Phantom")];
        let errors = validate_input(&[], &schools, &[]).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::UnknownSchoolReference { .. }
        ));
    }

    #[test]
    fn test_multiple_errors_collected() {
        let teams = vec![Team::new("X", "Nowhere", Division::MsComp)];
        let facilities = vec![Facility::new("Gym", 0)];
        let errors = validate_input(&teams, &sample_schools(), &facilities).unwrap_err();
        assert!(errors.len() >= 2);
    }

    #[test]
    fn test_error_messages_render() {
        let err = ValidationError::UnknownTeamSchool {
            team: "X".into(),
            school: "Nowhere".into(),
        };
        assert_eq!(
            err.to_string(),
            "team 'X' references unknown school 'Nowhere'"
        );
    }
}
