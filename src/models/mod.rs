//! Scheduling domain models.
//!
//! Core data types for representing a league season: schools, teams,
//! divisions, facilities, matchups, and the committed schedule. Entities
//! are immutable for the duration of one scheduling run; only the
//! allocator's internal state mutates while games are committed.
//!
//! Cross-entity references (team → school, school → facility) are by
//! name, matching how the external loader hands the data over.

mod division;
mod facility;
mod game;
mod matchup;
mod school;
mod schedule;
mod team;

pub use division::Division;
pub use facility::Facility;
pub use game::{pair_key, Game, TimeSlot};
pub use matchup::{GameRequest, SchoolMatchup};
pub use school::School;
pub use schedule::{Deficiency, SeasonSchedule};
pub use team::Team;
