//! Season scheduling engine for youth basketball leagues.
//!
//! Takes a league's teams, schools, and facilities and produces a full
//! season schedule: which teams meet, where, and when, subject to the
//! league's placement rules (shared gyms, shared coaches, weeknight
//! limits, rest gaps, and facility fit).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Team`, `School`, `Facility`, `Game`,
//!   `TimeSlot`, `SchoolMatchup`, `SeasonSchedule`
//! - **`config`**: Season rules, day windows, and scoring weights
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling references)
//! - **`matchups`**: School pairing and priority scoring
//! - **`allocator`**: Constraint validation and priority-driven slot placement
//! - **`audit`**: Post-hoc invariant checks on a committed schedule
//! - **`report`**: Season summary statistics
//!
//! # Pipeline
//!
//! ```text
//! validate_input → MatchupGenerator → SlotAllocator → audit_schedule
//! ```
//!
//! The whole pipeline is deterministic: the same input always yields the
//! same schedule.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Nurmi et al. (2010), "A Framework for School Timetabling Problem"

pub mod allocator;
pub mod audit;
pub mod config;
pub mod matchups;
pub mod models;
pub mod report;
pub mod validation;
