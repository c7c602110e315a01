//! Matchup generation and prioritization.
//!
//! Enumerates legal cross-school team pairings per division, groups them
//! into school-level matchups, and assigns each a placement priority.
//! Output is deterministic: schools are visited in sorted-name order and
//! teams pair up in id order, so identical inputs always produce the
//! same matchup list.

mod generator;
mod scoring;

pub use generator::MatchupGenerator;
pub use scoring::matchup_score;
