//! Priority-driven slot allocation.
//!
//! # Algorithm
//!
//! 1. Sort matchups by priority, descending. The sort is stable, so
//!    equal-priority matchups keep generation order — the deterministic
//!    tie-break this crate guarantees.
//! 2. For each matchup, walk an iterative candidate cursor over
//!    (date, facility, court, starting slot) and try to place the whole
//!    game list as a contiguous back-to-back block on one court,
//!    validating every game against the committed state before
//!    committing any (all-or-nothing per candidate).
//! 3. When no single court-night holds the full block, retry with
//!    progressively smaller prefixes across multiple court-nights.
//! 4. Matchups whose games cannot all be placed end PartiallyPlaced or
//!    Deferred; shortfalls land in the deficiency report. Running out
//!    of capacity is reported, never raised.
//!
//! Facility preference per matchup: the first school's owned facility,
//! then the second school's, then every facility in input order.

mod constraints;
mod state;

pub use constraints::{check, CandidatePlacement, Rejection};
pub use state::ScheduleState;

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};

use crate::config::Rules;
use crate::matchups::MatchupGenerator;
use crate::models::{
    Deficiency, Facility, Game, GameRequest, School, SchoolMatchup, SeasonSchedule, Team, TimeSlot,
};

/// Placement state of one matchup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchupStatus {
    /// Not yet attempted.
    Pending,
    /// Every requested game committed.
    Placed,
    /// Some games committed, the rest ran out of legal slots.
    PartiallyPlaced,
    /// No game could be placed anywhere in the season.
    Deferred,
}

/// Final accounting for one matchup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupOutcome {
    /// First school of the pair.
    pub school_a: String,
    /// Second school of the pair.
    pub school_b: String,
    /// Games requested by the matchup.
    pub requested: usize,
    /// Games actually committed.
    pub placed: usize,
    /// Final state.
    pub status: MatchupStatus,
}

/// The allocator's complete output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// The committed season schedule plus deficiency report.
    pub schedule: SeasonSchedule,
    /// Per-matchup accounting, in placement order.
    pub outcomes: Vec<MatchupOutcome>,
}

/// Places scored matchups onto the season's date×facility×court×time grid.
#[derive(Debug)]
pub struct SlotAllocator<'a> {
    teams: HashMap<&'a str, &'a Team>,
    schools: HashMap<&'a str, &'a School>,
    facilities: &'a [Facility],
    rules: &'a Rules,
}

impl<'a> SlotAllocator<'a> {
    /// Creates an allocator over the season's entities.
    pub fn new(
        teams: &'a [Team],
        schools: &'a [School],
        facilities: &'a [Facility],
        rules: &'a Rules,
    ) -> Self {
        Self {
            teams: teams.iter().map(|t| (t.id.as_str(), t)).collect(),
            schools: schools.iter().map(|s| (s.name.as_str(), s)).collect(),
            facilities,
            rules,
        }
    }

    /// Consumes matchups in descending priority order and commits what fits.
    pub fn allocate(&self, matchups: &[SchoolMatchup]) -> AllocationResult {
        let mut ordered: Vec<&SchoolMatchup> = matchups.iter().collect();
        // Stable: ties keep generation order
        ordered.sort_by(|a, b| {
            b.priority
                .partial_cmp(&a.priority)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let slots_by_date: Vec<(NaiveDate, Vec<NaiveTime>)> = self
            .rules
            .season_dates()
            .into_iter()
            .map(|d| (d, self.rules.day_slots(d)))
            .collect();

        let mut state = ScheduleState::new();
        let mut schedule = SeasonSchedule::new();
        let mut outcomes = Vec::with_capacity(ordered.len());
        let mut next_id = 1usize;

        for matchup in ordered {
            let requested = matchup.games.len();
            let facility_order = self.facility_preference(matchup);
            let mut rest = order_block(&matchup.games);
            let mut placed = 0usize;

            while !rest.is_empty() {
                let mut advanced = false;
                for size in (1..=rest.len()).rev() {
                    if let Some(games) = self.place_block(
                        &rest[..size],
                        &facility_order,
                        &slots_by_date,
                        &mut state,
                        &mut next_id,
                    ) {
                        placed += games.len();
                        for game in games {
                            schedule.add_game(game);
                        }
                        rest.drain(..size);
                        advanced = true;
                        break;
                    }
                }
                if !advanced {
                    break;
                }
            }

            let status = if placed == 0 {
                MatchupStatus::Deferred
            } else if placed == requested {
                MatchupStatus::Placed
            } else {
                MatchupStatus::PartiallyPlaced
            };
            if status != MatchupStatus::Placed {
                debug!(
                    "{} vs {}: {placed}/{requested} games placed",
                    matchup.school_a, matchup.school_b
                );
            }
            outcomes.push(MatchupOutcome {
                school_a: matchup.school_a.clone(),
                school_b: matchup.school_b.clone(),
                requested,
                placed,
                status,
            });
        }

        schedule.deficiencies = self.deficiencies(&state);
        info!(
            "committed {} games; {} teams under target",
            schedule.game_count(),
            schedule.deficiencies.len()
        );
        AllocationResult { schedule, outcomes }
    }

    /// Tries to place a block contiguously on one court-night.
    ///
    /// Commits and returns the games on success; leaves state untouched
    /// and returns `None` when no candidate holds the whole block.
    fn place_block(
        &self,
        block: &[GameRequest],
        facility_order: &[&'a Facility],
        slots_by_date: &[(NaiveDate, Vec<NaiveTime>)],
        state: &mut ScheduleState,
        next_id: &mut usize,
    ) -> Option<Vec<Game>> {
        let all_fit_reduced_rims = block.iter().all(|r| r.division.fits_reduced_rims());

        for (date, day_slots) in slots_by_date {
            if day_slots.len() < block.len() {
                continue;
            }
            for facility in facility_order {
                if facility.reduced_rims && !all_fit_reduced_rims {
                    continue;
                }
                for court in facility.court_numbers() {
                    for start_idx in 0..=(day_slots.len() - block.len()) {
                        let Some(games) = self.validate_block(
                            block, facility, *date, day_slots, start_idx, court, state, *next_id,
                        ) else {
                            continue;
                        };
                        // Every game validated against the same committed
                        // state; commit is atomic for this candidate.
                        for game in &games {
                            let home = self.teams.get(game.home_team.as_str())?;
                            let away = self.teams.get(game.away_team.as_str())?;
                            state.commit(game, home, away);
                        }
                        *next_id += games.len();
                        return Some(games);
                    }
                }
            }
        }
        None
    }

    /// Validates a block at one candidate without mutating state.
    #[allow(clippy::too_many_arguments)]
    fn validate_block(
        &self,
        block: &[GameRequest],
        facility: &Facility,
        date: NaiveDate,
        day_slots: &[NaiveTime],
        start_idx: usize,
        court: u8,
        state: &ScheduleState,
        first_id: usize,
    ) -> Option<Vec<Game>> {
        let mut games = Vec::with_capacity(block.len());
        for (offset, request) in block.iter().enumerate() {
            let team_a = *self.teams.get(request.team_a.as_str())?;
            let team_b = *self.teams.get(request.team_b.as_str())?;
            // Home-facility rule: the owner's team is home, else team_a
            let (home, away) = if facility.is_owned_by(&team_b.school) {
                (team_b, team_a)
            } else {
                (team_a, team_b)
            };

            let slot = TimeSlot::new(date, day_slots[start_idx + offset], &facility.name, court);
            let candidate = CandidatePlacement {
                home,
                away,
                division: request.division,
                slot: &slot,
                facility,
                day_slots,
            };
            if let Err(rejection) = check(&candidate, state, self.rules) {
                trace!(
                    "{} vs {} at {} {} court {court}: {}",
                    home.id,
                    away.id,
                    date,
                    slot.start,
                    rejection.label()
                );
                return None;
            }

            games.push(Game::new(
                format!("G{:04}", first_id + offset),
                &home.id,
                &away.id,
                request.division,
                slot,
            ));
        }
        Some(games)
    }

    /// Facility order for a matchup: owned homes first, then input order.
    fn facility_preference(&self, matchup: &SchoolMatchup) -> Vec<&'a Facility> {
        let mut order: Vec<&'a Facility> = Vec::with_capacity(self.facilities.len());
        for name in [&matchup.school_a, &matchup.school_b] {
            let Some(school) = self.schools.get(name.as_str()) else {
                continue;
            };
            let Some(home) = school.home_facility.as_deref() else {
                continue;
            };
            if let Some(f) = self.facilities.iter().find(|f| f.name == home) {
                if !order.iter().any(|x| x.name == f.name) {
                    order.push(f);
                }
            }
        }
        for f in self.facilities {
            if !order.iter().any(|x| x.name == f.name) {
                order.push(f);
            }
        }
        order
    }

    /// Teams under the target game count, in id order.
    fn deficiencies(&self, state: &ScheduleState) -> Vec<Deficiency> {
        let mut ids: Vec<&str> = self.teams.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter()
            .filter_map(|id| {
                let scheduled = state.games_for(id);
                (scheduled < self.rules.target_games_per_team).then(|| Deficiency {
                    team_id: id.to_string(),
                    target: self.rules.target_games_per_team,
                    scheduled,
                })
            })
            .collect()
    }
}

/// Moves single-referee games to the block boundaries.
///
/// The day-boundary constraint can only hold for games at the ends of a
/// block anchored at the first or last slot of the day, so the block is
/// reordered before placement: one single-referee game up front, one at
/// the back, the rest unchanged in between.
fn order_block(games: &[GameRequest]) -> Vec<GameRequest> {
    let (boundary, middle): (Vec<GameRequest>, Vec<GameRequest>) = games
        .iter()
        .cloned()
        .partition(|g| g.division.single_referee());

    let mut boundary = boundary.into_iter();
    let front = boundary.next();
    let back = boundary.next();

    let mut out = Vec::with_capacity(games.len());
    out.extend(front);
    out.extend(middle);
    out.extend(boundary);
    out.extend(back);
    out
}

/// Runs the full pipeline: generate matchups, then allocate slots.
pub fn schedule_season(
    teams: &[Team],
    schools: &[School],
    facilities: &[Facility],
    rules: &Rules,
) -> AllocationResult {
    let matchups = MatchupGenerator::new(teams, schools, &rules.weights).generate();
    SlotAllocator::new(teams, schools, facilities, rules).allocate(&matchups)
}
