//! Schedule summary statistics.
//!
//! Computes season-level indicators from a committed schedule: game
//! counts per team, facility, and date, the weeknight/Saturday split,
//! and how far short of the per-team target the season fell. Intended
//! for league administrators deciding whether a run is good enough to
//! publish.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::SeasonSchedule;

/// Season-level schedule indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Total committed games.
    pub total_games: usize,
    /// Committed games per team, in team-id order.
    pub games_per_team: BTreeMap<String, u32>,
    /// Committed games per facility.
    pub games_per_facility: BTreeMap<String, u32>,
    /// Committed games per calendar date.
    pub games_per_date: BTreeMap<NaiveDate, u32>,
    /// Games starting on a weeknight.
    pub weeknight_games: usize,
    /// Games starting on a Saturday.
    pub saturday_games: usize,
    /// Teams that fell short of the season target.
    pub teams_under_target: usize,
    /// Total missing games across all short teams.
    pub total_shortfall: u32,
}

impl ScheduleStats {
    /// Computes stats from a committed schedule.
    pub fn calculate(schedule: &SeasonSchedule) -> Self {
        let mut games_per_team: BTreeMap<String, u32> = BTreeMap::new();
        let mut games_per_facility: BTreeMap<String, u32> = BTreeMap::new();
        let mut games_per_date: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        let mut weeknight_games = 0;
        let mut saturday_games = 0;

        for game in &schedule.games {
            for team in [&game.home_team, &game.away_team] {
                *games_per_team.entry(team.clone()).or_insert(0) += 1;
            }
            *games_per_facility
                .entry(game.slot.facility.clone())
                .or_insert(0) += 1;
            *games_per_date.entry(game.slot.date).or_insert(0) += 1;
            if game.slot.is_weeknight() {
                weeknight_games += 1;
            }
            if game.slot.is_saturday() {
                saturday_games += 1;
            }
        }

        Self {
            total_games: schedule.game_count(),
            games_per_team,
            games_per_facility,
            games_per_date,
            weeknight_games,
            saturday_games,
            teams_under_target: schedule.deficiencies.len(),
            total_shortfall: schedule.deficiencies.iter().map(|d| d.shortfall()).sum(),
        }
    }

    /// The busiest single date, if any games exist.
    pub fn peak_date(&self) -> Option<(NaiveDate, u32)> {
        self.games_per_date
            .iter()
            .max_by_key(|(_, n)| **n)
            .map(|(d, n)| (*d, *n))
    }

    /// Whether every team reached its season target.
    pub fn all_teams_at_target(&self) -> bool {
        self.teams_under_target == 0
    }
}
