//! Committed-schedule occupancy state.
//!
//! The single mutable structure of a scheduling run. Every table is a
//! hash map keyed for O(1) average lookups by the constraint validator:
//! team/school/coach occupancy per (date, time), court-night
//! reservations, per-school game dates, per-team daily start times, and
//! pairwise meeting counts. Single writer (the allocator), no readers
//! during mutation, discarded at run end.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveTime};

use crate::models::{pair_key, Game, Team};

/// Occupancy bookkeeping for all committed games.
#[derive(Debug, Default)]
pub struct ScheduleState {
    team_times: HashSet<(String, NaiveDate, NaiveTime)>,
    school_times: HashSet<(String, NaiveDate, NaiveTime)>,
    coach_times: HashSet<(String, NaiveDate, NaiveTime)>,
    /// (date, facility, court) → normalized school pair holding the night.
    court_nights: HashMap<(NaiveDate, String, u8), (String, String)>,
    school_dates: HashMap<String, HashSet<NaiveDate>>,
    team_day_starts: HashMap<(String, NaiveDate), Vec<NaiveTime>>,
    pair_meetings: HashMap<(String, String), u32>,
    games_per_team: HashMap<String, u32>,
}

impl ScheduleState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the team already plays at this (date, time).
    pub fn team_busy(&self, team: &str, date: NaiveDate, time: NaiveTime) -> bool {
        self.team_times.contains(&(team.to_string(), date, time))
    }

    /// Whether the school already plays anywhere at this (date, time).
    pub fn school_busy(&self, school: &str, date: NaiveDate, time: NaiveTime) -> bool {
        self.school_times.contains(&(school.to_string(), date, time))
    }

    /// Whether any of the coach's teams plays at this (date, time).
    pub fn coach_busy(&self, coach: &str, date: NaiveDate, time: NaiveTime) -> bool {
        !coach.is_empty() && self.coach_times.contains(&(coach.to_string(), date, time))
    }

    /// The school pair holding a court-night, if reserved.
    pub fn court_reservation(
        &self,
        date: NaiveDate,
        facility: &str,
        court: u8,
    ) -> Option<&(String, String)> {
        self.court_nights.get(&(date, facility.to_string(), court))
    }

    /// Whether the school has any game on the given date.
    pub fn school_plays_on(&self, school: &str, date: NaiveDate) -> bool {
        self.school_dates
            .get(school)
            .is_some_and(|dates| dates.contains(&date))
    }

    /// Start times of the team's games on the given date.
    pub fn team_starts_on(&self, team: &str, date: NaiveDate) -> &[NaiveTime] {
        self.team_day_starts
            .get(&(team.to_string(), date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// How many times the two teams have met so far.
    pub fn meetings(&self, team_a: &str, team_b: &str) -> u32 {
        self.pair_meetings
            .get(&pair_key(team_a, team_b))
            .copied()
            .unwrap_or(0)
    }

    /// Committed game count for a team.
    pub fn games_for(&self, team: &str) -> u32 {
        self.games_per_team.get(team).copied().unwrap_or(0)
    }

    /// Records a committed game in every occupancy table.
    ///
    /// The caller has already validated the placement; commit never
    /// fails and never re-checks.
    pub fn commit(&mut self, game: &Game, home: &Team, away: &Team) {
        let date = game.slot.date;
        let start = game.slot.start;

        for team in [home, away] {
            self.team_times.insert((team.id.clone(), date, start));
            self.school_times.insert((team.school.clone(), date, start));
            if !team.coach.is_empty() {
                self.coach_times.insert((team.coach.clone(), date, start));
            }
            self.school_dates
                .entry(team.school.clone())
                .or_default()
                .insert(date);
            self.team_day_starts
                .entry((team.id.clone(), date))
                .or_default()
                .push(start);
            *self.games_per_team.entry(team.id.clone()).or_insert(0) += 1;
        }

        self.court_nights
            .entry((date, game.slot.facility.clone(), game.slot.court))
            .or_insert_with(|| pair_key(&home.school, &away.school));

        *self.pair_meetings.entry(game.pair_key()).or_insert(0) += 1;
    }
}
