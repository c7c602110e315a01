//! Season schedule (solution) model.
//!
//! A season schedule is the complete list of committed games plus the
//! deficiency report: teams that ended the run below the configured
//! target game count. Capacity shortfall is data, never an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Game;

/// A finalized season schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonSchedule {
    /// Committed games, in commit order.
    pub games: Vec<Game>,
    /// Teams below their target game count.
    pub deficiencies: Vec<Deficiency>,
}

/// A team's shortfall against the target game count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deficiency {
    /// Team id.
    pub team_id: String,
    /// Configured target game count.
    pub target: u32,
    /// Games actually scheduled.
    pub scheduled: u32,
}

impl Deficiency {
    /// Games missing against the target.
    pub fn shortfall(&self) -> u32 {
        self.target.saturating_sub(self.scheduled)
    }
}

impl SeasonSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a committed game.
    pub fn add_game(&mut self, game: Game) {
        self.games.push(game);
    }

    /// Number of committed games.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Whether every team reached its target.
    pub fn is_fully_placed(&self) -> bool {
        self.deficiencies.is_empty()
    }

    /// All games a team plays.
    pub fn games_for_team(&self, team_id: &str) -> Vec<&Game> {
        self.games.iter().filter(|g| g.involves(team_id)).collect()
    }

    /// All games on a date.
    pub fn games_on_date(&self, date: NaiveDate) -> Vec<&Game> {
        self.games.iter().filter(|g| g.slot.date == date).collect()
    }

    /// All games at a facility.
    pub fn games_at_facility(&self, facility: &str) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|g| g.slot.facility == facility)
            .collect()
    }
}
