//! Game and time slot models.
//!
//! A time slot binds a calendar date, a start time, a facility, and a
//! court number. Game duration is a uniform configuration constant, so
//! slots carry no end time.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use super::Division;

/// A concrete place and time a game can occupy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Calendar date.
    pub date: NaiveDate,
    /// Game start time.
    pub start: NaiveTime,
    /// Facility name.
    pub facility: String,
    /// Court number (1-based).
    pub court: u8,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(date: NaiveDate, start: NaiveTime, facility: impl Into<String>, court: u8) -> Self {
        Self {
            date,
            start,
            facility: facility.into(),
            court,
        }
    }

    /// Whether the slot falls on a weeknight (Monday through Friday).
    pub fn is_weeknight(&self) -> bool {
        matches!(
            self.date.weekday(),
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu | Weekday::Fri
        )
    }

    /// Whether the slot falls on a Saturday.
    pub fn is_saturday(&self) -> bool {
        self.date.weekday() == Weekday::Sat
    }
}

/// A committed game.
///
/// Home and away are fixed by the home-facility rule: if the facility is
/// owned by one of the two schools, that school's team is home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Unique game identifier.
    pub id: String,
    /// Home team id.
    pub home_team: String,
    /// Away team id.
    pub away_team: String,
    /// Division both teams play in.
    pub division: Division,
    /// Assigned slot.
    pub slot: TimeSlot,
}

impl Game {
    /// Creates a new game.
    pub fn new(
        id: impl Into<String>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        division: Division,
        slot: TimeSlot,
    ) -> Self {
        Self {
            id: id.into(),
            home_team: home_team.into(),
            away_team: away_team.into(),
            division,
            slot,
        }
    }

    /// Whether the given team plays in this game.
    pub fn involves(&self, team_id: &str) -> bool {
        self.home_team == team_id || self.away_team == team_id
    }

    /// Normalized team pair key for meeting counts.
    pub fn pair_key(&self) -> (String, String) {
        pair_key(&self.home_team, &self.away_team)
    }
}

/// Normalizes a team pair into a sorted key.
pub fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_slot_weekday_helpers() {
        // 2026-01-09 is a Friday, 2026-01-10 a Saturday, 2026-01-11 a Sunday
        let friday = TimeSlot::new(date(2026, 1, 9), time(18, 0), "Gym", 1);
        let saturday = TimeSlot::new(date(2026, 1, 10), time(9, 0), "Gym", 1);
        let sunday = TimeSlot::new(date(2026, 1, 11), time(9, 0), "Gym", 1);

        assert!(friday.is_weeknight());
        assert!(!friday.is_saturday());
        assert!(saturday.is_saturday());
        assert!(!saturday.is_weeknight());
        assert!(!sunday.is_weeknight());
        assert!(!sunday.is_saturday());
    }

    #[test]
    fn test_game_involves_and_pair_key() {
        let slot = TimeSlot::new(date(2026, 1, 10), time(9, 0), "Gym", 1);
        let g = Game::new("G1", "T2", "T1", Division::MsComp, slot);

        assert!(g.involves("T1"));
        assert!(g.involves("T2"));
        assert!(!g.involves("T3"));
        // Key is sorted regardless of home/away order
        assert_eq!(g.pair_key(), ("T1".to_string(), "T2".to_string()));
    }

    #[test]
    fn test_pair_key_normalization() {
        assert_eq!(pair_key("B", "A"), pair_key("A", "B"));
    }
}
