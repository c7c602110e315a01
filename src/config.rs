//! Rule configuration.
//!
//! Everything an operator can tune without code changes: the season date
//! range, the weeknight and Saturday playing windows, the uniform game
//! duration, the per-team game target, and the scoring weights. The
//! engine treats these as already-validated values supplied by the
//! external loader.
//!
//! # Time Model
//! Slots are derived, not stored: a day's slot sequence starts at the
//! window start and advances by one game duration while a full game
//! still fits before the window end. Sundays have no slots.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// A daily playing window [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayWindow {
    /// First possible game start.
    pub start: NaiveTime,
    /// Hard end; a game must finish by this time.
    pub end: NaiveTime,
}

impl DayWindow {
    /// Creates a new window.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Enumerates game start times for this window.
    ///
    /// A start is included only if the full game duration fits before
    /// the window end.
    pub fn slots(&self, duration_minutes: u32) -> Vec<NaiveTime> {
        if duration_minutes == 0 {
            return Vec::new();
        }
        let start = self.start.hour() * 60 + self.start.minute();
        let end = self.end.hour() * 60 + self.end.minute();

        let mut out = Vec::new();
        let mut cur = start;
        while cur + duration_minutes <= end {
            if let Some(t) = NaiveTime::from_hms_opt(cur / 60, cur % 60, 0) {
                out.push(t);
            }
            cur += duration_minutes;
        }
        out
    }
}

/// Tunable weights for the matchup priority function.
///
/// The priority is a step function of matchup size: full-slate matchups
/// (every team of the smaller school gets a game) rank highest because
/// they can be clustered onto one court-night, then matchups of at least
/// `large_threshold` games, then the rest. Tier, cluster, and rivalry
/// alignment add on top. The steps are not assumed smooth or monotonic
/// beyond what these constants encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Base score when the matchup covers the smaller school's full slate.
    pub full_slate_base: f64,
    /// Per-game increment on a full-slate matchup.
    pub full_slate_per_game: f64,
    /// Minimum game count for the middle step.
    pub large_threshold: usize,
    /// Base score for the middle step.
    pub large_base: f64,
    /// Per-game increment on the middle step.
    pub large_per_game: f64,
    /// Base score below the middle step.
    pub small_base: f64,
    /// Per-game increment below the middle step.
    pub small_per_game: f64,
    /// Bonus when both schools share a competitive tier.
    pub same_tier_bonus: f64,
    /// Bonus when both schools share a geographic cluster.
    pub same_cluster_bonus: f64,
    /// Bonus when either school lists the other as a rival.
    pub rivalry_bonus: f64,
    /// Penalty when a requested pair is already at the meeting cap.
    pub meeting_cap_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            full_slate_base: 1000.0,
            full_slate_per_game: 10.0,
            large_threshold: 3,
            large_base: 500.0,
            large_per_game: 10.0,
            small_base: 10.0,
            small_per_game: 5.0,
            same_tier_bonus: 50.0,
            same_cluster_bonus: 50.0,
            rivalry_bonus: 25.0,
            meeting_cap_penalty: 200.0,
        }
    }
}

/// Season-wide rule configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rules {
    /// First day of the season (inclusive).
    pub season_start: NaiveDate,
    /// Last day of the season (inclusive).
    pub season_end: NaiveDate,
    /// Monday through Friday playing window.
    pub weeknight: DayWindow,
    /// Saturday playing window.
    pub saturday: DayWindow,
    /// Uniform game duration in minutes.
    pub game_duration_minutes: u32,
    /// Target game count per team; shortfalls land in the deficiency report.
    pub target_games_per_team: u32,
    /// Maximum meetings between the same two teams across the season.
    pub max_pair_meetings: u32,
    /// Minimum start-to-start gap for a non-recreational team's second
    /// Saturday game, in minutes.
    pub saturday_rest_minutes: i64,
    /// Matchup priority weights.
    pub weights: ScoringWeights,
}

impl Rules {
    /// Creates rules for a season with default windows and weights.
    ///
    /// Defaults: weeknights 18:00-21:00, Saturdays 08:00-20:00, 60-minute
    /// games, 8 games per team, 2-meeting cap, 60-minute Saturday rest.
    pub fn new(season_start: NaiveDate, season_end: NaiveDate) -> Self {
        Self {
            season_start,
            season_end,
            weeknight: DayWindow::new(hm(18, 0), hm(21, 0)),
            saturday: DayWindow::new(hm(8, 0), hm(20, 0)),
            game_duration_minutes: 60,
            target_games_per_team: 8,
            max_pair_meetings: 2,
            saturday_rest_minutes: 60,
            weights: ScoringWeights::default(),
        }
    }

    /// Sets the weeknight window.
    pub fn with_weeknight_window(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.weeknight = DayWindow::new(start, end);
        self
    }

    /// Sets the Saturday window.
    pub fn with_saturday_window(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.saturday = DayWindow::new(start, end);
        self
    }

    /// Sets the game duration.
    pub fn with_game_duration(mut self, minutes: u32) -> Self {
        self.game_duration_minutes = minutes;
        self
    }

    /// Sets the per-team game target.
    pub fn with_target_games(mut self, target: u32) -> Self {
        self.target_games_per_team = target;
        self
    }

    /// Sets the scoring weights.
    pub fn with_weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Game start times available on a date. Empty on Sundays.
    pub fn day_slots(&self, date: NaiveDate) -> Vec<NaiveTime> {
        match date.weekday() {
            Weekday::Sun => Vec::new(),
            Weekday::Sat => self.saturday.slots(self.game_duration_minutes),
            _ => self.weeknight.slots(self.game_duration_minutes),
        }
    }

    /// All playable dates in the season, ascending, Sundays excluded.
    pub fn season_dates(&self) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        let mut d = self.season_start;
        while d <= self.season_end {
            if d.weekday() != Weekday::Sun {
                dates.push(d);
            }
            match d.succ_opt() {
                Some(next) => d = next,
                None => break,
            }
        }
        dates
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rules() -> Rules {
        // 2026-01-05 is a Monday
        Rules::new(date(2026, 1, 5), date(2026, 2, 28))
    }

    #[test]
    fn test_window_slots() {
        let w = DayWindow::new(hm(18, 0), hm(21, 0));
        assert_eq!(w.slots(60), vec![hm(18, 0), hm(19, 0), hm(20, 0)]);
        // A 90-minute game only fits twice
        assert_eq!(w.slots(90), vec![hm(18, 0), hm(19, 30)]);
        assert!(w.slots(0).is_empty());
    }

    #[test]
    fn test_window_excludes_overrunning_start() {
        let w = DayWindow::new(hm(18, 0), hm(20, 30));
        // 20:00 start would end 21:00, past the window
        assert_eq!(w.slots(60), vec![hm(18, 0), hm(19, 0)]);
    }

    #[test]
    fn test_day_slots_by_weekday() {
        let r = rules();
        // Monday uses the weeknight window
        assert_eq!(r.day_slots(date(2026, 1, 5)).len(), 3);
        // Saturday 08:00-20:00 with 60-minute games
        assert_eq!(r.day_slots(date(2026, 1, 10)).len(), 12);
        // Sunday has no slots
        assert!(r.day_slots(date(2026, 1, 11)).is_empty());
    }

    #[test]
    fn test_season_dates_skip_sundays() {
        let r = Rules::new(date(2026, 1, 5), date(2026, 1, 12));
        let dates = r.season_dates();
        // Mon 5 .. Mon 12 minus Sunday the 11th
        assert_eq!(dates.len(), 7);
        assert!(!dates.contains(&date(2026, 1, 11)));
        assert_eq!(dates.first(), Some(&date(2026, 1, 5)));
        assert_eq!(dates.last(), Some(&date(2026, 1, 12)));
    }

    #[test]
    fn test_default_weights() {
        let w = ScoringWeights::default();
        assert!((w.full_slate_base - 1000.0).abs() < 1e-10);
        assert!((w.large_base - 500.0).abs() < 1e-10);
        assert_eq!(w.large_threshold, 3);
        assert!((w.small_per_game - 5.0).abs() < 1e-10);
    }
}
