//! Hard placement constraints.
//!
//! A pure predicate set over (candidate placement, committed state). A
//! single failing check voids the whole candidate; there is no partial
//! credit and nothing here mutates state. The allocator commits only
//! after every check passes.
//!
//! Every lookup hits a hash table in [`ScheduleState`], so a full check
//! is O(1) average in the number of committed games.

use chrono::{Datelike, NaiveTime, Weekday};

use crate::config::Rules;
use crate::models::{Division, Facility, Team, TimeSlot};

use super::state::ScheduleState;

/// One game bound to a concrete date, facility, court, and time.
#[derive(Debug)]
pub struct CandidatePlacement<'a> {
    /// Home team (already oriented by the home-facility rule).
    pub home: &'a Team,
    /// Away team.
    pub away: &'a Team,
    /// Division both teams play in.
    pub division: Division,
    /// The slot under consideration.
    pub slot: &'a TimeSlot,
    /// The facility the slot belongs to.
    pub facility: &'a Facility,
    /// The facility's full slot sequence for that day, ascending.
    pub day_slots: &'a [NaiveTime],
}

/// The constraint a candidate placement violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Both teams belong to the same school.
    SameSchool,
    /// The team pair is already at the season meeting cap.
    MeetingCap,
    /// A team already plays at this date and time.
    TeamBusy,
    /// The school already plays somewhere at this date and time.
    SchoolBusy,
    /// The coach already has a team playing at this date and time.
    CoachBusy,
    /// The court-night is reserved by a different school pair.
    CourtReserved,
    /// A non reduced-rim division on a reduced-rim facility.
    ReducedRimMismatch,
    /// A team would play twice on the same weeknight.
    WeeknightDoubleheader,
    /// The school would play a Friday and the adjacent Saturday.
    FridaySaturdayAdjacency,
    /// Too little rest between a team's Saturday games.
    SaturdayRestGap,
    /// A single-referee game away from the day's first or last slot.
    RefereeSlotBoundary,
}

impl Rejection {
    /// Short label for logging.
    pub fn label(self) -> &'static str {
        match self {
            Rejection::SameSchool => "same-school",
            Rejection::MeetingCap => "meeting-cap",
            Rejection::TeamBusy => "team-busy",
            Rejection::SchoolBusy => "school-busy",
            Rejection::CoachBusy => "coach-busy",
            Rejection::CourtReserved => "court-reserved",
            Rejection::ReducedRimMismatch => "reduced-rim-mismatch",
            Rejection::WeeknightDoubleheader => "weeknight-doubleheader",
            Rejection::FridaySaturdayAdjacency => "friday-saturday",
            Rejection::SaturdayRestGap => "saturday-rest",
            Rejection::RefereeSlotBoundary => "referee-slot-boundary",
        }
    }
}

/// Validates a candidate placement against the committed state.
///
/// Returns the first violated constraint, or `Ok(())` when the
/// placement is legal.
pub fn check(
    candidate: &CandidatePlacement<'_>,
    state: &ScheduleState,
    rules: &Rules,
) -> Result<(), Rejection> {
    let c = candidate;
    let date = c.slot.date;
    let start = c.slot.start;

    if c.home.school == c.away.school {
        return Err(Rejection::SameSchool);
    }

    if c.facility.reduced_rims && !c.division.fits_reduced_rims() {
        return Err(Rejection::ReducedRimMismatch);
    }

    if state.meetings(&c.home.id, &c.away.id) >= rules.max_pair_meetings {
        return Err(Rejection::MeetingCap);
    }

    if let Some(holder) = state.court_reservation(date, &c.facility.name, c.slot.court) {
        let pair = crate::models::pair_key(&c.home.school, &c.away.school);
        if *holder != pair {
            return Err(Rejection::CourtReserved);
        }
    }

    if state.team_busy(&c.home.id, date, start) || state.team_busy(&c.away.id, date, start) {
        return Err(Rejection::TeamBusy);
    }

    if state.school_busy(&c.home.school, date, start)
        || state.school_busy(&c.away.school, date, start)
    {
        return Err(Rejection::SchoolBusy);
    }

    if state.coach_busy(&c.home.coach, date, start) || state.coach_busy(&c.away.coach, date, start)
    {
        return Err(Rejection::CoachBusy);
    }

    if c.slot.is_weeknight()
        && (!state.team_starts_on(&c.home.id, date).is_empty()
            || !state.team_starts_on(&c.away.id, date).is_empty())
    {
        return Err(Rejection::WeeknightDoubleheader);
    }

    if friday_saturday_conflict(c, state) {
        return Err(Rejection::FridaySaturdayAdjacency);
    }

    if c.slot.is_saturday() && !c.division.is_recreational() {
        for team in [&c.home.id, &c.away.id] {
            let too_close = state
                .team_starts_on(team, date)
                .iter()
                .any(|s| (start - *s).num_minutes().abs() < rules.saturday_rest_minutes);
            if too_close {
                return Err(Rejection::SaturdayRestGap);
            }
        }
    }

    if c.division.single_referee() {
        let at_boundary = c.day_slots.first() == Some(&start) || c.day_slots.last() == Some(&start);
        if !at_boundary {
            return Err(Rejection::RefereeSlotBoundary);
        }
    }

    Ok(())
}

/// School-level Friday/Saturday adjacency.
///
/// Placing on a Saturday is illegal if either school plays the previous
/// Friday; placing on a Friday is illegal if either school plays the
/// next day (a Saturday).
fn friday_saturday_conflict(c: &CandidatePlacement<'_>, state: &ScheduleState) -> bool {
    let date = c.slot.date;
    let schools = [&c.home.school, &c.away.school];
    match date.weekday() {
        Weekday::Sat => date
            .pred_opt()
            .is_some_and(|fri| schools.iter().any(|s| state.school_plays_on(s, fri))),
        Weekday::Fri => date
            .succ_opt()
            .is_some_and(|sat| schools.iter().any(|s| state.school_plays_on(s, sat))),
        _ => false,
    }
}
