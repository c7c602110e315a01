//! School matchup generator.
//!
//! Pairs every two distinct schools that share at least one division,
//! building one game request per shared division. Within a division the
//! schools' teams are matched one-to-one in team-id order, so no team is
//! reused in the same division. Pairs on either school's do-not-play
//! list are omitted entirely.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use crate::config::ScoringWeights;
use crate::models::{Division, GameRequest, School, SchoolMatchup, Team};

use super::matchup_score;

/// Generates scored school matchups from the season's entities.
#[derive(Debug)]
pub struct MatchupGenerator<'a> {
    teams: &'a [Team],
    schools: &'a [School],
    weights: &'a ScoringWeights,
}

impl<'a> MatchupGenerator<'a> {
    /// Creates a generator over the given entities.
    pub fn new(teams: &'a [Team], schools: &'a [School], weights: &'a ScoringWeights) -> Self {
        Self {
            teams,
            schools,
            weights,
        }
    }

    /// Produces all legal school matchups with priority scores.
    ///
    /// Output order is deterministic: school pairs in sorted-name order.
    /// Scores assume a fresh season (no pair is at the meeting cap yet).
    pub fn generate(&self) -> Vec<SchoolMatchup> {
        let school_by_name: HashMap<&str, &School> =
            self.schools.iter().map(|s| (s.name.as_str(), s)).collect();

        // Sorted map gives the deterministic school visit order
        let mut teams_by_school: BTreeMap<&str, Vec<&Team>> = BTreeMap::new();
        for team in self.teams {
            teams_by_school
                .entry(team.school.as_str())
                .or_default()
                .push(team);
        }
        for roster in teams_by_school.values_mut() {
            roster.sort_by(|a, b| a.id.cmp(&b.id));
        }

        let names: Vec<&str> = teams_by_school.keys().copied().collect();
        let mut matchups = Vec::new();

        for (i, &name_a) in names.iter().enumerate() {
            for &name_b in &names[i + 1..] {
                let (Some(school_a), Some(school_b)) =
                    (school_by_name.get(name_a), school_by_name.get(name_b))
                else {
                    continue;
                };

                if school_a.refuses_to_play(name_b) || school_b.refuses_to_play(name_a) {
                    debug!("skipping do-not-play pair {name_a} / {name_b}");
                    continue;
                }

                let roster_a = &teams_by_school[name_a];
                let roster_b = &teams_by_school[name_b];
                let games = pair_rosters(roster_a, roster_b);
                if games.is_empty() {
                    continue;
                }

                let smaller_slate = roster_a.len().min(roster_b.len());
                let priority = matchup_score(
                    school_a,
                    school_b,
                    &games,
                    smaller_slate,
                    false,
                    self.weights,
                );

                let mut matchup = SchoolMatchup::new(name_a, name_b).with_priority(priority);
                matchup.games = games;
                matchups.push(matchup);
            }
        }

        debug!("generated {} school matchups", matchups.len());
        matchups
    }
}

/// Builds one game request per shared division, teams matched in id order.
fn pair_rosters(roster_a: &[&Team], roster_b: &[&Team]) -> Vec<GameRequest> {
    let mut games = Vec::new();
    for division in Division::ALL {
        let in_div_a: Vec<&&Team> = roster_a.iter().filter(|t| t.division == division).collect();
        let in_div_b: Vec<&&Team> = roster_b.iter().filter(|t| t.division == division).collect();
        for (ta, tb) in in_div_a.iter().zip(in_div_b.iter()) {
            games.push(GameRequest::new(&ta.id, &tb.id, division));
        }
    }
    games
}
