//! School matchup model.
//!
//! A matchup is an unordered pair of distinct schools plus the full set
//! of cross-division games they will play against each other this
//! season. Matchups are generated once per run, scored, and consumed by
//! the allocator; they never reference a date or court themselves.

use serde::{Deserialize, Serialize};

use super::Division;

/// One requested game between two specific teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRequest {
    /// Team from the matchup's first school.
    pub team_a: String,
    /// Team from the matchup's second school.
    pub team_b: String,
    /// Division both teams play in.
    pub division: Division,
}

impl GameRequest {
    /// Creates a new game request.
    pub fn new(team_a: impl Into<String>, team_b: impl Into<String>, division: Division) -> Self {
        Self {
            team_a: team_a.into(),
            team_b: team_b.into(),
            division,
        }
    }
}

/// A school pair and the games they will play against each other.
///
/// School names are stored in sorted order so the pair is canonical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolMatchup {
    /// Lexicographically smaller school name.
    pub school_a: String,
    /// Lexicographically larger school name.
    pub school_b: String,
    /// Requested games, one per shared division (canonical division order).
    pub games: Vec<GameRequest>,
    /// Placement priority; higher is scheduled earlier.
    pub priority: f64,
}

impl SchoolMatchup {
    /// Creates a matchup, normalizing the school order.
    ///
    /// Game requests keep `team_a` on the `school_a` side; callers must
    /// build requests after normalization (the generator does).
    pub fn new(school_a: impl Into<String>, school_b: impl Into<String>) -> Self {
        let (a, b) = {
            let a = school_a.into();
            let b = school_b.into();
            if a <= b {
                (a, b)
            } else {
                (b, a)
            }
        };
        Self {
            school_a: a,
            school_b: b,
            games: Vec::new(),
            priority: 0.0,
        }
    }

    /// Adds a game request.
    pub fn with_game(mut self, game: GameRequest) -> Self {
        self.games.push(game);
        self
    }

    /// Sets the priority score.
    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    /// Number of requested games.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// Whether the named school is one of the pair.
    pub fn involves_school(&self, school: &str) -> bool {
        self.school_a == school || self.school_b == school
    }
}
