use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::BoardError;

/// Instant a match started, paired with a per-board start sequence number.
///
/// The sequence keeps the summary tie-break strict even when two matches
/// kick off within the clock's resolution: ordering is by instant first,
/// sequence second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Kickoff {
    pub at: DateTime<Utc>,
    pub seq: u64,
}

/// Validated, order-significant (home, away) pair addressing one match.
/// `(A, B)` and `(B, A)` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    home: String,
    away: String,
}

impl MatchKey {
    /// Build a key, rejecting blank team names and a team playing itself.
    pub fn new(home: &str, away: &str) -> Result<Self, BoardError> {
        if home.trim().is_empty() {
            return Err(BoardError::InvalidTeams("home team name is blank".into()));
        }
        if away.trim().is_empty() {
            return Err(BoardError::InvalidTeams("away team name is blank".into()));
        }
        if home == away {
            return Err(BoardError::InvalidTeams(format!(
                "a team cannot play itself: {home}"
            )));
        }
        Ok(MatchKey {
            home: home.to_string(),
            away: away.to_string(),
        })
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn away(&self) -> &str {
        &self.away
    }
}

/// One match's state at a point in time.
///
/// Values handed out by the board are snapshots: every transition produces
/// a new value, and only the board replaces the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub home: String,
    pub away: String,
    pub home_score: i32,
    pub away_score: i32,
    pub active: bool,
    pub started_at: Kickoff,
}

impl Match {
    pub(crate) fn new(key: &MatchKey, started_at: Kickoff) -> Self {
        Match {
            home: key.home().to_string(),
            away: key.away().to_string(),
            home_score: 0,
            away_score: 0,
            active: true,
            started_at,
        }
    }

    /// Combined score, the primary ranking criterion.
    pub fn total_score(&self) -> i32 {
        self.home_score + self.away_score
    }

    pub(crate) fn with_score(&self, home_score: i32, away_score: i32) -> Self {
        Match {
            home_score,
            away_score,
            ..self.clone()
        }
    }

    pub(crate) fn finished(&self) -> Self {
        Match {
            active: false,
            ..self.clone()
        }
    }
}
