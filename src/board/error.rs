use thiserror::Error;

/// Everything that can go wrong on the board.
///
/// Validation always runs before any mutation, so a returned error never
/// leaves partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Malformed participant pair: a blank team name, or a team paired
    /// against itself.
    #[error("invalid team pair: {0}")]
    InvalidTeams(String),

    #[error("scores must be non-negative, given home [{home}] away [{away}]")]
    InvalidScore { home: i32, away: i32 },

    #[error("match {home} vs {away} is already running")]
    AlreadyRunning { home: String, away: String },

    #[error("no match on the board for {home} vs {away}")]
    NotFound { home: String, away: String },

    #[error("match {home} vs {away} has already finished")]
    NotActive { home: String, away: String },
}
