pub mod clock;
pub mod error;
pub mod models;
pub mod scoreboard;

pub use clock::{Clock, SystemClock};
pub use error::BoardError;
pub use models::{Kickoff, Match, MatchKey};
pub use scoreboard::{RestartPolicy, ScoreBoard};
