//! Live sports scoreboard.
//!
//! The core is an in-memory registry of running matches
//! ([`board::ScoreBoard`]) that keeps a ranked summary of every active
//! match. The summary is rebuilt inside the same write section as each
//! mutation, so readers always observe a consistent board and reads cost a
//! single shared-lock acquisition. A thin Axum dashboard ([`dashboard`])
//! fronts the registry over HTTP.

pub mod board;
pub mod config;
pub mod dashboard;

pub use board::{BoardError, Clock, Kickoff, Match, MatchKey, RestartPolicy, ScoreBoard, SystemClock};
