//! In-memory match registry with an eagerly maintained ranked summary.
//!
//! Writes (start/update/finish) are rare and fully serialized behind the
//! write half of a single lock; summary reads are hot and unbounded. The
//! ranked summary is rebuilt inside the same write section as every
//! mutation, so a reader observes the board entirely before or entirely
//! after a given write, never a partial one. `summary()` hands back the
//! last-built immutable snapshot without copying or re-sorting.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use super::error::BoardError;
use super::models::{Kickoff, Match, MatchKey};

/// What `start_match` does when the pair's previous match has finished but
/// its record is still on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Finishing frees the slot: a fresh match replaces the finished record.
    ReplaceFinished,
    /// The finished record is retained and restarting the pair is refused.
    RejectFinished,
}

/// Thread-safe scoreboard handle. Clones share the same board.
#[derive(Clone)]
pub struct ScoreBoard {
    inner: Arc<RwLock<BoardInner>>,
    clock: Arc<dyn Clock>,
    restart_policy: RestartPolicy,
}

struct BoardInner {
    /// (home, away) → current match state
    matches: HashMap<MatchKey, Match>,
    /// Ranked snapshot of the active matches, rebuilt on every mutation
    summary: Arc<Vec<Match>>,
    /// Start sequence; breaks kickoff-instant ties between matches
    next_seq: u64,
}

impl ScoreBoard {
    /// Board on wall-clock time with the default restart policy.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::with_options(clock, RestartPolicy::ReplaceFinished)
    }

    pub fn with_options(clock: Arc<dyn Clock>, restart_policy: RestartPolicy) -> Self {
        ScoreBoard {
            inner: Arc::new(RwLock::new(BoardInner {
                matches: HashMap::new(),
                summary: Arc::new(Vec::new()),
                next_seq: 0,
            })),
            clock,
            restart_policy,
        }
    }

    /// Start a new match at 0–0 for the given pair.
    ///
    /// Only one match per ordered pair may be in progress at a time;
    /// `(home, away)` and `(away, home)` are independent pairs.
    pub fn start_match(&self, home: &str, away: &str) -> Result<Match, BoardError> {
        let key = MatchKey::new(home, away)?;

        let mut inner = self.inner.write();
        if let Some(existing) = inner.matches.get(&key) {
            if existing.active || self.restart_policy == RestartPolicy::RejectFinished {
                return Err(BoardError::AlreadyRunning {
                    home: key.home().to_string(),
                    away: key.away().to_string(),
                });
            }
        }

        let kickoff = Kickoff {
            at: self.clock.now(),
            seq: inner.next_seq,
        };
        inner.next_seq += 1;

        let started = Match::new(&key, kickoff);
        inner.matches.insert(key, started.clone());
        Self::rebuild_summary(&mut inner);

        info!("Match started: {} vs {}", started.home, started.away);
        Ok(started)
    }

    /// Replace the running match's score with an absolute (home, away) pair.
    pub fn update_score(
        &self,
        home: &str,
        away: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<Match, BoardError> {
        let key = MatchKey::new(home, away)?;
        if home_score < 0 || away_score < 0 {
            return Err(BoardError::InvalidScore {
                home: home_score,
                away: away_score,
            });
        }

        let mut inner = self.inner.write();
        let current = inner.matches.get(&key).ok_or_else(|| BoardError::NotFound {
            home: key.home().to_string(),
            away: key.away().to_string(),
        })?;
        if !current.active {
            return Err(BoardError::NotActive {
                home: key.home().to_string(),
                away: key.away().to_string(),
            });
        }

        let updated = current.with_score(home_score, away_score);
        inner.matches.insert(key, updated.clone());
        Self::rebuild_summary(&mut inner);

        debug!(
            "Score updated: {} {}-{} {}",
            updated.home, updated.home_score, updated.away_score, updated.away
        );
        Ok(updated)
    }

    /// Take the match off the live summary.
    ///
    /// Finishing an already-finished match is a safe no-op returning the
    /// unchanged snapshot, so callers can retry freely.
    pub fn finish_match(&self, home: &str, away: &str) -> Result<Match, BoardError> {
        let key = MatchKey::new(home, away)?;

        let mut inner = self.inner.write();
        let current = inner.matches.get(&key).ok_or_else(|| BoardError::NotFound {
            home: key.home().to_string(),
            away: key.away().to_string(),
        })?;
        if !current.active {
            return Ok(current.clone());
        }

        let finished = current.finished();
        inner.matches.insert(key, finished.clone());
        Self::rebuild_summary(&mut inner);

        info!(
            "Match finished: {} {}-{} {}",
            finished.home, finished.home_score, finished.away_score, finished.away
        );
        Ok(finished)
    }

    /// Ranked view of the active matches: highest combined score first,
    /// most recently started first among equals.
    ///
    /// Returns a handle to the snapshot built by the last mutation; the
    /// sequence itself is immutable and safe to hold across later writes.
    pub fn summary(&self) -> Arc<Vec<Match>> {
        self.inner.read().summary.clone()
    }

    fn rebuild_summary(inner: &mut BoardInner) {
        let mut ranked: Vec<Match> = inner
            .matches
            .values()
            .filter(|m| m.active)
            .cloned()
            .collect();
        ranked.sort_by(|a, b| {
            b.total_score()
                .cmp(&a.total_score())
                .then_with(|| b.started_at.cmp(&a.started_at))
        });
        inner.summary = Arc::new(ranked);
    }
}
