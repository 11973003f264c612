use chrono::{DateTime, Utc};

/// Time source for match kickoff instants.
///
/// Injected so tests can pin kickoff times. Must be monotonic within a
/// single board instance; coarse resolution is fine because the board pairs
/// every instant with a start sequence number.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
