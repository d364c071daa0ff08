use std::time::Duration;

/// Event poll interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Wall-clock interval between countdown ticks
pub const TIMER_TICK: Duration = Duration::from_secs(1);

/// Get poll duration for the event loop
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}
