use chrono::Utc;
use cf_core::ports::ClockPort;

/// Wall clock in UTC milliseconds.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
