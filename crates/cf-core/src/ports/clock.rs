pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    /// Unix seconds, as used by contract timestamps.
    fn now_secs(&self) -> u64 {
        u64::try_from(self.now_ms() / 1000).unwrap_or(0)
    }
}
