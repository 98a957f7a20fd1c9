/// Source of "now", injectable so use cases stay deterministic under test.
pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;
}
