use std::time::Duration;

/// Delay before retry number `retry_index` (zero-based): `base * 2^index`, capped at `max`.
pub fn backoff_delay(base: Duration, max: Duration, retry_index: u32) -> Duration {
    let factor = 2u32.checked_pow(retry_index).unwrap_or(u32::MAX);
    base.checked_mul(factor).unwrap_or(max).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_doubles_per_retry() {
        let base = Duration::from_millis(300);
        let max = Duration::from_secs(10);
        assert_eq!(backoff_delay(base, max, 0), Duration::from_millis(300));
        assert_eq!(backoff_delay(base, max, 1), Duration::from_millis(600));
        assert_eq!(backoff_delay(base, max, 2), Duration::from_millis(1200));
        assert_eq!(backoff_delay(base, max, 3), Duration::from_millis(2400));
    }

    #[test]
    fn delay_is_capped() {
        let base = Duration::from_millis(300);
        let max = Duration::from_secs(10);
        assert_eq!(backoff_delay(base, max, 6), max);
        assert_eq!(backoff_delay(base, max, 40), max);
        assert_eq!(backoff_delay(base, max, u32::MAX), max);
    }

    #[test]
    fn zero_base_never_waits() {
        assert_eq!(
            backoff_delay(Duration::ZERO, Duration::from_secs(10), 5),
            Duration::ZERO
        );
    }
}
