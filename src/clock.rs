//! Sources of the current time for commit attributions.

/// Supplies the current time in seconds since the Unix epoch.
pub trait Clock {
    fn now(&self) -> i64;
}

/// Reads the system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Always reports the same instant. Useful for reproducible commits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed() {
        let clock = FixedClock(1_142_878_501);
        assert_eq!(clock.now(), 1_142_878_501);
        assert_eq!(clock.now(), 1_142_878_501);
    }

    #[test]
    fn system_is_after_2020() {
        assert!(SystemClock.now() > 1_577_836_800);
    }
}
