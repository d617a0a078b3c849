//! Time source for the debouncer.
//!
//! Production code reads the monotonic clock; tests drive a manual clock so
//! debounce behavior is checked without sleeping.

use std::time::Instant;

pub trait Clock: Send + 'static {
    fn now(&self) -> Instant;
}

/// The real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;

#[cfg(test)]
mod manual {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use parking_lot::Mutex;

    use super::Clock;

    /// Clock that only moves when told to. Clones share the same time.
    #[derive(Debug, Clone)]
    pub struct ManualClock(Arc<Mutex<Instant>>);

    impl ManualClock {
        pub fn new() -> Self {
            Self(Arc::new(Mutex::new(Instant::now())))
        }

        pub fn advance(&self, by: Duration) {
            *self.0.lock() += by;
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Instant {
            *self.0.lock()
        }
    }
}
