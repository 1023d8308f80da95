//! Randomized failure injection.
//!
//! Every prime-check request passes through a [`FailureInjector`] gate
//! before any computation. The gate draws a uniform value in `[0, 1)` and
//! fails the request with [`Error::SimulatedFailure`] when the draw is below
//! the configured threshold. The outcome does not depend on the input, so the
//! same number may succeed on one call and fail on the next.
//!
//! The randomness comes from a [`ChanceSource`], which lets tests swap in a
//! seeded or fixed source and exercise both branches deterministically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Error, Result};

/// Default share of requests that fail on purpose.
pub const DEFAULT_FAILURE_RATE: f64 = 0.30;

/// A source of uniform draws in `[0, 1)`.
pub trait ChanceSource: Send + Sync {
    /// Draw the next value in `[0, 1)`.
    fn draw(&self) -> f64;
}

/// Thread-local OS-seeded generator. Used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSource;

impl ChanceSource for ThreadRngSource {
    fn draw(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Deterministic generator seeded from a fixed value.
///
/// Draws are serialized through a mutex; the sequence is reproducible for a
/// given seed as long as the draw order is.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

/// Acquire mutex guard, ignoring poisoning
fn lock_ignore_poison<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    match m.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl ChanceSource for SeededSource {
    fn draw(&self) -> f64 {
        lock_ignore_poison(&self.rng).gen::<f64>()
    }
}

/// Decides, per request, whether to fake a server fault.
#[derive(Clone)]
pub struct FailureInjector {
    threshold: f64,
    source: Arc<dyn ChanceSource>,
}

impl FailureInjector {
    /// Create an injector failing requests whose draw falls below `threshold`.
    ///
    /// `threshold` must lie in `[0, 1]`: 0 never fails, 1 always fails.
    pub fn new(threshold: f64, source: Arc<dyn ChanceSource>) -> Result<Self> {
        // ---
        if !(0.0..=1.0).contains(&threshold) {
            return Err(Error::Config(format!(
                "failure rate must be within [0, 1], got {threshold}"
            )));
        }
        Ok(Self { threshold, source })
    }

    /// Injector that never fails a request.
    pub fn disabled() -> Self {
        Self {
            threshold: 0.0,
            source: Arc::new(ThreadRngSource),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Draw once and report whether this request should fail.
    pub fn should_fail(&self) -> bool {
        self.source.draw() < self.threshold
    }

    /// Draw once; `Err(SimulatedFailure)` when this request should fail.
    pub fn gate(&self) -> Result<()> {
        // ---
        if self.should_fail() {
            return Err(Error::SimulatedFailure);
        }
        Ok(())
    }
}

impl Default for FailureInjector {
    /// [`DEFAULT_FAILURE_RATE`] over [`ThreadRngSource`].
    fn default() -> Self {
        Self {
            threshold: DEFAULT_FAILURE_RATE,
            source: Arc::new(ThreadRngSource),
        }
    }
}

impl fmt::Debug for FailureInjector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FailureInjector")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    struct FixedSource(f64);

    impl ChanceSource for FixedSource {
        fn draw(&self) -> f64 {
            self.0
        }
    }

    fn injector(threshold: f64, draw: f64) -> FailureInjector {
        FailureInjector::new(threshold, Arc::new(FixedSource(draw))).unwrap()
    }

    #[test]
    fn draw_below_threshold_fails() {
        // ---
        assert!(matches!(
            injector(0.3, 0.29).gate(),
            Err(Error::SimulatedFailure)
        ));
        assert!(injector(0.3, 0.0).should_fail());
    }

    #[test]
    fn draw_at_or_above_threshold_passes() {
        // ---
        assert!(injector(0.3, 0.3).gate().is_ok());
        assert!(injector(0.3, 0.99).gate().is_ok());
    }

    #[test]
    fn zero_threshold_never_fails() {
        // ---
        assert!(!injector(0.0, 0.0).should_fail());
        let disabled = FailureInjector::disabled();
        for _ in 0..1000 {
            assert!(disabled.gate().is_ok());
        }
    }

    #[test]
    fn full_threshold_always_fails() {
        // ---
        let always = FailureInjector::new(1.0, Arc::new(ThreadRngSource)).unwrap();
        for _ in 0..1000 {
            assert!(always.should_fail());
        }
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        // ---
        for threshold in [-0.1, 1.5, f64::NAN] {
            let res = FailureInjector::new(threshold, Arc::new(ThreadRngSource));
            assert!(matches!(res, Err(Error::Config(_))), "{threshold}");
        }
    }

    #[test]
    fn seeded_source_is_reproducible() {
        // ---
        let a = SeededSource::new(42);
        let b = SeededSource::new(42);
        for _ in 0..100 {
            let x = a.draw();
            assert_eq!(x, b.draw());
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn seeded_failure_rate_is_close_to_threshold() {
        // ---
        let injector =
            FailureInjector::new(DEFAULT_FAILURE_RATE, Arc::new(SeededSource::new(7))).unwrap();
        let draws = 10_000;
        let failures = (0..draws).filter(|_| injector.should_fail()).count();
        let rate = failures as f64 / draws as f64;
        assert!((0.27..0.33).contains(&rate), "observed rate {rate}");
    }

    #[test]
    fn default_uses_thirty_percent() {
        // ---
        assert_eq!(FailureInjector::default().threshold(), 0.30);
    }
}
