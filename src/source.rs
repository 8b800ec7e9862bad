//! Collaborators injected into callstack execution.
//!
//! Generators never reach for global state: randomness, the wall clock and
//! country names all come from a [`Sources`] value owned by the caller, so a
//! seeded or scripted source makes a write fully reproducible.

use chrono::{DateTime, Utc};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

use crate::generator::country::FakeCountries;
use crate::generator::Case;

/// Failure reported by an injected collaborator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// A finite source ran out of values
    #[error("random source exhausted")]
    Exhausted,

    /// The source cannot serve this request
    #[error("{0}")]
    Unavailable(String),
}

/// Uniform random source consumed by the generators.
pub trait RandomSource {
    /// Random integer in `[min, max]`.
    fn int(&mut self, min: i64, max: i64) -> Result<i64, SourceError>;

    /// Random real in `[min, max]`.
    fn float(&mut self, min: f64, max: f64) -> Result<f64, SourceError>;

    /// Fill `buf` with random bytes.
    fn bytes(&mut self, buf: &mut [u8]) -> Result<(), SourceError>;
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: RngCore> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl<R: RngCore> RandomSource for RngSource<R> {
    fn int(&mut self, min: i64, max: i64) -> Result<i64, SourceError> {
        if min > max {
            return Err(SourceError::Unavailable(format!(
                "empty integer range {min}..={max}"
            )));
        }
        Ok(self.0.random_range(min..=max))
    }

    fn float(&mut self, min: f64, max: f64) -> Result<f64, SourceError> {
        if min.is_nan() || max.is_nan() || min > max || !(max - min).is_finite() {
            return Err(SourceError::Unavailable(format!(
                "unusable float range {min}..={max}"
            )));
        }
        Ok(self.0.random_range(min..=max))
    }

    fn bytes(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        self.0.fill_bytes(buf);
        Ok(())
    }
}

/// Wall-clock source for `now` and defaulted `time` ranges.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Supplier of country names for the `country` generator.
pub trait CountryProvider {
    /// Next country name, cased according to `case`.
    fn next_country(&self, case: Case, rng: &mut dyn RandomSource) -> Result<String, SourceError>;
}

/// Everything one execution pass draws on.
pub struct Sources<R = RngSource<ThreadRng>> {
    pub rng: R,
    pub clock: Box<dyn Clock>,
    pub countries: Box<dyn CountryProvider>,
}

impl Sources {
    /// Thread-local randomness, the system clock and `fake` country names.
    pub fn system() -> Self {
        Self::with_rng(RngSource::thread())
    }
}

impl Sources<RngSource<StdRng>> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(RngSource::seeded(seed))
    }
}

impl<R: RandomSource> Sources<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            clock: Box::new(SystemClock),
            countries: Box::new(FakeCountries),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_countries(mut self, countries: impl CountryProvider + 'static) -> Self {
        self.countries = Box::new(countries);
        self
    }
}
