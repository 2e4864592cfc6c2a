//! Random byte sources
//!
//! [`SystemRandom`] draws from the operating system CSPRNG and drops to a
//! clock-seeded, non-secure generator only when the platform source fails.
//! [`SeededRandom`] is deterministic and meant for tests and reproducible
//! output.

use keyforge_common::LoggingTransformer;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use zeroize::Zeroizing;

/// Source of uniformly distributed random bytes
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Allocate `len` random bytes in a buffer that is wiped on drop
    fn bytes(&mut self, len: usize) -> Zeroizing<Vec<u8>> {
        let mut buf = Zeroizing::new(vec![0u8; len]);
        self.fill_bytes(&mut buf);
        buf
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }
}

/// Platform fill function; `getrandom::fill` unless replaced
pub type PlatformFill = fn(&mut [u8]) -> Result<(), getrandom::Error>;

/// Platform CSPRNG with a non-secure fallback
pub struct SystemRandom {
    fill: PlatformFill,
    fallback: Option<StdRng>,
}

impl SystemRandom {
    /// Create a source backed by the operating system
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform_fill(getrandom::fill)
    }

    /// Create a source that reads platform bytes through `fill`
    #[doc(hidden)]
    #[must_use]
    pub fn with_platform_fill(fill: PlatformFill) -> Self {
        Self {
            fill,
            fallback: None,
        }
    }

    /// Whether the platform source failed and the fallback is in use
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }

    fn fallback_rng(&mut self, reason: &getrandom::Error) -> &mut StdRng {
        self.fallback.get_or_insert_with(|| {
            LoggingTransformer::log_degraded_entropy(&reason.to_string());
            StdRng::seed_from_u64(clock_seed())
        })
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Some(rng) = self.fallback.as_mut() {
            rng.fill_bytes(dest);
            return;
        }
        if let Err(e) = (self.fill)(dest) {
            self.fallback_rng(&e).fill_bytes(dest);
        }
    }
}

/// Deterministic source for tests and reproducible runs
#[derive(Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source whose output is fully determined by `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}

fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    let nanos = now.timestamp_nanos_opt().unwrap_or_else(|| now.timestamp());
    #[allow(clippy::cast_sign_loss)]
    let seed = nanos as u64;
    seed ^ u64::from(std::process::id()).rotate_left(32)
}
