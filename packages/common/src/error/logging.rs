//! Structured logging bootstrap
//!
//! Provides env_logger-based logging that never writes generated values;
//! outputs are identified by a short SHA-256 fingerprint instead.

use log::{debug, error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (call once at application startup)
    ///
    /// Configure levels via the `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - all debug logs
    /// - `RUST_LOG=warn` - warnings and errors only (default)
    /// - `RUST_LOG=keyforge_key=debug` - module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or("warn"),
            )
            .format_timestamp_micros()
            .init();

            debug!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a successful generation without exposing the generated value
    pub fn log_generation(generator: &str, output: &str) {
        let fingerprint = Self::fingerprint(output);
        debug!(
            "Generated value: {generator} (chars: {}, fingerprint: {fingerprint})",
            output.chars().count()
        );
    }

    /// Log a failed generation with the error type and message
    pub fn log_generation_error(generator: &str, error: &dyn std::error::Error) {
        error!("Key generation failed: {generator} ({error})");
    }

    /// Log that the secure random source is unavailable
    pub fn log_degraded_entropy(reason: &str) {
        warn!("Secure random source unavailable, using non-secure fallback: {reason}");
    }

    /// Log where configuration was loaded from
    pub fn log_config_loaded(path: &str, generators: usize) {
        info!("Loaded configuration from {path} ({generators} generator overrides)");
    }

    /// SHA-256 fingerprint of a generated value for log correlation
    ///
    /// Returns the first 12 hex characters prefixed with `#`.
    #[must_use]
    pub fn fingerprint(value: &str) -> String {
        let hash = Sha256::digest(value.as_bytes());
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
