//! # Runtime Configuration Module
//!
//! Environment variable-based configuration for the routing core.
//!
//! ## Environment Variables
//!
//! ### `SEQROUTE_SLOW_LOOKUP_US`
//!
//! Microsecond threshold above which a successful lookup is logged with
//! `warn!` instead of `info!`. Default: `1000` (1 ms). Malformed values fall
//! back to the default.
//!
//! ```bash
//! # Flag lookups slower than 250 µs
//! export SEQROUTE_SLOW_LOOKUP_US=250
//! ```

use std::env;
use std::time::Duration;

/// Default slow-lookup threshold in microseconds (1 ms).
pub const DEFAULT_SLOW_LOOKUP_US: u64 = 1_000;

/// Runtime configuration loaded from environment variables.
///
/// Load this at startup with [`RuntimeConfig::from_env()`], or construct it
/// directly to pin values in tests.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeConfig {
    /// Threshold above which a lookup logs a slow-lookup warning, in µs.
    pub slow_lookup_us: u64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            slow_lookup_us: DEFAULT_SLOW_LOOKUP_US,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let slow_lookup_us = env::var("SEQROUTE_SLOW_LOOKUP_US")
            .ok()
            .and_then(|val| parse_micros(&val))
            .unwrap_or(DEFAULT_SLOW_LOOKUP_US);
        Self { slow_lookup_us }
    }

    /// The slow-lookup threshold as a [`Duration`].
    #[must_use]
    pub fn slow_lookup(&self) -> Duration {
        Duration::from_micros(self.slow_lookup_us)
    }
}

fn parse_micros(val: &str) -> Option<u64> {
    val.trim().parse().ok()
}
