//! Performance instrumentation.
//!
//! Scoped RAII timers for the pointer handlers and the render pass. They are
//! compiled in only with the `profiling` feature:
//! ```toml
//! [dependencies]
//! slotboard = { features = ["profiling"] }
//! ```
//!
//! ```ignore
//! fn handle_pointer_down() {
//!     profile_scope!("handle_pointer_down");
//!     // ... work ...
//! }
//! ```

use std::time::Instant;
use tracing::{trace, warn};

use crate::constants::SLOW_HANDLER_MS;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $crate::constants::SLOW_HANDLER_MS);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// Logs the elapsed time of a scope when dropped.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Elapsed milliseconds so far
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for ScopedTimer {
    fn default() -> Self {
        Self::new("scope", SLOW_HANDLER_MS)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed_ms();
        if elapsed > self.threshold_ms {
            warn!(
                scope = self.name,
                elapsed_ms = elapsed,
                threshold_ms = self.threshold_ms,
                "Slow operation"
            );
        } else {
            trace!(scope = self.name, elapsed_ms = elapsed, "Scope timing");
        }
    }
}
