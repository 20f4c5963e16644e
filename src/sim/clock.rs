use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Real time -> simulated time multiplier shared by every body in a simulation.
///
/// Clones share one value, so a UI control can hold a handle and change the
/// rate while the frame loop reads it. Stored as `f64` bits, lock-free.
#[derive(Clone, Debug)]
pub struct SimulationClock(Arc<AtomicU64>);

impl SimulationClock {
    pub fn new(time_scale: f64) -> Self {
        Self(Arc::new(AtomicU64::new(time_scale.to_bits())))
    }

    /// Simulated seconds per real second.
    pub fn time_scale(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    /// Non-finite rates are ignored.
    pub fn set_time_scale(&self, time_scale: f64) {
        if time_scale.is_finite() {
            self.0.store(time_scale.to_bits(), Ordering::Relaxed);
        }
    }

    /// Simulated duration for `real_dt` seconds of wall-clock time.
    pub fn simulated_dt(&self, real_dt: f64) -> f64 {
        self.time_scale() * real_dt
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_rate() {
        let clock = SimulationClock::new(1e6);
        let ui_handle = clock.clone();
        ui_handle.set_time_scale(250.0);
        assert_eq!(clock.time_scale(), 250.0);
        assert_eq!(clock.simulated_dt(0.5), 125.0);
    }

    #[test]
    fn rejects_non_finite_rate() {
        let clock = SimulationClock::default();
        clock.set_time_scale(f64::NAN);
        clock.set_time_scale(f64::INFINITY);
        assert_eq!(clock.time_scale(), 1.0);
    }
}
