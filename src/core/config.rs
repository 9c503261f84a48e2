use serde::{Deserialize, Serialize};

/// Pins snap to wire endpoints (and double-clicks snap to input terminals)
/// within this many canvas units.
pub const DEFAULT_SNAP_TOLERANCE: f32 = 8.0;

/// Upper bound on events processed by a single propagation drain. The
/// event model cannot detect feedback loops, so a runaway net is cut off
/// here and reported as not converged instead of blocking the caller
/// forever.
pub const DEFAULT_EVENT_BUDGET: usize = 100_000;

/// Configuration for simulation execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Endpoint/hit-test proximity tolerance in canvas units.
    pub snap_tolerance: f32,
    /// Maximum events one drain may process before giving up.
    pub max_events: usize,
}

impl SimulationConfig {
    /// Create a configuration with the default tolerance and budget.
    pub fn new() -> Self {
        Self {
            snap_tolerance: DEFAULT_SNAP_TOLERANCE,
            max_events: DEFAULT_EVENT_BUDGET,
        }
    }

    /// Set the pin snap tolerance.
    pub fn with_snap_tolerance(mut self, tolerance: f32) -> Self {
        self.snap_tolerance = tolerance;
        self
    }

    /// Set the per-drain event budget.
    pub fn with_event_budget(mut self, max_events: usize) -> Self {
        self.max_events = max_events;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
