pub mod core;

// Re-export commonly used types
pub use crate::core::config::SimulationConfig;
pub use crate::core::element::{ElementDesc, ElementKind};
pub use crate::core::engine::{PropagationReport, SimulationEngine, StateObserver};
pub use crate::core::geometry::Point;
pub use crate::core::types::{EngineError, PinDirection, TriState};
pub use crate::core::wire::WireDesc;
