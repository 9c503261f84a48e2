use super::types::{PinAddress, TriState};

/// One unit of work in a propagation pass. Transient: created and consumed
/// within a single drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// A pin's observed level changed. Only output-direction changes fan
    /// out across wires; a change addressed to an input pin is settled by
    /// the element evaluation queued alongside it.
    PinStateChange { addr: PinAddress, value: TriState },
    /// Recompute one element's output from its resolved inputs.
    ElementEvaluate { element: usize },
}
