use serde::{Deserialize, Serialize};

/// Logic level carried by a pin or wire.
///
/// `Invalid` represents the absence of any driver (an unconnected pin reads
/// as `Invalid`, not as a third logic level). The variants are ordered so
/// that merging the signals of multiple drivers is a plain `max`: a `High`
/// driver wins over `Low`, which wins over no driver at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TriState {
    Invalid = 0,
    Low = 1,
    High = 2,
}

impl TriState {
    /// True for the two driven levels, false for `Invalid`.
    pub fn is_defined(self) -> bool {
        self != TriState::Invalid
    }

    /// Flip between the two defined levels. Never passes through `Invalid`:
    /// toggling an undriven pin drives it `High`.
    pub fn toggled(self) -> TriState {
        match self {
            TriState::High => TriState::Low,
            _ => TriState::High,
        }
    }
}

impl std::fmt::Display for TriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriState::Invalid => write!(f, "invalid"),
            TriState::Low => write!(f, "low"),
            TriState::High => write!(f, "high"),
        }
    }
}

/// Whether a pin reads from the network or drives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PinDirection {
    Input,
    Output,
}

/// Identifies one physical pin in the netlist.
///
/// `pin` indexes into the owning element's input or output pin list
/// depending on `direction`. Note that an input-source element's single
/// nominal input pin is addressed with `PinDirection::Output`, because for
/// propagation purposes it drives the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PinAddress {
    pub element: usize,
    pub pin: usize,
    pub direction: PinDirection,
}

impl PinAddress {
    pub fn input(element: usize, pin: usize) -> Self {
        Self {
            element,
            pin,
            direction: PinDirection::Input,
        }
    }

    pub fn output(element: usize, pin: usize) -> Self {
        Self {
            element,
            pin,
            direction: PinDirection::Output,
        }
    }
}

impl std::fmt::Display for PinAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = match self.direction {
            PinDirection::Input => "in",
            PinDirection::Output => "out",
        };
        write!(f, "{}.{}[{}]", self.element, dir, self.pin)
    }
}

/// Errors reportable at the engine API edge.
///
/// There is no fatal path in normal operation: bad indices and
/// unresolvable wiring degrade to safe defaults. These variants only cover
/// misuse of the call protocol itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A mutating operation was called before `initialize`.
    NotInitialized,
    /// A mutating operation was called from within a state-changed
    /// notification while the event queue was being drained. The boxed
    /// observers the engine owns have no path back to it, so this cannot
    /// occur through the current API; the guard holds the non-reentrancy
    /// contract in place as the observer surface grows.
    ReentrantCall,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NotInitialized => {
                write!(f, "simulation engine has not been initialized")
            }
            EngineError::ReentrantCall => {
                write!(f, "engine re-entered while draining the event queue")
            }
        }
    }
}

impl std::error::Error for EngineError {}
