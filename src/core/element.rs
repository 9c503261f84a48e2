use super::geometry::Point;
use super::types::{PinAddress, TriState};
use serde::{Deserialize, Serialize};

/// Simulation-relevant classification of a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Toggleable stimulus terminal. Its nominal input pin drives the
    /// network, so for propagation it behaves as an output.
    InputPin,
    /// Display terminal; a pure sink.
    OutputPin,
    /// Generic combinational element.
    Gate,
}

impl ElementKind {
    /// Map the document layer's type tag onto a simulation kind. Unknown
    /// tags are treated as generic gates.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Pin_Input" => ElementKind::InputPin,
            "Pin_Output" => ElementKind::OutputPin,
            _ => ElementKind::Gate,
        }
    }
}

/// Read-only simulation view of a placed element.
///
/// The document layer owns element storage; the engine snapshots these
/// descriptions during `initialize` and never holds references into caller
/// collections afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementDesc {
    pub kind: ElementKind,
    pub position: Point,
    /// Pin offsets relative to `position`, in declaration order.
    pub input_pin_offsets: Vec<Point>,
    pub output_pin_offsets: Vec<Point>,
}

impl ElementDesc {
    pub fn from_tag(
        tag: &str,
        position: Point,
        input_pin_offsets: Vec<Point>,
        output_pin_offsets: Vec<Point>,
    ) -> Self {
        Self {
            kind: ElementKind::from_tag(tag),
            position,
            input_pin_offsets,
            output_pin_offsets,
        }
    }

    /// A circuit input terminal: one nominal input pin at the element
    /// position, no outputs.
    pub fn input_pin(position: Point) -> Self {
        Self {
            kind: ElementKind::InputPin,
            position,
            input_pin_offsets: vec![Point::new(0.0, 0.0)],
            output_pin_offsets: Vec::new(),
        }
    }

    /// A circuit output terminal: one input pin at the element position.
    pub fn output_pin(position: Point) -> Self {
        Self {
            kind: ElementKind::OutputPin,
            position,
            input_pin_offsets: vec![Point::new(0.0, 0.0)],
            output_pin_offsets: Vec::new(),
        }
    }

    pub fn gate(
        position: Point,
        input_pin_offsets: Vec<Point>,
        output_pin_offsets: Vec<Point>,
    ) -> Self {
        Self {
            kind: ElementKind::Gate,
            position,
            input_pin_offsets,
            output_pin_offsets,
        }
    }
}

/// Per-element simulation record, rebuilt wholesale by every `initialize`.
///
/// Pin positions are resolved to absolute canvas coordinates up front so
/// connection building and hit testing never go back to the document layer.
#[derive(Debug, Clone)]
pub struct ElementSimInfo {
    /// Stable index into the engine's element list.
    pub index: usize,
    pub kind: ElementKind,
    pub position: Point,
    /// Absolute input pin positions, same order as the description.
    pub input_pins: Vec<Point>,
    /// Absolute output pin positions.
    pub output_pins: Vec<Point>,
    /// Current driven level. Meaningful only for drivers; pure sinks keep
    /// it at `Invalid` and are read through their input pins instead.
    pub output_state: TriState,
    /// Set whenever `output_state` changes, cleared when the renderer
    /// collects repaint work.
    pub dirty: bool,
}

impl ElementSimInfo {
    pub fn from_desc(index: usize, desc: &ElementDesc) -> Self {
        let resolve =
            |offsets: &[Point]| -> Vec<Point> {
                offsets.iter().map(|o| desc.position.offset_by(*o)).collect()
            };
        // Input terminals start driving Low; everything else is undriven
        // until the first evaluation.
        let output_state = match desc.kind {
            ElementKind::InputPin => TriState::Low,
            _ => TriState::Invalid,
        };
        Self {
            index,
            kind: desc.kind,
            position: desc.position,
            input_pins: resolve(&desc.input_pin_offsets),
            output_pins: resolve(&desc.output_pin_offsets),
            output_state,
            dirty: false,
        }
    }

    /// An element can assert a value onto the network if it has output pins
    /// or is an externally toggled input terminal.
    pub fn is_driver(&self) -> bool {
        !self.output_pins.is_empty() || self.kind == ElementKind::InputPin
    }

    /// Addresses of every pin this element drives. For an input terminal
    /// this is its nominal input pin under the output direction (the
    /// documented inversion); for other elements, the output pin list.
    pub fn driving_pins(&self) -> Vec<PinAddress> {
        let count = match self.kind {
            ElementKind::InputPin => self.input_pins.len(),
            _ => self.output_pins.len(),
        };
        (0..count).map(|pin| PinAddress::output(self.index, pin)).collect()
    }

    /// Number of pins addressable with `PinDirection::Output`.
    pub fn driving_pin_count(&self) -> usize {
        match self.kind {
            ElementKind::InputPin => self.input_pins.len(),
            _ => self.output_pins.len(),
        }
    }
}
