use super::element::ElementSimInfo;
use super::graph::ConnectionGraph;
use super::types::{PinAddress, PinDirection, TriState};

/// Resolve the level observed at one pin.
///
/// An output pin reports its owning element's stored state directly. An
/// input pin merges the states of every directly wired neighbor, favoring
/// `High` over `Low` over `Invalid` when drivers disagree. The tie-break
/// is a wired-OR chosen for determinism rather than electrical accuracy.
/// Neighbors that cannot drive (pure sinks) contribute `Invalid`.
pub fn resolve_pin_state(
    elements: &[ElementSimInfo],
    graph: &ConnectionGraph,
    addr: PinAddress,
) -> TriState {
    match addr.direction {
        PinDirection::Output => elements
            .get(addr.element)
            .map(|info| info.output_state)
            .unwrap_or(TriState::Invalid),
        PinDirection::Input => {
            let Some(neighbors) = graph.neighbors(&addr) else {
                return TriState::Invalid;
            };
            let mut merged = TriState::Invalid;
            for neighbor in neighbors {
                let Some(info) = elements.get(neighbor.element) else {
                    continue;
                };
                if info.is_driver() {
                    merged = merged.max(info.output_state);
                }
            }
            merged
        }
    }
}

/// Recompute one element's output from its resolved input pins.
///
/// Uniform AND-like semantics for every element kind: `Invalid` when no
/// input resolves to a defined level, `High` only when every input
/// resolves `High`, `Low` otherwise. Per-kind gate functions (OR, XOR,
/// NOT) hang off this single extension point when they get differentiated.
pub fn evaluate_element(
    elements: &[ElementSimInfo],
    graph: &ConnectionGraph,
    element: usize,
) -> TriState {
    let Some(info) = elements.get(element) else {
        return TriState::Invalid;
    };

    let mut any_defined = false;
    let mut all_high = true;
    for pin in 0..info.input_pins.len() {
        let state = resolve_pin_state(elements, graph, PinAddress::input(element, pin));
        if state.is_defined() {
            any_defined = true;
        }
        if state != TriState::High {
            all_high = false;
        }
    }

    if !any_defined {
        TriState::Invalid
    } else if all_high {
        TriState::High
    } else {
        TriState::Low
    }
}
