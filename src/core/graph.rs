use super::element::{ElementKind, ElementSimInfo};
use super::geometry::{within_snap_distance, Point};
use super::types::{PinAddress, PinDirection};
use super::wire::{WireConnection, WireDesc};
use log::{debug, warn};
use std::collections::HashMap;

/// Undirected pin adjacency derived once from wire endpoint geometry.
///
/// Two maps share the same `PinAddress` keys: `adjacency` answers "which
/// pins is this pin joined to" (used by pin-state resolution) and
/// `wire_incidence` answers "which wires touch this pin" (used by the
/// propagation fan-out). Both are read-only after `build`.
pub struct ConnectionGraph {
    adjacency: HashMap<PinAddress, Vec<PinAddress>>,
    wire_incidence: HashMap<PinAddress, Vec<usize>>,
}

impl ConnectionGraph {
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            wire_incidence: HashMap::new(),
        }
    }

    /// Derive the connection graph and per-wire resolution records from
    /// the full element and wire lists.
    ///
    /// Endpoint resolution is first-match-wins: elements are scanned in
    /// index order and, within an element, output pins before input pins.
    /// Layouts with several pins inside one tolerance radius resolve to
    /// the earliest match; the scan order is fixed so the result is at
    /// least deterministic.
    pub fn build(
        elements: &[ElementSimInfo],
        wires: &[WireDesc],
        tolerance: f32,
    ) -> (ConnectionGraph, Vec<WireConnection>) {
        let mut graph = ConnectionGraph::new();
        let mut connections = Vec::with_capacity(wires.len());

        for (wire_index, wire) in wires.iter().enumerate() {
            if wire.points.len() < 2 {
                debug!("wire {} has fewer than two control points, ignored", wire_index);
                connections.push(WireConnection::unresolved());
                continue;
            }

            // Only the endpoints are topological; bend points are geometry.
            let start = wire.first_point().and_then(|p| resolve_endpoint(elements, p, tolerance));
            let end = wire.last_point().and_then(|p| resolve_endpoint(elements, p, tolerance));

            let (start, end) = match (start, end) {
                (Some(start), Some(end)) => (start, end),
                (start, end) => {
                    debug!(
                        "wire {} endpoint resolution incomplete (start: {:?}, end: {:?}), excluded",
                        wire_index, start, end
                    );
                    connections.push(WireConnection {
                        start,
                        end,
                        is_connected: false,
                    });
                    continue;
                }
            };

            // Two drivers on one wire is an infeasible electrical
            // configuration; the wire is kept visually but carries no
            // signal.
            if start.direction == PinDirection::Output && end.direction == PinDirection::Output {
                warn!(
                    "wire {} shorts output pin {} to output pin {}, excluded from the graph",
                    wire_index, start, end
                );
                connections.push(WireConnection {
                    start: Some(start),
                    end: Some(end),
                    is_connected: false,
                });
                continue;
            }

            graph.insert_edge(start, end, wire_index);
            connections.push(WireConnection {
                start: Some(start),
                end: Some(end),
                is_connected: true,
            });
            debug!("wire {} joins {} and {}", wire_index, start, end);
        }

        (graph, connections)
    }

    fn insert_edge(&mut self, a: PinAddress, b: PinAddress, wire_index: usize) {
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
        self.wire_incidence.entry(a).or_default().push(wire_index);
        self.wire_incidence.entry(b).or_default().push(wire_index);
    }

    /// Pins directly joined to `addr` by a wire. `None` when the pin has
    /// no connections at all.
    pub fn neighbors(&self, addr: &PinAddress) -> Option<&[PinAddress]> {
        self.adjacency.get(addr).map(Vec::as_slice)
    }

    /// Indices of the wires touching `addr`.
    pub fn wires_at(&self, addr: &PinAddress) -> &[usize] {
        self.wire_incidence.get(addr).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of undirected edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

impl Default for ConnectionGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve one wire endpoint to the first pin within `tolerance` of it.
///
/// An input terminal's nominal input pin is classified as a driving output
/// here: the terminal asserts its externally toggled value onto the
/// network, it does not read from it.
fn resolve_endpoint(
    elements: &[ElementSimInfo],
    endpoint: Point,
    tolerance: f32,
) -> Option<PinAddress> {
    for info in elements {
        for (pin, position) in info.output_pins.iter().enumerate() {
            if within_snap_distance(*position, endpoint, tolerance) {
                return Some(PinAddress::output(info.index, pin));
            }
        }
        for (pin, position) in info.input_pins.iter().enumerate() {
            if within_snap_distance(*position, endpoint, tolerance) {
                return Some(match info.kind {
                    ElementKind::InputPin => PinAddress::output(info.index, pin),
                    _ => PinAddress::input(info.index, pin),
                });
            }
        }
    }
    None
}
