use super::config::SimulationConfig;
use super::element::{ElementDesc, ElementKind, ElementSimInfo};
use super::evaluator::{evaluate_element, resolve_pin_state};
use super::event::SimEvent;
use super::event_queue::EventQueue;
use super::geometry::{within_snap_distance, Point};
use super::graph::ConnectionGraph;
use super::types::{EngineError, PinAddress, PinDirection, TriState};
use super::wire::{WireConnection, WireDesc};
use log::{debug, trace, warn};

/// Observer for element output changes.
///
/// Called synchronously from inside the drain loop, once per element whose
/// output actually changed. Implementations must not call back into the
/// engine; the event queue is being actively drained when they run.
pub trait StateObserver {
    fn on_state_changed(&mut self, element: usize, state: TriState);
}

/// Outcome of one propagation drain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropagationReport {
    pub events_processed: usize,
    /// False when the event budget ran out before the queue emptied,
    /// meaning the net carries a feedback loop that kept changing values.
    pub converged: bool,
}

impl PropagationReport {
    /// Report for an operation that had nothing to propagate.
    pub fn empty() -> Self {
        Self {
            events_processed: 0,
            converged: true,
        }
    }
}

/// Discrete-event simulation engine for a canvas of logic elements.
///
/// All simulation records are rebuilt wholesale by [`initialize`]; there is
/// no incremental element/wire editing, and every element or wire index
/// handed out before an `initialize` is invalidated by it. The engine is
/// single-threaded and non-reentrant: each public operation runs its full
/// propagation to completion before returning.
///
/// [`initialize`]: SimulationEngine::initialize
pub struct SimulationEngine {
    config: SimulationConfig,
    elements: Vec<ElementSimInfo>,
    wires: Vec<WireConnection>,
    graph: ConnectionGraph,
    queue: EventQueue,
    observers: Vec<Box<dyn StateObserver>>,
    running: bool,
    /// Re-entrancy guard: set for the duration of a drain so a mutating
    /// call arriving from inside an observer fails instead of corrupting
    /// the queue.
    draining: bool,
    initialized: bool,
}

impl SimulationEngine {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            elements: Vec::new(),
            wires: Vec::new(),
            graph: ConnectionGraph::new(),
            queue: EventQueue::new(),
            observers: Vec::new(),
            running: false,
            draining: false,
            initialized: false,
        }
    }

    /// Register an observer for state-changed notifications. Observers
    /// persist across `initialize` calls.
    pub fn add_observer(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    /// Clear all engine state and rebuild the simulation records and
    /// connection graph from the document's element and wire lists.
    ///
    /// Pure setup: no propagation occurs. Must be called before any other
    /// mutating operation. The descriptions are snapshotted; the engine
    /// keeps nothing pointing into caller storage.
    pub fn initialize(&mut self, elements: &[ElementDesc], wires: &[WireDesc]) {
        self.queue.clear();
        self.running = false;
        self.draining = false;

        self.elements = elements
            .iter()
            .enumerate()
            .map(|(index, desc)| ElementSimInfo::from_desc(index, desc))
            .collect();

        let (graph, connections) =
            ConnectionGraph::build(&self.elements, wires, self.config.snap_tolerance);
        self.graph = graph;
        self.wires = connections;
        self.initialized = true;

        debug!(
            "initialized: {} elements, {} wires, {} graph edges",
            self.elements.len(),
            self.wires.len(),
            self.graph.edge_count()
        );
    }

    /// Seed every input terminal's current value onto the network and
    /// drain to a fixed point. Idempotent while already running.
    pub fn start_simulation(&mut self) -> Result<PropagationReport, EngineError> {
        self.ensure_ready()?;
        if self.running {
            return Ok(PropagationReport::empty());
        }
        self.running = true;

        for info in &self.elements {
            if info.kind != ElementKind::InputPin {
                continue;
            }
            for addr in info.driving_pins() {
                self.queue.push(SimEvent::PinStateChange {
                    addr,
                    value: info.output_state,
                });
            }
        }

        Ok(self.drain())
    }

    /// Clear the running flag. Computed states stay visible, frozen at
    /// their last values.
    pub fn stop_simulation(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Flip an input terminal between `Low` and `High` and propagate.
    ///
    /// The observer fires for the terminal unconditionally, even if an
    /// identical toggle is somehow re-applied. Non-terminal or
    /// out-of-range targets are logged no-ops.
    pub fn toggle_input_pin(&mut self, element: usize) -> Result<PropagationReport, EngineError> {
        self.ensure_ready()?;

        let Some(info) = self.elements.get_mut(element) else {
            warn!("toggle requested for out-of-range element {}", element);
            return Ok(PropagationReport::empty());
        };
        if info.kind != ElementKind::InputPin {
            warn!("toggle requested for element {} which is not an input terminal", element);
            return Ok(PropagationReport::empty());
        }

        let value = info.output_state.toggled();
        info.output_state = value;
        info.dirty = true;
        debug!("input terminal {} toggled to {}", element, value);
        self.notify_state_changed(element, value);

        for addr in self.elements[element].driving_pins() {
            self.queue.push(SimEvent::PinStateChange { addr, value });
        }

        Ok(self.drain())
    }

    /// Read the level observed at one pin. Never mutates; out-of-range
    /// element or pin indices read as `Invalid`.
    pub fn get_pin_state(&self, element: usize, pin: usize, direction: PinDirection) -> TriState {
        let Some(info) = self.elements.get(element) else {
            trace!("pin state query for out-of-range element {}", element);
            return TriState::Invalid;
        };
        let in_range = match direction {
            PinDirection::Output => pin < info.driving_pin_count(),
            PinDirection::Input => pin < info.input_pins.len(),
        };
        if !in_range {
            return TriState::Invalid;
        }
        resolve_pin_state(
            &self.elements,
            &self.graph,
            PinAddress {
                element,
                pin,
                direction,
            },
        )
    }

    /// Force one re-evaluation of an element and propagate the result.
    /// Used when an external edit changed the element's inputs without a
    /// fresh `initialize`.
    pub fn update_element_state(&mut self, element: usize) -> Result<PropagationReport, EngineError> {
        self.ensure_ready()?;
        if element >= self.elements.len() {
            warn!("update requested for out-of-range element {}", element);
            return Ok(PropagationReport::empty());
        }
        self.queue.push(SimEvent::ElementEvaluate { element });
        Ok(self.drain())
    }

    /// Hit-test a double-click against the input terminals and toggle the
    /// first one within the snap tolerance. Returns whether a toggle
    /// happened. Interaction is only live while the simulation runs;
    /// clicks in stopped mode belong to the editing tools, not the engine.
    pub fn handle_double_click(&mut self, position: Point) -> bool {
        if !self.running {
            return false;
        }
        let hit = self
            .elements
            .iter()
            .find(|info| {
                info.kind == ElementKind::InputPin
                    && within_snap_distance(info.position, position, self.config.snap_tolerance)
            })
            .map(|info| info.index);

        match hit {
            Some(element) => self.toggle_input_pin(element).is_ok(),
            None => false,
        }
    }

    /// Indices of elements whose output changed since the last call, with
    /// the dirty flags cleared. Intended for renderer repaint batching.
    pub fn take_dirty_elements(&mut self) -> Vec<usize> {
        let mut dirty = Vec::new();
        for info in &mut self.elements {
            if info.dirty {
                info.dirty = false;
                dirty.push(info.index);
            }
        }
        dirty
    }

    /// Per-wire resolution records from the last `initialize`.
    pub fn wire_connections(&self) -> &[WireConnection] {
        &self.wires
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn ensure_ready(&self) -> Result<(), EngineError> {
        if !self.initialized {
            return Err(EngineError::NotInitialized);
        }
        if self.draining {
            return Err(EngineError::ReentrantCall);
        }
        Ok(())
    }

    /// Process queued events FIFO until the queue empties or the event
    /// budget runs out. The single drain loop shared by every trigger,
    /// which keeps propagation semantics identical regardless of whether
    /// it was a full reseed, a toggle, or a forced re-evaluation.
    fn drain(&mut self) -> PropagationReport {
        self.draining = true;
        let budget = self.config.max_events;
        let mut processed = 0;
        let mut converged = true;

        while let Some(event) = self.queue.pop() {
            if processed >= budget {
                warn!(
                    "propagation did not converge within {} events, abandoning {} queued",
                    budget,
                    self.queue.len() + 1
                );
                self.queue.clear();
                converged = false;
                break;
            }
            processed += 1;

            match event {
                SimEvent::PinStateChange { addr, value } => {
                    trace!("pin {} changed to {}", addr, value);
                    // Only driving pins fan out. A change addressed to an
                    // input pin is settled by the evaluate event queued
                    // alongside it; fanning out from inputs would bounce
                    // every value straight back across the wire.
                    if addr.direction != PinDirection::Output {
                        continue;
                    }
                    for &wire_index in self.graph.wires_at(&addr) {
                        let Some(wire) = self.wires.get(wire_index) else {
                            continue;
                        };
                        if let Some(opposite) = wire.opposite(&addr) {
                            self.queue.push(SimEvent::PinStateChange {
                                addr: opposite,
                                value,
                            });
                            self.queue.push(SimEvent::ElementEvaluate {
                                element: opposite.element,
                            });
                        }
                    }
                }
                SimEvent::ElementEvaluate { element } => {
                    self.evaluate_and_publish(element);
                }
            }
        }

        self.draining = false;
        PropagationReport {
            events_processed: processed,
            converged,
        }
    }

    /// Recompute one element; on an actual change, store the value, notify
    /// observers, and queue the change for further propagation.
    fn evaluate_and_publish(&mut self, element: usize) {
        let Some(info) = self.elements.get(element) else {
            return;
        };
        // Input terminals hold externally set values; sinks have no output
        // to store.
        if info.kind == ElementKind::InputPin || !info.is_driver() {
            return;
        }

        let value = evaluate_element(&self.elements, &self.graph, element);
        let info = &mut self.elements[element];
        if value == info.output_state {
            return;
        }
        info.output_state = value;
        info.dirty = true;
        trace!("element {} evaluated to {}", element, value);
        self.notify_state_changed(element, value);

        for addr in self.elements[element].driving_pins() {
            self.queue.push(SimEvent::PinStateChange { addr, value });
        }
    }

    fn notify_state_changed(&mut self, element: usize, state: TriState) {
        for observer in &mut self.observers {
            observer.on_state_changed(element, state);
        }
    }
}
