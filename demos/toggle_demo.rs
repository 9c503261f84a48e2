//! Small interactive-circuit walkthrough: two input terminals driving a
//! 2-input AND-like gate, with a display terminal on the gate output.
//!
//! Run with `RUST_LOG=debug` to watch the propagation engine work.

use log::info;
use wiresim::{
    ElementDesc, EngineError, PinDirection, Point, SimulationConfig, SimulationEngine,
    StateObserver, TriState, WireDesc,
};

struct ConsoleObserver;

impl StateObserver for ConsoleObserver {
    fn on_state_changed(&mut self, element: usize, state: TriState) {
        info!("element {} changed to {}", element, state);
    }
}

fn print_states(engine: &SimulationEngine) {
    println!(
        "  terminal A = {}, terminal B = {}, gate out = {}, display reads = {}",
        engine.get_pin_state(0, 0, PinDirection::Output),
        engine.get_pin_state(1, 0, PinDirection::Output),
        engine.get_pin_state(2, 0, PinDirection::Output),
        engine.get_pin_state(3, 0, PinDirection::Input),
    );
}

fn main() -> Result<(), EngineError> {
    env_logger::init();

    // A (0) and B (1) feed gate (2); display terminal (3) shows the result.
    let elements = vec![
        ElementDesc::input_pin(Point::new(0.0, 0.0)),
        ElementDesc::input_pin(Point::new(0.0, 40.0)),
        ElementDesc::gate(
            Point::new(100.0, 20.0),
            vec![Point::new(-10.0, -20.0), Point::new(-10.0, 20.0)],
            vec![Point::new(10.0, 0.0)],
        ),
        ElementDesc::output_pin(Point::new(200.0, 20.0)),
    ];
    let wires = vec![
        WireDesc::between(Point::new(0.0, 0.0), Point::new(90.0, 0.0)),
        WireDesc::between(Point::new(0.0, 40.0), Point::new(90.0, 40.0)),
        WireDesc::between(Point::new(110.0, 20.0), Point::new(200.0, 20.0)),
    ];

    let mut engine = SimulationEngine::new(SimulationConfig::default());
    engine.add_observer(Box::new(ConsoleObserver));
    engine.initialize(&elements, &wires);

    let report = engine.start_simulation()?;
    println!(
        "simulation started ({} events to settle)",
        report.events_processed
    );
    print_states(&engine);

    println!("toggling terminal A high:");
    engine.toggle_input_pin(0)?;
    print_states(&engine);

    println!("double-clicking terminal B:");
    engine.handle_double_click(Point::new(2.0, 41.0));
    print_states(&engine);

    println!("toggling terminal A back low:");
    engine.toggle_input_pin(0)?;
    print_states(&engine);

    engine.stop_simulation();
    Ok(())
}
