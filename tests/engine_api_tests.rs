use wiresim::{
    ElementDesc, PinDirection, Point, SimulationConfig, SimulationEngine, TriState, WireDesc,
};

/// One-input gate shaped like a buffer: input on the left, output on the
/// right.
fn buffer(x: f32, y: f32) -> ElementDesc {
    ElementDesc::gate(
        Point::new(x, y),
        vec![Point::new(-10.0, 0.0)],
        vec![Point::new(10.0, 0.0)],
    )
}

#[test]
fn test_toggle_propagates_through_a_chain() {
    // terminal (0) -> buffer (1) -> buffer (2)
    let elements = vec![
        ElementDesc::input_pin(Point::new(0.0, 0.0)),
        buffer(100.0, 0.0),
        buffer(200.0, 0.0),
    ];
    let wires = vec![
        WireDesc::between(Point::new(0.0, 0.0), Point::new(90.0, 0.0)),
        WireDesc::between(Point::new(110.0, 0.0), Point::new(190.0, 0.0)),
    ];

    let mut engine = SimulationEngine::new(SimulationConfig::default());
    engine.initialize(&elements, &wires);
    let report = engine.start_simulation().expect("start");
    assert!(report.converged);

    // A single Low input makes every stage Low.
    assert_eq!(engine.get_pin_state(1, 0, PinDirection::Output), TriState::Low);
    assert_eq!(engine.get_pin_state(2, 0, PinDirection::Output), TriState::Low);

    // High ripples through the whole chain in one drain.
    let report = engine.toggle_input_pin(0).expect("toggle high");
    assert!(report.converged);
    assert_eq!(engine.get_pin_state(1, 0, PinDirection::Output), TriState::High);
    assert_eq!(engine.get_pin_state(2, 0, PinDirection::Output), TriState::High);

    // And back.
    engine.toggle_input_pin(0).expect("toggle low");
    assert_eq!(engine.get_pin_state(1, 0, PinDirection::Output), TriState::Low);
    assert_eq!(engine.get_pin_state(2, 0, PinDirection::Output), TriState::Low);
}

#[test]
fn test_one_output_fans_out_to_two_sinks() {
    // terminal (0) drives both buffers (1) and (2) over separate wires
    // from the same pin.
    let elements = vec![
        ElementDesc::input_pin(Point::new(0.0, 0.0)),
        buffer(100.0, -40.0),
        buffer(100.0, 40.0),
    ];
    let wires = vec![
        WireDesc::between(Point::new(0.0, 0.0), Point::new(90.0, -40.0)),
        WireDesc::between(Point::new(0.0, 0.0), Point::new(90.0, 40.0)),
    ];

    let mut engine = SimulationEngine::new(SimulationConfig::default());
    engine.initialize(&elements, &wires);
    engine.start_simulation().expect("start");
    engine.toggle_input_pin(0).expect("toggle");

    assert_eq!(engine.get_pin_state(1, 0, PinDirection::Output), TriState::High);
    assert_eq!(engine.get_pin_state(2, 0, PinDirection::Output), TriState::High);
}

#[test]
fn test_output_terminal_observes_gate_result() {
    // terminal (0) -> 2-input gate (1) -> display terminal (2), with the
    // gate's second input wired to a second terminal (3).
    let elements = vec![
        ElementDesc::input_pin(Point::new(0.0, 0.0)),
        ElementDesc::gate(
            Point::new(100.0, 10.0),
            vec![Point::new(-10.0, -10.0), Point::new(-10.0, 10.0)],
            vec![Point::new(10.0, 0.0)],
        ),
        ElementDesc::output_pin(Point::new(200.0, 10.0)),
        ElementDesc::input_pin(Point::new(0.0, 20.0)),
    ];
    let wires = vec![
        WireDesc::between(Point::new(0.0, 0.0), Point::new(90.0, 0.0)),
        WireDesc::between(Point::new(0.0, 20.0), Point::new(90.0, 20.0)),
        WireDesc::between(Point::new(110.0, 10.0), Point::new(200.0, 10.0)),
    ];

    let mut engine = SimulationEngine::new(SimulationConfig::default());
    engine.initialize(&elements, &wires);
    engine.start_simulation().expect("start");

    // Both terminals Low: the display pin reads the gate's Low.
    assert_eq!(engine.get_pin_state(2, 0, PinDirection::Input), TriState::Low);

    engine.toggle_input_pin(0).expect("toggle first");
    assert_eq!(engine.get_pin_state(2, 0, PinDirection::Input), TriState::Low);

    engine.toggle_input_pin(3).expect("toggle second");
    assert_eq!(
        engine.get_pin_state(2, 0, PinDirection::Input),
        TriState::High,
        "both inputs High must drive the display High"
    );
}

#[test]
fn test_reinitialize_rebuilds_from_scratch() {
    let elements = vec![ElementDesc::input_pin(Point::new(0.0, 0.0))];
    let mut engine = SimulationEngine::new(SimulationConfig::default());
    engine.initialize(&elements, &[]);
    engine.start_simulation().expect("start");
    engine.toggle_input_pin(0).expect("toggle");
    assert_eq!(engine.get_pin_state(0, 0, PinDirection::Output), TriState::High);

    // A fresh initialize drops all prior state, including the toggle and
    // the running flag.
    engine.initialize(&elements, &[]);
    assert!(!engine.is_running());
    assert_eq!(engine.get_pin_state(0, 0, PinDirection::Output), TriState::Low);
}
