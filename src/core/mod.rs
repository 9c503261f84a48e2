pub mod config;
pub mod element;
pub mod engine;
pub mod evaluator;
pub mod event;
pub mod event_queue;
pub mod geometry;
pub mod graph;
pub mod types;
pub mod wire;
