//! Flowchart graph model produced by the parsers and consumed by the emitters.

pub mod types;
