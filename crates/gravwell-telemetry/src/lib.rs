//! # gravwell-telemetry
//!
//! Event bus for simulation telemetry. The engine emits structured events
//! (bodies added, steps completed, drags started and ended) that are
//! dispatched to pluggable sinks on flush.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
