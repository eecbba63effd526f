//! Event bus: buffered event dispatch with pluggable sinks.
//!
//! Events are queued on `emit` and handed to every sink on `flush`. The
//! bus is plain data (no channels), so it can be owned by the simulation
//! and stored wherever the simulation is stored.

use crate::events::SimulationEvent;
use crate::sinks::EventSink;

/// Buffered event bus for simulation telemetry.
pub struct EventBus {
    /// Events emitted since the last flush.
    pending: Vec<SimulationEvent>,
    /// Registered sinks.
    sinks: Vec<Box<dyn EventSink>>,
    /// Whether the bus is active. Disabled bus is a no-op.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the bus is active.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queue an event. If the bus is disabled, this is a no-op.
    pub fn emit(&mut self, event: SimulationEvent) {
        if !self.enabled {
            return;
        }
        self.pending.push(event);
    }

    /// Number of events waiting for the next flush.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Dispatch all pending events to registered sinks, in emission order.
    pub fn flush(&mut self) {
        for event in self.pending.drain(..) {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
        }
    }

    /// Flush and let every sink finalize.
    pub fn finish(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
