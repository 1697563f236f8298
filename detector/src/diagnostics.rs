use tracing::debug;

/// Receives debug events from a transition measurement.
///
/// Events are informational only: whatever a sink does with them has no
/// effect on the measurement.
pub trait DiagnosticsSink {
    fn event(&mut self, time: f64, message: &str);
}

/// Forwards events to `tracing` at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn event(&mut self, time: f64, message: &str) {
        debug!(time = format!("{time:.3}"), "transition: {message}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn event(&mut self, _time: f64, _message: &str) {}
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticEvent {
    pub time: f64,
    pub message: String,
}

/// Keeps every event in memory, e.g. to attach to a test report.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<DiagnosticEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.events.iter().map(|e| e.message.as_str()).collect()
    }
}

impl DiagnosticsSink for MemorySink {
    fn event(&mut self, time: f64, message: &str) {
        self.events.push(DiagnosticEvent {
            time,
            message: message.to_string(),
        });
    }
}

impl<D: DiagnosticsSink + ?Sized> DiagnosticsSink for &mut D {
    fn event(&mut self, time: f64, message: &str) {
        (**self).event(time, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_records_in_order() {
        let mut sink = MemorySink::new();
        sink.event(1.0, "first");
        sink.event(2.5, "second");
        assert_eq!(sink.messages(), vec!["first", "second"]);
        assert_eq!(sink.events[1].time, 2.5);
    }

    #[test]
    fn sinks_are_object_safe() {
        let mut sinks: Vec<Box<dyn DiagnosticsSink>> =
            vec![Box::new(TracingSink), Box::new(NullSink), Box::new(MemorySink::new())];
        for sink in sinks.iter_mut() {
            sink.event(0.0, "hello");
        }
    }
}
