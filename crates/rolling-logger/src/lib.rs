//! Rolling Logger
//!
//! A `tracing-subscriber` layer that keeps the newest log lines in a bounded
//! in-memory ring and mirrors each line to the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::Registry;

/// One formatted log event
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:<5} {}: {}", self.timestamp, self.level, self.target, self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
}

/// Bounded FIFO of log lines
#[derive(Debug)]
struct Ring {
    lines: VecDeque<LogLine>,
    capacity: usize,
}

impl Ring {
    fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    fn push(&mut self, line: LogLine) {
        while self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }
}

/// Layer that records every event into a shared ring
#[derive(Clone)]
pub struct RollingLayer {
    app_name: String,
    ring: Arc<Mutex<Ring>>,
    echo: bool,
}

impl RollingLayer {
    pub fn new(app_name: &str, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            ring: Arc::new(Mutex::new(Ring::new(capacity))),
            echo: true,
        }
    }

    /// Disable console/stderr mirroring (tests)
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Snapshot of retained lines, oldest first
    pub fn lines(&self) -> Vec<LogLine> {
        match self.ring.lock() {
            Ok(ring) => ring.lines.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().lines.iter().cloned().collect(),
        }
    }

    fn record(&self, line: LogLine) {
        if self.echo {
            emit(&self.app_name, &line);
        }
        match self.ring.lock() {
            Ok(mut ring) => ring.push(line),
            Err(poisoned) => poisoned.into_inner().push(line),
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();
        self.record(LogLine {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: visitor.message + &visitor.fields,
        });
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(app_name: &str, line: &LogLine) {
    let text = wasm_bindgen::JsValue::from_str(&format!("{} {}", app_name, line));
    match line.level {
        Level::ERROR => web_sys::console::error_1(&text),
        Level::WARN => web_sys::console::warn_1(&text),
        _ => web_sys::console::log_1(&text),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(app_name: &str, line: &LogLine) {
    eprintln!("{} {}", app_name, line);
}

static GLOBAL: OnceLock<RollingLayer> = OnceLock::new();

/// Install the rolling layer as the global tracing subscriber
pub fn init_logger(app_name: &str, capacity: usize) -> Result<(), LoggerError> {
    let layer = RollingLayer::new(app_name, capacity);
    GLOBAL.set(layer.clone()).map_err(|_| LoggerError::AlreadyInitialized)?;
    tracing::subscriber::set_global_default(Registry::default().with(layer))
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Recent lines captured by the global logger (empty before init)
pub fn recent() -> Vec<LogLine> {
    GLOBAL.get().map(RollingLayer::lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_drops_oldest_when_full() {
        let layer = RollingLayer::new("test", 2).quiet();
        let subscriber = Registry::default().with(layer.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("first");
            tracing::warn!("second");
            tracing::error!("third");
        });

        let lines = layer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].message, "second");
        assert_eq!(lines[0].level, Level::WARN);
        assert_eq!(lines[1].message, "third");
    }

    #[test]
    fn extra_fields_are_appended() {
        let layer = RollingLayer::new("test", 8).quiet();
        let subscriber = Registry::default().with(layer.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(character_id = 7, "[TODO] checked");
        });

        let lines = layer.lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].message, "[TODO] checked character_id=7");
    }

    #[test]
    fn zero_capacity_keeps_one_line() {
        let mut ring = Ring::new(0);
        for n in 0..3 {
            ring.push(LogLine {
                timestamp: String::new(),
                level: Level::INFO,
                target: "t".into(),
                message: n.to_string(),
            });
        }
        assert_eq!(ring.lines.len(), 1);
        assert_eq!(ring.lines[0].message, "2");
    }
}
