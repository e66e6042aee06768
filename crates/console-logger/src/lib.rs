//! Console Logger
//!
//! A `tracing` layer that renders events as single lines and hands them to a
//! sink: the browser console on wasm32, stderr everywhere else.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;

/// Destination for formatted log lines
pub trait Sink: Send + Sync + 'static {
    fn write(&self, level: &Level, line: &str);
}

/// Browser console on wasm32, stderr elsewhere
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    #[cfg(target_arch = "wasm32")]
    fn write(&self, level: &Level, line: &str) {
        let value = wasm_bindgen::JsValue::from_str(line);
        if *level == Level::ERROR {
            web_sys::console::error_1(&value);
        } else if *level == Level::WARN {
            web_sys::console::warn_1(&value);
        } else if *level == Level::INFO {
            web_sys::console::info_1(&value);
        } else if *level == Level::DEBUG {
            web_sys::console::log_1(&value);
        } else {
            web_sys::console::debug_1(&value);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn write(&self, _level: &Level, line: &str) {
        eprintln!("{}", line);
    }
}

/// Layer that formats every event and forwards it to a [`Sink`]
#[derive(Debug, Clone, Default)]
pub struct ConsoleLayer<S = ConsoleSink> {
    sink: S,
}

impl<S: Sink> ConsoleLayer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
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

/// `[LEVEL target] message key=value ...`
pub fn format_line(level: &Level, target: &str, message: &str, fields: &str) -> String {
    format!("[{} {}] {}{}", level, target, message, fields)
}

impl<S, Sub> Layer<Sub> for ConsoleLayer<S>
where
    S: Sink,
    Sub: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, Sub>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let meta = event.metadata();
        let line = format_line(meta.level(), meta.target(), &visitor.message, &visitor.fields);
        self.sink.write(meta.level(), &line);
    }
}

/// Parse a level name ("info", "debug", ...), falling back to INFO
pub fn parse_level(raw: &str) -> LevelFilter {
    raw.trim().parse().unwrap_or(LevelFilter::INFO)
}

/// Install the console layer as the global subscriber
pub fn init(max_level: LevelFilter) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(ConsoleLayer::new(ConsoleSink).with_filter(max_level))
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

    impl Sink for Captured {
        fn write(&self, level: &Level, line: &str) {
            self.0.lock().unwrap().push((*level, line.to_string()));
        }
    }

    #[test]
    fn test_format_line() {
        let line = format_line(&Level::WARN, "shoe_admin::api", "request failed", " path=all-shoes");
        assert_eq!(line, "[WARN shoe_admin::api] request failed path=all-shoes");
    }

    #[test]
    fn test_layer_renders_message_and_fields() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(ConsoleLayer::new(captured.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(target: "orders", count = 3, id = "ord-1", "loaded {} orders", 3);
        });

        let lines = captured.0.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::INFO);
        assert_eq!(lines[0].1, "[INFO orders] loaded 3 orders count=3 id=ord-1");
    }

    #[test]
    fn test_level_filter_drops_lower_levels() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry()
            .with(ConsoleLayer::new(captured.clone()).with_filter(LevelFilter::WARN));

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::info!("hidden");
            tracing::error!("shown");
        });

        let lines = captured.0.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].0, Level::ERROR);
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level(" WARN "), LevelFilter::WARN);
        assert_eq!(parse_level("nonsense"), LevelFilter::INFO);
    }
}
