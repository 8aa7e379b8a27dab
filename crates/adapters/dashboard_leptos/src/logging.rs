//! Console logging — routes `tracing` events to the browser console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Writer emitting each formatted event as one console message.
pub struct ConsoleWriter {
    level: Level,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let line = String::from_utf8_lossy(buf);
        let message = wasm_bindgen::JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&message),
            Level::WARN => web_sys::console::warn_1(&message),
            Level::INFO => web_sys::console::info_1(&message),
            _ => web_sys::console::debug_1(&message),
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// [`MakeWriter`] picking the console method from the event level.
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { level: Level::INFO }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
        }
    }
}

/// Install the global subscriber with the given filter directive.
///
/// Timestamps are disabled: `wasm32-unknown-unknown` has no system clock.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        leptos::logging::warn!("invalid log filter {filter:?} ({err}), using \"info\"");
        EnvFilter::new("info")
    });

    if let Err(err) = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_env_filter(filter)
        .with_target(true)
        .without_time()
        .try_init()
    {
        leptos::logging::warn!("tracing subscriber already installed: {err}");
    }
}
