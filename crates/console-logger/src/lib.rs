//! Console logger
//!
//! Formats `tracing` events as plain single lines and hands each one to the
//! console method matching its level, so the browser devtools filter
//! (errors / warnings / info / verbose) keeps working. Outside wasm the
//! lines go to stderr.

use std::io;
use std::str::FromStr;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

pub const DEFAULT_LEVEL: Level = Level::INFO;

/// Where a finished line ends up
pub type Sink = fn(Level, &str);

/// Install the global subscriber.
///
/// `level` is a level name (`"debug"`, `"WARN"`, ...). Anything unparsable
/// falls back to [`DEFAULT_LEVEL`].
pub fn init_logger(level: &str) -> Result<(), String> {
    init_with_sink(level, console_sink)
}

pub fn init_with_sink(level: &str, sink: Sink) -> Result<(), String> {
    let max_level = parse_level(level);
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(ConsoleMakeWriter::new(sink))
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .try_init()
        .map_err(|e| e.to_string())?;
    tracing::debug!(%max_level, "console logger ready");
    Ok(())
}

pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(DEFAULT_LEVEL)
}

// ============================================================================
// Writer
// ============================================================================

#[derive(Clone, Copy)]
pub struct ConsoleMakeWriter {
    sink: Sink,
}

impl ConsoleMakeWriter {
    pub fn new(sink: Sink) -> Self {
        Self { sink }
    }
}

impl Default for ConsoleMakeWriter {
    fn default() -> Self {
        Self::new(console_sink)
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter::new(DEFAULT_LEVEL, self.sink)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter::new(*meta.level(), self.sink)
    }
}

/// Buffers one formatted event and emits it on drop
pub struct LineWriter {
    level: Level,
    sink: Sink,
    buf: Vec<u8>,
}

impl LineWriter {
    fn new(level: Level, sink: Sink) -> Self {
        Self {
            level,
            sink,
            buf: Vec::new(),
        }
    }
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end_matches('\n');
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn console_sink(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        Level::DEBUG => console::log_1(&value),
        Level::TRACE => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn console_sink(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static CAPTURED: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: Level, line: &str) {
        CAPTURED.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    fn captured() -> Vec<(Level, String)> {
        CAPTURED.with(|lines| lines.borrow_mut().drain(..).collect())
    }

    fn subscriber(max: Level) -> impl tracing::Subscriber + Send + Sync {
        tracing_subscriber::fmt()
            .with_max_level(max)
            .with_writer(ConsoleMakeWriter::new(capture))
            .with_ansi(false)
            .without_time()
            .finish()
    }

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("chatty"), DEFAULT_LEVEL);
        assert_eq!(parse_level(""), DEFAULT_LEVEL);
    }

    #[test]
    fn each_event_becomes_one_line_at_its_level() {
        tracing::subscriber::with_default(subscriber(Level::DEBUG), || {
            tracing::error!(status = 404, "delete failed");
            tracing::debug!("loading");
        });

        let lines = captured();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, Level::ERROR);
        assert!(lines[0].1.contains("delete failed"), "{}", lines[0].1);
        assert!(lines[0].1.contains("status=404"), "{}", lines[0].1);
        assert!(!lines[0].1.ends_with('\n'));
        assert_eq!(lines[1].0, Level::DEBUG);
    }

    #[test]
    fn events_below_max_level_are_dropped() {
        tracing::subscriber::with_default(subscriber(Level::WARN), || {
            tracing::info!("hidden");
            tracing::warn!("shown");
        });

        let lines = captured();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].1.contains("shown"));
    }
}
