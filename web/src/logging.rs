//! `tracing` output for the browser.
//!
//! The fmt subscriber formats each event as usual; [`ConsoleWriter`] hands
//! the finished line to the matching `console` method. No timestamps (no
//! wall clock in WASM) and no ANSI colors. Native builds (tests, static
//! export) print to stdout and stderr instead.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Level used when no `BONDFI_LOG` value was baked in at build time
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::INFO;

/// Parse a level name (`trace`, `debug`, `info`, `warn`, `error`, `off`),
/// falling back to [`DEFAULT_LEVEL`].
pub fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the console subscriber. Safe to call more than once; later
/// calls leave the first subscriber in place.
pub fn init(level: Option<&str>) {
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(level_from(level))
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .try_init();
}

/// Which `console` method a line goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Log,
}

impl From<&Level> for ConsoleMethod {
    fn from(level: &Level) -> Self {
        if *level == Level::ERROR {
            ConsoleMethod::Error
        } else if *level == Level::WARN {
            ConsoleMethod::Warn
        } else {
            ConsoleMethod::Log
        }
    }
}

/// Hands out one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(meta.level().into())
    }
}

/// Buffers one formatted event and emits it on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }

    fn take_line(&mut self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buffer).trim_end().to_string();
        self.buffer.clear();
        (!text.is_empty()).then_some(text)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if let Some(line) = self.take_line() {
            emit(self.method, &line);
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(self.method, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match method {
        ConsoleMethod::Error => web_sys::console::error_1(&value),
        ConsoleMethod::Warn => web_sys::console::warn_1(&value),
        ConsoleMethod::Log => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(method: ConsoleMethod, line: &str) {
    match method {
        ConsoleMethod::Log => println!("{line}"),
        ConsoleMethod::Error | ConsoleMethod::Warn => eprintln!("{line}"),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn level_parsing_falls_back_to_info() {
        assert_eq!(level_from(Some("debug")), LevelFilter::DEBUG);
        assert_eq!(level_from(Some(" WARN ")), LevelFilter::WARN);
        assert_eq!(level_from(Some("off")), LevelFilter::OFF);
        assert_eq!(level_from(Some("loud")), LevelFilter::INFO);
        assert_eq!(level_from(None), LevelFilter::INFO);
    }

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::from(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(&Level::INFO), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::from(&Level::TRACE), ConsoleMethod::Log);
    }

    #[test]
    fn writer_buffers_until_flush() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Log);
        write!(writer, " INFO token added").unwrap();
        writer.write_all(b" symbol=BFI\n").unwrap();

        assert_eq!(writer.take_line().as_deref(), Some(" INFO token added symbol=BFI"));
        assert_eq!(writer.take_line(), None);
    }

    #[test]
    fn init_is_idempotent() {
        init(Some("debug"));
        init(None);
        tracing::info!("logging initialised twice without panicking");
    }
}
