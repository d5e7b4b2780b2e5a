//! Console Logger
//!
//! `log` backend for the browser. Each record becomes one line:
//! `[HH:MM:SS.mmm] LEVEL app: message`, sent to the console method matching
//! its level. Off wasm32 the line goes to stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger {
    app_name: String,
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn new(app_name: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            app_name: app_name.into(),
            level,
        }
    }

    fn format_line(&self, time: &str, level: Level, message: &std::fmt::Arguments<'_>) -> String {
        format!("[{}] {:<5} {}: {}", time, level, self.app_name, message)
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let time = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = self.format_line(&time, record.level(), record.args());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug | Level::Trace => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Parse a level name such as `"debug"`; unknown names fall back to `default`
pub fn parse_level(name: Option<&str>, default: LevelFilter) -> LevelFilter {
    name.and_then(|n| n.trim().parse().ok()).unwrap_or(default)
}

/// Install the logger process-wide. Fails if a logger is already set.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(ConsoleLogger::new(app_name, level)))?;
    log::set_max_level(level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let logger = ConsoleLogger::new("Todo", LevelFilter::Info);
        let line = logger.format_line("12:00:00.000", Level::Warn, &format_args!("saved {} todos", 3));
        assert_eq!(line, "[12:00:00.000] WARN  Todo: saved 3 todos");
    }

    #[test]
    fn test_enabled_respects_level() {
        let logger = ConsoleLogger::new("Todo", LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(Some("debug"), LevelFilter::Info), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN "), LevelFilter::Info), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud"), LevelFilter::Info), LevelFilter::Info);
        assert_eq!(parse_level(None, LevelFilter::Error), LevelFilter::Error);
    }
}
