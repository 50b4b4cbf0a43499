use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggerSettings {
    pub prefix: Option<String>,
    pub verbose: bool,
}

pub struct Logger {
    settings: LoggerSettings,
}

impl Logger {
    fn new(settings: LoggerSettings) -> Self {
        Self { settings }
    }

    pub fn is_verbose(&self) -> bool {
        self.settings.verbose
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format_line(file, line, message));
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.settings.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(settings: LoggerSettings) {
    LOGGER.get_or_init(|| Logger::new(settings));
}

// Silent until `init_logger` runs, so library users and tests stay quiet.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

pub fn debug_enabled() -> bool {
    LOGGER.get().is_some_and(Logger::is_verbose)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log(file!(), line!(), &format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_carries_prefix_and_file_name() {
        let logger = Logger::new(LoggerSettings {
            prefix: Some("Client".to_string()),
            verbose: false,
        });

        let line = logger.format_line("common/src/games/tictactoe/session.rs", 42, "hello");

        assert!(line.ends_with("[Client][session.rs:42] hello"), "{}", line);
    }

    #[test]
    fn test_line_without_prefix() {
        let logger = Logger::new(LoggerSettings::default());

        let line = logger.format_line("C:\\src\\main.rs", 7, "started");

        assert!(line.ends_with("][main.rs:7] started"), "{}", line);
        assert!(!logger.is_verbose());
    }
}
