use std::sync::OnceLock;
use chrono::{DateTime, Local};

static LOGGER: OnceLock<Logger> = OnceLock::new();

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn log(&self, message: &str) {
        println!("{}", format_line(&Local::now(), self.prefix.as_deref(), message));
    }
}

pub fn format_line(timestamp: &DateTime<Local>, prefix: Option<&str>, message: &str) -> String {
    let timestamp = timestamp.format(TIMESTAMP_FORMAT);
    match prefix {
        Some(prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
        None => format!("[{}] {}", timestamp, message),
    }
}

/// Installs the process-wide logger. Only the first call has an effect.
pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Messages logged before `init_logger` are dropped; library code and tests
/// run without a logger.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
