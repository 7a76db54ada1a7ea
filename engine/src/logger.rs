use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
    verbose: bool,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        Self { prefix, verbose }
    }

    pub fn log(&self, message: &str) {
        self.write("INFO", message);
    }

    pub fn debug(&self, message: &str) {
        if self.verbose {
            self.write("DEBUG", message);
        }
    }

    fn write(&self, level: &str, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match self.prefix {
            Some(ref prefix) => eprintln!("[{}][{}][{}] {}", timestamp, level, prefix, message),
            None => eprintln!("[{}][{}] {}", timestamp, level, message),
        }
    }
}

/// Installs the process-wide logger. Only the first call has any effect.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

pub fn is_verbose() -> bool {
    LOGGER.get().is_some_and(|logger| logger.verbose)
}

// Messages logged before init_logger are dropped, so library code and tests
// can log unconditionally.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

pub fn debug(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.debug(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}

/// Like `log!`, but only formats the message when verbose output is on.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose() {
            $crate::logger::debug(&format!($($arg)*))
        }
    };
}
