use log::{Level, LevelFilter, Log, Metadata, Record};

/// Forwards `log` records to the browser console.
pub struct ConsoleLogger {
    level: LevelFilter,
}

impl ConsoleLogger {
    pub fn install(level: LevelFilter) {
        static LOGGER: std::sync::OnceLock<ConsoleLogger> = std::sync::OnceLock::new();
        let logger = LOGGER.get_or_init(|| ConsoleLogger { level });
        if log::set_logger(logger).is_ok() {
            log::set_max_level(level);
        }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        match record.level() {
            Level::Error | Level::Warn => {
                zoon::eprintln!("[{}] {}: {}", record.level(), record.target(), record.args())
            }
            _ => zoon::println!("[{}] {}: {}", record.level(), record.target(), record.args()),
        }
    }

    fn flush(&self) {}
}
