use log::{LevelFilter, Metadata, Record};

struct StderrLogger {
    max_level: LevelFilter,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs a stderr logger. Verbosity 0 shows warnings, 1 adds debug
/// output, 2 and up everything. Safe to call more than once; later calls
/// are no-ops.
pub fn init_logger(verbosity: u8) {
    let max_level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let logger = StderrLogger { max_level };
    if log::set_boxed_logger(Box::new(logger)).is_ok() {
        log::set_max_level(max_level);
    }
}
