use log::{
    max_level, set_logger, set_max_level, LevelFilter, Log, Metadata, Record,
};
use std::thread;

struct Logger;
static GLOBAL_LOG: Logger = Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = record.level();
        let thread = thread::current();
        match thread.name() {
            Some(name) if name != "main" => {
                println!("% [{} {}] {}", level, name, record.args())
            }
            _ => println!("% [{}] {}", level, record.args()),
        }
    }

    fn flush(&self) {}
}

pub(crate) fn start_logging(level: LevelFilter) {
    let _ = set_logger(&GLOBAL_LOG);
    set_max_level(level);
}
