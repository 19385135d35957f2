//! A `log` backend that keeps records in memory.
//!
//! The logger is global to the test binary, so only one test per binary
//! should inspect it.

use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone)]
pub struct CapturedRecord {
    pub level: Level,
    pub target: String,
    pub message: String,
}

struct CaptureLogger {
    records: Mutex<Vec<CapturedRecord>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let Ok(mut records) = self.records.lock() else {
            return;
        };
        records.push(CapturedRecord {
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();

/// Run `f` and return every record logged by this crate while it ran.
pub fn capture<F: FnOnce()>(f: F) -> Vec<CapturedRecord> {
    let logger = LOGGER.get_or_init(|| CaptureLogger {
        records: Mutex::new(Vec::new()),
    });
    let _ = log::set_logger(logger);
    log::set_max_level(LevelFilter::Trace);

    logger.records.lock().unwrap().clear();
    f();
    let records = std::mem::take(&mut *logger.records.lock().unwrap());

    records
        .into_iter()
        .filter(|r| r.target.starts_with("s2rgb_core"))
        .collect()
}
