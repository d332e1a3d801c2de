#![allow(dead_code)]

use log::{Level, Log, Metadata, Record};
use std::sync::Mutex;

/// Keeps every record it is handed.
#[derive(Default)]
pub struct CapturingLogger {
    records: Mutex<Vec<(Level, String, String)>>,
}

impl CapturingLogger {
    pub fn warnings(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _, _)| *level == Level::Warn)
            .map(|(_, _, message)| message.clone())
            .collect()
    }

    pub fn targets(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|(_, target, _)| target.clone())
            .collect()
    }
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((
            record.level(),
            record.target().to_string(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}
