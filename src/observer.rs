use crate::record::LogRecord;
use crate::sink::{LogSink, SinkError};
use std::sync::{Arc, Mutex, MutexGuard};

/// Create a recording sink together with a handle to the records it saw.
///
/// The sink side goes to the bridge; the [`ObservedRecords`] side stays with
/// the test (or diagnostic code) and can be inspected at any point. Records
/// are cloned out so assertions never hold the internal lock.
pub fn observer() -> (ObserverSink, ObservedRecords) {
    let records = Arc::new(Mutex::new(Vec::new()));
    (
        ObserverSink { records: Arc::clone(&records) },
        ObservedRecords { records },
    )
}

/// Sink that stores every record it receives.
#[derive(Clone)]
pub struct ObserverSink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl LogSink for ObserverSink {
    fn log(&self, record: &LogRecord) -> Result<(), SinkError> {
        lock(&self.records).push(record.clone());
        Ok(())
    }
}

/// Read side of [`observer`].
#[derive(Clone)]
pub struct ObservedRecords {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl ObservedRecords {
    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.records).is_empty()
    }

    /// Snapshot of everything recorded so far, in arrival order.
    pub fn all(&self) -> Vec<LogRecord> {
        lock(&self.records).clone()
    }
}

// A panicking sink test may poison the mutex; the records themselves are
// still intact, so recover the guard instead of propagating the poison.
fn lock(records: &Mutex<Vec<LogRecord>>) -> MutexGuard<'_, Vec<LogRecord>> {
    records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;
    use chrono::Utc;

    fn entry(message: &str) -> LogRecord {
        LogRecord {
            timestamp: Utc::now(),
            severity: Severity::Info,
            target: "observer_tests".to_string(),
            module_path: None,
            caller: None,
            message: message.to_string(),
            fields: Vec::new(),
        }
    }

    #[test]
    fn records_in_arrival_order() {
        let (sink, recorded) = observer();
        assert!(recorded.is_empty());

        sink.log(&entry("first")).unwrap();
        sink.log(&entry("second")).unwrap();

        assert_eq!(recorded.len(), 2);
        let all = recorded.all();
        assert_eq!(all[0].message, "first");
        assert_eq!(all[1].message, "second");
    }
}
