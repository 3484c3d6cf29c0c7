use crate::record::LogRecord;
use crate::sink::LogSink;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Errors surfaced while building or installing a [`LogBridge`].
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The builder was finished without a sink; the bridge cannot operate
    /// without a destination and must not be registered half-built.
    #[error("no sink configured for the bridge")]
    MissingSink,

    /// A global logger was already installed in this process.
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// `log::Log` implementation that forwards every record to a [`LogSink`].
///
/// The bridge is stateless apart from the sink handle captured at
/// construction: each firing translates the record and makes exactly one
/// sink call, synchronously, on the calling thread. Sink errors and panics
/// are contained here; a logging call must never crash the application.
pub struct LogBridge {
    sink: Arc<dyn LogSink>,
    /// Records observed by the bridge.
    pub total_records: Arc<AtomicU64>,
    /// Records accepted by the sink.
    pub forwarded_records: Arc<AtomicU64>,
    /// Records the sink rejected or panicked on.
    pub failed_records: Arc<AtomicU64>,
}

impl LogBridge {
    /// Build a bridge around an already-configured sink.
    pub fn new(sink: Arc<dyn LogSink>) -> LogBridge {
        LogBridge {
            sink,
            total_records: Arc::new(AtomicU64::new(0)),
            forwarded_records: Arc::new(AtomicU64::new(0)),
            failed_records: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start building a bridge. Use this when the sink comes from
    /// configuration and may turn out to be absent; [`BridgeBuilder::build`]
    /// reports that case as [`BridgeError::MissingSink`].
    pub fn builder() -> BridgeBuilder {
        BridgeBuilder { sink: None }
    }

    // Conversion runs inside the unwind guard too: a field value whose
    // rendering panics must degrade the entry, not crash the caller.
    fn forward(&self, record: &log::Record) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let entry = LogRecord::from(record);
            self.sink.log(&entry)
        }));
        match outcome {
            Ok(Ok(())) => {
                self.forwarded_records.fetch_add(1, Ordering::Relaxed);
            }
            Ok(Err(e)) => {
                self.failed_records.fetch_add(1, Ordering::Relaxed);
                eprintln!("log sink rejected a record: {}", e);
            }
            Err(_) => {
                self.failed_records.fetch_add(1, Ordering::Relaxed);
                eprintln!("log record could not be converted or written");
            }
        }
    }
}

impl fmt::Debug for LogBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogBridge")
            .field("total_records", &self.total_records.load(Ordering::Relaxed))
            .field("forwarded_records", &self.forwarded_records.load(Ordering::Relaxed))
            .field("failed_records", &self.failed_records.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

impl log::Log for LogBridge {
    /// The bridge declares interest in every level; filtering severities
    /// here would silently drop entries the translator is required to map.
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        self.total_records.fetch_add(1, Ordering::Relaxed);
        self.forward(record);
    }

    fn flush(&self) {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.sink.flush()));
        match outcome {
            Ok(Ok(())) => {}
            Ok(Err(e)) => eprintln!("log sink flush failed: {}", e),
            Err(_) => eprintln!("log sink panicked during flush"),
        }
    }
}

/// Builder for [`LogBridge`].
pub struct BridgeBuilder {
    sink: Option<Arc<dyn LogSink>>,
}

impl BridgeBuilder {
    pub fn sink(mut self, sink: Arc<dyn LogSink>) -> BridgeBuilder {
        self.sink = Some(sink);
        self
    }

    /// **Returns**
    /// - `Ok(LogBridge)` when a sink was supplied.
    /// - `Err(BridgeError::MissingSink)` otherwise.
    pub fn build(self) -> Result<LogBridge, BridgeError> {
        match self.sink {
            Some(sink) => Ok(LogBridge::new(sink)),
            None => Err(BridgeError::MissingSink),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noop_sink::NoopSink;

    #[test]
    fn builder_without_sink_fails() {
        let err = LogBridge::builder().build().unwrap_err();
        assert!(matches!(err, BridgeError::MissingSink));
    }

    #[test]
    fn builder_with_sink_succeeds() {
        let bridge = LogBridge::builder()
            .sink(Arc::new(NoopSink))
            .build()
            .expect("sink was supplied");
        assert_eq!(bridge.total_records.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn debug_render_shows_counters_not_the_sink() {
        let bridge = LogBridge::new(Arc::new(NoopSink));
        let rendered = format!("{:?}", bridge);
        assert!(rendered.contains("total_records"));
        assert!(rendered.contains("failed_records"));
    }

    #[test]
    fn enabled_for_every_level() {
        let bridge = LogBridge::new(Arc::new(NoopSink));
        for level in [
            log::Level::Trace,
            log::Level::Debug,
            log::Level::Info,
            log::Level::Warn,
            log::Level::Error,
        ] {
            let metadata = log::Metadata::builder().level(level).target("t").build();
            assert!(log::Log::enabled(&bridge, &metadata));
        }
    }
}
