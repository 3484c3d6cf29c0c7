use crate::record::LogRecord;
use std::error::Error;

/// Error currency for sink implementations.
pub type SinkError = Box<dyn Error + Send + Sync>;

/// Destination for [`LogRecord`]s produced by the bridge.
///
/// Implementations are responsible for encoding and writing records to a
/// concrete backend (a structured logger, a JSON stream, a test recorder).
/// The bridge calls `log` synchronously on whatever thread the application
/// logged from, once per record, with no batching or retries.
pub trait LogSink: Send + Sync {
    /// Write a single record to the underlying backend.
    ///
    /// **Parameters**
    /// - `record`: fully-populated [`LogRecord`] produced by the bridge.
    ///
    /// **Returns**
    /// - `Ok(())` if the record was accepted by the backend.
    /// - `Err(..)` if the backend failed. The bridge contains the failure:
    ///   it is counted and reported on stderr, never surfaced to the
    ///   application's log call site.
    ///
    /// The sink is shared across threads behind an `Arc` and must rely on
    /// its own interior synchronization; the bridge takes no locks.
    fn log(&self, record: &LogRecord) -> Result<(), SinkError>;

    /// Flush any buffered records, if the backend buffers.
    ///
    /// Default implementation is a no-op.
    fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }
}
