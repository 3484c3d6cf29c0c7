use crate::bridge::{BridgeError, LogBridge};
use crate::sink::LogSink;
use std::sync::Arc;

/// Install a bridge around `sink` as the process-wide logger.
///
/// **Parameters**
/// - `sink`: implementation of [`LogSink`] that will receive normalized
///   [`LogRecord`](crate::record::LogRecord)s.
///
/// **Effects**
///
/// Registers the bridge with `log::set_boxed_logger` and raises the facade's
/// max level to `Trace`, so no severity is filtered out before the bridge
/// sees it. Level filtering, if wanted, belongs to the sink.
///
/// **Returns**
/// - `Err(BridgeError::AlreadyInstalled)` if another global logger was
///   registered first.
pub fn install(sink: Arc<dyn LogSink>) -> Result<(), BridgeError> {
    install_bridge(LogBridge::new(sink))
}

/// Install an already-built [`LogBridge`] as the process-wide logger.
///
/// Useful when the caller wants to keep clones of the bridge counters for
/// its own accounting before handing the bridge over.
pub fn install_bridge(bridge: LogBridge) -> Result<(), BridgeError> {
    log::set_boxed_logger(Box::new(bridge))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
