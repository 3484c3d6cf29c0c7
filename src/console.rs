use crate::record::LogRecord;
use crate::sink::{LogSink, SinkError};
use std::io::{self, Write};
use std::sync::Mutex;

/// Sink that writes each record as one JSON line.
///
/// A development convenience: point it at stdout/stderr (or any writer) to
/// see the exact structured entries a production sink would receive. The
/// writer sits behind a mutex so concurrent log calls cannot interleave
/// lines.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn stdout() -> ConsoleSink {
        ConsoleSink::with_writer(io::stdout())
    }

    pub fn stderr() -> ConsoleSink {
        ConsoleSink::with_writer(io::stderr())
    }

    pub fn with_writer(writer: impl Write + Send + 'static) -> ConsoleSink {
        ConsoleSink { writer: Mutex::new(Box::new(writer)) }
    }
}

impl LogSink for ConsoleSink {
    fn log(&self, record: &LogRecord) -> Result<(), SinkError> {
        let line = serde_json::to_string(record)?;
        let mut writer = self.writer.lock().map_err(|_| "console writer poisoned")?;
        writeln!(writer, "{}", line)?;
        Ok(())
    }

    fn flush(&self) -> Result<(), SinkError> {
        let mut writer = self.writer.lock().map_err(|_| "console writer poisoned")?;
        writer.flush()?;
        Ok(())
    }
}
