use crate::field::{collect_fields, Field};
use crate::severity::Severity;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Call-site attribution for a forwarded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caller {
    pub file: String,
    pub line: u32,
}

/// Normalized entry handed to a [`LogSink`](crate::sink::LogSink).
///
/// Built once per front-end log call and never stored by the bridge; sinks
/// that need to keep entries around clone them.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller: Option<Caller>,
    pub message: String,
    pub fields: Vec<Field>,
}

impl From<&log::Record<'_>> for LogRecord {
    /// Convert a facade record into the sink representation.
    ///
    /// The severity is translated through [`Severity::from`], key/value
    /// pairs are captured with their runtime kinds, and a [`Caller`] is
    /// attached only when the record genuinely carries both file and line.
    /// Records built without call-site data (caller reporting disabled, or
    /// a foreign front-end that never collects it) forward no caller at
    /// all rather than an empty default.
    fn from(record: &log::Record<'_>) -> LogRecord {
        let caller = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some(Caller { file: file.to_string(), line }),
            _ => None,
        };

        LogRecord {
            timestamp: Utc::now(),
            severity: Severity::from(record.level()),
            target: record.target().to_string(),
            module_path: record.module_path().map(|path| path.to_string()),
            caller,
            message: record.args().to_string(),
            fields: collect_fields(record.key_values()),
        }
    }
}
