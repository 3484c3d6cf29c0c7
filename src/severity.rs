use serde::Serialize;
use std::fmt;

/// Back-end severity level, ordered from least to most severe.
///
/// `log::Level` maps onto this enum totally and order-preservingly; the
/// back-end side is slightly coarser at the bottom (`Trace` and `Debug`
/// collapse into [`Severity::Debug`]) and carries one level the facade
/// does not, [`Severity::Critical`], used as the conservative fallback
/// for level names the translator does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }

    /// Translate a textual level name into a [`Severity`].
    ///
    /// **Parameters**
    /// - `name`: level name as reported by a front-end, case-insensitive.
    ///   Both `warn`/`warning` spellings are accepted.
    ///
    /// **Returns**
    /// - The matching severity, or [`Severity::Critical`] when the name is
    ///   not recognized. An unknown level is a contract violation on the
    ///   front-end's side; substituting the highest severity keeps the
    ///   entry visible instead of silently dropping it.
    pub fn from_name(name: &str) -> Severity {
        match name.to_ascii_lowercase().as_str() {
            "trace" | "debug" => Severity::Debug,
            "info" => Severity::Info,
            "warn" | "warning" => Severity::Warn,
            "error" => Severity::Error,
            "critical" | "fatal" | "panic" => Severity::Critical,
            _ => Severity::Critical,
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Severity {
        match level {
            log::Level::Trace | log::Level::Debug => Severity::Debug,
            log::Level::Info => Severity::Info,
            log::Level::Warn => Severity::Warn,
            log::Level::Error => Severity::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_facade_level() {
        let cases = [
            (log::Level::Trace, Severity::Debug),
            (log::Level::Debug, Severity::Debug),
            (log::Level::Info, Severity::Info),
            (log::Level::Warn, Severity::Warn),
            (log::Level::Error, Severity::Error),
        ];
        for (level, expected) in cases {
            assert_eq!(Severity::from(level), expected, "level {}", level);
        }
    }

    #[test]
    fn mapping_preserves_severity_order() {
        // Ascending front-end severity must yield non-decreasing
        // back-end severity.
        let ascending = [
            log::Level::Trace,
            log::Level::Debug,
            log::Level::Info,
            log::Level::Warn,
            log::Level::Error,
        ];
        let mapped: Vec<Severity> = ascending.iter().map(|l| Severity::from(*l)).collect();
        for pair in mapped.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn unknown_names_become_critical() {
        assert_eq!(Severity::from_name("verbose"), Severity::Critical);
        assert_eq!(Severity::from_name(""), Severity::Critical);
        assert_eq!(Severity::from_name("WARNING"), Severity::Warn);
        assert_eq!(Severity::from_name("Info"), Severity::Info);
    }

    #[test]
    fn renders_lowercase() {
        assert_eq!(Severity::Warn.to_string(), "warn");
        assert_eq!(Severity::Critical.as_str(), "critical");
    }
}
