use log::kv;
use serde::{Serialize, Serializer};
use std::error::Error;
use std::fmt;

/// A single structured field forwarded to the sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new(key: impl Into<String>, value: FieldValue) -> Field {
        Field { key: key.into(), value }
    }
}

/// Closed set of value kinds a sink can receive.
///
/// The front-end hands over values with no static type; the kind is decided
/// at conversion time by inspecting the value at runtime. Anything outside
/// this set is captured through its `Display` rendering as
/// [`FieldValue::Str`], so sinks never see an unrepresentable value.
///
/// `Null` is deliberately a first-class kind: a field that was explicitly
/// set to "nothing" (for example an error slot cleared with `None`) is still
/// forwarded as a field, distinguishable from a field that was never set.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(String),
    Error(CapturedError),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(v) => serializer.serialize_bool(*v),
            FieldValue::I64(v) => serializer.serialize_i64(*v),
            FieldValue::U64(v) => serializer.serialize_u64(*v),
            FieldValue::F64(v) => serializer.serialize_f64(*v),
            FieldValue::Str(v) => serializer.serialize_str(v),
            FieldValue::Error(err) => {
                let rendered: Vec<&str> = err.chain().map(CapturedError::message).collect();
                serializer.serialize_str(&rendered.join(": "))
            }
        }
    }
}

/// Owned snapshot of a `dyn Error`, including its `source()` chain.
///
/// The hook only ever borrows the application's error value, so the chain is
/// copied message by message at capture time. The result still implements
/// [`std::error::Error`], which lets a sink render it as an error (walking
/// causes, attaching backtrace-style context) rather than receiving a
/// flattened string.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedError {
    message: String,
    source: Option<Box<CapturedError>>,
}

impl CapturedError {
    /// Snapshot `err` and every error reachable through `source()`.
    pub fn capture(err: &(dyn Error + 'static)) -> CapturedError {
        CapturedError {
            message: err.to_string(),
            source: err.source().map(|cause| Box::new(CapturedError::capture(cause))),
        }
    }

    /// Message of this link in the chain, without its causes.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Iterate the chain from this error down to the root cause.
    pub fn chain(&self) -> impl Iterator<Item = &CapturedError> {
        std::iter::successors(Some(self), |err| err.source.as_deref())
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for CapturedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|err| err as &(dyn Error + 'static))
    }
}

/// Collect every key/value pair of a record's source into owned [`Field`]s,
/// preserving key names and visitation order.
///
/// A visit failure aborts the walk; the fields gathered up to that point are
/// kept, so a misbehaving value degrades the entry instead of losing it.
pub fn collect_fields(source: &dyn kv::Source) -> Vec<Field> {
    let mut collector = FieldCollector { fields: Vec::new() };
    let _ = source.visit(&mut collector);
    collector.fields
}

struct FieldCollector {
    fields: Vec<Field>,
}

impl<'kv> kv::VisitSource<'kv> for FieldCollector {
    fn visit_pair(&mut self, key: kv::Key<'kv>, value: kv::Value<'kv>) -> Result<(), kv::Error> {
        let mut slot = None;
        value.visit(ValueCollector { slot: &mut slot })?;
        let value = slot.unwrap_or_else(|| FieldValue::Str(value.to_string()));
        self.fields.push(Field::new(key.as_str(), value));
        Ok(())
    }
}

struct ValueCollector<'a> {
    slot: &'a mut Option<FieldValue>,
}

impl<'a, 'v> kv::VisitValue<'v> for ValueCollector<'a> {
    fn visit_any(&mut self, value: kv::Value) -> Result<(), kv::Error> {
        *self.slot = Some(FieldValue::Str(value.to_string()));
        Ok(())
    }

    fn visit_null(&mut self) -> Result<(), kv::Error> {
        *self.slot = Some(FieldValue::Null);
        Ok(())
    }

    fn visit_u64(&mut self, value: u64) -> Result<(), kv::Error> {
        *self.slot = Some(FieldValue::U64(value));
        Ok(())
    }

    fn visit_i64(&mut self, value: i64) -> Result<(), kv::Error> {
        *self.slot = Some(FieldValue::I64(value));
        Ok(())
    }

    fn visit_f64(&mut self, value: f64) -> Result<(), kv::Error> {
        *self.slot = Some(FieldValue::F64(value));
        Ok(())
    }

    fn visit_bool(&mut self, value: bool) -> Result<(), kv::Error> {
        *self.slot = Some(FieldValue::Bool(value));
        Ok(())
    }

    fn visit_str(&mut self, value: &str) -> Result<(), kv::Error> {
        *self.slot = Some(FieldValue::Str(value.to_string()));
        Ok(())
    }

    fn visit_error(&mut self, err: &(dyn Error + 'static)) -> Result<(), kv::Error> {
        *self.slot = Some(FieldValue::Error(CapturedError::capture(err)));
        Ok(())
    }

    // Borrowed errors (the common capture path) must not fall through to
    // the stringifying `visit_any` default.
    fn visit_borrowed_error(&mut self, err: &'v (dyn Error + 'static)) -> Result<(), kv::Error> {
        self.visit_error(err)
    }
}
