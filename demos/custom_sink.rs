use std::sync::Arc;

use structured_log_bridge::{
    init::install,
    record::LogRecord,
    sink::{LogSink, SinkError},
};

/// Example of integrating a custom structured backend by implementing the
/// `LogSink` trait directly. Imagine this hands records to some proprietary
/// logging engine for which this crate does not provide a built-in sink.
struct MyStructuredLogger;

impl LogSink for MyStructuredLogger {
    fn log(&self, record: &LogRecord) -> Result<(), SinkError> {
        // Here you would call your own logging engine. For the sake of the
        // example we just print the record.
        println!("[my-engine] {} {}: {:?}", record.severity, record.message, record.fields);
        Ok(())
    }
}

fn main() {
    let sink: Arc<dyn LogSink> = Arc::new(MyStructuredLogger);

    install(sink).expect("install bridge");

    log::info!("custom sink example started");
    log::error!(db = "my-engine"; "simulated error sent via custom sink");
}
