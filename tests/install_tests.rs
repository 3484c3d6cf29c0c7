//! Global installation test. Kept in its own integration binary because the
//! `log` facade allows one logger per process.

use std::sync::Arc;

use structured_log_bridge::bridge::BridgeError;
use structured_log_bridge::field::FieldValue;
use structured_log_bridge::init::install;
use structured_log_bridge::observer::observer;
use structured_log_bridge::severity::Severity;

#[test]
fn install_routes_macro_calls_and_rejects_a_second_logger() {
    let (sink, recorded) = observer();
    install(Arc::new(sink)).expect("first install");

    log::info!(Name = "James Bond"; "I am batman");

    assert_eq!(recorded.len(), 1);
    let entry = &recorded.all()[0];
    assert_eq!(entry.severity, Severity::Info);
    assert_eq!(entry.message, "I am batman");
    assert_eq!(entry.fields.len(), 1);
    assert_eq!(entry.fields[0].key, "Name");
    assert_eq!(entry.fields[0].value, FieldValue::Str("James Bond".to_string()));

    // Macro call sites report their own file.
    let caller = entry.caller.as_ref().expect("macro call site lost");
    assert_eq!(caller.file, file!());

    // Even trace-level calls reach the sink; nothing is filtered out.
    log::trace!("whisper");
    assert_eq!(recorded.len(), 2);
    assert_eq!(recorded.all()[1].severity, Severity::Debug);

    let (second, _) = observer();
    let err = install(Arc::new(second)).expect_err("second install must fail");
    assert!(matches!(err, BridgeError::AlreadyInstalled(_)));
}
