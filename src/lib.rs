pub mod severity;
pub mod field;
pub mod record;
pub mod sink;
pub mod bridge;

#[cfg(feature = "console")]
pub mod console;

pub mod init;
pub mod noop_sink;
pub mod observer;
