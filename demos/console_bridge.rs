use std::sync::Arc;

use structured_log_bridge::console::ConsoleSink;
use structured_log_bridge::init::install;

fn main() {
    let sink = Arc::new(ConsoleSink::stdout());

    install(sink).expect("install bridge");

    log::info!(user = "bruce"; "session started");
    log::warn!(attempts = 3u64; "retrying upload");
    log::error!("upload failed");
    log::logger().flush();
}
