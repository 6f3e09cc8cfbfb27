use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Initializes the global logger, once. Defaults to warnings only, with `hash_people` itself at
/// info. `RUST_LOG` overrides either, e.g. `RUST_LOG=hash_people::hash=trace` to follow every
/// insertion and removal.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("hash_people", LevelFilter::Info)
            .filter_module("rustyline", LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed, such as by a test harness.
        let _ = builder.try_init();
    });
}
