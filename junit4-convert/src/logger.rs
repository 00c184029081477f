// junit4-convert/src/logger.rs
//! Logger setup for the junit4-convert binary.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger.
///
/// `RUST_LOG` is honored when no level is forced; without it only warnings
/// and errors are shown. Calling this twice is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }

    builder
        .format(|buf, record| {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        })
        .target(env_logger::Target::Stderr);

    let _ = builder.try_init();
}
