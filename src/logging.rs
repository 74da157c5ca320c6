//! Optional tracing subscriber for hosts that load the library without their own.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Map a level name to a tracing level. Unknown names fall back to `INFO`.
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Map the numeric level used over FFI (0 = error .. 4 = trace).
pub fn level_from_code(code: u8) -> Level {
    match code {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a global fmt subscriber.
///
/// Returns false if a global subscriber was already set (by the host or an earlier call).
pub fn init_logging(level: &str) -> bool {
    init_with_level(parse_level(level))
}

pub fn init_with_level(level: Level) -> bool {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    match tracing::subscriber::set_global_default(subscriber) {
        Ok(()) => {
            tracing::info!("Logging initialized (level: {})", level);
            true
        }
        Err(_) => false,
    }
}
