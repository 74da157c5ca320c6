//! Logging setup for hosts without their own tracing subscriber.

use crate::logging;

/// Installs a global fmt subscriber. `level`: 0 = error, 1 = warn, 2 = info, 3 = debug, 4+ = trace.
///
/// # Returns
/// 1 if installed, 0 if a subscriber was already set.
#[no_mangle]
pub extern "C" fn pl_init_logging(level: u8) -> u8 {
    u8::from(logging::init_with_level(logging::level_from_code(level)))
}
