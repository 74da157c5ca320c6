//! Statistics snapshots.

use super::status;
use crate::percolation::StatSnapshot;
use crate::state::Engine;

/// Writes the current statistics into `out`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out` must be a valid pointer to a `StatSnapshot`, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 if no lattice is allocated.
#[no_mangle]
pub unsafe extern "C" fn pl_snapshot(ptr: *const Engine, out: *mut StatSnapshot) -> i32 {
    if ptr.is_null() || out.is_null() {
        return 1;
    }
    status((*ptr).snapshot().map(|snap| *out = snap))
}

/// Writes the statistics propagation will reach once finished. The engine state is
/// left exactly as it was.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out` must be a valid pointer to a `StatSnapshot`, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 if no lattice is allocated.
#[no_mangle]
pub unsafe extern "C" fn pl_projected_snapshot(ptr: *mut Engine, out: *mut StatSnapshot) -> i32 {
    if ptr.is_null() || out.is_null() {
        return 1;
    }
    status((*ptr).projected_final_snapshot().map(|snap| *out = snap))
}
