//! Seeding, stepping, and clearing water.

use super::{count_result, status};
use crate::state::Engine;

/// Floods the open cells of the top face as step 0.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// Number of seeded cells, or a negated status code on error.
#[no_mangle]
pub unsafe extern "C" fn pl_seed_top_row(ptr: *mut Engine) -> i64 {
    if ptr.is_null() {
        return -1;
    }
    count_result((*ptr).seed_top_row())
}

/// Expands the water front by one layer.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// Number of cells added (0 once finished), or a negated status code on error
/// (-3 before seeding).
#[no_mangle]
pub unsafe extern "C" fn pl_step_forward(ptr: *mut Engine) -> i64 {
    if ptr.is_null() {
        return -1;
    }
    count_result((*ptr).step_forward())
}

/// Reverts the most recent step.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// Number of cells reverted (0 with no history), or a negated status code on error.
#[no_mangle]
pub unsafe extern "C" fn pl_step_back(ptr: *mut Engine) -> i64 {
    if ptr.is_null() {
        return -1;
    }
    count_result((*ptr).step_back())
}

/// Steps forward until propagation finishes.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// Total cells added, or a negated status code on error.
#[no_mangle]
pub unsafe extern "C" fn pl_finish(ptr: *mut Engine) -> i64 {
    if ptr.is_null() {
        return -1;
    }
    count_result((*ptr).finish())
}

/// Reverts all water to open and empties the history.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 if no lattice is allocated.
#[no_mangle]
pub unsafe extern "C" fn pl_clear_water(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return 1;
    }
    status((*ptr).clear_water().map(|_| ()))
}

/// Clears water and seeds the top row again.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// Number of seeded cells, or a negated status code on error.
#[no_mangle]
pub unsafe extern "C" fn pl_restart(ptr: *mut Engine) -> i64 {
    if ptr.is_null() {
        return -1;
    }
    count_result((*ptr).restart())
}

/// Gets the current step index.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// The step index, or -1 before seeding or for a null pointer.
#[no_mangle]
pub unsafe extern "C" fn pl_current_step(ptr: *const Engine) -> i64 {
    if ptr.is_null() {
        return -1;
    }
    (*ptr).current_step()
}

/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 1 if propagation has finished, 0 otherwise or for a null pointer.
#[no_mangle]
pub unsafe extern "C" fn pl_is_finished(ptr: *const Engine) -> u8 {
    if ptr.is_null() {
        return 0;
    }
    u8::from((*ptr).is_finished())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle::{pl_create, pl_destroy, pl_randomize};
    use std::ptr;

    #[test]
    fn test_null_handling() {
        unsafe {
            assert_eq!(pl_seed_top_row(ptr::null_mut()), -1);
            assert_eq!(pl_step_forward(ptr::null_mut()), -1);
            assert_eq!(pl_step_back(ptr::null_mut()), -1);
            assert_eq!(pl_finish(ptr::null_mut()), -1);
            assert_eq!(pl_clear_water(ptr::null_mut()), 1);
            assert_eq!(pl_restart(ptr::null_mut()), -1);
            assert_eq!(pl_current_step(ptr::null()), -1);
            assert_eq!(pl_is_finished(ptr::null()), 0);
        }
    }

    #[test]
    fn test_step_before_seed_reports_invalid_state() {
        unsafe {
            let engine = pl_create(2, 2, 2, 0.5);
            assert_eq!(pl_step_forward(engine), -3);
            assert_eq!(pl_step_back(engine), 0);
            pl_destroy(engine);
        }
    }

    #[test]
    fn test_full_cycle() {
        unsafe {
            let engine = pl_create(1, 4, 1, 1.0);
            assert_eq!(pl_randomize(engine, 1), 0);
            assert_eq!(pl_seed_top_row(engine), 1);
            assert_eq!(pl_current_step(engine), 0);

            assert_eq!(pl_step_forward(engine), 1);
            assert_eq!(pl_finish(engine), 2);
            assert_eq!(pl_is_finished(engine), 1);
            assert_eq!(pl_current_step(engine), 3);

            assert_eq!(pl_step_back(engine), 1);
            assert_eq!(pl_is_finished(engine), 0);

            assert_eq!(pl_restart(engine), 1);
            assert_eq!(pl_current_step(engine), 0);

            assert_eq!(pl_clear_water(engine), 0);
            assert_eq!(pl_current_step(engine), -1);
            pl_destroy(engine);
        }
    }
}
