//! C FFI layer for host UIs and renderers.
//!
//! This module exports C ABI functions for use from C, LuaJIT FFI, or any other host.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `percolation` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and error-to-status-code conversion.
//!
//! Status codes: 0 success, 1 null pointer, 2 invalid argument, 3 invalid state,
//! 4 out of bounds, 5 bad configuration. Functions returning a count report errors as
//! the negated code.

pub mod grid;
pub mod lifecycle;
pub mod logging;
pub mod stats;
pub mod stepping;

pub use grid::{pl_extract_region, pl_get_cell, pl_import_region, pl_set_cell, PL_CELL_INVALID};
pub use lifecycle::{
    pl_create, pl_deallocate, pl_destroy, pl_initialize, pl_randomize, pl_rebuild, pl_resize,
    pl_set_probability,
};
pub use logging::pl_init_logging;
pub use stats::{pl_projected_snapshot, pl_snapshot};
pub use stepping::{
    pl_clear_water, pl_current_step, pl_finish, pl_is_finished, pl_restart, pl_seed_top_row,
    pl_step_back, pl_step_forward,
};

use crate::error::Result;

fn status(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => e.code(),
    }
}

fn count_result(result: Result<usize>) -> i64 {
    match result {
        Ok(n) => n as i64,
        Err(e) => -i64::from(e.code()),
    }
}
