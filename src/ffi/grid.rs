//! Cell access and bulk region transfer.

use super::status;
use crate::percolation::{CellType, Coord};
use crate::state::Engine;

/// Code returned by `pl_get_cell` for null handles, missing lattices and out-of-bounds reads.
pub const PL_CELL_INVALID: u8 = 255;

/// Gets the code of a cell (0 = closed, 1 = open, 2 = water).
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// The cell code, or `PL_CELL_INVALID` (255).
#[no_mangle]
pub unsafe extern "C" fn pl_get_cell(ptr: *const Engine, x: i32, y: i32, z: i32) -> u8 {
    if ptr.is_null() {
        return PL_CELL_INVALID;
    }
    (*ptr)
        .cell(Coord::new(x, y, z))
        .map(CellType::code)
        .unwrap_or(PL_CELL_INVALID)
}

/// Sets a cell open (non-zero) or closed (0). Only legal while no water exists.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 while water exists, 4 out of bounds.
#[no_mangle]
pub unsafe extern "C" fn pl_set_cell(ptr: *mut Engine, x: i32, y: i32, z: i32, open: u8) -> i32 {
    if ptr.is_null() {
        return 1;
    }
    let cell = if open != 0 {
        CellType::Open
    } else {
        CellType::Closed
    };
    status((*ptr).set_cell(Coord::new(x, y, z), cell))
}

/// Extracts cell codes from `[min, max)` into `out_buf`.
///
/// # Layout
/// z,y,x order (z slowest, x fastest), matching `pl_import_region`.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `out_buf` must point to at least `buf_len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn pl_extract_region(
    ptr: *const Engine,
    out_buf: *mut u8,
    buf_len: usize,
    min_x: i32,
    min_y: i32,
    min_z: i32,
    max_x: i32,
    max_y: i32,
    max_z: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let buf = std::slice::from_raw_parts_mut(out_buf, buf_len);
    (*ptr)
        .extract_region(
            buf,
            Coord::new(min_x, min_y, min_z),
            Coord::new(max_x, max_y, max_z),
        )
        .map(|n| n as u64)
        .unwrap_or(0)
}

/// Imports an open/closed layout into `[min, max)`. Zero means closed, anything else open.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
/// - `in_buf` must point to at least `buf_len` readable bytes, or be null
///
/// # Returns
/// Number of bytes read, or 0 on error (including while water exists).
#[no_mangle]
pub unsafe extern "C" fn pl_import_region(
    ptr: *mut Engine,
    in_buf: *const u8,
    buf_len: usize,
    min_x: i32,
    min_y: i32,
    min_z: i32,
    max_x: i32,
    max_y: i32,
    max_z: i32,
) -> u64 {
    if ptr.is_null() || in_buf.is_null() {
        return 0;
    }

    let buf = std::slice::from_raw_parts(in_buf, buf_len);
    (*ptr)
        .import_region(
            buf,
            Coord::new(min_x, min_y, min_z),
            Coord::new(max_x, max_y, max_z),
        )
        .map(|n| n as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ffi::lifecycle::{pl_create, pl_destroy};
    use crate::ffi::stepping::pl_seed_top_row;
    use std::ptr;

    #[test]
    fn test_get_set_cell() {
        unsafe {
            let engine = pl_create(4, 4, 4, 0.5);
            assert_eq!(pl_get_cell(engine, 1, 2, 3), 0);
            assert_eq!(pl_set_cell(engine, 1, 2, 3, 1), 0);
            assert_eq!(pl_get_cell(engine, 1, 2, 3), 1);
            assert_eq!(pl_set_cell(engine, 1, 2, 3, 0), 0);
            assert_eq!(pl_get_cell(engine, 1, 2, 3), 0);
            pl_destroy(engine);
        }
    }

    #[test]
    fn test_boundary_conditions() {
        unsafe {
            let engine = pl_create(4, 4, 4, 0.5);
            assert_eq!(pl_get_cell(engine, 10, 10, 10), PL_CELL_INVALID);
            assert_eq!(pl_get_cell(engine, -1, -1, -1), PL_CELL_INVALID);
            assert_eq!(pl_set_cell(engine, 4, 0, 0, 1), 4);
            assert_eq!(pl_set_cell(engine, 0, -1, 0, 1), 4);
            assert_eq!((*engine).snapshot().unwrap().open, 0);

            assert_eq!(pl_get_cell(ptr::null(), 0, 0, 0), PL_CELL_INVALID);
            assert_eq!(pl_set_cell(ptr::null_mut(), 0, 0, 0, 1), 1);
            pl_destroy(engine);
        }
    }

    #[test]
    fn test_region_round_trip() {
        unsafe {
            let a = pl_create(3, 3, 3, 0.5);
            pl_set_cell(a, 0, 2, 0, 1);
            pl_set_cell(a, 0, 1, 0, 1);
            pl_seed_top_row(a);

            let mut buffer = vec![0u8; 27];
            let written = pl_extract_region(a, buffer.as_mut_ptr(), buffer.len(), 0, 0, 0, 3, 3, 3);
            assert_eq!(written, 27);
            assert_eq!(buffer[3], 1); // (0,1,0)
            assert_eq!(buffer[6], 2); // (0,2,0)

            // Water is imported as open.
            let b = pl_create(3, 3, 3, 0.5);
            let read = pl_import_region(b, buffer.as_ptr(), buffer.len(), 0, 0, 0, 3, 3, 3);
            assert_eq!(read, 27);
            assert_eq!(pl_get_cell(b, 0, 2, 0), 1);
            assert_eq!(pl_get_cell(b, 0, 1, 0), 1);
            assert_eq!(pl_get_cell(b, 1, 1, 1), 0);

            // Refused once b has water.
            pl_seed_top_row(b);
            assert_eq!(
                pl_import_region(b, buffer.as_ptr(), buffer.len(), 0, 0, 0, 3, 3, 3),
                0
            );

            assert_eq!(
                pl_extract_region(a, ptr::null_mut(), 0, 0, 0, 0, 3, 3, 3),
                0
            );
            pl_destroy(a);
            pl_destroy(b);
        }
    }
}
