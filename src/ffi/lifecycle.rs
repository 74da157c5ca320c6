//! Engine creation, destruction, allocation and layout rolling.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{count_result, status};
use crate::config::{Config, Dimensions};
use crate::state::Engine;

/// Creates an engine with an allocated, all-closed lattice.
///
/// # Returns
/// A pointer to a new Engine, or null if the dimensions or probability are invalid.
///
/// # Safety
/// The returned pointer must eventually be freed with `pl_destroy()`.
#[no_mangle]
pub extern "C" fn pl_create(width: i32, height: i32, depth: i32, probability: f64) -> *mut Engine {
    let config = match Dimensions::new(width, height, depth)
        .and_then(|dims| Config::new(dims, probability))
    {
        Ok(config) => config,
        Err(_) => return std::ptr::null_mut(),
    };

    match Engine::with_lattice(config) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(_) => std::ptr::null_mut(),
    }
}

/// Destroys an engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `pl_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn pl_destroy(ptr: *mut Engine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Allocates the lattice at the configured dimensions.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 if already allocated.
#[no_mangle]
pub unsafe extern "C" fn pl_initialize(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return 1;
    }
    status((*ptr).initialize())
}

/// Releases the lattice and history.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 if nothing is allocated.
#[no_mangle]
pub unsafe extern "C" fn pl_deallocate(ptr: *mut Engine) -> i32 {
    if ptr.is_null() {
        return 1;
    }
    status((*ptr).deallocate())
}

/// Changes the configured dimensions. The engine must be deallocated first.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 on invalid dimensions, 3 while allocated.
#[no_mangle]
pub unsafe extern "C" fn pl_resize(ptr: *mut Engine, width: i32, height: i32, depth: i32) -> i32 {
    if ptr.is_null() {
        return 1;
    }
    let engine = &mut *ptr;
    status(Dimensions::new(width, height, depth).and_then(|dims| engine.resize(dims)))
}

/// Sets the open-probability used by the next randomize.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 2 if `p` is outside [0, 1].
#[no_mangle]
pub unsafe extern "C" fn pl_set_probability(ptr: *mut Engine, p: f64) -> i32 {
    if ptr.is_null() {
        return 1;
    }
    status((*ptr).set_probability(p))
}

/// Rolls every cell open/closed from a generator seeded with `seed`. Clears water.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// 0 on success, 1 on null pointer, 3 if no lattice is allocated.
#[no_mangle]
pub unsafe extern "C" fn pl_randomize(ptr: *mut Engine, seed: u64) -> i32 {
    if ptr.is_null() {
        return 1;
    }
    let mut rng = StdRng::seed_from_u64(seed);
    status((*ptr).randomize(&mut rng))
}

/// Deallocates, resizes, allocates, randomizes with `seed` and seeds the top row.
///
/// # Safety
/// - `ptr` must be a valid pointer to an Engine, or null
///
/// # Returns
/// Number of seeded cells, or a negated status code on error.
#[no_mangle]
pub unsafe extern "C" fn pl_rebuild(
    ptr: *mut Engine,
    width: i32,
    height: i32,
    depth: i32,
    seed: u64,
) -> i64 {
    if ptr.is_null() {
        return -1;
    }
    let engine = &mut *ptr;
    let mut rng = StdRng::seed_from_u64(seed);
    count_result(
        Dimensions::new(width, height, depth).and_then(|dims| engine.rebuild(dims, &mut rng)),
    )
}
