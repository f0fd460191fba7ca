//! C ABI over the valence kernel.
//!
//! The coordinate and term records are the `#[repr(C)]` types of the core crate, so C
//! callers own both tables and pass them in place. See `include/valence.h`.

use std::os::raw::c_long;
use valence::core::models::coordinate;
use valence::{InternalCoordinate, ValenceTerm};

/// Builds a slice from a C pointer and length, treating `len == 0` as empty even for a
/// null pointer.
///
/// # Safety
/// For `len > 0`, `ptr` must point to `len` initialized, properly aligned records that
/// are not aliased mutably elsewhere for the returned lifetime.
unsafe fn slice_from<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if len == 0 {
        &[]
    } else {
        unsafe { std::slice::from_raw_parts(ptr, len) }
    }
}

/// # Safety
/// Same contract as [`slice_from`], with exclusive access.
unsafe fn slice_from_mut<'a, T>(ptr: *mut T, len: usize) -> &'a mut [T] {
    if len == 0 {
        &mut []
    } else {
        unsafe { std::slice::from_raw_parts_mut(ptr, len) }
    }
}

fn term_count(nv: c_long) -> usize {
    debug_assert!(nv >= 0, "negative term count {nv}");
    usize::try_from(nv).unwrap_or(0)
}

/// Highest coordinate index referenced by the terms, plus one.
fn coordinate_extent(terms: &[ValenceTerm]) -> usize {
    terms
        .iter()
        .flat_map(|term| term.coordinates())
        .max()
        .map_or(0, |ic| ic + 1)
}

/// Forward pass: writes each term's energy and returns the total.
///
/// # Safety
/// `vtab` must point to `nv` valid terms whose `kind` is one of the seven defined tags,
/// and `ictab` must cover every coordinate index they reference.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vlist_forward(
    ictab: *const InternalCoordinate,
    vtab: *mut ValenceTerm,
    nv: c_long,
) -> f64 {
    let terms = unsafe { slice_from_mut(vtab, term_count(nv)) };
    let coords = unsafe { slice_from(ictab, coordinate_extent(terms)) };
    valence::evaluate_energy(coords, terms)
}

/// Backward pass: adds each term's partial derivatives into `ictab[..].grad`.
///
/// # Safety
/// As for [`vlist_forward`]; additionally no other reference to `ictab` may be live.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vlist_back(
    ictab: *mut InternalCoordinate,
    vtab: *const ValenceTerm,
    nv: c_long,
) {
    let terms = unsafe { slice_from(vtab, term_count(nv)) };
    let coords = unsafe { slice_from_mut(ictab, coordinate_extent(terms)) };
    valence::accumulate_gradients(coords, terms)
}

/// Zeroes the gradient accumulators of `nic` coordinates.
///
/// # Safety
/// `ictab` must point to `nic` valid coordinate records (or `nic` must be zero).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn vlist_reset_gradients(ictab: *mut InternalCoordinate, nic: c_long) {
    let coords = unsafe { slice_from_mut(ictab, term_count(nic)) };
    coordinate::reset_gradients(coords)
}
