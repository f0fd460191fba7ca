use serde::{Deserialize, Serialize};

/// One internal coordinate as seen by the valence kernel.
///
/// `value` is written by the geometry layer before every evaluation. `grad` accumulates
/// `∂E/∂value` from every term that references this coordinate; the backward pass only
/// ever adds to it, so callers zero it (see [`reset_gradients`]) when a fresh gradient
/// is wanted.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InternalCoordinate {
    pub value: f64,
    #[serde(default)]
    pub grad: f64,
}

impl InternalCoordinate {
    pub fn new(value: f64) -> Self {
        Self { value, grad: 0.0 }
    }
}

impl From<f64> for InternalCoordinate {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

pub fn reset_gradients(coords: &mut [InternalCoordinate]) {
    for ic in coords.iter_mut() {
        ic.grad = 0.0;
    }
}

/// Overwrites the coordinate values in place, leaving the accumulators untouched.
///
/// The two slices must have equal length.
pub fn assign_values(coords: &mut [InternalCoordinate], values: &[f64]) {
    debug_assert_eq!(coords.len(), values.len());
    for (ic, &value) in coords.iter_mut().zip(values) {
        ic.value = value;
    }
}

pub fn gradients(coords: &[InternalCoordinate]) -> Vec<f64> {
    coords.iter().map(|ic| ic.grad).collect()
}
