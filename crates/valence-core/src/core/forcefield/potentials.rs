// Energy expressions of the valence terms and their exact first derivatives.
// Every `*_derivative` function is the analytic derivative of its sibling with respect
// to the internal coordinate(s). None of them guard against singular input.

#[inline]
pub fn harmonic(x: f64, force_constant: f64, rest_value: f64) -> f64 {
    let dx = x - rest_value;
    0.5 * force_constant * dx * dx
}

#[inline]
pub fn harmonic_derivative(x: f64, force_constant: f64, rest_value: f64) -> f64 {
    force_constant * (x - rest_value)
}

#[inline]
pub fn polyfour(x: f64, c: &[f64; 4]) -> f64 {
    x * (c[0] + x * (c[1] + x * (c[2] + x * c[3])))
}

#[inline]
pub fn polyfour_derivative(x: f64, c: &[f64; 4]) -> f64 {
    c[0] + x * (2.0 * c[1] + x * (3.0 * c[2] + x * 4.0 * c[3]))
}

/// Singular at `x == 0`.
#[inline]
pub fn fues(x: f64, force_constant: f64, rest_value: f64) -> f64 {
    let u = rest_value / x;
    0.5 * force_constant * rest_value * rest_value * (1.0 + u * (u - 2.0))
}

/// Singular at `x == 0`.
#[inline]
pub fn fues_derivative(x: f64, force_constant: f64, rest_value: f64) -> f64 {
    let u = rest_value / x;
    force_constant * rest_value * (u * u - u * u * u)
}

#[inline]
pub fn cross(x: f64, y: f64, force_constant: f64, rest_x: f64, rest_y: f64) -> f64 {
    force_constant * (x - rest_x) * (y - rest_y)
}

/// Returns `(∂E/∂x, ∂E/∂y)`.
#[inline]
pub fn cross_derivative(
    x: f64,
    y: f64,
    force_constant: f64,
    rest_x: f64,
    rest_y: f64,
) -> (f64, f64) {
    (
        force_constant * (y - rest_y),
        force_constant * (x - rest_x),
    )
}

#[inline]
pub fn cosine(x: f64, multiplicity: f64, amplitude: f64, rest_value: f64) -> f64 {
    0.5 * amplitude * (1.0 - (multiplicity * (x - rest_value)).cos())
}

#[inline]
pub fn cosine_derivative(x: f64, multiplicity: f64, amplitude: f64, rest_value: f64) -> f64 {
    0.5 * amplitude * multiplicity * (multiplicity * (x - rest_value)).sin()
}

#[inline]
pub fn chebychev1(x: f64, amplitude: f64) -> f64 {
    0.5 * amplitude * (1.0 - x)
}

#[inline]
pub fn chebychev1_derivative(_x: f64, amplitude: f64) -> f64 {
    -0.5 * amplitude
}

#[inline]
pub fn chebychev2(x: f64, amplitude: f64) -> f64 {
    amplitude * (1.0 - x * x)
}

#[inline]
pub fn chebychev2_derivative(x: f64, amplitude: f64) -> f64 {
    -2.0 * amplitude * x
}
