pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Linear map of `x` from `input` onto `output`, clamped on both sides.
///
/// A degenerate input window snaps to the output end once `x` reaches it.
pub(crate) fn interpolate_clamped(x: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let [x0, x1] = input;
    let span = x1 - x0;
    let t = if span.abs() < f64::EPSILON {
        if x >= x1 { 1.0 } else { 0.0 }
    } else {
        ((x - x0) / span).clamp(0.0, 1.0)
    };
    lerp(output[0], output[1], t)
}

/// Euclidean remainder for non-negative periods; `0` when `m` is not positive.
pub(crate) fn wrap(a: f64, m: f64) -> f64 {
    if m <= 0.0 || !m.is_finite() {
        return 0.0;
    }
    let r = a.rem_euclid(m);
    // rem_euclid may round up to exactly `m` for tiny negative inputs.
    if r >= m { 0.0 } else { r }
}

/// Clamp a fractional slot index to `[0, len - 1]`.
pub(crate) fn clamp_index(raw: f64, len: usize) -> usize {
    if len == 0 || !raw.is_finite() || raw <= 0.0 {
        return 0;
    }
    (raw.floor() as usize).min(len - 1)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
