//! First-order emphasis filters.
//!
//! Pre-emphasis flattens the spectral tilt of speech before windowing;
//! de-emphasis is its inverse, applied to enhanced output before writing.

/// Apply pre-emphasis in place: `y[n] = x[n] - coeff * x[n-1]`.
///
/// The first sample passes through unchanged. A coefficient `<= 0`
/// disables the filter.
pub fn pre_emphasis(samples: &mut [f32], coeff: f32) {
    if coeff <= 0.0 {
        return;
    }
    let mut prev = 0.0f32;
    for s in samples.iter_mut() {
        let cur = *s;
        *s = cur - coeff * prev;
        prev = cur;
    }
}

/// Apply de-emphasis in place: `y[n] = x[n] + coeff * y[n-1]`.
///
/// Single-pole IIR inverse of [`pre_emphasis`], starting from zero state.
/// A coefficient `<= 0` disables the filter.
pub fn de_emphasis(samples: &mut [f32], coeff: f32) {
    if coeff <= 0.0 {
        return;
    }
    let mut prev = 0.0f32;
    for s in samples.iter_mut() {
        *s += coeff * prev;
        prev = *s;
    }
}
