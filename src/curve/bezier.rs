//! Bezier evaluation in the Bernstein basis.
//!
//! The whole control polygon is one segment of degree `n - 1`. Each sample
//! is the dot product of the Bernstein weights with the x and y coordinate
//! vectors, computed with trueno's SIMD kernels.

use trueno::Vector;

use super::MAX_BEZIER_SAMPLES;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Natural logs of the binomial coefficients `C(n, 0..=n)`.
///
/// Coefficients overflow `f32` past degree 130 and `f64` past about 1000,
/// their logs never do.
fn ln_binomials(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    let mut ln_c = 0.0_f64;
    for i in 0..=n {
        row.push(ln_c);
        if i < n {
            ln_c += ((n - i) as f64).ln() - ((i + 1) as f64).ln();
        }
    }
    row
}

/// Bernstein basis `C(n,i) t^i (1-t)^(n-i)` for `i = 0..=n`, `t` in `[0, 1]`.
///
/// Each weight is evaluated as `exp(ln C + i ln t + (n-i) ln (1-t))` in
/// `f64`, so any degree yields finite weights. At `t = 0` and `t = 1` the
/// result is exactly one-hot.
#[must_use]
pub fn bernstein_weights(n: usize, t: f32) -> Vec<f32> {
    let t = f64::from(t);
    let (ln_t, ln_u) = (t.ln(), (1.0 - t).ln());
    ln_binomials(n)
        .into_iter()
        .enumerate()
        .map(|(i, ln_c)| {
            let mut e = ln_c;
            // 0 * ln(0) would be NaN; a zero exponent contributes nothing
            if i > 0 {
                e += i as f64 * ln_t;
            }
            if i < n {
                e += (n - i) as f64 * ln_u;
            }
            e.exp() as f32
        })
        .collect()
}

fn dot(weights: &Vector<f32>, coords: &Vector<f32>) -> Result<f32> {
    weights.dot(coords).map_err(|e| Error::Rendering(e.to_string()))
}

/// Sample the Bezier curve at `steps` uniformly spaced parameters.
///
/// Samples sit at `t = k / (steps - 1)`, so the first equals the first
/// control point and the last equals the last one.
///
/// # Errors
///
/// Returns [`Error::InvalidCurveSteps`] when `steps < 2`, since the
/// parameter spacing is undefined, or when `steps` exceeds
/// [`MAX_BEZIER_SAMPLES`].
pub fn bezier(control: &[Point], steps: usize) -> Result<Vec<Point>> {
    if !(2..=MAX_BEZIER_SAMPLES).contains(&steps) {
        return Err(Error::InvalidCurveSteps {
            steps,
            min: 2,
            max: MAX_BEZIER_SAMPLES,
        });
    }
    if control.is_empty() {
        return Ok(Vec::new());
    }

    let degree = control.len() - 1;
    let xs = Vector::from_vec(control.iter().map(|p| p.x).collect());
    let ys = Vector::from_vec(control.iter().map(|p| p.y).collect());
    let last = (steps - 1) as f32;

    (0..steps)
        .map(|k| {
            let weights = Vector::from_vec(bernstein_weights(degree, k as f32 / last));
            Ok(Point::new(dot(&weights, &xs)?, dot(&weights, &ys)?))
        })
        .collect()
}
