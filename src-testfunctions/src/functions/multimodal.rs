//! Multimodal test functions

use ndarray::Array1;
use std::f64::consts::{E, PI};

/// Schwefel 2.26 function (f8): sum(-x_i * sin(sqrt(|x_i|)))
///
/// No constant offset is added, so the minimum depends on the bounds and the
/// dimension: about -418.9829 * n at x_i = 420.9687 on [-500, 500]. On
/// [-10, 10] the per-coordinate minimum is at the boundary.
pub fn schwefel_2_26(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| -xi * xi.abs().sqrt().sin()).sum()
}

/// Rastrigin function (f9)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn rastrigin(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum: f64 = x
        .iter()
        .map(|&xi| xi.powi(2) - 10.0 * (2.0 * PI * xi).cos())
        .sum();
    10.0 * n + sum
}

/// Ackley function (f10)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn ackley(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|&xi| xi.powi(2)).sum();
    let sum_cos: f64 = x.iter().map(|&xi| (2.0 * PI * xi).cos()).sum();

    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + E
}
