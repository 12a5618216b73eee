//! Unimodal test functions

use ndarray::Array1;
use rand::Rng;

/// Sphere function (f1)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum::<f64>()
}

/// Schwefel 2.22 function (f2): sum(|x_i|) + prod(|x_i|)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn schwefel_2_22(x: &Array1<f64>) -> f64 {
    let sum: f64 = x.iter().map(|xi| xi.abs()).sum();
    let prod: f64 = x.iter().map(|xi| xi.abs()).product();
    sum + prod
}

/// Schwefel 1.2 function (f3), also known as the rotated hyper-ellipsoid:
/// sum over i of (x_0 + ... + x_i)^2
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn schwefel_1_2(x: &Array1<f64>) -> f64 {
    let mut partial = 0.0;
    let mut total = 0.0;
    for &xi in x.iter() {
        partial += xi;
        total += partial * partial;
    }
    total
}

/// Schwefel 2.21 function (f4): max(|x_i|)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn schwefel_2_21(x: &Array1<f64>) -> f64 {
    x.iter().fold(0.0_f64, |acc, &xi| acc.max(xi.abs()))
}

/// Rosenbrock function (f5)
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| {
            let a = w[1] - w[0] * w[0];
            let b = 1.0 - w[0];
            100.0 * a * a + b * b
        })
        .sum()
}

/// Step function (f6): sum(floor(x_i + 0.5)^2)
/// Global minimum: f(x) = 0 for x_i in [-0.5, 0.5)
pub fn step(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| (xi + 0.5).floor().powi(2)).sum::<f64>()
}

/// Quartic function without noise: sum((i+1) * x_i^4)
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
pub fn quartic(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (i + 1) as f64 * xi.powi(4))
        .sum()
}

/// Quartic function with uniform noise in [0, 1) (f7)
///
/// Stochastic: two evaluations of the same point differ. The noise is drawn
/// from the thread-local generator, so it is not affected by the optimizer seed.
pub fn quartic_noise(x: &Array1<f64>) -> f64 {
    quartic(x) + rand::rng().random::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schwefel_family_at_known_points() {
        let x = Array1::from(vec![1.0, -2.0, 3.0]);
        // |1| + |-2| + |3| + 1*2*3
        assert_eq!(schwefel_2_22(&x), 12.0);
        // 1^2 + (1-2)^2 + (1-2+3)^2
        assert_eq!(schwefel_1_2(&x), 6.0);
        assert_eq!(schwefel_2_21(&x), 3.0);
    }

    #[test]
    fn test_rosenbrock_minimum_and_single_dimension() {
        assert_eq!(rosenbrock(&Array1::from(vec![1.0, 1.0, 1.0, 1.0])), 0.0);
        // no consecutive pair in 1D
        assert_eq!(rosenbrock(&Array1::from(vec![3.0])), 0.0);
        assert_eq!(rosenbrock(&Array1::from(vec![0.0, 0.0])), 1.0);
    }

    #[test]
    fn test_step_plateau() {
        assert_eq!(step(&Array1::from(vec![0.49, -0.5])), 0.0);
        assert_eq!(step(&Array1::from(vec![1.0, 2.0])), 5.0);
    }

    #[test]
    fn test_quartic_noise_bounded_by_noise_amplitude() {
        let x = Array1::from(vec![0.5, -0.5]);
        let base = quartic(&x);
        for _ in 0..100 {
            let v = quartic_noise(&x);
            assert!(v >= base && v < base + 1.0, "noise out of range: {}", v - base);
        }
    }
}
