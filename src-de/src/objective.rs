//! Objective evaluator capability consumed by the optimizer.

use ndarray::Array1;

use crate::error::ObjectiveError;

/// Something that maps a point to a value to minimize.
///
/// Any `Fn(&Array1<f64>) -> f64` is an objective. Evaluators that can fail
/// are wrapped in [`Fallible`]. Evaluators may be stochastic: the optimizer
/// never caches or de-duplicates calls.
pub trait Objective {
    fn evaluate(&self, x: &Array1<f64>) -> Result<f64, ObjectiveError>;
}

impl<F> Objective for F
where
    F: Fn(&Array1<f64>) -> f64,
{
    fn evaluate(&self, x: &Array1<f64>) -> Result<f64, ObjectiveError> {
        Ok((self)(x))
    }
}

/// Adapter for objectives returning `Result`.
///
/// ```
/// use debench_de::{Fallible, Objective, ObjectiveError};
/// use ndarray::Array1;
///
/// let log_barrier = Fallible(|x: &Array1<f64>| {
///     if x[0] <= 0.0 {
///         Err(ObjectiveError::new("outside domain"))
///     } else {
///         Ok(-x[0].ln())
///     }
/// });
/// assert!(log_barrier.evaluate(&Array1::from(vec![-1.0])).is_err());
/// ```
pub struct Fallible<F>(pub F);

impl<F> Objective for Fallible<F>
where
    F: Fn(&Array1<f64>) -> Result<f64, ObjectiveError>,
{
    fn evaluate(&self, x: &Array1<f64>) -> Result<f64, ObjectiveError> {
        (self.0)(x)
    }
}
