use std::fmt;

use ndarray::Array1;

use crate::error::{DEError, Result};
use crate::objective::Objective;

/// A point of the search space together with its cached fitness.
///
/// The position can only change through [`Candidate::evaluated`] or
/// [`Candidate::set_position`], both of which evaluate the objective in the
/// same step: the cached fitness is never stale. An unevaluated candidate
/// reports `f64::INFINITY`, which is also a legal evaluated fitness.
#[derive(Clone, PartialEq)]
pub struct Candidate {
    position: Array1<f64>,
    fitness: f64,
    evaluated: bool,
}

impl Candidate {
    /// An unevaluated candidate at the origin of a `dim`-dimensional space
    pub fn new(dim: usize) -> Self {
        Self { position: Array1::zeros(dim), fitness: f64::INFINITY, evaluated: false }
    }

    /// Evaluate `position` and build the candidate from it
    pub fn evaluated<O>(position: Array1<f64>, objective: &O) -> Result<Self>
    where
        O: Objective + ?Sized,
    {
        let fitness = checked_fitness(&position, objective)?;
        Ok(Self { position, fitness, evaluated: true })
    }

    /// Move the candidate to `position` and refresh its fitness.
    ///
    /// On error the candidate is left unchanged.
    pub fn set_position<O>(&mut self, position: Array1<f64>, objective: &O) -> Result<()>
    where
        O: Objective + ?Sized,
    {
        let fitness = checked_fitness(&position, objective)?;
        self.position = position;
        self.fitness = fitness;
        self.evaluated = true;
        Ok(())
    }

    pub fn position(&self) -> &Array1<f64> {
        &self.position
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn dim(&self) -> usize {
        self.position.len()
    }

    pub fn is_evaluated(&self) -> bool {
        self.evaluated
    }

    /// Give up the candidate and keep its position
    pub fn into_position(self) -> Array1<f64> {
        self.position
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("fitness", &self.fitness)
            .field("position", &self.position.to_vec())
            .finish()
    }
}

fn checked_fitness<O>(x: &Array1<f64>, objective: &O) -> Result<f64>
where
    O: Objective + ?Sized,
{
    let f = objective.evaluate(x)?;
    if f.is_nan() {
        return Err(DEError::NonNumericFitness { x: x.to_vec() });
    }
    Ok(f)
}
