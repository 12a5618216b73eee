//! Error types for the Differential Evolution optimizer.
//!
//! Configuration problems are detected before the first generation and abort
//! the run without a partial result. Objective failures are propagated as-is:
//! the engine never substitutes a default fitness.

use thiserror::Error;

/// Failure reported by an objective evaluator.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("objective evaluation failed: {message}")]
pub struct ObjectiveError {
    /// Human readable cause
    pub message: String,
}

impl ObjectiveError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Errors that can occur during Differential Evolution optimization.
#[derive(Debug, Error)]
pub enum DEError {
    /// The search space has no dimension.
    #[error("dimension must be >= 1")]
    EmptyDimension,

    /// Lower and upper bounds have different lengths.
    #[error("bounds mismatch: lower has {lower_len} elements, upper has {upper_len}")]
    BoundsMismatch {
        /// Length of the lower bounds array
        lower_len: usize,
        /// Length of the upper bounds array
        upper_len: usize,
    },

    /// A bound pair is unordered or its width is not a finite number.
    #[error("invalid bounds at index {index}: [{lower}, {upper}] must be finite with lower < upper")]
    InvalidBounds {
        /// Index of the invalid bound pair
        index: usize,
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Population size is too small for DE/rand/1 (must be >= 4).
    #[error("population size ({pop_size}) must be >= 4")]
    PopulationTooSmall {
        /// The invalid population size
        pop_size: usize,
    },

    /// Mutation factor is not a finite number.
    #[error("invalid mutation factor: {factor} (must be finite)")]
    InvalidMutationFactor {
        /// The invalid mutation factor
        factor: f64,
    },

    /// Crossover rate is not a finite number.
    #[error("invalid crossover rate: {rate} (must be finite)")]
    InvalidCrossoverRate {
        /// The invalid crossover rate
        rate: f64,
    },

    /// The objective evaluator reported a failure.
    #[error(transparent)]
    Objective(#[from] ObjectiveError),

    /// The objective evaluator returned NaN.
    #[error("objective returned a non-numeric fitness at x = {x:?}")]
    NonNumericFitness {
        /// Point that produced the NaN
        x: Vec<f64>,
    },
}

/// A specialized `Result` type for DE operations.
pub type Result<T> = std::result::Result<T, DEError>;

impl DEError {
    /// Returns `true` if this is a bounds-related error.
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            DEError::BoundsMismatch { .. } | DEError::InvalidBounds { .. }
        )
    }

    /// Returns `true` for any error detected before the first generation.
    pub fn is_config_error(&self) -> bool {
        self.is_bounds_error()
            || matches!(
                self,
                DEError::EmptyDimension
                    | DEError::PopulationTooSmall { .. }
                    | DEError::InvalidMutationFactor { .. }
                    | DEError::InvalidCrossoverRate { .. }
            )
    }

    /// Returns `true` if the objective evaluator failed or misbehaved.
    pub fn is_objective_error(&self) -> bool {
        matches!(
            self,
            DEError::Objective(_) | DEError::NonNumericFitness { .. }
        )
    }
}
