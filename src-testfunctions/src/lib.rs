//! Optimization test functions library
//!
//! The ten objectives used by the debench Differential Evolution runs, in
//! their historical order f1..f10:
//!
//! - **Unimodal**: sphere, Schwefel 2.22, Schwefel 1.2, Schwefel 2.21,
//!   Rosenbrock, step, quartic with noise
//! - **Multimodal**: Schwefel 2.26, Rastrigin, Ackley
//!
//! All functions are N-dimensional and take `&Array1<f64>`.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use debench_testfunctions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//!
//! let meta = get_function_metadata();
//! assert!(meta.contains_key("rastrigin"));
//! ```

use std::collections::HashMap;

pub mod functions;
pub use functions::*;

/// Metadata for a test function: recommended bounds, minimum and properties
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Position in the historical f1..f10 numbering
    pub number: usize,
    /// Recommended per-coordinate bounds (min, max), applied to every dimension
    pub bounds: (f64, f64),
    /// Global minimum value, when it does not depend on the dimension
    pub global_minimum: Option<f64>,
    /// Description of the function
    pub description: String,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// Whether two evaluations of the same point may differ
    pub stochastic: bool,
}

fn meta(
    name: &str,
    number: usize,
    bounds: (f64, f64),
    global_minimum: Option<f64>,
    description: &str,
    multimodal: bool,
    stochastic: bool,
) -> (String, FunctionMetadata) {
    (
        name.to_string(),
        FunctionMetadata {
            name: name.to_string(),
            number,
            bounds,
            global_minimum,
            description: description.to_string(),
            multimodal,
            stochastic,
        },
    )
}

/// Get metadata for all available test functions
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    HashMap::from([
        meta("sphere", 1, (-100.0, 100.0), Some(0.0), "N-dimensional quadratic bowl", false, false),
        meta("schwefel_2_22", 2, (-10.0, 10.0), Some(0.0), "Sum plus product of absolute values", false, false),
        meta("schwefel_1_2", 3, (-100.0, 100.0), Some(0.0), "Sum of squared prefix sums", false, false),
        meta("schwefel_2_21", 4, (-100.0, 100.0), Some(0.0), "Maximum absolute coordinate", false, false),
        meta("rosenbrock", 5, (-30.0, 30.0), Some(0.0), "N-dimensional banana valley", false, false),
        meta("step", 6, (-100.0, 100.0), Some(0.0), "Discontinuous plateau function", false, false),
        meta("quartic_noise", 7, (-1.28, 1.28), Some(0.0), "Weighted quartic plus uniform [0,1) noise", false, true),
        meta("schwefel_2_26", 8, (-500.0, 500.0), None, "Deceptive sine-modulated landscape", true, false),
        meta("rastrigin", 9, (-5.12, 5.12), Some(0.0), "Highly multimodal cosine lattice", true, false),
        meta("ackley", 10, (-32.768, 32.768), Some(0.0), "Nearly flat outer region with a central funnel", true, false),
        meta("quartic", 0, (-1.28, 1.28), Some(0.0), "Weighted quartic without noise", false, false),
    ])
}

/// Helper function to get the recommended bounds for a specific function
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<(f64, f64)> {
    get_function_metadata()
        .get(function_name)
        .map(|meta| meta.bounds)
}

/// Helper function to get `dim` copies of the recommended bounds
/// Returns `default_bounds` for every dimension if the function is not found
pub fn get_function_bounds_vec(
    function_name: &str,
    dim: usize,
    default_bounds: (f64, f64),
) -> Vec<(f64, f64)> {
    vec![get_function_bounds(function_name).unwrap_or(default_bounds); dim]
}
