//! Test function implementations organized by category
//!
//! - `unimodal`: single-optimum functions (sphere, Schwefel family, Rosenbrock, step, quartic)
//! - `multimodal`: many local minima (Schwefel 2.26, Rastrigin, Ackley)

pub mod multimodal;
pub mod unimodal;

// Re-export all functions for easy access
pub use multimodal::*;
pub use unimodal::*;
