use crate::{DEConfig, DEReport, DifferentialEvolution, Objective, Result};
use ndarray::Array1;

/// Convenience function mirroring SciPy's API shape (simplified):
/// - `objective`: anything implementing [`Objective`], e.g. `fn(&Array1<f64>) -> f64`
/// - `bounds`: vector of (lower, upper) pairs, one per dimension
/// - `config`: DE configuration
pub fn differential_evolution<O>(
	objective: &O,
	bounds: &[(f64, f64)],
	config: DEConfig,
) -> Result<DEReport>
where
	O: Objective + ?Sized,
{
	let lower: Array1<f64> = bounds.iter().map(|&(lo, _)| lo).collect();
	let upper: Array1<f64> = bounds.iter().map(|&(_, hi)| hi).collect();
	let mut de = DifferentialEvolution::new(objective, lower, upper);
	*de.config_mut() = config;
	de.solve()
}
