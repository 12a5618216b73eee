//! Differential Evolution (DE) global optimizer in pure Rust using ndarray
//!
//! A DE/rand/1/bin implementation built for benchmarking mutation weight (F)
//! and crossover rate (CR) combinations on classic test functions.
//!
//! Supported features:
//! - Box constraints (lower/upper bounds), repaired by saturating clamp
//! - DE/rand/1 mutation with binomial crossover and greedy selection
//! - Uniform random initialization
//! - Steady-state (immediate) or generation-snapshot (deferred) donor lookup
//! - Fixed generation budget, reproducible with a seed or a caller-owned RNG
//! - Per-generation observer callback, CSV recorder and a batch driver
//!
//! ```
//! use debench_de::{DEConfigBuilder, differential_evolution};
//! use debench_testfunctions::sphere;
//!
//! let config = DEConfigBuilder::new().seed(1).maxiter(200).popsize(20).build();
//! let report = differential_evolution(&sphere, &[(-5.0, 5.0); 3], config).unwrap();
//! assert!(report.fun < 1e-3);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub mod candidate;
pub mod error;
pub mod objective;
pub mod population;

pub mod clip_inplace;
pub mod crossover_binomial;
pub mod distinct_indices;
pub mod mutant_rand1;

pub mod batch;
pub mod differential_evolution;
pub mod function_registry;
pub mod recorder;

pub use candidate::Candidate;
pub use differential_evolution::differential_evolution;
pub use error::{DEError, ObjectiveError, Result};
pub use objective::{Fallible, Objective};
pub use population::Population;
pub use recorder::{GenerationRecord, OptimizationRecorder};

/// Which population state donors are read from during a generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Updating {
	/// Steady-state: donors come from the live population, so a member
	/// replaced earlier in the same generation can already serve as donor
	#[default]
	Immediate,
	/// Donors come from a snapshot taken at the start of the generation
	Deferred,
}

impl FromStr for Updating {
	type Err = String;
	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"immediate" | "steady-state" | "steady_state" | "live" => Ok(Updating::Immediate),
			"deferred" | "snapshot" => Ok(Updating::Deferred),
			_ => Err(format!("unknown updating mode: {}", s)),
		}
	}
}

/// Per-generation observer. Observation only: it cannot stop the run.
pub type DECallback = Box<dyn FnMut(&DEIntermediate<'_>) + Send>;

/// Configuration for the Differential Evolution optimizer
pub struct DEConfig {
	/// Number of generations (GMAX); 0 only evaluates the initial population
	pub maxiter: usize,
	/// Population size NP (>= 4)
	pub popsize: usize,
	/// Mutation factor F
	pub mutation: f64,
	/// Crossover rate CR, meaningful in [0, 1] but not clamped
	pub recombination: f64,
	pub updating: Updating,
	/// Seed for the run RNG; `None` seeds from OS entropy
	pub seed: Option<u64>,
	/// Called after initialization (iter 0) and after every generation
	pub callback: Option<DECallback>,
}

impl Default for DEConfig {
	fn default() -> Self {
		Self {
			maxiter: 2000,
			popsize: 40,
			mutation: 0.8,
			recombination: 0.9,
			updating: Updating::default(),
			seed: None,
			callback: None,
		}
	}
}

impl fmt::Debug for DEConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DEConfig")
			.field("maxiter", &self.maxiter)
			.field("popsize", &self.popsize)
			.field("mutation", &self.mutation)
			.field("recombination", &self.recombination)
			.field("updating", &self.updating)
			.field("seed", &self.seed)
			.field("callback", &self.callback.is_some())
			.finish()
	}
}

/// Fluent builder for `DEConfig` for ergonomic configuration.
pub struct DEConfigBuilder {
	cfg: DEConfig,
}

impl Default for DEConfigBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl DEConfigBuilder {
	pub fn new() -> Self {
		Self { cfg: DEConfig::default() }
	}
	pub fn maxiter(mut self, v: usize) -> Self {
		self.cfg.maxiter = v;
		self
	}
	pub fn popsize(mut self, v: usize) -> Self {
		self.cfg.popsize = v;
		self
	}
	pub fn mutation(mut self, v: f64) -> Self {
		self.cfg.mutation = v;
		self
	}
	pub fn recombination(mut self, v: f64) -> Self {
		self.cfg.recombination = v;
		self
	}
	pub fn updating(mut self, v: Updating) -> Self {
		self.cfg.updating = v;
		self
	}
	pub fn seed(mut self, v: u64) -> Self {
		self.cfg.seed = Some(v);
		self
	}
	pub fn maybe_seed(mut self, v: Option<u64>) -> Self {
		self.cfg.seed = v;
		self
	}
	pub fn callback(mut self, cb: DECallback) -> Self {
		self.cfg.callback = Some(cb);
		self
	}
	pub fn build(self) -> DEConfig {
		self.cfg
	}
}

/// Result/Report of a DE optimization run
#[derive(Clone)]
pub struct DEReport {
	/// Best position seen
	pub x: Array1<f64>,
	/// Best fitness seen
	pub fun: f64,
	pub message: String,
	/// Generations performed
	pub nit: usize,
	/// Objective evaluations performed
	pub nfev: usize,
	/// Trials accepted by selection over the whole run
	pub accepted: usize,
	/// Final population
	pub population: Population,
}

impl fmt::Debug for DEReport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DEReport")
			.field("x", &format!("len={}", self.x.len()))
			.field("fun", &self.fun)
			.field("message", &self.message)
			.field("nit", &self.nit)
			.field("nfev", &self.nfev)
			.field("accepted", &self.accepted)
			.field("population", &format!("len={}", self.population.len()))
			.finish()
	}
}

/// Information passed to the callback after each generation
pub struct DEIntermediate<'a> {
	pub iter: usize,
	/// Global best so far
	pub best: &'a Candidate,
	pub population: &'a Population,
	/// Trials accepted during this generation
	pub accepted: usize,
	/// Accepted trials that improved the global best during this generation
	pub improved: usize,
}

/// Differential Evolution optimizer
pub struct DifferentialEvolution<'a, O>
where
	O: Objective + ?Sized,
{
	objective: &'a O,
	lower: Array1<f64>,
	upper: Array1<f64>,
	config: DEConfig,
}

impl<'a, O> DifferentialEvolution<'a, O>
where
	O: Objective + ?Sized,
{
	/// Create a new DE optimizer with `objective` and bounds [lower, upper]
	pub fn new(objective: &'a O, lower: Array1<f64>, upper: Array1<f64>) -> Self {
		Self { objective, lower, upper, config: DEConfig::default() }
	}

	/// Mutable access to configuration
	pub fn config_mut(&mut self) -> &mut DEConfig {
		&mut self.config
	}

	fn validate(&self) -> Result<()> {
		if self.lower.len() != self.upper.len() {
			return Err(DEError::BoundsMismatch {
				lower_len: self.lower.len(),
				upper_len: self.upper.len(),
			});
		}
		if self.lower.is_empty() {
			return Err(DEError::EmptyDimension);
		}
		for (index, (&lower, &upper)) in self.lower.iter().zip(self.upper.iter()).enumerate() {
			// the span must be representable or initialization leaves the box
			if !(lower < upper) || !(upper - lower).is_finite() {
				return Err(DEError::InvalidBounds { index, lower, upper });
			}
		}
		if self.config.popsize < 4 {
			return Err(DEError::PopulationTooSmall { pop_size: self.config.popsize });
		}
		if !self.config.mutation.is_finite() {
			return Err(DEError::InvalidMutationFactor { factor: self.config.mutation });
		}
		if !self.config.recombination.is_finite() {
			return Err(DEError::InvalidCrossoverRate { rate: self.config.recombination });
		}
		Ok(())
	}

	/// Run the optimization with an RNG built from `config.seed`
	pub fn solve(&mut self) -> Result<DEReport> {
		let mut rng: StdRng = match self.config.seed {
			Some(s) => StdRng::seed_from_u64(s),
			None => {
				let mut thread_rng = rand::rng();
				StdRng::from_rng(&mut thread_rng)
			}
		};
		self.solve_with_rng(&mut rng)
	}

	/// Run the optimization drawing every random number from `rng`
	///
	/// `config.seed` is ignored.
	pub fn solve_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<DEReport> {
		use clip_inplace::clip_inplace;
		use crossover_binomial::binomial_crossover;
		use mutant_rand1::mutant_rand1;

		self.validate()?;

		let n = self.lower.len();
		let npop = self.config.popsize;
		let f = self.config.mutation;
		let cr = self.config.recombination;
		let maxiter = self.config.maxiter;

		log::info!(
			"DE init: {} dimensions, population={}, maxiter={}, F={:.3}, CR={:.3}, updating={:?}",
			n,
			npop,
			maxiter,
			f,
			cr,
			self.config.updating
		);

		let timing_enabled = debench_env::env_utils::timing_enabled();

		let t_init0 = Instant::now();
		let mut pop = Population::init_random(npop, &self.lower, &self.upper, self.objective, rng)?;
		let mut nfev = npop;
		let t_init = t_init0.elapsed();

		let (best_idx, best_f) = pop.argmin();
		let mut best = pop[best_idx].clone();
		if log::log_enabled!(log::Level::Debug) {
			let (mean, std) = pop.fitness_stats();
			log::debug!(
				"DE iter {:4}  best_f={:.6e}  mean={:.6e}  std={:.3e}  (index {})",
				0,
				best_f,
				mean,
				std,
				best_idx
			);
		}
		if timing_enabled {
			log::info!("TIMING init: {:.3} ms", t_init.as_secs_f64() * 1e3);
		}

		if let Some(ref mut cb) = self.config.callback {
			cb(&DEIntermediate { iter: 0, best: &best, population: &pop, accepted: 0, improved: 0 });
		}

		let mut nit = 0;
		let mut accepted_total = 0;
		let mut t_eval_tot = Duration::ZERO;
		let mut t_iter_tot = Duration::ZERO;

		for iter in 1..=maxiter {
			nit = iter;
			let mut accepted = 0;
			let mut improved = 0;
			let iter_start = Instant::now();

			let snapshot = match self.config.updating {
				Updating::Deferred => Some(pop.clone()),
				Updating::Immediate => None,
			};

			for i in 0..npop {
				let donors = snapshot.as_ref().unwrap_or(&pop);
				let mut mutant = mutant_rand1(i, donors, f, rng);
				clip_inplace(&mut mutant, &self.lower, &self.upper);
				let trial_x = binomial_crossover(pop[i].position(), &mutant, cr, rng);

				let t_eval0 = Instant::now();
				let trial = Candidate::evaluated(trial_x, self.objective)?;
				t_eval_tot += t_eval0.elapsed();
				nfev += 1;

				// ties go to the trial
				if trial.fitness() <= pop[i].fitness() {
					let improves_best = trial.fitness() < best.fitness();
					pop.replace(i, trial);
					accepted += 1;
					if improves_best {
						best = pop[i].clone();
						improved += 1;
						log::trace!("DE iter {:4}  new best {:.6e} from slot {}", iter, best.fitness(), i);
					}
				}
			}
			accepted_total += accepted;

			let iter_dur = iter_start.elapsed();
			t_iter_tot += iter_dur;
			if timing_enabled && (iter <= 5 || iter % 100 == 0) {
				log::info!(
					"TIMING iter {:4}: total={:.3} ms",
					iter,
					iter_dur.as_secs_f64() * 1e3
				);
			}

			if log::log_enabled!(log::Level::Debug) {
				let (mean, std) = pop.fitness_stats();
				log::debug!(
					"DE iter {:4}  best_f={:.6e}  mean={:.6e}  std={:.3e}  accepted={}/{}, improved={}",
					iter,
					best.fitness(),
					mean,
					std,
					accepted,
					npop,
					improved
				);
			}

			if let Some(ref mut cb) = self.config.callback {
				cb(&DEIntermediate { iter, best: &best, population: &pop, accepted, improved });
			}
		}

		let message = format!("Maximum generations reached: {}", maxiter);
		log::info!("DE finished: {}  best_f={:.6e}  nfev={}", message, best.fitness(), nfev);
		if timing_enabled {
			log::info!(
				"TIMING total: eval={:.3} s, iter_total={:.3} s",
				t_eval_tot.as_secs_f64(),
				t_iter_tot.as_secs_f64()
			);
		}

		let fun = best.fitness();
		Ok(DEReport {
			x: best.into_position(),
			fun,
			message,
			nit,
			nfev,
			accepted: accepted_total,
			population: pop,
		})
	}
}
