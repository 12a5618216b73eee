//! Batch driver: repeated independent DE runs over F/CR presets
//!
//! A batch runs every preset `runs` times on one objective and summarizes
//! the final best fitness of each run. Runs are independent (own population,
//! own RNG) and are executed in parallel with rayon unless disabled.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recorder::OptimizationRecorder;
use crate::{DEConfigBuilder, DEError, DifferentialEvolution, Objective, Updating};

/// Errors raised by the batch driver
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    De(#[from] DEError),

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("batch needs at least one run")]
    NoRuns,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A named (F, CR) combination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    /// Mutation factor F
    pub mutation: f64,
    /// Crossover rate CR
    pub recombination: f64,
}

impl Preset {
    pub fn new(name: &str, mutation: f64, recombination: f64) -> Self {
        Self { name: name.to_string(), mutation, recombination }
    }
}

/// The five standard presets
pub fn default_presets() -> Vec<Preset> {
    vec![
        Preset::new("baseline", 0.8, 0.9),
        Preset::new("exploration", 0.9, 0.5),
        Preset::new("exploitation", 0.5, 0.9),
        Preset::new("balanced", 0.6, 0.6),
        Preset::new("aggressive mutation", 1.0, 0.3),
    ]
}

/// Load presets from a JSON array of `{"name", "mutation", "recombination"}`
pub fn load_presets(path: &Path) -> Result<Vec<Preset>, BatchError> {
    let file = File::open(path)?;
    let presets: Vec<Preset> = serde_json::from_reader(file)?;
    Ok(presets)
}

/// Everything a batch needs besides the objective and the presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPlan {
    pub dim: usize,
    pub popsize: usize,
    pub lower: f64,
    pub upper: f64,
    pub maxiter: usize,
    pub runs: usize,
    /// Base seed; run `k` (1-based) uses `seed + k`. `None` seeds every run from OS entropy.
    pub seed: Option<u64>,
    #[serde(default)]
    pub updating: Updating,
    /// Run the repetitions of a preset concurrently
    pub parallel: bool,
    /// When set, each run writes its per-generation CSV record here
    #[serde(default)]
    pub record_dir: Option<PathBuf>,
}

impl Default for BatchPlan {
    fn default() -> Self {
        Self {
            dim: 30,
            popsize: 40,
            lower: -10.0,
            upper: 10.0,
            maxiter: 2000,
            runs: 10,
            seed: None,
            updating: Updating::default(),
            parallel: true,
            record_dir: None,
        }
    }
}

impl BatchPlan {
    fn run_seed(&self, run: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(run as u64))
    }
}

/// Outcome of one run
#[derive(Debug, Clone, Serialize)]
pub struct RunOutcome {
    /// 1-based run index
    pub run: usize,
    pub seed: Option<u64>,
    pub fun: f64,
    pub x: Vec<f64>,
    pub nfev: usize,
}

/// Summary of all runs of one preset on one function
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub function: String,
    pub preset: Preset,
    pub runs: Vec<RunOutcome>,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub elapsed_secs: f64,
}

impl BatchSummary {
    fn from_runs(function: &str, preset: &Preset, runs: Vec<RunOutcome>, elapsed_secs: f64) -> Self {
        let n = runs.len() as f64;
        let mean = runs.iter().map(|r| r.fun).sum::<f64>() / n;
        let var = runs.iter().map(|r| (r.fun - mean).powi(2)).sum::<f64>() / n;
        let min = runs.iter().map(|r| r.fun).fold(f64::INFINITY, f64::min);
        let max = runs.iter().map(|r| r.fun).fold(f64::NEG_INFINITY, f64::max);
        Self {
            function: function.to_string(),
            preset: preset.clone(),
            runs,
            mean,
            std: var.sqrt(),
            min,
            max,
            elapsed_secs,
        }
    }
}

fn single_run<O>(
    objective: &O,
    function_name: &str,
    preset: &Preset,
    plan: &BatchPlan,
    run: usize,
) -> Result<RunOutcome, BatchError>
where
    O: Objective + ?Sized,
{
    let seed = plan.run_seed(run);
    let recorder = plan
        .record_dir
        .as_ref()
        .map(|_| OptimizationRecorder::new(record_name(function_name, preset, run)));

    let mut builder = DEConfigBuilder::new()
        .maxiter(plan.maxiter)
        .popsize(plan.popsize)
        .mutation(preset.mutation)
        .recombination(preset.recombination)
        .updating(plan.updating)
        .maybe_seed(seed);
    if let Some(ref rec) = recorder {
        builder = builder.callback(rec.create_callback());
    }

    let lower = ndarray::Array1::from_elem(plan.dim, plan.lower);
    let upper = ndarray::Array1::from_elem(plan.dim, plan.upper);
    let mut de = DifferentialEvolution::new(objective, lower, upper);
    *de.config_mut() = builder.build();
    let report = de.solve()?;

    if let (Some(rec), Some(dir)) = (recorder, plan.record_dir.as_ref()) {
        let path = rec.save_to_csv(dir)?;
        log::debug!("run {} record saved to {}", run, path.display());
    }

    Ok(RunOutcome { run, seed, fun: report.fun, x: report.x.to_vec(), nfev: report.nfev })
}

fn record_name(function_name: &str, preset: &Preset, run: usize) -> String {
    let preset_slug: String = preset
        .name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    format!("{}_{}_run{:02}", function_name, preset_slug, run)
}

/// Run all repetitions of `preset` on `objective` and summarize them
pub fn run_preset<O>(
    objective: &O,
    function_name: &str,
    preset: &Preset,
    plan: &BatchPlan,
) -> Result<BatchSummary, BatchError>
where
    O: Objective + Sync + ?Sized,
{
    if plan.runs == 0 {
        return Err(BatchError::NoRuns);
    }
    log::info!(
        "{} | {} F={:.2} CR={:.2} | {} runs{}",
        function_name,
        preset.name,
        preset.mutation,
        preset.recombination,
        plan.runs,
        if plan.parallel { " (parallel)" } else { "" }
    );
    let start = Instant::now();
    let outcomes: Result<Vec<RunOutcome>, BatchError> = if plan.parallel {
        (1..=plan.runs)
            .into_par_iter()
            .map(|run| single_run(objective, function_name, preset, plan, run))
            .collect()
    } else {
        (1..=plan.runs)
            .map(|run| single_run(objective, function_name, preset, plan, run))
            .collect()
    };
    let summary =
        BatchSummary::from_runs(function_name, preset, outcomes?, start.elapsed().as_secs_f64());
    log::info!(
        "{} | {} | mean={:.6e} std={:.3e} min={:.6e} max={:.6e}",
        function_name,
        preset.name,
        summary.mean,
        summary.std,
        summary.min,
        summary.max
    );
    Ok(summary)
}

/// Write one row per run of every summary
pub fn write_summary_csv(path: &Path, summaries: &[BatchSummary]) -> Result<(), BatchError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["function", "preset", "mutation", "recombination", "run", "seed", "fun", "nfev"])?;
    for summary in summaries {
        for run in &summary.runs {
            writer.write_record([
                summary.function.clone(),
                summary.preset.name.clone(),
                summary.preset.mutation.to_string(),
                summary.preset.recombination.to_string(),
                run.run.to_string(),
                run.seed.map(|s| s.to_string()).unwrap_or_default(),
                format!("{:.15}", run.fun),
                run.nfev.to_string(),
            ])?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write all summaries as pretty JSON
pub fn write_summary_json(path: &Path, summaries: &[BatchSummary]) -> Result<(), BatchError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, summaries)?;
    Ok(())
}
