use std::fs::create_dir_all;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::{DECallback, DEIntermediate};

/// Records per-generation progress via DE callbacks
#[derive(Debug, Clone)]
pub struct OptimizationRecorder {
    /// Run name (used for CSV filename)
    run_name: String,
    /// Shared records storage
    records: Arc<Mutex<Vec<GenerationRecord>>>,
}

/// A single generation record
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRecord {
    /// Generation number, 0 for the initial population
    pub generation: usize,
    /// Best fitness seen so far
    pub best_fitness: f64,
    /// Mean fitness of the population
    pub mean_fitness: f64,
    /// Standard deviation of the population fitness
    pub std_fitness: f64,
    /// Trials accepted during the generation
    pub accepted: usize,
    /// Whether the generation improved the best known result
    pub is_improvement: bool,
    /// Best position seen so far
    pub x: Vec<f64>,
}

impl OptimizationRecorder {
    /// Create a new recorder for the given run
    pub fn new(run_name: impl Into<String>) -> Self {
        Self {
            run_name: run_name.into(),
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GenerationRecord>> {
        // a panicking callback cannot leave a half-written record behind
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Create a callback that records every generation
    pub fn create_callback(&self) -> DECallback {
        let recorder = self.clone();
        Box::new(move |intermediate: &DEIntermediate<'_>| {
            let (mean, std) = intermediate.population.fitness_stats();
            let mut records = recorder.lock();
            let is_improvement = match records.last() {
                Some(prev) => intermediate.best.fitness() < prev.best_fitness,
                None => true,
            };
            records.push(GenerationRecord {
                generation: intermediate.iter,
                best_fitness: intermediate.best.fitness(),
                mean_fitness: mean,
                std_fitness: std,
                accepted: intermediate.accepted,
                is_improvement,
                x: intermediate.best.position().to_vec(),
            });
        })
    }

    /// Save all recorded generations to `<output_dir>/<run_name>.csv`
    pub fn save_to_csv(&self, output_dir: &Path) -> Result<PathBuf, csv::Error> {
        create_dir_all(output_dir)?;
        let filename = output_dir.join(format!("{}.csv", self.run_name));
        let mut writer = csv::Writer::from_path(&filename)?;

        let records = self.lock();
        let num_dimensions = records.first().map_or(0, |r| r.x.len());

        let mut header: Vec<String> = vec![
            "generation".into(),
            "best_fitness".into(),
            "mean_fitness".into(),
            "std_fitness".into(),
            "accepted".into(),
            "is_improvement".into(),
        ];
        header.extend((0..num_dimensions).map(|i| format!("x{}", i)));
        writer.write_record(&header)?;

        for record in records.iter() {
            let mut row: Vec<String> = vec![
                record.generation.to_string(),
                format!("{:.16e}", record.best_fitness),
                format!("{:.16e}", record.mean_fitness),
                format!("{:.16e}", record.std_fitness),
                record.accepted.to_string(),
                record.is_improvement.to_string(),
            ];
            row.extend(record.x.iter().map(|xi| format!("{:.16}", xi)));
            writer.write_record(&row)?;
        }
        writer.flush()?;

        Ok(filename)
    }

    /// Get a copy of all recorded generations
    pub fn get_records(&self) -> Vec<GenerationRecord> {
        self.lock().clone()
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.lock().len()
    }

    /// Clear all recorded generations
    pub fn clear(&self) {
        self.lock().clear();
    }
}
