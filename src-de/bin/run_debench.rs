//! debench CLI: runs every F/CR preset on a set of benchmark functions and
//! reports per-run and averaged final fitness values.
//!
//! Output mirrors the historical console format; a CSV with one row per run
//! (and optionally a JSON summary) is written to the output directory, which
//! defaults to `$DEBENCH_DIR/data_generated/records`.

use clap::Parser;
use debench_de::Updating;
use debench_de::batch::{
    BatchPlan, BatchSummary, default_presets, load_presets, run_preset, write_summary_csv,
    write_summary_json,
};
use debench_de::function_registry::FunctionRegistry;
use debench_testfunctions::get_function_metadata;
use std::error::Error;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "run_debench",
    about = "Benchmark DE/rand/1/bin F and CR presets across classic test functions"
)]
struct Cli {
    /// Functions to run, by name or number (f1..f10); all standard functions when omitted
    #[arg(long = "function", value_delimiter = ',')]
    functions: Vec<String>,

    /// Dimensionality of the problem
    #[arg(long, default_value_t = 30)]
    dim: usize,

    /// Population size (NP >= 4)
    #[arg(long, default_value_t = 40)]
    popsize: usize,

    /// Number of generations
    #[arg(long, default_value_t = 2000)]
    maxiter: usize,

    /// Independent runs per preset
    #[arg(long, default_value_t = 10)]
    runs: usize,

    /// Lower bound of every coordinate
    #[arg(long, default_value_t = -10.0, allow_hyphen_values = true)]
    lower: f64,

    /// Upper bound of every coordinate
    #[arg(long, default_value_t = 10.0, allow_hyphen_values = true)]
    upper: f64,

    /// Use each function's recommended bounds instead of --lower/--upper
    #[arg(long)]
    native_bounds: bool,

    /// Base random seed; run k uses seed + k. Unseeded runs use OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with presets: [{"name": "...", "mutation": 0.8, "recombination": 0.9}]
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Donor lookup: immediate (steady-state) or deferred (generation snapshot)
    #[arg(long, default_value = "immediate")]
    updating: Updating,

    /// Run the repetitions of a preset one after the other
    #[arg(long)]
    sequential: bool,

    /// Directory receiving results.csv (and summary.json)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Save a per-generation CSV record for every run
    #[arg(long)]
    record: bool,

    /// Also write summary.json
    #[arg(long)]
    json: bool,

    /// List all available functions and exit
    #[arg(long)]
    list_functions: bool,
}

fn print_functions(registry: &FunctionRegistry) {
    let metadata = get_function_metadata();
    println!("Available functions:");
    for (k, name) in registry.list_functions().iter().enumerate() {
        match metadata.get(name) {
            Some(meta) => println!(
                "  f{:<3} {:<16} [{}, {}]  {}",
                k + 1,
                name,
                meta.bounds.0,
                meta.bounds.1,
                meta.description
            ),
            None => println!("  f{:<3} {}", k + 1, name),
        }
    }
}

fn resolve_output_dir(cli: &Cli) -> Option<PathBuf> {
    if let Some(dir) = &cli.output_dir {
        return Some(dir.clone());
    }
    match debench_env::env_utils::get_records_dir() {
        Ok(dir) => Some(dir),
        Err(e) => {
            log::warn!("{}; results will only be printed", e);
            None
        }
    }
}

fn print_summary(summary: &BatchSummary) {
    println!(
        " {} | F={:.2} CR={:.2} | RUN VALUES:",
        summary.preset.name, summary.preset.mutation, summary.preset.recombination
    );
    for run in &summary.runs {
        println!("   run {:2}: {:.15}", run.run, run.fun);
    }
    println!("   AVERAGE = {:.15}\n", summary.mean);
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let registry = FunctionRegistry::new();
    if cli.list_functions {
        print_functions(&registry);
        return Ok(());
    }

    let functions: Vec<String> = if cli.functions.is_empty() {
        registry.list_functions().into_iter().take(10).collect()
    } else {
        cli.functions.clone()
    };
    let presets = match &cli.presets {
        Some(path) => load_presets(path)?,
        None => default_presets(),
    };
    let output_dir = resolve_output_dir(&cli);
    if let Some(dir) = &output_dir {
        std::fs::create_dir_all(dir)?;
    }
    let metadata = get_function_metadata();

    let start = Instant::now();
    let mut summaries = Vec::new();
    for requested in &functions {
        let name = registry
            .resolve_name(requested)
            .ok_or_else(|| format!("unknown function: {}", requested))?
            .to_string();
        let objective = registry
            .get(&name)
            .ok_or_else(|| format!("unknown function: {}", name))?;
        let (lower, upper) = match metadata.get(&name) {
            Some(meta) if cli.native_bounds => meta.bounds,
            _ => (cli.lower, cli.upper),
        };
        let plan = BatchPlan {
            dim: cli.dim,
            popsize: cli.popsize,
            lower,
            upper,
            maxiter: cli.maxiter,
            runs: cli.runs,
            seed: cli.seed,
            updating: cli.updating,
            parallel: !cli.sequential,
            record_dir: if cli.record { output_dir.clone() } else { None },
        };

        println!("\n====================================================");
        println!("                FUNCTION {}", name);
        println!("====================================================");

        for preset in &presets {
            let summary = run_preset(&objective, &name, preset, &plan)?;
            print_summary(&summary);
            summaries.push(summary);
        }
    }

    println!("\n====================================================");
    println!("TOTAL EXECUTION TIME: {:.2} seconds", start.elapsed().as_secs_f64());
    println!("====================================================");

    if let Some(dir) = &output_dir {
        let csv_path = dir.join("results.csv");
        write_summary_csv(&csv_path, &summaries)?;
        println!("Results saved to {}", csv_path.display());
        if cli.json {
            let json_path = dir.join("summary.json");
            write_summary_json(&json_path, &summaries)?;
            println!("Summary saved to {}", json_path.display());
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
