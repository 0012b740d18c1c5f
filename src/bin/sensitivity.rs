//! Discount and inflation sensitivity sweep
//!
//! Evaluates a scenario over a grid of financial-parameter variants, keeping
//! the cost base fixed, and writes the NPV surface to CSV.
//! Supports JSON output for API integration via --json flag.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use feasibility_system::{FinancialParameters, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(
    name = "sensitivity",
    about = "NPV sensitivity to discount and inflation rates"
)]
struct Args {
    /// Scenario definition JSON; defaults to the built-in lime plant case
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Output CSV path for the sweep results
    #[arg(long, default_value = "sensitivity.csv")]
    output: PathBuf,

    /// Lowest discount rate in the sweep
    #[arg(long, default_value_t = 0.05)]
    discount_min: f64,

    /// Highest discount rate in the sweep
    #[arg(long, default_value_t = 0.20)]
    discount_max: f64,

    /// Number of discount-rate steps
    #[arg(long, default_value_t = 16)]
    discount_steps: usize,

    /// Lowest inflation rate in the sweep
    #[arg(long, default_value_t = 0.0)]
    inflation_min: f64,

    /// Highest inflation rate in the sweep
    #[arg(long, default_value_t = 0.10)]
    inflation_max: f64,

    /// Number of inflation-rate steps
    #[arg(long, default_value_t = 11)]
    inflation_steps: usize,

    /// Emit one JSON document instead of console output
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Clone)]
struct SweepPoint {
    inflation_rate: f64,
    discount_rate: f64,
    npv: f64,
    irr: Option<f64>,
    payback_years: Option<f64>,
}

#[derive(Serialize)]
struct SweepResponse<'a> {
    scenario: &'a str,
    variant_count: usize,
    best: SweepPoint,
    worst: SweepPoint,
    points: &'a [SweepPoint],
    execution_time_ms: u64,
}

fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
    if steps <= 1 {
        return vec![min];
    }
    (0..steps)
        .map(|i| min + (max - min) * i as f64 / (steps - 1) as f64)
        .collect()
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let runner = match &args.scenario {
        Some(path) => ScenarioRunner::from_json_path(path)
            .with_context(|| format!("failed to load scenario from {}", path.display()))?,
        None => ScenarioRunner::new(),
    };

    // Tax rate and horizon come from the scenario; only the swept rates vary
    let base = *runner.assumptions().financial();
    let inflations = linspace(args.inflation_min, args.inflation_max, args.inflation_steps);
    let discounts = linspace(args.discount_min, args.discount_max, args.discount_steps);

    let mut variants = Vec::with_capacity(inflations.len() * discounts.len());
    for &inflation in &inflations {
        for &discount in &discounts {
            let params =
                FinancialParameters::new(base.tax_rate(), inflation, discount, base.horizon_years())
                    .context("sweep bounds fall outside the valid rate domain")?;
            variants.push(params);
        }
    }

    if !args.json {
        println!(
            "Sweeping {} variants ({} inflation x {} discount) for scenario '{}'...",
            variants.len(),
            inflations.len(),
            discounts.len(),
            runner.assumptions().name()
        );
    }

    let sweep_start = Instant::now();

    // run_scenarios evaluates in parallel and preserves variant order
    let results = runner.run_scenarios(&variants);
    let points: Vec<SweepPoint> = variants
        .iter()
        .zip(results)
        .map(|(&params, result)| SweepPoint {
            inflation_rate: params.inflation_rate(),
            discount_rate: params.discount_rate(),
            npv: result.npv,
            irr: result.irr,
            payback_years: result.payback_years,
        })
        .collect();

    if !args.json {
        println!("Sweep complete in {:?}", sweep_start.elapsed());
    }

    let best = points
        .iter()
        .max_by(|a, b| a.npv.total_cmp(&b.npv))
        .expect("sweep produced no variants")
        .clone();
    let worst = points
        .iter()
        .min_by(|a, b| a.npv.total_cmp(&b.npv))
        .expect("sweep produced no variants")
        .clone();

    // Write the sweep table
    let mut file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output.display()))?;
    writeln!(file, "Inflation,Discount,NPV,IRR,PaybackYears")?;
    for point in &points {
        writeln!(
            file,
            "{:.4},{:.4},{:.2},{},{}",
            point.inflation_rate,
            point.discount_rate,
            point.npv,
            point.irr.map_or(String::new(), |v| format!("{:.6}", v)),
            point
                .payback_years
                .map_or(String::new(), |v| format!("{:.4}", v)),
        )?;
    }

    let execution_time_ms = start.elapsed().as_millis() as u64;

    if args.json {
        let response = SweepResponse {
            scenario: runner.assumptions().name(),
            variant_count: points.len(),
            best,
            worst,
            points: &points,
            execution_time_ms,
        };
        println!("{}", serde_json::to_string(&response)?);
    } else {
        println!("\n========================================");
        println!(
            "  BEST NPV:  {:.2}  (inflation {:.1}%, discount {:.1}%)",
            best.npv,
            best.inflation_rate * 100.0,
            best.discount_rate * 100.0
        );
        println!(
            "  WORST NPV: {:.2}  (inflation {:.1}%, discount {:.1}%)",
            worst.npv,
            worst.inflation_rate * 100.0,
            worst.discount_rate * 100.0
        );
        println!("========================================");

        println!("\nResults written to: {}", args.output.display());
        println!("Total time: {:?}", start.elapsed());
    }

    Ok(())
}
