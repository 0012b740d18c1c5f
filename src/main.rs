//! Feasibility System CLI
//!
//! Evaluates an investment scenario and exports the report tables

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use feasibility_system::assumptions::ScenarioAssumptions;
use feasibility_system::projection::{evaluate_scenario, CashFlowRow};
use feasibility_system::report::{
    build_cost_breakdown, build_summary, CostBreakdownRow, CsvExporter, SummaryRow,
};

#[derive(Parser, Debug)]
#[command(
    name = "feasibility_system",
    about = "Discounted cash-flow feasibility analysis"
)]
struct Args {
    /// Scenario definition JSON; defaults to the built-in lime plant case
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override both cost schedules from CSV tables in this directory
    #[arg(long)]
    costs_dir: Option<PathBuf>,

    /// Base directory for exported CSV tables
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Emit one JSON document instead of console tables
    #[arg(long)]
    json: bool,

    /// Skip the CSV export
    #[arg(long)]
    no_export: bool,
}

#[derive(Serialize)]
struct AnalysisResponse<'a> {
    scenario: &'a str,
    horizon_years: u32,
    npv: f64,
    irr: Option<f64>,
    payback_years: Option<f64>,
    summary: &'a [SummaryRow],
    cash_flows: &'a [CashFlowRow],
    cost_breakdown: &'a [CostBreakdownRow],
    execution_time_ms: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let mut scenario = match &args.scenario {
        Some(path) => ScenarioAssumptions::from_json_path(path)
            .with_context(|| format!("failed to load scenario from {}", path.display()))?,
        None => ScenarioAssumptions::lime_plant(),
    };

    if let Some(dir) = &args.costs_dir {
        scenario = scenario
            .with_costs_from_dir(dir)
            .with_context(|| format!("failed to load cost tables from {}", dir.display()))?;
    }

    let result = evaluate_scenario(&scenario);
    let summary = build_summary(&scenario, &result);
    let breakdown = build_cost_breakdown(scenario.operating_costs());

    if args.json {
        let response = AnalysisResponse {
            scenario: scenario.name(),
            horizon_years: scenario.financial().horizon_years(),
            npv: result.npv,
            irr: result.irr,
            payback_years: result.payback_years,
            summary: &summary,
            cash_flows: &result.cash_flows,
            cost_breakdown: &breakdown,
            execution_time_ms: start.elapsed().as_millis() as u64,
        };
        println!("{}", serde_json::to_string(&response)?);
        return Ok(());
    }

    println!("Feasibility System v0.1.0");
    println!("=========================\n");

    println!("Scenario: {}", scenario.name());
    println!("  Initial Investment: {:.2}", scenario.investment().total());
    println!("  Working Capital:    {:.2}", scenario.working_capital());
    println!(
        "  Annual Revenue:     {:.2}",
        scenario.production().annual_revenue()
    );
    println!(
        "  Annual Op. Costs:   {:.2}",
        scenario.operating_costs().total()
    );
    println!(
        "  Tax / Inflation / Discount: {:.0}% / {:.0}% / {:.0}%",
        scenario.financial().tax_rate() * 100.0,
        scenario.financial().inflation_rate() * 100.0,
        scenario.financial().discount_rate() * 100.0
    );
    println!();

    println!("Projection ({} years):", scenario.financial().horizon_years());
    println!(
        "{:>4} {:>18} {:>18} {:>18} {:>16} {:>18} {:>18}",
        "Year", "Revenue", "OpCosts", "EBIT", "Tax", "NetCF", "Cumulative"
    );
    println!("{}", "-".repeat(116));

    for row in &result.cash_flows {
        println!(
            "{:>4} {:>18.2} {:>18.2} {:>18.2} {:>16.2} {:>18.2} {:>18.2}",
            row.year,
            row.revenue,
            row.operating_costs,
            row.ebit,
            row.tax,
            row.nominal,
            row.cumulative
        );
    }

    println!("\nOperating Cost Breakdown:");
    for row in &breakdown {
        println!(
            "  {:<22} {:>18.2}  {:>6.2}%",
            row.category, row.annual_amount, row.share_of_total_pct
        );
    }

    println!("\nSummary:");
    println!("  NPV:     {:.2}", result.npv);
    match result.irr {
        Some(irr) => println!("  IRR:     {:.2}%", irr * 100.0),
        None => println!("  IRR:     undefined (no sign change in cash flows)"),
    }
    match result.payback_years {
        Some(years) => println!("  Payback: {:.2} years", years),
        None => println!("  Payback: not reached within the horizon"),
    }

    if !args.no_export {
        let exporter = CsvExporter::new(&args.output_dir)?;
        exporter.export_all(&summary, &result.cash_flows, &breakdown)?;
        println!(
            "\nReport tables written to: {}",
            exporter.output_dir().display()
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
