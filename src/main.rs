//! Loan Projection CLI
//!
//! Command-line interface for projecting a student loan balance

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use loan_projection::{LoanSimulator, LoanTerms, SalaryGrowth, SimulationResult};
use loan_projection::projection::parse_start_date;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum CliSalaryGrowth {
    RpiLinked,
    Fixed,
    Frozen,
}

#[derive(Debug, Parser)]
#[command(name = "loan_projection", version, about = "Project an income-contingent loan balance month by month")]
struct Cli {
    /// Outstanding balance at the start date
    #[arg(long)]
    balance: f64,

    /// Start date as DD/MM/YYYY
    #[arg(long)]
    start_date: String,

    /// Annual salary at the start date
    #[arg(long)]
    salary: f64,

    /// JSON file overriding the default loan terms
    #[arg(long)]
    terms: Option<PathBuf>,

    /// Salary growth model, overriding the terms file
    #[arg(long, value_enum)]
    growth: Option<CliSalaryGrowth>,

    /// Annual growth rate used with `--growth fixed`
    #[arg(long, default_value_t = 0.05)]
    growth_rate: f64,

    /// Write the full schedule to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of months to print
    #[arg(long, default_value_t = 24)]
    show: usize,
}

fn load_terms(cli: &Cli) -> Result<LoanTerms> {
    let mut terms = match &cli.terms {
        Some(path) => LoanTerms::from_json_path(path)
            .with_context(|| format!("loading terms from {}", path.display()))?,
        None => LoanTerms::default(),
    };

    if let Some(growth) = cli.growth {
        terms.salary_growth = match growth {
            CliSalaryGrowth::RpiLinked => SalaryGrowth::default(),
            CliSalaryGrowth::Fixed => SalaryGrowth::Fixed { rate: cli.growth_rate },
            CliSalaryGrowth::Frozen => SalaryGrowth::Frozen,
        };
    }

    Ok(terms)
}

fn write_csv(result: &SimulationResult, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for snapshot in &result.snapshots {
        writer.serialize(snapshot)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let terms = load_terms(&cli)?;
    let start_date = parse_start_date(&cli.start_date)?;

    println!("Loan Projection v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");
    println!("  Starting balance: {:.2}", cli.balance);
    println!("  Start date:       {}", start_date.format("%d/%m/%Y"));
    println!("  Starting salary:  {:.2}", cli.salary);
    println!("  Salary growth:    {:.2}% a year", terms.salary_growth.annual_rate(terms.interest.rpi) * 100.0);
    println!();

    let simulator = LoanSimulator::new(terms);
    let result = simulator.simulate(cli.balance, start_date, cli.salary)?;

    println!("{:>10} {:>14} {:>10} {:>10}", "Date", "Balance", "Interest", "Payment");
    println!("{}", "-".repeat(47));
    for snapshot in result.snapshots.iter().take(cli.show) {
        println!(
            "{:>10} {:>14.2} {:>10.2} {:>10.2}",
            snapshot.date.format("%d/%m/%Y"),
            snapshot.balance,
            snapshot.interest_accrued,
            snapshot.payment,
        );
    }
    if result.len() > cli.show {
        println!("... ({} more months)", result.len() - cli.show);
    }

    if let Some(path) = &cli.output {
        write_csv(&result, path)?;
        println!("\nFull schedule written to: {}", path.display());
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Months simulated: {}", summary.months_simulated);
    println!("  Total interest:   {:.2}", summary.total_interest);
    println!("  Total paid:       {:.2}", summary.total_paid);
    println!("  Final balance:    {:.2}", summary.final_balance);
    match summary.repaid_on {
        Some(date) => println!("  Repaid on:        {}", date.format("%d/%m/%Y")),
        None => println!("  Written off:      {:.2}", summary.written_off),
    }

    Ok(())
}
