//! Illustration Calculators CLI
//!
//! Command-line interface for running a single calculator illustration

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use illustration_calculators::{
    format::{format_compact_currency, format_currency, format_percent},
    inputs::{Clamp, ClampWarning},
    EstateInput, Gender, IllustrationAssumptions, PuaInput, PuaProjection, RopInput,
    ScenarioRunner, TermInput,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "illustrate", version, about = "Life insurance illustration calculators")]
struct Cli {
    /// Directory holding illustration_rates.csv (published constants if omitted)
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recommend a level term length
    Term(TermArgs),
    /// Compare return-of-premium and traditional term
    Rop(RopArgs),
    /// Project cash value with and without paid-up additions
    Pua(PuaArgs),
    /// Estimate estate tax and ILIT coverage
    Estate(EstateArgs),
}

#[derive(Args)]
struct TermArgs {
    #[arg(long, default_value_t = 35)]
    age: i32,
    #[arg(long, default_value_t = 500_000.0)]
    coverage: f64,
    #[arg(long, default_value_t = 20)]
    mortgage_years: i32,
    #[arg(long, default_value_t = 5)]
    youngest_child_age: i32,
}

#[derive(Args)]
struct RopArgs {
    #[arg(long, default_value_t = 500_000.0)]
    coverage: f64,
    #[arg(long, default_value_t = 20)]
    term_years: i32,
    #[arg(long, default_value_t = 35)]
    age: i32,
    /// male or female
    #[arg(long, default_value = "male")]
    gender: Gender,
}

#[derive(Args)]
struct PuaArgs {
    #[arg(long, default_value_t = 3_600.0)]
    base_premium: f64,
    #[arg(long, default_value_t = 5_000.0)]
    annual_pua: f64,
    #[arg(long, default_value_t = 20)]
    years: u32,
    /// Write the year-by-year schedule to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args)]
struct EstateArgs {
    #[arg(long, default_value_t = 20_000_000.0)]
    estate_value: f64,
    #[arg(long)]
    married: bool,
    /// State estate tax rate in percent
    #[arg(long, default_value_t = 0.0)]
    state_rate: f64,
    #[arg(long, default_value_t = 0.0)]
    coverage: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = match &cli.assumptions {
        Some(dir) => IllustrationAssumptions::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None => IllustrationAssumptions::default_illustration(),
    };
    let runner = ScenarioRunner::with_assumptions(assumptions);
    let calculators = runner.calculators();
    let bounds = runner.bounds();

    match cli.command {
        Command::Term(args) => {
            let clamped = TermInput::new(args.age, args.coverage, args.mortgage_years, args.youngest_child_age)
                .clamp_to(bounds);
            let rec = calculators.recommend_term(&clamped.input);
            if cli.json {
                return print_json(&rec);
            }
            print_warnings(&clamped.warnings);

            println!("Term Length Recommendation");
            println!("==========================\n");
            println!("  Recommended term:  {} years", rec.primary_term);
            println!("  Alternative term:  {} years", rec.alternative_term);
            println!("  Coverage ends at:  age {}", rec.coverage_end_age);
            println!("  Est. monthly:      {}", format_currency(rec.monthly_estimate));
            println!("\n  {}", rec.reason);
        }
        Command::Rop(args) => {
            let clamped = RopInput::new(args.coverage, args.term_years, args.age, args.gender)
                .clamp_to(bounds);
            let cmp = calculators.compare_rop(&clamped.input);
            if cli.json {
                return print_json(&cmp);
            }
            print_warnings(&clamped.warnings);

            println!("Return of Premium Comparison ({} years)", clamped.input.term_years);
            println!("========================================\n");
            println!("{:<22} {:>14} {:>14}", "", "Traditional", "ROP");
            println!("{:<22} {:>14} {:>14}", "Monthly premium",
                format_currency(cmp.traditional_monthly), format_currency(cmp.rop_monthly));
            println!("{:<22} {:>14} {:>14}", "Total paid",
                format_currency(cmp.total_traditional_paid), format_currency(cmp.total_rop_paid));
            println!("{:<22} {:>14} {:>14}", "Returned at term end",
                format_currency(0.0), format_currency(cmp.refund_amount));
            println!("\n  Investing the {} monthly difference at {} instead grows to {}",
                format_currency(cmp.monthly_difference()),
                format_percent(calculators.assumptions().rop.alternative_return * 100.0),
                format_currency(cmp.investment_alternative));
        }
        Command::Pua(args) => {
            let clamped = PuaInput::new(args.base_premium, args.annual_pua, args.years).clamp_to(bounds);
            let projection = calculators.project_pua(&clamped.input);

            if let Some(path) = &args.csv {
                write_pua_csv(path, &projection)
                    .with_context(|| format!("Unable to write {}", path.display()))?;
            }
            if cli.json {
                return print_json(&projection);
            }
            print_warnings(&clamped.warnings);

            println!("Paid-Up Addition Projection");
            println!("===========================\n");
            println!("{:>4} {:>14} {:>14} {:>14} {:>7} {:>14}",
                "Year", "Base Only", "With PUA", "Difference", "Gain", "DB Increase");
            println!("{}", "-".repeat(72));
            for year in &projection.years {
                println!("{:>4} {:>14} {:>14} {:>14} {:>7} {:>14}",
                    year.year,
                    format_currency(year.base_only_cash_value),
                    format_currency(year.with_pua_cash_value),
                    format_currency(year.difference),
                    format_percent(year.percentage_gain),
                    format_currency(year.total_death_benefit_increase),
                );
            }

            let summary = projection.summary();
            println!("\nSummary:");
            println!("  Premiums (base only): {}", format_compact_currency(summary.base_total_premiums));
            println!("  Premiums (with PUA):  {}", format_compact_currency(summary.with_pua_total_premiums));
            println!("  Final cash value:     {} vs {}",
                format_compact_currency(summary.final_with_pua_cash_value),
                format_compact_currency(summary.final_base_only_cash_value));
            if let Some(path) = &args.csv {
                println!("\nFull schedule written to: {}", path.display());
            }
        }
        Command::Estate(args) => {
            let clamped = EstateInput::new(args.estate_value, args.married, args.state_rate, args.coverage)
                .clamp_to(bounds);
            let analysis = calculators.analyze_estate(&clamped.input);
            if cli.json {
                return print_json(&analysis);
            }
            print_warnings(&clamped.warnings);

            println!("Estate Tax Analysis");
            println!("===================\n");
            println!("  Exemption:          {}", format_compact_currency(analysis.effective_exemption));
            println!("  Taxable estate:     {}", format_compact_currency(analysis.taxable_estate));
            println!("  Federal tax:        {}", format_currency(analysis.federal_tax));
            println!("  State tax:          {}", format_currency(analysis.state_tax));
            println!("  Total tax:          {}", format_currency(analysis.total_tax));
            println!("  Paid by ILIT:       {} ({})",
                format_currency(analysis.tax_covered_by_insurance), format_percent(analysis.percent_covered));
            println!("  Left for the heirs: {}", format_currency(analysis.remaining_tax_burden));
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_warnings(warnings: &[ClampWarning]) {
    for w in warnings {
        println!("Note: {} adjusted from {} to {}", w.field, w.requested, w.applied);
    }
    if !warnings.is_empty() {
        println!();
    }
}

fn write_pua_csv(path: &Path, projection: &PuaProjection) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "Year",
        "BaseOnlyCashValue",
        "WithPuaCashValue",
        "Difference",
        "PercentageGain",
        "TotalDeathBenefitIncrease",
        "BaseTotalPremiums",
        "WithPuaTotalPremiums",
    ])?;

    for year in &projection.years {
        writer.write_record(&[
            year.year.to_string(),
            format!("{:.0}", year.base_only_cash_value),
            format!("{:.0}", year.with_pua_cash_value),
            format!("{:.0}", year.difference),
            format!("{:.0}", year.percentage_gain),
            format!("{:.0}", year.total_death_benefit_increase),
            format!("{:.2}", year.base_total_premiums),
            format!("{:.2}", year.with_pua_total_premiums),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
