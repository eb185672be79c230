//! Terminal front end for the compound interest engine.
//!
//! # Usage
//!
//! ```bash
//! # Fully specified
//! cargo run --bin calc -- compute --principal 1000000 --rate 10 --years 1
//!
//! # Prompt for missing fields
//! cargo run --bin calc -- compute
//!
//! # Machine-readable output
//! cargo run --bin calc -- compute -p 1000000 -r 12 -m 6 --json
//!
//! # Show the period conversion in use
//! cargo run --bin calc -- convention
//! ```
//!
//! # Environment Variables
//!
//! - `MAX_PERIOD_YEARS`, `MAX_PERIOD_MONTHS`, `MAX_PERIOD_DAYS`: period limits
//!   (same defaults as the HTTP service)

use compound_interest::api::dto::calculate::CalculateResponse;
use compound_interest::application::services::{Calculation, CalculatorService, RawCalculationInput};
use compound_interest::config::Config;
use compound_interest::engine::{ValidationError, period::CONVENTION};
use compound_interest::utils::currency_format::{format_cop, result_message};
use compound_interest::utils::numeric_input::is_valid_numeric_input;
use compound_interest::utils::period_bounds::PeriodBounds;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::process::ExitCode;

/// Compound interest calculator.
#[derive(Parser)]
#[command(name = "calc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate interest earned and final amount
    Compute(ComputeArgs),

    /// Show how periods are converted to years
    Convention,
}

#[derive(Args)]
struct ComputeArgs {
    /// Initial capital; currency symbols and separators are ignored
    #[arg(short, long)]
    principal: Option<String>,

    /// Annual interest rate in percent
    #[arg(short, long)]
    rate: Option<String>,

    /// Period in years
    #[arg(short, long)]
    years: Option<String>,

    /// Period in months
    #[arg(short, long)]
    months: Option<String>,

    /// Period in days
    #[arg(short, long)]
    days: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compute(args) => compute(args),
        Commands::Convention => {
            println!("{}", "📅 Period convention".bright_blue().bold());
            println!();
            println!("  {}", CONVENTION.cyan());
            println!("  Compounding: {}", "annual".cyan());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Collects missing fields, validates and prints the result.
///
/// # Flow
///
/// 1. Prompt for principal and rate when not given as flags
/// 2. Prompt for the whole period when no period flag is given
/// 3. Normalize, check period bounds, compute
/// 4. Print a summary (or JSON) and exit `0`, or a notice and exit `1`
fn compute(args: ComputeArgs) -> Result<ExitCode> {
    let bounds = load_period_bounds();

    let principal = field_or_prompt(args.principal, "Capital inicial")?;
    let rate = field_or_prompt(args.rate, "Tasa de interés anual (%)")?;

    let (years, months, days) =
        if args.years.is_none() && args.months.is_none() && args.days.is_none() {
            (
                prompt_numeric("Años", "0")?,
                prompt_numeric("Meses", "0")?,
                prompt_numeric("Días", "0")?,
            )
        } else {
            (
                args.years.unwrap_or_default(),
                args.months.unwrap_or_default(),
                args.days.unwrap_or_default(),
            )
        };

    let raw = RawCalculationInput {
        principal: &principal,
        rate: &rate,
        years: &years,
        months: &months,
        days: &days,
    };

    match run_calculation(&CalculatorService::new(), &raw, &bounds) {
        Ok(calculation) => {
            if args.json {
                let response = CalculateResponse::from(&calculation);
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_summary(&calculation);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(notice) => {
            eprintln!("{} {}", "⚠️ ".yellow(), notice.yellow().bold());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Reads only the period limits; server settings such as `LOG_FORMAT` are
/// not validated here.
fn load_period_bounds() -> PeriodBounds {
    Config::from_env().period_bounds
}

/// Runs the calculation, turning any rejection into a user-facing notice.
fn run_calculation(
    service: &CalculatorService,
    raw: &RawCalculationInput<'_>,
    bounds: &PeriodBounds,
) -> Result<Calculation, String> {
    let input = service.normalize(raw).map_err(|e| match e {
        ValidationError::InvalidNumber(_) => {
            format!("Por favor, ingresa valores válidos. {}", e)
        }
        ValidationError::NoPeriod => format!("Por favor, ingresa un período. {}", e),
    })?;

    bounds.check(&input.period).map_err(|e| e.to_string())?;

    Ok(service.evaluate(input))
}

fn field_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => prompt_numeric(prompt, ""),
    }
}

fn prompt_numeric(prompt: &str, initial: &str) -> Result<String> {
    let value = Input::<String>::new()
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), &str> {
            if is_valid_numeric_input(input) {
                Ok(())
            } else {
                Err("Solo números y un punto decimal")
            }
        })
        .interact_text()?;

    Ok(value)
}

/// Prints the calculation.
///
/// # Output Format
///
/// ```text
/// 💰 Resultado
///
///   Capital:          $ 1.000.000,00
///   Tasa anual:       10%
///   Período:          1 años, 0 meses, 0 días (1.0000 años)
///   Monto final:      $ 1.100.000,00
///   Interés ganado:   $ 100.000,00
///
///   El interés ganado será: $ 100.000,00 COP
/// ```
fn print_summary(calculation: &Calculation) {
    let input = &calculation.input;
    let result = &calculation.result;

    println!();
    println!("{}", "💰 Resultado".bright_blue().bold());
    println!();
    println!(
        "  {:<17} {}",
        "Capital:",
        format_cop(input.principal.value()).cyan()
    );
    println!("  {:<17} {}", "Tasa anual:", input.rate.to_string().cyan());
    println!(
        "  {:<17} {} años, {} meses, {} días {}",
        "Período:",
        input.period.years,
        input.period.months,
        input.period.days,
        format!("({:.4} años)", calculation.elapsed_years).bright_black()
    );
    println!(
        "  {:<17} {}",
        "Monto final:",
        format_cop(result.final_amount.value()).bright_white().bold()
    );

    let interest = result.interest_earned.value();
    let interest_text = format_cop(interest);
    let interest_text = if interest < 0.0 {
        interest_text.red()
    } else {
        interest_text.green()
    };
    println!("  {:<17} {}", "Interés ganado:", interest_text.bold());
    println!();
    println!("  {}", result_message(interest).bright_white());
    println!();
}
