//! Sluice gate flow calculator.
//!
//! Computes discharge through a bank of sixteen sluice gates with the
//! V.T. Chow and Corps reference formulas, and prints, exports or plots the
//! comparison.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Sluice gate flow calculator
#[derive(Parser)]
#[command(name = "sluice")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sluice gate flow calculator", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the bank and print the results table
    Run(commands::run::RunArgs),
    /// Evaluate both formulas for a single gate
    Calc(commands::calc::CalcArgs),
    /// Write the results table as CSV
    Export(commands::export::ExportArgs),
    /// Open the chart window
    Plot(commands::plot::PlotArgs),
    /// Write a default configuration file
    Init(commands::init::InitArgs),
    /// Describe the formulas and their parameters
    Info(commands::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = cli.log_level.parse::<Level>().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run(args) => commands::run::execute(&args),
        Commands::Calc(args) => commands::calc::execute(&args),
        Commands::Export(args) => commands::export::execute(&args),
        Commands::Plot(args) => commands::plot::execute(&args),
        Commands::Init(args) => commands::init::execute(&args),
        Commands::Info(args) => commands::info::execute(&args),
    }
}
