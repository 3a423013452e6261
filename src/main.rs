mod amount;
mod bank;
mod error;
mod report;
mod simulation;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::{
    amount::parse_amount,
    error::LedgerError,
    report::CsvExport,
    simulation::{Params, Simulation},
};

/// Simulates a bank reinvesting its turn profits in short fixed-term investments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of simulated days; day 0 is not reported
    #[arg(long, default_value_t = 60)]
    days: u32,

    /// Profit-making turns per day; each invests part of its profit
    #[arg(long, default_value_t = 8)]
    turns_per_day: u32,

    /// Daily interest rate on every outstanding investment
    #[arg(long, default_value_t = 0.05)]
    interest_rate: f64,

    /// Days an investment accrues before it is paid out
    #[arg(long, default_value_t = 2)]
    term_days: u32,

    /// Starting profit per turn, e.g. 5M or 5_000_000
    #[arg(long, default_value = "5M", value_parser = parse_amount)]
    profit_per_turn: i64,

    /// Daily growth applied to the profit per turn
    #[arg(long, default_value_t = 0.05)]
    profit_growth: f64,

    /// Share of each turn's profit that is invested
    #[arg(long, default_value_t = 0.5)]
    invest_portion: f64,

    /// Share of each day's returns that is reinvested
    #[arg(long, default_value_t = 0.7)]
    reinvest_portion: f64,

    /// Also write the daily reports to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the remaining book after the last day
    #[arg(long)]
    show_book: bool,
}

impl From<&Args> for Params {
    fn from(args: &Args) -> Self {
        Params {
            days: args.days,
            turns_per_day: args.turns_per_day,
            interest_rate: args.interest_rate,
            term_days: args.term_days,
            profit_per_turn: args.profit_per_turn as f64,
            profit_growth: args.profit_growth,
            invest_portion: args.invest_portion,
            reinvest_portion: args.reinvest_portion,
        }
    }
}

fn main() -> Result<(), LedgerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut simulation = Simulation::new(Params::from(&args));

    let mut export = args.csv.as_deref().map(CsvExport::create).transpose()?;
    for report in simulation.by_ref() {
        let report = report?;
        println!("{}", report);
        if let Some(export) = export.as_mut() {
            export.write(&report)?;
        }
    }
    if let Some(export) = export {
        export.finish()?;
    }
    if args.show_book {
        if simulation.bank().is_empty() {
            println!("book is empty");
        } else {
            println!("{}", simulation.bank());
        }
    }
    Ok(())
}
