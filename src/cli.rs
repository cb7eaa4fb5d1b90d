mod compare;
mod process;
mod rates;
mod settings;

use clap::{Parser, Subcommand};

pub use self::{
    compare::{CompareArgs, compare},
    process::{ProcessArgs, process},
    rates::{RatesArgs, rates},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: compare Norgespris against strømstøtte for a year of
    /// consumption.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Show the historical monthly averages for a zone.
    #[clap(name = "rates")]
    Rates(Box<RatesArgs>),

    /// Aggregate cached hourly prices into the rate table asset.
    #[clap(name = "process")]
    Process(Box<ProcessArgs>),
}
