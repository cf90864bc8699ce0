use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::constants::DEFAULT_REPETITIONS;

/// Menu Combo — list affordable menu combinations and chart brute-force complexity.
#[derive(Parser, Debug)]
#[command(name = "menu_combo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every menu combination that fits the budget.
    Combos {
        /// Menu as comma-separated name:price pairs. Prompted when omitted.
        #[arg(short, long)]
        items: Option<String>,

        /// Budget in whole currency units. Prompted when omitted.
        #[arg(short, long, allow_hyphen_values = true)]
        budget: Option<String>,

        #[arg(long, value_enum, default_value_t = ListingFormat::Text)]
        format: ListingFormat,
    },

    /// Time iterative vs recursive enumeration for every menu prefix.
    Analyze {
        #[command(flatten)]
        source: MenuSource,

        /// Runs per procedure per prefix size.
        #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
        repetitions: usize,

        #[arg(long, value_enum, default_value_t = SeriesFormat::Text)]
        format: SeriesFormat,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Combos {
            items: None,
            budget: None,
            format: ListingFormat::Text,
        }
    }
}

/// Where the analyzed menu comes from.
#[derive(Args, Debug)]
pub struct MenuSource {
    /// Menu as comma-separated name:price pairs. Prompted when omitted.
    #[arg(short, long, conflicts_with = "random")]
    pub items: Option<String>,

    /// Generate a demo menu with this many items instead.
    #[arg(long)]
    pub random: Option<usize>,

    /// Seed for the generated demo menu.
    #[arg(long, default_value = "123")]
    pub seed: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesFormat {
    /// Summary plus terminal chart.
    Text,
    Json,
    Csv,
}
