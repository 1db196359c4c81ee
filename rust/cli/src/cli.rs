//! Command-line definitions for the `drawodds` binary.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "drawodds",
    version,
    about = "Opening-hand probability calculator for card games"
)]
pub struct DrawoddsCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Where the deck and groups come from. With `--preset` or `--scenario`,
/// `--deck`/`--hand` still override the loaded deck.
#[derive(Args, Debug, Clone, Default)]
pub struct DeckArgs {
    /// Cards in the deck
    #[arg(long)]
    pub deck: Option<u32>,
    /// Cards in the opening hand
    #[arg(long)]
    pub hand: Option<u32>,
    /// Card group as [NAME=]COPIES[:MIN[:MAX]]; repeat for more groups
    #[arg(long = "group", short = 'g', value_name = "SPEC")]
    pub groups: Vec<String>,
    /// Start from a prebuilt example (see `drawodds presets`)
    #[arg(long, conflicts_with = "scenario")]
    pub preset: Option<String>,
    /// Load deck and groups from a JSON file
    #[arg(long, value_name = "FILE")]
    pub scenario: Option<String>,
}

/// How the series sweeps copy counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SweepMode {
    /// Sweep the first group with copies; grow the deck when needed
    Focused,
    /// Sweep every group with copies together
    Scaled,
}

impl SweepMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SweepMode::Focused => "focused",
            SweepMode::Scaled => "scaled",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probability that the opening hand satisfies every group
    Calc {
        #[command(flatten)]
        input: DeckArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Probability as a group's copy count goes from 1 to --max
    Series {
        #[command(flatten)]
        input: DeckArgs,
        /// Highest copy count to evaluate
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
        max: Option<u32>,
        #[arg(long, value_enum, default_value_t = SweepMode::Focused)]
        mode: SweepMode,
        #[arg(long)]
        json: bool,
    },
    /// List the prebuilt examples with their probabilities
    Presets {
        #[arg(long)]
        json: bool,
    },
    /// Chance of opening at least one starter, by starter count
    Starters {
        #[arg(long)]
        deck: Option<u32>,
        #[arg(long)]
        hand: Option<u32>,
        #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(1..=100))]
        max: u32,
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
