use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "compass",
    version,
    about = "Familiar-company onboarding: rank public companies from brand affinities"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory containing compass.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the onboarding questions and their choices
    Choices(ChoicesCommand),
    /// Rank the shortlist for a selection
    Rank(RankCommand),
    /// Check catalog and config integrity
    Validate,
    /// Hand the selection off to portfolio construction (placeholder)
    Continue(ContinueCommand),
    /// Connect extra signals to improve accuracy (placeholder)
    Boost,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CategoryArg {
    Ecosystem,
    Membership,
    LocalCommerce,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args, Default)]
pub struct SelectionArgs {
    /// Tech ecosystem choice id (e.g. apple)
    #[arg(long)]
    pub ecosystem: Option<String>,
    /// Membership choice id (e.g. costco)
    #[arg(long)]
    pub membership: Option<String>,
    /// Local commerce choice id (e.g. uber)
    #[arg(long)]
    pub local_commerce: Option<String>,
}

#[derive(Args)]
pub struct ChoicesCommand {
    #[arg(long, value_enum)]
    pub category: Option<CategoryArg>,
}

#[derive(Args)]
pub struct RankCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Print text labels instead of remote logo URLs
    #[arg(long, conflicts_with = "logo_base_url")]
    pub no_logos: bool,
    /// Logo service base URL; images are keyed by company domain
    #[arg(long, default_value = crate::logo::CLEARBIT_BASE)]
    pub logo_base_url: String,
}

#[derive(Args)]
pub struct ContinueCommand {
    #[command(flatten)]
    pub selection: SelectionArgs,
}
