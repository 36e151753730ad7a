mod catalog;
mod cli;
mod config;
mod error;
mod logging;
mod logo;
mod onboarding;
mod report;
mod scoring;
mod types;

use crate::catalog::Category;
use crate::error::CompassError;
use crate::logo::{ClearbitLogos, LogoResolver, TextLogos};
use crate::onboarding::Selection;
use crate::scoring::Scorer;
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn resolve_selection(args: &cli::SelectionArgs) -> Result<Selection, CompassError> {
    Selection::resolve(
        args.ecosystem.as_deref(),
        args.membership.as_deref(),
        args.local_commerce.as_deref(),
    )
}

fn run() -> Result<i32, CompassError> {
    let cli = cli::Cli::parse();
    logging::init_tracing(cli.verbose, cli.quiet);

    // Fail fast on catalog or config integrity problems before any command.
    let loaded = config::load_config(&cli.root)?;
    let scorer = Scorer::from_config(&loaded.clone().unwrap_or_default())?;

    match cli.command {
        cli::Commands::Choices(cmd) => {
            let categories = match cmd.category {
                Some(cli::CategoryArg::Ecosystem) => vec![Category::Ecosystem],
                Some(cli::CategoryArg::Membership) => vec![Category::Membership],
                Some(cli::CategoryArg::LocalCommerce) => vec![Category::LocalCommerce],
                None => Category::ALL.to_vec(),
            };
            for (index, category) in categories.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                println!("{} [{}]", category.question(), category);
                for choice in category.choices() {
                    println!("- {}: {}", choice.id, choice.label);
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Rank(cmd) => {
            let selection = resolve_selection(&cmd.selection)?;
            let logos: Box<dyn LogoResolver> = if cmd.no_logos {
                Box::new(TextLogos)
            } else {
                Box::new(ClearbitLogos::with_base_url(cmd.logo_base_url.as_str()))
            };
            let shortlist = report::build(&selection, &scorer, logos.as_ref());

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&shortlist, output_format)?;
            println!("{rendered}");

            if shortlist.has_selection {
                Ok(exit_code::SUCCESS)
            } else {
                tracing::warn!("no selection made; showing geo prior only");
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Validate => {
            println!(
                "catalog ok: {} companies, top {} shortlist",
                catalog::COMPANIES.len(),
                scorer.top_n()
            );
            if loaded.is_none() {
                println!("config: built-in defaults");
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Continue(cmd) => {
            let selection = resolve_selection(&cmd.selection)?;
            println!("{}", onboarding::continue_to_portfolio(&selection, &scorer)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Boost => {
            println!("{}", onboarding::boost_accuracy());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
