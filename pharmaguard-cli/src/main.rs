mod analyze;
mod drugs;
mod extract;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use log::LevelFilter;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "pharmaguard";
    pub const BIN_NAME: &str = "pharmaguard";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Pharmacogenomic risk annotation: VCF variants to diplotypes, metabolizer phenotypes and drug risk.")
        .subcommand_required(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log output (-v info, -vv debug); RUST_LOG takes precedence"),
        )
        .subcommand(analyze::cli::create_analyze_cli())
        .subcommand(extract::cli::create_extract_cli())
        .subcommand(drugs::cli::create_drugs_cli())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        //
        // ANALYZE
        //
        Some((analyze::cli::ANALYZE_CMD, matches)) => {
            analyze::handlers::run_analyze(matches)?;
        }

        //
        // EXTRACT
        //
        Some((extract::cli::EXTRACT_CMD, matches)) => {
            extract::handlers::run_extract(matches)?;
        }

        //
        // DRUGS
        //
        Some((drugs::cli::DRUGS_CMD, _)) => {
            drugs::handlers::run_drugs()?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
