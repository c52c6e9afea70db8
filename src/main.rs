mod cli;
mod commands;
mod model;
mod text;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::text::{NumberingScheme, Pipeline};

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "处理失败，请检查输入格式");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Level1(args) => {
            commands::transform::run(Pipeline::Renumber(NumberingScheme::Level1Flat), args)
        }
        Commands::Level2(args) => {
            commands::transform::run(Pipeline::Renumber(NumberingScheme::Level2Flat), args)
        }
        Commands::TwoLevel(args) => {
            commands::transform::run(Pipeline::Renumber(NumberingScheme::TwoLevelNested), args)
        }
        Commands::Delete(args) => commands::transform::run(Pipeline::StripMarkers, args),
        Commands::AddBr(args) => commands::transform::run(Pipeline::AppendLineBreaks, args),
        Commands::Segment(args) => commands::transform::run(Pipeline::Segment, args),
        Commands::Smart(args) => commands::transform::run(Pipeline::Smart, args),
        Commands::Punct(args) => commands::transform::run(
            Pipeline::Punctuation {
                time_to_latin: args.time_to_latin,
            },
            args.io,
        ),
        Commands::Title(args) => commands::title::run(args),
        Commands::Flags(args) => commands::flags::run(args),
        Commands::QuickCopy(args) => commands::quick_copy::run(args),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
