use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gongwen",
    version,
    about = "Reformatting tools for Chinese administrative notices"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Level1(IoArgs),
    Level2(IoArgs),
    TwoLevel(IoArgs),
    Delete(IoArgs),
    AddBr(IoArgs),
    Segment(IoArgs),
    Smart(IoArgs),
    Punct(PunctArgs),
    Title(TitleArgs),
    Flags(IoArgs),
    QuickCopy(QuickCopyArgs),
}

#[derive(Args, Debug, Clone)]
pub struct IoArgs {
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct PunctArgs {
    #[command(flatten)]
    pub io: IoArgs,

    #[arg(long, default_value_t = false)]
    pub time_to_latin: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TitleArgs {
    #[command(flatten)]
    pub io: IoArgs,

    #[arg(long)]
    pub default_year: Option<String>,

    #[arg(long, default_value_t = 0)]
    pub cycle: usize,

    #[arg(long, default_value_t = false)]
    pub all_verbs: bool,
}

#[derive(Args, Debug, Clone)]
pub struct QuickCopyArgs {
    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}
