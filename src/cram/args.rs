use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cram")]
#[command(about = "Terminal flashcard and revision study tool", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Load questions from a JSON file instead of the built-in bank
    #[arg(short, long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Start in dark mode (overrides the saved preference for this run)
    #[arg(long)]
    pub dark: bool,

    /// Directory for preferences and mastered progress
    /// (defaults to the platform data dir)
    #[arg(long, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,
}
