use clap::Parser;
use cram::app::App;
use cram::bank;
use cram::error::Result;
use cram::store::fs::FileStore;
use cram::ui;
use directories::ProjectDirs;
use std::path::PathBuf;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let bank = match &cli.data {
        Some(path) => bank::load_from_path(path)?,
        None => bank::load_default()?,
    };

    let state_dir = match cli.state_dir {
        Some(dir) => dir,
        None => default_state_dir(),
    };
    let store = FileStore::new(state_dir);

    let mut app = App::new(bank, store);
    if cli.dark {
        app.set_dark_mode(true);
    }

    ui::run(&mut app)
}

fn default_state_dir() -> PathBuf {
    // Fall back to CWD when the platform gives us no data dir, so the tool
    // stays usable in stripped-down environments.
    ProjectDirs::from("com", "cram", "cram")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".cram"))
}
