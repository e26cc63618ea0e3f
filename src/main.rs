use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use build_version::cli::{run_version_workflow, VersionArgs};
use build_version::config;
use build_version::git;
use build_version::ui;

#[derive(clap::Parser)]
#[command(
    name = "build-version",
    version,
    about = "Print the build version string derived from git tags and the project declaration"
)]
struct Args {
    #[arg(short, long, help = "Break line after printing version")]
    newline: bool,

    #[arg(short, long, help = "Print the declared project version only")]
    project: bool,

    #[arg(short, long, help = "Custom settings file path")]
    config: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let settings = config::load_config(args.config.as_deref())?;

    let repo = git::open_backend(&settings.git, None)
        .context("Cannot open the current checkout")?;

    let output = run_version_workflow(
        repo.as_ref(),
        &settings,
        VersionArgs {
            newline: args.newline,
            project: args.project,
        },
    )?;

    ui::write_output(&output).context("Cannot write version to standard output")?;
    Ok(())
}
