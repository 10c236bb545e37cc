mod app;
mod cli;
mod config;
mod consts;
mod error;
mod generate;
mod output;
mod pages;
mod release;
mod utils;

use std::process::ExitCode;

use clap::Parser;

use app::{handle_cover, handle_generate, handle_publish, handle_releases};
use cli::{Cli, Commands, GenerateArgs};
use config::Config;
use error::AppError;
use generate::GeneratorSettings;
use utils::init_logging;

fn run(cli: Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::discover(),
    };
    let mut cli = cli.with_config(&config);

    match cli.command.take() {
        Some(Commands::Cover(args)) => handle_cover(&args),
        Some(Commands::Publish(args)) => handle_publish(&args),
        Some(Commands::Releases(args)) => handle_releases(&args, &cli),
        Some(Commands::Generate(args)) => run_generate(&args, &config),
        None => run_generate(&cli.generate, &config),
    }
}

fn run_generate(args: &GenerateArgs, config: &Config) -> Result<(), AppError> {
    // Environment is read once, here, and passed down explicitly
    let settings = GeneratorSettings::from_process_env(args, config);
    handle_generate(args, &settings).map(|_| ())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
