mod cli_args;
mod commands;
mod errors;

use std::process;

use clap::Parser;
use cli_args::CliArgs;
use log::*;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = CliArgs::parse();
    if let Err(err) = commands::run(args).await {
        error!("{}", err);
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
