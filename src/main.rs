mod app;
mod cli;
mod config;
mod consts;
mod core;
mod error;
mod output;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse().with_config(&Config::load());
    set_debug(cli.debug);

    if let Err(e) = app::run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
