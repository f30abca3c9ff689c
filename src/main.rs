use clap::Parser;
use env_logger::Env;

use feedstate::cli::Cli;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(err) = feedstate::run(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
