use clap::Parser;
use ruota::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
