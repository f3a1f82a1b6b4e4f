use clap::Parser;
use sokoni_access::cli::{Cli, init_tracing, run};

fn main() {
    init_tracing();

    let cli = Cli::parse();

    std::process::exit(run(cli));
}
