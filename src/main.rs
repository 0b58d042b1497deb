use clap::Parser;

use smartvas::cli::Cli;
use smartvas::logging;
use smartvas::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();
    runtime::run(cli)
}
