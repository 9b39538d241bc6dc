use greeters::cli::Cli;
use greeters::logging;

fn main() -> anyhow::Result<()> {
    let cli: Cli = argh::from_env();
    logging::init_logging();
    cli.execute()
}
