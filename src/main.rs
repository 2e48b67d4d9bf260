use std::io;

use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use kvmetrics::cliopt::CliOpt;
use kvmetrics::input::read_input;
use kvmetrics::output::LineWriter;
use kvmetrics::runner::Runner;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opt = CliOpt::from_args();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(opt.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    let text = read_input(&opt.input)?;

    let mut runner = Runner::new(
        Box::new(LineWriter::new(io::stdout())),
        opt.encoder(),
        opt.lookup_mode(),
        !opt.quiet,
    );
    runner.run(&text)?;

    Ok(())
}
