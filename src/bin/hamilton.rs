//! Command-line front end: reads a multi-instance graph file, solves every instance and
//! writes the results table as CSV.
//!
//! Logging is controlled through `HAMILTON_LOG` (e.g. `HAMILTON_LOG=debug`).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use hamilton::cs::graph::hamiltonian::Algorithm;
use hamilton::driver::{self, Config};
use hamilton::instance::read_instances;
use hamilton::report::ReportWriter;

#[derive(Debug, Parser)]
#[command(name = "hamilton", version, about = "Hamiltonian path and cycle search")]
struct Cli {
    /// Input file with one or more graph instances
    input: PathBuf,

    /// Where to write the CSV results
    #[arg(short, long, value_name = "FILE", default_value = "resultsfile.csv")]
    output: PathBuf,

    /// Algorithm to run (backtracking, brute-force, simple, best-case); repeatable
    #[arg(short, long = "algorithm", value_name = "NAME", default_value = "backtracking")]
    algorithms: Vec<Algorithm>,

    /// Solve instances concurrently
    #[arg(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    let env = env_logger::Env::new()
        .filter_or("HAMILTON_LOG", "warn")
        .write_style("HAMILTON_LOG_STYLE");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    log::debug!("options: {:?}", cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> hamilton::Result<()> {
    let instances = read_instances(&cli.input)?;
    info!("parsed {} instance(s) from {}", instances.len(), cli.input.display());

    let config = Config {
        algorithms: cli.algorithms.clone(),
        parallel: cli.parallel,
    };
    let records = driver::run(&instances, &config)?;

    let mut writer = ReportWriter::create(&cli.output)?;
    writer.write_all(&records)?;
    writer.into_inner()?;
    info!("wrote {} row(s) to {}", records.len(), cli.output.display());
    Ok(())
}
