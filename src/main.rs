//! qwalk command-line entry point.
use clap::Parser; // trait import enables QwalkCli::parse()

use qwalk::cli::{Command, QwalkCli};
use qwalk::commands;
use qwalk::config::Config;
use qwalk::logging;

fn main() -> anyhow::Result<()> {
    let args = QwalkCli::parse();

    let config = Config::load(args.config.as_deref())?;
    logging::init(args.verbose, config.log.filter.as_deref());

    match args.cmd {
        Command::Walk {
            input,
            domain,
            clicks,
        } => commands::walk::main(&input, domain, clicks),

        Command::Slits {
            input,
            slits,
            targets,
            photon,
        } => commands::slits::main(&input, slits, targets, photon),

        Command::Observe {
            input,
            position,
            eigen,
            solver,
        } => commands::observe::main(&input, position, eigen, solver.as_deref(), &config),

        Command::Show { input } => commands::show::main(&input),
    }
}
