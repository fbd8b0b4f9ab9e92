mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, fleet, matrix};
use haulr_common::config::Config;
use haulr_common::measure::FitPolicy;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        quiet: commands.quiet,
        policy: if commands.strict {
            FitPolicy::Strict
        } else {
            FitPolicy::Inclusive
        },
    };

    print::banner(cfg.quiet);

    let result = match commands.command {
        Commands::Check { carrier, cargo } => {
            print::header("checking cargo", cfg.quiet);
            check::check(carrier, cargo, &cfg)
        }
        Commands::Fleet => {
            print::header("default fleet", cfg.quiet);
            fleet::fleet(&cfg)
        }
        Commands::Matrix { vehicles } => {
            print::header("building load matrix", cfg.quiet);
            matrix::matrix(vehicles, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
