//! calc CLI — command-line consumer for the calculator producer API.
//!
//! `calc multiply 4 7` issues `GET /multiply?x=4&y=7` against the producer
//! and prints `4 * 7 = 28`. See `calc --help` for usage and the environment
//! variables that point at the producer and the validation service.

use clap::Parser;

mod cli_args;
mod client;
mod commands;

use calc_core::config::ClientConfig;
use calc_core::format::Operation;
use cli_args::{Cli, Commands};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage problems exit 1 here, not clap's default 2. Help and
            // version requests still exit 0.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let config = ClientConfig::from_env();

    let exit_code = match cli.command {
        Commands::Multiply { x, y } => commands::compute::run(
            &config,
            Operation::Multiply,
            x,
            y,
            cli.validate,
            cli.strict_json,
        ),
        Commands::Divide { x, y } => commands::compute::run(
            &config,
            Operation::Divide,
            x,
            y,
            cli.validate,
            cli.strict_json,
        ),
    };

    std::process::exit(exit_code);
}
