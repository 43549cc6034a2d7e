mod cli_commands;
mod cli_exec;
mod cli_runtime;

use self::cli_commands::*;
use self::cli_runtime::*;

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
