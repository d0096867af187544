use clap::Parser;
use std::process;

#[macro_use]
mod test_macros;

mod cli;
mod commands;
mod error;
mod generate;
mod output;
mod schema;
mod utils;
mod writer;

use cli::Args;

fn main() {
    let args = Args::parse();
    match args.command.run(args.format) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
