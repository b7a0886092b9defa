//! # chatscribe CLI
//!
//! Thin binary wrapper: parse arguments, hand the session to the
//! interactive shell, map failure to a non-zero exit code.

use std::process;

use clap::Parser;

use chatscribe::cli::Args;
use chatscribe::shell;

fn main() {
    let args = Args::parse();
    if let Err(e) = shell::run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
