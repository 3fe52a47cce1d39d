//! Usage fallback for unrecognized commands
//!
//! Unknown commands are a no-op with a message, not a hard failure, so
//! a typo can never launch or terminate anything.

use crate::cli::parser::Cli;
use crate::utils::Result;
use clap::CommandFactory;

pub fn execute(args: Vec<String>) -> Result<()> {
    if let Some(unknown) = args.first() {
        println!("unknown command: {}", unknown);
    }

    let mut cmd = Cli::command();
    cmd.print_help()?;
    println!();

    Ok(())
}
