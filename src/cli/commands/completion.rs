//! Shell completion generation

use crate::cli::parser::{Cli, CompletionArgs};
use crate::utils::Result;
use clap::CommandFactory;
use clap_complete::generate;

pub fn execute(args: CompletionArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
