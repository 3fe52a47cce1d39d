use clap::Parser;
use vigil::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = execute_command(cli) {
        eprintln!("vigil: {}", e);
        std::process::exit(1);
    }
}
