pub mod handlers;

use crate::presentation::cli::{Cli, Commands};
use clap::Parser;
use sipforge_core::error::Result;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Describe {
            package,
            sheet,
            bagged,
            walk,
            mac_times,
        } => handlers::handle_describe(package, sheet, bagged, walk, mac_times),
        Commands::Sheet {
            root,
            out,
            bagged,
            walk,
            mac_times,
            append,
        } => handlers::handle_sheet(root, out, bagged, walk, mac_times, append),
    }
}
