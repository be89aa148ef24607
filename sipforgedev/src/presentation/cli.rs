use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "sipforge CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append one package's descriptive row to a spreadsheet
    Describe {
        /// Package (SIP) directory to summarize
        package: PathBuf,
        /// Path to the description spreadsheet
        sheet: PathBuf,

        /// Package uses the bagged internal layout (contents under data/)
        #[arg(long)]
        bagged: bool,

        /// Walk the object store instead of reading the DFXML inventory
        #[arg(long)]
        walk: bool,

        /// Fold all MAC times into the date range, not just modified
        #[arg(long = "mac-times")]
        mac_times: bool,
    },

    /// Write a descriptive spreadsheet for a directory of packages
    Sheet {
        /// Directory holding one package per subdirectory
        root: PathBuf,
        /// Output spreadsheet path
        out: PathBuf,

        /// Packages use the bagged internal layout (contents under data/)
        #[arg(long)]
        bagged: bool,

        /// Walk each object store instead of reading DFXML inventories
        #[arg(long)]
        walk: bool,

        /// Fold all MAC times into the date range, not just modified
        #[arg(long = "mac-times")]
        mac_times: bool,

        /// Append to an existing sheet instead of replacing it
        #[arg(long)]
        append: bool,
    },
}
