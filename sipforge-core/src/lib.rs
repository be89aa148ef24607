#![forbid(unsafe_code)]

pub mod error;
pub mod policy;

pub mod domain;
pub mod layout;

pub mod util {
    pub mod csvio;
}

pub mod inventory {
    pub mod dfxml;
    pub mod walk;
}

pub mod records;
pub mod formats;

pub mod describe {
    pub mod extent;
    pub mod row;
    pub mod scope;
    pub mod size;
}

pub mod sheet;

// Re-exports: stable API surface
pub use describe::row::{CSV_HEADERS, DescriptiveRow, build_row};
pub use sheet::{DescribeOptions, SheetWriter, describe_package, describe_tree};
