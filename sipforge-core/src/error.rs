use thiserror::Error;

#[derive(Error, Debug)]
pub enum SipError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("inventory for package \"{package}\": {detail}")]
    Inventory { package: String, detail: String },

    #[error("format report for package \"{package}\": {detail}")]
    FormatReport { package: String, detail: String },
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, SipError>;
