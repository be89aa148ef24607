use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Internal layout of a package on disk. Bagged packages wrap their
/// contents one level deeper under a fixed `data/` directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SipLayout {
    #[default]
    Plain,
    Bagged,
}

impl SipLayout {
    fn root(&self, package: &Path) -> PathBuf {
        match self {
            SipLayout::Plain => package.to_path_buf(),
            SipLayout::Bagged => package.join("data"),
        }
    }

    fn subdoc_dir(&self, package: &Path) -> PathBuf {
        self.root(package)
            .join("metadata")
            .join("submissionDocumentation")
    }

    /// The object store holding the package's payload files.
    pub fn objects_dir(&self, package: &Path) -> PathBuf {
        self.root(package).join("objects")
    }

    /// The package's DFXML file inventory.
    pub fn inventory_path(&self, package: &Path) -> PathBuf {
        self.subdoc_dir(package).join("dfxml.xml")
    }

    /// The package's ranked format-identification report.
    pub fn formats_path(&self, package: &Path) -> PathBuf {
        self.subdoc_dir(package)
            .join("brunnhilde")
            .join("csv_reports")
            .join("formats.csv")
    }
}
