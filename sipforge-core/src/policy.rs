use serde::{Deserialize, Serialize};

/// Which per-record timestamps feed a package's date range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatePolicy {
    /// Modification times only.
    #[default]
    ModifiedOnly,
    /// Earliest and latest of every MAC time a record carries.
    EarliestMac,
}
