//! Name pools per kindred.

use serde::{Deserialize, Serialize};

/// Every pool a kindred's naming rule may draw from. Kindreds fill only the
/// pools their naming style uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamePools {
    /// Masculine first names.
    pub male: Vec<String>,
    /// Feminine first names.
    pub female: Vec<String>,
    /// First names for anyone.
    pub unisex: Vec<String>,
    /// Family names.
    pub surname: Vec<String>,
    /// Full elven names of the courts.
    pub courtly: Vec<String>,
    /// Full elven names of the wilds.
    pub rustic: Vec<String>,
    /// Grimalkin first names; `"Long/Short"` entries offer two forms.
    pub first_name: Vec<String>,
}
