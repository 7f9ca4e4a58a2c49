//! Catalog item discriminator.

use std::fmt;
use std::str::FromStr;

/// Kind of catalog item. Decides which variant attributes are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    /// Yarn: requires composition, origin and length.
    Yarn,
    /// Finished garment: requires composition, size and garment length.
    Garment,
}

impl ProductType {
    /// Returns the wire value of the discriminator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yarn => "yarn",
            Self::Garment => "garment",
        }
    }
}

impl FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yarn" => Ok(Self::Yarn),
            "garment" => Ok(Self::Garment),
            other => Err(format!("type must be \"yarn\" or \"garment\", got \"{other}\"")),
        }
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
