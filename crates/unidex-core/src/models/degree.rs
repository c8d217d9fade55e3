//! Degree level enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnidexError;

/// The three fixed program tiers. `Ord` follows display order
/// (bachelor, masters, phd); storage order is irrelevant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DegreeLevel {
    Bachelor,
    Masters,
    Phd,
}

impl DegreeLevel {
    /// All levels in display order.
    pub const ALL: [DegreeLevel; 3] = [
        DegreeLevel::Bachelor,
        DegreeLevel::Masters,
        DegreeLevel::Phd,
    ];

    /// Wire name, as used in persisted records and query parameters.
    pub fn as_str(&self) -> &'static str {
        match self {
            DegreeLevel::Bachelor => "bachelor",
            DegreeLevel::Masters => "masters",
            DegreeLevel::Phd => "phd",
        }
    }
}

impl fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DegreeLevel {
    type Err = UnidexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bachelor" => Ok(DegreeLevel::Bachelor),
            "masters" => Ok(DegreeLevel::Masters),
            "phd" => Ok(DegreeLevel::Phd),
            other => Err(UnidexError::Validation {
                message: format!("unknown degree level: {other}"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for level in DegreeLevel::ALL {
            assert_eq!(level.as_str().parse::<DegreeLevel>().unwrap(), level);
        }
    }

    #[test]
    fn serializes_to_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&DegreeLevel::Phd).unwrap(),
            "\"phd\""
        );
        assert_eq!(
            serde_json::from_str::<DegreeLevel>("\"bachelor\"").unwrap(),
            DegreeLevel::Bachelor
        );
    }

    #[test]
    fn display_order_matches_ord() {
        assert!(DegreeLevel::Bachelor < DegreeLevel::Masters);
        assert!(DegreeLevel::Masters < DegreeLevel::Phd);
    }

    #[test]
    fn rejects_unknown_level() {
        assert!("diploma".parse::<DegreeLevel>().is_err());
    }
}
