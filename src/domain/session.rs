use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dashboard a signed-in user lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Recruitment,
    Committee,
    #[serde(alias = "business unit", alias = "business-unit")]
    BusinessUnit,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Recruitment => write!(f, "recruitment"),
            Self::Committee => write!(f, "committee"),
            Self::BusinessUnit => write!(f, "business_unit"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "recruitment" | "hr" => Ok(Self::Recruitment),
            "committee" => Ok(Self::Committee),
            "business_unit" | "director" => Ok(Self::BusinessUnit),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// The persisted session object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: Role,
}
