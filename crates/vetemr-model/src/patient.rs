use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Patient sex as recorded by the clinic.
///
/// Wire decoding is lenient: an absent or null field or an unrecognized
/// value comes through as [`Gender::Unknown`], never as a decode failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Unknown => "unknown",
        }
    }

    /// Uppercase badge text, `N/A` when unknown.
    pub fn badge(self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Unknown => "N/A",
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            "female" => Gender::Female,
            _ => Gender::Unknown,
        }
    }
}

impl From<Gender> for String {
    fn from(gender: Gender) -> Self {
        gender.as_str().to_owned()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Strict parse for form input. Accepts the canonical values plus the
    /// single-letter shortcuts `m`/`f`/`u`; an empty answer means unknown.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            "" | "unknown" | "u" => Ok(Gender::Unknown),
            other => Err(format!("unrecognized gender: {other}")),
        }
    }
}

/// An animal under the clinic's care.
///
/// Only `id`, `name`, and `species` are guaranteed by the service; everything
/// else degrades to its default when the field is absent or null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    /// Open vocabulary. The admission form offers a fixed set of choices but
    /// anything the service stores must render.
    pub species: String,
    #[serde(default)]
    pub breed: Option<String>,
    /// Age in years, fractional allowed.
    #[serde(default)]
    pub age: Option<f64>,
    /// Weight in kilograms.
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "crate::wire::null_as_default")]
    pub gender: Gender,
    #[serde(default)]
    pub owner_id: Option<String>,
}

impl Patient {
    /// Breed when recorded, otherwise the species.
    pub fn breed_label(&self) -> &str {
        self.breed
            .as_deref()
            .filter(|breed| !breed.is_empty())
            .unwrap_or(&self.species)
    }
}
