use serde::{Deserialize, Serialize};
use std::fmt;

/// The signed-in staff member as granted by the auth endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// Staff role vocabulary.
///
/// The records service owns this vocabulary and may grow it. Values this
/// client does not know deserialize into [`Role::Other`] and serialize back
/// to the same string, so an old client never mangles a new role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Vet,
    Owner,
    /// Any role string outside the known set, kept verbatim.
    Other(String),
}

impl Role {
    /// Canonical wire form: lowercase for the known roles, verbatim otherwise.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Vet => "vet",
            Role::Owner => "owner",
            Role::Other(role) => role,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "vet" => Role::Vet,
            "owner" => Role::Owner,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(role) => role,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
