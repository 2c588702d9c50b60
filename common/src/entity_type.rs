//! Search scopes of the CRM.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    #[default]
    Global,
    Accounts,
    Contacts,
    Tasks,
    Deals,
    Quotes,
    Invoices,
}

impl EntityType {
    pub const ALL: [EntityType; 7] = [
        EntityType::Global,
        EntityType::Accounts,
        EntityType::Contacts,
        EntityType::Tasks,
        EntityType::Deals,
        EntityType::Quotes,
        EntityType::Invoices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Global => "global",
            EntityType::Accounts => "accounts",
            EntityType::Contacts => "contacts",
            EntityType::Tasks => "tasks",
            EntityType::Deals => "deals",
            EntityType::Quotes => "quotes",
            EntityType::Invoices => "invoices",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EntityType::Global => "All",
            EntityType::Accounts => "Accounts",
            EntityType::Contacts => "Contacts",
            EntityType::Tasks => "Tasks",
            EntityType::Deals => "Deals",
            EntityType::Quotes => "Quotes",
            EntityType::Invoices => "Invoices",
        }
    }

    /// The `global` scope spans every other type and has no filter descriptor.
    pub fn is_global(&self) -> bool {
        matches!(self, EntityType::Global)
    }
}

impl Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntityTypeParseError {
    Unknown(String),
}

impl std::fmt::Display for EntityTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(s) => write!(f, "Unknown entity type: {:?}", s),
        }
    }
}

impl std::error::Error for EntityTypeParseError {}

impl FromStr for EntityType {
    type Err = EntityTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityType::ALL
            .iter()
            .find(|t| t.as_str() == s)
            .copied()
            .ok_or_else(|| EntityTypeParseError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_lowercase_name() {
        for t in EntityType::ALL {
            assert_eq!(t.as_str().parse::<EntityType>(), Ok(t));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "Contacts".parse::<EntityType>(),
            Err(EntityTypeParseError::Unknown("Contacts".to_string()))
        );
        assert!("".parse::<EntityType>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&EntityType::Invoices).unwrap(), "\"invoices\"");
        assert_eq!(serde_json::from_str::<EntityType>("\"deals\"").unwrap(), EntityType::Deals);
    }
}
