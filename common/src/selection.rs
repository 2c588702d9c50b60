//! Multi-select state over mixed-type result sets.
//!
//! Ids are qualified by entity type so that account 1 and contact 1 never
//! collide. The string form is `"<type>:<id>"`.

use std::collections::BTreeSet;
use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::entity_type::{EntityType, EntityTypeParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionId {
    pub entity_type: EntityType,
    /// Numeric, like [`crate::search_result::SearchResultItem::id`].
    pub id: u64,
}

impl SelectionId {
    pub fn new(entity_type: EntityType, id: u64) -> Self {
        Self { entity_type, id }
    }
}

impl Display for SelectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionIdParseError {
    MissingSeparator(String),
    EntityType(EntityTypeParseError),
    Id(std::num::ParseIntError),
}

impl std::fmt::Display for SelectionIdParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator(s) => write!(f, "Selection id without ':' separator: {:?}", s),
            Self::EntityType(err) => write!(f, "Invalid selection id type: {}", err),
            Self::Id(err) => write!(f, "Invalid selection id number: {}", err),
        }
    }
}

impl std::error::Error for SelectionIdParseError {}

impl FromStr for SelectionId {
    type Err = SelectionIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (entity_type, id) = s
            .split_once(':')
            .ok_or_else(|| SelectionIdParseError::MissingSeparator(s.to_string()))?;
        let entity_type = entity_type.parse().map_err(SelectionIdParseError::EntityType)?;
        let id = id.parse().map_err(SelectionIdParseError::Id)?;
        Ok(Self { entity_type, id })
    }
}

impl Serialize for SelectionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SelectionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionSet {
    selected: BTreeSet<SelectionId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &SelectionId) -> bool {
        self.selected.contains(id)
    }

    pub fn toggle(&mut self, id: SelectionId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select-all for one type: when any id of that type is already selected
    /// the whole type is deselected, otherwise every given id is selected.
    pub fn toggle_all_of_type(&mut self, entity_type: EntityType, ids: impl IntoIterator<Item = u64>) {
        if self.count_of_type(entity_type) > 0 {
            self.selected.retain(|s| s.entity_type != entity_type);
        } else {
            self.selected.extend(ids.into_iter().map(|id| SelectionId::new(entity_type, id)));
        }
    }

    pub fn count_of_type(&self, entity_type: EntityType) -> usize {
        self.selected.iter().filter(|s| s.entity_type == entity_type).count()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn ids(&self) -> Vec<SelectionId> {
        self.selected.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_numeric_id_does_not_collide_across_types() {
        let mut s = SelectionSet::new();
        s.toggle(SelectionId::new(EntityType::Accounts, 1));
        s.toggle(SelectionId::new(EntityType::Contacts, 1));
        assert_eq!(s.len(), 2);
        s.toggle(SelectionId::new(EntityType::Accounts, 1));
        assert!(!s.contains(&SelectionId::new(EntityType::Accounts, 1)));
        assert!(s.contains(&SelectionId::new(EntityType::Contacts, 1)));
    }

    #[test]
    fn select_all_after_partial_selection_deselects_the_type() {
        let mut s = SelectionSet::new();
        s.toggle(SelectionId::new(EntityType::Contacts, 2));
        s.toggle(SelectionId::new(EntityType::Accounts, 7));
        s.toggle_all_of_type(EntityType::Contacts, [1, 2, 3]);
        assert_eq!(s.count_of_type(EntityType::Contacts), 0);
        assert_eq!(s.count_of_type(EntityType::Accounts), 1);
    }

    #[test]
    fn select_all_on_empty_type_selects_every_id() {
        let mut s = SelectionSet::new();
        s.toggle_all_of_type(EntityType::Contacts, [1, 2, 3]);
        assert_eq!(s.count_of_type(EntityType::Contacts), 3);
        s.toggle_all_of_type(EntityType::Contacts, [1, 2, 3]);
        assert!(s.is_empty());
    }

    #[test]
    fn composite_string_form() {
        let id = SelectionId::new(EntityType::Invoices, 42);
        assert_eq!(id.to_string(), "invoices:42");
        assert_eq!("invoices:42".parse::<SelectionId>(), Ok(id));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"invoices:42\"");
        assert!(matches!("invoices".parse::<SelectionId>(), Err(SelectionIdParseError::MissingSeparator(_))));
        assert!(matches!("people:1".parse::<SelectionId>(), Err(SelectionIdParseError::EntityType(_))));
        assert!(matches!("deals:x".parse::<SelectionId>(), Err(SelectionIdParseError::Id(_))));
    }
}
