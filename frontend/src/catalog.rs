//! The fixed set of feature items shown on the landing page.
//!
//! Items are compiled into the bundle from `data/features.json` and never
//! change after startup. Array order is display order.

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

use crate::components::icons::Icon;

const BUILTIN_FEATURES: &str = include_str!("data/features.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("item ids must be positive")]
    ZeroId,
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
    #[error("item {0} has an empty title")]
    EmptyTitle(ItemId),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// The catalog bundled with the site.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_FEATURES)
    }

    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let items: Vec<Item> = serde_json::from_str(source)?;
        Self::from_items(items)
    }

    pub fn from_items(items: Vec<Item>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.0 == 0 {
                return Err(CatalogError::ZeroId);
            }
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId(item.id));
            }
            if item.title.is_empty() {
                return Err(CatalogError::EmptyTitle(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
