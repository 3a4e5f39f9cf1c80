use serde::{Deserialize, Serialize};

use crate::error::{Result, TaskError};

/// One round's worth of goods to hand out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationItem {
    pub name: String,
    pub total_quantity: u32,
}

impl AllocationItem {
    pub fn new(name: impl Into<String>, total_quantity: u32) -> Self {
        Self {
            name: name.into(),
            total_quantity,
        }
    }
}

const DEFAULT_ITEMS: [(&str, u32); 12] = [
    ("candy bar", 20),
    ("blanket", 10),
    ("glove", 14),
    ("boot", 8),
    ("jean", 22),
    ("shirt", 18),
    ("rain cape", 6),
    ("apron", 16),
    ("water bottle", 24),
    ("flashlight", 12),
    ("umbrella", 4),
    ("mask", 26),
];

/// Ordered item list; round `n` uses entry `n - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationCatalog {
    items: Vec<AllocationItem>,
}

impl Default for AllocationCatalog {
    fn default() -> Self {
        Self {
            items: DEFAULT_ITEMS
                .iter()
                .map(|&(name, qty)| AllocationItem::new(name, qty))
                .collect(),
        }
    }
}

impl AllocationCatalog {
    pub fn new(items: Vec<AllocationItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(TaskError::EmptyCatalog);
        }
        if let Some(bad) = items.iter().find(|item| item.total_quantity == 0) {
            return Err(TaskError::InvalidItem {
                name: bad.name.clone(),
            });
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[AllocationItem] {
        &self.items
    }

    /// Last playable round.
    pub fn rounds(&self) -> u32 {
        self.items.len() as u32
    }

    pub fn try_item_for_round(&self, round: u32) -> Result<&AllocationItem> {
        let index = (round as usize).checked_sub(1);
        index
            .and_then(|i| self.items.get(i))
            .ok_or_else(|| TaskError::RoundOutOfRange {
                round,
                rounds: self.items.len(),
            })
    }

    /// Like `try_item_for_round`, but rounds outside the catalog get the first item.
    pub fn item_for_round(&self, round: u32) -> &AllocationItem {
        match self.try_item_for_round(round) {
            Ok(item) => item,
            Err(err) => {
                tracing::warn!(%err, "falling back to the first catalog item");
                &self.items[0]
            }
        }
    }
}
