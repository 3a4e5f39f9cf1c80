//! Allocation counters and the arithmetic that keeps them within bounds.
//!
//! Nothing here fails: every edit clamps so that each slot stays in
//! `min_allocation..=max_allocation` and the two slots never sum past the item total.

use serde::{Deserialize, Serialize};

use crate::catalog::AllocationItem;

pub const MIN_ALLOCATION: u32 = 0;

/// The two groups receiving items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recipient {
    OwnGroup,
    OtherGroup,
}

impl Recipient {
    pub const ALL: [Recipient; 2] = [Recipient::OwnGroup, Recipient::OtherGroup];

    pub fn index(self) -> usize {
        match self {
            Recipient::OwnGroup => 0,
            Recipient::OtherGroup => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            Recipient::OwnGroup => "Your group's inventory:",
            Recipient::OtherGroup => "Other group's inventory:",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    Balanced,
    /// Items still to hand out.
    Missing(u32),
    /// Items handed out beyond the total.
    Overstock(u32),
}

/// What the player confirmed for one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskOutcome {
    pub round: u32,
    pub item: String,
    pub total: u32,
    pub own_group: u32,
    pub other_group: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationState {
    round: u32,
    item: AllocationItem,
    allocations: [u32; 2],
    min_allocation: u32,
    max_allocation: u32,
    active: Option<Recipient>,
}

impl AllocationState {
    pub fn new(round: u32, item: AllocationItem) -> Self {
        let max_allocation = item.total_quantity;
        Self {
            round: round.max(1),
            item,
            allocations: [MIN_ALLOCATION; 2],
            min_allocation: MIN_ALLOCATION,
            max_allocation,
            active: None,
        }
    }

    /// Starts from explicit counters. Each slot is clamped to the bounds; the sum is not.
    pub fn with_allocations(mut self, allocations: [u32; 2]) -> Self {
        self.allocations =
            allocations.map(|v| v.clamp(self.min_allocation, self.max_allocation));
        self
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn item(&self) -> &AllocationItem {
        &self.item
    }

    pub fn total(&self) -> u32 {
        self.item.total_quantity
    }

    pub fn allocations(&self) -> [u32; 2] {
        self.allocations
    }

    pub fn allocation(&self, recipient: Recipient) -> u32 {
        self.allocations[recipient.index()]
    }

    pub fn min_allocation(&self) -> u32 {
        self.min_allocation
    }

    pub fn max_allocation(&self) -> u32 {
        self.max_allocation
    }

    pub fn active(&self) -> Option<Recipient> {
        self.active
    }

    pub fn sum(&self) -> u32 {
        self.allocations.iter().sum()
    }

    pub fn balance(&self) -> Balance {
        let (sum, total) = (self.sum(), self.total());
        match sum.cmp(&total) {
            std::cmp::Ordering::Equal => Balance::Balanced,
            std::cmp::Ordering::Less => Balance::Missing(total - sum),
            std::cmp::Ordering::Greater => Balance::Overstock(sum - total),
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.balance() == Balance::Balanced
    }

    pub fn set_active(&mut self, recipient: Option<Recipient>) {
        self.active = recipient;
    }

    /// Adds one item, unless every item is already handed out.
    pub fn increment(&mut self, recipient: Recipient) {
        if self.sum() >= self.total() {
            return;
        }
        let slot = &mut self.allocations[recipient.index()];
        *slot = slot.saturating_add(1).min(self.max_allocation);
    }

    pub fn decrement(&mut self, recipient: Recipient) {
        let slot = &mut self.allocations[recipient.index()];
        *slot = slot.saturating_sub(1).max(self.min_allocation);
    }

    /// Types `digit` at the end of the slot's number.
    ///
    /// The new value is capped at `max_allocation`; any amount that would push the sum past the
    /// total is then taken back out of this slot. Returns `false` for non-digits.
    pub fn append_digit(&mut self, recipient: Recipient, digit: char) -> bool {
        let Some(d) = digit.to_digit(10) else {
            return false;
        };
        let i = recipient.index();
        let typed = self.allocations[i]
            .saturating_mul(10)
            .saturating_add(d)
            .min(self.max_allocation);
        self.allocations[i] = typed;

        let excess = self.sum().saturating_sub(self.total());
        if excess > 0 {
            self.allocations[i] = typed.saturating_sub(excess).max(self.min_allocation);
        }
        true
    }

    /// Drops the last typed digit.
    pub fn backspace(&mut self, recipient: Recipient) {
        let slot = &mut self.allocations[recipient.index()];
        *slot = (*slot / 10).max(self.min_allocation);
    }

    pub fn outcome(&self) -> TaskOutcome {
        TaskOutcome {
            round: self.round,
            item: self.item.name.clone(),
            total: self.total(),
            own_group: self.allocation(Recipient::OwnGroup),
            other_group: self.allocation(Recipient::OtherGroup),
        }
    }
}
