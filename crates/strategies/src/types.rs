// In crates/strategies/src/types.rs

use core_types::{Alignment, CrossoverEvent, CrossoverKind};

/// Result of a crossover scan. `buys` and `sells` are indices into the short
/// moving-average series; use the day helpers to place them on the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossovers {
    pub buys: Vec<usize>,
    pub sells: Vec<usize>,
    short: Alignment,
}

impl Crossovers {
    pub(crate) fn new(short: Alignment) -> Self {
        Self {
            buys: Vec::new(),
            sells: Vec::new(),
            short,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.buys.is_empty() && self.sells.is_empty()
    }

    pub fn buy_days(&self) -> Vec<usize> {
        self.buys.iter().map(|&i| self.short.day(i)).collect()
    }

    pub fn sell_days(&self) -> Vec<usize> {
        self.sells.iter().map(|&i| self.short.day(i)).collect()
    }

    /// All crossings in chronological order.
    pub fn events(&self) -> Vec<CrossoverEvent> {
        let tag = |kind: CrossoverKind| {
            move |&index: &usize| CrossoverEvent {
                index,
                day: self.short.day(index),
                kind,
            }
        };

        let mut events: Vec<CrossoverEvent> = self
            .buys
            .iter()
            .map(tag(CrossoverKind::Buy))
            .chain(self.sells.iter().map(tag(CrossoverKind::Sell)))
            .collect();
        events.sort_by_key(|event| event.index);
        events
    }
}
