use super::event::NormalizedEvent;
use std::collections::BTreeMap;

/// Events grouped by numeric category, in category encounter order.
/// Within a category, events keep the order they were appended in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    entries: Vec<(u64, Vec<NormalizedEvent>)>,
}

impl CategoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event to its category, creating the category on first use.
    pub fn push(&mut self, category: u64, event: NormalizedEvent) {
        match self.entries.iter().position(|(c, _)| *c == category) {
            Some(pos) => self.entries[pos].1.push(event),
            None => self.entries.push((category, vec![event])),
        }
    }

    pub fn get(&self, category: u64) -> Option<&[NormalizedEvent]> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, events)| events.as_slice())
    }

    /// Iterate in category encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &[NormalizedEvent])> {
        self.entries.iter().map(|(c, events)| (*c, events.as_slice()))
    }

    /// Number of distinct categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of categorized events across all categories.
    pub fn event_count(&self) -> usize {
        self.entries.iter().map(|(_, events)| events.len()).sum()
    }
}

/// Summed duration per category, iterated in ascending category order
/// so the chart x-axis is stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategorySummary {
    totals: BTreeMap<u64, f64>,
}

impl CategorySummary {
    pub fn add(&mut self, category: u64, hours: f64) {
        *self.totals.entry(category).or_insert(0.0) += hours;
    }

    pub fn get(&self, category: u64) -> Option<f64> {
        self.totals.get(&category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.totals.iter().map(|(c, h)| (*c, *h))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
