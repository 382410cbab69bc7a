use crate::models::category::CategoryIndex;
use crate::models::event::NormalizedEvent;
use regex::Regex;

/// Group events by the integer prefix of their title.
///
/// The category is the run of decimal digits at the very start of the
/// title ("12 Standup" -> 12, "3Review" -> 3). Leading whitespace or any
/// other character means no category and the event is silently dropped.
/// Digit runs too large for u64 are dropped the same way.
pub fn categorize(events: &[NormalizedEvent]) -> CategoryIndex {
    let re = Regex::new(r"^(\d+)").unwrap();

    let mut index = CategoryIndex::new();
    for event in events {
        if let Some(caps) = re.captures(&event.title)
            && let Ok(category) = caps[1].parse::<u64>()
        {
            index.push(category, event.clone());
        }
    }
    index
}
