use caltrack::core::categorize::categorize;
use caltrack::models::event::{DurationHours, NormalizedEvent};

fn ev(title: &str) -> NormalizedEvent {
    NormalizedEvent {
        title: title.to_string(),
        start: "2024-01-01T09:00:00+00:00".to_string(),
        end: "2024-01-01T10:00:00+00:00".to_string(),
        duration: DurationHours::Hours(1.0),
    }
}

#[test]
fn test_leading_digit_run_is_the_category() {
    let index = categorize(&[ev("12 Standup"), ev("3Review")]);

    assert_eq!(index.len(), 2);
    assert_eq!(index.get(12).unwrap()[0].title, "12 Standup");
    assert_eq!(index.get(3).unwrap()[0].title, "3Review");
}

#[test]
fn test_leading_whitespace_prevents_a_match() {
    let index = categorize(&[ev("  7 skip")]);

    assert!(index.is_empty());
}

#[test]
fn test_uncategorizable_events_are_silently_dropped() {
    let index = categorize(&[ev("Lunch"), ev("Meeting 12"), ev("No Title")]);

    assert!(index.is_empty());
}

#[test]
fn test_category_encounter_and_insertion_order_preserved() {
    let index = categorize(&[ev("5 first"), ev("2 second"), ev("5 third"), ev("9 fourth")]);

    let categories: Vec<u64> = index.iter().map(|(c, _)| c).collect();
    assert_eq!(categories, [5, 2, 9]);

    let fives: Vec<&str> = index.get(5).unwrap().iter().map(|e| e.title.as_str()).collect();
    assert_eq!(fives, ["5 first", "5 third"]);
}

#[test]
fn test_digit_run_overflowing_u64_is_dropped() {
    let index = categorize(&[ev("99999999999999999999999 planning")]);

    assert!(index.is_empty());
}

#[test]
fn test_full_payload_is_carried_into_the_index() {
    let mut event = ev("42 retro");
    event.duration = DurationHours::Unknown;

    let index = categorize(&[event.clone()]);

    assert_eq!(index.get(42).unwrap(), std::slice::from_ref(&event));
}
