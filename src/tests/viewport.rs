use super::{visibility_ratio, Region, ViewportObserver};
use crate::tracker::VISIBILITY_THRESHOLD;

fn region(id: &str, start: usize, end: usize) -> Region {
    Region {
        id: id.to_string(),
        start,
        end,
    }
}

#[test]
fn test_ratio_full_partial_and_none() {
    let r = region("about", 10, 20);

    assert!((visibility_ratio(&r, &(0..40)) - 1.0).abs() < f64::EPSILON);
    assert!((visibility_ratio(&r, &(15..40)) - 0.5).abs() < f64::EPSILON);
    assert!((visibility_ratio(&r, &(0..13)) - 0.3).abs() < 1e-9);
    assert!(visibility_ratio(&r, &(20..30)).abs() < f64::EPSILON);
    assert!(visibility_ratio(&r, &(0..10)).abs() < f64::EPSILON);
}

#[test]
fn test_ratio_of_empty_region() {
    let r = region("empty", 5, 5);
    assert!((visibility_ratio(&r, &(0..10)) - 1.0).abs() < f64::EPSILON);
    assert!(visibility_ratio(&r, &(6..10)).abs() < f64::EPSILON);
}

#[test]
fn test_first_pass_reports_every_region() {
    let regions = vec![region("about", 0, 10), region("skills", 10, 30)];
    let mut observer = ViewportObserver::new(VISIBILITY_THRESHOLD);

    let entries = observer.observe(&regions, &(0..12));
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["about", "skills"]);
}

#[test]
fn test_only_threshold_crossings_are_reported() {
    let regions = vec![region("about", 0, 10), region("skills", 10, 30)];
    let mut observer = ViewportObserver::new(VISIBILITY_THRESHOLD);
    observer.observe(&regions, &(0..12));

    // About stays above, skills stays below.
    assert!(observer.observe(&regions, &(1..13)).is_empty());

    // Skills reaches 8/20 = 0.4, about still at 0.5.
    let entries = observer.observe(&regions, &(5..18));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "skills");
    assert!(entries[0].ratio >= VISIBILITY_THRESHOLD);

    // About falls to 0 while skills stays above.
    let entries = observer.observe(&regions, &(12..22));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "about");
}

#[test]
fn test_reset_reports_again() {
    let regions = vec![region("about", 0, 10)];
    let mut observer = ViewportObserver::new(VISIBILITY_THRESHOLD);
    observer.observe(&regions, &(0..10));
    assert!(observer.observe(&regions, &(0..10)).is_empty());

    observer.reset();
    assert_eq!(observer.last_ratio("about"), None);
    assert_eq!(observer.observe(&regions, &(0..10)).len(), 1);
}
