use super::{Lifecycle, NavigationHost, SectionTracker, VisibilityEntry};
use crate::error::FolioError;
use proptest::prelude::*;

#[derive(Default)]
struct RecordingHost {
    scrolls: Vec<String>,
    menu_open: bool,
}

impl NavigationHost for RecordingHost {
    fn scroll_into_view(&mut self, id: &str) {
        self.scrolls.push(id.to_string());
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

fn observed(ids: &[&str]) -> SectionTracker {
    let mut tracker = SectionTracker::new(ids.iter().copied()).unwrap();
    tracker.observe_present(ids.iter().copied());
    tracker
}

#[test]
fn test_scenario_sentinel_then_visibility_then_activate() {
    let mut tracker = observed(&["about", "skills", "projects"]);
    let mut host = RecordingHost::default();

    assert_eq!(tracker.current_active_id(), None);

    tracker.on_visibility_change("skills", 0.5);
    assert_eq!(tracker.current_active_id(), Some("skills"));

    assert!(tracker.activate("projects", &mut host));
    assert_eq!(tracker.current_active_id(), Some("projects"));
    assert_eq!(host.scrolls, vec!["projects".to_string()]);
}

#[test]
fn test_threshold_crossing() {
    let mut tracker = observed(&["about", "skills"]);

    tracker.on_visibility_change("skills", 0.2);
    assert_eq!(tracker.current_active_id(), None, "0.2 is below threshold");

    tracker.on_visibility_change("skills", 0.35);
    assert_eq!(tracker.current_active_id(), Some("skills"));
}

#[test]
fn test_threshold_is_inclusive() {
    let mut tracker = observed(&["about"]);
    tracker.on_visibility_change("about", 0.3);
    assert_eq!(tracker.current_active_id(), Some("about"));
}

#[test]
fn test_activate_twice_is_idempotent() {
    let mut tracker = observed(&["about", "projects"]);
    let mut host = RecordingHost::default();

    tracker.activate("projects", &mut host);
    tracker.activate("projects", &mut host);

    assert_eq!(tracker.current_active_id(), Some("projects"));
    assert_eq!(host.scrolls.len(), 2, "each call issues its own scroll request");
}

#[test]
fn test_activate_unknown_is_noop() {
    let mut tracker = observed(&["about", "skills"]);
    let mut host = RecordingHost {
        menu_open: true,
        ..RecordingHost::default()
    };

    tracker.on_visibility_change("about", 0.9);
    assert!(!tracker.activate("nonexistent", &mut host));

    assert_eq!(tracker.current_active_id(), Some("about"));
    assert!(host.scrolls.is_empty());
    assert!(host.menu_open, "menu is left alone for unknown ids");
}

#[test]
fn test_activate_closes_menu() {
    let mut tracker = observed(&["about", "contact"]);
    let mut host = RecordingHost {
        menu_open: true,
        ..RecordingHost::default()
    };

    tracker.activate("contact", &mut host);
    assert!(!host.menu_open);
}

#[test]
fn test_batch_last_processed_wins() {
    let mut tracker = observed(&["about", "skills"]);
    let batch = vec![
        VisibilityEntry::new("skills", 0.6),
        VisibilityEntry::new("about", 0.4),
    ];

    tracker.on_visibility_batch(&batch);
    assert_eq!(tracker.current_active_id(), Some("about"));
}

#[test]
fn test_batch_skips_entries_below_threshold() {
    let mut tracker = observed(&["about", "skills"]);
    let batch = vec![
        VisibilityEntry::new("about", 0.8),
        VisibilityEntry::new("skills", 0.1),
    ];

    tracker.on_visibility_batch(&batch);
    assert_eq!(tracker.current_active_id(), Some("about"));
}

#[test]
fn test_unknown_visibility_ignored() {
    let mut tracker = observed(&["about"]);
    tracker.on_visibility_change("blog", 1.0);
    assert_eq!(tracker.current_active_id(), None);
}

#[test]
fn test_unrendered_sections_are_not_observed() {
    let mut tracker = SectionTracker::new(["about", "skills", "contact"]).unwrap();
    let count = tracker.observe_present(["about", "contact", "footer"]);

    assert_eq!(count, 2);
    assert!(!tracker.is_observed("skills"));

    tracker.on_visibility_change("skills", 1.0);
    assert_eq!(tracker.current_active_id(), None);

    tracker.observe_present(["skills"]);
    tracker.on_visibility_change("skills", 1.0);
    assert_eq!(tracker.current_active_id(), Some("skills"));
}

#[test]
fn test_activate_works_for_unrendered_section() {
    let mut tracker = SectionTracker::new(["about", "skills"]).unwrap();
    let mut host = RecordingHost::default();

    assert!(tracker.activate("skills", &mut host));
    assert_eq!(tracker.current_active_id(), Some("skills"));
}

#[test]
fn test_teardown_stops_visibility_but_not_activate() {
    let mut tracker = observed(&["about", "skills"]);
    let mut host = RecordingHost::default();

    tracker.on_visibility_change("about", 0.5);
    tracker.teardown();
    assert_eq!(tracker.lifecycle(), Lifecycle::TornDown);

    tracker.on_visibility_change("skills", 0.9);
    assert_eq!(tracker.current_active_id(), Some("about"));

    assert_eq!(tracker.observe_present(["skills"]), 0);

    tracker.activate("skills", &mut host);
    assert_eq!(tracker.current_active_id(), Some("skills"));
}

#[test]
fn test_empty_ids_rejected() {
    let err = SectionTracker::new(Vec::<String>::new()).unwrap_err();
    assert!(matches!(err, FolioError::EmptySectionList));
}

#[test]
fn test_duplicate_ids_rejected() {
    let err = SectionTracker::new(["about", "skills", "about"]).unwrap_err();
    match err {
        FolioError::DuplicateSection(id) => assert_eq!(id, "about"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_active_index_follows_registration_order() {
    let mut tracker = observed(&["about", "skills", "projects"]);
    tracker.on_visibility_change("projects", 0.7);
    assert_eq!(tracker.active_index(), Some(2));
}

#[derive(Clone, Debug)]
enum Op {
    Visible(usize, f64),
    Activate(usize),
    Teardown,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..6, 0.0f64..=1.0).prop_map(|(i, r)| Op::Visible(i, r)),
        (0usize..6).prop_map(Op::Activate),
        Just(Op::Teardown),
    ]
}

proptest! {
    #[test]
    fn prop_active_id_always_registered(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        // Indices 4 and 5 name ids that were never registered.
        let names = ["about", "skills", "projects", "contact", "blog", "nonexistent"];
        let registered = &names[..4];
        let mut tracker = observed(registered);
        let mut host = RecordingHost::default();
        let mut initialised = false;

        for op in ops {
            match op {
                Op::Visible(i, ratio) => tracker.on_visibility_change(names[i], ratio),
                Op::Activate(i) => {
                    tracker.activate(names[i], &mut host);
                }
                Op::Teardown => tracker.teardown(),
            }

            match tracker.current_active_id() {
                Some(id) => {
                    prop_assert!(registered.contains(&id));
                    initialised = true;
                }
                None => prop_assert!(!initialised, "active id returned to the sentinel"),
            }
        }
    }
}

#[test]
fn test_settle_initial_defaults_to_first_observed() {
    let mut tracker = SectionTracker::new(["about", "skills", "contact"]).unwrap();
    tracker.observe_present(["skills", "contact"]);
    tracker.on_visibility_change("skills", 0.1);

    assert_eq!(tracker.settle_initial(), Some("skills"));
}

#[test]
fn test_settle_initial_keeps_existing_highlight() {
    let mut tracker = observed(&["about", "skills"]);
    tracker.on_visibility_change("skills", 0.6);

    assert_eq!(tracker.settle_initial(), Some("skills"));
}

#[test]
fn test_settle_initial_after_teardown_stays_empty() {
    let mut tracker = observed(&["about"]);
    tracker.teardown();

    assert_eq!(tracker.settle_initial(), None);
}
