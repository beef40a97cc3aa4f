use super::{entry_for, label_for, NavMenu, NAV_ENTRIES};
use ratatui::layout::Rect;

#[test]
fn test_entries_cover_page_sections() {
    let ids: Vec<&str> = NAV_ENTRIES.iter().map(|e| e.id).collect();
    assert_eq!(
        ids,
        vec![
            "about",
            "skills",
            "projects",
            "certificates",
            "achievements",
            "experience",
            "education",
            "contact"
        ]
    );
    assert_eq!(entry_for("education").map(|e| e.label), Some("Education"));
    assert_eq!(label_for("blog"), "blog");
}

#[test]
fn test_compact_breakpoint_and_closing() {
    let mut menu = NavMenu::default();
    menu.set_width(80, 100);
    assert!(menu.is_compact());

    menu.toggle();
    assert!(menu.is_open());

    menu.set_width(140, 100);
    assert!(!menu.is_compact());
    assert!(!menu.is_open(), "widening closes the drop-down");
}

#[test]
fn test_focus_wraps() {
    let mut menu = NavMenu::default();
    menu.focus_prev(8);
    assert_eq!(menu.focus(), 7);
    menu.focus_next(8);
    assert_eq!(menu.focus(), 0);
    menu.focus_next(0);
    assert_eq!(menu.focus(), 0);
}

#[test]
fn test_hit_testing() {
    let mut menu = NavMenu::default();
    menu.record_hit(Rect::new(10, 0, 5, 1), "about");
    menu.record_hit(Rect::new(17, 0, 6, 1), "skills");

    assert_eq!(menu.hit_test(12, 0), Some("about"));
    assert_eq!(menu.hit_test(22, 0), Some("skills"));
    assert_eq!(menu.hit_test(15, 0), None);
    assert_eq!(menu.hit_test(12, 1), None);

    menu.clear_hits();
    assert_eq!(menu.hit_test(12, 0), None);
}
