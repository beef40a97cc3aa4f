use super::{BackgroundSelector, BackgroundStyle, STYLES};
use crate::theme::ThemePreference;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

fn painted(buf: &Buffer) -> usize {
    buf.content().iter().filter(|c| c.symbol() != " ").count()
}

#[test]
fn test_select_next_prev() {
    let mut selector = BackgroundSelector::new(0, 7);
    assert_eq!(selector.current(), BackgroundStyle::Default);

    selector.prev();
    assert_eq!(selector.current(), BackgroundStyle::Nebula);
    selector.next();
    selector.next();
    assert_eq!(selector.name(), "Particles");

    assert!(!selector.select(STYLES.len()));
    assert_eq!(selector.index(), 1, "out-of-range selection is ignored");
    assert!(selector.select(3));
    assert_eq!(selector.current(), BackgroundStyle::GradientMesh);
}

#[test]
fn test_out_of_range_initial_index_falls_back() {
    let selector = BackgroundSelector::new(42, 7);
    assert_eq!(selector.index(), 0);
}

#[test]
fn test_every_style_paints_something() {
    let area = Rect::new(0, 0, 120, 40);
    let palette = ThemePreference::default().palette();

    for index in 0..STYLES.len() {
        let selector = BackgroundSelector::new(index, 11);
        let mut buf = Buffer::empty(area);
        selector.render(area, &mut buf, 3.0, &palette, true);
        assert!(painted(&buf) > 0, "{} drew nothing", selector.name());
    }
}

#[test]
fn test_text_is_never_overwritten() {
    let area = Rect::new(0, 0, 80, 24);
    let palette = ThemePreference::default().palette();
    let selector = BackgroundSelector::new(1, 5);

    let mut buf = Buffer::empty(area);
    for y in 0..area.height {
        for x in 0..area.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol("x");
            }
        }
    }
    selector.render(area, &mut buf, 1.5, &palette, true);
    assert!(buf.content().iter().all(|c| c.symbol() == "x"));
}

#[test]
fn test_same_seed_same_scene() {
    let area = Rect::new(0, 0, 60, 20);
    let palette = ThemePreference::default().palette();

    let mut a = Buffer::empty(area);
    let mut b = Buffer::empty(area);
    BackgroundSelector::new(4, 99).render(area, &mut a, 2.0, &palette, false);
    BackgroundSelector::new(4, 99).render(area, &mut b, 2.0, &palette, false);
    assert_eq!(a, b);
}

#[test]
fn test_zero_area_is_noop() {
    let area = Rect::new(0, 0, 0, 0);
    let palette = ThemePreference::default().palette();
    let mut buf = Buffer::empty(area);
    BackgroundSelector::new(0, 1).render(area, &mut buf, 0.0, &palette, true);
    assert_eq!(painted(&buf), 0);
}

#[test]
fn test_find_style_by_loose_name() {
    use super::find_style;

    assert_eq!(find_style("default"), Some(0));
    assert_eq!(find_style("gradient-mesh"), Some(3));
    assert_eq!(find_style("Gradient Mesh"), Some(3));
    assert_eq!(find_style("NEBULA"), Some(5));
    assert_eq!(find_style("plasma"), None);
}
