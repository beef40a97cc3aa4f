use super::{CursorFollower, Spring, DOT_SPRING, HOVER_SCALE, OUTLINE_SPRING};

#[test]
fn test_spring_converges_on_target() {
    let mut spring = Spring::new(DOT_SPRING, 0.0);
    spring.set_target(10.0);
    for _ in 0..120 {
        spring.step(1.0 / 60.0);
    }
    assert!(spring.is_settled(), "value {}", spring.value());
    assert!((spring.value() - 10.0).abs() < 0.01);
}

#[test]
fn test_large_step_stays_stable() {
    let mut spring = Spring::new(DOT_SPRING, 0.0);
    spring.set_target(50.0);
    spring.step(5.0);
    assert!((spring.value() - 50.0).abs() < 0.5, "value {}", spring.value());
}

#[test]
fn test_negative_step_is_ignored() {
    let mut spring = Spring::new(OUTLINE_SPRING, 3.0);
    spring.set_target(8.0);
    spring.step(-1.0);
    assert!((spring.value() - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_outline_trails_dot() {
    let mut cursor = CursorFollower::default();
    cursor.pointer_moved(0.0, 0.0);
    cursor.pointer_moved(40.0, 10.0);
    cursor.tick(0.05);

    let (dot_x, _) = cursor.dot();
    let (outline_x, _) = cursor.outline();
    assert!(dot_x > outline_x, "dot {dot_x} outline {outline_x}");
    assert!(outline_x > 0.0);
}

#[test]
fn test_first_move_places_directly() {
    let mut cursor = CursorFollower::default();
    assert!(!cursor.is_visible());

    cursor.pointer_moved(12.0, 7.0);
    assert!(cursor.is_visible());
    assert_eq!(cursor.dot(), (12.0, 7.0));
    assert_eq!(cursor.outline(), (12.0, 7.0));

    cursor.pointer_left();
    assert!(!cursor.is_visible());
}

#[test]
fn test_hover_scales_outline() {
    let mut cursor = CursorFollower::default();
    cursor.set_hover(true);
    for _ in 0..60 {
        cursor.tick(1.0 / 60.0);
    }
    assert!((cursor.scale() - HOVER_SCALE).abs() < 0.05);

    cursor.set_hover(false);
    for _ in 0..60 {
        cursor.tick(1.0 / 60.0);
    }
    assert!((cursor.scale() - 1.0).abs() < 0.05);
}
