//! Pointer follower: a dot and an outline that chase the mouse on damped springs.
//!
//! The dot uses a stiff spring and keeps up closely; the outline uses a softer one and trails
//! behind. Hovering an interactive element grows the outline.

/// Physical constants of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Pull towards the target per unit of distance.
    pub stiffness: f64,
    /// Resistance per unit of velocity.
    pub damping: f64,
    /// Inertia of the moving point.
    pub mass: f64,
}

/// Spring used for the dot and for the hover scale.
pub const DOT_SPRING: SpringConfig = SpringConfig {
    stiffness: 300.0,
    damping: 25.0,
    mass: 1.0,
};

/// Softer spring used for the trailing outline.
pub const OUTLINE_SPRING: SpringConfig = SpringConfig {
    stiffness: 100.0,
    damping: 25.0,
    mass: 1.0,
};

/// Outline scale while hovering an interactive element.
pub const HOVER_SCALE: f64 = 1.5;

/// Longest step integrated at once; larger frame gaps are split.
const MAX_STEP: f64 = 1.0 / 120.0;

/// A one-dimensional damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    #[must_use]
    /// A spring at rest at `value`.
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Moves the point the spring pulls towards.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Places the spring at `value` with no motion.
    pub fn jump(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Advances by `dt` seconds with semi-implicit Euler steps.
    pub fn step(&mut self, dt: f64) {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let force = self.config.stiffness * (self.target - self.value)
                - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass.max(f64::EPSILON) * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
    }

    #[must_use]
    /// Current position.
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    /// Current target.
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    /// Whether the spring has effectively come to rest on its target.
    pub fn is_settled(&self) -> bool {
        (self.target - self.value).abs() < 0.01 && self.velocity.abs() < 0.01
    }
}

/// Dot and outline decorations following the pointer.
#[derive(Clone, Debug)]
pub struct CursorFollower {
    dot: (Spring, Spring),
    outline: (Spring, Spring),
    scale: Spring,
    visible: bool,
    placed: bool,
}

impl Default for CursorFollower {
    fn default() -> Self {
        Self {
            dot: (Spring::new(DOT_SPRING, 0.0), Spring::new(DOT_SPRING, 0.0)),
            outline: (
                Spring::new(OUTLINE_SPRING, 0.0),
                Spring::new(OUTLINE_SPRING, 0.0),
            ),
            scale: Spring::new(DOT_SPRING, 1.0),
            visible: false,
            placed: false,
        }
    }
}

impl CursorFollower {
    /// Records a pointer position; the decorations become visible.
    ///
    /// The first position after construction places both decorations directly, so they do not
    /// fly in from the corner.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if self.placed {
            self.dot.0.set_target(x);
            self.dot.1.set_target(y);
            self.outline.0.set_target(x);
            self.outline.1.set_target(y);
        } else {
            self.dot.0.jump(x);
            self.dot.1.jump(y);
            self.outline.0.jump(x);
            self.outline.1.jump(y);
            self.placed = true;
        }
        self.visible = true;
    }

    /// Hides the decorations when the pointer leaves the window.
    pub fn pointer_left(&mut self) {
        self.visible = false;
    }

    /// Grows or restores the outline.
    pub fn set_hover(&mut self, hovering: bool) {
        self.scale.set_target(if hovering { HOVER_SCALE } else { 1.0 });
    }

    /// Advances all springs.
    pub fn tick(&mut self, dt: f64) {
        self.dot.0.step(dt);
        self.dot.1.step(dt);
        self.outline.0.step(dt);
        self.outline.1.step(dt);
        self.scale.step(dt);
    }

    #[must_use]
    /// Dot position.
    pub fn dot(&self) -> (f64, f64) {
        (self.dot.0.value(), self.dot.1.value())
    }

    #[must_use]
    /// Outline position.
    pub fn outline(&self) -> (f64, f64) {
        (self.outline.0.value(), self.outline.1.value())
    }

    #[must_use]
    /// Outline scale factor.
    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    #[must_use]
    /// Whether the pointer is inside the window.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
#[path = "tests/cursor.rs"]
mod tests;
