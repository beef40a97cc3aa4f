//! Animated decorative backgrounds.
//!
//! Each style is a scene of sprites scattered once from a seeded generator and then animated as a
//! pure function of elapsed time, so redraws are cheap and the same seed always gives the same
//! picture. Scenes only paint cells that are still blank after the page text has been drawn.

use crate::theme::Palette;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::f64::consts::TAU;

/// The selectable background variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundStyle {
    /// Soft drifting blobs over a dotted grid with sweeping lines.
    Default,
    /// Fifty floating specks.
    Particles,
    /// Three rolling wave bands along the bottom.
    Waves,
    /// Five breathing gradient blobs.
    GradientMesh,
    /// Fifteen rotating outline shapes.
    Geometric,
    /// Eight large faint clouds with scattered stars.
    Nebula,
}

/// Every style in selector order.
pub const STYLES: [BackgroundStyle; 6] = [
    BackgroundStyle::Default,
    BackgroundStyle::Particles,
    BackgroundStyle::Waves,
    BackgroundStyle::GradientMesh,
    BackgroundStyle::Geometric,
    BackgroundStyle::Nebula,
];

impl BackgroundStyle {
    #[must_use]
    /// Display name used in the selector and status line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Particles => "Particles",
            Self::Waves => "Waves",
            Self::GradientMesh => "Gradient Mesh",
            Self::Geometric => "Geometric",
            Self::Nebula => "Nebula",
        }
    }

    fn sprite_count(self) -> usize {
        match self {
            Self::Default | Self::Nebula => 8,
            Self::Particles => 50,
            Self::Waves => 3,
            Self::GradientMesh => 5,
            Self::Geometric => 15,
        }
    }
}

#[must_use]
/// Position in [`STYLES`] of a style named case-insensitively, ignoring spaces, dashes and
/// underscores, so `gradient-mesh` finds "Gradient Mesh".
pub fn find_style(name: &str) -> Option<usize> {
    let normalise = |text: &str| -> String {
        text.chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect()
    };
    let wanted = normalise(name);
    STYLES.iter().position(|style| normalise(style.name()) == wanted)
}

#[derive(Clone, Copy, Debug)]
struct Sprite {
    /// Horizontal position as a fraction of the area width.
    x: f64,
    /// Vertical position as a fraction of the area height.
    y: f64,
    /// Size as a fraction of the area (radius for blobs, glyph variant for shapes).
    size: f64,
    /// Seconds per animation cycle.
    period: f64,
    /// Cycle offset in `[0, 1)`.
    phase: f64,
    /// Drift amplitude in cells.
    drift: f64,
}

#[derive(Clone, Debug)]
struct Scene {
    style: BackgroundStyle,
    sprites: Vec<Sprite>,
}

impl Scene {
    fn generate(style: BackgroundStyle, rng: &mut StdRng) -> Self {
        let sprites = (0..style.sprite_count())
            .map(|i| {
                let (size, period, drift) = match style {
                    BackgroundStyle::Default => (
                        rng.random_range(0.10..0.30),
                        rng.random_range(20.0..40.0),
                        rng.random_range(-3.0..3.0),
                    ),
                    BackgroundStyle::Particles => (
                        rng.random_range(0.0..1.0),
                        rng.random_range(10.0..20.0),
                        rng.random_range(-6.0..6.0),
                    ),
                    BackgroundStyle::Waves => {
                        #[allow(clippy::cast_precision_loss)]
                        let i = i as f64;
                        (0.10 + i * 0.15, 20.0 + i * 5.0, 2.0)
                    }
                    BackgroundStyle::GradientMesh => (
                        rng.random_range(0.10..0.35),
                        rng.random_range(20.0..40.0),
                        rng.random_range(-4.0..4.0),
                    ),
                    BackgroundStyle::Geometric => (
                        rng.random_range(0.0..1.0),
                        rng.random_range(30.0..60.0),
                        rng.random_range(-2.0..2.0),
                    ),
                    BackgroundStyle::Nebula => (
                        rng.random_range(0.20..0.50),
                        rng.random_range(40.0..80.0),
                        rng.random_range(-2.0..2.0),
                    ),
                };
                Sprite {
                    x: rng.random_range(0.0..1.0),
                    y: rng.random_range(0.0..1.0),
                    size,
                    period,
                    phase: rng.random_range(0.0..1.0),
                    drift,
                }
            })
            .collect();

        Self { style, sprites }
    }
}

/// Chooses which background is drawn and draws it.
#[derive(Clone, Debug)]
pub struct BackgroundSelector {
    index: usize,
    scenes: Vec<Scene>,
}

impl BackgroundSelector {
    #[must_use]
    /// Scatters every scene from `seed` and selects `index` (clamped to the first style).
    pub fn new(index: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let scenes = STYLES
            .iter()
            .map(|style| Scene::generate(*style, &mut rng))
            .collect();
        Self {
            index: if index < STYLES.len() { index } else { 0 },
            scenes,
        }
    }

    #[must_use]
    /// Selected style.
    pub fn current(&self) -> BackgroundStyle {
        STYLES[self.index]
    }

    #[must_use]
    /// Selected position in [`STYLES`].
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    /// Name of the selected style.
    pub fn name(&self) -> &'static str {
        self.current().name()
    }

    /// Selects a style by position. Out-of-range positions are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < STYLES.len() {
            self.index = index;
            tracing::debug!(background = self.name(), "background selected");
            true
        } else {
            false
        }
    }

    /// Advances to the next style, wrapping around.
    pub fn next(&mut self) {
        self.select((self.index + 1) % STYLES.len());
    }

    /// Steps back to the previous style, wrapping around.
    pub fn prev(&mut self) {
        self.select((self.index + STYLES.len() - 1) % STYLES.len());
    }

    /// Paints the selected scene into the blank cells of `area`.
    pub fn render(
        &self,
        area: Rect,
        buf: &mut Buffer,
        elapsed: f64,
        palette: &Palette,
        dark: bool,
    ) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let scene = &self.scenes[self.index];
        let mut canvas = Canvas {
            area,
            buf,
            color: palette.decoration,
        };
        match scene.style {
            BackgroundStyle::Default => draw_default(&mut canvas, &scene.sprites, elapsed),
            BackgroundStyle::Particles => draw_particles(&mut canvas, &scene.sprites, elapsed),
            BackgroundStyle::Waves => draw_waves(&mut canvas, &scene.sprites, elapsed),
            BackgroundStyle::GradientMesh => draw_mesh(&mut canvas, &scene.sprites, elapsed),
            BackgroundStyle::Geometric => draw_geometric(&mut canvas, &scene.sprites, elapsed),
            BackgroundStyle::Nebula => draw_nebula(&mut canvas, &scene.sprites, elapsed, dark),
        }
    }
}

struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    color: Color,
}

impl Canvas<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn plot(&mut self, x: f64, y: f64, symbol: &str) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (col, row) = (x.floor() as u16, y.floor() as u16);
        if col >= self.area.width || row >= self.area.height {
            return;
        }
        let position = (self.area.x + col, self.area.y + row);
        if let Some(cell) = self.buf.cell_mut(position) {
            if cell.symbol() == " " {
                cell.set_symbol(symbol).set_fg(self.color);
            }
        }
    }

    fn width(&self) -> f64 {
        f64::from(self.area.width)
    }

    fn height(&self) -> f64 {
        f64::from(self.area.height)
    }

    /// Fills an ellipse with a sparse dither, denser towards the centre.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn blob(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) {
        if rx < 0.5 || ry < 0.5 {
            return;
        }
        let (x0, x1) = ((cx - rx).max(0.0), (cx + rx).min(self.width()));
        let (y0, y1) = ((cy - ry).max(0.0), (cy + ry).min(self.height()));
        let mut y = y0.floor();
        while y < y1 {
            let mut x = x0.floor();
            while x < x1 {
                let dx = (x - cx) / rx;
                let dy = (y - cy) / ry;
                let d = dx * dx + dy * dy;
                let stipple = ((x as u32) + 2 * (y as u32)) % 3 == 0;
                if d <= 0.35 && stipple {
                    self.plot(x, y, "▒");
                } else if d <= 1.0 && stipple {
                    self.plot(x, y, "░");
                }
                x += 1.0;
            }
            y += 1.0;
        }
    }
}

/// Smooth oscillation in `[-1, 1]` for a sprite at time `t`.
fn wave(sprite: &Sprite, t: f64) -> f64 {
    (TAU * (t / sprite.period + sprite.phase)).sin()
}

fn draw_default(canvas: &mut Canvas<'_>, sprites: &[Sprite], t: f64) {
    let (w, h) = (canvas.width(), canvas.height());

    let mut y = 1.0;
    while y < h {
        let mut x = 2.0;
        while x < w {
            canvas.plot(x, y, "·");
            x += 10.0;
        }
        y += 5.0;
    }

    for sprite in sprites {
        let s = wave(sprite, t);
        let cx = sprite.x * w + sprite.drift * s;
        let cy = sprite.y * h + sprite.drift * 0.5 * s;
        let scale = 1.0 + 0.1 * s;
        canvas.blob(cx, cy, sprite.size * w * 0.5 * scale, sprite.size * h * 0.5 * scale);
    }

    // Three sweeping lines at quarter heights, growing and shrinking as they travel.
    for i in 0..3u8 {
        let fi = f64::from(i);
        let period = 15.0 + fi * 5.0;
        let progress = ((t - fi * 5.0).max(0.0) / period).fract();
        let span = (progress * TAU).sin().abs() * w * 0.3;
        let head = progress * w;
        let row = h * 0.25 * (fi + 1.0);
        let mut x = head - span;
        while x < head {
            canvas.plot(x, row, "─");
            x += 1.0;
        }
    }
}

fn draw_particles(canvas: &mut Canvas<'_>, sprites: &[Sprite], t: f64) {
    let (w, h) = (canvas.width(), canvas.height());
    for sprite in sprites {
        let s = wave(sprite, t);
        // Opacity swings between 0.2 and 0.8; the dimmest part of the cycle is not drawn.
        let opacity = 0.5 + 0.3 * s;
        if opacity < 0.3 {
            continue;
        }
        let symbol = if sprite.size > 0.66 && opacity > 0.6 {
            "•"
        } else {
            "·"
        };
        canvas.plot(sprite.x * w, sprite.y * h + sprite.drift * s, symbol);
    }
}

fn draw_waves(canvas: &mut Canvas<'_>, sprites: &[Sprite], t: f64) {
    let (w, h) = (canvas.width(), canvas.height());
    for sprite in sprites {
        let base = h * (1.0 - sprite.size);
        let shift = wave(sprite, t) * w * 0.1;
        let mut x = 0.0;
        while x < w {
            let y = base + sprite.drift * ((x + shift) / w * TAU * 2.0).sin();
            canvas.plot(x, y, "~");
            x += 1.0;
        }
    }
}

fn draw_mesh(canvas: &mut Canvas<'_>, sprites: &[Sprite], t: f64) {
    let (w, h) = (canvas.width(), canvas.height());
    for sprite in sprites {
        let s = wave(sprite, t);
        let scale = 1.1 + 0.1 * s;
        canvas.blob(
            sprite.x * w + sprite.drift * s,
            sprite.y * h + sprite.drift * 0.5 * s,
            sprite.size * w * 0.5 * scale,
            sprite.size * h * 0.5 * scale,
        );
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_geometric(canvas: &mut Canvas<'_>, sprites: &[Sprite], t: f64) {
    const FRAMES: [[&str; 4]; 3] = [
        ["○", "◯", "○", "◌"],
        ["□", "◇", "□", "◇"],
        ["◇", "□", "◆", "□"],
    ];
    let (w, h) = (canvas.width(), canvas.height());
    for sprite in sprites {
        let shape = ((sprite.size * 3.0) as usize).min(2);
        let turn = (t / sprite.period + sprite.phase).fract();
        let frame = ((turn * 4.0) as usize).min(3);
        let s = wave(sprite, t);
        canvas.plot(
            sprite.x * w + sprite.drift * s,
            sprite.y * h,
            FRAMES[shape][frame],
        );
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_nebula(canvas: &mut Canvas<'_>, sprites: &[Sprite], t: f64, dark: bool) {
    let (w, h) = (canvas.width(), canvas.height());
    for sprite in sprites {
        let s = wave(sprite, t);
        let scale = 1.0 + 0.1 * s;
        canvas.blob(
            sprite.x * w + sprite.drift * s,
            sprite.y * h + sprite.drift * s,
            sprite.size * w * 0.5 * scale,
            sprite.size * h * 0.5 * scale,
        );
    }

    if dark {
        // Stars are placed on a fixed lattice and twinkle with the first cloud's cycle.
        let twinkle = sprites.first().map_or(0.0, |sprite| wave(sprite, t));
        let mut i = 0u32;
        let mut y = 0.0;
        while y < h {
            let mut x = f64::from((i * 7) % 13);
            while x < w {
                if (i + (twinkle * 2.0).round() as u32) % 5 != 0 {
                    canvas.plot(x, y, "✦");
                }
                x += 23.0;
                i += 1;
            }
            y += 3.0;
        }
    }
}

#[cfg(test)]
#[path = "tests/background.rs"]
mod tests;
