//! Theme preference: light or dark mode plus an accent colour preset.
//!
//! Colour presets are stored the way a stylesheet would carry them, as `"H S% L%"` strings, and
//! converted to terminal RGB when a palette is built. Choosing a preset is a lookup by name;
//! the resulting palette is what the renderer styles with.

use crate::error::{FolioError, Result};
use ratatui::style::Color;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A named accent colour set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorTheme {
    /// Identifier used in configuration and on the command line.
    pub name: &'static str,
    /// Human-readable label shown in the selector.
    pub label: &'static str,
    /// Main accent, used for headings and the active navigation entry.
    pub primary: &'static str,
    /// Soft background tint for badges.
    pub secondary: &'static str,
    /// Highlight tint.
    pub accent: &'static str,
}

/// Every selectable colour preset, in selector order.
pub const COLOR_THEMES: &[ColorTheme] = &[
    ColorTheme {
        name: "default",
        label: "Default",
        primary: "15 80% 50%",
        secondary: "30 60% 95%",
        accent: "15 80% 95%",
    },
    ColorTheme {
        name: "blue",
        label: "Ocean",
        primary: "210 100% 50%",
        secondary: "210 60% 95%",
        accent: "210 80% 95%",
    },
    ColorTheme {
        name: "purple",
        label: "Lavender",
        primary: "270 76% 53%",
        secondary: "270 60% 95%",
        accent: "270 80% 95%",
    },
    ColorTheme {
        name: "green",
        label: "Forest",
        primary: "142 76% 36%",
        secondary: "142 60% 95%",
        accent: "142 80% 95%",
    },
    ColorTheme {
        name: "pink",
        label: "Rose",
        primary: "330 90% 65%",
        secondary: "330 60% 95%",
        accent: "330 80% 95%",
    },
    ColorTheme {
        name: "teal",
        label: "Aqua",
        primary: "180 100% 30%",
        secondary: "180 60% 95%",
        accent: "180 80% 95%",
    },
    ColorTheme {
        name: "gold",
        label: "Gold",
        primary: "45 100% 50%",
        secondary: "45 60% 95%",
        accent: "45 80% 95%",
    },
];

#[must_use]
/// Finds a colour preset by name.
pub fn find_color(name: &str) -> Option<&'static ColorTheme> {
    COLOR_THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Hue, saturation and lightness.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f64,
    /// Saturation in `[0, 1]`.
    pub s: f64,
    /// Lightness in `[0, 1]`.
    pub l: f64,
}

impl Hsl {
    #[must_use]
    /// Parses the `"H S% L%"` notation used by the presets.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split_whitespace();
        let h = parts.next()?.parse::<f64>().ok()?;
        let s = parts.next()?.strip_suffix('%')?.parse::<f64>().ok()?;
        let l = parts.next()?.strip_suffix('%')?.parse::<f64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            h: h.rem_euclid(360.0),
            s: (s / 100.0).clamp(0.0, 1.0),
            l: (l / 100.0).clamp(0.0, 1.0),
        })
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    /// Converts to 8-bit RGB.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let c = (1.0 - (2.0 * self.l - 1.0).abs()) * self.s;
        let h = self.h / 60.0;
        let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match h {
            h if h < 1.0 => (c, x, 0.0),
            h if h < 2.0 => (x, c, 0.0),
            h if h < 3.0 => (0.0, c, x),
            h if h < 4.0 => (0.0, x, c),
            h if h < 5.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = self.l - c / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (channel(r), channel(g), channel(b))
    }

    #[must_use]
    /// Converts to a terminal colour.
    pub fn to_color(self) -> Color {
        let (r, g, b) = self.to_rgb();
        Color::Rgb(r, g, b)
    }

    #[must_use]
    /// Same hue and saturation at a different lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self {
            l: l.clamp(0.0, 1.0),
            ..self
        }
    }
}

fn preset_color(text: &str, fallback: Color) -> Color {
    Hsl::parse(text).map_or(fallback, Hsl::to_color)
}

/// Light, dark, or whatever the terminal prefers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark text on a light background.
    Light,
    /// Light text on a dark background.
    Dark,
    /// Follow the host's preference.
    #[default]
    System,
}

impl ThemeMode {
    #[must_use]
    /// Resolves `System` against the host preference.
    pub fn is_dark(self, system_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_dark,
        }
    }
}

impl FromStr for ThemeMode {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(FolioError::UnknownTheme(other.to_string())),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        };
        f.write_str(name)
    }
}

/// Concrete colours the renderer styles with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Headings, active navigation entry, cursor.
    pub primary: Color,
    /// Badge background.
    pub secondary: Color,
    /// Highlight colour.
    pub accent: Color,
    /// Body text.
    pub foreground: Color,
    /// Page background.
    pub background: Color,
    /// Dates, hints, inactive navigation entries.
    pub muted: Color,
    /// Decorative background glyphs.
    pub decoration: Color,
}

/// The reader's current theme choice: mode and colour preset.
#[derive(Clone, Debug)]
pub struct ThemePreference {
    mode: ThemeMode,
    color: &'static ColorTheme,
    system_dark: bool,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            mode: ThemeMode::System,
            color: &COLOR_THEMES[0],
            system_dark: true,
        }
    }
}

impl ThemePreference {
    /// Builds a preference from configured names.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is unknown.
    pub fn from_names(mode: &str, color: &str) -> Result<Self> {
        let mode = mode.parse()?;
        let color = find_color(color).ok_or_else(|| FolioError::UnknownColor(color.to_string()))?;
        Ok(Self {
            mode,
            color,
            ..Self::default()
        })
    }

    #[must_use]
    /// Sets what `System` mode resolves to.
    pub fn with_system_dark(mut self, system_dark: bool) -> Self {
        self.system_dark = system_dark;
        self
    }

    #[must_use]
    /// Current mode as chosen, before resolving `System`.
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    #[must_use]
    /// Whether the page is currently drawn dark.
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark(self.system_dark)
    }

    #[must_use]
    /// Currently selected colour preset.
    pub fn color(&self) -> &'static ColorTheme {
        self.color
    }

    /// Chooses a mode.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        tracing::debug!(%mode, "theme mode changed");
        self.mode = mode;
    }

    /// Swaps between light and dark; `System` is resolved first.
    pub fn toggle_mode(&mut self) {
        let next = if self.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self.set_mode(next);
    }

    /// Selects a colour preset by name. Unknown names leave the selection untouched.
    pub fn set_color(&mut self, name: &str) -> bool {
        match find_color(name) {
            Some(theme) => {
                tracing::debug!(color = theme.name, "colour preset changed");
                self.color = theme;
                true
            }
            None => false,
        }
    }

    /// Moves to the next or previous preset, wrapping around.
    pub fn cycle_color(&mut self, forward: bool) {
        let count = COLOR_THEMES.len();
        let index = self.color_index();
        let next = if forward {
            (index + 1) % count
        } else {
            (index + count - 1) % count
        };
        self.color = &COLOR_THEMES[next];
    }

    #[must_use]
    /// Position of the selected preset in [`COLOR_THEMES`].
    pub fn color_index(&self) -> usize {
        COLOR_THEMES
            .iter()
            .position(|t| t.name == self.color.name)
            .unwrap_or(0)
    }

    #[must_use]
    /// Builds the palette for the current mode and preset.
    pub fn palette(&self) -> Palette {
        let primary_hsl = Hsl::parse(self.color.primary);
        let primary = primary_hsl.map_or(Color::LightRed, Hsl::to_color);

        if self.is_dark() {
            Palette {
                primary,
                secondary: primary_hsl
                    .map_or(Color::DarkGray, |p| p.with_lightness(0.18).to_color()),
                // Dark mode accents with the primary itself.
                accent: primary,
                foreground: Color::Rgb(230, 230, 230),
                background: Color::Rgb(12, 12, 14),
                muted: Color::Rgb(140, 140, 150),
                decoration: primary_hsl
                    .map_or(Color::DarkGray, |p| p.with_lightness(0.22).to_color()),
            }
        } else {
            Palette {
                primary,
                secondary: preset_color(self.color.secondary, Color::Gray),
                accent: preset_color(self.color.accent, Color::Gray),
                foreground: Color::Rgb(24, 24, 27),
                background: Color::Rgb(250, 250, 250),
                muted: Color::Rgb(110, 110, 120),
                decoration: primary_hsl.map_or(Color::Gray, |p| p.with_lightness(0.85).to_color()),
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/theme.rs"]
mod tests;
