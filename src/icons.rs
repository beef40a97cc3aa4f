//! Glyphs shown next to skill names.
//!
//! Plain Unicode only, so nothing depends on a patched font.

const ICONS: &[(&str, &str)] = &[
    // Languages
    ("Python", "🐍"),
    ("C++", "⊕"),
    ("C", "©"),
    ("Java", "☕"),
    // Frameworks
    ("HTML", "⟨⟩"),
    ("CSS", "#"),
    ("Flutter", "◆"),
    ("Dart", "➶"),
    // Tools
    ("SQL", "⛁"),
    ("Tableau", "▦"),
    ("Firebase", "▲"),
    ("Google Cloud", "☁"),
    // Soft skills
    ("Problem-Solving", "⚡"),
    ("Team Player", "☺"),
    ("Project Management", "↗"),
    ("Adaptability", "↻"),
];

/// Fallback glyph for skills without a dedicated icon.
pub const DEFAULT_ICON: &str = "•";

#[must_use]
/// Glyph for a skill name, matched case-insensitively.
pub fn icon_for(skill: &str) -> Option<&'static str> {
    let skill = skill.trim();
    ICONS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(skill))
        .map(|(_, glyph)| *glyph)
}

#[cfg(test)]
mod tests {
    use super::icon_for;

    #[test]
    fn test_known_and_unknown_skills() {
        assert_eq!(icon_for("Python"), Some("🐍"));
        assert_eq!(icon_for(" google cloud "), Some("☁"));
        assert_eq!(icon_for("COBOL"), None);
    }
}
