use super::{layout, metadata_text, tokenize, MARGIN};
use crate::document::Portfolio;
use crate::theme::ThemePreference;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn test_regions_tile_sections_in_order() {
    let portfolio = Portfolio::builtin().unwrap();
    let palette = ThemePreference::default().palette();
    let page = layout(&portfolio, 100, &palette);

    assert_eq!(page.region_ids(), portfolio.ids());
    for pair in page.regions.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "regions are contiguous");
        assert!(!pair[0].is_empty());
    }
    assert_eq!(page.regions.last().unwrap().end, page.len());

    let about = page.region("about").unwrap();
    assert!(line_text(&page.lines[about.start]).contains("About"));
    assert!(about.start > 0, "hero block comes first");
}

#[test]
fn test_lines_fit_width() {
    let portfolio = Portfolio::builtin().unwrap();
    let palette = ThemePreference::default().palette();

    for width in [40, 72, 120] {
        let page = layout(&portfolio, width, &palette);
        for line in &page.lines {
            let text = line_text(line);
            assert!(
                text.width() <= width,
                "{} columns at width {width}: {text:?}",
                text.width()
            );
        }
    }
}

#[test]
fn test_narrow_layout_is_taller() {
    let portfolio = Portfolio::builtin().unwrap();
    let palette = ThemePreference::default().palette();

    let wide = layout(&portfolio, 140, &palette);
    let narrow = layout(&portfolio, 50, &palette);
    assert!(narrow.len() > wide.len());
}

#[test]
fn test_skill_bullets_use_icons() {
    let source = "# Name\n\n## Skills\n\n### Languages\n\n- Python\n- Cobol\n";
    let portfolio = Portfolio::parse(source).unwrap();
    let palette = ThemePreference::default().palette();
    let page = layout(&portfolio, 80, &palette);

    let texts: Vec<String> = page.lines.iter().map(line_text).collect();
    assert!(texts.iter().any(|t| t.contains("🐍 Python")), "{texts:#?}");
    assert!(texts.iter().any(|t| t.contains("• Cobol")), "{texts:#?}");
}

#[test]
fn test_metadata_and_badges() {
    assert_eq!(metadata_text("*Feb 2024*"), Some("Feb 2024"));
    assert_eq!(metadata_text("_2019 - 2023_"), Some("2019 - 2023"));
    assert_eq!(metadata_text("**CGPA**"), None);
    assert_eq!(metadata_text("*a* and *b*"), None);

    let palette = ThemePreference::default().palette();
    let tokens = tokenize("Built with `Flutter` `Dart`.", Style::new(), &palette);
    let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Built", "with", " Flutter ", " Dart ", "."]);
    assert_eq!(tokens[2].style.bg, Some(palette.secondary));
    assert!(!tokens[4].space_before);
}

#[test]
fn test_bold_spans() {
    let palette = ThemePreference::default().palette();
    let tokens = tokenize("Scored **CGPA 8.1** overall", Style::new(), &palette);

    let bold: Vec<&str> = tokens
        .iter()
        .filter(|t| t.style.add_modifier.contains(Modifier::BOLD))
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(bold, vec!["CGPA", "8.1"]);
}

#[test]
fn test_text_starts_after_margin() {
    let source = "# Name\n\n## About\n\nHello there.\n";
    let portfolio = Portfolio::parse(source).unwrap();
    let palette = ThemePreference::default().palette();
    let page = layout(&portfolio, 60, &palette);

    let hello = page
        .lines
        .iter()
        .map(line_text)
        .find(|t| t.contains("Hello"))
        .unwrap();
    assert_eq!(hello, format!("{}Hello there.", " ".repeat(MARGIN)));
}
