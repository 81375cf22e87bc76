//! Document styles shared by every generated template

use docx_rs::*;

/// Table style applied to every labeled table.
pub const GRID_TABLE_STYLE: &str = "LightGridAccent1";

pub const BODY_FONT: &str = "Calibri";
/// Half-points, so 22 is 11pt.
pub const BODY_SIZE: usize = 22;

pub const NAVY: &str = "003366";
pub const GREEN: &str = "006600";
pub const GRAY: &str = "808080";
/// Border color of the grid table style (Word's Accent 1).
pub const ACCENT: &str = "4F81BD";

fn body_fonts() -> RunFonts {
    RunFonts::new()
        .ascii(BODY_FONT)
        .hi_ansi(BODY_FONT)
        .east_asia(BODY_FONT)
        .cs(BODY_FONT)
}

fn create_heading_style(name: &str, display_name: &str, size: usize) -> Style {
    Style::new(name, StyleType::Paragraph)
        .name(display_name)
        .size(size)
        .color(NAVY)
        .bold()
}

/// Style id used for a heading of the given level.
pub fn heading_style_id(level: usize) -> &'static str {
    match level {
        0 | 1 => "Heading1",
        2 => "Heading2",
        _ => "Heading3",
    }
}

/// Grid borders of the "Light Grid Accent 1" look: every edge and every
/// inner line in the accent color.
fn grid_borders() -> TableBorders {
    [
        TableBorderPosition::Top,
        TableBorderPosition::Left,
        TableBorderPosition::Bottom,
        TableBorderPosition::Right,
        TableBorderPosition::InsideH,
        TableBorderPosition::InsideV,
    ]
    .into_iter()
    .fold(TableBorders::new(), |borders, position| {
        borders.set(TableBorder::new(position).size(8).color(ACCENT))
    })
}

fn create_grid_table_style() -> Style {
    let mut grid = Style::new(GRID_TABLE_STYLE, StyleType::Table).name("Light Grid Accent 1");
    grid.table_property = TableProperty::new().set_borders(grid_borders());
    grid
}

/// Adds `style`, dropping any style `docx-rs` already registered under the
/// same id. Style ids must be unique within `word/styles.xml`.
fn replace_style(mut docx: Docx, style: Style) -> Docx {
    docx.styles.styles.retain(|s| s.style_id != style.style_id);
    docx.add_style(style)
}

/// Registers the Normal style, the heading styles and the grid table style.
///
/// Called exactly once, when a [`crate::builder::TemplateBuilder`] is created.
pub fn initialize_styles(docx: Docx) -> Docx {
    let normal = Style::new("Normal", StyleType::Paragraph)
        .name("Normal")
        .fonts(body_fonts())
        .size(BODY_SIZE);

    [
        normal,
        create_heading_style("Heading1", "Heading 1", 28),
        create_heading_style("Heading2", "Heading 2", 26),
        create_heading_style("Heading3", "Heading 3", 24),
        create_grid_table_style(),
    ]
    .into_iter()
    .fold(
        docx.default_fonts(body_fonts()).default_size(BODY_SIZE),
        replace_style,
    )
}

/// A run that turns every `\n` into a text-wrapping break.
///
/// Word ignores raw newlines inside `w:t`, so multi-line copy has to be
/// split into text and break children.
pub fn multiline_run(text: &str) -> Run {
    let mut run = Run::new();
    let mut lines = text.split('\n').peekable();
    while let Some(line) = lines.next() {
        if !line.is_empty() {
            run = run.add_text(line);
        }
        if lines.peek().is_some() {
            run = run.add_break(BreakType::TextWrapping);
        }
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_breaks(run: &Run) -> usize {
        run.children
            .iter()
            .filter(|c| matches!(c, RunChild::Break(_)))
            .count()
    }

    fn count_texts(run: &Run) -> usize {
        run.children
            .iter()
            .filter(|c| matches!(c, RunChild::Text(_)))
            .count()
    }

    #[test]
    fn multiline_run_splits_on_newlines() {
        let cases = vec![
            ("single line", 1, 0),
            ("first\nsecond", 2, 1),
            ("trailing\n", 1, 1),
            ("a\nb\nc\n", 3, 3),
            ("", 0, 0),
        ];
        for (input, texts, breaks) in cases {
            let run = multiline_run(input);
            assert_eq!(count_texts(&run), texts, "texts in {:?}", input);
            assert_eq!(count_breaks(&run), breaks, "breaks in {:?}", input);
        }
    }

    fn styles_xml() -> String {
        let docx = initialize_styles(Docx::new());
        let bytes = crate::build_docx_bytes(docx).unwrap();
        crate::test_support::read_part(&bytes, "word/styles.xml")
    }

    #[test]
    fn each_style_id_is_registered_once() {
        let xml = styles_xml();
        for id in ["Normal", "Heading1", "Heading2", "Heading3", GRID_TABLE_STYLE] {
            let needle = format!(r#"w:styleId="{}""#, id);
            assert_eq!(xml.matches(&needle).count(), 1, "occurrences of {}", needle);
        }
    }

    #[test]
    fn normal_style_carries_body_font() {
        let xml = styles_xml();
        let start = xml.find(r#"w:styleId="Normal""#).unwrap();
        let end = start + xml[start..].find("</w:style>").unwrap();
        let normal = &xml[start..end];
        assert!(normal.contains(BODY_FONT), "{}", normal);
        assert!(normal.contains(r#"w:val="22""#), "{}", normal);
    }

    #[test]
    fn grid_style_has_accent_borders() {
        let xml = styles_xml();
        let start = xml.find(&format!(r#"w:styleId="{}""#, GRID_TABLE_STYLE)).unwrap();
        let end = start + xml[start..].find("</w:style>").unwrap();
        let grid = &xml[start..end];
        assert!(grid.contains("w:tblBorders"), "{}", grid);
        for edge in ["w:top", "w:bottom", "w:insideH", "w:insideV"] {
            assert!(grid.contains(edge), "missing {} in {}", edge, grid);
        }
        assert!(grid.contains(ACCENT), "{}", grid);
    }

    #[test]
    fn heading_levels_map_to_style_ids() {
        assert_eq!(heading_style_id(1), "Heading1");
        assert_eq!(heading_style_id(2), "Heading2");
        assert_eq!(heading_style_id(7), "Heading3");
    }
}
