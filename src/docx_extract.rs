//! Read-side view of a packed template: text corpus, block outline and
//! package detection.

use docx_rs::{DocumentChild, Docx, Paragraph, Table, TableCellContent, TableChild, TableRowChild};
use file_format::FileFormat;
use std::path::Path;

/// A top-level block of a document as read back from a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph {
        style: Option<String>,
        text: String,
    },
    Table {
        rows: usize,
        cols: usize,
        cells: Vec<String>,
    },
}

impl Block {
    pub fn text(&self) -> String {
        match self {
            Block::Paragraph { text, .. } => text.clone(),
            Block::Table { cells, .. } => cells.join(" "),
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Paragraph { style: Some(s), .. } if s.starts_with("Heading"))
    }
}

pub(crate) fn outline(docx: &Docx) -> Vec<Block> {
    let mut blocks = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => blocks.push(paragraph_block(p)),
            DocumentChild::Table(t) => blocks.push(table_block(t)),
            _ => {}
        }
    }
    blocks
}

fn paragraph_block(paragraph: &Paragraph) -> Block {
    Block::Paragraph {
        style: paragraph.property.style.as_ref().map(|s| s.val.clone()),
        text: paragraph.raw_text(),
    }
}

fn table_block(table: &Table) -> Block {
    let mut cols = 0;
    for row in &table.rows {
        let TableChild::TableRow(ref row) = row;
        cols = cols.max(row.cells.len());
    }
    Block::Table {
        rows: table.rows.len(),
        cols,
        cells: collect_text_from_table(table),
    }
}

pub(crate) fn collect_text_from_document_children(children: &[DocumentChild]) -> Vec<String> {
    let mut texts = Vec::new();
    for child in children {
        match child {
            DocumentChild::Paragraph(p) => texts.push(p.raw_text()),
            DocumentChild::Table(t) => texts.extend(collect_text_from_table(t)),
            _ => {}
        }
    }
    texts
}

/// Cell texts of `table` row by row, descending into nested tables.
pub(crate) fn collect_text_from_table(table: &Table) -> Vec<String> {
    table
        .rows
        .iter()
        .flat_map(|TableChild::TableRow(row)| row.cells.iter())
        .flat_map(|TableRowChild::TableCell(cell)| cell.children.iter())
        .flat_map(|content| match content {
            TableCellContent::Paragraph(p) => vec![p.raw_text()],
            TableCellContent::Table(nested) => collect_text_from_table(nested),
            _ => Vec::new(),
        })
        .collect()
}

/// Whether the file at `path` is sniffed as an Office Open XML document.
///
/// Errors opening or reading the file are returned rather than folded into
/// `false`, so a failed save reports the underlying cause.
pub(crate) fn is_docx_package(path: &Path) -> std::io::Result<bool> {
    let format = FileFormat::from_file(path)?;
    Ok(matches!(format, FileFormat::OfficeOpenXmlDocument))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{LabeledRow, TemplateBuilder};

    #[test]
    fn outline_reports_headings_and_table_shapes() {
        let docx = TemplateBuilder::new()
            .heading("Title", 1)
            .text("body")
            .labeled_table(vec![
                LabeledRow::new("A:", "{{a}}"),
                LabeledRow::new("B:", "{{b}}"),
            ])
            .into_docx();

        let blocks = outline(&docx);
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].is_heading());
        assert!(!blocks[1].is_heading());
        assert_eq!(
            blocks[2],
            Block::Table {
                rows: 2,
                cols: 2,
                cells: vec!["A:".into(), "{{a}}".into(), "B:".into(), "{{b}}".into()],
            }
        );
    }

    #[test]
    fn table_cells_are_collected_in_reading_order() {
        let docx = TemplateBuilder::new()
            .text("before")
            .labeled_table(vec![LabeledRow::new("Label:", "value")])
            .into_docx();
        let texts = collect_text_from_document_children(&docx.document.children);
        assert_eq!(texts, vec!["before", "Label:", "value"]);
    }

    #[test]
    fn missing_file_reports_the_io_error() {
        let err = is_docx_package(Path::new("does/not/exist.docx")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn plain_text_is_not_a_docx() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.docx");
        std::fs::write(&path, "just some text").unwrap();
        assert!(!is_docx_package(&path).unwrap());
    }

    #[test]
    fn nested_table_cells_are_flattened() {
        let inner = Table::new(vec![docx_rs::TableRow::new(vec![
            docx_rs::TableCell::new().add_paragraph(
                Paragraph::new().add_run(docx_rs::Run::new().add_text("{{inner}}")),
            ),
        ])]);
        let outer = Table::new(vec![docx_rs::TableRow::new(vec![
            docx_rs::TableCell::new()
                .add_paragraph(Paragraph::new().add_run(docx_rs::Run::new().add_text("outer")))
                .add_table(inner),
        ])]);
        assert_eq!(collect_text_from_table(&outer), vec!["outer", "{{inner}}"]);
    }
}
