//! Sequential construction of template documents

use docx_rs::*;
use log::debug;

use crate::styles::{self, GRID_TABLE_STYLE};

/// Column widths (twips) of a labeled two-column table.
const LABEL_COLUMN_WIDTH: usize = 3200;
const VALUE_COLUMN_WIDTH: usize = 5800;

const DIVIDER_WIDTH: usize = 80;

/// One row of a labeled two-column table.
#[derive(Debug, Clone)]
pub struct LabeledRow {
    pub label: String,
    pub value: Run,
}

impl LabeledRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Run::new().add_text(value),
        }
    }

    /// Row whose value cell carries a pre-styled run.
    pub fn styled(label: impl Into<String>, value: Run) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Appends blocks to a [`Docx`] in order. Blocks are never revisited once
/// appended.
pub struct TemplateBuilder {
    docx: Docx,
    blocks: usize,
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self {
            docx: styles::initialize_styles(Docx::new()),
            blocks: 0,
        }
    }

    pub fn paragraph(mut self, paragraph: Paragraph) -> Self {
        self.docx = self.docx.add_paragraph(paragraph);
        self.blocks += 1;
        self
    }

    /// Empty spacer paragraph.
    pub fn blank(self) -> Self {
        self.paragraph(Paragraph::new())
    }

    pub fn text(self, text: &str) -> Self {
        self.paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
    }

    pub fn aligned_text(self, text: &str, align: AlignmentType) -> Self {
        self.paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text(text))
                .align(align),
        )
    }

    /// A line of underscores spanning the text column.
    pub fn divider(self) -> Self {
        self.text(&"_".repeat(DIVIDER_WIDTH))
    }

    pub fn heading(self, text: &str, level: usize) -> Self {
        self.paragraph(
            Paragraph::new()
                .style(styles::heading_style_id(level))
                .add_run(Run::new().add_text(text)),
        )
    }

    pub fn centered_heading(self, text: &str, level: usize) -> Self {
        self.paragraph(
            Paragraph::new()
                .style(styles::heading_style_id(level))
                .add_run(Run::new().add_text(text))
                .align(AlignmentType::Center),
        )
    }

    /// Two-column grid table, label on the left and value on the right.
    pub fn labeled_table(mut self, rows: Vec<LabeledRow>) -> Self {
        let row_count = rows.len();
        let rows = rows
            .into_iter()
            .map(|row| {
                let label = TableCell::new()
                    .add_paragraph(Paragraph::new().add_run(Run::new().add_text(row.label)));
                let value = TableCell::new().add_paragraph(Paragraph::new().add_run(row.value));
                TableRow::new(vec![label, value])
            })
            .collect();

        let table = Table::new(rows)
            .style(GRID_TABLE_STYLE)
            .set_grid(vec![LABEL_COLUMN_WIDTH, VALUE_COLUMN_WIDTH]);

        debug!("appending {}x2 table as block {}", row_count, self.blocks);
        self.docx = self.docx.add_table(table);
        self.blocks += 1;
        self
    }

    /// Number of blocks appended so far.
    pub fn block_count(&self) -> usize {
        self.blocks
    }

    pub fn into_docx(self) -> Docx {
        debug!("document finished with {} blocks", self.blocks);
        self.docx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_append_counts_as_one_block() {
        let builder = TemplateBuilder::new()
            .heading("Title", 1)
            .blank()
            .text("body")
            .divider()
            .labeled_table(vec![LabeledRow::new("Name:", "{{name}}")]);
        assert_eq!(builder.block_count(), 5);
    }

    #[test]
    fn labeled_table_has_two_cells_per_row() {
        let docx = TemplateBuilder::new()
            .labeled_table(vec![
                LabeledRow::new("First:", "{{first}}"),
                LabeledRow::new("Second:", "{{second}}"),
                LabeledRow::styled("Third:", Run::new().add_text("{{third}}").bold()),
            ])
            .into_docx();

        let table = docx
            .document
            .children
            .iter()
            .find_map(|child| match child {
                DocumentChild::Table(t) => Some(t),
                _ => None,
            })
            .expect("table should be appended");

        assert_eq!(table.rows.len(), 3);
        for row in &table.rows {
            let TableChild::TableRow(ref row) = row;
            assert_eq!(row.cells.len(), 2);
        }
    }

    #[test]
    fn divider_is_eighty_underscores() {
        let docx = TemplateBuilder::new().divider().into_docx();
        match &docx.document.children[0] {
            DocumentChild::Paragraph(p) => assert_eq!(p.raw_text(), "_".repeat(80)),
            _ => panic!("expected a paragraph"),
        }
    }
}
