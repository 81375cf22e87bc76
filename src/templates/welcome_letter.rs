use docx_rs::Docx;
use std::path::Path;

use super::DocxTemplate;
use crate::builder::{LabeledRow, TemplateBuilder};
use crate::placeholders::token;

const PLACEHOLDERS: &[&[&str]] = &[&["firstName", "lastName", "email"]];

/// Short welcome letter sent once a workflow run completes.
#[derive(Debug, Clone, Copy, Default)]
pub struct WelcomeLetter;

impl DocxTemplate for WelcomeLetter {
    fn type_name(&self) -> &'static str {
        "WelcomeLetter"
    }

    fn output_dir(&self) -> &'static [&'static str] {
        &["uploads", "templates"]
    }

    fn placeholder_groups(&self) -> &'static [&'static [&'static str]] {
        PLACEHOLDERS
    }

    fn build(&self) -> Docx {
        TemplateBuilder::new()
            .centered_heading("Welcome Letter", 1)
            .blank()
            .text("Dear {{firstName}} {{lastName}},")
            .blank()
            .text("Thank you for completing our workflow! We have successfully received your information.")
            .blank()
            .text("Your Details:")
            .labeled_table(vec![
                LabeledRow::new("First Name:", "{{firstName}}"),
                LabeledRow::new("Last Name:", "{{lastName}}"),
                LabeledRow::new("Email:", "{{email}}"),
            ])
            .blank()
            .text("We look forward to working with you!")
            .blank()
            .text("Best regards,")
            .text("The VaultLogic Team")
            .into_docx()
    }

    fn summary(&self, path: &Path) -> String {
        let tokens: Vec<String> = PLACEHOLDERS[0].iter().map(|name| token(name)).collect();
        format!(
            "Template created: {}\nTemplate includes placeholders: {}",
            path.display(),
            tokens.join(", ")
        )
    }
}
