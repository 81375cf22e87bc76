use chrono::{Local, NaiveDate};
use docx_rs::{AlignmentType, Docx, Paragraph, Run};
use std::path::Path;

use super::DocxTemplate;
use crate::builder::{LabeledRow, TemplateBuilder};
use crate::placeholders::token;
use crate::styles::{multiline_run, GRAY, GREEN, NAVY};

const PLACEHOLDERS: &[&[&str]] = &[
    &["firstName", "lastName"],
    &["email", "phone", "dateOfBirth", "ssn"],
    &["employmentStatus", "employerName", "jobTitle"],
    &["annualIncome", "monthlyDebt"],
    &["loanAmount", "loanPurpose", "loanTerm"],
    &[
        "debtToIncomeRatio.ratio",
        "debtToIncomeRatio.status",
        "debtToIncomeRatio.monthlyIncome",
    ],
];

const COMPANY_NAME: &str = "FINANCIAL SERVICES COMPANY";
const COMPANY_ADDRESS: &str = "123 Main Street • Suite 500 • Anytown, ST 12345";
const COMPANY_CONTACT: &str = "Phone: (555) 123-4567 • Email: loans@financialservices.com";
const STATUS_LINE: &str = "APPLICATION STATUS: PENDING REVIEW";
const NEXT_STEPS: &str = "1. A loan officer will review your application within 2-3 business days\n\
                          2. You may be contacted for additional documentation\n\
                          3. Upon approval, you will receive loan terms and documentation to sign\n";
const CONFIDENTIALITY: &str = "This document is confidential and intended solely for the named applicant.\n\
                               Please contact us at (555) 123-4567 with any questions.";

/// Multi-section summary of a loan application.
///
/// The date stamp is the day the template was generated, not the day an
/// application is filled in.
#[derive(Debug, Clone, Copy)]
pub struct LoanApplicationSummary {
    date: NaiveDate,
}

impl LoanApplicationSummary {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    /// Stamped with the current local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// e.g. `Date: October 16, 2026`.
    pub fn date_line(&self) -> String {
        format!("Date: {}", self.date.format("%B %d, %Y"))
    }

    fn letterhead(builder: TemplateBuilder) -> TemplateBuilder {
        let title = Paragraph::new()
            .add_run(Run::new().add_text(COMPANY_NAME).bold().size(32).color(NAVY))
            .align(AlignmentType::Center);

        let contact = Paragraph::new()
            .add_run(multiline_run(&format!("{}\n", COMPANY_ADDRESS)).size(18))
            .add_run(Run::new().add_text(COMPANY_CONTACT).size(18))
            .align(AlignmentType::Center);

        builder.paragraph(title).paragraph(contact).divider()
    }

    fn closing(builder: TemplateBuilder) -> TemplateBuilder {
        let status = Paragraph::new()
            .add_run(Run::new().add_text(STATUS_LINE).bold().size(24).color(NAVY))
            .align(AlignmentType::Center);

        let next_steps = Paragraph::new()
            .add_run(multiline_run("Next Steps:\n").bold())
            .add_run(multiline_run(NEXT_STEPS));

        let footer = Paragraph::new()
            .add_run(multiline_run(CONFIDENTIALITY).size(16).color(GRAY))
            .align(AlignmentType::Center);

        builder
            .divider()
            .blank()
            .paragraph(status)
            .blank()
            .paragraph(next_steps)
            .blank()
            .paragraph(footer)
    }
}

impl DocxTemplate for LoanApplicationSummary {
    fn type_name(&self) -> &'static str {
        "LoanApplicationSummary"
    }

    fn output_dir(&self) -> &'static [&'static str] {
        &["server", "files", "templates"]
    }

    fn placeholder_groups(&self) -> &'static [&'static [&'static str]] {
        PLACEHOLDERS
    }

    fn build(&self) -> Docx {
        let builder = Self::letterhead(TemplateBuilder::new())
            .blank()
            .aligned_text(&self.date_line(), AlignmentType::Right)
            .blank()
            .centered_heading("LOAN APPLICATION SUMMARY", 1)
            .blank()
            .heading("Applicant Information", 2)
            .labeled_table(vec![
                LabeledRow::new("Full Name:", "{{firstName}} {{lastName}}"),
                LabeledRow::new("Email Address:", "{{email}}"),
                LabeledRow::new("Phone Number:", "{{phone}}"),
                LabeledRow::new("Date of Birth:", "{{dateOfBirth}}"),
                LabeledRow::new("SSN (last 4 digits):", "XXX-XX-{{ssn}}"),
            ])
            .blank()
            .heading("Employment Information", 2)
            .labeled_table(vec![
                LabeledRow::new("Employment Status:", "{{employmentStatus}}"),
                LabeledRow::new("Employer Name:", "{{employerName}}"),
                LabeledRow::new("Job Title:", "{{jobTitle}}"),
                LabeledRow::new("Annual Income:", "${{annualIncome}}"),
            ])
            .blank()
            .heading("Loan Request Details", 2)
            .labeled_table(vec![
                LabeledRow::styled(
                    "Requested Amount:",
                    Run::new().add_text("${{loanAmount}}").bold().size(24).color(GREEN),
                ),
                LabeledRow::new("Loan Purpose:", "{{loanPurpose}}"),
                LabeledRow::new("Preferred Term:", "{{loanTerm}}"),
            ])
            .blank()
            .heading("Financial Analysis", 2)
            .labeled_table(vec![
                LabeledRow::new("Monthly Income:", "${{debtToIncomeRatio.monthlyIncome}}"),
                LabeledRow::new("Monthly Debt Payments:", "${{monthlyDebt}}"),
                LabeledRow::new(
                    "Debt-to-Income Ratio:",
                    "{{debtToIncomeRatio.ratio}}% ({{debtToIncomeRatio.status}})",
                ),
            ])
            .blank();

        Self::closing(builder).into_docx()
    }

    fn summary(&self, path: &Path) -> String {
        let mut lines = vec![
            format!("[OK] Template created: {}", path.display()),
            String::new(),
            "Template includes the following placeholders:".to_owned(),
        ];
        for group in PLACEHOLDERS {
            let tokens: Vec<String> = group.iter().map(|name| token(name)).collect();
            lines.push(format!("  - {}", tokens.join(", ")));
        }
        lines.push(String::new());
        lines.push("Template ready for use!".to_owned());
        lines.join("\n")
    }
}
