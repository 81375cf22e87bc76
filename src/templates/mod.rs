mod loan_application;
mod welcome_letter;

pub use loan_application::LoanApplicationSummary;
pub use welcome_letter::WelcomeLetter;

use docx_rs::Docx;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::naming::file_name_from_type_name;

/// A fixed-structure document with a fixed home below the project root.
pub trait DocxTemplate {
    /// Type-style name the output file name is derived from.
    fn type_name(&self) -> &'static str;

    /// Output directory, as path segments relative to the project root.
    fn output_dir(&self) -> &'static [&'static str];

    /// Placeholder names embedded in the document, grouped the way the
    /// console summary lists them.
    fn placeholder_groups(&self) -> &'static [&'static [&'static str]];

    /// Builds the document, appending every block in order.
    fn build(&self) -> Docx;

    /// Human-readable confirmation printed after a successful write.
    fn summary(&self, path: &Path) -> String;

    fn placeholders(&self) -> BTreeSet<String> {
        self.placeholder_groups()
            .iter()
            .flat_map(|group| group.iter())
            .map(|name| name.to_string())
            .collect()
    }

    fn file_name(&self) -> String {
        file_name_from_type_name(self.type_name())
    }

    fn output_path(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        path.extend(self.output_dir());
        path.join(self.file_name())
    }
}
