//! Generators for the static `.docx` templates consumed by the document
//! workflow.
//!
//! Each template is a type implementing [`DocxTemplate`]; [`generate`] builds
//! it, checks the packed document still carries exactly the declared
//! `{{placeholder}}` tokens, and writes it below a project root.

pub mod builder;
mod docx_extract;
mod naming;
pub mod placeholders;
pub mod styles;
pub mod templates;

pub use docx_extract::Block;
pub use templates::{DocxTemplate, LoanApplicationSummary, WelcomeLetter};

use docx_rs::{read_docx, Docx};
use log::{debug, info};
use std::collections::BTreeSet;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

/// Error type returned while building or saving a template.
#[derive(Debug)]
pub enum TemplateError {
    /// An I/O error (creating directories, writing or renaming the output).
    Io(std::io::Error),
    /// `docx-rs` could not pack the document into an archive.
    Package(String),
    /// The packed bytes do not read back as a `.docx` document.
    InvalidDocument(String),
    /// The packed document carries a different token set than declared.
    PlaceholderMismatch {
        expected: BTreeSet<String>,
        found: BTreeSet<String>,
    },
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{}", e),
            Self::Package(msg) => write!(f, "failed to pack docx: {}", msg),
            Self::InvalidDocument(msg) => write!(f, "invalid document: {}", msg),
            Self::PlaceholderMismatch { expected, found } => {
                let missing: Vec<_> = expected.difference(found).collect();
                let unexpected: Vec<_> = found.difference(expected).collect();
                write!(
                    f,
                    "placeholder mismatch: missing {:?}, unexpected {:?}",
                    missing, unexpected
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TemplateError {
    fn from(e: std::io::Error) -> Self { Self::Io(e) }
}

impl From<tempfile::PersistError> for TemplateError {
    fn from(e: tempfile::PersistError) -> Self { Self::Io(e.error) }
}

/// The crate root, where the generated template directories live.
///
/// Fixed at compile time, so the generators only write to the right place
/// when run from the checkout they were built in.
pub fn project_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Result of a successful [`generate`] call.
#[derive(Debug, Clone)]
pub struct Generated {
    pub path: PathBuf,
    pub placeholders: BTreeSet<String>,
    pub size: usize,
}

/// Builds `template`, verifies it and writes it below `root`.
///
/// Nothing touches the filesystem until the packed bytes have been read
/// back and their token set matches [`DocxTemplate::placeholders`].
pub fn generate<T: DocxTemplate>(template: &T, root: &Path) -> Result<Generated, TemplateError> {
    let path = template.output_path(root);
    debug!("building {} for {:?}", template.type_name(), path);

    let bytes = build_docx_bytes(template.build())?;
    let found = read_placeholders(&bytes)?;
    let expected = template.placeholders();
    if found != expected {
        return Err(TemplateError::PlaceholderMismatch { expected, found });
    }

    save_docx_bytes(&bytes, &path)?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());

    Ok(Generated {
        path,
        placeholders: found,
        size: bytes.len(),
    })
}

/// Packs a document into `.docx` bytes.
pub fn build_docx_bytes(docx: Docx) -> Result<Vec<u8>, TemplateError> {
    let mut buffer = Vec::new();
    docx.build()
        .pack(&mut Cursor::new(&mut buffer))
        .map_err(|e| TemplateError::Package(e.to_string()))?;
    Ok(buffer)
}

fn read_document(bytes: &[u8]) -> Result<Docx, TemplateError> {
    read_docx(bytes).map_err(|e| TemplateError::InvalidDocument(e.to_string()))
}

/// Placeholder names found in a packed document.
pub fn read_placeholders(bytes: &[u8]) -> Result<BTreeSet<String>, TemplateError> {
    let doc = read_document(bytes)?;
    let corpus = docx_extract::collect_text_from_document_children(&doc.document.children);
    Ok(placeholders::collect_placeholders(&corpus))
}

/// Top-level blocks of a packed document, in order.
pub fn read_outline(bytes: &[u8]) -> Result<Vec<Block>, TemplateError> {
    let doc = read_document(bytes)?;
    Ok(docx_extract::outline(&doc))
}

/// Writes `bytes` to `output_path`, creating missing parent directories.
///
/// The bytes go to a temporary file next to the target first and are only
/// renamed onto `output_path` once the file is recognised as a `.docx`, so
/// readers never observe a half-written template.
pub fn save_docx_bytes(bytes: &[u8], output_path: &Path) -> Result<(), TemplateError> {
    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut staged = tempfile::NamedTempFile::new_in(parent)?;
    staged.write_all(bytes)?;
    staged.as_file().sync_all()?;
    debug!("staged {} bytes at {:?}", bytes.len(), staged.path());

    if !docx_extract::is_docx_package(staged.path())? {
        return Err(TemplateError::InvalidDocument(format!(
            "{} is not recognised as a docx package",
            output_path.display()
        )));
    }

    staged.persist(output_path)?;
    Ok(())
}

/// Installs the `env_logger` backend used by the generator binaries.
///
/// Defaults to `info` for this crate; `RUST_LOG` overrides it.
pub fn init_logging() {
    let _ = env_logger::builder()
        .filter_module("docx_template_gen", log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
