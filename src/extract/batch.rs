//! Batch extraction over a list of documents.
//!
//! Failures are reported per file and never stop the batch. Status lines go to the
//! given writer:
//!
//! ```text
//! Extracted: PLAN.docx -> PLAN.txt
//! File not found: MISSING.docx
//! Error processing BROKEN.docx: ...
//!
//! Extraction complete!
//! ```
use super::{ExtractError, extract_file};
use serde::Deserialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Documents extracted when no file list is given.
pub const DEFAULT_FILES: [&str; 4] = [
    "DETAILED-PROJECT-STRUCTURE-AND-ARCHITECTURE.docx",
    "PROJECT-TIMELINE-AND-PHASES.docx",
    "UI-DESIGN-AND-MOCKUPS.docx",
    "UI-DESIGN-AND-MOCKUPSs.docx",
];

/// The files to process in one batch.
///
/// Loadable from YAML:
///
/// ```yaml
/// files:
///   - notes.docx
///   - archive/plan.docx
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_files")]
    pub files: Vec<PathBuf>,
}

fn default_files() -> Vec<PathBuf> {
    DEFAULT_FILES.iter().map(PathBuf::from).collect()
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            files: default_files(),
        }
    }
}

impl BatchConfig {
    pub fn new(files: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a YAML batch configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, ExtractError> {
        serde_saphyr::from_str(yaml).map_err(|e| ExtractError::Config(e.to_string()))
    }

    /// Load a YAML batch configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }
}

/// Text file name for a document.
///
/// Every `.docx` in the name becomes `.txt`. Names without `.docx` get a `.txt`
/// extension, appended when replacing the extension would give back the input name.
pub fn output_path_for(input: &Path) -> PathBuf {
    let name = input.to_string_lossy();
    if name.contains(".docx") {
        return PathBuf::from(name.replace(".docx", ".txt"));
    }

    let output = input.with_extension("txt");
    if output == input {
        let mut appended = input.as_os_str().to_owned();
        appended.push(".txt");
        return PathBuf::from(appended);
    }
    output
}

/// Result of processing one file.
#[derive(Debug)]
pub enum FileOutcome {
    Extracted {
        input: PathBuf,
        output: PathBuf,
        lines: usize,
    },
    NotFound {
        input: PathBuf,
    },
    Failed {
        input: PathBuf,
        error: ExtractError,
    },
}

impl FileOutcome {
    pub fn input(&self) -> &Path {
        match self {
            Self::Extracted { input, .. } | Self::NotFound { input } | Self::Failed { input, .. } => {
                input
            },
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Extracted { .. })
    }
}

/// Outcomes of a batch, in input order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn extracted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn not_found_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::NotFound { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Failed { .. }))
            .count()
    }
}

/// Extract every file in `config`, writing one status line per file to `status`.
///
/// Only a failure to write a status line is returned as an error.
pub fn run_batch<W: Write>(config: &BatchConfig, status: &mut W) -> std::io::Result<BatchReport> {
    let mut report = BatchReport::default();

    for input in &config.files {
        let output = output_path_for(input);
        let outcome = match extract_file(input, &output) {
            Ok(lines) => {
                writeln!(status, "Extracted: {} -> {}", input.display(), output.display())?;
                FileOutcome::Extracted {
                    input: input.clone(),
                    output,
                    lines,
                }
            },
            Err(ExtractError::NotFound(_)) => {
                writeln!(status, "File not found: {}", input.display())?;
                tracing::warn!(file = %input.display(), "file not found");
                FileOutcome::NotFound {
                    input: input.clone(),
                }
            },
            Err(error) => {
                writeln!(status, "Error processing {}: {}", input.display(), error)?;
                tracing::warn!(file = %input.display(), %error, "extraction failed");
                FileOutcome::Failed {
                    input: input.clone(),
                    error,
                }
            },
        };
        report.outcomes.push(outcome);
    }

    writeln!(status, "\nExtraction complete!")?;
    Ok(report)
}
