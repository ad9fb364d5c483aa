//! Explicit configuration built from command-line arguments and environment.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Total width, in characters, that tables are laid out to.
pub const DEFAULT_DISPLAY_WIDTH: usize = 160;
/// Columns never shrink below this many characters of content.
pub const MIN_COLUMN_WIDTH: usize = 8;
/// Samples shown by `inspect_translations` when neither `--nsamp` nor `NSAMP` is set.
pub const DEFAULT_NSAMP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    pub width: usize,
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
            color: false,
        }
    }
}

impl DisplayConfig {
    /// Content width of each of `columns` equal-width columns.
    pub fn column_width(&self, columns: usize) -> usize {
        // "| " before and " " after every cell, plus the closing "|".
        let per_column = self.width.saturating_sub(1) / columns.max(1);
        per_column.saturating_sub(3).max(MIN_COLUMN_WIDTH)
    }
}

/// Field names looked up in every JSON-lines record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonKeys {
    pub source: String,
    pub reference: String,
    pub hypothesis: String,
}

impl Default for JsonKeys {
    fn default() -> Self {
        Self {
            source: "source".to_string(),
            reference: "reference".to_string(),
            hypothesis: "hypothesis".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Plain {
        source: PathBuf,
        reference: PathBuf,
        hypothesis: PathBuf,
    },
    JsonLines {
        path: PathBuf,
        keys: JsonKeys,
    },
}

impl InputSource {
    /// Picks JSON-lines or plain-text input from the raw flag values.
    pub fn resolve(
        json_mode: bool,
        json_file: Option<PathBuf>,
        keys: JsonKeys,
        source: Option<PathBuf>,
        reference: Option<PathBuf>,
        hypothesis: Option<PathBuf>,
    ) -> Result<Self> {
        if json_mode {
            let path = json_file
                .ok_or_else(|| Error::invalid_args("--json-mode requires --json-file"))?;
            return Ok(Self::JsonLines { path, keys });
        }
        if json_file.is_some() {
            return Err(Error::invalid_args("--json-file requires --json-mode"));
        }
        match (source, reference, hypothesis) {
            (Some(source), Some(reference), Some(hypothesis)) => Ok(Self::Plain {
                source,
                reference,
                hypothesis,
            }),
            _ => Err(Error::invalid_args(
                "--source, --reference and --hypothesis are required without --json-mode",
            )),
        }
    }
}
