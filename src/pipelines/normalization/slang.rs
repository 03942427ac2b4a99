use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{PipelineError, Result};

/// Read-only mapping from slang ("teencode") tokens to their canonical form.
///
/// Keys are matched exactly, case included. Built once at startup and shared
/// for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct SlangDictionary {
    entries: HashMap<String, String>,
}

impl SlangDictionary {
    /// Load a dictionary from a tab-separated file with two unnamed columns.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Startup`] if the file is missing, unreadable or
    /// not valid UTF-8.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PipelineError::Startup(format!(
                "Cannot open slang dictionary '{}': {}",
                path.display(),
                e
            ))
        })?;

        let dictionary = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            entries = dictionary.len(),
            "loaded slang dictionary"
        );
        Ok(dictionary)
    }

    /// Parse `slang<TAB>replacement` rows.
    ///
    /// Rows without a replacement column are skipped, extra columns are ignored
    /// and a repeated key keeps the value of its last row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut entries = HashMap::<String, String>::new();
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .quoting(false)
            .flexible(true)
            .has_headers(false)
            .from_reader(reader);

        for record in csv_reader.records() {
            let record = record?;
            match (record.get(0), record.get(1)) {
                (Some(slang), Some(replacement)) => {
                    entries.insert(slang.to_string(), replacement.to_string());
                }
                _ => warn!(
                    line = record.position().map(|p| p.line()),
                    "skipping slang row without a replacement"
                ),
            }
        }

        Ok(Self { entries })
    }

    /// Canonical replacement for `token`, if it is a known slang token.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SlangDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
