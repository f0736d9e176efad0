//! Configuration options for output files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable naming a JSON file with [`WriterOptions`].
pub const OPTIONS_ENV_VAR: &str = "SPINVIZ_OPTIONS";

/// Options controlling where output files go and how they are created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Directory that receives the output files.
    pub directory: PathBuf,

    /// File name prefix placed before the index.
    pub prefix: String,

    /// Number of digits the index is zero-padded to.
    pub index_width: usize,

    /// File extension, without the leading dot.
    pub extension: String,

    /// Free-form label stored in every file.
    pub label: String,

    /// Whether an existing file at the output path is overwritten.
    pub clobber: bool,

    /// Whether the output directory is created when missing.
    pub create_directory: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
            prefix: "spin".to_string(),
            index_width: 5,
            extension: "silo".to_string(),
            label: "s3 spin components".to_string(),
            clobber: true,
            create_directory: false,
        }
    }
}

impl WriterOptions {
    /// Creates options with a different output directory.
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Returns the file name for the given index, e.g. `spin00007.silo`.
    pub fn file_name_for(&self, index: u32) -> String {
        format!(
            "{}{:0width$}.{}",
            self.prefix,
            index,
            self.extension,
            width = self.index_width
        )
    }

    /// Returns the full output path for the given index.
    pub fn path_for(&self, index: u32) -> PathBuf {
        self.directory.join(self.file_name_for(index))
    }

    /// Loads options from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Loads options from the file named by [`OPTIONS_ENV_VAR`], if set.
    ///
    /// Falls back to the defaults when the variable is unset or the file
    /// cannot be read.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(OPTIONS_ENV_VAR) else {
            return Self::default();
        };

        match Self::from_json_file(&path) {
            Ok(options) => {
                log::debug!("loaded writer options from {}", Path::new(&path).display());
                options
            }
            Err(err) => {
                log::warn!(
                    "ignoring {OPTIONS_ENV_VAR}={}: {err}",
                    Path::new(&path).display()
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_path() {
        let options = WriterOptions::default();
        assert_eq!(options.path_for(7), PathBuf::from("data/spin00007.silo"));
        assert_eq!(options.path_for(0), PathBuf::from("data/spin00000.silo"));
    }

    #[test]
    fn test_wide_index_is_not_truncated() {
        let options = WriterOptions::default();
        assert_eq!(options.file_name_for(123_456), "spin123456.silo");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, r#"{ "directory": "out", "extension": "dat" }"#).unwrap();

        let options = WriterOptions::from_json_file(&path).unwrap();
        assert_eq!(options.directory, PathBuf::from("out"));
        assert_eq!(options.extension, "dat");
        assert_eq!(options.prefix, "spin");
        assert_eq!(options.label, "s3 spin components");
        assert!(options.clobber);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(WriterOptions::from_json_file(&path).is_err());
    }

    proptest! {
        #[test]
        fn file_name_round_trips_index(index in 0u32..100_000) {
            let name = WriterOptions::default().file_name_for(index);
            prop_assert_eq!(name.len(), "spin00000.silo".len());
            let digits = &name["spin".len().."spin".len() + 5];
            prop_assert_eq!(digits.parse::<u32>().unwrap(), index);
        }
    }
}
