//! Persisted output settings.
//!
//! A small JSON record with two recognized options: the output file
//! extension and the reflow column width. A missing record is not an
//! error — defaults are written back so the next run finds them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::reflow::DEFAULT_WIDTH;

/// Default location of the settings record, relative to the working
/// directory.
pub const SETTINGS_FILE: &str = "settings.txt";

/// Output settings controlling file naming and text reflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Output file extension.
    #[serde(default = "default_file_format")]
    pub file_format: String,

    /// Column width for wrapped article text.
    #[serde(default = "default_text_width")]
    pub text_width: usize,
}

fn default_file_format() -> String {
    "txt".to_string()
}

fn default_text_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for Settings {
    fn default() -> Self {
        Self { file_format: default_file_format(), text_width: default_text_width() }
    }
}

impl Settings {
    /// Load settings from `path`, creating the record with defaults when it
    /// is absent.
    ///
    /// Failures never surface to the caller: a missing file is written back
    /// with defaults and the defaults are used for this run; an unreadable
    /// or corrupt file logs a warning and falls back to defaults without
    /// overwriting whatever is on disk.
    pub fn load_or_init(path: &Path) -> Settings {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Warning: failed to parse {}: {}", path.display(), e);
                    Settings::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                eprintln!("Warning: no settings file at {}, creating defaults", path.display());
                let settings = Settings::default();
                settings.persist(path);
                settings
            }
            Err(e) => {
                eprintln!("Warning: failed to read {}: {}", path.display(), e);
                Settings::default()
            }
        }
    }

    fn persist(&self, path: &Path) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    eprintln!("Warning: failed to write {}: {}", path.display(), e);
                }
            }
            Err(e) => eprintln!("Warning: failed to serialize settings: {}", e),
        }
    }
}
