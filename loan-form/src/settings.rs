//! Loading form rules from a TOML settings file.
//!
//! The engine's defaults are the production rules; a settings file overrides
//! only the keys it names. A missing file is normal (defaults apply), a
//! malformed one is an error — silently falling back on bad config would
//! hide a deployment mistake.
//!
//! ```toml
//! [loan]
//! min_amount = 5000
//!
//! [timing]
//! tick_interval_ms = 100
//! ```

use std::fs;
use std::path::Path;

use loan_core::FormRules;
use thiserror::Error;

/// Errors loading the settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Parses a rule set from TOML text. Absent sections and keys keep their
/// defaults.
pub fn parse_rules(text: &str) -> Result<FormRules, toml::de::Error> {
    toml::from_str(text)
}

/// Loads the rule set from `path`, or the defaults when the file is absent.
pub fn load_rules(path: &Path) -> Result<FormRules, SettingsError> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no settings file, using default rules");
        return Ok(FormRules::default());
    }

    let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
        path: path.display().to_string(),
        source,
    })?;

    parse_rules(&text).map_err(|source| SettingsError::Parse {
        path: path.display().to_string(),
        source,
    })
}
