#![forbid(unsafe_code)]

mod audit;
mod error;
mod system;
mod target;
mod timing;

pub use audit::Audit;
pub use error::Error;
pub use system::System;
pub use target::{DEFAULT_SIGNATURE, Target};
pub use timing::Timing;

use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub target: Target,
    pub timing: Timing,
    pub system: System,
    pub audit: Audit,
}

impl Config {
    /// Load configuration from a TOML file. Missing fields are filled with defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Parse configuration from TOML text and validate it.
    pub fn from_toml(text: &str) -> Result<Self, Error> {
        let config: Config = toml_edit::de::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the watchdog cannot run with safely.
    pub fn validate(&self) -> Result<(), Error> {
        if self.target.signature.is_empty() {
            return Err(Error::EmptySignature);
        }
        if self.timing.idle_backoff.is_zero() {
            return Err(Error::ZeroDuration("timing.idle_backoff"));
        }
        Ok(())
    }
}
