//! Translation files served to the front-end, one `<code>.json` per language.

use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LangError {
    #[error("'{0}' is not a language code")]
    InvalidCode(String),

    #[error("no translation file for '{0}'")]
    Missing(String),

    #[error("failed to read translation file: {0}")]
    Io(#[from] std::io::Error),

    #[error("translation file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Translations {
    dir: PathBuf,
}

impl Translations {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub async fn load(&self, code: &str) -> Result<Value, LangError> {
        if !is_language_code(code) {
            return Err(LangError::InvalidCode(code.to_owned()));
        }

        let path = self.dir.join(format!("{code}.json"));
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(LangError::Missing(code.to_owned()));
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Loaded {}", path.display());
        Ok(serde_json::from_slice(&raw)?)
    }
}

/// Codes like `hi`, `te` or `pt-BR`; nothing that can leave the directory.
pub fn is_language_code(code: &str) -> bool {
    let mut parts = code.split('-');
    let primary = parts.next().unwrap_or_default();

    (2..=3).contains(&primary.len())
        && primary.chars().all(|c| c.is_ascii_alphabetic())
        && parts.all(|p| (2..=8).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphanumeric()))
}
