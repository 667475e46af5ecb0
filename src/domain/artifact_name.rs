//! Deterministic artifact naming derived from company and role.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

const SEPARATOR: char = '_';

/// Base name shared by every artifact of one job, e.g. `acme_co_backend_dev`.
///
/// Identical `(company, role)` pairs always map to the same base, so re-running
/// a job overwrites its previous artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactBase(String);

impl ArtifactBase {
    pub fn new(company: &str, role: &str) -> Result<Self, AppError> {
        let company = normalize_component(company)
            .ok_or_else(|| AppError::missing_input("company", "must contain a letter or digit"))?;
        let role = normalize_component(role)
            .ok_or_else(|| AppError::missing_input("role", "must contain a letter or digit"))?;
        Ok(Self(format!("{}{}{}", company, SEPARATOR, role)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `<base>_resume.<ext>`
    pub fn document_file(&self, extension: &str) -> String {
        format!("{}_resume.{}", self.0, extension)
    }

    /// `<base>_email.txt`
    pub fn message_file(&self) -> String {
        format!("{}_email.txt", self.0)
    }

    pub fn document_path(&self, dir: &Path, extension: &str) -> PathBuf {
        dir.join(self.document_file(extension))
    }

    pub fn message_path(&self, dir: &Path) -> PathBuf {
        dir.join(self.message_file())
    }
}

impl fmt::Display for ArtifactBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercase, whitespace runs become one separator, everything else that is
/// not alphanumeric is dropped.
fn normalize_component(value: &str) -> Option<String> {
    let words: Vec<String> = value
        .split_whitespace()
        .map(|word| {
            word.chars().filter(|c| c.is_alphanumeric()).flat_map(char::to_lowercase).collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect();

    if words.is_empty() {
        return None;
    }
    Some(words.join(&SEPARATOR.to_string()))
}
