use super::ContactBackend;
use crate::error::{ContactzError, Result};
use crate::model::Contact;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

/// File-based persistence: the whole collection as one JSON array.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ContactzError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> Result<PathBuf> {
        let file_name = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                ContactzError::Store(format!(
                    "Contacts path has no file name: {}",
                    self.path.display()
                ))
            })?;
        Ok(self
            .path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4())))
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new(DEFAULT_CONTACTS_FILE)
    }
}

impl ContactBackend for FileBackend {
    fn try_load(&self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let bytes = fs::read(&self.path).map_err(ContactzError::Io)?;

        // serde_json rejects empty input; an empty file is an empty book
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        let contacts: Vec<Contact> =
            serde_json::from_slice(&bytes).map_err(ContactzError::Serialization)?;
        Ok(contacts)
    }

    fn try_save(&self, contacts: &[Contact]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(contacts).map_err(ContactzError::Serialization)?;

        // Atomic write
        let tmp_path = self.tmp_path()?;
        fs::write(&tmp_path, content).map_err(ContactzError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ContactzError::Io(e));
        }

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
