use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tempfile::NamedTempFile;

use super::{create_file_parent, ContactStorage};
use crate::domain::contact::{Contact, CSV_HEADERS};
use crate::errors::AppError;

pub struct CsvStorage {
    pub path: PathBuf,
}

impl CsvStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactStorage for CsvStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !self.path.exists() {
            // First run: start with an empty book
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| AppError::CorruptStore(e.to_string()))?;

        let headers = reader
            .headers()
            .map_err(|e| AppError::CorruptStore(e.to_string()))?;

        if headers.iter().ne(CSV_HEADERS) {
            return Err(AppError::CorruptStore(format!(
                "unexpected columns: {:?}",
                headers
            )));
        }

        let mut contacts = Vec::new();
        for result in reader.deserialize() {
            let record: Contact = result.map_err(|e| AppError::CorruptStore(e.to_string()))?;
            contacts.push(record);
        }

        Ok(contacts)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Write the whole collection to a temp file in the same directory,
        // then rename over the target. A crash mid-write leaves the
        // previous file intact.
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir).map_err(|e| AppError::Persistence(e.to_string()))?;

        {
            let mut writer = WriterBuilder::new().has_headers(false).from_writer(tmp.as_file());

            // Header row is written even for an empty collection
            writer
                .write_record(CSV_HEADERS)
                .map_err(|e| AppError::Persistence(e.to_string()))?;

            for contact in contacts {
                writer
                    .serialize(contact)
                    .map_err(|e| AppError::Persistence(e.to_string()))?;
            }

            writer
                .flush()
                .map_err(|e| AppError::Persistence(e.to_string()))?;
        }

        tmp.persist(&self.path)
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        Ok(())
    }
}
