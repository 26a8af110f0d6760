pub mod csv;
pub mod memory;

use std::env;
use std::fs;
use std::path::Path;

use dotenv::dotenv;

use crate::domain::contact::Contact;
use crate::errors::AppError;

pub const DEFAULT_CSV_PATH: &str = "./.instance/contacts.csv";

pub trait ContactStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;
}

/// Resolve the storage backend. An explicit path wins over the
/// `CONTACTS_CSV_PATH` environment variable, which wins over the default.
pub fn parse_storage(path: Option<&str>) -> Result<Box<dyn ContactStorage>, AppError> {
    let path = match path {
        Some(p) => p.to_string(),
        None => {
            dotenv().ok();
            env::var("CONTACTS_CSV_PATH").unwrap_or(DEFAULT_CSV_PATH.to_string())
        }
    };

    Ok(Box::new(csv::CsvStorage::new(path)))
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
