use core::fmt;

use crate::domain::contact::DuplicateKind;

#[derive(Debug)]
pub enum AppError {
    MissingFields,
    InvalidEmail(String),
    InvalidPhone(String),
    Duplicate(DuplicateKind),
    NotFound(String),
    CorruptStore(String),
    Persistence(String),
    Io(std::io::Error),
    Regex(regex::Error),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::MissingFields => {
                write!(f, "Please fill in all fields")
            }
            AppError::InvalidEmail(email) => {
                write!(f, "Invalid email format: '{}'", email)
            }
            AppError::InvalidPhone(phone) => {
                write!(f, "Phone number must be 10 digits: '{}'", phone)
            }
            AppError::Duplicate(kind) => {
                write!(f, "A contact with this {} already exists", kind)
            }
            AppError::NotFound(item) => {
                write!(f, "{} not found", item)
            }
            AppError::CorruptStore(msg) => {
                write!(f, "Contact file is corrupt: {}", msg)
            }
            AppError::Persistence(msg) => {
                write!(f, "Failed to save contacts: {}", msg)
            }
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
        }
    }
}
