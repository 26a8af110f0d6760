use core::fmt;

use serde::{Deserialize, Serialize};

/// Column names are the on-disk contract; existing contact files
/// written with these headers must keep loading.
pub const CSV_HEADERS: [&str; 5] = [
    "First Name",
    "Last Name",
    "Address",
    "Email ID",
    "Phone Number",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Last Name")]
    pub last_name: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "Email ID")]
    pub email: String,

    #[serde(rename = "Phone Number")]
    pub phone: String,
}

/// Which field collision blocked an add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateKind {
    Email,
    Phone,
    Name,
}

impl fmt::Display for DuplicateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicateKind::Email => write!(f, "email"),
            DuplicateKind::Phone => write!(f, "phone number"),
            DuplicateKind::Name => write!(f, "name"),
        }
    }
}

impl Contact {
    pub fn new(
        first_name: String,
        last_name: String,
        address: String,
        email: String,
        phone: String,
    ) -> Self {
        Contact {
            first_name,
            last_name,
            address,
            email,
            phone,
        }
    }

    pub fn has_empty_field(&self) -> bool {
        self.first_name.is_empty()
            || self.last_name.is_empty()
            || self.address.is_empty()
            || self.email.is_empty()
            || self.phone.is_empty()
    }
}

// Duplicate detection compares normalized values, not raw input:
// email and names are trimmed and case-insensitive, phone is trimmed exact.

pub fn norm_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn norm_phone(phone: &str) -> String {
    phone.trim().to_string()
}

pub fn norm_name(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn email_matches(a: &str, b: &str) -> bool {
    norm_email(a) == norm_email(b)
}
