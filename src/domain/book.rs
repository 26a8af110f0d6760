use crate::domain::contact::{
    email_matches, norm_email, norm_name, norm_phone, Contact, DuplicateKind,
};
use crate::errors::AppError;
use crate::storage::{self, ContactStorage};
use crate::validation::{validate_email, validate_phone};

/// In-memory contact collection plus its storage backend. Insertion order
/// is preserved; every accepted mutation rewrites the backing file in full,
/// so the collection always reflects the last successful save.
pub struct ContactBook {
    contacts: Vec<Contact>,
    storage: Box<dyn ContactStorage>,
}

impl ContactBook {
    /// Open the book against the configured CSV path (or `path` if given).
    pub fn open(path: Option<&str>) -> Result<Self, AppError> {
        let storage = storage::parse_storage(path)?;
        Self::with_storage(storage)
    }

    pub fn with_storage(storage: Box<dyn ContactStorage>) -> Result<Self, AppError> {
        let contacts = storage.load()?;
        Ok(Self { contacts, storage })
    }

    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    /// Exact-match lookup by the stored email string.
    pub fn find(&self, email: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.email == email)
    }

    /// First field collision against the existing collection, checked one
    /// kind at a time: every record for email, then phone, then name pair.
    /// Only the highest-priority kind is reported even if several collide.
    pub fn find_duplicate(
        &self,
        email: &str,
        phone: &str,
        first_name: &str,
        last_name: &str,
    ) -> Option<DuplicateKind> {
        let email = norm_email(email);
        if self.contacts.iter().any(|c| norm_email(&c.email) == email) {
            return Some(DuplicateKind::Email);
        }

        let phone = norm_phone(phone);
        if self.contacts.iter().any(|c| norm_phone(&c.phone) == phone) {
            return Some(DuplicateKind::Phone);
        }

        let (first, last) = (norm_name(first_name), norm_name(last_name));
        if self
            .contacts
            .iter()
            .any(|c| norm_name(&c.first_name) == first && norm_name(&c.last_name) == last)
        {
            return Some(DuplicateKind::Name);
        }

        None
    }

    pub fn add(&mut self, candidate: Contact) -> Result<(), AppError> {
        if candidate.has_empty_field() {
            return Err(AppError::MissingFields);
        }

        if !validate_email(&candidate.email) {
            return Err(AppError::InvalidEmail(candidate.email));
        }

        if !validate_phone(&candidate.phone)? {
            return Err(AppError::InvalidPhone(candidate.phone));
        }

        if let Some(kind) = self.find_duplicate(
            &candidate.email,
            &candidate.phone,
            &candidate.first_name,
            &candidate.last_name,
        ) {
            return Err(AppError::Duplicate(kind));
        }

        self.contacts.push(candidate);

        if let Err(err) = self.storage.save(&self.contacts) {
            self.contacts.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Replace the five fields of the contact selected by `target_email`,
    /// keeping its position. Unlike `add`, this does not re-check email
    /// format and only cross-checks the email against other records; the
    /// asymmetry matches the behavior existing data was written under.
    pub fn update(&mut self, target_email: &str, edited: Contact) -> Result<(), AppError> {
        let position = self
            .contacts
            .iter()
            .position(|c| c.email == target_email)
            .ok_or(AppError::NotFound("Contact".to_string()))?;

        if edited.has_empty_field() {
            return Err(AppError::MissingFields);
        }

        if !validate_phone(&edited.phone)? {
            return Err(AppError::InvalidPhone(edited.phone));
        }

        if !email_matches(&edited.email, target_email) {
            let taken = self
                .contacts
                .iter()
                .enumerate()
                .any(|(i, c)| i != position && email_matches(&c.email, &edited.email));
            if taken {
                return Err(AppError::Duplicate(DuplicateKind::Email));
            }
        }

        let previous = std::mem::replace(&mut self.contacts[position], edited);

        if let Err(err) = self.storage.save(&self.contacts) {
            self.contacts[position] = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn delete(&mut self, target_email: &str) -> Result<(), AppError> {
        let position = self
            .contacts
            .iter()
            .position(|c| c.email == target_email)
            .ok_or(AppError::NotFound("Contact".to_string()))?;

        let removed = self.contacts.remove(position);

        if let Err(err) = self.storage.save(&self.contacts) {
            self.contacts.insert(position, removed);
            return Err(err);
        }
        Ok(())
    }
}
