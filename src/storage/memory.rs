use std::cell::RefCell;
use std::rc::Rc;

use super::ContactStorage;
use crate::domain::contact::Contact;
use crate::errors::AppError;

/// In-memory backend for unit tests and benches. Shares its data through
/// a handle so a test can inspect what the book last saved.
pub struct MemStorage {
    data: Rc<RefCell<Vec<Contact>>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            data: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: Rc::new(RefCell::new(contacts)),
        }
    }

    pub fn handle(&self) -> Rc<RefCell<Vec<Contact>>> {
        Rc::clone(&self.data)
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStorage for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }
}
